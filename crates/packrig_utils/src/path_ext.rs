use std::path::Path;

use sugar_path::SugarPath;

pub trait PathExt {
  fn expect_to_str(&self) -> &str;

  fn expect_to_slash(&self) -> String;

  /// Resolves the path against `base` and renders it as a slash-separated
  /// string, the form every canonicalized entry/output path is kept in.
  fn absolutize_to_string(&self, base: impl AsRef<Path>) -> String;
}

impl PathExt for Path {
  fn expect_to_str(&self) -> &str {
    self.to_str().unwrap_or_else(|| {
      panic!("Failed to convert {:?} to valid utf8 str", self.display());
    })
  }

  fn expect_to_slash(&self) -> String {
    self
      .to_slash()
      .unwrap_or_else(|| panic!("Failed to convert {:?} to slash str", self.display()))
      .into_owned()
  }

  fn absolutize_to_string(&self, base: impl AsRef<Path>) -> String {
    self.absolutize_with(base.as_ref()).expect_to_slash()
  }
}

#[test]
fn test_absolutize_to_string() {
  let base = Path::new("/srv/app");
  assert_eq!(Path::new("./src/index.js").absolutize_to_string(base), "/srv/app/src/index.js");
  assert_eq!(Path::new("../shared/a.js").absolutize_to_string(base), "/srv/shared/a.js");
  assert_eq!(Path::new("/opt/x.js").absolutize_to_string(base), "/opt/x.js");
}
