use std::fmt;

use serde::Deserialize;

/// An output filename template with `[name]`-style placeholders, e.g.
/// `[name].[chunkhash:8].js`. Placeholder substitution is the bundler's job;
/// this crate only decides which template to emit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct FilenameTemplate(String);

impl FilenameTemplate {
  pub fn new(template: impl Into<String>) -> Self {
    Self(template.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for FilenameTemplate {
  fn from(value: &str) -> Self {
    Self(value.to_string())
  }
}

impl From<String> for FilenameTemplate {
  fn from(value: String) -> Self {
    Self(value)
  }
}

impl fmt::Display for FilenameTemplate {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.0)
  }
}
