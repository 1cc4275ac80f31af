use serde::Deserialize;

/// One file-type transform rule. Rules form an ordered sequence; later
/// entries take precedence under the bundler's own matching semantics, so the
/// engine never reorders them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoaderRule {
  /// Resource test, a regex over the request path.
  pub test: String,
  /// Transform chain, applied right to left by the bundler.
  pub loaders: Vec<String>,
  pub exclude: Option<String>,
  /// Route this rule's output through the stylesheet extraction plugin.
  pub extract: bool,
}

impl LoaderRule {
  pub fn new(test: impl Into<String>, loaders: &[&str]) -> Self {
    Self {
      test: test.into(),
      loaders: loaders.iter().map(ToString::to_string).collect(),
      exclude: None,
      extract: false,
    }
  }
}
