use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::de::{Deserialize, Deserializer, Visitor};
use serde_json::Value;

use crate::options::filename_template::FilenameTemplate;
use packrig_utils::indexmap::FxIndexMap;

/// A module-replacement target supplied as a callback instead of a path.
/// Receives the matched resource request and returns the replacement.
pub type ReplaceFn = dyn Fn(&str) -> String + Send + Sync;

/// Where a matched resource request gets redirected.
pub enum ReplaceTarget {
  /// A path, resolved to an absolute one during plugin assembly.
  Path(String),
  /// A callback collaborator, passed through untouched.
  Factory(Arc<ReplaceFn>),
}

impl Clone for ReplaceTarget {
  fn clone(&self) -> Self {
    match self {
      Self::Path(path) => Self::Path(path.clone()),
      Self::Factory(f) => Self::Factory(Arc::clone(f)),
    }
  }
}

impl fmt::Debug for ReplaceTarget {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
      Self::Factory(_) => f.write_str("Factory(..)"),
    }
  }
}

impl PartialEq for ReplaceTarget {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::Path(a), Self::Path(b)) => a == b,
      // Callbacks are opaque; identity is the only meaningful comparison.
      (Self::Factory(a), Self::Factory(b)) => Arc::ptr_eq(a, b),
      _ => false,
    }
  }
}

impl From<&str> for ReplaceTarget {
  fn from(value: &str) -> Self {
    Self::Path(value.to_string())
  }
}

impl From<String> for ReplaceTarget {
  fn from(value: String) -> Self {
    Self::Path(value)
  }
}

impl<'de> Deserialize<'de> for ReplaceTarget {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct TargetVisitor;

    impl Visitor<'_> for TargetVisitor {
      type Value = ReplaceTarget;

      fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a replacement path")
      }

      fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(ReplaceTarget::Path(value.to_string()))
      }
    }

    deserializer.deserialize_str(TargetVisitor)
  }
}

/// One module-replacement directive: requests matching `pattern` (anchored to
/// the whole request) are redirected to `target`.
#[derive(Debug, Clone)]
pub struct ModuleReplacement {
  pub pattern: Regex,
  pub target: ReplaceTarget,
}

impl PartialEq for ModuleReplacement {
  fn eq(&self, other: &Self) -> bool {
    self.pattern.as_str() == other.pattern.as_str() && self.target == other.target
  }
}

/// Opaque plugin-constructor directives for the bundler. The engine computes
/// the parameters; it never looks inside the constructed plugins.
#[derive(Debug, Clone, PartialEq)]
pub enum PluginDirective {
  ModuleReplacement(ModuleReplacement),
  /// Compile-time constant definitions, embedded as one map.
  Define(FxIndexMap<String, Value>),
  /// Duplicate-module elimination.
  Dedupe,
  /// Deterministic module/chunk ordering.
  OccurrenceOrder { prefer_entry: bool },
  /// Minification, parameterized by the caller's opaque options.
  Minify(Option<Value>),
  /// Extract stylesheet output to its own file.
  ExtractCss { filename: FilenameTemplate, all_chunks: bool },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn replace_targets_compare_structurally() {
    assert_eq!(ReplaceTarget::from("./a.js"), ReplaceTarget::from("./a.js"));
    assert_ne!(ReplaceTarget::from("./a.js"), ReplaceTarget::from("./b.js"));

    let factory: Arc<ReplaceFn> = Arc::new(|request| format!("{request}.stub"));
    let a = ReplaceTarget::Factory(Arc::clone(&factory));
    let b = ReplaceTarget::Factory(factory);
    assert_eq!(a, b.clone());
    assert_ne!(a, ReplaceTarget::Factory(Arc::new(|request| request.to_string())));
  }

  #[test]
  fn replacements_compare_by_pattern_text() {
    let a = ModuleReplacement {
      pattern: Regex::new("^config$").expect("regex"),
      target: ReplaceTarget::from("/srv/config.prod.js"),
    };
    let b = ModuleReplacement {
      pattern: Regex::new("^config$").expect("regex"),
      target: ReplaceTarget::from("/srv/config.prod.js"),
    };
    assert_eq!(a, b);
  }
}
