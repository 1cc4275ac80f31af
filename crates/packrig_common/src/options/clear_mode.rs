use std::fmt;

use serde::de::{Deserializer, Visitor};

/// What to delete from the output directory before a production build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearMode {
  /// Remove the whole directory tree and recreate it empty.
  All,
  /// Remove only entries matching a glob, scoped to the output directory.
  Matching(String),
}

impl From<&str> for ClearMode {
  fn from(value: &str) -> Self {
    Self::Matching(value.to_string())
  }
}

impl ClearMode {
  /// Field-level deserializer: `true` enables full clearing, a string scopes
  /// it to a glob, and `false` disables the step entirely.
  pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct ClearModeVisitor;

    impl Visitor<'_> for ClearModeVisitor {
      type Value = Option<ClearMode>;

      fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean or a glob string")
      }

      fn visit_bool<E: serde::de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(value.then_some(ClearMode::All))
      }

      fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Some(ClearMode::Matching(value.to_string())))
      }
    }

    deserializer.deserialize_any(ClearModeVisitor)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use serde_json::json;

  #[derive(Deserialize, Default)]
  #[serde(default)]
  struct Wrapper {
    #[serde(deserialize_with = "ClearMode::deserialize_opt")]
    clear: Option<ClearMode>,
  }

  #[test]
  fn bool_and_glob_forms() {
    let on: Wrapper = serde_json::from_value(json!({"clear": true})).expect("true");
    assert_eq!(on.clear, Some(ClearMode::All));

    let off: Wrapper = serde_json::from_value(json!({"clear": false})).expect("false");
    assert_eq!(off.clear, None);

    let glob: Wrapper = serde_json::from_value(json!({"clear": "*.map"})).expect("glob");
    assert_eq!(glob.clear, Some(ClearMode::Matching("*.map".to_string())));

    let absent: Wrapper = serde_json::from_value(json!({})).expect("absent");
    assert_eq!(absent.clear, None);
  }
}
