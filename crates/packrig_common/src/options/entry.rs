use std::fmt;

use packrig_utils::indexmap::FxIndexMap;
use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

/// What gets bundled. The variant is decided exactly once, at the option
/// boundary; every later stage matches on it instead of re-inspecting shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
  /// A single entry point.
  Single(String),
  /// Ordered entry points, order preserved through canonicalization.
  List(Vec<String>),
  /// Bundle name to entry point, insertion order preserved.
  Named(FxIndexMap<String, String>),
}

impl From<&str> for Entry {
  fn from(value: &str) -> Self {
    Self::Single(value.to_string())
  }
}

impl From<String> for Entry {
  fn from(value: String) -> Self {
    Self::Single(value)
  }
}

impl From<Vec<String>> for Entry {
  fn from(value: Vec<String>) -> Self {
    Self::List(value)
  }
}

impl From<FxIndexMap<String, String>> for Entry {
  fn from(value: FxIndexMap<String, String>) -> Self {
    Self::Named(value)
  }
}

impl<'de> Deserialize<'de> for Entry {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct EntryVisitor;

    impl<'de> Visitor<'de> for EntryVisitor {
      type Value = Entry;

      fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a path, a sequence of paths, or a map of bundle names to paths")
      }

      fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Entry::Single(value.to_string()))
      }

      fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut paths = Vec::new();
        while let Some(path) = seq.next_element::<String>()? {
          paths.push(path);
        }
        Ok(Entry::List(paths))
      }

      fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut bundles = FxIndexMap::default();
        while let Some((name, path)) = map.next_entry::<String, String>()? {
          bundles.insert(name, path);
        }
        Ok(Entry::Named(bundles))
      }
    }

    deserializer.deserialize_any(EntryVisitor)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn string_becomes_single() {
    let entry: Entry = serde_json::from_value(json!("./src/index.js")).expect("entry");
    assert_eq!(entry, Entry::Single("./src/index.js".to_string()));
  }

  #[test]
  fn array_preserves_order() {
    let entry: Entry = serde_json::from_value(json!(["./b.js", "./a.js"])).expect("entry");
    assert_eq!(entry, Entry::List(vec!["./b.js".to_string(), "./a.js".to_string()]));
  }

  #[test]
  fn map_preserves_key_identity() {
    let entry: Entry =
      serde_json::from_value(json!({"app": "./app.js", "admin": "./admin.js"})).expect("entry");
    let Entry::Named(bundles) = entry else { panic!("expected named entry") };
    let names: Vec<_> = bundles.keys().cloned().collect();
    assert_eq!(names, ["app", "admin"]);
  }

  #[test]
  fn scalar_shapes_are_rejected() {
    assert!(serde_json::from_value::<Entry>(json!(42)).is_err());
    assert!(serde_json::from_value::<Entry>(json!(true)).is_err());
    assert!(serde_json::from_value::<Entry>(json!(null)).is_err());
  }
}
