use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde_json::Value;

use packrig_utils::indexmap::FxIndexMap;

/// Package metadata, read from an external source. Only `version` matters to
/// the engine; everything else rides along untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PackageMeta {
  pub version: String,
  #[serde(flatten)]
  pub extra: FxIndexMap<String, Value>,
}

impl PackageMeta {
  pub fn new(version: impl Into<String>) -> Self {
    Self { version: version.into(), extra: FxIndexMap::default() }
  }
}

/// Where package metadata comes from: a metadata file to read, or an
/// already-parsed record.
#[derive(Debug, Clone, PartialEq)]
pub enum PackageHint {
  Path(PathBuf),
  Meta(PackageMeta),
}

impl From<&str> for PackageHint {
  fn from(value: &str) -> Self {
    Self::Path(PathBuf::from(value))
  }
}

impl From<PackageMeta> for PackageHint {
  fn from(value: PackageMeta) -> Self {
    Self::Meta(value)
  }
}

impl<'de> Deserialize<'de> for PackageHint {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct HintVisitor;

    impl<'de> Visitor<'de> for HintVisitor {
      type Value = PackageHint;

      fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a package metadata path or a parsed metadata object")
      }

      fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(PackageHint::Path(PathBuf::from(value)))
      }

      fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let meta = PackageMeta::deserialize(serde::de::value::MapAccessDeserializer::new(map))?;
        Ok(PackageHint::Meta(meta))
      }
    }

    deserializer.deserialize_any(HintVisitor)
  }
}
