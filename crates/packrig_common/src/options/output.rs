use std::fmt;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

use super::filename_template::FilenameTemplate;

/// Raw `out` option: either a bare directory string or an object carrying the
/// directory, the public URL prefix, and optional filename template overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputOptions {
  pub path: Option<String>,
  pub public_path: Option<String>,
  pub filename: Option<FilenameTemplate>,
  pub css_filename: Option<FilenameTemplate>,
}

impl From<&str> for OutputOptions {
  fn from(value: &str) -> Self {
    Self { path: Some(value.to_string()), ..Self::default() }
  }
}

impl From<String> for OutputOptions {
  fn from(value: String) -> Self {
    Self { path: Some(value), ..Self::default() }
  }
}

impl<'de> Deserialize<'de> for OutputOptions {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    #[derive(Deserialize, Default)]
    #[serde(rename_all = "camelCase", default)]
    struct OutputObject {
      path: Option<String>,
      public_path: Option<String>,
      filename: Option<FilenameTemplate>,
      css_filename: Option<FilenameTemplate>,
    }

    struct OutputVisitor;

    impl<'de> Visitor<'de> for OutputVisitor {
      type Value = OutputOptions;

      fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an output directory or an output description object")
      }

      fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(OutputOptions::from(value))
      }

      fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let object = OutputObject::deserialize(serde::de::value::MapAccessDeserializer::new(map))?;
        Ok(OutputOptions {
          path: object.path,
          public_path: object.public_path,
          filename: object.filename,
          css_filename: object.css_filename,
        })
      }
    }

    deserializer.deserialize_any(OutputVisitor)
  }
}

/// Canonical output description. `path` is absolute with a trailing slash;
/// the filename templates stay unset until the synthesizer fills them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
  pub path: String,
  pub filename: Option<FilenameTemplate>,
  pub css_filename: Option<FilenameTemplate>,
  pub public_path: String,
}
