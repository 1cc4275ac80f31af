use std::fmt;

use serde::de::{Deserialize, Deserializer, Visitor};

/// Cache-busting strategy for production filenames. `Len` truncates the
/// digest placeholder to a fixed number of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashMode {
  #[default]
  Off,
  On,
  Len(u32),
}

impl HashMode {
  pub fn is_enabled(self) -> bool {
    !matches!(self, Self::Off)
  }
}

impl From<bool> for HashMode {
  fn from(value: bool) -> Self {
    if value { Self::On } else { Self::Off }
  }
}

impl From<u32> for HashMode {
  fn from(value: u32) -> Self {
    Self::Len(value)
  }
}

impl<'de> Deserialize<'de> for HashMode {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct HashModeVisitor;

    impl Visitor<'_> for HashModeVisitor {
      type Value = HashMode;

      fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean or a hash length")
      }

      fn visit_bool<E: serde::de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(HashMode::from(value))
      }

      fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Self::Value, E> {
        u32::try_from(value)
          .map(HashMode::Len)
          .map_err(|_| E::custom(format!("hash length {value} is out of range")))
      }

      fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u32::try_from(value)
          .map(HashMode::Len)
          .map_err(|_| E::custom(format!("hash length {value} is out of range")))
      }
    }

    deserializer.deserialize_any(HashModeVisitor)
  }
}
