pub mod clear_mode;
pub mod entry;
pub mod filename_template;
pub mod hash_mode;
pub mod output;
pub mod resolved_spec;

use std::path::PathBuf;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use packrig_error::{BuildError, BuildResult};
use packrig_utils::indexmap::FxIndexMap;

use crate::loader_rule::LoaderRule;
use crate::package_meta::PackageHint;
use crate::plugin::ReplaceTarget;
use self::clear_mode::ClearMode;
use self::entry::Entry;
use self::hash_mode::HashMode;
use self::output::OutputOptions;

/// The user-facing option record. Everything is optional at this layer;
/// validation happens when synthesis starts, `in`/`out` first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildOptions {
  #[serde(rename = "in", deserialize_with = "some_entry")]
  pub input: Option<Entry>,
  #[serde(rename = "out")]
  pub output: Option<OutputOptions>,

  /// Base directory for resolving relative paths. Defaults to the process
  /// working directory.
  pub cwd: Option<PathBuf>,

  pub is_dev: Option<bool>,
  pub hash: Option<HashMode>,
  pub devtool: Option<String>,
  #[serde(deserialize_with = "ClearMode::deserialize_opt")]
  pub clear_before_build: Option<ClearMode>,

  /// Opaque minifier parameters, forwarded to the minification plugin.
  pub uglify: Option<Value>,
  pub replace: Option<FxIndexMap<String, ReplaceTarget>>,
  pub define: Option<FxIndexMap<String, Value>>,
  pub package: Option<PackageHint>,
  pub loaders: Option<Vec<LoaderRule>>,

  /// Unrecognized fields, merged into the resolved spec verbatim.
  #[serde(flatten)]
  pub extra: FxIndexMap<String, Value>,
}

impl BuildOptions {
  /// Builds options from a loosely-typed JSON value, the shape the original
  /// declarative surface accepts. Shape errors surface as `InvalidOption`;
  /// missing `in`/`out` are reported later, by the normalizer.
  pub fn from_value(value: Value) -> BuildResult<Self> {
    serde_json::from_value(value).map_err(|err| BuildError::invalid_option(err.to_string()))
  }
}

/// An explicit `in: null` is an invalid shape, not an omission.
fn some_entry<'de, D>(deserializer: D) -> Result<Option<Entry>, D::Error>
where
  D: Deserializer<'de>,
{
  Entry::deserialize(deserializer).map(Some)
}
