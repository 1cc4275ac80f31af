use std::path::PathBuf;

use serde_json::Value;

use super::clear_mode::ClearMode;
use super::entry::Entry;
use super::hash_mode::HashMode;
use super::output::OutputSpec;
use crate::loader_rule::LoaderRule;
use crate::package_meta::PackageMeta;
use crate::plugin::ReplaceTarget;
use packrig_utils::indexmap::FxIndexMap;

/// Build mode, selected exactly once per invocation. The two branches are
/// terminal; nothing transitions between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  Dev,
  Production,
}

impl Mode {
  pub fn from_is_dev(is_dev: bool) -> Self {
    if is_dev { Self::Dev } else { Self::Production }
  }

  pub fn is_dev(self) -> bool {
    matches!(self, Self::Dev)
  }
}

/// The fully merged working record for one invocation: defaults overlaid with
/// user options, entry and output replaced by their canonical forms. Owned
/// exclusively by the invocation that built it.
#[derive(Debug, Clone)]
pub struct ResolvedSpec {
  pub entry: Entry,
  pub output: OutputSpec,
  pub mode: Mode,
  pub hash: HashMode,
  pub devtool: Option<String>,
  pub clear_before_build: Option<ClearMode>,
  pub uglify: Option<Value>,
  pub replace: Option<FxIndexMap<String, ReplaceTarget>>,
  pub define: Option<FxIndexMap<String, Value>>,
  pub package: Option<PackageMeta>,
  /// User-declared transform rules, appended after the builtin set.
  pub extra_loaders: Vec<LoaderRule>,
  pub cwd: PathBuf,
  /// Passthrough fields, merged verbatim.
  pub extra: FxIndexMap<String, Value>,
}
