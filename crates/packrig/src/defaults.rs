use serde_json::Value;

use packrig_common::{ClearMode, HashMode};
use packrig_utils::indexmap::FxIndexMap;

/// Baseline values sitting underneath every user option set.
pub(crate) struct SpecDefaults {
  pub is_dev: bool,
  pub hash: HashMode,
  pub devtool: Option<String>,
  pub clear_before_build: Option<ClearMode>,
  pub extra: FxIndexMap<String, Value>,
}

/// A fresh template per invocation. Merging never writes through to shared
/// state, so one invocation cannot leak defaults into the next.
pub(crate) fn default_spec() -> SpecDefaults {
  SpecDefaults {
    is_dev: false,
    hash: HashMode::Off,
    devtool: None,
    clear_before_build: None,
    extra: FxIndexMap::default(),
  }
}
