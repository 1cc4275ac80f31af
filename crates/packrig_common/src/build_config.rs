use serde_json::Value;

use crate::loader_rule::LoaderRule;
use crate::options::entry::Entry;
use crate::options::output::OutputSpec;
use crate::plugin::PluginDirective;
use packrig_utils::indexmap::FxIndexMap;

/// The module-rule section of the final configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleOptions {
  pub loaders: Vec<LoaderRule>,
}

/// The bundler-ready configuration object, the engine's sole output. Two
/// invocations with identical options produce structurally identical values.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
  pub entry: Entry,
  pub output: OutputSpec,
  pub module: ModuleOptions,
  pub plugins: Vec<PluginDirective>,
  pub devtool: Option<String>,
  /// Passthrough fields carried over from the options, uninterpreted.
  pub extra: FxIndexMap<String, Value>,
}
