mod build_config;
mod loader_rule;
mod options;
mod package_meta;
mod plugin;

pub use packrig_utils::indexmap::FxIndexMap;

pub use crate::{
  build_config::{BuildConfig, ModuleOptions},
  loader_rule::LoaderRule,
  options::{
    BuildOptions, clear_mode::ClearMode, entry::Entry, filename_template::FilenameTemplate,
    hash_mode::HashMode,
    output::{OutputOptions, OutputSpec},
    resolved_spec::{Mode, ResolvedSpec},
  },
  package_meta::{PackageHint, PackageMeta},
  plugin::{ModuleReplacement, PluginDirective, ReplaceFn, ReplaceTarget},
};
