use packrig_common::{BuildConfig, ModuleOptions, ResolvedSpec};

/// The skeleton configuration the remaining stages augment: canonical entry
/// and output wired in, loader and plugin lists still empty.
pub(crate) fn base_config(spec: &ResolvedSpec) -> BuildConfig {
  BuildConfig {
    entry: spec.entry.clone(),
    output: spec.output.clone(),
    module: ModuleOptions::default(),
    plugins: Vec::new(),
    devtool: None,
    extra: spec.extra.clone(),
  }
}
