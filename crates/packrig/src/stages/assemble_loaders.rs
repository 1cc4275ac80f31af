use packrig_common::{BuildConfig, ResolvedSpec};

use crate::loader_set::loader_set;

/// Appends the builtin rule set, then the user's extra rules. Relative order
/// is never changed; later entries take precedence under the bundler's own
/// matching semantics.
pub(crate) fn assemble_loaders(config: &mut BuildConfig, spec: &ResolvedSpec) {
  config.module.loaders.extend(loader_set(spec));
  config.module.loaders.extend(spec.extra_loaders.iter().cloned());
}
