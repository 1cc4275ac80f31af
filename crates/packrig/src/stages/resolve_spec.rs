use std::path::PathBuf;

use packrig_common::{BuildOptions, Mode, PackageHint, ResolvedSpec};
use packrig_error::BuildResult;
use packrig_fs::FileSystem;
use packrig_utils::path_ext::PathExt;

use super::normalize_options::NormalizedIo;
use crate::defaults::default_spec;
use crate::package_reader::read_package_meta;

/// Overlays the user's options on a fresh default template. `entry` and
/// `output` always take the normalizer's canonical forms, never the raw
/// user values.
pub(crate) fn resolve_spec<Fs: FileSystem>(
  fs: &Fs,
  options: BuildOptions,
  normalized: NormalizedIo,
) -> BuildResult<ResolvedSpec> {
  let defaults = default_spec();
  let NormalizedIo { entry, output, cwd } = normalized;

  // An explicit hint is honored eagerly; the `<cwd>/package.json` fallback
  // is read later, only if a version-based filename actually needs it.
  let package = match options.package {
    Some(PackageHint::Meta(meta)) => Some(meta),
    Some(PackageHint::Path(path)) => {
      let path = PathBuf::from(path.absolutize_to_string(&cwd));
      Some(read_package_meta(fs, &path)?)
    }
    None => None,
  };

  let mut extra = defaults.extra;
  extra.extend(options.extra);

  Ok(ResolvedSpec {
    entry,
    output,
    mode: Mode::from_is_dev(options.is_dev.unwrap_or(defaults.is_dev)),
    hash: options.hash.unwrap_or(defaults.hash),
    devtool: options.devtool.or(defaults.devtool),
    clear_before_build: options.clear_before_build.or(defaults.clear_before_build),
    uglify: options.uglify,
    replace: options.replace,
    define: options.define,
    package,
    extra_loaders: options.loaders.unwrap_or_default(),
    cwd,
    extra,
  })
}
