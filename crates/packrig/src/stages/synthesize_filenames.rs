use tracing::debug;

use packrig_common::{FilenameTemplate, HashMode, Mode, ResolvedSpec};
use packrig_error::BuildResult;
use packrig_fs::FileSystem;
use packrig_utils::option_ext::OptionExt;

use crate::package_reader::read_package_meta;

#[derive(Clone, Copy)]
enum ArtifactKind {
  Script,
  Stylesheet,
}

impl ArtifactKind {
  fn ext(self) -> &'static str {
    match self {
      Self::Script => "js",
      Self::Stylesheet => "css",
    }
  }

  /// Script bundles key their digest off the chunk graph; extracted
  /// stylesheets off their own bytes. The two invalidate independently.
  fn hash_placeholder(self) -> &'static str {
    match self {
      Self::Script => "chunkhash",
      Self::Stylesheet => "contenthash",
    }
  }
}

/// Fills in any output filename template the user left unset.
pub(crate) fn synthesize_filenames<Fs: FileSystem>(
  fs: &Fs,
  spec: &mut ResolvedSpec,
) -> BuildResult<()> {
  if spec.output.filename.is_none() {
    let template = build_filename(fs, spec, ArtifactKind::Script)?;
    spec.output.filename = Some(template);
  }
  if spec.output.css_filename.is_none() {
    let template = build_filename(fs, spec, ArtifactKind::Stylesheet)?;
    spec.output.css_filename = Some(template);
  }
  let filename = spec.output.filename.unpack_ref();
  let css_filename = spec.output.css_filename.unpack_ref();
  debug!(%filename, %css_filename, "synthesized output filenames");
  Ok(())
}

fn build_filename<Fs: FileSystem>(
  fs: &Fs,
  spec: &mut ResolvedSpec,
  kind: ArtifactKind,
) -> BuildResult<FilenameTemplate> {
  let ext = kind.ext();
  let template = match (spec.mode, spec.hash) {
    (Mode::Dev, _) => format!("[name].{ext}"),
    (Mode::Production, HashMode::Off) => {
      let version = package_version(fs, spec)?;
      format!("[name].{version}.{ext}")
    }
    (Mode::Production, HashMode::On) => format!("[name].[{}].{ext}", kind.hash_placeholder()),
    (Mode::Production, HashMode::Len(len)) => {
      format!("[name].[{}:{len}].{ext}", kind.hash_placeholder())
    }
  };
  Ok(FilenameTemplate::from(template))
}

/// Version-based naming is the cache-busting fallback for callers who opted
/// out of hashing; it changes per release instead of per build.
fn package_version<Fs: FileSystem>(fs: &Fs, spec: &mut ResolvedSpec) -> BuildResult<String> {
  if spec.package.is_none() {
    let path = spec.cwd.join("package.json");
    spec.package = Some(read_package_meta(fs, &path)?);
  }
  Ok(spec.package.unpack_ref().version.clone())
}
