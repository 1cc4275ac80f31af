use std::path::{Path, PathBuf};

use tracing::debug;

use packrig_common::{BuildOptions, Entry, OutputSpec};
use packrig_error::{BuildError, BuildResult};
use packrig_utils::path_ext::PathExt;

/// The canonical entry/output pair plus the base directory everything was
/// resolved against.
pub(crate) struct NormalizedIo {
  pub entry: Entry,
  pub output: OutputSpec,
  pub cwd: PathBuf,
}

/// Canonicalizes the `in`/`out` shorthand forms. The required-field check
/// runs first, before any other processing.
pub(crate) fn normalize_options(options: &BuildOptions) -> BuildResult<NormalizedIo> {
  let (Some(input), Some(out)) = (&options.input, &options.output) else {
    return Err(BuildError::MissingOption);
  };

  let cwd = match &options.cwd {
    Some(cwd) => cwd.clone(),
    None => std::env::current_dir()?,
  };

  let entry = match input {
    Entry::Single(path) => Entry::Single(Path::new(path).absolutize_to_string(&cwd)),
    Entry::List(paths) => {
      Entry::List(paths.iter().map(|path| Path::new(path).absolutize_to_string(&cwd)).collect())
    }
    Entry::Named(bundles) => Entry::Named(
      bundles
        .iter()
        .map(|(name, path)| (name.clone(), Path::new(path).absolutize_to_string(&cwd)))
        .collect(),
    ),
  };

  let dir = Path::new(out.path.as_deref().unwrap_or("./dist")).absolutize_to_string(&cwd);
  debug!(out_dir = %dir, "normalized entry and output");

  let output = OutputSpec {
    path: format!("{dir}/"),
    filename: out.filename.clone(),
    css_filename: out.css_filename.clone(),
    public_path: out.public_path.clone().unwrap_or_else(|| "/".to_string()),
  };

  Ok(NormalizedIo { entry, output, cwd })
}
