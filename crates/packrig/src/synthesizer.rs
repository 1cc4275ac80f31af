use packrig_common::{BuildConfig, BuildOptions};
use packrig_error::BuildResult;
use packrig_fs::{FileSystem, OsFileSystem};

use crate::base_config::base_config;
use crate::stages;

/// Synthesizes one bundler configuration from a declarative option set.
///
/// Each invocation owns its working state outright; nothing is shared with or
/// leaks into other invocations. Concurrent invocations targeting the same
/// output directory must be serialized by the caller.
pub struct Synthesizer<Fs: FileSystem = OsFileSystem> {
  options: BuildOptions,
  fs: Fs,
}

impl Synthesizer {
  pub fn new(options: BuildOptions) -> Self {
    Self::with_fs(options, OsFileSystem)
  }
}

impl<Fs: FileSystem> Synthesizer<Fs> {
  pub fn with_fs(options: BuildOptions, fs: Fs) -> Self {
    Self { options, fs }
  }

  pub fn synthesize(self) -> BuildResult<BuildConfig> {
    let Self { options, fs } = self;

    let normalized = stages::normalize_options(&options)?;
    let mut spec = stages::resolve_spec(&fs, options, normalized)?;
    stages::synthesize_filenames(&fs, &mut spec)?;

    let mut config = base_config(&spec);
    stages::assemble_loaders(&mut config, &spec);
    stages::assemble_plugins(&fs, &mut config, &spec)?;

    Ok(config)
  }
}

/// Convenience entry point over the operating system filesystem.
pub fn synthesize(options: BuildOptions) -> BuildResult<BuildConfig> {
  Synthesizer::new(options).synthesize()
}
