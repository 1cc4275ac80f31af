mod base_config;
mod defaults;
mod loader_set;
mod package_reader;
mod stages;
mod synthesizer;

pub use crate::synthesizer::{Synthesizer, synthesize};
pub use packrig_common::*;
pub use packrig_error::{BuildError, BuildResult};
pub use packrig_fs::{FileSystem, OsFileSystem};
