use std::path::Path;

use packrig_common::PackageMeta;
use packrig_error::{BuildError, BuildResult};
use packrig_fs::FileSystem;

/// Reads and parses package metadata from `path`. Both read and parse
/// failures abort the invocation.
pub(crate) fn read_package_meta<Fs: FileSystem>(fs: &Fs, path: &Path) -> BuildResult<PackageMeta> {
  let source = fs.read_to_string(path)?;
  serde_json::from_str(&source)
    .map_err(|source| BuildError::PackageParse { path: path.to_path_buf(), source })
}
