use std::io;
use std::path::{Path, PathBuf};

/// The filesystem surface the synthesis engine touches: probing and clearing
/// the output directory, and reading package metadata. Kept narrow so the
/// output guard can be exercised against arbitrary directories in tests.
pub trait FileSystem {
  fn exists(&self, path: &Path) -> bool;

  fn is_dir(&self, path: &Path) -> bool;

  fn create_dir_all(&self, path: &Path) -> io::Result<()>;

  fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

  fn remove_file(&self, path: &Path) -> io::Result<()>;

  /// Shallow listing of a directory's entries.
  fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

  fn read_to_string(&self, path: &Path) -> io::Result<String>;
}
