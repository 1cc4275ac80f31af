use std::path::Path;

use tracing::{info, warn};

use packrig_common::{ClearMode, ResolvedSpec};
use packrig_error::{BuildError, BuildResult};
use packrig_fs::FileSystem;
use packrig_utils::path_ext::PathExt;

/// Clears the output directory ahead of a production build. The safety check
/// runs before any filesystem mutation: clearing a directory that contains
/// the working directory would delete the invocation's own tree.
pub(crate) fn clear_output<Fs: FileSystem>(fs: &Fs, spec: &ResolvedSpec) -> BuildResult<()> {
  let Some(mode) = &spec.clear_before_build else { return Ok(()) };

  let out_dir = Path::new(&spec.output.path);
  if spec.cwd.starts_with(out_dir) {
    return Err(BuildError::UnsafeClear { dir: out_dir.to_path_buf(), cwd: spec.cwd.clone() });
  }

  match mode {
    ClearMode::Matching(glob) => {
      if !fs.exists(out_dir) {
        fs.create_dir_all(out_dir)?;
      }
      let removed = remove_matching(fs, out_dir, glob)?;
      if removed == 0 {
        warn!(glob = %glob, "output clearing glob matched nothing");
      } else {
        info!(removed, glob = %glob, "cleared matching entries from output directory");
      }
    }
    ClearMode::All => {
      if fs.exists(out_dir) {
        fs.remove_dir_all(out_dir)?;
      }
      fs.create_dir_all(out_dir)?;
      info!(dir = %out_dir.display(), "cleared output directory");
    }
  }

  Ok(())
}

/// Depth-first walk over the output directory. Matching is against
/// slash-separated paths relative to the directory, so it can never reach a
/// sibling tree. Matched directories are removed whole, not descended into.
fn remove_matching<Fs: FileSystem>(fs: &Fs, root: &Path, glob: &str) -> BuildResult<usize> {
  let mut removed = 0;
  let mut pending = vec![root.to_path_buf()];

  while let Some(dir) = pending.pop() {
    for entry in fs.read_dir(&dir)? {
      let Ok(relative) = entry.strip_prefix(root) else { continue };
      let relative = relative.expect_to_slash();

      let is_dir = fs.is_dir(&entry);
      if fast_glob::glob_match(glob, &relative) {
        if is_dir {
          fs.remove_dir_all(&entry)?;
        } else {
          fs.remove_file(&entry)?;
        }
        removed += 1;
      } else if is_dir {
        pending.push(entry);
      }
    }
  }

  Ok(removed)
}
