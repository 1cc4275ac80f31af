use std::path::PathBuf;

use thiserror::Error;

/// Every failure mode of one synthesis invocation. All variants are fatal:
/// a failing invocation produces no configuration at all.
#[derive(Debug, Error)]
pub enum BuildError {
  #[error("options must include both `in` and `out`")]
  MissingOption,

  #[error("invalid option: {message}")]
  InvalidOption { message: String },

  #[error(
    "cannot clear output directory {}: it contains the current working directory {}",
    dir.display(),
    cwd.display()
  )]
  UnsafeClear { dir: PathBuf, cwd: PathBuf },

  #[error("filesystem operation failed")]
  Filesystem(#[from] std::io::Error),

  #[error("failed to parse package metadata at {}", path.display())]
  PackageParse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("invalid replacement pattern `{pattern}`")]
  InvalidReplacePattern {
    pattern: String,
    #[source]
    source: regex::Error,
  },
}

impl BuildError {
  pub fn invalid_option(message: impl Into<String>) -> Self {
    Self::InvalidOption { message: message.into() }
  }
}

pub type BuildResult<T> = Result<T, BuildError>;
