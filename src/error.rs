//! Error type shared by the resolver, the tag emitters and the named-function dispatcher.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type AssetResult<T> = Result<T, AssetError>;

/// Failures surfaced while turning an asset reference into a URL or tag.
#[derive(Debug, Error)]
pub enum AssetError {
  /// The asset does not exist below the base directory.
  ///
  /// Paths that escape the base directory are reported the same way.
  #[error("unable to locate the asset \"{asset}\" in the \"{}\" directory", base.display())]
  NotFound {
    /// Asset reference as supplied by the caller.
    asset: String,
    /// Base directory the asset was looked up in.
    base: PathBuf,
  },
  /// The asset exists but its metadata or contents could not be read.
  #[error("failed to read {}: {source}", path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: std::io::Error,
  },
  /// A helper was requested by a name no helper answers to.
  #[error("unknown asset function `{0}`")]
  UnknownFunction(String),
}

impl AssetError {
  /// Returns `true` for the not-found case, regardless of why the lookup failed.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::NotFound { .. })
  }
}
