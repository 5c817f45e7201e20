use std::path::{Path, PathBuf};

use tracing::warn;

use super::containment::is_contained;
use crate::error::{AssetError, AssetResult};

/// Normalise a configured asset directory.
///
/// Trailing separators are dropped while a bare root stays root, so joining an asset
/// reference never produces doubled separators.
pub fn normalise_base_path(path: impl AsRef<Path>) -> PathBuf {
  path.as_ref().components().collect()
}

/// Resolve an asset reference to the file it names below `base`.
///
/// Leading separators on the reference are ignored so `/css/app.css` and `css/app.css`
/// resolve to the same file. Directories do not count as assets. With `enforce_containment`
/// set, a reference that escapes `base` is reported as not found, exactly like a missing file.
pub fn locate_asset(base: &Path, asset_path: &str, enforce_containment: bool) -> AssetResult<PathBuf> {
  let not_found = || AssetError::NotFound {
    asset: asset_path.to_string(),
    base: base.to_path_buf(),
  };

  let relative = asset_path.trim_start_matches(['/', '\\']);
  let candidate = base.join(relative);
  if relative.is_empty() || !candidate.is_file() {
    return Err(not_found());
  }

  if enforce_containment {
    let contained = is_contained(base, &candidate).map_err(|source| AssetError::Io {
      path: candidate.clone(),
      source,
    })?;
    if !contained {
      warn!(
        asset = asset_path,
        base = %base.display(),
        "asset reference escapes the asset directory"
      );
      return Err(not_found());
    }
  }

  Ok(candidate)
}
