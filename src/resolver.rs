//! Cache-busted URL resolution for files below an asset directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::asset_paths::{AssetParts, locate_asset, normalise_base_path, split_asset_path};
use crate::error::{AssetError, AssetResult};
use crate::models::{ResolvedAsset, VersionMode};

/// Resolve `asset_path` below `base_path` into a versioned URL.
///
/// Convenience wrapper around [`AssetUrlResolver`] with containment checks enabled.
pub fn resolve(base_path: impl AsRef<Path>, asset_path: &str, mode: VersionMode) -> AssetResult<String> {
  AssetUrlResolver::new(base_path).resolve(asset_path, mode)
}

/// Maps asset references to URLs whose version token follows the file's modification time.
#[derive(Debug, Clone)]
pub struct AssetUrlResolver {
  base_path: PathBuf,
  enforce_containment: bool,
}

impl AssetUrlResolver {
  /// Create a resolver for the provided asset directory.
  pub fn new(base_path: impl AsRef<Path>) -> Self {
    Self {
      base_path: normalise_base_path(base_path),
      enforce_containment: true,
    }
  }

  /// Toggle the check that rejects references escaping the asset directory.
  pub fn with_containment(mut self, enforce: bool) -> Self {
    self.enforce_containment = enforce;
    self
  }

  /// Asset directory references are resolved against.
  pub fn base_path(&self) -> &Path {
    &self.base_path
  }

  /// Locate the file backing `asset_path`.
  pub fn locate(&self, asset_path: &str) -> AssetResult<PathBuf> {
    locate_asset(&self.base_path, asset_path, self.enforce_containment)
  }

  /// Locate the asset and capture everything needed to build its URL.
  pub fn inspect(&self, asset_path: &str) -> AssetResult<ResolvedAsset> {
    let file_path = self.locate(asset_path)?;
    let modified = modified_timestamp(&file_path)?;
    let AssetParts {
      directory,
      stem,
      extension,
    } = split_asset_path(asset_path);

    Ok(ResolvedAsset {
      directory,
      stem,
      extension,
      modified,
    })
  }

  /// Produce the cache-busted URL for `asset_path`.
  pub fn resolve(&self, asset_path: &str, mode: VersionMode) -> AssetResult<String> {
    let asset = self.inspect(asset_path)?;
    let url = asset.url(mode);
    debug!(asset = asset_path, %mode, modified = asset.modified, %url, "resolved asset url");
    Ok(url)
  }

  /// Read the asset contents verbatim.
  pub fn read(&self, asset_path: &str) -> AssetResult<String> {
    let file_path = self.locate(asset_path)?;
    fs::read_to_string(&file_path).map_err(|source| AssetError::Io {
      path: file_path,
      source,
    })
  }
}

/// Last modification time of `path` in whole seconds, negative before the Unix epoch.
fn modified_timestamp(path: &Path) -> AssetResult<i64> {
  let modified = fs::metadata(path)
    .and_then(|metadata| metadata.modified())
    .map_err(|source| AssetError::Io {
      path: path.to_path_buf(),
      source,
    })?;

  Ok(unix_seconds(modified))
}

fn unix_seconds(time: SystemTime) -> i64 {
  match time.duration_since(UNIX_EPOCH) {
    Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
    Err(before) => {
      let before = before.duration();
      let mut seconds = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
      if before.subsec_nanos() > 0 {
        seconds = seconds.saturating_add(1);
      }
      -seconds
    }
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;
  use std::fs::File;
  use std::time::Duration;
  use tempfile::tempdir;

  /// Write `contents` to `base/relative` and pin its modification time.
  pub(crate) fn write_asset(base: &Path, relative: &str, contents: &str, modified: u64) -> PathBuf {
    let path = base.join(relative);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    set_modified(&path, modified);
    path
  }

  pub(crate) fn set_modified(path: &Path, seconds: u64) {
    let file = File::options().write(true).open(path).unwrap();
    file
      .set_modified(UNIX_EPOCH + Duration::from_secs(seconds))
      .unwrap();
  }

  #[test]
  fn query_mode_appends_version_parameter() {
    let dir = tempdir().unwrap();
    write_asset(dir.path(), "css/app.css", "body {}", 1000);

    let url = resolve(dir.path(), "css/app.css", VersionMode::Query).unwrap();
    assert_eq!(url, "css/app.css?v=1000");
  }

  #[test]
  fn filename_mode_inserts_token_before_extension() {
    let dir = tempdir().unwrap();
    write_asset(dir.path(), "app.css", "body {}", 1000);

    let url = resolve(dir.path(), "app.css", VersionMode::Filename).unwrap();
    assert_eq!(url, "app.1000.css");
  }

  #[test]
  fn unchanged_file_yields_identical_url() {
    let dir = tempdir().unwrap();
    write_asset(dir.path(), "js/app.js", "run()", 1234);
    let resolver = AssetUrlResolver::new(dir.path());

    let first = resolver.resolve("js/app.js", VersionMode::Query).unwrap();
    let second = resolver.resolve("js/app.js", VersionMode::Query).unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn modification_changes_only_the_token() {
    let dir = tempdir().unwrap();
    let path = write_asset(dir.path(), "css/app.css", "body {}", 1000);
    let resolver = AssetUrlResolver::new(dir.path());

    let before = resolver.resolve("css/app.css", VersionMode::Filename).unwrap();
    set_modified(&path, 2000);
    let after = resolver.resolve("css/app.css", VersionMode::Filename).unwrap();

    assert_eq!(before, "css/app.1000.css");
    assert_eq!(after, "css/app.2000.css");
  }

  #[test]
  fn keeps_leading_separator_of_reference() {
    let dir = tempdir().unwrap();
    write_asset(dir.path(), "app.js", "", 1000);

    let url = resolve(dir.path(), "/app.js", VersionMode::Query).unwrap();
    assert_eq!(url, "/app.js?v=1000");
  }

  #[test]
  fn current_directory_reference_has_no_directory() {
    let dir = tempdir().unwrap();
    write_asset(dir.path(), "app.css", "", 1000);

    let url = resolve(dir.path(), "./app.css", VersionMode::Query).unwrap();
    assert_eq!(url, "app.css?v=1000");
  }

  #[test]
  fn non_utf8_contents_are_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary.js");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    let err = AssetUrlResolver::new(dir.path()).read("binary.js").unwrap_err();
    assert!(matches!(err, AssetError::Io { ref path, .. } if path.ends_with("binary.js")));
    assert!(!err.is_not_found());
  }

  #[test]
  fn trailing_separator_on_base_is_ignored() {
    let dir = tempdir().unwrap();
    write_asset(dir.path(), "css/app.css", "", 1000);
    let base = format!("{}/", dir.path().display());

    let url = resolve(&base, "css/app.css", VersionMode::Query).unwrap();
    assert_eq!(url, "css/app.css?v=1000");
  }

  #[test]
  fn missing_asset_is_not_found() {
    let dir = tempdir().unwrap();
    let err = resolve(dir.path(), "missing.css", VersionMode::Query).unwrap_err();
    assert!(err.is_not_found());
  }

  #[test]
  fn escaping_reference_is_not_found_unless_disabled() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("public");
    fs::create_dir_all(&base).unwrap();
    write_asset(dir.path(), "shared.css", "", 1000);

    let strict = AssetUrlResolver::new(&base);
    assert!(strict.resolve("../shared.css", VersionMode::Query).unwrap_err().is_not_found());

    let relaxed = AssetUrlResolver::new(&base).with_containment(false);
    assert_eq!(
      relaxed.resolve("../shared.css", VersionMode::Query).unwrap(),
      "../shared.css?v=1000"
    );
  }

  #[test]
  fn reads_contents_verbatim() {
    let dir = tempdir().unwrap();
    write_asset(dir.path(), "inline.js", "console.log(\"hi\");\n", 1000);

    let contents = AssetUrlResolver::new(dir.path()).read("inline.js").unwrap();
    assert_eq!(contents, "console.log(\"hi\");\n");
  }

  #[test]
  fn converts_pre_epoch_times_to_negative_seconds() {
    assert_eq!(unix_seconds(UNIX_EPOCH + Duration::from_secs(5)), 5);
    assert_eq!(unix_seconds(UNIX_EPOCH - Duration::from_secs(5)), -5);
    assert_eq!(unix_seconds(UNIX_EPOCH - Duration::from_millis(1500)), -2);
  }
}
