//! Configuration loader describing where assets live and how URLs are versioned.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::includer::Includer;
use crate::models::VersionMode;

/// File name searched for by [`IncluderConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "asset_includer.json";

/// Discoverable configuration for an [`Includer`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IncluderConfig {
  /// Asset directory, relative to the directory the configuration was found in.
  pub asset_dir: String,
  /// Strategy used to embed the version token.
  pub version_mode: VersionMode,
  /// Reject references that resolve outside the asset directory.
  pub enforce_containment: bool,
}

impl Default for IncluderConfig {
  fn default() -> Self {
    Self {
      asset_dir: "public".into(),
      version_mode: VersionMode::Query,
      enforce_containment: true,
    }
  }
}

impl IncluderConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// When the configuration file does not exist or fails to parse we fall back to default
  /// values so callers can keep rendering with sensible assumptions.
  pub fn discover(root: &Path) -> Self {
    let candidate = root.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
  }

  /// Asset directory resolved against `root`. Absolute directories are kept as-is.
  pub fn asset_dir_path(&self, root: &Path) -> PathBuf {
    root.join(&self.asset_dir)
  }

  /// Build an includer rooted at `root`.
  pub fn into_includer(self, root: &Path) -> Includer {
    Includer::new(self.asset_dir_path(root), self.version_mode)
      .with_containment(self.enforce_containment)
  }
}
