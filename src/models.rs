//! Data structures produced while resolving an asset reference.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Strategy used to embed the version token into an asset URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VersionMode {
  /// Append the token as a `?v=` query parameter.
  #[default]
  Query,
  /// Insert the token into the file name, ahead of the extension.
  Filename,
}

impl VersionMode {
  /// Lowercase name used in configuration files and on the command line.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Query => "query",
      Self::Filename => "filename",
    }
  }
}

impl fmt::Display for VersionMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Asset reference split into its URL parts plus the modification timestamp of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
  /// Directory prefix including its trailing `/`, or empty when the reference has none.
  pub directory: String,
  /// File name without the extension.
  pub stem: String,
  /// Extension without the leading dot.
  pub extension: Option<String>,
  /// Last modification time in whole seconds since the Unix epoch.
  pub modified: i64,
}

impl ResolvedAsset {
  /// Render the cache-busted URL for the requested mode.
  pub fn url(&self, mode: VersionMode) -> String {
    let Self {
      directory,
      stem,
      extension,
      modified,
    } = self;

    match (mode, extension) {
      (VersionMode::Filename, Some(ext)) => format!("{directory}{stem}.{modified}.{ext}"),
      (VersionMode::Filename, None) => format!("{directory}{stem}.{modified}"),
      (VersionMode::Query, Some(ext)) => format!("{directory}{stem}.{ext}?v={modified}"),
      (VersionMode::Query, None) => format!("{directory}{stem}?v={modified}"),
    }
  }
}
