/// Asset reference split into the pieces a versioned URL is assembled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetParts {
  /// Directory prefix including the trailing `/`; `/` for root and empty when absent.
  pub directory: String,
  /// File name without its extension.
  pub stem: String,
  /// Extension without the leading dot.
  pub extension: Option<String>,
}

/// Split an asset reference into directory, stem and extension.
///
/// The reference is treated as a URL path, so `/` is the only separator regardless of the
/// host platform; backslashes from Windows-style input are normalised first. A leading dot
/// belongs to the stem (`.htaccess` has no extension) and a trailing dot is kept on the stem
/// rather than producing an empty extension. A bare `./` directory is treated as no directory.
pub fn split_asset_path(asset_path: &str) -> AssetParts {
  let normalised = asset_path.replace('\\', "/");

  let (directory, file_name) = match normalised.rfind('/') {
    Some(index) => normalised.split_at(index + 1),
    None => ("", normalised.as_str()),
  };
  let directory = if directory == "./" { "" } else { directory };

  let (stem, extension) = match file_name.rfind('.') {
    Some(index) if index > 0 && index + 1 < file_name.len() => {
      (&file_name[..index], Some(file_name[index + 1..].to_string()))
    }
    _ => (file_name, None),
  };

  AssetParts {
    directory: directory.to_string(),
    stem: stem.to_string(),
    extension,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parts(directory: &str, stem: &str, extension: Option<&str>) -> AssetParts {
    AssetParts {
      directory: directory.into(),
      stem: stem.into(),
      extension: extension.map(Into::into),
    }
  }

  #[test]
  fn splits_nested_reference() {
    assert_eq!(
      split_asset_path("css/vendor/app.min.css"),
      parts("css/vendor/", "app.min", Some("css"))
    );
  }

  #[test]
  fn bare_file_has_empty_directory() {
    assert_eq!(split_asset_path("app.css"), parts("", "app", Some("css")));
  }

  #[test]
  fn current_directory_prefix_is_dropped() {
    assert_eq!(split_asset_path("./app.css"), parts("", "app", Some("css")));
    assert_eq!(split_asset_path("./css/app.css"), parts("./css/", "app", Some("css")));
  }

  #[test]
  fn keeps_root_directory() {
    assert_eq!(split_asset_path("/app.js"), parts("/", "app", Some("js")));
    assert_eq!(split_asset_path("/js/app.js"), parts("/js/", "app", Some("js")));
  }

  #[test]
  fn handles_missing_and_hidden_extensions() {
    assert_eq!(split_asset_path("fonts/LICENSE"), parts("fonts/", "LICENSE", None));
    assert_eq!(split_asset_path(".htaccess"), parts("", ".htaccess", None));
    assert_eq!(split_asset_path("odd."), parts("", "odd.", None));
  }

  #[test]
  fn normalises_backslashes_from_windows_inputs() {
    assert_eq!(split_asset_path("js\\app.js"), parts("js/", "app", Some("js")));
  }
}
