//! Named helper functions exposed to host template engines.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::attributes::Attributes;
use crate::error::{AssetError, AssetResult};
use crate::models::VersionMode;
use crate::resolver::AssetUrlResolver;
use crate::tags;

/// Interface host template engines program against.
///
/// Engines bind each method under its [`AssetFunction`] name, or dispatch dynamically
/// through [`Includer::call`].
pub trait AssetFunctions {
  /// Cache-busted URL for an asset.
  fn asset_url(&self, asset_path: &str) -> AssetResult<String>;
  /// `<link>` tag for a stylesheet.
  fn link_css(&self, asset_path: &str, attributes: &Attributes) -> AssetResult<String>;
  /// `<link>` tag preloading a stylesheet.
  fn preload_css(&self, asset_path: &str, attributes: &Attributes) -> AssetResult<String>;
  /// `<script>` tag for a script file.
  fn link_js(&self, asset_path: &str, attributes: &Attributes) -> AssetResult<String>;
  /// `<style>` block holding the stylesheet contents.
  fn inline_css(&self, asset_path: &str) -> AssetResult<String>;
  /// `<script>` block holding the script contents.
  fn inline_js(&self, asset_path: &str) -> AssetResult<String>;
}

/// Helper names as they are registered in templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFunction {
  /// `assetUrl`
  AssetUrl,
  /// `linkCSS`
  LinkCss,
  /// `preloadCSS`
  PreloadCss,
  /// `linkJS`
  LinkJs,
  /// `inlineCSS`
  InlineCss,
  /// `inlineJS`
  InlineJs,
}

impl AssetFunction {
  /// Every helper, in registration order.
  pub const ALL: [AssetFunction; 6] = [
    Self::AssetUrl,
    Self::LinkCss,
    Self::LinkJs,
    Self::InlineCss,
    Self::InlineJs,
    Self::PreloadCss,
  ];

  /// Template-facing name of the helper.
  pub fn name(self) -> &'static str {
    match self {
      Self::AssetUrl => "assetUrl",
      Self::LinkCss => "linkCSS",
      Self::PreloadCss => "preloadCSS",
      Self::LinkJs => "linkJS",
      Self::InlineCss => "inlineCSS",
      Self::InlineJs => "inlineJS",
    }
  }

  /// Returns `true` for helpers that accept an attribute list.
  pub fn takes_attributes(self) -> bool {
    matches!(self, Self::LinkCss | Self::PreloadCss | Self::LinkJs)
  }
}

impl fmt::Display for AssetFunction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for AssetFunction {
  type Err = AssetError;

  fn from_str(name: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|function| function.name() == name)
      .ok_or_else(|| AssetError::UnknownFunction(name.to_string()))
  }
}

/// Template extension rendering asset URLs and tags from a single asset directory.
#[derive(Debug, Clone)]
pub struct Includer {
  resolver: AssetUrlResolver,
  mode: VersionMode,
}

impl Includer {
  /// Create an includer for the provided asset directory.
  pub fn new(base_path: impl AsRef<Path>, mode: VersionMode) -> Self {
    Self {
      resolver: AssetUrlResolver::new(base_path),
      mode,
    }
  }

  /// Toggle the check that rejects references escaping the asset directory.
  pub fn with_containment(mut self, enforce: bool) -> Self {
    self.resolver = self.resolver.with_containment(enforce);
    self
  }

  /// Versioning strategy applied to generated URLs.
  pub fn mode(&self) -> VersionMode {
    self.mode
  }

  /// Resolver backing this includer.
  pub fn resolver(&self) -> &AssetUrlResolver {
    &self.resolver
  }

  /// Invoke a helper by name. Attributes are ignored by helpers that do not take them.
  pub fn call(
    &self,
    function: AssetFunction,
    asset_path: &str,
    attributes: &Attributes,
  ) -> AssetResult<String> {
    if !function.takes_attributes() && !attributes.is_empty() {
      debug!(%function, asset = asset_path, "ignoring attributes for helper without attributes");
    }

    match function {
      AssetFunction::AssetUrl => self.asset_url(asset_path),
      AssetFunction::LinkCss => self.link_css(asset_path, attributes),
      AssetFunction::PreloadCss => self.preload_css(asset_path, attributes),
      AssetFunction::LinkJs => self.link_js(asset_path, attributes),
      AssetFunction::InlineCss => self.inline_css(asset_path),
      AssetFunction::InlineJs => self.inline_js(asset_path),
    }
  }

  /// Invoke a helper by its template name.
  pub fn call_named(&self, name: &str, asset_path: &str, attributes: &Attributes) -> AssetResult<String> {
    self.call(name.parse()?, asset_path, attributes)
  }
}

impl AssetFunctions for Includer {
  fn asset_url(&self, asset_path: &str) -> AssetResult<String> {
    self.resolver.resolve(asset_path, self.mode)
  }

  fn link_css(&self, asset_path: &str, attributes: &Attributes) -> AssetResult<String> {
    Ok(tags::link_css_tag(&self.asset_url(asset_path)?, attributes))
  }

  fn preload_css(&self, asset_path: &str, attributes: &Attributes) -> AssetResult<String> {
    Ok(tags::preload_css_tag(&self.asset_url(asset_path)?, attributes))
  }

  fn link_js(&self, asset_path: &str, attributes: &Attributes) -> AssetResult<String> {
    Ok(tags::link_js_tag(&self.asset_url(asset_path)?, attributes))
  }

  fn inline_css(&self, asset_path: &str) -> AssetResult<String> {
    Ok(tags::inline_css_tag(&self.resolver.read(asset_path)?))
  }

  fn inline_js(&self, asset_path: &str) -> AssetResult<String> {
    Ok(tags::inline_js_tag(&self.resolver.read(asset_path)?))
  }
}
