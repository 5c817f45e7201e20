//! HTML tag builders for linked and inlined stylesheets and scripts.

use crate::attributes::Attributes;

/// `onload` handler that swaps a preloaded stylesheet into an active one.
pub const PRELOAD_ONLOAD: &str = "this.onload=null;this.rel='stylesheet'";

/// Build a `<link>` tag pointing at `url`.
///
/// A `rel="stylesheet"` default is applied unless the caller supplies its own `rel`.
pub fn link_css_tag(url: &str, attributes: &Attributes) -> String {
  let attributes = if attributes.contains("rel") {
    attributes.clone()
  } else {
    Attributes::new().set("rel", "stylesheet").merge(attributes.clone())
  };
  format!("<link {} href=\"{url}\">", attributes.render())
}

/// Attributes applied by [`preload_css_tag`] before caller overrides.
pub fn preload_defaults() -> Attributes {
  Attributes::new()
    .set("rel", "preload")
    .set("as", "style")
    .set("onload", PRELOAD_ONLOAD)
}

/// Build a `<link>` tag that preloads a stylesheet and activates it once loaded.
pub fn preload_css_tag(url: &str, attributes: &Attributes) -> String {
  link_css_tag(url, &preload_defaults().merge(attributes.clone()))
}

/// Build a `<script>` tag loading `url`.
pub fn link_js_tag(url: &str, attributes: &Attributes) -> String {
  format!(
    "<script {}type=\"text/javascript\" src=\"{url}\"></script>",
    leading(attributes)
  )
}

/// Wrap stylesheet contents in a `<style>` block.
pub fn inline_css_tag(contents: &str) -> String {
  format!(
    r#"<style type="text/css">
    {contents}
</style>"#
  )
}

/// Wrap script contents in a `<script>` block.
pub fn inline_js_tag(contents: &str) -> String {
  format!(
    r#"<script type="text/javascript">
    {contents}
</script>"#
  )
}

fn leading(attributes: &Attributes) -> String {
  if attributes.is_empty() {
    String::new()
  } else {
    format!("{} ", attributes.render())
  }
}
