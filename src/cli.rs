use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use asset_includer::{AssetFunction, Attribute, Attributes, Includer, IncluderConfig, VersionMode};

/// Render cache-busted asset URLs and include tags.
#[derive(Debug, Parser)]
#[command(name = "asset-includer", version, about)]
pub struct Cli {
  /// Asset directory; overrides the configured one.
  #[arg(long, global = true, value_name = "DIR")]
  pub base: Option<PathBuf>,
  /// Versioning strategy; overrides the configured one.
  #[arg(long, global = true, value_enum)]
  pub mode: Option<VersionMode>,
  /// Configuration file; defaults to `asset_includer.json` in the working directory.
  #[arg(long, global = true, value_name = "FILE")]
  pub config: Option<PathBuf>,
  /// Allow references that resolve outside the asset directory.
  #[arg(long, global = true)]
  pub allow_outside: bool,
  /// Log resolution details to stderr.
  #[arg(short, long, global = true)]
  pub verbose: bool,
  #[command(subcommand)]
  pub command: Command,
}

/// Helper to run.
#[derive(Debug, Subcommand)]
pub enum Command {
  /// Print the cache-busted URL.
  Url(AssetArgs),
  /// Print a stylesheet `<link>` tag.
  LinkCss(TagArgs),
  /// Print a stylesheet preload `<link>` tag.
  PreloadCss(TagArgs),
  /// Print a `<script src>` tag.
  LinkJs(TagArgs),
  /// Print the stylesheet wrapped in a `<style>` block.
  InlineCss(AssetArgs),
  /// Print the script wrapped in a `<script>` block.
  InlineJs(AssetArgs),
}

#[derive(Debug, Args)]
pub struct AssetArgs {
  /// Asset path relative to the asset directory.
  pub path: String,
}

#[derive(Debug, Args)]
pub struct TagArgs {
  /// Asset path relative to the asset directory.
  pub path: String,
  /// Attribute as `name=value` (value parsed as JSON when possible) or a bare `name`.
  #[arg(long = "attr", value_name = "NAME[=VALUE]")]
  pub attrs: Vec<String>,
  /// Raw token emitted unchanged inside the tag.
  #[arg(long = "token", value_name = "TOKEN")]
  pub tokens: Vec<String>,
}

impl Cli {
  /// Render the requested helper output.
  pub fn run(&self) -> Result<String> {
    let includer = self.includer()?;
    let (function, path, attributes) = self.invocation();

    includer
      .call(function, path, &attributes)
      .with_context(|| format!("{function} failed for {path}"))
  }

  fn includer(&self) -> Result<Includer> {
    let (config, root) = match &self.config {
      Some(path) => {
        let config = IncluderConfig::from_path(path)
          .ok_or_else(|| anyhow!("failed to load configuration from {}", path.display()))?;
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        (config, root)
      }
      None => {
        let root = env::current_dir().context("failed to read working directory")?;
        (IncluderConfig::discover(&root), root)
      }
    };

    let base = match &self.base {
      Some(base) => base.clone(),
      None => config.asset_dir_path(&root),
    };
    let mode = self.mode.unwrap_or(config.version_mode);
    let enforce = config.enforce_containment && !self.allow_outside;

    Ok(Includer::new(base, mode).with_containment(enforce))
  }

  fn invocation(&self) -> (AssetFunction, &str, Attributes) {
    match &self.command {
      Command::Url(args) => (AssetFunction::AssetUrl, args.path.as_str(), Attributes::new()),
      Command::InlineCss(args) => (AssetFunction::InlineCss, args.path.as_str(), Attributes::new()),
      Command::InlineJs(args) => (AssetFunction::InlineJs, args.path.as_str(), Attributes::new()),
      Command::LinkCss(args) => (AssetFunction::LinkCss, args.path.as_str(), args.attributes()),
      Command::PreloadCss(args) => (AssetFunction::PreloadCss, args.path.as_str(), args.attributes()),
      Command::LinkJs(args) => (AssetFunction::LinkJs, args.path.as_str(), args.attributes()),
    }
  }
}

impl TagArgs {
  fn attributes(&self) -> Attributes {
    self
      .tokens
      .iter()
      .map(|token| Attribute::Positional(token.clone()))
      .chain(self.attrs.iter().map(|raw| parse_attribute(raw)))
      .collect()
  }
}

fn parse_attribute(raw: &str) -> Attribute {
  match raw.split_once('=') {
    Some((name, value)) => {
      let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
      Attribute::Pair(name.trim().to_string(), value)
    }
    None => Attribute::Flag(raw.trim().to_string()),
  }
}
