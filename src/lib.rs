#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod attributes;
pub mod config;
pub mod error;
pub mod includer;
pub mod models;
pub mod resolver;
pub mod tags;

pub use attributes::{Attribute, Attributes};
pub use config::IncluderConfig;
pub use error::{AssetError, AssetResult};
pub use includer::{AssetFunction, AssetFunctions, Includer};
pub use models::{ResolvedAsset, VersionMode};
pub use resolver::{AssetUrlResolver, resolve};
