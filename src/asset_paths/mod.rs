//! Helpers for locating asset files and splitting asset references into URL parts.
//!
//! The responsibilities are split into focused submodules so that locating a file on disk,
//! checking that it stays inside the asset directory, and splitting the reference into its
//! directory, stem and extension can be tested independently.

mod containment;
mod location;
mod parts;

pub use containment::is_contained;
pub use location::{locate_asset, normalise_base_path};
pub use parts::{AssetParts, split_asset_path};
