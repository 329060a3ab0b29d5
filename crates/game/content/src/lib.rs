//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the data files a match is built from:
//! - Fighter roster (data-driven via RON)
//! - Engine configuration (data-driven via TOML)
//!
//! Content is consumed by the runtime and never appears in match state beyond
//! the fighters drawn from it. All loaders use arena-core types directly with
//! serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, RosterLoader};
