//! Content loaders for reading rule data from files.
//!
//! Schemes and map layouts are RON, configuration is TOML. Every loader has a
//! `load(path)` entry point and a `parse` twin used for embedded data.

pub mod config;
pub mod factory;
pub mod map;
pub mod schemes;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use map::{MapLayout, MapLoader, SpawnOwner, SpawnSpec};
pub use schemes::{SchemeFile, SchemeLoader};

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))
}
