//! Data-driven rule content and loaders.
//!
//! This crate houses the rule tables of the tactical core and the loaders
//! that read them:
//! - Tactical acts, perks, props and person templates (RON)
//! - Sector layouts with walls and spawn points (RON)
//! - Game configuration (TOML)
//!
//! Loaded schemes end up in a validated [`tactics_core::SchemeCatalog`];
//! they are never part of sector state.

#[cfg(feature = "loaders")]
pub mod builtin;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, MapLayout, MapLoader, SchemeFile, SchemeLoader, SpawnOwner,
    SpawnSpec,
};
