//! Driver for simulated sectors.
//!
//! `tactics-runtime` is the imperative shell around `tactics-core`. It turns
//! loaded content into a [`Sector`](tactics_core::Sector), attaches bot
//! behaviour sources to both sides, and steps turns until the fight is
//! decided or a limit is hit.
//!
//! # Modules
//!
//! - [`bot`]: behaviour source for computer-controlled sides
//! - [`scenario`]: sector setup from layouts and scheme catalogs
//! - [`runner`]: the turn loop and its stop conditions
//! - [`config`]: runner settings loaded from TOML
//! - [`logging`]: `tracing` subscriber bootstrap
pub mod bot;
pub mod config;
pub mod error;
pub mod logging;
pub mod runner;
pub mod scenario;

pub use bot::BotTaskSource;
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use runner::{RunSummary, SectorRunner, StopReason};
pub use scenario::Scenario;
