//! Game driver for a host application.
//!
//! Holds the configuration and the live position, decides which side a bot
//! plays, and runs bot searches either inline or on a worker thread.

mod config;
mod controller;

pub use config::{ConfigError, EngineConfig};
pub use controller::{Engine, SearchJob};
