//! Core module - match configuration and process-wide setup
//!
//! # Module Organization
//!
//! - `config` - [`MatchConfig`] and its JSON load/save with default fallback
//! - `error` - [`ConfigError`] and the [`ConfigResult`] alias
//! - `logging` - tracing subscriber installation for binaries

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used items
pub use config::{load_config, read_config, save_config, MatchConfig, SeatConfig};
pub use error::{ConfigError, ConfigResult};
pub use logging::init_tracing;
