//! Shared configuration library for Streamy.
//!
//! Configuration is layered: built-in defaults, then a TOML or JSON file
//! (located via `$STREAMY_CONFIG_PATH`, inline `$STREAMY_CONFIG_JSON`, or a
//! well-known file name in the working directory), then individual
//! environment overrides. `.env` files are honoured through `dotenvy`.

#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigSource};
pub use models::{CatalogConfig, FocusConfig, SpotlightConfig, StreamyConfig};
pub use validation::ConfigError;
