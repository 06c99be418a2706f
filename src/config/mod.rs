//! Configuration loading and management for the Bill Allocation Engine.
//!
//! This module provides functionality to load engine configuration from a
//! YAML file: which split mode applies to tax, tip, and gratuity.
//!
//! # Example
//!
//! ```no_run
//! use split_engine::config::EngineConfig;
//!
//! let config = EngineConfig::load("./config/allocation.yaml").unwrap();
//! let options = config.split_options();
//! ```

mod loader;
mod types;

pub use types::{EngineConfig, SplitsConfig};
