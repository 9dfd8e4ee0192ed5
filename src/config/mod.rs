//! Configuration loading and management for the leave engine.
//!
//! This module loads the issuing office metadata, server settings, leave
//! policy and seed holidays from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Issuing office: {}", config.office().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, AppConfigFile, HolidayFile, LeavePolicy, OfficeConfig, ServerConfig};
