//! DroidScout Core - Configuration and shared types
//!
//! This crate holds the pieces shared between the toolchain locators
//! and the command-line front end: the user configuration file and the
//! configuration error type.

pub mod config;
pub mod error;

pub use config::{AndroidConfig, JavaConfig, ScanConfig, ScoutConfig};
pub use error::{Result, ScoutError};

/// DroidScout version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "DroidScout";
