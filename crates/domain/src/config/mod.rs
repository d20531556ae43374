//! Configuration module for Recordboard
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `subscription`: Which real-time event to listen for
//! - `render`: Output surface and format
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod render;
pub mod root;
pub mod subscription;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use render::{OutputFormat, RenderConfig};
pub use root::{CliOverrides, Config};
pub use subscription::SubscriptionConfig;
