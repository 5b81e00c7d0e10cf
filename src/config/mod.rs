//! Configuration module for the reddit-video-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Overwrite policy for existing output files
//! - Configuration validation

pub mod loader;
pub mod policy;
pub mod validation;

pub use loader::{Config, FfmpegConfig, HttpConfig, OutputConfig};
pub use policy::OverwritePolicy;
pub use validation::validate_config;
