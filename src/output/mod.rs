//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output gated by an explicit quiet setting
//! - Download progress bars

pub mod console;
pub mod progress;

pub use console::Console;
pub use progress::{create_download_bar, create_spinner};
