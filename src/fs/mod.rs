//! Filesystem module.
//!
//! Provides:
//! - Output filename sanitization
//! - Output directory and overwrite handling

pub mod naming;
pub mod paths;

pub use naming::{make_safe_filename, output_stem};
pub use paths::{check_overwrite, ensure_dir, output_path};
