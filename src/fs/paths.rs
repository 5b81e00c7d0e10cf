//! Output path and directory management.

use std::path::{Path, PathBuf};

use crate::config::OverwritePolicy;
use crate::error::{Error, Result};

/// Extension of the muxed output container.
pub const OUTPUT_EXTENSION: &str = "mp4";

/// Path of the output file for a stem.
pub fn output_path(directory: &Path, stem: &str) -> PathBuf {
    directory.join(format!("{}.{}", stem, OUTPUT_EXTENSION))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Decide whether writing to `path` may proceed.
///
/// `confirm` is only called for [`OverwritePolicy::Prompt`] when the file
/// already exists.
pub fn check_overwrite<F>(path: &Path, policy: OverwritePolicy, confirm: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<bool>,
{
    if !path.exists() {
        return Ok(());
    }

    let allowed = match policy {
        OverwritePolicy::Always => true,
        OverwritePolicy::Never => false,
        OverwritePolicy::Prompt => confirm(path)?,
    };

    if allowed {
        tracing::debug!("Overwriting {}", path.display());
        Ok(())
    } else {
        Err(Error::Aborted(format!("{} already exists", path.display())))
    }
}
