//! Temporary stream files.

use std::path::{Path, PathBuf};

/// File name prefix of temporary stream files.
const TEMP_PREFIX: &str = "rvd-";

/// A temporary file owned by one run, removed when dropped.
///
/// Names come from a v4 UUID, so concurrent runs never collide and no post
/// details end up in the shared temp directory.
#[derive(Debug)]
pub struct TempArtifact {
    path: PathBuf,
}

impl TempArtifact {
    /// Reserve a new path in `dir`. The file itself is created by the writer.
    pub fn in_dir(dir: &Path) -> Self {
        let name = format!("{}{}", TEMP_PREFIX, uuid::Uuid::new_v4().simple());
        Self {
            path: dir.join(name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!("Removed temporary file {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                "Failed to remove temporary file {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}
