use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Request-scoped temporary file. The file is removed when the guard drops,
/// on every exit path; a failed removal is logged and swallowed, never
/// surfaced to the caller.
pub struct ScopedTempFile {
    path: PathBuf,
}

impl ScopedTempFile {
    /// Reserve a uniquely named path under `dir`. Nothing is written yet.
    pub fn unique(dir: &Path, prefix: &str, extension: &str) -> Self {
        let path = dir.join(format!("{}_{}.{}", prefix, Uuid::new_v4(), extension));
        Self { path }
    }

    /// Take ownership of an existing path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScopedTempFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            // NotFound means the file was never written; nothing to clean up.
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove temporary file"
                );
            }
        }
    }
}
