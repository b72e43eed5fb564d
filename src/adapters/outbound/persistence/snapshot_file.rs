use super::Tables;
use crate::shared::error::OrderError;
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Maximum data file size (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// JSON snapshot of the database tables on disk
///
/// Every commit rewrites the whole file through a temporary sibling and an
/// atomic rename, so readers never observe a half-written snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the tables, or empty tables when the file does not exist yet
    ///
    /// # Errors
    /// Returns `StorageError` if the path is a symlink or not a regular file,
    /// exceeds the size limit, or does not contain a valid snapshot.
    pub fn load(&self) -> Result<Tables> {
        let metadata = match fs::symlink_metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No data file yet, starting empty");
                return Ok(Tables::default());
            }
            Err(e) => return Err(self.storage_error(format!("Failed to read metadata: {}", e))),
        };

        if metadata.is_symlink() {
            return Err(self.storage_error(
                "Security: Data file is a symbolic link. For security reasons, symbolic links are not allowed.",
            ));
        }

        if !metadata.is_file() {
            return Err(self.storage_error("Not a regular file"));
        }

        if metadata.len() > MAX_FILE_SIZE {
            return Err(self.storage_error(format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                metadata.len(),
                MAX_FILE_SIZE
            )));
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| self.storage_error(format!("Failed to read file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| self.storage_error(format!("Failed to parse snapshot: {}", e)))
    }

    /// Atomically replaces the snapshot with `tables`
    ///
    /// # Errors
    /// Returns `StorageError` if the parent directory is missing, the target
    /// is a symlink, or the temporary file cannot be written or renamed.
    pub fn write(&self, tables: &Tables) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        };

        if !parent.is_dir() {
            return Err(self.storage_error(format!(
                "Parent directory does not exist: {}",
                parent.display()
            )));
        }

        if let Ok(metadata) = fs::symlink_metadata(&self.path) {
            if metadata.is_symlink() {
                return Err(self.storage_error(
                    "Security: Data file is a symbolic link. For security reasons, writing to symbolic links is not allowed.",
                ));
            }
        }

        let json = serde_json::to_string_pretty(tables)
            .map_err(|e| self.storage_error(format!("Failed to serialize snapshot: {}", e)))?;

        let mut temp = NamedTempFile::new_in(parent)
            .map_err(|e| self.storage_error(format!("Failed to create temporary file: {}", e)))?;
        temp.write_all(json.as_bytes())
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| self.storage_error(format!("Failed to write temporary file: {}", e)))?;
        temp.persist(&self.path)
            .map_err(|e| self.storage_error(format!("Failed to replace data file: {}", e.error)))?;

        debug!(path = %self.path.display(), bytes = json.len(), "Snapshot written");
        Ok(())
    }

    fn storage_error(&self, details: impl Into<String>) -> anyhow::Error {
        OrderError::StorageError {
            path: self.path.clone(),
            details: details.into(),
        }
        .into()
    }
}
