//! Flat-directory document store.
//!
//! Markdown documents and uploaded files share a single directory with no
//! subdirectories. Listing order is modification time, newest first,
//! recomputed on every call. Concurrent operations on the same name are
//! left to filesystem atomicity; a rename racing a delete resolves to
//! last-writer-wins or not-found.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::Local;
use tokio::fs;

use jilu_core::error::CoreError;
use jilu_core::filename;

use crate::error::{AppError, AppResult};

/// Async filesystem store rooted at the configured documents directory.
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory all documents live in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `content` to `filename`, overwriting any existing file.
    ///
    /// When no name is given one is derived from the current local time.
    /// Caller-supplied names are written as-is; only [`Self::delete`] and
    /// [`Self::rename`] validate against path traversal.
    pub async fn save(&self, filename: Option<String>, content: &str) -> AppResult<String> {
        let filename = filename
            .unwrap_or_else(|| format!("{}.md", Local::now().format("%Y-%m-%d-%H-%M-%S")));

        fs::write(self.root.join(&filename), content)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to write document: {e}")))?;

        Ok(filename)
    }

    /// Read a document's content.
    pub async fn load(&self, filename: &str) -> AppResult<String> {
        match fs::read_to_string(self.root.join(filename)).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(not_found(filename)),
            Err(e) => Err(AppError::InternalError(format!(
                "Failed to read document: {e}"
            ))),
        }
    }

    /// List all visible filenames, most recently modified first.
    ///
    /// Names starting with `.` are skipped.
    pub async fn list(&self) -> AppResult<Vec<String>> {
        let mut read_dir = fs::read_dir(&self.root)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to read documents dir: {e}")))?;

        let mut entries: Vec<(String, SystemTime)> = Vec::new();
        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to read documents dir: {e}")))?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            let modified = entry
                .metadata()
                .await
                .and_then(|m| m.modified())
                .map_err(|e| AppError::InternalError(format!("Failed to stat {name}: {e}")))?;
            entries.push((name, modified));
        }

        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(entries.into_iter().map(|(name, _)| name).collect())
    }

    /// Remove a document. The name must pass the traversal guard.
    pub async fn delete(&self, filename: &str) -> AppResult<()> {
        if !filename::is_safe(filename) {
            return Err(AppError::Core(CoreError::InvalidName(filename.to_string())));
        }

        match fs::remove_file(self.root.join(filename)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(not_found(filename)),
            Err(e) => Err(AppError::InternalError(format!(
                "Failed to delete document: {e}"
            ))),
        }
    }

    /// Rename `old` to `new`, overwriting any existing file at `new`.
    ///
    /// Both names must pass the traversal guard.
    pub async fn rename(&self, old: &str, new: &str) -> AppResult<()> {
        if !filename::is_safe(old) || !filename::is_safe(new) {
            return Err(AppError::Core(CoreError::InvalidName(format!(
                "{old} -> {new}"
            ))));
        }

        match fs::rename(self.root.join(old), self.root.join(new)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(not_found(old)),
            Err(e) => Err(AppError::InternalError(format!(
                "Failed to rename document: {e}"
            ))),
        }
    }

    /// Store an uploaded file under a sanitized version of the client's
    /// filename. Returns the name actually used.
    pub async fn store_upload(&self, client_name: &str, data: &[u8]) -> AppResult<String> {
        let stored = filename::sanitize(client_name);
        if stored.is_empty() {
            return Err(AppError::Core(CoreError::BadRequest(
                "invalid filename".to_string(),
            )));
        }

        fs::write(self.root.join(&stored), data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

        Ok(stored)
    }
}

fn not_found(name: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "File",
        name: name.to_string(),
    })
}
