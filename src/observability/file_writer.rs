//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a file writer that rotates the file when it exceeds a
//! size threshold, keeping a fixed number of backups. This prevents unbounded
//! disk usage for long-lived log files.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Size-rotated append-only log file.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size > 10MB, rotate:
///    - Rename current file to `<name>.<timestamp>`
///    - Create new empty file on the next write
///    - Remove oldest backups beyond 3
///
/// The writer is not internally synchronized; wrap it in a `Mutex` to share it
/// with a `tracing` subscriber.
pub struct RotatingFile {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-opened file handle.
    file: Option<File>,
    /// Bytes in the current file, tracked to avoid a stat per write.
    written: u64,
    max_bytes: u64,
}

impl RotatingFile {
    /// Creates a writer for `file_path`. The file is opened on first write.
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self::with_limit(file_path, MAX_FILE_SIZE_BYTES)
    }

    /// Creates a writer that rotates once the file exceeds `max_bytes`.
    #[must_use]
    pub fn with_limit(file_path: PathBuf, max_bytes: u64) -> Self {
        Self {
            file_path,
            file: None,
            written: 0,
            max_bytes,
        }
    }

    fn open(&mut self) -> io::Result<&mut File> {
        if self.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            self.written = file.metadata().map(|m| m.len()).unwrap_or(0);
            self.file = Some(file);
        }

        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))
    }

    fn check_and_rotate(&mut self) -> io::Result<()> {
        if self.file.is_some() && self.written > self.max_bytes {
            self.file = None;
            self.rotate_files()?;
        } else if self.file.is_none() {
            if let Ok(metadata) = fs::metadata(&self.file_path) {
                if metadata.len() > self.max_bytes {
                    self.rotate_files()?;
                }
            }
        }
        Ok(())
    }

    /// Renames the current file to a timestamped backup and prunes old backups.
    ///
    /// Backups are named `<original_name>.<unix_timestamp_nanos>`.
    fn rotate_files(&mut self) -> io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();

        let mut backup_name = self.file_path.clone().into_os_string();
        backup_name.push(format!(".{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup_name))?;
        }
        self.written = 0;

        self.cleanup_old_backups()
    }

    /// Removes backups beyond the retention limit, newest kept.
    ///
    /// Individual deletion errors are ignored so cleanup continues.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;

        let file_name = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;
        let prefix = format!("{file_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Suffixes are fixed-width-ish nanosecond timestamps; sort newest first.
        backups.sort_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.check_and_rotate()?;
        let written = self.open()?.write(buf)?;
        self.written += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("file_path", &self.file_path)
            .field("written", &self.written)
            .finish_non_exhaustive()
    }
}
