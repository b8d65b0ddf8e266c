//! Append-only trace file with numbered, size-based rotation.
//!
//! The live file is `<name>.json`. When a write would push it past
//! [`RotationPolicy::max_bytes`], backups shift up one slot
//! (`<name>.1.json` becomes `<name>.2.json` and so on), the live file becomes
//! `<name>.1.json`, and anything past [`RotationPolicy::max_backups`] is
//! deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size limit and retention for a trace file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe line writer with rotation.
pub struct RotatingWriter {
    path: PathBuf,
    policy: RotationPolicy,
    state: Mutex<WriterState>,
}

#[derive(Default)]
struct WriterState {
    file: Option<File>,
    /// Bytes in the live file, read from disk on first open.
    written: u64,
}

impl RotatingWriter {
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            state: Mutex::new(WriterState { file: None, written: 0 }),
        }
    }

    /// Appends `line` plus a newline, rotating first if it would not fit.
    ///
    /// A single line larger than the limit is still written, alone, to a
    /// fresh file.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing, or
    /// [`io::ErrorKind::Other`] if the lock is poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer poisoned: {e}")))?;

        let incoming = line.len() as u64 + 1;

        if state.file.is_none() {
            state.written = fs::metadata(&self.path).map_or(0, |metadata| metadata.len());
        }
        if state.written > 0 && state.written + incoming > self.policy.max_bytes {
            state.file = None;
            self.rotate()?;
            state.written = 0;
        }

        if state.file.is_none() {
            state.file = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let file = state
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file not open"))?;
        writeln!(file, "{line}")?;
        file.flush()?;

        state.written += incoming;
        Ok(())
    }

    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return remove_if_exists(&self.path);
        }

        remove_if_exists(&self.backup_path(self.policy.max_backups))?;
        for n in (1..self.policy.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }
        Ok(())
    }

    /// Path of the n-th backup, `<stem>.<n>.json`.
    #[must_use]
    pub fn backup_path(&self, n: usize) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .map_or_else(|| "trace".into(), |stem| stem.to_string_lossy().into_owned());
        self.path.with_file_name(format!("{stem}.{n}.json"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
