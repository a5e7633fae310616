//! Size-rotated, append-only line file.
//!
//! Trace batches are appended one JSON document per line. When the live file
//! grows past the policy's byte limit it is renamed to `<stem>.json.<unix_ts>`
//! and a fresh file is started; only the newest backups are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// When to rotate and how many rotated files survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MB per file, three backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Line writer shared between exporter calls.
///
/// The handle is opened lazily on the first write so that construction never
/// touches the filesystem.
pub struct RotatingFile {
    path: PathBuf,
    policy: RotationPolicy,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            handle: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline, rotating first if the file is over the
    /// limit.
    ///
    /// # Errors
    ///
    /// Fails on a poisoned lock or any filesystem error while rotating,
    /// opening, writing or flushing.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::other(format!("trace file lock poisoned: {e}")))?;

        if self.over_limit() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            let opened = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            *handle = Some(opened);
        }
        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::other("trace file not open"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn over_limit(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.policy.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().timestamp();
        let backup = self.path.with_extension(format!("json.{stamp}"));
        if self.path.exists() {
            fs::rename(&self.path, backup)?;
        }
        self.prune_backups()
    }

    /// Deletes all but the `max_backups` most recently modified backups.
    fn prune_backups(&self) -> io::Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| io::Error::other("trace file has no parent directory"))?;
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::other("trace file name is not valid UTF-8"))?;
        let prefix = format!("{stem}.json.");

        let mut backups: Vec<(Option<std::time::SystemTime>, PathBuf)> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .map(|path| (fs::metadata(&path).and_then(|m| m.modified()).ok(), path))
            .collect();

        backups.sort_by(|a, b| b.cmp(a));
        for (_, stale) in backups.into_iter().skip(self.policy.max_backups) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
