//! Append-only audit log of submission intents.

use std::path::{Path, PathBuf};
use tagsync_core::Pairing;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Line-oriented audit log: one `login,card_uid` line per submission
/// attempt.
///
/// The line is appended BEFORE the remote registry call resolves, so the
/// log records intent, not committed outcomes: a line may exist for a
/// submission that subsequently failed. The file is opened append-create
/// per write, so each line is flushed and closed before the remote call
/// runs.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Create an audit log writing to the given path.
    ///
    /// The file is created lazily on the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the log writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one intent line for a pairing.
    ///
    /// # Errors
    /// Returns the underlying I/O error; the engine treats a failed audit
    /// write as fatal since the log is the only durable trace of a run.
    pub async fn append(&self, pairing: &Pairing) -> std::io::Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;

        let line = format!("{},{}\n", pairing.login, pairing.card);
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        debug!(path = %self.path.display(), %pairing, "audit line appended");
        Ok(())
    }
}
