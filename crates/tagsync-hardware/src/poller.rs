//! Bounded hardware polling with fault backoff.

use crate::error::Result;
use crate::gate::TimeoutGate;
use crate::traits::{NfcReader, TagEvent};
use std::time::Duration;
use tagsync_core::{CardUid, constants::DEFAULT_READ_TIMEOUT};
use tracing::{debug, warn};

/// Outcome of one poll attempt, as seen by the synchronization engine.
///
/// Device faults never reach the caller: the poller converts them to
/// [`PollOutcome::Empty`] after its backoff sleep. Only the operator abort
/// signal survives as [`PollOutcome::Cancelled`] so the engine can end the
/// whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// A card was read; UID is lowercase hex.
    Card(CardUid),

    /// No card this attempt (timeout, or a fault already paid for with a
    /// backoff sleep).
    Empty,

    /// Operator abort; the run must end.
    Cancelled,
}

/// Wraps an [`NfcReader`] into a bounded, fault-tolerant poll.
///
/// One `poll()` call performs a single connect/read attempt bounded by a
/// fresh [`TimeoutGate`]. If the driver faults, the poller sleeps the full
/// timeout before reporting [`PollOutcome::Empty`] — the backoff keeps a
/// permanently broken reader from spinning the loop at 100% CPU.
///
/// # Examples
///
/// ```no_run
/// use tagsync_hardware::{HardwarePoller, PollOutcome, mock::MockNfcReader};
///
/// # async fn example() {
/// let (reader, _handle) = MockNfcReader::new();
/// let mut poller = HardwarePoller::new(reader);
///
/// if let PollOutcome::Card(uid) = poller.poll().await {
///     println!("card {uid}");
/// }
/// # }
/// ```
#[derive(Debug)]
pub struct HardwarePoller<R: NfcReader> {
    reader: R,
    timeout: Duration,
}

impl<R: NfcReader> HardwarePoller<R> {
    /// Create a poller with the default 2 second budget.
    pub fn new(reader: R) -> Self {
        Self::with_timeout(reader, DEFAULT_READ_TIMEOUT)
    }

    /// Create a poller with an explicit per-attempt budget.
    pub fn with_timeout(reader: R, timeout: Duration) -> Self {
        Self { reader, timeout }
    }

    /// The per-attempt budget.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Perform one bounded poll attempt.
    ///
    /// Holds the reader exclusively (via the `&mut` borrow) for the
    /// duration of the call. Never blocks longer than the configured
    /// timeout on the success path; on the fault path it sleeps exactly
    /// one extra timeout as backoff.
    pub async fn poll(&mut self) -> PollOutcome {
        let gate = TimeoutGate::starting_now(self.timeout);

        match self.reader.wait_for_tag(&gate).await {
            Ok(TagEvent::Tag(read)) => match CardUid::from_bytes(&read.uid) {
                Ok(uid) => {
                    debug!(%uid, read_at = %read.read_at, "tag read");
                    PollOutcome::Card(uid)
                }
                Err(e) => {
                    warn!("discarding malformed tag UID: {e}");
                    self.backoff().await;
                    PollOutcome::Empty
                }
            },
            Ok(TagEvent::NoTag) => PollOutcome::Empty,
            Ok(TagEvent::Aborted) => {
                debug!("reader abort signal");
                PollOutcome::Cancelled
            }
            Err(e) => {
                warn!("card read failed: {e}");
                self.backoff().await;
                PollOutcome::Empty
            }
        }
    }

    /// Reader metadata, for startup diagnostics.
    ///
    /// # Errors
    /// Propagates the reader's communication error, if any.
    pub async fn reader_info(&self) -> Result<crate::types::ReaderInfo> {
        self.reader.reader_info().await
    }

    async fn backoff(&self) {
        tokio::time::sleep(self.timeout).await;
    }
}
