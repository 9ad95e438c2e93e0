//! Mock NFC reader implementation for testing and development.
//!
//! Simulates a proximity reader that can be controlled programmatically:
//! tags, driver faults, and operator aborts are all scripted through the
//! handle, so poll timing and failure handling can be tested without
//! physical hardware.

use crate::{
    Result,
    error::HardwareError,
    gate::TimeoutGate,
    traits::{NfcReader, TagEvent, TagRead},
    types::ReaderInfo,
};
use tagsync_core::constants::TAG_POLL_INTERVAL;
use tokio::sync::mpsc;

/// Scripted reader event, queued by [`MockNfcReaderHandle`].
#[derive(Debug)]
enum ReaderScript {
    /// Present a tag with the given UID bytes (validated on read, so
    /// malformed UIDs exercise the device-fault path).
    Tag(Vec<u8>),

    /// Fail the next read with the given error.
    Fault(HardwareError),

    /// Signal an operator abort.
    Abort,
}

/// Mock NFC reader for testing and development.
///
/// The reader honors its [`TimeoutGate`] the way a real driver's retry
/// loop would: it rechecks for a scripted event every
/// [`TAG_POLL_INTERVAL`] until the gate expires, then reports
/// [`TagEvent::NoTag`].
///
/// # Examples
///
/// ```
/// use tagsync_hardware::mock::MockNfcReader;
/// use tagsync_hardware::{TimeoutGate, TagEvent, traits::NfcReader};
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> tagsync_hardware::Result<()> {
///     let (mut reader, handle) = MockNfcReader::new();
///     handle.present_tag(vec![0x04, 0xAB, 0xCD, 0xEF]).await;
///
///     let gate = TimeoutGate::starting_now(Duration::from_secs(2));
///     match reader.wait_for_tag(&gate).await? {
///         TagEvent::Tag(read) => assert_eq!(read.uid, vec![0x04, 0xAB, 0xCD, 0xEF]),
///         other => panic!("unexpected event: {other:?}"),
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockNfcReader {
    script_rx: mpsc::Receiver<ReaderScript>,
    name: String,
}

impl MockNfcReader {
    /// Create a new mock reader with the default name.
    ///
    /// Returns a (reader, handle) pair; the handle scripts the reader.
    pub fn new() -> (Self, MockNfcReaderHandle) {
        Self::with_name("Mock NFC Reader".to_string())
    }

    /// Create a new mock reader with a custom name.
    pub fn with_name(name: String) -> (Self, MockNfcReaderHandle) {
        let (script_tx, script_rx) = mpsc::channel(32);

        let reader = Self { script_rx, name };
        let handle = MockNfcReaderHandle { script_tx };

        (reader, handle)
    }
}

impl NfcReader for MockNfcReader {
    async fn wait_for_tag(&mut self, gate: &TimeoutGate) -> Result<TagEvent> {
        loop {
            if gate.expired() {
                return Ok(TagEvent::NoTag);
            }

            let wait = TAG_POLL_INTERVAL.min(gate.remaining());
            match tokio::time::timeout(wait, self.script_rx.recv()).await {
                Ok(Some(ReaderScript::Tag(uid))) => return Ok(TagEvent::Tag(TagRead::new(uid)?)),
                Ok(Some(ReaderScript::Fault(e))) => return Err(e),
                Ok(Some(ReaderScript::Abort)) => return Ok(TagEvent::Aborted),
                Ok(None) => {
                    return Err(HardwareError::disconnected("mock reader script channel"));
                }
                // Interval elapsed with nothing scripted; recheck the gate.
                Err(_) => {}
            }
        }
    }

    async fn reader_info(&self) -> Result<ReaderInfo> {
        Ok(ReaderInfo::new(self.name.clone(), "mock"))
    }
}

/// Handle for scripting a [`MockNfcReader`].
#[derive(Debug, Clone)]
pub struct MockNfcReaderHandle {
    script_tx: mpsc::Sender<ReaderScript>,
}

impl MockNfcReaderHandle {
    /// Present a tag with the given UID bytes.
    ///
    /// The bytes are validated when the reader consumes them, so queueing
    /// an out-of-range UID exercises the device-fault path.
    pub async fn present_tag(&self, uid: Vec<u8>) {
        let _ = self.script_tx.send(ReaderScript::Tag(uid)).await;
    }

    /// Fail the next read with the given error.
    pub async fn fail(&self, error: HardwareError) {
        let _ = self.script_tx.send(ReaderScript::Fault(error)).await;
    }

    /// Signal an operator abort on the next read.
    pub async fn abort(&self) {
        let _ = self.script_tx.send(ReaderScript::Abort).await;
    }
}
