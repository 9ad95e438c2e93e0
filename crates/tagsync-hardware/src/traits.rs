//! Hardware device trait definitions.
//!
//! These traits establish the contract between the synchronization engine
//! and its peripherals (NFC reader, camera), enabling substitution between
//! mock, console-emulated, and real hardware implementations.
//!
//! All traits use native `async fn` methods (Rust 1.90 + Edition 2024
//! RPITIT); dynamic dispatch goes through the enum wrappers in
//! [`devices`](crate::devices).

#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::gate::TimeoutGate;
use crate::types::{Frame, ReaderInfo};
use tagsync_core::constants::{MAX_UID_BYTES, MIN_UID_BYTES};

/// A tag successfully read from an NFC reader.
///
/// Carries the raw UID bytes as the driver delivered them plus the read
/// timestamp. Hex encoding and validation into a
/// [`CardUid`](tagsync_core::CardUid) happens in the poller, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRead {
    /// Tag unique identifier (4-10 bytes).
    pub uid: Vec<u8>,

    /// Timestamp when the tag was read.
    pub read_at: chrono::DateTime<chrono::Utc>,
}

impl TagRead {
    /// Create a tag read event with the current timestamp.
    ///
    /// # Errors
    /// Returns an error if the UID length is outside the 4-10 byte range
    /// allowed by ISO 14443.
    pub fn new(uid: Vec<u8>) -> Result<Self> {
        let len = uid.len();
        if !(MIN_UID_BYTES..=MAX_UID_BYTES).contains(&len) {
            return Err(crate::HardwareError::invalid_data(format!(
                "Tag UID length must be {MIN_UID_BYTES}-{MAX_UID_BYTES} bytes, got {len}"
            )));
        }
        Ok(Self {
            uid,
            read_at: chrono::Utc::now(),
        })
    }
}

/// Outcome of one bounded wait on an NFC reader.
///
/// Cancellation travels as a value so callers can distinguish a deliberate
/// operator abort from both "no card yet" and genuine device faults
/// (which use the `Err` channel of [`NfcReader::wait_for_tag`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEvent {
    /// A tag entered the field and was read.
    Tag(TagRead),

    /// No tag appeared before the gate expired.
    NoTag,

    /// The operator aborted the read (reader-level cancel signal).
    Aborted,
}

/// NFC/proximity card reader abstraction.
///
/// A reader waits for a tag to enter its field, bounded by a
/// [`TimeoutGate`]. Exclusive access to the physical device is expressed
/// by the `&mut self` borrow: it is scoped to the call and released on
/// every exit path, including errors.
///
/// # Dynamic dispatch
///
/// Native `async fn` methods are not object-safe; use
/// [`AnyNfcReader`](crate::devices::AnyNfcReader) where the backend is
/// chosen at runtime.
pub trait NfcReader: Send + Sync {
    /// Wait for a tag until one is read or the gate expires.
    ///
    /// The gate is the termination condition for the driver's internal
    /// retry loop; implementations must return [`TagEvent::NoTag`] promptly
    /// once it expires.
    ///
    /// # Errors
    ///
    /// Returns an error on device faults (disconnection, communication
    /// failure, malformed tag data). "No tag yet" and operator abort are
    /// not errors.
    async fn wait_for_tag(&mut self, gate: &TimeoutGate) -> Result<TagEvent>;

    /// Get reader metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if a communication error occurs while querying
    /// the device.
    async fn reader_info(&self) -> Result<ReaderInfo>;
}

/// Imaging device abstraction for visual-code capture.
///
/// Produces a sequence of frames; whether a frame decodes to a payload is
/// the caller's concern (see the decoder in `tagsync-resolve`).
pub trait CameraDevice: Send + Sync {
    /// Capture the next frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the capture device fails or is disconnected.
    /// An empty frame (nothing decodable in view) is a normal `Ok` value.
    async fn capture_frame(&mut self) -> Result<Frame>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_read_valid_lengths() {
        assert!(TagRead::new(vec![0x04; 4]).is_ok());
        assert!(TagRead::new(vec![0x04; 7]).is_ok());
        assert!(TagRead::new(vec![0x04; 10]).is_ok());
    }

    #[test]
    fn test_tag_read_invalid_lengths() {
        assert!(TagRead::new(vec![]).is_err());
        assert!(TagRead::new(vec![0x04; 3]).is_err());
        assert!(TagRead::new(vec![0x04; 11]).is_err());
    }

    #[test]
    fn test_tag_event_matching() {
        let event = TagEvent::Tag(TagRead::new(vec![0x04, 0xA1, 0xB2, 0xC3]).unwrap());
        assert!(matches!(event, TagEvent::Tag(_)));
        assert_ne!(event, TagEvent::NoTag);
        assert_ne!(TagEvent::NoTag, TagEvent::Aborted);
    }
}
