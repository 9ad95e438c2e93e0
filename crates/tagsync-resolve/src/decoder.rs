//! Frame payload decoding.

use tagsync_hardware::Frame;

/// Capability: extract a machine-readable code from a captured frame.
///
/// `None` is the capture loop's normal idle state ("no code visible
/// yet"), never an error.
pub trait CodeDecoder: Send + Sync {
    /// Attempt to decode a code string from a frame.
    fn decode(&self, frame: &Frame) -> Option<String>;
}

/// Decoder for emulated cameras whose frames carry the code as UTF-8 text.
///
/// The mock and console camera backends produce frames whose payload IS
/// the encoded string; this decoder trims it and rejects empty or
/// non-UTF-8 payloads.
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    _private: (),
}

impl Utf8Decoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CodeDecoder for Utf8Decoder {
    fn decode(&self, frame: &Frame) -> Option<String> {
        if frame.is_empty() {
            return None;
        }

        std::str::from_utf8(frame.payload())
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}
