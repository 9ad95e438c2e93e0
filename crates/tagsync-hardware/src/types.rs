//! Common types shared across hardware device implementations.

/// NFC reader metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderInfo {
    /// Reader name (e.g., "Console Reader", "ACR122U").
    pub name: String,

    /// Locator the reader was opened with (e.g., "console", "usb:072f:2200").
    pub locator: String,
}

impl ReaderInfo {
    /// Create a new ReaderInfo.
    pub fn new(name: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locator: locator.into(),
        }
    }
}

/// One captured camera frame.
///
/// The payload is opaque to the hardware layer; decoding it into a code
/// string is the resolver's concern. An empty payload models "nothing in
/// view yet", which is the capture loop's normal idle state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    payload: Vec<u8>,
}

impl Frame {
    /// Create a frame from a raw payload.
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Create an empty frame.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Raw frame payload.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Whether the frame carries no payload at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_info() {
        let info = ReaderInfo::new("Console Reader", "console");
        assert_eq!(info.name, "Console Reader");
        assert_eq!(info.locator, "console");
    }

    #[test]
    fn test_frame() {
        let frame = Frame::new("a@b.org");
        assert!(!frame.is_empty());
        assert_eq!(frame.payload(), b"a@b.org");

        assert!(Frame::empty().is_empty());
    }
}
