//! Enum wrappers for hardware device dispatch.
//!
//! Native `async fn` in traits (RPITIT, Edition 2024) is not object-safe,
//! so runtime backend selection cannot use `Box<dyn NfcReader>`. These
//! enums provide concrete type dispatch instead: zero-cost, type-safe, and
//! open to new backends behind feature flags.

use crate::console::{ConsoleCamera, ConsoleReader};
use crate::error::HardwareError;
use crate::gate::TimeoutGate;
use crate::mock::{MockCamera, MockNfcReader};
use crate::traits::{CameraDevice, NfcReader, TagEvent};
use crate::types::{Frame, ReaderInfo};
use crate::Result;

/// Enum wrapper for NFC reader dispatch.
///
/// # Examples
///
/// ```
/// use tagsync_hardware::devices::AnyNfcReader;
///
/// let reader = AnyNfcReader::open("console").unwrap();
/// assert!(AnyNfcReader::open("usb:072f:2200").is_err());
/// ```
#[derive(Debug)]
#[non_exhaustive]
pub enum AnyNfcReader {
    /// Scripted reader for tests.
    Mock(MockNfcReader),

    /// Interactive emulated reader (operator types UIDs).
    Console(ConsoleReader),
    // TODO(hardware-pcsc): PC/SC-backed variant for ACR122U-class readers,
    // gated behind the `hardware-pcsc` feature.
}

impl AnyNfcReader {
    /// Open a reader backend by locator.
    ///
    /// # Errors
    /// Returns a configuration error for locators with no compiled-in
    /// backend. Mock readers are handle-scripted and cannot be opened by
    /// locator.
    pub fn open(locator: &str) -> Result<Self> {
        match locator {
            "console" => Ok(Self::Console(ConsoleReader::new())),
            other => Err(HardwareError::configuration(format!(
                "unsupported reader locator '{other}' (available: console)"
            ))),
        }
    }
}

impl NfcReader for AnyNfcReader {
    async fn wait_for_tag(&mut self, gate: &TimeoutGate) -> Result<TagEvent> {
        match self {
            Self::Mock(device) => device.wait_for_tag(gate).await,
            Self::Console(device) => device.wait_for_tag(gate).await,
        }
    }

    async fn reader_info(&self) -> Result<ReaderInfo> {
        match self {
            Self::Mock(device) => device.reader_info().await,
            Self::Console(device) => device.reader_info().await,
        }
    }
}

/// Enum wrapper for camera dispatch.
#[derive(Debug)]
#[non_exhaustive]
pub enum AnyCamera {
    /// Scripted camera for tests.
    Mock(MockCamera),

    /// Interactive emulated camera (operator types frame payloads).
    Console(ConsoleCamera),
}

impl AnyCamera {
    /// Open a camera backend by locator.
    ///
    /// # Errors
    /// Returns a configuration error for locators with no compiled-in
    /// backend.
    pub fn open(locator: &str) -> Result<Self> {
        match locator {
            "console" => Ok(Self::Console(ConsoleCamera::new())),
            other => Err(HardwareError::configuration(format!(
                "unsupported camera locator '{other}' (available: console)"
            ))),
        }
    }
}

impl CameraDevice for AnyCamera {
    async fn capture_frame(&mut self) -> Result<Frame> {
        match self {
            Self::Mock(device) => device.capture_frame().await,
            Self::Console(device) => device.capture_frame().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_console_backends() {
        assert!(matches!(
            AnyNfcReader::open("console"),
            Ok(AnyNfcReader::Console(_))
        ));
        assert!(matches!(
            AnyCamera::open("console"),
            Ok(AnyCamera::Console(_))
        ));
    }

    #[test]
    fn test_open_unknown_locator_is_config_error() {
        assert!(matches!(
            AnyNfcReader::open("usb"),
            Err(HardwareError::ConfigurationError { .. })
        ));
        assert!(matches!(
            AnyCamera::open("/dev/video0"),
            Err(HardwareError::ConfigurationError { .. })
        ));
    }

    #[tokio::test]
    async fn test_mock_variant_dispatches() {
        let (reader, handle) = MockNfcReader::new();
        let mut any = AnyNfcReader::Mock(reader);

        handle.present_tag(vec![0x04, 0xAB, 0xCD, 0xEF]).await;

        let gate = TimeoutGate::starting_now(std::time::Duration::from_secs(2));
        let event = any.wait_for_tag(&gate).await.unwrap();
        assert!(matches!(event, TagEvent::Tag(_)));
    }
}
