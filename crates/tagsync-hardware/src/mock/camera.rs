//! Mock camera implementation for testing and development.

use crate::{Result, error::HardwareError, traits::CameraDevice, types::Frame};
use tokio::sync::mpsc;

/// Mock camera producing scripted frames.
///
/// # Examples
///
/// ```
/// use tagsync_hardware::mock::MockCamera;
/// use tagsync_hardware::traits::CameraDevice;
///
/// #[tokio::main]
/// async fn main() -> tagsync_hardware::Result<()> {
///     let (mut camera, handle) = MockCamera::new();
///     handle.push_frame("a@b.org").await;
///
///     let frame = camera.capture_frame().await?;
///     assert_eq!(frame.payload(), b"a@b.org");
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockCamera {
    frame_rx: mpsc::Receiver<Frame>,
}

impl MockCamera {
    /// Create a new mock camera.
    ///
    /// Returns a (camera, handle) pair; the handle scripts the frames.
    pub fn new() -> (Self, MockCameraHandle) {
        let (frame_tx, frame_rx) = mpsc::channel(32);
        (Self { frame_rx }, MockCameraHandle { frame_tx })
    }
}

impl CameraDevice for MockCamera {
    async fn capture_frame(&mut self) -> Result<Frame> {
        self.frame_rx
            .recv()
            .await
            .ok_or_else(|| HardwareError::disconnected("mock camera frame channel"))
    }
}

/// Handle for scripting a [`MockCamera`].
#[derive(Debug, Clone)]
pub struct MockCameraHandle {
    frame_tx: mpsc::Sender<Frame>,
}

impl MockCameraHandle {
    /// Queue a frame whose payload is the given bytes.
    pub async fn push_frame(&self, payload: impl Into<Vec<u8>>) {
        let _ = self.frame_tx.send(Frame::new(payload)).await;
    }

    /// Queue an empty frame (nothing decodable in view).
    pub async fn push_empty_frame(&self) {
        let _ = self.frame_tx.send(Frame::empty()).await;
    }
}
