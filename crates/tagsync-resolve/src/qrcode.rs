//! Visual-code resolver: operator-gated camera capture.

use crate::console::OperatorConsole;
use crate::decoder::CodeDecoder;
use crate::error::Result;
use crate::traits::{IdentityResolver, Resolution};
use colored::Colorize;
use tagsync_core::{CardUid, UserLogin, constants::CAMERA_WARMUP_FRAMES};
use tagsync_hardware::{CameraDevice, devices::AnyCamera};
use tracing::{debug, warn};

/// Resolves identities by decoding a visual code held up to a camera.
///
/// The operator is asked first whether a scan is worth attempting; "no"
/// declines so the chain can fall through to manual entry, end-of-file
/// cancels the whole run. Once engaged, frames are captured until one
/// decodes. The first [`CAMERA_WARMUP_FRAMES`] frames are discarded while
/// the sensor settles.
///
/// Capture failures decline rather than error: a flaky webcam must not
/// take the run down when the manual fallback is one chain slot away.
pub struct QrResolver {
    camera: AnyCamera,
    decoder: Box<dyn CodeDecoder>,
    console: Box<dyn OperatorConsole>,
}

impl QrResolver {
    pub fn new(
        camera: AnyCamera,
        decoder: Box<dyn CodeDecoder>,
        console: Box<dyn OperatorConsole>,
    ) -> Self {
        Self {
            camera,
            decoder,
            console,
        }
    }
}

impl IdentityResolver for QrResolver {
    async fn find_user(&mut self, card: &CardUid) -> Result<Resolution> {
        match self.console.confirm("Attempt to read the card's QR code?")? {
            None => return Ok(Resolution::Cancelled),
            Some(false) => return Ok(Resolution::Declined),
            Some(true) => {}
        }

        let mut warmup = 0usize;
        loop {
            let frame = match self.camera.capture_frame().await {
                Ok(frame) => frame,
                Err(e) => {
                    warn!(%card, "frame capture failed: {e}");
                    println!("{}", format!("Error performing video capture: {e}").red());
                    return Ok(Resolution::Declined);
                }
            };

            if warmup < CAMERA_WARMUP_FRAMES {
                warmup += 1;
                continue;
            }

            // An undecodable frame is the loop's normal idle state.
            if let Some(code) = self.decoder.decode(&frame)
                && let Ok(login) = UserLogin::new(&code)
            {
                debug!(%card, %login, "decoded visual code");
                return Ok(Resolution::Matched(login));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::decoder::Utf8Decoder;
    use tagsync_hardware::mock::MockCamera;

    fn card() -> CardUid {
        CardUid::new("04a1b2c3").unwrap()
    }

    fn resolver(camera: MockCamera, console: ScriptedConsole) -> QrResolver {
        QrResolver::new(
            AnyCamera::Mock(camera),
            Box::new(Utf8Decoder::new()),
            Box::new(console),
        )
    }

    #[tokio::test]
    async fn test_operator_decline_skips_capture() {
        let (camera, _handle) = MockCamera::new();
        let console = ScriptedConsole::new().with_confirm(Some(false));

        let mut resolver = resolver(camera, console);
        assert_eq!(
            resolver.find_user(&card()).await.unwrap(),
            Resolution::Declined
        );
    }

    #[tokio::test]
    async fn test_operator_eof_cancels_run() {
        let (camera, _handle) = MockCamera::new();
        let console = ScriptedConsole::new().with_confirm(None);

        let mut resolver = resolver(camera, console);
        assert_eq!(
            resolver.find_user(&card()).await.unwrap(),
            Resolution::Cancelled
        );
    }

    #[tokio::test]
    async fn test_decodes_first_frame_after_warmup() {
        let (camera, handle) = MockCamera::new();
        // Warm-up frames are discarded even when they would decode.
        for _ in 0..CAMERA_WARMUP_FRAMES {
            handle.push_frame("warmup@ignored.org").await;
        }
        handle.push_empty_frame().await;
        handle.push_frame("a@b.org").await;

        let console = ScriptedConsole::new().with_confirm(Some(true));
        let mut resolver = resolver(camera, console);

        assert_eq!(
            resolver.find_user(&card()).await.unwrap(),
            Resolution::Matched(UserLogin::new("a@b.org").unwrap())
        );
    }

    #[tokio::test]
    async fn test_capture_failure_declines() {
        let (camera, handle) = MockCamera::new();
        drop(handle); // closed channel = capture device failure

        let console = ScriptedConsole::new().with_confirm(Some(true));
        let mut resolver = resolver(camera, console);

        assert_eq!(
            resolver.find_user(&card()).await.unwrap(),
            Resolution::Declined
        );
    }
}
