//! Console-driven emulated devices.
//!
//! These backends let the synchronizer run end-to-end without physical
//! hardware: the operator plays the part of the reader (typing tag UIDs)
//! and the camera (typing frame payloads). Input is read on the blocking
//! thread pool so the async runtime stays responsive.
//!
//! Interactive emulation deliberately ignores the poll gate: the whole
//! system is single-card-at-a-time and blocking on the operator is the
//! accepted suspension model for human input.

use crate::{
    Result,
    error::HardwareError,
    gate::TimeoutGate,
    traits::{CameraDevice, NfcReader, TagEvent, TagRead},
    types::{Frame, ReaderInfo},
};

/// Read one line from stdin on the blocking pool.
///
/// Returns `None` on end-of-file, which callers treat as the operator
/// walking away (abort for the reader, disconnection for the camera).
async fn read_stdin_line(prompt: &'static str) -> Result<Option<String>> {
    let line = tokio::task::spawn_blocking(move || -> std::io::Result<Option<String>> {
        use std::io::{BufRead, Write};

        let mut stdout = std::io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        let bytes = std::io::stdin().lock().read_line(&mut line)?;
        Ok(if bytes == 0 { None } else { Some(line) })
    })
    .await
    .map_err(|e| HardwareError::other(format!("stdin reader task failed: {e}")))??;

    Ok(line.map(|l| l.trim().to_string()))
}

fn parse_hex_uid(input: &str) -> Result<Vec<u8>> {
    if !input.is_ascii() {
        return Err(HardwareError::invalid_data(format!(
            "UID is not hex: {input}"
        )));
    }

    if input.len() % 2 != 0 {
        return Err(HardwareError::invalid_data(format!(
            "UID must have an even number of hex digits, got {}",
            input.len()
        )));
    }

    (0..input.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&input[i..i + 2], 16).map_err(|_| {
                HardwareError::invalid_data(format!("UID is not hex: {input}"))
            })
        })
        .collect()
}

/// Interactive emulated NFC reader.
///
/// One `wait_for_tag` call prompts for a UID: a hex string presents a tag,
/// an empty line means "no tag this attempt", and end-of-file is the
/// operator abort that ends the run.
#[derive(Debug, Default)]
pub struct ConsoleReader {
    _private: (),
}

impl ConsoleReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl NfcReader for ConsoleReader {
    async fn wait_for_tag(&mut self, _gate: &TimeoutGate) -> Result<TagEvent> {
        match read_stdin_line("tag uid (hex, empty = none) > ").await? {
            None => Ok(TagEvent::Aborted),
            Some(line) if line.is_empty() => Ok(TagEvent::NoTag),
            Some(line) => {
                let uid = parse_hex_uid(&line)?;
                Ok(TagEvent::Tag(TagRead::new(uid)?))
            }
        }
    }

    async fn reader_info(&self) -> Result<ReaderInfo> {
        Ok(ReaderInfo::new("Console Reader", "console"))
    }
}

/// Interactive emulated camera.
///
/// Each captured frame's payload is one typed line; an empty line produces
/// an empty frame (nothing decodable in view). End-of-file reports the
/// capture device as disconnected.
#[derive(Debug, Default)]
pub struct ConsoleCamera {
    _private: (),
}

impl ConsoleCamera {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CameraDevice for ConsoleCamera {
    async fn capture_frame(&mut self) -> Result<Frame> {
        match read_stdin_line("frame payload (empty = none) > ").await? {
            None => Err(HardwareError::disconnected("console camera stdin")),
            Some(line) if line.is_empty() => Ok(Frame::empty()),
            Some(line) => Ok(Frame::new(line.into_bytes())),
        }
    }
}
