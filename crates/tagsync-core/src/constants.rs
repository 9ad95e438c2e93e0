//! Workspace-wide constants for the tagsync card synchronizer.
//!
//! Centralizes the limits and defaults shared by the hardware, resolver,
//! and engine crates so a deployment can be reasoned about from one place.

use std::time::Duration;

// ============================================================================
// Card UID Constraints
// ============================================================================

/// Minimum card UID length in bytes (per ISO 14443).
///
/// Proximity cards expose a 4, 7, or 10 byte unique identifier; anything
/// shorter is a truncated read and is rejected.
pub const MIN_UID_BYTES: usize = 4;

/// Maximum card UID length in bytes (per ISO 14443).
pub const MAX_UID_BYTES: usize = 10;

/// Minimum hex-encoded UID length in characters.
///
/// # Examples
///
/// ```
/// use tagsync_core::constants::MIN_UID_HEX_LEN;
///
/// assert_eq!(MIN_UID_HEX_LEN, 8); // 4 bytes, 2 hex digits each
/// ```
pub const MIN_UID_HEX_LEN: usize = MIN_UID_BYTES * 2;

/// Maximum hex-encoded UID length in characters.
pub const MAX_UID_HEX_LEN: usize = MAX_UID_BYTES * 2;

// ============================================================================
// Hardware Poll Configuration
// ============================================================================

/// Default budget for one bounded hardware poll attempt.
///
/// A single `poll()` call never blocks longer than this; the same duration
/// is reused as the backoff sleep after a driver fault so a broken reader
/// cannot spin the loop at 100% CPU.
///
/// # Value: 2 seconds
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(2);

/// Interval at which a driver's internal retry loop rechecks for a tag
/// while its timeout gate budget is still open.
///
/// # Value: 25 milliseconds
pub const TAG_POLL_INTERVAL: Duration = Duration::from_millis(25);

// ============================================================================
// Camera Configuration
// ============================================================================

/// Number of initial camera frames discarded before decoding starts.
///
/// The first frames after opening a capture device are routinely
/// over- or under-exposed while the sensor settles; decoding them wastes
/// time and produces spurious failures.
///
/// # Value: 5 frames
pub const CAMERA_WARMUP_FRAMES: usize = 5;

// ============================================================================
// Defaults for the CLI surface
// ============================================================================

/// Default reader locator.
///
/// `console` selects the interactive emulated reader; real PC/SC readers
/// arrive with the `hardware-pcsc` feature of `tagsync-hardware`.
pub const DEFAULT_READER_LOCATOR: &str = "console";

/// Default camera locator.
pub const DEFAULT_CAMERA_LOCATOR: &str = "console";

/// Default audit log path.
///
/// Every submission attempt appends one `login,card_uid` line here before
/// the remote call is made.
pub const DEFAULT_AUDIT_LOG_PATH: &str = "output.csv";

/// Environment variable holding a pre-established registry bearer token.
///
/// When set, the CLI skips the interactive login exchange entirely.
pub const TOKEN_ENV_VAR: &str = "TAGSYNC_TOKEN";
