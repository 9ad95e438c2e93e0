//! The identity resolution capability.

use crate::error::Result;
use tagsync_core::{CardUid, UserLogin};

/// Outcome of asking one resolver (or the whole chain) about a card.
///
/// Cancellation is deliberately a value here rather than an error: an
/// operator walking away must end the run cleanly from any resolver,
/// without being conflated with transport failures.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The resolver produced an identity for the card.
    Matched(UserLogin),

    /// This resolver cannot answer; try the next one.
    Declined,

    /// The operator cancelled; the run must end.
    Cancelled,
}

/// Capability: map a card UID to a user identity, or decline.
///
/// Implementations take `&mut self` because interactive variants drive a
/// camera or console. Declining is the normal "I don't know" answer;
/// errors are reserved for broken dependencies.
pub trait IdentityResolver: Send {
    /// Attempt to resolve the identity behind a card UID.
    ///
    /// # Errors
    ///
    /// Returns an error only when a dependency breaks (directory
    /// unreachable, console dead) — never for "user unknown".
    async fn find_user(&mut self, card: &CardUid) -> Result<Resolution>;
}
