//! In-process deduplication of registry submissions.

use std::collections::HashMap;
use tagsync_core::{CardUid, UserLogin};

/// Process-lifetime map from card UID to the last identity successfully
/// submitted for it.
///
/// Owned exclusively by the engine: read in the deduplicating state,
/// mutated only in the recording state. Grows monotonically — no eviction,
/// bounded in practice by the physical card population. An entry exists
/// only after a submission that was accepted or reported as a conflict;
/// fatal submission errors never reach [`DedupTable::record`].
///
/// Restarting the process loses this memory by design: the registry call
/// is idempotent, so replays are wasteful but harmless.
#[derive(Debug, Default)]
pub struct DedupTable {
    entries: HashMap<CardUid, UserLogin>,
}

impl DedupTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table pre-seeded with known pairings (used by tests and
    /// by callers that want to suppress a known population up front).
    pub fn seeded(entries: impl IntoIterator<Item = (CardUid, UserLogin)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Whether this exact (card, identity) pairing was already submitted.
    ///
    /// A card re-resolving to a DIFFERENT identity is not a duplicate:
    /// the new pairing must be submitted afresh.
    #[must_use]
    pub fn already_sent(&self, card: &CardUid, login: &UserLogin) -> bool {
        self.entries.get(card) == Some(login)
    }

    /// The last identity submitted for a card, if any.
    #[must_use]
    pub fn last_login(&self, card: &CardUid) -> Option<&UserLogin> {
        self.entries.get(card)
    }

    /// Record a submitted pairing, replacing any previous identity for
    /// the card.
    pub fn record(&mut self, card: CardUid, login: UserLogin) {
        self.entries.insert(card, login);
    }

    /// Number of cards with a recorded submission.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no submission has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> CardUid {
        CardUid::new(s).unwrap()
    }

    fn login(s: &str) -> UserLogin {
        UserLogin::new(s).unwrap()
    }

    #[test]
    fn test_record_and_check() {
        let mut table = DedupTable::new();
        assert!(!table.already_sent(&card("04a1b2c3"), &login("a@b.org")));

        table.record(card("04a1b2c3"), login("a@b.org"));
        assert!(table.already_sent(&card("04a1b2c3"), &login("a@b.org")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_different_identity_is_not_a_duplicate() {
        let mut table = DedupTable::new();
        table.record(card("04a1b2c3"), login("a@b.org"));

        assert!(!table.already_sent(&card("04a1b2c3"), &login("c@d.org")));

        // Re-recording replaces the remembered identity.
        table.record(card("04a1b2c3"), login("c@d.org"));
        assert!(table.already_sent(&card("04a1b2c3"), &login("c@d.org")));
        assert!(!table.already_sent(&card("04a1b2c3"), &login("a@b.org")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_seeded_table() {
        let table = DedupTable::seeded([(card("04a1b2c3"), login("a@b.org"))]);
        assert!(table.already_sent(&card("04a1b2c3"), &login("a@b.org")));
        assert_eq!(table.last_login(&card("04a1b2c3")), Some(&login("a@b.org")));
    }
}
