//! Mock remote collaborators for testing.
//!
//! Both mocks script their outcomes up front and record every call, so
//! engine tests can assert exactly how many submissions and lookups a
//! scenario produced.

use crate::directory::DirectoryLookup;
use crate::error::{ClientError, Result};
use crate::registry::{AssignOutcome, CardRegistry};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tagsync_core::{CardUid, Pairing, UserLogin};

/// Scripted directory for tests.
///
/// Returns the seeded identity for known cards and declines for everything
/// else; can be switched into a failing state to exercise the
/// broken-dependency path.
#[derive(Debug, Default)]
pub struct MockDirectory {
    entries: HashMap<CardUid, UserLogin>,
    failing: Mutex<bool>,
    lookups: Mutex<Vec<CardUid>>,
}

impl MockDirectory {
    /// Create an empty directory (declines every lookup).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an identity for a card.
    pub fn insert(&mut self, card: CardUid, login: UserLogin) {
        self.entries.insert(card, login);
    }

    /// Make every subsequent lookup fail as a broken dependency.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    /// Cards looked up so far, in order.
    #[must_use]
    pub fn lookups(&self) -> Vec<CardUid> {
        self.lookups.lock().unwrap().clone()
    }
}

impl DirectoryLookup for MockDirectory {
    async fn lookup(&self, card: &CardUid) -> Result<Option<UserLogin>> {
        self.lookups.lock().unwrap().push(card.clone());

        if *self.failing.lock().unwrap() {
            return Err(ClientError::api(503, "directory unavailable"));
        }

        Ok(self.entries.get(card).cloned())
    }
}

/// Scripted registry for tests.
///
/// Outcomes are consumed in queue order; once the queue is empty every
/// further submission reports [`AssignOutcome::Assigned`]. Every accepted
/// call is recorded as a [`Pairing`].
#[derive(Debug, Default, Clone)]
pub struct MockRegistry {
    outcomes: Arc<Mutex<VecDeque<Result<AssignOutcome>>>>,
    calls: Arc<Mutex<Vec<Pairing>>>,
}

impl MockRegistry {
    /// Create a registry that accepts every submission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a conflict for an upcoming submission.
    pub fn enqueue_conflict(&self) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(AssignOutcome::Conflict));
    }

    /// Queue a fatal API error for an upcoming submission.
    pub fn enqueue_error(&self, status: u16, message: impl Into<String>) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Err(ClientError::api(status, message)));
    }

    /// Pairings submitted so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<Pairing> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of submissions that reached the registry.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl CardRegistry for MockRegistry {
    async fn assign_card(&self, login: &UserLogin, card: &CardUid) -> Result<AssignOutcome> {
        // Same local validation contract as the HTTP client.
        login.domain()?;

        self.calls
            .lock()
            .unwrap()
            .push(Pairing::new(card.clone(), login.clone()));

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(AssignOutcome::Assigned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardUid {
        CardUid::new("04a1b2c3").unwrap()
    }

    fn login() -> UserLogin {
        UserLogin::new("a@b.org").unwrap()
    }

    #[tokio::test]
    async fn test_mock_directory_seeded_and_unknown() {
        let mut directory = MockDirectory::new();
        directory.insert(card(), login());

        assert_eq!(directory.lookup(&card()).await.unwrap(), Some(login()));
        assert_eq!(
            directory
                .lookup(&CardUid::new("ffffffff").unwrap())
                .await
                .unwrap(),
            None
        );
        assert_eq!(directory.lookups().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_directory_failing() {
        let directory = MockDirectory::new();
        directory.set_failing(true);

        assert!(directory.lookup(&card()).await.is_err());
    }

    #[tokio::test]
    async fn test_mock_registry_scripted_outcomes() {
        let registry = MockRegistry::new();
        registry.enqueue_conflict();

        assert_eq!(
            registry.assign_card(&login(), &card()).await.unwrap(),
            AssignOutcome::Conflict
        );
        // Queue drained: default outcome.
        assert_eq!(
            registry.assign_card(&login(), &card()).await.unwrap(),
            AssignOutcome::Assigned
        );
        assert_eq!(registry.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_registry_validates_like_the_real_one() {
        let registry = MockRegistry::new();
        let bad = UserLogin::new("not-an-email").unwrap();

        let result = registry.assign_card(&bad, &card()).await;
        assert!(matches!(result, Err(ClientError::Validation(_))));
        assert_eq!(registry.call_count(), 0);
    }
}
