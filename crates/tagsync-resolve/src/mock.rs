//! Scripted resolver for tests.

use crate::error::Result;
use crate::traits::{IdentityResolver, Resolution};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tagsync_core::{CardUid, UserLogin};

#[derive(Debug)]
enum Behavior {
    Always(Resolution),
    Script(VecDeque<Resolution>),
}

/// Resolver with fully scripted behavior and an invocation counter.
///
/// Used to pin down chain ordering and engine control flow without any
/// interactive or remote machinery. The counter handle survives the
/// resolver being moved into a chain.
#[derive(Debug)]
pub struct MockResolver {
    behavior: Behavior,
    invocations: Arc<AtomicUsize>,
}

impl MockResolver {
    /// A resolver that always declines.
    #[must_use]
    pub fn declining() -> Self {
        Self::always(Resolution::Declined)
    }

    /// A resolver that always matches the given identity.
    #[must_use]
    pub fn matching(login: UserLogin) -> Self {
        Self::always(Resolution::Matched(login))
    }

    /// A resolver that always reports operator cancellation.
    #[must_use]
    pub fn cancelling() -> Self {
        Self::always(Resolution::Cancelled)
    }

    /// A resolver replaying the given resolutions in order, then
    /// declining once the script is exhausted.
    #[must_use]
    pub fn scripted(script: Vec<Resolution>) -> Self {
        Self {
            behavior: Behavior::Script(script.into()),
            invocations: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn always(resolution: Resolution) -> Self {
        Self {
            behavior: Behavior::Always(resolution),
            invocations: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Counter handle; keeps counting after the resolver moves into a
    /// chain.
    #[must_use]
    pub fn invocation_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.invocations)
    }
}

impl IdentityResolver for MockResolver {
    async fn find_user(&mut self, _card: &CardUid) -> Result<Resolution> {
        self.invocations.fetch_add(1, Ordering::SeqCst);

        Ok(match &mut self.behavior {
            Behavior::Always(resolution) => resolution.clone(),
            Behavior::Script(script) => script.pop_front().unwrap_or(Resolution::Declined),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardUid {
        CardUid::new("04a1b2c3").unwrap()
    }

    #[tokio::test]
    async fn test_always_behaviors() {
        let mut declining = MockResolver::declining();
        assert_eq!(
            declining.find_user(&card()).await.unwrap(),
            Resolution::Declined
        );

        let login = UserLogin::new("a@b.org").unwrap();
        let mut matching = MockResolver::matching(login.clone());
        assert_eq!(
            matching.find_user(&card()).await.unwrap(),
            Resolution::Matched(login)
        );
    }

    #[tokio::test]
    async fn test_script_then_decline() {
        let login = UserLogin::new("a@b.org").unwrap();
        let mut resolver = MockResolver::scripted(vec![
            Resolution::Declined,
            Resolution::Matched(login.clone()),
        ]);

        assert_eq!(
            resolver.find_user(&card()).await.unwrap(),
            Resolution::Declined
        );
        assert_eq!(
            resolver.find_user(&card()).await.unwrap(),
            Resolution::Matched(login)
        );
        // Exhausted scripts decline.
        assert_eq!(
            resolver.find_user(&card()).await.unwrap(),
            Resolution::Declined
        );
    }

    #[tokio::test]
    async fn test_invocation_counter() {
        let mut resolver = MockResolver::declining();
        let counter = resolver.invocation_counter();

        resolver.find_user(&card()).await.unwrap();
        resolver.find_user(&card()).await.unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
