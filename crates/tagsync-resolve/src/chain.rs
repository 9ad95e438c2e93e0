//! Ordered resolver chain with first-match-wins semantics.

use crate::directory::DirectoryResolver;
use crate::error::{ResolveError, Result};
use crate::manual::ManualResolver;
use crate::mock::MockResolver;
use crate::qrcode::QrResolver;
use crate::traits::{IdentityResolver, Resolution};
use tagsync_core::CardUid;
use tracing::debug;

/// Enum wrapper for resolver dispatch.
///
/// Native `async fn` trait methods are not object-safe, so the chain
/// stores this enum instead of `Box<dyn IdentityResolver>`.
pub enum AnyResolver {
    /// Remote directory lookup.
    Directory(DirectoryResolver),

    /// Operator-gated camera capture.
    QrCode(QrResolver),

    /// Operator types the identity.
    Manual(ManualResolver),

    /// Scripted resolver for tests.
    Mock(MockResolver),
}

impl AnyResolver {
    /// Short name for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directory(_) => "directory",
            Self::QrCode(_) => "qr",
            Self::Manual(_) => "manual",
            Self::Mock(_) => "mock",
        }
    }
}

impl IdentityResolver for AnyResolver {
    async fn find_user(&mut self, card: &CardUid) -> Result<Resolution> {
        match self {
            Self::Directory(resolver) => resolver.find_user(card).await,
            Self::QrCode(resolver) => resolver.find_user(card).await,
            Self::Manual(resolver) => resolver.find_user(card).await,
            Self::Mock(resolver) => resolver.find_user(card).await,
        }
    }
}

/// Ordered, non-empty sequence of resolvers.
///
/// Order encodes priority: the chain asks each resolver in turn and the
/// first non-declining answer wins, short-circuiting the rest. All
/// resolvers declining is the expected "card unmatched" outcome, not a
/// fault. An empty chain is a configuration error and is rejected at
/// construction, before the sync loop ever starts.
pub struct ResolverChain {
    resolvers: Vec<AnyResolver>,
}

impl ResolverChain {
    /// Build a chain from resolvers in priority order.
    ///
    /// # Errors
    /// Returns [`ResolveError::NoResolvers`] for an empty list.
    pub fn new(resolvers: Vec<AnyResolver>) -> Result<Self> {
        if resolvers.is_empty() {
            return Err(ResolveError::NoResolvers);
        }
        Ok(Self { resolvers })
    }

    /// Number of resolvers in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Always false: empty chains cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Run the chain for one card.
    ///
    /// # Errors
    /// Propagates the first resolver failure (broken dependency); declines
    /// and cancellations are `Ok` values.
    pub async fn resolve(&mut self, card: &CardUid) -> Result<Resolution> {
        for resolver in &mut self.resolvers {
            match resolver.find_user(card).await? {
                Resolution::Matched(login) => {
                    debug!(resolver = resolver.name(), %card, %login, "resolver matched");
                    return Ok(Resolution::Matched(login));
                }
                Resolution::Cancelled => {
                    debug!(resolver = resolver.name(), "resolver cancelled the run");
                    return Ok(Resolution::Cancelled);
                }
                Resolution::Declined => {
                    debug!(resolver = resolver.name(), %card, "resolver declined");
                }
            }
        }

        Ok(Resolution::Declined)
    }
}
