//! Directory-backed resolver.

use crate::error::Result;
use crate::traits::{IdentityResolver, Resolution};
use tagsync_client::{AnyDirectory, DirectoryLookup};
use tagsync_core::CardUid;
use tracing::debug;

/// Resolves identities through the remote directory service.
///
/// The first resolver in a typical chain: cheap, non-interactive, keyed
/// directly by card UID. A missing `login` field is a decline; a broken
/// directory is a hard error, never a silent decline — a failing
/// dependency must not be mistaken for "user unknown".
#[derive(Debug)]
pub struct DirectoryResolver {
    directory: AnyDirectory,
}

impl DirectoryResolver {
    pub fn new(directory: AnyDirectory) -> Self {
        Self { directory }
    }
}

impl IdentityResolver for DirectoryResolver {
    async fn find_user(&mut self, card: &CardUid) -> Result<Resolution> {
        match self.directory.lookup(card).await? {
            Some(login) => {
                debug!(%card, %login, "directory matched card");
                Ok(Resolution::Matched(login))
            }
            None => Ok(Resolution::Declined),
        }
    }
}
