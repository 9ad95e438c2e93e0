//! Remote collaborators of the tagsync card synchronizer.
//!
//! Two external services participate in a synchronization run:
//!
//! - the **directory**, queried per card UID for a known identity
//!   ([`DirectoryLookup`] / [`DirectoryClient`]);
//! - the **registry**, which authenticates once per process and then
//!   accepts (identity, card) assignments ([`CardRegistry`] /
//!   [`RegistryClient`]).
//!
//! Both collaborators are JSON-over-HTTP and intentionally thin: no retry,
//! no pooling beyond what reqwest provides, clear errors for the engine to
//! act on. A remote conflict ("card already bound elsewhere") is an
//! [`AssignOutcome`], not an error, so the engine can treat it as a
//! non-fatal, dedup-updating outcome.
//!
//! Mock implementations ([`mock::MockDirectory`], [`mock::MockRegistry`])
//! script outcomes and record calls for engine tests.

#![allow(async_fn_in_trait)]

pub mod directory;
pub mod error;
pub mod mock;
pub mod registry;

pub use directory::{AnyDirectory, DirectoryClient, DirectoryConfig, DirectoryLookup};
pub use error::{ClientError, Result};
pub use registry::{AssignOutcome, CardRegistry, RegistryClient};
