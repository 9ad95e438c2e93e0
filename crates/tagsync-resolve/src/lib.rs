//! Identity resolution for the tagsync card synchronizer.
//!
//! A resolver maps a card UID to a user identity, or declines. This crate
//! defines the [`IdentityResolver`] capability, its three production
//! variants, and the ordered [`ResolverChain`] that runs them:
//!
//! - [`DirectoryResolver`] — asks the remote directory service;
//! - [`QrResolver`] — engages the operator, then captures camera frames
//!   until one decodes to a code;
//! - [`ManualResolver`] — last resort, the operator types the identity.
//!
//! The chain invokes resolvers strictly in configured order; the first
//! non-declining answer wins and short-circuits the rest. Declining is not
//! an error, and neither is operator cancellation: both travel as
//! [`Resolution`] values so the engine can pattern-match a clean shutdown
//! apart from genuine failures (a broken directory service, a dead
//! console).

#![allow(async_fn_in_trait)]

pub mod chain;
pub mod console;
pub mod decoder;
pub mod directory;
pub mod error;
pub mod manual;
pub mod mock;
pub mod qrcode;
pub mod traits;

pub use chain::{AnyResolver, ResolverChain};
pub use console::{OperatorConsole, ScriptedConsole, TermConsole};
pub use decoder::{CodeDecoder, Utf8Decoder};
pub use directory::DirectoryResolver;
pub use error::{ResolveError, Result};
pub use manual::ManualResolver;
pub use mock::MockResolver;
pub use qrcode::QrResolver;
pub use traits::{IdentityResolver, Resolution};
