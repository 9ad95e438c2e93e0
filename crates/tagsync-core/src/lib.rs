//! Core domain types for the tagsync card synchronizer.
//!
//! This crate defines the vocabulary shared by every other tagsync crate:
//! the card identifier read from hardware ([`CardUid`]), the user identity
//! a card gets bound to ([`UserLogin`]), the transient pairing of the two
//! ([`Pairing`]), the core error type, and workspace-wide constants.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
