//! Synchronization engine for the tagsync card synchronizer.
//!
//! The engine owns the loop at the heart of the tool: poll the reader,
//! resolve the card through the ordered resolver chain, suppress repeat
//! submissions, record the intent in the audit log, submit to the
//! registry, and remember the outcome for future dedup checks. One card is
//! fully processed before the next poll begins; the only shared mutable
//! state is the [`DedupTable`], owned exclusively by the engine.
//!
//! Per-iteration states (always returning to polling):
//!
//! ```text
//! Polling -> Resolving -> Deduplicating -> Submitting -> Recording
//! ```
//!
//! Cancellation is cooperative and coarse: an operator abort observed at
//! the reader or at any interactive prompt ends the whole run cleanly.

pub mod audit;
pub mod dedup;
pub mod engine;

pub use audit::AuditLog;
pub use dedup::DedupTable;
pub use engine::{EngineError, Step, SyncEngine};
