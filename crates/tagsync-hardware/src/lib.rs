//! Hardware device abstraction layer for the tagsync card synchronizer.
//!
//! This crate provides trait-based abstractions for the two peripherals the
//! synchronizer touches: NFC/proximity card readers and imaging devices used
//! for visual-code capture. The traits enable substitution between mock
//! implementations (for tests), console-driven emulated devices (for running
//! without hardware), and future real drivers.
//!
//! # Design Philosophy
//!
//! - **Async-first**: all I/O operations are asynchronous using native
//!   `async fn` in traits (Rust 1.90 + Edition 2024 RPITIT).
//! - **Bounded polling**: a single reader poll never blocks past its
//!   [`TimeoutGate`] budget; driver faults cost exactly one backoff sleep.
//! - **Cancellation as data**: an operator abort is a [`TagEvent::Aborted`]
//!   value, never an error, so callers can pattern-match shutdown apart
//!   from transport failures.
//!
//! # Reading a card
//!
//! ```no_run
//! use tagsync_hardware::{HardwarePoller, PollOutcome, traits::NfcReader};
//!
//! async fn next_card<R: NfcReader>(poller: &mut HardwarePoller<R>) {
//!     match poller.poll().await {
//!         PollOutcome::Card(uid) => println!("card {uid}"),
//!         PollOutcome::Empty => {}
//!         PollOutcome::Cancelled => println!("operator abort"),
//!     }
//! }
//! ```
//!
//! # Dynamic dispatch
//!
//! Native `async fn` trait methods are not object-safe, so runtime backend
//! selection goes through the enum wrappers in [`devices`]
//! ([`AnyNfcReader`], [`AnyCamera`]) rather than `Box<dyn ...>`.
//!
//! [`TimeoutGate`]: gate::TimeoutGate
//! [`TagEvent::Aborted`]: traits::TagEvent::Aborted
//! [`AnyNfcReader`]: devices::AnyNfcReader
//! [`AnyCamera`]: devices::AnyCamera

pub mod console;
pub mod devices;
pub mod error;
pub mod gate;
pub mod mock;
pub mod poller;
pub mod traits;
pub mod types;

pub use error::{HardwareError, Result};
pub use gate::TimeoutGate;
pub use poller::{HardwarePoller, PollOutcome};
pub use traits::{CameraDevice, NfcReader, TagEvent, TagRead};
pub use types::{Frame, ReaderInfo};
