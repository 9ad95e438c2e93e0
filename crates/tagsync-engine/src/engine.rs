//! The synchronization loop.

use crate::audit::AuditLog;
use crate::dedup::DedupTable;
use colored::Colorize;
use tagsync_client::{AssignOutcome, CardRegistry, ClientError};
use tagsync_core::Pairing;
use tagsync_hardware::{HardwarePoller, PollOutcome, traits::NfcReader};
use tagsync_resolve::{Resolution, ResolveError, ResolverChain};
use thiserror::Error;
use tracing::{debug, info};

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Fatal failures that end a synchronization run.
///
/// Everything recoverable (transient hardware faults, declines,
/// conflicts) is absorbed before it reaches this type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A resolver dependency broke (directory unreachable, console dead).
    #[error("Resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    /// The registry rejected a submission with a non-conflict error, or
    /// the transport failed.
    #[error("Registry submission failed: {0}")]
    Registry(#[from] ClientError),

    /// The audit log could not be written.
    #[error("Audit log write failed: {0}")]
    Audit(#[from] std::io::Error),
}

/// What to do after one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Return to polling.
    Continue,

    /// An operator cancellation was observed; end the run cleanly.
    Shutdown,
}

/// The card synchronization engine.
///
/// Each iteration walks Polling → Resolving → Deduplicating → Submitting
/// → Recording and returns to Polling. The engine owns the
/// [`DedupTable`]; nothing else reads or writes it. Every terminal
/// outcome of an iteration (matched, unmatched, conflict, dedup-skip)
/// prints exactly one operator-facing status line; fatal errors propagate
/// to the caller instead.
///
/// Generic over the reader and registry so the loop can be exercised
/// against scripted mocks.
pub struct SyncEngine<R: NfcReader, G: CardRegistry> {
    poller: HardwarePoller<R>,
    chain: ResolverChain,
    registry: G,
    audit: AuditLog,
    dedup: DedupTable,
    deduplicate: bool,
}

impl<R: NfcReader, G: CardRegistry> SyncEngine<R, G> {
    /// Create an engine with an empty dedup table.
    pub fn new(
        poller: HardwarePoller<R>,
        chain: ResolverChain,
        registry: G,
        audit: AuditLog,
        deduplicate: bool,
    ) -> Self {
        Self {
            poller,
            chain,
            registry,
            audit,
            dedup: DedupTable::new(),
            deduplicate,
        }
    }

    /// Replace the dedup table (e.g. with a pre-seeded one).
    #[must_use]
    pub fn with_dedup_table(mut self, dedup: DedupTable) -> Self {
        self.dedup = dedup;
        self
    }

    /// The engine's dedup table.
    #[must_use]
    pub fn dedup_table(&self) -> &DedupTable {
        &self.dedup
    }

    /// Run iterations until an operator cancellation or a fatal error.
    ///
    /// There is no natural end state otherwise: the loop polls
    /// indefinitely.
    ///
    /// # Errors
    /// Propagates the first fatal error (broken resolver dependency,
    /// non-conflict registry failure, audit write failure).
    pub async fn run(&mut self) -> Result<()> {
        info!(
            resolvers = self.chain.len(),
            deduplicate = self.deduplicate,
            "sync loop started"
        );

        loop {
            if self.step().await? == Step::Shutdown {
                info!("sync loop cancelled by operator");
                return Ok(());
            }
        }
    }

    /// Execute one full iteration.
    ///
    /// # Errors
    /// See [`SyncEngine::run`]. On a fatal submission error the dedup
    /// table is NOT updated; the audit intent line may already exist.
    pub async fn step(&mut self) -> Result<Step> {
        // Polling. The poller already paid any backoff sleep on faults,
        // so an empty outcome loops straight back around.
        let card = match self.poller.poll().await {
            PollOutcome::Card(card) => card,
            PollOutcome::Empty => return Ok(Step::Continue),
            PollOutcome::Cancelled => return Ok(Step::Shutdown),
        };

        // Resolving: first non-declining resolver wins.
        let login = match self.chain.resolve(&card).await? {
            Resolution::Matched(login) => login,
            Resolution::Declined => {
                println!("{card} could not be matched to any user, skipping...");
                return Ok(Step::Continue);
            }
            Resolution::Cancelled => return Ok(Step::Shutdown),
        };

        // Deduplicating: the only path that skips submission even though
        // resolution succeeded.
        if self.deduplicate && self.dedup.already_sent(&card, &login) {
            println!(
                "{}",
                format!("{card} -> {login} already sent, not resending...").dimmed()
            );
            return Ok(Step::Continue);
        }

        // Submitting: the audit line is an intent record and lands before
        // the remote call, so it may exist even if the submission fails.
        let pairing = Pairing::new(card.clone(), login.clone());
        self.audit.append(&pairing).await?;

        debug!(%pairing, "submitting assignment");
        let outcome = self.registry.assign_card(&login, &card).await?;

        // Recording: conflicts still count for dedup purposes — the card
        // is bound remotely, resending cannot change that.
        match outcome {
            AssignOutcome::Assigned => println!("{card} -> {login}"),
            AssignOutcome::Conflict => {
                println!(
                    "{}",
                    format!("{card} already assigned to someone else!").yellow()
                );
            }
        }
        self.dedup.record(card, login);

        Ok(Step::Continue)
    }
}
