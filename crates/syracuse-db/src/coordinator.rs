//! Store traits and the fan-out/fan-in fact coordinator.
//!
//! The coordinator is a stateless mediator over the two stores: on read
//! it issues both lookups concurrently and merges whatever comes back;
//! on write it computes missing facts via the kernel, then performs both
//! writes concurrently and aggregates per-store outcomes. No cross-store
//! atomicity is possible or attempted -- partial success is made
//! explicit in [`WriteReport`] rather than papered over.
//!
//! The stores are injected through the [`FactStore`] and
//! [`SequenceStore`] traits so the coordination logic can be tested
//! against in-memory implementations without any network dependency.

use syracuse_kernel::{KernelError, compute_facts, compute_syracuse};
use syracuse_types::{LookupResult, NumberFacts, StoreKind, SyracuseTrace, WriteIssue, WriteReport};

use crate::error::StoreError;

/// Accessor over the relational table of scalar boolean facts.
#[async_trait::async_trait]
pub trait FactStore: Send + Sync {
    /// Existence-checked read keyed on `value`. Absence is `Ok(None)`.
    async fn get(&self, value: i64) -> Result<Option<NumberFacts>, StoreError>;

    /// Insert-only write. Returns whether exactly one row was affected.
    async fn put(&self, facts: &NumberFacts) -> Result<bool, StoreError>;
}

/// Accessor over the object store of serialized trajectories.
#[async_trait::async_trait]
pub trait SequenceStore: Send + Sync {
    /// Existence-checked read keyed on `value`. Absence is `Ok(None)`.
    async fn get(&self, value: i64) -> Result<Option<SyracuseTrace>, StoreError>;

    /// Write (or overwrite) the trajectory object for `trace.value`.
    async fn put(&self, trace: &SyracuseTrace) -> Result<(), StoreError>;
}

/// Stateless mediator over the two fact stores.
///
/// Holds no request-scoped mutable state, so a single instance is
/// safely shared across concurrent requests; the stores' own connection
/// pools handle their thread safety.
#[derive(Clone)]
pub struct FactCoordinator<F, S> {
    facts: F,
    sequences: S,
}

impl<F: FactStore, S: SequenceStore> FactCoordinator<F, S> {
    /// Create a coordinator over the two injected stores.
    pub const fn new(facts: F, sequences: S) -> Self {
        Self { facts, sequences }
    }

    /// Concurrent existence-checked read across both stores.
    ///
    /// Both lookups are dispatched before either is awaited, so one
    /// store blocking on I/O never stalls the other. Each branch fails
    /// in isolation: a failing store is logged and its half reported
    /// absent, while the healthy half is returned untouched. No retry
    /// happens at this layer.
    pub async fn lookup(&self, value: i64) -> LookupResult {
        let (facts, sequence) = tokio::join!(self.facts.get(value), self.sequences.get(value));

        let facts = facts.unwrap_or_else(|e| {
            tracing::warn!(value, error = %e, "Relational lookup failed; reporting facts absent");
            None
        });
        let sequence = sequence.unwrap_or_else(|e| {
            tracing::warn!(value, error = %e, "Blob lookup failed; reporting sequence absent");
            None
        });

        LookupResult {
            value,
            facts,
            sequence,
        }
    }

    /// Two-phase write of facts and trajectory for `value`.
    ///
    /// Missing inputs are computed by the kernel first. Both store
    /// writes then run concurrently; each outcome is folded into the
    /// returned [`WriteReport`], and a failure in one store never
    /// blocks or rolls back the other. A duplicate relational insert is
    /// non-fatal: the value is already recorded, which the report
    /// reflects as `relational_written = false` plus an informational
    /// entry.
    ///
    /// Caller-supplied facts and steps are trusted verbatim; the kernel
    /// is only consulted for what is absent.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError`] when the trajectory must be computed and
    /// the kernel rejects `value` (non-positive) or trips its iteration
    /// bound. In that case nothing has been written to either store.
    pub async fn store(
        &self,
        value: i64,
        facts: Option<NumberFacts>,
        sequence: Option<Vec<i64>>,
    ) -> Result<WriteReport, KernelError> {
        let facts = facts.unwrap_or_else(|| compute_facts(value));
        let trace = match sequence {
            Some(steps) => SyracuseTrace { value, steps },
            None => compute_syracuse(value)?,
        };

        let (relational, blob) = tokio::join!(self.facts.put(&facts), self.sequences.put(&trace));

        let mut report = WriteReport::new(value);

        match relational {
            Ok(one_row) => report.relational_written = one_row,
            Err(e @ StoreError::DuplicateKey(_)) => {
                tracing::info!(value, "Facts row already recorded; relational write skipped");
                report.errors.push(WriteIssue {
                    store: StoreKind::Relational,
                    message: e.to_string(),
                });
            }
            Err(e) => {
                tracing::warn!(value, error = %e, "Relational write failed");
                report.errors.push(WriteIssue {
                    store: StoreKind::Relational,
                    message: e.to_string(),
                });
            }
        }

        match blob {
            Ok(()) => report.blob_written = true,
            Err(e) => {
                tracing::warn!(value, error = %e, "Blob write failed");
                report.errors.push(WriteIssue {
                    store: StoreKind::Blob,
                    message: e.to_string(),
                });
            }
        }

        Ok(report)
    }
}
