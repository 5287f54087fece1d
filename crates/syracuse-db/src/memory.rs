//! In-memory store implementations for tests and local development.
//!
//! These mirror the behavior of the real stores closely enough to
//! exercise the coordinator without network dependencies: the sequence
//! store keeps raw JSON bodies (so corrupt content is representable)
//! and both stores can simulate an outage via
//! [`MemoryFactStore::set_unavailable`] /
//! [`MemorySequenceStore::set_unavailable`].

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use syracuse_types::{NumberFacts, StoreKind, SyracuseTrace};
use tokio::sync::RwLock;

use crate::coordinator::{FactStore, SequenceStore};
use crate::error::StoreError;

/// In-memory stand-in for the relational fact table.
///
/// Clones share state, so a test can keep a handle for inspection
/// while the coordinator owns another.
#[derive(Clone, Default)]
pub struct MemoryFactStore {
    rows: Arc<RwLock<BTreeMap<i64, NumberFacts>>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryFactStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate (or clear) a store outage: while set, every operation
    /// fails with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, down: bool) {
        self.unavailable.store(down, Ordering::SeqCst);
    }

    /// Seed a row directly, bypassing the insert-only contract.
    pub async fn seed(&self, facts: NumberFacts) {
        self.rows.write().await.insert(facts.value, facts);
    }

    /// Whether a row for `value` is present.
    pub async fn contains(&self, value: i64) -> bool {
        self.rows.read().await.contains_key(&value)
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable(
                StoreKind::Relational,
                "simulated outage",
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl FactStore for MemoryFactStore {
    async fn get(&self, value: i64) -> Result<Option<NumberFacts>, StoreError> {
        self.check_available()?;
        Ok(self.rows.read().await.get(&value).copied())
    }

    async fn put(&self, facts: &NumberFacts) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut rows = self.rows.write().await;
        if rows.contains_key(&facts.value) {
            return Err(StoreError::DuplicateKey(facts.value));
        }
        rows.insert(facts.value, *facts);
        Ok(true)
    }
}

/// In-memory stand-in for the blob sequence store.
///
/// Bodies are kept as raw JSON strings -- the same wire shape the real
/// store writes -- so decoding, and decoding failures, behave the same.
#[derive(Clone, Default)]
pub struct MemorySequenceStore {
    objects: Arc<RwLock<BTreeMap<i64, String>>>,
    unavailable: Arc<AtomicBool>,
}

impl MemorySequenceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate (or clear) a store outage.
    pub fn set_unavailable(&self, down: bool) {
        self.unavailable.store(down, Ordering::SeqCst);
    }

    /// Seed a trajectory through the normal encoding path.
    pub async fn seed(&self, trace: SyracuseTrace) {
        let body = serde_json::to_string(&trace.steps).unwrap_or_default();
        self.objects.write().await.insert(trace.value, body);
    }

    /// Seed a raw body verbatim, e.g. malformed content for
    /// corrupt-data tests.
    pub async fn seed_raw(&self, value: i64, body: &str) {
        self.objects.write().await.insert(value, body.to_owned());
    }

    /// Whether an object for `value` is present.
    pub async fn contains(&self, value: i64) -> bool {
        self.objects.read().await.contains_key(&value)
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable(StoreKind::Blob, "simulated outage"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl SequenceStore for MemorySequenceStore {
    async fn get(&self, value: i64) -> Result<Option<SyracuseTrace>, StoreError> {
        self.check_available()?;
        let objects = self.objects.read().await;
        let Some(body) = objects.get(&value) else {
            return Ok(None);
        };
        let steps: Vec<i64> = serde_json::from_str(body).map_err(|e| StoreError::CorruptData {
            object: format!("sequence_{value}"),
            message: e.to_string(),
        })?;
        Ok(Some(SyracuseTrace { value, steps }))
    }

    async fn put(&self, trace: &SyracuseTrace) -> Result<(), StoreError> {
        self.check_available()?;
        let body = serde_json::to_string(&trace.steps).map_err(|e| StoreError::CorruptData {
            object: format!("sequence_{}", trace.value),
            message: format!("failed to encode steps: {e}"),
        })?;
        self.objects.write().await.insert(trace.value, body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[tokio::test]
    async fn fact_store_round_trip_and_duplicate() {
        let store = MemoryFactStore::new();
        let facts = NumberFacts {
            value: 6,
            is_even: true,
            is_perfect: true,
            is_prime: false,
        };

        assert!(store.put(&facts).await.unwrap());
        assert_eq!(store.get(6).await.unwrap(), Some(facts));

        let err = store.put(&facts).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(6)));
    }

    #[tokio::test]
    async fn sequence_store_round_trip() {
        let store = MemorySequenceStore::new();
        let trace = SyracuseTrace {
            value: 6,
            steps: vec![6, 3, 10, 5, 16, 8, 4, 2, 1],
        };

        store.put(&trace).await.unwrap();
        assert_eq!(store.get(6).await.unwrap(), Some(trace));
        assert_eq!(store.get(7).await.unwrap(), None);
    }

    #[tokio::test]
    async fn malformed_body_is_corrupt_not_absent() {
        let store = MemorySequenceStore::new();
        store.seed_raw(4, "{\"not\": \"an array\"}").await;

        let err = store.get(4).await.unwrap_err();
        assert!(matches!(err, StoreError::CorruptData { .. }));
    }

    #[tokio::test]
    async fn outage_fails_every_operation() {
        let store = MemoryFactStore::new();
        store.set_unavailable(true);
        assert!(store.get(1).await.is_err());

        store.set_unavailable(false);
        assert!(store.get(1).await.unwrap().is_none());
    }
}
