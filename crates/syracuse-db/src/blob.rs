//! Trajectory objects in a Redis-compatible blob store.
//!
//! Each analyzed integer owns one object whose body is the UTF-8 JSON
//! array of its Syracuse trajectory, terminal `1` inclusive.
//!
//! # Key Patterns
//!
//! | Pattern | Type | Description |
//! |---------|------|-------------|
//! | `sequence_<n>` | JSON array | Full trajectory for value `n` |
//! | `syracuse:container` | marker | Container provisioning marker |
//!
//! Object names derive deterministically from the value: textual
//! integer, no padding. The container marker stands in for a bucket on
//! backends without one; it is checked and created lazily, once per
//! process, off the per-request hot path contract.

use std::sync::Arc;

use fred::prelude::*;
use syracuse_types::{StoreKind, SyracuseTrace};
use tokio::sync::OnceCell;

use crate::coordinator::SequenceStore;
use crate::error::StoreError;

/// Marker key standing in for the backing container.
const CONTAINER_KEY: &str = "syracuse:container";

/// Derive the object name for a value: `sequence_<n>`.
fn object_name(value: i64) -> String {
    format!("sequence_{value}")
}

/// Connection handle to the blob store.
///
/// Wraps a [`fred::prelude::Client`] and provides typed read/write of
/// trajectory objects.
#[derive(Clone)]
pub struct BlobSequenceStore {
    client: Client,
    container_ready: Arc<OnceCell<()>>,
}

impl BlobSequenceStore {
    /// Connect to the blob store at the given URL.
    ///
    /// The URL follows the Redis URL scheme: `redis://host:port` or
    /// `redis://host:port/db`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the URL cannot be parsed.
    /// Returns [`StoreError::Unavailable`] if the connection fails.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let config = Config::from_url(url)
            .map_err(|e| StoreError::Config(format!("invalid blob store URL: {e}")))?;

        let client = Builder::from_config(config)
            .build()
            .map_err(|e| StoreError::unavailable(StoreKind::Blob, e))?;
        client
            .init()
            .await
            .map_err(|e| StoreError::unavailable(StoreKind::Blob, e))?;

        tracing::info!("Connected to blob store");
        Ok(Self {
            client,
            container_ready: Arc::new(OnceCell::new()),
        })
    }

    /// Lazily ensure the backing container marker exists.
    ///
    /// Idempotent: the check runs once per process and every later call
    /// is a no-op. Creation vs. pre-existence is logged either way.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the marker cannot be
    /// checked or written.
    async fn ensure_container(&self) -> Result<(), StoreError> {
        self.container_ready
            .get_or_try_init(|| async {
                let exists: i64 = self
                    .client
                    .exists(CONTAINER_KEY)
                    .await
                    .map_err(|e| StoreError::unavailable(StoreKind::Blob, e))?;

                if exists == 0 {
                    let _: () = self
                        .client
                        .set(CONTAINER_KEY, "1", None, None, false)
                        .await
                        .map_err(|e| StoreError::unavailable(StoreKind::Blob, e))?;
                    tracing::info!(container = CONTAINER_KEY, "Blob container created");
                } else {
                    tracing::info!(container = CONTAINER_KEY, "Blob container already exists");
                }
                Ok(())
            })
            .await?;
        Ok(())
    }

    /// Existence-checked read of the trajectory for `value`.
    ///
    /// Absence is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on transport failure.
    /// Returns [`StoreError::CorruptData`] if an object exists but its
    /// body is not a JSON integer array -- deliberately distinct from
    /// absence so operators can tell "never computed" from "damaged".
    pub async fn get(&self, value: i64) -> Result<Option<SyracuseTrace>, StoreError> {
        self.ensure_container().await?;

        let object = object_name(value);
        let content: Option<String> = self
            .client
            .get(&object)
            .await
            .map_err(|e| StoreError::unavailable(StoreKind::Blob, e))?;

        let Some(content) = content else {
            return Ok(None);
        };

        let steps: Vec<i64> =
            serde_json::from_str(&content).map_err(|e| StoreError::CorruptData {
                object,
                message: e.to_string(),
            })?;

        Ok(Some(SyracuseTrace { value, steps }))
    }

    /// Serialize `trace.steps` and write (or overwrite) the object.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on transport failure.
    pub async fn put(&self, trace: &SyracuseTrace) -> Result<(), StoreError> {
        self.ensure_container().await?;

        let object = object_name(trace.value);
        let body = serde_json::to_string(&trace.steps).map_err(|e| StoreError::CorruptData {
            object: object.clone(),
            message: format!("failed to encode steps: {e}"),
        })?;

        let _: () = self
            .client
            .set(&object, body.as_str(), None, None, false)
            .await
            .map_err(|e| StoreError::unavailable(StoreKind::Blob, e))?;

        tracing::debug!(
            value = trace.value,
            object = object.as_str(),
            steps = trace.steps.len(),
            "Stored trajectory object"
        );
        Ok(())
    }

    /// Delete the trajectory object for `value`, if any.
    ///
    /// Only used by tests and operational cleanup.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on transport failure.
    pub async fn delete(&self, value: i64) -> Result<(), StoreError> {
        let _: u32 = self
            .client
            .del(&object_name(value))
            .await
            .map_err(|e| StoreError::unavailable(StoreKind::Blob, e))?;
        Ok(())
    }

    /// Return a reference to the underlying [`Client`].
    pub const fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait::async_trait]
impl SequenceStore for BlobSequenceStore {
    async fn get(&self, value: i64) -> Result<Option<SyracuseTrace>, StoreError> {
        Self::get(self, value).await
    }

    async fn put(&self, trace: &SyracuseTrace) -> Result<(), StoreError> {
        Self::put(self, trace).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_names_are_textual_integers() {
        assert_eq!(object_name(6), "sequence_6");
        assert_eq!(object_name(1000), "sequence_1000");
        assert_eq!(object_name(-3), "sequence_-3");
    }
}
