//! Error types for the data layer.
//!
//! [`StoreError`] deliberately classifies failures by what the
//! coordinator must do about them rather than by driver: transport
//! failures, duplicate inserts, and corrupt payloads all get distinct
//! variants because each is handled differently. In particular,
//! absence of data is never an error here -- the store accessors
//! return `Option` for that.

use syracuse_types::StoreKind;

/// Errors that can occur in either backing store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or the operation failed in
    /// transit. Covers connection, pool, and protocol failures.
    #[error("{store} store unavailable: {message}")]
    Unavailable {
        /// Which store failed.
        store: StoreKind,
        /// Driver-level description of the failure.
        message: String,
    },

    /// A facts row for this value already exists. The relational table
    /// is insert-only, so this is a normal outcome for repeated writes;
    /// the coordinator treats it as informational.
    #[error("facts row for {0} already exists")]
    DuplicateKey(i64),

    /// A stored trajectory object exists but its content could not be
    /// decoded. Distinct from absence: the object is there, it is just
    /// not a JSON integer array.
    #[error("corrupt trajectory object {object}: {message}")]
    CorruptData {
        /// The object name that failed to decode.
        object: String,
        /// What the decoder rejected.
        message: String,
    },

    /// A connection URL or other configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Classify a driver error as a transport failure of `store`.
    pub fn unavailable(store: StoreKind, err: impl std::fmt::Display) -> Self {
        Self::Unavailable {
            store,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_names_the_store() {
        let err = StoreError::unavailable(StoreKind::Blob, "connection refused");
        assert_eq!(
            err.to_string(),
            "blob store unavailable: connection refused"
        );
    }

    #[test]
    fn duplicate_key_names_the_value() {
        let err = StoreError::DuplicateKey(28);
        assert!(err.to_string().contains("28"));
    }
}
