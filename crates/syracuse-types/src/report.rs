//! Merged read and write outcomes produced by the coordinator.
//!
//! The two stores share no transaction boundary, so both the read and
//! the write path report per-store outcomes instead of an all-or-nothing
//! result. Absence of data is always distinguished from failure to fetch
//! data: a missing half is `None`, a failed branch additionally surfaces
//! in logs (reads) or in [`WriteReport::errors`] (writes).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::facts::{NumberFacts, SyracuseTrace};

/// Which of the two backing stores an outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// The relational table holding scalar boolean properties.
    Relational,
    /// The object store holding the serialized trajectory.
    Blob,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relational => f.write_str("relational"),
            Self::Blob => f.write_str("blob"),
        }
    }
}

/// The merge of what each store returned for a single value.
///
/// Either half may be independently absent -- the two stores are not
/// guaranteed to agree on which values they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// The queried integer.
    pub value: i64,
    /// Scalar facts from the relational store, if present.
    pub facts: Option<NumberFacts>,
    /// The trajectory from the blob store, if present.
    pub sequence: Option<SyracuseTrace>,
}

impl LookupResult {
    /// An empty result for `value` with both halves absent.
    #[must_use]
    pub const fn absent(value: i64) -> Self {
        Self {
            value,
            facts: None,
            sequence: None,
        }
    }
}

/// A single per-store problem recorded during a write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteIssue {
    /// The store the issue occurred in.
    pub store: StoreKind,
    /// Human-readable description of what went wrong.
    pub message: String,
}

/// Per-store outcome of a dual write.
///
/// A failure in one store never rolls back the other, so callers must
/// inspect both flags. Issues are ordered as they were observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteReport {
    /// The integer that was written.
    pub value: i64,
    /// Whether exactly one row was inserted into the relational store.
    pub relational_written: bool,
    /// Whether the trajectory object was written to the blob store.
    pub blob_written: bool,
    /// Per-store problems, in observation order. A duplicate-key insert
    /// shows up here as informational rather than as a hard failure.
    pub errors: Vec<WriteIssue>,
}

impl WriteReport {
    /// A fresh report for `value` with nothing written yet.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            relational_written: false,
            blob_written: false,
            errors: Vec::new(),
        }
    }

    /// True when both stores acknowledged their write.
    #[must_use]
    pub fn fully_written(&self) -> bool {
        self.relational_written && self.blob_written
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn store_kind_display() {
        assert_eq!(StoreKind::Relational.to_string(), "relational");
        assert_eq!(StoreKind::Blob.to_string(), "blob");
    }

    #[test]
    fn absent_lookup_has_no_halves() {
        let result = LookupResult::absent(7);
        assert_eq!(result.value, 7);
        assert!(result.facts.is_none());
        assert!(result.sequence.is_none());
    }

    #[test]
    fn fresh_report_is_not_fully_written() {
        let report = WriteReport::new(9);
        assert!(!report.fully_written());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn write_report_serializes_errors_in_order() {
        let mut report = WriteReport::new(3);
        report.relational_written = true;
        report.errors.push(WriteIssue {
            store: StoreKind::Blob,
            message: String::from("transport failure"),
        });
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["errors"][0]["store"], "blob");
        assert_eq!(json["relational_written"], true);
        assert_eq!(json["blob_written"], false);
    }
}
