//! Shared type definitions for the Syracuse number-facts service.
//!
//! This crate is the single source of truth for the value objects that
//! flow between the number-theory kernel, the two stores, and the HTTP
//! surface. Everything here is plain data: no I/O, no connections.
//!
//! # Modules
//!
//! - [`facts`] -- the two persisted fact classes ([`NumberFacts`] and
//!   [`SyracuseTrace`])
//! - [`report`] -- merged read/write outcomes ([`LookupResult`],
//!   [`WriteReport`]) and the store discriminant ([`StoreKind`])

pub mod facts;
pub mod report;

// Re-export all public types at crate root for convenience.
pub use facts::{NumberFacts, SyracuseTrace};
pub use report::{LookupResult, StoreKind, WriteIssue, WriteReport};
