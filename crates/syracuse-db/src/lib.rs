//! Data layer for the Syracuse number-facts service (`PostgreSQL` + blob
//! store).
//!
//! Facts about a single integer are split across two heterogeneous
//! stores: a relational table holds the scalar boolean properties
//! (parity, perfection, primality) and an object store holds the
//! potentially large Syracuse trajectory. The stores share no
//! transaction boundary; the [`FactCoordinator`] fans out to both
//! concurrently and reports per-store outcomes instead of faking
//! atomicity.
//!
//! # Architecture
//!
//! ```text
//! Caller
//!     |
//!     +-- lookup(n) --> { RelationalFactStore.get ‖ BlobSequenceStore.get }
//!     |                   --> merged LookupResult
//!     |
//!     +-- store(n, ..) --> kernel (when facts/sequence absent)
//!                          --> { RelationalFactStore.put ‖ BlobSequenceStore.put }
//!                          --> WriteReport
//! ```
//!
//! # Modules
//!
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`relational`] -- typed accessor over the `number_facts` table
//! - [`blob`] -- trajectory objects in a Redis-compatible blob store
//! - [`coordinator`] -- store traits and the fan-out/fan-in coordinator
//! - [`memory`] -- in-memory stores for tests and local development
//! - [`error`] -- shared error types

pub mod blob;
pub mod coordinator;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod relational;

// Re-export primary types for convenience.
pub use blob::BlobSequenceStore;
pub use coordinator::{FactCoordinator, FactStore, SequenceStore};
pub use error::StoreError;
pub use memory::{MemoryFactStore, MemorySequenceStore};
pub use postgres::{PostgresConfig, PostgresPool};
pub use relational::RelationalFactStore;
