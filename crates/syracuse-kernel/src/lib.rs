//! Pure number-theory kernel for the Syracuse service.
//!
//! Everything in this crate is a deterministic function of its integer
//! argument: no I/O, no state, no connections. The data layer calls in
//! here when a write request arrives without precomputed facts or
//! trajectory.
//!
//! # Modules
//!
//! - [`facts`] -- parity, perfection, and primality tests
//! - [`syracuse`] -- bounded Collatz/Syracuse trajectory generation
//! - [`error`] -- kernel error types

pub mod error;
pub mod facts;
pub mod syracuse;

// Re-export primary items for convenience.
pub use error::KernelError;
pub use facts::compute_facts;
pub use syracuse::{MAX_STEPS, compute_syracuse};
