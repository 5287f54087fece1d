//! Error types for the number-theory kernel.
//!
//! Fact computation is total and never fails; only trajectory
//! generation can error, either because the input is outside the
//! domain of the Syracuse rule or because the defensive iteration
//! bound was breached.

/// Errors that can occur when computing a Syracuse trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum KernelError {
    /// The Syracuse trajectory is undefined for non-positive input.
    #[error("syracuse trajectory is undefined for non-positive input {0}")]
    InvalidArgument(i64),

    /// The trajectory did not reach 1 within the iteration bound, or
    /// `3n + 1` left the 64-bit range. Universal termination of the
    /// Collatz rule is unproven, so the kernel refuses to iterate
    /// unboundedly.
    #[error("syracuse trajectory for {start} exceeded the bound of {max_steps} steps")]
    LimitExceeded {
        /// The starting value whose trajectory ran away.
        start: i64,
        /// The iteration bound that was breached.
        max_steps: usize,
    },
}
