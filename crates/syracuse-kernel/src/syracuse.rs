//! Bounded Collatz/Syracuse trajectory generation.
//!
//! The trajectory of a positive integer `n` repeatedly applies
//! `n -> n/2` (even) or `n -> 3n + 1` (odd) until it reaches 1.
//! Termination is observed empirically for every value ever tested but
//! remains unproven, so iteration is capped at [`MAX_STEPS`] -- a
//! deliberate defensive policy, not an expected outcome.

use syracuse_types::SyracuseTrace;

use crate::error::KernelError;

/// Upper bound on trajectory length before giving up.
///
/// The longest known trajectory for any 64-bit starting value is well
/// under 3,000 entries, so this bound only trips on behavior that would
/// contradict the Collatz conjecture.
pub const MAX_STEPS: usize = 10_000;

/// Compute the full Syracuse trajectory of `n`, terminal 1 inclusive.
///
/// `steps[0]` is `n` itself; `compute_syracuse(1)` yields `[1]`.
///
/// # Errors
///
/// Returns [`KernelError::InvalidArgument`] when `n <= 0` (the rule is
/// undefined there). Returns [`KernelError::LimitExceeded`] when the
/// trajectory does not reach 1 within [`MAX_STEPS`] entries or when
/// `3n + 1` overflows `i64` -- both are the same runaway guard.
pub fn compute_syracuse(n: i64) -> Result<SyracuseTrace, KernelError> {
    if n <= 0 {
        return Err(KernelError::InvalidArgument(n));
    }

    let mut steps = vec![n];
    let mut current = n;
    while current != 1 {
        if steps.len() >= MAX_STEPS {
            return Err(KernelError::LimitExceeded {
                start: n,
                max_steps: MAX_STEPS,
            });
        }
        current = next_step(current).ok_or(KernelError::LimitExceeded {
            start: n,
            max_steps: MAX_STEPS,
        })?;
        steps.push(current);
    }

    Ok(SyracuseTrace { value: n, steps })
}

/// One application of the Collatz rule. `None` when `3n + 1` leaves
/// the 64-bit range.
const fn next_step(n: i64) -> Option<i64> {
    if n % 2 == 0 {
        Some(n / 2)
    } else {
        match n.checked_mul(3) {
            Some(tripled) => tripled.checked_add(1),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

    use super::*;

    #[test]
    fn trajectory_of_six() {
        let trace = compute_syracuse(6).unwrap();
        assert_eq!(trace.value, 6);
        assert_eq!(trace.steps, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
    }

    #[test]
    fn trajectory_of_one_is_just_one() {
        let trace = compute_syracuse(1).unwrap();
        assert_eq!(trace.steps, vec![1]);
    }

    #[test]
    fn trajectory_of_twenty_seven_is_long() {
        // 27 famously takes 111 steps to reach 1: 112 entries inclusive.
        let trace = compute_syracuse(27).unwrap();
        assert_eq!(trace.steps.len(), 112);
        assert_eq!(trace.steps.first(), Some(&27));
        assert_eq!(trace.steps.last(), Some(&1));
    }

    #[test]
    fn powers_of_two_only_halve() {
        let trace = compute_syracuse(16).unwrap();
        assert_eq!(trace.steps, vec![16, 8, 4, 2, 1]);
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(
            compute_syracuse(0),
            Err(KernelError::InvalidArgument(0))
        );
    }

    #[test]
    fn negatives_are_rejected() {
        assert_eq!(
            compute_syracuse(-3),
            Err(KernelError::InvalidArgument(-3))
        );
    }

    #[test]
    fn overflow_trips_the_runaway_guard() {
        // i64::MAX is odd, so the very first step computes 3n + 1 and
        // overflows, which is reported as the defensive limit.
        let result = compute_syracuse(i64::MAX);
        assert_eq!(
            result,
            Err(KernelError::LimitExceeded {
                start: i64::MAX,
                max_steps: MAX_STEPS,
            })
        );
    }

    #[test]
    fn every_step_follows_the_rule() {
        let trace = compute_syracuse(97).unwrap();
        for pair in trace.steps.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a % 2 == 0 {
                assert_eq!(b, a / 2);
            } else {
                assert_eq!(b, 3 * a + 1);
            }
        }
    }
}
