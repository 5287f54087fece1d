//! The two persisted fact classes.
//!
//! [`NumberFacts`] lives in the relational store (one row per value);
//! [`SyracuseTrace`] lives in the blob store (one object per value).
//! Both are immutable once computed for a given `value` -- the integer
//! itself is the identity key in both stores.

use serde::{Deserialize, Serialize};

/// Scalar arithmetic properties of a single integer.
///
/// Perfection and primality are defined only for positive integers;
/// for non-positive input both resolve to `false` by convention (the
/// kernel never fails when computing facts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFacts {
    /// The integer these facts describe. Identity key in both stores.
    pub value: i64,
    /// Whether `value` is divisible by 2.
    pub is_even: bool,
    /// Whether `value` equals the sum of its proper divisors.
    pub is_perfect: bool,
    /// Whether `value` is prime.
    pub is_prime: bool,
}

/// The Collatz/Syracuse trajectory of a positive integer.
///
/// `steps[0]` is the starting value; the sequence evolves under
/// `n -> n/2` (even) or `n -> 3n + 1` (odd) and includes the terminal
/// `1`. Undefined for non-positive starting values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyracuseTrace {
    /// The starting value of the trajectory.
    pub value: i64,
    /// The full trajectory, starting value and terminal `1` inclusive.
    pub steps: Vec<i64>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn number_facts_json_shape() {
        let facts = NumberFacts {
            value: 28,
            is_even: true,
            is_perfect: true,
            is_prime: false,
        };
        let json = serde_json::to_value(&facts).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "value": 28,
                "is_even": true,
                "is_perfect": true,
                "is_prime": false,
            })
        );
    }

    #[test]
    fn syracuse_trace_round_trips_through_json() {
        let trace = SyracuseTrace {
            value: 6,
            steps: vec![6, 3, 10, 5, 16, 8, 4, 2, 1],
        };
        let json = serde_json::to_string(&trace).unwrap();
        let back: SyracuseTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trace);
    }
}
