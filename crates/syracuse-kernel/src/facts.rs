//! Parity, perfection, and primality tests.
//!
//! All three tests are total over `i64`. Perfection and primality are
//! mathematically defined only for positive integers; non-positive
//! input resolves to `false` rather than erroring, so [`compute_facts`]
//! never fails.

use syracuse_types::NumberFacts;

/// Compute all scalar facts for `n` in one pass.
pub fn compute_facts(n: i64) -> NumberFacts {
    NumberFacts {
        value: n,
        is_even: is_even(n),
        is_perfect: is_perfect(n),
        is_prime: is_prime(n),
    }
}

/// Whether `n` is divisible by 2. Zero counts as even.
pub const fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Whether `n` equals the sum of its proper divisors.
///
/// Classic definition: 6 = 1 + 2 + 3, 28 = 1 + 2 + 4 + 7 + 14.
/// Divisors are accumulated in pairs up to `sqrt(n)`, so the cost is
/// `O(sqrt n)`. Values below 2 are never perfect (the proper divisor
/// sum of 1 is 0).
#[allow(clippy::arithmetic_side_effects)] // d in [2, sqrt(n)], never zero
pub fn is_perfect(n: i64) -> bool {
    let Ok(n) = u64::try_from(n) else {
        return false;
    };
    if n < 2 {
        return false;
    }

    // 1 divides everything; pair up the rest as (d, n / d).
    let mut sum: u64 = 1;
    let mut d: u64 = 2;
    while d <= n / d {
        if n % d == 0 {
            sum = sum.saturating_add(d);
            let paired = n / d;
            if paired != d {
                sum = sum.saturating_add(paired);
            }
        }
        d += 1;
    }
    sum == n
}

/// Whether `n` is prime.
///
/// Trial division over odd candidates up to `sqrt(n)`. The loop
/// condition `d <= n / d` avoids computing `d * d`, which would
/// overflow for candidates near `sqrt(i64::MAX)`.
#[allow(clippy::arithmetic_side_effects)] // d in [3, sqrt(n)], never zero
pub fn is_prime(n: i64) -> bool {
    let Ok(n) = u64::try_from(n) else {
        return false;
    };
    if n < 2 {
        return false;
    }
    if n < 4 {
        // 2 and 3
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut d: u64 = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
