use itertools::Itertools;

use crate::gcd::gcd;

/// Counts the pairs (a, b) in [1, n]^2 with gcd(a, b) = 1, enumerated a-major
/// then b-minor. (1, 1) always counts, so the result is at least 1 for n >= 1.
pub fn count_coprime_pairs(n: u64) -> u64 {
    count_coprime_pairs_with(n, gcd)
}

fn count_coprime_pairs_with(n: u64, gcd_fn: fn(u64, u64) -> u64) -> u64 {
    (1..=n)
        .cartesian_product(1..=n)
        .filter(|&(a, b)| gcd_fn(a, b) == 1)
        .count() as u64
}

/// Estimates pi from the density of coprime pairs in [1, n]^2. The probability
/// that two integers chosen from [1, n] are coprime tends to 6/pi^2 as n grows,
/// so pi ~ sqrt(6 / probability). Deterministic, O(n^2) gcd calls, O(1) space.
pub fn approx_pi(n: u64) -> f64 {
    approx_pi_with(n, gcd)
}

/// Same estimate with a caller-chosen gcd, so that gcd implementations can be
/// timed against each other on identical work.
pub fn approx_pi_with(n: u64, gcd_fn: fn(u64, u64) -> u64) -> f64 {
    let cnt = count_coprime_pairs_with(n, gcd_fn);
    // cnt >= 1 for any n >= 1, so prob > 0 and the division is safe
    let prob = cnt as f64 / (n * n) as f64;
    (6.0 / prob).sqrt()
}
