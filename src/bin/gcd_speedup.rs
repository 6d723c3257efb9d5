use std::time::Instant;

use lib::{approx_pi_with, gcd, gcd_binary};

// Smaller bound than the main estimator so both passes finish in seconds.
const N: u64 = 4000;

fn main() {
    let start = Instant::now();
    let pi_euclid = approx_pi_with(N, gcd);
    let euclid = start.elapsed();

    let start = Instant::now();
    let pi_binary = approx_pi_with(N, gcd_binary);
    let binary = start.elapsed();

    // both gcds are exact, so the estimates must match to the bit
    assert_eq!(pi_euclid.to_bits(), pi_binary.to_bits());

    println!("euclidean: {:?}", euclid);
    println!("binary:    {:?}", binary);
    println!("N: {}", N);
    println!("pi: {}", pi_euclid);
    println!(
        "speedup: {:.2}x",
        euclid.as_secs_f64() / binary.as_secs_f64()
    );
}
