use std::time::Instant;

use lib::approx_pi;

// Bound for the coprimality count. 10000 means 10^8 gcd calls, which lands
// around a few seconds in a release build.
const N: u64 = 10000;

fn main() {
    let start = Instant::now();
    let pi = approx_pi(N);
    let elapsed = start.elapsed();

    println!("calc_pi: {:?}", elapsed);
    println!("N: {}", N);
    println!("pi: {}", pi);
}
