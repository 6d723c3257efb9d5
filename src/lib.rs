pub mod gcd;
pub mod pi;

pub use gcd::{gcd, gcd_binary};
pub use pi::{approx_pi, approx_pi_with, count_coprime_pairs};
