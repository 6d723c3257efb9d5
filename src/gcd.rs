/// Iterative Euclidean gcd. gcd(a, 0) = a and gcd(0, b) = b fall out of the
/// loop naturally; gcd(0, 0) is undefined and callers must not pass two zeros.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Binary gcd (Stein's algorithm). Same contract as [`gcd`], but trades the
/// modulo for shifts and subtraction, which is faster on machine integers.
pub fn gcd_binary(mut a: u64, mut b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    let mut za = a.trailing_zeros();
    let zb = b.trailing_zeros();
    // common power of two, restored at the end
    let k = za.min(zb);
    b >>= zb;

    while a != 0 {
        a >>= za;
        let d = a.max(b) - a.min(b);
        za = d.trailing_zeros();
        b = a.min(b);
        a = d;
    }

    b << k
}
