//! Deterministic primality testing for 64-bit moduli.
//!
//! Miller–Rabin with the first twelve primes as witnesses is exact for
//! every `n < 2⁶⁴`, which covers the whole range of moduli accepted by
//! [`PrimeField`](super::PrimeField).

const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut acc = 1 % m;
    base %= m;

    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }

    acc
}

/// Returns `true` if `n` is prime.
pub(crate) fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }

    for &p in &WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    // n - 1 = d · 2^s with d odd
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    'witness: for &a in &WITNESSES {
        let mut x = pow_mod(a, d, n);

        if x == 1 || x == n - 1 {
            continue;
        }

        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::is_prime;

    #[test]
    fn small_numbers() {
        let primes: Vec<u64> = (0..60).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59]
        );
    }

    #[test]
    fn toy_moduli() {
        assert!(is_prime(2089));
        assert!(is_prime(2357));
        assert!(!is_prime(2091));
    }

    #[test]
    fn carmichael_numbers_are_rejected() {
        for n in [561u64, 1105, 1729, 2465, 2821, 6601, 8911] {
            assert!(!is_prime(n), "{n} is a Carmichael number");
        }
    }

    #[test]
    fn large_values() {
        // 2⁶¹ − 1 is a Mersenne prime, 2⁶⁴ − 59 the largest 64-bit prime.
        assert!(is_prime((1u64 << 61) - 1));
        assert!(is_prime(u64::MAX - 58));
        assert!(!is_prime(u64::MAX));
    }
}
