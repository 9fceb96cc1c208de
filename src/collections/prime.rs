//! Primality helpers for hash table capacities.
//!
//! Table capacities are always prime, which spreads quadratic probe
//! sequences more evenly and gives resize a well-defined target
//! (the smallest prime at least `2 * capacity + 1`).

/// Check whether `n` is prime by trial division.
pub fn is_prime(n: usize) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Return the smallest prime greater than or equal to `n`.
pub fn next_prime(n: usize) -> usize {
    if n <= 2 {
        return 2;
    }

    let mut candidate = if n % 2 == 0 { n + 1 } else { n };
    while !is_prime(candidate) {
        candidate += 2;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(11));
        assert!(is_prime(23));
        assert!(!is_prime(25));
        assert!(is_prime(47));
        assert!(is_prime(97));
        assert!(!is_prime(95));
    }

    #[test]
    fn test_next_prime() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(2), 2);
        assert_eq!(next_prime(3), 3);
        assert_eq!(next_prime(4), 5);
        assert_eq!(next_prime(11), 11);
        assert_eq!(next_prime(23), 23);
        assert_eq!(next_prime(24), 29);
        assert_eq!(next_prime(95), 97);
    }

    #[test]
    fn test_next_prime_doubling_chain() {
        // The capacity growth sequence used by the hash map.
        let mut capacity = 11;
        for expected in [23, 47, 97, 197] {
            capacity = next_prime(capacity * 2 + 1);
            assert_eq!(capacity, expected);
        }
    }
}
