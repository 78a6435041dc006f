//! Greatest prime factor and the primality test derived from it.

/// Returns the greatest prime factor of `n`.
///
/// Values `n <= 1` have no prime factors; they map to the sentinel `1` so that
/// `n - gpf(n)` stays well defined for every input.
///
/// Runs trial division: all factors of two are stripped first, then odd
/// candidates up to the square root of the shrinking cofactor. Whatever is
/// left above one is itself prime and larger than anything divided out.
///
/// ```
/// use unshape_primes::gpf;
///
/// assert_eq!(gpf(1), 1);
/// assert_eq!(gpf(12), 3);
/// assert_eq!(gpf(13), 13);
/// assert_eq!(gpf(1024), 2);
/// ```
pub fn gpf(n: i64) -> i64 {
    if n <= 1 {
        return 1;
    }
    // Positive i64 always fits, and u64 keeps `i * i` from overflowing.
    let mut rest = n as u64;
    let mut largest = 1u64;

    if rest % 2 == 0 {
        largest = 2;
        rest >>= rest.trailing_zeros();
    }

    let mut i = 3u64;
    while i * i <= rest {
        while rest % i == 0 {
            largest = i;
            rest /= i;
        }
        i += 2;
    }

    if rest > 1 {
        largest = largest.max(rest);
    }
    largest as i64
}

/// Returns `true` if `n` is prime.
///
/// A number is prime exactly when its greatest prime factor is itself, so this
/// is answered by [`gpf`] rather than by a separate test.
pub fn is_prime(n: i64) -> bool {
    n > 1 && gpf(n) == n
}
