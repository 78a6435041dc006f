//! Prime factorization and its display form.
//!
//! A [`Factorization`] renders as `2³·3·5²`: primes ascending, exponents above
//! one in superscript, factors joined by a middle dot.

use crate::superscript::to_superscript;
use std::fmt;

/// Separator placed between factors when rendering.
pub const FACTOR_SEPARATOR: char = '·';

/// A prime raised to a positive power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Factor {
    /// The prime.
    pub prime: u64,
    /// How many times the prime divides the number (at least 1).
    pub exponent: u32,
}

impl Factor {
    /// Creates a factor.
    pub fn new(prime: u64, exponent: u32) -> Self {
        Self { prime, exponent }
    }

    /// Returns `prime^exponent`.
    pub fn value(&self) -> u64 {
        self.prime.pow(self.exponent)
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent == 1 {
            write!(f, "{}", self.prime)
        } else {
            write!(f, "{}{}", self.prime, to_superscript(self.exponent))
        }
    }
}

/// The prime factorization of a positive integer.
///
/// Factors are ordered by strictly increasing prime. The factorization of `1`
/// is empty and displays as `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Factorization {
    factors: Vec<Factor>,
}

impl Factorization {
    /// Returns the factors in increasing prime order.
    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    /// Returns `true` for the factorization of `1`.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Returns the number of distinct primes.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Returns the largest prime, or `None` for the factorization of `1`.
    pub fn largest_prime(&self) -> Option<u64> {
        self.factors.last().map(|f| f.prime)
    }

    /// Multiplies the factors back out.
    pub fn product(&self) -> u64 {
        self.factors.iter().map(Factor::value).product()
    }

    fn push(&mut self, prime: u64, exponent: u32) {
        if exponent > 0 {
            self.factors.push(Factor::new(prime, exponent));
        }
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.factors.split_first() else {
            return f.write_str("1");
        };
        write!(f, "{first}")?;
        for factor in rest {
            write!(f, "{FACTOR_SEPARATOR}{factor}")?;
        }
        Ok(())
    }
}

/// Factors `n` by trial division.
///
/// Returns `None` for `n < 1`, which has no prime factorization.
///
/// ```
/// use unshape_primes::factor;
///
/// let f = factor(360).unwrap();
/// assert_eq!(f.to_string(), "2³·3²·5");
/// assert_eq!(f.product(), 360);
/// assert!(factor(0).is_none());
/// ```
pub fn factor(n: i64) -> Option<Factorization> {
    if n < 1 {
        return None;
    }
    let mut rest = n as u64;
    let mut out = Factorization::default();

    let twos = rest.trailing_zeros();
    rest >>= twos;
    out.push(2, twos);

    let mut i = 3u64;
    while i * i <= rest {
        let mut exponent = 0;
        while rest % i == 0 {
            exponent += 1;
            rest /= i;
        }
        out.push(i, exponent);
        i += 2;
    }

    if rest > 1 {
        out.push(rest, 1);
    }
    Some(out)
}

/// Formats the prime factorization of `n`.
///
/// Values below one have no factorization and come back as their decimal
/// representation; `1` renders as `"1"`.
pub fn factorize(n: i64) -> String {
    match factor(n) {
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
