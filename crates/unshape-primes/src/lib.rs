//! Prime factor queries for integer automata.
//!
//! Provides the greatest prime factor (GPF) of an integer, a primality test
//! derived from it, and a compact factorization format with superscript
//! exponents. [`PrimeCache`] memoizes the first and last of these for callers
//! that ask about the same values repeatedly.
//!
//! # Example
//!
//! ```
//! use unshape_primes::{PrimeCache, factorize, gpf, is_prime};
//!
//! assert_eq!(gpf(84), 7);
//! assert!(is_prime(7));
//! assert_eq!(factorize(84), "2²·3·7");
//!
//! // Same answers, memoized
//! let cache = PrimeCache::new();
//! assert_eq!(cache.gpf(84), 7);
//! assert_eq!(cache.factorize(84), "2²·3·7");
//! ```
//!
//! # Conventions
//!
//! Inputs `n <= 1` have no prime factors. [`gpf`] returns `1` for them,
//! [`is_prime`] returns `false`, and [`factorize`] returns `"1"` for one and
//! the plain decimal form for anything below.

mod cache;
mod factor;
mod gpf;
mod superscript;

pub use cache::{CacheStats, PrimeCache};
pub use factor::{FACTOR_SEPARATOR, Factor, Factorization, factor, factorize};
pub use gpf::{gpf, is_prime};
pub use superscript::{SUPERSCRIPT_DIGITS, superscript_char, to_superscript};

// ============================================================================
// Invariant tests - mathematical properties that must hold
// ============================================================================
