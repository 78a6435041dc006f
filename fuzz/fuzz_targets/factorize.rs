#![no_main]

use libfuzzer_sys::fuzz_target;
use unshape_primes::{factor, factorize, gpf, is_prime};

fuzz_target!(|n: i32| {
    // Prime queries should never panic, and factors must multiply back out
    let n = n as i64;
    let _ = factorize(n);
    let g = gpf(n);
    assert_eq!(is_prime(n), n > 1 && g == n);
    if let Some(f) = factor(n) {
        assert_eq!(f.product(), n as u64);
    }
});
