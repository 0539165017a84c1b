//! Utility functions for primality testing and modular arithmetic.
//!
//! This module provides the fundamental integer routines used by field
//! construction, particularly for validating prime characteristics.

mod primality;

pub use primality::is_prime;

/// Compute the power of a base modulo a modulus using binary exponentiation.
///
/// Computes `base^exp mod modulus` efficiently in O(log exp) time.
///
/// # Panics
///
/// Panics if `modulus` is 0.
///
/// # Examples
///
/// ```
/// use evariste::utils::mod_pow;
///
/// assert_eq!(mod_pow(2, 10, 1000), 24);  // 2^10 = 1024, 1024 mod 1000 = 24
/// assert_eq!(mod_pow(3, 5, 7), 5);       // 3^5 = 243, 243 mod 7 = 5
/// ```
#[must_use]
pub fn mod_pow(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus > 0, "modulus must be positive");

    if modulus == 1 {
        return 0;
    }

    let mut result = 1u64;
    base %= modulus;

    while exp > 0 {
        if exp & 1 == 1 {
            result = ((u128::from(result) * u128::from(base)) % u128::from(modulus)) as u64;
        }
        exp >>= 1;
        base = ((u128::from(base) * u128::from(base)) % u128::from(modulus)) as u64;
    }

    result
}
