//! Precomputed multiplicative inverse tables for prime fields.
//!
//! Every field caches one [`InverseTable`] for its characteristic p. The
//! table maps each nonzero residue r in [1, p-1] to the unique s with
//! r * s = 1 (mod p), giving O(1) inverse lookups during polynomial long
//! division and element inversion.

use crate::error::{Error, Result};

/// Multiplicative inverses of the nonzero residues modulo a prime.
///
/// The table is built once per field by exhaustive pairwise search, which
/// is O(p^2) and intended for small to moderate primes. Callers needing a
/// large characteristic should compute inverses per lookup with the
/// extended Euclidean algorithm instead of caching a table; the rest of
/// the crate only depends on the lookup contract, not on how the table is
/// filled.
///
/// Construction doubles as a primality check: a composite modulus leaves
/// some residue without an inverse, which is reported as an error rather
/// than recorded as a hole in the table.
#[derive(Debug, Clone)]
pub struct InverseTable {
    /// The prime modulus.
    prime: u64,
    /// Inverse table: inv[r] = r^(-1) mod prime (inv[0] is unused).
    inv: Vec<u64>,
}

impl InverseTable {
    /// Build the inverse table for the prime modulus `p`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPrime`] if `p < 2` or if some nonzero residue
    /// has no inverse, which happens exactly when `p` is composite.
    ///
    /// # Examples
    ///
    /// ```
    /// use evariste::InverseTable;
    ///
    /// let table = InverseTable::new(7).unwrap();
    /// assert_eq!(table.inv(3), 5); // 3 * 5 = 15 = 1 (mod 7)
    /// assert_eq!(table.inv(5), 3);
    /// assert_eq!(table.inv(6), 6);
    ///
    /// assert!(InverseTable::new(6).is_err());
    /// ```
    pub fn new(p: u64) -> Result<Self> {
        if p < 2 {
            return Err(Error::NotPrime(p));
        }

        let mut inv = vec![0u64; p as usize];
        for r in 1..p {
            let mut found = None;
            for s in 1..p {
                if (u128::from(r) * u128::from(s)) % u128::from(p) == 1 {
                    found = Some(s);
                    break;
                }
            }
            match found {
                Some(s) => inv[r as usize] = s,
                None => return Err(Error::NotPrime(p)),
            }
        }

        Ok(Self { prime: p, inv })
    }

    /// Get the prime modulus this table was built for.
    #[must_use]
    pub fn prime(&self) -> u64 {
        self.prime
    }

    /// Look up the multiplicative inverse of `r` modulo the prime.
    ///
    /// # Panics
    ///
    /// Panics if `r` is zero or not a residue (`r >= p`).
    #[must_use]
    pub fn inv(&self, r: u64) -> u64 {
        assert!(r != 0, "inverse of zero");
        assert!(r < self.prime, "residue {r} out of range for modulus {}", self.prime);
        self.inv[r as usize]
    }

    /// Checked inverse lookup.
    ///
    /// Returns `None` if `r` is zero or not a residue.
    #[must_use]
    pub fn checked_inv(&self, r: u64) -> Option<u64> {
        if r == 0 || r >= self.prime {
            None
        } else {
            Some(self.inv[r as usize])
        }
    }
}
