//! Finite field descriptors.
//!
//! A [`Field`] describes GF(p^n) by its prime characteristic p, extension
//! dimension n, and (for n > 1) an irreducible defining polynomial over
//! GF(p). The descriptor is immutable once constructed and is shared by
//! every [`Polynomial`] and [`Element`](crate::Element) built against it.
//!
//! The field is reference-counted internally, so cloning is cheap and two
//! clones always compare equal; independently constructed fields compare
//! equal when their (characteristic, dimension, defining polynomial)
//! triples agree.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::poly::Polynomial;
use crate::tables::InverseTable;
use crate::utils::is_prime;

/// A finite field GF(p^n).
///
/// # Example
///
/// ```
/// use evariste::{Field, Polynomial};
///
/// // The prime field GF(7)
/// let gf7 = Field::prime(7).unwrap();
/// assert_eq!(gf7.size(), 7);
///
/// // The extension field GF(2^3) = GF(2)[x] / (x^3 + x + 1)
/// let gf2 = Field::prime(2).unwrap();
/// let irr = Polynomial::new(&[1, 1, 0, 1], &gf2);
/// let gf8 = Field::extension(2, 3, irr).unwrap();
/// assert_eq!(gf8.size(), 8);
/// assert_eq!(gf8.characteristic(), 2);
/// assert_eq!(gf8.dimension(), 3);
/// ```
#[derive(Clone)]
pub struct Field {
    repr: Arc<FieldRepr>,
}

#[derive(Clone)]
struct FieldRepr {
    /// The prime characteristic p.
    characteristic: u64,
    /// The extension dimension n.
    dimension: u32,
    /// The field order p^n.
    size: u64,
    /// The defining polynomial over GF(p); present iff dimension > 1.
    irreducible: Option<Polynomial>,
    /// Cached multiplicative inverses for GF(p).
    inverses: InverseTable,
    /// Display symbol for the indeterminate.
    symbol: String,
}

impl Field {
    /// Construct GF(p^n), dispatching on the dimension.
    ///
    /// A dimension of 1 builds the prime field and must come without a
    /// defining polynomial; a dimension above 1 builds an extension field
    /// and requires one.
    ///
    /// # Errors
    ///
    /// All the conditions of [`Field::prime`] and [`Field::extension`],
    /// plus [`Error::MissingIrreducible`] and
    /// [`Error::UnexpectedIrreducible`] when the polynomial argument does
    /// not match the dimension.
    pub fn new(characteristic: u64, dimension: u32, irreducible: Option<Polynomial>) -> Result<Self> {
        match (dimension, irreducible) {
            (0, _) => Err(Error::ZeroDimension),
            (1, None) => Self::prime(characteristic),
            (1, Some(_)) => Err(Error::UnexpectedIrreducible { characteristic }),
            (_, None) => Err(Error::MissingIrreducible {
                characteristic,
                dimension,
            }),
            (_, Some(f)) => Self::extension(characteristic, dimension, f),
        }
    }

    /// Construct the prime field GF(p).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPrime`] if `p` is not prime.
    pub fn prime(p: u64) -> Result<Self> {
        if !is_prime(p) {
            return Err(Error::NotPrime(p));
        }
        let inverses = InverseTable::new(p)?;
        Ok(Self {
            repr: Arc::new(FieldRepr {
                characteristic: p,
                dimension: 1,
                size: p,
                irreducible: None,
                inverses,
                symbol: "x".to_string(),
            }),
        })
    }

    /// Construct the extension field GF(p^n) defined by `irreducible`.
    ///
    /// The polynomial must be over GF(p) and of degree exactly `n`. Its
    /// irreducibility is an unchecked precondition: a reducible polynomial
    /// is only detected later, when some element inversion fails with
    /// [`Error::NotInvertible`].
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroDimension`] if `n` is 0.
    /// - [`Error::UnexpectedIrreducible`] if `n` is 1.
    /// - [`Error::NotPrime`] if `p` is not prime.
    /// - [`Error::FieldMismatch`] if the polynomial's characteristic is
    ///   not `p`.
    /// - [`Error::IrreducibleDegreeMismatch`] if the polynomial's degree
    ///   is not `n`.
    /// - [`Error::FieldTooLarge`] if p^n overflows 64 bits.
    pub fn extension(p: u64, n: u32, irreducible: Polynomial) -> Result<Self> {
        if n == 0 {
            return Err(Error::ZeroDimension);
        }
        if n == 1 {
            return Err(Error::UnexpectedIrreducible { characteristic: p });
        }
        if !is_prime(p) {
            return Err(Error::NotPrime(p));
        }
        if irreducible.field().characteristic() != p {
            return Err(Error::FieldMismatch {
                lhs: format!("GF({p})"),
                rhs: irreducible.field().to_string(),
            });
        }
        if irreducible.is_zero() || irreducible.degree() != n as usize {
            return Err(Error::IrreducibleDegreeMismatch {
                degree: irreducible.degree(),
                dimension: n,
            });
        }
        let size = p.checked_pow(n).ok_or(Error::FieldTooLarge {
            characteristic: p,
            dimension: n,
        })?;
        let inverses = InverseTable::new(p)?;
        Ok(Self {
            repr: Arc::new(FieldRepr {
                characteristic: p,
                dimension: n,
                size,
                irreducible: Some(irreducible),
                inverses,
                symbol: "x".to_string(),
            }),
        })
    }

    /// Rebind the display symbol for the indeterminate.
    ///
    /// The symbol is presentation-only: it does not participate in field
    /// equality or hashing.
    #[must_use]
    pub fn with_symbol(&self, symbol: impl Into<String>) -> Self {
        let mut repr = (*self.repr).clone();
        repr.symbol = symbol.into();
        Self {
            repr: Arc::new(repr),
        }
    }

    /// The prime characteristic p.
    #[must_use]
    pub fn characteristic(&self) -> u64 {
        self.repr.characteristic
    }

    /// The extension dimension n.
    #[must_use]
    pub fn dimension(&self) -> u32 {
        self.repr.dimension
    }

    /// The field order p^n.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.repr.size
    }

    /// The defining polynomial, present iff the dimension is above 1.
    #[must_use]
    pub fn irreducible(&self) -> Option<&Polynomial> {
        self.repr.irreducible.as_ref()
    }

    /// The precomputed inverse table for GF(p).
    #[must_use]
    pub fn inverses(&self) -> &InverseTable {
        &self.repr.inverses
    }

    /// The display symbol for the indeterminate.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.repr.symbol
    }

    /// The additive identity as a polynomial.
    #[must_use]
    pub fn zero(&self) -> Polynomial {
        Polynomial::from_integer(self, 0)
    }

    /// The multiplicative identity as a polynomial.
    #[must_use]
    pub fn one(&self) -> Polynomial {
        Polynomial::from_integer(self, 1)
    }

    /// The element whose coefficients are the base-p digits of `index`.
    ///
    /// Elements of GF(p^n) are enumerated as integers
    /// `c_0 + c_1 * p + ... + c_{n-1} * p^(n-1)` with each digit a
    /// coefficient in [0, p-1]. The index is taken modulo the field order.
    #[must_use]
    pub fn element(&self, index: u64) -> Element {
        let p = self.characteristic();
        let mut v = index % self.size();
        let coeffs: Vec<u64> = (0..self.dimension())
            .map(|_| {
                let digit = v % p;
                v /= p;
                digit
            })
            .collect();
        Element::from_parts(Polynomial::from_reduced(coeffs, self.clone()), self.clone())
    }

    /// Iterate over all elements of the field.
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        (0..self.size()).map(move |v| self.element(v))
    }

    /// Iterate over all nonzero elements of the field.
    pub fn units(&self) -> impl Iterator<Item = Element> + '_ {
        (1..self.size()).map(move |v| self.element(v))
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.repr, &other.repr) {
            return true;
        }
        self.repr.characteristic == other.repr.characteristic
            && self.repr.dimension == other.repr.dimension
            && self.repr.irreducible.as_ref().map(Polynomial::coeffs)
                == other.repr.irreducible.as_ref().map(Polynomial::coeffs)
    }
}

impl Eq for Field {}

impl Hash for Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.repr.characteristic.hash(state);
        self.repr.dimension.hash(state);
        if let Some(irr) = &self.repr.irreducible {
            irr.coeffs().hash(state);
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dimension() == 1 {
            write!(f, "GF({})", self.characteristic())
        } else {
            write!(f, "GF({}^{})", self.characteristic(), self.dimension())
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf8() -> Field {
        let gf2 = Field::prime(2).unwrap();
        let irr = Polynomial::new(&[1, 1, 0, 1], &gf2);
        Field::extension(2, 3, irr).unwrap()
    }

    #[test]
    fn test_prime_field() {
        let gf7 = Field::prime(7).unwrap();
        assert_eq!(gf7.characteristic(), 7);
        assert_eq!(gf7.dimension(), 1);
        assert_eq!(gf7.size(), 7);
        assert!(gf7.irreducible().is_none());
    }

    #[test]
    fn test_extension_field() {
        let f = gf8();
        assert_eq!(f.characteristic(), 2);
        assert_eq!(f.dimension(), 3);
        assert_eq!(f.size(), 8);
        assert_eq!(f.irreducible().unwrap().coeffs(), &[1, 1, 0, 1]);
    }

    #[test]
    fn test_new_dispatch() {
        let gf2 = Field::prime(2).unwrap();
        let irr = Polynomial::new(&[1, 1, 0, 1], &gf2);

        assert_eq!(Field::new(7, 1, None).unwrap(), Field::prime(7).unwrap());
        assert_eq!(Field::new(2, 3, Some(irr.clone())).unwrap(), gf8());

        assert!(matches!(Field::new(7, 0, None), Err(Error::ZeroDimension)));
        assert!(matches!(
            Field::new(2, 1, Some(irr.clone())),
            Err(Error::UnexpectedIrreducible { characteristic: 2 })
        ));
        assert!(matches!(
            Field::new(2, 3, None),
            Err(Error::MissingIrreducible {
                characteristic: 2,
                dimension: 3
            })
        ));
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(Field::prime(6), Err(Error::NotPrime(6))));
        assert!(matches!(Field::prime(1), Err(Error::NotPrime(1))));

        // Degree 2 polynomial cannot define a cubic extension
        let gf2 = Field::prime(2).unwrap();
        let quad = Polynomial::new(&[1, 1, 1], &gf2);
        assert!(matches!(
            Field::extension(2, 3, quad),
            Err(Error::IrreducibleDegreeMismatch {
                degree: 2,
                dimension: 3
            })
        ));

        // Defining polynomial over the wrong characteristic
        let gf3 = Field::prime(3).unwrap();
        let wrong = Polynomial::new(&[1, 1, 0, 1], &gf3);
        assert!(matches!(
            Field::extension(2, 3, wrong),
            Err(Error::FieldMismatch { .. })
        ));

        // p^n overflowing 64 bits
        let gf5 = Field::prime(5).unwrap();
        let mut coeffs = vec![0i64; 29];
        coeffs[0] = 2;
        coeffs[1] = 1;
        coeffs[28] = 1;
        let big = Polynomial::new(&coeffs, &gf5);
        assert!(matches!(
            Field::extension(5, 28, big),
            Err(Error::FieldTooLarge { .. })
        ));
    }

    #[test]
    fn test_identities() {
        let gf7 = Field::prime(7).unwrap();
        assert!(gf7.zero().is_zero());
        assert_eq!(gf7.one().coeffs(), &[1]);
    }

    #[test]
    fn test_equality() {
        let a = Field::prime(7).unwrap();
        let b = Field::prime(7).unwrap();
        let c = Field::prime(5).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, a.clone());

        // The display symbol does not participate in equality
        assert_eq!(a, a.with_symbol("y"));

        // Extensions compare by defining polynomial as well
        let gf2 = Field::prime(2).unwrap();
        let f1 = Field::extension(2, 3, Polynomial::new(&[1, 1, 0, 1], &gf2)).unwrap();
        let f2 = Field::extension(2, 3, Polynomial::new(&[1, 1, 0, 1], &gf2)).unwrap();
        let f3 = Field::extension(2, 3, Polynomial::new(&[1, 0, 1, 1], &gf2)).unwrap();
        assert_eq!(f1, f2);
        assert_ne!(f1, f3);
        assert_ne!(f1, gf2);
    }

    #[test]
    fn test_element_enumeration() {
        let f = gf8();
        let all: Vec<Element> = f.elements().collect();
        assert_eq!(all.len(), 8);
        assert!(all[0].is_zero());

        // Index 5 = 1 + 0*2 + 1*4 -> coefficients [1, 0, 1]
        assert_eq!(all[5].poly().coeffs(), &[1, 0, 1]);

        let units: Vec<Element> = f.units().collect();
        assert_eq!(units.len(), 7);
        assert!(units.iter().all(|e| !e.is_zero()));
    }

    #[test]
    fn test_display() {
        let gf7 = Field::prime(7).unwrap();
        assert_eq!(gf7.to_string(), "GF(7)");
        assert_eq!(format!("{gf7:?}"), "GF(7)");
        assert_eq!(gf8().to_string(), "GF(2^3)");
    }
}
