//! Field elements.
//!
//! An [`Element`] is a polynomial already reduced to degree below the
//! field's dimension, tagged with the [`Field`] it belongs to. Element
//! arithmetic differs from raw polynomial ring arithmetic in one way:
//! every multiply, power, and divide reduces its result modulo the field's
//! defining polynomial (or modulo the characteristic for a prime field),
//! so results always stay inside the field.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::field::Field;
use crate::poly::Polynomial;

/// A member of a finite field GF(p^n).
///
/// Binary operations require both operands to belong to equal fields.
/// Elements are immutable value types: operations return new instances.
///
/// # Example
///
/// ```
/// use evariste::{Element, Field, Polynomial};
///
/// let gf2 = Field::prime(2).unwrap();
/// let gf8 = Field::extension(2, 3, Polynomial::new(&[1, 1, 0, 1], &gf2)).unwrap();
///
/// // The element x of GF(2^3)
/// let x = Element::new(Polynomial::new(&[0, 1], &gf2), &gf8).unwrap();
/// let inv = x.inv().unwrap();
///
/// assert_eq!(x.mul(&inv).unwrap(), Element::one(&gf8));
/// ```
#[derive(Clone)]
pub struct Element {
    poly: Polynomial,
    field: Field,
}

impl Element {
    /// Wrap a reduced polynomial as a member of `field`.
    ///
    /// # Errors
    ///
    /// - [`Error::FieldMismatch`] if the polynomial's characteristic
    ///   differs from the field's.
    /// - [`Error::ElementOutOfRange`] if the polynomial has more
    ///   coefficients than the field's dimension allows.
    pub fn new(poly: Polynomial, field: &Field) -> Result<Self> {
        if poly.field().characteristic() != field.characteristic() {
            return Err(Error::FieldMismatch {
                lhs: poly.field().to_string(),
                rhs: field.to_string(),
            });
        }
        if poly.coeff_count() > field.dimension() as usize {
            return Err(Error::ElementOutOfRange {
                degree: poly.degree(),
                field: field.to_string(),
            });
        }
        Ok(Self {
            poly,
            field: field.clone(),
        })
    }

    /// Wrap parts known to satisfy the element invariants.
    pub(crate) fn from_parts(poly: Polynomial, field: Field) -> Self {
        Self { poly, field }
    }

    /// Promote an integer to a constant element.
    #[must_use]
    pub fn from_integer(field: &Field, value: i64) -> Self {
        Self {
            poly: Polynomial::from_integer(field, value),
            field: field.clone(),
        }
    }

    /// The additive identity of `field`.
    #[must_use]
    pub fn zero(field: &Field) -> Self {
        Self::from_integer(field, 0)
    }

    /// The multiplicative identity of `field`.
    #[must_use]
    pub fn one(field: &Field) -> Self {
        Self::from_integer(field, 1)
    }

    /// The underlying reduced polynomial.
    #[must_use]
    pub fn poly(&self) -> &Polynomial {
        &self.poly
    }

    /// The field this element belongs to.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The degree of the underlying polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.poly.degree()
    }

    /// Check if this is the additive identity.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.poly.is_zero()
    }

    /// Check if this is the multiplicative identity.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.poly.coeffs() == [1]
    }

    /// Field addition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldMismatch`] if the operands belong to
    /// different fields.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(Self::from_parts(
            self.poly.add_raw(&rhs.poly),
            self.field.clone(),
        ))
    }

    /// Field subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldMismatch`] if the operands belong to
    /// different fields.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(Self::from_parts(
            self.poly.sub_raw(&rhs.poly),
            self.field.clone(),
        ))
    }

    /// Additive inverse.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::from_parts(self.poly.neg(), self.field.clone())
    }

    /// Field multiplication, reduced modulo the field modulus.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldMismatch`] if the operands belong to
    /// different fields.
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.mul_unchecked(rhs))
    }

    /// Raise to a non-negative integer power, reducing after every
    /// multiplication.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        let mut result = Self::one(&self.field);
        let mut base = self.clone();
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul_unchecked(&base);
            }
            exp >>= 1;
            base = base.mul_unchecked(&base);
        }
        result
    }

    /// Multiplicative inverse.
    ///
    /// For an extension field this runs the extended Euclidean algorithm
    /// against the defining polynomial; for a prime field it is a direct
    /// inverse table lookup.
    ///
    /// # Errors
    ///
    /// - [`Error::DivisionByZero`] if this is the additive identity.
    /// - [`Error::NotInvertible`] if the defining polynomial is not
    ///   irreducible.
    pub fn inv(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero {
                field: self.field.to_string(),
            });
        }
        match self.field.irreducible() {
            Some(irr) => {
                let inv = self.poly.inv_mod(irr)?;
                Ok(Self::from_parts(inv, self.field.clone()))
            }
            None => {
                let value = self.field.inverses().inv(self.poly.coeffs()[0]);
                Ok(Self::from_integer(&self.field, value as i64))
            }
        }
    }

    /// Field division: multiplication by the divisor's inverse.
    ///
    /// # Errors
    ///
    /// - [`Error::FieldMismatch`] if the operands belong to different
    ///   fields.
    /// - [`Error::DivisionByZero`] if the divisor is the additive
    ///   identity.
    /// - [`Error::NotInvertible`] if the defining polynomial is not
    ///   irreducible.
    pub fn div(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        let inv = rhs.inv()?;
        Ok(self.mul_unchecked(&inv))
    }

    /// Multiply without the field-equality check. The caller guarantees
    /// both operands belong to this element's field.
    pub(crate) fn mul_unchecked(&self, rhs: &Self) -> Self {
        let product = self.poly.mul_raw(&rhs.poly);
        Self::from_parts(self.reduce(product), self.field.clone())
    }

    /// Reduce a ring-level product back into the field.
    fn reduce(&self, poly: Polynomial) -> Polynomial {
        match self.field.irreducible() {
            Some(irr) => poly.div_rem_raw(irr).1,
            // Prime field products are constants, already reduced mod p.
            None => poly,
        }
    }

    fn check_field(&self, rhs: &Self) -> Result<()> {
        if self.field != rhs.field {
            return Err(Error::FieldMismatch {
                lhs: self.field.to_string(),
                rhs: rhs.field.to_string(),
            });
        }
        Ok(())
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.poly.coeffs() == other.poly.coeffs()
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.poly.coeffs().hash(state);
        self.field.hash(state);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.poly.fmt_with_symbol(f, self.field.symbol())?;
        write!(f, " in {}", self.field)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.field)?;
        self.poly.fmt_with_symbol(f, self.field.symbol())?;
        f.write_str("]")
    }
}

// Operator sugar on references. These delegate to the inherent methods and
// panic on error; use the named methods to handle failures.

impl std::ops::Add for &Element {
    type Output = Element;

    fn add(self, rhs: Self) -> Element {
        Element::add(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Sub for &Element {
    type Output = Element;

    fn sub(self, rhs: Self) -> Element {
        Element::sub(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Mul for &Element {
    type Output = Element;

    fn mul(self, rhs: Self) -> Element {
        Element::mul(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Div for &Element {
    type Output = Element;

    fn div(self, rhs: Self) -> Element {
        Element::div(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Neg for &Element {
    type Output = Element;

    fn neg(self) -> Element {
        Element::neg(self)
    }
}
