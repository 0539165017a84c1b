//! Error types for the evariste library.
//!
//! This module provides comprehensive error handling using the `thiserror`
//! crate, with specific error variants for field construction, polynomial
//! arithmetic, and generator search.

use thiserror::Error;

/// The main error type for the evariste library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Field Construction Errors ============
    /// The requested characteristic is not a prime number.
    #[error("characteristic {0} is not prime")]
    NotPrime(u64),

    /// The requested extension dimension is zero.
    #[error("field dimension must be at least 1")]
    ZeroDimension,

    /// The field order p^n does not fit in 64 bits.
    #[error("field GF({characteristic}^{dimension}) is too large to represent")]
    FieldTooLarge {
        /// The prime characteristic.
        characteristic: u64,
        /// The extension dimension.
        dimension: u32,
    },

    /// An extension field was requested without a defining polynomial.
    #[error("GF({characteristic}^{dimension}) requires an irreducible defining polynomial")]
    MissingIrreducible {
        /// The prime characteristic.
        characteristic: u64,
        /// The extension dimension.
        dimension: u32,
    },

    /// A defining polynomial was supplied for a prime field.
    #[error("GF({characteristic}) is a prime field and takes no defining polynomial")]
    UnexpectedIrreducible {
        /// The prime characteristic.
        characteristic: u64,
    },

    /// The defining polynomial's degree does not match the dimension.
    #[error("defining polynomial has degree {degree}, expected {dimension}")]
    IrreducibleDegreeMismatch {
        /// The actual degree of the supplied polynomial.
        degree: usize,
        /// The requested extension dimension.
        dimension: u32,
    },

    // ============ Arithmetic Errors ============
    /// Operands belong to different fields.
    #[error("operands belong to different fields: {lhs} vs {rhs}")]
    FieldMismatch {
        /// Description of the left operand's field.
        lhs: String,
        /// Description of the right operand's field.
        rhs: String,
    },

    /// Attempted division by the additive identity.
    #[error("division by zero in {field}")]
    DivisionByZero {
        /// Description of the field where division by zero occurred.
        field: String,
    },

    /// The extended Euclidean algorithm found no inverse.
    ///
    /// The modulus is not irreducible, or the operand shares a factor
    /// with it.
    #[error("{element} is not invertible modulo {modulus}")]
    NotInvertible {
        /// Rendering of the non-invertible operand.
        element: String,
        /// Rendering of the modulus polynomial.
        modulus: String,
    },

    /// A polynomial's degree exceeds what the field can hold.
    #[error("polynomial of degree {degree} is out of range for {field}")]
    ElementOutOfRange {
        /// The degree of the offending polynomial.
        degree: usize,
        /// Description of the target field.
        field: String,
    },

    // ============ Search Errors ============
    /// Random generator search exhausted its attempt budget.
    #[error("no generator found after {attempts} attempts")]
    GeneratorNotFound {
        /// The attempt budget that was exhausted.
        attempts: u32,
    },
}

/// A specialized `Result` type for evariste operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
