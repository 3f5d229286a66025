//! Error types for the RSA16 engine.
//!
//! Every fallible operation in the crate reports one of the variants of
//! [`Rsa16Error`]. Failures are local and synchronous: an operation either
//! completes or returns an error without touching any chaining register.

use std::fmt;

use thiserror::Error;

use crate::keys::KeyGenParamError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Rsa16Error>;

/// The half of a key pair an operation depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyHalf {
    /// The public exponent `e`.
    Public,
    /// The private exponent `d`.
    Private,
}

impl fmt::Display for KeyHalf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyHalf::Public => f.write_str("public"),
            KeyHalf::Private => f.write_str("private"),
        }
    }
}

/// Errors produced by the RSA16 engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rsa16Error {
    /// `gcd(value, modulus) != 1`, so no inverse exists.
    #[error("modular inverse of {value} modulo {modulus} does not exist")]
    NoInverseExists { value: i64, modulus: i64 },

    /// The requested exponent was given as the `0` sentinel.
    #[error("{0} exponent is not available for this key")]
    KeyUnavailable(KeyHalf),

    /// A buffer does not have the length the operation requires.
    #[error("length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A cipher or signature buffer is not a whole number of 16-bit units.
    #[error("buffer of {0} bytes is not a whole number of 16-bit units")]
    OddLength(usize),

    /// The modulus cannot hold every byte value as a distinct residue.
    #[error("modulus {0} is below 256")]
    ModulusTooSmall(u16),

    /// A signature unit does not verify against its message byte.
    #[error("signature does not match message at byte {index}")]
    SignatureMismatch { index: usize },

    /// The random source failed to produce a usable key within the draw budget.
    #[error("key generation gave up after {draws} random draws")]
    KeyGenerationExhausted { draws: u32 },

    /// Key generation parameters were rejected.
    #[error("invalid key generation parameters: {0}")]
    InvalidParams(#[from] KeyGenParamError),
}
