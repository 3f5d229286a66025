//! RSA16 key material and key generation.
//!
//! A key is a 16-bit modulus `n = p * q` with a public exponent `e` and a
//! private exponent `d`, inverses of each other modulo `(p - 1)(q - 1)`.
//!
//! Which halves are present is part of the type:
//!
//! - [`KeyPair`]: both exponents
//! - [`PublicKey`]: `(n, e)` only
//! - [`PrivateKey`]: `(n, d)` only
//!
//! [`PublicHalf`] and [`PrivateHalf`] let the cipher expose each operation
//! only for keys that can actually perform it. [`KeyTriple`] is the raw
//! `(n, e, d)` view where a `0` exponent means "absent"; converting it into
//! one of the typed keys is the only place where a missing half is reported
//! at run time.
//!
//! Fresh keys come from [`generate_keys`], or from [`generate_keys_with`]
//! for a caller-chosen random source and [`KeyGenParams`].

mod core;
mod generate;
mod params;

pub use self::core::{
    KeyPair, KeyTriple, MIN_MODULUS, PrivateHalf, PrivateKey, PublicHalf, PublicKey, RsaKey,
};
pub use generate::{generate_keys, generate_keys_with};
pub use params::{KeyGenParamError, KeyGenParams};
