//! RSA with 16-bit keys.
//!
//! This crate is a small, self-contained RSA cryptosystem for
//! experimentation. Moduli are products of two primes below 256, so every
//! value fits in a `u16` and every byte is encrypted on its own.
//!
//! It is **not** a secure RSA implementation: primes are found by trial
//! division, there is no padding, no hashing before signing (only a CRC-16),
//! and nothing runs in constant time.
//!
//! # Module overview
//!
//! - `math`  
//!   Primality test, extended Euclid, modular inverse and modular
//!   exponentiation over 16-bit operands.
//!
//! - `keys`  
//!   Key types tagged by capability ([`KeyPair`], [`PublicKey`],
//!   [`PrivateKey`]), the raw [`KeyTriple`] view, and randomized key
//!   generation.
//!
//! - `cipher`  
//!   [`Rsa16`]: single-byte encryption and signing, a chained stream mode
//!   whose registers persist across calls, stream signatures, and
//!   signatures over a CRC-16 checksum.
//!
//! - `hash`  
//!   CRC-16/ARC, the digest used by checksum signatures.
//!
//! - `rng`  
//!   The [`RandomSource`] trait and a ChaCha20-based [`Csprng`] seeded from
//!   the operating system.
//!
//! # Example
//!
//! ```
//! use rsa16::{Rsa16, generate_keys};
//!
//! let key = generate_keys().unwrap();
//!
//! let mut sender = Rsa16::new(key.public_key());
//! let mut receiver = Rsa16::new(key.private_key());
//!
//! let cipher = sender.encrypt_stream(b"attack at dawn");
//! assert_eq!(receiver.decrypt_stream(&cipher).unwrap(), b"attack at dawn");
//!
//! let signer = Rsa16::new(key);
//! let signature = signer.sign_checksum(b"attack at dawn");
//! assert!(sender.verify_checksum(b"attack at dawn", signature));
//! ```

mod os;

pub mod cipher;
pub mod error;
pub mod hash;
pub mod keys;
pub mod math;
pub mod rng;

pub use cipher::{ChainState, DEFAULT_IV, Rsa16};
pub use error::{KeyHalf, Result, Rsa16Error};
pub use hash::crc16;
pub use keys::{
    KeyGenParams, KeyPair, KeyTriple, PrivateHalf, PrivateKey, PublicHalf, PublicKey, RsaKey,
    generate_keys, generate_keys_with,
};
pub use rng::{Csprng, RandomSource};
