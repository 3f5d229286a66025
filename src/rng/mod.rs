//! Randomness for key generation.
//!
//! Key generation draws primes and public exponents through the
//! [`RandomSource`] trait. The default source is [`Csprng`], a ChaCha20
//! based generator seeded from operating system entropy. Tests and
//! reproducible experiments can seed it explicitly with
//! [`Csprng::from_seed`], or plug in any other [`RandomSource`].

pub(crate) mod chacha20;
mod csprng;
mod source;

pub use csprng::Csprng;
pub use source::RandomSource;
