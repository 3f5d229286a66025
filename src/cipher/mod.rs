//! The RSA16 cipher.
//!
//! [`Rsa16`] owns one key and one [`ChainState`]. Its operations fall in
//! three groups:
//!
//! - single values: `encrypt_byte`, `decrypt_byte`, `sign_byte`,
//!   `recover_byte`, `verify_byte`
//! - chained streams: `encrypt_stream`, `decrypt_stream`, which carry the
//!   chaining registers from one call to the next
//! - signatures over byte strings: `sign_stream` / `verify_stream` (one
//!   16-bit unit per byte, unchained) and `sign_checksum` /
//!   `verify_checksum` (the two bytes of a CRC-16)
//!
//! Which operations exist depends on the key type: the public operation
//! (`x^e mod n`) needs a [`PublicHalf`](crate::keys::PublicHalf) key, the
//! private one (`x^d mod n`) a [`PrivateHalf`](crate::keys::PrivateHalf) key.
//!
//! # Stream format
//!
//! Each message byte becomes two output bytes, the low then the high byte of
//! a 16-bit cipher unit, each masked with the current register value. The
//! register then becomes the message byte XOR the emitted high byte. Two
//! instances interoperate only if they start from the same IV; a mismatch
//! produces garbage rather than an error, since nothing authenticates the
//! stream.

mod chain;
mod core;
mod sign;

pub use self::chain::ChainState;
pub use self::core::{DEFAULT_IV, Rsa16};
