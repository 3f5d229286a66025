//! Small-integer number theory.
//!
//! Everything the key generator and the cipher need fits in 16-bit operands
//! with 32- or 64-bit intermediates, so no big-integer type is involved:
//!
//! - [`is_prime`]: trial division by 2, 3 and `6k ± 1`
//! - [`extended_gcd`] and [`mod_inverse`]: iterative extended Euclid
//! - [`mod_pow`]: square-and-multiply modulo a 16-bit modulus
//!
//! None of these run in constant time. They are meant for experimentation
//! with textbook RSA over tiny moduli, not for protecting real data.

mod euclid;
mod modpow;
mod prime;

pub use euclid::{extended_gcd, mod_inverse};
pub use modpow::mod_pow;
pub use prime::is_prime;
