//! Randomized key generation.
//!
//! 1. Draw `p` uniformly from the prime range until it is prime.
//! 2. Draw `q` the same way until it is prime and differs from `p`.
//! 3. Restart unless `n = p * q` reaches the modulus floor.
//! 4. Draw `e` uniformly from `[2, φ)` until `gcd(e, φ) = 1`.
//! 5. `d = e⁻¹ mod φ`.
//!
//! Every uniform draw is charged to [`KeyGenParams::max_draws`], so a broken
//! random source ends in an error instead of an endless loop.

use log::{debug, trace};

use crate::error::{Result, Rsa16Error};
use crate::keys::{KeyGenParams, KeyPair};
use crate::math::{extended_gcd, is_prime, mod_inverse};
use crate::rng::{Csprng, RandomSource};

/// Counts uniform draws against the configured budget.
struct Draws<'a, R: RandomSource + ?Sized> {
    rng: &'a mut R,
    used: u32,
    limit: u32,
}

impl<'a, R: RandomSource + ?Sized> Draws<'a, R> {
    fn new(rng: &'a mut R, limit: u32) -> Self {
        Self { rng, used: 0, limit }
    }

    fn uniform(&mut self, low: u32, high: u32) -> Result<Option<u32>> {
        if self.used >= self.limit {
            return Err(Rsa16Error::KeyGenerationExhausted { draws: self.used });
        }
        self.used += 1;
        Ok(self.rng.uniform(low, high))
    }

    fn prime(&mut self, params: &KeyGenParams) -> Result<u16> {
        loop {
            let low = u32::from(params.prime_min);
            let high = u32::from(params.prime_max);
            let candidate = self.uniform(low, high)?;
            // prime_max <= 256 keeps every candidate inside u16
            if let Some(candidate) = candidate.map(|c| c as u16) {
                if is_prime(candidate) {
                    return Ok(candidate);
                }
            }
        }
    }

    fn public_exponent(&mut self, phi: u32) -> Result<u32> {
        loop {
            if let Some(e) = self.uniform(2, phi)? {
                if extended_gcd(i64::from(e), i64::from(phi)).0 == 1 {
                    return Ok(e);
                }
                trace!("public exponent candidate {e} shares a factor with {phi}");
            }
        }
    }
}

/// Generates a fresh key pair from an OS-seeded [`Csprng`] with default
/// parameters.
///
/// # Errors
/// Only [`Rsa16Error::KeyGenerationExhausted`], which a healthy entropy
/// source does not trigger in practice.
pub fn generate_keys() -> Result<KeyPair> {
    generate_keys_with(&mut Csprng::new(), &KeyGenParams::default())
}

/// Generates a key pair drawing from `rng` under `params`.
///
/// The result satisfies `n = p * q` with distinct primes `p, q` from the
/// configured range, `n >= params.min_modulus`, and
/// `e * d ≡ 1 (mod (p - 1)(q - 1))`.
///
/// # Errors
/// - [`Rsa16Error::InvalidParams`] if `params` fail validation.
/// - [`Rsa16Error::KeyGenerationExhausted`] once `params.max_draws` uniform
///   draws have been used without producing a key.
pub fn generate_keys_with<R>(rng: &mut R, params: &KeyGenParams) -> Result<KeyPair>
where
    R: RandomSource + ?Sized,
{
    params.validate()?;

    let mut draws = Draws::new(rng, params.max_draws);

    let (p, q, n) = loop {
        let p = draws.prime(params)?;
        let q = loop {
            let q = draws.prime(params)?;
            if q != p {
                break q;
            }
        };

        let n = u32::from(p) * u32::from(q);
        if n >= params.min_modulus {
            break (p, q, n);
        }
        trace!("modulus {n} = {p} * {q} is below {}", params.min_modulus);
    };

    let phi = u32::from(p - 1) * u32::from(q - 1);
    let e = draws.public_exponent(phi)?;
    let d = mod_inverse(i64::from(e), i64::from(phi))?;

    debug!("generated RSA16 key with modulus {n} after {} draws", draws.used);

    // n < 2^16 because both primes are below 256; e and d are below φ < n
    KeyPair::new(n as u16, e as u16, d as u16)
}
