//! Key generation parameters and their validation.

use thiserror::Error;

use crate::keys::MIN_MODULUS;
use crate::math::is_prime;

/// Parameters controlling [`generate_keys_with`](super::generate_keys_with).
///
/// The defaults draw both primes from `[16, 256)`, require `n >= 256` and
/// allow one million random draws before giving up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyGenParams {
    /// Smallest prime candidate (inclusive).
    pub prime_min: u16,
    /// Upper bound for prime candidates (exclusive, at most 256).
    pub prime_max: u16,
    /// Smallest acceptable modulus `p * q` (at least 256).
    pub min_modulus: u32,
    /// Budget of uniform draws shared by the prime and exponent searches.
    pub max_draws: u32,
}

/// Reasons a [`KeyGenParams`] value is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyGenParamError {
    /// `prime_min` must be at least 2 and below `prime_max`.
    #[error("prime range [{min}, {max}) is empty or starts below 2")]
    EmptyPrimeRange { min: u16, max: u16 },

    /// `prime_max` above 256 would let `p * q` overflow 16 bits.
    #[error("prime upper bound {0} exceeds 256")]
    PrimeRangeTooWide(u16),

    /// Two distinct primes are needed.
    #[error("prime range holds fewer than two primes")]
    TooFewPrimes,

    /// `min_modulus` below 256 breaks byte encryption.
    #[error("minimum modulus {0} is below 256")]
    ModulusFloorTooLow(u32),

    /// No two primes in range multiply to `min_modulus` or more.
    #[error("minimum modulus {0} is unreachable with this prime range")]
    ModulusFloorUnreachable(u32),

    /// `max_draws` must be at least 1.
    #[error("draw budget is zero")]
    NoDraws,
}

impl KeyGenParams {
    pub(crate) fn validate(&self) -> Result<(), KeyGenParamError> {
        if self.prime_min < 2 || self.prime_min >= self.prime_max {
            return Err(KeyGenParamError::EmptyPrimeRange {
                min: self.prime_min,
                max: self.prime_max,
            });
        }

        if self.prime_max > 256 {
            return Err(KeyGenParamError::PrimeRangeTooWide(self.prime_max));
        }

        // Two largest primes in range, largest first
        let mut top = (self.prime_min..self.prime_max)
            .rev()
            .filter(|&x| is_prime(x));
        let (largest, second) = match (top.next(), top.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(KeyGenParamError::TooFewPrimes),
        };

        if self.min_modulus < u32::from(MIN_MODULUS) {
            return Err(KeyGenParamError::ModulusFloorTooLow(self.min_modulus));
        }

        if u32::from(largest) * u32::from(second) < self.min_modulus {
            return Err(KeyGenParamError::ModulusFloorUnreachable(self.min_modulus));
        }

        if self.max_draws == 0 {
            return Err(KeyGenParamError::NoDraws);
        }

        Ok(())
    }
}

impl Default for KeyGenParams {
    fn default() -> Self {
        Self {
            prime_min: 16,
            prime_max: 256,
            min_modulus: u32::from(MIN_MODULUS),
            max_draws: 1_000_000,
        }
    }
}
