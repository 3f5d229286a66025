//! ChaCha20-based CSPRNG.
//!
//! The generator is seeded once, from the operating system or from a caller
//! supplied seed, and expands it with the ChaCha20 block function. After
//! each request it rekeys itself, so the current state does not reveal
//! earlier output.

use crate::os::sys_random;
use crate::rng::RandomSource;
use crate::rng::chacha20::block;

/// Cryptographically secure pseudorandom number generator.
pub struct Csprng {
    /// Internal ChaCha20 key (256-bit)
    key: [u8; 32],

    /// Nonce value (96-bit, fixed to zero for DRBG usage)
    nonce: [u8; 12],

    /// Block counter
    counter: u32,
}

impl Csprng {
    /// Creates a new CSPRNG seeded from the operating system.
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Creates a new CSPRNG using entropy provided by the operating system.
    pub fn from_os() -> Self {
        let mut seed = [0u8; 32];
        sys_random(&mut seed);

        Self::from_seed(seed)
    }

    /// Creates a new CSPRNG from a caller-provided seed.
    ///
    /// Equal seeds give equal output streams, which makes key generation
    /// reproducible in tests.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.fill(0);

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Fills `out` with random bytes, then rekeys.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        let mut offset = 0;

        while offset < out.len() {
            let keystream = block(&self.key, self.counter, &self.nonce);

            self.counter = self.counter.wrapping_add(1);

            let to_copy = 64.min(out.len() - offset);
            out[offset..offset + to_copy].copy_from_slice(&keystream[..to_copy]);

            offset += to_copy;
        }

        self.rekey();
    }

    /// Replaces the key with the first half of a fresh block.
    fn rekey(&mut self) {
        let keystream = block(&self.key, self.counter, &self.nonce);

        self.counter = self.counter.wrapping_add(1);
        self.key.copy_from_slice(&keystream[..32]);
    }
}

impl Default for Csprng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for Csprng {
    fn fill_bytes(&mut self, out: &mut [u8]) {
        Csprng::fill_bytes(self, out);
    }
}
