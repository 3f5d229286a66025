//! Chaining registers and the stream mode built on them.

use log::debug;

use crate::cipher::Rsa16;
use crate::error::{Result, Rsa16Error};
use crate::keys::{PrivateHalf, PublicHalf};

/// The two one-byte chaining registers of an [`Rsa16`] instance.
///
/// Encryption and decryption each have their own register, so one instance
/// can both send and receive. Each register starts at the IV seed and is
/// updated only when a stream call completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChainState {
    seed: u8,
    encrypt: u8,
    decrypt: u8,
}

impl ChainState {
    /// Both registers at `iv`.
    pub fn new(iv: u8) -> Self {
        Self {
            seed: iv,
            encrypt: iv,
            decrypt: iv,
        }
    }

    /// The IV both registers were last reset to.
    pub fn seed(&self) -> u8 {
        self.seed
    }

    /// Register value the next encryption starts from.
    pub fn encrypt_register(&self) -> u8 {
        self.encrypt
    }

    /// Register value the next decryption starts from.
    pub fn decrypt_register(&self) -> u8 {
        self.decrypt
    }

    pub fn reset(&mut self, iv: u8) {
        *self = Self::new(iv);
    }

    pub fn rewind(&mut self) {
        self.reset(self.seed);
    }
}

impl Default for ChainState {
    fn default() -> Self {
        Self::new(super::DEFAULT_IV)
    }
}

impl<K: PublicHalf> Rsa16<K> {
    /// Encrypts `message` in chained mode, continuing from the previous call.
    ///
    /// The output is twice as long as the input. Encrypting `a` and then `b`
    /// yields the same bytes as encrypting `a ‖ b` in one call.
    pub fn encrypt_stream(&mut self, message: &[u8]) -> Vec<u8> {
        let mut cipher = vec![0u8; message.len() * 2];
        self.chain.encrypt = self.encrypt_units(self.chain.encrypt, message, &mut cipher);
        cipher
    }

    /// Encrypts `message` into `cipher`, which must be exactly twice as long.
    ///
    /// # Errors
    /// [`Rsa16Error::LengthMismatch`] if `cipher` has the wrong length; the
    /// register is left as it was.
    pub fn encrypt_stream_into(&mut self, message: &[u8], cipher: &mut [u8]) -> Result<()> {
        if cipher.len() != message.len() * 2 {
            return Err(Rsa16Error::LengthMismatch {
                expected: message.len() * 2,
                actual: cipher.len(),
            });
        }

        self.chain.encrypt = self.encrypt_units(self.chain.encrypt, message, cipher);
        Ok(())
    }

    /// Returns the register value after the last unit.
    fn encrypt_units(&self, iv: u8, message: &[u8], cipher: &mut [u8]) -> u8 {
        let mut prev = iv;

        for (&m, unit) in message.iter().zip(cipher.chunks_exact_mut(2)) {
            let [low, high] = self.public_op(u16::from(m ^ prev)).to_le_bytes();

            unit[0] = low ^ prev;
            unit[1] = high ^ prev;

            prev = m ^ unit[1];
        }

        prev
    }
}

impl<K: PrivateHalf> Rsa16<K> {
    /// Decrypts a chained stream, continuing from the previous call.
    ///
    /// # Errors
    /// [`Rsa16Error::OddLength`] if `cipher` is not a whole number of 16-bit
    /// units; the register is left as it was.
    pub fn decrypt_stream(&mut self, cipher: &[u8]) -> Result<Vec<u8>> {
        if cipher.len() % 2 != 0 {
            debug!("refusing to decrypt odd-length stream of {} bytes", cipher.len());
            return Err(Rsa16Error::OddLength(cipher.len()));
        }

        let mut message = vec![0u8; cipher.len() / 2];
        self.chain.decrypt = self.decrypt_units(self.chain.decrypt, cipher, &mut message);
        Ok(message)
    }

    /// Decrypts `cipher` into `message`, which must be half as long.
    ///
    /// # Errors
    /// [`Rsa16Error::OddLength`] or [`Rsa16Error::LengthMismatch`]; the
    /// register is left as it was.
    pub fn decrypt_stream_into(&mut self, cipher: &[u8], message: &mut [u8]) -> Result<()> {
        if cipher.len() % 2 != 0 {
            return Err(Rsa16Error::OddLength(cipher.len()));
        }
        if message.len() != cipher.len() / 2 {
            return Err(Rsa16Error::LengthMismatch {
                expected: cipher.len() / 2,
                actual: message.len(),
            });
        }

        self.chain.decrypt = self.decrypt_units(self.chain.decrypt, cipher, message);
        Ok(())
    }

    fn decrypt_units(&self, iv: u8, cipher: &[u8], message: &mut [u8]) -> u8 {
        let mut prev = iv;

        for (unit, m) in cipher.chunks_exact(2).zip(message.iter_mut()) {
            let c = u16::from_le_bytes([unit[0] ^ prev, unit[1] ^ prev]);

            *m = (self.private_op(c) as u8) ^ prev;

            // Feedback uses the received high byte, not the unmasked one
            prev = *m ^ unit[1];
        }

        prev
    }
}
