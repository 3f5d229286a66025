//! Signatures: per-byte, per-stream and over a CRC-16 checksum.
//!
//! Signing applies the private exponent, verification the public one. No
//! hashing or padding is involved, so these signatures are malleable and
//! only useful for experiments.

use log::debug;

use crate::cipher::Rsa16;
use crate::error::{Result, Rsa16Error};
use crate::hash::crc16;
use crate::keys::{PrivateHalf, PublicHalf};

impl<K: PrivateHalf> Rsa16<K> {
    /// Signs one byte: `m^d mod n`.
    pub fn sign_byte(&self, message: u8) -> u16 {
        self.private_op(u16::from(message))
    }

    /// Signs every byte independently, emitting 16-bit units little-endian.
    ///
    /// Unlike [`encrypt_stream`](Rsa16::encrypt_stream) there is no chaining,
    /// and the registers are not touched.
    pub fn sign_stream(&self, message: &[u8]) -> Vec<u8> {
        message
            .iter()
            .flat_map(|&m| self.sign_byte(m).to_le_bytes())
            .collect()
    }

    /// Signs the CRC-16 of `message`.
    ///
    /// The low and high CRC bytes are signed separately and packed as
    /// `low_signature | high_signature << 16`.
    pub fn sign_checksum(&self, message: &[u8]) -> u32 {
        let [low, high] = crc16(message).to_le_bytes();

        u32::from(self.sign_byte(low)) | (u32::from(self.sign_byte(high)) << 16)
    }
}

impl<K: PublicHalf> Rsa16<K> {
    /// Recovers the byte a signature unit was made from: low byte of
    /// `s^e mod n`.
    pub fn recover_byte(&self, signature: u16) -> u8 {
        self.public_op(signature) as u8
    }

    /// Returns `true` if `signature` is a signature of `message`.
    pub fn verify_byte(&self, message: u8, signature: u16) -> bool {
        self.recover_byte(signature) == message
    }

    /// Recovers the message bytes from a stream signature.
    ///
    /// # Errors
    /// [`Rsa16Error::OddLength`] if `signature` is not a whole number of
    /// 16-bit units.
    pub fn recover_stream(&self, signature: &[u8]) -> Result<Vec<u8>> {
        if signature.len() % 2 != 0 {
            return Err(Rsa16Error::OddLength(signature.len()));
        }

        Ok(signature
            .chunks_exact(2)
            .map(|unit| self.recover_byte(u16::from_le_bytes([unit[0], unit[1]])))
            .collect())
    }

    /// Checks a stream signature against `message`, reporting why it fails.
    ///
    /// # Errors
    /// - [`Rsa16Error::LengthMismatch`] unless `signature` is exactly twice
    ///   as long as `message`.
    /// - [`Rsa16Error::SignatureMismatch`] at the first unit that does not
    ///   verify.
    pub fn validate_stream(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        if signature.len() != message.len() * 2 {
            return Err(Rsa16Error::LengthMismatch {
                expected: message.len() * 2,
                actual: signature.len(),
            });
        }

        for (index, (&m, unit)) in message.iter().zip(signature.chunks_exact(2)).enumerate() {
            if !self.verify_byte(m, u16::from_le_bytes([unit[0], unit[1]])) {
                return Err(Rsa16Error::SignatureMismatch { index });
            }
        }

        Ok(())
    }

    /// Returns `true` if `signature` is a valid stream signature of
    /// `message`. Malformed signatures simply fail verification.
    pub fn verify_stream(&self, message: &[u8], signature: &[u8]) -> bool {
        match self.validate_stream(message, signature) {
            Ok(()) => true,
            Err(err) => {
                debug!("stream signature rejected: {err}");
                false
            }
        }
    }

    /// Returns `true` if `signature` signs the CRC-16 of `message`.
    pub fn verify_checksum(&self, message: &[u8], signature: u32) -> bool {
        let [low, high] = crc16(message).to_le_bytes();

        let low_ok = self.verify_byte(low, (signature & 0xFFFF) as u16);
        let high_ok = self.verify_byte(high, (signature >> 16) as u16);

        low_ok && high_ok
    }
}
