//! CRC-16/ARC: reflected polynomial `0xA001`, initial value `0`, no final
//! XOR.

/// Reflected form of the polynomial `x^16 + x^15 + x^2 + 1`.
const POLY: u16 = 0xA001;

/// Incremental CRC-16/ARC state.
///
/// Feeding a message in several [`update`](Self::update) calls gives the
/// same value as a single call to [`crc16`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Crc16 {
    crc: u16,
}

impl Crc16 {
    /// Starts a new checksum with the initial value `0`.
    pub fn new() -> Self {
        Self { crc: 0 }
    }

    /// Feeds `data` into the checksum, one byte and eight shifts at a time.
    pub fn update(&mut self, data: &[u8]) {
        let mut crc = self.crc;

        for &byte in data {
            crc ^= u16::from(byte);
            for _ in 0..8 {
                if crc & 1 == 1 {
                    crc = (crc >> 1) ^ POLY;
                } else {
                    crc >>= 1;
                }
            }
        }

        self.crc = crc;
    }

    /// Returns the checksum of everything fed so far.
    pub fn finish(&self) -> u16 {
        self.crc
    }
}

/// Computes the CRC-16/ARC of `data`.
pub fn crc16(data: &[u8]) -> u16 {
    let mut state = Crc16::new();
    state.update(data);
    state.finish()
}
