//! Message digests.
//!
//! The checksum signature scheme signs a CRC-16 of the message instead of
//! the message itself. CRC-16 is not a cryptographic hash: collisions are
//! trivial to construct. It only catches accidental corruption.

mod crc16;

pub use crc16::{Crc16, crc16};
