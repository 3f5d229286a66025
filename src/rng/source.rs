/// Upper bound on rejected samples in [`RandomSource::uniform`].
///
/// A healthy source rejects a sample with probability below `span / 2^32`,
/// so hitting this bound means the source is stuck.
const MAX_REJECTIONS: u32 = 64;

/// A source of uniformly distributed random bytes.
///
/// Only [`fill_bytes`](Self::fill_bytes) is required; the integer helpers
/// are derived from it.
pub trait RandomSource {
    /// Fills `out` entirely with random bytes.
    fn fill_bytes(&mut self, out: &mut [u8]);

    /// Returns a random `u32` built from four little-endian bytes.
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    /// Draws a uniform value in `[low, high)` by rejection sampling.
    ///
    /// Returns `None` when the range is empty, or when the source keeps
    /// producing samples from the rejected tail, which only a broken source
    /// does.
    fn uniform(&mut self, low: u32, high: u32) -> Option<u32> {
        if low >= high {
            return None;
        }

        let span = u64::from(high - low);
        // Largest multiple of span not above 2^32
        let limit = (1u64 << 32) - (1u64 << 32) % span;

        for _ in 0..MAX_REJECTIONS {
            let v = u64::from(self.next_u32());
            if v < limit {
                return Some(low + (v % span) as u32);
            }
        }

        None
    }
}
