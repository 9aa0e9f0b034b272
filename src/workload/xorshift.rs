//! Deterministic xorshift generator driving the Swiss-Cheese slot draws.

use std::time::{SystemTime, UNIX_EPOCH};

/// Seed substituted for zero, which is the generator's only fixed point.
pub const FALLBACK_SEED: u32 = 0xDEAD_BEEF;

/// 32-bit xorshift generator (shifts 13, 17, 5).
///
/// Full period of 2^32 - 1 over non-zero states. Fast and deterministic,
/// which is all workload shaping needs; it is not suitable for anything
/// security-related.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Creates a generator from `seed`. A zero seed is replaced by
    /// [`FALLBACK_SEED`].
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns it.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Draws an index in `0..=mask`.
    ///
    /// `mask` must be one less than a power of two; masking a non-power-of-two
    /// range would skew the distribution.
    #[inline]
    pub fn next_masked(&mut self, mask: usize) -> usize {
        debug_assert!((mask + 1).is_power_of_two(), "mask {mask} is not 2^k - 1");
        self.next_u32() as usize & mask
    }

    /// Current internal state.
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Seconds since the Unix epoch, truncated to 32 bits.
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(FALLBACK_SEED, |d| d.as_secs() as u32)
}
