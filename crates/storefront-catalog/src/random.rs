//! Randomness source for synthesized detail fields.
//!
//! Production lookups are intentionally non-deterministic per call: rating,
//! review count and stock are drawn fresh each time. Tests pin them with
//! [`FixedDetailRandom`].

use rand::Rng;

/// Source of uniform integers for detail synthesis.
pub trait DetailRandom: Send + Sync {
    /// A value in `[low, high)`. Implementations return `low` when the
    /// range is empty.
    fn between(&self, low: u32, high: u32) -> u32;
}

/// Thread-local RNG; a fresh draw on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDetailRandom;

impl DetailRandom for ThreadDetailRandom {
    fn between(&self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        rand::thread_rng().gen_range(low..high)
    }
}

/// Always returns `low + offset`, clamped into the range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDetailRandom {
    pub offset: u32,
}

impl FixedDetailRandom {
    pub fn new(offset: u32) -> Self {
        Self { offset }
    }
}

impl DetailRandom for FixedDetailRandom {
    fn between(&self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        low + self.offset.min(high - low - 1)
    }
}
