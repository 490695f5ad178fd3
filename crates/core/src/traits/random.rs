//! Injectable randomness
//!
//! The rewrite pipeline never reaches for a global generator. Callers pass a
//! `RandomSource`, so production can use entropy while tests replay a fixed
//! sequence.

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index called with empty range");
        let index = (self.next_f64() * len as f64).floor() as usize;
        index.min(len.saturating_sub(1))
    }

    /// Bernoulli draw that succeeds with `probability`
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }
}
