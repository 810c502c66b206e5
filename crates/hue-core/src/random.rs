//! Injectable randomness.
//!
//! Palette state never reaches for a global generator. It draws unit
//! values from a [`RandomSource`], so tests can replay exact sequences and
//! hosts can seed sessions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform values in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..n`. `n` must be non-zero.
    fn pick(&mut self, n: usize) -> usize {
        let idx = (self.next_unit() * n as f64).floor() as usize;
        idx.min(n.saturating_sub(1))
    }

    /// Uniform integer in `[lo, hi)`.
    fn range(&mut self, lo: i32, hi: i32) -> i32 {
        let span = (hi - lo) as f64;
        let offset = (self.next_unit() * span).floor() as i32;
        lo + offset.min(hi - lo - 1).max(0)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn pick(&mut self, n: usize) -> usize {
        (**self).pick(n)
    }

    fn range(&mut self, lo: i32, hi: i32) -> i32 {
        (**self).range(lo, hi)
    }
}

/// Adapter from any [`rand::Rng`] to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    /// Deterministic source; the same seed replays the same palettes.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed list of unit values, cycling when exhausted.
///
/// Values are clamped into `[0, 1)`. An empty list always yields `0.0`.
///
/// # Example
/// ```
/// use hue_core::{RandomSource, SequenceSource};
///
/// let mut source = SequenceSource::new([0.5, 0.25]);
/// assert_eq!(source.range(0, 360), 180);
/// assert_eq!(source.pick(4), 1);
/// assert_eq!(source.next_unit(), 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceSource {
    /// Create a source that replays `values` in order.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            pos: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn drawn(&self) -> usize {
        self.pos
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
