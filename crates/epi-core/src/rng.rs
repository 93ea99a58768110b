//! Explicit, seedable randomness.
//!
//! # Determinism strategy
//!
//! There is no ambient RNG anywhere in the simulator.  A single `SimRng` is
//! seeded from `EpiConfig::seed`, owned by the driver, and passed by `&mut`
//! into every operation that draws: placement, seed selection, transmission
//! trials, and influx.  Because every phase visits agents and cells in a
//! fixed order, the same seed and configuration always reproduce the same
//! time series.
//!
//! The [`RandomSource`] trait is the seam: tests and alternative drivers can
//! substitute any implementation.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// Uniform draws consumed by the simulation engine.
pub trait RandomSource {
    /// `true` with probability `p` (clamped to [0, 1]).
    fn gen_bool(&mut self, p: f64) -> bool;

    /// Uniform index in `0..len`.
    ///
    /// # Panics
    /// Panics if `len == 0`.
    fn gen_index(&mut self, len: usize) -> usize;

    /// `amount` distinct indices drawn uniformly from `0..len`, in draw order.
    /// `amount` is clamped to `len`.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize>;
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG backed by `SmallRng`.
///
/// Used only in single-threaded contexts; the whole run shares one stream.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent child stream from one draw of this stream mixed
    /// with `offset`.  Consumes exactly one `u64` from the parent.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    #[inline]
    fn gen_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, len, amount.min(len)).into_vec()
    }
}
