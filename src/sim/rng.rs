//! Randomness for ball serves
//!
//! The simulation only ever asks for two things: a float in `[0, 1)` and a
//! coin flip. Any `rand::Rng` provides both; tests plug in [`ScriptedRng`].

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of serve randomness
pub trait ServeRng {
    /// Uniform float in `[0, 1)`
    fn next_f32(&mut self) -> f32;
    /// Fair coin flip
    fn next_bool(&mut self) -> bool;
}

impl<R: Rng> ServeRng for R {
    fn next_f32(&mut self) -> f32 {
        self.random::<f32>()
    }

    fn next_bool(&mut self) -> bool {
        self.random_bool(0.5)
    }
}

/// Game RNG seeded from entropy. Serves are not meant to be reproducible.
pub fn entropy_rng() -> Pcg32 {
    Pcg32::seed_from_u64(rand::random())
}

/// Replays fixed sequences, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    floats: Vec<f32>,
    bools: Vec<bool>,
    float_idx: usize,
    bool_idx: usize,
}

impl ScriptedRng {
    /// Empty sequences fall back to `0.5` and `true`
    pub fn new(floats: Vec<f32>, bools: Vec<bool>) -> Self {
        Self {
            floats,
            bools,
            float_idx: 0,
            bool_idx: 0,
        }
    }

    pub fn constant(float: f32, coin: bool) -> Self {
        Self::new(vec![float], vec![coin])
    }
}

impl ServeRng for ScriptedRng {
    fn next_f32(&mut self) -> f32 {
        if self.floats.is_empty() {
            return 0.5;
        }
        let value = self.floats[self.float_idx % self.floats.len()];
        self.float_idx += 1;
        value
    }

    fn next_bool(&mut self) -> bool {
        if self.bools.is_empty() {
            return true;
        }
        let value = self.bools[self.bool_idx % self.bools.len()];
        self.bool_idx += 1;
        value
    }
}
