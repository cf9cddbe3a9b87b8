//! RNG module - seeded shape selection
//!
//! Shapes are drawn uniformly at random from an explicit generator owned by
//! the game session. There is no process-wide seed: two sessions built with
//! the same seed produce the same shape sequence.

use crate::types::Shape;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        Self { seed, state: seed }
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG repeat with a short period.
        (self.next_u32() >> 16) % max.max(1)
    }
}

/// Draw a shape uniformly from the seven.
pub fn random_shape(rng: &mut SimpleRng) -> Shape {
    Shape::ALL[rng.next_range(Shape::ALL.len() as u32) as usize]
}
