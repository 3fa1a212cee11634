//! Seeded random source for spawners and autopilots.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub fastrand::Rng);

impl Default for GameRng {
    fn default() -> Self {
        Self(fastrand::Rng::new())
    }
}

impl GameRng {
    /// Seed 0 picks a random seed.
    pub fn seeded(seed: u64) -> Self {
        if seed == 0 {
            Self::default()
        } else {
            Self(fastrand::Rng::with_seed(seed))
        }
    }

    /// Bernoulli trial with probability `p`.
    pub fn chance(&mut self, p: f32) -> bool {
        p > 0.0 && self.0.f32() < p
    }

    /// Uniform float in `[low, high)`.
    pub fn range(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        low + self.0.f32() * (high - low)
    }
}
