//! Simulation state
//!
//! Everything that changes while a session runs lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Hitbox;
use super::vector::Vector2D;

/// Where the engine is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnginePhase {
    /// No container size yet, the target doesn't move
    Uninitialized,
    /// Target bouncing, taps still needed
    Running,
    /// Every tap landed, nothing left to do
    Cleared,
}

/// RNG seed wrapper so a session can be replayed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Fresh seed from the thread RNG
    pub fn random() -> Self {
        Self::new(rand::random())
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    /// Top-left corner of the target sprite
    pub pos: Vec2,
    pub velocity: Vector2D,
    /// Container width/height (zero until initialized)
    pub bounds: Vec2,
    /// Screen-space extent of the target, follows `pos`
    pub hitbox: Hitbox,
    pub hits_remaining: u32,
    /// Set by the first usable container size
    pub initialized: bool,
}

impl SimulationState {
    pub fn new(target_size: Vec2, hits_to_win: u32) -> Self {
        Self {
            pos: Vec2::ZERO,
            velocity: Vector2D::ZERO,
            bounds: Vec2::ZERO,
            hitbox: Hitbox::new(Vec2::ZERO, target_size),
            hits_remaining: hits_to_win,
            initialized: false,
        }
    }

    pub fn phase(&self) -> EnginePhase {
        if !self.initialized {
            EnginePhase::Uninitialized
        } else if self.hits_remaining == 0 {
            EnginePhase::Cleared
        } else {
            EnginePhase::Running
        }
    }

    /// Upper end of the valid top-left range on each axis
    pub fn travel_max(&self, epsilon: f32) -> Vec2 {
        self.bounds - self.hitbox.size - Vec2::splat(epsilon)
    }
}
