//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed step only (speed is in units per tick)
//! - Seeded RNG only
//! - No threads, no platform dependencies

pub mod collision;
pub mod engine;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::Hitbox;
pub use engine::PhysicsEngine;
pub use state::{EnginePhase, RngState, SimulationState};
pub use tick::{apply_tap, launch, tick};
pub use vector::Vector2D;
