//! Bounce Tap - An offline tap-the-target challenge
//!
//! Core modules:
//! - `sim`: Simulation (target physics, boundary reflection, tap hit-testing)
//! - `renderer`: Canvas abstraction and the double-buffered frame format
//! - `game_loop`: Dedicated render/update thread
//! - `session`: Input/lifecycle controller and one-shot outcome reporting
//! - `platform`: Collaborator traits (surface, countdown, UI, result sink) and headless versions
//! - `settings`: Data-driven tuning loaded from JSON

pub mod error;
pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game_loop::GameLoop;
pub use session::{FailureReason, Instruction, Outcome, Session};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Taps needed to win a session
    pub const HITS_TO_WIN: u32 = 3;
    /// Countdown before the session fails (milliseconds)
    pub const TIMEOUT_MS: u64 = 30_000;
    /// Render loop sleep between iterations (milliseconds)
    pub const LOOP_DELAY_MS: u64 = 4;

    /// Target speed right after launch (units per tick)
    pub const INITIAL_SPEED: f32 = 10.0;
    /// Speed multiplier applied on every successful tap
    pub const TAP_BOOST: f32 = 1.5;
    /// Keeps the target off the exact container edge
    pub const EDGE_EPSILON: f32 = 0.002;

    /// Target sprite extent (pixels)
    pub const TARGET_SIZE: [f32; 2] = [96.0, 96.0];
    /// "Taps left" indicator sprite extent (pixels)
    pub const INDICATOR_SIZE: [f32; 2] = [48.0, 48.0];
    /// Opacity falloff per indicator (opacity = FADE^i)
    pub const INDICATOR_FADE: f32 = 0.8;
    /// Scale applied after each indicator
    pub const INDICATOR_SCALE: f32 = 0.8;
    /// Translation applied after each indicator, in the scaled space
    pub const INDICATOR_OFFSET: [f32; 2] = [75.0, -50.0];
}
