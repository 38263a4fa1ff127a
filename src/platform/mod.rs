//! Platform abstraction layer
//!
//! The game core talks to its host only through these traits:
//! - [`DrawSurface`]: frame buffers and the lock that serializes geometry changes
//! - [`Countdown`]: the session timer
//! - [`GameUi`]: instruction text and the end-of-game banner
//! - [`ResultSink`]: where the outcome goes
//!
//! Headless implementations live in the submodules; they back the native
//! binary and the tests.

pub mod countdown;
pub mod host;
pub mod memory_surface;

pub use countdown::ThreadCountdown;
pub use host::{ChannelSink, LogUi};
pub use memory_surface::MemorySurface;

use std::time::Duration;

use parking_lot::Mutex;

use crate::error::Result;
use crate::renderer::FrameBuffer;
use crate::session::{FailureReason, Instruction, Outcome};

/// A double-buffered drawing target
pub trait DrawSurface: Send + Sync {
    /// Take the back buffer for drawing. `None` while the surface is gone or
    /// the buffer is already out.
    fn lock_frame(&self) -> Option<FrameBuffer>;

    /// Hand a drawn buffer back and make it the visible frame
    fn post_frame(&self, frame: FrameBuffer);

    /// Held while drawing into a frame and while the surface geometry changes
    fn sync(&self) -> &Mutex<()>;

    /// Current width/height
    fn size(&self) -> (u32, u32);
}

/// One-shot session timer
pub trait Countdown: Send + Sync {
    /// (Re)start the timer. `on_expire` runs once if the timer isn't stopped
    /// within `duration`.
    fn start(&self, duration: Duration, on_expire: Box<dyn FnOnce() + Send>) -> Result<()>;

    /// Cancel a running timer. No-op when idle.
    fn stop(&self);

    /// Time left, `None` when never started or stopped
    fn remaining(&self) -> Option<Duration>;
}

/// Text surfaces around the game area
pub trait GameUi: Send + Sync {
    fn set_instruction(&self, instruction: Instruction);

    fn show_banner(&self, outcome: &Outcome, message: &str);
}

/// Receives the session result, at most once per session
pub trait ResultSink: Send + Sync {
    fn on_success(&self);

    fn on_failure(&self, reason: FailureReason);
}
