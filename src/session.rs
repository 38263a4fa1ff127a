//! Session controller
//!
//! Glues the engine and render loop to the outside world. Touch, layout and
//! surface events arrive on the caller's thread, the countdown fires on its
//! own thread, and frames are drawn on the loop thread. Whichever of "last
//! tap landed" and "time ran out" happens first decides the outcome; the other
//! one is dropped.

use std::sync::{Arc, OnceLock, Weak};

use glam::Vec2;
use parking_lot::Mutex;

use crate::error::Result;
use crate::game_loop::GameLoop;
use crate::platform::{Countdown, DrawSurface, GameUi, ResultSink};
use crate::settings::Settings;
use crate::sim::{Hitbox, PhysicsEngine};

/// Prompt shown above the game area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Shown when the session begins
    Start,
    /// Two taps to go
    TwoLeft,
    /// Last tap
    OneLeft,
}

impl Instruction {
    pub fn text(&self) -> &'static str {
        match self {
            Instruction::Start => "Tap the bouncing target 3 times to turn off the alarm",
            Instruction::TwoLeft => "Nice! Two more taps",
            Instruction::OneLeft => "One more tap!",
        }
    }

    /// Prompt for a remaining tap count, if that count has one
    pub fn for_remaining(remaining: u32) -> Option<Self> {
        match remaining {
            2 => Some(Instruction::TwoLeft),
            1 => Some(Instruction::OneLeft),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// Countdown expired before the last tap
    Timeout,
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(FailureReason),
}

impl Outcome {
    /// Banner text for this outcome
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Success => "You did it, you're awake!",
            Outcome::Failure(FailureReason::Timeout) => "Time's up!",
        }
    }
}

/// One play-through: engine, render loop and the single outcome
pub struct Session {
    settings: Settings,
    engine: Arc<Mutex<PhysicsEngine>>,
    game_loop: GameLoop,
    countdown: Arc<dyn Countdown>,
    ui: Arc<dyn GameUi>,
    sink: Arc<dyn ResultSink>,
    outcome: OnceLock<Outcome>,
}

impl Session {
    pub fn new(
        settings: Settings,
        surface: Arc<dyn DrawSurface>,
        countdown: Arc<dyn Countdown>,
        ui: Arc<dyn GameUi>,
        sink: Arc<dyn ResultSink>,
    ) -> Result<Arc<Self>> {
        settings.validate()?;
        let engine = Arc::new(Mutex::new(PhysicsEngine::new(&settings)));
        let game_loop = GameLoop::new(engine.clone(), surface, settings.loop_delay());
        Ok(Arc::new(Self {
            settings,
            engine,
            game_loop,
            countdown,
            ui,
            sink,
            outcome: OnceLock::new(),
        }))
    }

    /// Show the first prompt and start the countdown
    pub fn begin(self: &Arc<Self>) -> Result<()> {
        self.ui.set_instruction(Instruction::Start);
        log::info!(
            target: "telemetry",
            "user_action=tap_game_started seed={}",
            self.engine.lock().seed()
        );

        let session: Weak<Session> = Arc::downgrade(self);
        self.countdown.start(
            self.settings.timeout(),
            Box::new(move || {
                if let Some(session) = session.upgrade() {
                    session.on_timeout();
                }
            }),
        )
    }

    /// Container size known (or changed)
    pub fn on_layout(&self, width: u32, height: u32) {
        self.engine.lock().set_dimensions(width, height);
    }

    /// Surface ready: start drawing. Does nothing once the session has ended.
    pub fn on_surface_created(&self) -> Result<()> {
        if let Some(outcome) = self.outcome() {
            log::debug!("Surface created after {:?}, loop not restarted", outcome);
            return Ok(());
        }
        // `finish` may land right here; the loop refuses to start once shut down
        self.game_loop.start()
    }

    /// Surface going away: stop drawing before returning
    pub fn on_surface_destroyed(&self) {
        self.game_loop.stop();
    }

    /// Feed a tap. Returns the taps still needed.
    pub fn on_touch(&self, point: Vec2) -> u32 {
        if self.outcome().is_some() {
            return self.hits_remaining();
        }

        // Engine lock must be released before `finish` joins the loop thread
        let remaining = self.engine.lock().touch(point);

        if remaining == 0 {
            self.finish(Outcome::Success);
        } else if let Some(instruction) = Instruction::for_remaining(remaining) {
            self.ui.set_instruction(instruction);
        }
        remaining
    }

    /// Countdown expired
    pub fn on_timeout(&self) {
        self.finish(Outcome::Failure(FailureReason::Timeout));
    }

    /// Record the outcome and notify everyone. Only the first call does anything.
    fn finish(&self, outcome: Outcome) -> bool {
        if self.outcome.set(outcome).is_err() {
            log::debug!(
                "Ignoring {:?}, session already ended with {:?}",
                outcome,
                self.outcome.get()
            );
            return false;
        }

        self.game_loop.shutdown();
        self.countdown.stop();

        match outcome {
            Outcome::Success => {
                log::info!(target: "telemetry", "user_action=tap_game_success");
            }
            Outcome::Failure(reason) => {
                log::info!(target: "telemetry", "user_action=tap_game_failure reason={:?}", reason);
            }
        }

        self.ui.show_banner(&outcome, outcome.message());
        match outcome {
            Outcome::Success => self.sink.on_success(),
            Outcome::Failure(reason) => self.sink.on_failure(reason),
        }
        true
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome.get().copied()
    }

    pub fn hits_remaining(&self) -> u32 {
        self.engine.lock().hits_remaining()
    }

    /// Where a tap would currently land on the target
    pub fn hitbox(&self) -> Hitbox {
        self.engine.lock().hitbox()
    }

    /// Shared engine handle (replays and tests)
    pub fn engine(&self) -> Arc<Mutex<PhysicsEngine>> {
        self.engine.clone()
    }

    pub fn is_running(&self) -> bool {
        self.game_loop.is_running()
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.game_loop.frames()
    }

    pub fn time_left(&self) -> Option<std::time::Duration> {
        self.countdown.remaining()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.countdown.stop();
    }
}
