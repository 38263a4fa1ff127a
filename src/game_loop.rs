//! Render loop
//!
//! A dedicated thread that steps the engine and pushes a frame to the surface,
//! then sleeps a fixed delay. The cadence is best effort: there is no
//! frame-time compensation, a slow draw simply slows the game down.

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::platform::DrawSurface;
use crate::sim::PhysicsEngine;

const THREAD_NAME: &str = "game-loop";

/// A started loop thread and the flag that keeps it going
struct LoopThread {
    running: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

pub struct GameLoop {
    engine: Arc<Mutex<PhysicsEngine>>,
    surface: Arc<dyn DrawSurface>,
    delay: Duration,
    frames: Arc<AtomicU64>,
    thread: Mutex<Option<LoopThread>>,
    /// Held across a whole start or stop, join included
    control: Mutex<()>,
    /// Set by `shutdown`, later starts are refused
    closed: AtomicBool,
}

impl GameLoop {
    pub fn new(
        engine: Arc<Mutex<PhysicsEngine>>,
        surface: Arc<dyn DrawSurface>,
        delay: Duration,
    ) -> Self {
        Self {
            engine,
            surface,
            delay,
            frames: Arc::new(AtomicU64::new(0)),
            thread: Mutex::new(None),
            control: Mutex::new(()),
            closed: AtomicBool::new(false),
        }
    }

    /// Spawn the loop thread. No-op while a loop thread is alive or after
    /// [`shutdown`](Self::shutdown).
    pub fn start(&self) -> Result<()> {
        let _control = self.control.lock();
        if self.closed.load(Ordering::Acquire) {
            log::debug!("Game loop shut down, not starting");
            return Ok(());
        }

        let mut slot = self.thread.lock();
        if let Some(current) = slot.as_ref() {
            if !current.handle.is_finished() {
                log::debug!("Game loop already running");
                return Ok(());
            }
        }
        // A finished thread here means the loop died on its own
        if let Some(dead) = slot.take() {
            reap(dead.handle);
        }

        let running = Arc::new(AtomicBool::new(true));
        let worker = Worker {
            engine: self.engine.clone(),
            surface: self.surface.clone(),
            running: running.clone(),
            frames: self.frames.clone(),
            delay: self.delay,
        };
        let handle = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || worker.run())
            .map_err(|source| Error::ThreadSpawn {
                name: THREAD_NAME,
                source,
            })?;

        *slot = Some(LoopThread { running, handle });
        Ok(())
    }

    /// Stop the loop and wait for its thread to exit.
    ///
    /// Once this returns, no further draw call happens. A caller arriving
    /// while another stop is joining waits for that join to finish.
    pub fn stop(&self) {
        let _control = self.control.lock();
        self.halt();
    }

    /// Stop for good: like [`stop`](Self::stop), and every later
    /// [`start`](Self::start) is a no-op.
    pub fn shutdown(&self) {
        let _control = self.control.lock();
        self.closed.store(true, Ordering::Release);
        self.halt();
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Caller holds `control`
    fn halt(&self) {
        // Slot lock released before joining so `is_running` never blocks on it
        let Some(current) = self.thread.lock().take() else {
            return;
        };
        current.running.store(false, Ordering::Release);

        if current.handle.thread().id() == thread::current().id() {
            log::warn!("Game loop stop requested from the loop thread, not joining");
            return;
        }
        reap(current.handle);
    }

    pub fn is_running(&self) -> bool {
        self.thread
            .lock()
            .as_ref()
            .is_some_and(|t| !t.handle.is_finished())
    }

    /// Frames posted since creation
    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Acquire)
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// State moved into the loop thread
struct Worker {
    engine: Arc<Mutex<PhysicsEngine>>,
    surface: Arc<dyn DrawSurface>,
    running: Arc<AtomicBool>,
    frames: Arc<AtomicU64>,
    delay: Duration,
}

impl Worker {
    fn run(self) {
        log::debug!("Game loop started ({:?} delay)", self.delay);
        while self.running.load(Ordering::Acquire) {
            self.engine.lock().update();

            match self.surface.lock_frame() {
                Some(mut frame) => {
                    {
                        let _sync = self.surface.sync().lock();
                        self.engine.lock().draw(&mut frame);
                    }
                    self.surface.post_frame(frame);
                    self.frames.fetch_add(1, Ordering::AcqRel);
                }
                None => log::trace!("Surface not ready, frame skipped"),
            }

            thread::sleep(self.delay);
        }
        log::debug!("Game loop exited");
    }
}

/// Join a loop thread, logging instead of propagating a panic
fn reap(handle: JoinHandle<()>) {
    if let Err(payload) = handle.join() {
        log::error!("Game loop thread panicked: {}", panic_message(&*payload));
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "<non-string panic>"
    }
}
