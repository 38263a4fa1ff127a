//! Thread-backed countdown timer

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use super::Countdown;
use crate::error::{Error, Result};

const THREAD_NAME: &str = "countdown";

struct Armed {
    cancel: Sender<()>,
    deadline: Instant,
}

/// Waits on a channel with a timeout; a message or a dropped sender cancels
#[derive(Default)]
pub struct ThreadCountdown {
    armed: Mutex<Option<Armed>>,
}

impl ThreadCountdown {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Countdown for ThreadCountdown {
    fn start(&self, duration: Duration, on_expire: Box<dyn FnOnce() + Send>) -> Result<()> {
        self.stop();

        let (cancel, cancelled) = mpsc::channel::<()>();
        thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || match cancelled.recv_timeout(duration) {
                Err(RecvTimeoutError::Timeout) => {
                    log::debug!("Countdown expired after {:?}", duration);
                    on_expire();
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    log::debug!("Countdown cancelled");
                }
            })
            .map_err(|source| Error::ThreadSpawn {
                name: THREAD_NAME,
                source,
            })?;

        *self.armed.lock() = Some(Armed {
            cancel,
            deadline: Instant::now() + duration,
        });
        Ok(())
    }

    fn stop(&self) {
        if let Some(armed) = self.armed.lock().take() {
            // The timer thread may already be gone, that's fine
            let _ = armed.cancel.send(());
        }
    }

    fn remaining(&self) -> Option<Duration> {
        self.armed
            .lock()
            .as_ref()
            .map(|a| a.deadline.saturating_duration_since(Instant::now()))
    }
}
