//! Bounce Tap entry point
//!
//! Runs one headless session against an in-memory surface. By default a
//! scripted player taps the target until it wins; `--idle` leaves it alone so
//! the countdown runs out.
//!
//! Usage: `bounce-tap [--idle] [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::mpsc;
    use std::thread;
    use std::time::{Duration, Instant};

    use bounce_tap::platform::{ChannelSink, LogUi, MemorySurface, ThreadCountdown};
    use bounce_tap::{Outcome, Result, Session, Settings};

    const SURFACE_SIZE: (u32, u32) = (1080, 1920);
    const TAP_INTERVAL: Duration = Duration::from_millis(150);

    struct Args {
        idle: bool,
        settings_path: Option<String>,
    }

    fn parse_args() -> Args {
        let mut args = Args {
            idle: false,
            settings_path: None,
        };
        for arg in std::env::args().skip(1) {
            match arg.as_str() {
                "--idle" => args.idle = true,
                _ => args.settings_path = Some(arg),
            }
        }
        args
    }

    pub fn run() -> Result<()> {
        let args = parse_args();
        let settings = match &args.settings_path {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        log::info!("Bounce Tap (native) starting...");

        let (width, height) = SURFACE_SIZE;
        let surface = Arc::new(MemorySurface::new(width, height));
        let (tx, rx) = mpsc::channel();
        let session = Session::new(
            settings.clone(),
            surface.clone(),
            Arc::new(ThreadCountdown::new()),
            Arc::new(LogUi::new()),
            Arc::new(ChannelSink::new(tx)),
        )?;

        let started = Instant::now();
        session.begin()?;
        session.on_layout(width, height);
        session.on_surface_created()?;

        let done = Arc::new(AtomicBool::new(false));
        let tapper = if args.idle {
            log::info!("Idle mode, waiting for the countdown");
            None
        } else {
            let session = session.clone();
            let done = done.clone();
            Some(thread::spawn(move || {
                while !done.load(Ordering::Acquire) && session.outcome().is_none() {
                    thread::sleep(TAP_INTERVAL);
                    let point = session.hitbox().center();
                    let remaining = session.on_touch(point);
                    log::debug!("Tap at {:?}, {} left", point, remaining);
                }
            }))
        };

        // The countdown always ends the session, the extra second is slack
        let outcome = rx.recv_timeout(settings.timeout() + Duration::from_secs(1));
        done.store(true, Ordering::Release);
        if let Some(tapper) = tapper {
            if tapper.join().is_err() {
                log::error!("Tapper thread panicked");
            }
        }
        session.on_surface_destroyed();

        match outcome {
            Ok(Outcome::Success) => log::info!(
                "Won in {:.2}s over {} frames",
                started.elapsed().as_secs_f32(),
                surface.frames_posted()
            ),
            Ok(Outcome::Failure(reason)) => log::info!(
                "Lost ({:?}) after {} frames, {} taps short",
                reason,
                surface.frames_posted(),
                session.hits_remaining()
            ),
            Err(_) => log::warn!("No outcome reported"),
        }
        Ok(())
    }
}
