//! Headless double-buffered surface

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;

use super::DrawSurface;
use crate::renderer::FrameBuffer;

/// Two in-memory [`FrameBuffer`]s that swap on every post
pub struct MemorySurface {
    sync: Mutex<()>,
    size: Mutex<(u32, u32)>,
    back: Mutex<Option<FrameBuffer>>,
    front: Mutex<FrameBuffer>,
    alive: AtomicBool,
    posted: AtomicU64,
}

impl MemorySurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            sync: Mutex::new(()),
            size: Mutex::new((width, height)),
            back: Mutex::new(Some(FrameBuffer::new(width, height))),
            front: Mutex::new(FrameBuffer::new(width, height)),
            alive: AtomicBool::new(true),
            posted: AtomicU64::new(0),
        }
    }

    /// Change the geometry. Waits for any frame being drawn.
    pub fn resize(&self, width: u32, height: u32) {
        let _guard = self.sync.lock();
        *self.size.lock() = (width, height);
        log::debug!("Surface resized to {}x{}", width, height);
    }

    /// Stop handing out frames
    pub fn destroy(&self) {
        let _guard = self.sync.lock();
        self.alive.store(false, Ordering::Release);
    }

    /// Hand out frames again after [`destroy`](Self::destroy)
    pub fn recreate(&self) {
        self.alive.store(true, Ordering::Release);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Number of frames posted so far
    pub fn frames_posted(&self) -> u64 {
        self.posted.load(Ordering::Acquire)
    }

    /// Copy of the visible frame
    pub fn front(&self) -> FrameBuffer {
        self.front.lock().clone()
    }
}

impl DrawSurface for MemorySurface {
    fn lock_frame(&self) -> Option<FrameBuffer> {
        if !self.is_alive() {
            return None;
        }
        let mut frame = self.back.lock().take()?;
        let (width, height) = self.size();
        if frame.width() != width || frame.height() != height {
            frame.resize(width, height);
        } else {
            frame.clear();
        }
        Some(frame)
    }

    fn post_frame(&self, frame: FrameBuffer) {
        if !self.is_alive() {
            // Surface went away mid-frame, keep the buffer but don't show it
            *self.back.lock() = Some(frame);
            return;
        }
        let previous = std::mem::replace(&mut *self.front.lock(), frame);
        *self.back.lock() = Some(previous);
        self.posted.fetch_add(1, Ordering::AcqRel);
    }

    fn sync(&self) -> &Mutex<()> {
        &self.sync
    }

    fn size(&self) -> (u32, u32) {
        *self.size.lock()
    }
}
