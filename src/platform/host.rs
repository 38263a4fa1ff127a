//! Headless UI and result sink

use std::sync::mpsc::Sender;

use parking_lot::Mutex;

use super::{GameUi, ResultSink};
use crate::session::{FailureReason, Instruction, Outcome};

/// Logs instruction and banner changes, keeping the latest of each
#[derive(Default)]
pub struct LogUi {
    instruction: Mutex<Option<Instruction>>,
    banner: Mutex<Option<String>>,
}

impl LogUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instruction(&self) -> Option<Instruction> {
        *self.instruction.lock()
    }

    pub fn banner(&self) -> Option<String> {
        self.banner.lock().clone()
    }
}

impl GameUi for LogUi {
    fn set_instruction(&self, instruction: Instruction) {
        log::info!("Instruction: {}", instruction.text());
        *self.instruction.lock() = Some(instruction);
    }

    fn show_banner(&self, outcome: &Outcome, message: &str) {
        log::info!("Banner ({:?}): {}", outcome, message);
        *self.banner.lock() = Some(message.to_string());
    }
}

/// Forwards the outcome over a channel
pub struct ChannelSink {
    tx: Mutex<Sender<Outcome>>,
}

impl ChannelSink {
    pub fn new(tx: Sender<Outcome>) -> Self {
        Self { tx: Mutex::new(tx) }
    }

    fn send(&self, outcome: Outcome) {
        if self.tx.lock().send(outcome).is_err() {
            log::warn!("Outcome {:?} dropped: receiver gone", outcome);
        }
    }
}

impl ResultSink for ChannelSink {
    fn on_success(&self) {
        self.send(Outcome::Success);
    }

    fn on_failure(&self, reason: FailureReason) {
        self.send(Outcome::Failure(reason));
    }
}
