//! The update check as a sequence of messages
//!
//! `sequencer` drives the network side and emits `UpdateEvent`s, `UpdateDialog` reduces them
//! into what the dialog shows. Both sides only meet through a responder, so the dialog can live on
//! a single ui loop while the request runs on the runtime.
mod sequencer;
mod state;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedSender;

pub use sequencer::{run_check, spawn_check};
pub use state::{Progress, StatusMessage, UpdateDialog, UpdateOutcome, UpdateState, PROGRESS_MAX};

/// Steps of a single update check, in the order they are sent
#[derive(Debug, strum_macros::Display, strum_macros::EnumIs)]
pub enum UpdateEvent {
    /// The delay elapsed and the check begins
    CheckStarted,
    /// The request is on its way
    RequestSent,
    /// Raw payload, or whatever went wrong getting it
    ResponseReceived(Result<Vec<u8>>),
}

/// Receives the steps of an update check
pub trait UpdateResponder: std::fmt::Debug + Send + Sync {
    fn send(&self, event: UpdateEvent);
}

impl UpdateResponder for UnboundedSender<UpdateEvent> {
    fn send(&self, event: UpdateEvent) {
        if let Err(err) = UnboundedSender::send(self, event) {
            tracing::debug!("Update check outlived its dialog, dropping {}", err.0);
        }
    }
}
