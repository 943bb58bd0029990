use crossterm::event::KeyEvent;
use tokio::sync::mpsc::UnboundedSender;

use crate::updater::{UpdateEvent, UpdateResponder};

use super::app::AppMode;

// Event handling
#[derive(Debug, strum_macros::Display)]
pub enum UIEvent {
    /// A key is pressed
    Input(KeyEvent),
    /// A frontend tick event to trigger updates, etc
    Tick,
    /// The update check made progress
    Update(UpdateEvent),
    /// Change the view mode of the frontend
    ChangeMode(AppMode),
    /// Copy the release url to the clipboard
    CopyReleaseUrl,
    /// Accept the dialog and quit
    Quit,
}

impl From<KeyEvent> for UIEvent {
    fn from(key: KeyEvent) -> Self {
        Self::Input(key)
    }
}

impl From<UpdateEvent> for UIEvent {
    fn from(event: UpdateEvent) -> Self {
        Self::Update(event)
    }
}

impl UpdateResponder for UnboundedSender<UIEvent> {
    fn send(&self, event: UpdateEvent) {
        if let Err(err) = UnboundedSender::send(self, event.into()) {
            tracing::debug!("Update check outlived the dialog, dropping {}", err.0);
        }
    }
}
