#[cfg(test)]
mod tests;

mod actions;
mod app;
mod ui_event;

/// Different frontend ui modes
mod dialog_mode;
mod logs_mode;

/// Let's be very strict about what to export
/// to avoid coupling frontend and the rest
pub use app::{App, AppMode};
pub use ui_event::UIEvent;
