pub mod cli;
pub mod config;
pub mod frontend;
pub mod headless;
pub mod release;
pub mod updater;
pub mod updater_tracing;
pub mod version;

pub use frontend::*;
