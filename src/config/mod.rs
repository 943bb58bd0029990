#[allow(clippy::module_inception)]
mod config;
pub mod defaults;

pub use config::*;
