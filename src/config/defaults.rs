use std::path::PathBuf;

use url::Url;

pub const DEFAULT_RELEASE_URL: &str = "https://api.github.com/repos/tamlok/vnote/releases/latest";

/// The running version as `MAJOR.MINOR`, which is what releases are tagged with
#[must_use]
pub fn default_current_version() -> String {
    format!(
        "{}.{}",
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR")
    )
}

/// # Panics
///
/// Panics if the built in release url is not a valid url
#[must_use]
pub fn default_release_url() -> Url {
    Url::parse(DEFAULT_RELEASE_URL).expect("Infallible")
}

pub(super) fn default_check_delay_ms() -> u64 {
    1000
}

pub(super) fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

pub(super) fn default_log_dir() -> PathBuf {
    let mut path = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
    path.push("note-updater");
    path.push("logs");

    path
}
