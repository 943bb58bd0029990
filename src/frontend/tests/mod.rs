
use std::sync::Arc;

use crate::config::Config;
use crate::frontend::App;
use crate::release::MockReleaseSource;

pub const RELEASE_URL: &str = "https://github.com/tamlok/vnote/releases/tag/v3.2";

pub fn release_payload(tag: &str) -> Vec<u8> {
    serde_json::json!({
        "tag_name": tag,
        "name": "VNote 3.2",
        "html_url": RELEASE_URL,
        "body": "* Faster startup\n* Fewer bugs\n* Better search",
    })
    .to_string()
    .into_bytes()
}

pub fn test_config(current_version: &str) -> Config {
    Config {
        current_version: current_version.to_string(),
        ..Config::default()
    }
}

/// An app whose source must never be hit
pub fn test_app(current_version: &str) -> App {
    let mut source = MockReleaseSource::new();
    source.expect_fetch().never();

    App::new(&test_config(current_version), Arc::new(source))
}
