use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use note_updater::config::Config;
use note_updater::headless;
use note_updater::release::ReleaseSource;
use note_updater::updater::{StatusMessage, UpdateState};

#[derive(Debug)]
struct StaticSource(&'static str);

#[async_trait]
impl ReleaseSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        Ok(self.0.as_bytes().to_vec())
    }
}

#[derive(Debug)]
struct UnreachableSource;

#[async_trait]
impl ReleaseSource for UnreachableSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        anyhow::bail!("network is unreachable")
    }
}

fn config(current_version: &str) -> Config {
    Config {
        current_version: current_version.to_string(),
        check_delay_ms: 0,
        ..Config::default()
    }
}

#[test_log::test(tokio::test)]
async fn test_newer_tag_reports_update_with_url() {
    let source = StaticSource(
        r#"{"tag_name": "v1.10", "name": "1.10", "html_url": "https://example.com/releases/v1.10", "body": "notes"}"#,
    );

    let dialog = headless::check(&config("1.5"), Arc::new(source)).await;

    assert_eq!(
        dialog.status(),
        &StatusMessage::UpdateAvailable {
            release_url: "https://example.com/releases/v1.10".to_string()
        }
    );
    let UpdateState::Succeeded(outcome) = dialog.state() else {
        panic!("Expected success");
    };
    assert_eq!(outcome.latest_version, "1.10");
    assert!(outcome.update_available);
}

#[test_log::test(tokio::test)]
async fn test_same_tag_is_already_latest() {
    let source = StaticSource(r#"{"tag_name": "v1.5"}"#);

    let dialog = headless::check(&config("1.5"), Arc::new(source)).await;

    assert_eq!(dialog.status(), &StatusMessage::UpToDate);
}

#[test_log::test(tokio::test)]
async fn test_bare_v_tag_is_kept_and_never_newer() {
    let source = StaticSource(r#"{"tag_name": "v"}"#);

    let dialog = headless::check(&config("1.5"), Arc::new(source)).await;

    assert!(dialog.version_label().ends_with("Latest Version: vv"));
    assert_eq!(dialog.status(), &StatusMessage::UpToDate);
}

#[test_log::test(tokio::test)]
async fn test_malformed_current_version_never_reports_update() {
    let source = StaticSource(r#"{"tag_name": "v9.0"}"#);

    let dialog = headless::check(&config("1.5.0"), Arc::new(source)).await;

    assert_eq!(dialog.status(), &StatusMessage::UpToDate);
}

#[test_log::test(tokio::test)]
async fn test_unusable_payloads_fail() {
    for payload in ["", "{}", "[]", "{\"tag_name\": "] {
        let dialog = headless::check(&config("1.5"), Arc::new(StaticSource(payload))).await;

        assert!(dialog.state().is_failed(), "payload {payload:?}");
        assert!(dialog.notes().is_none());
    }
}

#[test_log::test(tokio::test)]
async fn test_transport_error_fails() {
    let dialog = headless::check(&config("1.5"), Arc::new(UnreachableSource)).await;

    assert_eq!(dialog.status(), &StatusMessage::Failed);
    assert!(!dialog.progress().enabled);
}
