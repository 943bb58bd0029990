use anyhow::Result;

use crate::release::ReleaseMetadata;
use crate::version::is_newer_version;

use super::UpdateEvent;

pub const PROGRESS_MAX: u16 = 100;
const PROGRESS_REQUEST_SENT: u16 = 20;
const PROGRESS_RESPONSE_RECEIVED: u16 = 40;

/// Where the check is at
#[derive(Debug, Clone, Default, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIs)]
pub enum UpdateState {
    #[default]
    Idle,
    Checking,
    Succeeded(UpdateOutcome),
    Failed,
}

/// Result of a successful check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub current_version: String,
    pub latest_version: String,
    pub release_url: String,
    pub update_available: bool,
    pub notes: String,
}

impl UpdateOutcome {
    fn from_release(current_version: &str, release: &ReleaseMetadata) -> Self {
        let latest_version = release.version().to_string();

        Self {
            update_available: is_newer_version(current_version, &latest_version),
            current_version: current_version.to_string(),
            latest_version,
            release_url: release.html_url.clone(),
            notes: release.notes(),
        }
    }
}

/// The status line below the version label
#[derive(Debug, Clone, Default, PartialEq, Eq, strum_macros::EnumIs)]
pub enum StatusMessage {
    #[default]
    Hidden,
    Checking,
    Failed,
    UpdateAvailable { release_url: String },
    UpToDate,
}

impl StatusMessage {
    pub const CHECKING: &'static str = "Checking for updates...";
    pub const FAILED: &'static str = ":( Fail to check for updates.\nPlease try it later.";
    pub const UPDATE_AVAILABLE: &'static str = "Updates Available!";
    pub const VISIT_RELEASES: &'static str =
        "Please visit the release page to download the latest version:";
    pub const UP_TO_DATE: &'static str = "VNote is already the latest version.";

    /// Text of the status line, one entry per line
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            StatusMessage::Hidden => vec![],
            StatusMessage::Checking => vec![Self::CHECKING.to_string()],
            StatusMessage::Failed => Self::FAILED.lines().map(str::to_string).collect(),
            StatusMessage::UpdateAvailable { release_url } => vec![
                Self::UPDATE_AVAILABLE.to_string(),
                Self::VISIT_RELEASES.to_string(),
                release_url.clone(),
            ],
            StatusMessage::UpToDate => vec![Self::UP_TO_DATE.to_string()],
        }
    }
}

/// Progress indicator, purely cosmetic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub value: u16,
    pub visible: bool,
    pub enabled: bool,
}

impl Progress {
    #[must_use]
    pub fn ratio(&self) -> f64 {
        f64::from(self.value.min(PROGRESS_MAX)) / f64::from(PROGRESS_MAX)
    }
}

/// Everything the update dialog shows, driven by `UpdateEvent`s
#[derive(Debug, Clone)]
pub struct UpdateDialog {
    current_version: String,
    state: UpdateState,
    version_label: String,
    status: StatusMessage,
    progress: Progress,
    notes: Option<String>,
}

impl UpdateDialog {
    #[must_use]
    pub fn new(current_version: impl Into<String>) -> Self {
        let current_version = current_version.into();

        Self {
            version_label: format!("Current Version: v{current_version}"),
            current_version,
            state: UpdateState::Idle,
            status: StatusMessage::Hidden,
            progress: Progress::default(),
            notes: None,
        }
    }

    pub fn state(&self) -> &UpdateState {
        &self.state
    }

    pub fn version_label(&self) -> &str {
        &self.version_label
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Release notes, only present once the check succeeded
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// The release url if the check succeeded
    pub fn release_url(&self) -> Option<&str> {
        match &self.state {
            UpdateState::Succeeded(outcome) if !outcome.release_url.is_empty() => {
                Some(&outcome.release_url)
            }
            _ => None,
        }
    }

    /// True once the dialog reached a terminal state
    pub fn is_finished(&self) -> bool {
        matches!(self.state, UpdateState::Succeeded(_) | UpdateState::Failed)
    }

    /// Applies a single event
    ///
    /// Events that do not fit the current state are ignored.
    #[tracing::instrument(skip_all, fields(state = %self.state, event = %event))]
    pub fn apply(&mut self, event: UpdateEvent) {
        match event {
            UpdateEvent::CheckStarted if self.state.is_idle() => self.start_checking(),
            UpdateEvent::RequestSent if self.state.is_checking() => {
                self.progress.value = PROGRESS_REQUEST_SENT;
            }
            UpdateEvent::ResponseReceived(payload) if self.state.is_checking() => {
                self.progress.value = PROGRESS_RESPONSE_RECEIVED;
                self.handle_response(payload);
            }
            event => {
                tracing::debug!("Ignoring {event} in state {}", self.state);
            }
        }
    }

    fn start_checking(&mut self) {
        self.state = UpdateState::Checking;
        self.status = StatusMessage::Checking;
        self.progress = Progress {
            value: 0,
            visible: true,
            enabled: true,
        };
    }

    fn handle_response(&mut self, payload: Result<Vec<u8>>) {
        match payload.and_then(|payload| ReleaseMetadata::from_payload(&payload)) {
            Ok(release) => self.succeed(&release),
            Err(error) => self.fail(&error),
        }
    }

    fn fail(&mut self, error: &anyhow::Error) {
        tracing::warn!("Failed to check for updates: {error:#}");

        self.state = UpdateState::Failed;
        self.status = StatusMessage::Failed;
        self.progress.enabled = false;
    }

    fn succeed(&mut self, release: &ReleaseMetadata) {
        self.progress.value = PROGRESS_MAX;

        let outcome = UpdateOutcome::from_release(&self.current_version, release);
        tracing::info!(
            current = %outcome.current_version,
            latest = %outcome.latest_version,
            update_available = outcome.update_available,
            "Checked for updates"
        );

        self.version_label = format!(
            "Current Version: v{}\nLatest Version: v{}",
            outcome.current_version, outcome.latest_version
        );
        self.status = if outcome.update_available {
            StatusMessage::UpdateAvailable {
                release_url: outcome.release_url.clone(),
            }
        } else {
            StatusMessage::UpToDate
        };
        self.notes = Some(outcome.notes.clone());
        self.progress.visible = false;
        self.state = UpdateState::Succeeded(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn payload(tag: &str) -> Vec<u8> {
        serde_json::json!({
            "tag_name": tag,
            "name": "VNote 3.2",
            "html_url": "https://github.com/tamlok/vnote/releases/tag/v3.2",
            "body": "* Faster startup",
        })
        .to_string()
        .into_bytes()
    }

    fn checking(current_version: &str) -> UpdateDialog {
        let mut dialog = UpdateDialog::new(current_version);
        dialog.apply(UpdateEvent::CheckStarted);
        dialog.apply(UpdateEvent::RequestSent);
        dialog
    }

    #[test]
    fn test_initial_state() {
        let dialog = UpdateDialog::new("3.1");

        assert!(dialog.state().is_idle());
        assert_eq!(dialog.version_label(), "Current Version: v3.1");
        assert!(dialog.status().is_hidden());
        assert!(!dialog.progress().visible);
        assert!(dialog.notes().is_none());
    }

    #[test]
    fn test_checking_progress() {
        let mut dialog = UpdateDialog::new("3.1");

        dialog.apply(UpdateEvent::CheckStarted);
        assert!(dialog.state().is_checking());
        assert!(dialog.status().is_checking());
        assert_eq!(
            dialog.progress(),
            Progress {
                value: 0,
                visible: true,
                enabled: true
            }
        );

        dialog.apply(UpdateEvent::RequestSent);
        assert_eq!(dialog.progress().value, 20);
    }

    #[test]
    fn test_update_available() {
        let mut dialog = checking("3.1");
        dialog.apply(UpdateEvent::ResponseReceived(Ok(payload("v3.2"))));

        let UpdateState::Succeeded(outcome) = dialog.state() else {
            panic!("Expected success, got {:?}", dialog.state());
        };
        assert!(outcome.update_available);
        assert_eq!(outcome.latest_version, "3.2");
        assert_eq!(
            dialog.status(),
            &StatusMessage::UpdateAvailable {
                release_url: "https://github.com/tamlok/vnote/releases/tag/v3.2".to_string()
            }
        );
        assert_eq!(
            dialog.status().lines()[2],
            "https://github.com/tamlok/vnote/releases/tag/v3.2"
        );
        assert_eq!(
            dialog.release_url(),
            Some("https://github.com/tamlok/vnote/releases/tag/v3.2")
        );
        assert_snapshot!(dialog.version_label(), @r"
        Current Version: v3.1
        Latest Version: v3.2
        ");
    }

    #[test]
    fn test_already_latest() {
        let mut dialog = checking("3.2");
        dialog.apply(UpdateEvent::ResponseReceived(Ok(payload("v3.2"))));

        assert!(dialog.state().is_succeeded());
        assert_eq!(dialog.status(), &StatusMessage::UpToDate);
        assert_eq!(dialog.status().lines(), vec![StatusMessage::UP_TO_DATE]);
    }

    #[test]
    fn test_older_release_is_not_an_update() {
        let mut dialog = checking("3.10");
        dialog.apply(UpdateEvent::ResponseReceived(Ok(payload("3.9"))));

        assert_eq!(dialog.status(), &StatusMessage::UpToDate);
    }

    #[test]
    fn test_success_reveals_notes_and_hides_progress() {
        let mut dialog = checking("3.1");
        dialog.apply(UpdateEvent::ResponseReceived(Ok(payload("v3.2"))));

        assert_eq!(
            dialog.notes(),
            Some("VNote 3.2\n==========\n* Faster startup")
        );
        assert_eq!(dialog.progress().value, PROGRESS_MAX);
        assert!(!dialog.progress().visible);
        assert!(dialog.is_finished());
    }

    #[test]
    fn test_failed_on_empty_object() {
        let mut dialog = checking("3.1");
        dialog.apply(UpdateEvent::ResponseReceived(Ok(b"{}".to_vec())));

        assert!(dialog.state().is_failed());
        assert!(dialog.status().is_failed());
        assert!(!dialog.progress().enabled);
        assert!(dialog.notes().is_none());
        assert!(dialog.release_url().is_none());
        assert_eq!(dialog.version_label(), "Current Version: v3.1");
    }

    #[test]
    fn test_failed_on_transport_error() {
        let mut dialog = checking("3.1");
        dialog.apply(UpdateEvent::ResponseReceived(Err(anyhow::anyhow!(
            "connection refused"
        ))));

        assert!(dialog.state().is_failed());
        assert_eq!(
            dialog.status().lines(),
            vec![":( Fail to check for updates.", "Please try it later."]
        );
    }

    #[test]
    fn test_failed_on_garbage() {
        let mut dialog = checking("3.1");
        dialog.apply(UpdateEvent::ResponseReceived(Ok(b"<html>".to_vec())));

        assert!(dialog.state().is_failed());
    }

    #[test]
    fn test_out_of_order_events_are_ignored() {
        let mut dialog = UpdateDialog::new("3.1");

        dialog.apply(UpdateEvent::RequestSent);
        dialog.apply(UpdateEvent::ResponseReceived(Ok(payload("v9.0"))));
        assert!(dialog.state().is_idle());
        assert!(dialog.notes().is_none());
    }

    #[test]
    fn test_terminal_states_are_final() {
        let mut dialog = checking("3.1");
        dialog.apply(UpdateEvent::ResponseReceived(Ok(b"".to_vec())));
        assert!(dialog.state().is_failed());

        dialog.apply(UpdateEvent::CheckStarted);
        dialog.apply(UpdateEvent::ResponseReceived(Ok(payload("v3.2"))));
        assert!(dialog.state().is_failed());
        assert!(!dialog.progress().enabled);
    }

    #[test]
    fn test_release_without_url() {
        let mut dialog = checking("3.1");
        dialog.apply(UpdateEvent::ResponseReceived(Ok(
            br#"{"tag_name": "v3.2"}"#.to_vec()
        )));

        assert!(dialog.state().is_succeeded());
        assert!(dialog.release_url().is_none());
        assert_eq!(dialog.notes(), Some("\n==========\n"));
    }

    #[test]
    fn test_progress_ratio() {
        let progress = Progress {
            value: 20,
            visible: true,
            enabled: true,
        };
        assert!((progress.ratio() - 0.2).abs() < f64::EPSILON);
    }
}
