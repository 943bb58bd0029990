//! Runs the update check without a terminal ui and reports what the dialog would show
use std::fmt::Write as _;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::Config;
use crate::release::ReleaseSource;
use crate::updater::{spawn_check, UpdateDialog, UpdateEvent};

/// Runs a single check to completion
#[tracing::instrument(skip_all)]
pub async fn check(config: &Config, source: Arc<dyn ReleaseSource>) -> UpdateDialog {
    let (tx, mut rx) = mpsc::unbounded_channel::<UpdateEvent>();
    let mut dialog = UpdateDialog::new(&config.current_version);

    let _check = spawn_check(source, config.check_delay(), Arc::new(tx));

    while !dialog.is_finished() {
        let Some(event) = rx.recv().await else {
            break;
        };
        dialog.apply(event);
    }

    dialog
}

/// Plain text rendition of the dialog
#[must_use]
pub fn report(dialog: &UpdateDialog) -> String {
    let mut report = String::new();

    let _ = writeln!(report, "{}", dialog.version_label());
    for line in dialog.status().lines() {
        let _ = writeln!(report, "{line}");
    }

    if let Some(notes) = dialog.notes() {
        let _ = writeln!(report);
        let _ = writeln!(report, "{notes}");
    }

    report
}
