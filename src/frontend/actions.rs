//! Handles the actions the dialog can perform outside of the update check itself
use copypasta::{ClipboardContext, ClipboardProvider as _};

use super::App;

pub fn copy_release_url(app: &mut App) {
    let Some(release_url) = app.dialog.release_url().map(str::to_string) else {
        tracing::warn!("No release url to copy");
        app.notice = Some("Nothing to copy yet".to_string());
        return;
    };

    if let Err(e) = ClipboardContext::new().and_then(|mut ctx| ctx.set_contents(release_url)) {
        tracing::error!("Error copying release url to clipboard {e:#}");
        app.notice = Some("Could not copy link".to_string());
        return;
    }

    app.notice = Some("Copied link to clipboard".to_string());
}
