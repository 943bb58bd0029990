use std::sync::Arc;
use std::time::Duration;

use tokio_util::task::AbortOnDropHandle;

use crate::release::ReleaseSource;

use super::{UpdateEvent, UpdateResponder};

/// Runs a single update check, reporting each step to `responder`
///
/// The delay always completes before the request is issued, and the request always completes
/// before its response is reported.
#[tracing::instrument(skip_all, fields(delay = ?delay))]
pub async fn run_check(
    source: &dyn ReleaseSource,
    delay: Duration,
    responder: &dyn UpdateResponder,
) {
    tokio::time::sleep(delay).await;

    responder.send(UpdateEvent::CheckStarted);
    responder.send(UpdateEvent::RequestSent);

    let payload = source.fetch().await;

    responder.send(UpdateEvent::ResponseReceived(payload));
}

/// Spawns `run_check` on the runtime
///
/// Dropping the returned handle aborts the check, abandoning any request in flight.
#[must_use = "dropping the handle aborts the check"]
pub fn spawn_check(
    source: Arc<dyn ReleaseSource>,
    delay: Duration,
    responder: Arc<dyn UpdateResponder>,
) -> AbortOnDropHandle<()> {
    let handle = tokio::spawn(async move {
        run_check(source.as_ref(), delay, responder.as_ref()).await;
    });

    AbortOnDropHandle::new(handle)
}
