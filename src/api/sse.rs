//! Server-Sent Events support

use crate::session::{SessionEvent, SessionSnapshot};
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use serde_json::json;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// Stream an `init` snapshot followed by every later mutation.
///
/// `broadcast_rx` must be subscribed before the snapshot is taken; events the
/// snapshot already reflects are filtered out by revision.
pub fn sse_stream(
    snapshot: SessionSnapshot,
    broadcast_rx: broadcast::Receiver<SessionEvent>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let since = snapshot.revision;
    let init = futures::stream::once(async move { Ok(init_event(&snapshot)) });

    // A lagged receiver has lost events for good. End the stream so the
    // client reconnects and starts again from a fresh `init`.
    let broadcasts = BroadcastStream::new(broadcast_rx)
        .take_while(|result| match result {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "SSE subscriber lagged, closing stream");
                false
            }
        })
        .filter_map(move |result| match result {
            Ok(event) if event.revision() > since => Some(Ok(session_event_to_axum(&event))),
            _ => None,
        });

    Sse::new(init.chain(broadcasts)).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}

fn init_event(snapshot: &SessionSnapshot) -> Event {
    let data = json!({
        "type": "init",
        "transcript": snapshot.transcript,
        "status": snapshot.status,
        "revision": snapshot.revision,
    });
    Event::default().event("init").data(data.to_string())
}

fn session_event_to_axum(event: &SessionEvent) -> Event {
    let data = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    Event::default()
        .event(event.event_type())
        .id(event.revision().to_string())
        .data(data)
}
