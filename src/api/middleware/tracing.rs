//! Request logging for the whole router.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Logs every request, pages and static files included.
///
/// Page loads, dashboard polls and static assets each get an `INFO` line
/// with status and latency. A 5xx (for example a failed visit-file read
/// behind `/api/visits`) is additionally logged at `ERROR`.
///
/// ```text
/// INFO request{method=GET uri=/dashboard version=HTTP/1.1}: finished processing request latency=1 ms status=200
/// INFO request{method=GET uri=/api/stats version=HTTP/1.1}: finished processing request latency=0 ms status=401
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
