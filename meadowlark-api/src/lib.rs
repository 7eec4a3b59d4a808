use std::any::Any;

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

pub mod error;
pub mod flash;
pub mod home;
pub mod newsletter;
pub mod state;
pub mod vacations;
pub mod views;

pub use state::AppState;

pub fn app(state: AppState, cookie_secure: bool) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store).with_secure(cookie_secure);

    Router::new()
        .merge(home::routes())
        .merge(vacations::routes())
        .merge(newsletter::routes())
        .fallback(not_found)
        .layer(session_layer)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(views::not_found()))
}

/// Per-request crash isolation: a panicking handler is logged and answered
/// with the rendered 500 page while the process keeps serving.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(%detail, "request handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, Html(views::server_error())).into_response()
}

/// Script-driven clients signal themselves with the XHR header or by asking
/// for JSON explicitly; they get structured payloads instead of redirects.
pub(crate) fn wants_json(headers: &HeaderMap) -> bool {
    let xhr = headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("xmlhttprequest"));
    let accepts_json = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));
    xhr || accepts_json
}
