use axum::{
    Router,
    routing::{any, get},
};
use tower::ServiceBuilder;

use crate::handler::{self, AppState};
use crate::trace::http_trace_layer;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::home))
        .route("/snippet/view", get(handler::snippet_view))
        // method is checked in the handler so the 405 carries `Allow: POST`
        .route("/snippet/create", any(handler::snippet_create))
        .fallback(|| async { crate::not_found() })
        .layer(ServiceBuilder::new().layer(http_trace_layer()))
}
