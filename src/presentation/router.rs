use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FeedbackClient, ReportRenderer, TranscriptionEngine};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, index_handler, review_handler, scaffold_review_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<T, F, R>(state: AppState<T, F, R>) -> Router
where
    T: TranscriptionEngine + 'static,
    F: FeedbackClient + 'static,
    R: ReportRenderer + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Leave headroom above the documented cap so the handler can answer 413
    // itself instead of the extractor rejecting the body.
    let body_limit =
        DefaultBodyLimit::max((state.settings.review.max_upload_mb + 2) * 1024 * 1024);

    let review_route = if state.scaffold_config.enabled {
        post(scaffold_review_handler::<T, F, R>)
    } else {
        post(review_handler::<T, F, R>)
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/v1/review", review_route)
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
