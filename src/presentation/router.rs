use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    create_session_handler, delete_session_handler, get_session_handler, health_handler,
    list_messages_handler, options_handler, pause_handler, playback_handler,
    request_problem_handler, start_handler, submit_audio_handler, submit_chat_handler,
    update_preferences_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_upload_bytes = state.settings.audio.max_upload_bytes;

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/options", get(options_handler))
        .route("/api/v1/sessions", post(create_session_handler))
        .route(
            "/api/v1/sessions/{session_id}",
            get(get_session_handler).delete(delete_session_handler),
        )
        .route(
            "/api/v1/sessions/{session_id}/messages",
            get(list_messages_handler),
        )
        .route(
            "/api/v1/sessions/{session_id}/preferences",
            put(update_preferences_handler),
        )
        .route("/api/v1/sessions/{session_id}/start", post(start_handler))
        .route("/api/v1/sessions/{session_id}/pause", post(pause_handler))
        .route(
            "/api/v1/sessions/{session_id}/audio",
            post(submit_audio_handler).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/api/v1/sessions/{session_id}/problem",
            post(request_problem_handler),
        )
        .route(
            "/api/v1/sessions/{session_id}/chat",
            post(submit_chat_handler),
        )
        .route(
            "/api/v1/sessions/{session_id}/playback",
            get(playback_handler),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
