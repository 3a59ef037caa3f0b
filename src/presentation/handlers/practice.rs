use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::services::{ControllerError, SessionDelta};
use crate::domain::Session;
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::dto::ActionResponse;
use super::error_response::{controller_error_response, error_response, find_session};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

fn action_response(session: &Session, result: Result<SessionDelta, ControllerError>) -> Response {
    match result {
        Ok(delta) => (StatusCode::OK, Json(ActionResponse::new(session, delta))).into_response(),
        Err(e) => controller_error_response(&e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn start_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let handle = match find_session(&state, &session_id).await {
        Ok(handle) => handle,
        Err(response) => return response,
    };

    let mut session = handle.lock().await;
    let result = state.controller.start(&mut session).await;
    action_response(&session, result)
}

#[tracing::instrument(skip(state))]
pub async fn pause_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let handle = match find_session(&state, &session_id).await {
        Ok(handle) => handle,
        Err(response) => return response,
    };

    let mut session = handle.lock().await;
    state.controller.pause(&mut session);
    action_response(&session, Ok(SessionDelta::default()))
}

#[tracing::instrument(skip(state))]
pub async fn request_problem_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let handle = match find_session(&state, &session_id).await {
        Ok(handle) => handle,
        Err(response) => return response,
    };

    let mut session = handle.lock().await;
    let result = state.controller.request_problem(&mut session).await;
    action_response(&session, result)
}

#[tracing::instrument(skip(state, request))]
pub async fn submit_chat_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    tracing::debug!(text = %sanitize_for_log(&request.text), "Dictation answer received");

    let handle = match find_session(&state, &session_id).await {
        Ok(handle) => handle,
        Err(response) => return response,
    };

    let mut session = handle.lock().await;
    let result = state.controller.submit_chat(&mut session, &request.text).await;
    action_response(&session, result)
}

#[tracing::instrument(skip(state, multipart))]
pub async fn submit_audio_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let handle = match find_session(&state, &session_id).await {
        Ok(handle) => handle,
        Err(response) => return response,
    };

    let recording = match multipart.next_field().await {
        Ok(Some(field)) => match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read recording bytes");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read recording: {}", e),
                );
            }
        },
        Ok(None) => Default::default(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read multipart: {}", e),
            );
        }
    };

    tracing::debug!(bytes = recording.len(), "Recording received");

    let mut session = handle.lock().await;
    let result = state.controller.submit_audio(&mut session, &recording).await;

    if let Ok(delta) = &result {
        for message in &delta.messages {
            if let Some(content) = &message.content {
                tracing::debug!(
                    role = %message.role,
                    content = %sanitize_for_log(content),
                    "Transcript entry"
                );
            }
        }
    }

    action_response(&session, result)
}
