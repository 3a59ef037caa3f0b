use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::SessionId;
use crate::presentation::state::AppState;

use super::dto::{MessageDto, SessionSnapshot};
use super::error_response::{error_response, find_session};

#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    pub since: Option<usize>,
}

#[derive(Serialize)]
pub struct MessagesResponse {
    pub session_id: String,
    pub messages: Vec<MessageDto>,
    pub total: usize,
}

#[tracing::instrument(skip(state))]
pub async fn create_session_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.controller.new_session();
    let snapshot = SessionSnapshot::from(&session);

    state.sessions.insert(session).await;
    let active_sessions = state.sessions.count().await;

    tracing::info!(
        session_id = %snapshot.id,
        active_sessions,
        "Session created"
    );

    (StatusCode::CREATED, Json(snapshot))
}

#[tracing::instrument(skip(state))]
pub async fn get_session_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let handle = match find_session(&state, &session_id).await {
        Ok(handle) => handle,
        Err(response) => return response,
    };

    let session = handle.lock().await;
    (StatusCode::OK, Json(SessionSnapshot::from(&*session))).into_response()
}

#[tracing::instrument(skip(state))]
pub async fn delete_session_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let id: SessionId = match session_id.parse() {
        Ok(id) => id,
        Err(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid session ID: {}", session_id),
            );
        }
    };

    if state.sessions.remove(id).await {
        tracing::info!(session_id = %id, "Session closed");
        StatusCode::NO_CONTENT.into_response()
    } else {
        error_response(
            StatusCode::NOT_FOUND,
            format!("Session not found: {}", session_id),
        )
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_messages_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Query(query): Query<MessagesQuery>,
) -> impl IntoResponse {
    let handle = match find_session(&state, &session_id).await {
        Ok(handle) => handle,
        Err(response) => return response,
    };

    let session = handle.lock().await;
    let messages = session
        .messages
        .since(query.since.unwrap_or_default())
        .iter()
        .map(MessageDto::from)
        .collect();

    (
        StatusCode::OK,
        Json(MessagesResponse {
            session_id: session.id.to_string(),
            messages,
            total: session.messages.len(),
        }),
    )
        .into_response()
}
