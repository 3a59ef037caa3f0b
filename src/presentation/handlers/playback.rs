use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::domain::PracticeMode;
use crate::presentation::state::AppState;

use super::dto::PLAYBACK_FORMAT;
use super::error_response::{error_response, find_session};

/// Replays the last dictation audio so the learner can listen again before
/// typing an answer.
#[tracing::instrument(skip(state))]
pub async fn playback_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let handle = match find_session(&state, &session_id).await {
        Ok(handle) => handle,
        Err(response) => return response,
    };

    let session = handle.lock().await;
    if session.mode != Some(PracticeMode::Dictation) {
        return error_response(
            StatusCode::NOT_FOUND,
            "Playback is only available in dictation mode",
        );
    }

    match &session.last_playback {
        Some(wav) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, PLAYBACK_FORMAT)],
            wav.clone(),
        )
            .into_response(),
        None => error_response(StatusCode::NOT_FOUND, "No audio has been played yet"),
    }
}
