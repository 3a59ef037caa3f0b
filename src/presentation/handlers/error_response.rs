use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::SessionHandle;
use crate::application::services::ControllerError;
use crate::domain::SessionId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Rejected actions map to 4xx and leave the session as it was; anything
/// else is a failed call to an upstream service.
pub fn controller_error_response(error: &ControllerError) -> Response {
    let status = match error {
        ControllerError::NoAudioCaptured | ControllerError::EmptyAnswer => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ControllerError::OutOfOrder(_)
        | ControllerError::AlreadyStarted
        | ControllerError::NoProblem => StatusCode::CONFLICT,
        ControllerError::ModeNotSelected => StatusCode::BAD_REQUEST,
        _ => StatusCode::BAD_GATEWAY,
    };

    if error.is_rejection() {
        tracing::debug!(error = %error, "Action rejected");
    } else {
        tracing::error!(error = %error, "Action failed");
    }

    error_response(status, error.to_string())
}

pub async fn find_session(state: &AppState, session_id: &str) -> Result<SessionHandle, Response> {
    let id: SessionId = session_id.parse().map_err(|_| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid session ID: {}", session_id),
        )
    })?;

    state.sessions.get(id).await.ok_or_else(|| {
        error_response(
            StatusCode::NOT_FOUND,
            format!("Session not found: {}", session_id),
        )
    })
}
