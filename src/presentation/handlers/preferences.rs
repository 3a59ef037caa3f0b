use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::services::{Preferences, SessionDelta};
use crate::domain::{EnglishLevel, PlaybackSpeed, PracticeMode};
use crate::presentation::state::AppState;

use super::dto::ActionResponse;
use super::error_response::{error_response, find_session};

#[derive(Debug, Deserialize)]
pub struct PreferencesRequest {
    pub mode: Option<String>,
    pub speed: Option<f32>,
    pub level: Option<String>,
}

impl PreferencesRequest {
    fn parse(&self) -> Result<Preferences, String> {
        Ok(Preferences {
            mode: self
                .mode
                .as_deref()
                .map(str::parse::<PracticeMode>)
                .transpose()?,
            speed: self.speed.map(PlaybackSpeed::try_from).transpose()?,
            level: self
                .level
                .as_deref()
                .map(str::parse::<EnglishLevel>)
                .transpose()?,
        })
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn update_preferences_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<PreferencesRequest>,
) -> impl IntoResponse {
    let preferences = match request.parse() {
        Ok(preferences) => preferences,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid preferences");
            return error_response(StatusCode::BAD_REQUEST, e);
        }
    };

    let handle = match find_session(&state, &session_id).await {
        Ok(handle) => handle,
        Err(response) => return response,
    };

    let mut session = handle.lock().await;
    state.controller.update_preferences(&mut session, preferences);

    (
        StatusCode::OK,
        Json(ActionResponse::new(&session, SessionDelta::default())),
    )
        .into_response()
}
