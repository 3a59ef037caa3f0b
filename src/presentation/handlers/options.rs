use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{EnglishLevel, PlaybackSpeed, PracticeMode};

const USAGE_INSTRUCTIONS: &[&str] = &[
    "Choose a mode and a playback speed, then press start to begin practicing.",
    "Modes: conversation, shadowing and dictation.",
    "Your recording is submitted after you stop speaking.",
    "Press pause to interrupt the practice at any time.",
];

const DICTATION_HINT: &str =
    "Type what the AI read aloud into the chat box and send it as your answer.";

#[derive(Serialize)]
pub struct OptionsResponse {
    pub modes: Vec<&'static str>,
    pub speeds: Vec<f32>,
    pub default_speed: f32,
    pub levels: Vec<&'static str>,
    pub default_level: &'static str,
    pub instructions: Vec<&'static str>,
    pub dictation_hint: &'static str,
}

pub async fn options_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(OptionsResponse {
            modes: PracticeMode::ALL.iter().map(|mode| mode.as_str()).collect(),
            speeds: PlaybackSpeed::OPTIONS.to_vec(),
            default_speed: PlaybackSpeed::default().value(),
            levels: EnglishLevel::ALL.iter().map(|level| level.as_str()).collect(),
            default_level: EnglishLevel::default().as_str(),
            instructions: USAGE_INSTRUCTIONS.to_vec(),
            dictation_hint: DICTATION_HINT,
        }),
    )
}
