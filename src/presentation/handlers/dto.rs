use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::application::services::SessionDelta;
use crate::domain::{Message, Session};

pub const PLAYBACK_FORMAT: &str = "audio/wav";

#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub id: String,
    pub mode: Option<String>,
    pub state: String,
    pub speed: f32,
    pub level: String,
    pub started: bool,
    pub chat_open: bool,
    pub next_problem_available: bool,
    pub shadowing_count: u32,
    pub dictation_count: u32,
    pub message_count: usize,
    pub created_at: String,
}

impl From<&Session> for SessionSnapshot {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id.to_string(),
            mode: session.mode.map(|mode| mode.as_str().to_string()),
            state: session.state.as_str().to_string(),
            speed: session.speed.value(),
            level: session.level.as_str().to_string(),
            started: session.started(),
            chat_open: session.chat_open(),
            next_problem_available: session.next_problem_available(),
            shadowing_count: session.shadowing.count,
            dictation_count: session.dictation.count,
            message_count: session.messages.len(),
            created_at: session.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageDto {
    pub role: String,
    pub content: Option<String>,
    pub created_at: String,
}

impl From<&Message> for MessageDto {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
            created_at: message.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlaybackDto {
    pub format: String,
    pub data_base64: String,
}

impl PlaybackDto {
    pub fn from_wav(wav: &[u8]) -> Self {
        Self {
            format: PLAYBACK_FORMAT.to_string(),
            data_base64: STANDARD.encode(wav),
        }
    }
}

/// Result of one user action: the session after it, what it appended to the
/// transcript, and audio to play if any.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub session: SessionSnapshot,
    pub messages: Vec<MessageDto>,
    pub playback: Option<PlaybackDto>,
}

impl ActionResponse {
    pub fn new(session: &Session, delta: SessionDelta) -> Self {
        Self {
            session: SessionSnapshot::from(session),
            messages: delta.messages.iter().map(MessageDto::from).collect(),
            playback: delta.playback.as_deref().map(PlaybackDto::from_wav),
        }
    }
}
