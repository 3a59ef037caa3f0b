mod audio_workspace;
mod chat_profile;
mod llm_client;
mod session_store;
mod speech_synthesizer;
mod transcription_engine;

pub use audio_workspace::{AudioError, AudioWorkspace};
pub use chat_profile::{ChatProfile, HistoryRetention};
pub use llm_client::{ChatMessage, ChatRole, LlmClient, LlmClientError};
pub use session_store::{SessionHandle, SessionStore};
pub use speech_synthesizer::{SpeechSynthesisError, SpeechSynthesizer};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
