mod conversation_memory;
mod english_level;
mod message;
mod message_log;
mod message_role;
mod mode_progress;
mod mode_state;
mod playback_speed;
mod practice_mode;
mod problem;
mod session;
mod session_id;

pub use conversation_memory::{ConversationMemory, MemoryEntry};
pub use english_level::EnglishLevel;
pub use message::Message;
pub use message_log::MessageLog;
pub use message_role::MessageRole;
pub use mode_progress::ModeProgress;
pub use mode_state::{ModeEvent, ModeState, TransitionError};
pub use playback_speed::PlaybackSpeed;
pub use practice_mode::PracticeMode;
pub use problem::Problem;
pub use session::Session;
pub use session_id::SessionId;
