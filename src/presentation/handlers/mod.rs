pub mod dto;
mod error_response;
mod health;
mod options;
mod playback;
mod practice;
mod preferences;
mod sessions;

pub use error_response::ErrorResponse;
pub use health::health_handler;
pub use options::options_handler;
pub use playback::playback_handler;
pub use practice::{
    pause_handler, request_problem_handler, start_handler, submit_audio_handler,
    submit_chat_handler,
};
pub use preferences::update_preferences_handler;
pub use sessions::{
    create_session_handler, delete_session_handler, get_session_handler, list_messages_handler,
};
