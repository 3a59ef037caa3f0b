mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AudioSettings, LlmSettings, LoggingSettings, MemorySettings, ServerSettings, Settings,
    SpeechSettings,
};
