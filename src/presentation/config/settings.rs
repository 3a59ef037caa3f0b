use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

/// Speech-to-text accepts files up to 25 MiB.
const DEFAULT_MAX_UPLOAD_BYTES: i64 = 25 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub speech: SpeechSettings,
    pub audio: AudioSettings,
    pub memory: MemorySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub conversation_temperature: f32,
    pub evaluation_temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    pub transcription_model: String,
    pub language: String,
    pub tts_model: String,
    pub voice: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Request body limit for recording uploads.
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemorySettings {
    pub max_token_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{environment}` and `APP__*`
    /// environment variables, in that order of precedence.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();

        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("llm.api_key", api_key)?
            .set_default("llm.base_url", "https://api.openai.com/v1")?
            .set_default("llm.chat_model", "gpt-4o-mini")?
            .set_default("llm.conversation_temperature", 0.5)?
            .set_default("llm.evaluation_temperature", 0.0)?
            .set_default("speech.transcription_model", "whisper-1")?
            .set_default("speech.language", "en")?
            .set_default("speech.tts_model", "tts-1")?
            .set_default("speech.voice", "alloy")?
            .set_default("audio.input_dir", "audio/input")?
            .set_default("audio.output_dir", "audio/output")?
            .set_default("audio.max_upload_bytes", DEFAULT_MAX_UPLOAD_BYTES)?
            .set_default("memory.max_token_limit", 1000)?
            .set_default("logging.level", "info,fluency_coach=debug,tower_http=debug")?
            .set_default("logging.enable_json", environment == Environment::Prod)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        configuration.try_deserialize()
    }
}
