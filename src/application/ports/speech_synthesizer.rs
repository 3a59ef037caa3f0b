use async_trait::async_trait;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Returns MP3-encoded speech for `text`.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechSynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechSynthesisError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("empty audio payload")]
    EmptyAudio,
}
