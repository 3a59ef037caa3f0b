use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

/// Turns a recorded audio file into text.
#[derive(Clone)]
pub struct TranscriptionService {
    engine: Arc<dyn TranscriptionEngine>,
}

impl TranscriptionService {
    pub fn new(engine: Arc<dyn TranscriptionEngine>) -> Self {
        Self { engine }
    }

    /// The file is removed once the engine has answered. A failed call leaves
    /// it on disk.
    pub async fn transcribe_file(&self, path: &Path) -> Result<String, TranscriptionError> {
        let audio = tokio::fs::read(path).await?;
        let transcript = self.engine.transcribe(&audio).await?;

        tokio::fs::remove_file(path).await?;

        tracing::debug!(path = %path.display(), chars = transcript.len(), "Recording transcribed");

        Ok(transcript)
    }
}
