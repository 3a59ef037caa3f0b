use std::sync::Arc;

use crate::application::ports::{
    AudioError, AudioWorkspace, SpeechSynthesisError, SpeechSynthesizer,
};
use crate::domain::PlaybackSpeed;

/// Synthesized speech ready for the browser.
#[derive(Debug, Clone)]
pub struct Utterance {
    /// Raw synthesizer output (MP3).
    pub audio: Vec<u8>,
    /// WAV bytes at the requested playback speed.
    pub playback: Vec<u8>,
}

/// Speaks text: synthesis, WAV conversion, speed adjustment.
#[derive(Clone)]
pub struct Narrator {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    audio: Arc<dyn AudioWorkspace>,
}

impl Narrator {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, audio: Arc<dyn AudioWorkspace>) -> Self {
        Self { synthesizer, audio }
    }

    pub async fn speak(&self, text: &str, speed: PlaybackSpeed) -> Result<Utterance, SpeechError> {
        let audio = self.synthesizer.synthesize(text).await?;

        let workspace = Arc::clone(&self.audio);
        let mp3 = audio.clone();
        let (wav_path, playback) = tokio::task::spawn_blocking(move || {
            let wav_path = workspace.store_synthesized(&mp3)?;
            let playback = workspace.prepare_playback(&wav_path, speed)?;
            Ok::<_, AudioError>((wav_path, playback))
        })
        .await
        .map_err(|e| AudioError::TaskFailed(format!("task join error: {e}")))??;

        tracing::debug!(
            path = %wav_path.display(),
            speed = %speed,
            bytes = playback.len(),
            "Speech prepared for playback"
        );

        Ok(Utterance { audio, playback })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("synthesis: {0}")]
    Synthesis(#[from] SpeechSynthesisError),
    #[error("audio: {0}")]
    Audio(#[from] AudioError),
}
