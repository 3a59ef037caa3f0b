use std::path::{Path, PathBuf};

use crate::domain::PlaybackSpeed;

/// Transient audio files around one practice action.
pub trait AudioWorkspace: Send + Sync {
    /// Decodes a captured recording and writes it as WAV to the input directory.
    fn store_recording(&self, recording: &[u8]) -> Result<PathBuf, AudioError>;

    /// Converts synthesized MP3 speech into a WAV file in the output directory.
    fn store_synthesized(&self, mp3: &[u8]) -> Result<PathBuf, AudioError>;

    /// Applies `speed` to the WAV at `wav_path` in place and returns its bytes.
    fn prepare_playback(&self, wav_path: &Path, speed: PlaybackSpeed)
    -> Result<Vec<u8>, AudioError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("no audio samples decoded")]
    NoSamples,
    #[error("audio encoding failed: {0}")]
    EncodingFailed(String),
    #[error("resampling failed: {0}")]
    ResamplingFailed(String),
    #[error("audio task failed: {0}")]
    TaskFailed(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
