use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::application::ports::{AudioError, AudioWorkspace};
use crate::domain::PlaybackSpeed;

use super::audio_decoder::decode_audio;
use super::time_stretch::change_speed;
use super::wav_codec::{encode_wav, read_wav, write_wav};

/// Audio files under two local directories: captured recordings in
/// `input_dir`, synthesized speech in `output_dir`.
///
/// Recordings are removed by the transcription step. Output WAVs stay on
/// disk for external housekeeping. Temporary MP3s never outlive the call.
pub struct LocalAudioWorkspace {
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl LocalAudioWorkspace {
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Result<Self, AudioError> {
        std::fs::create_dir_all(&input_dir)?;
        std::fs::create_dir_all(&output_dir)?;
        Ok(Self {
            input_dir,
            output_dir,
        })
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Time-based file name suffix.
fn timestamp() -> String {
    Utc::now().format("%Y%m%d%H%M%S%6f").to_string()
}

impl AudioWorkspace for LocalAudioWorkspace {
    fn store_recording(&self, recording: &[u8]) -> Result<PathBuf, AudioError> {
        let audio = decode_audio(recording, None)?;
        let path = self
            .input_dir
            .join(format!("audio_input_{}.wav", timestamp()));

        write_wav(&path, &audio)?;

        tracing::debug!(
            path = %path.display(),
            duration_secs = audio.duration_secs(),
            "Recording stored"
        );

        Ok(path)
    }

    fn store_synthesized(&self, mp3: &[u8]) -> Result<PathBuf, AudioError> {
        let suffix = timestamp();
        let temp_path = self
            .output_dir
            .join(format!("temp_audio_output_{}.mp3", suffix));
        std::fs::write(&temp_path, mp3)?;

        let wav_path = self
            .output_dir
            .join(format!("audio_output_{}.wav", suffix));
        let converted = std::fs::read(&temp_path)
            .map_err(AudioError::from)
            .and_then(|bytes| decode_audio(&bytes, Some("mp3")))
            .and_then(|audio| write_wav(&wav_path, &audio));

        // The MP3 goes away whether or not the conversion worked.
        let removed = std::fs::remove_file(&temp_path);
        converted?;
        removed?;

        Ok(wav_path)
    }

    fn prepare_playback(
        &self,
        wav_path: &Path,
        speed: PlaybackSpeed,
    ) -> Result<Vec<u8>, AudioError> {
        if speed.is_normal() {
            return Ok(std::fs::read(wav_path)?);
        }

        let audio = read_wav(wav_path)?;
        let stretched = change_speed(&audio, speed)?;
        let bytes = encode_wav(&stretched)?;
        std::fs::write(wav_path, &bytes)?;

        Ok(bytes)
    }
}
