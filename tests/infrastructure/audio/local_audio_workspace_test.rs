use fluency_coach::application::ports::{AudioError, AudioWorkspace};
use fluency_coach::domain::PlaybackSpeed;
use fluency_coach::infrastructure::audio::LocalAudioWorkspace;
use tempfile::TempDir;

use crate::helpers::{sine_wav, wav_duration_secs};

fn workspace(dir: &TempDir) -> LocalAudioWorkspace {
    LocalAudioWorkspace::new(dir.path().join("input"), dir.path().join("output")).unwrap()
}

fn file_names(path: &std::path::Path) -> Vec<String> {
    std::fs::read_dir(path)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn given_missing_directories_when_created_then_directories_exist() {
    let dir = TempDir::new().unwrap();

    let workspace = workspace(&dir);

    assert!(workspace.input_dir().is_dir());
    assert!(workspace.output_dir().is_dir());
}

#[test]
fn given_wav_recording_when_stored_then_written_as_input_wav() {
    let dir = TempDir::new().unwrap();
    let workspace = workspace(&dir);

    let path = workspace.store_recording(&sine_wav(16_000, 1, 1.0)).unwrap();

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("audio_input_"));
    assert!(name.ends_with(".wav"));
    let (duration, rate) = wav_duration_secs(&std::fs::read(&path).unwrap());
    assert_eq!(rate, 16_000);
    assert!((duration - 1.0).abs() < 0.01);
}

#[test]
fn given_undecodable_speech_when_stored_then_error_and_no_temp_file_left() {
    let dir = TempDir::new().unwrap();
    let workspace = workspace(&dir);

    let result = workspace.store_synthesized(b"not an mp3 stream");

    assert!(result.is_err());
    assert!(file_names(workspace.output_dir()).is_empty());
}

#[test]
fn given_synthesized_audio_when_stored_then_only_output_wav_remains() {
    let dir = TempDir::new().unwrap();
    let workspace = workspace(&dir);

    let path = workspace.store_synthesized(&sine_wav(24_000, 1, 0.5)).unwrap();

    let names = file_names(workspace.output_dir());
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("audio_output_"));
    assert!(path.exists());
}

#[test]
fn given_faster_speed_when_preparing_playback_then_file_is_rewritten_shorter() {
    let dir = TempDir::new().unwrap();
    let workspace = workspace(&dir);
    let path = workspace.output_dir().join("audio_output_test.wav");
    std::fs::write(&path, sine_wav(16_000, 1, 2.0)).unwrap();

    let bytes = workspace
        .prepare_playback(&path, PlaybackSpeed::try_from(2.0).unwrap())
        .unwrap();

    let (duration, rate) = wav_duration_secs(&bytes);
    assert_eq!(rate, 16_000);
    assert!((duration - 1.0).abs() < 0.01);
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}

#[test]
fn given_normal_speed_when_preparing_playback_then_file_bytes_are_returned() {
    let dir = TempDir::new().unwrap();
    let workspace = workspace(&dir);
    let path = workspace.output_dir().join("audio_output_test.wav");
    let original = sine_wav(16_000, 1, 0.5);
    std::fs::write(&path, &original).unwrap();

    let bytes = workspace
        .prepare_playback(&path, PlaybackSpeed::default())
        .unwrap();

    assert_eq!(bytes, original);
    assert!(path.exists());
}

#[test]
fn given_silent_speech_when_stored_then_no_samples_and_no_files_left() {
    let dir = TempDir::new().unwrap();
    let workspace = workspace(&dir);

    let result = workspace.store_synthesized(&sine_wav(24_000, 1, 0.0));

    assert!(matches!(result, Err(AudioError::NoSamples)));
    assert!(file_names(workspace.output_dir()).is_empty());
}

#[test]
fn given_header_only_recording_when_stored_then_no_samples_and_nothing_written() {
    let dir = TempDir::new().unwrap();
    let workspace = workspace(&dir);

    let result = workspace.store_recording(&sine_wav(16_000, 1, 0.0));

    assert!(matches!(result, Err(AudioError::NoSamples)));
    assert!(file_names(workspace.input_dir()).is_empty());
}
