use fluency_coach::domain::PlaybackSpeed;
use fluency_coach::infrastructure::audio::PcmAudio;
use fluency_coach::infrastructure::audio::time_stretch::change_speed;

fn tone(sample_rate: u32, channels: u16, duration_secs: f64) -> PcmAudio {
    let frames = (sample_rate as f64 * duration_secs) as usize;
    let mut samples = Vec::with_capacity(frames * channels as usize);
    for i in 0..frames {
        let t = i as f32 / sample_rate as f32;
        let sample = (t * 440.0 * 2.0 * std::f32::consts::PI).sin() * 0.5;
        for _ in 0..channels {
            samples.push(sample);
        }
    }
    PcmAudio::new(samples, sample_rate, channels)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected:.3}s, got {actual:.3}s"
    );
}

#[test]
fn given_double_speed_when_changing_speed_then_duration_halves_at_same_rate() {
    let audio = tone(16_000, 1, 2.0);

    let result = change_speed(&audio, PlaybackSpeed::try_from(2.0).unwrap()).unwrap();

    assert_eq!(result.sample_rate, 16_000);
    assert_eq!(result.channels, 1);
    assert_close(result.duration_secs(), 1.0);
}

#[test]
fn given_slow_speed_when_changing_speed_then_duration_grows() {
    let audio = tone(24_000, 1, 1.2);

    let result = change_speed(&audio, PlaybackSpeed::try_from(0.6).unwrap()).unwrap();

    assert_eq!(result.sample_rate, 24_000);
    assert_close(result.duration_secs(), 2.0);
}

#[test]
fn given_stereo_audio_when_changing_speed_then_channels_are_kept() {
    let audio = tone(22_050, 2, 1.0);

    let result = change_speed(&audio, PlaybackSpeed::try_from(1.2).unwrap()).unwrap();

    assert_eq!(result.channels, 2);
    assert_eq!(result.samples.len() % 2, 0);
    assert_close(result.duration_secs(), 1.0 / 1.2);
}

#[test]
fn given_normal_speed_when_changing_speed_then_audio_is_unchanged() {
    let audio = tone(16_000, 1, 0.5);

    let result = change_speed(&audio, PlaybackSpeed::default()).unwrap();

    assert_eq!(result, audio);
}

#[test]
fn given_empty_audio_when_changing_speed_then_returns_empty() {
    let audio = PcmAudio::new(Vec::new(), 16_000, 1);

    let result = change_speed(&audio, PlaybackSpeed::try_from(1.5).unwrap()).unwrap();

    assert!(result.is_empty());
}
