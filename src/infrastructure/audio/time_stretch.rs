use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};

use crate::application::ports::AudioError;
use crate::domain::PlaybackSpeed;

use super::pcm_audio::PcmAudio;

const CHUNK_SIZE: usize = 1024;

/// Changes the tempo of `audio` by `speed`.
///
/// The samples are reinterpreted at `rate * speed` and then resampled back to
/// the original rate, so the result plays `1 / speed` as long at the same
/// frame rate.
pub fn change_speed(audio: &PcmAudio, speed: PlaybackSpeed) -> Result<PcmAudio, AudioError> {
    if speed.is_normal() || audio.is_empty() {
        return Ok(audio.clone());
    }

    let stretched_rate = (audio.sample_rate as f64 * speed.value() as f64) as u32;
    if stretched_rate == 0 {
        return Err(AudioError::ResamplingFailed(format!(
            "speed {} collapses sample rate {}",
            speed, audio.sample_rate
        )));
    }

    let planes = audio.deinterleave();
    let resampled = resample(&planes, stretched_rate, audio.sample_rate)?;

    tracing::debug!(
        speed = %speed,
        source_frames = audio.frames(),
        output_frames = resampled.first().map(Vec::len).unwrap_or_default(),
        "Playback speed applied"
    );

    Ok(PcmAudio::interleave(&resampled, audio.sample_rate))
}

fn resample(
    planes: &[Vec<f32>],
    from_rate: u32,
    to_rate: u32,
) -> Result<Vec<Vec<f32>>, AudioError> {
    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let channels = planes.len();
    let frames = planes.first().map(Vec::len).unwrap_or_default();
    let ratio = to_rate as f64 / from_rate as f64;

    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, CHUNK_SIZE, channels)
        .map_err(|e| AudioError::ResamplingFailed(format!("resampler init: {}", e)))?;

    let expected_len = (frames as f64 * ratio) as usize;
    let mut output = vec![Vec::with_capacity(expected_len + CHUNK_SIZE); channels];

    let mut start = 0;
    while start < frames {
        let end = (start + CHUNK_SIZE).min(frames);
        let input: Vec<Vec<f32>> = planes
            .iter()
            .map(|plane| {
                let mut chunk = plane[start..end].to_vec();
                chunk.resize(CHUNK_SIZE, 0.0);
                chunk
            })
            .collect();

        let result = resampler
            .process(&input, None)
            .map_err(|e| AudioError::ResamplingFailed(format!("resample: {}", e)))?;

        for (out, channel) in output.iter_mut().zip(result) {
            out.extend_from_slice(&channel);
        }
        start = end;
    }

    // Trim to approximate expected length
    for channel in &mut output {
        channel.truncate(expected_len);
    }

    Ok(output)
}
