use std::io::Cursor;
use std::path::Path;

use crate::application::ports::AudioError;

use super::pcm_audio::PcmAudio;

fn wav_spec(audio: &PcmAudio) -> hound::WavSpec {
    hound::WavSpec {
        channels: audio.channels.max(1),
        sample_rate: audio.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Encodes as 16-bit PCM WAV.
pub fn encode_wav(audio: &PcmAudio) -> Result<Vec<u8>, AudioError> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, wav_spec(audio))
            .map_err(|e| AudioError::EncodingFailed(format!("wav header: {}", e)))?;
        for sample in &audio.samples {
            let clamped = sample.clamp(-1.0, 1.0);
            writer
                .write_sample((clamped * i16::MAX as f32) as i16)
                .map_err(|e| AudioError::EncodingFailed(format!("wav sample: {}", e)))?;
        }
        writer
            .finalize()
            .map_err(|e| AudioError::EncodingFailed(format!("wav finalize: {}", e)))?;
    }
    Ok(cursor.into_inner())
}

pub fn write_wav(path: &Path, audio: &PcmAudio) -> Result<(), AudioError> {
    let bytes = encode_wav(audio)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

pub fn read_wav(path: &Path) -> Result<PcmAudio, AudioError> {
    let mut reader = hound::WavReader::open(path)
        .map_err(|e| AudioError::DecodingFailed(format!("wav open: {}", e)))?;
    let spec = reader.spec();

    let samples = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AudioError::DecodingFailed(format!("wav sample: {}", e)))?,
        hound::SampleFormat::Int => {
            let scale = (1_i64 << (spec.bits_per_sample.saturating_sub(1))) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| AudioError::DecodingFailed(format!("wav sample: {}", e)))?
        }
    };

    Ok(PcmAudio::new(samples, spec.sample_rate, spec.channels))
}
