pub mod audio_decoder;
mod local_audio_workspace;
mod openai_speech_synthesizer;
mod openai_whisper_engine;
mod pcm_audio;
pub mod time_stretch;
pub mod wav_codec;

pub use local_audio_workspace::LocalAudioWorkspace;
pub use openai_speech_synthesizer::OpenAiSpeechSynthesizer;
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use pcm_audio::PcmAudio;
