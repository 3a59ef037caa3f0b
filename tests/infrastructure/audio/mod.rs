mod local_audio_workspace_test;
mod openai_whisper_engine_test;
mod time_stretch_test;
