use async_trait::async_trait;
use serde::Serialize;

use crate::application::ports::{SpeechSynthesisError, SpeechSynthesizer};

pub struct OpenAiSpeechSynthesizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    voice: String,
}

#[derive(Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
    response_format: &'static str,
}

impl OpenAiSpeechSynthesizer {
    pub fn new(
        client: reqwest::Client,
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        voice: Option<String>,
    ) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string())
                .trim_end_matches('/')
                .to_string(),
            model: model.unwrap_or_else(|| "tts-1".to_string()),
            voice: voice.unwrap_or_else(|| "alloy".to_string()),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechSynthesisError> {
        let url = format!("{}/audio/speech", self.base_url);

        tracing::debug!(
            model = %self.model,
            voice = %self.voice,
            chars = text.len(),
            "Requesting speech synthesis"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&SpeechRequest {
                model: &self.model,
                voice: &self.voice,
                input: text,
                response_format: "mp3",
            })
            .send()
            .await
            .map_err(|e| SpeechSynthesisError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SpeechSynthesisError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechSynthesisError::ApiRequestFailed(format!("body: {}", e)))?;

        if audio.is_empty() {
            return Err(SpeechSynthesisError::EmptyAudio);
        }

        tracing::info!(bytes = audio.len(), "Speech synthesis completed");

        Ok(audio.to_vec())
    }
}
