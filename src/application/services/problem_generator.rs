use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{ConversationMemory, EnglishLevel, PlaybackSpeed, Problem};

use super::conversation_chain::ConversationChain;
use super::narrator::{Narrator, SpeechError};
use super::prompt_templates::{PROBLEM_SYSTEM_TEMPLATE, render};

#[derive(Debug, Clone)]
pub struct GeneratedProblem {
    pub problem: Problem,
    pub playback: Vec<u8>,
}

pub struct ProblemGenerator {
    llm: Arc<dyn LlmClient>,
    narrator: Narrator,
}

impl ProblemGenerator {
    pub fn new(llm: Arc<dyn LlmClient>, narrator: Narrator) -> Self {
        Self { llm, narrator }
    }

    pub fn instruction_for(level: EnglishLevel) -> String {
        render(PROBLEM_SYSTEM_TEMPLATE, &[("english_level", level.as_str())])
    }

    pub async fn generate(
        &self,
        instruction: &str,
        memory: &mut ConversationMemory,
        speed: PlaybackSpeed,
    ) -> Result<GeneratedProblem, ProblemGenerationError> {
        let chain = ConversationChain::new(instruction);
        let text = chain.predict(self.llm.as_ref(), memory, "").await?;
        let text = text.trim().to_string();

        let utterance = self.narrator.speak(&text, speed).await?;

        tracing::info!(chars = text.len(), "Practice problem generated");

        Ok(GeneratedProblem {
            problem: Problem::new(text, utterance.audio),
            playback: utterance.playback,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProblemGenerationError {
    #[error("chat: {0}")]
    Chat(#[from] LlmClientError),
    #[error("speech: {0}")]
    Speech(#[from] SpeechError),
}
