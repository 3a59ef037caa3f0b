use std::sync::Arc;

use crate::application::ports::{ChatMessage, LlmClient, LlmClientError};

use super::prompt_templates::{EVALUATION_INSTRUCTION, EVALUATION_SYSTEM_TEMPLATE, render};

/// Scores one (problem, answer) pair. Calls share nothing with each other.
pub struct Evaluator {
    llm: Arc<dyn LlmClient>,
}

impl Evaluator {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        if llm.profile().max_history_tokens().is_some() {
            tracing::warn!(
                profile = llm.profile().name,
                "Evaluator bound to a chat profile that retains history; history is ignored"
            );
        }
        Self { llm }
    }

    pub fn build_messages(problem: &str, answer: &str) -> Vec<ChatMessage> {
        let system = render(
            EVALUATION_SYSTEM_TEMPLATE,
            &[("llm_text", problem), ("user_text", answer)],
        );

        vec![
            ChatMessage::system(system),
            ChatMessage::user(EVALUATION_INSTRUCTION),
        ]
    }

    pub async fn evaluate(&self, problem: &str, answer: &str) -> Result<String, LlmClientError> {
        let messages = Self::build_messages(problem, answer);
        let evaluation = self.llm.complete(&messages).await?;

        tracing::info!(chars = evaluation.len(), "Answer evaluated");

        Ok(evaluation)
    }
}
