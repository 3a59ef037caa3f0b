use crate::application::ports::{ChatMessage, LlmClient, LlmClientError};
use crate::domain::{ConversationMemory, MemoryEntry, MessageRole};

use super::prompt_templates::{SUMMARY_TEMPLATE, render};
use super::token_counter::count_tokens;

/// A system instruction bound to a rolling conversation memory.
#[derive(Debug, Clone)]
pub struct ConversationChain {
    system_template: String,
}

impl ConversationChain {
    pub fn new(system_template: impl Into<String>) -> Self {
        Self {
            system_template: system_template.into(),
        }
    }

    pub fn system_template(&self) -> &str {
        &self.system_template
    }

    /// Sends `input` with the remembered history, records the exchange and
    /// folds overflowing turns into the running summary.
    ///
    /// `memory` is only updated when every model call succeeded.
    pub async fn predict(
        &self,
        llm: &dyn LlmClient,
        memory: &mut ConversationMemory,
        input: &str,
    ) -> Result<String, LlmClientError> {
        let messages = self.build_messages(memory, input);
        let output = llm.complete(&messages).await?;

        let mut updated = memory.clone();
        updated.push_exchange(input, &output);
        prune_memory(llm, &mut updated).await?;
        *memory = updated;

        Ok(output)
    }

    pub fn build_messages(&self, memory: &ConversationMemory, input: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(memory.len() + 3);
        messages.push(ChatMessage::system(self.system_template.clone()));

        if let Some(summary) = memory.summary() {
            messages.push(ChatMessage::system(summary.to_string()));
        }

        messages.extend(memory.buffer().map(|entry| match entry.role {
            MessageRole::User => ChatMessage::user(entry.content.clone()),
            _ => ChatMessage::assistant(entry.content.clone()),
        }));

        messages.push(ChatMessage::user(input.to_string()));
        messages
    }
}

pub async fn prune_memory(
    llm: &dyn LlmClient,
    memory: &mut ConversationMemory,
) -> Result<(), LlmClientError> {
    let limit = memory.max_token_limit();
    let mut total: usize = memory.buffer().map(entry_tokens).sum();

    if total <= limit {
        return Ok(());
    }

    let mut pruned = Vec::new();
    for entry in memory.buffer() {
        if total <= limit {
            break;
        }
        total = total.saturating_sub(entry_tokens(entry));
        pruned.push(entry);
    }

    let new_lines = pruned
        .iter()
        .map(|entry| format_line(entry))
        .collect::<Vec<_>>()
        .join("\n");
    let prompt = render(
        SUMMARY_TEMPLATE,
        &[
            ("summary", memory.summary().unwrap_or_default()),
            ("new_lines", new_lines.as_str()),
        ],
    );

    let pruned_entries = pruned.len();
    let summary = llm.complete(&[ChatMessage::user(prompt)]).await?;

    for _ in 0..pruned_entries {
        memory.pop_oldest();
    }
    memory.set_summary(summary.trim().to_string());

    tracing::debug!(
        pruned_entries,
        remaining_tokens = total,
        "Conversation memory summarized"
    );

    Ok(())
}

fn format_line(entry: &MemoryEntry) -> String {
    let speaker = match entry.role {
        MessageRole::User => "Human",
        _ => "AI",
    };
    format!("{}: {}", speaker, entry.content)
}

fn entry_tokens(entry: &MemoryEntry) -> usize {
    count_tokens(&format_line(entry))
}
