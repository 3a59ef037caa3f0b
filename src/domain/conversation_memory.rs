use std::collections::VecDeque;

use super::MessageRole;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEntry {
    pub role: MessageRole,
    pub content: String,
}

/// Rolling conversation history: recent turns verbatim, older turns folded
/// into a running summary once the buffer outgrows its token budget.
#[derive(Debug, Clone)]
pub struct ConversationMemory {
    summary: Option<String>,
    buffer: VecDeque<MemoryEntry>,
    max_token_limit: usize,
}

impl ConversationMemory {
    pub fn new(max_token_limit: usize) -> Self {
        Self {
            summary: None,
            buffer: VecDeque::new(),
            max_token_limit,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn set_summary(&mut self, summary: String) {
        self.summary = Some(summary);
    }

    pub fn buffer(&self) -> impl Iterator<Item = &MemoryEntry> {
        self.buffer.iter()
    }

    pub fn max_token_limit(&self) -> usize {
        self.max_token_limit
    }

    pub fn push_exchange(&mut self, input: &str, output: &str) {
        self.buffer.push_back(MemoryEntry {
            role: MessageRole::User,
            content: input.to_string(),
        });
        self.buffer.push_back(MemoryEntry {
            role: MessageRole::Assistant,
            content: output.to_string(),
        });
    }

    pub fn pop_oldest(&mut self) -> Option<MemoryEntry> {
        self.buffer.pop_front()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
