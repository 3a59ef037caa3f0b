/// How much conversation history a chat configuration carries between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRetention {
    /// Every call stands alone.
    None,
    /// Recent turns verbatim, older turns summarized past `max_token_limit`.
    SummaryBuffer { max_token_limit: usize },
}

/// A named chat-completion configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatProfile {
    pub name: &'static str,
    pub model: String,
    pub temperature: f32,
    pub history: HistoryRetention,
}

impl ChatProfile {
    pub const CONVERSATION: &'static str = "conversation";
    pub const EVALUATION: &'static str = "evaluation";

    pub fn conversation(model: String, temperature: f32, max_token_limit: usize) -> Self {
        Self {
            name: Self::CONVERSATION,
            model,
            temperature,
            history: HistoryRetention::SummaryBuffer { max_token_limit },
        }
    }

    pub fn evaluation(model: String, temperature: f32) -> Self {
        Self {
            name: Self::EVALUATION,
            model,
            temperature,
            history: HistoryRetention::None,
        }
    }

    pub fn max_history_tokens(&self) -> Option<usize> {
        match self.history {
            HistoryRetention::None => None,
            HistoryRetention::SummaryBuffer { max_token_limit } => Some(max_token_limit),
        }
    }
}
