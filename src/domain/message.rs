use super::MessageRole;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: MessageRole,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::with_content(MessageRole::Assistant, content.into())
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::with_content(MessageRole::User, content.into())
    }

    pub fn divider() -> Self {
        Self {
            role: MessageRole::Other,
            content: None,
            created_at: Utc::now(),
        }
    }

    fn with_content(role: MessageRole, content: String) -> Self {
        Self {
            role,
            content: Some(content),
            created_at: Utc::now(),
        }
    }

    pub fn is_divider(&self) -> bool {
        self.role == MessageRole::Other
    }
}
