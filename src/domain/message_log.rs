use super::Message;

/// Ordered transcript of a session. Entries can only be appended.
#[derive(Debug, Clone, Default)]
pub struct MessageLog(Vec<Message>);

impl MessageLog {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, message: Message) {
        self.0.push(message);
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = Message>) {
        self.0.extend(messages);
    }

    /// Entries appended at or after `position`.
    pub fn since(&self, position: usize) -> &[Message] {
        self.0.get(position..).unwrap_or(&[])
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }
}
