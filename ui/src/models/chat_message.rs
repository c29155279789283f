use chrono::{DateTime, Utc};

/// One entry of a conversation's history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Position in the conversation, 0 being the oldest message
    pub sequence: u32,
    pub author: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sequence: u32, author: &str, body: &str, sent_at: DateTime<Utc>) -> Self {
        Self {
            sequence,
            author: author.to_string(),
            body: body.to_string(),
            sent_at,
        }
    }

    pub fn time_label(&self) -> String {
        self.sent_at.format("%H:%M").to_string()
    }
}
