use super::message::ChatMessage;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Channel {
    pub name: String,
    pub topic: String,
    pub is_private: bool,
    pub starred: bool,
    pub member_count: u32,
    /// History in chronological order, oldest first.
    pub messages: Vec<ChatMessage>,
    /// Name of the member currently typing, if any.
    pub typing: Option<String>,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Timestamp of the newest message, used for the header date.
    pub fn last_activity_ms(&self) -> Option<i64> {
        self.messages.last().map(|message| message.timestamp_ms)
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}
