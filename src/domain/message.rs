#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub user: String,
    pub text: String,
    pub timestamp_ms: i64,
    pub edited: bool,
}

impl ChatMessage {
    pub fn new(user: impl Into<String>, text: impl Into<String>, timestamp_ms: i64) -> Self {
        Self {
            user: user.into(),
            text: text.into(),
            timestamp_ms,
            edited: false,
        }
    }

    pub fn edited(mut self) -> Self {
        self.edited = true;
        self
    }
}
