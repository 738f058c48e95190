use super::{
    channel::Channel, message::ChatMessage, message_input_state::MessageInputState,
    workspace::Workspace,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    Sidebar,
    Messages,
    Compose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    active_pane: ActivePane,
    user: String,
    workspace: Workspace,
    selected_channel: Option<usize>,
    input: MessageInputState,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(String::new(), Workspace::default())
    }
}

impl ShellState {
    pub fn new(user: impl Into<String>, workspace: Workspace) -> Self {
        let selected_channel = if workspace.channels.is_empty() {
            None
        } else {
            Some(0)
        };

        Self {
            running: true,
            active_pane: ActivePane::default(),
            user: user.into(),
            workspace,
            selected_channel,
            input: MessageInputState::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn active_pane(&self) -> ActivePane {
        self.active_pane
    }

    pub fn set_active_pane(&mut self, pane: ActivePane) {
        self.active_pane = pane;
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_channel
    }

    pub fn selected_channel(&self) -> Option<&Channel> {
        self.selected_channel
            .and_then(|index| self.workspace.channels.get(index))
    }

    pub fn select_next(&mut self) {
        let Some(index) = self.selected_channel else {
            return;
        };

        let last = self.workspace.channels.len().saturating_sub(1);
        self.selected_channel = Some((index + 1).min(last));
    }

    pub fn select_previous(&mut self) {
        if let Some(index) = self.selected_channel {
            self.selected_channel = Some(index.saturating_sub(1));
        }
    }

    pub fn input(&self) -> &MessageInputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut MessageInputState {
        &mut self.input
    }

    /// Moves the composed text into the selected channel as the current user.
    ///
    /// Blank input is discarded. Returns the appended message.
    pub fn submit_input(&mut self, timestamp_ms: i64) -> Option<&ChatMessage> {
        let index = self.selected_channel?;
        let text = self.input.take_message()?;
        let channel = self.workspace.channels.get_mut(index)?;

        channel.push_message(ChatMessage::new(self.user.clone(), text, timestamp_ms));
        channel.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_channels(names: &[&str]) -> ShellState {
        let channels = names.iter().map(|name| Channel::new(*name)).collect();
        ShellState::new("me", Workspace::new("demo", channels))
    }

    #[test]
    fn selects_first_channel_when_available() {
        let state = state_with_channels(&["general", "random"]);

        assert_eq!(state.selected_index(), Some(0));
        assert_eq!(state.selected_channel().map(|c| c.name.as_str()), Some("general"));
    }

    #[test]
    fn empty_workspace_has_no_selection() {
        let mut state = state_with_channels(&[]);
        state.select_next();

        assert_eq!(state.selected_index(), None);
        assert!(state.selected_channel().is_none());
    }

    #[test]
    fn selection_is_clamped_at_both_ends() {
        let mut state = state_with_channels(&["a", "b"]);

        state.select_previous();
        assert_eq!(state.selected_index(), Some(0));

        state.select_next();
        state.select_next();
        assert_eq!(state.selected_index(), Some(1));
    }

    #[test]
    fn submit_appends_message_as_current_user() {
        let mut state = state_with_channels(&["general"]);
        for ch in "hello".chars() {
            state.input_mut().insert_char(ch);
        }

        let message = state.submit_input(42).cloned().expect("message must be sent");

        assert_eq!(message.user, "me");
        assert_eq!(message.text, "hello");
        assert_eq!(message.timestamp_ms, 42);
        assert!(state.input().is_empty());
        assert_eq!(state.selected_channel().map(|c| c.messages.len()), Some(1));
    }

    #[test]
    fn submit_ignores_blank_input() {
        let mut state = state_with_channels(&["general"]);
        state.input_mut().insert_char(' ');

        assert!(state.submit_input(42).is_none());
        assert_eq!(state.selected_channel().map(|c| c.messages.len()), Some(0));
    }

    #[test]
    fn stop_clears_running_flag() {
        let mut state = ShellState::default();
        assert!(state.is_running());

        state.stop();

        assert!(!state.is_running());
    }
}
