use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput},
    shell_state::{ActivePane, ShellState},
    workspace::Workspace,
};

use super::contracts::{Clock, ShellOrchestrator};

pub struct DefaultShellOrchestrator<C>
where
    C: Clock,
{
    state: ShellState,
    clock: C,
}

impl<C> DefaultShellOrchestrator<C>
where
    C: Clock,
{
    pub fn new(clock: C, user: impl Into<String>, workspace: Workspace) -> Self {
        Self {
            state: ShellState::new(user, workspace),
            clock,
        }
    }

    fn handle_sidebar_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "q" => self.state.stop(),
            "j" | "down" => self.state.select_next(),
            "k" | "up" => self.state.select_previous(),
            "l" | "right" | "tab" | "enter" => {
                if self.state.selected_channel().is_some() {
                    self.state.set_active_pane(ActivePane::Messages);
                }
            }
            _ => {}
        }
    }

    fn handle_messages_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "q" => self.state.stop(),
            "i" => self.state.set_active_pane(ActivePane::Compose),
            "h" | "left" | "tab" | "esc" => self.state.set_active_pane(ActivePane::Sidebar),
            _ => {}
        }
    }

    fn handle_compose_key(&mut self, key: &KeyInput) {
        let input = self.state.input_mut();

        match key.key.as_str() {
            "esc" => self.state.set_active_pane(ActivePane::Messages),
            "enter" => self.submit_message(),
            "backspace" => input.backspace(),
            "delete" => input.delete(),
            "left" => input.move_left(),
            "right" => input.move_right(),
            "home" => input.move_home(),
            "end" => input.move_end(),
            _ => {
                if let Some(ch) = key.as_char() {
                    if !input.insert_char(ch) {
                        tracing::warn!("message length limit reached, input ignored");
                    }
                }
            }
        }
    }

    fn submit_message(&mut self) {
        let now_ms = self.clock.now_ms();
        let channel = self
            .state
            .selected_channel()
            .map(|channel| channel.name.clone())
            .unwrap_or_default();

        match self.state.submit_input(now_ms) {
            Some(message) => tracing::info!(
                channel = %channel,
                chars = message.text.chars().count(),
                "message appended to channel history"
            ),
            None => tracing::debug!(channel = %channel, "blank message discarded"),
        }
    }
}

impl<C> ShellOrchestrator for DefaultShellOrchestrator<C>
where
    C: Clock,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => match self.state.active_pane() {
                ActivePane::Sidebar => self.handle_sidebar_key(&key),
                ActivePane::Messages => self.handle_messages_key(&key),
                ActivePane::Compose => self.handle_compose_key(&key),
            },
        }

        Ok(())
    }
}
