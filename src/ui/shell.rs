use anyhow::Result;
use ratatui::{backend::Backend, Terminal};

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        user = %context.config.workspace.user,
        "starting TUI shell"
    );

    let mut session = TerminalSession::new()?;
    run_loop(session.terminal_mut(), context, event_source, orchestrator)?;

    tracing::info!("TUI shell stopped");
    Ok(())
}

/// Draws, then dispatches one event, until the orchestrator stops.
fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    while orchestrator.state().is_running() {
        terminal.draw(|frame| view::render(frame, orchestrator.state(), &context.config))?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{
        domain::{
            events::{AppEvent, KeyInput},
            workspace::Workspace,
        },
        infra::config::AppConfig,
        ui::{event_source::MockEventSource, preview::buffer_lines},
        usecases::{contracts::Clock, shell::DefaultShellOrchestrator},
    };

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0
        }
    }

    fn key(name: &str) -> AppEvent {
        AppEvent::InputKey(KeyInput::new(name, false))
    }

    #[test]
    fn loop_draws_until_quit_and_shows_sent_message() {
        let context = AppContext::new(AppConfig::default());
        let workspace = Workspace::sample("acme", "me", 1_771_059_600_000);
        let mut orchestrator =
            DefaultShellOrchestrator::new(FixedClock(1_771_059_700_000), "me", workspace);
        let mut source = MockEventSource::from(vec![
            key("l"),
            key("i"),
            key("y"),
            key("o"),
            key("enter"),
            key("esc"),
            AppEvent::QuitRequested,
        ]);
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).expect("test terminal");

        run_loop(&mut terminal, &context, &mut source, &mut orchestrator)
            .expect("loop must finish");

        assert!(!orchestrator.state().is_running());
        let rows = buffer_lines(terminal.backend().buffer());
        assert!(rows.iter().any(|row| row.contains("yo")));
    }
}
