use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::ui::preview::PreviewWidget;

const DEFAULT_PREVIEW_WIDTH: u16 = 60;

#[derive(Debug, Parser)]
#[command(name = "rslack", about = "Slack-style chat client for the terminal")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start TUI shell
    Run,
    /// Print a single widget rendered with sample data
    Preview {
        #[arg(value_enum)]
        widget: PreviewWidget,

        /// Render width in terminal columns
        #[arg(short, long, default_value_t = DEFAULT_PREVIEW_WIDTH)]
        width: u16,
    },
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};
    use crate::ui::preview::PreviewWidget;

    #[test]
    fn defaults_to_run_when_command_is_missing() {
        let cli = Cli::parse_from(["rslack"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
    }

    #[test]
    fn parses_explicit_run_command() {
        let cli = Cli::parse_from(["rslack", "run", "--config", "custom.toml"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
    }

    #[test]
    fn parses_preview_with_kebab_case_widget_name() {
        let cli = Cli::parse_from(["rslack", "preview", "channel-header", "--width", "40"]);

        match cli.command_or_default() {
            Command::Preview { widget, width } => {
                assert_eq!(widget, PreviewWidget::ChannelHeader);
                assert_eq!(width, 40);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn preview_width_has_default() {
        let cli = Cli::parse_from(["rslack", "preview", "sidebar"]);

        assert!(matches!(
            cli.command_or_default(),
            Command::Preview { width: 60, .. }
        ));
    }

    #[test]
    fn rejects_unknown_preview_widget() {
        assert!(Cli::try_parse_from(["rslack", "preview", "toolbar"]).is_err());
    }
}
