use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub workspace: WorkspaceConfig,
    pub ui: UiConfig,
    pub icons: IconConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceConfig {
    pub title: String,
    pub user: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            title: "rslack".to_owned(),
            user: "me".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    pub sidebar_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { sidebar_width: 28 }
    }
}

/// Glyphs used by the widgets. Defaults expect a Nerd Font patched terminal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IconConfig {
    pub channel: String,
    pub divider: String,
    pub full_divider: String,
    pub full_star: String,
    pub keyboard: String,
    pub line_star: String,
    pub person: String,
    pub private_channel: String,
}

impl IconConfig {
    pub fn nerd() -> Self {
        Self {
            channel: "\u{F198}".to_owned(),
            divider: "\u{E0B1}".to_owned(),
            full_divider: "\u{E0B0}".to_owned(),
            full_star: "\u{F005}".to_owned(),
            keyboard: "\u{F11C}".to_owned(),
            line_star: "\u{F006}".to_owned(),
            person: "\u{F415}".to_owned(),
            private_channel: "\u{F023}".to_owned(),
        }
    }

    /// Plain ASCII fallback for terminals without a patched font.
    pub fn ascii() -> Self {
        Self {
            channel: "#".to_owned(),
            divider: ">".to_owned(),
            full_divider: ">".to_owned(),
            full_star: "*".to_owned(),
            keyboard: "kbd".to_owned(),
            line_star: "-".to_owned(),
            person: "@".to_owned(),
            private_channel: "!".to_owned(),
        }
    }

    /// Icon prefixing a channel name.
    pub fn channel_icon(&self, is_private: bool) -> &str {
        if is_private {
            &self.private_channel
        } else {
            &self.channel
        }
    }

    pub fn star_icon(&self, starred: bool) -> &str {
        if starred {
            &self.full_star
        } else {
            &self.line_star
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self::nerd()
    }
}
