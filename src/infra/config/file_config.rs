use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::{
    config::{AppConfig, IconConfig, LogConfig, UiConfig, WorkspaceConfig},
    error::AppError,
};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub workspace: Option<FileWorkspaceConfig>,
    pub ui: Option<FileUiConfig>,
    pub icons: Option<FileIconConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) -> Result<(), AppError> {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(workspace) = self.workspace {
            workspace.merge_into(&mut config.workspace);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }

        if let Some(icons) = self.icons {
            icons.merge_into(&mut config.icons)?;
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileWorkspaceConfig {
    pub title: Option<String>,
    pub user: Option<String>,
}

impl FileWorkspaceConfig {
    fn merge_into(self, config: &mut WorkspaceConfig) {
        if let Some(title) = self.title {
            config.title = title;
        }

        if let Some(user) = self.user {
            config.user = user;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub sidebar_width: Option<u16>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(width) = self.sidebar_width {
            config.sidebar_width = width;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileIconConfig {
    pub preset: Option<String>,
    pub channel: Option<String>,
    pub divider: Option<String>,
    pub full_divider: Option<String>,
    pub full_star: Option<String>,
    pub keyboard: Option<String>,
    pub line_star: Option<String>,
    pub person: Option<String>,
    pub private_channel: Option<String>,
}

impl FileIconConfig {
    /// Applies the preset first, then individual glyph overrides on top.
    fn merge_into(self, config: &mut IconConfig) -> Result<(), AppError> {
        if let Some(preset) = self.preset {
            *config = match preset.as_str() {
                "nerd" => IconConfig::nerd(),
                "ascii" => IconConfig::ascii(),
                _ => return Err(AppError::UnknownIconPreset(preset)),
            };
        }

        let overrides = [
            (self.channel, &mut config.channel),
            (self.divider, &mut config.divider),
            (self.full_divider, &mut config.full_divider),
            (self.full_star, &mut config.full_star),
            (self.keyboard, &mut config.keyboard),
            (self.line_star, &mut config.line_star),
            (self.person, &mut config.person),
            (self.private_channel, &mut config.private_channel),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_override_applies_on_top_of_preset() {
        let file_config = FileIconConfig {
            preset: Some("ascii".to_owned()),
            channel: Some("~".to_owned()),
            ..FileIconConfig::default()
        };
        let mut icons = IconConfig::default();

        file_config
            .merge_into(&mut icons)
            .expect("ascii preset must be accepted");

        assert_eq!(icons.channel, "~");
        assert_eq!(icons.person, "@");
    }

    #[test]
    fn unknown_icon_preset_is_rejected() {
        let file_config = FileIconConfig {
            preset: Some("emoji".to_owned()),
            ..FileIconConfig::default()
        };
        let mut icons = IconConfig::default();

        let error = file_config
            .merge_into(&mut icons)
            .expect_err("unknown preset must fail");

        assert!(matches!(error, AppError::UnknownIconPreset(name) if name == "emoji"));
    }
}
