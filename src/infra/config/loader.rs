use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if !config_path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path,
        source,
    })?;

    file_config.merge_into(&mut config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_defaults_when_file_is_missing() {
        let config = load(Some(Path::new("./missing-config.toml"))).expect("config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn merges_file_values_over_defaults() {
        let dir = tempfile::tempdir().expect("must create temp dir");
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"[logging]
level = "debug"

[workspace]
title = "rust-lang"
user = "ferris"

[ui]
sidebar_width = 32

[icons]
preset = "ascii"
"#,
        )
        .expect("must write test config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.workspace.title, "rust-lang");
        assert_eq!(config.workspace.user, "ferris");
        assert_eq!(config.ui.sidebar_width, 32);
        assert_eq!(config.icons.channel, "#");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().expect("must create temp dir");
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[workspace]\nuser = \"ferris\"\n").expect("must write config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(config.workspace.user, "ferris");
        assert_eq!(config.workspace.title, "rslack");
        assert_eq!(config.icons, crate::infra::config::IconConfig::default());
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().expect("must create temp dir");
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[ui]\nsidebar_width = \"wide\"\n").expect("must write config");

        let error = load(Some(&config_path)).expect_err("invalid config must fail");

        assert!(matches!(error, AppError::ConfigParse { ref path, .. } if path == &config_path));
    }
}
