use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

const APP_DIR_NAME: &str = "rslack";
const LOG_FILE_NAME: &str = "rslack.log";

/// Installs the global subscriber writing to the configured log file.
///
/// The TUI owns stdout, so events never go to the terminal. The returned
/// guard flushes the background writer on drop and must outlive the app.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, AppError> {
    let path = resolve_log_file(config);
    let (dir, file_name) = split_log_path(&path);

    fs::create_dir_all(&dir).map_err(|source| AppError::LogDirCreate {
        path: dir.clone(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}

pub fn resolve_log_file(config: &LogConfig) -> PathBuf {
    config.file.clone().unwrap_or_else(default_log_file)
}

fn default_log_file() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(env::temp_dir)
        .join(APP_DIR_NAME)
        .join(LOG_FILE_NAME)
}

fn split_log_path(path: &Path) -> (PathBuf, &std::ffi::OsStr) {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new(LOG_FILE_NAME));

    (dir, file_name)
}
