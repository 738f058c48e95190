use tracing_appender::non_blocking::WorkerGuard;

use crate::infra::config::AppConfig;

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    /// Keeps the background log writer alive for the life of the app.
    _log_guard: Option<WorkerGuard>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            _log_guard: None,
        }
    }

    pub fn with_log_guard(mut self, guard: WorkerGuard) -> Self {
        self._log_guard = Some(guard);
        self
    }
}
