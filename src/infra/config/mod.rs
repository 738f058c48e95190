mod app_config;
mod file_config;
mod loader;

pub use app_config::{AppConfig, IconConfig, LogConfig, UiConfig, WorkspaceConfig};
pub use loader::load;
