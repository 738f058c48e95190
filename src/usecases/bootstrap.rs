use std::path::Path;

use crate::{
    domain::workspace::Workspace,
    infra::{self, error::AppError},
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, Clock, ShellOrchestrator, SystemClock},
        shell::DefaultShellOrchestrator,
    },
};

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    let guard = infra::logging::init(&context.config.logging)?;

    tracing::debug!(
        log_file = %infra::logging::resolve_log_file(&context.config.logging).display(),
        "logging initialized"
    );

    Ok(context.with_log_guard(guard))
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = infra::config::load(config_path)?;

    Ok(AppContext::new(config))
}

/// Wires the demo workspace, the system clock and terminal input together.
pub fn compose_shell(context: &AppContext) -> ShellComposition {
    let clock = SystemClock;
    let workspace = sample_workspace(context, clock.now_ms());
    let user = context.config.workspace.user.clone();

    tracing::info!(
        channels = workspace.channels.len(),
        "composed shell with sample workspace"
    );

    ShellComposition {
        event_source: Box::new(CrosstermEventSource),
        orchestrator: Box::new(DefaultShellOrchestrator::new(clock, user, workspace)),
    }
}

fn sample_workspace(context: &AppContext, now_ms: i64) -> Workspace {
    let workspace = &context.config.workspace;
    Workspace::sample(workspace.title.clone(), &workspace.user, now_ms)
}
