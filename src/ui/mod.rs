//! UI layer: widgets, screen layout, and the terminal loop.

mod event_source;
pub mod preview;
pub mod shell;
mod styles;
mod terminal;
mod view;
pub mod widgets;

pub(crate) use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
