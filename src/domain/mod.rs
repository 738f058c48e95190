//! Domain layer: the display model behind the widgets.

pub mod channel;
pub mod events;
pub mod message;
pub mod message_input_state;
pub mod shell_state;
pub mod workspace;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
