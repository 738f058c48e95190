#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
}

/// A key press. Printable keys carry the character, named keys use
/// lowercase names such as `enter`, `esc`, `tab`, `backspace`, `up`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// The typed character when the key is a single printable char.
    pub fn as_char(&self) -> Option<char> {
        if self.ctrl {
            return None;
        }

        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_char_key_is_printable() {
        assert_eq!(KeyInput::new("x", false).as_char(), Some('x'));
        assert_eq!(KeyInput::new(" ", false).as_char(), Some(' '));
    }

    #[test]
    fn named_and_ctrl_keys_are_not_printable() {
        assert_eq!(KeyInput::new("enter", false).as_char(), None);
        assert_eq!(KeyInput::new("c", true).as_char(), None);
    }
}
