//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Text editing keys (printable characters, Backspace, Delete) never reach
/// the bindings: they always go to the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Select the previous photo, wrapping to the last. Default: ←
    Previous,
    /// Select the next photo, wrapping to the first. Default: →
    Next,
    /// Jump to the first photo. Default: Home
    First,
    /// Jump to the last photo. Default: End
    Last,
    /// Exit the application. Default: Esc/Ctrl+c
    Quit,
}

/// Direction for carousel navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl KeyAction {
    /// Navigation direction for actions that step through the carousel.
    pub fn direction(self) -> Option<Direction> {
        match self {
            KeyAction::Previous => Some(Direction::Previous),
            KeyAction::Next => Some(Direction::Next),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_actions_map_to_directions() {
        assert_eq!(KeyAction::Previous.direction(), Some(Direction::Previous));
        assert_eq!(KeyAction::Next.direction(), Some(Direction::Next));
    }

    #[test]
    fn jump_and_quit_have_no_direction() {
        assert_eq!(KeyAction::First.direction(), None);
        assert_eq!(KeyAction::Last.direction(), None);
        assert_eq!(KeyAction::Quit.direction(), None);
    }
}
