use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    Restart,
    Quit,
    None,
}

/// Maps terminal keys onto game input
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up => Self::steer(Direction::Up),
            KeyCode::Down => Self::steer(Direction::Down),
            KeyCode::Left => Self::steer(Direction::Left),
            KeyCode::Right => Self::steer(Direction::Right),

            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'w' => Self::steer(Direction::Up),
                's' => Self::steer(Direction::Down),
                'a' => Self::steer(Direction::Left),
                'd' => Self::steer(Direction::Right),
                ' ' => KeyAction::GameAction(Action::Stop),
                'q' => KeyAction::Quit,
                'r' => KeyAction::Restart,
                _ => KeyAction::None,
            },

            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn steer(direction: Direction) -> KeyAction {
        KeyAction::GameAction(Action::Move(direction))
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
