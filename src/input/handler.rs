use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Command, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameCommand(Command),
    Restart,
    Quit,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::GameCommand(Direction::North.into()),
            KeyCode::Down => KeyAction::GameCommand(Direction::South.into()),
            KeyCode::Left => KeyAction::GameCommand(Direction::West.into()),
            KeyCode::Right => KeyAction::GameCommand(Direction::East.into()),

            // Movement - IJKL
            KeyCode::Char('i') => KeyAction::GameCommand(Direction::North.into()),
            KeyCode::Char('k') => KeyAction::GameCommand(Direction::South.into()),
            KeyCode::Char('j') => KeyAction::GameCommand(Direction::West.into()),
            KeyCode::Char('l') => KeyAction::GameCommand(Direction::East.into()),

            KeyCode::Char('r') => KeyAction::GameCommand(Command::Reverse),
            KeyCode::Char('a') => KeyAction::GameCommand(Command::ToggleAi),
            KeyCode::Char('s') => KeyAction::GameCommand(Command::PlayFoodSound),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('n') | KeyCode::Char('N') => KeyAction::Restart,

            // Unmapped keys have always meant "head east"
            _ => KeyAction::GameCommand(Command::Fallback),
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
