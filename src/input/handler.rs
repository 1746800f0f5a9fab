use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Command, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameCommand(Command),
    Restart,
    Quit,
    None,
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
            // Steering - Arrow keys
            KeyCode::Up => KeyAction::GameCommand(Command::Turn(Direction::Up)),
            KeyCode::Down => KeyAction::GameCommand(Command::Turn(Direction::Down)),
            KeyCode::Left => KeyAction::GameCommand(Command::Turn(Direction::Left)),
            KeyCode::Right => KeyAction::GameCommand(Command::Turn(Direction::Right)),

            // Speed
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::GameCommand(Command::SpeedUp),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::GameCommand(Command::SpeedDown),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(up),
            KeyAction::GameCommand(Command::Turn(Direction::Up))
        );

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(down),
            KeyAction::GameCommand(Command::Turn(Direction::Down))
        );

        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(left),
            KeyAction::GameCommand(Command::Turn(Direction::Left))
        );

        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(right),
            KeyAction::GameCommand(Command::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_speed_keys() {
        let handler = InputHandler::new();

        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(a),
            KeyAction::GameCommand(Command::SpeedUp)
        );

        let s_upper = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(s_upper),
            KeyAction::GameCommand(Command::SpeedDown)
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(q), KeyAction::Quit);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(esc), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_restart_key() {
        let handler = InputHandler::new();

        let r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(r), KeyAction::Restart);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(x), KeyAction::None);

        let w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(w), KeyAction::None);
    }
}
