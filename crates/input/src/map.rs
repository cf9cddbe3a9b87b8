//! Key mapping from terminal events to game and menu actions.

use crate::types::{GameAction, InitialsKey, MenuAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key pressed during play to a piece request.
pub fn game_action(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::Rotate),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        _ => None,
    }
}

/// Ctrl-C aborts the running game immediately.
pub fn is_force_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Map a key pressed on the title, rankings or game-over screens.
///
/// Which choices a screen accepts is up to the screen.
pub fn menu_action(key: KeyEvent) -> Option<MenuAction> {
    match key.code {
        KeyCode::Enter => Some(MenuAction::Play),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(MenuAction::Scores),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(MenuAction::Title),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(MenuAction::Quit),
        _ => None,
    }
}

/// Map a key pressed while entering initials.
pub fn initials_key(key: KeyEvent) -> Option<InitialsKey> {
    match key.code {
        KeyCode::Up => Some(InitialsKey::Up),
        KeyCode::Down => Some(InitialsKey::Down),
        KeyCode::Left => Some(InitialsKey::Left),
        KeyCode::Right => Some(InitialsKey::Right),
        KeyCode::Enter => Some(InitialsKey::Done),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            game_action(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            game_action(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            game_action(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::SoftDrop)
        );

        assert_eq!(
            game_action(KeyEvent::from(KeyCode::Char('A'))),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            game_action(KeyEvent::from(KeyCode::Char('d'))),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            game_action(KeyEvent::from(KeyCode::Char('S'))),
            Some(GameAction::SoftDrop)
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            game_action(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::Rotate)
        );
        assert_eq!(
            game_action(KeyEvent::from(KeyCode::Char('w'))),
            Some(GameAction::Rotate)
        );
        assert_eq!(
            game_action(KeyEvent::from(KeyCode::Char('W'))),
            Some(GameAction::Rotate)
        );
    }

    #[test]
    fn test_unmapped_game_keys() {
        assert_eq!(game_action(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(
            game_action(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_force_quit() {
        assert!(is_force_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_force_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!is_force_quit(KeyEvent::from(KeyCode::Char('q'))));
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(
            menu_action(KeyEvent::from(KeyCode::Enter)),
            Some(MenuAction::Play)
        );
        assert_eq!(
            menu_action(KeyEvent::from(KeyCode::Char('s'))),
            Some(MenuAction::Scores)
        );
        assert_eq!(
            menu_action(KeyEvent::from(KeyCode::Char('T'))),
            Some(MenuAction::Title)
        );
        assert_eq!(
            menu_action(KeyEvent::from(KeyCode::Char('q'))),
            Some(MenuAction::Quit)
        );
        assert_eq!(menu_action(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_initials_keys() {
        assert_eq!(
            initials_key(KeyEvent::from(KeyCode::Up)),
            Some(InitialsKey::Up)
        );
        assert_eq!(
            initials_key(KeyEvent::from(KeyCode::Enter)),
            Some(InitialsKey::Done)
        );
        assert_eq!(initials_key(KeyEvent::from(KeyCode::Char('a'))), None);
    }
}
