//! Tests for terminal key bindings

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use tilemerge::input::command::Command;
    use tilemerge::input::keyboard::map_key;
    use tilemerge::spatial::Direction;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    // Tests arrow keys map to the four moves
    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(&press(KeyCode::Up)), Some(Command::Move(Direction::Up)));
        assert_eq!(
            map_key(&press(KeyCode::Down)),
            Some(Command::Move(Direction::Down))
        );
        assert_eq!(
            map_key(&press(KeyCode::Left)),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            map_key(&press(KeyCode::Right)),
            Some(Command::Move(Direction::Right))
        );
    }

    // Tests letter aliases match the arrows
    #[test]
    fn test_wasd_aliases() {
        for (key, arrow) in [
            ('w', KeyCode::Up),
            ('a', KeyCode::Left),
            ('s', KeyCode::Down),
            ('d', KeyCode::Right),
        ] {
            assert_eq!(map_key(&press(KeyCode::Char(key))), map_key(&press(arrow)));
        }
    }

    // Tests control keys for game management
    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(&press(KeyCode::Char('n'))), Some(Command::NewGame));
        assert_eq!(
            map_key(&press(KeyCode::Char('r'))),
            Some(Command::ConfirmRestart)
        );
        assert_eq!(map_key(&press(KeyCode::Enter)), Some(Command::ConfirmRestart));
        assert_eq!(map_key(&press(KeyCode::Char('+'))), Some(Command::Resize(1)));
        assert_eq!(map_key(&press(KeyCode::Char('-'))), Some(Command::Resize(-1)));
        assert_eq!(map_key(&press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(map_key(&press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(map_key(&press(KeyCode::Char('x'))), None);
    }

    // Tests Ctrl-C quits and other control chords do nothing
    #[test]
    fn test_control_modifier() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_c), Some(Command::Quit));

        let ctrl_w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_w), None);
    }

    // Tests key releases are ignored
    // Verified by removing the release guard
    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_key(&release), None);
    }
}
