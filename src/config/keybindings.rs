//! Keyboard bindings configuration.

use crate::model::{Direction, MapAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Two layers: the map layer is always active, and the menu layer takes
/// precedence while the line menu is open. Keys the menu layer does not bind
/// fall through to the map layer.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<KeyEvent, MapAction>,
    menu: HashMap<KeyEvent, MapAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent, menu_open: bool) -> Option<MapAction> {
        let key = normalize(key);
        if menu_open {
            if let Some(action) = self.menu.get(&key) {
                return Some(*action);
            }
        }
        self.map.get(&key).copied()
    }

    /// Bind `key` on the map layer, replacing any previous binding.
    pub fn bind(&mut self, key: KeyEvent, action: MapAction) {
        self.map.insert(normalize(key), action);
    }
}

/// Strip kind/state so press events from different terminals compare equal.
fn normalize(key: KeyEvent) -> KeyEvent {
    KeyEvent::new(key.code, key.modifiers)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut map = HashMap::new();

        // Crosshair: arrows and vim-style
        for (code, direction) in [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('k'), Direction::Up),
            (KeyCode::Char('j'), Direction::Down),
            (KeyCode::Char('h'), Direction::Left),
            (KeyCode::Char('l'), Direction::Right),
        ] {
            map.insert(key(code), MapAction::MoveCursor(direction));
        }

        // Pin
        map.insert(key(KeyCode::Enter), MapAction::LongPress);
        map.insert(ch('p'), MapAction::LongPress);
        map.insert(ch('t'), MapAction::TapMarker);

        // Lines
        map.insert(ch('m'), MapAction::ToggleLineMenu);
        map.insert(ch('x'), MapAction::StopPlayback);

        // Display
        map.insert(ch('s'), MapAction::ToggleMapStyle);
        map.insert(ch('?'), MapAction::Help);

        // Application controls
        map.insert(ch('q'), MapAction::Quit);
        map.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            MapAction::Quit,
        );

        let mut menu = HashMap::new();
        menu.insert(key(KeyCode::Up), MapAction::HighlightPrev);
        menu.insert(ch('k'), MapAction::HighlightPrev);
        menu.insert(key(KeyCode::Down), MapAction::HighlightNext);
        menu.insert(ch('j'), MapAction::HighlightNext);
        menu.insert(key(KeyCode::Enter), MapAction::SelectLine);
        menu.insert(key(KeyCode::Esc), MapAction::ToggleLineMenu);

        Self { map, menu }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    #[test]
    fn arrows_move_crosshair_on_map() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Left), false),
            Some(MapAction::MoveCursor(Direction::Left))
        );
        assert_eq!(
            bindings.get(ch('k'), false),
            Some(MapAction::MoveCursor(Direction::Up))
        );
    }

    #[test]
    fn enter_long_presses_on_map_and_selects_in_menu() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Enter), false),
            Some(MapAction::LongPress)
        );
        assert_eq!(
            bindings.get(key(KeyCode::Enter), true),
            Some(MapAction::SelectLine)
        );
    }

    #[test]
    fn menu_layer_falls_through_to_map_layer() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(ch('q'), true), Some(MapAction::Quit));
        assert_eq!(
            bindings.get(key(KeyCode::Left), true),
            Some(MapAction::MoveCursor(Direction::Left))
        );
        assert_eq!(bindings.get(ch('j'), true), Some(MapAction::HighlightNext));
    }

    #[test]
    fn ctrl_c_quits() {
        let bindings = KeyBindings::default();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(bindings.get(ctrl_c, false), Some(MapAction::Quit));
        assert_eq!(bindings.get(ch('c'), false), None);
    }

    #[test]
    fn lookup_ignores_event_kind() {
        let bindings = KeyBindings::default();
        let event = KeyEvent {
            code: KeyCode::Char('t'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        assert_eq!(bindings.get(event, false), Some(MapAction::TapMarker));
    }

    #[test]
    fn bind_overrides_default() {
        let mut bindings = KeyBindings::default();
        bindings.bind(ch('t'), MapAction::Help);
        assert_eq!(bindings.get(ch('t'), false), Some(MapAction::Help));
    }
}
