//! Domain-level user actions independent of key bindings.

/// Direction for moving the crosshair over the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards north.
    Up,
    /// Towards south.
    Down,
    /// Towards west.
    Left,
    /// Towards east.
    Right,
}

/// User intents that can be mapped to configurable key bindings.
///
/// These represent what the user wants, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `MapAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapAction {
    // Map pointer
    /// Move the crosshair one step. Default: arrows / h j k l
    MoveCursor(Direction),
    /// Long-press at the crosshair: drop the pin there. Default: Enter / p
    LongPress,
    /// Tap the dropped pin. Default: t
    TapMarker,

    // Line menu
    /// Open or close the line menu. Default: m
    ToggleLineMenu,
    /// Highlight the next line in the menu. Default: Down / j (menu open)
    HighlightNext,
    /// Highlight the previous line in the menu. Default: Up / k (menu open)
    HighlightPrev,
    /// Select the highlighted line in the menu. Default: Enter (menu open)
    SelectLine,
    /// Stop bus playback and clear the route. Default: x
    StopPlayback,

    // Display
    /// Toggle standard/satellite map style. Default: s
    ToggleMapStyle,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,

    // Application
    /// Exit the application. Default: q / Ctrl+c
    Quit,
}

impl MapAction {
    /// Whether this action only makes sense while the line menu is open.
    pub fn is_menu_action(&self) -> bool {
        matches!(
            self,
            MapAction::SelectLine | MapAction::HighlightNext | MapAction::HighlightPrev
        )
    }
}
