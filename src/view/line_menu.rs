//! Line picker rendered under the map.

use crate::state::AppState;
use crate::view::constants::LINE_MENU_MAX_HEIGHT;
use crate::view::styles::MapStyles;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Height the menu wants for `lines` entries, border included.
pub fn menu_height(lines: usize) -> u16 {
    let rows = u16::try_from(lines).unwrap_or(u16::MAX).max(1);
    rows.saturating_add(2).min(LINE_MENU_MAX_HEIGHT)
}

/// Render the catalog as a list with the highlighted row selected.
pub fn render_line_menu(frame: &mut Frame, area: Rect, state: &AppState, styles: &MapStyles) {
    let playing = state.visible_route().map(|line| line.name());

    let items: Vec<ListItem> = state
        .catalog()
        .lines()
        .iter()
        .map(|line| {
            let marker = if Some(line.name()) == playing { "▶ " } else { "  " };
            ListItem::new(format!("{marker}{} ({} stops)", line.name(), line.len()))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Lines (Enter: select, Esc: close) ")
                .borders(Borders::ALL),
        )
        .highlight_style(styles.highlight);

    let mut list_state = ListState::default().with_selected(Some(state.line_menu.highlighted()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_height_includes_border() {
        assert_eq!(menu_height(3), 5);
    }

    #[test]
    fn menu_height_is_capped() {
        assert_eq!(menu_height(100), LINE_MENU_MAX_HEIGHT);
    }

    #[test]
    fn empty_menu_keeps_one_row() {
        assert_eq!(menu_height(0), 3);
    }
}
