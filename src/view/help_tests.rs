//! Tests for help overlay widget

use super::*;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

fn buffer_to_string(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(render_help_overlay).unwrap();
    buffer_to_string(terminal.backend().buffer())
}

#[test]
fn render_help_overlay_shows_centered_modal() {
    let rendered = render(80, 24);
    assert!(rendered.contains('┌'), "Help overlay should render a bordered box");
    assert!(rendered.contains("Keyboard Shortcuts"));
}

#[test]
fn render_help_overlay_lists_every_category() {
    let rendered = render(100, 40);
    for category in ["Map", "Lines", "Application"] {
        assert!(rendered.contains(category), "Missing category {category}");
    }
}

#[test]
fn render_help_overlay_mentions_pin_and_menu_keys() {
    let rendered = render(100, 40);
    assert!(rendered.contains("Drop pin"));
    assert!(rendered.contains("line menu"));
    assert!(rendered.contains("Quit"));
}

#[test]
fn render_help_overlay_shows_dismissal_hint() {
    let rendered = render(100, 40);
    assert!(rendered.contains("Press Esc or ? to close"));
}

#[test]
fn centered_rect_is_centered() {
    let area = Rect::new(0, 0, 100, 50);
    let popup = centered_rect(60, 70, area);
    assert_eq!(popup, Rect::new(20, 7, 60, 35));
}

#[test]
fn render_help_overlay_survives_tiny_terminal() {
    let rendered = render(4, 2);
    assert!(!rendered.is_empty());
}

#[test]
fn help_content_has_one_header_per_category() {
    let content = build_help_content();
    let headers = content
        .iter()
        .filter(|line| line.spans.len() == 1 && line.spans[0].style == SECTION_HEADER)
        .count();
    assert_eq!(headers, SHORTCUTS.len());
}
