//! Slide-up list of transit lines.

/// Open/closed state and highlighted row of the line menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineMenu {
    open: bool,
    highlighted: usize,
}

impl LineMenu {
    /// Whether the menu is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open if closed, close if open.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Highlighted row.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Move the highlight down, wrapping past the last of `len` rows.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.highlighted = 0;
            return;
        }
        self.highlighted = (self.highlighted + 1) % len;
    }

    /// Move the highlight up, wrapping before the first of `len` rows.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            self.highlighted = 0;
            return;
        }
        self.highlighted = (self.highlighted + len - 1) % len;
    }
}
