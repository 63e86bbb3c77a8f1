//! Single-line text editing: cursor movement, insertion, deletion, and
//! click-to-cursor mapping.
//!
//! The cursor is a char index in `[0, text.chars().count()]`. All editing is
//! done in char indices; byte offsets are derived only at splice time, so
//! multi-byte text behaves the same as ASCII.

use crate::event::{Key, KeyEvent, Modifiers};
use crate::render::TextMeasurer;
use crate::widget::{Align, Widget, WidgetKind};

/// Kind-specific state of a textbox widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Textbox {
    /// Char index of the insertion point.
    pub cursor: usize,
}

impl Textbox {
    pub(crate) fn new(cursor: usize) -> Self {
        Self { cursor }
    }
}

// ---------------------------------------------------------------------------
// Char-index string helpers
// ---------------------------------------------------------------------------

fn byte_of(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(b, _)| b)
}

fn splice_out(text: &mut String, from: usize, to: usize) {
    let start = byte_of(text, from);
    let end = byte_of(text, to);
    text.replace_range(start..end, "");
}

fn insert_char(text: &mut String, at: usize, ch: char) {
    let byte = byte_of(text, at);
    text.insert(byte, ch);
}

fn char_at(text: &str, idx: usize) -> Option<char> {
    text.chars().nth(idx)
}

/// The char index of the start of the word before `cursor`: skip any
/// whitespace leftwards, then skip the word itself.
pub fn prev_word_boundary(text: &str, cursor: usize) -> usize {
    let mut i = cursor;
    while i > 0 && char_at(text, i - 1).is_some_and(char::is_whitespace) {
        i -= 1;
    }
    while i > 0 && char_at(text, i - 1).is_some_and(|c| !c.is_whitespace()) {
        i -= 1;
    }
    i
}

/// The char index just past the word after `cursor`: skip any whitespace
/// rightwards, then skip the word itself.
pub fn next_word_boundary(text: &str, cursor: usize) -> usize {
    let len = text.chars().count();
    let mut i = cursor;
    while i < len && char_at(text, i).is_some_and(char::is_whitespace) {
        i += 1;
    }
    while i < len && char_at(text, i).is_some_and(|c| !c.is_whitespace()) {
        i += 1;
    }
    i
}

// ---------------------------------------------------------------------------
// Widget editing methods
// ---------------------------------------------------------------------------

impl Widget {
    /// Handle a key press on a focused textbox.
    ///
    /// Returns `true` when the text or cursor changed; boundary no-ops (Left
    /// at 0, Backspace at 0, and so on) return `false` and leave the widget
    /// clean, so they trigger no repaint. Non-textbox widgets always return
    /// `false`.
    pub fn textbox_key_down(&mut self, event: &KeyEvent) -> bool {
        let len = self.text.chars().count();
        let WidgetKind::Textbox(tb) = &mut self.kind else {
            return false;
        };
        let ctrl = event.modifiers.contains(Modifiers::CTRL);
        let cursor = tb.cursor;

        let changed = match event.code {
            Key::Left => {
                let target = if ctrl {
                    prev_word_boundary(&self.text, cursor)
                } else {
                    cursor.saturating_sub(1)
                };
                tb.cursor = target;
                target != cursor
            }
            Key::Right => {
                let target = if ctrl {
                    next_word_boundary(&self.text, cursor)
                } else {
                    (cursor + 1).min(len)
                };
                tb.cursor = target;
                target != cursor
            }
            Key::Backspace => {
                let from = if ctrl {
                    prev_word_boundary(&self.text, cursor)
                } else {
                    cursor.saturating_sub(1)
                };
                if from < cursor {
                    splice_out(&mut self.text, from, cursor);
                    tb.cursor = from;
                    true
                } else {
                    false
                }
            }
            Key::Delete => {
                let to = if ctrl {
                    next_word_boundary(&self.text, cursor)
                } else {
                    (cursor + 1).min(len)
                };
                if to > cursor {
                    splice_out(&mut self.text, cursor, to);
                    true
                } else {
                    false
                }
            }
            // Any other chord with Ctrl held is not an edit.
            _ if ctrl => false,
            Key::Home => {
                tb.cursor = 0;
                cursor != 0
            }
            Key::End => {
                tb.cursor = len;
                cursor != len
            }
            Key::Char(ch) => {
                insert_char(&mut self.text, cursor, ch);
                tb.cursor = cursor + 1;
                true
            }
            _ => false,
        };

        if changed {
            self.touch();
        }
        changed
    }

    /// Move the cursor to the char boundary nearest a click at `x`, measured
    /// from the widget's left edge. `width` is the widget's laid-out width.
    ///
    /// Returns `true` when the cursor moved.
    pub fn textbox_click(&mut self, x: i32, width: i32, measurer: &dyn TextMeasurer) -> bool {
        let target = self.cursor_at(x, width, measurer);
        let WidgetKind::Textbox(tb) = &mut self.kind else {
            return false;
        };
        if tb.cursor != target {
            tb.cursor = target;
            self.touch();
            return true;
        }
        false
    }

    /// The x offset of the cursor position `cursor`, from the widget's left
    /// edge. Prefix widths are monotonically non-decreasing in `cursor`.
    pub fn cursor_x(&self, cursor: usize, width: i32, measurer: &dyn TextMeasurer) -> i32 {
        let byte = byte_of(&self.text, cursor);
        let prefix = &self.text[..byte];
        self.text_left(width, measurer) + measurer.measure_text(&self.font, prefix).width
    }

    /// The x offset where the text starts, per the widget's alignment.
    fn text_left(&self, width: i32, measurer: &dyn TextMeasurer) -> i32 {
        let text_width = measurer.measure_text(&self.font, &self.text).width;
        match self.align {
            Align::Left => self.padding.left(),
            Align::Center => (width - text_width) / 2,
            Align::Right => width - self.padding.right() - text_width,
        }
    }

    /// Binary search over prefix widths for the char boundary nearest `x`.
    /// The result is always in `[0, text.chars().count()]`.
    fn cursor_at(&self, x: i32, width: i32, measurer: &dyn TextMeasurer) -> usize {
        let len = self.text.chars().count();
        let mut low = 0usize;
        let mut high = len;
        let mut mid = 0usize;
        while low <= high {
            mid = (low + high) / 2;
            let pos = self.cursor_x(mid, width, measurer);
            if pos == x {
                return mid;
            }
            if pos < x {
                low = mid + 1;
            } else {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
        }
        mid.min(len)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
