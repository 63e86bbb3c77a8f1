//! A renderer double with fixed-width text metrics and full call recording.

use crate::geometry::{Rect, Size};
use crate::render::{Color, Font, PointerStyle, Renderer, Surface, TextMeasurer};
use crate::widget::Widget;

/// Renders nothing, records everything. Text measures a fixed 8 x 16 per
/// char regardless of font, so layout results are stable across hosts.
pub struct TestRenderer {
    char_width: i32,
    line_height: i32,
    clears: Vec<(Color, Rect)>,
    blits: Vec<Rect>,
    presents: Vec<Vec<Rect>>,
    pointer: PointerStyle,
}

impl TestRenderer {
    pub fn new() -> Self {
        Self::with_metrics(8, 16)
    }

    /// Override the per-char cell size.
    pub fn with_metrics(char_width: i32, line_height: i32) -> Self {
        Self {
            char_width,
            line_height,
            clears: Vec::new(),
            blits: Vec::new(),
            presents: Vec::new(),
            pointer: PointerStyle::Arrow,
        }
    }

    /// Every `clear` call so far, in order.
    pub fn clears(&self) -> &[(Color, Rect)] {
        &self.clears
    }

    /// Every blitted rect so far, in order.
    pub fn blits(&self) -> &[Rect] {
        &self.blits
    }

    /// Every `present` batch so far, in order.
    pub fn presents(&self) -> &[Vec<Rect>] {
        &self.presents
    }

    /// The most recently requested pointer style.
    pub fn pointer(&self) -> PointerStyle {
        self.pointer
    }

    /// Forget all recorded calls; the pointer style is kept.
    pub fn reset_recording(&mut self) {
        self.clears.clear();
        self.blits.clear();
        self.presents.clear();
    }
}

impl Default for TestRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for TestRenderer {
    fn measure_text(&self, _font: &Font, text: &str) -> Size {
        Size::new(text.chars().count() as i32 * self.char_width, self.line_height)
    }
}

impl Renderer for TestRenderer {
    fn render_surface(&mut self, widget: &Widget, rect: Rect) -> Surface {
        let mut surface = Surface::filled(rect.size(), widget.current_background());
        surface.write_str(0, 0, widget.text(), widget.current_foreground(), widget.current_background());
        surface
    }

    fn clear(&mut self, color: Color, rect: Rect) {
        self.clears.push((color, rect));
    }

    fn blit(&mut self, _surface: &Surface, rect: Rect) {
        self.blits.push(rect);
    }

    fn present(&mut self, rects: &[Rect]) {
        self.presents.push(rects.to_vec());
    }

    fn set_pointer(&mut self, style: PointerStyle) {
        self.pointer = style;
    }
}

// ===========================================================================
// Tests
// ===========================================================================
