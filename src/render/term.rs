//! Terminal host: a crossterm-backed renderer and the screen session guard.
//!
//! The terminal measures one cell per char, so every layout unit is a cell.
//! Decorations are approximated with shaded border cells derived from the
//! widget background via [`Color::gamma`].

use std::io::{self, Stdout, Write};

use crossterm::{cursor, execute, queue, style, terminal};

use crate::geometry::{Rect, Size};
use crate::render::{Cell, Color, Font, PointerStyle, Renderer, Surface, TextMeasurer};
use crate::widget::{Align, Decoration, Widget, WidgetKind};

const CURSOR_COLOR: Color = Color::rgb(120, 0, 0);

// ---------------------------------------------------------------------------
// Screen session
// ---------------------------------------------------------------------------

/// Raw-mode alternate-screen session. Restores the terminal on drop.
pub struct TermScreen {
    out: Stdout,
}

impl TermScreen {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            crossterm::event::EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(Self { out })
    }

    /// The terminal extent in cells.
    pub fn size(&self) -> io::Result<Size> {
        let (w, h) = terminal::size()?;
        Ok(Size::new(i32::from(w), i32::from(h)))
    }
}

impl Drop for TermScreen {
    fn drop(&mut self) {
        // Restoration failures at teardown have nowhere to go.
        let _ = execute!(
            self.out,
            cursor::Show,
            crossterm::event::DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Draws widget surfaces to the terminal, one cell per layout unit.
pub struct TermRenderer {
    out: Stdout,
}

impl TermRenderer {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    fn queue_cell(&mut self, x: i32, y: i32, cell: &Cell) {
        if x < 0 || y < 0 || x > i32::from(u16::MAX) || y > i32::from(u16::MAX) {
            return;
        }
        let _ = queue!(
            self.out,
            cursor::MoveTo(x as u16, y as u16),
            style::SetColors(style::Colors::new(term_color(cell.fg), term_color(cell.bg))),
            style::Print(cell.ch)
        );
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn term_color(c: Color) -> style::Color {
    style::Color::Rgb { r: c.r, g: c.g, b: c.b }
}

impl TextMeasurer for TermRenderer {
    fn measure_text(&self, _font: &Font, text: &str) -> Size {
        Size::new(text.chars().count() as i32, 1)
    }
}

impl Renderer for TermRenderer {
    fn render_surface(&mut self, widget: &Widget, rect: Rect) -> Surface {
        compose_surface(widget, rect)
    }

    fn clear(&mut self, color: Color, rect: Rect) {
        let blank = Cell::blank(color);
        for y in rect.top..rect.bottom() {
            for x in rect.left..rect.right() {
                self.queue_cell(x, y, &blank);
            }
        }
    }

    fn blit(&mut self, surface: &Surface, rect: Rect) {
        for y in 0..surface.height() {
            for x in 0..surface.width() {
                if let Some(cell) = surface.get(x, y) {
                    self.queue_cell(rect.left + x, rect.top + y, cell);
                }
            }
        }
    }

    fn present(&mut self, _rects: &[Rect]) {
        let _ = self.out.flush();
    }

    fn set_pointer(&mut self, _style: PointerStyle) {
        // Terminals have no pointer shape to change.
    }
}

// ---------------------------------------------------------------------------
// Surface composition
// ---------------------------------------------------------------------------

/// Build the widget's cell surface: background, decoration border, text, and
/// the kind-specific extras (radio glyph, textbox cursor).
fn compose_surface(widget: &Widget, rect: Rect) -> Surface {
    let bg = widget.current_background();
    let fg = widget.current_foreground();
    let mut surface = Surface::filled(rect.size(), bg);
    decorate(&mut surface, widget.decoration(), bg);

    let text = match widget.kind() {
        WidgetKind::Radio(radio) => {
            let mark = if radio.selected { '\u{2022}' } else { ' ' };
            format!("({mark}) {}", widget.text())
        }
        _ => widget.text().to_owned(),
    };

    let width = surface.width();
    let text_len = text.chars().count() as i32;
    let x = match widget.align() {
        Align::Left => widget.padding().left(),
        Align::Center => (width - text_len) / 2,
        Align::Right => width - widget.padding().right() - text_len,
    };
    let y = surface.height() / 2;
    surface.write_str(x, y, &text, fg, bg);

    if widget.is_focused() {
        if let Some(tb) = widget.textbox_state() {
            surface.set(
                x + tb.cursor as i32,
                y,
                Cell { ch: '|', fg: CURSOR_COLOR, bg },
            );
        }
    }
    surface
}

/// Shade the border cells per the decoration variant.
fn decorate(surface: &mut Surface, decoration: Decoration, bg: Color) {
    let (top_left, bottom_right) = match decoration {
        Decoration::None | Decoration::Solid => return,
        Decoration::Bevel => (bg.gamma(1.6), bg.gamma(0.6)),
        Decoration::BevelInset => (bg.gamma(0.6), bg.gamma(1.6)),
        Decoration::RoundedCorners => {
            // Knock the corners back toward the surroundings.
            let dim = bg.gamma(0.8);
            let w = surface.width();
            let h = surface.height();
            for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
                surface.set(x, y, Cell::blank(dim));
            }
            return;
        }
    };

    let w = surface.width();
    let h = surface.height();
    for x in 0..w {
        surface.set(x, 0, Cell::blank(top_left));
        surface.set(x, h - 1, Cell::blank(bottom_right));
    }
    for y in 0..h {
        surface.set(0, y, Cell::blank(top_left));
        surface.set(w - 1, y, Cell::blank(bottom_right));
    }
}

// ===========================================================================
// Tests
// ===========================================================================
