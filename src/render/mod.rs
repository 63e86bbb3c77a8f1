//! Rendering collaborator contracts.
//!
//! The core never draws anything itself: it decides which colors and
//! decoration apply to each widget, and hands the actual drawing to a
//! [`Renderer`] implementation. [`TermRenderer`](term::TermRenderer) is the
//! bundled reference host; tests use the deterministic renderer in
//! [`crate::testing`].

pub mod term;

use crate::geometry::{Rect, Size};
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a color from its channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Apply a gamma correction, per channel.
    ///
    /// Factors above 1.0 brighten, below 1.0 darken. Used by renderers to
    /// derive bevel highlight and shadow shades from a widget's background.
    pub fn gamma(self, factor: f64) -> Color {
        let adjust = |c: u8| -> u8 {
            let normalized = f64::from(c) / 255.0;
            (normalized.powf(1.0 / factor) * 255.0).round().clamp(0.0, 255.0) as u8
        };
        Color { r: adjust(self.r), g: adjust(self.g), b: adjust(self.b) }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color { r, g, b }
    }
}

// ---------------------------------------------------------------------------
// Font
// ---------------------------------------------------------------------------

/// A font request: family name plus nominal size.
///
/// Interpretation is entirely up to the renderer; a terminal host ignores
/// both fields and measures in cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Font {
    pub family: String,
    pub size: i32,
}

impl Font {
    /// Create a font request.
    pub fn new(family: impl Into<String>, size: i32) -> Self {
        Self { family: family.into(), size }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self { family: "FreeSans".to_owned(), size: 16 }
    }
}

// ---------------------------------------------------------------------------
// Pointer style
// ---------------------------------------------------------------------------

/// Mouse pointer appearance requested by the dialog.
///
/// The text I-beam is shown while hovering an editable widget.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PointerStyle {
    #[default]
    Arrow,
    Text,
}

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

/// A single drawable cell: one character with foreground and background.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    /// A blank cell with the given background.
    pub const fn blank(bg: Color) -> Self {
        Self { ch: ' ', fg: Color::BLACK, bg }
    }
}

/// A widget-sized grid of cells produced by [`Renderer::render_surface`].
///
/// The cell model keeps the reference terminal host honest; raster hosts are
/// free to treat surfaces as an intermediate and rasterize however they like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Surface {
    /// Create a surface filled with blank cells over `bg`.
    pub fn filled(size: Size, bg: Color) -> Self {
        let width = size.width.max(0);
        let height = size.height.max(0);
        Self {
            width,
            height,
            cells: vec![Cell::blank(bg); (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The cell at (x, y), or `None` outside the surface.
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get((y * self.width + x) as usize)
    }

    /// Overwrite the cell at (x, y). Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.cells[(y * self.width + x) as usize] = cell;
    }

    /// Write a string starting at (x, y), clipped to the surface width.
    pub fn write_str(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.set(x + i as i32, y, Cell { ch, fg, bg });
        }
    }

    /// Fill every cell's background, keeping characters blank.
    pub fn fill(&mut self, bg: Color) {
        for cell in &mut self.cells {
            *cell = Cell::blank(bg);
        }
    }
}

// ---------------------------------------------------------------------------
// Collaborator traits
// ---------------------------------------------------------------------------

/// Text metrics provider, the only renderer capability the layout passes need.
pub trait TextMeasurer {
    /// The extent of `text` rendered in `font`.
    fn measure_text(&self, font: &Font, text: &str) -> Size;
}

/// Drawing collaborator consumed by [`Dialog`](crate::dialog::Dialog).
///
/// The dialog decides *which* colors and decoration apply (from widget state)
/// and *when* to repaint (from dirty flags); the renderer owns every pixel.
pub trait Renderer: TextMeasurer {
    /// Produce the widget's surface, decorated per its resolved colors and
    /// decoration variant. `rect` is the widget's laid-out box.
    fn render_surface(&mut self, widget: &Widget, rect: Rect) -> Surface;

    /// Fill a screen region with a flat color (used to erase under widgets).
    fn clear(&mut self, color: Color, rect: Rect);

    /// Copy a surface to the screen at `rect`.
    fn blit(&mut self, surface: &Surface, rect: Rect);

    /// Push a batch of updated regions to the display. Never called with an
    /// empty batch.
    fn present(&mut self, rects: &[Rect]);

    /// Change the mouse pointer appearance. Hosts without a pointer ignore it.
    fn set_pointer(&mut self, _style: PointerStyle) {}
}

// ===========================================================================
// Tests
// ===========================================================================
