//! Scripted dialog driving for tests.

use crate::dialog::Dialog;
use crate::error::Result;
use crate::event::{InputEvent, Key, KeyEvent, Modifiers};
use crate::geometry::Point;
use crate::testing::TestRenderer;
use crate::tree::ElementId;

/// Drives a [`Dialog`] through its public event surface with a
/// [`TestRenderer`], so tests exercise the same dispatch paths the terminal
/// loop uses.
pub struct Pilot {
    dialog: Dialog,
    renderer: TestRenderer,
}

impl Pilot {
    /// Take over a dialog: lay it out and paint the first frame.
    pub fn new(mut dialog: Dialog) -> Result<Self> {
        let mut renderer = TestRenderer::new();
        dialog.layout(&renderer)?;
        dialog.paint_all(&mut renderer);
        Ok(Self { dialog, renderer })
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut Dialog {
        &mut self.dialog
    }

    pub fn renderer(&self) -> &TestRenderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut TestRenderer {
        &mut self.renderer
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    pub fn press_key(&mut self, code: Key) -> Result<()> {
        self.press_key_with(code, Modifiers::NONE)
    }

    pub fn press_key_with(&mut self, code: Key, modifiers: Modifiers) -> Result<()> {
        self.dialog
            .handle_event(InputEvent::KeyDown(KeyEvent::with(code, modifiers)), &mut self.renderer)
    }

    /// Type a string one printable key at a time. A space key activates the
    /// focused widget instead of inserting, so keep spaces out of `text`.
    pub fn type_text(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            self.press_key(Key::Char(ch))?;
        }
        Ok(())
    }

    pub fn tab(&mut self) -> Result<()> {
        self.press_key(Key::Tab)
    }

    pub fn shift_tab(&mut self) -> Result<()> {
        self.press_key_with(Key::Tab, Modifiers::SHIFT)
    }

    pub fn move_to(&mut self, at: Point) -> Result<()> {
        self.dialog.handle_event(InputEvent::PointerMove(at), &mut self.renderer)
    }

    /// A full click: press and release at the same point.
    pub fn click(&mut self, at: Point) -> Result<()> {
        self.dialog.handle_event(InputEvent::PointerDown(at), &mut self.renderer)?;
        self.dialog.handle_event(InputEvent::PointerUp(at), &mut self.renderer)
    }

    /// Click the center of a widget's laid-out rect.
    pub fn click_widget(&mut self, id: ElementId) -> Result<()> {
        self.click(self.widget_center(id))
    }

    /// The center point of a widget's rect.
    pub fn widget_center(&self, id: ElementId) -> Point {
        let rect = self.dialog.tree().rect(id);
        Point::new(rect.left + rect.width / 2, rect.top + rect.height / 2)
    }

    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        self.dialog.handle_event(InputEvent::Resize { width, height }, &mut self.renderer)
    }

    /// Flush dirty widgets, as the event loop does after each batch.
    pub fn repaint(&mut self) {
        self.dialog.repaint(&mut self.renderer);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
