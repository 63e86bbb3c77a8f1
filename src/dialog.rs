//! The dialog controller: tree ownership, layout orchestration, focus and
//! hover tracking, input dispatch, and the repaint loop.

use std::mem;

use slotmap::SecondaryMap;
use tracing::{debug, trace};

use crate::error::Result;
use crate::event::{EventSource, InputEvent, Key, KeyEvent, Modifiers};
use crate::geometry::{Point, Rect, Size};
use crate::layout::{assign_positions, grow_to_fit, measure_minimum};
use crate::render::{Color, PointerStyle, Renderer, TextMeasurer};
use crate::tree::{ElementId, Tree};
use crate::widget::{RadioGroups, Widget, WidgetKind};

/// Invoked when a widget is clicked, by pointer or by keyboard activation.
pub type ClickHandler = Box<dyn FnMut(&mut Dialog, ElementId)>;

/// Invoked once, in registration order, after the event loop exits.
pub type CloseHook = Box<dyn FnOnce(&mut Dialog)>;

/// A modal dialog: a widget tree under a vertical root container, plus the
/// interaction state the event loop maintains.
///
/// Hover, focus, and pressed targets are held as [`ElementId`]s, which act as
/// weak references: a stale id simply stops resolving, it never dangles.
pub struct Dialog {
    tree: Tree,
    root: ElementId,
    caption: String,
    background: Color,
    screen_rect: Rect,
    hovered: Option<ElementId>,
    focused: Option<ElementId>,
    pressed: Option<ElementId>,
    running: bool,
    radios: RadioGroups,
    handlers: SecondaryMap<ElementId, ClickHandler>,
    close_hooks: Vec<CloseHook>,
}

impl Dialog {
    /// Create a dialog with an empty vertical root container.
    pub fn new(caption: impl Into<String>) -> Self {
        let mut tree = Tree::new();
        let root = tree.insert_vertical();
        Self {
            tree,
            root,
            caption: caption.into(),
            background: Color::rgb(220, 220, 220),
            screen_rect: Rect::EMPTY,
            hovered: None,
            focused: None,
            pressed: None,
            running: false,
            radios: RadioGroups::new(),
            handlers: SecondaryMap::new(),
            close_hooks: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// Add a widget under a linear container. Radio widgets are registered
    /// with their group as a side effect.
    pub fn add_widget(&mut self, parent: ElementId, widget: Widget) -> Result<ElementId> {
        let group = widget.radio_state().map(|r| r.group.clone());
        let id = self.tree.insert_widget(widget);
        self.tree.append(parent, id)?;
        if let Some(group) = group {
            self.radios.register(group, id);
        }
        Ok(id)
    }

    pub fn add_horizontal(&mut self, parent: ElementId) -> Result<ElementId> {
        let id = self.tree.insert_horizontal();
        self.tree.append(parent, id)?;
        Ok(id)
    }

    pub fn add_vertical(&mut self, parent: ElementId) -> Result<ElementId> {
        let id = self.tree.insert_vertical();
        self.tree.append(parent, id)?;
        Ok(id)
    }

    pub fn add_grid(&mut self, parent: ElementId) -> Result<ElementId> {
        let id = self.tree.insert_grid();
        self.tree.append(parent, id)?;
        Ok(id)
    }

    /// Add a row of widget cells to a grid.
    pub fn add_row(&mut self, grid: ElementId, widgets: Vec<Widget>) -> Result<Vec<ElementId>> {
        let mut ids = Vec::with_capacity(widgets.len());
        for widget in widgets {
            let group = widget.radio_state().map(|r| r.group.clone());
            let id = self.tree.insert_widget(widget);
            if let Some(group) = group {
                self.radios.register(group, id);
            }
            ids.push(id);
        }
        self.tree.append_row(grid, ids.clone())?;
        Ok(ids)
    }

    /// Replace the click handler of a widget.
    pub fn on_click(&mut self, id: ElementId, handler: impl FnMut(&mut Dialog, ElementId) + 'static) {
        self.handlers.insert(id, Box::new(handler));
    }

    /// Register a hook to run after the event loop exits.
    pub fn on_close(&mut self, hook: impl FnOnce(&mut Dialog) + 'static) {
        self.close_hooks.push(Box::new(hook));
    }

    // -----------------------------------------------------------------------
    // State access
    // -----------------------------------------------------------------------

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// The dialog's laid-out extent, outer margins included.
    pub fn screen_rect(&self) -> Rect {
        self.screen_rect
    }

    pub fn widget(&self, id: ElementId) -> Option<&Widget> {
        self.tree.widget(id)
    }

    pub fn widget_mut(&mut self, id: ElementId) -> Option<&mut Widget> {
        self.tree.widget_mut(id)
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    pub fn hovered(&self) -> Option<ElementId> {
        self.hovered
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ask the event loop to exit once the current batch is finished. Safe to
    /// call from click handlers, and more than once.
    pub fn close(&mut self) {
        debug!("dialog closing");
        self.running = false;
    }

    /// Select a radio widget, clearing the rest of its group.
    pub fn select_radio(&mut self, id: ElementId) {
        self.radios.select(&mut self.tree, id);
    }

    /// The selected value of a radio group, if any member is selected.
    pub fn radio_value(&self, group: &str) -> Option<String> {
        self.radios.selected_value(&self.tree, group)
    }

    /// The element tree as an indented outline.
    pub fn dump(&self) -> String {
        self.tree.dump(self.root)
    }

    // -----------------------------------------------------------------------
    // Layout
    // -----------------------------------------------------------------------

    /// Measure, grow to the minimum, and position the tree. The dialog's
    /// outer margins offset the content and pad the screen rect.
    pub fn layout(&mut self, measurer: &dyn TextMeasurer) -> Result<()> {
        self.reflow(None, measurer)
    }

    /// Re-run layout for a new window size. Content below the minimum is not
    /// shrunk; extra space is distributed by the grow pass.
    pub fn relayout(&mut self, width: i32, height: i32, measurer: &dyn TextMeasurer) -> Result<()> {
        self.reflow(Some(Size::new(width, height)), measurer)
    }

    fn reflow(&mut self, window: Option<Size>, measurer: &dyn TextMeasurer) -> Result<()> {
        use crate::geometry::Side;

        let min = measure_minimum(&mut self.tree, self.root, measurer)?;
        let top = self.tree.margin(self.root, Side::Top);
        let right = self.tree.margin(self.root, Side::Right);
        let bottom = self.tree.margin(self.root, Side::Bottom);
        let left = self.tree.margin(self.root, Side::Left);

        let content = match window {
            Some(w) => Size::new(
                (w.width - left - right).max(min.width),
                (w.height - top - bottom).max(min.height),
            ),
            None => min,
        };
        grow_to_fit(&mut self.tree, self.root, content);
        assign_positions(&mut self.tree, self.root, Point::new(left, top));
        self.screen_rect =
            Rect::new(0, 0, content.width + left + right, content.height + top + bottom);

        // Geometry moved; everything needs fresh paint.
        for id in self.tree.widgets(self.root) {
            if let Some(widget) = self.tree.widget_mut(id) {
                widget.mark_dirty();
            }
        }
        trace!(width = self.screen_rect.width, height = self.screen_rect.height, "reflowed");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Event dispatch
    // -----------------------------------------------------------------------

    /// Dispatch one input event. Painting is separate; call
    /// [`Dialog::repaint`] after a batch.
    pub fn handle_event<R: Renderer>(&mut self, event: InputEvent, renderer: &mut R) -> Result<()> {
        match event {
            InputEvent::KeyDown(key) => self.key_down(key, renderer),
            InputEvent::PointerMove(at) => self.pointer_motion(at, renderer),
            InputEvent::PointerDown(at) => self.pointer_down(at),
            InputEvent::PointerUp(at) => self.pointer_up(at, renderer),
            InputEvent::Resize { width, height } => self.relayout(width, height, &*renderer)?,
            InputEvent::Quit => self.close(),
            InputEvent::KeyUp(_) | InputEvent::Other => {}
        }
        Ok(())
    }

    fn key_down<R: Renderer>(&mut self, key: KeyEvent, renderer: &mut R) {
        // Alt chords belong to the host environment.
        if key.modifiers.contains(Modifiers::ALT) {
            return;
        }
        match key.code {
            Key::Escape => {
                self.close();
                return;
            }
            Key::Tab => {
                self.focus_step(key.modifiers.contains(Modifiers::SHIFT));
                return;
            }
            _ => {}
        }

        // Enter and Space activate whatever holds focus, textboxes included;
        // a space character is never inserted through the keyboard.
        if matches!(key.code, Key::Enter | Key::Char(' ')) {
            if let Some(id) = self.enabled_focused() {
                self.dispatch_click(id, None, renderer);
            }
            return;
        }

        // Everything else goes to the focused widget.
        if let Some(id) = self.enabled_focused() {
            if let Some(widget) = self.tree.widget_mut(id) {
                widget.textbox_key_down(&key);
            }
        }
    }

    fn enabled_focused(&self) -> Option<ElementId> {
        self.focused
            .filter(|&id| self.tree.widget(id).is_some_and(|w| !w.is_disabled()))
    }

    fn pointer_motion<R: Renderer>(&mut self, at: Point, renderer: &mut R) {
        let target = self.tree.widget_at(self.root, at);
        if target == self.hovered {
            return;
        }
        if let Some(widget) = self.hovered.and_then(|id| self.tree.widget_mut(id)) {
            widget.set_hovering(false);
        }
        if let Some(widget) = target.and_then(|id| self.tree.widget_mut(id)) {
            widget.set_hovering(true);
        }
        self.hovered = target;

        let editable = target
            .and_then(|id| self.tree.widget(id))
            .is_some_and(|w| !w.is_disabled() && matches!(w.kind(), WidgetKind::Textbox(_)));
        renderer.set_pointer(if editable { PointerStyle::Text } else { PointerStyle::Arrow });
    }

    fn pointer_down(&mut self, at: Point) {
        let target = self.tree.widget_at(self.root, at);
        self.pressed = target;
        // Pressing outside the focused widget drops focus immediately; the
        // press target itself gains focus only if the click completes on it.
        if self.focused.is_some() && target != self.focused {
            self.set_focus(None);
        }
    }

    fn pointer_up<R: Renderer>(&mut self, at: Point, renderer: &mut R) {
        let target = self.tree.widget_at(self.root, at);
        let pressed = self.pressed.take();
        let Some(id) = target else {
            return;
        };
        // A click is a press and release on the same widget.
        if pressed != Some(id) {
            return;
        }
        let enabled = self.tree.widget(id).is_some_and(|w| !w.is_disabled());
        if !enabled {
            return;
        }
        self.set_focus(Some(id));
        self.dispatch_click(id, Some(at), renderer);
    }

    fn dispatch_click<R: Renderer>(&mut self, id: ElementId, at: Option<Point>, renderer: &mut R) {
        debug!(?id, "click");
        let is_textbox =
            matches!(self.tree.widget(id).map(Widget::kind), Some(WidgetKind::Textbox(_)));
        let is_radio =
            matches!(self.tree.widget(id).map(Widget::kind), Some(WidgetKind::Radio(_)));

        if is_textbox {
            // Keyboard activation carries no position and moves no cursor.
            if let Some(at) = at {
                let rect = self.tree.rect(id);
                if let Some(widget) = self.tree.widget_mut(id) {
                    widget.textbox_click(at.x - rect.left, rect.width, &*renderer);
                }
            }
        } else if is_radio {
            self.radios.select(&mut self.tree, id);
        }

        // The handler may mutate the dialog freely, including replacing
        // itself; only restore it if the slot is still empty afterwards.
        if let Some(mut handler) = self.handlers.remove(id) {
            handler(self, id);
            if !self.handlers.contains_key(id) {
                self.handlers.insert(id, handler);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Focus
    // -----------------------------------------------------------------------

    /// Move focus, updating the widgets' focused flags.
    pub fn set_focus(&mut self, target: Option<ElementId>) {
        if target == self.focused {
            return;
        }
        if let Some(widget) = self.focused.and_then(|id| self.tree.widget_mut(id)) {
            widget.set_focused(false);
        }
        if let Some(widget) = target.and_then(|id| self.tree.widget_mut(id)) {
            widget.set_focused(true);
        }
        debug!(from = ?self.focused, to = ?target, "focus moved");
        self.focused = target;
    }

    /// Advance focus in traversal order, wrapping at either end. With no
    /// current focus, forward lands on the first target and backward on the
    /// last.
    pub fn focus_step(&mut self, backward: bool) {
        let next = match self.focused {
            Some(current) => {
                if backward {
                    self.tree.focusable_before(self.root, current)
                } else {
                    self.tree.focusable_after(self.root, current)
                }
            }
            None if backward => self.tree.last_focusable(self.root),
            None => self.tree.first_focusable(self.root),
        };
        // A tree without focus targets leaves focus where it is.
        if next.is_some() {
            self.set_focus(next);
        }
    }

    // -----------------------------------------------------------------------
    // Painting
    // -----------------------------------------------------------------------

    /// Paint the whole dialog: background, then every widget.
    pub fn paint_all<R: Renderer>(&mut self, renderer: &mut R) {
        renderer.clear(self.background, self.screen_rect);
        for id in self.tree.widgets(self.root) {
            let rect = self.tree.rect(id);
            if let Some(widget) = self.tree.widget_mut(id) {
                widget.mark_clean();
            }
            if let Some(widget) = self.tree.widget(id) {
                let surface = renderer.render_surface(widget, rect);
                renderer.blit(&surface, rect);
            }
        }
        renderer.present(&[self.screen_rect]);
    }

    /// Repaint only dirty widgets, presenting the batch of changed rects.
    /// With nothing dirty, the renderer is not touched at all.
    pub fn repaint<R: Renderer>(&mut self, renderer: &mut R) {
        let dirty: Vec<ElementId> = self
            .tree
            .widgets(self.root)
            .into_iter()
            .filter(|&id| self.tree.widget(id).is_some_and(Widget::is_dirty))
            .collect();
        if dirty.is_empty() {
            return;
        }
        trace!(count = dirty.len(), "repaint");

        let mut rects = Vec::with_capacity(dirty.len());
        for id in dirty {
            let rect = self.tree.rect(id);
            if let Some(widget) = self.tree.widget_mut(id) {
                widget.mark_clean();
            }
            if let Some(widget) = self.tree.widget(id) {
                renderer.clear(self.background, rect);
                let surface = renderer.render_surface(widget, rect);
                renderer.blit(&surface, rect);
                rects.push(rect);
            }
        }
        renderer.present(&rects);
    }

    // -----------------------------------------------------------------------
    // Event loop
    // -----------------------------------------------------------------------

    /// Lay out, paint, and pump events until [`Dialog::close`] is called.
    /// Close hooks run after the loop, in registration order.
    pub fn run<R: Renderer, S: EventSource>(
        &mut self,
        renderer: &mut R,
        source: &mut S,
    ) -> Result<()> {
        self.layout(&*renderer)?;
        self.paint_all(renderer);
        self.running = true;

        while self.running {
            // The whole batch is dispatched before the exit check, so a
            // close() mid-batch still sees the remaining events applied.
            for event in source.next_batch() {
                self.handle_event(event, renderer)?;
            }
            self.repaint(renderer);
        }

        for hook in mem::take(&mut self.close_hooks) {
            hook(self);
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestRenderer;
    use crate::widget::Widget;

    fn simple() -> (Dialog, ElementId, ElementId, TestRenderer) {
        let mut dialog = Dialog::new("test");
        let root = dialog.root();
        dialog.add_widget(root, Widget::label("title")).unwrap();
        let ok = dialog.add_widget(root, Widget::button("OK")).unwrap();
        let name = dialog.add_widget(root, Widget::textbox("name")).unwrap();
        let renderer = TestRenderer::new();
        dialog.layout(&renderer).unwrap();
        (dialog, ok, name, renderer)
    }

    #[test]
    fn screen_rect_includes_outer_margins() {
        let (dialog, ..) = simple();
        let content = dialog.tree().rect(dialog.root());
        assert_eq!(content.left, 10);
        assert_eq!(content.top, 10);
        assert_eq!(dialog.screen_rect().width, content.width + 20);
        assert_eq!(dialog.screen_rect().height, content.height + 20);
    }

    #[test]
    fn tab_cycles_focus() {
        let (mut dialog, ok, name, _) = simple();
        dialog.focus_step(false);
        assert_eq!(dialog.focused(), Some(ok));
        dialog.focus_step(false);
        assert_eq!(dialog.focused(), Some(name));
        dialog.focus_step(false);
        assert_eq!(dialog.focused(), Some(ok));
    }

    #[test]
    fn shift_tab_from_nothing_lands_on_the_last() {
        let (mut dialog, _, name, _) = simple();
        dialog.focus_step(true);
        assert_eq!(dialog.focused(), Some(name));
    }

    #[test]
    fn focus_updates_widget_flags() {
        let (mut dialog, ok, name, _) = simple();
        dialog.set_focus(Some(ok));
        assert!(dialog.widget(ok).unwrap().is_focused());
        dialog.set_focus(Some(name));
        assert!(!dialog.widget(ok).unwrap().is_focused());
        assert!(dialog.widget(name).unwrap().is_focused());
    }

    #[test]
    fn escape_closes() {
        let (mut dialog, _, _, mut renderer) = simple();
        dialog.running = true;
        dialog
            .handle_event(InputEvent::KeyDown(KeyEvent::plain(Key::Escape)), &mut renderer)
            .unwrap();
        assert!(!dialog.is_running());
    }

    #[test]
    fn enter_clicks_the_focused_button() {
        let (mut dialog, ok, _, mut renderer) = simple();
        let clicks = std::rc::Rc::new(std::cell::Cell::new(0));
        let seen = clicks.clone();
        dialog.on_click(ok, move |_, _| seen.set(seen.get() + 1));
        dialog.set_focus(Some(ok));
        dialog
            .handle_event(InputEvent::KeyDown(KeyEvent::plain(Key::Enter)), &mut renderer)
            .unwrap();
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn space_activates_a_focused_textbox_instead_of_typing() {
        let (mut dialog, _, name, mut renderer) = simple();
        let clicks = std::rc::Rc::new(std::cell::Cell::new(0));
        let seen = clicks.clone();
        dialog.on_click(name, move |_, _| seen.set(seen.get() + 1));
        dialog.set_focus(Some(name));
        dialog
            .handle_event(InputEvent::KeyDown(KeyEvent::plain(Key::Char(' '))), &mut renderer)
            .unwrap();
        // The click handler fires; no space is inserted and the cursor stays.
        assert_eq!(clicks.get(), 1);
        let widget = dialog.widget(name).unwrap();
        assert_eq!(widget.text(), "name");
        assert_eq!(widget.textbox_state().unwrap().cursor, 4);
    }

    #[test]
    fn alt_chords_are_ignored() {
        let (mut dialog, ok, _, mut renderer) = simple();
        dialog.set_focus(Some(ok));
        dialog.running = true;
        dialog
            .handle_event(
                InputEvent::KeyDown(KeyEvent::with(Key::Escape, Modifiers::ALT)),
                &mut renderer,
            )
            .unwrap();
        assert!(dialog.is_running());
    }

    #[test]
    fn click_requires_press_and_release_on_the_same_widget() {
        let (mut dialog, ok, name, mut renderer) = simple();
        let clicks = std::rc::Rc::new(std::cell::Cell::new(0));
        let seen = clicks.clone();
        dialog.on_click(ok, move |_, _| seen.set(seen.get() + 1));

        let ok_rect = dialog.tree().rect(ok);
        let name_rect = dialog.tree().rect(name);
        let on_ok = Point::new(ok_rect.left + 1, ok_rect.top + 1);
        let on_name = Point::new(name_rect.left + 1, name_rect.top + 1);

        dialog.handle_event(InputEvent::PointerDown(on_ok), &mut renderer).unwrap();
        dialog.handle_event(InputEvent::PointerUp(on_name), &mut renderer).unwrap();
        assert_eq!(clicks.get(), 0);

        dialog.handle_event(InputEvent::PointerDown(on_ok), &mut renderer).unwrap();
        dialog.handle_event(InputEvent::PointerUp(on_ok), &mut renderer).unwrap();
        assert_eq!(clicks.get(), 1);
        assert_eq!(dialog.focused(), Some(ok));
    }

    #[test]
    fn disabled_widget_neither_clicks_nor_focuses() {
        let mut dialog = Dialog::new("t");
        let root = dialog.root();
        let off = dialog
            .add_widget(root, Widget::button("Off").with_disabled(true))
            .unwrap();
        let renderer = TestRenderer::new();
        dialog.layout(&renderer).unwrap();
        let mut renderer = renderer;

        let clicks = std::rc::Rc::new(std::cell::Cell::new(0));
        let seen = clicks.clone();
        dialog.on_click(off, move |_, _| seen.set(seen.get() + 1));

        let rect = dialog.tree().rect(off);
        let at = Point::new(rect.left + 1, rect.top + 1);
        dialog.handle_event(InputEvent::PointerDown(at), &mut renderer).unwrap();
        dialog.handle_event(InputEvent::PointerUp(at), &mut renderer).unwrap();
        assert_eq!(clicks.get(), 0);
        assert_eq!(dialog.focused(), None);
    }

    #[test]
    fn pressing_elsewhere_drops_focus() {
        let (mut dialog, ok, _, mut renderer) = simple();
        dialog.set_focus(Some(ok));
        dialog
            .handle_event(InputEvent::PointerDown(Point::new(-5, -5)), &mut renderer)
            .unwrap();
        assert_eq!(dialog.focused(), None);
        assert!(!dialog.widget(ok).unwrap().is_focused());
    }

    #[test]
    fn hover_moves_between_widgets() {
        let (mut dialog, ok, name, mut renderer) = simple();
        let ok_rect = dialog.tree().rect(ok);
        let at = Point::new(ok_rect.left + 1, ok_rect.top + 1);
        dialog.handle_event(InputEvent::PointerMove(at), &mut renderer).unwrap();
        assert_eq!(dialog.hovered(), Some(ok));
        assert!(dialog.widget(ok).unwrap().is_hovering());

        let name_rect = dialog.tree().rect(name);
        let at = Point::new(name_rect.left + 1, name_rect.top + 1);
        dialog.handle_event(InputEvent::PointerMove(at), &mut renderer).unwrap();
        assert!(!dialog.widget(ok).unwrap().is_hovering());
        assert_eq!(dialog.hovered(), Some(name));
        // Editable target swaps the pointer to the I-beam.
        assert_eq!(renderer.pointer(), PointerStyle::Text);
    }

    #[test]
    fn repaint_skips_clean_widgets() {
        let (mut dialog, ok, _, mut renderer) = simple();
        dialog.paint_all(&mut renderer);
        renderer.reset_recording();

        dialog.repaint(&mut renderer);
        assert!(renderer.presents().is_empty());

        dialog.widget_mut(ok).unwrap().set_text("Go");
        dialog.repaint(&mut renderer);
        assert_eq!(renderer.presents().len(), 1);
        assert_eq!(renderer.presents()[0], vec![dialog.tree().rect(ok)]);
        assert!(!dialog.widget(ok).unwrap().is_dirty());
    }

    #[test]
    fn resize_relayout_marks_everything_dirty() {
        let (mut dialog, _, _, mut renderer) = simple();
        dialog.paint_all(&mut renderer);
        let min = dialog.screen_rect();
        dialog
            .handle_event(
                InputEvent::Resize { width: min.width + 100, height: min.height + 60 },
                &mut renderer,
            )
            .unwrap();
        assert_eq!(dialog.screen_rect().width, min.width + 100);

        renderer.reset_recording();
        dialog.repaint(&mut renderer);
        assert_eq!(renderer.presents().len(), 1);
        assert_eq!(renderer.presents()[0].len(), 3);
    }

    #[test]
    fn resize_below_minimum_keeps_the_minimum() {
        let (mut dialog, _, _, mut renderer) = simple();
        let min = dialog.screen_rect();
        dialog
            .handle_event(InputEvent::Resize { width: 1, height: 1 }, &mut renderer)
            .unwrap();
        assert_eq!(dialog.screen_rect(), min);
    }

    #[test]
    fn close_hooks_run_in_order_after_the_loop() {
        use crate::event::ScriptedEvents;

        let mut dialog = Dialog::new("t");
        let root = dialog.root();
        dialog.add_widget(root, Widget::button("OK")).unwrap();

        let order = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let a = order.clone();
        let b = order.clone();
        dialog.on_close(move |_| a.borrow_mut().push("first"));
        dialog.on_close(move |_| b.borrow_mut().push("second"));

        let mut renderer = TestRenderer::new();
        let mut source =
            ScriptedEvents::new([vec![InputEvent::KeyDown(KeyEvent::plain(Key::Escape))]]);
        dialog.run(&mut renderer, &mut source).unwrap();
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn handler_can_close_the_dialog() {
        use crate::event::ScriptedEvents;

        let mut dialog = Dialog::new("t");
        let root = dialog.root();
        let ok = dialog.add_widget(root, Widget::button("OK")).unwrap();
        dialog.on_click(ok, |d, _| d.close());

        let mut renderer = TestRenderer::new();
        dialog.layout(&renderer).unwrap();
        let rect = dialog.tree().rect(ok);
        let at = Point::new(rect.left + 1, rect.top + 1);
        let mut source = ScriptedEvents::new([vec![
            InputEvent::PointerDown(at),
            InputEvent::PointerUp(at),
        ]]);
        dialog.run(&mut renderer, &mut source).unwrap();
        assert!(!dialog.is_running());
    }
}
