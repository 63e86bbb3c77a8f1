//! Widget leaf data: text, state flags, colors, decoration.
//!
//! A [`Widget`] is a leaf of the element tree. It owns no children; it carries
//! display text, the state flags `{disabled, hovering, focused}`, per-state
//! color overrides, and a decoration variant. Every mutation that changes an
//! observable value raises the widget's dirty flag; the repaint scheduler in
//! [`crate::dialog`] consumes and clears it.

pub mod options;
pub mod radio;
pub mod textbox;

pub use options::OptionValue;
pub use radio::{Radio, RadioGroups};
pub use textbox::Textbox;

use crate::error::Result;
use crate::geometry::{Edges, Side};
use crate::render::{Color, Font};

// ---------------------------------------------------------------------------
// Alignment / decoration
// ---------------------------------------------------------------------------

/// Horizontal text alignment inside a widget's box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Center,
    Left,
    Right,
}

/// Background decoration variant, dispatched by the renderer.
///
/// A closed set instead of lookup-by-name: reassigning the variant at runtime
/// marks the widget dirty like any other observable change.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Decoration {
    #[default]
    None,
    Solid,
    Bevel,
    BevelInset,
    RoundedCorners,
}

// ---------------------------------------------------------------------------
// State-dependent colors
// ---------------------------------------------------------------------------

/// Which state's color override a setter addresses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StateSlot {
    Base,
    Hover,
    Focus,
    Disabled,
}

/// A base color plus optional per-state overrides.
///
/// Resolution priority is disabled > focused > hovering > base; an unset
/// override falls back to the base color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StateColors {
    pub base: Color,
    pub hover: Option<Color>,
    pub focus: Option<Color>,
    pub disabled: Option<Color>,
}

impl StateColors {
    /// A color set with no state overrides.
    pub const fn plain(base: Color) -> Self {
        Self { base, hover: None, focus: None, disabled: None }
    }

    /// Resolve the color for the given state flags.
    pub fn resolve(&self, disabled: bool, focused: bool, hovering: bool) -> Color {
        if disabled {
            return self.disabled.unwrap_or(self.base);
        }
        if focused {
            return self.focus.unwrap_or(self.base);
        }
        if hovering {
            return self.hover.unwrap_or(self.base);
        }
        self.base
    }

    fn slot_mut(&mut self, slot: StateSlot) -> &mut Option<Color> {
        match slot {
            StateSlot::Base => unreachable!("base is stored directly"),
            StateSlot::Hover => &mut self.hover,
            StateSlot::Focus => &mut self.focus,
            StateSlot::Disabled => &mut self.disabled,
        }
    }

    /// Set one slot. Returns `true` if the stored value changed.
    pub fn set(&mut self, slot: StateSlot, color: Color) -> bool {
        if let StateSlot::Base = slot {
            let changed = self.base != color;
            self.base = color;
            return changed;
        }
        let stored = self.slot_mut(slot);
        let changed = *stored != Some(color);
        *stored = Some(color);
        changed
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// Discriminates widget behavior; the variants carry kind-specific state.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetKind {
    Label,
    Button,
    Textbox(Textbox),
    Radio(Radio),
}

/// A leaf element: display text, state flags, colors, decoration.
///
/// Fields are private; mutation goes through the setters below, each of which
/// raises the dirty flag when (and only when) an observable value actually
/// changes. Writing the dirty flag itself is the one exception.
#[derive(Clone, Debug)]
pub struct Widget {
    pub(crate) kind: WidgetKind,
    pub(crate) text: String,
    pub(crate) align: Align,
    pub(crate) font: Font,
    pub(crate) width: Option<i32>,
    pub(crate) height: Option<i32>,
    pub(crate) margin: Edges,
    pub(crate) padding: Edges,
    pub(crate) foreground: StateColors,
    pub(crate) background: StateColors,
    pub(crate) decoration: Decoration,
    pub(crate) bevel_depth: i32,
    pub(crate) corner_radius: i32,
    pub(crate) disabled: bool,
    pub(crate) hovering: bool,
    pub(crate) focused: bool,
    pub(crate) dirty: bool,
}

impl Widget {
    fn base(kind: WidgetKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            align: Align::Center,
            font: Font::default(),
            width: None,
            height: None,
            margin: Edges::uniform(10),
            padding: Edges::uniform(8),
            foreground: StateColors::plain(Color::rgb(0, 0, 0)),
            background: StateColors::plain(Color::rgb(220, 220, 220)),
            decoration: Decoration::None,
            bevel_depth: 4,
            corner_radius: 16,
            disabled: false,
            hovering: false,
            focused: false,
            dirty: false,
        }
    }

    /// A static text label. Never a focus target.
    pub fn label(text: impl Into<String>) -> Self {
        let mut w = Self::base(WidgetKind::Label, text);
        w.decoration = Decoration::Solid;
        w
    }

    /// A clickable push button.
    pub fn button(text: impl Into<String>) -> Self {
        let mut w = Self::base(WidgetKind::Button, text);
        w.background = StateColors {
            base: Color::rgb(180, 180, 180),
            hover: Some(Color::rgb(180, 180, 50)),
            focus: Some(Color::rgb(180, 180, 50)),
            disabled: Some(Color::rgb(200, 200, 200)),
        };
        w.foreground.disabled = Some(Color::rgb(128, 128, 128));
        w.padding = Edges::uniform(16);
        w.decoration = Decoration::Bevel;
        w
    }

    /// A single-line editable text box with the cursor at the end.
    pub fn textbox(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        let mut w = Self::base(WidgetKind::Textbox(Textbox::new(cursor)), text);
        w.background = StateColors {
            base: Color::rgb(235, 235, 235),
            hover: Some(Color::rgb(245, 245, 245)),
            focus: Some(Color::rgb(255, 255, 255)),
            disabled: Some(Color::rgb(235, 235, 235)),
        };
        w.foreground = StateColors {
            base: Color::rgb(48, 48, 48),
            hover: Some(Color::rgb(48, 48, 48)),
            focus: Some(Color::rgb(0, 0, 0)),
            disabled: Some(Color::rgb(64, 64, 64)),
        };
        w.font.size = 18;
        w.decoration = Decoration::BevelInset;
        w.bevel_depth = 2;
        w
    }

    /// A radio widget in the named group, with a label part beside the
    /// selection circle. Exclusivity is enforced by the dialog's
    /// [`RadioGroups`] registry.
    pub fn radio(group: impl Into<String>, text: impl Into<String>) -> Self {
        Self::base(WidgetKind::Radio(Radio::new(group)), text)
    }

    // -----------------------------------------------------------------------
    // Builder methods (construction-time, no dirty tracking)
    // -----------------------------------------------------------------------

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_font_size(mut self, size: i32) -> Self {
        self.font.size = size;
        self
    }

    /// Pin the content width instead of measuring the text.
    pub fn with_width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    /// Pin the content height instead of measuring the text.
    pub fn with_height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }

    /// Uniform margin on all sides.
    pub fn with_margin(mut self, margin: i32) -> Self {
        self.margin = Edges::uniform(margin);
        self
    }

    pub fn with_margin_edges(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    /// Uniform padding on all sides.
    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = Edges::uniform(padding);
        self
    }

    pub fn with_padding_edges(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = decoration;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background.base = color;
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground.base = color;
        self
    }

    /// Attach an explicit value to a radio widget, reported by
    /// [`RadioGroups::selected_value`] instead of the label text. No-op for
    /// other kinds.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        if let WidgetKind::Radio(radio) = &mut self.kind {
            radio.value = Some(value.into());
        }
        self
    }

    // -----------------------------------------------------------------------
    // Getters
    // -----------------------------------------------------------------------

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    /// Widget type name, used in tree dumps.
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            WidgetKind::Label => "Label",
            WidgetKind::Button => "Button",
            WidgetKind::Textbox(_) => "Textbox",
            WidgetKind::Radio(_) => "Radio",
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn align(&self) -> Align {
        self.align
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn margin(&self) -> &Edges {
        &self.margin
    }

    pub fn padding(&self) -> &Edges {
        &self.padding
    }

    pub fn decoration(&self) -> Decoration {
        self.decoration
    }

    pub fn bevel_depth(&self) -> i32 {
        self.bevel_depth
    }

    pub fn corner_radius(&self) -> i32 {
        self.corner_radius
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether this widget participates in Tab traversal: labels and disabled
    /// widgets are never focus targets.
    pub fn is_focusable(&self) -> bool {
        !matches!(self.kind, WidgetKind::Label) && !self.disabled
    }

    /// The radio state, if this widget is a radio.
    pub fn radio_state(&self) -> Option<&Radio> {
        match &self.kind {
            WidgetKind::Radio(r) => Some(r),
            _ => None,
        }
    }

    /// The textbox state, if this widget is a textbox.
    pub fn textbox_state(&self) -> Option<&Textbox> {
        match &self.kind {
            WidgetKind::Textbox(t) => Some(t),
            _ => None,
        }
    }

    /// The foreground color for the widget's current state.
    pub fn current_foreground(&self) -> Color {
        self.foreground.resolve(self.disabled, self.focused, self.hovering)
    }

    /// The background color for the widget's current state.
    pub fn current_background(&self) -> Color {
        self.background.resolve(self.disabled, self.focused, self.hovering)
    }

    // -----------------------------------------------------------------------
    // Setters (dirty-maintaining)
    // -----------------------------------------------------------------------

    pub(crate) fn touch(&mut self) {
        self.dirty = true;
    }

    /// Clear the dirty flag after the widget has been repainted.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Force a repaint without changing any observable value.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text;
            // Keep a textbox cursor inside the new text.
            let len = self.text.chars().count();
            if let WidgetKind::Textbox(tb) = &mut self.kind {
                tb.cursor = tb.cursor.min(len);
            }
            self.touch();
        }
    }

    pub fn set_align(&mut self, align: Align) {
        if self.align != align {
            self.align = align;
            self.touch();
        }
    }

    pub fn set_font_size(&mut self, size: i32) {
        if self.font.size != size {
            self.font.size = size;
            self.touch();
        }
    }

    pub fn set_decoration(&mut self, decoration: Decoration) {
        if self.decoration != decoration {
            self.decoration = decoration;
            self.touch();
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            self.disabled = disabled;
            self.touch();
        }
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        if self.hovering != hovering {
            self.hovering = hovering;
            self.touch();
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.touch();
        }
    }

    /// Assign margins from the 1/2/4-value shorthand.
    pub fn set_margin(&mut self, values: &[i32]) -> Result<()> {
        if self.margin.assign(values)? {
            self.touch();
        }
        Ok(())
    }

    /// Override a single margin side.
    pub fn set_margin_side(&mut self, side: Side, value: i32) {
        if self.margin.set(side, value) {
            self.touch();
        }
    }

    /// Assign padding from the 1/2/4-value shorthand.
    pub fn set_padding(&mut self, values: &[i32]) -> Result<()> {
        if self.padding.assign(values)? {
            self.touch();
        }
        Ok(())
    }

    /// Override a single padding side.
    pub fn set_padding_side(&mut self, side: Side, value: i32) {
        if self.padding.set(side, value) {
            self.touch();
        }
    }

    pub fn set_foreground(&mut self, slot: StateSlot, color: Color) {
        if self.foreground.set(slot, color) {
            self.touch();
        }
    }

    pub fn set_background(&mut self, slot: StateSlot, color: Color) {
        if self.background.set(slot, color) {
            self.touch();
        }
    }

    /// Set a radio widget's selected flag. No-op for other kinds.
    pub(crate) fn set_radio_selected(&mut self, selected: bool) {
        if let WidgetKind::Radio(radio) = &mut self.kind {
            if radio.selected != selected {
                radio.selected = selected;
                self.touch();
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Color resolution
    // -----------------------------------------------------------------------

    #[test]
    fn resolve_priority_disabled_wins() {
        let colors = StateColors {
            base: Color::rgb(1, 1, 1),
            hover: Some(Color::rgb(2, 2, 2)),
            focus: Some(Color::rgb(3, 3, 3)),
            disabled: Some(Color::rgb(4, 4, 4)),
        };
        // All flags set: disabled takes priority.
        assert_eq!(colors.resolve(true, true, true), Color::rgb(4, 4, 4));
        // Focused beats hovering.
        assert_eq!(colors.resolve(false, true, true), Color::rgb(3, 3, 3));
        assert_eq!(colors.resolve(false, false, true), Color::rgb(2, 2, 2));
        assert_eq!(colors.resolve(false, false, false), Color::rgb(1, 1, 1));
    }

    #[test]
    fn resolve_unset_override_falls_back() {
        let colors = StateColors::plain(Color::rgb(9, 9, 9));
        assert_eq!(colors.resolve(true, false, false), Color::rgb(9, 9, 9));
        assert_eq!(colors.resolve(false, true, false), Color::rgb(9, 9, 9));
        assert_eq!(colors.resolve(false, false, true), Color::rgb(9, 9, 9));
    }

    #[test]
    fn current_colors_follow_state() {
        let mut b = Widget::button("OK");
        assert_eq!(b.current_background(), Color::rgb(180, 180, 180));
        b.set_hovering(true);
        assert_eq!(b.current_background(), Color::rgb(180, 180, 50));
        b.set_disabled(true);
        assert_eq!(b.current_background(), Color::rgb(200, 200, 200));
        assert_eq!(b.current_foreground(), Color::rgb(128, 128, 128));
    }

    // -----------------------------------------------------------------------
    // Dirty tracking
    // -----------------------------------------------------------------------

    #[test]
    fn new_widget_is_clean() {
        assert!(!Widget::label("x").is_dirty());
        assert!(!Widget::button("x").is_dirty());
        assert!(!Widget::textbox("x").is_dirty());
    }

    #[test]
    fn observable_change_marks_dirty() {
        let mut w = Widget::label("a");
        w.set_text("b");
        assert!(w.is_dirty());

        let mut w = Widget::label("a");
        w.set_disabled(true);
        assert!(w.is_dirty());

        let mut w = Widget::label("a");
        w.set_decoration(Decoration::Bevel);
        assert!(w.is_dirty());

        let mut w = Widget::label("a");
        w.set_margin(&[1, 2, 3, 4]).unwrap();
        assert!(w.is_dirty());
    }

    #[test]
    fn no_op_write_stays_clean() {
        let mut w = Widget::label("a");
        w.set_text("a");
        w.set_disabled(false);
        w.set_align(Align::Center);
        w.set_margin(&[10]).unwrap();
        assert!(!w.is_dirty());
    }

    #[test]
    fn clearing_dirty_is_not_observable() {
        let mut w = Widget::label("a");
        w.set_text("b");
        w.mark_clean();
        assert!(!w.is_dirty());
    }

    #[test]
    fn bad_margin_shorthand_leaves_widget_clean() {
        let mut w = Widget::label("a");
        assert!(w.set_margin(&[1, 2, 3]).is_err());
        assert!(!w.is_dirty());
        assert_eq!(w.margin().resolved(), (10, 10, 10, 10));
    }

    // -----------------------------------------------------------------------
    // Kind defaults
    // -----------------------------------------------------------------------

    #[test]
    fn label_defaults() {
        let w = Widget::label("hi");
        assert_eq!(w.type_name(), "Label");
        assert_eq!(w.decoration(), Decoration::Solid);
        assert_eq!(w.margin().resolved(), (10, 10, 10, 10));
        assert_eq!(w.padding().resolved(), (8, 8, 8, 8));
        assert!(!w.is_focusable());
    }

    #[test]
    fn button_defaults() {
        let w = Widget::button("OK");
        assert_eq!(w.type_name(), "Button");
        assert_eq!(w.decoration(), Decoration::Bevel);
        assert_eq!(w.padding().resolved(), (16, 16, 16, 16));
        assert!(w.is_focusable());
    }

    #[test]
    fn textbox_defaults() {
        let w = Widget::textbox("abc");
        assert_eq!(w.type_name(), "Textbox");
        assert_eq!(w.decoration(), Decoration::BevelInset);
        assert_eq!(w.bevel_depth(), 2);
        assert_eq!(w.font().size, 18);
        // Cursor starts at the end of the text.
        assert_eq!(w.textbox_state().unwrap().cursor, 3);
    }

    #[test]
    fn radio_defaults() {
        let w = Widget::radio("g", "Option 1");
        assert_eq!(w.type_name(), "Radio");
        let r = w.radio_state().unwrap();
        assert_eq!(r.group, "g");
        assert!(!r.selected);
        assert_eq!(r.diameter, 30);
        assert_eq!(r.dot_radius, 8);
    }

    #[test]
    fn disabled_widget_is_not_focusable() {
        let w = Widget::button("x").with_disabled(true);
        assert!(!w.is_focusable());
    }

    #[test]
    fn set_text_clamps_textbox_cursor() {
        let mut w = Widget::textbox("hello");
        assert_eq!(w.textbox_state().unwrap().cursor, 5);
        w.set_text("hi");
        assert_eq!(w.textbox_state().unwrap().cursor, 2);
    }

    #[test]
    fn state_accessors_match_kind() {
        assert!(Widget::radio("g", "x").radio_state().is_some());
        assert!(Widget::radio("g", "x").textbox_state().is_none());
        assert!(Widget::textbox("x").textbox_state().is_some());
        assert!(Widget::textbox("x").radio_state().is_none());
    }

    #[test]
    fn with_value_on_a_non_radio_is_a_no_op() {
        let w = Widget::button("OK").with_value("ignored");
        assert_eq!(w.text(), "OK");
        assert!(w.radio_state().is_none());
        let w = Widget::radio("g", "x").with_value("v");
        assert_eq!(w.radio_state().unwrap().value.as_deref(), Some("v"));
    }
}
