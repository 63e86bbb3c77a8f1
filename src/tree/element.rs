//! Element storage: one rect plus kind-specific data per tree node.

use slotmap::new_key_type;

use crate::geometry::Rect;
use crate::widget::Widget;

new_key_type! {
    /// Arena key for one element. Stable for the element's lifetime, and safe
    /// to hold as a weak reference: lookups on a removed id return `None`.
    pub struct ElementId;
}

/// Child list of a horizontal or vertical container.
#[derive(Clone, Debug, Default)]
pub struct LinearData {
    pub children: Vec<ElementId>,
    /// Sum of collapsed inter-child gaps along the main axis, cached by the
    /// measure pass for the grow pass.
    pub internal_margins: i32,
}

/// Per-axis sizing tables computed by the grid measure pass.
///
/// `column_margins[c]` is the collapsed gap before column `c` (index 0 holds
/// the leading margin of the first column); `row_margins` likewise, with one
/// trailing entry for the bottom margin of the last row.
#[derive(Clone, Debug, Default)]
pub struct GridMetrics {
    pub column_widths: Vec<i32>,
    pub row_heights: Vec<i32>,
    pub column_margins: Vec<i32>,
    pub row_margins: Vec<i32>,
}

/// Row-major cell table of a grid container. Rows may be ragged; short rows
/// simply leave their trailing cells empty.
#[derive(Clone, Debug, Default)]
pub struct GridData {
    pub rows: Vec<Vec<ElementId>>,
    pub metrics: GridMetrics,
}

/// What an element is: a container over children, or a widget leaf.
#[derive(Clone, Debug)]
pub enum ElementKind {
    Horizontal(LinearData),
    Vertical(LinearData),
    Grid(GridData),
    Widget(Widget),
}

/// One node of the tree: laid-out rect plus kind data.
#[derive(Clone, Debug)]
pub struct Element {
    /// Assigned by the layout passes; `Rect::EMPTY` until the first pass runs.
    pub rect: Rect,
    pub kind: ElementKind,
}

impl Element {
    pub fn horizontal() -> Self {
        Self { rect: Rect::EMPTY, kind: ElementKind::Horizontal(LinearData::default()) }
    }

    pub fn vertical() -> Self {
        Self { rect: Rect::EMPTY, kind: ElementKind::Vertical(LinearData::default()) }
    }

    pub fn grid() -> Self {
        Self { rect: Rect::EMPTY, kind: ElementKind::Grid(GridData::default()) }
    }

    pub fn widget(widget: Widget) -> Self {
        Self { rect: Rect::EMPTY, kind: ElementKind::Widget(widget) }
    }

    pub fn is_container(&self) -> bool {
        !matches!(self.kind, ElementKind::Widget(_))
    }

    pub fn as_widget(&self) -> Option<&Widget> {
        match &self.kind {
            ElementKind::Widget(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_widget_mut(&mut self) -> Option<&mut Widget> {
        match &mut self.kind {
            ElementKind::Widget(w) => Some(w),
            _ => None,
        }
    }
}
