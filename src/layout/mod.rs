//! The three-pass layout engine.
//!
//! Layout runs over the element tree in three strictly ordered passes:
//!
//! 1. [`measure_minimum`] walks bottom-up and computes each element's minimum
//!    extent from text metrics, padding, and collapsed child margins.
//! 2. [`grow_to_fit`] walks top-down and enlarges elements toward a target,
//!    scaling linear children proportionally along the main axis and
//!    stretching them across it.
//! 3. [`assign_positions`] walks top-down and fills in absolute coordinates,
//!    separating siblings by their collapsed margins.
//!
//! Every pass recomputes from current state and writes only element rects
//! (plus the cached measure tables), so running the full sequence twice with
//! unchanged inputs yields identical rects.

mod grid;
mod linear;

use linear::Axis;
use tracing::trace;

use crate::error::Result;
use crate::geometry::{Point, Rect, Size};
use crate::render::TextMeasurer;
use crate::tree::{ElementId, ElementKind, Tree};
use crate::widget::Widget;

#[derive(Copy, Clone)]
enum Tag {
    Horizontal,
    Vertical,
    Grid,
    Widget,
}

fn tag_of(tree: &Tree, id: ElementId) -> Option<Tag> {
    tree.get(id).map(|e| match e.kind {
        ElementKind::Horizontal(_) => Tag::Horizontal,
        ElementKind::Vertical(_) => Tag::Vertical,
        ElementKind::Grid(_) => Tag::Grid,
        ElementKind::Widget(_) => Tag::Widget,
    })
}

/// The collapsed gap between two adjacent boxes: the larger of the two
/// facing margins, never their sum.
#[inline]
pub(crate) fn collapse(a: i32, b: i32) -> i32 {
    a.max(b)
}

// ---------------------------------------------------------------------------
// Pass 1: measure
// ---------------------------------------------------------------------------

/// Compute the subtree's minimum extent, bottom-up, and store it in each
/// element's rect (positions are left untouched until pass 3).
///
/// Fails with [`crate::Error::EmptyContainer`] for a horizontal or vertical
/// container with no children; grids tolerate missing cells, empty rows, and
/// having no rows at all.
pub fn measure_minimum(
    tree: &mut Tree,
    id: ElementId,
    measurer: &dyn TextMeasurer,
) -> Result<Size> {
    let size = match tag_of(tree, id) {
        Some(Tag::Widget) => measure_widget(tree, id, measurer),
        Some(Tag::Horizontal) => linear::measure(tree, id, Axis::Horizontal, measurer)?,
        Some(Tag::Vertical) => linear::measure(tree, id, Axis::Vertical, measurer)?,
        Some(Tag::Grid) => grid::measure(tree, id, measurer)?,
        None => Size::ZERO,
    };
    trace!(?id, width = size.width, height = size.height, "measured");
    Ok(size)
}

fn measure_widget(tree: &mut Tree, id: ElementId, measurer: &dyn TextMeasurer) -> Size {
    let Some(widget) = tree.widget(id) else {
        return Size::ZERO;
    };
    let size = widget_minimum(widget, measurer);
    resize_in_place(tree, id, size);
    size
}

/// A widget's minimum extent: overridden or measured content plus padding.
/// Radios add the selection circle to the left of the label part.
fn widget_minimum(widget: &Widget, measurer: &dyn TextMeasurer) -> Size {
    let text = measurer.measure_text(widget.font(), widget.text());
    let content_w = widget.width.unwrap_or(text.width);
    let content_h = widget.height.unwrap_or(text.height);
    let pad = widget.padding();

    if let Some(radio) = widget.radio_state() {
        let circle_w = radio.diameter + pad.left();
        let circle_h = radio.diameter + pad.top() + pad.bottom();
        let label_w = content_w + pad.left() + pad.right();
        let label_h = content_h + pad.top() + pad.bottom();
        return Size::new(circle_w + label_w, circle_h.max(label_h));
    }

    Size::new(content_w + pad.width(), content_h + pad.height())
}

// ---------------------------------------------------------------------------
// Pass 2: grow
// ---------------------------------------------------------------------------

/// Enlarge the subtree toward `target`, top-down.
///
/// Linear containers scale each child's main-axis extent by the ratio of
/// target content to measured content (rounded per child) and stretch every
/// child to the full cross extent. Grids keep their measured cell sizes and
/// apply them uniformly per column and row. Widgets adopt the target as-is.
pub fn grow_to_fit(tree: &mut Tree, id: ElementId, target: Size) {
    match tag_of(tree, id) {
        Some(Tag::Widget) => resize_in_place(tree, id, target),
        Some(Tag::Horizontal) => linear::grow(tree, id, Axis::Horizontal, target),
        Some(Tag::Vertical) => linear::grow(tree, id, Axis::Vertical, target),
        Some(Tag::Grid) => grid::grow(tree, id, target),
        None => {}
    }
}

// ---------------------------------------------------------------------------
// Pass 3: position
// ---------------------------------------------------------------------------

/// Assign absolute coordinates, top-down, starting the subtree at `origin`.
/// Sibling gaps are the collapsed facing margins computed during measure.
pub fn assign_positions(tree: &mut Tree, id: ElementId, origin: Point) {
    match tag_of(tree, id) {
        Some(Tag::Widget) => move_in_place(tree, id, origin),
        Some(Tag::Horizontal) => linear::position(tree, id, Axis::Horizontal, origin),
        Some(Tag::Vertical) => linear::position(tree, id, Axis::Vertical, origin),
        Some(Tag::Grid) => grid::position(tree, id, origin),
        None => {}
    }
}

pub(crate) fn resize_in_place(tree: &mut Tree, id: ElementId, size: Size) {
    let rect = tree.rect(id);
    tree.set_rect(id, Rect::new(rect.left, rect.top, size.width, size.height));
}

pub(crate) fn move_in_place(tree: &mut Tree, id: ElementId, origin: Point) {
    let rect = tree.rect(id);
    tree.set_rect(id, Rect::new(origin.x, origin.y, rect.width, rect.height));
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Font;
    use crate::widget::Widget;

    pub(crate) struct FixedMetrics;

    impl TextMeasurer for FixedMetrics {
        fn measure_text(&self, _font: &Font, text: &str) -> Size {
            Size::new(text.chars().count() as i32 * 8, 16)
        }
    }

    #[test]
    fn widget_minimum_is_content_plus_padding() {
        let mut tree = Tree::new();
        // "hi" measures 16 x 16; padding 8 all around.
        let w = tree.insert_widget(Widget::label("hi"));
        let size = measure_minimum(&mut tree, w, &FixedMetrics).unwrap();
        assert_eq!(size, Size::new(32, 32));
        assert_eq!(tree.rect(w).size(), size);
    }

    #[test]
    fn explicit_size_overrides_measurement() {
        let mut tree = Tree::new();
        let w = tree.insert_widget(
            Widget::label("ignored").with_width(50).with_height(20).with_padding(0),
        );
        let size = measure_minimum(&mut tree, w, &FixedMetrics).unwrap();
        assert_eq!(size, Size::new(50, 20));
    }

    #[test]
    fn radio_minimum_includes_circle() {
        let mut tree = Tree::new();
        // Circle: 30 + pad.left 8 = 38 wide, 30 + 16 = 46 tall.
        // Label: "ab" = 16 + 16 pad = 32 wide, 16 + 16 = 32 tall.
        let w = tree.insert_widget(Widget::radio("g", "ab"));
        let size = measure_minimum(&mut tree, w, &FixedMetrics).unwrap();
        assert_eq!(size, Size::new(70, 46));
    }

    #[test]
    fn grow_stretches_widget_to_target() {
        let mut tree = Tree::new();
        let w = tree.insert_widget(Widget::label("hi"));
        measure_minimum(&mut tree, w, &FixedMetrics).unwrap();
        grow_to_fit(&mut tree, w, Size::new(100, 40));
        assert_eq!(tree.rect(w).size(), Size::new(100, 40));
    }

    #[test]
    fn position_moves_without_resizing() {
        let mut tree = Tree::new();
        let w = tree.insert_widget(Widget::label("hi"));
        measure_minimum(&mut tree, w, &FixedMetrics).unwrap();
        assign_positions(&mut tree, w, Point::new(7, 9));
        assert_eq!(tree.rect(w), Rect::new(7, 9, 32, 32));
    }

    #[test]
    fn collapse_takes_the_larger_margin() {
        assert_eq!(collapse(10, 4), 10);
        assert_eq!(collapse(4, 10), 10);
        assert_eq!(collapse(10, 10), 10);
        assert_eq!(collapse(0, 0), 0);
    }

    #[test]
    fn missing_element_measures_zero() {
        let mut tree = Tree::new();
        let id = tree.insert_widget(Widget::label("x"));
        let mut other = Tree::new();
        assert_eq!(measure_minimum(&mut other, id, &FixedMetrics).unwrap(), Size::ZERO);
    }
}
