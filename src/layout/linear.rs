//! Measure, grow, and position for horizontal and vertical containers.
//!
//! Both orientations share one implementation parameterized by [`Axis`]: the
//! main axis is summed and scaled, the cross axis is maximized and stretched.

use crate::error::{Error, Result};
use crate::geometry::{Point, Side, Size};
use crate::render::TextMeasurer;
use crate::tree::{ElementId, ElementKind, Tree};

use super::{collapse, move_in_place, resize_in_place};

/// The main axis of a linear container.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    #[inline]
    fn main(self, size: Size) -> i32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    #[inline]
    fn cross(self, size: Size) -> i32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    #[inline]
    fn pack(self, main: i32, cross: i32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    #[inline]
    fn point(self, main: i32, cross: i32) -> Point {
        match self {
            Axis::Horizontal => Point::new(main, cross),
            Axis::Vertical => Point::new(cross, main),
        }
    }

    #[inline]
    fn main_of(self, p: Point) -> i32 {
        match self {
            Axis::Horizontal => p.x,
            Axis::Vertical => p.y,
        }
    }

    #[inline]
    fn cross_of(self, p: Point) -> i32 {
        match self {
            Axis::Horizontal => p.y,
            Axis::Vertical => p.x,
        }
    }

    /// The side a child presents to its predecessor.
    #[inline]
    fn leading(self) -> Side {
        match self {
            Axis::Horizontal => Side::Left,
            Axis::Vertical => Side::Top,
        }
    }

    /// The side a child presents to its successor.
    #[inline]
    fn trailing(self) -> Side {
        match self {
            Axis::Horizontal => Side::Right,
            Axis::Vertical => Side::Bottom,
        }
    }
}

fn set_internal_margins(tree: &mut Tree, id: ElementId, value: i32) {
    if let Some(ElementKind::Horizontal(data) | ElementKind::Vertical(data)) =
        tree.get_mut(id).map(|e| &mut e.kind)
    {
        data.internal_margins = value;
    }
}

fn internal_margins(tree: &Tree, id: ElementId) -> i32 {
    match tree.get(id).map(|e| &e.kind) {
        Some(ElementKind::Horizontal(data) | ElementKind::Vertical(data)) => {
            data.internal_margins
        }
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// Passes
// ---------------------------------------------------------------------------

/// Minimum extent: child main extents plus collapsed inter-child gaps along
/// the main axis, the largest child across it. The gap total is cached for
/// the grow pass.
pub(crate) fn measure(
    tree: &mut Tree,
    id: ElementId,
    axis: Axis,
    measurer: &dyn TextMeasurer,
) -> Result<Size> {
    let children = tree.children(id);
    if children.is_empty() {
        return Err(Error::EmptyContainer);
    }

    let mut main = 0;
    let mut cross = 0;
    for &child in &children {
        let size = super::measure_minimum(tree, child, measurer)?;
        main += axis.main(size);
        cross = cross.max(axis.cross(size));
    }

    let mut internal = 0;
    for pair in children.windows(2) {
        internal += collapse(
            tree.margin(pair[0], axis.trailing()),
            tree.margin(pair[1], axis.leading()),
        );
    }
    main += internal;
    set_internal_margins(tree, id, internal);

    let size = axis.pack(main, cross);
    resize_in_place(tree, id, size);
    Ok(size)
}

/// Distribute `target` to the children: main-axis extents scale by the ratio
/// of target content to measured content, rounded per child; every child
/// stretches to the full cross extent.
pub(crate) fn grow(tree: &mut Tree, id: ElementId, axis: Axis, target: Size) {
    let children = tree.children(id);
    let measured: i32 = children.iter().map(|&c| axis.main(tree.rect(c).size())).sum();
    let content = axis.main(target) - internal_margins(tree, id);

    // Degenerate content cannot be scaled; keep measured sizes.
    let scale = if measured <= 0 { 1.0 } else { f64::from(content) / f64::from(measured) };

    for &child in &children {
        let main = f64::from(axis.main(tree.rect(child).size())) * scale;
        #[allow(clippy::cast_possible_truncation)]
        let main = main.round() as i32;
        super::grow_to_fit(tree, child, axis.pack(main, axis.cross(target)));
    }
    resize_in_place(tree, id, target);
}

/// Place the children along the main axis with collapsed gaps, each at the
/// container's cross origin.
pub(crate) fn position(tree: &mut Tree, id: ElementId, axis: Axis, origin: Point) {
    move_in_place(tree, id, origin);

    let children = tree.children(id);
    let cross = axis.cross_of(origin);
    let mut main = axis.main_of(origin);
    let mut prev: Option<ElementId> = None;

    for &child in &children {
        if let Some(prev) = prev {
            main += collapse(
                tree.margin(prev, axis.trailing()),
                tree.margin(child, axis.leading()),
            );
        }
        super::assign_positions(tree, child, axis.point(main, cross));
        main += axis.main(tree.rect(child).size());
        prev = Some(child);
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::super::tests::FixedMetrics;
    use super::super::{assign_positions, grow_to_fit, measure_minimum};
    use super::*;
    use crate::geometry::Rect;
    use crate::widget::Widget;

    fn fixed(w: i32, h: i32) -> Widget {
        Widget::label("x").with_width(w).with_height(h).with_padding(0)
    }

    /// Vertical [50x20, 40x30], margin 10 everywhere.
    fn two_labels() -> (Tree, ElementId, ElementId, ElementId) {
        let mut tree = Tree::new();
        let root = tree.insert_vertical();
        let a = tree.insert_widget(fixed(50, 20));
        let b = tree.insert_widget(fixed(40, 30));
        tree.append(root, a).unwrap();
        tree.append(root, b).unwrap();
        (tree, root, a, b)
    }

    #[test]
    fn vertical_minimum_collapses_the_gap() {
        let (mut tree, root, ..) = two_labels();
        let size = measure_minimum(&mut tree, root, &FixedMetrics).unwrap();
        // 20 + 30 + one collapsed 10 gap; cross is the widest child.
        assert_eq!(size, Size::new(50, 60));
    }

    #[test]
    fn gap_is_the_larger_facing_margin_not_the_sum() {
        let mut tree = Tree::new();
        let root = tree.insert_vertical();
        let a = tree.insert_widget(fixed(10, 10).with_margin(12));
        let b = tree.insert_widget(fixed(10, 10).with_margin(4));
        tree.append(root, a).unwrap();
        tree.append(root, b).unwrap();
        let size = measure_minimum(&mut tree, root, &FixedMetrics).unwrap();
        assert_eq!(size.height, 10 + 12 + 10);
    }

    #[test]
    fn horizontal_minimum() {
        let mut tree = Tree::new();
        let root = tree.insert_horizontal();
        let a = tree.insert_widget(fixed(20, 10));
        let b = tree.insert_widget(fixed(30, 25));
        tree.append(root, a).unwrap();
        tree.append(root, b).unwrap();
        let size = measure_minimum(&mut tree, root, &FixedMetrics).unwrap();
        assert_eq!(size, Size::new(20 + 30 + 10, 25));
    }

    #[test]
    fn empty_linear_container_fails() {
        let mut tree = Tree::new();
        let root = tree.insert_vertical();
        let err = measure_minimum(&mut tree, root, &FixedMetrics).unwrap_err();
        assert!(matches!(err, Error::EmptyContainer));
    }

    #[test]
    fn nested_empty_container_fails() {
        let (mut tree, root, ..) = two_labels();
        let empty = tree.insert_horizontal();
        tree.append(root, empty).unwrap();
        assert!(measure_minimum(&mut tree, root, &FixedMetrics).is_err());
    }

    // -----------------------------------------------------------------------
    // Growth
    // -----------------------------------------------------------------------

    #[test]
    fn growth_scales_proportionally_and_stretches_across() {
        let (mut tree, root, a, b) = two_labels();
        measure_minimum(&mut tree, root, &FixedMetrics).unwrap();
        grow_to_fit(&mut tree, root, Size::new(50, 80));

        // Content 50 grows to 70: scale 1.4.
        assert_eq!(tree.rect(a).size(), Size::new(50, 28));
        assert_eq!(tree.rect(b).size(), Size::new(50, 42));
        assert_eq!(tree.rect(root).size(), Size::new(50, 80));
    }

    #[test]
    fn growth_to_the_minimum_changes_nothing() {
        let (mut tree, root, a, b) = two_labels();
        let min = measure_minimum(&mut tree, root, &FixedMetrics).unwrap();
        grow_to_fit(&mut tree, root, min);
        assert_eq!(tree.rect(a).size(), Size::new(50, 20));
        assert_eq!(tree.rect(b).size(), Size::new(50, 30));
    }

    #[test]
    fn zero_content_keeps_measured_sizes() {
        let mut tree = Tree::new();
        let root = tree.insert_vertical();
        let a = tree.insert_widget(fixed(0, 0));
        tree.append(root, a).unwrap();
        measure_minimum(&mut tree, root, &FixedMetrics).unwrap();
        grow_to_fit(&mut tree, root, Size::new(100, 100));
        // The child cannot scale from zero; only the cross axis stretches.
        assert_eq!(tree.rect(a).size(), Size::new(100, 0));
    }

    // -----------------------------------------------------------------------
    // Positions
    // -----------------------------------------------------------------------

    #[test]
    fn vertical_positions_with_collapsed_gap() {
        let (mut tree, root, a, b) = two_labels();
        let min = measure_minimum(&mut tree, root, &FixedMetrics).unwrap();
        grow_to_fit(&mut tree, root, min);
        assign_positions(&mut tree, root, Point::new(0, 0));

        assert_eq!(tree.rect(a), Rect::new(0, 0, 50, 20));
        assert_eq!(tree.rect(b), Rect::new(0, 30, 50, 30));
    }

    #[test]
    fn horizontal_positions_from_a_nonzero_origin() {
        let mut tree = Tree::new();
        let root = tree.insert_horizontal();
        let a = tree.insert_widget(fixed(20, 10));
        let b = tree.insert_widget(fixed(30, 10));
        tree.append(root, a).unwrap();
        tree.append(root, b).unwrap();
        let min = measure_minimum(&mut tree, root, &FixedMetrics).unwrap();
        grow_to_fit(&mut tree, root, min);
        assign_positions(&mut tree, root, Point::new(5, 7));

        assert_eq!(tree.rect(a), Rect::new(5, 7, 20, 10));
        assert_eq!(tree.rect(b), Rect::new(5 + 20 + 10, 7, 30, 10));
    }

    #[test]
    fn full_sequence_is_idempotent() {
        let (mut tree, root, ..) = two_labels();
        for _ in 0..2 {
            let min = measure_minimum(&mut tree, root, &FixedMetrics).unwrap();
            grow_to_fit(&mut tree, root, Size::new(min.width + 10, min.height + 20));
            assign_positions(&mut tree, root, Point::new(3, 4));
        }
        let first: Vec<_> = tree.widgets(root).iter().map(|&w| tree.rect(w)).collect();

        let min = measure_minimum(&mut tree, root, &FixedMetrics).unwrap();
        grow_to_fit(&mut tree, root, Size::new(min.width + 10, min.height + 20));
        assign_positions(&mut tree, root, Point::new(3, 4));
        let second: Vec<_> = tree.widgets(root).iter().map(|&w| tree.rect(w)).collect();

        assert_eq!(first, second);
    }
}
