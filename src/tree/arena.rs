//! The slotmap-backed element arena.

use slotmap::SlotMap;

use crate::error::{Error, Result};
use crate::geometry::{Rect, Side};
use crate::tree::element::{Element, ElementId, ElementKind};
use crate::widget::Widget;

/// Arena of elements plus the root id. The first inserted element becomes the
/// root; a dialog installs its content container there.
#[derive(Default)]
pub struct Tree {
    elements: SlotMap<ElementId, Element>,
    root: Option<ElementId>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<ElementId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // -----------------------------------------------------------------------
    // Insertion
    // -----------------------------------------------------------------------

    pub fn insert(&mut self, element: Element) -> ElementId {
        let id = self.elements.insert(element);
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    pub fn insert_horizontal(&mut self) -> ElementId {
        self.insert(Element::horizontal())
    }

    pub fn insert_vertical(&mut self) -> ElementId {
        self.insert(Element::vertical())
    }

    pub fn insert_grid(&mut self) -> ElementId {
        self.insert(Element::grid())
    }

    pub fn insert_widget(&mut self, widget: Widget) -> ElementId {
        self.insert(Element::widget(widget))
    }

    /// Append a child to a horizontal or vertical container.
    pub fn append(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        match self.elements.get_mut(parent).map(|e| &mut e.kind) {
            Some(ElementKind::Horizontal(data) | ElementKind::Vertical(data)) => {
                data.children.push(child);
                Ok(())
            }
            _ => Err(Error::NotALinear),
        }
    }

    /// Append a row of cells to a grid. Rows may differ in length.
    pub fn append_row(&mut self, grid: ElementId, row: Vec<ElementId>) -> Result<()> {
        match self.elements.get_mut(grid).map(|e| &mut e.kind) {
            Some(ElementKind::Grid(data)) => {
                data.rows.push(row);
                Ok(())
            }
            _ => Err(Error::NotAGrid),
        }
    }

    // -----------------------------------------------------------------------
    // Access
    // -----------------------------------------------------------------------

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// The widget at `id`, if the element exists and is a widget.
    pub fn widget(&self, id: ElementId) -> Option<&Widget> {
        self.elements.get(id).and_then(Element::as_widget)
    }

    pub fn widget_mut(&mut self, id: ElementId) -> Option<&mut Widget> {
        self.elements.get_mut(id).and_then(Element::as_widget_mut)
    }

    pub fn rect(&self, id: ElementId) -> Rect {
        self.elements.get(id).map_or(Rect::EMPTY, |e| e.rect)
    }

    pub fn set_rect(&mut self, id: ElementId, rect: Rect) {
        if let Some(element) = self.elements.get_mut(id) {
            element.rect = rect;
        }
    }

    /// The element's children in layout order. Grid children come row-major;
    /// widgets have none.
    pub fn children(&self, id: ElementId) -> Vec<ElementId> {
        match self.elements.get(id).map(|e| &e.kind) {
            Some(ElementKind::Horizontal(data) | ElementKind::Vertical(data)) => {
                data.children.clone()
            }
            Some(ElementKind::Grid(data)) => data.rows.iter().flatten().copied().collect(),
            _ => Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Derived margins
    // -----------------------------------------------------------------------

    /// The element's effective outer margin on one side.
    ///
    /// Widgets carry their own margins. A container's margin is derived from
    /// its children: along its main axis the first child's leading margin and
    /// the last child's trailing margin, across it the maximum over all
    /// children. A grid reads the outer entries of its measured margin
    /// tables, so it must have been measured first. Empty containers report 0
    /// on every side.
    pub fn margin(&self, id: ElementId, side: Side) -> i32 {
        let Some(element) = self.elements.get(id) else {
            return 0;
        };
        match &element.kind {
            ElementKind::Widget(widget) => widget.margin().get(side),
            ElementKind::Horizontal(data) => match side {
                Side::Left => {
                    data.children.first().map_or(0, |&c| self.margin(c, side))
                }
                Side::Right => {
                    data.children.last().map_or(0, |&c| self.margin(c, side))
                }
                Side::Top | Side::Bottom => self.max_child_margin(&data.children, side),
            },
            ElementKind::Vertical(data) => match side {
                Side::Top => {
                    data.children.first().map_or(0, |&c| self.margin(c, side))
                }
                Side::Bottom => {
                    data.children.last().map_or(0, |&c| self.margin(c, side))
                }
                Side::Left | Side::Right => self.max_child_margin(&data.children, side),
            },
            ElementKind::Grid(data) => {
                let metrics = &data.metrics;
                let outer = |table: &[i32], leading: bool| -> i32 {
                    if leading {
                        table.first().copied().unwrap_or(0)
                    } else {
                        table.last().copied().unwrap_or(0)
                    }
                };
                match side {
                    Side::Left => outer(&metrics.column_margins, true),
                    Side::Right => outer(&metrics.column_margins, false),
                    Side::Top => outer(&metrics.row_margins, true),
                    Side::Bottom => outer(&metrics.row_margins, false),
                }
            }
        }
    }

    fn max_child_margin(&self, children: &[ElementId], side: Side) -> i32 {
        children
            .iter()
            .map(|&c| self.margin(c, side))
            .max()
            .unwrap_or(0)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Edges;

    #[test]
    fn first_insert_becomes_root() {
        let mut tree = Tree::new();
        assert!(tree.root().is_none());
        let a = tree.insert_vertical();
        let _b = tree.insert_widget(Widget::label("x"));
        assert_eq!(tree.root(), Some(a));
    }

    #[test]
    fn append_to_widget_fails() {
        let mut tree = Tree::new();
        let w = tree.insert_widget(Widget::label("x"));
        let child = tree.insert_widget(Widget::label("y"));
        assert!(matches!(tree.append(w, child), Err(Error::NotALinear)));
    }

    #[test]
    fn append_to_grid_fails() {
        let mut tree = Tree::new();
        let g = tree.insert_grid();
        let child = tree.insert_widget(Widget::label("y"));
        assert!(matches!(tree.append(g, child), Err(Error::NotALinear)));
        // Rows are the only way in.
        assert!(tree.append_row(g, vec![child]).is_ok());
    }

    #[test]
    fn append_row_to_linear_fails() {
        let mut tree = Tree::new();
        let v = tree.insert_vertical();
        assert!(matches!(tree.append_row(v, vec![]), Err(Error::NotAGrid)));
    }

    #[test]
    fn grid_children_are_row_major() {
        let mut tree = Tree::new();
        let g = tree.insert_grid();
        let a = tree.insert_widget(Widget::label("a"));
        let b = tree.insert_widget(Widget::label("b"));
        let c = tree.insert_widget(Widget::label("c"));
        tree.append_row(g, vec![a, b]).unwrap();
        tree.append_row(g, vec![c]).unwrap();
        assert_eq!(tree.children(g), vec![a, b, c]);
    }

    #[test]
    fn stale_id_lookups_return_none() {
        let mut tree = Tree::new();
        let id = tree.insert_widget(Widget::label("x"));
        let other = Tree::new();
        assert!(other.get(id).is_none());
        assert!(other.widget(id).is_none());
        assert_eq!(other.rect(id), Rect::EMPTY);
    }

    // -----------------------------------------------------------------------
    // Derived margins
    // -----------------------------------------------------------------------

    fn widget_with_margins(t: i32, r: i32, b: i32, l: i32) -> Widget {
        let mut edges = Edges::uniform(0);
        edges.assign(&[t, r, b, l]).unwrap();
        Widget::label("x").with_margin_edges(edges)
    }

    #[test]
    fn widget_margin_is_its_own() {
        let mut tree = Tree::new();
        let w = tree.insert_widget(widget_with_margins(1, 2, 3, 4));
        assert_eq!(tree.margin(w, Side::Top), 1);
        assert_eq!(tree.margin(w, Side::Right), 2);
        assert_eq!(tree.margin(w, Side::Bottom), 3);
        assert_eq!(tree.margin(w, Side::Left), 4);
    }

    #[test]
    fn vertical_margin_derivation() {
        let mut tree = Tree::new();
        let v = tree.insert_vertical();
        let a = tree.insert_widget(widget_with_margins(5, 2, 9, 7));
        let b = tree.insert_widget(widget_with_margins(1, 6, 3, 4));
        tree.append(v, a).unwrap();
        tree.append(v, b).unwrap();

        // Main axis: first child's top, last child's bottom.
        assert_eq!(tree.margin(v, Side::Top), 5);
        assert_eq!(tree.margin(v, Side::Bottom), 3);
        // Cross axis: max over children.
        assert_eq!(tree.margin(v, Side::Left), 7);
        assert_eq!(tree.margin(v, Side::Right), 6);
    }

    #[test]
    fn horizontal_margin_derivation() {
        let mut tree = Tree::new();
        let h = tree.insert_horizontal();
        let a = tree.insert_widget(widget_with_margins(5, 2, 9, 7));
        let b = tree.insert_widget(widget_with_margins(1, 6, 3, 4));
        tree.append(h, a).unwrap();
        tree.append(h, b).unwrap();

        assert_eq!(tree.margin(h, Side::Left), 7);
        assert_eq!(tree.margin(h, Side::Right), 6);
        assert_eq!(tree.margin(h, Side::Top), 5);
        assert_eq!(tree.margin(h, Side::Bottom), 9);
    }

    #[test]
    fn nested_container_margins_recurse() {
        let mut tree = Tree::new();
        let outer = tree.insert_vertical();
        let inner = tree.insert_horizontal();
        let w = tree.insert_widget(widget_with_margins(5, 6, 7, 8));
        tree.append(outer, inner).unwrap();
        tree.append(inner, w).unwrap();

        assert_eq!(tree.margin(outer, Side::Top), 5);
        assert_eq!(tree.margin(outer, Side::Left), 8);
    }

    #[test]
    fn empty_container_margins_are_zero() {
        let mut tree = Tree::new();
        let v = tree.insert_vertical();
        let g = tree.insert_grid();
        for side in [Side::Top, Side::Right, Side::Bottom, Side::Left] {
            assert_eq!(tree.margin(v, side), 0);
            assert_eq!(tree.margin(g, side), 0);
        }
    }
}
