//! Read-only tree queries: widget iteration, hit testing, focus order, and
//! the debug dump.

use std::fmt::Write as _;

use crate::geometry::Point;
use crate::tree::{ElementId, ElementKind, Tree};

impl Tree {
    /// All widget ids under `id`, depth-first in child order. This is the
    /// canonical traversal order used for focus and repaint scans.
    pub fn widgets(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.collect_widgets(id, &mut out);
        out
    }

    fn collect_widgets(&self, id: ElementId, out: &mut Vec<ElementId>) {
        let Some(element) = self.get(id) else {
            return;
        };
        if element.as_widget().is_some() {
            out.push(id);
            return;
        }
        for child in self.children(id) {
            self.collect_widgets(child, out);
        }
    }

    /// The widget under `point`, searching depth-first under `id`.
    ///
    /// The first child whose rect contains the point claims it: the search
    /// descends there and returns that subtree's answer even when it is
    /// `None`, so a point inside a container but in no widget hits nothing.
    pub fn widget_at(&self, id: ElementId, point: Point) -> Option<ElementId> {
        let element = self.get(id)?;
        if element.as_widget().is_some() {
            return element.rect.contains(point).then_some(id);
        }
        for child in self.children(id) {
            if self.rect(child).contains(point) {
                return self.widget_at(child, point);
            }
        }
        None
    }

    // -----------------------------------------------------------------------
    // Focus order
    // -----------------------------------------------------------------------

    /// Widgets that can take focus, in traversal order.
    pub fn focusable_widgets(&self, root: ElementId) -> Vec<ElementId> {
        self.widgets(root)
            .into_iter()
            .filter(|&id| self.widget(id).is_some_and(|w| w.is_focusable()))
            .collect()
    }

    /// The focus target after `current`, wrapping to the first.
    pub fn focusable_after(&self, root: ElementId, current: ElementId) -> Option<ElementId> {
        let order = self.focusable_widgets(root);
        let at = order.iter().position(|&id| id == current)?;
        Some(order[(at + 1) % order.len()])
    }

    /// The focus target before `current`, wrapping to the last.
    pub fn focusable_before(&self, root: ElementId, current: ElementId) -> Option<ElementId> {
        let order = self.focusable_widgets(root);
        let at = order.iter().position(|&id| id == current)?;
        Some(order[(at + order.len() - 1) % order.len()])
    }

    pub fn first_focusable(&self, root: ElementId) -> Option<ElementId> {
        self.focusable_widgets(root).first().copied()
    }

    pub fn last_focusable(&self, root: ElementId) -> Option<ElementId> {
        self.focusable_widgets(root).last().copied()
    }

    // -----------------------------------------------------------------------
    // Dump
    // -----------------------------------------------------------------------

    /// Render the subtree as an indented text outline, one element per line.
    /// Useful in tests and debug logs.
    pub fn dump(&self, id: ElementId) -> String {
        let mut out = String::new();
        self.dump_into(id, 0, &mut out);
        // Drop the final newline so snapshots read naturally.
        if out.ends_with('\n') {
            out.pop();
        }
        out
    }

    fn dump_into(&self, id: ElementId, depth: usize, out: &mut String) {
        let Some(element) = self.get(id) else {
            return;
        };
        let pad = "  ".repeat(depth);
        let r = element.rect;
        match &element.kind {
            ElementKind::Widget(w) => {
                let _ = writeln!(
                    out,
                    "{pad}{} {:?} ({} x {}) @ ({}, {})",
                    w.type_name(),
                    w.text(),
                    r.width,
                    r.height,
                    r.left,
                    r.top
                );
            }
            ElementKind::Horizontal(data) => {
                let _ = writeln!(
                    out,
                    "{pad}Horizontal ({} x {}) @ ({}, {})",
                    r.width, r.height, r.left, r.top
                );
                for &child in &data.children {
                    self.dump_into(child, depth + 1, out);
                }
            }
            ElementKind::Vertical(data) => {
                let _ = writeln!(
                    out,
                    "{pad}Vertical ({} x {}) @ ({}, {})",
                    r.width, r.height, r.left, r.top
                );
                for &child in &data.children {
                    self.dump_into(child, depth + 1, out);
                }
            }
            ElementKind::Grid(data) => {
                let _ = writeln!(
                    out,
                    "{pad}Grid ({} x {}) @ ({}, {})",
                    r.width, r.height, r.left, r.top
                );
                for row in &data.rows {
                    let _ = writeln!(out, "{pad}  row:");
                    for &cell in row {
                        self.dump_into(cell, depth + 2, out);
                    }
                }
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
