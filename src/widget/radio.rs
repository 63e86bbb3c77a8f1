//! Radio widget state and the per-dialog group registry.

use std::collections::HashMap;

use crate::render::Color;
use crate::tree::{ElementId, Tree};

/// Kind-specific state of a radio widget.
///
/// The selection circle is drawn to the left of the label text; `diameter`
/// and `dot_radius` size it, in the renderer's units.
#[derive(Clone, Debug, PartialEq)]
pub struct Radio {
    pub group: String,
    pub selected: bool,
    /// Reported by [`RadioGroups::selected_value`]; falls back to the label
    /// text when unset.
    pub value: Option<String>,
    pub diameter: i32,
    pub dot_radius: i32,
    pub dot_color: Color,
}

impl Radio {
    pub(crate) fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            selected: false,
            value: None,
            diameter: 30,
            dot_radius: 8,
            dot_color: Color::rgb(160, 160, 160),
        }
    }
}

// ---------------------------------------------------------------------------
// Group registry
// ---------------------------------------------------------------------------

/// Dialog-owned registry of radio groups.
///
/// Membership is scoped to one dialog, so two dialogs may reuse a group name
/// without interfering. Within a group, members are kept in insertion order
/// and at most one is selected at a time.
#[derive(Default)]
pub struct RadioGroups {
    groups: HashMap<String, Vec<ElementId>>,
}

impl RadioGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a radio widget as a member of its group.
    pub fn register(&mut self, group: impl Into<String>, id: ElementId) {
        self.groups.entry(group.into()).or_default().push(id);
    }

    /// The members of a group, in insertion order.
    pub fn members(&self, group: &str) -> &[ElementId] {
        self.groups.get(group).map_or(&[], Vec::as_slice)
    }

    /// Select one member, clearing every other member of the same group.
    ///
    /// Widgets whose selected flag actually flips are marked dirty by their
    /// own setter; an already-selected widget stays clean.
    pub fn select(&self, tree: &mut Tree, id: ElementId) {
        let Some(group) = tree
            .widget(id)
            .and_then(|w| w.radio_state())
            .map(|r| r.group.clone())
        else {
            return;
        };
        for &member in self.members(&group) {
            if let Some(widget) = tree.widget_mut(member) {
                widget.set_radio_selected(member == id);
            }
        }
    }

    /// The currently selected member of a group, if any.
    pub fn selected_member(&self, tree: &Tree, group: &str) -> Option<ElementId> {
        self.members(group).iter().copied().find(|&id| {
            tree.widget(id)
                .and_then(|w| w.radio_state())
                .is_some_and(|r| r.selected)
        })
    }

    /// The selected member's value: its explicit value if set, otherwise its
    /// label text. `None` when nothing is selected.
    pub fn selected_value(&self, tree: &Tree, group: &str) -> Option<String> {
        let id = self.selected_member(tree, group)?;
        let widget = tree.widget(id)?;
        let radio = widget.radio_state()?;
        Some(radio.value.clone().unwrap_or_else(|| widget.text().to_owned()))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Widget;

    fn group_of_three() -> (Tree, RadioGroups, [ElementId; 3]) {
        let mut tree = Tree::new();
        let root = tree.insert_vertical();
        let mut groups = RadioGroups::new();
        let mut ids = Vec::new();
        for label in ["Red", "Green", "Blue"] {
            let id = tree.insert_widget(Widget::radio("color", label));
            tree.append(root, id).unwrap();
            groups.register("color", id);
            ids.push(id);
        }
        (tree, groups, [ids[0], ids[1], ids[2]])
    }

    #[test]
    fn select_clears_siblings() {
        let (mut tree, groups, [a, b, c]) = group_of_three();
        groups.select(&mut tree, a);
        groups.select(&mut tree, b);
        assert!(!tree.widget(a).unwrap().radio_state().unwrap().selected);
        assert!(tree.widget(b).unwrap().radio_state().unwrap().selected);
        assert!(!tree.widget(c).unwrap().radio_state().unwrap().selected);
        assert_eq!(groups.selected_member(&tree, "color"), Some(b));
    }

    #[test]
    fn selection_marks_changed_widgets_dirty() {
        let (mut tree, groups, [a, b, _]) = group_of_three();
        groups.select(&mut tree, a);
        tree.widget_mut(a).unwrap().mark_clean();

        groups.select(&mut tree, b);
        assert!(tree.widget(a).unwrap().is_dirty());
        assert!(tree.widget(b).unwrap().is_dirty());
    }

    #[test]
    fn reselecting_is_a_no_op() {
        let (mut tree, groups, [a, _, _]) = group_of_three();
        groups.select(&mut tree, a);
        tree.widget_mut(a).unwrap().mark_clean();
        groups.select(&mut tree, a);
        assert!(!tree.widget(a).unwrap().is_dirty());
    }

    #[test]
    fn selected_value_prefers_explicit_value() {
        let mut tree = Tree::new();
        let root = tree.insert_vertical();
        let mut groups = RadioGroups::new();
        let a = tree.insert_widget(Widget::radio("g", "Large print").with_value("lg"));
        let b = tree.insert_widget(Widget::radio("g", "Small print"));
        tree.append(root, a).unwrap();
        tree.append(root, b).unwrap();
        groups.register("g", a);
        groups.register("g", b);

        groups.select(&mut tree, a);
        assert_eq!(groups.selected_value(&tree, "g"), Some("lg".to_owned()));
        groups.select(&mut tree, b);
        assert_eq!(groups.selected_value(&tree, "g"), Some("Small print".to_owned()));
    }

    #[test]
    fn empty_group_has_no_selection() {
        let tree = Tree::new();
        let groups = RadioGroups::new();
        assert!(groups.members("nope").is_empty());
        assert_eq!(groups.selected_member(&tree, "nope"), None);
        assert_eq!(groups.selected_value(&tree, "nope"), None);
    }
}
