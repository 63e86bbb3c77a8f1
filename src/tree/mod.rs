//! The element tree: an arena of containers and widgets.
//!
//! Elements live in a slotmap keyed by [`ElementId`]; parents own their
//! children as id lists inside their kind data. Ids double as cheap weak
//! references for the dialog's hover, focus, and pressed tracking.

mod arena;
mod element;
mod query;

pub use arena::Tree;
pub use element::{Element, ElementId, ElementKind, GridData, GridMetrics, LinearData};
