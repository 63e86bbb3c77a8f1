//! dialog-kit: a retained-mode dialog toolkit.
//!
//! A dialog is a tree of containers (horizontal, vertical, grid) over widget
//! leaves (labels, buttons, textboxes, radios). Layout runs in three passes
//! over the tree: measure the minimum bottom-up, grow toward a target
//! top-down, then assign absolute positions with CSS-style collapsed margins.
//! The [`Dialog`](dialog::Dialog) controller owns the tree and runs the event
//! loop: focus traversal, hover tracking, click dispatch, and dirty-flag
//! driven repaints.
//!
//! Rendering and input are pluggable. The crate ships a crossterm terminal
//! host ([`render::term`], [`event::TermEvents`]) and deterministic test
//! doubles ([`testing`]).
//!
//! ```no_run
//! use dialog_kit::dialog::Dialog;
//! use dialog_kit::event::TermEvents;
//! use dialog_kit::render::term::{TermRenderer, TermScreen};
//! use dialog_kit::widget::Widget;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut dialog = Dialog::new("Greeter");
//! let root = dialog.root();
//! dialog.add_widget(root, Widget::label("What's your name?"))?;
//! let name = dialog.add_widget(root, Widget::textbox(""))?;
//! let ok = dialog.add_widget(root, Widget::button("OK"))?;
//! dialog.on_click(ok, |d, _| d.close());
//!
//! let _screen = TermScreen::new()?;
//! dialog.run(&mut TermRenderer::new(), &mut TermEvents::new())?;
//! println!("hello, {}", dialog.widget(name).unwrap().text());
//! # Ok(())
//! # }
//! ```

pub mod dialog;
pub mod error;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod testing;
pub mod tree;
pub mod widget;

pub use dialog::Dialog;
pub use error::{Error, Result};
