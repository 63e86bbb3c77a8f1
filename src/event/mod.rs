//! Input events and their sources.
//!
//! The dialog consumes the host-neutral [`InputEvent`] stream; the
//! translation from crossterm's event types lives in [`input`], and the
//! blocking terminal source plus the scripted test source in [`source`].

mod input;
mod source;

pub use input::{InputEvent, Key, KeyEvent, Modifiers};
pub use source::{EventSource, ScriptedEvents, TermEvents};
