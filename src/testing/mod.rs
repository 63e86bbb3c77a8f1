//! Deterministic test doubles: a recording renderer with fixed text metrics
//! and a pilot that drives a dialog without a terminal.

mod pilot;
mod renderer;

pub use pilot::Pilot;
pub use renderer::TestRenderer;
