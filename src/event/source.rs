//! Event sources: where the dialog's input batches come from.

use std::collections::VecDeque;
use std::time::Duration;

use crate::event::InputEvent;

/// Supplies input in batches. One batch is everything available at once, so
/// the dialog can coalesce its repaint to a single present per batch.
pub trait EventSource {
    /// Block until at least one event is available, then drain everything
    /// pending. An empty batch is never returned.
    fn next_batch(&mut self) -> Vec<InputEvent>;
}

// ---------------------------------------------------------------------------
// Terminal source
// ---------------------------------------------------------------------------

/// Blocking crossterm event source.
#[derive(Default)]
pub struct TermEvents;

impl TermEvents {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for TermEvents {
    fn next_batch(&mut self) -> Vec<InputEvent> {
        let mut batch = Vec::new();
        match crossterm::event::read() {
            Ok(event) => batch.push(InputEvent::from(event)),
            // A broken terminal stream cannot recover; tell the dialog to
            // shut down instead of spinning.
            Err(_) => return vec![InputEvent::Quit],
        }
        // Drain whatever else arrived in the same burst.
        while let Ok(true) = crossterm::event::poll(Duration::ZERO) {
            match crossterm::event::read() {
                Ok(event) => batch.push(InputEvent::from(event)),
                Err(_) => break,
            }
        }
        batch
    }
}

// ---------------------------------------------------------------------------
// Scripted source
// ---------------------------------------------------------------------------

/// Replays pre-recorded batches, then reports [`InputEvent::Quit`] forever.
/// Used by tests and the dialog pilot.
#[derive(Default)]
pub struct ScriptedEvents {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedEvents {
    pub fn new(batches: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self { batches: batches.into_iter().collect() }
    }

    /// Queue one more batch at the end of the script.
    pub fn push(&mut self, batch: Vec<InputEvent>) {
        self.batches.push_back(batch);
    }
}

impl EventSource for ScriptedEvents {
    fn next_batch(&mut self) -> Vec<InputEvent> {
        self.batches
            .pop_front()
            .filter(|batch| !batch.is_empty())
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }
}

// ===========================================================================
// Tests
// ===========================================================================
