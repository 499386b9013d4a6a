//! Test utilities and mock types for chutes development.
//!
//! Provides mock implementations of the two seam traits: a
//! [`ScriptedDie`] that replays a fixed roll sequence and a
//! [`RecordingObserver`] that captures events into a log shared with
//! the test.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use chutes_core::{Die, GameEvent, Observer};

/// A die that replays a scripted roll sequence.
///
/// Panics when the script runs out — a test asking for more rolls than
/// it scripted is a test bug, not a runtime condition.
#[derive(Clone, Debug)]
pub struct ScriptedDie {
    rolls: VecDeque<u8>,
}

impl ScriptedDie {
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Rolls remaining in the script.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Die for ScriptedDie {
    fn roll(&mut self) -> u8 {
        self.rolls
            .pop_front()
            .expect("ScriptedDie exhausted: script more rolls for this test")
    }
}

/// Shared handle to the events a [`RecordingObserver`] has captured.
pub type EventLog = Rc<RefCell<Vec<GameEvent>>>;

/// An observer that appends every event to a shared log.
///
/// The observer itself is boxed away inside a player's registry, so the
/// test keeps a cloned [`EventLog`] handle to inspect what arrived.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    log: EventLog,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle to the captured events, valid after the observer has
    /// been handed to a player.
    pub fn log(&self) -> EventLog {
        Rc::clone(&self.log)
    }
}

impl Observer for RecordingObserver {
    fn on_event(&mut self, event: &GameEvent) {
        self.log.borrow_mut().push(event.clone());
    }
}
