//! Seam traits: die strategies and event observers.

use crate::event::GameEvent;

/// A source of die values.
///
/// Implementations define their own closed range (a fair die covers
/// `1..=6`, a loaded die might cover `4..=6`) and must be infallible:
/// drawing a value only advances internal RNG state. Seeded
/// implementations must produce identical sequences for identical
/// seeds — the engine's determinism guarantee rests on this.
pub trait Die {
    /// Draw the next die value.
    fn roll(&mut self) -> u8;
}

/// An external sink for game events (UI, log, test harness).
///
/// Registered on a player and invoked synchronously in registration
/// order after each of that player's turns resolves. The event is an
/// immutable snapshot; an observer must not drive the engine from
/// inside the callback — the engine rejects such re-entry rather than
/// corrupting turn state.
pub trait Observer {
    /// Handle one event.
    fn on_event(&mut self, event: &GameEvent);
}
