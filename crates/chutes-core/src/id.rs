//! Strongly-typed identifiers for cells, turns, players, and subscriptions.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A cell on the linear track.
///
/// Cell 0 is the off-board start position; the playable track runs from
/// cell 1 to the board's final cell inclusive. `Cell` is a plain index —
/// range validity is enforced by board construction, not by this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(pub u32);

impl Cell {
    /// The off-board start position shared by every player before their
    /// first move.
    pub const START: Cell = Cell(0);

    /// The cell reached by moving `steps` cells forward.
    ///
    /// Purely arithmetic; the result may lie past the final cell, which
    /// is exactly the case the overshoot rule inspects. Saturates at
    /// `u32::MAX`, which is at or past the final cell of any
    /// representable board — overshoot decisions must therefore compare
    /// the widened sum, not the saturated cell (see
    /// `resolve_move`'s widening).
    pub fn advance(self, steps: u8) -> Cell {
        Cell(self.0.saturating_add(u32::from(steps)))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Cell {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing turn counter.
///
/// Incremented each time the engine resolves one roll, including rolls
/// that end in an overshoot (the turn is still consumed).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TurnId(pub u64);

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TurnId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a player within one engine's roster.
///
/// Assigned sequentially in registration order; `PlayerId(n)` is the
/// n-th registered player and turn order follows these indices
/// cyclically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Counter for unique [`ObserverId`] allocation.
static OBSERVER_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique subscription token returned by `Player::subscribe`.
///
/// Allocated from a monotonic atomic counter via [`ObserverId::next`].
/// Two subscriptions always receive different tokens, even across
/// players and engines, so a token can never unsubscribe someone else's
/// observer after registries are moved around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

impl ObserverId {
    /// Allocate a fresh, unique subscription token.
    ///
    /// Each call returns an ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(OBSERVER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
