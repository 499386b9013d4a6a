//! Game events and per-move results.

use crate::id::{Cell, PlayerId, TurnId};
use crate::obstacle::Obstacle;

/// What a turn amounted to, from the observer's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// The player advanced to the rolled cell.
    Moved,
    /// The roll overshot the final cell; the player stayed put.
    Blocked,
    /// The player landed on an obstacle start and was redirected.
    Redirected,
    /// The player reached the final cell. Emitted after the movement
    /// event of the winning turn.
    Won,
}

/// The outcome of resolving one roll.
///
/// Pure data, produced by the move resolver before any position is
/// committed. Transient — emitted once per turn and not persisted.
///
/// # Examples
///
/// ```
/// use chutes_core::{Cell, MoveResult};
///
/// // An overshoot: the raw target lies past the final cell, so the
/// // final position equals the starting position.
/// let result = MoveResult {
///     raw_target: Cell(15),
///     final_position: Cell(9),
///     obstacle_applied: None,
///     won: false,
/// };
/// assert!(!result.won);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    /// `position + roll`, before the overshoot rule or any obstacle.
    pub raw_target: Cell,
    /// Where the player actually ends up.
    pub final_position: Cell,
    /// The obstacle that redirected the player, if any.
    pub obstacle_applied: Option<Obstacle>,
    /// Whether `final_position` is the board's final cell.
    pub won: bool,
}

impl MoveResult {
    /// Whether the move was forfeited under the overshoot rule.
    ///
    /// An in-range landing either keeps `final_position == raw_target`
    /// (no obstacle) or records the obstacle that moved it, so a bare
    /// mismatch between the two can only mean the player stayed put.
    /// This stays correct even when `raw_target` saturated at the cell
    /// ceiling, where a `raw_target > size` comparison would lie.
    pub fn overshot(&self) -> bool {
        self.obstacle_applied.is_none() && self.final_position != self.raw_target
    }
}

/// Immutable snapshot delivered to observers after a turn resolves.
///
/// Observers receive a shared reference and must not attempt to drive
/// the engine from inside the callback; the engine surfaces such
/// re-entry as an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEvent {
    /// How the turn ended.
    pub kind: EventKind,
    /// The turn this event belongs to (shared by the movement and
    /// `Won` events of a winning turn).
    pub turn: TurnId,
    /// Roster index of the player that rolled.
    pub player: PlayerId,
    /// Name of the player that rolled.
    pub player_name: String,
    /// The die value drawn for this turn.
    pub rolled: u8,
    /// Position before the move.
    pub from: Cell,
    /// Position after the move (equals `from` when blocked).
    pub to: Cell,
    /// The obstacle that redirected the player, if any.
    pub obstacle_applied: Option<Obstacle>,
    /// Whether this turn won the game.
    pub won: bool,
}
