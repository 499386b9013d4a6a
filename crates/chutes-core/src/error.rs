//! Error types for the chutes board-race engine.
//!
//! One enum per failure surface: board/obstacle construction
//! ([`ConfigError`]), engine construction ([`StateError`]), and turn
//! resolution ([`RollError`]). Construction errors are never raised
//! during play; `RollError` is the only runtime surface and carries no
//! partial-state risk because positions are committed only after a
//! resolution completes.

use crate::id::Cell;
use std::error::Error;
use std::fmt;

/// Errors detected while building a board or its obstacle table.
///
/// Raised at construction time, never during play, and never retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The track needs at least a start and a final cell.
    BoardTooSmall {
        /// The configured size that was too small.
        size: u32,
    },
    /// An obstacle references a cell outside `[1, size]`.
    CellOutOfRange {
        /// The offending cell.
        cell: Cell,
        /// The board size defining the valid range.
        size: u32,
    },
    /// An obstacle's start equals its destination.
    DegenerateObstacle {
        /// The degenerate cell.
        cell: Cell,
    },
    /// Two obstacles share the same start cell.
    DuplicateStart {
        /// The contested start cell.
        cell: Cell,
    },
    /// Following destination-to-start links from an obstacle returns to
    /// its own start, so the chain would trivially cancel movement.
    /// Inert at runtime (only one redirect ever applies per move) but
    /// rejected as a data-entry mistake.
    ChainCycle {
        /// The start cell of the obstacle whose chain loops.
        start: Cell,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoardTooSmall { size } => {
                write!(f, "board size {size} is below the minimum of 2")
            }
            Self::CellOutOfRange { cell, size } => {
                write!(f, "cell {cell} outside the track [1, {size}]")
            }
            Self::DegenerateObstacle { cell } => {
                write!(f, "obstacle at cell {cell} has zero length")
            }
            Self::DuplicateStart { cell } => {
                write!(f, "cell {cell} already has an obstacle")
            }
            Self::ChainCycle { start } => {
                write!(f, "obstacle chain starting at cell {start} loops back on itself")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors detected while assembling an engine's roster.
///
/// Fatal to that engine instance; detected at start, not retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateError {
    /// No players were registered.
    EmptyRoster,
    /// A player was created with an empty name.
    EmptyPlayerName,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRoster => write!(f, "a game needs at least one player"),
            Self::EmptyPlayerName => write!(f, "player name must be non-empty"),
        }
    }
}

impl Error for StateError {}

/// Errors returned by `GameEngine::roll()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollError {
    /// The game has concluded; no further rolls are accepted.
    /// Recoverable by the caller — simply stop playing.
    GameOver,
    /// An observer callback re-entered `roll()` on the same engine
    /// mid-notification. A caller contract violation, surfaced
    /// immediately.
    Reentrant,
}

impl fmt::Display for RollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "game is over"),
            Self::Reentrant => write!(f, "roll() re-entered from an observer callback"),
        }
    }
}

impl Error for RollError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_cells() {
        let e = ConfigError::CellOutOfRange {
            cell: Cell(12),
            size: 10,
        };
        assert_eq!(e.to_string(), "cell 12 outside the track [1, 10]");
        assert_eq!(
            ConfigError::DuplicateStart { cell: Cell(3) }.to_string(),
            "cell 3 already has an obstacle"
        );
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<ConfigError>();
        assert_error::<StateError>();
        assert_error::<RollError>();
    }
}
