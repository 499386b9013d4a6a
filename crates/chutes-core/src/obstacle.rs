//! The obstacle model: shortcuts (ladders) and setbacks (snakes).

use crate::error::ConfigError;
use crate::id::Cell;
use std::fmt;

/// Which way an obstacle redirects a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    /// Destination lies ahead of the start (ladder-like).
    Shortcut,
    /// Destination lies behind the start (snake-like).
    Setback,
}

impl fmt::Display for ObstacleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shortcut => write!(f, "shortcut"),
            Self::Setback => write!(f, "setback"),
        }
    }
}

/// A positional redirect on the track.
///
/// Landing on `start` relocates the player to `destination` — forward
/// for a [`Shortcut`](Obstacle::Shortcut), backward for a
/// [`Setback`](Obstacle::Setback). Immutable once added to a board.
/// The variant is determined by the cell ordering, so a constructed
/// obstacle can never claim to be a shortcut that moves backward.
///
/// # Examples
///
/// ```
/// use chutes_core::{Cell, Obstacle, ObstacleKind};
///
/// let ladder = Obstacle::new(Cell(3), Cell(9)).unwrap();
/// assert_eq!(ladder.kind(), ObstacleKind::Shortcut);
///
/// let snake = Obstacle::new(Cell(8), Cell(2)).unwrap();
/// assert_eq!(snake.kind(), ObstacleKind::Setback);
/// assert_eq!(snake.start(), Cell(8));
/// assert_eq!(snake.destination(), Cell(2));
///
/// // A zero-length span is rejected.
/// assert!(Obstacle::new(Cell(5), Cell(5)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Obstacle {
    /// Forward redirect: `destination > start`.
    Shortcut {
        /// The cell that triggers the redirect.
        start: Cell,
        /// Where the player ends up.
        destination: Cell,
    },
    /// Backward redirect: `destination < start`.
    Setback {
        /// The cell that triggers the redirect.
        start: Cell,
        /// Where the player ends up.
        destination: Cell,
    },
}

impl Obstacle {
    /// Build an obstacle from its span, picking the variant from the
    /// cell ordering.
    ///
    /// Returns `Err(ConfigError::DegenerateObstacle)` if
    /// `start == destination`. Range checking against a particular
    /// board size happens at board construction, not here.
    pub fn new(start: Cell, destination: Cell) -> Result<Self, ConfigError> {
        match destination.cmp(&start) {
            std::cmp::Ordering::Greater => Ok(Self::Shortcut { start, destination }),
            std::cmp::Ordering::Less => Ok(Self::Setback { start, destination }),
            std::cmp::Ordering::Equal => Err(ConfigError::DegenerateObstacle { cell: start }),
        }
    }

    /// The cell that triggers this obstacle.
    pub fn start(&self) -> Cell {
        match *self {
            Self::Shortcut { start, .. } | Self::Setback { start, .. } => start,
        }
    }

    /// The cell a player is relocated to.
    pub fn destination(&self) -> Cell {
        match *self {
            Self::Shortcut { destination, .. } | Self::Setback { destination, .. } => destination,
        }
    }

    /// Whether this is a shortcut or a setback.
    pub fn kind(&self) -> ObstacleKind {
        match self {
            Self::Shortcut { .. } => ObstacleKind::Shortcut,
            Self::Setback { .. } => ObstacleKind::Setback,
        }
    }
}

impl fmt::Display for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.kind(), self.start(), self.destination())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn forward_span_is_shortcut() {
        let o = Obstacle::new(Cell(2), Cell(7)).unwrap();
        assert_eq!(o.kind(), ObstacleKind::Shortcut);
        assert_eq!(o.start(), Cell(2));
        assert_eq!(o.destination(), Cell(7));
    }

    #[test]
    fn backward_span_is_setback() {
        let o = Obstacle::new(Cell(7), Cell(2)).unwrap();
        assert_eq!(o.kind(), ObstacleKind::Setback);
    }

    #[test]
    fn zero_span_is_rejected() {
        assert_eq!(
            Obstacle::new(Cell(4), Cell(4)),
            Err(ConfigError::DegenerateObstacle { cell: Cell(4) })
        );
    }

    #[test]
    fn display_names_the_kind() {
        let o = Obstacle::new(Cell(3), Cell(9)).unwrap();
        assert_eq!(o.to_string(), "shortcut 3 -> 9");
    }

    proptest! {
        #[test]
        fn kind_always_matches_ordering(start in 1u32..100, dest in 1u32..100) {
            match Obstacle::new(Cell(start), Cell(dest)) {
                Ok(o) => {
                    prop_assert_eq!(o.start(), Cell(start));
                    prop_assert_eq!(o.destination(), Cell(dest));
                    match o.kind() {
                        ObstacleKind::Shortcut => prop_assert!(dest > start),
                        ObstacleKind::Setback => prop_assert!(dest < start),
                    }
                }
                Err(_) => prop_assert_eq!(start, dest),
            }
        }
    }
}
