//! The linear track and its construction-time validation.

use crate::table::ObstacleTable;
use chutes_core::{Cell, ConfigError, Obstacle};

/// A fixed-size linear track with positional obstacles.
///
/// Cells run from 1 to `size` inclusive; cell 0 is the off-board start
/// players occupy before their first move. The board and its
/// [`ObstacleTable`] are validated here and immutable afterwards.
///
/// # Validation
///
/// `new` rejects, in order of detection:
/// - `size < 2` ([`ConfigError::BoardTooSmall`]) — a track needs at
///   least one ordinary cell and a final cell;
/// - any obstacle start or destination outside `[1, size]`
///   ([`ConfigError::CellOutOfRange`]);
/// - two obstacles sharing a start ([`ConfigError::DuplicateStart`]);
/// - a destination→start chain that loops back to where it began
///   ([`ConfigError::ChainCycle`]). Such a chain is inert at runtime —
///   resolution applies a single hop — but a configuration whose links
///   cancel each other out is a data-entry mistake, rejected up front.
///
/// # Examples
///
/// ```
/// use chutes_board::Board;
/// use chutes_core::{Cell, Obstacle};
///
/// let board = Board::new(
///     10,
///     vec![
///         Obstacle::new(Cell(3), Cell(9)).unwrap(),
///         Obstacle::new(Cell(8), Cell(2)).unwrap(),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(board.size(), 10);
/// assert_eq!(board.final_cell(), Cell(10));
/// assert_eq!(board.obstacles().resolve(Cell(3)), Cell(9));
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    obstacles: ObstacleTable,
}

impl Board {
    /// Build a board of `size` cells carrying the given obstacles.
    pub fn new(
        size: u32,
        obstacles: impl IntoIterator<Item = Obstacle>,
    ) -> Result<Self, ConfigError> {
        if size < 2 {
            return Err(ConfigError::BoardTooSmall { size });
        }

        // The table range-checks each registration against `size`.
        let mut table = ObstacleTable::new(size);
        for obstacle in obstacles {
            table.add(obstacle)?;
        }
        check_chains(&table)?;

        Ok(Self { obstacles: table })
    }

    /// Number of playable cells.
    pub fn size(&self) -> u32 {
        self.obstacles.size()
    }

    /// The winning cell, `Cell(size)`.
    pub fn final_cell(&self) -> Cell {
        Cell(self.obstacles.size())
    }

    /// The validated obstacle table.
    pub fn obstacles(&self) -> &ObstacleTable {
        &self.obstacles
    }
}

/// Reject destination→start chains that return to their origin.
///
/// Each walk takes at most `len` hops, so validation is O(n²) in the
/// obstacle count — negligible at board-configuration scale.
fn check_chains(table: &ObstacleTable) -> Result<(), ConfigError> {
    for obstacle in table.iter() {
        let origin = obstacle.start();
        let mut cursor = obstacle.destination();
        for _ in 0..table.len() {
            if cursor == origin {
                return Err(ConfigError::ChainCycle { start: origin });
            }
            match table.get(cursor) {
                Some(next) => cursor = next.destination(),
                None => break,
            }
        }
    }
    Ok(())
}
