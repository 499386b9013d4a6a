//! Cell-keyed obstacle lookup.

use chutes_core::{Cell, ConfigError, Obstacle};
use indexmap::IndexMap;

/// Maps a start cell to the obstacle registered there, for a track of
/// a known size.
///
/// Backed by an `IndexMap` so lookup is O(1) while iteration follows
/// registration order, keeping configuration reports deterministic.
/// `start` is a unique key: registering a second obstacle on an
/// occupied cell fails instead of silently shadowing the first. The
/// table carries the track size so [`add`](ObstacleTable::add) can
/// reject out-of-range cells itself, standalone use included.
///
/// Resolution applies **exactly once** per arrival. The destination
/// cell is never re-checked for a further obstacle in the same turn,
/// so a configuration that places one obstacle's destination on
/// another's start simply leaves the second obstacle inert for that
/// arrival. This keeps resolution bounded and deterministic.
///
/// # Examples
///
/// ```
/// use chutes_board::ObstacleTable;
/// use chutes_core::{Cell, Obstacle};
///
/// let mut table = ObstacleTable::new(10);
/// table.add(Obstacle::new(Cell(3), Cell(9)).unwrap()).unwrap();
///
/// assert_eq!(table.resolve(Cell(3)), Cell(9)); // redirected
/// assert_eq!(table.resolve(Cell(5)), Cell(5)); // untouched
///
/// // Off-track cells are rejected at registration.
/// assert!(table.add(Obstacle::new(Cell(4), Cell(11)).unwrap()).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ObstacleTable {
    size: u32,
    by_start: IndexMap<Cell, Obstacle>,
}

impl ObstacleTable {
    /// Create an empty table for a track of `size` cells.
    ///
    /// Minimum-size enforcement lives on `Board::new`, which owns the
    /// board-level configuration rules.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            by_start: IndexMap::new(),
        }
    }

    /// The track size this table validates against.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Register an obstacle under its start cell.
    ///
    /// Returns `Err(ConfigError::CellOutOfRange)` if the start or the
    /// destination lies outside `[1, size]`, and
    /// `Err(ConfigError::DuplicateStart)` if the start cell is already
    /// occupied.
    pub fn add(&mut self, obstacle: Obstacle) -> Result<(), ConfigError> {
        self.check_in_range(obstacle.start())?;
        self.check_in_range(obstacle.destination())?;
        let start = obstacle.start();
        if self.by_start.contains_key(&start) {
            return Err(ConfigError::DuplicateStart { cell: start });
        }
        self.by_start.insert(start, obstacle);
        Ok(())
    }

    /// Resolve a landing cell through at most one obstacle.
    ///
    /// Returns the obstacle's destination if `cell` is a registered
    /// start, otherwise `cell` unchanged.
    pub fn resolve(&self, cell: Cell) -> Cell {
        match self.by_start.get(&cell) {
            Some(obstacle) => obstacle.destination(),
            None => cell,
        }
    }

    /// The obstacle registered at `cell`, if any.
    pub fn get(&self, cell: Cell) -> Option<&Obstacle> {
        self.by_start.get(&cell)
    }

    /// Number of registered obstacles.
    pub fn len(&self) -> usize {
        self.by_start.len()
    }

    /// Whether the table has no obstacles.
    pub fn is_empty(&self) -> bool {
        self.by_start.is_empty()
    }

    /// Iterate obstacles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.by_start.values()
    }

    fn check_in_range(&self, cell: Cell) -> Result<(), ConfigError> {
        if cell.0 < 1 || cell.0 > self.size {
            return Err(ConfigError::CellOutOfRange {
                cell,
                size: self.size,
            });
        }
        Ok(())
    }
}
