//! Chutes: a deterministic turn-based board-race engine.
//!
//! A linear track with positional obstacles (forward shortcuts and
//! backward setbacks), pluggable die strategies, and synchronous
//! per-player observers. This is the top-level facade crate that
//! re-exports the public API from all sub-crates; for most users,
//! adding `chutes` as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use chutes::prelude::*;
//!
//! // A 10-cell track: a ladder from 3 to 9 and a snake from 8 to 2.
//! let board = Board::new(
//!     10,
//!     vec![
//!         Obstacle::new(Cell(3), Cell(9)).unwrap(),
//!         Obstacle::new(Cell(8), Cell(2)).unwrap(),
//!     ],
//! )
//! .unwrap();
//!
//! let players = vec![
//!     Player::new("ada").unwrap(),
//!     Player::new("grace").unwrap(),
//! ];
//!
//! // A seeded die makes the whole game replayable.
//! let mut engine = GameEngine::new(board, players, Box::new(FairDie::seeded(42))).unwrap();
//!
//! while engine.phase() != Phase::GameOver {
//!     let result = engine.roll().unwrap();
//!     if result.won {
//!         println!("{} wins on cell {}", engine.winner().unwrap().name(), result.final_position);
//!     }
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `chutes-core` | IDs, obstacles, events, errors, seam traits |
//! | [`board`] | `chutes-board` | `Board` and `ObstacleTable` |
//! | [`dice`] | `chutes-dice` | Seedable `FairDie` and `LoadedDie` |
//! | [`engine`] | `chutes-engine` | `GameEngine`, `Player`, `resolve_move` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`chutes-core`).
///
/// Contains the obstacle model, game events, error enums, and the two
/// seam traits ([`types::Die`], [`types::Observer`]).
pub use chutes_core as types;

/// Board and obstacle table (`chutes-board`).
///
/// [`board::Board`] validates its configuration at construction and is
/// immutable afterwards.
pub use chutes_board as board;

/// Seedable die strategies (`chutes-dice`).
///
/// [`dice::FairDie`] (uniform `1..=6`) and [`dice::LoadedDie`]
/// (uniform `4..=6`) over a ChaCha8 RNG.
pub use chutes_dice as dice;

/// Turn state machine and move resolution (`chutes-engine`).
///
/// [`engine::GameEngine`] drives the game; [`engine::resolve_move`] is
/// the pure rules kernel.
pub use chutes_engine as engine;

/// Common imports for typical usage.
///
/// ```rust
/// use chutes::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use chutes_core::{
        Cell, Die, EventKind, GameEvent, MoveResult, Observer, ObserverId, Obstacle, ObstacleKind,
        PlayerId, TurnId,
    };

    // Errors
    pub use chutes_core::{ConfigError, RollError, StateError};

    // Board
    pub use chutes_board::{Board, ObstacleTable};

    // Dice
    pub use chutes_dice::{FairDie, LoadedDie};

    // Engine
    pub use chutes_engine::{resolve_move, GameEngine, Phase, Player};
}
