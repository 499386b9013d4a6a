//! Core types and traits for the chutes board-race engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace: cell and
//! turn IDs, the obstacle model, game events, error types, and the two
//! seam traits ([`Die`] and [`Observer`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod event;
pub mod id;
pub mod obstacle;
pub mod traits;

pub use error::{ConfigError, RollError, StateError};
pub use event::{EventKind, GameEvent, MoveResult};
pub use id::{Cell, ObserverId, PlayerId, TurnId};
pub use obstacle::{Obstacle, ObstacleKind};
pub use traits::{Die, Observer};
