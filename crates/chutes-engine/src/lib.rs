//! Turn state machine and move resolution for the chutes board-race
//! engine.
//!
//! [`GameEngine`] is the primary user-facing API: it owns the board,
//! the roster, and a die strategy, and resolves exactly one move per
//! [`roll()`](GameEngine::roll) call. Move resolution itself is the
//! pure function [`resolve_move`], testable without an engine or a die.
//!
//! # Ownership model
//!
//! `GameEngine` is the sole owner and mutator of player positions. All
//! mutation goes through `roll(&mut self)`, so aliased mutation is
//! impossible from safe code; the `Resolving` phase additionally turns
//! interior-mutability re-entry from an observer callback into an
//! error instead of corrupted turn state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod engine;
mod player;
mod resolver;

pub use engine::{GameEngine, Phase};
pub use player::Player;
pub use resolver::resolve_move;
