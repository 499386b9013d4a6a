//! Board and obstacle table for the chutes board-race engine.
//!
//! A [`Board`] is a fixed-size linear track (cells `1..=size`) owning an
//! [`ObstacleTable`]. Both are validated at construction and immutable
//! afterwards — there is no dynamic obstacle addition during play.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod board;
mod table;

pub use board::Board;
pub use table::ObstacleTable;
