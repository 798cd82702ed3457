//! Shared wire-format and coordinate types for the hex engine.
//!
//! Everything in this crate is plain data and pure math — no world
//! state, no I/O. Other crates build behavior on top of these shapes.

pub mod coord;
pub mod error;
pub mod moves;

pub use coord::AxialCoord;
pub use error::EngineError;
pub use moves::{GameMove, GameMoveKind, GameMoveResult, UnitSnapshot, WorldChange};
