//! The hex world model (C2): tiles and units keyed by coordinate, plus
//! the per-player unit roster, bounds caching, and the atomic mutation
//! operations the rest of the engine builds on. No I/O, no randomness.

pub mod persistence;
pub mod tile;
pub mod unit;
pub mod world;

pub use persistence::{from_ron, to_ron, WorldDocument};
pub use tile::Tile;
pub use unit::Unit;
pub use world::{Bounds, PixelBounds, World};
