//! Informational world-snapshot format (§6.3): `{ name, tiles, units }`,
//! serialized as RON for interoperability with off-engine tooling. No
//! path or directory convention is mandated — callers decide where the
//! document lives.

use serde::{Deserialize, Serialize};

use crate::{Tile, Unit, World};

/// The serializable shape of a [`World`]: tiles and units as flat
/// lists, rather than the live coord-indexed maps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldDocument {
    pub name: String,
    pub tiles: Vec<Tile>,
    pub units: Vec<Unit>,
}

impl From<&World> for WorldDocument {
    fn from(world: &World) -> Self {
        Self {
            name: world.name.clone(),
            tiles: world.tiles().copied().collect(),
            units: world.units().copied().collect(),
        }
    }
}

impl From<WorldDocument> for World {
    fn from(doc: WorldDocument) -> Self {
        let mut world = World::new(doc.name);
        for tile in doc.tiles {
            world.add_tile(tile);
        }
        for unit in doc.units {
            world.add_unit(unit);
        }
        world
    }
}

/// Serializes `world` to the RON world-snapshot format.
///
/// # Errors
///
/// Returns a [`ron::Error`] if serialization fails (never expected for
/// this document shape, but RON's encoder is fallible).
pub fn to_ron(world: &World) -> Result<String, ron::Error> {
    ron::ser::to_string_pretty(&WorldDocument::from(world), ron::ser::PrettyConfig::default())
}

/// Parses a world previously written by [`to_ron`]. Rebuilds the coord
/// indices and marks the bounds cache dirty, per §6.3.
///
/// # Errors
///
/// Returns a [`ron::error::SpannedError`] if `text` is not a valid
/// world-snapshot document.
pub fn from_ron(text: &str) -> Result<World, ron::error::SpannedError> {
    let doc: WorldDocument = ron::from_str(text)?;
    Ok(World::from(doc))
}
