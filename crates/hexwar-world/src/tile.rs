//! A single map tile.

use hexwar_contracts::AxialCoord;
use serde::{Deserialize, Serialize};

/// One hex of terrain. `tile_type` indexes into the rules catalog's
/// terrain table; `player` is the owning player for capturable terrain
/// (cities, bases) or `0` for neutral terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub coord: AxialCoord,
    pub tile_type: i32,
    pub player: i32,
}

impl Tile {
    #[must_use]
    pub fn new(coord: AxialCoord, tile_type: i32, player: i32) -> Self {
        Self {
            coord,
            tile_type,
            player,
        }
    }

    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.player > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_tile_is_unowned() {
        let tile = Tile::new(AxialCoord::new(0, 0), 1, 0);
        assert!(!tile.is_owned());
    }

    #[test]
    fn captured_tile_is_owned() {
        let tile = Tile::new(AxialCoord::new(0, 0), 1, 2);
        assert!(tile.is_owned());
    }
}
