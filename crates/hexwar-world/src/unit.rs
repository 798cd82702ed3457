//! A single unit standing on the map.

use hexwar_contracts::{AxialCoord, UnitSnapshot};
use serde::{Deserialize, Serialize};

/// A unit's live state. Units are identified by their current coord,
/// not by a synthetic id — the world keeps at most one unit per coord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub coord: AxialCoord,
    pub player: i32,
    pub unit_type: i32,
    pub available_health: i32,
    pub distance_left: i32,
    pub turn_counter: i32,
}

impl Unit {
    #[must_use]
    pub fn new(coord: AxialCoord, player: i32, unit_type: i32, available_health: i32) -> Self {
        Self {
            coord,
            player,
            unit_type,
            available_health,
            distance_left: 0,
            turn_counter: 0,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.available_health > 0
    }

    #[must_use]
    pub fn snapshot(&self) -> UnitSnapshot {
        UnitSnapshot {
            q: self.coord.q,
            r: self.coord.r,
            player: self.player,
            unit_type: self.unit_type,
            available_health: self.available_health,
            distance_left: self.distance_left,
            turn_counter: self.turn_counter,
        }
    }
}
