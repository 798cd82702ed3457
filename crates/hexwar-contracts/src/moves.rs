//! Tagged-union wire format for moves and world changes (§6.2, C8).
//!
//! A [`GameMove`] carries a player and exactly one variant payload. A
//! [`WorldChange`] is a tagged variant describing one mutation already
//! applied to the world. These are plain data — dispatch lives in
//! `hexwar-move-processor`.

use serde::{Deserialize, Serialize};

use crate::coord::AxialCoord;


/// A unit snapshot as carried in change payloads: `{q, r, player,
/// unit_type, available_health, distance_left, turn_counter}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSnapshot {
    pub q: i32,
    pub r: i32,
    pub player: i32,
    pub unit_type: i32,
    pub available_health: i32,
    pub distance_left: i32,
    pub turn_counter: i32,
}

impl UnitSnapshot {
    #[must_use]
    pub fn coord(&self) -> AxialCoord {
        AxialCoord::new(self.q, self.r)
    }
}

/// The variant payload of a [`GameMove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMoveKind {
    MoveUnit {
        from_q: i32,
        from_r: i32,
        to_q: i32,
        to_r: i32,
    },
    AttackUnit {
        attacker_q: i32,
        attacker_r: i32,
        defender_q: i32,
        defender_r: i32,
    },
    EndTurn,
}

/// A single player-submitted move. Every move carries the acting
/// player and exactly one [`GameMoveKind`] payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMove {
    pub player: i32,
    pub kind: GameMoveKind,
}

impl GameMove {
    #[must_use]
    pub fn move_unit(player: i32, from: AxialCoord, to: AxialCoord) -> Self {
        Self {
            player,
            kind: GameMoveKind::MoveUnit {
                from_q: from.q,
                from_r: from.r,
                to_q: to.q,
                to_r: to.r,
            },
        }
    }

    #[must_use]
    pub fn attack_unit(player: i32, attacker: AxialCoord, defender: AxialCoord) -> Self {
        Self {
            player,
            kind: GameMoveKind::AttackUnit {
                attacker_q: attacker.q,
                attacker_r: attacker.r,
                defender_q: defender.q,
                defender_r: defender.r,
            },
        }
    }

    #[must_use]
    pub fn end_turn(player: i32) -> Self {
        Self {
            player,
            kind: GameMoveKind::EndTurn,
        }
    }
}

/// A single mutation already applied to the world, in emission order
/// per move type (§4.4).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldChange {
    UnitMoved {
        previous_unit: UnitSnapshot,
        updated_unit: UnitSnapshot,
    },
    UnitDamaged {
        previous_unit: UnitSnapshot,
        updated_unit: UnitSnapshot,
    },
    UnitKilled {
        previous_unit: UnitSnapshot,
    },
    PlayerChanged {
        previous_player: i32,
        new_player: i32,
        previous_turn: i32,
        new_turn: i32,
        reset_units: Vec<UnitSnapshot>,
    },
}

/// The result of processing one [`GameMove`]. `is_permanent` is `true`
/// for attacks (combat is irreversible once committed) and `false` for
/// movement and end-turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameMoveResult {
    pub is_permanent: bool,
    pub sequence_num: u64,
    pub changes: Vec<WorldChange>,
}

impl GameMoveResult {
    #[must_use]
    pub fn new(is_permanent: bool, sequence_num: u64) -> Self {
        Self {
            is_permanent,
            sequence_num,
            changes: Vec::new(),
        }
    }
}
