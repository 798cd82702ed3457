//! Per-move-type semantics (§4.4.1–§4.4.3).

use hexwar_contracts::{AxialCoord, EngineError, GameMove, GameMoveKind, GameMoveResult, WorldChange};
use hexwar_game::Game;

/// Dispatches a single move by its tagged variant.
///
/// # Errors
///
/// Returns the [`EngineError`] for whichever precondition the move
/// fails, per the per-variant semantics below.
pub fn dispatch(game: &mut Game, game_move: &GameMove) -> Result<GameMoveResult, EngineError> {
    match game_move.kind {
        GameMoveKind::MoveUnit {
            from_q,
            from_r,
            to_q,
            to_r,
        } => move_unit(
            game,
            game_move.player,
            AxialCoord::new(from_q, from_r),
            AxialCoord::new(to_q, to_r),
        ),
        GameMoveKind::AttackUnit {
            attacker_q,
            attacker_r,
            defender_q,
            defender_r,
        } => attack_unit(
            game,
            game_move.player,
            AxialCoord::new(attacker_q, attacker_r),
            AxialCoord::new(defender_q, defender_r),
        ),
        GameMoveKind::EndTurn => end_turn(game, game_move.player),
    }
}

/// §4.4.1 MoveUnit.
fn move_unit(game: &mut Game, player: i32, from: AxialCoord, to: AxialCoord) -> Result<GameMoveResult, EngineError> {
    let unit = game.world.unit_at(from).copied().ok_or(EngineError::NoSuchUnit)?;
    if unit.player != player || unit.player != game.current_player {
        return Err(EngineError::WrongPlayer);
    }
    if !game.is_valid_move(from, to) {
        return Err(EngineError::InvalidMove {
            reason: "path is not valid for this unit".to_string(),
        });
    }
    let cost = game.rules().movement_cost(&game.world, &unit, to)?;
    let rounded_cost = (cost + 0.5) as i32;
    if rounded_cost > unit.distance_left {
        return Err(EngineError::InsufficientMovement {
            need: rounded_cost,
            have: unit.distance_left,
        });
    }

    let previous_unit = unit.snapshot();
    game.world.move_unit(from, to)?;
    let moved = game.world.unit_at_mut(to).expect("just moved there");
    moved.distance_left -= rounded_cost;
    let updated_unit = moved.snapshot();

    let mut result = GameMoveResult::new(false, game.next_sequence_num());
    result.changes.push(WorldChange::UnitMoved {
        previous_unit,
        updated_unit,
    });
    Ok(result)
}

/// §4.4.2 AttackUnit.
fn attack_unit(
    game: &mut Game,
    player: i32,
    attacker_coord: AxialCoord,
    defender_coord: AxialCoord,
) -> Result<GameMoveResult, EngineError> {
    let attacker = game
        .world
        .unit_at(attacker_coord)
        .copied()
        .ok_or(EngineError::NoSuchUnit)?;
    let defender = game
        .world
        .unit_at(defender_coord)
        .copied()
        .ok_or(EngineError::NoSuchUnit)?;

    if attacker.player != player || attacker.player != game.current_player {
        return Err(EngineError::WrongPlayer);
    }
    if attacker.player == defender.player {
        return Err(EngineError::InvalidAttack {
            reason: "cannot attack your own unit".to_string(),
        });
    }
    if !game.rules().can_attack(&attacker, &defender) {
        return Err(EngineError::InvalidAttack {
            reason: "target is out of range or cannot be attacked by this unit type".to_string(),
        });
    }

    let defender_original_health = defender.available_health;
    let attacker_original_health = attacker.available_health;

    let defender_damage = game
        .rules()
        .combat_damage(attacker.unit_type, defender.unit_type, game.rng_mut());
    let attacker_damage = if game.rules().can_attack(&defender, &attacker) {
        game.rules()
            .combat_damage(defender.unit_type, attacker.unit_type, game.rng_mut())
    } else {
        0
    };

    let defender_health = (defender_original_health - defender_damage).max(0);
    let attacker_health = (attacker_original_health - attacker_damage).max(0);

    let mut result = GameMoveResult::new(true, game.next_sequence_num());

    if defender_damage > 0 {
        let unit = game.world.unit_at_mut(defender_coord).expect("defender still present");
        unit.available_health = defender_health;
        let updated_unit = unit.snapshot();
        result.changes.push(WorldChange::UnitDamaged {
            previous_unit: defender.snapshot(),
            updated_unit,
        });
    }
    if attacker_damage > 0 {
        let unit = game.world.unit_at_mut(attacker_coord).expect("attacker still present");
        unit.available_health = attacker_health;
        let updated_unit = unit.snapshot();
        result.changes.push(WorldChange::UnitDamaged {
            previous_unit: attacker.snapshot(),
            updated_unit,
        });
    }

    if defender_health == 0 {
        result.changes.push(WorldChange::UnitKilled {
            previous_unit: defender.snapshot(),
        });
        game.world.remove_unit(defender_coord)?;
    }
    if attacker_health == 0 {
        result.changes.push(WorldChange::UnitKilled {
            previous_unit: attacker.snapshot(),
        });
        game.world.remove_unit(attacker_coord)?;
    }

    Ok(result)
}

/// §4.4.3 EndTurn.
fn end_turn(game: &mut Game, player: i32) -> Result<GameMoveResult, EngineError> {
    if player != game.current_player {
        return Err(EngineError::WrongPlayer);
    }

    let previous_player = game.current_player;
    let previous_turn = game.turn_counter;

    let mut reset_units = Vec::new();
    let coords: Vec<AxialCoord> = game
        .world
        .units_of(previous_player)
        .into_iter()
        .map(|u| u.coord)
        .collect();
    for coord in coords {
        let base_movement = {
            let unit_type = game.world.unit_at(coord).expect("coord just listed").unit_type;
            game.rules()
                .catalog()
                .unit(unit_type)
                .ok_or_else(|| EngineError::UnknownRule { key: unit_type.to_string() })?
                .base_movement
        };
        let unit = game.world.unit_at_mut(coord).expect("coord just listed");
        unit.distance_left = base_movement;
        unit.turn_counter += 1;
        reset_units.push(unit.snapshot());
    }

    if game.current_player == game.player_count {
        game.current_player = 1;
        game.turn_counter += 1;
    } else {
        game.current_player += 1;
    }

    if let Some(winner) = (game.victory_predicate())(&game.world) {
        game.winner = winner;
        game.has_winner = true;
        game.status = hexwar_game::GameStatus::Ended;
    }

    let mut result = GameMoveResult::new(false, game.next_sequence_num());
    result.changes.push(WorldChange::PlayerChanged {
        previous_player,
        new_player: game.current_player,
        previous_turn,
        new_turn: game.turn_counter,
        reset_units,
    });
    Ok(result)
}
