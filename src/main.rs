//! Scripted two-player demo: builds a small map and catalog in memory,
//! plays a handful of moves through the engine, and logs the resulting
//! `WorldChange`s. Not a game client — just a smoke test for the
//! library surface exposed by `hexwar`.

use hexwar::{create_game, process_moves, AxialCoord, GameMove, RulesCatalog, Tile, Unit, World};

const DEMO_CATALOG: &str = r#"{
    "terrains": {
        "1": { "name": "Plains", "defense_bonus": 0.0, "base_move_cost": 1.0 }
    },
    "units": {
        "1": { "name": "Infantry", "base_health": 10, "base_movement": 3, "base_attack": 4 }
    },
    "movementMatrix": {
        "1": { "1": 1.0 }
    },
    "attackMatrix": {
        "1": { "1": { "2": 0.5, "4": 0.5 } }
    }
}"#;

fn demo_world() -> World {
    let mut world = World::new("demo");
    for q in 0..5 {
        for r in 0..5 {
            world.add_tile(Tile::new(AxialCoord::new(q, r), 1, 0));
        }
    }
    let mut scout = Unit::new(AxialCoord::new(0, 0), 1, 1, 10);
    scout.distance_left = 3;
    world.add_unit(scout);
    let mut defender = Unit::new(AxialCoord::new(2, 0), 2, 1, 10);
    defender.distance_left = 3;
    world.add_unit(defender);
    world
}

fn main() {
    env_logger::init();

    let catalog = RulesCatalog::from_json(DEMO_CATALOG).expect("demo catalog is well-formed");
    let mut game = create_game(demo_world(), catalog, 1);

    let moves = vec![
        GameMove::move_unit(1, AxialCoord::new(0, 0), AxialCoord::new(1, 0)),
        GameMove::attack_unit(1, AxialCoord::new(1, 0), AxialCoord::new(2, 0)),
        GameMove::end_turn(1),
    ];

    match process_moves(&mut game, &moves) {
        Ok(results) => {
            for (i, result) in results.iter().enumerate() {
                log::info!("move {i}: sequence={} changes={:?}", result.sequence_num, result.changes);
            }
            println!("batch applied: {} move(s), current_player={}", results.len(), game.current_player);
        }
        Err(batch_error) => {
            log::error!("batch halted: {}", batch_error.error);
            println!("batch halted, world rolled back: {}", batch_error.error);
        }
    }
}
