use super::*;
use hexwar_rules_catalog::RulesCatalog;
use hexwar_world::{Tile, Unit};

fn flat_catalog() -> RulesCatalog {
    RulesCatalog::from_json(
        r#"{
            "terrains": {
                "1": { "name": "Plains", "defense_bonus": 0.0, "base_move_cost": 1.0 },
                "2": { "name": "Mountain", "defense_bonus": 2.0, "base_move_cost": 0.0 }
            },
            "units": {
                "1": { "name": "Infantry", "base_health": 10, "base_movement": 3, "base_attack": 4 }
            },
            "movementMatrix": {
                "1": { "1": 1.0 }
            },
            "attackMatrix": {}
        }"#,
    )
    .unwrap()
}

fn grid_world(radius: i32) -> World {
    let mut world = World::new("grid");
    for q in -radius..=radius {
        for r in -radius..=radius {
            if (-q - r).abs() <= radius {
                world.add_tile(Tile::new(AxialCoord::new(q, r), 1, 0));
            }
        }
    }
    world
}

#[test]
fn movement_cost_is_the_catalog_entry() {
    let catalog = flat_catalog();
    let world = grid_world(2);
    let unit = Unit::new(AxialCoord::new(0, 0), 1, 1, 10);
    assert_eq!(
        get_movement_cost(&catalog, &world, &unit, AxialCoord::new(1, 0)).unwrap(),
        1.0
    );
}

#[test]
fn movement_cost_fails_when_no_tile() {
    let catalog = flat_catalog();
    let world = World::new("empty");
    let unit = Unit::new(AxialCoord::new(0, 0), 1, 1, 10);
    assert!(get_movement_cost(&catalog, &world, &unit, AxialCoord::new(1, 0)).is_err());
}

#[test]
fn movement_options_respect_budget() {
    let catalog = flat_catalog();
    let world = grid_world(3);
    let unit = Unit::new(AxialCoord::new(0, 0), 1, 1, 10);
    let options = get_movement_options(&catalog, &world, &unit, 2.0);
    assert!(options.iter().all(|o| o.total_cost <= 2.0));
    assert!(!options.iter().any(|o| o.coord == unit.coord));
    // every coord within 2 steps on a flat-cost grid should be reachable
    assert_eq!(options.len(), 18);
}

#[test]
fn movement_options_exclude_occupied_tiles() {
    let catalog = flat_catalog();
    let mut world = grid_world(2);
    world.add_unit(Unit::new(AxialCoord::new(1, 0), 2, 1, 10));
    let unit = Unit::new(AxialCoord::new(0, 0), 1, 1, 10);
    let options = get_movement_options(&catalog, &world, &unit, 5.0);
    assert!(!options.iter().any(|o| o.coord == AxialCoord::new(1, 0)));
}

#[test]
fn movement_options_take_cheapest_path_to_a_coord() {
    let catalog = flat_catalog();
    let world = grid_world(3);
    let unit = Unit::new(AxialCoord::new(0, 0), 1, 1, 10);
    let options = get_movement_options(&catalog, &world, &unit, 10.0);
    let target = options
        .iter()
        .find(|o| o.coord == AxialCoord::new(2, 0))
        .unwrap();
    assert_eq!(target.total_cost, 2.0);
}

#[test]
fn valid_path_must_start_at_unit_coord() {
    let catalog = flat_catalog();
    let world = grid_world(2);
    let mut unit = Unit::new(AxialCoord::new(0, 0), 1, 1, 10);
    unit.distance_left = 3;
    let path = vec![AxialCoord::new(1, 0), AxialCoord::new(2, 0)];
    assert!(!is_valid_path(&catalog, &unit, &path, &world));
}

#[test]
fn valid_path_accepts_adjacent_steps_within_budget() {
    let catalog = flat_catalog();
    let world = grid_world(2);
    let mut unit = Unit::new(AxialCoord::new(0, 0), 1, 1, 10);
    unit.distance_left = 2;
    let path = vec![
        AxialCoord::new(0, 0),
        AxialCoord::new(1, 0),
        AxialCoord::new(2, 0),
    ];
    assert!(is_valid_path(&catalog, &unit, &path, &world));
}

#[test]
fn valid_path_rejects_non_adjacent_jump() {
    let catalog = flat_catalog();
    let world = grid_world(2);
    let mut unit = Unit::new(AxialCoord::new(0, 0), 1, 1, 10);
    unit.distance_left = 5;
    let path = vec![AxialCoord::new(0, 0), AxialCoord::new(2, 0)];
    assert!(!is_valid_path(&catalog, &unit, &path, &world));
}

#[test]
fn valid_path_rejects_insufficient_distance_left() {
    let catalog = flat_catalog();
    let world = grid_world(2);
    let mut unit = Unit::new(AxialCoord::new(0, 0), 1, 1, 10);
    unit.distance_left = 1;
    let path = vec![
        AxialCoord::new(0, 0),
        AxialCoord::new(1, 0),
        AxialCoord::new(2, 0),
    ];
    assert!(!is_valid_path(&catalog, &unit, &path, &world));
}

#[test]
fn valid_path_rejects_occupied_intermediate_tile() {
    let catalog = flat_catalog();
    let mut world = grid_world(2);
    world.add_unit(Unit::new(AxialCoord::new(1, 0), 2, 1, 10));
    let mut unit = Unit::new(AxialCoord::new(0, 0), 1, 1, 10);
    unit.distance_left = 5;
    let path = vec![
        AxialCoord::new(0, 0),
        AxialCoord::new(1, 0),
        AxialCoord::new(2, 0),
    ];
    assert!(!is_valid_path(&catalog, &unit, &path, &world));
}
