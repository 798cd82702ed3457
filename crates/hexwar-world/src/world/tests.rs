use super::*;
use hexwar_contracts::AxialCoord;

fn tile(q: i32, r: i32) -> Tile {
    Tile::new(AxialCoord::new(q, r), 0, 0)
}

fn unit(q: i32, r: i32, player: i32) -> Unit {
    Unit::new(AxialCoord::new(q, r), player, 0, 10)
}

#[test]
fn add_and_fetch_tile() {
    let mut world = World::new("test");
    world.add_tile(tile(1, 2));
    assert!(world.tile_at(AxialCoord::new(1, 2)).is_some());
    assert!(world.tile_at(AxialCoord::new(0, 0)).is_none());
}

#[test]
fn delete_tile_fails_when_occupied() {
    let mut world = World::new("test");
    world.add_tile(tile(0, 0));
    world.add_unit(unit(0, 0, 1));
    let err = world.delete_tile(AxialCoord::new(0, 0)).unwrap_err();
    assert_eq!(err, EngineError::TileOccupied);
    assert!(world.tile_at(AxialCoord::new(0, 0)).is_some());
}

#[test]
fn delete_tile_succeeds_when_empty() {
    let mut world = World::new("test");
    world.add_tile(tile(0, 0));
    world.delete_tile(AxialCoord::new(0, 0)).unwrap();
    assert!(world.tile_at(AxialCoord::new(0, 0)).is_none());
}

#[test]
fn add_unit_updates_both_indices() {
    let mut world = World::new("test");
    world.add_unit(unit(0, 0, 1));
    assert!(world.unit_at(AxialCoord::new(0, 0)).is_some());
    assert_eq!(world.units_of(1).len(), 1);
}

#[test]
fn add_unit_displaces_and_cleans_roster() {
    let mut world = World::new("test");
    world.add_unit(unit(0, 0, 1));
    let displaced = world.add_unit(unit(0, 0, 2));
    assert!(displaced.is_some());
    assert_eq!(world.units_of(1).len(), 0);
    assert_eq!(world.units_of(2).len(), 1);
}

#[test]
fn remove_unit_errors_when_absent() {
    let mut world = World::new("test");
    let err = world.remove_unit(AxialCoord::new(0, 0)).unwrap_err();
    assert_eq!(err, EngineError::NoSuchUnit);
}

#[test]
fn remove_unit_clears_both_indices() {
    let mut world = World::new("test");
    world.add_unit(unit(3, 3, 1));
    world.remove_unit(AxialCoord::new(3, 3)).unwrap();
    assert!(world.unit_at(AxialCoord::new(3, 3)).is_none());
    assert_eq!(world.units_of(1).len(), 0);
}

#[test]
fn move_unit_updates_coord_and_roster() {
    let mut world = World::new("test");
    world.add_unit(unit(0, 0, 1));
    world.move_unit(AxialCoord::new(0, 0), AxialCoord::new(1, 0)).unwrap();
    assert!(world.unit_at(AxialCoord::new(0, 0)).is_none());
    let moved = world.unit_at(AxialCoord::new(1, 0)).unwrap();
    assert_eq!(moved.coord, AxialCoord::new(1, 0));
    assert_eq!(world.units_of(1), vec![moved]);
}

#[test]
fn move_unit_fails_when_destination_occupied() {
    let mut world = World::new("test");
    world.add_unit(unit(0, 0, 1));
    world.add_unit(unit(1, 0, 2));
    let err = world
        .move_unit(AxialCoord::new(0, 0), AxialCoord::new(1, 0))
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidMove { .. }));
}

#[test]
fn move_unit_fails_when_source_empty() {
    let mut world = World::new("test");
    let err = world
        .move_unit(AxialCoord::new(0, 0), AxialCoord::new(1, 0))
        .unwrap_err();
    assert_eq!(err, EngineError::NoSuchUnit);
}

#[test]
fn player_count_is_the_highest_assigned_player() {
    let mut world = World::new("test");
    world.add_unit(unit(0, 0, 1));
    world.add_unit(unit(1, 0, 3));
    assert_eq!(world.player_count(), 3);
}

#[test]
fn bounds_reflect_tile_extent() {
    let mut world = World::new("test");
    world.add_tile(tile(-2, 1));
    world.add_tile(tile(3, -4));
    let bounds = world.bounds().unwrap();
    assert_eq!(bounds.min_q, -2);
    assert_eq!(bounds.max_q, 3);
    assert_eq!(bounds.min_r, -4);
    assert_eq!(bounds.max_r, 1);
}

#[test]
fn bounds_invalidate_on_tile_outside_cache() {
    let mut world = World::new("test");
    world.add_tile(tile(0, 0));
    world.bounds();
    world.add_tile(tile(5, 5));
    let bounds = world.bounds().unwrap();
    assert_eq!(bounds.max_q, 5);
}

#[test]
fn empty_world_has_no_bounds() {
    let mut world = World::new("test");
    assert!(world.bounds().is_none());
}

#[test]
fn pixel_bounds_cover_every_tile() {
    let mut world = World::new("test");
    world.add_tile(tile(0, 0));
    world.add_tile(tile(1, 0));
    world.add_tile(tile(0, 1));
    let bounds = world.get_world_bounds(2.0, 2.0, 1.5).unwrap();
    assert!(bounds.max_x > bounds.min_x);
    assert!(bounds.max_y > bounds.min_y);
}
