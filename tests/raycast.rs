//! Ray casting against small hand-built maps.

use approx::assert_relative_eq;
use gridcaster::core::map::WorldMap;
use gridcaster::core::motion::{Facing, Pose};
use gridcaster::core::tile::{Cell, TileType};
use gridcaster::render::casters::{Side, cast_ray};

fn wall(texture: u8) -> Cell {
    Cell::with_tile(TileType::Wall, texture)
}

/// Floor interior of `w x h` cells inside a one-cell wall border.
fn bordered_room(w: usize, h: usize) -> WorldMap {
    let mut map = WorldMap::new(w + 2, h + 2);
    for y in 0..h + 2 {
        for x in 0..w + 2 {
            if x == 0 || y == 0 || x == w + 1 || y == h + 1 {
                map.set(x, y, wall(1));
            }
        }
    }
    map
}

#[test]
fn centre_of_three_by_three_room_sees_wall_at_one_and_a_half() {
    let map = bordered_room(3, 3);
    let pose = Pose::centered(2, 2, Facing::North);
    let (dx, dy) = pose.direction();
    let hit = cast_ray(&map, pose.x, pose.y, dx, dy);
    assert_eq!((hit.map_x, hit.map_y), (4, 2));
    assert!(hit.impact.is_some());
    assert_relative_eq!(hit.perp_distance, 1.5, epsilon = 1e-12);
}

#[test]
fn corridor_hit_is_first_wall_along_axis() {
    // 12-long corridor along +X with a wall at x = 8 and another at x = 10
    let mut map = WorldMap::new(12, 3);
    for x in 0..12 {
        map.set(x, 0, wall(2));
        map.set(x, 2, wall(2));
    }
    map.set(8, 1, wall(5));
    map.set(10, 1, wall(6));

    let hit = cast_ray(&map, 1.5, 1.5, 1.0, 0.0);
    assert_eq!((hit.map_x, hit.map_y), (8, 1));
    assert_eq!(hit.side, Side::X);
    assert_eq!(hit.impact.map(Cell::texture_index), Some(5));
    // axis-aligned: perpendicular and Euclidean distance agree
    assert_relative_eq!(hit.perp_distance, 8.0 - 1.5);
}

#[test]
fn every_facing_reaches_the_border() {
    let map = bordered_room(5, 5);
    for facing in [Facing::North, Facing::East, Facing::South, Facing::West] {
        let pose = Pose::centered(3, 3, facing);
        let (dx, dy) = pose.direction();
        let hit = cast_ray(&map, pose.x, pose.y, dx, dy);
        assert_relative_eq!(hit.perp_distance, 2.5, epsilon = 1e-9);
        assert_eq!(hit.impact, Some(wall(1)));
    }
}

#[test]
fn oblique_ray_distance_is_fish_eye_corrected() {
    let map = bordered_room(10, 10);
    // facing +X, ray at the edge of a 0.66 camera plane
    let hit = cast_ray(&map, 5.5, 5.5, 1.0, 0.66);
    let euclid = ((hit.map_x as f64 - 5.5).powi(2) + (hit.perp_distance * 0.66).powi(2)).sqrt();
    assert_eq!(hit.side, Side::X);
    assert_relative_eq!(hit.perp_distance, 11.0 - 5.5);
    assert!(euclid > hit.perp_distance);
}
