//! Grid ray casting (DDA).
use crate::core::map::WorldMap;
use crate::core::tile::Cell;

/// Stand-in for `1 / 0` when a ray component is zero.
const FAR: f64 = 1e30;

/// Which grid line the ray crossed on its last step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// Stepped along X: the ray hit a face perpendicular to the X axis.
    X,
    Y,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersect {
    pub map_x: i32,
    pub map_y: i32,
    pub side: Side,
    /// Distance along the camera's forward axis, not the ray length.
    pub perp_distance: f64,
    /// `None` when the ray left the map before meeting a wall.
    pub impact: Option<Cell>,
    /// Fractional position of the hit along the wall face, in `[0, 1)`.
    pub wall_x: f64,
}

/// Walks the grid from `(px, py)` along `(dir_x, dir_y)` until a non-floor
/// cell is entered or the ray leaves the map.
pub fn cast_ray(map: &WorldMap, px: f64, py: f64, dir_x: f64, dir_y: f64) -> Intersect {
    let mut map_x = px.floor() as i32;
    let mut map_y = py.floor() as i32;

    let delta_x = if dir_x == 0.0 { FAR } else { (1.0 / dir_x).abs() };
    let delta_y = if dir_y == 0.0 { FAR } else { (1.0 / dir_y).abs() };

    let (step_x, mut side_x) = if dir_x < 0.0 {
        (-1, (px - map_x as f64) * delta_x)
    } else {
        (1, (map_x as f64 + 1.0 - px) * delta_x)
    };
    let (step_y, mut side_y) = if dir_y < 0.0 {
        (-1, (py - map_y as f64) * delta_y)
    } else {
        (1, (map_y as f64 + 1.0 - py) * delta_y)
    };

    let mut side;
    let impact = loop {
        if side_x < side_y {
            side_x += delta_x;
            map_x += step_x;
            side = Side::X;
        } else {
            side_y += delta_y;
            map_y += step_y;
            side = Side::Y;
        }
        match map.get(map_x, map_y) {
            Some(cell) if cell.tile_type().blocks_ray() => break Some(cell),
            Some(_) => {}
            None => break None,
        }
    };

    let perp_distance = match side {
        Side::X => (map_x as f64 - px + (1 - step_x) as f64 / 2.0) / dir_x,
        Side::Y => (map_y as f64 - py + (1 - step_y) as f64 / 2.0) / dir_y,
    };
    let along = match side {
        Side::X => py + perp_distance * dir_y,
        Side::Y => px + perp_distance * dir_x,
    };

    Intersect { map_x, map_y, side, perp_distance, impact, wall_x: along - along.floor() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tile::TileType;
    use approx::assert_relative_eq;

    fn walled(w: usize, h: usize) -> WorldMap {
        let mut map = WorldMap::new(w, h);
        let wall = Cell::with_tile(TileType::Wall, 3);
        for y in 0..h {
            for x in 0..w {
                if x == 0 || y == 0 || x + 1 == w || y + 1 == h {
                    map.set(x, y, wall);
                }
            }
        }
        map
    }

    #[test]
    fn negative_axis_hit() {
        let map = walled(6, 6);
        let hit = cast_ray(&map, 3.5, 2.5, -1.0, 0.0);
        assert_eq!((hit.map_x, hit.map_y), (0, 2));
        assert_eq!(hit.side, Side::X);
        assert_relative_eq!(hit.perp_distance, 2.5);
        assert_relative_eq!(hit.wall_x, 0.5);
    }

    #[test]
    fn diagonal_ray_uses_perpendicular_distance() {
        let map = walled(8, 8);
        // facing +X with a camera-plane offset of 0.5 in Y
        let hit = cast_ray(&map, 1.5, 1.5, 1.0, 0.5);
        assert_eq!(hit.side, Side::X);
        assert_eq!(hit.map_x, 7);
        assert_relative_eq!(hit.perp_distance, 5.5);
        assert_relative_eq!(hit.wall_x, 0.25);
    }

    #[test]
    fn leaving_the_map_reports_no_impact() {
        let map = WorldMap::new(4, 4);
        let hit = cast_ray(&map, 1.5, 1.5, 0.0, 1.0);
        assert_eq!(hit.impact, None);
        assert_eq!((hit.map_x, hit.map_y), (1, 4));
        assert_relative_eq!(hit.perp_distance, 2.5);
    }

    #[test]
    fn half_tiles_stop_rays() {
        let mut map = WorldMap::new(6, 3);
        map.set(4, 1, Cell::with_tile(TileType::HalfFloor, 9));
        let hit = cast_ray(&map, 1.5, 1.5, 1.0, 0.0);
        assert_eq!(hit.impact.map(|c| c.texture_index()), Some(9));
        assert_relative_eq!(hit.perp_distance, 2.5);
    }
}
