//! First-person renderer (textured wall columns, floor-cast floor, flat ceiling).
use crate::config::RenderConfig;
use crate::render::casters::{Intersect, Side, cast_ray};
use crate::render::framebuffer::{Color, Framebuffer};
use crate::render::{Renderer, Scene};

const CEILING: Color = Color::rgb(20, 20, 20);
const FLOOR: Color = Color::rgb(50, 50, 50);
/// Stripe color for rays that leave the map.
const OUT_OF_BOUNDS: Color = Color::WHITE;
/// Keeps the stripe height finite when the camera touches a wall face.
const MIN_DISTANCE: f64 = 1e-6;

pub struct RaycastRenderer {
    fov_factor: f64,
    wall_shading: f64,
    floor_shading: f64,
}

impl RaycastRenderer {
    pub fn new(cfg: &RenderConfig) -> Self {
        Self { fov_factor: cfg.fov_factor, wall_shading: cfg.wall_shading, floor_shading: cfg.floor_shading }
    }
}

/// Texture column for a wall hit, mirrored so every face reads the same way round.
pub fn wall_tex_x(hit: &Intersect, ray_x: f64, ray_y: f64, tile: i32) -> i32 {
    let tx = ((hit.wall_x * tile as f64) as i32).clamp(0, tile - 1);
    match hit.side {
        Side::X if ray_x > 0.0 => tile - tx - 1,
        Side::Y if ray_y < 0.0 => tile - tx - 1,
        _ => tx,
    }
}

#[inline]
fn shade_factor(distance: f64, k: f64) -> f64 {
    (1.0 / (distance * k + 1.0)).clamp(0.0, 1.0)
}

impl RaycastRenderer {
    /// Projects every row below the horizon onto the floor plane and samples
    /// the texture of whatever cell lands there.
    fn cast_floor(&self, scene: &Scene<'_>, fb: &mut Framebuffer, x: u32, ray_x: f64, ray_y: f64) {
        let h = fb.height as i32;
        let tile = scene.atlas.tile_size() as i32;
        for y in (h / 2 + 1)..h {
            let current_dist = h as f64 / (2.0 * y as f64 - h as f64);
            let floor_x = scene.pose.x + current_dist * ray_x;
            let floor_y = scene.pose.y + current_dist * ray_y;
            let (mx, my) = (floor_x.floor() as i32, floor_y.floor() as i32);
            let Some(cell) = scene.map.get(mx, my) else { continue };

            let tx = (((floor_x - mx as f64) * tile as f64) as i32).rem_euclid(tile);
            let ty = (((floor_y - my as f64) * tile as f64) as i32).rem_euclid(tile);
            let color = scene.atlas.texel(cell.texture_index(), tx, ty);
            fb.set_pixel_color(x, y as u32, color.shaded(shade_factor(current_dist, self.floor_shading)));
        }
    }
}

impl Renderer for RaycastRenderer {
    fn render(&mut self, scene: &Scene<'_>, fb: &mut Framebuffer) {
        let w = fb.width;
        let h = fb.height as i32;
        fb.set_background_color(Color::BLACK);
        fb.clear();
        fb.set_current_color(CEILING);
        fb.fill_rect(0, 0, w, (h / 2) as u32);
        fb.set_current_color(FLOOR);
        fb.fill_rect(0, h / 2, w, (h - h / 2) as u32);

        let (dir_x, dir_y) = scene.pose.direction();
        let plane_x = -dir_y * self.fov_factor;
        let plane_y = dir_x * self.fov_factor;
        let tile = scene.atlas.tile_size() as i32;

        for x in 0..w {
            let camera_x = 2.0 * x as f64 / w as f64 - 1.0;
            let ray_x = dir_x + plane_x * camera_x;
            let ray_y = dir_y + plane_y * camera_x;

            let hit = cast_ray(scene.map, scene.pose.x, scene.pose.y, ray_x, ray_y);
            let perp = hit.perp_distance.max(MIN_DISTANCE);

            let line_height = ((h as f64 / perp) as i32).max(1);
            let draw_start = (-line_height / 2 + h / 2).max(0);
            let draw_end = (line_height / 2 + h / 2).min(h - 1);

            let Some(cell) = hit.impact else {
                fb.set_current_color(OUT_OF_BOUNDS);
                fb.fill_rect(x as i32, draw_start, 1, (draw_end - draw_start).max(0) as u32);
                continue;
            };

            self.cast_floor(scene, fb, x, ray_x, ray_y);

            let tex_x = wall_tex_x(&hit, ray_x, ray_y, tile);
            let shade = shade_factor(perp, self.wall_shading);
            let texture = cell.texture_index();
            for y in draw_start..draw_end {
                let d = y as i64 * 256 - h as i64 * 128 + line_height as i64 * 128;
                let tex_y = ((d * tile as i64 / line_height as i64) / 256).clamp(0, tile as i64 - 1) as i32;
                let color = scene.atlas.texel(texture, tex_x, tex_y);
                fb.set_pixel_color(x, y as u32, color.shaded(shade));
            }
        }
    }
}
