//! Top-down tile view with a camera that jumps half a screen near the edges.
use crate::render::atlas::Pixmap;
use crate::render::framebuffer::{Color, Framebuffer};
use crate::render::{Renderer, Scene};

/// Distance from the viewport edge, in tiles, that triggers a camera jump.
const X_THRESHOLD: f64 = 7.0;
const Y_THRESHOLD: f64 = 4.0;

/// Drawn for cells whose texture index is outside the atlas.
const MISSING_TEXTURE: Color = Color::MAGENTA;

pub struct TopDownRenderer {
    sprite: Pixmap,
    camera_x: i32,
    camera_y: i32,
}

impl TopDownRenderer {
    pub fn new(sprite: Pixmap) -> Self {
        Self { sprite, camera_x: 0, camera_y: 0 }
    }

    pub fn camera(&self) -> (i32, i32) {
        (self.camera_x, self.camera_y)
    }

    /// Moves the camera when the player gets close to a viewport edge, then
    /// clamps it to the map.
    fn follow(&mut self, px: f64, py: f64, tiles_x: i32, tiles_y: i32, map_w: i32, map_h: i32) {
        if px - (self.camera_x as f64) <= X_THRESHOLD {
            self.camera_x -= tiles_x / 2;
        } else if px - (self.camera_x as f64) >= tiles_x as f64 - X_THRESHOLD {
            self.camera_x += tiles_x / 2;
        }
        if py - (self.camera_y as f64) <= Y_THRESHOLD {
            self.camera_y -= tiles_y / 2;
        } else if py - (self.camera_y as f64) >= tiles_y as f64 - Y_THRESHOLD {
            self.camera_y += tiles_y / 2;
        }
        self.camera_x = self.camera_x.min(map_w - tiles_x).max(0);
        self.camera_y = self.camera_y.min(map_h - tiles_y).max(0);
    }
}

impl Renderer for TopDownRenderer {
    fn render(&mut self, scene: &Scene<'_>, fb: &mut Framebuffer) {
        fb.set_background_color(Color::BLACK);
        fb.clear();

        let atlas = scene.atlas;
        let ts = atlas.tile_size();
        let tiles_x = (fb.width / ts) as i32;
        let tiles_y = (fb.height / ts) as i32;
        let (map_w, map_h) = (scene.map.width() as i32, scene.map.height() as i32);
        self.follow(scene.pose.x, scene.pose.y, tiles_x, tiles_y, map_w, map_h);

        // one extra row and column covers viewports that aren't a whole number of tiles
        for y in 0..=tiles_y {
            for x in 0..=tiles_x {
                let Some(cell) = scene.map.get(self.camera_x + x, self.camera_y + y) else { continue };
                let (dx, dy) = (x * ts as i32, y * ts as i32);
                let index = cell.texture_index();
                if u32::from(index) < atlas.texture_count() {
                    let (ox, oy) = atlas.offset(index);
                    fb.blit(atlas.image(), ox as i32, oy as i32, ts, ts, dx, dy);
                } else {
                    fb.set_current_color(MISSING_TEXTURE);
                    fb.fill_rect(dx, dy, ts, ts);
                }
            }
        }

        let sx = ((scene.pose.x - self.camera_x as f64) * ts as f64) as i32 - ts as i32 / 2;
        let sy = ((scene.pose.y - self.camera_y as f64) * ts as f64) as i32 - ts as i32 / 2;
        fb.blit(&self.sprite, 0, 0, self.sprite.width(), self.sprite.height(), sx, sy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AtlasConfig;
    use crate::core::map::WorldMap;
    use crate::core::motion::{Facing, Pose};
    use crate::core::tile::{Cell, TileType};
    use crate::render::atlas::TextureAtlas;

    const TILE0: Color = Color::rgb(1, 2, 3);
    const HERO: Color = Color::rgb(250, 250, 0);

    fn atlas() -> TextureAtlas {
        TextureAtlas::new(
            Pixmap::filled(2, 2, TILE0),
            &AtlasConfig { tile_size: 2, columns: 1, texture_count: 1 },
        )
    }

    fn scene_at<'a>(map: &'a WorldMap, atlas: &'a TextureAtlas, gx: i32, gy: i32) -> Scene<'a> {
        Scene { map, pose: Pose::centered(gx, gy, Facing::North), atlas }
    }

    #[test]
    fn tiles_sprite_and_missing_textures() {
        let mut map = WorldMap::new(30, 24);
        map.set(1, 0, Cell::with_tile(TileType::Wall, 40));
        let atlas = atlas();
        let mut r = TopDownRenderer::new(Pixmap::filled(2, 2, HERO));
        let mut fb = Framebuffer::new(20, 20);
        r.render(&scene_at(&map, &atlas, 0, 4), &mut fb);

        assert_eq!(r.camera(), (0, 0));
        assert_eq!(fb.get_pixel(0, 0), TILE0);
        assert_eq!(fb.get_pixel(2, 0), MISSING_TEXTURE);
        // player at (0.5, 4.5) -> sprite covers pixels (0..2, 8..10)
        assert_eq!(fb.get_pixel(0, 8), HERO);
        assert_eq!(fb.get_pixel(1, 9), HERO);
        assert_eq!(fb.get_pixel(2, 8), TILE0);
    }

    #[test]
    fn camera_jumps_and_clamps() {
        let map = WorldMap::new(30, 24);
        let atlas = atlas();
        let mut r = TopDownRenderer::new(Pixmap::filled(1, 1, HERO));
        // 22 x 16 tiles visible
        let mut fb = Framebuffer::new(44, 32);

        r.render(&scene_at(&map, &atlas, 20, 12), &mut fb);
        // 20.5 >= 22 - 7 jumps right by 11, clamped to 30 - 22
        // 12.5 >= 16 - 4 jumps down by 8, clamped to 24 - 16
        assert_eq!(r.camera(), (8, 8));

        r.render(&scene_at(&map, &atlas, 2, 2), &mut fb);
        assert_eq!(r.camera(), (0, 0));
    }
}
