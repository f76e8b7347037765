//! Still-image display modes.
use crate::render::atlas::Pixmap;
use crate::render::framebuffer::{Color, Framebuffer};
use crate::render::{Renderer, Scene};

/// Draws one image at the viewport origin.
pub struct ArtRenderer {
    image: Pixmap,
}

impl ArtRenderer {
    pub fn new(image: Pixmap) -> Self {
        Self { image }
    }
}

impl Renderer for ArtRenderer {
    fn render(&mut self, _scene: &Scene<'_>, fb: &mut Framebuffer) {
        fb.set_background_color(Color::BLACK);
        fb.clear();
        fb.blit(&self.image, 0, 0, self.image.width(), self.image.height(), 0, 0);
    }
}

/// Spreads one wide image over the viewport and the info column, each
/// getting the slice proportional to its share of the screen width.
pub struct WideArtRenderer {
    image: Pixmap,
    viewport_width: u32,
    column_width: u32,
    screen_width: u32,
}

impl WideArtRenderer {
    pub fn new(image: Pixmap, viewport_width: u32, column_width: u32, screen_width: u32) -> Self {
        Self { image, viewport_width, column_width, screen_width: screen_width.max(1) }
    }

    fn viewport_slice(&self) -> u32 {
        self.image.width() * self.viewport_width / self.screen_width
    }

    fn column_slice(&self) -> u32 {
        self.image.width() * self.column_width / self.screen_width
    }
}

impl Renderer for WideArtRenderer {
    fn render(&mut self, _scene: &Scene<'_>, fb: &mut Framebuffer) {
        fb.set_background_color(Color::BLACK);
        fb.clear();
        fb.blit(&self.image, 0, 0, self.viewport_slice(), self.image.height(), 0, 0);
    }

    fn render_column(&mut self, fb: &mut Framebuffer) -> bool {
        fb.set_background_color(Color::BLACK);
        fb.clear();
        let sx = self.viewport_slice() as i32;
        fb.blit(&self.image, sx, 0, self.column_slice(), self.image.height(), 0, 0);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AtlasConfig;
    use crate::core::map::WorldMap;
    use crate::core::motion::{Facing, Pose};
    use crate::render::atlas::TextureAtlas;

    const LEFT: Color = Color::rgb(10, 20, 30);
    const RIGHT: Color = Color::rgb(90, 80, 70);

    fn wide_image() -> Pixmap {
        // 8x1: six LEFT pixels then two RIGHT
        let mut px = vec![LEFT; 6];
        px.extend([RIGHT; 2]);
        Pixmap::new(8, 1, px)
    }

    #[test]
    fn wide_art_splits_by_screen_share() {
        let map = WorldMap::new(1, 1);
        let atlas = TextureAtlas::new(Pixmap::filled(1, 1, Color::BLACK), &AtlasConfig::default());
        let scene = Scene { map: &map, pose: Pose::centered(0, 0, Facing::North), atlas: &atlas };
        let mut r = WideArtRenderer::new(wide_image(), 6, 2, 8);

        let mut viewport = Framebuffer::new(8, 1);
        r.render(&scene, &mut viewport);
        assert_eq!(viewport.get_pixel(5, 0), LEFT);
        assert_eq!(viewport.get_pixel(6, 0), Color::BLACK);

        let mut column = Framebuffer::new(2, 1);
        assert!(r.render_column(&mut column));
        assert_eq!(column.get_pixel(0, 0), RIGHT);
        assert_eq!(column.get_pixel(1, 0), RIGHT);
    }

    #[test]
    fn art_keeps_the_column() {
        let mut r = ArtRenderer::new(wide_image());
        let mut column = Framebuffer::new(2, 1);
        assert!(!r.render_column(&mut column));
    }
}
