//! Texture atlas: one image holding a grid of square tiles.
use crate::config::AtlasConfig;
use crate::render::framebuffer::Color;

/// Immutable CPU image for per-pixel sampling.
#[derive(Clone, Debug, PartialEq)]
pub struct Pixmap {
    w: u32,
    h: u32,
    px: Vec<Color>,
}

impl Pixmap {
    /// `px` is row-major; it is padded or cut to exactly `w * h` pixels.
    pub fn new(w: u32, h: u32, mut px: Vec<Color>) -> Self {
        px.resize((w * h) as usize, Color::BLACK);
        Self { w, h, px }
    }

    pub fn filled(w: u32, h: u32, color: Color) -> Self {
        Self::new(w, h, vec![color; (w * h) as usize])
    }

    #[inline] pub fn width(&self) -> u32 { self.w }
    #[inline] pub fn height(&self) -> u32 { self.h }

    /// Black outside the image.
    #[inline]
    pub fn sample(&self, x: i32, y: i32) -> Color {
        if x < 0 || y < 0 || x as u32 >= self.w || y as u32 >= self.h {
            return Color::BLACK;
        }
        self.px[(y as u32 * self.w + x as u32) as usize]
    }
}

/// Pixel origin of tile `index` in an atlas `columns` tiles wide.
#[inline]
pub fn atlas_offset(index: u32, columns: u32, tile_size: u32) -> (u32, u32) {
    let columns = columns.max(1);
    ((index % columns) * tile_size, (index / columns) * tile_size)
}

pub struct TextureAtlas {
    image: Pixmap,
    tile_size: u32,
    columns: u32,
    texture_count: u32,
}

impl TextureAtlas {
    /// Walls and floors both address tiles with the configured column
    /// count; an image whose width disagrees is logged, not corrected.
    pub fn new(image: Pixmap, cfg: &AtlasConfig) -> Self {
        let tile_size = cfg.tile_size.max(1);
        let image_columns = image.width() / tile_size;
        if image_columns != cfg.columns {
            log::warn!(
                "atlas image is {} tiles wide but {} columns are configured; tiles will be addressed with {}",
                image_columns, cfg.columns, cfg.columns
            );
        }
        Self { image, tile_size, columns: cfg.columns.max(1), texture_count: cfg.texture_count }
    }

    #[inline] pub fn tile_size(&self) -> u32 { self.tile_size }
    #[inline] pub fn texture_count(&self) -> u32 { self.texture_count }
    #[inline] pub fn image(&self) -> &Pixmap { &self.image }

    #[inline]
    pub fn offset(&self, index: u8) -> (u32, u32) {
        atlas_offset(u32::from(index), self.columns, self.tile_size)
    }

    /// Texel `(tx, ty)` of tile `index`. Indices past the end of the image
    /// read black; callers keep `index < texture_count`.
    #[inline]
    pub fn texel(&self, index: u8, tx: i32, ty: i32) -> Color {
        let (ox, oy) = self.offset(index);
        self.image.sample(ox as i32 + tx, oy as i32 + ty)
    }
}
