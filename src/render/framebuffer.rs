//! CPU framebuffer the renderers paint into.
use crate::render::atlas::Pixmap;

/// 8-bit RGBA color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const MAGENTA: Color = Color::new(255, 0, 255, 255);
    pub const YELLOW: Color = Color::new(253, 249, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Scales RGB by `factor` clamped to `[0, 1]`; alpha is kept.
    #[inline]
    pub fn shaded(self, factor: f64) -> Self {
        let f = factor.clamp(0.0, 1.0);
        let mul = |v: u8| -> u8 { (v as f64 * f) as u8 };
        Color::new(mul(self.r), mul(self.g), mul(self.b), self.a)
    }
}

/// Row-major RGBA canvas. Writes outside the buffer are dropped and reads
/// outside it return the background color.
pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub current_color: Color,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            color_buffer: vec![Color::BLACK; (width * height) as usize],
            width,
            height,
            background_color: Color::BLACK,
            current_color: Color::WHITE,
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let inside = (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y);
        inside.then(|| y as usize * self.width as usize + x as usize)
    }

    /// Paints the whole buffer with the background color.
    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    #[inline]
    pub fn set_pixel_color(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.index(x as i32, y as i32) {
            self.color_buffer[i] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        self.index(x as i32, y as i32).map_or(self.background_color, |i| self.color_buffer[i])
    }

    #[inline] pub fn set_current_color(&mut self, c: Color) { self.current_color = c; }
    #[inline] pub fn set_background_color(&mut self, c: Color) { self.background_color = c; }

    /// Fills a rectangle with the current color, clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        let x0 = (x.max(0) as u32).min(self.width);
        let y0 = (y.max(0) as u32).min(self.height);
        let x1 = (x as i64 + w as i64).clamp(0, self.width as i64) as u32;
        let y1 = (y as i64 + h as i64).clamp(0, self.height as i64) as u32;
        let c = self.current_color;
        for yy in y0..y1 {
            let row = (yy * self.width) as usize;
            self.color_buffer[row + x0 as usize..row + x1.max(x0) as usize].fill(c);
        }
    }

    /// Copies a `w x h` region of `src` starting at `(sx, sy)` to `(dx, dy)`.
    /// Fully transparent source pixels are skipped.
    pub fn blit(&mut self, src: &Pixmap, sx: i32, sy: i32, w: u32, h: u32, dx: i32, dy: i32) {
        for yy in 0..h as i32 {
            for xx in 0..w as i32 {
                let Some(i) = self.index(dx + xx, dy + yy) else { continue };
                let c = src.sample(sx + xx, sy + yy);
                if c.a != 0 {
                    self.color_buffer[i] = c;
                }
            }
        }
    }

    /// Packs the buffer as tightly laid out RGBA8 bytes for texture upload.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.color_buffer.iter().flat_map(|c| [c.r, c.g, c.b, c.a]).collect()
    }
}
