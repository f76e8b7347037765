//! Splits the window into the viewport, the info column and the dialogue box.
use crate::config::ScreenConfig;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub viewport: Rect,
    pub column: Rect,
    pub dialogue: Rect,
}

impl Layout {
    pub fn new(screen: &ScreenConfig) -> Self {
        let across = (screen.viewport_share + screen.column_share).max(1);
        let down = (screen.upper_share + screen.dialogue_share).max(1);
        let viewport_w = screen.width * screen.viewport_share / across;
        let upper_h = screen.height * screen.upper_share / down;
        Self {
            viewport: Rect { x: 0, y: 0, w: viewport_w, h: upper_h },
            column: Rect { x: viewport_w as i32, y: 0, w: screen.width - viewport_w, h: upper_h },
            dialogue: Rect { x: 0, y: upper_h as i32, w: screen.width, h: screen.height - upper_h },
        }
    }
}
