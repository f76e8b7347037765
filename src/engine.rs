//! Engine state and the per-frame step.
//!
//! Everything the main loop mutates lives in [`Engine`]; renderers only see
//! a borrowed [`Scene`].
use crate::config::EngineConfig;
use crate::core::input::{Intent, Key, translate};
use crate::core::map::WorldMap;
use crate::core::mode::DisplayMode;
use crate::core::motion::{Facing, MotionController, Pose};
use crate::layout::Layout;
use crate::render::Renderer;
use crate::render::Scene;
use crate::render::art::{ArtRenderer, WideArtRenderer};
use crate::render::atlas::{Pixmap, TextureAtlas};
use crate::render::framebuffer::Framebuffer;
use crate::render::render3d::RaycastRenderer;
use crate::render::topdown::TopDownRenderer;
use std::time::Duration;

/// Decoded images the display modes need besides the atlas.
pub struct Assets {
    pub player_sprite: Pixmap,
    pub art: Pixmap,
    pub wide_art: Pixmap,
}

pub struct Engine {
    map: WorldMap,
    atlas: TextureAtlas,
    motion: MotionController,
    mode: DisplayMode,
    /// Indexed by `DisplayMode as usize`.
    renderers: [Box<dyn Renderer>; 4],
    running: bool,
}

impl Engine {
    pub fn new(config: &EngineConfig, map: WorldMap, atlas: TextureAtlas, assets: Assets) -> Self {
        let layout = Layout::new(&config.screen);
        let motion = MotionController::new(
            config.map.start_x,
            config.map.start_y,
            Facing::North,
            config.motion.move_duration(),
            config.motion.rotate_duration(),
        );
        let renderers: [Box<dyn Renderer>; 4] = [
            Box::new(RaycastRenderer::new(&config.render)),
            Box::new(TopDownRenderer::new(assets.player_sprite)),
            Box::new(ArtRenderer::new(assets.art)),
            Box::new(WideArtRenderer::new(
                assets.wide_art,
                layout.viewport.w,
                layout.column.w,
                config.screen.width,
            )),
        ];
        Self { map, atlas, motion, mode: DisplayMode::default(), renderers, running: true }
    }

    #[inline] pub fn mode(&self) -> DisplayMode { self.mode }
    #[inline] pub fn is_running(&self) -> bool { self.running }
    #[inline] pub fn motion(&self) -> &MotionController { &self.motion }
    #[inline] pub fn pose(&self) -> Pose { self.motion.pose() }

    /// Applies one key press at time `now`.
    pub fn handle_key(&mut self, key: Key, now: Duration) {
        let Some(intent) = translate(key, self.mode) else { return };
        match intent {
            Intent::Quit => self.running = false,
            Intent::CycleMode => {
                self.mode = self.mode.next();
                log::info!("Display mode: {:?}", self.mode);
            }
            Intent::Move(step) => {
                self.motion.request_move(step, &self.map, now);
            }
            Intent::Turn(turn) => {
                self.motion.request_turn(turn, now);
            }
        }
    }

    pub fn update(&mut self, now: Duration) {
        self.motion.update(now);
    }

    /// Paints the viewport for the active mode. Returns whether the info
    /// column was painted too.
    pub fn render(&mut self, viewport: &mut Framebuffer, column: &mut Framebuffer) -> bool {
        let scene = Scene { map: &self.map, pose: self.motion.pose(), atlas: &self.atlas };
        let renderer = &mut self.renderers[self.mode as usize];
        renderer.render(&scene, viewport);
        renderer.render_column(column)
    }

    /// Drains `keys`, advances animation to `now` and renders.
    pub fn frame<I>(&mut self, keys: I, now: Duration, viewport: &mut Framebuffer, column: &mut Framebuffer) -> bool
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.handle_key(key, now);
            if !self.running {
                break;
            }
        }
        self.update(now);
        self.render(viewport, column)
    }
}

/// Time left to sleep so a frame that took `elapsed` fills `budget`.
pub fn frame_sleep(budget: Duration, elapsed: Duration) -> Option<Duration> {
    budget.checked_sub(elapsed).filter(|d| !d.is_zero())
}
