//! Whole-frame behaviour through the engine.

use gridcaster::config::EngineConfig;
use gridcaster::core::input::Key;
use gridcaster::core::map::WorldMap;
use gridcaster::core::mode::DisplayMode;
use gridcaster::core::motion::Facing;
use gridcaster::engine::{Assets, Engine};
use gridcaster::render::atlas::{Pixmap, TextureAtlas};
use gridcaster::render::framebuffer::{Color, Framebuffer};
use std::time::Duration;

fn engine_with(config: &EngineConfig) -> Engine {
    let atlas = TextureAtlas::new(Pixmap::filled(256, 256, Color::rgb(90, 90, 90)), &config.atlas);
    let assets = Assets {
        player_sprite: Pixmap::filled(32, 32, Color::YELLOW),
        art: Pixmap::filled(4, 4, Color::WHITE),
        wide_art: Pixmap::filled(8, 4, Color::WHITE),
    };
    Engine::new(config, WorldMap::fallback(30, 24), atlas, assets)
}

fn buffers() -> (Framebuffer, Framebuffer) {
    (Framebuffer::new(88, 64), Framebuffer::new(40, 64))
}

#[test]
fn forward_into_wall_is_rejected() {
    let mut config = EngineConfig::default();
    // one cell below the interior wall run, facing it after a left turn
    config.map.start_x = 8;
    config.map.start_y = 11;
    let mut e = engine_with(&config);
    let (mut vp, mut col) = buffers();

    e.frame([Key::Left], Duration::ZERO, &mut vp, &mut col);
    e.frame(std::iter::empty(), Duration::from_millis(200), &mut vp, &mut col);
    assert_eq!(e.motion().facing(), Facing::East);

    let before = e.pose();
    e.frame([Key::Up], Duration::from_millis(300), &mut vp, &mut col);
    e.frame(std::iter::empty(), Duration::from_millis(600), &mut vp, &mut col);
    assert_eq!(e.pose(), before);
    assert_eq!(e.motion().grid(), (8, 11));
}

#[test]
fn top_down_arrows_follow_world_axes() {
    let config = EngineConfig::default();
    let mut e = engine_with(&config);
    let (mut vp, mut col) = buffers();

    e.frame([Key::Tab, Key::Right], Duration::ZERO, &mut vp, &mut col);
    assert_eq!(e.mode(), DisplayMode::TopDown);
    assert_eq!(e.motion().grid(), (13, 12));
    e.frame([Key::Down], Duration::from_millis(100), &mut vp, &mut col);
    // still gliding right
    assert_eq!(e.motion().grid(), (13, 12));
    // keys are read before the animation advances, so this one is dropped too
    e.frame([Key::Down], Duration::from_millis(200), &mut vp, &mut col);
    assert_eq!(e.motion().grid(), (13, 12));
    assert!(e.motion().is_idle());
    e.frame([Key::Down], Duration::from_millis(250), &mut vp, &mut col);
    assert_eq!(e.motion().grid(), (13, 13));
}

#[test]
fn quit_stops_draining_keys() {
    let mut e = engine_with(&EngineConfig::default());
    let (mut vp, mut col) = buffers();
    e.frame([Key::Escape, Key::Tab], Duration::ZERO, &mut vp, &mut col);
    assert!(!e.is_running());
    assert_eq!(e.mode(), DisplayMode::Raycast);
}
