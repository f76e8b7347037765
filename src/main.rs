//! Window shell: raylib window, key polling, texture upload and frame pacing.
use gridcaster::config::EngineConfig;
use gridcaster::core::input::Key;
use gridcaster::core::map::WorldMap;
use gridcaster::engine::{Assets, Engine, frame_sleep};
use gridcaster::error::{EngineError, Result};
use gridcaster::layout::{Layout, Rect};
use gridcaster::render::atlas::{Pixmap, TextureAtlas};
use gridcaster::render::framebuffer::{Color, Framebuffer};
use raylib::core::texture::RaylibTexture2D;
use raylib::prelude::{Color as RlColor, Image, KeyboardKey, RaylibDraw, RaylibHandle, RaylibThread, Texture2D};
use std::path::Path;
use std::thread;
use std::time::Instant;

const COLUMN_FILL: RlColor = RlColor::new(180, 70, 26, 255);
const DIALOGUE_FILL: RlColor = RlColor::new(200, 80, 30, 255);
const COLUMN_TEXT: &str = "This is the\ninfo column.\nCharacter info\nor stats could\ngo here!";
const DIALOGUE_TEXT: &str = "This is the dialogue box, which explains what's\ngoing on, and conveys story info.";

fn asset_error(path: &Path, reason: impl ToString) -> EngineError {
    EngineError::Asset { path: path.to_path_buf(), reason: reason.to_string() }
}

/// Decodes an image file into a CPU pixmap.
fn load_pixmap(path: &Path) -> Result<Pixmap> {
    let name = path.to_str().ok_or_else(|| asset_error(path, "path is not valid UTF-8"))?;
    let img = Image::load_image(name).map_err(|e| asset_error(path, e))?;
    let w = img.width().max(1) as u32;
    let h = img.height().max(1) as u32;
    let px = img
        .get_image_data()
        .iter()
        .map(|c| Color::new(c.r, c.g, c.b, c.a))
        .collect();
    Ok(Pixmap::new(w, h, px))
}

fn map_key(key: KeyboardKey) -> Option<Key> {
    match key {
        KeyboardKey::KEY_UP => Some(Key::Up),
        KeyboardKey::KEY_DOWN => Some(Key::Down),
        KeyboardKey::KEY_LEFT => Some(Key::Left),
        KeyboardKey::KEY_RIGHT => Some(Key::Right),
        KeyboardKey::KEY_TAB => Some(Key::Tab),
        KeyboardKey::KEY_ESCAPE => Some(Key::Escape),
        _ => None,
    }
}

fn blank_texture(rl: &mut RaylibHandle, thread: &RaylibThread, rect: Rect) -> Result<Texture2D> {
    let img = Image::gen_image_color(rect.w as i32, rect.h as i32, RlColor::BLACK);
    rl.load_texture_from_image(thread, &img)
        .map_err(|e| EngineError::Asset { path: "<framebuffer>".into(), reason: e.to_string() })
}

fn run() -> Result<()> {
    let config_arg = std::env::args().nth(1);
    let config = EngineConfig::resolve(config_arg.as_deref().map(Path::new))?;
    let layout = Layout::new(&config.screen);

    let (mut rl, raylib_thread) = raylib::init()
        .size(config.screen.width as i32, config.screen.height as i32)
        .title("Gridcaster")
        .build();
    // ESC is an engine key, not raylib's close shortcut
    rl.set_exit_key(None);

    let assets = &config.assets;
    let atlas = TextureAtlas::new(load_pixmap(&assets.atlas)?, &config.atlas);
    let sprites = Assets {
        player_sprite: load_pixmap(&assets.player_sprite)?,
        art: load_pixmap(&assets.art)?,
        wide_art: load_pixmap(&assets.wide_art)?,
    };
    let map = WorldMap::load_or_fallback(&assets.map, config.map.width, config.map.height);
    let mut engine = Engine::new(&config, map, atlas, sprites);

    let mut viewport = Framebuffer::new(layout.viewport.w, layout.viewport.h);
    let mut column = Framebuffer::new(layout.column.w, layout.column.h);
    let mut viewport_tex = blank_texture(&mut rl, &raylib_thread, layout.viewport)?;
    let mut column_tex = blank_texture(&mut rl, &raylib_thread, layout.column)?;

    let budget = config.render.frame_budget();
    let clock = Instant::now();

    while engine.is_running() && !rl.window_should_close() {
        let frame_start = Instant::now();

        let mut keys = Vec::new();
        while let Some(k) = rl.get_key_pressed() {
            keys.extend(map_key(k));
        }
        let column_painted = engine.frame(keys, clock.elapsed(), &mut viewport, &mut column);

        if let Err(e) = viewport_tex.update_texture(&viewport.to_rgba8()) {
            log::warn!("viewport upload failed: {}", e);
        }
        if column_painted {
            if let Err(e) = column_tex.update_texture(&column.to_rgba8()) {
                log::warn!("info column upload failed: {}", e);
            }
        }

        {
            let mut d = rl.begin_drawing(&raylib_thread);
            d.clear_background(RlColor::BLACK);
            d.draw_texture(&viewport_tex, layout.viewport.x, layout.viewport.y, RlColor::WHITE);

            let col = layout.column;
            if column_painted {
                d.draw_texture(&column_tex, col.x, col.y, RlColor::WHITE);
            } else {
                d.draw_rectangle(col.x, col.y, col.w as i32, col.h as i32, COLUMN_FILL);
                d.draw_text(COLUMN_TEXT, col.x + 10, col.y + 10, 20, RlColor::WHITE);
            }

            let dlg = layout.dialogue;
            d.draw_rectangle(dlg.x, dlg.y, dlg.w as i32, dlg.h as i32, DIALOGUE_FILL);
            d.draw_text(DIALOGUE_TEXT, dlg.x + 10, dlg.y + 10, 20, RlColor::WHITE);
        }

        if let Some(pause) = frame_sleep(budget, frame_start.elapsed()) {
            thread::sleep(pause);
        }
    }

    log::info!("Shutting down");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
