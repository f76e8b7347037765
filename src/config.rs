//! Configuration loading.
//!
//! Every section and field is optional in the TOML file; anything missing
//! falls back to the built-in defaults below.

use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "gridcaster.toml";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub assets: AssetConfig,
    pub map: MapConfig,
    pub motion: MotionConfig,
    pub render: RenderConfig,
    pub atlas: AtlasConfig,
    pub screen: ScreenConfig,
}

/// Files read at startup.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub map: PathBuf,
    pub atlas: PathBuf,
    pub player_sprite: PathBuf,
    pub art: PathBuf,
    pub wide_art: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            map: PathBuf::from("map.bin"),
            atlas: PathBuf::from("atlas.png"),
            player_sprite: PathBuf::from("pc.png"),
            art: PathBuf::from("test.png"),
            wide_art: PathBuf::from("widetest.png"),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub width: usize,
    pub height: usize,
    /// Starting grid cell; the player faces North (+X) on spawn.
    pub start_x: i32,
    pub start_y: i32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { width: 30, height: 24, start_x: 12, start_y: 12 }
    }
}

/// Animation lengths, in milliseconds.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub move_duration_ms: u64,
    pub rotate_duration_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self { move_duration_ms: 200, rotate_duration_ms: 200 }
    }
}

impl MotionConfig {
    pub fn move_duration(&self) -> Duration {
        Duration::from_millis(self.move_duration_ms)
    }

    pub fn rotate_duration(&self) -> Duration {
        Duration::from_millis(self.rotate_duration_ms)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Length of the camera plane relative to the facing vector.
    pub fov_factor: f64,
    /// `k` in the wall shading term `1 / (dist * k + 1)`.
    pub wall_shading: f64,
    /// `k` in the floor shading term.
    pub floor_shading: f64,
    pub target_fps: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { fov_factor: 0.66, wall_shading: 0.1, floor_shading: 0.2, target_fps: 60 }
    }
}

impl RenderConfig {
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_fps.max(1)))
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub tile_size: u32,
    pub columns: u32,
    pub texture_count: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self { tile_size: 32, columns: 8, texture_count: 62 }
    }
}

/// Whole-window resolution and the ratios used to split it.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
    /// Viewport : info column, horizontally.
    pub viewport_share: u32,
    pub column_share: u32,
    /// Upper area : dialogue box, vertically.
    pub upper_share: u32,
    pub dialogue_share: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            viewport_share: 22,
            column_share: 10,
            upper_share: 20,
            dialogue_share: 10,
        }
    }
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Explicit path wins, then `gridcaster.toml`, then defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            log::info!("Loading configuration from {:?}", path);
            return Self::load(path);
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            log::info!("Loading configuration from {}", DEFAULT_CONFIG_FILE);
            Self::load(local)
        } else {
            log::info!("Using default configuration");
            Ok(Self::default())
        }
    }
}
