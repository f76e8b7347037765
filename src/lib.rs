//! Grid-locked first-person dungeon view.
//!
//! - `core`: map cells, world grid, movement animation, input translation
//! - `render`: framebuffer, texture atlas, DDA ray casting, per-mode renderers
//! - `engine`: owned engine state and the frame step
//! - `config`, `error`, `layout`: ambient plumbing

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod layout;
pub mod render;

pub use config::EngineConfig;
pub use engine::{Assets, Engine};
pub use error::{EngineError, Result};
