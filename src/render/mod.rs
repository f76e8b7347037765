//! Rendering: framebuffer, atlas sampling, ray casting and the per-mode renderers.
//!
//! - `framebuffer`: CPU color buffer
//! - `atlas`: pixmaps and texture-atlas addressing
//! - `casters`: DDA grid ray casting
//! - `render3d`: first-person raycast view
//! - `topdown`: scrolling tile view
//! - `art`: full-screen and split still images

pub mod art;
pub mod atlas;
pub mod casters;
pub mod framebuffer;
pub mod render3d;
pub mod topdown;

use crate::core::map::WorldMap;
use crate::core::motion::Pose;
use atlas::TextureAtlas;
use framebuffer::Framebuffer;

/// Read-only view of the world a renderer draws from.
pub struct Scene<'a> {
    pub map: &'a WorldMap,
    pub pose: Pose,
    pub atlas: &'a TextureAtlas,
}

/// One display mode's way of painting the viewport.
pub trait Renderer {
    fn render(&mut self, scene: &Scene<'_>, fb: &mut Framebuffer);

    /// Paints the info column instead of the default panel. Returns `false`
    /// when the renderer leaves the column alone.
    fn render_column(&mut self, _fb: &mut Framebuffer) -> bool {
        false
    }
}
