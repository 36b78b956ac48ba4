//! World <-> screen transforms
//!
//! screen = world * scale - offset
//! world  = (screen + offset) / scale
//!
//! The field sampler uses the inverse transform to place its probe. A renderer
//! uses the forward one to place sprites.

use crate::simulation::states::{Coordinates2D, NVec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: NVec2, // pixels per world unit, per axis
    pub offset: NVec2, // pixel offset subtracted after scaling
}

impl Viewport {
    pub fn new(scale: NVec2, offset: NVec2) -> Self {
        Self { scale, offset }
    }

    /// Fit `world` onto a `screen = [width, height]` pixel surface at `zoom`
    /// scale = screen / (world * zoom)
    pub fn fit(screen: [f64; 2], world: &Coordinates2D, zoom: f64, offset: NVec2) -> Self {
        Self {
            scale: NVec2::new(screen[0] / (world.x * zoom), screen[1] / (world.y * zoom)),
            offset,
        }
    }

    pub fn world_to_screen(&self, pos: &Coordinates2D) -> NVec2 {
        NVec2::new(
            pos.x * self.scale.x - self.offset.x,
            pos.y * self.scale.y - self.offset.y,
        )
    }

    pub fn screen_to_world(&self, px: &NVec2) -> Coordinates2D {
        Coordinates2D::new(
            (px.x + self.offset.x) / self.scale.x,
            (px.y + self.offset.y) / self.scale.y,
        )
    }
}
