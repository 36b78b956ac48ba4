//! Packed-color helpers
//!
//! Colors travel through the engine as opaque `Rgba` values. The 24-bit packed
//! form (`0xRRGGBB`) is the shared intensity space for mass-derived body colors
//! and for normalized field grids.

/// Largest packed intensity: rgb(255, 255, 255) as an integer
pub const MAX_INTENSITY: u32 = 0xFF_FF_FF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Rgba {
    pub const WHITE: Rgba = Rgba { r: 0xFF, g: 0xFF, b: 0xFF, a: 0xFF };
    pub const BLACK: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0xFF };

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from `0xRRGGBB`; bits above 24 are ignored
    pub fn from_packed(c: u32) -> Self {
        Self {
            r: ((c >> 16) & 0xFF) as u8,
            g: ((c >> 8) & 0xFF) as u8,
            b: (c & 0xFF) as u8,
            a: 0xFF,
        }
    }

    pub fn packed(&self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Linear map of `mass / max_mass` onto `0..=MAX_INTENSITY`
    /// The ratio is clamped to [0, 1]; a non-positive `max_mass` gives black
    pub fn from_mass(mass: f64, max_mass: f64) -> Self {
        if !(max_mass > 0.0) {
            return Self::BLACK;
        }
        let ratio = (mass / max_mass).clamp(0.0, 1.0);
        Self::from_packed((ratio * MAX_INTENSITY as f64) as u32)
    }
}
