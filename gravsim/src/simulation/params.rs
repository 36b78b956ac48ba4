//! Numerical and physical parameters for the simulation
//!
//! Runtime counterparts of the YAML option blocks:
//! - `RandomParameters`: ranges and count used when generating bodies
//! - `EditParameters`: view state and the step sizes of every runtime control
//! - `FieldParameters`: contrast exponent, probe mass and whole-world step

use crate::simulation::states::NVec2;

/// Real-world gravitational constant (m^3 kg^-1 s^-2)
/// Used only as a default when a scenario does not set its own value
pub const G: f64 = 6.674e-11;

/// Closed interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Builds the interval, swapping the bounds if they come in reversed
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }
}

impl From<[f64; 2]> for Range {
    fn from(r: [f64; 2]) -> Self {
        Range::new(r[0], r[1])
    }
}

#[derive(Debug, Clone)]
pub struct RandomParameters {
    pub mass: Range, // mass range
    pub radius: Range, // radius range
    pub count: usize, // bodies in a freshly generated universe
    pub seed: Option<u64>, // deterministic seed, entropy when None
}

#[derive(Debug, Clone)]
pub struct EditParameters {
    pub count_step: usize, // bodies added / removed per spawn or despawn step
    pub gravitational_constant_step: f64, // G is multiplied or divided by this
    pub zoom: f64, // current zoom, world units shown = size * zoom
    pub zoom_step: f64, // zoom is multiplied or divided by this
    pub offset: NVec2, // current screen offset in pixels
    pub offset_step: f64, // pixels moved per pan step
}

#[derive(Debug, Clone)]
pub struct FieldParameters {
    pub exponent: f64, // contrast knob applied to every summed cell
    pub probe_mass: f64, // mass of the sampling probe
    pub step: f64, // world units between whole-world samples
}
