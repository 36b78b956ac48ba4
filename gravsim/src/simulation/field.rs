//! Discretized gravity-field sampling for heat-map rendering
//!
//! A probe is placed at the world position of every grid cell. The gravitational
//! force magnitude from each body on the probe is summed and raised to
//! `exponent`. The running maximum is tracked so that callers can normalize
//! into a display range.
//!
//! Cost is `width * height * bodies`, which is why this runs on demand and
//! not on every tick.

use tracing::{debug, warn};

use crate::simulation::states::{Body, Coordinates2D, NVec2};
use crate::simulation::universe::Universe;
use crate::simulation::vector_math::{distance, gravitational_force};
use crate::visualization::color::{Rgba, MAX_INTENSITY};
use crate::visualization::viewport::Viewport;

/// Probe mass used when none is configured: each cell reads as force per unit mass
pub const DEFAULT_PROBE_MASS: f64 = 1.0;

/// Row-major grid of field samples plus the largest sample seen
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldGrid {
    pub cells: Vec<Vec<f64>>, // cells[row][column]
    pub max: f64, // largest cell value, 0 for an empty grid
}

impl FieldGrid {
    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Each cell divided by `max / MAX_INTENSITY` and truncated into `0..=MAX_INTENSITY`
    ///
    /// A zero or non-finite maximum gives an all-zero grid
    pub fn normalized(&self) -> Vec<Vec<u32>> {
        let ratio = self.max / MAX_INTENSITY as f64;
        let usable = ratio > 0.0 && ratio.is_finite();

        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&c| {
                        if usable {
                            // `as` saturates and maps NaN to 0
                            ((c / ratio) as u32).min(MAX_INTENSITY)
                        } else {
                            0
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Normalized grid unpacked into colors
    pub fn to_colors(&self) -> Vec<Vec<Rgba>> {
        self.normalized()
            .into_iter()
            .map(|row| row.into_iter().map(Rgba::from_packed).collect())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSampler {
    pub probe_mass: f64, // mass of the test body placed at each cell
}

impl Default for FieldSampler {
    fn default() -> Self {
        Self {
            probe_mass: DEFAULT_PROBE_MASS,
        }
    }
}

impl FieldSampler {
    pub fn new(probe_mass: f64) -> Self {
        Self { probe_mass }
    }

    /// Sample a `grid_size = [width, height]` pixel grid through `viewport`
    pub fn view_grid(&self, universe: &Universe, exponent: f64, grid_size: [usize; 2], viewport: &Viewport) -> FieldGrid {
        let [width, height] = grid_size;
        debug!("sampling view field {}x{} over {} bodies", width, height, universe.len());

        let grid = self.fill(width, height, exponent, |i, j| {
            let px = NVec2::new(j as f64, i as f64);
            let at = viewport.screen_to_world(&px);
            self.sample_at(&universe.bodies, universe.gravitational_constant, &at)
        });

        report(&grid);
        grid
    }

    /// Sample the whole world `[0, size.x) x [0, size.y)` every `step` units
    ///
    /// A non-positive or non-finite step gives an empty grid
    pub fn total_grid(&self, universe: &Universe, step: f64, exponent: f64) -> FieldGrid {
        if !(step > 0.0 && step.is_finite()) {
            warn!("field step must be positive, got {}", step);
            return FieldGrid::default();
        }

        let width = (universe.size.x / step).max(0.0) as usize;
        let height = (universe.size.y / step).max(0.0) as usize;
        debug!("sampling total field {}x{} (step {}) over {} bodies", width, height, step, universe.len());

        let grid = self.fill(width, height, exponent, |i, j| {
            let at = Coordinates2D::new(j as f64 * step, i as f64 * step);
            self.sample_at(&universe.bodies, universe.gravitational_constant, &at)
        });

        report(&grid);
        grid
    }

    /// Summed force magnitude on the probe at `at`, before the exponent
    pub fn sample_at(&self, bodies: &[Body], g: f64, at: &Coordinates2D) -> f64 {
        let mut total = 0.0;
        for tar in bodies {
            total += gravitational_force(self.probe_mass, tar.mass, distance(at, &tar.position), g);
        }
        total
    }

    // helpers ==============================================================================

    fn fill<F>(&self, width: usize, height: usize, exponent: f64, mut sample: F) -> FieldGrid
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut cells = Vec::with_capacity(height);
        let mut max = 0.0;

        for i in 0..height {
            let mut row = Vec::with_capacity(width);
            for j in 0..width {
                let value = sample(i, j).powf(exponent);
                // NaN never compares greater, so it never becomes the max
                if value > max {
                    max = value;
                }
                row.push(value);
            }
            cells.push(row);
        }

        FieldGrid { cells, max }
    }
}

fn report(grid: &FieldGrid) {
    if !grid.max.is_finite() {
        warn!("field grid maximum is {}; a sample sits on a body centre", grid.max);
    }
}
