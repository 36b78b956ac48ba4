//! The ordered body collection and everything that mutates it
//!
//! `Universe` owns the bodies, the gravitational constant and the world size.
//! Mutation (`add_bodies`, `despawn`, `integrate`) takes `&mut self` and field
//! sampling takes `&self`, so the borrow checker already serializes them.
//! Readers that want to sample off the tick path can take a `snapshot()`.

use tracing::debug;

use crate::simulation::factory::UniverseFactory;
use crate::simulation::field::{FieldGrid, FieldSampler};
use crate::simulation::integrator::{sequential_pass, symmetric_pass, IntegratorKind};
use crate::simulation::params::Range;
use crate::simulation::states::{Body, Coordinates2D, NVec2};
use crate::visualization::viewport::Viewport;

#[derive(Debug, Clone)]
pub struct Universe {
    pub size: Coordinates2D, // spawn area and render scale, never clamped against
    pub gravitational_constant: f64, // tunable at runtime
    pub integrator: IntegratorKind, // which tick pass to run
    pub bodies: Vec<Body>, // insertion order == iteration order
}

impl Universe {
    pub fn new(size: Coordinates2D, gravitational_constant: f64, bodies: Vec<Body>) -> Self {
        debug!(
            "universe created: size={}x{}, G={}, bodies={}",
            size.x, size.y, gravitational_constant, bodies.len()
        );
        Self {
            size,
            gravitational_constant,
            integrator: IntegratorKind::default(),
            bodies,
        }
    }

    /// Universe filled with `count` random bodies spread over `size`
    pub fn random(
        size: Coordinates2D,
        gravitational_constant: f64,
        mass: Range,
        radius: Range,
        count: usize,
        factory: &mut UniverseFactory,
    ) -> Self {
        let bodies = factory.generate_random_bodies(&size, mass, radius, count);
        Self::new(size, gravitational_constant, bodies)
    }

    pub fn with_integrator(mut self, integrator: IntegratorKind) -> Self {
        self.integrator = integrator;
        self
    }

    /// Append bodies at the end of the sequence
    pub fn add_bodies<I>(&mut self, bodies: I)
    where
        I: IntoIterator<Item = Body>,
    {
        let before = self.bodies.len();
        self.bodies.extend(bodies);
        debug!("spawned {} bodies, total {}", self.bodies.len() - before, self.bodies.len());
    }

    /// Remove the `count` most recently added bodies
    /// Asking for more than exist empties the universe
    /// Returns how many bodies were actually removed
    pub fn despawn(&mut self, count: usize) -> usize {
        let keep = self.bodies.len().saturating_sub(count);
        let removed = self.bodies.len() - keep;
        self.bodies.truncate(keep);
        debug!("despawned {} bodies, total {}", removed, self.bodies.len());
        removed
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Advance every body by one tick using the selected integrator
    pub fn integrate(&mut self) {
        match self.integrator {
            IntegratorKind::Sequential => sequential_pass(&mut self.bodies, self.gravitational_constant),
            IntegratorKind::Symmetric => symmetric_pass(&mut self.bodies, self.gravitational_constant),
        }
    }

    pub fn set_gravitational_constant(&mut self, g: f64) {
        debug!("gravitational constant {} -> {}", self.gravitational_constant, g);
        self.gravitational_constant = g;
    }

    /// Multiply G by `factor` (divide by passing its reciprocal)
    pub fn scale_gravitational_constant(&mut self, factor: f64) {
        self.set_gravitational_constant(self.gravitational_constant * factor);
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Owned copy of the current body states
    pub fn snapshot(&self) -> Vec<Body> {
        self.bodies.clone()
    }

    /// Viewport field grid with a unit probe
    ///
    /// Cell (row i, column j) samples world `((j + offset.x) / scale.x, (i + offset.y) / scale.y)`.
    /// `grid_size` is `[width, height]` in cells.
    pub fn gravity_field_grid(&self, exponent: f64, grid_size: [usize; 2], scale: [f64; 2], offset: [f64; 2]) -> FieldGrid {
        let viewport = Viewport::new(NVec2::new(scale[0], scale[1]), NVec2::new(offset[0], offset[1]));
        FieldSampler::default().view_grid(self, exponent, grid_size, &viewport)
    }

    /// Whole-world field grid sampled every `step` world units, unit probe
    pub fn total_gravity_field_grid(&self, step: f64, exponent: f64) -> FieldGrid {
        FieldSampler::default().total_grid(self, step, exponent)
    }
}
