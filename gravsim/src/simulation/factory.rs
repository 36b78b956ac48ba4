//! Procedural body generation
//!
//! `UniverseFactory` owns a `ChaCha8Rng`, so a seeded factory always
//! reproduces the same universe. Each generated body gets:
//! - mass and radius drawn uniformly from their ranges
//! - a position drawn uniformly from `[0, area.x] x [0, area.y]`
//! - a color derived from its mass relative to the top of the mass range
//! - an 8-character random name
//! - zero velocity and acceleration

use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::simulation::params::Range;
use crate::simulation::states::{Body, Coordinates2D};
use crate::visualization::color::Rgba;

/// Length of generated display names
pub const NAME_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct UniverseFactory {
    rng: ChaCha8Rng,
}

impl UniverseFactory {
    /// Seeded when `seed` is given, otherwise seeded from OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn generate_random_bodies(&mut self, spawn_area: &Coordinates2D, mass: Range, radius: Range, count: usize) -> Vec<Body> {
        let x_range = Range::new(0.0, spawn_area.x);
        let y_range = Range::new(0.0, spawn_area.y);

        let mut bodies = Vec::with_capacity(count);
        for _ in 0..count {
            let m = self.uniform(mass);
            let r = self.uniform(radius);
            let color = Rgba::from_mass(m, mass.max);
            let name = self.random_name(NAME_LEN);
            let position = Coordinates2D::new(self.uniform(x_range), self.uniform(y_range));

            bodies.push(Body::new(name, color, position, m, r));
        }
        bodies
    }

    /// Random alphanumeric string of `len` characters
    pub fn random_name(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(self.rng.sample(Alphanumeric)))
            .collect()
    }

    /// Uniform draw from a closed range
    /// Degenerate or non-finite ranges return `min` without touching the rng
    fn uniform(&mut self, range: Range) -> f64 {
        if !(range.min.is_finite() && range.max.is_finite()) || range.min >= range.max {
            return range.min;
        }
        self.rng.gen_range(range.min..=range.max)
    }
}
