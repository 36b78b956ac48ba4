//! Scalar kernels behind every body interaction
//!
//! Stateless helpers for distance, force magnitude, leg decomposition,
//! acceleration and position updates. `Body` and the field sampler are thin
//! wrappers over these, so both paths share the exact same arithmetic

use std::f64::consts::PI;

use crate::simulation::states::{Coordinates2D, Vector2};

/// Euclidean distance between two points
/// h = sqrt((x2 - x1)^2 + (y2 - y1)^2)
pub fn distance(a: &Coordinates2D, b: &Coordinates2D) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Euclidean distance computed from the absolute leg lengths
/// h = sqrt(|x2 - x1|^2 + |y2 - y1|^2)
pub fn abs_distance(a: &Coordinates2D, b: &Coordinates2D) -> f64 {
    ((b.x - a.x).abs().powi(2) + (b.y - a.y).abs().powi(2)).sqrt()
}

/// Newton's law of universal gravitation
/// F = k * (m1 * m2) / r^2
///
/// `r == 0` yields `inf` (or `NaN` when a mass is also zero); callers get the
/// IEEE-754 value back unchanged
pub fn gravitational_force(m1: f64, m2: f64, r: f64, k: f64) -> f64 {
    k * ((m1 * m2) / r.powi(2))
}

/// Leg of a similar right triangle: c2 = h2 * c1 / h1
pub fn proportional_leg(h1: f64, h2: f64, c1: f64) -> f64 {
    h2 * c1 / h1
}

/// Second law: a = F / m
pub fn acceleration(force_magnitude: f64, mass: f64) -> f64 {
    force_magnitude / mass
}

/// Position after moving `vel.magnitude` along `vel.direction`
///
/// `_accel` is not added here; it has already been folded into
/// `vel.magnitude` by the caller
pub fn resulting_position(pos: &Coordinates2D, vel: &Vector2, _accel: f64) -> Coordinates2D {
    Coordinates2D::new(
        pos.x + vel.direction.x * vel.magnitude,
        pos.y + vel.direction.y * vel.magnitude,
    )
}

/// p = v * m, keeping the direction of `vel`
pub fn momentum(vel: &Vector2, mass: f64) -> Vector2 {
    Vector2 {
        direction: vel.direction,
        magnitude: vel.magnitude * mass,
    }
}

/// Areal density of a disc: m / (pi * r^2)
pub fn density(mass: f64, radius: f64) -> f64 {
    mass / (PI * radius.powi(2))
}
