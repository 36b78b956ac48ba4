//! Core state types for the N-body simulation.
//!
//! Defines the 2D vocabulary shared by the whole engine:
//! - `NVec2` / `Coordinates2D` using nalgebra
//! - `Vector2`: a direction plus a scalar magnitude
//! - `Body`: a single massive, circular object and its per-interaction step
//!
//! The display payload on `Body` (`name`, `color`) is carried along for the
//! renderer and never read by any physics code.

use nalgebra::Vector2 as NalgebraVector2;

use crate::simulation::vector_math;
use crate::visualization::color::Rgba;

pub type NVec2 = NalgebraVector2<f64>;

/// A 2D point or displacement, depending on context
pub type Coordinates2D = NVec2;

/// Direction scaled to a unit hypotenuse plus a signed scalar multiplier
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub direction: Coordinates2D, // unit-scaled displacement
    pub magnitude: f64, // signed multiplier along `direction`
}

impl Vector2 {
    pub fn new(direction: Coordinates2D, magnitude: f64) -> Self {
        Self { direction, magnitude }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Collapse into a plain nalgebra vector: direction * magnitude
    pub fn to_nvec(&self) -> NVec2 {
        self.direction * self.magnitude
    }

    /// Split a plain vector into unit direction and length
    /// A zero vector maps to a zero direction with zero magnitude
    pub fn from_nvec(v: NVec2) -> Self {
        let norm = v.norm();
        if norm == 0.0 {
            return Self::zero();
        }
        Self {
            direction: v / norm,
            magnitude: norm,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String, // display only
    pub color: Rgba, // display only
    pub position: Coordinates2D, // position, moved every interaction
    pub velocity: Vector2, // last direction + accumulated speed
    pub acceleration: f64, // scalar, last interaction only
    pub mass: f64, // mass (> 0)
    pub radius: f64, // radius, used for contact detection
}

impl Body {
    /// New body at rest
    pub fn new(name: impl Into<String>, color: Rgba, position: Coordinates2D, mass: f64, radius: f64) -> Self {
        Self {
            name: name.into(),
            color,
            position,
            velocity: Vector2::zero(),
            acceleration: 0.0,
            mass,
            radius,
        }
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        vector_math::distance(&self.position, &other.position)
    }

    pub fn abs_distance_to(&self, other: &Body) -> f64 {
        vector_math::abs_distance(&self.position, &other.position)
    }

    /// Displacement toward `other`, rescaled so its hypotenuse is exactly 1
    ///
    /// Coincident bodies produce `NaN` components (0 / 0)
    pub fn direction_to(&self, other: &Body) -> Coordinates2D {
        let d = self.distance_to(other);
        let lx = other.position.x - self.position.x;
        let ly = other.position.y - self.position.y;

        Coordinates2D::new(
            vector_math::proportional_leg(d, 1.0, lx),
            vector_math::proportional_leg(d, 1.0, ly),
        )
    }

    /// Pull exerted by `other` on this body, pointing toward `other`
    pub fn gravitational_force(&self, other: &Body, g: f64) -> Vector2 {
        let d = self.distance_to(other);
        Vector2 {
            direction: self.direction_to(other),
            magnitude: vector_math::gravitational_force(self.mass, other.mass, d, g),
        }
    }

    /// Acceleration produced by `force`, or zero when the two discs touch
    ///
    /// Touching also drops this body's speed to zero. That is contact
    /// damping only; there is no bounce.
    pub fn resulting_acceleration(&mut self, force: &Vector2, other: &Body) -> f64 {
        if self.distance_to(other) <= self.radius + other.radius {
            self.velocity.magnitude = 0.0;
            return 0.0;
        }
        vector_math::acceleration(force.magnitude, self.mass)
    }

    /// One pairwise interaction step
    ///
    /// The direction is overwritten, the speed accumulates and the position
    /// moves immediately, so any later interaction in the same tick already
    /// sees the new position.
    pub fn apply_force(&mut self, force: Vector2, other: &Body) {
        self.velocity.direction = force.direction;
        self.acceleration = self.resulting_acceleration(&force, other);
        self.velocity.magnitude += self.acceleration;

        self.position = self.resulting_position();
    }

    pub fn resulting_position(&self) -> Coordinates2D {
        vector_math::resulting_position(&self.position, &self.velocity, self.acceleration)
    }

    pub fn momentum(&self) -> Vector2 {
        vector_math::momentum(&self.velocity, self.mass)
    }

    pub fn density(&self) -> f64 {
        vector_math::density(self.mass, self.radius)
    }
}
