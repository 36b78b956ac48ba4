//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, which contains:
//! - the universe (bodies at t = 0, G, size, integrator)
//! - the seeded universe factory used for every later spawn
//! - random / edit / field parameters
//!
//! A presentation layer drives the scenario. It calls `tick` once per frame,
//! maps its inputs onto the control methods (`spawn_step`, `increase_gravity`,
//! `zoom_in`, `pan`, ...) and reads `universe.bodies` and the field grids back
//! out.

use tracing::{debug, info};

use crate::configuration::config::{BodyConfig, GenerationConfig, IntegratorConfig, ScenarioConfig};
use crate::simulation::factory::UniverseFactory;
use crate::simulation::field::{FieldGrid, FieldSampler};
use crate::simulation::integrator::IntegratorKind;
use crate::simulation::params::{EditParameters, FieldParameters, RandomParameters};
use crate::simulation::states::{Body, Coordinates2D, NVec2, Vector2};
use crate::simulation::universe::Universe;
use crate::visualization::color::Rgba;
use crate::visualization::viewport::Viewport;

impl From<IntegratorConfig> for IntegratorKind {
    fn from(cfg: IntegratorConfig) -> Self {
        match cfg {
            IntegratorConfig::Sequential => IntegratorKind::Sequential,
            IntegratorConfig::Symmetric => IntegratorKind::Symmetric,
        }
    }
}

/// Runtime bundle constructed from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub universe: Universe,
    pub factory: UniverseFactory,
    pub random: RandomParameters,
    pub edit: EditParameters,
    pub field: FieldParameters,
    pub paused: bool,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from the option blocks
        let r_cfg = cfg.random;
        let random = RandomParameters {
            mass: r_cfg.mass_range.into(),
            radius: r_cfg.radius_range.into(),
            count: r_cfg.count,
            seed: r_cfg.seed,
        };

        let e_cfg = cfg.edit;
        let edit = EditParameters {
            count_step: e_cfg.count_step,
            gravitational_constant_step: e_cfg.gravitational_constant_step,
            zoom: e_cfg.zoom,
            zoom_step: e_cfg.zoom_step,
            offset: NVec2::new(e_cfg.offset[0], e_cfg.offset[1]),
            offset_step: e_cfg.offset_step,
        };

        let field = FieldParameters {
            exponent: cfg.field.exponent,
            probe_mass: cfg.field.probe_mass,
            step: cfg.field.step,
        };

        let mut factory = UniverseFactory::new(random.seed);

        // Bodies: either drawn by the factory or mapped from `BodyConfig`
        let size = Coordinates2D::new(cfg.universe.size[0], cfg.universe.size[1]);
        let bodies = match cfg.generation {
            GenerationConfig::Randomized => {
                factory.generate_random_bodies(&size, random.mass, random.radius, random.count)
            }
            GenerationConfig::Prefab => cfg
                .bodies
                .iter()
                .map(|bc| body_from_config(bc, random.mass.max))
                .collect(),
        };

        let universe = Universe::new(size, cfg.universe.gravitational_constant, bodies)
            .with_integrator(cfg.universe.integrator.into());

        info!(
            "scenario built: {:?} generation, {} bodies, G={}, integrator={:?}",
            cfg.generation,
            universe.len(),
            universe.gravitational_constant,
            universe.integrator
        );

        Self {
            universe,
            factory,
            random,
            edit,
            field,
            paused: false,
        }
    }

    /// One simulation tick, skipped while paused
    pub fn tick(&mut self) {
        if !self.paused {
            self.universe.integrate();
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!("paused: {}", self.paused);
    }

    /// Replace the universe with a freshly generated one
    /// Size, G and integrator carry over
    pub fn regenerate(&mut self) {
        let integrator = self.universe.integrator;
        self.universe = Universe::random(
            self.universe.size,
            self.universe.gravitational_constant,
            self.random.mass,
            self.random.radius,
            self.random.count,
            &mut self.factory,
        )
        .with_integrator(integrator);
    }

    /// Add `edit.count_step` random bodies
    pub fn spawn_step(&mut self) {
        let bodies = self.factory.generate_random_bodies(
            &self.universe.size,
            self.random.mass,
            self.random.radius,
            self.edit.count_step,
        );
        self.universe.add_bodies(bodies);
    }

    /// Remove the last `edit.count_step` bodies
    pub fn despawn_step(&mut self) -> usize {
        self.universe.despawn(self.edit.count_step)
    }

    pub fn increase_gravity(&mut self) {
        self.universe.scale_gravitational_constant(self.edit.gravitational_constant_step);
    }

    pub fn decrease_gravity(&mut self) {
        self.universe.scale_gravitational_constant(1.0 / self.edit.gravitational_constant_step);
    }

    /// Show less of the world
    pub fn zoom_in(&mut self) {
        self.edit.zoom /= self.edit.zoom_step;
    }

    /// Show more of the world
    pub fn zoom_out(&mut self) {
        self.edit.zoom *= self.edit.zoom_step;
    }

    /// Move the view by `(dx, dy)` pan steps
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.edit.offset.x += dx * self.edit.offset_step;
        self.edit.offset.y += dy * self.edit.offset_step;
    }

    /// Current view of the world on a `screen = [width, height]` surface
    pub fn viewport(&self, screen: [f64; 2]) -> Viewport {
        Viewport::fit(screen, &self.universe.size, self.edit.zoom, self.edit.offset)
    }

    /// Field grid covering the visible part of the world, one cell per pixel
    pub fn view_field(&self, screen: [usize; 2]) -> FieldGrid {
        let viewport = self.viewport([screen[0] as f64, screen[1] as f64]);
        FieldSampler::new(self.field.probe_mass).view_grid(&self.universe, self.field.exponent, screen, &viewport)
    }

    /// Field grid over the whole world at `field.step`
    pub fn total_field(&self) -> FieldGrid {
        FieldSampler::new(self.field.probe_mass).total_grid(&self.universe, self.field.step, self.field.exponent)
    }
}

/// Map a validated `BodyConfig` to a runtime `Body`
fn body_from_config(bc: &BodyConfig, max_mass: f64) -> Body {
    let color = match bc.color {
        Some(c) => Rgba::from_packed(c),
        None => Rgba::from_mass(bc.mass, max_mass.max(bc.mass)),
    };

    let mut body = Body::new(
        bc.name.clone(),
        color,
        Coordinates2D::new(bc.position[0], bc.position[1]),
        bc.mass,
        bc.radius,
    );

    if let Some(v) = &bc.velocity {
        body.velocity = Vector2::from_nvec(NVec2::new(v[0], v[1]));
    }

    body
}
