//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`GenerationConfig`] – whether bodies are generated or listed explicitly
//! - [`UniverseConfig`]   – world size, gravitational constant, integrator
//! - [`RandomConfig`]     – ranges and count for random generation
//! - [`EditConfig`]       – initial view state and runtime control step sizes
//! - [`FieldConfig`]      – field sampling options
//! - [`BodyConfig`]       – initial state for each prefab body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! generation: randomized          # or "prefab"
//!
//! universe:
//!   size: [800.0, 800.0]
//!   gravitational_constant: 1.0
//!   integrator: sequential        # or "symmetric"
//!
//! random:
//!   mass_range: [1.0, 1000.0]
//!   radius_range: [1.0, 1.0]
//!   count: 100
//!   seed: 42                      # optional, entropy when absent
//!
//! edit:
//!   count_step: 10
//!   gravitational_constant_step: 10.0
//!   zoom: 1.0
//!   zoom_step: 1.1
//!   offset: [0.0, 0.0]
//!   offset_step: 5.0
//!
//! field:
//!   exponent: 1.0
//!   probe_mass: 1.0
//!   step: 10.0
//!
//! bodies:                         # used by "prefab"
//!   - name: sun
//!     position: [400.0, 400.0]
//!     velocity: [0.0, 0.0]
//!     mass: 1000.0
//!     radius: 5.0
//!     color: 16776960             # packed 0xRRGGBB
//! ```
//!
//! Everything except `universe` has defaults. Every loader validates the
//! result before returning it.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::simulation::params::G;

/// Errors raised while loading or validating a scenario file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Scenario file could not be opened or read
    #[error("cannot read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scenario text is not valid YAML for [`ScenarioConfig`]
    #[error("malformed scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Scenario parsed but holds values the engine cannot use
    #[error("invalid scenario: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

/// How the initial bodies are produced
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationConfig {
    #[serde(rename = "randomized")] // bodies drawn by the universe factory
    #[default]
    Randomized,

    #[serde(rename = "prefab")] // bodies taken verbatim from `bodies`
    Prefab,
}

/// Which tick pass the universe runs
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[serde(rename = "sequential")] // reference order-dependent pass
    #[default]
    Sequential,

    #[serde(rename = "symmetric")] // snapshot-based equal-and-opposite pass
    Symmetric,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UniverseConfig {
    pub size: [f64; 2], // world extent used for spawning and rendering scale
    #[serde(default = "default_gravitational_constant")]
    pub gravitational_constant: f64,
    #[serde(default)]
    pub integrator: IntegratorConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RandomConfig {
    pub mass_range: [f64; 2],
    pub radius_range: [f64; 2],
    pub count: usize,
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            mass_range: [1.0, 1000.0],
            radius_range: [1.0, 1.0],
            count: 0,
            seed: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EditConfig {
    pub count_step: usize,
    pub gravitational_constant_step: f64,
    pub zoom: f64,
    pub zoom_step: f64,
    pub offset: [f64; 2],
    pub offset_step: f64,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            count_step: 10,
            gravitational_constant_step: 10.0,
            zoom: 1.0,
            zoom_step: 1.1,
            offset: [0.0, 0.0],
            offset_step: 5.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FieldConfig {
    pub exponent: f64,
    pub probe_mass: f64,
    pub step: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            exponent: 1.0,
            probe_mass: 1.0,
            step: 10.0,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: String, // display name
    pub position: Vec<f64>, // initial position [x, y] in world units
    #[serde(default)]
    pub velocity: Option<Vec<f64>>, // initial velocity [vx, vy], at rest when absent
    pub mass: f64, // mass of the body
    #[serde(default)]
    pub radius: f64, // contact radius
    #[serde(default)]
    pub color: Option<u32>, // packed 0xRRGGBB, derived from mass when absent
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub generation: GenerationConfig,
    pub universe: UniverseConfig,
    #[serde(default)]
    pub random: RandomConfig,
    #[serde(default)]
    pub edit: EditConfig,
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reject values that would make the engine meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let [w, h] = self.universe.size;
        if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
            return Err(ConfigError::invalid(format!("universe.size must be positive, got [{w}, {h}]")));
        }
        if !self.universe.gravitational_constant.is_finite() {
            return Err(ConfigError::invalid("universe.gravitational_constant must be finite"));
        }

        check_range("random.mass_range", self.random.mass_range)?;
        check_range("random.radius_range", self.random.radius_range)?;
        if self.random.mass_range[0] <= 0.0 {
            return Err(ConfigError::invalid("random.mass_range must be above zero"));
        }
        if self.random.radius_range[0] < 0.0 {
            return Err(ConfigError::invalid("random.radius_range must not be negative"));
        }

        let e = &self.edit;
        for (name, v) in [
            ("edit.gravitational_constant_step", e.gravitational_constant_step),
            ("edit.zoom", e.zoom),
            ("edit.zoom_step", e.zoom_step),
        ] {
            if !(v > 0.0 && v.is_finite()) {
                return Err(ConfigError::invalid(format!("{name} must be positive, got {v}")));
            }
        }

        if !(self.field.step > 0.0 && self.field.step.is_finite()) {
            return Err(ConfigError::invalid(format!("field.step must be positive, got {}", self.field.step)));
        }
        if !self.field.exponent.is_finite() {
            return Err(ConfigError::invalid("field.exponent must be finite"));
        }

        if self.generation == GenerationConfig::Prefab && self.bodies.is_empty() {
            return Err(ConfigError::invalid("prefab generation needs at least one entry in bodies"));
        }
        for (i, b) in self.bodies.iter().enumerate() {
            if b.position.len() != 2 {
                return Err(ConfigError::invalid(format!("bodies[{i}].position must have 2 components")));
            }
            if let Some(v) = &b.velocity {
                if v.len() != 2 {
                    return Err(ConfigError::invalid(format!("bodies[{i}].velocity must have 2 components")));
                }
            }
            if !(b.mass > 0.0) {
                return Err(ConfigError::invalid(format!("bodies[{i}].mass must be positive")));
            }
            if b.radius < 0.0 {
                return Err(ConfigError::invalid(format!("bodies[{i}].radius must not be negative")));
            }
        }

        Ok(())
    }
}

fn default_gravitational_constant() -> f64 {
    G
}

fn check_range(name: &str, r: [f64; 2]) -> Result<(), ConfigError> {
    if !(r[0].is_finite() && r[1].is_finite()) {
        return Err(ConfigError::invalid(format!("{name} must be finite")));
    }
    if r[0] > r[1] {
        return Err(ConfigError::invalid(format!("{name} is reversed: [{}, {}]", r[0], r[1])));
    }
    Ok(())
}
