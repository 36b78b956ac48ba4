pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, Coordinates2D, NVec2, Vector2};
pub use simulation::integrator::{sequential_pass, symmetric_pass, IntegratorKind};
pub use simulation::universe::Universe;
pub use simulation::field::{FieldGrid, FieldSampler};
pub use simulation::factory::UniverseFactory;
pub use simulation::params::{Range, G};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ConfigError, GenerationConfig, IntegratorConfig, UniverseConfig, RandomConfig, EditConfig, FieldConfig, BodyConfig, ScenarioConfig};

pub use visualization::{color::Rgba, viewport::Viewport};

pub use benchmark::benchmark::{bench_integrate, bench_field};
