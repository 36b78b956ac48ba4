pub mod vector_math;
pub mod states;
pub mod params;
pub mod integrator;
pub mod universe;
pub mod field;
pub mod factory;
pub mod scenario;
