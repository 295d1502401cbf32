pub mod simulation;
pub mod configuration;
#[cfg(feature = "viewer")]
pub mod visualization;
pub mod benchmark;

pub use simulation::vector::{NVec3, VectorExt};
pub use simulation::world::{CollisionSphere, World, COLLISION_MARGIN};
pub use simulation::params::{Parameters, RopeLayout, SimulationConfig, MAX_PARTICLES};
pub use simulation::particle::Particle;
pub use simulation::spring::Spring;
pub use simulation::rope::{RopeSimulator, RopeSnapshot};
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, RopeConfig, SphereConfig, WorldConfig, ScenarioConfig};
pub use configuration::error::ConfigError;

#[cfg(feature = "viewer")]
pub use visualization::rope_vis3d::run_3d;

pub use benchmark::benchmark::bench_step_curve;
