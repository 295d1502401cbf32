//! Configuration types for loading rope scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! rope scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – driver options (start paused or running)
//! - [`ParametersConfig`] – time step, damping, spring constants, particle mass
//! - [`RopeConfig`]       – particle count, rope length and height
//! - [`WorldConfig`]      – gravity and the collision sphere
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section and field may be omitted; defaults reproduce the classic
//! 50-particle rope draped over a unit sphere.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   start_paused: true
//!
//! parameters:
//!   dt: 0.05                # fixed time step
//!   damping: 0.045          # engine-wide velocity damping
//!   stiffness: 650.0        # spring constant
//!   spring_damping: 0.045   # per-link damping (stored only)
//!   particle_mass: 1.0
//!
//! rope:
//!   particle_count: 50
//!   length: 15.0
//!   height: 4.0
//!
//! world:
//!   gravity: [0.0, -9.81, 0.0]
//!   sphere:
//!     center: [-2.0, 0.0, 0.0]
//!     radius: 1.0
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::configuration::error::ConfigError;
use crate::simulation::params::{Parameters, RopeLayout, SimulationConfig};
use crate::simulation::vector::NVec3;
use crate::simulation::world::{CollisionSphere, World};

/// Driver configuration
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub start_paused: bool, // `true` - wait for the user before the first step
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { start_paused: true }
    }
}

/// Numerical and physical parameters shared by every particle and spring
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ParametersConfig {
    pub dt: f64,             // fixed time step
    pub damping: f64,        // engine-wide damping of the Verlet velocity term
    pub stiffness: f64,      // spring constant
    pub spring_damping: f64, // per-link damping coefficient
    pub particle_mass: f64,  // mass of each particle
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: 0.05,
            damping: 0.045,
            stiffness: 650.0,
            spring_damping: 0.045,
            particle_mass: 1.0,
        }
    }
}

/// Initial rope layout
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RopeConfig {
    pub particle_count: usize, // number of particles, ends anchored
    pub length: f64,           // world-space distance between the ends
    pub height: f64,           // Y coordinate of the rope at rest
}

impl Default for RopeConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            length: 15.0,
            height: 4.0,
        }
    }
}

/// Collision sphere placement
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SphereConfig {
    pub center: [f64; 3],
    pub radius: f64,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            center: [-2.0, 0.0, 0.0],
            radius: 1.0,
        }
    }
}

/// Constant gravity and the static collision sphere
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
    pub gravity: [f64; 3], // added to every free particle's force each step
    pub sphere: SphereConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -9.81, 0.0],
            sphere: SphereConfig::default(),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // Driver options
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub rope: RopeConfig,             // Initial rope layout
    pub world: WorldConfig,           // Gravity and collision sphere
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Map the YAML-facing types onto the runtime configuration.
    /// Validation happens when the simulator is built.
    pub fn to_simulation_config(&self) -> SimulationConfig {
        let p = &self.parameters;
        let parameters = Parameters {
            dt: p.dt,
            damping: p.damping,
            stiffness: p.stiffness,
            spring_damping: p.spring_damping,
            particle_mass: p.particle_mass,
        };

        let layout = RopeLayout {
            particle_count: self.rope.particle_count,
            length: self.rope.length,
            height: self.rope.height,
        };

        let world = World {
            gravity: NVec3::from(self.world.gravity),
            sphere: CollisionSphere::new(
                NVec3::from(self.world.sphere.center),
                self.world.sphere.radius,
            ),
        };

        SimulationConfig {
            parameters,
            layout,
            world,
        }
    }
}
