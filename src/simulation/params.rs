//! Numerical and physical parameters for the rope simulation
//!
//! `SimulationConfig` is the immutable bundle handed to
//! [`RopeSimulator::new`](super::rope::RopeSimulator::new):
//! - `Parameters`: time step, damping, spring constants, particle mass
//! - `RopeLayout`: how many particles, how long, at what height
//! - `World`: gravity and the collision sphere

use crate::configuration::error::ConfigError;
use super::world::World;

/// Largest rope a configuration may ask for
pub const MAX_PARTICLES: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub dt: f64,             // fixed time step
    pub damping: f64,        // engine-wide damping on the implicit Verlet velocity
    pub stiffness: f64,      // spring constant k
    pub spring_damping: f64, // per-link damping, stored on each spring only
    pub particle_mass: f64,  // mass of every particle
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RopeLayout {
    pub particle_count: usize, // N, both ends anchored
    pub length: f64,           // distance between the two anchored ends along X
    pub height: f64,           // Y of the whole rope at rest
}

impl RopeLayout {
    /// Initial distance between neighbouring particles
    pub fn spacing(&self) -> f64 {
        self.length / (self.particle_count as f64 - 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub parameters: Parameters,
    pub layout: RopeLayout,
    pub world: World,
}

impl SimulationConfig {
    /// Reject configurations that would put NaN or infinities into the rope
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.parameters;
        let l = &self.layout;
        let w = &self.world;

        if l.particle_count < 2 {
            return Err(ConfigError::TooFewParticles(l.particle_count));
        }
        if l.particle_count > MAX_PARTICLES {
            return Err(ConfigError::TooManyParticles {
                count: l.particle_count,
                max: MAX_PARTICLES,
            });
        }
        positive("rope.length", l.length)?;
        // Springs need a positive rest length and particles must start apart
        positive("rope.spacing", l.spacing())?;
        finite("rope.height", l.height)?;

        positive("parameters.dt", p.dt)?;
        positive("parameters.particle_mass", p.particle_mass)?;
        finite("parameters.stiffness", p.stiffness)?;
        unit_interval("parameters.damping", p.damping)?;
        unit_interval("parameters.spring_damping", p.spring_damping)?;

        if !w.gravity.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::NotFinite { field: "world.gravity" });
        }
        if !w.sphere.center.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::NotFinite { field: "world.sphere.center" });
        }
        positive("world.sphere.radius", w.sphere.radius)?;

        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value, min: 0.0, max: 1.0 })
    }
}
