//! Rope simulator: owns the particle arena and the springs linking it.
//!
//! One call to [`RopeSimulator::step`] runs the three phases of a tick in
//! order: clear force accumulators, let every spring add its force pair,
//! integrate every particle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::configuration::error::ConfigError;
use super::params::{Parameters, RopeLayout, SimulationConfig};
use super::particle::Particle;
use super::spring::Spring;
use super::vector::NVec3;
use super::world::{CollisionSphere, World};

#[derive(Debug, Clone, PartialEq)]
pub struct RopeSimulator {
    config: SimulationConfig,
    particles: Vec<Particle>, // rope order, first and last anchored
    springs: Vec<Spring>,     // springs[i] links particles i and i + 1
    step_count: u64,          // steps since the last reset
}

/// Copy of the particle positions at one step, in rope order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RopeSnapshot {
    pub step: u64,
    pub positions: Vec<[f64; 3]>,
}

impl RopeSimulator {
    /// Validate `config` and build the rope in its rest configuration
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut sim = Self {
            config,
            particles: Vec::new(),
            springs: Vec::new(),
            step_count: 0,
        };
        sim.reset();
        Ok(sim)
    }

    /// Rebuild the rope from scratch: `N` particles evenly spaced along X
    /// at the configured height, both ends anchored, `N - 1` springs at
    /// their rest length. The old particles and springs are only replaced
    /// once the new ones are complete.
    pub fn reset(&mut self) {
        let layout = self.config.layout;
        let params = self.config.parameters;

        let n = layout.particle_count;
        let spacing = layout.spacing();
        let half = layout.length / 2.0;

        // Particle storage is final before any spring indexes into it
        let mut particles = Vec::with_capacity(n);
        for i in 0..n {
            let position = NVec3::new(i as f64 * spacing - half, layout.height, 0.0);
            particles.push(Particle::new(position, params.particle_mass));
        }
        if let Some(first) = particles.first_mut() {
            first.anchored = true;
        }
        if let Some(last) = particles.last_mut() {
            last.anchored = true;
        }

        let springs = (0..n.saturating_sub(1))
            .map(|i| Spring::new(i, i + 1, spacing, params.stiffness, params.spring_damping))
            .collect();

        self.particles = particles;
        self.springs = springs;
        self.step_count = 0;

        debug!(particles = n, rest_length = spacing, "rope reset");
    }

    /// Zero every particle's force accumulator
    pub fn reset_forces(&mut self) {
        for p in self.particles.iter_mut() {
            p.force = NVec3::zeros();
        }
    }

    /// Advance the rope by one fixed time step
    pub fn step(&mut self) {
        self.reset_forces();

        // All spring forces land before any particle integrates
        for spring in &self.springs {
            spring.solve(&mut self.particles);
        }

        let world = &self.config.world;
        let params = &self.config.parameters;
        for p in self.particles.iter_mut() {
            p.step(world, params);
        }

        self.step_count += 1;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    /// Particle positions in rope order
    pub fn positions(&self) -> impl Iterator<Item = NVec3> + '_ {
        self.particles.iter().map(|p| p.position)
    }

    pub fn snapshot(&self) -> RopeSnapshot {
        RopeSnapshot {
            step: self.step_count,
            positions: self.positions().map(|p| [p.x, p.y, p.z]).collect(),
        }
    }

    /// False once any position has turned NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.particles
            .iter()
            .all(|p| p.position.iter().all(|c| c.is_finite()))
    }

    pub fn sphere(&self) -> &CollisionSphere {
        &self.config.world.sphere
    }

    pub fn world(&self) -> &World {
        &self.config.world
    }

    pub fn parameters(&self) -> &Parameters {
        &self.config.parameters
    }

    pub fn layout(&self) -> &RopeLayout {
        &self.config.layout
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}
