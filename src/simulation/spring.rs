//! Elastic link between two neighbouring particles.
//!
//! Springs never own particles: they store indices into the particle slice
//! owned by [`RopeSimulator`](super::rope::RopeSimulator), which only
//! rebuilds that slice during a reset, before any spring is created.

use super::particle::Particle;
use super::vector::{NVec3, VectorExt};

#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    pub first: usize,     // index of the left particle
    pub second: usize,    // index of the right particle
    pub rest_length: f64, // fixed at construction
    pub stiffness: f64,   // k in F = k * x
    pub damping: f64,     // kept with the link, not used by the force law
}

impl Spring {
    pub fn new(first: usize, second: usize, rest_length: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            first,
            second,
            rest_length,
            stiffness,
            damping,
        }
    }

    /// Full spring force along the link, pointing from `first` to `second`
    /// and scaled by the signed stretch (negative when compressed).
    /// Coincident endpoints give a zero force.
    pub fn force(&self, particles: &[Particle]) -> NVec3 {
        let delta = particles[self.second].position - particles[self.first].position;
        let stretch = delta.norm() - self.rest_length;

        delta.normalized_or_zero() * self.stiffness * stretch
    }

    /// Add half the spring force to each endpoint, in opposite directions
    pub fn solve(&self, particles: &mut [Particle]) {
        let force = self.force(particles);

        particles[self.first].force += force * 0.5;
        particles[self.second].force -= force * 0.5;
    }
}
