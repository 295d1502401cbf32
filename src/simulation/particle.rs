//! Point mass of the rope and its position-Verlet integration step

use super::params::Parameters;
use super::vector::NVec3;
use super::world::World;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: NVec3,          // current world-space position
    pub previous_position: NVec3, // position one step ago
    pub velocity: NVec3,          // per-step displacement, derived during `step`
    pub force: NVec3,             // accumulated force, cleared by the simulator
    pub mass: f64,
    pub anchored: bool,           // anchored particles never move
}

impl Particle {
    /// Free particle at rest at `position`
    pub fn new(position: NVec3, mass: f64) -> Self {
        Self {
            position,
            previous_position: position,
            velocity: NVec3::zeros(),
            force: NVec3::zeros(),
            mass,
            anchored: false,
        }
    }

    /// Particle pinned in place at `position`
    pub fn anchored(position: NVec3, mass: f64) -> Self {
        Self {
            anchored: true,
            ..Self::new(position, mass)
        }
    }

    /// Advance this particle by one fixed step.
    ///
    /// Adds gravity to the accumulated force, estimates the per-step
    /// displacement from the last two positions (damped) plus `a * dt^2`,
    /// then resolves contact with the world sphere by pushing the particle
    /// along +Y. The force accumulator is left as-is for the caller to clear.
    pub fn step(&mut self, world: &World, params: &Parameters) {
        if self.anchored {
            return;
        }

        let dt = params.dt;
        let temp = self.position;

        self.force += world.gravity;
        let acceleration = self.force / self.mass;

        // The displacement already spans one step, so it is not scaled by dt again
        self.velocity = (self.position - self.previous_position) * (1.0 - params.damping)
            + acceleration * dt * dt;
        let mut new_position = self.position + self.velocity;

        // Correction is along world up, not along the contact normal
        if let Some(distance) = world.sphere.contact(&new_position) {
            new_position.y += world.sphere.radius - distance;
            self.velocity.y = 0.0;
        }

        self.previous_position = temp;
        self.position = new_position;
    }
}
