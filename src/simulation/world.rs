//! Static world the rope lives in: constant gravity and one collision sphere.
//!
//! Both are fixed for the lifetime of a simulator and only read by the core.

use super::vector::{NVec3, VectorExt};

/// A particle closer than `radius * COLLISION_MARGIN` to the sphere centre
/// is treated as touching it
pub const COLLISION_MARGIN: f64 = 1.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionSphere {
    pub center: NVec3, // world-space centre
    pub radius: f64,   // collision radius
}

impl CollisionSphere {
    pub fn new(center: NVec3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Distance at or below which a point counts as in contact
    pub fn contact_distance(&self) -> f64 {
        self.radius * COLLISION_MARGIN
    }

    /// Returns the distance from `point` to the centre when the point is in
    /// contact with the sphere
    pub fn contact(&self, point: &NVec3) -> Option<f64> {
        let distance = point.distance_to(&self.center);
        (distance <= self.contact_distance()).then_some(distance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    pub gravity: NVec3, // (0, g, 0) with g < 0 in the default world
    pub sphere: CollisionSphere,
}
