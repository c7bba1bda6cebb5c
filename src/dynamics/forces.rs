use glam::Vec2;

use crate::core::body::PhysicsBody;
use crate::utils::allocator::Arena;

/// Trait describing an environment force queued onto bodies during the
/// collect phase of a tick.
pub trait ForceGenerator: Send + Sync {
    fn apply(&self, body: &mut PhysicsBody);
}

/// Constant downward gravity scaled by body mass (screen coordinates,
/// +y is down).
pub struct GravityForce {
    pub gravity: f32,
}

impl GravityForce {
    pub fn new(gravity: f32) -> Self {
        Self { gravity }
    }
}

impl ForceGenerator for GravityForce {
    fn apply(&self, body: &mut PhysicsBody) {
        body.add_force(Vec2::new(0.0, body.mass() * self.gravity));
    }
}

/// Fixed force applied to every body regardless of mass, e.g. a wind
/// gust.
pub struct ConstantForce {
    pub force: Vec2,
}

impl ForceGenerator for ConstantForce {
    fn apply(&self, body: &mut PhysicsBody) {
        body.add_force(self.force);
    }
}

/// Collection of generators run once per tick over every body.
pub struct ForceRegistry {
    forces: Vec<Box<dyn ForceGenerator>>,
}

impl Default for ForceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceRegistry {
    pub fn new() -> Self {
        Self { forces: Vec::new() }
    }

    pub fn add_force<F: ForceGenerator + 'static>(&mut self, force: F) {
        self.forces.push(Box::new(force));
    }

    pub fn apply_all(&self, bodies: &mut Arena<PhysicsBody>) {
        for force in &self.forces {
            for body in bodies.iter_mut() {
                force.apply(body);
            }
        }
    }
}
