use glam::Vec2;

use super::types::{Color, Rect};
use crate::error::{PhysicsError, Result};
use crate::utils::allocator::BodyId;

/// Rigid box body storing kinematic state and the per-tick force
/// accumulator.
///
/// Forces queued through [`add_force`](PhysicsBody::add_force) do not
/// persist across ticks: every tick starts from zero net force, and each
/// source resubmits its contribution before the single
/// [`integrate`](PhysicsBody::integrate) call drains the accumulator.
#[derive(Debug, Clone)]
pub struct PhysicsBody {
    pub id: BodyId,
    mass: f32,
    center: Vec2,
    extent: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    pending_forces: Vec<Vec2>,
    color: Color,
}

impl PhysicsBody {
    /// Creates a body centered at `center`.
    ///
    /// Fails fast on a non-positive or non-finite mass or extent; both
    /// are divided by or drawn with every tick and cannot be repaired
    /// mid-simulation.
    pub fn new(center: Vec2, extent: Vec2, mass: f32) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(PhysicsError::InvalidMass(mass));
        }
        if !(extent.x.is_finite() && extent.x > 0.0 && extent.y.is_finite() && extent.y > 0.0) {
            return Err(PhysicsError::InvalidExtent {
                width: extent.x,
                height: extent.y,
            });
        }

        Ok(Self {
            id: BodyId::default(),
            mass,
            center,
            extent,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            pending_forces: Vec::new(),
            color: Color::default(),
        })
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Queues a force for the current tick. Any finite vector is
    /// accepted as-is.
    pub fn add_force(&mut self, force: Vec2) {
        self.pending_forces.push(force);
    }

    /// Resolves the accumulated forces into one unit-time-step
    /// semi-implicit Euler step.
    ///
    /// Drag enters through the same accumulation path as every other
    /// force, then the whole accumulator collapses into a single net
    /// force and is cleared. Velocity picks up this tick's acceleration
    /// before the position moves, so the position advances by the
    /// updated velocity.
    pub fn integrate(&mut self, drag_coefficient: f32) {
        self.add_force(-drag_coefficient * self.velocity);

        let net: Vec2 = self.pending_forces.drain(..).sum();
        self.acceleration = net / self.mass;
        self.velocity += self.acceleration;
        self.center += self.velocity;
    }

    /// Zeroes the velocity. Pending forces and position are untouched.
    pub fn reset_velocity(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    /// Teleports the body, bypassing integration. Pair with
    /// [`reset_velocity`](PhysicsBody::reset_velocity) when the body
    /// should stay where it lands.
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Forces queued since the last integration step.
    pub fn pending_forces(&self) -> &[Vec2] {
        &self.pending_forces
    }

    /// Rectangle to draw this body at, derived from center and extent.
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.center, self.extent)
    }
}
