//! Tether2D – 2D elastic-tether physics engine.
//!
//! The crate simulates rigid boxes hanging from fixed anchor points on
//! elastic tethers, under gravity and air resistance, in screen
//! coordinates (+y down). Bodies accumulate forces over a tick and
//! resolve them in one semi-implicit Euler step; tethers recompute
//! extension, direction, and tension each tick and feed the result back
//! through the body's accumulator. Rendering, input, and frame pacing
//! stay with the host, which reads positions back through the world's
//! queries.

pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use config::{WorldConfig, DEFAULT_BODY_MASS, DEFAULT_DRAG_COEFFICIENT, DEFAULT_GRAVITY};
pub use crate::core::{
    body::PhysicsBody,
    types::{Color, Rect},
};
pub use dynamics::{
    connector::ElasticConnector,
    forces::{ConstantForce, ForceGenerator, ForceRegistry, GravityForce},
};
pub use error::{PhysicsError, Result};
pub use utils::allocator::{Arena, BodyId};
pub use world::PhysicsWorld;

/// High-level convenience wrapper that owns a [`PhysicsWorld`].
pub struct Simulation {
    world: PhysicsWorld,
}

impl Simulation {
    /// Creates a simulation with the provided environment constants.
    pub fn new(config: WorldConfig) -> Self {
        Self {
            world: PhysicsWorld::new(config),
        }
    }

    /// Spawns a box body and returns its [`BodyId`].
    pub fn spawn_box(
        &mut self,
        center: Vec2,
        extent: Vec2,
        mass: f32,
        color: Color,
    ) -> Result<BodyId> {
        let body = PhysicsBody::new(center, extent, mass)?.with_color(color);
        Ok(self.world.add_body(body))
    }

    /// Tethers an existing body to a fixed anchor and returns the
    /// connector index.
    pub fn tether(
        &mut self,
        anchor: Vec2,
        body: BodyId,
        modulus: f32,
        natural_length: f32,
    ) -> Result<usize> {
        let connector = ElasticConnector::new(anchor, body, modulus, natural_length)?;
        self.world.attach(connector)
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) {
        self.world.step();
    }

    /// Snaps a tethered body to its rest position and zeroes its
    /// velocity.
    pub fn reset_to_equilibrium(&mut self, connector: usize) -> Result<()> {
        let body_id = self
            .world
            .connector(connector)
            .ok_or(PhysicsError::UnknownConnector(connector))?
            .body();
        self.world.place_at_equilibrium(connector)?;
        if let Some(body) = self.world.body_mut(body_id) {
            body.reset_velocity();
        }
        Ok(())
    }

    /// Teleports a body to `to` and zeroes its velocity.
    pub fn teleport(&mut self, body: BodyId, to: Vec2) -> Result<()> {
        let body = self
            .world
            .body_mut(body)
            .ok_or(PhysicsError::UnknownBody(body))?;
        body.set_center(to);
        body.reset_velocity();
        Ok(())
    }

    pub fn body(&self, id: BodyId) -> Option<&PhysicsBody> {
        self.world.body(id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut PhysicsBody> {
        self.world.body_mut(id)
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }
}
