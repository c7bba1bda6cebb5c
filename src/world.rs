use crate::{
    config::WorldConfig,
    core::body::PhysicsBody,
    dynamics::{
        connector::ElasticConnector,
        forces::{ForceGenerator, ForceRegistry, GravityForce},
    },
    error::{PhysicsError, Result},
    utils::{
        allocator::{Arena, BodyId},
        logging::ScopedTimer,
    },
};

/// Central simulation container orchestrating bodies and tethers.
///
/// A tick splits into a collect phase (gravity, registered generators,
/// and tether tensions all queue forces; order inside the phase does
/// not matter) and a resolve phase (every accumulator drains in exactly
/// one integration step).
pub struct PhysicsWorld {
    pub bodies: Arena<PhysicsBody>,
    pub force_registry: ForceRegistry,
    connectors: Vec<ElasticConnector>,
    gravity: f32,
    drag_coefficient: f32,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl PhysicsWorld {
    pub fn new(config: WorldConfig) -> Self {
        Self {
            bodies: Arena::new(),
            force_registry: ForceRegistry::new(),
            connectors: Vec::new(),
            gravity: config.gravity,
            drag_coefficient: config.drag_coefficient,
        }
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = gravity;
    }

    pub fn drag_coefficient(&self) -> f32 {
        self.drag_coefficient
    }

    pub fn set_drag_coefficient(&mut self, drag_coefficient: f32) {
        self.drag_coefficient = drag_coefficient;
    }

    /// Adds a body and stamps its arena id.
    pub fn add_body(&mut self, body: PhysicsBody) -> BodyId {
        let id = self.bodies.insert(body);
        if let Some(stored) = self.bodies.get_mut(id) {
            stored.id = id;
        }
        id
    }

    /// Attaches a tether; its body must already live in this world.
    pub fn attach(&mut self, connector: ElasticConnector) -> Result<usize> {
        if self.bodies.get(connector.body()).is_none() {
            return Err(PhysicsError::UnknownBody(connector.body()));
        }
        self.connectors.push(connector);
        Ok(self.connectors.len() - 1)
    }

    pub fn body(&self, id: BodyId) -> Option<&PhysicsBody> {
        self.bodies.get(id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut PhysicsBody> {
        self.bodies.get_mut(id)
    }

    pub fn connector(&self, index: usize) -> Option<&ElasticConnector> {
        self.connectors.get(index)
    }

    pub fn connector_count(&self) -> usize {
        self.connectors.len()
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) {
        let _timer = ScopedTimer::new("world::step");

        self.apply_gravity();
        self.force_registry.apply_all(&mut self.bodies);
        for connector in &mut self.connectors {
            connector.update(&mut self.bodies);
        }

        for body in self.bodies.iter_mut() {
            body.integrate(self.drag_coefficient);
        }
    }

    fn apply_gravity(&mut self) {
        let gravity = GravityForce::new(self.gravity);
        for body in self.bodies.iter_mut() {
            gravity.apply(body);
        }
    }

    /// Snaps a tethered body to its analytic rest position under the
    /// world gravity. Velocity is left as-is; pair with
    /// [`PhysicsBody::reset_velocity`] for a clean reset.
    pub fn place_at_equilibrium(&mut self, connector: usize) -> Result<()> {
        let connector = self
            .connectors
            .get(connector)
            .ok_or(PhysicsError::UnknownConnector(connector))?;
        connector.place_at_equilibrium(&mut self.bodies, self.gravity)
    }
}
