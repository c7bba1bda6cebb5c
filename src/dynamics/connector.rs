use glam::Vec2;

use crate::core::body::PhysicsBody;
use crate::core::types::Color;
use crate::error::{PhysicsError, Result};
use crate::utils::allocator::{Arena, BodyId};

/// Elastic tether between a fixed anchor point and one body.
///
/// The tether is linear-Hookean and double-sided: a compressed tether
/// pushes with the same law a stretched one pulls. Extension, angle,
/// and tension are recomputed every tick and cached for queries; the
/// tether reads the body's position but only ever writes through its
/// force accumulator.
#[derive(Debug, Clone)]
pub struct ElasticConnector {
    anchor: Vec2,
    body: BodyId,
    modulus: f32,
    natural_length: f32,
    extension: f32,
    angle: f32,
    tension: Vec2,
    color: Color,
}

impl ElasticConnector {
    /// Creates a tether from `anchor` to the body behind `body`.
    ///
    /// Fails fast on a non-positive or non-finite modulus or natural
    /// length; both divide the tension every tick.
    pub fn new(anchor: Vec2, body: BodyId, modulus: f32, natural_length: f32) -> Result<Self> {
        if !(modulus.is_finite() && modulus > 0.0) {
            return Err(PhysicsError::InvalidModulus(modulus));
        }
        if !(natural_length.is_finite() && natural_length > 0.0) {
            return Err(PhysicsError::InvalidNaturalLength(natural_length));
        }

        Ok(Self {
            anchor,
            body,
            modulus,
            natural_length,
            extension: 0.0,
            angle: 0.0,
            tension: Vec2::ZERO,
            color: Color::default(),
        })
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Recomputes extension, angle, and tension, then queues the
    /// resulting force on the attached body.
    ///
    /// A stale body id makes the update a no-op for the tick.
    pub fn update(&mut self, bodies: &mut Arena<PhysicsBody>) {
        let Some(body) = bodies.get_mut(self.body) else {
            return;
        };

        let center = body.center();
        self.calculate_extension(center);
        self.calculate_angle(center);
        self.calculate_tension();
        body.add_force(-self.tension);
    }

    fn calculate_extension(&mut self, center: Vec2) {
        let d = center.distance(self.anchor);
        if d == 0.0 {
            self.extension = 0.0;
            return;
        }
        self.extension = d - self.natural_length;
    }

    /// Direction from the anchor to the body. Coincident points resolve
    /// to an angle of zero (`atan2(0, 0)` is defined).
    fn calculate_angle(&mut self, center: Vec2) {
        self.angle = (center.y - self.anchor.y).atan2(center.x - self.anchor.x);
    }

    fn calculate_tension(&mut self) {
        let t = self.extension * self.modulus / self.natural_length;
        // Vertical component is deliberately asymmetric: 0.5 * (1 + sin)
        // instead of the plain sin projection.
        self.tension = Vec2::new(t * self.angle.cos(), 0.5 * t * (1.0 + self.angle.sin()));
    }

    /// Moves the attached body straight to the rest position of a
    /// vertically hanging tether under `gravity`.
    ///
    /// Velocity is untouched; callers zero it separately when the body
    /// should stay put.
    pub fn place_at_equilibrium(&self, bodies: &mut Arena<PhysicsBody>, gravity: f32) -> Result<()> {
        let body = bodies
            .get_mut(self.body)
            .ok_or(PhysicsError::UnknownBody(self.body))?;

        let sag = self.natural_length * body.mass() * gravity / self.modulus;
        body.set_center(Vec2::new(
            self.anchor.x,
            self.anchor.y + self.natural_length + sag,
        ));
        Ok(())
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn body(&self) -> BodyId {
        self.body
    }

    pub fn modulus(&self) -> f32 {
        self.modulus
    }

    pub fn natural_length(&self) -> f32 {
        self.natural_length
    }

    /// Signed stretch past the natural length as of the last update;
    /// negative when compressed.
    pub fn extension(&self) -> f32 {
        self.extension
    }

    /// Direction from anchor to body as of the last update, radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Tension vector as of the last update. The force queued on the
    /// body is its negation.
    pub fn tension(&self) -> Vec2 {
        self.tension
    }

    pub fn color(&self) -> Color {
        self.color
    }
}
