//! Global configuration constants for the Tether2D engine.

use serde::{Deserialize, Serialize};

/// Default gravitational acceleration, screen coordinates (+y is down).
pub const DEFAULT_GRAVITY: f32 = 9.8;

/// Default fraction of velocity turned into an opposing drag force each
/// tick.
pub const DEFAULT_DRAG_COEFFICIENT: f32 = 0.2;

/// Default body mass when the host does not specify one.
pub const DEFAULT_BODY_MASS: f32 = 1.0;

/// Environment constants supplied by the host application.
///
/// Both values are tunable parameters, not hardcoded physical law; the
/// defaults match [`DEFAULT_GRAVITY`] and [`DEFAULT_DRAG_COEFFICIENT`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Acceleration magnitude applied downward to every body each tick.
    pub gravity: f32,
    /// Fraction of velocity converted into an opposing force each tick.
    pub drag_coefficient: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
        }
    }
}
