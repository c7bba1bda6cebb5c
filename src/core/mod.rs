//! Core types describing simulated entities and render-facing data.

pub mod body;
pub mod types;

pub use body::PhysicsBody;
pub use types::{Color, Rect};
