//! Per-tick dynamics: environment forces and elastic tethers.

pub mod connector;
pub mod forces;

pub use connector::ElasticConnector;
pub use forces::{ConstantForce, ForceGenerator, ForceRegistry, GravityForce};
