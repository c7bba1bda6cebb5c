//! Error types for the Tether2D engine.
//!
//! This module provides the unified error type [`PhysicsError`] and a
//! convenient [`Result`] alias. All validation happens at construction
//! time; a world built from valid parts has no steady-state failure
//! modes while stepping.

use std::fmt;

use crate::utils::allocator::BodyId;

/// Main error type for the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicsError {
    /// Body mass must be positive and finite.
    InvalidMass(f32),
    /// Body extent must be positive and finite on both axes.
    InvalidExtent { width: f32, height: f32 },
    /// Tether modulus must be positive and finite.
    InvalidModulus(f32),
    /// Tether natural length must be positive and finite.
    InvalidNaturalLength(f32),
    /// No body with the given id exists in the world.
    UnknownBody(BodyId),
    /// No connector with the given index exists in the world.
    UnknownConnector(usize),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidMass(mass) => {
                write!(f, "mass must be positive and finite, got {mass}")
            }
            Self::InvalidExtent { width, height } => {
                write!(f, "extent must be positive and finite, got {width}x{height}")
            }
            Self::InvalidModulus(modulus) => {
                write!(f, "modulus must be positive and finite, got {modulus}")
            }
            Self::InvalidNaturalLength(length) => {
                write!(f, "natural length must be positive and finite, got {length}")
            }
            Self::UnknownBody(id) => write!(f, "no body with id {id:?}"),
            Self::UnknownConnector(index) => write!(f, "no connector at index {index}"),
        }
    }
}

impl std::error::Error for PhysicsError {}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, PhysicsError>;
