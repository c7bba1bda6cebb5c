//! Utility helpers: generational allocator and logging.

pub mod allocator;
pub mod logging;

pub use allocator::{Arena, BodyId};
