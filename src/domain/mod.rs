//! Domain layer - Quiz semantics and shared primitives.

pub mod foundation;
pub mod quiz;
