//! Alignment Scorer - Political Alignment Quiz Core
//!
//! This crate implements the logical core of an alignment quiz: per-category
//! score aggregation, closest-profile matching, the quiz session state
//! machine, and an append-only history log behind a storage port.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
