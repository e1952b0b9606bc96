//! CLI command implementations.

pub mod doctor;
pub mod plan;
pub mod target;
