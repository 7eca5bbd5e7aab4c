//! Domain model: rule kinds and the seed-derived variant configuration.

pub mod rules;
pub mod variant;
