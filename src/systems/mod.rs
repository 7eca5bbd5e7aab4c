//! Systems - the per-frame pipeline stages
//!
//! - rules/      - the eight fill algorithms and the stepped loop blend
//! - events      - timed per-rectangle overlay gates
//! - warp        - global scanning row distortion
//! - compositor  - grid → device pixels
//! - calm        - geometric fallback fills that bypass subdivision

pub mod calm;
pub mod compositor;
pub mod events;
pub mod rules;
pub mod warp;
