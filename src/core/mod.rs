//! Core building blocks shared by every stage of the pipeline.

#[macro_use]
pub mod utils;
pub mod grid;
pub mod loop_time;
pub mod prng;
