//! Spatial partitioning of the grid into independently-filled rectangles.

pub mod subdivide;

pub use subdivide::{subdivide, Rect, SubdivideOptions};
