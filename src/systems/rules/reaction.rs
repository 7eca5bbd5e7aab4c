//! ReactionRule - cheap reaction-diffusion on a [0, 1] field
//!
//! Each iteration diffuses toward the 3x3 mean and applies a cubic bistable
//! term that pushes values away from 0.3. Snapshots are binarized at 0.5 and
//! blended through the stepped loop blend.

use super::stepped::fill_stepped;
use super::{cluster_init, cluster_size, sim_steps, FillContext, FillRule};
use crate::core::loop_time::loop_triangle;
use crate::core::utils::safety::wrap_coord;

const DIFF_RATE: f32 = 0.2;
const REACT_RATE: f32 = 0.02;
const REACT_PIVOT: f32 = 0.3;

pub struct ReactionRule;

impl ReactionRule {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn fill_ratio(density: f64) -> f64 {
        0.1 + density * 0.4
    }
}

impl FillRule for ReactionRule {
    fn fill(&self, ctx: &mut FillContext) {
        let (w, h) = (ctx.width, ctx.height);
        let p = ctx.params;

        let init = cluster_init(
            w,
            h,
            cluster_size(p.scale),
            Self::fill_ratio(p.density),
            ctx.rng,
            1.0f32,
            0.0f32,
        );
        let blend_seed = ctx.rng.random();

        let continuous = loop_triangle(ctx.t) * sim_steps(p.scale) as f64;
        fill_stepped(
            ctx.bitmap,
            w,
            init,
            continuous,
            blend_seed,
            |src, dst| reaction_step(src, dst, w, h),
            |&v| (v > 0.5) as u8,
        );
    }
}

/// One diffusion + reaction iteration on a torus. Output is clamped to [0, 1].
pub fn reaction_step(src: &[f32], dst: &mut [f32], width: usize, height: usize) {
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0f32;
            for dy in -1..=1isize {
                let ny = wrap_coord(y, dy, height);
                for dx in -1..=1isize {
                    let nx = wrap_coord(x, dx, width);
                    sum += *fast!(src, [ny * width + nx]);
                }
            }
            let avg = sum / 9.0;
            let idx = y * width + x;
            let val = *fast!(src, [idx]);
            let reacted = val
                + DIFF_RATE * (avg - val)
                + REACT_RATE * (val * (1.0 - val) * (val - REACT_PIVOT));
            fast!(dst, [idx] = reacted.clamp(0.0, 1.0));
        }
    }
}
