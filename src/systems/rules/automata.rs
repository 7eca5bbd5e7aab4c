//! AutomataRule - toroidal Conway life, stepped through the loop
//!
//! Density sets the initial fill ratio, scale sets both the seed cluster size
//! and how many generations the loop reaches at its midpoint.

use super::stepped::fill_stepped;
use super::{cluster_init, cluster_size, sim_steps, FillContext, FillRule};
use crate::core::loop_time::loop_triangle;
use crate::core::utils::safety::wrap_coord;

const BIRTH: u8 = 3;
const SURVIVE_MIN: u8 = 2;
const SURVIVE_MAX: u8 = 3;

pub struct AutomataRule;

impl AutomataRule {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn fill_ratio(density: f64) -> f64 {
        0.15 + density * 0.5
    }
}

impl FillRule for AutomataRule {
    fn fill(&self, ctx: &mut FillContext) {
        let (w, h) = (ctx.width, ctx.height);
        let p = ctx.params;

        let init = cluster_init(
            w,
            h,
            cluster_size(p.scale),
            Self::fill_ratio(p.density),
            ctx.rng,
            1u8,
            0u8,
        );
        let blend_seed = ctx.rng.random();

        let continuous = loop_triangle(ctx.t) * sim_steps(p.scale) as f64;
        fill_stepped(
            ctx.bitmap,
            w,
            init,
            continuous,
            blend_seed,
            |src, dst| life_step(src, dst, w, h),
            |&c| c,
        );
    }
}

/// One B3/S23 generation on a torus.
pub fn life_step(src: &[u8], dst: &mut [u8], width: usize, height: usize) {
    for y in 0..height {
        for x in 0..width {
            let mut neighbors = 0u8;
            for dy in -1..=1isize {
                let ny = wrap_coord(y, dy, height);
                for dx in -1..=1isize {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = wrap_coord(x, dx, width);
                    neighbors += *fast!(src, [ny * width + nx]);
                }
            }
            let idx = y * width + x;
            let alive = *fast!(src, [idx]) != 0;
            let next = if alive {
                (SURVIVE_MIN..=SURVIVE_MAX).contains(&neighbors)
            } else {
                neighbors == BIRTH
            };
            fast!(dst, [idx] = next as u8);
        }
    }
}
