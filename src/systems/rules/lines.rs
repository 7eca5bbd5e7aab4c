//! LinesRule - directional stripes sliding through the loop
//!
//! The stripe phase advances by a whole number of periods per loop, so the
//! pattern at t=1 lands exactly on the pattern at t=0.

use std::f64::consts::PI;

use super::{FillContext, FillRule};
use crate::core::loop_time::{fract_pos, looping_noise_2d};

pub struct LinesRule;

impl LinesRule {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn duty(density: f64) -> f64 {
        0.15 + density * 0.6
    }
}

impl FillRule for LinesRule {
    fn fill(&self, ctx: &mut FillContext) {
        let angle = ctx.rng.random() * PI;
        let spacing = ((3.0 + ctx.rng.random() * 6.0) * ctx.params.scale).max(1.0);
        let cycles = ctx.rng.rand_int(1, 3) as f64;
        let offset = ctx.rng.random() * 100.0;

        let (dir_x, dir_y) = (angle.cos(), angle.sin());
        let duty = Self::duty(ctx.params.density);
        let wobble = ctx.params.noise_amount * 0.5;
        let t = ctx.t;

        let (rx, ry) = (ctx.rect.x as f64, ctx.rect.y as f64);
        let w = ctx.width;
        for y in 0..ctx.height {
            let gy = ry + y as f64;
            for x in 0..w {
                let gx = rx + x as f64;
                let n = looping_noise_2d((gx + offset) * 0.08, (gy + offset) * 0.08, t, 1, 1.0);
                let u = (gx * dir_x + gy * dir_y) / spacing + t * cycles + (n - 0.5) * wobble;
                fast!(ctx.bitmap, [y * w + x] = (fract_pos(u) < duty) as u8);
            }
        }
    }
}
