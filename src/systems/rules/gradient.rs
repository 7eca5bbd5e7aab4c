//! GradientRule - a drifting ramp compared against a static per-cell threshold
//!
//! The threshold surface is a hash of grid-space coordinates, so only the ramp
//! moves; the result reads as a stochastic tone gradient sweeping across the
//! rectangle.

use std::f64::consts::TAU;

use super::{FillContext, FillRule};
use crate::core::loop_time::{hash_cell, loop_sin, looping_noise_2d};

pub struct GradientRule;

impl GradientRule {
    pub fn new() -> Self {
        Self
    }
}

impl FillRule for GradientRule {
    fn fill(&self, ctx: &mut FillContext) {
        let angle = ctx.rng.random() * TAU;
        let phase = ctx.rng.random();
        let salt = ctx.rng.rand_int(0, 1 << 16);
        let offset = ctx.rng.random() * 100.0;

        let (dir_x, dir_y) = (angle.cos(), angle.sin());
        let drift = loop_sin(ctx.t + phase) * 0.25;
        let bias = (ctx.params.density - 0.5) * 0.8;
        let wobble = ctx.params.noise_amount * 0.3;
        let freq = 0.1 / ctx.params.scale.max(0.1);

        let (w, h) = (ctx.width, ctx.height);
        let (rx, ry) = (ctx.rect.x as i32, ctx.rect.y as i32);
        for y in 0..h {
            let v = (y as f64 + 0.5) / h as f64 - 0.5;
            for x in 0..w {
                let u = (x as f64 + 0.5) / w as f64 - 0.5;
                let (gx, gy) = (rx + x as i32, ry + y as i32);
                let n = looping_noise_2d(
                    (gx as f64 + offset) * freq,
                    (gy as f64 + offset) * freq,
                    ctx.t,
                    1,
                    1.0,
                );
                let ramp = u * dir_x + v * dir_y + 0.5 + drift + bias + (n - 0.5) * wobble;
                fast!(ctx.bitmap, [y * w + x] = (ramp > hash_cell(gx, gy, salt)) as u8);
            }
        }
    }
}
