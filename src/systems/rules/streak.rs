//! StreakRule - dense horizontal banding
//!
//! Each row is either on or off from a fractional-phase test; loop noise
//! modulates the per-row frequency. On-rows lose sparse pixels, off-rows pick
//! up sparse sparks.

use super::{FillContext, FillRule};
use crate::core::loop_time::{fract_pos, loop_cos, loop_sin, looping_noise_2d};

const DROPOUT_BELOW: f64 = 0.15;
const SPARK_ABOVE: f64 = 0.92;

pub struct StreakRule;

impl StreakRule {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn duty(density: f64) -> f64 {
        0.2 + density * 0.6
    }
}

impl FillRule for StreakRule {
    fn fill(&self, ctx: &mut FillContext) {
        let offset_y = ctx.rng.random() * 200.0;
        let offset_x = ctx.rng.random() * 200.0;

        // Bands per cell
        let base_freq = 0.3 + ctx.rng.random() * 0.5;
        let freq = base_freq / ctx.params.scale.max(0.1);

        let noise_scale = 0.04 + ctx.rng.random() * 0.06;
        let t = ctx.t;
        let phase = loop_sin(t) * 4.0;
        let drift = loop_cos(t + 0.3) * 2.0;
        let duty = Self::duty(ctx.params.density);

        let (rx, ry) = (ctx.rect.x as f64, ctx.rect.y as f64);
        let w = ctx.width;
        for y in 0..ctx.height {
            let gy = ry + y as f64;
            let n_mod = looping_noise_2d(
                (rx + offset_x) * noise_scale,
                (gy + offset_y) * noise_scale,
                t,
                1,
                1.2,
            );
            let local_freq = freq * (0.5 + n_mod * 1.5);
            let row_on = fract_pos(gy * local_freq + phase) < duty;

            for x in 0..w {
                let gx = rx + x as f64;
                let on = if row_on {
                    let n = looping_noise_2d(
                        (gx + offset_x) * noise_scale * 2.0,
                        (gy + offset_y) * noise_scale * 0.5,
                        t,
                        1,
                        1.0,
                    );
                    n >= DROPOUT_BELOW
                } else {
                    let n = looping_noise_2d(
                        (gx + offset_x + drift) * noise_scale * 3.0,
                        (gy + offset_y) * noise_scale,
                        t,
                        1,
                        1.0,
                    );
                    n > SPARK_ABOVE
                };
                fast!(ctx.bitmap, [y * w + x] = on as u8);
            }
        }
    }
}
