//! ColumnsRule - vertical curtain of noise-modulated columns

use super::{FillContext, FillRule};
use crate::core::loop_time::{fract_pos, loop_cos, loop_sin, looping_noise_2d};

pub struct ColumnsRule;

impl ColumnsRule {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn duty(density: f64) -> f64 {
        0.15 + density * 0.55
    }
}

impl FillRule for ColumnsRule {
    fn fill(&self, ctx: &mut FillContext) {
        let offset_x = ctx.rng.random() * 200.0;
        let offset_y = ctx.rng.random() * 200.0;

        let base_freq = 0.2 + ctx.rng.random() * 0.4;
        let freq = base_freq / ctx.params.scale.max(0.1);
        let noise_scale = 0.03 + ctx.rng.random() * 0.05;
        let t = ctx.t;
        let phase = loop_cos(t) * 3.0;
        let y_drift = loop_sin(t + 0.25) * 2.0;
        let duty = Self::duty(ctx.params.density);

        let (rx, ry) = (ctx.rect.x as f64, ctx.rect.y as f64);
        let w = ctx.width;
        for x in 0..w {
            let gx = rx + x as f64;
            let n_mod = looping_noise_2d(
                (gx + offset_x) * noise_scale,
                (ry + offset_y) * noise_scale,
                t,
                1,
                1.2,
            );
            let local_freq = freq * (0.4 + n_mod * 1.6);
            let col_on = fract_pos(gx * local_freq + phase) < duty;

            for y in 0..ctx.height {
                let gy = ry + y as f64 + offset_y + y_drift;
                let on = if col_on {
                    let n = looping_noise_2d(
                        (gx + offset_x) * noise_scale * 0.5,
                        gy * noise_scale * 2.0,
                        t,
                        1,
                        1.0,
                    );
                    n >= 0.12
                } else {
                    let n = looping_noise_2d(
                        (gx + offset_x) * noise_scale,
                        gy * noise_scale * 3.0,
                        t,
                        1,
                        1.0,
                    );
                    n > 0.93
                };
                fast!(ctx.bitmap, [y * w + x] = on as u8);
            }
        }
    }
}
