//! Loop oracle: normalized loop time, periodic waveforms and loop-periodic noise
//!
//! Everything here is periodic in `t` with period 1, so any field built only
//! from these helpers is identical at t=0 and t→1.

use std::f64::consts::TAU;

/// Map elapsed milliseconds onto [0, 1) for a loop of `period_ms`.
pub fn get_loop_t(elapsed_ms: f64, period_ms: f64) -> f64 {
    if period_ms.is_nan() || period_ms <= 0.0 || !elapsed_ms.is_finite() {
        return 0.0;
    }
    let t = elapsed_ms.rem_euclid(period_ms) / period_ms;
    // rem_euclid can round up to exactly `period_ms` for tiny negative inputs
    if t >= 1.0 { 0.0 } else { t }
}

#[inline]
pub fn loop_sin(t: f64) -> f64 {
    (t * TAU).sin()
}

#[inline]
pub fn loop_cos(t: f64) -> f64 {
    (t * TAU).cos()
}

/// 0 at t=0, 1 at t=0.5, back to 0 as t→1.
#[inline]
pub fn loop_triangle(t: f64) -> f64 {
    let tt = t.rem_euclid(1.0);
    1.0 - (1.0 - 2.0 * tt).abs()
}

/// Positive fractional part.
#[inline]
pub fn fract_pos(v: f64) -> f64 {
    v.rem_euclid(1.0)
}

/// Integer lattice hash mapped to [0, 1).
#[inline]
pub fn hash_cell(x: i32, y: i32, z: i32) -> f64 {
    let mut h = (x as u32).wrapping_mul(0x8da6_b343)
        ^ (y as u32).wrapping_mul(0xd816_3841)
        ^ (z as u32).wrapping_mul(0xcb1a_b31f);
    h ^= h >> 13;
    h = h.wrapping_mul(0x5bd1_e995);
    h ^= h >> 15;
    (h & 0x00ff_ffff) as f64 / 16_777_216.0
}

#[inline]
fn fade(v: f64) -> f64 {
    v * v * (3.0 - 2.0 * v)
}

#[inline]
fn lerp(a: f64, b: f64, k: f64) -> f64 {
    a + (b - a) * k
}

/// Smooth value noise in [0, 1), continuous in x and y.
pub fn value_noise_2d(x: f64, y: f64) -> f64 {
    value_noise_3d(x, y, 0.0)
}

pub fn value_noise_3d(x: f64, y: f64, z: f64) -> f64 {
    let (fx, fy, fz) = (x.floor(), y.floor(), z.floor());
    let (ix, iy, iz) = (fx as i32, fy as i32, fz as i32);
    let (u, v, w) = (fade(x - fx), fade(y - fy), fade(z - fz));

    let c = |dx: i32, dy: i32, dz: i32| hash_cell(ix.wrapping_add(dx), iy.wrapping_add(dy), iz.wrapping_add(dz));

    let x00 = lerp(c(0, 0, 0), c(1, 0, 0), u);
    let x10 = lerp(c(0, 1, 0), c(1, 1, 0), u);
    let x01 = lerp(c(0, 0, 1), c(1, 0, 1), u);
    let x11 = lerp(c(0, 1, 1), c(1, 1, 1), u);
    lerp(lerp(x00, x10, v), lerp(x01, x11, v), w)
}

/// Value noise that is periodic in `t`.
///
/// The sample point travels `loops` times around a circle of `radius` in the
/// x/z plane over one loop, so t=0 and t=1 land on the same point.
pub fn looping_noise_2d(x: f64, y: f64, t: f64, loops: u32, radius: f64) -> f64 {
    let angle = t * TAU * loops.max(1) as f64;
    value_noise_3d(x + radius * angle.cos(), y, radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_t_wraps_and_handles_bad_periods() {
        assert_eq!(get_loop_t(0.0, 6000.0), 0.0);
        assert!((get_loop_t(9000.0, 6000.0) - 0.5).abs() < 1e-12);
        assert!((get_loop_t(-1500.0, 6000.0) - 0.75).abs() < 1e-12);
        assert_eq!(get_loop_t(100.0, 0.0), 0.0);
        assert_eq!(get_loop_t(f64::NAN, 1000.0), 0.0);
    }

    #[test]
    fn triangle_meets_at_seam() {
        assert_eq!(loop_triangle(0.0), 0.0);
        assert!((loop_triangle(0.5) - 1.0).abs() < 1e-12);
        assert!(loop_triangle(1.0 - 1e-9) < 1e-8);
        assert_eq!(loop_triangle(1.0), 0.0);
    }

    #[test]
    fn looping_noise_is_periodic() {
        for i in 0..20 {
            let x = i as f64 * 0.37;
            let a = looping_noise_2d(x, 1.3, 0.0, 1, 1.5);
            let b = looping_noise_2d(x, 1.3, 1.0, 1, 1.5);
            assert!((a - b).abs() < 1e-9);
            assert!((0.0..1.0).contains(&a));
        }
    }

    #[test]
    fn value_noise_is_continuous() {
        let a = value_noise_2d(3.0 - 1e-7, 2.5);
        let b = value_noise_2d(3.0 + 1e-7, 2.5);
        assert!((a - b).abs() < 1e-5);
    }
}
