//! Scanning warp - two moving horizontal bands that shift rows sideways
//!
//! Inside a band each row is rotated (with wraparound) by an amount built from
//! two sine terms and a loop-periodic noise term. The falloff is steep, so rows
//! snap in and out of the band rather than fading.

use std::f64::consts::PI;

use crate::core::loop_time::looping_noise_2d;

const PRIMARY_BAND: f64 = 0.3;
const SECONDARY_BAND: f64 = 0.15;
const SECONDARY_WEIGHT: f64 = 0.6;
const FALLOFF_EXP: f64 = 0.3;
const MIN_INTENSITY: f64 = 0.01;
const SHIFT_FRACTION: f64 = 0.35;

#[inline]
fn band_intensity(y: f64, center: f64, width: f64) -> f64 {
    let half = width * 0.5;
    if half <= 0.0 {
        return 0.0;
    }
    let d = (y - center).abs() / half;
    if d < 1.0 { (1.0 - d).powf(FALLOFF_EXP) } else { 0.0 }
}

/// Band centers (primary, secondary) in rows.
pub fn band_centers(grid_h: u32, t: f64) -> (f64, f64) {
    let h = grid_h as f64;
    let primary = ((t * PI * 2.0).sin() * 0.5 + 0.5) * h;
    let secondary = ((t * PI * 2.0 + 1.0).cos() * 0.5 + 0.5) * h;
    (primary, secondary)
}

/// Combined band intensity for a row, in [0, 1].
pub fn row_intensity(y: u32, grid_h: u32, t: f64) -> f64 {
    let h = grid_h as f64;
    let (c1, c2) = band_centers(grid_h, t);
    let i1 = band_intensity(y as f64, c1, h * PRIMARY_BAND);
    let i2 = band_intensity(y as f64, c2, h * SECONDARY_BAND);
    (i1 + i2 * SECONDARY_WEIGHT).min(1.0)
}

/// Horizontal shift for row `y`; 0 for rows outside both bands.
pub fn row_shift(y: u32, grid_w: u32, grid_h: u32, t: f64, warp_amount: f64, seed: u8) -> i64 {
    if warp_amount <= 0.0 {
        return 0;
    }
    let intensity = row_intensity(y, grid_h, t);
    if intensity < MIN_INTENSITY {
        return 0;
    }
    let max_shift = warp_amount * grid_w as f64 * SHIFT_FRACTION;
    let yf = y as f64;
    let s = seed as f64;
    let wave1 = (yf * 0.03 + t * PI * 2.0).sin() * 0.7;
    let wave2 = (yf * 0.11 + t * PI * 6.0 + 2.0).sin() * 0.3;
    let noise = looping_noise_2d(yf * 0.025 + s * 7.1, s, t, 3, 1.0) * 2.0 - 1.0;
    ((wave1 + wave2 + noise * 0.5) * max_shift * intensity).round() as i64
}

/// Write the warped `src` into `dst`. Both are `grid_w * grid_h`, row-major.
pub fn apply_warp(
    src: &[u8],
    dst: &mut [u8],
    grid_w: u32,
    grid_h: u32,
    t: f64,
    warp_amount: f64,
    seed: u8,
) {
    debug_assert_eq!(src.len(), dst.len());
    if warp_amount <= 0.0 || grid_w == 0 {
        dst.copy_from_slice(src);
        return;
    }

    let w = grid_w as usize;
    for y in 0..grid_h {
        let row = y as usize * w;
        let src_row = &src[row..row + w];
        let dst_row = &mut dst[row..row + w];

        let shift = row_shift(y, grid_w, grid_h, t, warp_amount, seed).rem_euclid(w as i64) as usize;
        if shift == 0 {
            dst_row.copy_from_slice(src_row);
        } else {
            // dst[x] = src[(x - shift) mod w]
            dst_row[shift..].copy_from_slice(&src_row[..w - shift]);
            dst_row[..shift].copy_from_slice(&src_row[w - shift..]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(w: usize, h: usize) -> Vec<u8> {
        (0..w * h).map(|i| ((i * 7 + i / w) % 3 == 0) as u8).collect()
    }

    #[test]
    fn non_positive_warp_is_exact_copy() {
        for &(w, h) in &[(1u32, 1u32), (37, 19), (100, 50)] {
            let src = pattern(w as usize, h as usize);
            for &amount in &[0.0, -0.5] {
                for &t in &[0.0, 0.25, 0.9] {
                    let mut dst = vec![9u8; src.len()];
                    apply_warp(&src, &mut dst, w, h, t, amount, 42);
                    assert_eq!(dst, src);
                }
            }
        }
    }

    #[test]
    fn rows_are_rotations_of_source_rows() {
        let (w, h) = (40u32, 30u32);
        let src = pattern(w as usize, h as usize);
        let mut dst = vec![0u8; src.len()];
        apply_warp(&src, &mut dst, w, h, 0.6, 1.0, 9);
        for y in 0..h as usize {
            let shift = row_shift(y as u32, w, h, 0.6, 1.0, 9).rem_euclid(w as i64) as usize;
            for x in 0..w as usize {
                let sx = (x + w as usize - shift) % w as usize;
                assert_eq!(dst[y * w as usize + x], src[y * w as usize + sx]);
            }
        }
    }

    #[test]
    fn quarter_loop_scenario_matches_formula() {
        let (w, h, t, amount, seed) = (100u32, 50u32, 0.25, 0.3, 0u8);

        let (c1, c2) = band_centers(h, t);
        assert!((c1 - 50.0).abs() < 1e-9, "primary band sits on the bottom edge");
        let expected_c2 = ((0.5 * PI + 1.0).cos() * 0.5 + 0.5) * 50.0;
        assert!((c2 - expected_c2).abs() < 1e-9);

        // Far from the bottom edge the primary band contributes nothing
        assert_eq!(band_intensity(0.0, c1, 15.0), 0.0);

        let max_shift = amount * 100.0 * 0.35;
        for y in 0..h {
            let yf = y as f64;
            let i1 = band_intensity(yf, c1, 50.0 * 0.3);
            let i2 = band_intensity(yf, c2, 50.0 * 0.15);
            let intensity = (i1 + 0.6 * i2).min(1.0);
            let expected = if intensity < 0.01 {
                0
            } else {
                let wave1 = (yf * 0.03 + t * PI * 2.0).sin() * 0.7;
                let wave2 = (yf * 0.11 + t * PI * 6.0 + 2.0).sin() * 0.3;
                let noise = looping_noise_2d(yf * 0.025, 0.0, t, 3, 1.0) * 2.0 - 1.0;
                ((wave1 + wave2 + noise * 0.5) * max_shift * intensity).round() as i64
            };
            assert_eq!(row_shift(y, w, h, t, amount, seed), expected, "row {}", y);
        }
        // Rows next to the bottom edge are inside the primary band
        assert!(row_intensity(h - 1, h, t) > 0.5);
        assert_eq!(row_shift(0, w, h, t, amount, seed) == 0, row_intensity(0, h, t) < 0.01);
    }

    #[test]
    fn intensity_is_bounded() {
        for y in 0..64 {
            for k in 0..10 {
                let i = row_intensity(y, 64, k as f64 / 10.0);
                assert!((0.0..=1.0).contains(&i));
            }
        }
    }
}
