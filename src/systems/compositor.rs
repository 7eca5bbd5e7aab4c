//! Compositor - grid cells → device pixel blocks
//!
//! Pixels are packed ABGR (little-endian bytes RR,GG,BB,AA) so the host can
//! view the buffer directly as canvas `ImageData`.

/// Opaque black in ABGR
pub const BLACK: u32 = 0xFF00_0000;
/// Opaque white in ABGR
pub const WHITE: u32 = 0xFFFF_FFFF;

/// Device pixels per grid cell
#[inline]
pub fn px_step(grid_step: u32, dpr: f64) -> u32 {
    (grid_step as f64 * dpr).round().max(0.0) as u32
}

/// Clear `pixels` to black, then paint every set grid cell as a
/// `step`×`step` white block clipped to the buffer.
pub fn composite(
    grid: &[u8],
    grid_w: u32,
    grid_h: u32,
    step: u32,
    pixels: &mut [u32],
    px_w: u32,
    px_h: u32,
) {
    debug_assert_eq!(pixels.len(), px_w as usize * px_h as usize);
    pixels.fill(BLACK);
    if step == 0 || px_w == 0 {
        return;
    }

    let pw = px_w as usize;
    for gy in 0..grid_h {
        let py0 = gy.saturating_mul(step);
        if py0 >= px_h {
            break;
        }
        let py1 = py0.saturating_add(step).min(px_h);
        let row = gy as usize * grid_w as usize;

        for gx in 0..grid_w {
            if grid[row + gx as usize] == 0 {
                continue;
            }
            let px0 = gx.saturating_mul(step);
            if px0 >= px_w {
                break;
            }
            let px1 = px0.saturating_add(step).min(px_w) as usize;
            for py in py0..py1 {
                let off = py as usize * pw;
                pixels[off + px0 as usize..off + px1].fill(WHITE);
            }
        }
    }
}
