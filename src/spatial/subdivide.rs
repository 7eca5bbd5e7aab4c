//! Recursive binary space partition of a grid region
//!
//! Output rectangles exactly tile the input region: no gaps, no overlaps.
//! Order is depth-first (first child before second) and fully determined by
//! the generator state.

use serde::Serialize;

use crate::core::prng::Prng;

/// Axis-aligned region in grid cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    #[inline]
    pub fn area(&self) -> usize {
        (self.w as usize) * (self.h as usize)
    }
}

#[derive(Clone, Debug)]
pub struct SubdivideOptions {
    /// Cut lines snap to multiples of this many cells
    pub grid_step: u32,
    /// Minimum child side, in grid steps
    pub min_cells: u32,
    pub max_depth: u32,
    /// Chance to stop early at any depth below the root
    pub stop_prob: f64,
}

pub fn subdivide(region: Rect, opts: &SubdivideOptions, rng: &mut Prng) -> Vec<Rect> {
    let mut out = Vec::new();
    if region.is_empty() {
        return out;
    }
    split(region, 0, opts, rng, &mut out);
    out
}

fn split(rect: Rect, depth: u32, opts: &SubdivideOptions, rng: &mut Prng, out: &mut Vec<Rect>) {
    if depth >= opts.max_depth || (depth > 0 && rng.random() < opts.stop_prob) {
        out.push(rect);
        return;
    }

    let step = opts.grid_step.max(1);
    let min_len = opts.min_cells.max(1).saturating_mul(step);
    let can_cut_x = rect.w >= min_len.saturating_mul(2);
    let can_cut_y = rect.h >= min_len.saturating_mul(2);

    let cut_x = match (can_cut_x, can_cut_y) {
        (false, false) => {
            out.push(rect);
            return;
        }
        (true, false) => true,
        (false, true) => false,
        // Prefer cutting the long side of elongated rects
        (true, true) => {
            let (w, h) = (rect.w as f64, rect.h as f64);
            if w > h * 1.25 {
                true
            } else if h > w * 1.25 {
                false
            } else {
                rng.random() < 0.5
            }
        }
    };

    let len = if cut_x { rect.w } else { rect.h };
    let slots = (len - 2 * min_len) / step;
    let at = min_len + step * rng.rand_int(0, slots as i32 + 1) as u32;

    let (a, b) = if cut_x {
        (
            Rect { x: rect.x, y: rect.y, w: at, h: rect.h },
            Rect { x: rect.x + at, y: rect.y, w: rect.w - at, h: rect.h },
        )
    } else {
        (
            Rect { x: rect.x, y: rect.y, w: rect.w, h: at },
            Rect { x: rect.x, y: rect.y + at, w: rect.w, h: rect.h - at },
        )
    };

    split(a, depth + 1, opts, rng, out);
    split(b, depth + 1, opts, rng, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coverage(region: Rect, rects: &[Rect]) -> Vec<u32> {
        let mut hits = vec![0u32; region.area()];
        for r in rects {
            for y in r.y..r.y + r.h {
                for x in r.x..r.x + r.w {
                    assert!(x < region.w && y < region.h, "rect {:?} leaves region", r);
                    hits[(y * region.w + x) as usize] += 1;
                }
            }
        }
        hits
    }

    #[test]
    fn partition_is_exact_for_many_configs() {
        let region = Rect { x: 0, y: 0, w: 97, h: 61 };
        for seed in 0..40u64 {
            for &(min_cells, max_depth, stop_prob) in
                &[(2, 3, 0.05), (5, 6, 0.3), (1, 9, 0.0), (30, 4, 0.1), (2, 0, 0.5)]
            {
                let opts = SubdivideOptions { grid_step: 1, min_cells, max_depth, stop_prob };
                let mut rng = Prng::new(seed);
                let rects = subdivide(region, &opts, &mut rng);
                assert!(!rects.is_empty());
                assert!(coverage(region, &rects).iter().all(|&c| c == 1));
                assert!(rects.iter().all(|r| !r.is_empty()));
            }
        }
    }

    #[test]
    fn children_respect_min_size_and_step() {
        let region = Rect { x: 0, y: 0, w: 128, h: 72 };
        let opts = SubdivideOptions { grid_step: 4, min_cells: 2, max_depth: 6, stop_prob: 0.0 };
        let rects = subdivide(region, &opts, &mut Prng::new(9));
        for r in &rects {
            assert_eq!(r.x % 4, 0);
            assert_eq!(r.y % 4, 0);
        }
        assert!(rects.len() > 1);
    }

    #[test]
    fn same_generator_state_same_layout() {
        let region = Rect { x: 0, y: 0, w: 64, h: 40 };
        let opts = SubdivideOptions { grid_step: 1, min_cells: 3, max_depth: 5, stop_prob: 0.2 };
        let a = subdivide(region, &opts, &mut Prng::new(77));
        let b = subdivide(region, &opts, &mut Prng::new(77));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_region_yields_nothing() {
        let opts = SubdivideOptions { grid_step: 1, min_cells: 2, max_depth: 4, stop_prob: 0.1 };
        assert!(subdivide(Rect { x: 0, y: 0, w: 0, h: 10 }, &opts, &mut Prng::new(1)).is_empty());
    }
}
