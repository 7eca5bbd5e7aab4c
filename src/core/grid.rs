//! Grid - the stitched binary frame in grid-cell space
//!
//! One byte per cell (0 = off, 1 = on), row-major. Rebuilt from scratch every
//! frame by blitting every rectangle bitmap into it; never patched incrementally.

use crate::spatial::Rect;

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    pub cells: Vec<u8>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            cells: vec![0; size],
        }
    }

    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "index: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.cells[self.index(x, y)]
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Count of set cells (handy for tests and perf stats)
    pub fn set_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Copy a rectangle's row-major bitmap into place, clipped to the grid.
    pub fn blit(&mut self, rect: &Rect, bitmap: &[u8]) {
        if rect.is_empty() {
            return;
        }
        let bw = rect.w as usize;
        debug_assert_eq!(bitmap.len(), bw * rect.h as usize);

        let end_x = (rect.x + rect.w).min(self.width);
        let end_y = (rect.y + rect.h).min(self.height);
        if rect.x >= end_x || rect.y >= end_y {
            return;
        }
        let row_len = (end_x - rect.x) as usize;

        for y in rect.y..end_y {
            let src_start = ((y - rect.y) as usize) * bw;
            let dst_start = self.index(rect.x, y);
            self.cells[dst_start..dst_start + row_len]
                .copy_from_slice(&bitmap[src_start..src_start + row_len]);
        }
    }
}
