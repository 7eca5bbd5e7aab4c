//! Bounds-check macros for the per-cell hot loops
//!
//! Every fill rule writes exactly `w * h` cells and every index it computes is
//! derived from loop bounds, so release builds skip the bounds checks while
//! debug builds keep them (with a useful panic).
//!
//! Usage:
//! ```rust
//! use monoloop_engine::fast;
//!
//! let width = 4;
//! let mut bitmap = vec![0u8; width * 2];
//! // Write: fast!(slice, [index] = value)
//! fast!(bitmap, [width + 1] = 1);
//! // Read: fast!(slice, [index])
//! assert_eq!(*fast!(bitmap, [width + 1]), 1);
//! assert_eq!(*fast!(bitmap, [0]), 0);
//! ```

/// Indexing that is checked in debug and unchecked in release.
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}

/// Toroidal neighbour coordinate: `(c + delta) mod len` for `delta` in -1..=1.
#[inline]
pub fn wrap_coord(c: usize, delta: isize, len: usize) -> usize {
    debug_assert!(len > 0);
    ((c as isize + delta).rem_euclid(len as isize)) as usize
}

#[cfg(test)]
mod tests {
    use super::wrap_coord;

    #[test]
    fn fast_reads_and_writes_bitmap_cells() {
        let mut bitmap = vec![0u8; 6];
        fast!(bitmap, [4] = 1);
        assert_eq!(*fast!(bitmap, [4]), 1);
        assert_eq!(bitmap.iter().filter(|&&c| c == 1).count(), 1);
    }

    #[test]
    fn wrap_coord_wraps_both_edges() {
        assert_eq!(wrap_coord(0, -1, 5), 4);
        assert_eq!(wrap_coord(4, 1, 5), 0);
        assert_eq!(wrap_coord(2, 0, 5), 2);
        assert_eq!(wrap_coord(0, 1, 1), 0);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn fast_out_of_range_panics_in_debug() {
        let bitmap = vec![0u8; 3];
        let _ = *fast!(bitmap, [9]);
    }
}
