//! Seamless stepped blend for discrete simulations
//!
//! A simulation can only be sampled at whole steps. The caller maps loop time
//! through `loop_triangle` so the continuous step count is 0 at both ends of
//! the loop; this routine then runs `ceil(continuous)` steps from the fresh
//! initial state, keeps the `floor` and `ceil` snapshots, and resolves cells
//! that differ between them with a fixed per-cell dither threshold. Cells in
//! transition form a stable spatial pattern instead of flickering as a block.

/// Per-cell threshold in (0, 1] for choosing between two snapshots.
/// Never 0, so a vanishing fraction always shows the lower snapshot.
#[inline]
pub fn blend_dither(px: usize, py: usize, blend_seed: f64) -> f64 {
    let v = ((px * 13 + py * 7) as f64 + blend_seed * 256.0).floor() as u64;
    ((v & 0xff) as f64 + 1.0) / 256.0
}

/// Run a discrete simulation to a fractional step count and write the blended
/// binary result into `out` (row-major, `width` cells per row).
///
/// - `init` is the step-0 state; it must be rebuilt by the caller every call.
/// - `step` writes the next state into its second argument.
/// - `binarize` projects a cell onto 0/1; snapshots are compared through it.
pub fn fill_stepped<T: Clone>(
    out: &mut [u8],
    width: usize,
    init: Vec<T>,
    continuous: f64,
    blend_seed: f64,
    mut step: impl FnMut(&[T], &mut [T]),
    binarize: impl Fn(&T) -> u8,
) {
    debug_assert_eq!(out.len(), init.len());
    if width == 0 || out.is_empty() {
        return;
    }

    let continuous = if continuous.is_finite() { continuous.max(0.0) } else { 0.0 };
    let steps_lo = continuous.floor() as usize;
    let steps_hi = continuous.ceil() as usize;
    let frac = continuous - steps_lo as f64;

    let mut state = init;
    let mut scratch = state.clone();
    let mut snapshot_lo: Option<Vec<T>> = None;
    if steps_lo == 0 && steps_hi > 0 {
        snapshot_lo = Some(state.clone());
    }

    for s in 0..steps_hi {
        step(&state, &mut scratch);
        std::mem::swap(&mut state, &mut scratch);
        if s + 1 == steps_lo && steps_lo != steps_hi {
            snapshot_lo = Some(state.clone());
        }
    }

    let lo = snapshot_lo.as_deref().unwrap_or(&state);
    let hi = &state;

    for (i, cell) in out.iter_mut().enumerate() {
        let v_lo = binarize(&lo[i]);
        let v_hi = binarize(&hi[i]);
        *cell = if v_lo == v_hi {
            v_lo
        } else if frac > blend_dither(i % width, i / width, blend_seed) {
            v_hi
        } else {
            v_lo
        };
    }
}
