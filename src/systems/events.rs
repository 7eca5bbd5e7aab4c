//! Event gates - pure functions of (event, t) plus the bitmap mutations
//!
//! An event is active for a short window after its trigger time. Windows are
//! measured modulo 1 so an event near the end of the loop wraps into the start
//! and the gates stay seamless at the loop seam.

use crate::domain::variant::{EventDef, EventKind};

pub const INVERT_WINDOW: f64 = 0.04;
pub const SCANLINE_WINDOW: f64 = 0.10;
pub const RULE_SWAP_WINDOW: f64 = 0.15;

/// Progress through the window in [0, 1), or None when outside it.
#[inline]
pub fn window_progress(event_t: f64, t: f64, window: f64) -> Option<f64> {
    if window <= 0.0 {
        return None;
    }
    let since = (t - event_t).rem_euclid(1.0);
    (since < window).then(|| since / window)
}

pub fn is_invert_active(event: &EventDef, t: f64) -> bool {
    event.kind == EventKind::Invert && window_progress(event.t, t, INVERT_WINDOW).is_some()
}

pub fn is_rule_swapped(event: &EventDef, t: f64) -> bool {
    event.kind == EventKind::RuleSwap && window_progress(event.t, t, RULE_SWAP_WINDOW).is_some()
}

/// Normalized row position in [0, 1) of a sweeping scanline, or None when inactive.
pub fn scanline_y(event: &EventDef, t: f64) -> Option<f64> {
    if event.kind != EventKind::Scanline {
        return None;
    }
    window_progress(event.t, t, SCANLINE_WINDOW)
}

/// Invert the bitmap row at normalized position `y`.
pub fn apply_scanline(bitmap: &mut [u8], width: usize, height: usize, y: f64) {
    if width == 0 || height == 0 {
        return;
    }
    let row = ((y.clamp(0.0, 1.0) * height as f64) as usize).min(height - 1);
    let start = row * width;
    for cell in &mut bitmap[start..start + width] {
        *cell ^= 1;
    }
}

pub fn invert_bitmap(bitmap: &mut [u8]) {
    for cell in bitmap.iter_mut() {
        *cell ^= 1;
    }
}
