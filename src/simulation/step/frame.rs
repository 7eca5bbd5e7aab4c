#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::loop_time::fract_pos;
use crate::systems::calm::render_calm;
use crate::systems::compositor::composite;
use crate::systems::rules::{FillParams, RuleRegistry};
use crate::systems::warp::apply_warp;

use super::perf_timer::{lap, PerfTimer};
use super::rect_state::{RectReport, RectState};
use super::RendererCore;

/// Event counts summed over all rectangles for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FrameTally {
    pub swapped: u32,
    pub inverted: u32,
    pub scanlines: u32,
}

impl FrameTally {
    fn merge(self, other: FrameTally) -> FrameTally {
        FrameTally {
            swapped: self.swapped + other.swapped,
            inverted: self.inverted + other.inverted,
            scanlines: self.scanlines + other.scanlines,
        }
    }
}

impl From<RectReport> for FrameTally {
    fn from(r: RectReport) -> Self {
        FrameTally {
            swapped: r.swapped as u32,
            inverted: (r.inverts % 2 == 1) as u32,
            scanlines: r.scanlines,
        }
    }
}

/// Fill every rectangle. Each rectangle owns its bitmap, so they are
/// independent and can run on the rayon pool.
fn fill_rects(
    rects: &mut [RectState],
    rules: &RuleRegistry,
    t: f64,
    params: &FillParams,
    events_enabled: bool,
) -> FrameTally {
    #[cfg(feature = "parallel")]
    {
        rects
            .par_iter_mut()
            .map(|rs| FrameTally::from(rs.render(rules, t, params, events_enabled)))
            .reduce(FrameTally::default, FrameTally::merge)
    }
    #[cfg(not(feature = "parallel"))]
    {
        rects
            .iter_mut()
            .map(|rs| FrameTally::from(rs.render(rules, t, params, events_enabled)))
            .fold(FrameTally::default(), FrameTally::merge)
    }
}

pub(super) fn render_t(core: &mut RendererCore, t: f64) {
    let t = if t.is_finite() { fract_pos(t) } else { 0.0 };
    let t = if t >= 1.0 { 0.0 } else { t };
    core.last_t = t;

    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }
    let frame_timer = PerfTimer::start_if(perf_on);

    let (gw, gh) = (core.layout.grid_w, core.layout.grid_h);
    let seed = core.config.seed;

    // Fill: every rectangle completes before anything reads the grid
    let timer = PerfTimer::start_if(perf_on);
    let tally = if core.options.calm {
        render_calm(&mut core.grid.cells, gw, gh, seed, t);
        FrameTally::default()
    } else {
        fill_rects(&mut core.rects, &core.rules, t, &core.params, core.events_enabled)
    };
    let fill_ms = lap(timer);

    let timer = PerfTimer::start_if(perf_on);
    if !core.options.calm {
        core.grid.clear();
        for rs in &core.rects {
            core.grid.blit(&rs.rect, &rs.bitmap);
        }
    }
    let blit_ms = lap(timer);

    let timer = PerfTimer::start_if(perf_on);
    let warped = core.warp > 0.0;
    if warped {
        apply_warp(&core.grid.cells, &mut core.warp_buffer, gw, gh, t, core.warp, seed);
    }
    let warp_ms = lap(timer);

    let timer = PerfTimer::start_if(perf_on);
    let final_cells = if warped { &core.warp_buffer } else { &core.grid.cells };
    composite(
        final_cells,
        gw,
        gh,
        core.layout.px_step,
        &mut core.pixels,
        core.layout.device_w,
        core.layout.device_h,
    );
    let composite_ms = lap(timer);

    if perf_on {
        let set_cells = final_cells.iter().filter(|&&c| c != 0).count();
        let bitmap_bytes: usize = core.rects.iter().map(|rs| rs.bitmap.len()).sum();
        let stats = &mut core.perf_stats;
        stats.fill_ms = fill_ms;
        stats.blit_ms = blit_ms;
        stats.warp_ms = warp_ms;
        stats.composite_ms = composite_ms;
        stats.loop_t = t;
        stats.rect_count = core.rects.len() as u32;
        stats.swapped_rects = tally.swapped;
        stats.inverted_rects = tally.inverted;
        stats.scanlines = tally.scanlines;
        stats.set_cells = set_cells as u32;
        stats.grid_size = core.grid.size() as u32;
        stats.memory_bytes = (core.grid.size() * 2 + bitmap_bytes + core.pixels.len() * 4) as u32;
        stats.frame_ms = lap(frame_timer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_inverts_do_not_count() {
        let report = |inverts| RectReport { swapped: false, inverts, scanlines: 0 };
        assert_eq!(FrameTally::from(report(0)).inverted, 0);
        assert_eq!(FrameTally::from(report(1)).inverted, 1);
        assert_eq!(FrameTally::from(report(2)).inverted, 0);
        assert_eq!(FrameTally::from(report(3)).inverted, 1);
    }
}
