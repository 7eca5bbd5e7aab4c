use crate::core::grid::Grid;
use crate::core::prng::Prng;
use crate::domain::variant::{get_variant_config, VariantConfig};
use crate::spatial::{subdivide, Rect, SubdivideOptions};
use crate::systems::rules::{FillParams, RuleRegistry};

use super::options::InitOptions;
use super::perf_stats::PerfStats;
use super::playback::Playback;
use super::rect_state::RectState;
use super::surface::{Layout, Surface};
use super::RendererCore;

pub(super) fn create_renderer_core(
    seed: u8,
    surface: Surface,
    options: &InitOptions,
) -> Result<RendererCore, String> {
    let overrides = options.validate()?;
    let config = get_variant_config(seed).with_overrides(&overrides);
    let layout = surface.layout(config.grid_res);

    let rects = if options.calm {
        Vec::new()
    } else {
        build_rect_states(&config, &layout)
    };

    log::info!(
        "seed {:03}: {}x{} grid ({} rects, {} rules, {} events, period {}ms{})",
        seed,
        layout.grid_w,
        layout.grid_h,
        rects.len(),
        config.active_rules.len(),
        config.events.len(),
        config.period_ms,
        if options.calm { ", calm" } else { "" },
    );

    let grid_size = layout.grid_w as usize * layout.grid_h as usize;
    Ok(RendererCore {
        config,
        options: *options,
        surface,
        layout,
        rects,
        rules: RuleRegistry::new(),
        grid: Grid::new(layout.grid_w, layout.grid_h),
        warp_buffer: vec![0u8; grid_size],
        pixels: vec![0u32; layout.device_w as usize * layout.device_h as usize],
        params: FillParams::default(),
        warp: 0.0,
        events_enabled: true,
        clock: Playback::new(),
        last_t: 0.0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}

/// Subdivide the whole grid and attach rules, seeds and events to each piece.
pub(super) fn build_rect_states(config: &VariantConfig, layout: &Layout) -> Vec<RectState> {
    let mut rng = Prng::new(config.seed as u64);
    let region = Rect { x: 0, y: 0, w: layout.grid_w, h: layout.grid_h };
    let opts = SubdivideOptions {
        grid_step: 1,
        min_cells: config.min_rect_cells,
        max_depth: config.subdiv_depth,
        stop_prob: config.stop_prob,
    };
    let rects = subdivide(region, &opts, &mut rng);
    let count = rects.len();
    log::debug!("subdivided {}x{} into {} rects", region.w, region.h, count);

    rects
        .into_iter()
        .enumerate()
        .map(|(i, rect)| RectState::new(config, rect, i, count))
        .collect()
}
