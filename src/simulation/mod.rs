//! Renderer session - one seed on one surface
//!
//! `RendererCore` owns everything a running composition needs: the derived
//! config, the rectangle states with their scratch bitmaps, the grid and warp
//! buffers, the device pixel buffer, live parameters and the playback clock.
//! Frames are pure functions of (seed, surface, options, live params, t).
//!
//! The wasm-facing wrapper lives in `facade.rs`; the pieces of the session are
//! split by concern:
//! - init/   - construction, options, surface layout, live settings
//! - state/  - per-rectangle state
//! - step/   - the per-frame pipeline
//! - clock/  - playback timing
//! - perf/   - optional frame timings

use crate::core::grid::Grid;
use crate::core::loop_time::get_loop_t;
use crate::domain::variant::VariantConfig;
use crate::spatial::Rect;
use crate::systems::rules::{FillParams, RuleRegistry};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/options.rs"]
mod options;
#[path = "init/surface.rs"]
mod surface;
#[path = "init/settings.rs"]
mod settings;
#[path = "state/rect_state.rs"]
mod rect_state;
#[path = "clock/playback.rs"]
mod playback;
#[path = "step/frame.rs"]
mod frame;
mod facade;

pub use facade::{wrap_seed, FrameLayout, Renderer};
pub use options::InitOptions;
pub use perf_stats::PerfStats;
pub use playback::Playback;
pub use rect_state::{RectReport, RectState};
pub use settings::LiveParams;
pub use surface::{Layout, Surface};

pub struct RendererCore {
    config: VariantConfig,
    options: InitOptions,
    surface: Surface,
    layout: Layout,
    rects: Vec<RectState>,
    rules: RuleRegistry,
    grid: Grid,
    warp_buffer: Vec<u8>,
    pixels: Vec<u32>,

    // Live parameters
    params: FillParams,
    warp: f64,
    events_enabled: bool,

    clock: Playback,
    last_t: f64,

    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl RendererCore {
    /// Build a session. Fails on out-of-range options; nothing is allocated
    /// until they pass.
    pub fn new(seed: u8, surface: Surface, options: &InitOptions) -> Result<Self, String> {
        init::create_renderer_core(seed, surface, options)
    }

    /// Build the replacement session for a new seed, surface or options,
    /// carrying over live parameters and the playback position. `self` is
    /// untouched, so a failure leaves the running session as it was.
    pub fn rebuild(
        &mut self,
        seed: u8,
        surface: Surface,
        options: &InitOptions,
        now_ms: f64,
    ) -> Result<RendererCore, String> {
        let mut next = RendererCore::new(seed, surface, options)?;
        next.params = self.params;
        next.warp = self.warp;
        next.events_enabled = self.events_enabled;
        next.perf_enabled = self.perf_enabled;
        next.clock.resume_from(&mut self.clock, now_ms);
        log::info!("regenerated session (seed {:03} -> {:03})", self.seed(), seed);
        Ok(next)
    }

    pub fn seed(&self) -> u8 { self.config.seed }

    pub fn config(&self) -> &VariantConfig { &self.config }

    pub fn options(&self) -> &InitOptions { &self.options }

    pub fn surface(&self) -> Surface { self.surface }

    pub fn layout(&self) -> Layout { self.layout }

    pub fn grid_width(&self) -> u32 { self.layout.grid_w }

    pub fn grid_height(&self) -> u32 { self.layout.grid_h }

    pub fn device_width(&self) -> u32 { self.layout.device_w }

    pub fn device_height(&self) -> u32 { self.layout.device_h }

    pub fn is_calm(&self) -> bool { self.options.calm }

    pub fn rect_count(&self) -> usize { self.rects.len() }

    pub fn rects(&self) -> impl Iterator<Item = &Rect> + '_ {
        self.rects.iter().map(|rs| &rs.rect)
    }

    pub fn rect_states(&self) -> &[RectState] { &self.rects }

    /// Loop time of the last rendered frame
    pub fn last_t(&self) -> f64 { self.last_t }

    pub fn variant_json(&self) -> String {
        self.config.to_json()
    }

    // === Frame ===

    /// Render the frame for host time `now_ms`. Returns the loop time used.
    pub fn render_at(&mut self, now_ms: f64) -> f64 {
        let elapsed = self.clock.elapsed(now_ms);
        let t = get_loop_t(elapsed, self.config.period_ms as f64);
        self.render_t(t);
        self.last_t
    }

    /// Render the frame for loop time `t` (wrapped into [0, 1)).
    pub fn render_t(&mut self, t: f64) {
        frame::render_t(self, t);
    }

    /// Binary grid as displayed: warped when warp is on.
    pub fn grid_cells(&self) -> &[u8] {
        if self.warp > 0.0 { &self.warp_buffer } else { &self.grid.cells }
    }

    pub fn pixels(&self) -> &[u32] { &self.pixels }

    pub fn pixels_ptr(&self) -> *const u32 { self.pixels.as_ptr() }

    pub fn pixels_len(&self) -> usize { self.pixels.len() }

    pub fn pixels_byte_len(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<u32>()
    }

    pub fn grid_ptr(&self) -> *const u8 { self.grid_cells().as_ptr() }

    // === Playback ===

    pub fn is_playing(&self) -> bool { self.clock.is_playing() }

    /// Play/pause. Returns the new playing state.
    pub fn toggle_play(&mut self, now_ms: f64) -> bool {
        self.clock.toggle(now_ms)
    }

    pub fn seek(&mut self, now_ms: f64, elapsed_ms: f64) {
        self.clock.seek(now_ms, elapsed_ms);
    }

    pub fn elapsed_ms(&mut self, now_ms: f64) -> f64 {
        self.clock.elapsed(now_ms)
    }

    // === Live parameters ===

    pub fn set_noise_amount(&mut self, value: f64) {
        settings::set_noise_amount(self, value);
    }

    pub fn set_scale(&mut self, value: f64) {
        settings::set_scale(self, value);
    }

    pub fn set_density(&mut self, value: f64) {
        settings::set_density(self, value);
    }

    pub fn set_warp(&mut self, value: f64) {
        settings::set_warp(self, value);
    }

    pub fn set_speed(&mut self, now_ms: f64, value: f64) {
        settings::set_speed(self, now_ms, value);
    }

    pub fn set_events_enabled(&mut self, enabled: bool) {
        settings::set_events_enabled(self, enabled);
    }

    pub fn apply_live_params(&mut self, params: &LiveParams, now_ms: f64) {
        settings::apply_live_params(self, params, now_ms);
    }

    pub fn live_params(&self) -> LiveParams {
        settings::live_params(self)
    }

    // === Perf ===

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
