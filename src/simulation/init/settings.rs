use serde::{Deserialize, Serialize};

use crate::systems::rules::FillParams;

use super::perf_stats::PerfStats;
use super::RendererCore;

pub const SCALE_RANGE: (f64, f64) = (0.1, 4.0);
pub const SPEED_RANGE: (f64, f64) = (0.0, 4.0);

/// Live-tunable parameters; changing them never regenerates the session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveParams {
    #[serde(flatten)]
    pub fill: FillParams,
    pub warp: f64,
    pub speed: f64,
    pub events_enabled: bool,
}

impl Default for LiveParams {
    fn default() -> Self {
        Self {
            fill: FillParams::default(),
            warp: 0.0,
            speed: 1.0,
            events_enabled: true,
        }
    }
}

impl LiveParams {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid live params: {}", e))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Clamp into `[lo, hi]`; non-finite input keeps `current`.
#[inline]
fn sanitize(value: f64, lo: f64, hi: f64, current: f64) -> f64 {
    if value.is_finite() { value.clamp(lo, hi) } else { current }
}

pub(super) fn set_noise_amount(core: &mut RendererCore, value: f64) {
    core.params.noise_amount = sanitize(value, 0.0, 1.0, core.params.noise_amount);
}

pub(super) fn set_scale(core: &mut RendererCore, value: f64) {
    core.params.scale = sanitize(value, SCALE_RANGE.0, SCALE_RANGE.1, core.params.scale);
}

pub(super) fn set_density(core: &mut RendererCore, value: f64) {
    core.params.density = sanitize(value, 0.0, 1.0, core.params.density);
}

pub(super) fn set_warp(core: &mut RendererCore, value: f64) {
    core.warp = sanitize(value, 0.0, 1.0, core.warp);
}

pub(super) fn set_speed(core: &mut RendererCore, now_ms: f64, value: f64) {
    let speed = sanitize(value, SPEED_RANGE.0, SPEED_RANGE.1, core.clock.speed());
    core.clock.set_speed(now_ms, speed);
}

pub(super) fn set_events_enabled(core: &mut RendererCore, enabled: bool) {
    core.events_enabled = enabled;
}

pub(super) fn apply_live_params(core: &mut RendererCore, params: &LiveParams, now_ms: f64) {
    set_noise_amount(core, params.fill.noise_amount);
    set_scale(core, params.fill.scale);
    set_density(core, params.fill.density);
    set_warp(core, params.warp);
    set_events_enabled(core, params.events_enabled);
    set_speed(core, now_ms, params.speed);
}

pub(super) fn live_params(core: &RendererCore) -> LiveParams {
    LiveParams {
        fill: core.params,
        warp: core.warp,
        speed: core.clock.speed(),
        events_enabled: core.events_enabled,
    }
}

pub(super) fn enable_perf_metrics(core: &mut RendererCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &RendererCore) -> PerfStats {
    core.perf_stats.clone()
}
