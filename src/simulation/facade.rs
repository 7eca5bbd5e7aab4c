use wasm_bindgen::prelude::*;

use super::options::InitOptions;
use super::perf_stats::PerfStats;
use super::settings::LiveParams;
use super::surface::Surface;
use super::RendererCore;

/// Buffer addresses and sizes for building typed-array views in JS.
/// Reacquire after any call that can regenerate the session.
#[wasm_bindgen]
pub struct FrameLayout {
    pixels_ptr: u32,
    pixels_len_elements: u32,
    pixels_len_bytes: u32,
    grid_ptr: u32,
    grid_len_bytes: u32,
    device_width: u32,
    device_height: u32,
    grid_width: u32,
    grid_height: u32,
}

#[wasm_bindgen]
impl FrameLayout {
    #[wasm_bindgen(getter)]
    pub fn pixels_ptr(&self) -> u32 { self.pixels_ptr }
    #[wasm_bindgen(getter)]
    pub fn pixels_len_elements(&self) -> u32 { self.pixels_len_elements }
    #[wasm_bindgen(getter)]
    pub fn pixels_len_bytes(&self) -> u32 { self.pixels_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn grid_ptr(&self) -> u32 { self.grid_ptr }
    #[wasm_bindgen(getter)]
    pub fn grid_len_bytes(&self) -> u32 { self.grid_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn device_width(&self) -> u32 { self.device_width }
    #[wasm_bindgen(getter)]
    pub fn device_height(&self) -> u32 { self.device_height }
    #[wasm_bindgen(getter)]
    pub fn grid_width(&self) -> u32 { self.grid_width }
    #[wasm_bindgen(getter)]
    pub fn grid_height(&self) -> u32 { self.grid_height }
}

/// Wrap any host integer into the 0–255 seed space.
#[inline]
pub fn wrap_seed(seed: i32) -> u8 {
    seed.rem_euclid(256) as u8
}

fn js_err(e: String) -> JsValue {
    JsValue::from_str(&e)
}

#[wasm_bindgen]
pub struct Renderer {
    core: RendererCore,
}

impl Renderer {
    /// Native access for hosts that embed the crate directly
    pub fn core(&self) -> &RendererCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut RendererCore {
        &mut self.core
    }

    /// Swap in a rebuilt session only once it exists.
    fn regenerate_with(
        &mut self,
        seed: u8,
        surface: Surface,
        options: &InitOptions,
        now_ms: f64,
    ) -> Result<(), String> {
        let next = self.core.rebuild(seed, surface, options, now_ms)?;
        self.core = next;
        Ok(())
    }
}

#[wasm_bindgen]
impl Renderer {
    /// Create a renderer for `seed` on a `css_w`×`css_h` surface
    #[wasm_bindgen(constructor)]
    pub fn new(seed: i32, css_w: u32, css_h: u32, dpr: f64) -> Result<Renderer, JsValue> {
        let surface = Surface::new(css_w, css_h, dpr).map_err(js_err)?;
        let core = RendererCore::new(wrap_seed(seed), surface, &InitOptions::default()).map_err(js_err)?;
        Ok(Self { core })
    }

    /// Create a renderer with structural options given as JSON
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(
        seed: i32,
        css_w: u32,
        css_h: u32,
        dpr: f64,
        options_json: String,
    ) -> Result<Renderer, JsValue> {
        let options = InitOptions::from_json(&options_json).map_err(js_err)?;
        let surface = Surface::new(css_w, css_h, dpr).map_err(js_err)?;
        let core = RendererCore::new(wrap_seed(seed), surface, &options).map_err(js_err)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn seed(&self) -> u8 { self.core.seed() }

    #[wasm_bindgen(getter)]
    pub fn grid_width(&self) -> u32 { self.core.grid_width() }

    #[wasm_bindgen(getter)]
    pub fn grid_height(&self) -> u32 { self.core.grid_height() }

    #[wasm_bindgen(getter)]
    pub fn device_width(&self) -> u32 { self.core.device_width() }

    #[wasm_bindgen(getter)]
    pub fn device_height(&self) -> u32 { self.core.device_height() }

    #[wasm_bindgen(getter)]
    pub fn period_ms(&self) -> u32 { self.core.config().period_ms }

    #[wasm_bindgen(getter)]
    pub fn rect_count(&self) -> usize { self.core.rect_count() }

    #[wasm_bindgen(getter)]
    pub fn playing(&self) -> bool { self.core.is_playing() }

    #[wasm_bindgen(getter)]
    pub fn calm(&self) -> bool { self.core.is_calm() }

    #[wasm_bindgen(getter)]
    pub fn loop_t(&self) -> f64 { self.core.last_t() }

    /// Render the frame for host time `now_ms` (e.g. `performance.now()`).
    /// Returns the loop time in [0, 1).
    pub fn render(&mut self, now_ms: f64) -> f64 {
        self.core.render_at(now_ms)
    }

    /// Render a specific loop time, ignoring the playback clock
    pub fn render_at_t(&mut self, t: f64) {
        self.core.render_t(t);
    }

    pub fn pixels_ptr(&self) -> *const u32 {
        self.core.pixels_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.core.pixels_len()
    }

    pub fn pixels_byte_len(&self) -> usize {
        self.core.pixels_byte_len()
    }

    pub fn grid_ptr(&self) -> *const u8 {
        self.core.grid_ptr()
    }

    pub fn frame_layout(&self) -> FrameLayout {
        let core = &self.core;
        FrameLayout {
            pixels_ptr: core.pixels_ptr() as u32,
            pixels_len_elements: core.pixels_len() as u32,
            pixels_len_bytes: core.pixels_byte_len() as u32,
            grid_ptr: core.grid_ptr() as u32,
            grid_len_bytes: core.grid_cells().len() as u32,
            device_width: core.device_width(),
            device_height: core.device_height(),
            grid_width: core.grid_width(),
            grid_height: core.grid_height(),
        }
    }

    // === Live parameters ===

    pub fn set_noise_amount(&mut self, value: f64) {
        self.core.set_noise_amount(value);
    }

    pub fn set_scale(&mut self, value: f64) {
        self.core.set_scale(value);
    }

    pub fn set_density(&mut self, value: f64) {
        self.core.set_density(value);
    }

    pub fn set_warp(&mut self, value: f64) {
        self.core.set_warp(value);
    }

    pub fn set_speed(&mut self, now_ms: f64, value: f64) {
        self.core.set_speed(now_ms, value);
    }

    pub fn set_events_enabled(&mut self, enabled: bool) {
        self.core.set_events_enabled(enabled);
    }

    /// Apply every live parameter from JSON; missing fields take defaults
    pub fn apply_live_params(&mut self, json: String, now_ms: f64) -> Result<(), JsValue> {
        let params = LiveParams::from_json(&json).map_err(js_err)?;
        self.core.apply_live_params(&params, now_ms);
        Ok(())
    }

    pub fn live_params_json(&self) -> String {
        self.core.live_params().to_json()
    }

    // === Playback ===

    pub fn toggle_play(&mut self, now_ms: f64) -> bool {
        self.core.toggle_play(now_ms)
    }

    pub fn seek(&mut self, now_ms: f64, elapsed_ms: f64) {
        self.core.seek(now_ms, elapsed_ms);
    }

    // === Regeneration ===

    /// Switch to another seed (wrapped into 0–255), keeping options and params
    pub fn set_seed(&mut self, seed: i32, now_ms: f64) -> Result<(), JsValue> {
        let options = *self.core.options();
        let surface = self.core.surface();
        self.regenerate_with(wrap_seed(seed), surface, &options, now_ms)
            .map_err(js_err)
    }

    /// Rebuild with new structural options (JSON). On error the current
    /// session keeps running.
    pub fn regenerate(&mut self, options_json: String, now_ms: f64) -> Result<(), JsValue> {
        let options = InitOptions::from_json(&options_json).map_err(js_err)?;
        let (seed, surface) = (self.core.seed(), self.core.surface());
        self.regenerate_with(seed, surface, &options, now_ms).map_err(js_err)
    }

    pub fn resize(&mut self, css_w: u32, css_h: u32, dpr: f64, now_ms: f64) -> Result<(), JsValue> {
        let surface = Surface::new(css_w, css_h, dpr).map_err(js_err)?;
        let options = *self.core.options();
        let seed = self.core.seed();
        self.regenerate_with(seed, surface, &options, now_ms).map_err(js_err)
    }

    pub fn variant_json(&self) -> String {
        self.core.variant_json()
    }

    // === Perf ===

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
