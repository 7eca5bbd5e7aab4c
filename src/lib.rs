//! Monoloop Engine - seamless-loop generative monochrome renderer in WASM
//!
//! A seed picks a structural variant; the grid is subdivided into rectangles,
//! each filled by one of eight rules as a pure function of loop time, with
//! timed events on top, a scanning warp over the whole grid, and a final
//! upsample into device pixels. Frame t=0 and t→1 are identical.
//!
//! Architecture:
//! - core/        - PRNG, loop oracle, grid buffer, safety macros
//! - spatial/     - recursive subdivision
//! - domain/      - rule kinds, variant derivation
//! - systems/     - fill rules, events, warp, compositor, calm fills
//! - simulation/  - renderer session and the wasm facade

// Safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

#[cfg(target_arch = "wasm32")]
static LOGGER: std::sync::Once = std::sync::Once::new();

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    LOGGER.call_once(|| wasm_logger::init(wasm_logger::Config::default()));

    log::info!("Monoloop engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Variant configuration for a seed as JSON, without building a session
#[wasm_bindgen]
pub fn variant_config_json(seed: i32) -> String {
    get_variant_config(simulation::wrap_seed(seed)).to_json()
}

// Re-export main types
pub use domain::rules::RuleKind;
pub use domain::variant::{get_variant_config, EventDef, EventKind, VariantConfig};
pub use simulation::{InitOptions, LiveParams, PerfStats, Renderer, RendererCore, Surface};
