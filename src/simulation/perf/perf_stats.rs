use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(crate) frame_ms: f64,
    pub(crate) fill_ms: f64,
    pub(crate) blit_ms: f64,
    pub(crate) warp_ms: f64,
    pub(crate) composite_ms: f64,
    pub(crate) loop_t: f64,
    pub(crate) rect_count: u32,
    pub(crate) swapped_rects: u32,
    pub(crate) inverted_rects: u32,
    pub(crate) scanlines: u32,
    pub(crate) set_cells: u32,
    pub(crate) grid_size: u32,
    pub(crate) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn fill_ms(&self) -> f64 { self.fill_ms }
    #[wasm_bindgen(getter)]
    pub fn blit_ms(&self) -> f64 { self.blit_ms }
    #[wasm_bindgen(getter)]
    pub fn warp_ms(&self) -> f64 { self.warp_ms }
    #[wasm_bindgen(getter)]
    pub fn composite_ms(&self) -> f64 { self.composite_ms }
    #[wasm_bindgen(getter)]
    pub fn loop_t(&self) -> f64 { self.loop_t }
    #[wasm_bindgen(getter)]
    pub fn rect_count(&self) -> u32 { self.rect_count }
    #[wasm_bindgen(getter)]
    pub fn swapped_rects(&self) -> u32 { self.swapped_rects }
    #[wasm_bindgen(getter)]
    pub fn inverted_rects(&self) -> u32 { self.inverted_rects }
    #[wasm_bindgen(getter)]
    pub fn scanlines(&self) -> u32 { self.scanlines }
    #[wasm_bindgen(getter)]
    pub fn set_cells(&self) -> u32 { self.set_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
