//! Frame stage timing - only touched when perf metrics are enabled

/// Wall-clock stopwatch for perf stats. `js_sys::Date` on wasm32, where
/// `std::time::Instant` is unavailable.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { start_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { start: std::time::Instant::now() }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }

    /// Start a timer only when perf collection is on.
    #[inline]
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        enabled.then(Self::start)
    }
}

/// Milliseconds since `timer` started, or 0 when no timer was running.
#[inline]
pub(crate) fn lap(timer: Option<PerfTimer>) -> f64 {
    timer.map_or(0.0, |t| t.elapsed_ms())
}
