use crate::systems::compositor::px_step;

/// Host drawing surface in CSS pixels plus the device pixel ratio
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub css_w: u32,
    pub css_h: u32,
    pub dpr: f64,
}

/// Grid and device dimensions derived from a surface and a grid resolution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// CSS pixels per grid cell
    pub grid_step: u32,
    pub grid_w: u32,
    pub grid_h: u32,
    /// Device pixels per grid cell
    pub px_step: u32,
    pub device_w: u32,
    pub device_h: u32,
}

impl Surface {
    pub fn new(css_w: u32, css_h: u32, dpr: f64) -> Result<Self, String> {
        if css_w == 0 || css_h == 0 {
            return Err(format!("surface must be non-empty, got {}x{}", css_w, css_h));
        }
        if !dpr.is_finite() || dpr <= 0.0 {
            return Err(format!("device pixel ratio must be positive, got {}", dpr));
        }
        Ok(Self { css_w, css_h, dpr })
    }

    /// Cells are square; `grid_res` is the cell count along the short side.
    pub fn layout(&self, grid_res: u32) -> Layout {
        let short = self.css_w.min(self.css_h);
        let grid_step = (short / grid_res.max(1)).max(1);
        Layout {
            grid_step,
            grid_w: self.css_w / grid_step,
            grid_h: self.css_h / grid_step,
            px_step: px_step(grid_step, self.dpr),
            device_w: (self.css_w as f64 * self.dpr).round() as u32,
            device_h: (self.css_h as f64 * self.dpr).round() as u32,
        }
    }
}
