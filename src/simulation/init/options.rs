use serde::{Deserialize, Serialize};

use crate::domain::variant::VariantOverrides;

pub const GRID_OVERRIDE_RANGE: std::ops::RangeInclusive<u32> = 8..=512;
pub const SUBDIV_OVERRIDE_RANGE: std::ops::RangeInclusive<u32> = 0..=12;
pub const PERIOD_OVERRIDE_RANGE: std::ops::RangeInclusive<u32> = 500..=120_000;

/// Structural session options supplied by the host. Changing any of them
/// requires regeneration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InitOptions {
    pub grid_override: Option<u32>,
    pub subdiv_override: Option<u32>,
    pub period_override: Option<u32>,
    /// Render the geometric calm fill instead of the rule engine
    pub calm: bool,
}

impl InitOptions {
    pub fn from_json(json: &str) -> Result<Self, String> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| format!("invalid init options: {}", e))
    }

    /// Check every override against its range.
    pub fn validate(&self) -> Result<VariantOverrides, String> {
        check("gridOverride", self.grid_override, &GRID_OVERRIDE_RANGE)?;
        check("subdivOverride", self.subdiv_override, &SUBDIV_OVERRIDE_RANGE)?;
        check("periodOverride", self.period_override, &PERIOD_OVERRIDE_RANGE)?;
        Ok(VariantOverrides {
            grid_res: self.grid_override,
            subdiv_depth: self.subdiv_override,
            period_ms: self.period_override,
        })
    }
}

fn check(name: &str, value: Option<u32>, range: &std::ops::RangeInclusive<u32>) -> Result<(), String> {
    match value {
        Some(v) if !range.contains(&v) => {
            log::warn!("rejected {}={} (allowed {}..={})", name, v, range.start(), range.end());
            Err(format!("{} out of range: {} (allowed {}..={})", name, v, range.start(), range.end()))
        }
        _ => Ok(()),
    }
}
