//! Variant derivation - seed → structural configuration
//!
//! Seeds are grouped into 4 families of 64; each family fixes the dominant
//! rule. Everything else (rule mix, resolution, subdivision, timing, events)
//! comes from a generator seeded from the seed, so derivation is a pure
//! function of the seed.

use serde::Serialize;

use crate::core::prng::Prng;

use super::rules::{RuleKind, ALL_RULES, FAMILY_RULES};

pub const GRID_OPTIONS: [u32; 4] = [64, 96, 128, 192];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Invert,
    Scanline,
    RuleSwap,
}

/// Scanline and rule swaps are twice as likely as inverts.
const EVENT_KIND_WEIGHTS: [EventKind; 5] = [
    EventKind::Scanline,
    EventKind::RuleSwap,
    EventKind::RuleSwap,
    EventKind::Scanline,
    EventKind::Invert,
];

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDef {
    /// Loop time in [0, 1) at which the event fires
    pub t: f64,
    /// Raw slot; reduced modulo the actual rectangle count at assignment
    pub rect_index: u32,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantConfig {
    pub seed: u8,
    pub grid_res: u32,
    pub subdiv_depth: u32,
    pub min_rect_cells: u32,
    pub active_rules: Vec<RuleKind>,
    pub period_ms: u32,
    pub events: Vec<EventDef>,
    pub stop_prob: f64,
}

/// Already-validated host overrides for the structural parameters
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VariantOverrides {
    pub grid_res: Option<u32>,
    pub subdiv_depth: Option<u32>,
    pub period_ms: Option<u32>,
}

/// Seed family (0..4); selects the dominant rule.
#[inline]
pub fn seed_family(seed: u8) -> usize {
    ((seed >> 6) & 3) as usize
}

pub fn dominant_rule(seed: u8) -> RuleKind {
    FAMILY_RULES[seed_family(seed)]
}

pub fn get_variant_config(seed: u8) -> VariantConfig {
    let mut rng = Prng::new(seed as u64 * 7919 + 31);

    let dominant = dominant_rule(seed);
    let mut others: Vec<RuleKind> = ALL_RULES.iter().copied().filter(|&r| r != dominant).collect();
    rng.shuffle(&mut others);
    let rule_count = rng.rand_int(3, 6) as usize;
    let mut active_rules = Vec::with_capacity(rule_count);
    active_rules.push(dominant);
    active_rules.extend_from_slice(&others[..rule_count - 1]);

    let grid_res = GRID_OPTIONS[rng.rand_int(0, GRID_OPTIONS.len() as i32) as usize];

    let subdiv_depth = rng.rand_int(3, 7) as u32;
    let min_rect_cells = rng.rand_int(2, 6) as u32;
    let stop_prob = rng.rand_float(0.05, 0.3);

    let period_ms = rng.rand_int(6000, 12001) as u32;

    let event_count = rng.rand_int(1, 4);
    let mut events = Vec::with_capacity(event_count as usize);
    for _ in 0..event_count {
        let t = rng.random();
        let rect_index = rng.rand_int(0, 100) as u32;
        let kind = rng
            .rand_choice(&EVENT_KIND_WEIGHTS)
            .copied()
            .unwrap_or(EventKind::Scanline);
        events.push(EventDef { t, rect_index, kind });
    }
    events.sort_by(|a, b| a.t.total_cmp(&b.t));

    VariantConfig {
        seed,
        grid_res,
        subdiv_depth,
        min_rect_cells,
        active_rules,
        period_ms,
        events,
        stop_prob,
    }
}

impl VariantConfig {
    pub fn dominant_rule(&self) -> RuleKind {
        dominant_rule(self.seed)
    }

    /// Substitute host overrides after derivation. Derivation itself stays pure.
    pub fn with_overrides(mut self, overrides: &VariantOverrides) -> Self {
        if let Some(grid_res) = overrides.grid_res {
            self.grid_res = grid_res;
        }
        if let Some(depth) = overrides.subdiv_depth {
            self.subdiv_depth = depth;
        }
        if let Some(period) = overrides.period_ms {
            self.period_ms = period;
        }
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
