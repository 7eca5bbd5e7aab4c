use crate::core::prng::Prng;
use crate::domain::rules::RuleKind;
use crate::domain::variant::{EventDef, VariantConfig};
use crate::spatial::Rect;
use crate::systems::events::{apply_scanline, invert_bitmap, is_invert_active, is_rule_swapped, scanline_y};
use crate::systems::rules::{FillContext, FillParams, RuleRegistry};

/// What happened to one rectangle during a frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RectReport {
    pub swapped: bool,
    pub inverts: u32,
    pub scanlines: u32,
}

/// Per-rectangle session state. The bitmap is allocated once and fully
/// rewritten every frame.
pub struct RectState {
    pub rect: Rect,
    pub rule: RuleKind,
    pub alt_rule: RuleKind,
    pub rng_seed: u64,
    pub events: Vec<EventDef>,
    pub bitmap: Vec<u8>,
}

impl RectState {
    /// Build the state for rectangle `index` out of `rect_count`.
    pub fn new(config: &VariantConfig, rect: Rect, index: usize, rect_count: usize) -> Self {
        let rules = &config.active_rules;
        let slot = index % rules.len().max(1);
        let rule = rules.get(slot).copied().unwrap_or(RuleKind::Noise);
        let alt_rule = rules.get((slot + 1) % rules.len().max(1)).copied().unwrap_or(rule);

        let events = config
            .events
            .iter()
            .filter(|e| rect_count > 0 && e.rect_index as usize % rect_count == index)
            .copied()
            .collect();

        Self {
            rect,
            rule,
            alt_rule,
            rng_seed: config.seed as u64 * 1000 + index as u64 * 37,
            events,
            bitmap: vec![0u8; rect.area()],
        }
    }

    /// The rule dispatched at `t`: the alternate while any ruleSwap is open.
    pub fn current_rule(&self, t: f64, events_enabled: bool) -> RuleKind {
        if events_enabled && self.events.iter().any(|e| is_rule_swapped(e, t)) {
            self.alt_rule
        } else {
            self.rule
        }
    }

    /// Fill the bitmap for `t`, then apply the bitmap events in order.
    pub fn render(
        &mut self,
        rules: &RuleRegistry,
        t: f64,
        params: &FillParams,
        events_enabled: bool,
    ) -> RectReport {
        let mut report = RectReport::default();
        if self.rect.is_empty() {
            return report;
        }

        let rule = self.current_rule(t, events_enabled);
        report.swapped = rule != self.rule;

        let mut rng = Prng::new(self.rng_seed);
        let (w, h) = (self.rect.w as usize, self.rect.h as usize);
        let mut ctx = FillContext {
            bitmap: &mut self.bitmap,
            width: w,
            height: h,
            rect: self.rect,
            t,
            rng: &mut rng,
            params,
        };
        rules.fill(rule, &mut ctx);

        if !events_enabled {
            return report;
        }
        for ev in &self.events {
            if is_invert_active(ev, t) {
                invert_bitmap(&mut self.bitmap);
                report.inverts += 1;
            }
            if let Some(y) = scanline_y(ev, t) {
                apply_scanline(&mut self.bitmap, w, h, y);
                report.scanlines += 1;
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::variant::{get_variant_config, EventKind};

    fn config_with_events(events: Vec<EventDef>) -> VariantConfig {
        let mut cfg = get_variant_config(70);
        cfg.events = events;
        cfg
    }

    fn rect() -> Rect {
        Rect { x: 0, y: 0, w: 12, h: 8 }
    }

    #[test]
    fn rules_cycle_through_active_list() {
        let cfg = get_variant_config(3);
        let n = cfg.active_rules.len();
        for i in 0..2 * n {
            let rs = RectState::new(&cfg, rect(), i, 2 * n);
            assert_eq!(rs.rule, cfg.active_rules[i % n]);
            assert_eq!(rs.alt_rule, cfg.active_rules[(i % n + 1) % n]);
            assert_eq!(rs.rng_seed, 3 * 1000 + i as u64 * 37);
        }
    }

    #[test]
    fn events_are_assigned_by_slot_modulo_count() {
        let ev = |i| EventDef { t: 0.1, rect_index: i, kind: EventKind::Invert };
        let cfg = config_with_events(vec![ev(0), ev(4), ev(7), ev(99)]);
        let counts: Vec<usize> = (0..4).map(|i| RectState::new(&cfg, rect(), i, 4).events.len()).collect();
        // 0 → 0, 4 → 0, 7 → 3, 99 → 3
        assert_eq!(counts, vec![2, 0, 0, 2]);
    }

    #[test]
    fn rule_swap_selects_alternate_only_inside_window() {
        let cfg = config_with_events(vec![EventDef { t: 0.5, rect_index: 0, kind: EventKind::RuleSwap }]);
        let rs = RectState::new(&cfg, rect(), 0, 1);
        assert_eq!(rs.current_rule(0.55, true), rs.alt_rule);
        assert_eq!(rs.current_rule(0.55, false), rs.rule);
        assert_eq!(rs.current_rule(0.2, true), rs.rule);
    }

    #[test]
    fn active_invert_flips_the_plain_fill() {
        let ev = EventDef { t: 0.3, rect_index: 0, kind: EventKind::Invert };
        let cfg = config_with_events(vec![ev]);
        let registry = RuleRegistry::new();
        let params = FillParams::default();

        let mut plain = RectState::new(&cfg, rect(), 0, 1);
        let mut evented = RectState::new(&cfg, rect(), 0, 1);
        plain.render(&registry, 0.31, &params, false);
        let report = evented.render(&registry, 0.31, &params, true);

        assert_eq!(report.inverts, 1);
        assert!(!report.swapped);
        for (a, b) in plain.bitmap.iter().zip(&evented.bitmap) {
            assert_eq!(*a ^ 1, *b);
        }
    }

    #[test]
    fn rendering_is_repeatable_frame_to_frame() {
        let cfg = get_variant_config(140);
        let registry = RuleRegistry::new();
        let params = FillParams::default();
        let mut rs = RectState::new(&cfg, rect(), 1, 3);
        rs.render(&registry, 0.4, &params, true);
        let first = rs.bitmap.clone();
        rs.render(&registry, 0.9, &params, true);
        rs.render(&registry, 0.4, &params, true);
        assert_eq!(rs.bitmap, first);
    }
}
