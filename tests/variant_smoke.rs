use monoloop_engine::domain::variant::GRID_OPTIONS;
use monoloop_engine::{get_variant_config, EventKind, RuleKind};

#[test]
fn variant_json_uses_host_field_names() {
    let json = get_variant_config(200).to_json();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["seed"], 200);
    assert!(value["activeRules"].is_array());
    assert!(value["gridRes"].is_u64());
    assert!(value["periodMs"].is_u64());
    let first = &value["events"][0];
    assert!(first["rectIndex"].is_u64());
    assert!(["invert", "scanline", "ruleSwap"].contains(&first["type"].as_str().unwrap()));
}

#[test]
fn families_pick_dominant_rules() {
    assert_eq!(get_variant_config(0).active_rules[0], RuleKind::Noise);
    assert_eq!(get_variant_config(64).active_rules[0], RuleKind::Streak);
    assert_eq!(get_variant_config(128).active_rules[0], RuleKind::Columns);
    assert_eq!(get_variant_config(255).active_rules[0], RuleKind::Gradient);
}

#[test]
fn every_seed_has_a_usable_variant() {
    for seed in 0..=255u8 {
        let cfg = get_variant_config(seed);
        assert!(GRID_OPTIONS.contains(&cfg.grid_res));
        assert!(!cfg.events.is_empty());
        assert!(cfg
            .events
            .iter()
            .all(|e| matches!(e.kind, EventKind::Invert | EventKind::Scanline | EventKind::RuleSwap)));
    }
}
