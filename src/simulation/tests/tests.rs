use super::*;
use crate::core::prng::Prng;
use crate::domain::variant::{EventDef, EventKind};
use crate::systems::compositor::{BLACK, WHITE};
use crate::systems::rules::FillContext;

fn surface() -> Surface {
    Surface::new(200, 120, 1.0).unwrap()
}

fn opts(grid: u32) -> InitOptions {
    InitOptions { grid_override: Some(grid), ..Default::default() }
}

fn core(seed: u8) -> RendererCore {
    RendererCore::new(seed, surface(), &opts(32)).unwrap()
}

#[test]
fn same_seed_and_t_reproduce_the_frame() {
    for seed in [0u8, 77, 130, 255] {
        let mut a = core(seed);
        let mut b = core(seed);
        a.render_t(0.37);
        b.render_t(0.9);
        b.render_t(0.37);
        assert_eq!(a.grid_cells(), b.grid_cells(), "seed {}", seed);
        assert_eq!(a.pixels(), b.pixels());
    }
}

#[test]
fn rects_tile_the_grid_exactly() {
    for seed in [1u8, 64, 128, 200] {
        let c = core(seed);
        let (w, h) = (c.grid_width(), c.grid_height());
        let mut hits = vec![0u8; (w * h) as usize];
        for r in c.rects() {
            assert!(!r.is_empty());
            for y in r.y..r.y + r.h {
                for x in r.x..r.x + r.w {
                    hits[(y * w + x) as usize] += 1;
                }
            }
        }
        assert!(hits.iter().all(|&n| n == 1), "seed {}", seed);
    }
}

#[test]
fn layout_follows_override() {
    let c = core(9);
    assert_eq!(c.layout().grid_step, 3);
    assert_eq!((c.grid_width(), c.grid_height()), (66, 40));
    assert_eq!((c.device_width(), c.device_height()), (200, 120));
    assert_eq!(c.pixels_len(), 200 * 120);
    assert_eq!(c.pixels_byte_len(), 200 * 120 * 4);
}

#[test]
fn events_off_leaves_plain_primary_fills() {
    let mut c = core(42);
    c.set_events_enabled(false);
    c.render_t(0.61);

    for rs in c.rect_states() {
        let (w, h) = (rs.rect.w as usize, rs.rect.h as usize);
        let mut expected = vec![0u8; w * h];
        let mut rng = Prng::new(rs.rng_seed);
        let params = c.live_params().fill;
        let mut ctx = FillContext {
            bitmap: &mut expected,
            width: w,
            height: h,
            rect: rs.rect,
            t: 0.61,
            rng: &mut rng,
            params: &params,
        };
        c.rules.fill(rs.rule, &mut ctx);
        assert_eq!(rs.bitmap, expected);
    }
}

#[test]
fn invert_event_shows_up_in_perf_counts() {
    let mut c = core(5);
    c.enable_perf_metrics(true);
    for rs in c.rects.iter_mut() {
        rs.events.clear();
    }
    c.rects[0].events.push(EventDef { t: 0.2, rect_index: 0, kind: EventKind::Invert });

    c.render_t(0.21);
    let stats = c.get_perf_stats();
    assert_eq!(stats.inverted_rects(), 1);
    assert_eq!(stats.swapped_rects(), 0);
    assert_eq!(stats.rect_count(), c.rect_count() as u32);
    assert!(stats.frame_ms() >= 0.0);

    c.render_t(0.5);
    assert_eq!(c.get_perf_stats().inverted_rects(), 0);
}

#[test]
fn paired_inverts_cancel_in_frame_and_stats() {
    let mut plain = core(5);
    plain.set_events_enabled(false);
    plain.render_t(0.21);

    let mut c = core(5);
    c.enable_perf_metrics(true);
    for rs in c.rects.iter_mut() {
        rs.events.clear();
    }
    for _ in 0..2 {
        c.rects[0].events.push(EventDef { t: 0.2, rect_index: 0, kind: EventKind::Invert });
    }
    c.render_t(0.21);
    assert_eq!(c.get_perf_stats().inverted_rects(), 0);
    assert_eq!(c.grid_cells(), plain.grid_cells());
}

#[test]
fn zero_warp_shows_the_grid_buffer() {
    let mut c = core(99);
    c.render_t(0.25);
    assert_eq!(c.grid_cells(), &c.grid.cells[..]);

    c.set_warp(0.6);
    c.render_t(0.25);
    let w = c.grid_width() as usize;
    // Warped rows are rotations of the unwarped rows
    for (src, dst) in c.grid.cells.chunks(w).zip(c.grid_cells().chunks(w)) {
        let mut a = src.to_vec();
        let mut b = dst.to_vec();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }
}

#[test]
fn pixels_mirror_grid_cells() {
    let mut c = core(150);
    c.render_t(0.8);
    let step = c.layout().px_step;
    let dw = c.device_width();
    assert!(c.pixels().iter().all(|&p| p == BLACK || p == WHITE));
    for gy in 0..c.grid_height() {
        for gx in 0..c.grid_width() {
            let cell = c.grid_cells()[(gy * c.grid_width() + gx) as usize];
            let px = c.pixels()[(gy * step * dw + gx * step) as usize];
            assert_eq!(px == WHITE, cell == 1, "cell {},{}", gx, gy);
        }
    }
    // Columns past the last whole cell stay black
    assert_eq!(c.pixels()[(dw - 1) as usize], BLACK);
}

#[test]
fn render_at_follows_the_clock() {
    let mut c = core(12);
    let period = c.config().period_ms as f64;
    assert_eq!(c.render_at(1000.0), 0.0);
    let t = c.render_at(1000.0 + period * 0.25);
    assert!((t - 0.25).abs() < 1e-9);

    c.toggle_play(1000.0 + period * 0.25);
    let paused = c.render_at(1000.0 + period * 0.9);
    assert!((paused - 0.25).abs() < 1e-9);
}

#[test]
fn rebuild_carries_params_and_position() {
    let mut c = core(20);
    c.render_at(0.0);
    c.set_density(0.8);
    c.set_warp(0.3);
    c.set_events_enabled(false);
    c.set_speed(0.0, 2.0);

    let mut next = c.rebuild(21, surface(), &opts(48), 500.0).unwrap();
    assert_eq!(next.seed(), 21);
    assert_eq!(next.config().grid_res, 48);
    let live = next.live_params();
    assert_eq!(live.fill.density, 0.8);
    assert_eq!(live.warp, 0.3);
    assert!(!live.events_enabled);
    assert_eq!(live.speed, 2.0);
    assert_eq!(next.elapsed_ms(500.0), 1000.0);
}

#[test]
fn rejected_options_leave_session_intact() {
    let mut c = core(33);
    c.render_t(0.4);
    let before = c.grid_cells().to_vec();

    let bad = InitOptions { subdiv_override: Some(40), ..Default::default() };
    assert!(c.rebuild(34, surface(), &bad, 0.0).is_err());
    assert!(RendererCore::new(1, surface(), &opts(2)).is_err());

    assert_eq!(c.seed(), 33);
    c.render_t(0.4);
    assert_eq!(c.grid_cells(), &before[..]);
}

#[test]
fn calm_mode_bypasses_subdivision() {
    let calm = InitOptions { calm: true, ..opts(32) };
    let mut c = RendererCore::new(60, surface(), &calm).unwrap();
    assert!(c.is_calm());
    assert_eq!(c.rect_count(), 0);
    c.render_t(0.1);
    assert!(c.grid_cells().iter().any(|&v| v == 1));
    assert!(c.pixels().iter().any(|&p| p == WHITE));
}

#[test]
fn live_params_are_clamped() {
    let mut c = core(3);
    c.set_noise_amount(4.0);
    c.set_density(-1.0);
    c.set_scale(f64::NAN);
    c.set_warp(2.0);
    let live = c.live_params();
    assert_eq!(live.fill.noise_amount, 1.0);
    assert_eq!(live.fill.density, 0.0);
    assert_eq!(live.fill.scale, 1.0);
    assert_eq!(live.warp, 1.0);
}

#[test]
fn live_params_json_round_trip_through_setters() {
    let mut c = core(4);
    let params = LiveParams::from_json(r#"{"noiseAmount":0.2,"scale":2.0,"warp":0.1,"eventsEnabled":false}"#).unwrap();
    assert_eq!(params.fill.density, 0.5);
    assert_eq!(params.speed, 1.0);
    c.apply_live_params(&params, 0.0);
    assert_eq!(c.live_params(), params);
}
