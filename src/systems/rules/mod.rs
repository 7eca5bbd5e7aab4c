//! Fill rules - one algorithm per rectangle
//!
//! Every rule honours the same contract: write exactly `width * height` binary
//! cells into the target bitmap as a pure function of (rect, t, generator
//! state, params). Nothing survives between calls; rules that look like they
//! "remember" rebuild that memory from the freshly reseeded generator.
//!
//! Dispatch is a closed 8-way match on `RuleKind`, mirroring how behaviors are
//! dispatched by category.

mod automata;
mod columns;
mod dither;
mod gradient;
mod lines;
mod noise;
mod reaction;
mod stepped;
mod streak;

pub use automata::{life_step, AutomataRule};
pub use columns::ColumnsRule;
pub use dither::DitherRule;
pub use gradient::GradientRule;
pub use lines::LinesRule;
pub use noise::NoiseRule;
pub use reaction::{reaction_step, ReactionRule};
pub use stepped::fill_stepped;
pub use streak::StreakRule;

use serde::{Deserialize, Serialize};

use crate::core::prng::Prng;
use crate::domain::rules::RuleKind;
use crate::spatial::Rect;

/// Live parameters shared by every rule
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FillParams {
    /// Noise influence (0–1)
    pub noise_amount: f64,
    /// Pattern scale: <1 finer, >1 chunkier
    pub scale: f64,
    /// Threshold bias: 0 mostly off, 1 mostly on
    pub density: f64,
}

impl Default for FillParams {
    fn default() -> Self {
        Self {
            noise_amount: 0.5,
            scale: 1.0,
            density: 0.5,
        }
    }
}

/// Everything a rule sees for one rectangle and one frame
pub struct FillContext<'a> {
    pub bitmap: &'a mut [u8],
    pub width: usize,
    pub height: usize,
    /// Grid-space placement, for continuity across rectangle borders
    pub rect: Rect,
    pub t: f64,
    pub rng: &'a mut Prng,
    pub params: &'a FillParams,
}

pub trait FillRule {
    fn fill(&self, ctx: &mut FillContext);
}

pub struct RuleRegistry {
    noise: NoiseRule,
    dither: DitherRule,
    automata: AutomataRule,
    reaction: ReactionRule,
    lines: LinesRule,
    streak: StreakRule,
    columns: ColumnsRule,
    gradient: GradientRule,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self {
            noise: NoiseRule::new(),
            dither: DitherRule::new(),
            automata: AutomataRule::new(),
            reaction: ReactionRule::new(),
            lines: LinesRule::new(),
            streak: StreakRule::new(),
            columns: ColumnsRule::new(),
            gradient: GradientRule::new(),
        }
    }

    pub fn fill(&self, kind: RuleKind, ctx: &mut FillContext) {
        if ctx.width == 0 || ctx.height == 0 {
            return;
        }
        debug_assert_eq!(ctx.bitmap.len(), ctx.width * ctx.height);
        match kind {
            RuleKind::Noise => self.noise.fill(ctx),
            RuleKind::Dither => self.dither.fill(ctx),
            RuleKind::Automata => self.automata.fill(ctx),
            RuleKind::Reaction => self.reaction.fill(ctx),
            RuleKind::Lines => self.lines.fill(ctx),
            RuleKind::Streak => self.streak.fill(ctx),
            RuleKind::Columns => self.columns.fill(ctx),
            RuleKind::Gradient => self.gradient.fill(ctx),
        }
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Side of the square blocks used to seed the simulations
#[inline]
pub fn cluster_size(scale: f64) -> usize {
    ((scale * 2.0).round() as i64).max(1) as usize
}

/// Step budget for the simulations
#[inline]
pub fn sim_steps(scale: f64) -> usize {
    ((3.0 + scale * 3.0).round() as i64).max(1) as usize
}

/// Tile the field into `cluster`² blocks (row-major), each independently `on`
/// with probability `ratio`.
pub fn cluster_init<T: Copy>(
    width: usize,
    height: usize,
    cluster: usize,
    ratio: f64,
    rng: &mut Prng,
    on: T,
    off: T,
) -> Vec<T> {
    let cluster = cluster.max(1);
    let mut state = vec![off; width * height];
    for cy in (0..height).step_by(cluster) {
        for cx in (0..width).step_by(cluster) {
            let value = if rng.random() < ratio { on } else { off };
            for y in cy..(cy + cluster).min(height) {
                let row = y * width;
                state[row + cx..row + (cx + cluster).min(width)].fill(value);
            }
        }
    }
    state
}
