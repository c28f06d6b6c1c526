//! Base-advancement engine.
//!
//! Pure transition `(bases, outcome, batter, outs) -> (runs, bases)`. The only
//! side effect is drawing from the supplied RNG for extra-base and sacrifice
//! decisions. Runners are always moved lead-first (third, second, first) so a
//! slot is vacated before anyone lands on it.

use rand::Rng;

use super::bases::{BaseState, Runner};
use super::config::{ExtraBaseConfig, SimConfig};
use crate::models::Outcome;
use crate::OUTS_PER_INNING;

/// Result of applying one plate appearance to the bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayResult {
    /// Runs scored on the play, always within 0..=4.
    pub runs: u8,
    pub bases: BaseState,
    /// Outs made on the play (0 or 1).
    pub outs_recorded: u8,
}

impl PlayResult {
    fn no_change(bases: BaseState, outs_recorded: u8) -> Self {
        Self { runs: 0, bases, outs_recorded }
    }
}

/// Clamp into 0..=1 for `gen_bool`; NaN and infinities never fire.
fn usable_probability(p: f64) -> f64 {
    if p.is_finite() {
        p.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Probability that `runner` takes the extra base with `outs` already made.
pub fn extra_base_chance(cfg: &ExtraBaseConfig, runner: Runner, outs: u8) -> f64 {
    let mut chance = cfg.base_chance;
    if runner.speed > cfg.fast_speed_threshold {
        chance += cfg.fast_runner_bonus;
    }
    if outs == 2 {
        chance += cfg.two_out_bonus;
    }
    usable_probability(chance)
}

fn takes_extra_base<R: Rng + ?Sized>(
    cfg: &ExtraBaseConfig,
    runner: Runner,
    outs: u8,
    rng: &mut R,
) -> bool {
    rng.gen_bool(extra_base_chance(cfg, runner, outs))
}

/// Apply `outcome` by a batter with speed `batter.speed` to `bases`.
///
/// `outs` is the count before the play. Plain outs leave the bases unchanged;
/// the caller owns the out counter and adds `outs_recorded`.
pub fn advance<R: Rng + ?Sized>(
    bases: BaseState,
    outcome: Outcome,
    batter: Runner,
    outs: u8,
    cfg: &SimConfig,
    rng: &mut R,
) -> PlayResult {
    match outcome {
        Outcome::Out | Outcome::Strikeout | Outcome::GroundOut | Outcome::FlyOut => {
            PlayResult::no_change(bases, 1)
        }
        Outcome::SacrificeAttempt => sacrifice(bases, outs, cfg, rng),
        Outcome::WalkOrHbp => walk(bases, batter),
        Outcome::Single => single(bases, batter, outs, &cfg.extra_base, rng),
        Outcome::Double => double(bases, batter, outs, &cfg.extra_base, rng),
        Outcome::Triple => PlayResult {
            runs: bases.runner_count(),
            bases: BaseState::new(None, None, Some(batter)),
            outs_recorded: 0,
        },
        Outcome::HomeRun => PlayResult {
            runs: bases.runner_count() + 1,
            bases: BaseState::empty(),
            outs_recorded: 0,
        },
    }
}

/// Forced advancement only.
fn walk(bases: BaseState, batter: Runner) -> PlayResult {
    let mut next = bases;
    let mut runs = 0;
    if let Some(on_first) = bases.first {
        if let Some(on_second) = bases.second {
            if bases.third.is_some() {
                runs += 1;
            }
            next.third = Some(on_second);
        }
        next.second = Some(on_first);
    }
    next.first = Some(batter);
    PlayResult { runs, bases: next, outs_recorded: 0 }
}

fn single<R: Rng + ?Sized>(
    bases: BaseState,
    batter: Runner,
    outs: u8,
    cfg: &ExtraBaseConfig,
    rng: &mut R,
) -> PlayResult {
    let mut next = BaseState::empty();
    let mut runs = 0;

    if bases.third.is_some() {
        runs += 1;
    }
    if let Some(on_second) = bases.second {
        if takes_extra_base(cfg, on_second, outs, rng) {
            runs += 1;
        } else {
            next.third = Some(on_second);
        }
    }
    if let Some(on_first) = bases.first {
        // Third is only available if the runner from second did not stop there.
        if next.third.is_none() && takes_extra_base(cfg, on_first, outs, rng) {
            next.third = Some(on_first);
        } else {
            next.second = Some(on_first);
        }
    }
    next.first = Some(batter);

    PlayResult { runs, bases: next, outs_recorded: 0 }
}

fn double<R: Rng + ?Sized>(
    bases: BaseState,
    batter: Runner,
    outs: u8,
    cfg: &ExtraBaseConfig,
    rng: &mut R,
) -> PlayResult {
    let mut next = BaseState::empty();
    let mut runs = u8::from(bases.third.is_some()) + u8::from(bases.second.is_some());

    if let Some(on_first) = bases.first {
        if takes_extra_base(cfg, on_first, outs, rng) {
            runs += 1;
        } else {
            next.third = Some(on_first);
        }
    }
    next.second = Some(batter);

    PlayResult { runs, bases: next, outs_recorded: 0 }
}

/// Batter is always out. With fewer than two outs and runners aboard, every
/// runner moves up one base on success; a runner forced home from third
/// scores and is credited to the batter.
fn sacrifice<R: Rng + ?Sized>(
    bases: BaseState,
    outs: u8,
    cfg: &SimConfig,
    rng: &mut R,
) -> PlayResult {
    if bases.is_empty() || outs + 1 >= OUTS_PER_INNING {
        return PlayResult::no_change(bases, 1);
    }
    if !rng.gen_bool(usable_probability(cfg.sacrifice.success_rate)) {
        return PlayResult::no_change(bases, 1);
    }
    PlayResult {
        runs: u8::from(bases.third.is_some()),
        bases: BaseState::new(None, bases.first, bases.second),
        outs_recorded: 1,
    }
}
