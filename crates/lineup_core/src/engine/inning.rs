//! Half-inning loop: plate appearances until three outs.

use rand::Rng;

use super::advancement::advance;
use super::bases::{BaseState, Runner};
use super::config::SimConfig;
use crate::models::{BoxScore, Lineup, Outcome};
use crate::{LINEUP_SIZE, OUTS_PER_INNING};

/// Event tags per batting position for one inning; empty when the position
/// did not come up.
pub type InningEvents = [String; LINEUP_SIZE];

#[derive(Debug, Clone, PartialEq)]
pub struct InningResult {
    pub runs: u32,
    /// Absolute plate-appearance index of the next inning's leadoff batter.
    pub next_batter: usize,
    pub plate_appearances: u32,
    pub events: Option<InningEvents>,
}

/// `1B`, `HR (+2)`, ...
pub fn event_tag(outcome: Outcome, rbi: u32) -> String {
    if rbi > 0 {
        format!("{} (+{rbi})", outcome.label())
    } else {
        outcome.label().to_string()
    }
}

/// Play one inning starting from absolute batter index `first_batter`.
///
/// Every plate appearance is tallied into `box_score` at position
/// `index % 9`, with RBI equal to the runs scored on the play.
pub fn simulate_inning<R: Rng + ?Sized>(
    lineup: &Lineup<'_>,
    first_batter: usize,
    box_score: &mut BoxScore,
    cfg: &SimConfig,
    rng: &mut R,
    record_events: bool,
) -> InningResult {
    let mut outs: u8 = 0;
    let mut bases = BaseState::empty();
    let mut runs: u32 = 0;
    let mut batter_index = first_batter;
    let mut events: Option<InningEvents> = record_events.then(Default::default);

    while outs < OUTS_PER_INNING {
        let position = batter_index % LINEUP_SIZE;
        let entry = lineup.batter(position);
        let outcome = entry.sampler.sample(rng);

        let play = advance(bases, outcome, Runner::new(entry.player.speed), outs, cfg, rng);
        outs += play.outs_recorded;
        bases = play.bases;

        let rbi = u32::from(play.runs);
        runs += rbi;
        box_score.record(position, outcome, rbi);

        if let Some(events) = events.as_mut() {
            let tag = event_tag(outcome, rbi);
            let cell = &mut events[position];
            if cell.is_empty() {
                *cell = tag;
            } else {
                cell.push_str(", ");
                cell.push_str(&tag);
            }
        }

        batter_index += 1;
    }

    InningResult {
        runs,
        next_batter: batter_index,
        plate_appearances: (batter_index - first_batter) as u32,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, Roster};
    use crate::test_support::{all_outs_roster, nine, sample_roster};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_all_outs_three_up_three_down() {
        let roster = all_outs_roster();
        let lineup = Lineup::in_roster_order(&roster);
        let mut box_score = BoxScore::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = simulate_inning(&lineup, 7, &mut box_score, &SimConfig::default(), &mut rng, true);
        assert_eq!(result.runs, 0);
        assert_eq!(result.plate_appearances, 3);
        assert_eq!(result.next_batter, 10);
        // Positions 7, 8, 0 batted.
        let events = result.events.unwrap();
        assert_eq!(events[7], "Out");
        assert_eq!(events[8], "Out");
        assert_eq!(events[0], "Out");
        assert!(events[1].is_empty());
        assert_eq!(box_score.line(8).outs, 1);
    }

    #[test]
    fn test_home_run_hitters_score_every_non_out() {
        // Eight pure power hitters and one automatic out.
        let mut players = nine("HR");
        for p in players.iter_mut().skip(1) {
            *p = Player::reduced(p.name.clone(), [0.0, 0.0, 0.0, 1.0, 0.0, 0.0], 5).unwrap();
        }
        players[0] = Player::reduced("OUT", [0.0, 0.0, 0.0, 0.0, 0.0, 1.0], 0).unwrap();
        let roster = Roster::new(players).unwrap();
        let lineup = Lineup::in_roster_order(&roster);
        let mut box_score = BoxScore::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let result = simulate_inning(&lineup, 0, &mut box_score, &SimConfig::default(), &mut rng, true);

        // Out, then 8 solo homers, out, 8 more, out.
        assert_eq!(result.plate_appearances, 19);
        assert_eq!(result.runs, 16);
        let events = result.events.unwrap();
        assert_eq!(events[0], "Out, Out, Out");
        assert_eq!(events[3], "HR (+1), HR (+1)");
        assert_eq!(box_score.line(3).rbi, 2);
    }

    #[test]
    fn test_inning_terminates_and_counts_match() {
        let roster = sample_roster();
        let lineup = Lineup::in_roster_order(&roster);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for start in 0..200 {
            let mut box_score = BoxScore::default();
            let result = simulate_inning(&lineup, start, &mut box_score, &SimConfig::default(), &mut rng, false);
            assert!(result.events.is_none());
            assert_eq!(box_score.plate_appearances(), result.plate_appearances);
            assert_eq!(box_score.team_line().outs_made(), 3);
            assert_eq!(box_score.team_line().rbi, result.runs);
        }
    }

    #[test]
    fn test_event_tag_format() {
        assert_eq!(event_tag(Outcome::Double, 0), "2B");
        assert_eq!(event_tag(Outcome::WalkOrHbp, 1), "BB+HBP (+1)");
    }
}
