//! Validated nine-player roster and batting orders over it.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use super::player::Player;
use crate::engine::sampler::OutcomeSampler;
use crate::error::{LineupError, Result};
use crate::LINEUP_SIZE;

/// A roster player with its sampler built once up front.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub player: Player,
    pub sampler: OutcomeSampler,
}

/// Exactly nine players with valid distributions and unique names.
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Result<Self> {
        if players.len() != LINEUP_SIZE {
            return Err(LineupError::InvalidRosterSize {
                expected: LINEUP_SIZE,
                found: players.len(),
            });
        }

        let mut seen = HashSet::new();
        for p in &players {
            if !seen.insert(p.name.as_str()) {
                return Err(LineupError::DuplicatePlayer(p.name.clone()));
            }
        }

        let layout = players[0].probabilities.layout();
        if let Some(odd) = players.iter().find(|p| p.probabilities.layout() != layout) {
            return Err(LineupError::MixedSchema(odd.name.clone()));
        }

        if players.iter().all(|p| p.probabilities.out_probability() <= 0.0) {
            return Err(LineupError::UnendingInning);
        }

        let entries = players
            .into_iter()
            .map(|player| {
                let sampler = OutcomeSampler::for_player(&player)?;
                Ok(RosterEntry { player, sampler })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn player(&self, index: usize) -> &Player {
        &self.entries[index].player
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.player.name.clone()).collect()
    }
}

/// A batting order: position `p` is taken by roster entry `order[p]`.
#[derive(Debug, Clone, Copy)]
pub struct Lineup<'a> {
    roster: &'a Roster,
    order: [usize; LINEUP_SIZE],
}

const IDENTITY_ORDER: [usize; LINEUP_SIZE] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

impl<'a> Lineup<'a> {
    /// Bat the roster in the order it was given.
    pub fn in_roster_order(roster: &'a Roster) -> Self {
        Self { roster, order: IDENTITY_ORDER }
    }

    pub fn with_order(roster: &'a Roster, order: [usize; LINEUP_SIZE]) -> Result<Self> {
        let mut sorted = order;
        sorted.sort_unstable();
        if sorted != IDENTITY_ORDER {
            return Err(LineupError::InvalidRequest(format!(
                "batting order {order:?} is not a permutation of 0..{LINEUP_SIZE}"
            )));
        }
        Ok(Self { roster, order })
    }

    /// Uniformly random permutation of the roster.
    pub fn shuffled<R: Rng + ?Sized>(roster: &'a Roster, rng: &mut R) -> Self {
        let mut order = IDENTITY_ORDER;
        order.shuffle(rng);
        Self { roster, order }
    }

    pub fn order(&self) -> [usize; LINEUP_SIZE] {
        self.order
    }

    /// The entry batting at `position` (0..8).
    pub fn batter(&self, position: usize) -> &'a RosterEntry {
        &self.roster.entries[self.order[position]]
    }

    pub fn names(&self) -> Vec<String> {
        self.order.iter().map(|&i| self.roster.player(i).name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use crate::test_support::nine;

    #[test]
    fn test_rejects_wrong_size() {
        let mut players = nine("P");
        players.pop();
        let err = Roster::new(players).unwrap_err();
        assert!(matches!(err, LineupError::InvalidRosterSize { expected: 9, found: 8 }));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let mut players = nine("P");
        players[4].name = "P0".to_string();
        assert!(matches!(Roster::new(players), Err(LineupError::DuplicatePlayer(n)) if n == "P0"));
    }

    #[test]
    fn test_rejects_mixed_layouts() {
        let mut players = nine("P");
        players[3] =
            Player::full("P3", [0.1, 0.0, 0.0, 0.0, 0.1, 0.3, 0.3, 0.2, 0.0], 2).unwrap();
        assert!(matches!(Roster::new(players), Err(LineupError::MixedSchema(n)) if n == "P3"));
    }

    #[test]
    fn test_rejects_roster_without_outs() {
        let players = (0..9)
            .map(|i| Player::reduced(format!("HR{i}"), [0.0, 0.0, 0.0, 1.0, 0.0, 0.0], 3).unwrap())
            .collect();
        assert!(matches!(Roster::new(players), Err(LineupError::UnendingInning)));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let roster = Roster::new(nine("P")).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let lineup = Lineup::shuffled(&roster, &mut rng);
            assert!(Lineup::with_order(&roster, lineup.order()).is_ok());
            let mut names = lineup.names();
            names.sort();
            let mut expected = roster.names();
            expected.sort();
            assert_eq!(names, expected);
        }
    }

    #[test]
    fn test_with_order_rejects_repeats() {
        let roster = Roster::new(nine("P")).unwrap();
        assert!(Lineup::with_order(&roster, [0, 0, 2, 3, 4, 5, 6, 7, 8]).is_err());
        let lineup = Lineup::with_order(&roster, [8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
        assert_eq!(lineup.batter(0).player.name, "P8");
    }
}
