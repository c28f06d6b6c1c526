//! Outcome sampler: one categorical draw per plate appearance.

use rand::Rng;
use rand_distr::{Distribution, WeightedIndex};

use crate::error::{LineupError, Result};
use crate::models::{Outcome, OutcomeProbabilities, Player};

/// Weighted categorical draw over a player's outcome layout.
///
/// Weights are normalized by their sum before the index is built; categories
/// with zero weight are never drawn.
#[derive(Debug, Clone)]
pub struct OutcomeSampler {
    categories: &'static [Outcome],
    index: WeightedIndex<f64>,
}

impl OutcomeSampler {
    pub fn new(probabilities: &OutcomeProbabilities) -> std::result::Result<Self, String> {
        let index = WeightedIndex::new(probabilities.normalized()).map_err(|e| e.to_string())?;
        Ok(Self { categories: probabilities.layout().categories(), index })
    }

    pub fn for_player(player: &Player) -> Result<Self> {
        Self::new(&player.probabilities).map_err(|reason| LineupError::InvalidDistribution {
            player: player.name.clone(),
            reason,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Outcome {
        self.categories[self.index.sample(rng)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutcomeLayout;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    fn frequencies(sampler: &OutcomeSampler, draws: usize, seed: u64) -> HashMap<Outcome, f64> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut counts = HashMap::new();
        for _ in 0..draws {
            *counts.entry(sampler.sample(&mut rng)).or_insert(0usize) += 1;
        }
        counts.into_iter().map(|(o, c)| (o, c as f64 / draws as f64)).collect()
    }

    #[test]
    fn test_only_layout_labels_are_drawn() {
        let p = Player::reduced("A", [0.2, 0.05, 0.01, 0.04, 0.1, 0.6], 3).unwrap();
        let sampler = OutcomeSampler::for_player(&p).unwrap();
        let freq = frequencies(&sampler, 5_000, 1);
        assert!(freq.keys().all(|o| OutcomeLayout::Reduced.contains(*o)));
    }

    #[test]
    fn test_zero_weight_never_drawn() {
        let p = Player::full("B", [0.3, 0.0, 0.0, 0.0, 0.2, 0.2, 0.3, 0.0, 0.0], 3).unwrap();
        let sampler = OutcomeSampler::for_player(&p).unwrap();
        let freq = frequencies(&sampler, 20_000, 2);
        for zero in [Outcome::Double, Outcome::Triple, Outcome::HomeRun, Outcome::FlyOut, Outcome::SacrificeAttempt] {
            assert!(!freq.contains_key(&zero), "{zero:?} drawn with zero weight");
        }
    }

    #[test]
    fn test_scaling_preserves_distribution() {
        let base = [0.2, 0.05, 0.01, 0.04, 0.1, 0.6];
        let scaled = base.map(|w| w * 37.5);
        let a = OutcomeSampler::for_player(&Player::reduced("A", base, 0).unwrap()).unwrap();
        let b = OutcomeSampler::for_player(&Player::reduced("B", scaled, 0).unwrap()).unwrap();
        let fa = frequencies(&a, 40_000, 3);
        let fb = frequencies(&b, 40_000, 4);
        for (i, outcome) in OutcomeLayout::Reduced.categories().iter().enumerate() {
            let ea = fa.get(outcome).copied().unwrap_or(0.0);
            let eb = fb.get(outcome).copied().unwrap_or(0.0);
            assert!((ea - base[i]).abs() < 0.015, "{outcome:?}: {ea} vs {}", base[i]);
            assert!((ea - eb).abs() < 0.02, "{outcome:?}: {ea} vs {eb}");
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        let p = Player::reduced("C", [0.2, 0.05, 0.01, 0.04, 0.1, 0.6], 3).unwrap();
        let sampler = OutcomeSampler::for_player(&p).unwrap();
        let mut r1 = ChaCha8Rng::seed_from_u64(99);
        let mut r2 = ChaCha8Rng::seed_from_u64(99);
        let a: Vec<_> = (0..100).map(|_| sampler.sample(&mut r1)).collect();
        let b: Vec<_> = (0..100).map(|_| sampler.sample(&mut r2)).collect();
        assert_eq!(a, b);
    }
}
