use entropy_battleship::{EngineConfig, EntropyEngine};
use proptest::prelude::*;

fn small_engine() -> EntropyEngine {
    EntropyEngine::new(EngineConfig::new(4, 2, 2)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Filtering never grows the belief state, and every survivor agrees with
    /// the observation.
    #[test]
    fn filtering_shrinks_and_is_consistent(
        observations in proptest::collection::vec((0..4usize, 0..4usize, any::<bool>()), 1..8)
    ) {
        let mut engine = small_engine();
        for (r, c, is_hit) in observations {
            let before = engine.remaining();
            engine.update_belief((r, c), is_hit).unwrap();
            prop_assert!(engine.remaining() <= before);
            for board in engine.belief().iter() {
                prop_assert_eq!(board.get(r, c).unwrap(), is_hit);
            }
        }
    }

    /// Reapplying an observation the state already satisfies changes nothing.
    #[test]
    fn filtering_is_idempotent(r in 0..4usize, c in 0..4usize, is_hit in any::<bool>()) {
        let mut engine = small_engine();
        engine.update_belief((r, c), is_hit).unwrap();
        let once = engine.belief().clone();
        engine.update_belief((r, c), is_hit).unwrap();
        prop_assert_eq!(engine.belief(), &once);
    }

    /// Truthful feedback from a real layout keeps it alive and never raises
    /// the entropy.
    #[test]
    fn truthful_feedback_lowers_entropy(
        secret_idx in 0..224usize,
        guesses in proptest::collection::vec((0..4usize, 0..4usize), 1..16)
    ) {
        let mut engine = small_engine();
        let secret = engine.universe()[secret_idx];
        let mut entropy = engine.entropy();
        for (r, c) in guesses {
            engine.update_belief((r, c), secret.get(r, c).unwrap()).unwrap();
            prop_assert!(engine.entropy() <= entropy);
            entropy = engine.entropy();
            prop_assert!(engine.belief().iter().any(|b| *b == secret));
        }
    }

    /// Entropy is log2 of the survivor count, floored at zero.
    #[test]
    fn entropy_matches_remaining(
        observations in proptest::collection::vec((0..4usize, 0..4usize, any::<bool>()), 0..6)
    ) {
        let mut engine = small_engine();
        for (r, c, is_hit) in observations {
            engine.update_belief((r, c), is_hit).unwrap();
        }
        let remaining = engine.remaining();
        if remaining <= 1 {
            prop_assert_eq!(engine.entropy(), 0.0);
        } else {
            prop_assert!((engine.entropy() - (remaining as f64).log2()).abs() < 1e-12);
        }
    }

    /// Probabilities are counts over survivors and stay in [0, 1].
    #[test]
    fn probabilities_are_normalised_counts(r in 0..4usize, c in 0..4usize, is_hit in any::<bool>()) {
        let mut engine = small_engine();
        engine.update_belief((r, c), is_hit).unwrap();
        let counts = engine.belief().hit_counts();
        let probs = engine.hit_probabilities();
        let total = engine.remaining() as f64;
        for (count, p) in counts.iter().zip(probs.iter()) {
            prop_assert!((0.0..=1.0).contains(p));
            prop_assert!((*count as f64 / total - p).abs() < 1e-12);
        }
        prop_assert_eq!(probs[r * 4 + c], if is_hit { 1.0 } else { 0.0 });
    }
}
