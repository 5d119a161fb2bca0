use entropy_battleship::{
    AiPlayer, BattleshipGame, EngineConfig, EntropyEngine, GameStatus, GuessResult, Player,
    Session, BB,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn play(config: EngineConfig, seed: u64) -> entropy_battleship::SessionReport {
    let engine = EntropyEngine::new(config).unwrap();
    let mut rng = SmallRng::seed_from_u64(seed);
    let game = BattleshipGame::random(engine.universe(), &mut rng).unwrap();
    let mut session = Session::new(Box::new(AiPlayer::new()), engine, game);
    session.run(config.cells()).unwrap()
}

#[test]
fn test_ai_sinks_standard_fleet() {
    let config = EngineConfig::default();
    for seed in 0..10 {
        let report = play(config, seed);
        assert_eq!(report.status, GameStatus::Won);
        assert_eq!(report.hits, config.fleet_cells());
        assert_eq!(report.turns, report.hits + report.misses);
        assert!(report.turns <= config.cells());
        assert!(report.final_remaining >= 1);
        assert_eq!(report.history.len(), report.turns);
        assert_eq!(report.universe_size, 1638);
    }
}

#[test]
fn test_opening_turn_follows_engine() {
    let report = play(EngineConfig::default(), 3);
    let first = report.history[0];
    assert_eq!(first.turn, 1);
    assert_eq!(first.coord, (2, 2));
    assert_eq!(first.remaining_before, 1638);
    let expected_after = if first.result == GuessResult::Hit { 714 } else { 1638 - 714 };
    assert_eq!(first.remaining_after, expected_after);
    assert!(first.bits_gained > 0.0);
}

#[test]
fn test_ai_cashes_in_a_determined_board() {
    let mut engine = EntropyEngine::new(EngineConfig::new(3, 3, 1)).unwrap();
    engine.update_belief((0, 0), true).unwrap();
    engine.update_belief((0, 1), false).unwrap();
    let played = BB::from_iter(3, [(0, 0), (0, 1)]).unwrap();
    let mut ai = AiPlayer::new();
    assert_eq!(ai.select_target(&engine, &played), Some((1, 0)));
}

#[test]
fn test_ai_prefers_sure_hits_over_dead_cells() {
    // two stacked ships or two side-by-side ships: the same 2×2 block
    let mut engine = EntropyEngine::new(EngineConfig::new(4, 2, 2)).unwrap();
    let observations = [
        ((0, 0), true),
        ((0, 1), true),
        ((1, 0), true),
        ((2, 0), false),
        ((0, 2), false),
    ];
    for (coord, is_hit) in observations {
        engine.update_belief(coord, is_hit).unwrap();
    }
    assert_eq!(engine.remaining(), 2);
    let played = BB::from_iter(4, observations.iter().map(|(coord, _)| *coord)).unwrap();

    // the engine's tie-break lands on an empty cell
    assert_eq!(engine.best_move(&played), Some((0, 3)));
    let mut ai = AiPlayer::new();
    assert_eq!(ai.select_target(&engine, &played), Some((1, 1)));
}

#[test]
fn test_ai_with_contradictory_state_still_moves() {
    let mut engine = EntropyEngine::new(EngineConfig::new(3, 3, 1)).unwrap();
    engine.update_belief((1, 1), true).unwrap();
    engine.update_belief((1, 1), false).unwrap();
    let played = BB::from_iter(3, [(1, 1), (0, 0)]).unwrap();
    let mut ai = AiPlayer::new();
    assert_eq!(ai.select_target(&engine, &played), Some((0, 1)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Entropy before each turn never increases over a game.
    #[test]
    fn entropy_trace_is_non_increasing(seed in any::<u64>()) {
        let config = EngineConfig::new(4, 2, 2);
        let report = play(config, seed);
        prop_assert_eq!(report.status, GameStatus::Won);
        for pair in report.history.windows(2) {
            prop_assert!(pair[1].entropy_before <= pair[0].entropy_before);
            prop_assert_eq!(pair[1].remaining_before, pair[0].remaining_after);
        }
    }
}
