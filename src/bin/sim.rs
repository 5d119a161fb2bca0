use entropy_battleship::{AiPlayer, BattleshipGame, EngineConfig, EntropyEngine, GameStatus, Session};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    entropy_battleship::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;

    let config = EngineConfig::default();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = EntropyEngine::new(config).map_err(|e| anyhow::anyhow!(e))?;
    let universe_size = engine.universe_size();

    let mut turns = Vec::with_capacity(games);
    for _ in 0..games {
        engine.reset();
        let game = BattleshipGame::random(engine.universe(), &mut rng)
            .ok_or_else(|| anyhow::anyhow!("empty universe"))?;
        let mut session = Session::new(Box::new(AiPlayer::new()), engine, game);
        let report = session
            .run(config.cells())
            .map_err(|e| anyhow::anyhow!(e))?;
        if report.status != GameStatus::Won {
            return Err(anyhow::anyhow!("game did not finish: {:?}", report.status));
        }
        turns.push(report.turns);
        engine = session.into_engine();
    }

    let mean_turns = if turns.is_empty() {
        0.0
    } else {
        turns.iter().sum::<usize>() as f64 / turns.len() as f64
    };
    let result = json!({
        "config": config,
        "universe_size": universe_size,
        "games": games,
        "mean_turns": mean_turns,
        "min_turns": turns.iter().min(),
        "max_turns": turns.iter().max(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
