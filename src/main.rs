#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use entropy_battleship::{
    init_logging, ui, AiPlayer, BattleshipGame, CliPlayer, EngineConfig, EntropyEngine,
    GuessResult, Session,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy, Debug)]
#[cfg(feature = "std")]
struct Sizing {
    #[arg(long, default_value_t = entropy_battleship::GRID_SIZE)]
    grid_size: usize,
    #[arg(long, default_value_t = entropy_battleship::SHIP_LENGTH)]
    ship_length: usize,
    #[arg(long = "ships", default_value_t = entropy_battleship::NUM_SHIPS)]
    num_ships: usize,
}

#[cfg(feature = "std")]
impl From<Sizing> for EngineConfig {
    fn from(s: Sizing) -> Self {
        EngineConfig::new(s.grid_size, s.ship_length, s.num_ships)
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play interactively against a hidden fleet.
    Play {
        #[command(flatten)]
        sizing: Sizing,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Show strategy tips without asking")]
        tips: bool,
        #[arg(long, help = "Show per-cell hit probabilities every turn")]
        probabilities: bool,
    },
    /// Let the entropy engine sink a hidden fleet on its own.
    Solve {
        #[command(flatten)]
        sizing: Sizing,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the session report as JSON")]
        json: bool,
        #[arg(long, help = "Show per-cell hit probabilities before every turn")]
        probabilities: bool,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        log::info!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn setup(config: EngineConfig, rng: &mut SmallRng) -> anyhow::Result<(EntropyEngine, BattleshipGame)> {
    let engine = EntropyEngine::new(config).map_err(|e| anyhow::anyhow!(e))?;
    let game = BattleshipGame::random(engine.universe(), rng).ok_or_else(|| {
        anyhow::anyhow!(
            "no valid fleet fits: {} ship(s) of length {} on a {}x{} grid",
            config.num_ships,
            config.ship_length,
            config.grid_size,
            config.grid_size
        )
    })?;
    Ok((engine, game))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            sizing,
            seed,
            tips,
            probabilities,
        } => run_interactive(sizing.into(), seed, tips, probabilities),
        Commands::Solve {
            sizing,
            seed,
            json,
            probabilities,
        } => run_solver(sizing.into(), seed, json, probabilities),
    }
}

#[cfg(feature = "std")]
fn run_interactive(
    config: EngineConfig,
    seed: Option<u64>,
    tips: bool,
    probabilities: bool,
) -> anyhow::Result<()> {
    println!("Get Ready to Play Battleship!\n");
    let mut rng = seeded_rng(seed);
    let (engine, game) = setup(config, &mut rng)?;
    ui::print_header(&config);

    let mut player = CliPlayer::stdio();
    let tips = tips
        || player.confirm(
            "Would you like strategy tips to win in the least number of turns? (y/n): ",
        )?;
    let mut advisor: Box<dyn ui::SuggestionProvider> = if tips {
        Box::new(ui::EntropySuggestion)
    } else {
        Box::new(ui::NoSuggestion)
    };

    let mut session = Session::new(Box::new(player), engine, game);
    while !session.game().is_game_over() {
        ui::print_guess_board(session.game(), false);
        ui::print_turn_stats(session.game().turns() + 1, session.engine());
        if probabilities {
            ui::print_probability_board(session.engine());
        }
        let played = session.game().played();
        ui::print_advice(&mut *advisor, session.engine(), &played);
        match session.step() {
            Ok(Some(_)) => {}
            Ok(None) => {
                println!("Goodbye!");
                return Ok(());
            }
            Err(e) => println!("⚠️  {}", e),
        }
    }

    ui::print_guess_board(session.game(), true);
    ui::print_victory(session.game().turns());
    Ok(())
}

#[cfg(feature = "std")]
fn run_solver(
    config: EngineConfig,
    seed: Option<u64>,
    json: bool,
    probabilities: bool,
) -> anyhow::Result<()> {
    let mut rng = seeded_rng(seed);
    let (engine, game) = setup(config, &mut rng)?;
    let max_turns = config.cells();
    let mut session = Session::new(Box::new(AiPlayer::new()), engine, game);

    if json {
        let report = session.run(max_turns).map_err(|e| anyhow::anyhow!(e))?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    ui::print_header(&config);
    loop {
        if probabilities && !session.game().is_game_over() {
            ui::print_probability_board(session.engine());
        }
        let Some(turn) = session.step().map_err(|e| anyhow::anyhow!(e))? else {
            break;
        };
        let outcome = match turn.result {
            GuessResult::Hit => "HIT",
            GuessResult::Miss => "MISS",
        };
        println!(
            "Turn {:>2}: ({}, {}) -> {:<4}  entropy {:>7.4} bits, {:>5} -> {:<5} configurations (+{:.3} bits)",
            turn.turn,
            turn.coord.0,
            turn.coord.1,
            outcome,
            turn.entropy_before,
            turn.remaining_before,
            turn.remaining_after,
            turn.bits_gained
        );
    }
    ui::print_guess_board(session.game(), true);
    ui::print_victory(session.game().turns());
    Ok(())
}
