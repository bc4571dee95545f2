use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use dungeon_text::engine::EncounterPolicy;
use dungeon_text::{Game, GameConfig, WorldFormat, load_world_from_file, validate_world};

/// Play a text adventure described by a JSON or TOML world file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// World file to load.
    world: PathBuf,

    /// Override format detection (by default `.toml` is TOML, anything else JSON).
    #[arg(long, value_enum)]
    format: Option<WorldFormat>,

    /// Seed the encounter dice for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Which enemies roll when the player leaves a room.
    #[arg(long, value_enum, default_value_t = EncounterPolicy::Compatible)]
    encounters: EncounterPolicy,

    /// Refuse to start if the world file has consistency problems.
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let world = match load_world_from_file(&cli.world, cli.format) {
        Ok(w) => w,
        Err(e) => {
            error!(path = %cli.world.display(), "failed to load world");
            eprintln!("Failed to load world file '{}': {e}", cli.world.display());
            return ExitCode::FAILURE;
        }
    };

    let problems = validate_world(&world);
    for problem in &problems {
        warn!(%problem, "world validation");
    }
    if cli.strict && !problems.is_empty() {
        eprintln!(
            "World file '{}' has {} problem(s); refusing to start in strict mode.",
            cli.world.display(),
            problems.len()
        );
        return ExitCode::FAILURE;
    }

    info!(path = %cli.world.display(), "world loaded");

    let config = GameConfig {
        encounter_policy: cli.encounters,
        seed: cli.seed,
    };
    let mut game = Game::new(world, config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    if let Err(e) = game.run(stdin.lock(), &mut stdout, &mut stderr) {
        error!(error = %e, "terminal i/o failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

// Logs go to stderr so they never interleave with the game on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
