use adventure::core::config::USAGE;
use adventure::core::error::ConfigError;
use adventure::core::{ask_hero_name, resolve_cli, CliAction, GameConfig, GameSession};
use adventure::ui::TerminalFrontend;
use adventure::world::{default_world, WorldSpec};
use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match resolve_cli(&args, GameConfig::load) {
        Ok(CliAction::Play(config)) => config,
        Ok(CliAction::Version) => {
            println!("adventure {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Ok(CliAction::Help) => {
            println!("Adventure - a turn-based text adventure\n");
            println!("{}", USAGE);
            return Ok(());
        }
        Err(err @ (ConfigError::Io { .. } | ConfigError::Parse { .. })) => {
            return Err(err).context("failed to load configuration");
        }
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Run 'adventure --help' for usage.");
            std::process::exit(2);
        }
    };

    // Logs go to stderr so they never interleave with the story on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let world = match &config.world_file {
        Some(path) => WorldSpec::load(path)
            .and_then(|spec| spec.build())
            .with_context(|| format!("failed to load world from {}", path.display()))?,
        None => default_world().context("failed to build the built-in world")?,
    };

    let rng = match config.seed {
        Some(seed) => {
            info!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut frontend = TerminalFrontend::stdio(&config);
    let hero_name = match config.hero_name.clone() {
        Some(name) => name,
        None => ask_hero_name(&mut frontend),
    };

    let mut session = GameSession::new(world, hero_name, rng);
    session.run(&mut frontend);
    Ok(())
}
