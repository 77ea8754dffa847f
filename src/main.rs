use anyhow::{Context, anyhow};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::process;
use std::time::SystemTime;
use tracing_subscriber::EnvFilter;

use terminal_gauntlet::{
    battle::TurnDrivers,
    campaign::Campaign,
    combat::CombatRng,
    config::Cli,
    error::handle_error,
    hero::Player,
    input::ConsolePolicy,
    narrator::ConsoleNarrator,
    policy::ScriptedPolicy,
};

fn entropy_seed() -> anyhow::Result<u64> {
    let time = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)?
        .as_nanos();
    let pid = process::id();
    Ok((time ^ (pid as u128)) as u64)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli
        .campaign_config()
        .map_err(|e| anyhow!(handle_error(&e)))
        .context("Failed to load campaign config")?;

    let seed = match cli.seed {
        Some(seed) => seed,
        None => entropy_seed()?,
    };
    tracing::info!(seed, "rng seeded");
    let mut rng = CombatRng::new(seed);

    let name = cli
        .name
        .clone()
        .unwrap_or_else(|| Player::random_name(&config.hero_names, &mut rng));
    let mut player = config.build_player(name).context("Failed to create player")?;

    let mut player_policy = ConsolePolicy::new(io::stdin().lock(), io::stdout(), config.secret_code);
    let mut enemy_policy = ScriptedPolicy;
    let mut narrator = ConsoleNarrator::new(io::stdout(), io::stdout().is_terminal());
    let mut drivers = TurnDrivers {
        player_policy: &mut player_policy,
        enemy_policy: &mut enemy_policy,
        dice: &mut rng,
        observer: &mut narrator,
    };

    let campaign = Campaign::new(config.enemies.clone());
    let outcome = campaign
        .run(&mut player, &mut drivers)
        .map_err(|e| anyhow!(handle_error(&e)))?;

    // Defeat exits with 0 as well
    tracing::info!(?outcome, "campaign finished");
    Ok(())
}
