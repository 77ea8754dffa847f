//! Campaign configuration: built-in defaults, optional JSON roster file and
//! command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use combat::EnemyConfig;
use error::GameError;
use hero::{DEFAULT_ATTACK, DEFAULT_MAX_HP, DEFAULT_NAMES, Player, STARTING_POTIONS};
use serde::{Deserialize, Serialize};

use crate::input::DEFAULT_SECRET_CODE;

/// Starting stats of the player character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_hp: u32,
    pub attack: u32,
    pub potions: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_hp: DEFAULT_MAX_HP,
            attack: DEFAULT_ATTACK,
            potions: STARTING_POTIONS,
        }
    }
}

/// Everything a campaign is built from. Every field may be omitted from a
/// roster file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    pub player: PlayerConfig,
    /// Pool a hero name is drawn from when none is given
    pub hero_names: Vec<String>,
    /// Menu code for the instant-kill move
    pub secret_code: i64,
    /// Enemies, fought in order
    pub enemies: Vec<EnemyConfig>,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            hero_names: DEFAULT_NAMES.iter().map(|name| name.to_string()).collect(),
            secret_code: DEFAULT_SECRET_CODE,
            enemies: default_roster(),
        }
    }
}

/// The three stock encounters
pub fn default_roster() -> Vec<EnemyConfig> {
    vec![
        EnemyConfig::new("Goblin", 50, 10),
        EnemyConfig::new("Orc", 80, 12),
        EnemyConfig::new("Dragon", 150, 20),
    ]
}

impl CampaignConfig {
    /// Load a JSON roster file and validate it
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        tracing::info!(path = %path.display(), enemies = config.enemies.len(), "loaded roster");
        Ok(config)
    }

    /// Reject combatants that could never take part in a fight
    pub fn validate(&self) -> Result<(), GameError> {
        if self.player.max_hp == 0 {
            return Err(GameError::Config("player max_hp must be positive".into()));
        }
        if let Some(enemy) = self.enemies.iter().find(|enemy| enemy.max_hp == 0) {
            return Err(GameError::Config(format!(
                "enemy '{}' has max_hp 0",
                enemy.name
            )));
        }
        Ok(())
    }

    /// Build the player at full health
    pub fn build_player(&self, name: impl Into<String>) -> Result<Player, GameError> {
        Player::new(
            name,
            self.player.max_hp,
            self.player.attack,
            self.player.potions,
        )
    }
}

/// Turn-based console combat gauntlet
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Seed for every random roll; derived from the clock when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file overriding the default roster and player stats
    #[arg(long, value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Hero name; drawn from the name pool when omitted
    #[arg(long)]
    pub name: Option<String>,

    /// Number of potions to start with
    #[arg(long)]
    pub potions: Option<u32>,
}

impl Cli {
    /// Defaults, then the roster file, then command-line overrides
    pub fn campaign_config(&self) -> Result<CampaignConfig, GameError> {
        let mut config = match &self.roster {
            Some(path) => CampaignConfig::load(path)?,
            None => CampaignConfig::default(),
        };
        if let Some(potions) = self.potions {
            config.player.potions = potions;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat::{Combatant, FixedDice};
    use std::io::Write;

    fn write_roster(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = CampaignConfig::default();
        assert_eq!(config.enemies, default_roster());
        assert_eq!(config.secret_code, 131313);
        assert_eq!(config.hero_names.len(), DEFAULT_NAMES.len());

        let player = config.build_player("Tester").unwrap();
        assert_eq!(player.hp(), 100);
        assert_eq!(player.attack_power(), 15);
        assert_eq!(player.potions(), 3);
    }

    #[test]
    fn test_partial_roster_file_keeps_defaults() {
        let file = write_roster(r#"{ "enemies": [ { "name": "Slime", "max_hp": 20, "attack": 3 } ] }"#);
        let config = CampaignConfig::load(file.path()).unwrap();

        assert_eq!(config.enemies, vec![EnemyConfig::new("Slime", 20, 3)]);
        assert_eq!(config.player, PlayerConfig::default());
        assert_eq!(config.secret_code, DEFAULT_SECRET_CODE);
    }

    #[test]
    fn test_player_section_partially_overridden() {
        let file = write_roster(r#"{ "player": { "potions": 5 } }"#);
        let config = CampaignConfig::load(file.path()).unwrap();
        assert_eq!(config.player.potions, 5);
        assert_eq!(config.player.max_hp, DEFAULT_MAX_HP);
    }

    #[test]
    fn test_malformed_roster_file() {
        let file = write_roster("{ enemies: oops");
        let err = CampaignConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn test_zero_health_enemy_rejected() {
        let file = write_roster(r#"{ "enemies": [ { "name": "Ghost", "max_hp": 0, "attack": 3 } ] }"#);
        let err = CampaignConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Ghost"));
    }

    #[test]
    fn test_max_attack_enemy_fights_without_overflow() {
        let file = write_roster(r#"{ "enemies": [ { "name": "Titan", "max_hp": 500, "attack": 4294967295 } ] }"#);
        let config = CampaignConfig::load(file.path()).unwrap();

        let titan = config.enemies[0].spawn().unwrap();
        let mut player = config.build_player("Tester").unwrap();
        let outcome = titan.attack(&mut player, &mut FixedDice(1));
        assert_eq!(outcome.damage, u32::MAX);
        assert_eq!(player.hp(), 0);
    }

    #[test]
    fn test_missing_roster_file() {
        let err = CampaignConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, GameError::IoError(_)));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["terminal_gauntlet", "--seed", "7", "--potions", "9", "--name", "Zed"]);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.name.as_deref(), Some("Zed"));

        let config = cli.campaign_config().unwrap();
        assert_eq!(config.player.potions, 9);
        assert_eq!(config.enemies.len(), 3);
    }
}
