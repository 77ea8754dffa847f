//! Battle and campaign events.
//!
//! The engine never prints. Everything a player should learn about (who
//! acted, damage dealt and blocked, healing, outcomes) is published as a
//! [`BattleEvent`] to a [`BattleObserver`].

use combat::{AttackOutcome, Combatant, Enemy};
use error::GameError;
use hero::{Player, PotionOutcome};

/// Health line shown before each exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    /// Only the player carries potions
    pub potions: Option<u32>,
}

impl StatusLine {
    pub fn of_player(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            hp: player.hp(),
            max_hp: player.max_hp(),
            potions: Some(player.potions()),
        }
    }

    pub fn of_enemy(enemy: &Enemy) -> Self {
        Self {
            name: enemy.name().to_string(),
            hp: enemy.hp(),
            max_hp: enemy.max_hp(),
            potions: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    // ===== Campaign events =====
    CampaignStarted { hero: String, enemies: usize },
    EncounterStarted { enemy: String, index: usize, total: usize },
    /// Recovery heal between encounters
    Rested { hero: String, healed: u32 },
    CampaignWon { hero: String, cleared: usize },
    CampaignLost { hero: String, defeated_by: String },

    // ===== Battle events =====
    Status { round: u32, player: StatusLine, enemy: StatusLine },
    PlayerAttacked { target: String, outcome: AttackOutcome },
    PlayerDefended,
    PotionDrunk(PotionOutcome),
    Summoned { target: String },
    EnemyAttacked { attacker: String, outcome: AttackOutcome },
    EnemyDefended { enemy: String },
    EnemyHealed { enemy: String, healed: u32 },
    BattleWon { enemy: String, rounds: u32 },
    BattleLost { enemy: String, rounds: u32 },
}

/// Receiver of engine events
pub trait BattleObserver {
    fn notify(&mut self, event: &BattleEvent) -> Result<(), GameError>;
}

/// Records every event, for tests and replays
impl BattleObserver for Vec<BattleEvent> {
    fn notify(&mut self, event: &BattleEvent) -> Result<(), GameError> {
        self.push(event.clone());
        Ok(())
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl BattleObserver for Silent {
    fn notify(&mut self, _event: &BattleEvent) -> Result<(), GameError> {
        Ok(())
    }
}
