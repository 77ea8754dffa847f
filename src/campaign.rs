//! Multi-battle campaign: the ordered enemy roster fought one by one.

use combat::{Combatant, EnemyConfig};
use error::GameError;
use hero::Player;

use crate::battle::{Battle, BattleOutcome, TurnDrivers};
use crate::event::BattleEvent;

/// How a campaign ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampaignOutcome {
    /// Every enemy was defeated
    Victory { cleared: usize },
    /// The player fell; `cleared` enemies were beaten before that
    Defeat { defeated_by: String, cleared: usize },
}

impl CampaignOutcome {
    pub fn is_victory(&self) -> bool {
        matches!(self, CampaignOutcome::Victory { .. })
    }
}

/// Fixed sequence of encounters
#[derive(Debug, Clone, Default)]
pub struct Campaign {
    roster: Vec<EnemyConfig>,
}

impl Campaign {
    pub fn new(roster: Vec<EnemyConfig>) -> Self {
        Self { roster }
    }

    /// Fight every enemy in order.
    ///
    /// Health and potions carry over between encounters; after each win
    /// that is not the last, the player rests once (a regular self-heal).
    /// The first defeat ends the campaign.
    pub fn run(&self, player: &mut Player, drivers: &mut TurnDrivers<'_>) -> Result<CampaignOutcome, GameError> {
        let total = self.roster.len();
        let hero = player.name().to_string();
        tracing::info!(%hero, enemies = total, "campaign started");
        drivers.observer.notify(&BattleEvent::CampaignStarted {
            hero: hero.clone(),
            enemies: total,
        })?;

        for (index, config) in self.roster.iter().enumerate() {
            let mut enemy = config.spawn()?;
            drivers.observer.notify(&BattleEvent::EncounterStarted {
                enemy: config.name.clone(),
                index,
                total,
            })?;

            let report = Battle::new(player, &mut enemy).run(drivers)?;
            tracing::info!(enemy = %config.name, outcome = ?report.outcome, rounds = report.rounds, "encounter finished");

            if report.outcome == BattleOutcome::Defeat {
                drivers.observer.notify(&BattleEvent::CampaignLost {
                    hero,
                    defeated_by: config.name.clone(),
                })?;
                return Ok(CampaignOutcome::Defeat {
                    defeated_by: config.name.clone(),
                    cleared: index,
                });
            }

            if index + 1 < total {
                let healed = player.heal(drivers.dice);
                drivers.observer.notify(&BattleEvent::Rested {
                    hero: hero.clone(),
                    healed,
                })?;
            }
        }

        drivers.observer.notify(&BattleEvent::CampaignWon {
            hero,
            cleared: total,
        })?;
        Ok(CampaignOutcome::Victory { cleared: total })
    }
}
