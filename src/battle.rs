//! Alternating-turn state machine for a single encounter.
//!
//! A [`Battle`] borrows the player and one enemy and flips between
//! `PlayerTurn` and `EnemyTurn`, one action per [`Battle::step`], until one
//! side drops to 0 health. Death is checked right after each individual
//! action, so the loser never gets a reply.

use combat::{Combatant, Dice, Enemy, EnemyAction};
use error::GameError;
use hero::Player;

use crate::event::{BattleEvent, BattleObserver, StatusLine};
use crate::policy::{ActionPolicy, BattleView, PlayerAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Phases of a battle.
pub enum BattleState {
    /// The player picks and resolves an action.
    PlayerTurn,
    /// The enemy picks and resolves an action.
    EnemyTurn,
    /// Enemy reached 0 health. Terminal.
    Won,
    /// Player reached 0 health. Terminal.
    Lost,
}

impl BattleState {
    pub fn is_terminal(self) -> bool {
        matches!(self, BattleState::Won | BattleState::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// Summary returned once a battle reaches a terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    /// Number of player turns taken
    pub rounds: u32,
}

/// Everything outside the two combatants that a battle needs to advance:
/// both decision procedures, the dice and the event sink.
pub struct TurnDrivers<'d> {
    pub player_policy: &'d mut dyn ActionPolicy<Action = PlayerAction>,
    pub enemy_policy: &'d mut dyn ActionPolicy<Action = EnemyAction>,
    pub dice: &'d mut dyn Dice,
    pub observer: &'d mut dyn BattleObserver,
}

/// One encounter between the player and a single enemy
pub struct Battle<'a> {
    player: &'a mut Player,
    enemy: &'a mut Enemy,
    state: BattleState,
    round: u32,
}

impl<'a> Battle<'a> {
    pub fn new(player: &'a mut Player, enemy: &'a mut Enemy) -> Self {
        Self {
            player,
            enemy,
            state: BattleState::PlayerTurn,
            round: 1,
        }
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Step until a terminal state is reached
    pub fn run(&mut self, drivers: &mut TurnDrivers<'_>) -> Result<BattleReport, GameError> {
        while !self.state.is_terminal() {
            self.step(drivers)?;
        }

        let outcome = match self.state {
            BattleState::Won => BattleOutcome::Victory,
            _ => BattleOutcome::Defeat,
        };
        Ok(BattleReport {
            outcome,
            rounds: self.round,
        })
    }

    /// Resolve exactly one action and return the new state.
    ///
    /// Terminal states are sticky: stepping a finished battle does nothing.
    pub fn step(&mut self, drivers: &mut TurnDrivers<'_>) -> Result<BattleState, GameError> {
        let next = match self.state {
            BattleState::PlayerTurn => self.player_turn(drivers)?,
            BattleState::EnemyTurn => self.enemy_turn(drivers)?,
            terminal => terminal,
        };

        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, round = self.round, "battle state change");
        }
        self.state = next;
        Ok(next)
    }

    fn view(&self) -> BattleView<'_> {
        BattleView {
            player: &*self.player,
            enemy: &*self.enemy,
        }
    }

    fn player_turn(&mut self, drivers: &mut TurnDrivers<'_>) -> Result<BattleState, GameError> {
        self.player.reset_defense();
        drivers.observer.notify(&BattleEvent::Status {
            round: self.round,
            player: StatusLine::of_player(&*self.player),
            enemy: StatusLine::of_enemy(&*self.enemy),
        })?;

        let action = drivers.player_policy.choose_action(self.view(), drivers.dice)?;
        let event = match action {
            PlayerAction::Attack => {
                let outcome = self.player.attack(&mut *self.enemy, drivers.dice);
                BattleEvent::PlayerAttacked {
                    target: self.enemy.name().to_string(),
                    outcome,
                }
            }
            PlayerAction::Defend => {
                self.player.defend();
                BattleEvent::PlayerDefended
            }
            PlayerAction::DrinkPotion => BattleEvent::PotionDrunk(self.player.drink_potion(drivers.dice)),
            PlayerAction::Summon => {
                self.player.summon_attack(&mut *self.enemy);
                BattleEvent::Summoned {
                    target: self.enemy.name().to_string(),
                }
            }
        };
        drivers.observer.notify(&event)?;

        if self.enemy.is_alive() {
            return Ok(BattleState::EnemyTurn);
        }

        // A guard never carries into the next encounter
        self.player.reset_defense();
        drivers.observer.notify(&BattleEvent::BattleWon {
            enemy: self.enemy.name().to_string(),
            rounds: self.round,
        })?;
        Ok(BattleState::Won)
    }

    fn enemy_turn(&mut self, drivers: &mut TurnDrivers<'_>) -> Result<BattleState, GameError> {
        self.enemy.reset_defense();

        let action = drivers.enemy_policy.choose_action(self.view(), drivers.dice)?;
        let enemy = self.enemy.name().to_string();
        let event = match action {
            EnemyAction::Attack => BattleEvent::EnemyAttacked {
                outcome: self.enemy.attack(&mut *self.player, drivers.dice),
                attacker: enemy,
            },
            EnemyAction::Defend => {
                self.enemy.defend();
                BattleEvent::EnemyDefended { enemy }
            }
            EnemyAction::Heal => BattleEvent::EnemyHealed {
                healed: self.enemy.heal(drivers.dice),
                enemy,
            },
        };
        drivers.observer.notify(&event)?;

        if !self.player.is_alive() {
            drivers.observer.notify(&BattleEvent::BattleLost {
                enemy: self.enemy.name().to_string(),
                rounds: self.round,
            })?;
            return Ok(BattleState::Lost);
        }

        self.round += 1;
        Ok(BattleState::PlayerTurn)
    }
}
