//! Action selection for both sides of a battle.
//!
//! A policy only *chooses* an action; the [`Battle`](crate::battle::Battle)
//! applies it. The player is normally driven by
//! [`ConsolePolicy`](crate::input::ConsolePolicy), enemies by [`ScriptedPolicy`].

use std::collections::VecDeque;

use combat::{Combatant, Dice, Enemy, EnemyAction};
use error::GameError;
use hero::Player;

/// Menu actions available to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    Defend,
    DrinkPotion,
    /// Hidden menu code: the enemy dies on the spot
    Summon,
}

/// Read-only snapshot handed to a policy when it has to decide
#[derive(Debug, Clone, Copy)]
pub struct BattleView<'a> {
    pub player: &'a Player,
    pub enemy: &'a Enemy,
}

/// Decision procedure for one side of a battle
pub trait ActionPolicy {
    type Action;

    /// Pick the action for the current turn
    fn choose_action(
        &mut self,
        view: BattleView<'_>,
        dice: &mut dyn Dice,
    ) -> Result<Self::Action, GameError>;
}

/// Enemy AI: the fixed probability table from [`Enemy::choose_action`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedPolicy;

impl ActionPolicy for ScriptedPolicy {
    type Action = EnemyAction;

    fn choose_action(
        &mut self,
        view: BattleView<'_>,
        dice: &mut dyn Dice,
    ) -> Result<EnemyAction, GameError> {
        let action = view.enemy.choose_action(dice);
        tracing::debug!(enemy = view.enemy.name(), ?action, "enemy decided");
        Ok(action)
    }
}

/// Replays a fixed list of actions; runs dry with [`GameError::InputClosed`]
#[derive(Debug, Clone, Default)]
pub struct QueuedPolicy<A> {
    queue: VecDeque<A>,
}

impl<A> QueuedPolicy<A> {
    pub fn new(actions: impl IntoIterator<Item = A>) -> Self {
        Self {
            queue: actions.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl<A> ActionPolicy for QueuedPolicy<A> {
    type Action = A;

    fn choose_action(&mut self, _view: BattleView<'_>, _dice: &mut dyn Dice) -> Result<A, GameError> {
        self.queue.pop_front().ok_or(GameError::InputClosed)
    }
}

/// Always answers with the same action
#[derive(Debug, Clone, Copy)]
pub struct FixedPolicy<A>(pub A);

impl<A: Copy> ActionPolicy for FixedPolicy<A> {
    type Action = A;

    fn choose_action(&mut self, _view: BattleView<'_>, _dice: &mut dyn Dice) -> Result<A, GameError> {
        Ok(self.0)
    }
}
