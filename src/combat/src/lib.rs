// src/combat/src/lib.rs

pub mod combatant;
pub mod dice;
pub mod enemy;


pub use crate::combatant::{AttackOutcome, CombatStats, Combatant};
pub use crate::dice::{CombatRng, Dice, FixedDice, ScriptedDice};
pub use crate::enemy::{Enemy, EnemyAction, EnemyConfig};

/// 战斗公式常量
pub mod constants {
    pub const ATTACK_SPREAD: u32 = 5; // 攻击掷骰 0..=5
    pub const BLOCK_DIVISOR: u32 = 10; // 格挡 max_hp / 10 ...
    pub const BLOCK_SPREAD: u32 = 9; // ... 加 0..=9
    pub const HEAL_DIVISOR: u32 = 5; // 治疗恢复 max_hp / 5 ...
    pub const HEAL_SPREAD: u32 = 9; // ... 加 0..=9
    pub const ENEMY_HEAL_ODDS: u32 = 3; // 重伤敌人三分之一概率治疗
    pub const ENEMY_ATTACK_PERCENT: u32 = 70; // 否则 70% 概率攻击
}
