// src/combat/src/enemy.rs

use error::GameError;
use serde::{Deserialize, Serialize};

use crate::combatant::{CombatStats, Combatant};
use crate::constants;
use crate::dice::Dice;

/// 敌人名单中的一项，每场战斗开始时据此生成敌人
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyConfig {
    pub name: String,
    pub max_hp: u32,
    pub attack: u32,
}

impl EnemyConfig {
    pub fn new(name: impl Into<String>, max_hp: u32, attack: u32) -> Self {
        Self {
            name: name.into(),
            max_hp,
            attack,
        }
    }

    /// 生成一个满血的新敌人
    pub fn spawn(&self) -> Result<Enemy, GameError> {
        Enemy::new(&self.name, self.max_hp, self.attack)
    }
}

/// 敌人回合的行动
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyAction {
    Attack,
    Defend,
    Heal,
}

/// 敌人实体，仅包含战斗属性
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    stats: CombatStats,
}

impl Enemy {
    pub fn new(name: &str, max_hp: u32, attack: u32) -> Result<Self, GameError> {
        Ok(Self {
            stats: CombatStats::new(name, max_hp, attack)?,
        })
    }

    /// 生命值是否低于上限的一半
    pub fn is_wounded(&self) -> bool {
        self.stats.hp() < self.stats.max_hp() / 2
    }

    /// 固定概率表，每回合独立判定：
    /// 重伤时三分之一概率治疗，否则 70% 攻击、其余防御。
    ///
    /// 只有重伤时才会进行治疗判定。
    pub fn choose_action(&self, dice: &mut dyn Dice) -> EnemyAction {
        if self.is_wounded() && dice.one_in(constants::ENEMY_HEAL_ODDS) {
            return EnemyAction::Heal;
        }
        if dice.roll(99) < constants::ENEMY_ATTACK_PERCENT {
            EnemyAction::Attack
        } else {
            EnemyAction::Defend
        }
    }
}

impl Combatant for Enemy {
    fn stats(&self) -> &CombatStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CombatStats {
        &mut self.stats
    }
}

// 测试模块
#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{FixedDice, ScriptedDice};

    #[test]
    fn test_enemy_creation() {
        let goblin = EnemyConfig::new("Goblin", 50, 10).spawn().unwrap();
        assert_eq!(goblin.hp(), 50);
        assert_eq!(goblin.max_hp(), 50);
        assert_eq!(goblin.attack_power(), 10);
        assert!(!goblin.is_defending());
    }

    #[test]
    fn test_zero_health_config_rejected() {
        let err = EnemyConfig::new("Ghost", 0, 3).spawn().unwrap_err();
        assert!(matches!(err, GameError::InvalidCombatant { .. }));
    }

    #[test]
    fn test_healthy_enemy_never_rolls_heal_draw() {
        let orc = Enemy::new("Orc", 80, 12).unwrap();
        let mut dice = ScriptedDice::new([10]);
        assert_eq!(orc.choose_action(&mut dice), EnemyAction::Attack);
        assert_eq!(dice.rolls(), 1);
    }

    #[test]
    fn test_wounded_enemy_heals_on_lucky_draw() {
        let mut orc = Enemy::new("Orc", 80, 12).unwrap();
        orc.set_hp(39);
        assert_eq!(orc.choose_action(&mut FixedDice(0)), EnemyAction::Heal);
    }

    #[test]
    fn test_wounded_enemy_falls_through_to_table() {
        let mut orc = Enemy::new("Orc", 80, 12).unwrap();
        orc.set_hp(10);
        // 治疗判定失败，随后 69 < 70 => 攻击
        let mut dice = ScriptedDice::new([1, 69]);
        assert_eq!(orc.choose_action(&mut dice), EnemyAction::Attack);
        let mut dice = ScriptedDice::new([2, 70]);
        assert_eq!(orc.choose_action(&mut dice), EnemyAction::Defend);
    }

    #[test]
    fn test_half_health_is_not_wounded() {
        let mut dragon = Enemy::new("Dragon", 150, 20).unwrap();
        dragon.set_hp(75);
        assert!(!dragon.is_wounded());
        dragon.set_hp(74);
        assert!(dragon.is_wounded());
    }
}
