// src/combat/src/combatant.rs

use error::GameError;

use crate::constants;
use crate::dice::Dice;

/// 单次攻击的结算结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackOutcome {
    /// 目标实际损失的生命值
    pub damage: u32,
    /// 被目标防御抵消的伤害（未防御时为 0）
    pub blocked: u32,
}

/// 玩家与敌人共用的战斗属性
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatStats {
    name: String,
    hp: u32,
    max_hp: u32,
    attack: u32,
    defending: bool,
}

impl CombatStats {
    /// 创建满血的战斗者，`max_hp` 必须大于 0
    pub fn new(name: impl Into<String>, max_hp: u32, attack: u32) -> Result<Self, GameError> {
        let name = name.into();
        if max_hp == 0 {
            return Err(GameError::InvalidCombatant {
                name,
                reason: "max hp must be positive".into(),
            });
        }

        Ok(Self {
            name,
            hp: max_hp,
            max_hp,
            attack,
            defending: false,
        })
    }

    /// 指定初始生命值（不超过上限）
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.set_hp(hp);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn attack_power(&self) -> u32 {
        self.attack
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_defending(&self) -> bool {
        self.defending
    }

    /// 距离满血还差的生命值
    pub fn missing_hp(&self) -> u32 {
        self.max_hp - self.hp
    }

    /// 攻击目标一次：基础攻击力加一次小掷骰，目标防御时减去格挡值。
    /// 只修改目标的状态。
    pub fn strike(&self, target: &mut CombatStats, dice: &mut dyn Dice) -> AttackOutcome {
        let raw = self.attack.saturating_add(dice.roll(constants::ATTACK_SPREAD));

        let blocked = if target.defending {
            target.max_hp / constants::BLOCK_DIVISOR + dice.roll(constants::BLOCK_SPREAD)
        } else {
            0
        };

        let damage = raw.saturating_sub(blocked);
        target.hp = target.hp.saturating_sub(damage);

        tracing::debug!(
            attacker = %self.name,
            defender = %target.name,
            raw,
            blocked,
            damage,
            target_hp = target.hp,
            "attack resolved"
        );

        AttackOutcome { damage, blocked }
    }

    /// 自我治疗：最大生命值的五分之一加掷骰，不超过上限。
    /// 返回实际恢复量。
    pub fn heal(&mut self, dice: &mut dyn Dice) -> u32 {
        let rolled = self.max_hp / constants::HEAL_DIVISOR + dice.roll(constants::HEAL_SPREAD);
        self.restore(rolled)
    }

    /// 恢复至多 `amount` 生命值，不超过上限，返回实际恢复量
    pub fn restore(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.missing_hp());
        self.hp += applied;
        applied
    }

    /// 进入防御姿态，抵挡下一次攻击
    pub fn defend(&mut self) {
        self.defending = true;
    }

    /// 解除防御，在自己每个回合开始时调用
    pub fn reset_defense(&mut self) {
        self.defending = false;
    }

    /// 直接设置生命值，限制在 `0..=max_hp`
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.max_hp);
    }
}

/// 表示可以参加战斗的活体
pub trait Combatant {
    fn stats(&self) -> &CombatStats;

    fn stats_mut(&mut self) -> &mut CombatStats;

    /// 获取名称
    fn name(&self) -> &str {
        self.stats().name()
    }

    /// 获取当前生命值
    fn hp(&self) -> u32 {
        self.stats().hp()
    }

    /// 获取最大生命值
    fn max_hp(&self) -> u32 {
        self.stats().max_hp()
    }

    /// 获取基础攻击力
    fn attack_power(&self) -> u32 {
        self.stats().attack_power()
    }

    /// 是否存活
    fn is_alive(&self) -> bool {
        self.stats().is_alive()
    }

    /// 是否处于防御姿态
    fn is_defending(&self) -> bool {
        self.stats().is_defending()
    }

    /// 攻击目标
    fn attack<T: Combatant + ?Sized>(&self, target: &mut T, dice: &mut dyn Dice) -> AttackOutcome {
        self.stats().strike(target.stats_mut(), dice)
    }

    /// 自我治疗
    fn heal(&mut self, dice: &mut dyn Dice) -> u32 {
        self.stats_mut().heal(dice)
    }

    fn defend(&mut self) {
        self.stats_mut().defend();
    }

    fn reset_defense(&mut self) {
        self.stats_mut().reset_defense();
    }

    fn set_hp(&mut self, hp: u32) {
        self.stats_mut().set_hp(hp);
    }
}

impl Combatant for CombatStats {
    fn stats(&self) -> &CombatStats {
        self
    }

    fn stats_mut(&mut self) -> &mut CombatStats {
        self
    }
}
