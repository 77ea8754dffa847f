// src/hero/combat.rs
use super::core::Player;

use combat::{CombatStats, Combatant, Dice};

/// 药水效果参数
const POTION_DIVISOR: u32 = 3;
const POTION_SPREAD: u32 = 4;

/// 喝药水的结果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PotionOutcome {
    /// 没有药水了
    Depleted,
    /// 生命值已满，药水未消耗
    AlreadyFull,
    /// 恢复了指定的生命值
    Healed(u32),
}

impl Combatant for Player {
    fn stats(&self) -> &CombatStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CombatStats {
        &mut self.stats
    }
}

/// 英雄特有的战斗扩展方法
impl Player {
    /// 喝药水：恢复 max_hp/3 + 0..=4，不超过上限，并消耗一瓶
    pub fn drink_potion(&mut self, dice: &mut dyn Dice) -> PotionOutcome {
        if self.potions == 0 {
            return PotionOutcome::Depleted;
        }
        if self.stats.hp() == self.stats.max_hp() {
            return PotionOutcome::AlreadyFull;
        }

        let rolled = self.stats.max_hp() / POTION_DIVISOR + dice.roll(POTION_SPREAD);
        let healed = self.stats.restore(rolled);
        self.potions -= 1;

        tracing::debug!(rolled, healed, potions = self.potions, "potion drunk");
        PotionOutcome::Healed(healed)
    }

    /// 秘技：无视伤害计算，直接将目标生命值归零
    pub fn summon_attack<T: Combatant + ?Sized>(&self, target: &mut T) {
        tracing::debug!(victim = target.name(), "instant kill");
        target.set_hp(0);
    }
}
