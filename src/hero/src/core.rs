// src/hero/core.rs
use combat::{CombatRng, CombatStats};
use error::GameError;

/// 默认英雄属性
pub const DEFAULT_MAX_HP: u32 = 100;
pub const DEFAULT_ATTACK: u32 = 15;
pub const STARTING_POTIONS: u32 = 3;

/// 未指定名字时随机抽取的英雄名
pub const DEFAULT_NAMES: &[&str] = &[
    "Innocent",
    "Ibrahimus",
    "Messenger Max",
    "Seraphina",
    "SSR Drone",
    "Yunmina",
    "Wayfarer",
    "Notnikita",
    "Nephoren",
    "Timebomb",
];

/// 英雄核心数据结构
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub(crate) stats: CombatStats,
    pub(crate) potions: u32,
}

impl Player {
    /// 创建新英雄（满血）
    pub fn new(name: impl Into<String>, max_hp: u32, attack: u32, potions: u32) -> Result<Self, GameError> {
        Ok(Self {
            stats: CombatStats::new(name, max_hp, attack)?,
            potions,
        })
    }

    /// 默认属性的英雄：100 HP，15 攻击，3 瓶药水
    pub fn with_name(name: impl Into<String>) -> Result<Self, GameError> {
        Self::new(name, DEFAULT_MAX_HP, DEFAULT_ATTACK, STARTING_POTIONS)
    }

    /// 从名字池中随机取名，池为空时退回第一个默认名
    pub fn random_name(pool: &[String], rng: &mut CombatRng) -> String {
        rng.choose(pool)
            .cloned()
            .unwrap_or_else(|| DEFAULT_NAMES[0].to_string())
    }

    /// 剩余药水数量
    pub fn potions(&self) -> u32 {
        self.potions
    }

    /// 获得药水
    pub fn add_potions(&mut self, n: u32) {
        self.potions = self.potions.saturating_add(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat::Combatant;

    #[test]
    fn test_default_player() {
        let player = Player::with_name("Tester").unwrap();
        assert_eq!(player.name(), "Tester");
        assert_eq!(player.hp(), 100);
        assert_eq!(player.max_hp(), 100);
        assert_eq!(player.attack_power(), 15);
        // 返回的是药水数量，而不是最大生命值
        assert_eq!(player.potions(), 3);
    }

    #[test]
    fn test_add_potions() {
        let mut player = Player::new("Tester", 100, 15, 0).unwrap();
        player.add_potions(1);
        player.add_potions(2);
        assert_eq!(player.potions(), 3);
    }

    #[test]
    fn test_random_name_from_pool() {
        let pool = vec!["Alpha".to_string(), "Beta".to_string()];
        let mut rng = CombatRng::new(42);
        let name = Player::random_name(&pool, &mut rng);
        assert!(pool.contains(&name));

        assert_eq!(Player::random_name(&[], &mut rng), DEFAULT_NAMES[0]);
    }

    #[test]
    fn test_zero_health_rejected() {
        assert!(Player::new("Ghost", 0, 15, 3).is_err());
    }
}
