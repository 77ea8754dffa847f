// src/hero/src/lib.rs

// 核心模块
mod combat;
mod core;

// 重新导出主要类型
pub use self::{
    combat::PotionOutcome,
    core::{DEFAULT_ATTACK, DEFAULT_MAX_HP, DEFAULT_NAMES, Player, STARTING_POTIONS},
};
