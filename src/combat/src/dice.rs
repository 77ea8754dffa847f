// src/combat/src/dice.rs

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// 战役中所有随机数的来源
///
/// 所有战斗公式都通过该 trait 掷骰，测试可以固定每一次结果。
pub trait Dice {
    /// 在 `0..=max` 内均匀掷骰
    fn roll(&mut self, max: u32) -> u32;

    /// `n` 分之一的概率，即 `roll(n - 1) == 0`
    fn one_in(&mut self, n: u32) -> bool {
        self.roll(n.saturating_sub(1)) == 0
    }
}

/// 实际游戏使用的随机数生成器，启动时播种一次
#[derive(Debug, Clone)]
pub struct CombatRng {
    rng: Pcg32,
    seed: u64,
}

impl CombatRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// 获取种子
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// 从切片中随机选择一个元素
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            let idx = self.rng.random_range(0..items.len());
            Some(&items[idx])
        }
    }
}

impl Dice for CombatRng {
    fn roll(&mut self, max: u32) -> u32 {
        self.rng.random_range(0..=max)
    }
}

/// 永远掷出同一面的骰子（超出范围时截断）
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDice(pub u32);

impl Dice for FixedDice {
    fn roll(&mut self, max: u32) -> u32 {
        self.0.min(max)
    }
}

/// 按顺序重放预设点数的骰子，用完后返回固定点数
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: VecDeque<u32>,
    fallback: u32,
    rolls: usize,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            fallback: 0,
            rolls: 0,
        }
    }

    /// 队列耗尽后返回的点数
    pub fn with_fallback(mut self, fallback: u32) -> Self {
        self.fallback = fallback;
        self
    }

    /// 已掷骰次数
    pub fn rolls(&self) -> usize {
        self.rolls
    }

    /// 队列中剩余的点数
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, max: u32) -> u32 {
        self.rolls += 1;
        self.faces.pop_front().unwrap_or(self.fallback).min(max)
    }
}
