//! n の剰余類メタデータ（n mod 4、帯番号、元素記号）と類別集計。

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::solution::Solution;

/// n mod 4 ごとの元素記号 (0: 🜀 空気, 1: 🜁 火, 2: 🜂 水, 3: 🜃 土)
pub const GLYPHS: [char; 4] = ['🜀', '🜁', '🜂', '🜃'];

/// n の剰余類情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueClass {
    /// n mod 4
    pub mod4: u8,
    /// 帯番号: n = 2 なら 0、それ以外は floor((n+1)/4)
    pub band: BigUint,
    pub glyph: char,
}

pub fn mod4(n: &BigUint) -> u8 {
    // n % 4 < 4 なので u8 に必ず収まる
    (n % 4u32).to_u8().unwrap_or(0)
}

pub fn band(n: &BigUint) -> BigUint {
    if *n == BigUint::from(2u32) {
        BigUint::zero()
    } else {
        (n + 1u32) / 4u32
    }
}

pub fn classify(n: &BigUint) -> ResidueClass {
    let m = mod4(n);
    ResidueClass {
        mod4: m,
        band: band(n),
        glyph: GLYPHS[m as usize],
    }
}

/// n mod 4 別の成功/失敗数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassStats {
    pub success: [u64; 4],
    pub failure: [u64; 4],
}

impl ClassStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn accumulate(&mut self, solution: &Solution) {
        let m = mod4(&solution.n) as usize;
        if solution.is_success() {
            self.success[m] += 1;
        } else {
            self.failure[m] += 1;
        }
    }

    pub fn merge(&mut self, other: &ClassStats) {
        for i in 0..4 {
            self.success[i] += other.success[i];
            self.failure[i] += other.failure[i];
        }
    }

    /// 剰余類 m の総数
    pub fn total(&self, m: usize) -> u64 {
        self.success[m] + self.failure[m]
    }
}
