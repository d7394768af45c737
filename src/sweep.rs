use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use std::io::Write;
use tracing::{info, warn};

use crate::classify::ClassStats;
use crate::error::{RecordError, SweepError};
use crate::solution::{Solution, Tier, CSV_HEADER};
use crate::solver::{self, DEFAULT_MAX_SHIFT};
use crate::verify::check_solution;

/// 範囲走査の設定。範囲は閉区間 [start, end]、start < 2 は 2 に切り上げる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    pub start: BigUint,
    pub end: BigUint,
    pub max_shift: u64,
}

impl SweepConfig {
    pub fn new(start: BigUint, end: BigUint) -> Self {
        SweepConfig {
            start,
            end,
            max_shift: DEFAULT_MAX_SHIFT,
        }
    }

    pub fn with_max_shift(mut self, max_shift: u64) -> Self {
        self.max_shift = max_shift;
        self
    }

    /// 実際の開始値（2 未満は 2）
    pub fn first(&self) -> BigUint {
        let two = BigUint::from(2u32);
        if self.start < two {
            two
        } else {
            self.start.clone()
        }
    }

    /// 処理する n の個数（u64 に収まらなければ u64::MAX）
    pub fn len(&self) -> u64 {
        let first = self.first();
        if first > self.end {
            return 0;
        }
        (&self.end - &first + 1u32).to_u64().unwrap_or(u64::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// tier 別の件数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierCounts {
    counts: [u64; 4],
}

impl TierCounts {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn accumulate(&mut self, tier: Tier) {
        self.counts[tier.index()] += 1;
    }

    /// 並列処理用: 他の TierCounts をマージ
    pub fn merge(&mut self, other: &TierCounts) {
        for i in 0..4 {
            self.counts[i] += other.counts[i];
        }
    }

    pub fn get(&self, tier: Tier) -> u64 {
        self.counts[tier.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// 範囲走査の結果
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// 処理した n の総数
    pub total_checked: u64,
    pub tier_counts: TierCounts,
    /// n mod 4 別の成功/失敗数
    pub class_stats: ClassStats,
    /// T5 となった n
    pub failures: Vec<BigUint>,
    /// 整合性検査に落ちたレコード
    pub inconsistent: Vec<(BigUint, RecordError)>,
}

impl SweepResult {
    fn new() -> Self {
        SweepResult {
            total_checked: 0,
            tier_counts: TierCounts::new(),
            class_stats: ClassStats::new(),
            failures: Vec::new(),
            inconsistent: Vec::new(),
        }
    }

    /// 1レコードを集計に反映する
    pub fn accumulate(&mut self, solution: &Solution) {
        self.total_checked += 1;
        self.tier_counts.accumulate(solution.tier);
        self.class_stats.accumulate(solution);
        if !solution.is_success() {
            self.failures.push(solution.n.clone());
        }
        if let Err(e) = check_solution(solution) {
            warn!(n = %solution.n, error = %e, "inconsistent record");
            self.inconsistent.push((solution.n.clone(), e));
        }
    }
}

/// [first, end] を昇順に1つずつ解くイテレータ
pub fn records(config: &SweepConfig) -> impl Iterator<Item = Solution> + '_ {
    let mut n = config.first();
    std::iter::from_fn(move || {
        if n > config.end {
            return None;
        }
        let s = solver::solve(&n, config.max_shift);
        n += BigUint::one();
        Some(s)
    })
}

/// 範囲を走査し、ヘッダ + 1行/n の CSV を sink に書きながら集計する。
/// T5 は走査を止めない。失敗するのは sink への書き込みだけ。
/// progress_callback: (完了数, 総数) を定期的に呼ぶ。
pub fn sweep_range<W: Write>(
    config: &SweepConfig,
    sink: &mut W,
    progress_callback: impl Fn(u64, u64),
) -> Result<SweepResult, SweepError> {
    let total = config.len();
    info!(start = %config.first(), end = %config.end, max_shift = config.max_shift, total, "sweep start");

    writeln!(sink, "{}", CSV_HEADER)?;
    let mut result = SweepResult::new();

    for solution in records(config) {
        writeln!(sink, "{}", solution.csv_row())?;
        result.accumulate(&solution);

        if result.total_checked % 1000 == 0 {
            progress_callback(result.total_checked, total);
        }
    }
    sink.flush()?;

    progress_callback(result.total_checked, total);

    info!(
        total = result.total_checked,
        t1 = result.tier_counts.get(Tier::T1),
        t3 = result.tier_counts.get(Tier::T3),
        t4 = result.tier_counts.get(Tier::T4),
        t5 = result.tier_counts.get(Tier::T5),
        "sweep done"
    );
    Ok(result)
}
