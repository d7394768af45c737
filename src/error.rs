//! エラー型
//!
//! `SolveError` はソルバ内部でのみ使い、呼び出し側へは T5 レコードとして返す。

use num_bigint::BigUint;
use thiserror::Error;

/// ソルバ内部の結果型
pub type SolveResult<T> = std::result::Result<T, SolveError>;

/// ソルバ内部の失敗分類
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// 残差が 0 以下（その shift は不可能、次の shift へ進む）
    #[error("non-positive residue")]
    InvalidResidue,

    /// 有理数演算の異常（0 除算など）
    #[error("arithmetic anomaly: {0}")]
    ArithmeticAnomaly(String),

    /// 検証で不一致（候補 x, y, z の単位分数和が 4/n にならない）
    #[error("candidate ({x}, {y}, {z}) does not sum to 4/n")]
    NotWitness { x: BigUint, y: BigUint, z: BigUint },

    /// shift 上限まで探索して解なし。residue_seen は正の残差が一度でも得られたか。
    #[error("search exhausted {max_shift} shifts")]
    ExhaustedSearch { max_shift: u64, residue_seen: bool },

    /// 恒等式が適用不可、または検証に失敗
    #[error("no modular identity matches")]
    NoIdentityMatch,
}

/// レコード整合性検査のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("n={n}: 1/x + 1/y + 1/z != 4/n")]
    SumMismatch { n: BigUint },

    #[error("n={n}: triple is not ordered x <= y <= z")]
    Unordered { n: BigUint },

    #[error("n={n}: zero component in triple")]
    NonPositive { n: BigUint },

    #[error("n={n}: tier {tier} inconsistent with {detail}")]
    TierMismatch {
        n: BigUint,
        tier: &'static str,
        detail: String,
    },
}

/// 範囲走査のエラー（出力先の I/O のみ。T5 は失敗ではなくデータ）
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
