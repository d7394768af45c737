//! 貪欲残差探索（T1 / T3）
//!
//! x = ceil(n/4) + shift から始め、各段で残差以下となる最小の単位分数を選ぶ。
//!
//! ```text
//! r  = 4/n - 1/x     (r <= 0 なら次の shift)
//! y  = ceil(1/r)
//! r2 = r - 1/y       (r2 <= 0 なら次の shift)
//! z  = ceil(1/r2)
//! 1/x + 1/y + 1/z == 4/n を厳密に検証
//! ```
//!
//! 最後の検証が成立するのは r2 自体が単位分数のときに限る。

use num_bigint::BigUint;
use num_rational::BigRational;
use tracing::trace;

use crate::error::{SolveError, SolveResult};
use crate::exact::{ceil_quarter, ceil_recip, target, unit, unit_sum};
use crate::solution::Triple;

/// 探索で見つかった解
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub shift: u64,
    pub triple: Triple,
}

/// 1つの shift について貪欲に y, z を決めて検証する。
/// 残差が 0 以下なら `InvalidResidue`、和が一致しなければ `NotWitness`。
pub fn try_shift(n: &BigUint, goal: &BigRational, shift: u64) -> SolveResult<Triple> {
    let x = ceil_quarter(n) + shift;
    let r = goal - unit(&x)?;
    let y = ceil_recip(&r)?;
    let r2 = r - unit(&y)?;
    let z = ceil_recip(&r2)?;

    if unit_sum(&x, &y, &z)? == *goal {
        Ok(Triple::sorted(x, y, z))
    } else {
        Err(SolveError::NotWitness { x, y, z })
    }
}

/// shift = 0..max_shift を順に試し、最初に検証を通った解を返す。
/// 全滅なら `ExhaustedSearch`、演算異常はそのまま返す。
pub fn bounded_search(n: &BigUint, max_shift: u64) -> SolveResult<SearchHit> {
    let goal = target(n)?;
    let mut residue_seen = false;

    for shift in 0..max_shift {
        match try_shift(n, &goal, shift) {
            Ok(triple) => return Ok(SearchHit { shift, triple }),
            Err(SolveError::InvalidResidue) => {
                trace!(%n, shift, "non-positive residue");
            }
            Err(SolveError::NotWitness { x, y, z }) => {
                residue_seen = true;
                trace!(%n, shift, %x, %y, %z, "greedy candidate rejected");
            }
            Err(e) => return Err(e),
        }
    }

    Err(SolveError::ExhaustedSearch { max_shift, residue_seen })
}
