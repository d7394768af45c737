use num_bigint::BigUint;
use tracing::{debug, warn};

use crate::error::SolveError;
use crate::identity;
use crate::search;
use crate::solution::{Method, Solution};

/// 探索 shift の上限（既定値）
pub const DEFAULT_MAX_SHIFT: u64 = 100;

/// 4/n = 1/x + 1/y + 1/z の解を求める。
///
/// 試行順: 探索 (shift 0..max_shift) → 恒等式 (mod 4) → 恒等式 (奇数) → 失敗。
/// 最初に成功した時点で終了する。状態を持たない純関数で、パニックもエラーも返さない。
/// 失敗は `Tier::T5` のレコードとして表現される。
pub fn solve(n: &BigUint, max_shift: u64) -> Solution {
    let residue_seen = match search::bounded_search(n, max_shift) {
        Ok(hit) => {
            debug!(%n, shift = hit.shift, "search hit");
            return Solution::found(n.clone(), hit.triple, Method::Search { shift: hit.shift });
        }
        Err(SolveError::ExhaustedSearch { residue_seen, .. }) => residue_seen,
        Err(e) => {
            warn!(%n, error = %e, "search aborted");
            return Solution::failed(n.clone(), Method::NoResidue);
        }
    };

    debug!(%n, max_shift, "search exhausted, trying identities");
    match identity::identity_fallback(n) {
        Ok((id, triple)) => Solution::found(n.clone(), triple, Method::Identity(id)),
        Err(e) => {
            let method = if residue_seen { Method::NoIdentity } else { Method::NoResidue };
            debug!(%n, error = %e, %method, "no solution");
            Solution::failed(n.clone(), method)
        }
    }
}

/// `solve` の u64 版
pub fn solve_u64(n: u64, max_shift: u64) -> Solution {
    solve(&BigUint::from(n), max_shift)
}
