use num_integer::Integer;
use num_traits::Zero;

use crate::classify::mod4;
use crate::error::RecordError;
use crate::exact::is_witness;
use crate::solution::{Identity, Method, Solution, Status, Tier};

/// レコードの整合性をソルバとは独立に検査する。
///
/// - 成功なら x, y, z はすべて正で x <= y <= z、かつ 1/x + 1/y + 1/z == 4/n（厳密）
/// - tier は method と一致（T1 ⇔ shift 0, T3 ⇔ shift > 0, T4 ⇔ 恒等式の剰余条件成立）
/// - T5 ⇔ status = failure ⇔ x, y, z なし
pub fn check_solution(s: &Solution) -> Result<(), RecordError> {
    let mismatch = |detail: String| RecordError::TierMismatch {
        n: s.n.clone(),
        tier: s.tier.as_str(),
        detail,
    };

    if s.tier != s.method.tier() {
        return Err(mismatch(format!("method '{}'", s.method)));
    }

    match (s.tier, s.status, &s.triple) {
        (Tier::T5, Status::Failure, None) => return Ok(()),
        (Tier::T5, _, _) => return Err(mismatch("a success status or present triple".to_string())),
        (_, Status::Success, Some(_)) => {}
        _ => return Err(mismatch("a failure status or missing triple".to_string())),
    }

    if let Method::Identity(id) = s.method {
        let holds = match id {
            Identity::ThreeModFour => mod4(&s.n) == 3,
            Identity::Odd => s.n.is_odd(),
        };
        if !holds {
            return Err(mismatch(format!("n mod 4 = {}", mod4(&s.n))));
        }
    }

    let Some(t) = &s.triple else {
        return Ok(());
    };
    if t.x().is_zero() || t.y().is_zero() || t.z().is_zero() {
        return Err(RecordError::NonPositive { n: s.n.clone() });
    }
    if !(t.x() <= t.y() && t.y() <= t.z()) {
        return Err(RecordError::Unordered { n: s.n.clone() });
    }
    match is_witness(&s.n, t.x(), t.y(), t.z()) {
        Ok(true) => Ok(()),
        _ => Err(RecordError::SumMismatch { n: s.n.clone() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::Triple;
    use crate::solver::{solve_u64, DEFAULT_MAX_SHIFT};
    use num_bigint::BigUint;

    #[test]
    fn test_solver_output_passes() {
        for n in 2u64..300 {
            let s = solve_u64(n, DEFAULT_MAX_SHIFT);
            assert_eq!(check_solution(&s), Ok(()), "n={}", n);
        }
    }

    #[test]
    fn test_detects_wrong_sum() {
        let t = Triple::sorted(BigUint::from(3u32), BigUint::from(15u32), BigUint::from(15u32));
        let s = Solution::found(BigUint::from(5u32), t, Method::Identity(Identity::Odd));
        assert_eq!(
            check_solution(&s),
            Err(RecordError::SumMismatch { n: BigUint::from(5u32) })
        );
    }

    #[test]
    fn test_detects_tier_method_mismatch() {
        let mut s = solve_u64(7, 0);
        s.tier = Tier::T1;
        assert!(matches!(check_solution(&s), Err(RecordError::TierMismatch { .. })));
    }

    #[test]
    fn test_detects_identity_precondition() {
        let t = Triple::sorted(BigUint::from(2u32), BigUint::from(28u32), BigUint::from(28u32));
        let s = Solution::found(BigUint::from(8u32), t, Method::Identity(Identity::ThreeModFour));
        assert!(matches!(check_solution(&s), Err(RecordError::TierMismatch { .. })));
    }

    #[test]
    fn test_failure_with_triple_rejected() {
        let mut s = solve_u64(8, 0);
        s.triple = Some(Triple::sorted(BigUint::from(2u32), BigUint::from(4u32), BigUint::from(4u32)));
        assert!(check_solution(&s).is_err());
    }
}
