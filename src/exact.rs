//! 厳密有理数演算の補助関数。
//!
//! 残差・等式判定はすべて `BigRational`（既約分数）で行い、浮動小数点は使わない。
//! 有理数 → 整数の切り上げも分子・分母の整数演算のみで計算する。

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::error::{SolveError, SolveResult};

/// 目標値 4/n
pub fn target(n: &BigUint) -> SolveResult<BigRational> {
    if n.is_zero() {
        return Err(SolveError::ArithmeticAnomaly("4/n with n = 0".to_string()));
    }
    Ok(BigRational::new(BigInt::from(4u32), BigInt::from(n.clone())))
}

/// 単位分数 1/d
pub fn unit(d: &BigUint) -> SolveResult<BigRational> {
    if d.is_zero() {
        return Err(SolveError::ArithmeticAnomaly("unit fraction 1/0".to_string()));
    }
    Ok(BigRational::new(BigInt::one(), BigInt::from(d.clone())))
}

/// ceil(1/r)。r = p/q (既約, p, q > 0) なら ceil(q/p) = (q + p - 1) / p。
/// 1/ceil(1/r) <= r を満たす最小の整数を返す。
pub fn ceil_recip(r: &BigRational) -> SolveResult<BigUint> {
    if !r.is_positive() {
        return Err(SolveError::InvalidResidue);
    }
    let p = r.numer();
    let q = r.denom();
    let c = (q + p - BigInt::one()) / p;
    c.to_biguint()
        .filter(|v| !v.is_zero())
        .ok_or_else(|| SolveError::ArithmeticAnomaly(format!("ceil(1/{}) is not positive", r)))
}

/// ceil(n/4)
#[inline]
pub fn ceil_quarter(n: &BigUint) -> BigUint {
    (n + 3u32) / 4u32
}

/// 1/x + 1/y + 1/z
pub fn unit_sum(x: &BigUint, y: &BigUint, z: &BigUint) -> SolveResult<BigRational> {
    Ok(unit(x)? + unit(y)? + unit(z)?)
}

/// 1/x + 1/y + 1/z == 4/n を厳密に判定
pub fn is_witness(n: &BigUint, x: &BigUint, y: &BigUint, z: &BigUint) -> SolveResult<bool> {
    Ok(unit_sum(x, y, z)? == target(n)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(p: i64, q: i64) -> BigRational {
        BigRational::new(BigInt::from(p), BigInt::from(q))
    }

    #[test]
    fn test_target_reduces() {
        let t = target(&BigUint::from(8u32)).unwrap();
        assert_eq!(t, ratio(1, 2));
        assert!(target(&BigUint::zero()).is_err());
    }

    #[test]
    fn test_ceil_recip() {
        // 1/(5/21) = 4.2 → 5
        assert_eq!(ceil_recip(&ratio(5, 21)).unwrap(), BigUint::from(5u32));
        // 単位分数はそのまま
        assert_eq!(ceil_recip(&ratio(1, 14)).unwrap(), BigUint::from(14u32));
        // 1 より大きい残差 → 1
        assert_eq!(ceil_recip(&ratio(3, 2)).unwrap(), BigUint::from(1u32));
    }

    #[test]
    fn test_ceil_recip_rejects_non_positive() {
        assert_eq!(ceil_recip(&BigRational::zero()), Err(SolveError::InvalidResidue));
        assert_eq!(ceil_recip(&ratio(-1, 3)), Err(SolveError::InvalidResidue));
    }

    #[test]
    fn test_ceil_quarter() {
        for (n, q) in [(2u32, 1u32), (4, 1), (5, 2), (7, 2), (8, 2), (9, 3)] {
            assert_eq!(ceil_quarter(&BigUint::from(n)), BigUint::from(q), "n={}", n);
        }
    }

    #[test]
    fn test_is_witness() {
        let b = |v: u32| BigUint::from(v);
        assert!(is_witness(&b(7), &b(2), &b(28), &b(28)).unwrap());
        assert!(!is_witness(&b(5), &b(3), &b(15), &b(15)).unwrap());
        assert!(is_witness(&b(5), &b(2), &b(4), &b(20)).unwrap());
        assert!(unit_sum(&b(0), &b(1), &b(1)).is_err());
    }
}
