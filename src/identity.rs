//! 剰余恒等式による構成（T4）。探索が尽きた後にのみ使う。
//!
//! 適用順は固定: n ≡ 3 (mod 4) → n 奇数。構成した三つ組は必ず厳密検証してから採用する。

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::ToPrimitive;
use tracing::debug;

use crate::error::{SolveError, SolveResult};
use crate::exact::is_witness;
use crate::solution::{Identity, Triple};

/// n に適用できる恒等式（else-if の順で最初の1つ）
pub fn applicable(n: &BigUint) -> Option<Identity> {
    if (n % 4u32).to_u32() == Some(3) {
        Some(Identity::ThreeModFour)
    } else if n.is_odd() {
        Some(Identity::Odd)
    } else {
        None
    }
}

/// 恒等式の三つ組を（未検証のまま）構成する。
/// 剰余条件から各除算は割り切れる。
pub fn construct(n: &BigUint, identity: Identity) -> (BigUint, BigUint, BigUint) {
    let n1 = n + 1u32;
    let yz = (n * &n1) / 2u32;
    let x = match identity {
        Identity::ThreeModFour => &n1 / 4u32,
        Identity::Odd => &n1 / 2u32,
    };
    (x, yz.clone(), yz)
}

/// 適用可能な恒等式を構成・検証する。
/// 適用不可または検証不一致なら `NoIdentityMatch`。
pub fn identity_fallback(n: &BigUint) -> SolveResult<(Identity, Triple)> {
    let identity = applicable(n).ok_or(SolveError::NoIdentityMatch)?;
    let (x, y, z) = construct(n, identity);

    if is_witness(n, &x, &y, &z)? {
        Ok((identity, Triple::sorted(x, y, z)))
    } else {
        debug!(%n, ?identity, %x, %y, %z, "identity construction failed verification");
        Err(SolveError::NoIdentityMatch)
    }
}
