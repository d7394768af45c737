use erdos_straus_tiers::*;
use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::ToPrimitive;

/// 1/x + 1/y + 1/z == 4/n をテスト側で独立に計算して確認するヘルパー
fn assert_exact(s: &Solution) {
    let t = s.triple.as_ref().unwrap_or_else(|| panic!("n={} has no triple", s.n));
    let u = |v: &BigUint| BigRational::new(BigInt::from(1), BigInt::from(v.clone()));
    let sum = u(t.x()) + u(t.y()) + u(t.z());
    let goal = BigRational::new(BigInt::from(4), BigInt::from(s.n.clone()));
    assert_eq!(sum, goal, "sum mismatch for n={}", s.n);
    assert!(t.x() <= t.y() && t.y() <= t.z(), "unordered for n={}", s.n);
    assert!(*t.x() > BigUint::from(0u32), "x must be positive for n={}", s.n);
}

fn triple(s: &Solution) -> (u64, u64, u64) {
    let t = s.triple.as_ref().expect("triple");
    let f = |v: &BigUint| v.to_u64().expect("fits u64");
    (f(t.x()), f(t.y()), f(t.z()))
}

#[test]
fn test_n2_boundary() {
    // shift 0 は r2 = 0 で不可、shift 1 で (1, 2, 2): 1 + 1/2 + 1/2 = 2
    let s = solve_u64(2, DEFAULT_MAX_SHIFT);
    assert!(s.is_success());
    assert_exact(&s);
    assert_eq!(triple(&s), (1, 2, 2));
    assert_eq!(s.tier, Tier::T3);
    assert_eq!(s.method, Method::Search { shift: 1 });
}

#[test]
fn test_t1_canonical_cases() {
    // shift 0 で解ける n
    let check = |n: u64, expected: (u64, u64, u64)| {
        let s = solve_u64(n, DEFAULT_MAX_SHIFT);
        assert_eq!(s.tier, Tier::T1, "tier for n={}", n);
        assert_eq!(s.method, Method::Search { shift: 0 });
        assert_eq!(triple(&s), expected, "triple for n={}", n);
        assert_exact(&s);
    };

    check(5, (2, 4, 20));
    check(13, (4, 18, 468));
}

#[test]
fn test_t3_shifted_cases() {
    let check = |n: u64, shift: u64, expected: (u64, u64, u64)| {
        let s = solve_u64(n, DEFAULT_MAX_SHIFT);
        assert_eq!(s.tier, Tier::T3, "tier for n={}", n);
        assert_eq!(s.method, Method::Search { shift }, "shift for n={}", n);
        assert_eq!(triple(&s), expected, "triple for n={}", n);
        assert_exact(&s);
    };

    check(3, 1, (2, 2, 3));
    check(4, 2, (2, 3, 6));
    check(7, 2, (4, 4, 14));
    check(8, 3, (4, 5, 20));
    check(24, 5, (11, 14, 231));
    check(100, 2, (27, 338, 228150));
}

#[test]
fn test_all_successes_exact_2_to_500() {
    for n in 2u64..=500 {
        let s = solve_u64(n, DEFAULT_MAX_SHIFT);
        if s.is_success() {
            assert_exact(&s);
        }
        assert_eq!(check_solution(&s), Ok(()), "n={}", n);
    }
}

#[test]
fn test_deterministic() {
    for n in [2u64, 7, 24, 97, 193, 1000] {
        for max_shift in [0u64, 1, 5, DEFAULT_MAX_SHIFT] {
            assert_eq!(solve_u64(n, max_shift), solve_u64(n, max_shift), "n={} S={}", n, max_shift);
        }
    }
}

#[test]
fn test_tier_consistent_with_method() {
    for n in 2u64..=300 {
        let s = solve_u64(n, DEFAULT_MAX_SHIFT);
        match s.tier {
            Tier::T1 => assert_eq!(s.method, Method::Search { shift: 0 }),
            Tier::T3 => assert!(matches!(s.method, Method::Search { shift } if shift > 0)),
            Tier::T4 => assert!(matches!(s.method, Method::Identity(_))),
            Tier::T5 => {
                assert_eq!(s.status, Status::Failure);
                assert!(s.x().is_none() && s.y().is_none() && s.z().is_none());
            }
        }
    }
}

#[test]
fn test_known_gap_n193() {
    // 193 ≡ 1 (mod 4): 既定の shift 上限では探索が尽き、奇数恒等式も検証で落ちる
    let s = solve_u64(193, DEFAULT_MAX_SHIFT);
    assert_eq!(s.tier, Tier::T5);
    assert_eq!(s.method, Method::NoIdentity);
    assert!(s.triple.is_none());

    // 上限を明示的に広げれば探索で解ける
    let s = solve_u64(193, 1000);
    assert_eq!(s.tier, Tier::T3);
    assert_eq!(s.method, Method::Search { shift: 241 });
    assert_exact(&s);
}

#[test]
fn test_method_strings() {
    assert_eq!(solve_u64(5, DEFAULT_MAX_SHIFT).method.to_string(), "residue search shift=0");
    assert_eq!(solve_u64(7, 0).method.to_string(), "modular identity n≡3 mod 4");
    assert_eq!(solve_u64(8, 0).method.to_string(), "no rational residue found");
    assert_eq!(solve_u64(193, DEFAULT_MAX_SHIFT).method.to_string(), "no matching identity");
}

#[test]
fn test_csv_row_layout() {
    assert_eq!(solve_u64(5, DEFAULT_MAX_SHIFT).csv_row(), "5,2,4,20,T1,residue search shift=0,success");
    assert_eq!(solve_u64(6, 0).csv_row(), "6,,,,T5,no rational residue found,failure");
}
