//! Erdős–Straus 予想 4/n = 1/x + 1/y + 1/z の構成的解探索
//!
//! n ≥ 2 に対し、厳密有理数による貪欲残差探索（shift 付き）で x <= y <= z を求め、
//! 探索が尽きた場合は剰余恒等式で補う。どの戦略で解けたかを tier として記録する。
//!
//! | tier | 戦略 |
//! |------|------|
//! | T1   | 探索 shift = 0 |
//! | T3   | 探索 shift > 0 |
//! | T4   | 剰余恒等式 (n ≡ 3 mod 4 / n 奇数) |
//! | T5   | 失敗 |

pub mod classify;
pub mod error;
pub mod exact;
pub mod identity;
pub mod search;
pub mod solution;
pub mod solver;
pub mod sweep;
pub mod verify;

pub use classify::{classify, ClassStats, ResidueClass};
pub use error::{RecordError, SolveError, SweepError};
pub use solution::{Identity, Method, Solution, Status, Tier, Triple, CSV_HEADER};
pub use solver::{solve, solve_u64, DEFAULT_MAX_SHIFT};
pub use sweep::{records, sweep_range, SweepConfig, SweepResult, TierCounts};
pub use verify::check_solution;
