use num_bigint::BigUint;
use std::fmt;

/// CSV の列順（固定）
pub const CSV_HEADER: &str = "n,x,y,z,tier,method,status";

/// どの戦略で解が得られたかの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// shift = 0 の標準探索
    T1,
    /// shift > 0 の探索
    T3,
    /// 剰余恒等式
    T4,
    /// 失敗
    T5,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::T1, Tier::T3, Tier::T4, Tier::T5];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::T1 => "T1",
            Tier::T3 => "T3",
            Tier::T4 => "T4",
            Tier::T5 => "T5",
        }
    }

    /// `Tier::ALL` 内の位置（集計配列の添字）
    pub fn index(self) -> usize {
        match self {
            Tier::T1 => 0,
            Tier::T3 => 1,
            Tier::T4 => 2,
            Tier::T5 => 3,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Failure => "failure",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 剰余恒等式の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    /// n ≡ 3 (mod 4): x = (n+1)/4, y = z = n(n+1)/2
    ThreeModFour,
    /// n 奇数: x = (n+1)/2, y = z = n(n+1)/2
    Odd,
}

/// 具体的な構成法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// 貪欲残差探索（x = ceil(n/4) + shift）
    Search { shift: u64 },
    /// 剰余恒等式
    Identity(Identity),
    /// どの shift でも正の残差が得られなかった
    NoResidue,
    /// 探索が尽き、恒等式も適用できなかった
    NoIdentity,
}

impl Method {
    /// 構成法から一意に決まる tier
    pub fn tier(self) -> Tier {
        match self {
            Method::Search { shift: 0 } => Tier::T1,
            Method::Search { .. } => Tier::T3,
            Method::Identity(_) => Tier::T4,
            Method::NoResidue | Method::NoIdentity => Tier::T5,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Search { shift } => write!(f, "residue search shift={}", shift),
            Method::Identity(Identity::ThreeModFour) => f.write_str("modular identity n≡3 mod 4"),
            Method::Identity(Identity::Odd) => f.write_str("modular identity n≡1 mod 2"),
            Method::NoResidue => f.write_str("no rational residue found"),
            Method::NoIdentity => f.write_str("no matching identity"),
        }
    }
}

/// x <= y <= z の三つ組。生成時に昇順へ並べ替える。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl Triple {
    pub fn sorted(a: BigUint, b: BigUint, c: BigUint) -> Self {
        let mut v = [a, b, c];
        v.sort();
        let [x, y, z] = v;
        Triple { x, y, z }
    }

    pub fn x(&self) -> &BigUint {
        &self.x
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }

    pub fn z(&self) -> &BigUint {
        &self.z
    }
}

/// 1つの n に対するソルバの結果。生成後は変更しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub n: BigUint,
    /// 失敗時は None
    pub triple: Option<Triple>,
    pub tier: Tier,
    pub method: Method,
    pub status: Status,
}

impl Solution {
    /// 検証済みの三つ組から成功レコードを作る
    pub(crate) fn found(n: BigUint, triple: Triple, method: Method) -> Self {
        Solution {
            n,
            triple: Some(triple),
            tier: method.tier(),
            method,
            status: Status::Success,
        }
    }

    pub(crate) fn failed(n: BigUint, method: Method) -> Self {
        Solution {
            n,
            triple: None,
            tier: Tier::T5,
            method,
            status: Status::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn x(&self) -> Option<&BigUint> {
        self.triple.as_ref().map(Triple::x)
    }

    pub fn y(&self) -> Option<&BigUint> {
        self.triple.as_ref().map(Triple::y)
    }

    pub fn z(&self) -> Option<&BigUint> {
        self.triple.as_ref().map(Triple::z)
    }

    /// `CSV_HEADER` の列順で1行を返す（改行なし）。失敗時の x, y, z は空欄。
    pub fn csv_row(&self) -> String {
        let field = |v: Option<&BigUint>| v.map(|v| v.to_string()).unwrap_or_default();
        format!(
            "{},{},{},{},{},{},{}",
            self.n,
            field(self.x()),
            field(self.y()),
            field(self.z()),
            self.tier,
            self.method,
            self.status
        )
    }
}
