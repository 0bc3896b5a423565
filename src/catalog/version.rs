//! Version ordering and comparison operators.
//!
//! Versions in a catalog are loose: `"11"`, `"11.0"`, `"1.74.0"`, but also
//! literal tokens such as `"off"` or `"develop"`. Numeric releases are
//! ordered component-wise with implicit trailing zeros, so `"11" == "11.0"`
//! and `"1.8.0" < "1.74.0"`. A literal token is equal only to itself and
//! orders below every numeric release.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::MatrixError;

/// A parsed, totally ordered version.
///
/// # Examples
///
/// ```
/// use u_jobmatrix::catalog::VersionKey;
///
/// assert_eq!(VersionKey::parse("11"), VersionKey::parse("11.0"));
/// assert!(VersionKey::parse("10.2") < VersionKey::parse("11.0"));
/// assert!(VersionKey::parse("1.8.0") < VersionKey::parse("1.74.0"));
/// assert!(VersionKey::parse("develop") < VersionKey::parse("0.1"));
/// ```
#[derive(Debug, Clone)]
pub enum VersionKey {
    /// Non-numeric token, compared as a plain string.
    Literal(String),
    /// Dot-separated release numbers.
    Release(Vec<u64>),
}

impl VersionKey {
    /// Parses a version string. Never fails: anything that is not a dotted
    /// list of integers (optionally prefixed with `v`) becomes a literal.
    pub fn parse(version: &str) -> Self {
        let trimmed = version.trim();
        let digits = trimmed.strip_prefix('v').unwrap_or(trimmed);
        if digits.is_empty() {
            return VersionKey::Literal(trimmed.to_string());
        }

        let mut parts = Vec::new();
        for part in digits.split('.') {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return VersionKey::Literal(trimmed.to_string());
            }
            match part.parse::<u64>() {
                Ok(n) => parts.push(n),
                Err(_) => return VersionKey::Literal(trimmed.to_string()),
            }
        }
        VersionKey::Release(parts)
    }

    /// Whether this is a numeric release.
    pub fn is_release(&self) -> bool {
        matches!(self, VersionKey::Release(_))
    }
}

fn cmp_release(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

impl Ord for VersionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (VersionKey::Release(a), VersionKey::Release(b)) => cmp_release(a, b),
            (VersionKey::Literal(a), VersionKey::Literal(b)) => a.cmp(b),
            (VersionKey::Literal(_), VersionKey::Release(_)) => Ordering::Less,
            (VersionKey::Release(_), VersionKey::Literal(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for VersionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for VersionKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionKey {}

/// Comparison operator for versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    const EXPECTED: &'static str = "==, !=, <, <=, >, >=";

    /// Applies the operator to two ordered values.
    pub fn apply<T: Ord + ?Sized>(self, lhs: &T, rhs: &T) -> bool {
        match self {
            CmpOp::Eq => lhs == rhs,
            CmpOp::Ne => lhs != rhs,
            CmpOp::Lt => lhs < rhs,
            CmpOp::Le => lhs <= rhs,
            CmpOp::Gt => lhs > rhs,
            CmpOp::Ge => lhs >= rhs,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
        }
    }
}

impl FromStr for CmpOp {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(CmpOp::Eq),
            "!=" => Ok(CmpOp::Ne),
            "<" => Ok(CmpOp::Lt),
            "<=" => Ok(CmpOp::Le),
            ">" => Ok(CmpOp::Gt),
            ">=" => Ok(CmpOp::Ge),
            other => Err(MatrixError::InvalidOperator {
                op: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equality-only operator, used for names.
///
/// Names have no ordering, so `<` and friends are rejected when converting
/// from a [`CmpOp`] or parsing from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameOp {
    Eq,
    Ne,
}

impl NameOp {
    const EXPECTED: &'static str = "==, !=";

    pub fn apply(self, lhs: &str, rhs: &str) -> bool {
        match self {
            NameOp::Eq => lhs == rhs,
            NameOp::Ne => lhs != rhs,
        }
    }
}

impl FromStr for NameOp {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(NameOp::Eq),
            "!=" => Ok(NameOp::Ne),
            other => Err(MatrixError::InvalidOperator {
                op: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

impl TryFrom<CmpOp> for NameOp {
    type Error = MatrixError;

    fn try_from(op: CmpOp) -> Result<Self, Self::Error> {
        match op {
            CmpOp::Eq => Ok(NameOp::Eq),
            CmpOp::Ne => Ok(NameOp::Ne),
            other => Err(MatrixError::InvalidOperator {
                op: other.as_str().to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

/// Compares two version strings with release ordering.
pub fn compare_versions(lhs: &str, op: CmpOp, rhs: &str) -> bool {
    op.apply(&VersionKey::parse(lhs), &VersionKey::parse(rhs))
}
