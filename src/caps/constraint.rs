// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Version constraint matching
//!
//! A constraint is a comma separated AND-list of clauses such as
//! `">= 1.25.0, < 2.0.0"`. Supported operators are `>=`, `>`, `<=`, `<`,
//! `==` and a bare version meaning equality. There is no OR.

use crate::caps::version::{Triplet, compare_versions, parse_triplet};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Bound;

/// Relational operator of a single clause
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Ge,
    Gt,
    Le,
    Lt,
    Eq,
}

impl Op {
    fn holds(self, ord: Ordering) -> bool {
        match self {
            Op::Ge => ord != Ordering::Less,
            Op::Gt => ord == Ordering::Greater,
            Op::Le => ord != Ordering::Greater,
            Op::Lt => ord == Ordering::Less,
            Op::Eq => ord == Ordering::Equal,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Ge => write!(f, ">="),
            Op::Gt => write!(f, ">"),
            Op::Le => write!(f, "<="),
            Op::Lt => write!(f, "<"),
            Op::Eq => write!(f, "=="),
        }
    }
}

/// One relational comparison against a version
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    pub op: Op,
    pub version: String,
}

impl Clause {
    /// Parses a trimmed, non-empty clause. Two-character operators are
    /// checked before their one-character prefixes.
    pub fn parse(clause: &str) -> Clause {
        let (op, rest) = if let Some(rest) = clause.strip_prefix(">=") {
            (Op::Ge, rest)
        } else if let Some(rest) = clause.strip_prefix("<=") {
            (Op::Le, rest)
        } else if let Some(rest) = clause.strip_prefix('>') {
            (Op::Gt, rest)
        } else if let Some(rest) = clause.strip_prefix('<') {
            (Op::Lt, rest)
        } else if let Some(rest) = clause.strip_prefix("==") {
            (Op::Eq, rest)
        } else {
            (Op::Eq, clause)
        };
        Clause {
            op,
            version: rest.trim().to_string(),
        }
    }

    pub fn matches(&self, version: &str) -> bool {
        self.op.holds(compare_versions(version, &self.version))
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.op, self.version)
    }
}

/// Parsed AND-list of clauses; an empty list matches every version.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Constraint {
    clauses: Vec<Clause>,
}

impl Constraint {
    pub fn parse(constraint: &str) -> Constraint {
        let clauses = constraint
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(Clause::parse)
            .collect();
        Constraint { clauses }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns true iff every clause holds for `version`. An empty version is
    /// compared as `0.0.0`.
    pub fn matches(&self, version: &str) -> bool {
        let version = if version.is_empty() { "0.0.0" } else { version };
        self.clauses.iter().all(|c| c.matches(version))
    }

    /// Interval of triplets admitted by this constraint.
    pub fn band(&self) -> VersionBand {
        let mut band = VersionBand::unbounded();
        for clause in &self.clauses {
            let v = parse_triplet(&clause.version);
            match clause.op {
                Op::Ge => band.raise_lower(Bound::Included(v)),
                Op::Gt => band.raise_lower(Bound::Excluded(v)),
                Op::Le => band.lower_upper(Bound::Included(v)),
                Op::Lt => band.lower_upper(Bound::Excluded(v)),
                Op::Eq => {
                    band.raise_lower(Bound::Included(v));
                    band.lower_upper(Bound::Included(v));
                }
            }
        }
        band
    }
}

impl From<&str> for Constraint {
    fn from(value: &str) -> Self {
        Constraint::parse(value)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}

/// Checks `version` against a constraint string such as `">= 1.25.0, < 2.0.0"`.
pub fn match_constraint(version: &str, constraint: &str) -> bool {
    Constraint::parse(constraint).matches(version)
}

/// Range of version triplets a constraint admits.
///
/// Bands are treated as continuous, so two exclusive bounds on adjacent
/// patch versions still count as overlapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionBand {
    pub lower: Bound<Triplet>,
    pub upper: Bound<Triplet>,
}

impl VersionBand {
    pub fn unbounded() -> VersionBand {
        VersionBand {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
        }
    }

    fn raise_lower(&mut self, bound: Bound<Triplet>) {
        if tighter_lower(&bound, &self.lower) {
            self.lower = bound;
        }
    }

    fn lower_upper(&mut self, bound: Bound<Triplet>) {
        if tighter_upper(&bound, &self.upper) {
            self.upper = bound;
        }
    }

    pub fn is_empty(&self) -> bool {
        match (&self.lower, &self.upper) {
            (Bound::Included(lo), Bound::Included(hi)) => lo > hi,
            (Bound::Included(lo), Bound::Excluded(hi))
            | (Bound::Excluded(lo), Bound::Included(hi))
            | (Bound::Excluded(lo), Bound::Excluded(hi)) => lo >= hi,
            _ => false,
        }
    }

    pub fn overlaps(&self, other: &VersionBand) -> bool {
        let mut both = self.clone();
        both.raise_lower(other.lower);
        both.lower_upper(other.upper);
        !both.is_empty()
    }
}

fn tighter_lower(candidate: &Bound<Triplet>, current: &Bound<Triplet>) -> bool {
    match (candidate, current) {
        (Bound::Unbounded, _) => false,
        (_, Bound::Unbounded) => true,
        (Bound::Included(a), Bound::Included(b)) | (Bound::Excluded(a), Bound::Excluded(b)) => {
            a > b
        }
        (Bound::Excluded(a), Bound::Included(b)) => a >= b,
        (Bound::Included(a), Bound::Excluded(b)) => a > b,
    }
}

fn tighter_upper(candidate: &Bound<Triplet>, current: &Bound<Triplet>) -> bool {
    match (candidate, current) {
        (Bound::Unbounded, _) => false,
        (_, Bound::Unbounded) => true,
        (Bound::Included(a), Bound::Included(b)) | (Bound::Excluded(a), Bound::Excluded(b)) => {
            a < b
        }
        (Bound::Excluded(a), Bound::Included(b)) => a <= b,
        (Bound::Included(a), Bound::Excluded(b)) => a < b,
    }
}
