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

//! Loose version parsing and ordering
//!
//! Versions are reduced to a `(major, minor, patch)` triplet taken from the
//! first numeric run in the string. Anything around that run (`v` prefixes,
//! `-rc1` suffixes, build metadata) is ignored, so `"1.30.0-rc1"` orders
//! equal to `"1.30.0"`. This is not SemVer: pre-releases are not ordered.

use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;

/// Comparable `(major, minor, patch)` triple
pub type Triplet = (u64, u64, u64);

lazy_static! {
    static ref VERSION_REGEX: Regex =
        Regex::new(r"([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?").unwrap();
}

/// Parses the first `N[.N[.N]]` run of ASCII digits in `v`; missing
/// components are zero and a string without ASCII digits yields `(0, 0, 0)`.
pub fn parse_triplet(v: &str) -> Triplet {
    let Some(caps) = VERSION_REGEX.captures(v) else {
        return (0, 0, 0);
    };
    let part = |i: usize| {
        caps.get(i)
            .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
            .unwrap_or(0)
    };
    (part(1), part(2), part(3))
}

/// Orders two version strings by their parsed triplets.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    parse_triplet(a).cmp(&parse_triplet(b))
}
