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

//! Merging of mapping, probe and override layers
//!
//! Layers apply weakest first, each overwriting the fields it carries:
//! mapping profile, then known probe observations, then overrides.

use crate::caps::overrides::Overrides;
use crate::caps::types::{CapabilityProfile, ProbeResult, Source};

/// Merged profile and the layers that contributed to it, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeOutcome {
    pub profile: CapabilityProfile,
    pub sources: Vec<Source>,
}

/// Merges `base`, `probe` and `overrides`.
///
/// `sources` always starts with `mapping`; `probes` follows iff the probe
/// observed at least one field, and `override` iff the override set had any
/// key. Override keys outside the capability set are ignored.
pub fn merge_capabilities(
    base: &CapabilityProfile,
    probe: &ProbeResult,
    overrides: &Overrides,
) -> MergeOutcome {
    let mut profile = base.clone();
    let mut sources = vec![Source::Mapping];

    if profile.apply(probe) {
        sources.push(Source::Probes);
    }

    profile.apply(overrides.patch());
    for key in overrides.unknown().keys() {
        log::warn!("ignoring override for unknown capability '{key}'");
    }
    if !overrides.is_empty() {
        sources.push(Source::Override);
    }

    MergeOutcome { profile, sources }
}
