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

//! Static mapping of SDK version bands to capability profiles

use crate::caps::constraint::Constraint;
use crate::caps::error::Error;
use crate::caps::types::{CapabilityProfile, RetryMode, SdkSpec};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One version band of one SDK and the profile observed for it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingEntry {
    pub sdk: String,
    /// e.g. `">= 1.25.0, < 2.0.0"`; empty matches every version
    #[serde(default)]
    pub version_constraint: String,
    pub profile: CapabilityProfile,
    #[serde(default)]
    pub rationale: String,
}

impl MappingEntry {
    pub fn constraint(&self) -> Constraint {
        Constraint::parse(&self.version_constraint)
    }

    /// Name must be equal; `latest` and an empty constraint match any band.
    pub fn matches(&self, spec: &SdkSpec) -> bool {
        if self.sdk != spec.name {
            return false;
        }
        let constraint = self.constraint();
        spec.is_latest() || constraint.is_empty() || constraint.matches(&spec.version)
    }
}

/// Ordered, first-match-wins list of [`MappingEntry`].
///
/// Entries must be listed most-specific first. The table does not reorder
/// them; overlapping bands for the same SDK are reported by
/// [`MappingTable::overlapping_entries`] and logged on construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
}

impl MappingTable {
    pub fn new(entries: Vec<MappingEntry>) -> Self {
        let table = Self { entries };
        for (first, later) in table.overlapping_entries() {
            let a = &table.entries[first];
            let b = &table.entries[later];
            log::warn!(
                "mapping entries #{first} ('{}') and #{later} ('{}') for {} overlap; #{later} is shadowed where both match",
                a.version_constraint,
                b.version_constraint,
                a.sdk
            );
        }
        table
    }

    /// The shipped table.
    pub fn builtin() -> Self {
        Self::new(vec![
            MappingEntry {
                sdk: "aws-sdk-go-v2".to_string(),
                version_constraint: ">= 1.25.0, < 2.0.0".to_string(),
                profile: CapabilityProfile {
                    sigv4_chunked: true,
                    unsigned_payload_allowed: true,
                    virtual_hosted_default: true,
                    list_objects_v1: false,
                    list_objects_url_plus_treated_as_space: false,
                    retry_mode: RetryMode::Standard,
                    follows_301_region_redirect: true,
                    follows_307_on_put: true,
                    crc32c_default: false,
                },
                rationale: "Post-1.25 behavior stabilizations; ListObjectsV2 default, standard retries."
                    .to_string(),
            },
            MappingEntry {
                sdk: "boto3".to_string(),
                version_constraint: ">= 1.26.0, < 2.0.0".to_string(),
                profile: CapabilityProfile {
                    sigv4_chunked: true,
                    unsigned_payload_allowed: true,
                    virtual_hosted_default: true,
                    list_objects_v1: false,
                    list_objects_url_plus_treated_as_space: false,
                    retry_mode: RetryMode::Standard,
                    follows_301_region_redirect: true,
                    follows_307_on_put: true,
                    crc32c_default: false,
                },
                rationale: "Modern botocore defaults; V2 listing; standard retry policy.".to_string(),
            },
        ])
    }

    /// Parses a JSON array of entries. Every profile must list all fields.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let entries: Vec<MappingEntry> =
            serde_json::from_str(json).map_err(|e| Error::InvalidMappingTable(e.to_string()))?;
        if let Some(pos) = entries.iter().position(|e| e.sdk.trim().is_empty()) {
            return Err(Error::InvalidMappingTable(format!(
                "entry #{pos} has an empty sdk name"
            )));
        }
        Ok(Self::new(entries))
    }

    pub fn from_json_path(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&text)
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn lookup_entry(&self, spec: &SdkSpec) -> Option<&MappingEntry> {
        self.entries.iter().find(|e| e.matches(spec))
    }

    /// Profile of the first matching entry, or the default profile.
    pub fn lookup(&self, spec: &SdkSpec) -> CapabilityProfile {
        match self.lookup_entry(spec) {
            Some(entry) => {
                log::debug!(
                    "{spec} matched mapping band '{}': {}",
                    entry.version_constraint,
                    entry.rationale
                );
                entry.profile.clone()
            }
            None => {
                log::debug!("{spec} matched no mapping entry; using default profile");
                CapabilityProfile::default()
            }
        }
    }

    /// Index pairs `(i, j)`, `i < j`, of same-SDK entries whose bands overlap.
    pub fn overlapping_entries(&self) -> Vec<(usize, usize)> {
        let bands: Vec<_> = self.entries.iter().map(|e| e.constraint().band()).collect();
        let mut pairs = Vec::new();
        for i in 0..self.entries.len() {
            for j in (i + 1)..self.entries.len() {
                if self.entries[i].sdk == self.entries[j].sdk && bands[i].overlaps(&bands[j]) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caps::types::LATEST;

    fn entry(sdk: &str, constraint: &str, crc32c: bool) -> MappingEntry {
        MappingEntry {
            sdk: sdk.to_string(),
            version_constraint: constraint.to_string(),
            profile: CapabilityProfile {
                crc32c_default: crc32c,
                ..Default::default()
            },
            rationale: String::new(),
        }
    }

    #[test]
    fn test_go_v2_modern_band() {
        let p = MappingTable::builtin().lookup(&SdkSpec::new("aws-sdk-go-v2", "1.30.0"));
        assert!(p.sigv4_chunked);
        assert!(!p.list_objects_v1);
        assert_eq!(p.retry_mode, RetryMode::Standard);
    }

    #[test]
    fn test_unknown_sdk_gets_defaults() {
        let table = MappingTable::builtin();
        let spec = SdkSpec::new("unknown-sdk", "9.9.9");
        assert!(table.lookup_entry(&spec).is_none());
        assert_eq!(table.lookup(&spec), CapabilityProfile::default());
    }

    #[test]
    fn test_version_outside_band_gets_defaults() {
        let table = MappingTable::builtin();
        let spec = SdkSpec::new("boto3", "1.25.9");
        assert!(table.lookup_entry(&spec).is_none());
        assert_eq!(table.lookup(&spec), CapabilityProfile::default());
    }

    #[test]
    fn test_latest_takes_first_entry_for_sdk() {
        let table = MappingTable::new(vec![
            entry("boto3", ">= 5.0.0", true),
            entry("boto3", "", false),
        ]);
        let selected = table.lookup_entry(&SdkSpec::new("boto3", LATEST)).unwrap();
        assert_eq!(selected.version_constraint, ">= 5.0.0");
        assert!(table.lookup(&SdkSpec::new("boto3", LATEST)).crc32c_default);

        let builtin = MappingTable::builtin();
        let selected = builtin
            .lookup_entry(&SdkSpec::new("boto3", LATEST))
            .unwrap();
        assert_eq!(selected.sdk, "boto3");
    }

    #[test]
    fn test_first_match_wins() {
        let table = MappingTable::new(vec![
            entry("rust", ">= 1.0.0, < 2.0.0", false),
            entry("rust", ">= 1.5.0, < 1.6.0", true),
        ]);
        assert!(!table.lookup(&SdkSpec::new("rust", "1.5.3")).crc32c_default);
        assert_eq!(table.overlapping_entries(), vec![(0, 1)]);
    }

    #[test]
    fn test_empty_constraint_is_catch_all() {
        let table = MappingTable::new(vec![
            entry("rust", "< 1.0.0", false),
            entry("rust", "", true),
        ]);
        assert!(table.lookup(&SdkSpec::new("rust", "3.1.4")).crc32c_default);
        assert!(!table.lookup(&SdkSpec::new("rust", "0.9")).crc32c_default);
    }

    #[test]
    fn test_builtin_has_no_overlaps() {
        assert!(MappingTable::builtin().overlapping_entries().is_empty());
    }

    #[test]
    fn test_overlap_ignores_other_sdks() {
        let table = MappingTable::new(vec![
            entry("boto3", ">= 1.0.0", false),
            entry("rust", ">= 1.0.0", false),
            entry("boto3", "< 1.0.0", false),
        ]);
        assert!(table.overlapping_entries().is_empty());
    }

    #[test]
    fn test_from_json_str() {
        let profile = serde_json::to_value(CapabilityProfile::default()).unwrap();
        let json = serde_json::json!([
            {"sdk": "dotnet", "version_constraint": ">= 3.7", "profile": profile, "rationale": "x"},
            {"sdk": "dotnet", "profile": profile}
        ])
        .to_string();
        let table = MappingTable::from_json_str(&json).unwrap();
        assert_eq!(table.entries().len(), 2);
        assert_eq!(table.entries()[1].version_constraint, "");
        assert_eq!(table.overlapping_entries(), vec![(0, 1)]);
    }

    #[test]
    fn test_from_json_str_rejects_bad_tables() {
        assert!(matches!(
            MappingTable::from_json_str("{}"),
            Err(Error::InvalidMappingTable(_))
        ));
        let partial = r#"[{"sdk": "boto3", "profile": {"sigv4_chunked": true}}]"#;
        assert!(MappingTable::from_json_str(partial).is_err());
        let profile = serde_json::to_value(CapabilityProfile::default()).unwrap();
        let unnamed = serde_json::json!([{"sdk": " ", "profile": profile}]).to_string();
        assert!(matches!(
            MappingTable::from_json_str(&unnamed),
            Err(Error::InvalidMappingTable(_))
        ));
    }
}
