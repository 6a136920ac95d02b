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

//! Capability data model
//!
//! The capability set is closed: [`CapabilityProfile`], [`CapabilityPatch`]
//! and [`CapabilityName`] each list the same nine fields, and every
//! conversion between them is written out field by field. Adding a
//! capability means touching all three plus the mapping table.

use crate::caps::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Version string meaning "no version pin".
pub const LATEST: &str = "latest";

/// Identifies the SDK under test and its version.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SdkSpec {
    /// Canonical SDK name, e.g. `boto3` or `aws-sdk-go-v2`
    pub name: String,
    /// Version string, e.g. `1.30.0`, or `latest`
    pub version: String,
}

impl SdkSpec {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn is_latest(&self) -> bool {
        self.version == LATEST
    }
}

impl fmt::Display for SdkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// Client retry policy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryMode {
    #[default]
    Standard,
    Adaptive,
    Legacy,
}

impl RetryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RetryMode::Standard => "standard",
            RetryMode::Adaptive => "adaptive",
            RetryMode::Legacy => "legacy",
        }
    }
}

impl FromStr for RetryMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(RetryMode::Standard),
            "adaptive" => Ok(RetryMode::Adaptive),
            "legacy" => Ok(RetryMode::Legacy),
            _ => Err(Error::InvalidRetryMode(s.to_string())),
        }
    }
}

impl fmt::Display for RetryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observable SDK behaviors that tests branch their expectations on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapabilityProfile {
    /// Uploads may use `aws-chunked` SigV4 streaming
    pub sigv4_chunked: bool,
    /// `UNSIGNED-PAYLOAD` is allowed on PUT/POST
    pub unsigned_payload_allowed: bool,
    pub virtual_hosted_default: bool,
    pub list_objects_v1: bool,
    /// Listing treats `+` in a prefix as a space
    pub list_objects_url_plus_treated_as_space: bool,
    pub retry_mode: RetryMode,
    pub follows_301_region_redirect: bool,
    /// Client replays the request body on 307/308
    pub follows_307_on_put: bool,
    pub crc32c_default: bool,
}

impl Default for CapabilityProfile {
    fn default() -> Self {
        Self {
            sigv4_chunked: false,
            unsigned_payload_allowed: true,
            virtual_hosted_default: true,
            list_objects_v1: false,
            list_objects_url_plus_treated_as_space: false,
            retry_mode: RetryMode::Standard,
            follows_301_region_redirect: true,
            follows_307_on_put: true,
            crc32c_default: false,
        }
    }
}

impl CapabilityProfile {
    /// Overwrites every field present in `patch`. Returns true if at least
    /// one field was present.
    pub fn apply(&mut self, patch: &CapabilityPatch) -> bool {
        let mut applied = false;
        if let Some(v) = patch.sigv4_chunked {
            self.sigv4_chunked = v;
            applied = true;
        }
        if let Some(v) = patch.unsigned_payload_allowed {
            self.unsigned_payload_allowed = v;
            applied = true;
        }
        if let Some(v) = patch.virtual_hosted_default {
            self.virtual_hosted_default = v;
            applied = true;
        }
        if let Some(v) = patch.list_objects_v1 {
            self.list_objects_v1 = v;
            applied = true;
        }
        if let Some(v) = patch.list_objects_url_plus_treated_as_space {
            self.list_objects_url_plus_treated_as_space = v;
            applied = true;
        }
        if let Some(v) = patch.retry_mode {
            self.retry_mode = v;
            applied = true;
        }
        if let Some(v) = patch.follows_301_region_redirect {
            self.follows_301_region_redirect = v;
            applied = true;
        }
        if let Some(v) = patch.follows_307_on_put {
            self.follows_307_on_put = v;
            applied = true;
        }
        if let Some(v) = patch.crc32c_default {
            self.crc32c_default = v;
            applied = true;
        }
        applied
    }

    pub fn get(&self, name: CapabilityName) -> CapabilityValue {
        use CapabilityValue::Bool;
        match name {
            CapabilityName::Sigv4Chunked => Bool(self.sigv4_chunked),
            CapabilityName::UnsignedPayloadAllowed => Bool(self.unsigned_payload_allowed),
            CapabilityName::VirtualHostedDefault => Bool(self.virtual_hosted_default),
            CapabilityName::ListObjectsV1 => Bool(self.list_objects_v1),
            CapabilityName::ListObjectsUrlPlusTreatedAsSpace => {
                Bool(self.list_objects_url_plus_treated_as_space)
            }
            CapabilityName::RetryMode => CapabilityValue::RetryMode(self.retry_mode),
            CapabilityName::Follows301RegionRedirect => Bool(self.follows_301_region_redirect),
            CapabilityName::Follows307OnPut => Bool(self.follows_307_on_put),
            CapabilityName::Crc32cDefault => Bool(self.crc32c_default),
        }
    }
}

/// Tri-state overlay of a [`CapabilityProfile`]: `None` means unknown or
/// not specified, and only `Some` fields take part in a merge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CapabilityPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigv4_chunked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsigned_payload_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_hosted_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_objects_v1: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_objects_url_plus_treated_as_space: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_mode: Option<RetryMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follows_301_region_redirect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follows_307_on_put: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crc32c_default: Option<bool>,
}

/// Observations from runtime probes; every field may be unknown.
pub type ProbeResult = CapabilityPatch;

impl CapabilityPatch {
    pub fn is_empty(&self) -> bool {
        self.present().is_empty()
    }

    /// Names of the fields that carry a value, in schema order.
    pub fn present(&self) -> Vec<CapabilityName> {
        CapabilityName::ALL
            .iter()
            .copied()
            .filter(|name| self.get(*name).is_some())
            .collect()
    }

    pub fn get(&self, name: CapabilityName) -> Option<CapabilityValue> {
        use CapabilityValue::Bool;
        match name {
            CapabilityName::Sigv4Chunked => self.sigv4_chunked.map(Bool),
            CapabilityName::UnsignedPayloadAllowed => self.unsigned_payload_allowed.map(Bool),
            CapabilityName::VirtualHostedDefault => self.virtual_hosted_default.map(Bool),
            CapabilityName::ListObjectsV1 => self.list_objects_v1.map(Bool),
            CapabilityName::ListObjectsUrlPlusTreatedAsSpace => {
                self.list_objects_url_plus_treated_as_space.map(Bool)
            }
            CapabilityName::RetryMode => self.retry_mode.map(CapabilityValue::RetryMode),
            CapabilityName::Follows301RegionRedirect => self.follows_301_region_redirect.map(Bool),
            CapabilityName::Follows307OnPut => self.follows_307_on_put.map(Bool),
            CapabilityName::Crc32cDefault => self.crc32c_default.map(Bool),
        }
    }

    /// Sets one field from an untyped JSON value. `null` clears the field.
    pub fn set_json(
        &mut self,
        name: CapabilityName,
        value: &serde_json::Value,
    ) -> Result<(), Error> {
        if value.is_null() {
            self.clear(name);
            return Ok(());
        }
        let slot = match name {
            CapabilityName::RetryMode => {
                let mode = value
                    .as_str()
                    .ok_or_else(|| invalid_value(name, "a retry mode string"))?
                    .parse::<RetryMode>()
                    .map_err(|_| invalid_value(name, "one of standard, adaptive, legacy"))?;
                self.retry_mode = Some(mode);
                return Ok(());
            }
            CapabilityName::Sigv4Chunked => &mut self.sigv4_chunked,
            CapabilityName::UnsignedPayloadAllowed => &mut self.unsigned_payload_allowed,
            CapabilityName::VirtualHostedDefault => &mut self.virtual_hosted_default,
            CapabilityName::ListObjectsV1 => &mut self.list_objects_v1,
            CapabilityName::ListObjectsUrlPlusTreatedAsSpace => {
                &mut self.list_objects_url_plus_treated_as_space
            }
            CapabilityName::Follows301RegionRedirect => &mut self.follows_301_region_redirect,
            CapabilityName::Follows307OnPut => &mut self.follows_307_on_put,
            CapabilityName::Crc32cDefault => &mut self.crc32c_default,
        };
        let flag = value
            .as_bool()
            .ok_or_else(|| invalid_value(name, "a boolean"))?;
        *slot = Some(flag);
        Ok(())
    }

    fn clear(&mut self, name: CapabilityName) {
        match name {
            CapabilityName::Sigv4Chunked => self.sigv4_chunked = None,
            CapabilityName::UnsignedPayloadAllowed => self.unsigned_payload_allowed = None,
            CapabilityName::VirtualHostedDefault => self.virtual_hosted_default = None,
            CapabilityName::ListObjectsV1 => self.list_objects_v1 = None,
            CapabilityName::ListObjectsUrlPlusTreatedAsSpace => {
                self.list_objects_url_plus_treated_as_space = None
            }
            CapabilityName::RetryMode => self.retry_mode = None,
            CapabilityName::Follows301RegionRedirect => self.follows_301_region_redirect = None,
            CapabilityName::Follows307OnPut => self.follows_307_on_put = None,
            CapabilityName::Crc32cDefault => self.crc32c_default = None,
        }
    }
}

impl From<CapabilityProfile> for CapabilityPatch {
    fn from(p: CapabilityProfile) -> Self {
        Self {
            sigv4_chunked: Some(p.sigv4_chunked),
            unsigned_payload_allowed: Some(p.unsigned_payload_allowed),
            virtual_hosted_default: Some(p.virtual_hosted_default),
            list_objects_v1: Some(p.list_objects_v1),
            list_objects_url_plus_treated_as_space: Some(p.list_objects_url_plus_treated_as_space),
            retry_mode: Some(p.retry_mode),
            follows_301_region_redirect: Some(p.follows_301_region_redirect),
            follows_307_on_put: Some(p.follows_307_on_put),
            crc32c_default: Some(p.crc32c_default),
        }
    }
}

fn invalid_value(name: CapabilityName, expected: &'static str) -> Error {
    Error::InvalidOverrideValue {
        key: name.as_str().to_string(),
        expected,
    }
}

/// Names of the capability flags
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CapabilityName {
    Sigv4Chunked,
    UnsignedPayloadAllowed,
    VirtualHostedDefault,
    ListObjectsV1,
    ListObjectsUrlPlusTreatedAsSpace,
    RetryMode,
    Follows301RegionRedirect,
    Follows307OnPut,
    Crc32cDefault,
}

impl CapabilityName {
    pub const ALL: [CapabilityName; 9] = [
        CapabilityName::Sigv4Chunked,
        CapabilityName::UnsignedPayloadAllowed,
        CapabilityName::VirtualHostedDefault,
        CapabilityName::ListObjectsV1,
        CapabilityName::ListObjectsUrlPlusTreatedAsSpace,
        CapabilityName::RetryMode,
        CapabilityName::Follows301RegionRedirect,
        CapabilityName::Follows307OnPut,
        CapabilityName::Crc32cDefault,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityName::Sigv4Chunked => "sigv4_chunked",
            CapabilityName::UnsignedPayloadAllowed => "unsigned_payload_allowed",
            CapabilityName::VirtualHostedDefault => "virtual_hosted_default",
            CapabilityName::ListObjectsV1 => "list_objects_v1",
            CapabilityName::ListObjectsUrlPlusTreatedAsSpace => {
                "list_objects_url_plus_treated_as_space"
            }
            CapabilityName::RetryMode => "retry_mode",
            CapabilityName::Follows301RegionRedirect => "follows_301_region_redirect",
            CapabilityName::Follows307OnPut => "follows_307_on_put",
            CapabilityName::Crc32cDefault => "crc32c_default",
        }
    }
}

impl FromStr for CapabilityName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CapabilityName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| Error::UnknownCapability(s.to_string()))
    }
}

impl fmt::Display for CapabilityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a single capability
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapabilityValue {
    Bool(bool),
    RetryMode(RetryMode),
}

impl CapabilityValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CapabilityValue::Bool(b) => Some(*b),
            CapabilityValue::RetryMode(_) => None,
        }
    }

    pub fn as_retry_mode(&self) -> Option<RetryMode> {
        match self {
            CapabilityValue::RetryMode(m) => Some(*m),
            CapabilityValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for CapabilityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilityValue::Bool(b) => write!(f, "{b}"),
            CapabilityValue::RetryMode(m) => write!(f, "{m}"),
        }
    }
}

/// Resolution layer that contributed to a profile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "mapping")]
    Mapping,
    #[serde(rename = "probes")]
    Probes,
    #[serde(rename = "override")]
    Override,
    /// Resolution failed and the default profile was substituted
    #[serde(rename = "error-fallback")]
    ErrorFallback,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Mapping => "mapping",
            Source::Probes => "probes",
            Source::Override => "override",
            Source::ErrorFallback => "error-fallback",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved capabilities as written to `caps.json` and read by test fixtures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapabilityDocument {
    pub sdk: String,
    pub version: String,
    pub profile: CapabilityProfile,
    pub sources: Vec<Source>,
}

impl CapabilityDocument {
    /// Default profile marked as an error fallback.
    pub fn fallback(spec: &SdkSpec) -> Self {
        Self {
            sdk: spec.name.clone(),
            version: spec.version.clone(),
            profile: CapabilityProfile::default(),
            sources: vec![Source::ErrorFallback],
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.sources.contains(&Source::ErrorFallback)
    }

    /// True if the boolean flag is set. `retry_mode` is not a flag and is
    /// always false here; read it with [`Self::get_capability`].
    pub fn has_capability(&self, name: CapabilityName) -> bool {
        self.profile.get(name).as_bool().unwrap_or(false)
    }

    /// Looks a capability up by its JSON name.
    pub fn get_capability(&self, name: &str) -> Option<CapabilityValue> {
        let name = name.parse::<CapabilityName>().ok()?;
        Some(self.profile.get(name))
    }

    /// Pretty JSON with alphabetically sorted keys and two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, Error> {
        // serde_json::Map is a BTreeMap here, which gives the sorted key order
        let value = serde_json::to_value(self).map_err(Error::Encode)?;
        serde_json::to_string_pretty(&value).map_err(Error::Encode)
    }
}
