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

//! Resolver configuration
//!
//! [`ResolverConfig`] is everything the document builder needs; it is plain
//! data so the resolver never reads process state itself. [`EnvSettings`]
//! is the outer layer that reads the build-exported environment variables.

use crate::caps::error::Error;
use crate::caps::probe::DEFAULT_PROBE_TIMEOUT;
use crate::caps::types::{LATEST, SdkSpec};
use std::path::PathBuf;
use std::time::Duration;
use typed_builder::TypedBuilder;

pub const ENV_SDK: &str = "S3_SDK";
pub const ENV_SDK_VERSION: &str = "S3_SDK_VERSION";
pub const ENV_CAP_PROFILE_OVERRIDE: &str = "S3_CAP_PROFILE_OVERRIDE";
pub const ENV_CAP_PROFILE_JSON: &str = "S3_CAP_PROFILE_JSON";
pub const ENV_ENDPOINT_HINT: &str = "S3_ENDPOINT_HINT";
/// Read by the test-fixture loader only
pub const ENV_CAPS_JSON_PATH: &str = "S3_CAPS_JSON_PATH";

/// Inputs of one capability resolution
#[derive(Clone, Debug, TypedBuilder)]
pub struct ResolverConfig {
    #[builder(!default)]
    pub spec: SdkSpec,
    /// Passed through to the probe runner
    #[builder(default, setter(into))]
    pub endpoint_hint: Option<String>,
    #[builder(default, setter(into))]
    pub override_path: Option<PathBuf>,
    /// Overrides are only read when this is set
    #[builder(default)]
    pub force_override: bool,
    #[builder(default = DEFAULT_PROBE_TIMEOUT)]
    pub probe_timeout: Duration,
    /// Reject override keys that name no capability instead of ignoring them
    #[builder(default)]
    pub strict_overrides: bool,
}

/// Settings exported by the build through environment variables
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvSettings {
    pub spec: SdkSpec,
    /// `S3_CAP_PROFILE_OVERRIDE` is `1`, `true` or `TRUE`
    pub use_override: bool,
    pub override_json: Option<PathBuf>,
    pub endpoint_hint: Option<String>,
}

impl EnvSettings {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; values are trimmed and empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let name = get(ENV_SDK).ok_or(Error::MissingSdk)?;
        log::debug!("{ENV_SDK}={name}");
        let version = get(ENV_SDK_VERSION).unwrap_or_else(|| LATEST.to_string());
        log::debug!("{ENV_SDK_VERSION}={version}");
        let use_override = matches!(
            get(ENV_CAP_PROFILE_OVERRIDE).as_deref(),
            Some("1" | "true" | "TRUE")
        );
        log::debug!("{ENV_CAP_PROFILE_OVERRIDE}={use_override}");
        let override_json = get(ENV_CAP_PROFILE_JSON).map(PathBuf::from);
        log::debug!("{ENV_CAP_PROFILE_JSON}={override_json:?}");
        let endpoint_hint = get(ENV_ENDPOINT_HINT);
        log::debug!("{ENV_ENDPOINT_HINT}={endpoint_hint:?}");

        Ok(Self {
            spec: SdkSpec::new(name, version),
            use_override,
            override_json,
            endpoint_hint,
        })
    }
}
