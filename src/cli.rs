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

//! Command line interface definition.

use clap::Parser;
use clap::builder::{OsStringValueParser, TypedValueParser};
use s3_caps::caps::config::{EnvSettings, ResolverConfig};
use s3_caps::caps::types::SdkSpec;
use std::path::PathBuf;
use std::time::Duration;

/// Resolve S3 SDK capability profile (mapping, then probes, then overrides).
///
/// The SDK identity and override settings are read from S3_SDK,
/// S3_SDK_VERSION, S3_CAP_PROFILE_OVERRIDE, S3_CAP_PROFILE_JSON and
/// S3_ENDPOINT_HINT; flags given here take precedence.
#[derive(Debug, Parser)]
#[command(name = "s3-caps")]
pub struct Cli {
    /// Write resulting JSON to this path. Omit to print to stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Override S3_SDK (e.g., 'aws-sdk-go-v2').
    #[arg(long)]
    pub sdk: Option<String>,

    /// Override S3_SDK_VERSION (e.g., '1.30.0', 'latest').
    #[arg(long)]
    pub version: Option<String>,

    /// Path to a JSON file with capability overrides; implies --force-override.
    /// An empty value counts as not given.
    #[arg(long, value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub override_json: Option<PathBuf>,

    /// Apply overrides even if S3_CAP_PROFILE_OVERRIDE is not set.
    #[arg(long)]
    pub force_override: bool,

    /// Endpoint target for probes (e.g., 'https://s3.us-east-1.amazonaws.com').
    #[arg(long)]
    pub endpoint_hint: Option<String>,

    /// JSON mapping table to use instead of the built-in one.
    #[arg(long)]
    pub mapping: Option<PathBuf>,

    /// Time budget for runtime probes, in seconds.
    #[arg(long, default_value = "10")]
    pub probe_timeout_secs: u64,

    /// Fail on override keys that name no capability.
    #[arg(long)]
    pub strict_overrides: bool,
}

impl Cli {
    /// Combines the flags with the environment; flags win.
    pub fn resolver_config(&self, env: EnvSettings) -> ResolverConfig {
        let non_empty = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let spec = SdkSpec::new(
            non_empty(&self.sdk).unwrap_or(env.spec.name),
            non_empty(&self.version).unwrap_or(env.spec.version),
        );

        let env_override_path = if env.use_override {
            env.override_json
        } else {
            None
        };
        let cli_override_path = self
            .override_json
            .clone()
            .filter(|p| !p.as_os_str().is_empty());
        let force_override = self.force_override || cli_override_path.is_some();
        let override_path = cli_override_path.or(env_override_path);
        let endpoint_hint = non_empty(&self.endpoint_hint).or(env.endpoint_hint);

        ResolverConfig::builder()
            .spec(spec)
            .endpoint_hint(endpoint_hint)
            .override_path(override_path)
            .force_override(force_override)
            .probe_timeout(Duration::from_secs(self.probe_timeout_secs))
            .strict_overrides(self.strict_overrides)
            .build()
    }
}
