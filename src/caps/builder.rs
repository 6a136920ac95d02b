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

//! Capability document assembly

use crate::caps::config::ResolverConfig;
use crate::caps::error::Error;
use crate::caps::mapping::MappingTable;
use crate::caps::merge::merge_capabilities;
use crate::caps::overrides::{Overrides, load_overrides};
use crate::caps::probe::{NoopProbeRunner, ProbeRunner, run_with_deadline};
use crate::caps::types::{CapabilityDocument, Source};
use std::sync::Arc;

/// Resolves one [`CapabilityDocument`]: mapping lookup, probes, optional
/// overrides, merge.
#[derive(Clone)]
pub struct CapabilityDocumentBuilder {
    config: ResolverConfig,
    mapping: MappingTable,
    probe_runner: Arc<dyn ProbeRunner>,
}

impl CapabilityDocumentBuilder {
    /// Uses the built-in mapping table and a probe runner that observes nothing.
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            mapping: MappingTable::builtin(),
            probe_runner: Arc::new(NoopProbeRunner),
        }
    }

    pub fn mapping(mut self, mapping: MappingTable) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn probe_runner(mut self, runner: Arc<dyn ProbeRunner>) -> Self {
        self.probe_runner = runner;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Fails only on override problems: a missing or malformed override file,
    /// or an unknown key when `strict_overrides` is set.
    pub async fn build(&self) -> Result<CapabilityDocument, Error> {
        let config = &self.config;
        let spec = &config.spec;

        let base = self.mapping.lookup(spec);
        let probe = run_with_deadline(
            self.probe_runner.as_ref(),
            spec,
            config.endpoint_hint.as_deref(),
            config.probe_timeout,
        )
        .await;
        let overrides = if config.force_override {
            load_overrides(config.override_path.as_deref())?
        } else {
            Overrides::default()
        };
        if config.strict_overrides {
            overrides.reject_unknown()?;
        }

        let merged = merge_capabilities(&base, &probe, &overrides);
        log::info!(
            "resolved capabilities for {spec} from [{}]",
            merged
                .sources
                .iter()
                .map(Source::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(CapabilityDocument {
            sdk: spec.name.clone(),
            version: spec.version.clone(),
            profile: merged.profile,
            sources: merged.sources,
        })
    }
}
