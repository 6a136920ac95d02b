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

//! Runtime probe interface
//!
//! A probe runner observes capabilities empirically, e.g. by issuing a tiny
//! streaming PUT to see whether chunked signing is accepted. Anything it
//! cannot observe stays unknown. Probes never fail the resolution: an
//! expired deadline yields an all-unknown result.

use crate::caps::types::{ProbeResult, SdkSpec};
use async_trait::async_trait;
use std::time::Duration;

/// Default time budget for one probe run.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait ProbeRunner: Send + Sync {
    /// Observes what it can about `spec`; must not panic and must report
    /// unobservable flags as unknown rather than guessing.
    async fn run(&self, spec: &SdkSpec, endpoint_hint: Option<&str>) -> ProbeResult;
}

/// Probe runner that observes nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopProbeRunner;

#[async_trait]
impl ProbeRunner for NoopProbeRunner {
    async fn run(&self, _spec: &SdkSpec, _endpoint_hint: Option<&str>) -> ProbeResult {
        ProbeResult::default()
    }
}

/// Runs `runner` with a deadline. On expiry the partial work is dropped and
/// an all-unknown result is returned.
pub async fn run_with_deadline(
    runner: &dyn ProbeRunner,
    spec: &SdkSpec,
    endpoint_hint: Option<&str>,
    timeout: Duration,
) -> ProbeResult {
    match tokio::time::timeout(timeout, runner.run(spec, endpoint_hint)).await {
        Ok(result) => {
            log::debug!("probes for {spec} observed {:?}", result.present());
            result
        }
        Err(_) => {
            log::warn!(
                "probes for {spec} did not finish within {timeout:?}; treating all capabilities as unknown"
            );
            ProbeResult::default()
        }
    }
}
