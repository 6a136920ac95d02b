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

use async_trait::async_trait;
use s3_caps::caps::probe::ProbeRunner;
use s3_caps::caps::{
    CapabilityDocumentBuilder, CapabilityName, CapabilityPatch, ProbeResult, ResolverConfig,
    RetryMode, SdkSpec, Source,
};
use s3_caps_common::test_context::TestContext;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

struct ChecksumProbe;

#[async_trait]
impl ProbeRunner for ChecksumProbe {
    async fn run(&self, _spec: &SdkSpec, endpoint_hint: Option<&str>) -> ProbeResult {
        assert_eq!(endpoint_hint, Some("http://localhost:9000"));
        CapabilityPatch {
            crc32c_default: Some(true),
            ..Default::default()
        }
    }
}

struct StalledProbe;

#[async_trait]
impl ProbeRunner for StalledProbe {
    async fn run(&self, _spec: &SdkSpec, _endpoint_hint: Option<&str>) -> ProbeResult {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        CapabilityPatch {
            crc32c_default: Some(true),
            ..Default::default()
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn build_mapped_sdk() {
    let config = ResolverConfig::builder()
        .spec(SdkSpec::new("aws-sdk-go-v2", "1.30.0"))
        .build();
    let doc = CapabilityDocumentBuilder::new(config).build().await.unwrap();

    assert_eq!(doc.sdk, "aws-sdk-go-v2");
    assert_eq!(doc.version, "1.30.0");
    assert!(doc.profile.sigv4_chunked);
    assert!(!doc.profile.list_objects_v1);
    assert_eq!(doc.profile.retry_mode, RetryMode::Standard);
    assert_eq!(doc.sources, vec![Source::Mapping]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn build_unmapped_sdk_gets_defaults() {
    let config = ResolverConfig::builder()
        .spec(SdkSpec::new("aws-sdk-go-v2", "1.24.9"))
        .build();
    let doc = CapabilityDocumentBuilder::new(config).build().await.unwrap();

    assert!(!doc.has_capability(CapabilityName::Sigv4Chunked));
    assert_eq!(doc.sources, vec![Source::Mapping]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn build_latest_matches_regardless_of_constraint() {
    let config = ResolverConfig::builder()
        .spec(SdkSpec::new("boto3", "latest"))
        .build();
    let doc = CapabilityDocumentBuilder::new(config).build().await.unwrap();

    assert!(doc.profile.sigv4_chunked);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn build_with_probe_and_override() {
    let ctx = TestContext::new();
    let path = ctx.write_json(
        "override.json",
        &json!({"retry_mode": "adaptive", "sigv4_chunked": false}),
    );
    let config = ResolverConfig::builder()
        .spec(SdkSpec::new("aws-sdk-go-v2", "1.30.0"))
        .endpoint_hint(Some("http://localhost:9000".to_string()))
        .override_path(path)
        .force_override(true)
        .build();
    let doc = CapabilityDocumentBuilder::new(config)
        .probe_runner(Arc::new(ChecksumProbe))
        .build()
        .await
        .unwrap();

    assert!(doc.profile.crc32c_default);
    assert!(!doc.profile.sigv4_chunked);
    assert_eq!(doc.profile.retry_mode, RetryMode::Adaptive);
    assert_eq!(
        doc.sources,
        vec![Source::Mapping, Source::Probes, Source::Override]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn build_ignores_override_file_unless_forced() {
    let ctx = TestContext::new();
    let path = ctx.write_json("override.json", &json!({"retry_mode": "legacy"}));
    let config = ResolverConfig::builder()
        .spec(SdkSpec::new("boto3", "1.30.0"))
        .override_path(path)
        .build();
    let doc = CapabilityDocumentBuilder::new(config).build().await.unwrap();

    assert_eq!(doc.profile.retry_mode, RetryMode::Standard);
    assert_eq!(doc.sources, vec![Source::Mapping]);
}

#[tokio::test(start_paused = true)]
async fn build_with_stalled_probe_reports_nothing_observed() {
    let config = ResolverConfig::builder()
        .spec(SdkSpec::new("boto3", "1.30.0"))
        .probe_timeout(Duration::from_secs(1))
        .build();
    let doc = CapabilityDocumentBuilder::new(config)
        .probe_runner(Arc::new(StalledProbe))
        .build()
        .await
        .unwrap();

    assert!(!doc.profile.crc32c_default);
    assert_eq!(doc.sources, vec![Source::Mapping]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn build_is_deterministic() {
    let ctx = TestContext::new();
    let path = ctx.write_json("override.json", &json!({"object_lock": true}));
    let config = ResolverConfig::builder()
        .spec(SdkSpec::new("aws-sdk-go-v2", "1.40.2"))
        .override_path(path)
        .force_override(true)
        .build();
    let builder = CapabilityDocumentBuilder::new(config);

    let first = builder.build().await.unwrap().to_json_pretty().unwrap();
    let second = builder.build().await.unwrap().to_json_pretty().unwrap();
    assert_eq!(first, second);
}
