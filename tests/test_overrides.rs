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

use s3_caps::caps::overrides::load_overrides;
use s3_caps::caps::{CapabilityDocumentBuilder, Error, ResolverConfig, RetryMode, SdkSpec, Source};
use s3_caps_common::test_context::TestContext;
use serde_json::json;

fn forced(spec: SdkSpec, path: std::path::PathBuf, strict: bool) -> CapabilityDocumentBuilder {
    let config = ResolverConfig::builder()
        .spec(spec)
        .override_path(path)
        .force_override(true)
        .strict_overrides(strict)
        .build();
    CapabilityDocumentBuilder::new(config)
}

#[test]
fn load_overrides_without_path() {
    let overrides = load_overrides(None).unwrap();
    assert!(overrides.is_empty());
}

#[test]
fn load_overrides_missing_file() {
    let ctx = TestContext::new();
    let path = ctx.missing_path();

    match load_overrides(Some(&path)) {
        Err(Error::OverrideNotFound(p)) => assert_eq!(p, path),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn load_overrides_not_an_object() {
    let ctx = TestContext::new();
    let path = ctx.write_json("override.json", &json!(["retry_mode", "adaptive"]));

    assert!(matches!(
        load_overrides(Some(&path)),
        Err(Error::OverrideNotObject(_))
    ));
}

#[test]
fn load_overrides_malformed_json() {
    let ctx = TestContext::new();
    let path = ctx.write_text("override.json", "{\"retry_mode\": ");

    assert!(matches!(
        load_overrides(Some(&path)),
        Err(Error::Json { .. })
    ));
}

#[test]
fn load_overrides_wrong_type() {
    let ctx = TestContext::new();
    let path = ctx.write_json("override.json", &json!({"sigv4_chunked": "yes"}));

    match load_overrides(Some(&path)) {
        Err(Error::InvalidOverrideValue { key, .. }) => assert_eq!(key, "sigv4_chunked"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn load_overrides_keeps_unknown_keys() {
    let ctx = TestContext::new();
    let path = ctx.write_json(
        "override.json",
        &json!({"retry_mode": "legacy", "virtual_host": true}),
    );
    let overrides = load_overrides(Some(&path)).unwrap();

    assert_eq!(overrides.patch().retry_mode, Some(RetryMode::Legacy));
    assert!(overrides.unknown().contains_key("virtual_host"));
    assert!(matches!(
        overrides.reject_unknown(),
        Err(Error::UnknownOverrideKey(k)) if k == "virtual_host"
    ));
}

#[tokio::test]
async fn forced_override_sets_retry_mode() {
    let ctx = TestContext::new();
    let path = ctx.write_json("override.json", &json!({"retry_mode": "adaptive"}));
    let doc = forced(SdkSpec::new("boto3", "1.26.0"), path, false)
        .build()
        .await
        .unwrap();

    assert_eq!(doc.profile.retry_mode, RetryMode::Adaptive);
    assert!(doc.profile.sigv4_chunked);
    assert_eq!(doc.sources, vec![Source::Mapping, Source::Override]);
}

#[tokio::test]
async fn forced_empty_override_adds_no_source() {
    let ctx = TestContext::new();
    let path = ctx.write_json("override.json", &json!({}));
    let doc = forced(SdkSpec::new("boto3", "1.26.0"), path, false)
        .build()
        .await
        .unwrap();

    assert_eq!(doc.sources, vec![Source::Mapping]);
}

#[tokio::test]
async fn unknown_override_key_is_ignored() {
    let ctx = TestContext::new();
    let path = ctx.write_json("override.json", &json!({"path_style": true}));
    let doc = forced(SdkSpec::new("minio-go", "7.0.0"), path, false)
        .build()
        .await
        .unwrap();

    assert_eq!(doc.profile, Default::default());
}

#[tokio::test]
async fn unknown_override_key_fails_when_strict() {
    let ctx = TestContext::new();
    let path = ctx.write_json("override.json", &json!({"path_style": true}));
    let err = forced(SdkSpec::new("minio-go", "7.0.0"), path, true)
        .build()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnknownOverrideKey(k) if k == "path_style"));
}

#[tokio::test]
async fn missing_override_file_fails_build() {
    let ctx = TestContext::new();
    let err = forced(SdkSpec::new("boto3", "1.26.0"), ctx.missing_path(), false)
        .build()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::OverrideNotFound(_)));
}
