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

use s3_caps::caps::mapping::MappingTable;
use s3_caps::caps::{CapabilityDocumentBuilder, Error, ResolverConfig, RetryMode, SdkSpec, Source};
use s3_caps_common::test_context::TestContext;
use s3_caps_common::utils::profile_json;
use serde_json::json;

#[tokio::test]
async fn mapping_file_replaces_builtin_table() {
    let ctx = TestContext::new();
    let path = ctx.write_json(
        "mapping.json",
        &json!([
            {
                "sdk": "minio-go",
                "version_constraint": ">= 7.0.0, < 8.0.0",
                "profile": profile_json(json!({"retry_mode": "legacy", "list_objects_v1": true})),
                "rationale": "v1 listing kept for old gateways"
            }
        ]),
    );
    let mapping = MappingTable::from_json_path(&path).unwrap();
    assert_eq!(mapping.entries().len(), 1);

    let config = ResolverConfig::builder()
        .spec(SdkSpec::new("minio-go", "7.0.80"))
        .build();
    let doc = CapabilityDocumentBuilder::new(config)
        .mapping(mapping.clone())
        .build()
        .await
        .unwrap();
    assert_eq!(doc.profile.retry_mode, RetryMode::Legacy);
    assert!(doc.profile.list_objects_v1);
    assert_eq!(doc.sources, vec![Source::Mapping]);

    let config = ResolverConfig::builder()
        .spec(SdkSpec::new("aws-sdk-go-v2", "1.30.0"))
        .build();
    let doc = CapabilityDocumentBuilder::new(config)
        .mapping(mapping)
        .build()
        .await
        .unwrap();
    assert!(!doc.profile.sigv4_chunked);
}

#[test]
fn mapping_file_first_match_wins() {
    let ctx = TestContext::new();
    let path = ctx.write_json(
        "mapping.json",
        &json!([
            {"sdk": "boto3", "version_constraint": ">= 1.0.0",
             "profile": profile_json(json!({"crc32c_default": true}))},
            {"sdk": "boto3", "version_constraint": ">= 1.26.0",
             "profile": profile_json(json!({"sigv4_chunked": true}))}
        ]),
    );
    let mapping = MappingTable::from_json_path(&path).unwrap();

    assert_eq!(mapping.overlapping_entries(), vec![(0, 1)]);
    let profile = mapping.lookup(&SdkSpec::new("boto3", "1.30.0"));
    assert!(profile.crc32c_default);
    assert!(!profile.sigv4_chunked);
}

#[test]
fn mapping_file_with_partial_profile_is_rejected() {
    let ctx = TestContext::new();
    let path = ctx.write_json(
        "mapping.json",
        &json!([{"sdk": "boto3", "profile": {"sigv4_chunked": true}}]),
    );

    assert!(matches!(
        MappingTable::from_json_path(&path),
        Err(Error::InvalidMappingTable(_))
    ));
}

#[test]
fn mapping_file_missing() {
    let ctx = TestContext::new();

    assert!(matches!(
        MappingTable::from_json_path(&ctx.missing_path()),
        Err(Error::Io { .. })
    ));
}
