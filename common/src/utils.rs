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

use s3_caps::caps::types::CapabilityProfile;
use serde_json::Value;

pub fn rand_file_name(extension: &str) -> String {
    format!("{}.{extension}", uuid::Uuid::new_v4().simple())
}

/// A complete profile as a JSON object, with `changes` applied on top.
pub fn profile_json(changes: Value) -> Value {
    let mut profile = serde_json::to_value(CapabilityProfile::default())
        .expect("profile always serializes");
    if let (Some(obj), Value::Object(changes)) = (profile.as_object_mut(), changes) {
        obj.extend(changes);
    }
    profile
}
