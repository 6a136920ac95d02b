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

//! SDK capability profile resolution

pub mod builder;
pub mod cache;
pub mod config;
pub mod constraint;
pub mod error;
pub mod mapping;
pub mod merge;
pub mod overrides;
pub mod probe;
pub mod types;
pub mod version;

pub use builder::CapabilityDocumentBuilder;
pub use config::{EnvSettings, ResolverConfig};
pub use error::Error;
pub use types::{
    CapabilityDocument, CapabilityName, CapabilityPatch, CapabilityProfile, CapabilityValue,
    ProbeResult, RetryMode, SdkSpec, Source,
};
