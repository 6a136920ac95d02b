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

//! Error definitions for capability resolution

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving, loading or persisting a capability document.
///
/// Version parsing, constraint matching and mapping lookups never fail; they
/// degrade to a zero version, a non-match and the default profile instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("S3_SDK is required (e.g., 'boto3', 'aws-sdk-go-v2')")]
    MissingSdk,

    #[error("override JSON not found: {}", .0.display())]
    OverrideNotFound(PathBuf),

    #[error("override JSON must contain an object at top-level: {}", .0.display())]
    OverrideNotObject(PathBuf),

    #[error("invalid value for override key '{key}'; expected {expected}")]
    InvalidOverrideValue { key: String, expected: &'static str },

    #[error("unknown capability in overrides: {0}")]
    UnknownOverrideKey(String),

    #[error("invalid retry mode '{0}'; expected one of standard, adaptive, legacy")]
    InvalidRetryMode(String),

    #[error("unknown capability name '{0}'")]
    UnknownCapability(String),

    #[error("invalid capability mapping table: {0}")]
    InvalidMappingTable(String),

    #[error("capability JSON not specified; set S3_CAPS_JSON_PATH or pass a path")]
    CapsPathUnset,

    #[error("failed to encode capability document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.into(),
            source,
        }
    }
}
