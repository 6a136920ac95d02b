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

//! Capability document persistence and the test-session loader
//!
//! The document is typically resolved once, written to `caps.json`, and read
//! back by every test in the session. Several runners may share one file, so
//! writes go to a temporary file in the same directory which is then renamed
//! over the destination.

use crate::caps::builder::CapabilityDocumentBuilder;
use crate::caps::config::ENV_CAPS_JSON_PATH;
use crate::caps::error::Error;
use crate::caps::types::{CapabilityDocument, SdkSpec};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically replaces `path` with the pretty JSON form of `doc`.
pub fn save_document(doc: &CapabilityDocument, path: &Path) -> Result<(), Error> {
    let mut payload = doc.to_json_pretty()?;
    payload.push('\n');

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "caps.json".to_string());
    let temp_path = path.with_file_name(format!(".{file_name}.{}.tmp", uuid::Uuid::new_v4()));

    let written = File::create(&temp_path)
        .and_then(|mut file| {
            file.write_all(payload.as_bytes())?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&temp_path, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(path, e));
    }
    log::debug!("wrote capability document to {}", path.display());
    Ok(())
}

pub fn load_document(path: &Path) -> Result<CapabilityDocument, Error> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| Error::json(path, e))
}

/// Loads the session document from `path`, or from `S3_CAPS_JSON_PATH`.
pub fn load_caps_for_tests(path: Option<&Path>) -> Result<CapabilityDocument, Error> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::var(ENV_CAPS_JSON_PATH)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(Error::CapsPathUnset)?,
    };
    load_document(&path)
}

/// Document handed to a test session, with the error that forced a fallback.
#[derive(Debug)]
pub struct SessionCaps {
    pub document: CapabilityDocument,
    /// Set when `document` is the default profile marked `error-fallback`
    pub error: Option<Error>,
}

impl SessionCaps {
    fn resolved(document: CapabilityDocument) -> Self {
        Self {
            document,
            error: None,
        }
    }

    fn fallback(spec: &SdkSpec, error: Error) -> Self {
        log::warn!("capability resolution for {spec} failed, using default profile: {error}");
        Self {
            document: CapabilityDocument::fallback(spec),
            error: Some(error),
        }
    }
}

/// Like [`load_caps_for_tests`], but degrades to the default profile
/// (sources `["error-fallback"]`) instead of failing.
pub fn load_caps_or_fallback(path: Option<&Path>, spec: &SdkSpec) -> SessionCaps {
    match load_caps_for_tests(path) {
        Ok(doc) => SessionCaps::resolved(doc),
        Err(e) => SessionCaps::fallback(spec, e),
    }
}

/// Resolves with `builder`, degrading to the default profile on error.
pub async fn resolve_or_fallback(builder: &CapabilityDocumentBuilder) -> SessionCaps {
    match builder.build().await {
        Ok(doc) => SessionCaps::resolved(doc),
        Err(e) => SessionCaps::fallback(&builder.config().spec, e),
    }
}
