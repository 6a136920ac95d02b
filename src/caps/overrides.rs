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

//! Operator-supplied capability overrides
//!
//! An override file is a JSON object of capability names to values:
//!
//! ```json
//! { "sigv4_chunked": false, "retry_mode": "adaptive" }
//! ```
//!
//! Known keys are type-checked into a [`CapabilityPatch`] when loaded. Keys
//! outside the capability set are kept aside; the merge ignores them.

use crate::caps::error::Error;
use crate::caps::types::{CapabilityName, CapabilityPatch};
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;

/// Parsed override set
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    patch: CapabilityPatch,
    unknown: Map<String, Value>,
    len: usize,
}

impl Overrides {
    /// Splits a JSON object into typed known keys and untouched unknown keys.
    pub fn from_map(map: Map<String, Value>) -> Result<Self, Error> {
        let len = map.len();
        let mut patch = CapabilityPatch::default();
        let mut unknown = Map::new();
        for (key, value) in map {
            match key.parse::<CapabilityName>() {
                Ok(name) => patch.set_json(name, &value)?,
                Err(_) => {
                    unknown.insert(key, value);
                }
            }
        }
        Ok(Self {
            patch,
            unknown,
            len,
        })
    }

    /// True when the source object had no keys at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn patch(&self) -> &CapabilityPatch {
        &self.patch
    }

    /// Keys that name no capability, with their original values.
    pub fn unknown(&self) -> &Map<String, Value> {
        &self.unknown
    }

    /// Fails on the first key that names no capability.
    pub fn reject_unknown(&self) -> Result<(), Error> {
        match self.unknown.keys().next() {
            Some(key) => Err(Error::UnknownOverrideKey(key.clone())),
            None => Ok(()),
        }
    }
}

impl From<CapabilityPatch> for Overrides {
    fn from(patch: CapabilityPatch) -> Self {
        let len = patch.present().len();
        Self {
            patch,
            unknown: Map::new(),
            len,
        }
    }
}

/// Reads an override file. No path means no overrides.
pub fn load_overrides(path: Option<&Path>) -> Result<Overrides, Error> {
    let Some(path) = path else {
        return Ok(Overrides::default());
    };
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::OverrideNotFound(path.to_path_buf()),
        _ => Error::io(path, e),
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|e| Error::json(path, e))?;
    let Value::Object(map) = value else {
        return Err(Error::OverrideNotObject(path.to_path_buf()));
    };
    let overrides = Overrides::from_map(map)?;
    log::debug!(
        "loaded {} override key(s) from {}",
        overrides.len,
        path.display()
    );
    Ok(overrides)
}
