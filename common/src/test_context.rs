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

use crate::cleanup_guard::CleanupGuard;
use crate::utils::rand_file_name;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Per-test scratch directory for override files, mapping tables and
/// capability documents. The directory is removed when the context drops.
pub struct TestContext {
    guard: CleanupGuard,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("s3caps-test-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir)
            .unwrap_or_else(|e| panic!("cannot create scratch dir {}: {e}", dir.display()));
        log::debug!("scratch dir {}", dir.display());
        Self {
            guard: CleanupGuard::new(dir),
        }
    }

    pub fn dir(&self) -> &Path {
        self.guard.dir()
    }

    /// Path inside the scratch directory; the file is not created.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir().join(name)
    }

    /// Path of a file that does not exist.
    pub fn missing_path(&self) -> PathBuf {
        self.path(&rand_file_name("json"))
    }

    pub fn write_text(&self, name: &str, text: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, text)
            .unwrap_or_else(|e| panic!("cannot write {}: {e}", path.display()));
        path
    }

    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        self.write_text(name, &value.to_string())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
