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

//! # S3 SDK capability resolver (`s3-caps`)
//!
//! S3 interoperability tests run against many SDKs, and SDKs differ in
//! observable wire behavior: whether they sign `aws-chunked` uploads, use
//! virtual-hosted addressing, follow 307 redirects on PUT, and so on. Rather
//! than pinning tests to one SDK version, tests read a *capability profile*
//! and adapt their setup and assertions to it.
//!
//! A profile is resolved from three layers, weakest first:
//!
//! 1. a static mapping of SDK version bands to profiles,
//! 2. runtime probe observations,
//! 3. explicit operator overrides from a JSON file.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use s3_caps::caps::{CapabilityDocumentBuilder, ResolverConfig, SdkSpec};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ResolverConfig::builder()
//!         .spec(SdkSpec::new("aws-sdk-go-v2", "1.30.0"))
//!         .build();
//!
//!     let doc = CapabilityDocumentBuilder::new(config)
//!         .build()
//!         .await
//!         .expect("resolution failed");
//!
//!     println!("{}", doc.to_json_pretty().unwrap());
//! }
//! ```

pub mod caps;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
