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

//! `s3-caps`: resolves the SDK capability document for an interop test run.

mod cli;

use clap::Parser;
use cli::Cli;
use s3_caps::caps::CapabilityDocumentBuilder;
use s3_caps::caps::cache::save_document;
use s3_caps::caps::config::EnvSettings;
use s3_caps::caps::mapping::MappingTable;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="INFO" to log info and higher

    let cli = Cli::parse();
    let env = EnvSettings::from_env()?;
    let config = cli.resolver_config(env);

    let mut builder = CapabilityDocumentBuilder::new(config);
    if let Some(path) = &cli.mapping {
        builder = builder.mapping(MappingTable::from_json_path(path)?);
    }
    let doc = builder.build().await?;

    match &cli.out {
        Some(path) => {
            save_document(&doc, path)?;
            log::info!("capability document written to '{}'", path.display());
        }
        None => println!("{}", doc.to_json_pretty()?),
    }
    Ok(())
}
