// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Runs one of the Cloud Storage samples.
//!
//! ```sh
//! storage-samples get-bucket-metadata --bucket-id my-bucket
//! ```

use clap::{Parser, Subcommand};
use gcs_storage::client::{Storage, StorageControl};
use storage_samples::{buckets, control, objects};

#[derive(Debug, Parser)]
#[command(version, about = "Cloud Storage samples")]
struct Cli {
    /// Use the HTTP-JSON transport for the intelligence config samples.
    #[arg(long, global = true)]
    http: bool,

    #[command(subcommand)]
    sample: Sample,
}

#[derive(Debug, Subcommand)]
enum Sample {
    CreateBucket {
        #[arg(long)]
        project_id: String,
        #[arg(long)]
        bucket_id: String,
    },
    GetBucketMetadata {
        #[arg(long)]
        bucket_id: String,
    },
    ListBuckets {
        #[arg(long)]
        project_id: String,
    },
    LockRetentionPolicy {
        #[arg(long)]
        bucket_id: String,
    },
    ListObjects {
        #[arg(long)]
        bucket_id: String,
    },
    RewriteObject {
        #[arg(long)]
        bucket_id: String,
        #[arg(long)]
        source: String,
        #[arg(long)]
        destination: String,
    },
    DeleteObject {
        #[arg(long)]
        bucket_id: String,
        #[arg(long)]
        name: String,
    },
    CreateFolder {
        #[arg(long)]
        bucket_id: String,
    },
    ListFolders {
        #[arg(long)]
        bucket_id: String,
    },
    RenameFolder {
        #[arg(long)]
        bucket_id: String,
    },
    ManagedFolderCreate {
        #[arg(long)]
        bucket_id: String,
    },
    CreateAnywhereCache {
        #[arg(long)]
        bucket_id: String,
        #[arg(long)]
        zone: String,
    },
    UpdateAnywhereCache {
        #[arg(long)]
        bucket_id: String,
        #[arg(long)]
        cache_id: String,
    },
    GetProjectIntelligenceConfig {
        #[arg(long)]
        project_id: String,
    },
    UpdateProjectIntelligenceConfig {
        #[arg(long)]
        project_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match cli.sample {
        Sample::CreateBucket {
            project_id,
            bucket_id,
        } => buckets::create_bucket::sample(&storage().await?, &project_id, &bucket_id).await,
        Sample::GetBucketMetadata { bucket_id } => {
            buckets::get_bucket_metadata::sample(&storage().await?, &bucket_id).await
        }
        Sample::ListBuckets { project_id } => {
            buckets::list_buckets::sample(&storage().await?, &project_id).await
        }
        Sample::LockRetentionPolicy { bucket_id } => {
            buckets::lock_retention_policy::sample(&storage().await?, &bucket_id).await
        }
        Sample::ListObjects { bucket_id } => {
            objects::list_objects::sample(&storage().await?, &bucket_id).await
        }
        Sample::RewriteObject {
            bucket_id,
            source,
            destination,
        } => {
            objects::rewrite_object::sample(&storage().await?, &bucket_id, &source, &destination)
                .await
        }
        Sample::DeleteObject { bucket_id, name } => {
            objects::delete_object::sample(&storage().await?, &bucket_id, &name).await
        }
        Sample::CreateFolder { bucket_id } => {
            control::create_folder::sample(&control().await?, &bucket_id).await
        }
        Sample::ListFolders { bucket_id } => {
            control::list_folders::sample(&control().await?, &bucket_id).await
        }
        Sample::RenameFolder { bucket_id } => {
            control::rename_folder::sample(&control().await?, &bucket_id).await
        }
        Sample::ManagedFolderCreate { bucket_id } => {
            control::managed_folder_create::sample(&control().await?, &bucket_id).await
        }
        Sample::CreateAnywhereCache { bucket_id, zone } => {
            control::create_anywhere_cache::sample(&control().await?, &bucket_id, &zone).await
        }
        Sample::UpdateAnywhereCache {
            bucket_id,
            cache_id,
        } => control::update_anywhere_cache::sample(&control().await?, &bucket_id, &cache_id).await,
        Sample::GetProjectIntelligenceConfig { project_id } => {
            let client = intelligence(cli.http).await?;
            control::get_project_intelligence_config::sample(&client, &project_id).await
        }
        Sample::UpdateProjectIntelligenceConfig { project_id } => {
            let client = intelligence(cli.http).await?;
            control::update_project_intelligence_config::sample(&client, &project_id).await
        }
    }
}

async fn storage() -> anyhow::Result<Storage> {
    Ok(Storage::builder().build().await?)
}

async fn control() -> anyhow::Result<StorageControl> {
    Ok(StorageControl::builder().build().await?)
}

async fn intelligence(http: bool) -> anyhow::Result<StorageControl> {
    if http {
        return Ok(StorageControl::http_builder().build().await?);
    }
    control().await
}
