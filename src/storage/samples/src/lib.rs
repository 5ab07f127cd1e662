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

pub mod buckets;
pub mod control;
pub mod objects;

use gcs_storage::client::{Storage, StorageControl};
use rand::{Rng, distr::Distribution};

pub const BUCKET_ID_LENGTH: usize = 63;

/// Installs a `tracing` subscriber for the current thread.
pub fn enable_tracing() -> tracing::subscriber::DefaultGuard {
    use tracing_subscriber::fmt::format::FmtSpan;
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .finish();

    tracing::subscriber::set_default(subscriber)
}

pub async fn run_bucket_examples(buckets: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = enable_tracing();

    let client = Storage::builder().build().await?;
    let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;

    let id = random_bucket_id();
    buckets.push(id.clone());
    tracing::info!("running create_bucket example");
    buckets::create_bucket::sample(&client, &project_id, &id).await?;
    tracing::info!("running get_bucket_metadata example");
    buckets::get_bucket_metadata::sample(&client, &id).await?;
    tracing::info!("running list_buckets example");
    buckets::list_buckets::sample(&client, &project_id).await?;
    Ok(())
}

pub async fn run_object_examples(buckets: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = enable_tracing();

    let client = Storage::builder().build().await?;
    let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;

    let id = random_bucket_id();
    buckets.push(id.clone());
    buckets::create_bucket::sample(&client, &project_id, &id).await?;

    // The objects are created with a rewrite of an existing object.
    tracing::info!("running rewrite_object example");
    let source = std::env::var("GOOGLE_CLOUD_RUST_TEST_OBJECT")?;
    let (source_bucket, source_object) = source
        .split_once('/')
        .ok_or_else(|| anyhow::anyhow!("expected <bucket>/<object>, got {source}"))?;
    let seeded = client
        .rewrite_object()
        .set_source_bucket(format!("projects/_/buckets/{source_bucket}"))
        .set_source_object(source_object)
        .set_destination_bucket(format!("projects/_/buckets/{id}"))
        .set_destination_name("object-to-rewrite")
        .send()
        .await?;
    tracing::info!("seeded test object: {seeded:?}");
    objects::rewrite_object::sample(&client, &id, "object-to-rewrite", "rewritten-object").await?;
    tracing::info!("running list_objects example");
    objects::list_objects::sample(&client, &id).await?;
    tracing::info!("running delete_object example");
    objects::delete_object::sample(&client, &id, "rewritten-object").await?;

    Ok(())
}

pub async fn run_control_examples(buckets: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = enable_tracing();

    let storage = Storage::builder().build().await?;
    let client = StorageControl::builder().build().await?;
    let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;

    let id = random_bucket_id();
    buckets.push(id.clone());
    let _ = storage
        .create_bucket()
        .set_parent("projects/_")
        .set_bucket_id(&id)
        .set_bucket(
            gcs_storage::model::Bucket::new()
                .set_project(format!("projects/{project_id}"))
                .set_hierarchical_namespace(
                    gcs_storage::model::bucket::HierarchicalNamespace::new().set_enabled(true),
                )
                .set_iam_config(
                    gcs_storage::model::bucket::IamConfig::new().set_uniform_bucket_level_access(
                        gcs_storage::model::bucket::iam_config::UniformBucketLevelAccess::new()
                            .set_enabled(true),
                    ),
                ),
        )
        .send()
        .await?;

    tracing::info!("running control::managed_folder_create example");
    control::managed_folder_create::sample(&client, &id).await?;
    tracing::info!("running control::create_folder example");
    control::create_folder::sample(&client, &id).await?;
    tracing::info!("running control::rename_folder example");
    control::rename_folder::sample(&client, &id).await?;
    tracing::info!("running control::list_folders example");
    control::list_folders::sample(&client, &id).await?;

    tracing::info!("running control::get_project_intelligence_config example");
    control::get_project_intelligence_config::sample(&client, &project_id).await?;
    Ok(())
}

/// Deletes a bucket and everything the samples create inside it.
pub async fn cleanup_bucket(
    storage: &Storage,
    control: &StorageControl,
    name: String,
) -> anyhow::Result<()> {
    let mut objects = storage
        .list_objects()
        .set_parent(&name)
        .set_versions(true)
        .by_item();
    let mut pending = Vec::new();
    while let Some(item) = objects.next().await {
        let Ok(object) = item else {
            continue;
        };
        pending.push(
            storage
                .delete_object()
                .set_bucket(object.bucket)
                .set_object(object.name)
                .set_generation(object.generation)
                .send(),
        );
    }
    let _ = futures::future::join_all(pending).await;

    let mut pending = Vec::new();
    let mut folders = control.list_managed_folders().set_parent(&name).by_item();
    while let Some(item) = folders.next().await {
        let Ok(folder) = item else {
            continue;
        };
        pending.push(control.delete_managed_folder().set_name(folder.name).send());
    }
    let _ = futures::future::join_all(pending).await;

    let mut pending = Vec::new();
    let mut folders = control.list_folders().set_parent(&name).by_item();
    while let Some(item) = folders.next().await {
        let Ok(folder) = item else {
            continue;
        };
        pending.push(control.delete_folder().set_name(folder.name).send());
    }
    let _ = futures::future::join_all(pending).await;

    let mut pending = Vec::new();
    let mut caches = control.list_anywhere_caches().set_parent(&name).by_item();
    while let Some(item) = caches.next().await {
        let Ok(cache) = item else {
            continue;
        };
        pending.push(control.disable_anywhere_cache().set_name(cache.name).send());
    }
    let _ = futures::future::join_all(pending).await;

    storage.delete_bucket().set_name(&name).send().await?;
    Ok(())
}

pub fn random_bucket_id() -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    const PREFIX: &str = "rust-sdk-testing-";

    let distr = RandomChars { chars: CHARSET };
    let bucket_id: String = rand::rng()
        .sample_iter(distr)
        .take(BUCKET_ID_LENGTH - PREFIX.len())
        .map(char::from)
        .collect();
    format!("{PREFIX}{bucket_id}")
}

pub struct RandomChars {
    chars: &'static [u8],
}

impl RandomChars {
    pub fn new(chars: &'static [u8]) -> Self {
        Self { chars }
    }
}

impl Distribution<u8> for RandomChars {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let index = rng.random_range(0..self.chars.len());
        self.chars[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_chars() {
        let chars = RandomChars::new("abcde".as_bytes());
        let got: String = rand::rng()
            .sample_iter(chars)
            .take(64)
            .map(char::from)
            .collect();
        assert!(
            !got.contains(|c| !("abcde".contains(c))),
            "{got:?} contains unexpected character"
        );
    }

    #[test]
    fn bucket_id() {
        let got = random_bucket_id();
        assert_eq!(got.len(), BUCKET_ID_LENGTH, "{got}");
        assert!(got.starts_with("rust-sdk-testing-"), "{got}");
    }
}
