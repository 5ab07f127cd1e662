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

// [START storage_lock_retention_policy]
use gcs_storage::client::Storage;

pub async fn sample(client: &Storage, bucket_id: &str) -> anyhow::Result<()> {
    let bucket = client
        .get_bucket()
        .set_name(format!("projects/_/buckets/{bucket_id}"))
        .send()
        .await?;
    // Locking requires the current metageneration.
    let locked = client
        .lock_bucket_retention_policy()
        .set_bucket(bucket.name)
        .set_if_metageneration_match(bucket.metageneration)
        .send()
        .await?;
    let policy = locked.retention_policy.unwrap_or_default();
    println!(
        "retention policy for {} is locked: {}, effective since {:?}",
        locked.name, policy.is_locked, policy.effective_time
    );
    Ok(())
}
// [END storage_lock_retention_policy]
