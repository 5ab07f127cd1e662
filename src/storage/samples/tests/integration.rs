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

#[cfg(all(test, feature = "run-integration-tests"))]
mod tests {
    use gcs_storage::client::{Storage, StorageControl};
    use storage_samples::{
        cleanup_bucket, run_bucket_examples, run_control_examples, run_object_examples,
    };

    async fn cleanup(buckets: Vec<String>) -> anyhow::Result<()> {
        let storage = Storage::builder().build().await?;
        let control = StorageControl::builder().build().await?;
        for id in buckets {
            // Ignore cleanup errors.
            let _ = cleanup_bucket(&storage, &control, format!("projects/_/buckets/{id}")).await;
        }
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn bucket_examples() -> anyhow::Result<()> {
        let mut buckets = Vec::new();
        let result = run_bucket_examples(&mut buckets).await;
        cleanup(buckets).await?;
        result
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn object_examples() -> anyhow::Result<()> {
        let mut buckets = Vec::new();
        let result = run_object_examples(&mut buckets).await;
        cleanup(buckets).await?;
        result
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn control_examples() -> anyhow::Result<()> {
        let mut buckets = Vec::new();
        let result = run_control_examples(&mut buckets).await;
        cleanup(buckets).await?;
        result
    }
}
