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

// [START storage_rewrite_object]
use gcs_storage::client::Storage;

pub async fn sample(
    client: &Storage,
    bucket_id: &str,
    source: &str,
    destination: &str,
) -> anyhow::Result<()> {
    let bucket = format!("projects/_/buckets/{bucket_id}");
    let mut token = String::new();
    let object = loop {
        let progress = client
            .rewrite_object()
            .set_source_bucket(&bucket)
            .set_source_object(source)
            .set_destination_bucket(&bucket)
            .set_destination_name(destination)
            .set_rewrite_token(token)
            .send()
            .await?;
        if progress.done {
            break progress.resource;
        }
        println!(
            "rewrote {} of {} bytes",
            progress.total_bytes_rewritten, progress.object_size
        );
        token = progress.rewrite_token;
    };
    println!("successfully rewrote {source} to {object:?}");
    Ok(())
}
// [END storage_rewrite_object]
