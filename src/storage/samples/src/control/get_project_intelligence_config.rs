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

// [START storage_control_get_project_intelligence_config]
use gcs_storage::client::StorageControl;
use gcs_storage::name::IntelligenceConfigName;

pub async fn sample(client: &StorageControl, project_id: &str) -> anyhow::Result<()> {
    let name = IntelligenceConfigName::project(project_id, "global");
    let config = client
        .get_project_intelligence_config()
        .set_name(name.to_string())
        .send()
        .await?;
    println!("intelligence config for project {project_id}: {config:?}");
    Ok(())
}
// [END storage_control_get_project_intelligence_config]
