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

// [START storage_control_update_project_intelligence_config]
use gcs_storage::client::StorageControl;
use gcs_storage::model::IntelligenceConfig;
use gcs_storage::model::intelligence_config::EditionConfig;
use gcs_storage::name::IntelligenceConfigName;
use wkt::FieldMask;

pub async fn sample(client: &StorageControl, project_id: &str) -> anyhow::Result<()> {
    let name = IntelligenceConfigName::project(project_id, "global");
    let config = client
        .update_project_intelligence_config()
        .set_intelligence_config(
            IntelligenceConfig::new()
                .set_name(name.to_string())
                .set_edition_config(EditionConfig::Standard),
        )
        .set_update_mask(FieldMask::default().set_paths(["edition_config"]))
        .send()
        .await?;
    println!("updated intelligence config for project {project_id}: {config:?}");
    Ok(())
}
// [END storage_control_update_project_intelligence_config]
