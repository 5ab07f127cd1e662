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

fn main() {
    #[cfg(feature = "_generate-protos")]
    {
        let mut config = prost_build::Config::default();
        config.bytes(["."]);
        config.enable_type_names();
        tonic_prost_build::configure()
            .build_client(false)
            .disable_comments([
                "google.longrunning.Operations",
                "google.longrunning.Operations.GetOperation",
            ])
            .disable_comments([
                "google.storage.v2.Storage",
                "google.storage.v2.Storage.DeleteBucket",
                "google.storage.v2.Storage.GetBucket",
                "google.storage.v2.Storage.CreateBucket",
                "google.storage.v2.Storage.ListBuckets",
                "google.storage.v2.Storage.LockBucketRetentionPolicy",
                "google.storage.v2.Storage.GetIamPolicy",
                "google.storage.v2.Storage.SetIamPolicy",
                "google.storage.v2.Storage.TestIamPermissions",
                "google.storage.v2.Storage.UpdateBucket",
                "google.storage.v2.Storage.DeleteNotificationConfig",
                "google.storage.v2.Storage.GetNotificationConfig",
                "google.storage.v2.Storage.CreateNotificationConfig",
                "google.storage.v2.Storage.ListNotificationConfigs",
                "google.storage.v2.Storage.ComposeObject",
                "google.storage.v2.Storage.DeleteObject",
                "google.storage.v2.Storage.RestoreObject",
                "google.storage.v2.Storage.CancelResumableWrite",
                "google.storage.v2.Storage.GetObject",
                "google.storage.v2.Storage.UpdateObject",
                "google.storage.v2.Storage.ListObjects",
                "google.storage.v2.Storage.RewriteObject",
                "google.storage.v2.Storage.StartResumableWrite",
                "google.storage.v2.Storage.QueryWriteStatus",
                "google.storage.v2.Storage.MoveObject",
                "google.storage.v2.Storage.GetServiceAccount",
                "google.storage.v2.Storage.CreateHmacKey",
                "google.storage.v2.Storage.DeleteHmacKey",
                "google.storage.v2.Storage.GetHmacKey",
                "google.storage.v2.Storage.ListHmacKeys",
                "google.storage.v2.Storage.UpdateHmacKey",
            ])
            .disable_comments([
                "google.storage.control.v2.StorageControl",
                "google.storage.control.v2.StorageControl.CreateFolder",
                "google.storage.control.v2.StorageControl.DeleteFolder",
                "google.storage.control.v2.StorageControl.DeleteFolderRecursive",
                "google.storage.control.v2.StorageControl.GetFolder",
                "google.storage.control.v2.StorageControl.ListFolders",
                "google.storage.control.v2.StorageControl.RenameFolder",
                "google.storage.control.v2.StorageControl.GetStorageLayout",
                "google.storage.control.v2.StorageControl.CreateManagedFolder",
                "google.storage.control.v2.StorageControl.DeleteManagedFolder",
                "google.storage.control.v2.StorageControl.GetManagedFolder",
                "google.storage.control.v2.StorageControl.ListManagedFolders",
                "google.storage.control.v2.StorageControl.CreateAnywhereCache",
                "google.storage.control.v2.StorageControl.UpdateAnywhereCache",
                "google.storage.control.v2.StorageControl.DisableAnywhereCache",
                "google.storage.control.v2.StorageControl.PauseAnywhereCache",
                "google.storage.control.v2.StorageControl.ResumeAnywhereCache",
                "google.storage.control.v2.StorageControl.GetAnywhereCache",
                "google.storage.control.v2.StorageControl.ListAnywhereCaches",
                "google.storage.control.v2.StorageControl.GetProjectIntelligenceConfig",
                "google.storage.control.v2.StorageControl.UpdateProjectIntelligenceConfig",
                "google.storage.control.v2.StorageControl.GetFolderIntelligenceConfig",
                "google.storage.control.v2.StorageControl.UpdateFolderIntelligenceConfig",
                "google.storage.control.v2.StorageControl.GetOrganizationIntelligenceConfig",
                "google.storage.control.v2.StorageControl.UpdateOrganizationIntelligenceConfig",
                "google.storage.control.v2.StorageControl.GetIamPolicy",
                "google.storage.control.v2.StorageControl.SetIamPolicy",
                "google.storage.control.v2.StorageControl.TestIamPermissions",
            ])
            .out_dir("src/generated/protos")
            .compile_with_config(
                config,
                &[
                    "protos/google/storage/v2/storage.proto",
                    "protos/google/storage/control/v2/storage_control.proto",
                ],
                &["protos"],
            )
            .expect("error compiling protos");
    }
}
