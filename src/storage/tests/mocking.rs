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

#[cfg(test)]
mod tests {
    use gcs_storage as gcs;
    use lro::Poller;

    mockall::mock! {
        #[derive(Debug)]
        Storage {}
        impl gcs::stub::Storage for Storage {
            async fn delete_bucket(&self, _req: gcs::model::DeleteBucketRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<()>>;
            async fn get_bucket(&self, _req: gcs::model::GetBucketRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::Bucket>>;
            async fn create_bucket(&self, _req: gcs::model::CreateBucketRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::Bucket>>;
            async fn list_buckets(&self, _req: gcs::model::ListBucketsRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::ListBucketsResponse>>;
            async fn lock_bucket_retention_policy(&self, _req: gcs::model::LockBucketRetentionPolicyRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::Bucket>>;
            async fn get_iam_policy(&self, _req: gcs::model::GetIamPolicyRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::Policy>>;
            async fn set_iam_policy(&self, _req: gcs::model::SetIamPolicyRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::Policy>>;
            async fn test_iam_permissions(&self, _req: gcs::model::TestIamPermissionsRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::TestIamPermissionsResponse>>;
            async fn update_bucket(&self, _req: gcs::model::UpdateBucketRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::Bucket>>;
            async fn delete_notification_config(&self, _req: gcs::model::DeleteNotificationConfigRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<()>>;
            async fn get_notification_config(&self, _req: gcs::model::GetNotificationConfigRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::NotificationConfig>>;
            async fn create_notification_config(&self, _req: gcs::model::CreateNotificationConfigRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::NotificationConfig>>;
            async fn list_notification_configs(&self, _req: gcs::model::ListNotificationConfigsRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::ListNotificationConfigsResponse>>;
            async fn compose_object(&self, _req: gcs::model::ComposeObjectRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::Object>>;
            async fn delete_object(&self, _req: gcs::model::DeleteObjectRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<()>>;
            async fn restore_object(&self, _req: gcs::model::RestoreObjectRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::Object>>;
            async fn cancel_resumable_write(&self, _req: gcs::model::CancelResumableWriteRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::CancelResumableWriteResponse>>;
            async fn get_object(&self, _req: gcs::model::GetObjectRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::Object>>;
            async fn update_object(&self, _req: gcs::model::UpdateObjectRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::Object>>;
            async fn list_objects(&self, _req: gcs::model::ListObjectsRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::ListObjectsResponse>>;
            async fn rewrite_object(&self, _req: gcs::model::RewriteObjectRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::RewriteResponse>>;
            async fn start_resumable_write(&self, _req: gcs::model::StartResumableWriteRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::StartResumableWriteResponse>>;
            async fn query_write_status(&self, _req: gcs::model::QueryWriteStatusRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::QueryWriteStatusResponse>>;
            async fn move_object(&self, _req: gcs::model::MoveObjectRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::Object>>;
            async fn get_service_account(&self, _req: gcs::model::GetServiceAccountRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::ServiceAccount>>;
            async fn create_hmac_key(&self, _req: gcs::model::CreateHmacKeyRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::CreateHmacKeyResponse>>;
            async fn delete_hmac_key(&self, _req: gcs::model::DeleteHmacKeyRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<()>>;
            async fn get_hmac_key(&self, _req: gcs::model::GetHmacKeyRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::HmacKeyMetadata>>;
            async fn list_hmac_keys(&self, _req: gcs::model::ListHmacKeysRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::ListHmacKeysResponse>>;
            async fn update_hmac_key(&self, _req: gcs::model::UpdateHmacKeyRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::HmacKeyMetadata>>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        StorageControl {}
        impl gcs::stub::StorageControl for StorageControl {
            async fn create_folder(&self, _req: gcs::model::CreateFolderRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::Folder>>;
            async fn delete_folder(&self, _req: gcs::model::DeleteFolderRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<()>>;
            async fn delete_folder_recursive(&self, _req: gcs::model::DeleteFolderRecursiveRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<lro::model::Operation>>;
            async fn get_folder(&self, _req: gcs::model::GetFolderRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::Folder>>;
            async fn list_folders(&self, _req: gcs::model::ListFoldersRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::ListFoldersResponse>>;
            async fn rename_folder(&self, _req: gcs::model::RenameFolderRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<lro::model::Operation>>;
            async fn get_storage_layout(&self, _req: gcs::model::GetStorageLayoutRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::StorageLayout>>;
            async fn create_managed_folder(&self, _req: gcs::model::CreateManagedFolderRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::ManagedFolder>>;
            async fn delete_managed_folder(&self, _req: gcs::model::DeleteManagedFolderRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<()>>;
            async fn get_managed_folder(&self, _req: gcs::model::GetManagedFolderRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::ManagedFolder>>;
            async fn list_managed_folders(&self, _req: gcs::model::ListManagedFoldersRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::ListManagedFoldersResponse>>;
            async fn create_anywhere_cache(&self, _req: gcs::model::CreateAnywhereCacheRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<lro::model::Operation>>;
            async fn update_anywhere_cache(&self, _req: gcs::model::UpdateAnywhereCacheRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<lro::model::Operation>>;
            async fn disable_anywhere_cache(&self, _req: gcs::model::DisableAnywhereCacheRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::AnywhereCache>>;
            async fn pause_anywhere_cache(&self, _req: gcs::model::PauseAnywhereCacheRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::AnywhereCache>>;
            async fn resume_anywhere_cache(&self, _req: gcs::model::ResumeAnywhereCacheRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::AnywhereCache>>;
            async fn get_anywhere_cache(&self, _req: gcs::model::GetAnywhereCacheRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::AnywhereCache>>;
            async fn list_anywhere_caches(&self, _req: gcs::model::ListAnywhereCachesRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::ListAnywhereCachesResponse>>;
            async fn get_project_intelligence_config(&self, _req: gcs::model::GetProjectIntelligenceConfigRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::IntelligenceConfig>>;
            async fn update_project_intelligence_config(&self, _req: gcs::model::UpdateProjectIntelligenceConfigRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::IntelligenceConfig>>;
            async fn get_folder_intelligence_config(&self, _req: gcs::model::GetFolderIntelligenceConfigRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::IntelligenceConfig>>;
            async fn update_folder_intelligence_config(&self, _req: gcs::model::UpdateFolderIntelligenceConfigRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::IntelligenceConfig>>;
            async fn get_organization_intelligence_config(&self, _req: gcs::model::GetOrganizationIntelligenceConfigRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::IntelligenceConfig>>;
            async fn update_organization_intelligence_config(&self, _req: gcs::model::UpdateOrganizationIntelligenceConfigRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::IntelligenceConfig>>;
            async fn get_iam_policy(&self, _req: gcs::model::GetIamPolicyRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::Policy>>;
            async fn set_iam_policy(&self, _req: gcs::model::SetIamPolicyRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::Policy>>;
            async fn test_iam_permissions(&self, _req: gcs::model::TestIamPermissionsRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<gcs::model::TestIamPermissionsResponse>>;
            async fn get_operation(&self, _req: lro::model::GetOperationRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<lro::model::Operation>>;
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn storage_every_rpc() {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockStorage::new();
        mock.expect_delete_bucket()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_get_bucket()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_create_bucket()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_list_buckets()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_lock_bucket_retention_policy()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_get_iam_policy()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_set_iam_policy()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_test_iam_permissions()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_update_bucket()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_delete_notification_config()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_get_notification_config()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_create_notification_config()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_list_notification_configs()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_compose_object()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_delete_object()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_restore_object()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_cancel_resumable_write()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_get_object()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_update_object()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_list_objects()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_rewrite_object()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_start_resumable_write()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_query_write_status()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_move_object()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_get_service_account()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_create_hmac_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_delete_hmac_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_get_hmac_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_list_hmac_keys()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_update_hmac_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));

        let client = gcs::client::Storage::from_stub(mock);
        let response = client.delete_bucket().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.get_bucket().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.create_bucket().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.list_buckets().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.lock_bucket_retention_policy().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.get_iam_policy().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.set_iam_policy().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.test_iam_permissions().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.update_bucket().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.delete_notification_config().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.get_notification_config().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.create_notification_config().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.list_notification_configs().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.compose_object().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.delete_object().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.restore_object().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.cancel_resumable_write().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.get_object().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.update_object().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.list_objects().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.rewrite_object().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.start_resumable_write().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.query_write_status().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.move_object().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.get_service_account().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.create_hmac_key().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.delete_hmac_key().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.get_hmac_key().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.list_hmac_keys().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.update_hmac_key().send().await;
        assert!(response.is_err(), "{response:?}");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn storage_control_every_rpc() {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockStorageControl::new();
        mock.expect_create_folder()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_delete_folder()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_delete_folder_recursive()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_get_folder()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_list_folders()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_rename_folder()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_get_storage_layout()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_create_managed_folder()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_delete_managed_folder()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_get_managed_folder()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_list_managed_folders()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_create_anywhere_cache()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_update_anywhere_cache()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_disable_anywhere_cache()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_pause_anywhere_cache()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_resume_anywhere_cache()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_get_anywhere_cache()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_list_anywhere_caches()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_get_project_intelligence_config()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_update_project_intelligence_config()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_get_folder_intelligence_config()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_update_folder_intelligence_config()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_get_organization_intelligence_config()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_update_organization_intelligence_config()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_get_iam_policy()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_set_iam_policy()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_test_iam_permissions()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::other("simulated failure")));

        let client = gcs::client::StorageControl::from_stub(mock);
        let response = client.create_folder().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.delete_folder().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.delete_folder_recursive().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.get_folder().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.list_folders().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.rename_folder().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.get_storage_layout().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.create_managed_folder().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.delete_managed_folder().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.get_managed_folder().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.list_managed_folders().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.create_anywhere_cache().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.update_anywhere_cache().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.disable_anywhere_cache().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.pause_anywhere_cache().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.resume_anywhere_cache().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.get_anywhere_cache().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.list_anywhere_caches().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.get_project_intelligence_config().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.update_project_intelligence_config().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.get_folder_intelligence_config().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.update_folder_intelligence_config().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.get_organization_intelligence_config().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.update_organization_intelligence_config().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.get_iam_policy().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.set_iam_policy().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.test_iam_permissions().send().await;
        assert!(response.is_err(), "{response:?}");
        let response = client.get_operation().send().await;
        assert!(response.is_err(), "{response:?}");
    }

    fn operation(name: &str) -> lro::model::Operation {
        lro::model::Operation::default().set_name(name)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn rename_folder_poller() -> anyhow::Result<()> {
        let folder = gcs::model::Folder::new().set_name("projects/_/buckets/test-bucket/folders/b/");
        let done = lro::model::Operation::default()
            .set_name("projects/_/buckets/test-bucket/operations/op1")
            .set_done(true)
            .set_result(lro::model::operation::Result::Response(wkt::Any::from_msg(
                &folder,
            )?));

        let mut seq = mockall::Sequence::new();
        let mut mock = MockStorageControl::new();
        mock.expect_rename_folder()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|req, _| {
                req.name == "projects/_/buckets/test-bucket/folders/a/"
                    && req.destination_folder_id == "b/"
            })
            .returning(|_, _| {
                Ok(gax::response::Response::from(operation(
                    "projects/_/buckets/test-bucket/operations/op1",
                )))
            });
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|req, _| req.name == "projects/_/buckets/test-bucket/operations/op1")
            .returning(move |_, _| Ok(gax::response::Response::from(done.clone())));

        let client = gcs::client::StorageControl::from_stub(mock);
        let got = client
            .rename_folder()
            .set_name("projects/_/buckets/test-bucket/folders/a/")
            .set_destination_folder_id("b/")
            .poller()
            .until_done()
            .await?;
        assert_eq!(got, folder);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn rename_folder_poller_error() -> anyhow::Result<()> {
        let failed = lro::model::Operation::default()
            .set_name("op1")
            .set_done(true)
            .set_result(lro::model::operation::Result::Error(
                gax::error::rpc::Status::default()
                    .set_code(gax::error::rpc::Code::FailedPrecondition)
                    .set_message("destination exists"),
            ));
        let mut mock = MockStorageControl::new();
        mock.expect_rename_folder()
            .return_once(move |_, _| Ok(gax::response::Response::from(failed)));

        let client = gcs::client::StorageControl::from_stub(mock);
        let err = client
            .rename_folder()
            .set_name("projects/_/buckets/test-bucket/folders/a/")
            .poller()
            .until_done()
            .await
            .unwrap_err();
        assert_eq!(
            err.status().map(|s| s.code),
            Some(gax::error::rpc::Code::FailedPrecondition),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn delete_folder_recursive_poll() -> anyhow::Result<()> {
        let metadata = gcs::model::DeleteFolderRecursiveMetadata::new().set_folder_id("a/");
        let running = operation("projects/_/buckets/test-bucket/operations/op1")
            .set_metadata(wkt::Any::from_msg(&metadata)?);
        let done = operation("projects/_/buckets/test-bucket/operations/op1")
            .set_done(true)
            .set_result(lro::model::operation::Result::Response(wkt::Any::from_msg(
                &wkt::Empty::default(),
            )?));

        let mut seq = mockall::Sequence::new();
        let mut mock = MockStorageControl::new();
        mock.expect_delete_folder_recursive()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|req, _| req.name == "projects/_/buckets/test-bucket/folders/a/")
            .returning(move |_, _| Ok(gax::response::Response::from(running.clone())));
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|req, _| req.name == "projects/_/buckets/test-bucket/operations/op1")
            .returning(move |_, _| Ok(gax::response::Response::from(done.clone())));

        let client = gcs::client::StorageControl::from_stub(mock);
        let mut poller = client
            .delete_folder_recursive()
            .set_name("projects/_/buckets/test-bucket/folders/a/")
            .poller();
        let first = poller.poll().await;
        assert!(
            matches!(&first, Some(lro::PollingResult::InProgress(Some(m))) if m == &metadata),
            "{first:?}"
        );
        let second = poller.poll().await;
        assert!(
            matches!(second, Some(lro::PollingResult::Completed(Ok(())))),
            "{second:?}"
        );
        assert!(poller.poll().await.is_none());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn list_folders_by_item() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockStorageControl::new();
        mock.expect_list_folders()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|req, _| req.page_token.is_empty())
            .returning(|_, _| {
                Ok(gax::response::Response::from(
                    gcs::model::ListFoldersResponse::new()
                        .set_folders([gcs::model::Folder::new().set_name("f1")])
                        .set_next_page_token("page-2"),
                ))
            });
        mock.expect_list_folders()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|req, _| req.page_token == "page-2")
            .returning(|_, _| {
                Ok(gax::response::Response::from(
                    gcs::model::ListFoldersResponse::new()
                        .set_folders([gcs::model::Folder::new().set_name("f2")]),
                ))
            });

        let client = gcs::client::StorageControl::from_stub(mock);
        let mut items = client
            .list_folders()
            .set_parent("projects/_/buckets/test-bucket")
            .by_item();
        let mut names = Vec::new();
        while let Some(folder) = items.next().await {
            names.push(folder?.name);
        }
        assert_eq!(names, vec!["f1", "f2"]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn get_bucket_request() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_get_bucket()
            .withf(|req, _| req.name == "projects/_/buckets/test-bucket")
            .return_once(|req, _| {
                Ok(gax::response::Response::from(
                    gcs::model::Bucket::new().set_name(req.name),
                ))
            });
        let client = gcs::client::Storage::from_stub(mock);
        let got = client
            .get_bucket()
            .set_name("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(got.name, "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[derive(Debug)]
    struct Empty;
    impl gcs::stub::StorageControl for Empty {}

    #[tokio::test]
    #[should_panic(expected = "verify that you have mocked all methods")]
    async fn default_stub_panics() {
        let client = gcs::client::StorageControl::from_stub(Empty);
        let _ = client.get_storage_layout().send().await;
    }
}
