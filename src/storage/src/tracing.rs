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

use crate::Result;

/// Implements a [Storage](super::stub::Storage) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Storage<T>
where
    T: super::stub::Storage + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Storage<T>
where
    T: super::stub::Storage + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::Storage for Storage<T>
where
    T: super::stub::Storage + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn delete_bucket(
        &self,
        req: crate::model::DeleteBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_bucket(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn get_bucket(
        &self,
        req: crate::model::GetBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Bucket>> {
        self.inner.get_bucket(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn create_bucket(
        &self,
        req: crate::model::CreateBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Bucket>> {
        self.inner.create_bucket(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn list_buckets(
        &self,
        req: crate::model::ListBucketsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListBucketsResponse>> {
        self.inner.list_buckets(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn lock_bucket_retention_policy(
        &self,
        req: crate::model::LockBucketRetentionPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Bucket>> {
        self.inner.lock_bucket_retention_policy(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn get_iam_policy(
        &self,
        req: crate::model::GetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Policy>> {
        self.inner.get_iam_policy(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn set_iam_policy(
        &self,
        req: crate::model::SetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Policy>> {
        self.inner.set_iam_policy(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn test_iam_permissions(
        &self,
        req: crate::model::TestIamPermissionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TestIamPermissionsResponse>> {
        self.inner.test_iam_permissions(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn update_bucket(
        &self,
        req: crate::model::UpdateBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Bucket>> {
        self.inner.update_bucket(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn delete_notification_config(
        &self,
        req: crate::model::DeleteNotificationConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_notification_config(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn get_notification_config(
        &self,
        req: crate::model::GetNotificationConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::NotificationConfig>> {
        self.inner.get_notification_config(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn create_notification_config(
        &self,
        req: crate::model::CreateNotificationConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::NotificationConfig>> {
        self.inner.create_notification_config(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn list_notification_configs(
        &self,
        req: crate::model::ListNotificationConfigsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListNotificationConfigsResponse>> {
        self.inner.list_notification_configs(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn compose_object(
        &self,
        req: crate::model::ComposeObjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Object>> {
        self.inner.compose_object(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn delete_object(
        &self,
        req: crate::model::DeleteObjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_object(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn restore_object(
        &self,
        req: crate::model::RestoreObjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Object>> {
        self.inner.restore_object(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn cancel_resumable_write(
        &self,
        req: crate::model::CancelResumableWriteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CancelResumableWriteResponse>> {
        self.inner.cancel_resumable_write(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn get_object(
        &self,
        req: crate::model::GetObjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Object>> {
        self.inner.get_object(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn update_object(
        &self,
        req: crate::model::UpdateObjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Object>> {
        self.inner.update_object(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn list_objects(
        &self,
        req: crate::model::ListObjectsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListObjectsResponse>> {
        self.inner.list_objects(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn rewrite_object(
        &self,
        req: crate::model::RewriteObjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RewriteResponse>> {
        self.inner.rewrite_object(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn start_resumable_write(
        &self,
        req: crate::model::StartResumableWriteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StartResumableWriteResponse>> {
        self.inner.start_resumable_write(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn query_write_status(
        &self,
        req: crate::model::QueryWriteStatusRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryWriteStatusResponse>> {
        self.inner.query_write_status(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn move_object(
        &self,
        req: crate::model::MoveObjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Object>> {
        self.inner.move_object(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn get_service_account(
        &self,
        req: crate::model::GetServiceAccountRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ServiceAccount>> {
        self.inner.get_service_account(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn create_hmac_key(
        &self,
        req: crate::model::CreateHmacKeyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CreateHmacKeyResponse>> {
        self.inner.create_hmac_key(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn delete_hmac_key(
        &self,
        req: crate::model::DeleteHmacKeyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_hmac_key(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn get_hmac_key(
        &self,
        req: crate::model::GetHmacKeyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::HmacKeyMetadata>> {
        self.inner.get_hmac_key(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn list_hmac_keys(
        &self,
        req: crate::model::ListHmacKeysRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListHmacKeysResponse>> {
        self.inner.list_hmac_keys(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn update_hmac_key(
        &self,
        req: crate::model::UpdateHmacKeyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::HmacKeyMetadata>> {
        self.inner.update_hmac_key(req, options).await
    }
}

/// Implements a [StorageControl](super::stub::StorageControl) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct StorageControl<T>
where
    T: super::stub::StorageControl + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> StorageControl<T>
where
    T: super::stub::StorageControl + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::StorageControl for StorageControl<T>
where
    T: super::stub::StorageControl + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn create_folder(
        &self,
        req: crate::model::CreateFolderRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Folder>> {
        self.inner.create_folder(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn delete_folder(
        &self,
        req: crate::model::DeleteFolderRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_folder(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn delete_folder_recursive(
        &self,
        req: crate::model::DeleteFolderRecursiveRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<lro::model::Operation>> {
        self.inner.delete_folder_recursive(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn get_folder(
        &self,
        req: crate::model::GetFolderRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Folder>> {
        self.inner.get_folder(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn list_folders(
        &self,
        req: crate::model::ListFoldersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListFoldersResponse>> {
        self.inner.list_folders(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn rename_folder(
        &self,
        req: crate::model::RenameFolderRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<lro::model::Operation>> {
        self.inner.rename_folder(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn get_storage_layout(
        &self,
        req: crate::model::GetStorageLayoutRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StorageLayout>> {
        self.inner.get_storage_layout(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn create_managed_folder(
        &self,
        req: crate::model::CreateManagedFolderRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ManagedFolder>> {
        self.inner.create_managed_folder(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn delete_managed_folder(
        &self,
        req: crate::model::DeleteManagedFolderRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_managed_folder(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn get_managed_folder(
        &self,
        req: crate::model::GetManagedFolderRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ManagedFolder>> {
        self.inner.get_managed_folder(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn list_managed_folders(
        &self,
        req: crate::model::ListManagedFoldersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListManagedFoldersResponse>> {
        self.inner.list_managed_folders(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn create_anywhere_cache(
        &self,
        req: crate::model::CreateAnywhereCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<lro::model::Operation>> {
        self.inner.create_anywhere_cache(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn update_anywhere_cache(
        &self,
        req: crate::model::UpdateAnywhereCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<lro::model::Operation>> {
        self.inner.update_anywhere_cache(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn disable_anywhere_cache(
        &self,
        req: crate::model::DisableAnywhereCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AnywhereCache>> {
        self.inner.disable_anywhere_cache(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn pause_anywhere_cache(
        &self,
        req: crate::model::PauseAnywhereCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AnywhereCache>> {
        self.inner.pause_anywhere_cache(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn resume_anywhere_cache(
        &self,
        req: crate::model::ResumeAnywhereCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AnywhereCache>> {
        self.inner.resume_anywhere_cache(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn get_anywhere_cache(
        &self,
        req: crate::model::GetAnywhereCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AnywhereCache>> {
        self.inner.get_anywhere_cache(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn list_anywhere_caches(
        &self,
        req: crate::model::ListAnywhereCachesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListAnywhereCachesResponse>> {
        self.inner.list_anywhere_caches(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn get_project_intelligence_config(
        &self,
        req: crate::model::GetProjectIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IntelligenceConfig>> {
        self.inner.get_project_intelligence_config(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn update_project_intelligence_config(
        &self,
        req: crate::model::UpdateProjectIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IntelligenceConfig>> {
        self.inner.update_project_intelligence_config(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn get_folder_intelligence_config(
        &self,
        req: crate::model::GetFolderIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IntelligenceConfig>> {
        self.inner.get_folder_intelligence_config(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn update_folder_intelligence_config(
        &self,
        req: crate::model::UpdateFolderIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IntelligenceConfig>> {
        self.inner.update_folder_intelligence_config(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn get_organization_intelligence_config(
        &self,
        req: crate::model::GetOrganizationIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IntelligenceConfig>> {
        self.inner.get_organization_intelligence_config(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn update_organization_intelligence_config(
        &self,
        req: crate::model::UpdateOrganizationIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IntelligenceConfig>> {
        self.inner.update_organization_intelligence_config(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn get_iam_policy(
        &self,
        req: crate::model::GetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Policy>> {
        self.inner.get_iam_policy(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn set_iam_policy(
        &self,
        req: crate::model::SetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Policy>> {
        self.inner.set_iam_policy(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn test_iam_permissions(
        &self,
        req: crate::model::TestIamPermissionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TestIamPermissionsResponse>> {
        self.inner.test_iam_permissions(req, options).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    async fn get_operation(
        &self,
        req: lro::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<lro::model::Operation>> {
        self.inner.get_operation(req, options).await
    }

    fn get_polling_error_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        self.inner.get_polling_error_policy(options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        self.inner.get_polling_backoff_policy(options)
    }
}
