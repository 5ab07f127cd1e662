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

use super::google::iam::v1 as iam;
use super::google::longrunning;
use super::google::storage::control::v2 as control;
use super::google::storage::v2;
use super::{MockOperations, MockStorage, MockStorageControl};
use async_trait::async_trait;
use std::any::Any;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A canned result, returned by the next call to a mock.
///
/// A mock returns the value if its type is the response type of the method
/// called. A [tonic::Status] is returned as the RPC error. Any other value
/// fails the call with `INVALID_ARGUMENT`.
pub struct Canned {
    type_name: &'static str,
    value: Box<dyn Any + Send>,
}

impl Canned {
    pub fn response<T: Any + Send>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            value: Box::new(value),
        }
    }

    pub fn error(status: tonic::Status) -> Self {
        Self::response(status)
    }
}

impl std::fmt::Debug for Canned {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canned")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// A request received by a mock.
#[derive(Clone)]
pub struct Received {
    method: &'static str,
    metadata: tonic::metadata::MetadataMap,
    message: Arc<dyn Any + Send + Sync>,
}

impl Received {
    /// The method name, such as `GetBucket`.
    pub fn method(&self) -> &str {
        self.method
    }

    /// The request metadata, including the `x-goog-*` headers.
    pub fn metadata(&self) -> &tonic::metadata::MetadataMap {
        &self.metadata
    }

    /// The request message, if its type is `T`.
    pub fn message<T: Any>(&self) -> Option<&T> {
        self.message.downcast_ref::<T>()
    }
}

impl std::fmt::Debug for Received {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Received")
            .field("method", &self.method)
            .field("metadata", &self.metadata)
            .finish()
    }
}

#[derive(Default)]
struct State {
    canned: VecDeque<Canned>,
    received: Vec<Received>,
}

/// The FIFO queue shared by a mock and the services it runs.
#[derive(Clone, Default)]
pub(crate) struct Queue {
    state: Arc<Mutex<State>>,
}

impl Queue {
    fn lock(&self) -> MutexGuard<'_, State> {
        // A test panicking while holding the lock leaves a valid state.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn push(&self, canned: Canned) {
        self.lock().canned.push_back(canned);
    }

    pub(crate) fn set(&self, canned: impl IntoIterator<Item = Canned>) {
        self.lock().canned = canned.into_iter().collect();
    }

    pub(crate) fn reset(&self) {
        let mut state = self.lock();
        state.canned.clear();
        state.received.clear();
    }

    pub(crate) fn received(&self) -> Vec<Received> {
        self.lock().received.clone()
    }

    pub(crate) fn serve<Req, Resp>(
        &self,
        method: &'static str,
        request: tonic::Request<Req>,
    ) -> tonic::Result<tonic::Response<Resp>>
    where
        Req: Send + Sync + 'static,
        Resp: 'static,
    {
        let (metadata, _, message) = request.into_parts();
        let canned = {
            let mut state = self.lock();
            state.received.push(Received {
                method,
                metadata,
                message: Arc::new(message),
            });
            state.canned.pop_front()
        };
        let Some(Canned { type_name, value }) = canned else {
            return Err(unrecognized::<Resp>("None", method));
        };
        let value = match value.downcast::<Resp>() {
            Ok(response) => return Ok(tonic::Response::new(*response)),
            Err(value) => value,
        };
        match value.downcast::<tonic::Status>() {
            Ok(status) => Err(*status),
            Err(_) => Err(unrecognized::<Resp>(type_name, method)),
        }
    }
}

fn unrecognized<Resp>(type_name: &str, method: &str) -> tonic::Status {
    tonic::Status::invalid_argument(format!(
        "Unrecognized response type {type_name} for method {method}, expected {} or tonic::Status",
        std::any::type_name::<Resp>()
    ))
}

#[async_trait]
impl v2::storage_server::Storage for MockStorage {
    async fn delete_bucket(
        &self,
        request: tonic::Request<v2::DeleteBucketRequest>,
    ) -> tonic::Result<tonic::Response<()>> {
        self.queue.serve("DeleteBucket", request)
    }
    async fn get_bucket(
        &self,
        request: tonic::Request<v2::GetBucketRequest>,
    ) -> tonic::Result<tonic::Response<v2::Bucket>> {
        self.queue.serve("GetBucket", request)
    }
    async fn create_bucket(
        &self,
        request: tonic::Request<v2::CreateBucketRequest>,
    ) -> tonic::Result<tonic::Response<v2::Bucket>> {
        self.queue.serve("CreateBucket", request)
    }
    async fn list_buckets(
        &self,
        request: tonic::Request<v2::ListBucketsRequest>,
    ) -> tonic::Result<tonic::Response<v2::ListBucketsResponse>> {
        self.queue.serve("ListBuckets", request)
    }
    async fn lock_bucket_retention_policy(
        &self,
        request: tonic::Request<v2::LockBucketRetentionPolicyRequest>,
    ) -> tonic::Result<tonic::Response<v2::Bucket>> {
        self.queue.serve("LockBucketRetentionPolicy", request)
    }
    async fn get_iam_policy(
        &self,
        request: tonic::Request<iam::GetIamPolicyRequest>,
    ) -> tonic::Result<tonic::Response<iam::Policy>> {
        self.queue.serve("GetIamPolicy", request)
    }
    async fn set_iam_policy(
        &self,
        request: tonic::Request<iam::SetIamPolicyRequest>,
    ) -> tonic::Result<tonic::Response<iam::Policy>> {
        self.queue.serve("SetIamPolicy", request)
    }
    async fn test_iam_permissions(
        &self,
        request: tonic::Request<iam::TestIamPermissionsRequest>,
    ) -> tonic::Result<tonic::Response<iam::TestIamPermissionsResponse>> {
        self.queue.serve("TestIamPermissions", request)
    }
    async fn update_bucket(
        &self,
        request: tonic::Request<v2::UpdateBucketRequest>,
    ) -> tonic::Result<tonic::Response<v2::Bucket>> {
        self.queue.serve("UpdateBucket", request)
    }
    async fn delete_notification_config(
        &self,
        request: tonic::Request<v2::DeleteNotificationConfigRequest>,
    ) -> tonic::Result<tonic::Response<()>> {
        self.queue.serve("DeleteNotificationConfig", request)
    }
    async fn get_notification_config(
        &self,
        request: tonic::Request<v2::GetNotificationConfigRequest>,
    ) -> tonic::Result<tonic::Response<v2::NotificationConfig>> {
        self.queue.serve("GetNotificationConfig", request)
    }
    async fn create_notification_config(
        &self,
        request: tonic::Request<v2::CreateNotificationConfigRequest>,
    ) -> tonic::Result<tonic::Response<v2::NotificationConfig>> {
        self.queue.serve("CreateNotificationConfig", request)
    }
    async fn list_notification_configs(
        &self,
        request: tonic::Request<v2::ListNotificationConfigsRequest>,
    ) -> tonic::Result<tonic::Response<v2::ListNotificationConfigsResponse>> {
        self.queue.serve("ListNotificationConfigs", request)
    }
    async fn compose_object(
        &self,
        request: tonic::Request<v2::ComposeObjectRequest>,
    ) -> tonic::Result<tonic::Response<v2::Object>> {
        self.queue.serve("ComposeObject", request)
    }
    async fn delete_object(
        &self,
        request: tonic::Request<v2::DeleteObjectRequest>,
    ) -> tonic::Result<tonic::Response<()>> {
        self.queue.serve("DeleteObject", request)
    }
    async fn restore_object(
        &self,
        request: tonic::Request<v2::RestoreObjectRequest>,
    ) -> tonic::Result<tonic::Response<v2::Object>> {
        self.queue.serve("RestoreObject", request)
    }
    async fn cancel_resumable_write(
        &self,
        request: tonic::Request<v2::CancelResumableWriteRequest>,
    ) -> tonic::Result<tonic::Response<v2::CancelResumableWriteResponse>> {
        self.queue.serve("CancelResumableWrite", request)
    }
    async fn get_object(
        &self,
        request: tonic::Request<v2::GetObjectRequest>,
    ) -> tonic::Result<tonic::Response<v2::Object>> {
        self.queue.serve("GetObject", request)
    }
    async fn update_object(
        &self,
        request: tonic::Request<v2::UpdateObjectRequest>,
    ) -> tonic::Result<tonic::Response<v2::Object>> {
        self.queue.serve("UpdateObject", request)
    }
    async fn list_objects(
        &self,
        request: tonic::Request<v2::ListObjectsRequest>,
    ) -> tonic::Result<tonic::Response<v2::ListObjectsResponse>> {
        self.queue.serve("ListObjects", request)
    }
    async fn rewrite_object(
        &self,
        request: tonic::Request<v2::RewriteObjectRequest>,
    ) -> tonic::Result<tonic::Response<v2::RewriteResponse>> {
        self.queue.serve("RewriteObject", request)
    }
    async fn start_resumable_write(
        &self,
        request: tonic::Request<v2::StartResumableWriteRequest>,
    ) -> tonic::Result<tonic::Response<v2::StartResumableWriteResponse>> {
        self.queue.serve("StartResumableWrite", request)
    }
    async fn query_write_status(
        &self,
        request: tonic::Request<v2::QueryWriteStatusRequest>,
    ) -> tonic::Result<tonic::Response<v2::QueryWriteStatusResponse>> {
        self.queue.serve("QueryWriteStatus", request)
    }
    async fn move_object(
        &self,
        request: tonic::Request<v2::MoveObjectRequest>,
    ) -> tonic::Result<tonic::Response<v2::Object>> {
        self.queue.serve("MoveObject", request)
    }
    async fn get_service_account(
        &self,
        request: tonic::Request<v2::GetServiceAccountRequest>,
    ) -> tonic::Result<tonic::Response<v2::ServiceAccount>> {
        self.queue.serve("GetServiceAccount", request)
    }
    async fn create_hmac_key(
        &self,
        request: tonic::Request<v2::CreateHmacKeyRequest>,
    ) -> tonic::Result<tonic::Response<v2::CreateHmacKeyResponse>> {
        self.queue.serve("CreateHmacKey", request)
    }
    async fn delete_hmac_key(
        &self,
        request: tonic::Request<v2::DeleteHmacKeyRequest>,
    ) -> tonic::Result<tonic::Response<()>> {
        self.queue.serve("DeleteHmacKey", request)
    }
    async fn get_hmac_key(
        &self,
        request: tonic::Request<v2::GetHmacKeyRequest>,
    ) -> tonic::Result<tonic::Response<v2::HmacKeyMetadata>> {
        self.queue.serve("GetHmacKey", request)
    }
    async fn list_hmac_keys(
        &self,
        request: tonic::Request<v2::ListHmacKeysRequest>,
    ) -> tonic::Result<tonic::Response<v2::ListHmacKeysResponse>> {
        self.queue.serve("ListHmacKeys", request)
    }
    async fn update_hmac_key(
        &self,
        request: tonic::Request<v2::UpdateHmacKeyRequest>,
    ) -> tonic::Result<tonic::Response<v2::HmacKeyMetadata>> {
        self.queue.serve("UpdateHmacKey", request)
    }
}

#[async_trait]
impl control::storage_control_server::StorageControl for MockStorageControl {
    async fn create_folder(
        &self,
        request: tonic::Request<control::CreateFolderRequest>,
    ) -> tonic::Result<tonic::Response<control::Folder>> {
        self.queue.serve("CreateFolder", request)
    }
    async fn delete_folder(
        &self,
        request: tonic::Request<control::DeleteFolderRequest>,
    ) -> tonic::Result<tonic::Response<()>> {
        self.queue.serve("DeleteFolder", request)
    }
    async fn delete_folder_recursive(
        &self,
        request: tonic::Request<control::DeleteFolderRecursiveRequest>,
    ) -> tonic::Result<tonic::Response<longrunning::Operation>> {
        self.queue.serve("DeleteFolderRecursive", request)
    }
    async fn get_folder(
        &self,
        request: tonic::Request<control::GetFolderRequest>,
    ) -> tonic::Result<tonic::Response<control::Folder>> {
        self.queue.serve("GetFolder", request)
    }
    async fn list_folders(
        &self,
        request: tonic::Request<control::ListFoldersRequest>,
    ) -> tonic::Result<tonic::Response<control::ListFoldersResponse>> {
        self.queue.serve("ListFolders", request)
    }
    async fn rename_folder(
        &self,
        request: tonic::Request<control::RenameFolderRequest>,
    ) -> tonic::Result<tonic::Response<longrunning::Operation>> {
        self.queue.serve("RenameFolder", request)
    }
    async fn get_storage_layout(
        &self,
        request: tonic::Request<control::GetStorageLayoutRequest>,
    ) -> tonic::Result<tonic::Response<control::StorageLayout>> {
        self.queue.serve("GetStorageLayout", request)
    }
    async fn create_managed_folder(
        &self,
        request: tonic::Request<control::CreateManagedFolderRequest>,
    ) -> tonic::Result<tonic::Response<control::ManagedFolder>> {
        self.queue.serve("CreateManagedFolder", request)
    }
    async fn delete_managed_folder(
        &self,
        request: tonic::Request<control::DeleteManagedFolderRequest>,
    ) -> tonic::Result<tonic::Response<()>> {
        self.queue.serve("DeleteManagedFolder", request)
    }
    async fn get_managed_folder(
        &self,
        request: tonic::Request<control::GetManagedFolderRequest>,
    ) -> tonic::Result<tonic::Response<control::ManagedFolder>> {
        self.queue.serve("GetManagedFolder", request)
    }
    async fn list_managed_folders(
        &self,
        request: tonic::Request<control::ListManagedFoldersRequest>,
    ) -> tonic::Result<tonic::Response<control::ListManagedFoldersResponse>> {
        self.queue.serve("ListManagedFolders", request)
    }
    async fn create_anywhere_cache(
        &self,
        request: tonic::Request<control::CreateAnywhereCacheRequest>,
    ) -> tonic::Result<tonic::Response<longrunning::Operation>> {
        self.queue.serve("CreateAnywhereCache", request)
    }
    async fn update_anywhere_cache(
        &self,
        request: tonic::Request<control::UpdateAnywhereCacheRequest>,
    ) -> tonic::Result<tonic::Response<longrunning::Operation>> {
        self.queue.serve("UpdateAnywhereCache", request)
    }
    async fn disable_anywhere_cache(
        &self,
        request: tonic::Request<control::DisableAnywhereCacheRequest>,
    ) -> tonic::Result<tonic::Response<control::AnywhereCache>> {
        self.queue.serve("DisableAnywhereCache", request)
    }
    async fn pause_anywhere_cache(
        &self,
        request: tonic::Request<control::PauseAnywhereCacheRequest>,
    ) -> tonic::Result<tonic::Response<control::AnywhereCache>> {
        self.queue.serve("PauseAnywhereCache", request)
    }
    async fn resume_anywhere_cache(
        &self,
        request: tonic::Request<control::ResumeAnywhereCacheRequest>,
    ) -> tonic::Result<tonic::Response<control::AnywhereCache>> {
        self.queue.serve("ResumeAnywhereCache", request)
    }
    async fn get_anywhere_cache(
        &self,
        request: tonic::Request<control::GetAnywhereCacheRequest>,
    ) -> tonic::Result<tonic::Response<control::AnywhereCache>> {
        self.queue.serve("GetAnywhereCache", request)
    }
    async fn list_anywhere_caches(
        &self,
        request: tonic::Request<control::ListAnywhereCachesRequest>,
    ) -> tonic::Result<tonic::Response<control::ListAnywhereCachesResponse>> {
        self.queue.serve("ListAnywhereCaches", request)
    }
    async fn get_project_intelligence_config(
        &self,
        request: tonic::Request<control::GetProjectIntelligenceConfigRequest>,
    ) -> tonic::Result<tonic::Response<control::IntelligenceConfig>> {
        self.queue.serve("GetProjectIntelligenceConfig", request)
    }
    async fn update_project_intelligence_config(
        &self,
        request: tonic::Request<control::UpdateProjectIntelligenceConfigRequest>,
    ) -> tonic::Result<tonic::Response<control::IntelligenceConfig>> {
        self.queue.serve("UpdateProjectIntelligenceConfig", request)
    }
    async fn get_folder_intelligence_config(
        &self,
        request: tonic::Request<control::GetFolderIntelligenceConfigRequest>,
    ) -> tonic::Result<tonic::Response<control::IntelligenceConfig>> {
        self.queue.serve("GetFolderIntelligenceConfig", request)
    }
    async fn update_folder_intelligence_config(
        &self,
        request: tonic::Request<control::UpdateFolderIntelligenceConfigRequest>,
    ) -> tonic::Result<tonic::Response<control::IntelligenceConfig>> {
        self.queue.serve("UpdateFolderIntelligenceConfig", request)
    }
    async fn get_organization_intelligence_config(
        &self,
        request: tonic::Request<control::GetOrganizationIntelligenceConfigRequest>,
    ) -> tonic::Result<tonic::Response<control::IntelligenceConfig>> {
        self.queue.serve("GetOrganizationIntelligenceConfig", request)
    }
    async fn update_organization_intelligence_config(
        &self,
        request: tonic::Request<control::UpdateOrganizationIntelligenceConfigRequest>,
    ) -> tonic::Result<tonic::Response<control::IntelligenceConfig>> {
        self.queue.serve("UpdateOrganizationIntelligenceConfig", request)
    }
    async fn get_iam_policy(
        &self,
        request: tonic::Request<iam::GetIamPolicyRequest>,
    ) -> tonic::Result<tonic::Response<iam::Policy>> {
        self.queue.serve("GetIamPolicy", request)
    }
    async fn set_iam_policy(
        &self,
        request: tonic::Request<iam::SetIamPolicyRequest>,
    ) -> tonic::Result<tonic::Response<iam::Policy>> {
        self.queue.serve("SetIamPolicy", request)
    }
    async fn test_iam_permissions(
        &self,
        request: tonic::Request<iam::TestIamPermissionsRequest>,
    ) -> tonic::Result<tonic::Response<iam::TestIamPermissionsResponse>> {
        self.queue.serve("TestIamPermissions", request)
    }
}

#[async_trait]
impl longrunning::operations_server::Operations for MockOperations {
    async fn get_operation(
        &self,
        request: tonic::Request<longrunning::GetOperationRequest>,
    ) -> tonic::Result<tonic::Response<longrunning::Operation>> {
        self.queue.serve("GetOperation", request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn request(name: &str) -> tonic::Request<v2::GetBucketRequest> {
        tonic::Request::new(v2::GetBucketRequest {
            name: name.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn fifo() -> anyhow::Result<()> {
        let queue = Queue::default();
        queue.push(Canned::response(v2::Bucket {
            name: "first".into(),
            ..Default::default()
        }));
        queue.push(Canned::response(v2::Bucket {
            name: "second".into(),
            ..Default::default()
        }));
        let got = queue.serve::<_, v2::Bucket>("GetBucket", request("a"))?;
        assert_eq!(got.into_inner().name, "first");
        let got = queue.serve::<_, v2::Bucket>("GetBucket", request("b"))?;
        assert_eq!(got.into_inner().name, "second");

        let received = queue.received();
        let names = received
            .iter()
            .map(|r| r.message::<v2::GetBucketRequest>().map(|m| m.name.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(names, vec![Some("a"), Some("b")]);
        assert!(received.iter().all(|r| r.method() == "GetBucket"), "{received:?}");
        Ok(())
    }

    #[test]
    fn status() {
        let queue = Queue::default();
        queue.push(Canned::error(tonic::Status::not_found("missing")));
        let got = queue.serve::<_, v2::Bucket>("GetBucket", request("a"));
        let status = got.err().map(|s| (s.code(), s.message().to_string()));
        assert_eq!(status, Some((tonic::Code::NotFound, "missing".to_string())));
    }

    #[test_case(None; "empty queue")]
    #[test_case(Some(Canned::response(v2::Object::default())); "wrong type")]
    fn invalid(canned: Option<Canned>) {
        let queue = Queue::default();
        let want_type = canned.as_ref().map(|c| c.type_name).unwrap_or("None");
        if let Some(c) = canned {
            queue.push(c);
        }
        let status = match queue.serve::<_, v2::Bucket>("GetBucket", request("a")) {
            Ok(r) => panic!("expected an error, got={r:?}"),
            Err(s) => s,
        };
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        let want = format!(
            "Unrecognized response type {want_type} for method GetBucket, expected {} or tonic::Status",
            std::any::type_name::<v2::Bucket>()
        );
        assert_eq!(status.message(), want);
        assert_eq!(queue.received().len(), 1);
    }

    #[test]
    fn set_and_reset() {
        let queue = Queue::default();
        queue.push(Canned::error(tonic::Status::internal("dropped")));
        queue.set([
            Canned::error(tonic::Status::unavailable("try-again")),
            Canned::response(v2::Bucket::default()),
        ]);
        let got = queue.serve::<_, v2::Bucket>("GetBucket", request("a"));
        assert_eq!(got.err().map(|s| s.code()), Some(tonic::Code::Unavailable));
        let got = queue.serve::<_, v2::Bucket>("GetBucket", request("a"));
        assert!(got.is_ok(), "{got:?}");

        queue.push(Canned::response(v2::Bucket::default()));
        queue.reset();
        assert!(queue.received().is_empty());
        let got = queue.serve::<_, v2::Bucket>("GetBucket", request("a"));
        assert_eq!(got.err().map(|s| s.code()), Some(tonic::Code::InvalidArgument));
    }
}
