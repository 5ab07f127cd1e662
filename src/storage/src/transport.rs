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

//! The gRPC transport for the clients.

pub(crate) mod http;

use crate::Result;
use crate::info;
use gax::response::Response;
use gaxi::prost::{FromProto, ToProto};

pub(crate) const DEFAULT_HOST: &str = "https://storage.googleapis.com";

fn to_model<P, T>(response: Response<P>) -> Result<Response<T>>
where
    P: FromProto<T>,
{
    let (parts, body) = response.into_parts();
    Ok(Response::from_parts(parts, body.cnv()?))
}

/// Implements [Storage](super::stub::Storage) using a [gaxi::grpc::Client].
#[derive(Clone)]
pub struct Storage {
    inner: gaxi::grpc::Client,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Storage")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Storage {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::grpc::Client::new(config, DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::Storage for Storage {
    async fn delete_bucket(
        &self,
        req: crate::model::DeleteBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let idempotent = req.if_metageneration_match.is_some();
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "DeleteBucket");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/DeleteBucket");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.name).unwrap_or_default()),
        ]);
        let request: crate::google::storage::v2::DeleteBucketRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<(), ()>)
    }

    async fn get_bucket(
        &self,
        req: crate::model::GetBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Bucket>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "GetBucket");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/GetBucket");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.name).unwrap_or_default()),
        ]);
        let request: crate::google::storage::v2::GetBucketRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::Bucket, crate::model::Bucket>)
    }

    async fn create_bucket(
        &self,
        req: crate::model::CreateBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Bucket>> {
        let idempotent = false;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "CreateBucket");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/CreateBucket");
        let x_goog_request_params = gaxi::routing::format(&[
            ("project", req.parent.as_str()),
        ]);
        let request: crate::google::storage::v2::CreateBucketRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::Bucket, crate::model::Bucket>)
    }

    async fn list_buckets(
        &self,
        req: crate::model::ListBucketsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ListBucketsResponse>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "ListBuckets");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/ListBuckets");
        let x_goog_request_params = gaxi::routing::format(&[
            ("project", req.parent.as_str()),
        ]);
        let request: crate::google::storage::v2::ListBucketsRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::ListBucketsResponse, crate::model::ListBucketsResponse>)
    }

    async fn lock_bucket_retention_policy(
        &self,
        req: crate::model::LockBucketRetentionPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Bucket>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "LockBucketRetentionPolicy");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/LockBucketRetentionPolicy");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.bucket).unwrap_or_default()),
        ]);
        let request: crate::google::storage::v2::LockBucketRetentionPolicyRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::Bucket, crate::model::Bucket>)
    }

    async fn get_iam_policy(
        &self,
        req: crate::model::GetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Policy>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "GetIamPolicy");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/GetIamPolicy");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.resource).unwrap_or_default()),
        ]);
        let request: crate::google::iam::v1::GetIamPolicyRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::iam::v1::Policy, crate::model::Policy>)
    }

    async fn set_iam_policy(
        &self,
        req: crate::model::SetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Policy>> {
        let idempotent = req.policy.as_ref().is_some_and(|p| !p.etag.is_empty());
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "SetIamPolicy");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/SetIamPolicy");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.resource).unwrap_or_default()),
        ]);
        let request: crate::google::iam::v1::SetIamPolicyRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::iam::v1::Policy, crate::model::Policy>)
    }

    async fn test_iam_permissions(
        &self,
        req: crate::model::TestIamPermissionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::TestIamPermissionsResponse>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "TestIamPermissions");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/TestIamPermissions");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.resource).unwrap_or_default()),
        ]);
        let request: crate::google::iam::v1::TestIamPermissionsRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::iam::v1::TestIamPermissionsResponse, crate::model::TestIamPermissionsResponse>)
    }

    async fn update_bucket(
        &self,
        req: crate::model::UpdateBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Bucket>> {
        let idempotent = req.if_metageneration_match.is_some();
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "UpdateBucket");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/UpdateBucket");
        let x_goog_request_params = gaxi::routing::format(&[
            (
                "bucket",
                req.bucket
                    .as_ref()
                    .and_then(|v| gaxi::routing::find_bucket(&v.name))
                    .unwrap_or_default(),
            ),
        ]);
        let request: crate::google::storage::v2::UpdateBucketRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::Bucket, crate::model::Bucket>)
    }

    async fn delete_notification_config(
        &self,
        req: crate::model::DeleteNotificationConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let idempotent = false;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "DeleteNotificationConfig");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/DeleteNotificationConfig");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.name).unwrap_or_default()),
        ]);
        let request: crate::google::storage::v2::DeleteNotificationConfigRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<(), ()>)
    }

    async fn get_notification_config(
        &self,
        req: crate::model::GetNotificationConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::NotificationConfig>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "GetNotificationConfig");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/GetNotificationConfig");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.name).unwrap_or_default()),
        ]);
        let request: crate::google::storage::v2::GetNotificationConfigRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::NotificationConfig, crate::model::NotificationConfig>)
    }

    async fn create_notification_config(
        &self,
        req: crate::model::CreateNotificationConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::NotificationConfig>> {
        let idempotent = false;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "CreateNotificationConfig");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/CreateNotificationConfig");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.parent).unwrap_or_default()),
        ]);
        let request: crate::google::storage::v2::CreateNotificationConfigRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::NotificationConfig, crate::model::NotificationConfig>)
    }

    async fn list_notification_configs(
        &self,
        req: crate::model::ListNotificationConfigsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ListNotificationConfigsResponse>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "ListNotificationConfigs");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/ListNotificationConfigs");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.parent).unwrap_or_default()),
        ]);
        let request: crate::google::storage::v2::ListNotificationConfigsRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::ListNotificationConfigsResponse, crate::model::ListNotificationConfigsResponse>)
    }

    async fn compose_object(
        &self,
        req: crate::model::ComposeObjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Object>> {
        let idempotent = req.if_generation_match.is_some();
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "ComposeObject");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/ComposeObject");
        let x_goog_request_params = gaxi::routing::format(&[
            (
                "bucket",
                req.destination
                    .as_ref()
                    .and_then(|v| gaxi::routing::find_bucket(&v.bucket))
                    .unwrap_or_default(),
            ),
        ]);
        let request: crate::google::storage::v2::ComposeObjectRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::Object, crate::model::Object>)
    }

    async fn delete_object(
        &self,
        req: crate::model::DeleteObjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let idempotent = req.generation != 0 || req.if_generation_match.is_some();
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "DeleteObject");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/DeleteObject");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.bucket).unwrap_or_default()),
        ]);
        let request: crate::google::storage::v2::DeleteObjectRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<(), ()>)
    }

    async fn restore_object(
        &self,
        req: crate::model::RestoreObjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Object>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "RestoreObject");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/RestoreObject");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.bucket).unwrap_or_default()),
        ]);
        let request: crate::google::storage::v2::RestoreObjectRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::Object, crate::model::Object>)
    }

    async fn cancel_resumable_write(
        &self,
        req: crate::model::CancelResumableWriteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::CancelResumableWriteResponse>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "CancelResumableWrite");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/CancelResumableWrite");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.upload_id).unwrap_or_default()),
        ]);
        let request: crate::google::storage::v2::CancelResumableWriteRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::CancelResumableWriteResponse, crate::model::CancelResumableWriteResponse>)
    }

    async fn get_object(
        &self,
        req: crate::model::GetObjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Object>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "GetObject");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/GetObject");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.bucket).unwrap_or_default()),
        ]);
        let request: crate::google::storage::v2::GetObjectRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::Object, crate::model::Object>)
    }

    async fn update_object(
        &self,
        req: crate::model::UpdateObjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Object>> {
        let idempotent = req.if_metageneration_match.is_some();
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "UpdateObject");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/UpdateObject");
        let x_goog_request_params = gaxi::routing::format(&[
            (
                "bucket",
                req.object
                    .as_ref()
                    .and_then(|v| gaxi::routing::find_bucket(&v.bucket))
                    .unwrap_or_default(),
            ),
        ]);
        let request: crate::google::storage::v2::UpdateObjectRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::Object, crate::model::Object>)
    }

    async fn list_objects(
        &self,
        req: crate::model::ListObjectsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ListObjectsResponse>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "ListObjects");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/ListObjects");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.parent).unwrap_or_default()),
        ]);
        let request: crate::google::storage::v2::ListObjectsRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::ListObjectsResponse, crate::model::ListObjectsResponse>)
    }

    async fn rewrite_object(
        &self,
        req: crate::model::RewriteObjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::RewriteResponse>> {
        let idempotent = req.if_generation_match.is_some();
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "RewriteObject");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/RewriteObject");
        let x_goog_request_params = gaxi::routing::format(&[
            ("source_bucket", gaxi::routing::find_bucket(&req.source_bucket).unwrap_or_default()),
            ("bucket", gaxi::routing::find_bucket(&req.destination_bucket).unwrap_or_default()),
        ]);
        let request: crate::google::storage::v2::RewriteObjectRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::RewriteResponse, crate::model::RewriteResponse>)
    }

    async fn start_resumable_write(
        &self,
        req: crate::model::StartResumableWriteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::StartResumableWriteResponse>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "StartResumableWrite");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/StartResumableWrite");
        let x_goog_request_params = gaxi::routing::format(&[
            (
                "bucket",
                req.write_object_spec
                    .as_ref()
                    .and_then(|v| v.resource.as_ref())
                    .and_then(|v| gaxi::routing::find_bucket(&v.bucket))
                    .unwrap_or_default(),
            ),
        ]);
        let request: crate::google::storage::v2::StartResumableWriteRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::StartResumableWriteResponse, crate::model::StartResumableWriteResponse>)
    }

    async fn query_write_status(
        &self,
        req: crate::model::QueryWriteStatusRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::QueryWriteStatusResponse>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "QueryWriteStatus");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/QueryWriteStatus");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.upload_id).unwrap_or_default()),
        ]);
        let request: crate::google::storage::v2::QueryWriteStatusRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::QueryWriteStatusResponse, crate::model::QueryWriteStatusResponse>)
    }

    async fn move_object(
        &self,
        req: crate::model::MoveObjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Object>> {
        let idempotent = req.if_generation_match.is_some();
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "MoveObject");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/MoveObject");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.bucket).unwrap_or_default()),
        ]);
        let request: crate::google::storage::v2::MoveObjectRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::Object, crate::model::Object>)
    }

    async fn get_service_account(
        &self,
        req: crate::model::GetServiceAccountRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ServiceAccount>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "GetServiceAccount");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/GetServiceAccount");
        let x_goog_request_params = gaxi::routing::format(&[
            ("project", req.project.as_str()),
        ]);
        let request: crate::google::storage::v2::GetServiceAccountRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::ServiceAccount, crate::model::ServiceAccount>)
    }

    async fn create_hmac_key(
        &self,
        req: crate::model::CreateHmacKeyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::CreateHmacKeyResponse>> {
        let idempotent = false;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "CreateHmacKey");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/CreateHmacKey");
        let x_goog_request_params = gaxi::routing::format(&[
            ("project", req.project.as_str()),
        ]);
        let request: crate::google::storage::v2::CreateHmacKeyRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::CreateHmacKeyResponse, crate::model::CreateHmacKeyResponse>)
    }

    async fn delete_hmac_key(
        &self,
        req: crate::model::DeleteHmacKeyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let idempotent = false;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "DeleteHmacKey");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/DeleteHmacKey");
        let x_goog_request_params = gaxi::routing::format(&[
            ("project", req.project.as_str()),
        ]);
        let request: crate::google::storage::v2::DeleteHmacKeyRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<(), ()>)
    }

    async fn get_hmac_key(
        &self,
        req: crate::model::GetHmacKeyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::HmacKeyMetadata>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "GetHmacKey");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/GetHmacKey");
        let x_goog_request_params = gaxi::routing::format(&[
            ("project", req.project.as_str()),
        ]);
        let request: crate::google::storage::v2::GetHmacKeyRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::HmacKeyMetadata, crate::model::HmacKeyMetadata>)
    }

    async fn list_hmac_keys(
        &self,
        req: crate::model::ListHmacKeysRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ListHmacKeysResponse>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "ListHmacKeys");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/ListHmacKeys");
        let x_goog_request_params = gaxi::routing::format(&[
            ("project", req.project.as_str()),
        ]);
        let request: crate::google::storage::v2::ListHmacKeysRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::ListHmacKeysResponse, crate::model::ListHmacKeysResponse>)
    }

    async fn update_hmac_key(
        &self,
        req: crate::model::UpdateHmacKeyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::HmacKeyMetadata>> {
        let idempotent = req.hmac_key.as_ref().is_some_and(|k| !k.etag.is_empty());
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.v2.Storage", "UpdateHmacKey");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/UpdateHmacKey");
        let x_goog_request_params = gaxi::routing::format(&[
            (
                "project",
                req.hmac_key
                    .as_ref()
                    .map(|v| v.project.as_str())
                    .unwrap_or_default(),
            ),
        ]);
        let request: crate::google::storage::v2::UpdateHmacKeyRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::v2::HmacKeyMetadata, crate::model::HmacKeyMetadata>)
    }
}

/// Implements [StorageControl](super::stub::StorageControl) using a [gaxi::grpc::Client].
#[derive(Clone)]
pub struct StorageControl {
    inner: gaxi::grpc::Client,
}

impl std::fmt::Debug for StorageControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("StorageControl")
            .field("inner", &self.inner)
            .finish()
    }
}

impl StorageControl {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::grpc::Client::new(config, DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::StorageControl for StorageControl {
    async fn create_folder(
        &self,
        mut req: crate::model::CreateFolderRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Folder>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "CreateFolder");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/CreateFolder");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.parent).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::CreateFolderRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::Folder, crate::model::Folder>)
    }

    async fn delete_folder(
        &self,
        mut req: crate::model::DeleteFolderRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "DeleteFolder");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/DeleteFolder");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.name).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::DeleteFolderRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<(), ()>)
    }

    async fn delete_folder_recursive(
        &self,
        mut req: crate::model::DeleteFolderRecursiveRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<lro::model::Operation>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "DeleteFolderRecursive");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/DeleteFolderRecursive");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.name).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::DeleteFolderRecursiveRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::longrunning::Operation, lro::model::Operation>)
    }

    async fn get_folder(
        &self,
        mut req: crate::model::GetFolderRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Folder>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "GetFolder");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/GetFolder");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.name).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::GetFolderRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::Folder, crate::model::Folder>)
    }

    async fn list_folders(
        &self,
        mut req: crate::model::ListFoldersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ListFoldersResponse>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "ListFolders");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/ListFolders");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.parent).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::ListFoldersRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::ListFoldersResponse, crate::model::ListFoldersResponse>)
    }

    async fn rename_folder(
        &self,
        mut req: crate::model::RenameFolderRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<lro::model::Operation>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "RenameFolder");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/RenameFolder");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.name).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::RenameFolderRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::longrunning::Operation, lro::model::Operation>)
    }

    async fn get_storage_layout(
        &self,
        mut req: crate::model::GetStorageLayoutRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::StorageLayout>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "GetStorageLayout");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/GetStorageLayout");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.name).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::GetStorageLayoutRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::StorageLayout, crate::model::StorageLayout>)
    }

    async fn create_managed_folder(
        &self,
        mut req: crate::model::CreateManagedFolderRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ManagedFolder>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "CreateManagedFolder");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/CreateManagedFolder");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.parent).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::CreateManagedFolderRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::ManagedFolder, crate::model::ManagedFolder>)
    }

    async fn delete_managed_folder(
        &self,
        mut req: crate::model::DeleteManagedFolderRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "DeleteManagedFolder");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/DeleteManagedFolder");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.name).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::DeleteManagedFolderRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<(), ()>)
    }

    async fn get_managed_folder(
        &self,
        mut req: crate::model::GetManagedFolderRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ManagedFolder>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "GetManagedFolder");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/GetManagedFolder");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.name).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::GetManagedFolderRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::ManagedFolder, crate::model::ManagedFolder>)
    }

    async fn list_managed_folders(
        &self,
        mut req: crate::model::ListManagedFoldersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ListManagedFoldersResponse>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "ListManagedFolders");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/ListManagedFolders");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.parent).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::ListManagedFoldersRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::ListManagedFoldersResponse, crate::model::ListManagedFoldersResponse>)
    }

    async fn create_anywhere_cache(
        &self,
        mut req: crate::model::CreateAnywhereCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<lro::model::Operation>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "CreateAnywhereCache");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/CreateAnywhereCache");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.parent).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::CreateAnywhereCacheRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::longrunning::Operation, lro::model::Operation>)
    }

    async fn update_anywhere_cache(
        &self,
        mut req: crate::model::UpdateAnywhereCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<lro::model::Operation>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "UpdateAnywhereCache");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/UpdateAnywhereCache");
        let x_goog_request_params = gaxi::routing::format(&[
            (
                "bucket",
                req.anywhere_cache
                    .as_ref()
                    .and_then(|v| gaxi::routing::find_bucket(&v.name))
                    .unwrap_or_default(),
            ),
        ]);
        let request: crate::google::storage::control::v2::UpdateAnywhereCacheRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::longrunning::Operation, lro::model::Operation>)
    }

    async fn disable_anywhere_cache(
        &self,
        mut req: crate::model::DisableAnywhereCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::AnywhereCache>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "DisableAnywhereCache");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/DisableAnywhereCache");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.name).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::DisableAnywhereCacheRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::AnywhereCache, crate::model::AnywhereCache>)
    }

    async fn pause_anywhere_cache(
        &self,
        mut req: crate::model::PauseAnywhereCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::AnywhereCache>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "PauseAnywhereCache");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/PauseAnywhereCache");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.name).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::PauseAnywhereCacheRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::AnywhereCache, crate::model::AnywhereCache>)
    }

    async fn resume_anywhere_cache(
        &self,
        mut req: crate::model::ResumeAnywhereCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::AnywhereCache>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "ResumeAnywhereCache");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/ResumeAnywhereCache");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.name).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::ResumeAnywhereCacheRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::AnywhereCache, crate::model::AnywhereCache>)
    }

    async fn get_anywhere_cache(
        &self,
        mut req: crate::model::GetAnywhereCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::AnywhereCache>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "GetAnywhereCache");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/GetAnywhereCache");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.name).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::GetAnywhereCacheRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::AnywhereCache, crate::model::AnywhereCache>)
    }

    async fn list_anywhere_caches(
        &self,
        mut req: crate::model::ListAnywhereCachesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ListAnywhereCachesResponse>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "ListAnywhereCaches");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/ListAnywhereCaches");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.parent).unwrap_or_default()),
        ]);
        let request: crate::google::storage::control::v2::ListAnywhereCachesRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::ListAnywhereCachesResponse, crate::model::ListAnywhereCachesResponse>)
    }

    async fn get_project_intelligence_config(
        &self,
        req: crate::model::GetProjectIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::IntelligenceConfig>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "GetProjectIntelligenceConfig");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/GetProjectIntelligenceConfig");
        let x_goog_request_params = gaxi::routing::format(&[
            ("name", req.name.as_str()),
        ]);
        let request: crate::google::storage::control::v2::GetProjectIntelligenceConfigRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::IntelligenceConfig, crate::model::IntelligenceConfig>)
    }

    async fn update_project_intelligence_config(
        &self,
        mut req: crate::model::UpdateProjectIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::IntelligenceConfig>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "UpdateProjectIntelligenceConfig");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/UpdateProjectIntelligenceConfig");
        let x_goog_request_params = gaxi::routing::format(&[
            (
                "intelligence_config.name",
                req.intelligence_config
                    .as_ref()
                    .map(|v| v.name.as_str())
                    .unwrap_or_default(),
            ),
        ]);
        let request: crate::google::storage::control::v2::UpdateProjectIntelligenceConfigRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::IntelligenceConfig, crate::model::IntelligenceConfig>)
    }

    async fn get_folder_intelligence_config(
        &self,
        req: crate::model::GetFolderIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::IntelligenceConfig>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "GetFolderIntelligenceConfig");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/GetFolderIntelligenceConfig");
        let x_goog_request_params = gaxi::routing::format(&[
            ("name", req.name.as_str()),
        ]);
        let request: crate::google::storage::control::v2::GetFolderIntelligenceConfigRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::IntelligenceConfig, crate::model::IntelligenceConfig>)
    }

    async fn update_folder_intelligence_config(
        &self,
        mut req: crate::model::UpdateFolderIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::IntelligenceConfig>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "UpdateFolderIntelligenceConfig");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/UpdateFolderIntelligenceConfig");
        let x_goog_request_params = gaxi::routing::format(&[
            (
                "intelligence_config.name",
                req.intelligence_config
                    .as_ref()
                    .map(|v| v.name.as_str())
                    .unwrap_or_default(),
            ),
        ]);
        let request: crate::google::storage::control::v2::UpdateFolderIntelligenceConfigRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::IntelligenceConfig, crate::model::IntelligenceConfig>)
    }

    async fn get_organization_intelligence_config(
        &self,
        req: crate::model::GetOrganizationIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::IntelligenceConfig>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "GetOrganizationIntelligenceConfig");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/GetOrganizationIntelligenceConfig");
        let x_goog_request_params = gaxi::routing::format(&[
            ("name", req.name.as_str()),
        ]);
        let request: crate::google::storage::control::v2::GetOrganizationIntelligenceConfigRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::IntelligenceConfig, crate::model::IntelligenceConfig>)
    }

    async fn update_organization_intelligence_config(
        &self,
        mut req: crate::model::UpdateOrganizationIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::IntelligenceConfig>> {
        gaxi::request_id::populate(&mut req.request_id);
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "UpdateOrganizationIntelligenceConfig");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/UpdateOrganizationIntelligenceConfig");
        let x_goog_request_params = gaxi::routing::format(&[
            (
                "intelligence_config.name",
                req.intelligence_config
                    .as_ref()
                    .map(|v| v.name.as_str())
                    .unwrap_or_default(),
            ),
        ]);
        let request: crate::google::storage::control::v2::UpdateOrganizationIntelligenceConfigRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::storage::control::v2::IntelligenceConfig, crate::model::IntelligenceConfig>)
    }

    async fn get_iam_policy(
        &self,
        req: crate::model::GetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Policy>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "GetIamPolicy");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/GetIamPolicy");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.resource).unwrap_or_default()),
        ]);
        let request: crate::google::iam::v1::GetIamPolicyRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::iam::v1::Policy, crate::model::Policy>)
    }

    async fn set_iam_policy(
        &self,
        req: crate::model::SetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Policy>> {
        let idempotent = req.policy.as_ref().is_some_and(|p| !p.etag.is_empty());
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "SetIamPolicy");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/SetIamPolicy");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.resource).unwrap_or_default()),
        ]);
        let request: crate::google::iam::v1::SetIamPolicyRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::iam::v1::Policy, crate::model::Policy>)
    }

    async fn test_iam_permissions(
        &self,
        req: crate::model::TestIamPermissionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::TestIamPermissionsResponse>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.storage.control.v2.StorageControl", "TestIamPermissions");
        let path = ::http::uri::PathAndQuery::from_static("/google.storage.control.v2.StorageControl/TestIamPermissions");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.resource).unwrap_or_default()),
        ]);
        let request: crate::google::iam::v1::TestIamPermissionsRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::iam::v1::TestIamPermissionsResponse, crate::model::TestIamPermissionsResponse>)
    }

    async fn get_operation(
        &self,
        req: lro::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<lro::model::Operation>> {
        let idempotent = true;
        let options = gax::options::internal::set_default_idempotency(options, idempotent);
        let method = tonic::GrpcMethod::new("google.longrunning.Operations", "GetOperation");
        let path = ::http::uri::PathAndQuery::from_static("/google.longrunning.Operations/GetOperation");
        let x_goog_request_params = gaxi::routing::format(&[
            ("bucket", gaxi::routing::find_bucket(&req.name).unwrap_or_default()),
        ]);
        let request: crate::google::longrunning::GetOperationRequest = req.to_proto()?;
        self.inner
            .execute(
                method,
                path,
                request,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &x_goog_request_params,
            )
            .await
            .and_then(to_model::<crate::google::longrunning::Operation, lro::model::Operation>)
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
