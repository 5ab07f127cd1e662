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

//! Verify the Storage client sends the requests built by the request
//! builders, and returns the responses and errors from a mock server.

#[cfg(test)]
mod tests {
    use gax::error::rpc::Code;
    use gcs_storage::client::Storage;
    use gcs_storage::model;
    use google_cloud_auth::credentials::anonymous::Builder as Anonymous;
    use storage_grpc_mock::google::iam::v1 as iam;
    use storage_grpc_mock::google::storage::v2;
    use storage_grpc_mock::{MockStorage, Received, start};
    use tokio::task::JoinHandle;

    async fn new_client(mock: &MockStorage) -> anyhow::Result<(Storage, JoinHandle<()>)> {
        let (endpoint, server) = start("127.0.0.1:0", mock.clone()).await?;
        let client = Storage::builder()
            .with_endpoint(endpoint)
            .with_credentials(Anonymous::new().build())
            .build()
            .await?;
        Ok((client, server))
    }

    fn single_request(mock: &MockStorage) -> anyhow::Result<Received> {
        let mut requests = mock.requests();
        if requests.len() != 1 {
            anyhow::bail!("expected a single request, got {requests:?}");
        }
        Ok(requests.remove(0))
    }

    fn routing_header(received: &Received) -> Option<&str> {
        received
            .metadata()
            .get("x-goog-request-params")
            .and_then(|v| v.to_str().ok())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_bucket() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(());
        let (client, _server) = new_client(&mock).await?;
        let _response = client
            .delete_bucket()
            .set_name("projects/_/buckets/test-bucket")
            .send()
            .await?;

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "DeleteBucket");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::DeleteBucketRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_bucket_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .delete_bucket()
            .set_name("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_bucket() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::Bucket {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .get_bucket()
            .set_name("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "GetBucket");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::GetBucketRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_bucket_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .get_bucket()
            .set_name("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_bucket() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::Bucket {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .create_bucket()
            .set_parent("projects/test-project")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "CreateBucket");
        assert_eq!(routing_header(&received), Some("project=projects/test-project"));
        let request = received
            .message::<v2::CreateBucketRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.parent.as_str(), "projects/test-project");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_bucket_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .create_bucket()
            .set_parent("projects/test-project")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_buckets() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::ListBucketsResponse {
            next_page_token: "test-next-page-token".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .list_buckets()
            .set_parent("projects/test-project")
            .send()
            .await?;
        assert_eq!(response.next_page_token, "test-next-page-token");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "ListBuckets");
        assert_eq!(routing_header(&received), Some("project=projects/test-project"));
        let request = received
            .message::<v2::ListBucketsRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.parent.as_str(), "projects/test-project");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_buckets_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .list_buckets()
            .set_parent("projects/test-project")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn lock_bucket_retention_policy() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::Bucket {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .lock_bucket_retention_policy()
            .set_bucket("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "LockBucketRetentionPolicy");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::LockBucketRetentionPolicyRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.bucket.as_str(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn lock_bucket_retention_policy_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .lock_bucket_retention_policy()
            .set_bucket("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_iam_policy() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(iam::Policy::default());
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .get_iam_policy()
            .set_resource("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response, model::Policy::default());

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "GetIamPolicy");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<iam::GetIamPolicyRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.resource.as_str(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_iam_policy_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .get_iam_policy()
            .set_resource("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn set_iam_policy() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(iam::Policy::default());
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .set_iam_policy()
            .set_resource("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response, model::Policy::default());

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "SetIamPolicy");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<iam::SetIamPolicyRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.resource.as_str(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn set_iam_policy_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .set_iam_policy()
            .set_resource("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_iam_permissions() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(iam::TestIamPermissionsResponse::default());
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .test_iam_permissions()
            .set_resource("projects/_/buckets/test-bucket/objects/test-object")
            .send()
            .await?;
        assert_eq!(response, model::TestIamPermissionsResponse::default());

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "TestIamPermissions");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<iam::TestIamPermissionsRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.resource.as_str(), "projects/_/buckets/test-bucket/objects/test-object");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_iam_permissions_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .test_iam_permissions()
            .set_resource("projects/_/buckets/test-bucket/objects/test-object")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_bucket() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::Bucket {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .update_bucket()
            .set_bucket(
                model::Bucket::new()
                    .set_name("projects/_/buckets/test-bucket")
            )
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "UpdateBucket");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::UpdateBucketRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.bucket.as_ref().map(|v| v.name.as_str()).unwrap_or_default(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_bucket_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .update_bucket()
            .set_bucket(
                model::Bucket::new()
                    .set_name("projects/_/buckets/test-bucket")
            )
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_notification_config() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(());
        let (client, _server) = new_client(&mock).await?;
        let _response = client
            .delete_notification_config()
            .set_name("projects/_/buckets/test-bucket/notificationConfigs/test-config")
            .send()
            .await?;

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "DeleteNotificationConfig");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::DeleteNotificationConfigRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/_/buckets/test-bucket/notificationConfigs/test-config");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_notification_config_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .delete_notification_config()
            .set_name("projects/_/buckets/test-bucket/notificationConfigs/test-config")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_notification_config() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::NotificationConfig {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .get_notification_config()
            .set_name("projects/_/buckets/test-bucket/notificationConfigs/test-config")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "GetNotificationConfig");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::GetNotificationConfigRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/_/buckets/test-bucket/notificationConfigs/test-config");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_notification_config_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .get_notification_config()
            .set_name("projects/_/buckets/test-bucket/notificationConfigs/test-config")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_notification_config() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::NotificationConfig {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .create_notification_config()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "CreateNotificationConfig");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::CreateNotificationConfigRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.parent.as_str(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_notification_config_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .create_notification_config()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_notification_configs() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::ListNotificationConfigsResponse {
            next_page_token: "test-next-page-token".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .list_notification_configs()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response.next_page_token, "test-next-page-token");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "ListNotificationConfigs");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::ListNotificationConfigsRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.parent.as_str(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_notification_configs_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .list_notification_configs()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn compose_object() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::Object {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .compose_object()
            .set_destination(
                model::Object::new()
                    .set_bucket("projects/_/buckets/test-bucket")
            )
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "ComposeObject");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::ComposeObjectRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.destination.as_ref().map(|v| v.bucket.as_str()).unwrap_or_default(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn compose_object_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .compose_object()
            .set_destination(
                model::Object::new()
                    .set_bucket("projects/_/buckets/test-bucket")
            )
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_object() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(());
        let (client, _server) = new_client(&mock).await?;
        let _response = client
            .delete_object()
            .set_bucket("projects/_/buckets/test-bucket")
            .send()
            .await?;

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "DeleteObject");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::DeleteObjectRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.bucket.as_str(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_object_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .delete_object()
            .set_bucket("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn restore_object() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::Object {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .restore_object()
            .set_bucket("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "RestoreObject");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::RestoreObjectRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.bucket.as_str(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn restore_object_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .restore_object()
            .set_bucket("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn cancel_resumable_write() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::CancelResumableWriteResponse::default());
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .cancel_resumable_write()
            .set_upload_id("projects/_/buckets/test-bucket/uploads/test-upload")
            .send()
            .await?;
        assert_eq!(response, model::CancelResumableWriteResponse::default());

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "CancelResumableWrite");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::CancelResumableWriteRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.upload_id.as_str(), "projects/_/buckets/test-bucket/uploads/test-upload");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn cancel_resumable_write_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .cancel_resumable_write()
            .set_upload_id("projects/_/buckets/test-bucket/uploads/test-upload")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_object() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::Object {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .get_object()
            .set_bucket("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "GetObject");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::GetObjectRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.bucket.as_str(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_object_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .get_object()
            .set_bucket("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_object() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::Object {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .update_object()
            .set_object(
                model::Object::new()
                    .set_bucket("projects/_/buckets/test-bucket")
            )
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "UpdateObject");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::UpdateObjectRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.object.as_ref().map(|v| v.bucket.as_str()).unwrap_or_default(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_object_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .update_object()
            .set_object(
                model::Object::new()
                    .set_bucket("projects/_/buckets/test-bucket")
            )
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_objects() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::ListObjectsResponse {
            next_page_token: "test-next-page-token".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .list_objects()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response.next_page_token, "test-next-page-token");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "ListObjects");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::ListObjectsRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.parent.as_str(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_objects_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .list_objects()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn rewrite_object() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::RewriteResponse {
            rewrite_token: "test-rewrite-token".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .rewrite_object()
            .set_source_bucket("projects/_/buckets/source-bucket")
            .set_destination_bucket("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response.rewrite_token, "test-rewrite-token");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "RewriteObject");
        assert_eq!(routing_header(&received), Some("source_bucket=projects/_/buckets/source-bucket&bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::RewriteObjectRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.source_bucket.as_str(), "projects/_/buckets/source-bucket");
        assert_eq!(request.destination_bucket.as_str(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn rewrite_object_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .rewrite_object()
            .set_source_bucket("projects/_/buckets/source-bucket")
            .set_destination_bucket("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn start_resumable_write() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::StartResumableWriteResponse {
            upload_id: "test-upload-id".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .start_resumable_write()
            .set_write_object_spec(
                model::WriteObjectSpec::new()
                    .set_resource(
                        model::Object::new()
                            .set_bucket("projects/_/buckets/test-bucket")
                    )
            )
            .send()
            .await?;
        assert_eq!(response.upload_id, "test-upload-id");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "StartResumableWrite");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::StartResumableWriteRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.write_object_spec.as_ref().and_then(|v| v.resource.as_ref()).map(|v| v.bucket.as_str()).unwrap_or_default(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn start_resumable_write_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .start_resumable_write()
            .set_write_object_spec(
                model::WriteObjectSpec::new()
                    .set_resource(
                        model::Object::new()
                            .set_bucket("projects/_/buckets/test-bucket")
                    )
            )
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn query_write_status() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::QueryWriteStatusResponse::default());
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .query_write_status()
            .set_upload_id("projects/_/buckets/test-bucket/uploads/test-upload")
            .send()
            .await?;
        assert_eq!(response, model::QueryWriteStatusResponse::default());

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "QueryWriteStatus");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::QueryWriteStatusRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.upload_id.as_str(), "projects/_/buckets/test-bucket/uploads/test-upload");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn query_write_status_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .query_write_status()
            .set_upload_id("projects/_/buckets/test-bucket/uploads/test-upload")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn move_object() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::Object {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .move_object()
            .set_bucket("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "MoveObject");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<v2::MoveObjectRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.bucket.as_str(), "projects/_/buckets/test-bucket");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn move_object_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .move_object()
            .set_bucket("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_service_account() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::ServiceAccount {
            email_address: "test-email-address".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .get_service_account()
            .set_project("projects/test-project")
            .send()
            .await?;
        assert_eq!(response.email_address, "test-email-address");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "GetServiceAccount");
        assert_eq!(routing_header(&received), Some("project=projects/test-project"));
        let request = received
            .message::<v2::GetServiceAccountRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.project.as_str(), "projects/test-project");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_service_account_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .get_service_account()
            .set_project("projects/test-project")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_hmac_key() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::CreateHmacKeyResponse::default());
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .create_hmac_key()
            .set_project("projects/test-project")
            .send()
            .await?;
        assert_eq!(response, model::CreateHmacKeyResponse::default());

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "CreateHmacKey");
        assert_eq!(routing_header(&received), Some("project=projects/test-project"));
        let request = received
            .message::<v2::CreateHmacKeyRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.project.as_str(), "projects/test-project");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_hmac_key_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .create_hmac_key()
            .set_project("projects/test-project")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_hmac_key() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(());
        let (client, _server) = new_client(&mock).await?;
        let _response = client
            .delete_hmac_key()
            .set_project("projects/test-project")
            .send()
            .await?;

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "DeleteHmacKey");
        assert_eq!(routing_header(&received), Some("project=projects/test-project"));
        let request = received
            .message::<v2::DeleteHmacKeyRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.project.as_str(), "projects/test-project");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_hmac_key_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .delete_hmac_key()
            .set_project("projects/test-project")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_hmac_key() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::HmacKeyMetadata {
            access_id: "test-access-id".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .get_hmac_key()
            .set_project("projects/test-project")
            .send()
            .await?;
        assert_eq!(response.access_id, "test-access-id");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "GetHmacKey");
        assert_eq!(routing_header(&received), Some("project=projects/test-project"));
        let request = received
            .message::<v2::GetHmacKeyRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.project.as_str(), "projects/test-project");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_hmac_key_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .get_hmac_key()
            .set_project("projects/test-project")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_hmac_keys() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::ListHmacKeysResponse {
            next_page_token: "test-next-page-token".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .list_hmac_keys()
            .set_project("projects/test-project")
            .send()
            .await?;
        assert_eq!(response.next_page_token, "test-next-page-token");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "ListHmacKeys");
        assert_eq!(routing_header(&received), Some("project=projects/test-project"));
        let request = received
            .message::<v2::ListHmacKeysRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.project.as_str(), "projects/test-project");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_hmac_keys_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .list_hmac_keys()
            .set_project("projects/test-project")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_hmac_key() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_response(v2::HmacKeyMetadata {
            access_id: "test-access-id".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .update_hmac_key()
            .set_hmac_key(
                model::HmacKeyMetadata::new()
                    .set_project("projects/test-project")
            )
            .send()
            .await?;
        assert_eq!(response.access_id, "test-access-id");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "UpdateHmacKey");
        assert_eq!(routing_header(&received), Some("project=projects/test-project"));
        let request = received
            .message::<v2::UpdateHmacKeyRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.hmac_key.as_ref().map(|v| v.project.as_str()).unwrap_or_default(), "projects/test-project");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_hmac_key_error() -> anyhow::Result<()> {
        let mock = MockStorage::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .update_hmac_key()
            .set_hmac_key(
                model::HmacKeyMetadata::new()
                    .set_project("projects/test-project")
            )
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }
}
