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

//! Verify the StorageControl client sends the requests built by the request
//! builders, and returns the responses and errors from a mock server.

#[cfg(test)]
mod tests {
    use gax::error::rpc::Code;
    use gcs_storage::client::StorageControl;
    use gcs_storage::model;
    use google_cloud_auth::credentials::anonymous::Builder as Anonymous;
    use storage_grpc_mock::google::iam::v1 as iam;
    use storage_grpc_mock::google::longrunning;
    use storage_grpc_mock::google::storage::control::v2 as control;
    use storage_grpc_mock::{MockStorageControl, Received, start};
    use tokio::task::JoinHandle;

    async fn new_client(mock: &MockStorageControl) -> anyhow::Result<(StorageControl, JoinHandle<()>)> {
        let (endpoint, server) = start("127.0.0.1:0", mock.clone()).await?;
        let client = StorageControl::builder()
            .with_endpoint(endpoint)
            .with_credentials(Anonymous::new().build())
            .build()
            .await?;
        Ok((client, server))
    }

    fn single_request(mock: &MockStorageControl) -> anyhow::Result<Received> {
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
    async fn create_folder() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::Folder {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .create_folder()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "CreateFolder");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::CreateFolderRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.parent.as_str(), "projects/_/buckets/test-bucket");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_folder_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .create_folder()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_folder() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(());
        let (client, _server) = new_client(&mock).await?;
        let _response = client
            .delete_folder()
            .set_name("projects/_/buckets/test-bucket/folders/a/b/")
            .send()
            .await?;

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "DeleteFolder");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::DeleteFolderRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/_/buckets/test-bucket/folders/a/b/");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_folder_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .delete_folder()
            .set_name("projects/_/buckets/test-bucket/folders/a/b/")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_folder_recursive() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(longrunning::Operation {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .delete_folder_recursive()
            .set_name("projects/_/buckets/test-bucket/folders/a/b/")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "DeleteFolderRecursive");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::DeleteFolderRecursiveRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/_/buckets/test-bucket/folders/a/b/");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_folder_recursive_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .delete_folder_recursive()
            .set_name("projects/_/buckets/test-bucket/folders/a/b/")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_folder() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::Folder {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .get_folder()
            .set_name("projects/_/buckets/test-bucket/folders/a/b/")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "GetFolder");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::GetFolderRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/_/buckets/test-bucket/folders/a/b/");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_folder_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .get_folder()
            .set_name("projects/_/buckets/test-bucket/folders/a/b/")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_folders() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::ListFoldersResponse {
            next_page_token: "test-next-page-token".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .list_folders()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response.next_page_token, "test-next-page-token");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "ListFolders");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::ListFoldersRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.parent.as_str(), "projects/_/buckets/test-bucket");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_folders_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .list_folders()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn rename_folder() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(longrunning::Operation {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .rename_folder()
            .set_name("projects/_/buckets/test-bucket/folders/a/b/")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "RenameFolder");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::RenameFolderRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/_/buckets/test-bucket/folders/a/b/");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn rename_folder_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .rename_folder()
            .set_name("projects/_/buckets/test-bucket/folders/a/b/")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_storage_layout() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::StorageLayout {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .get_storage_layout()
            .set_name("projects/_/buckets/test-bucket/storageLayout")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "GetStorageLayout");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::GetStorageLayoutRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/_/buckets/test-bucket/storageLayout");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_storage_layout_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .get_storage_layout()
            .set_name("projects/_/buckets/test-bucket/storageLayout")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_managed_folder() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::ManagedFolder {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .create_managed_folder()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "CreateManagedFolder");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::CreateManagedFolderRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.parent.as_str(), "projects/_/buckets/test-bucket");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_managed_folder_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .create_managed_folder()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_managed_folder() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(());
        let (client, _server) = new_client(&mock).await?;
        let _response = client
            .delete_managed_folder()
            .set_name("projects/_/buckets/test-bucket/managedFolders/a/b/")
            .send()
            .await?;

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "DeleteManagedFolder");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::DeleteManagedFolderRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/_/buckets/test-bucket/managedFolders/a/b/");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_managed_folder_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .delete_managed_folder()
            .set_name("projects/_/buckets/test-bucket/managedFolders/a/b/")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_managed_folder() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::ManagedFolder {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .get_managed_folder()
            .set_name("projects/_/buckets/test-bucket/managedFolders/a/b/")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "GetManagedFolder");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::GetManagedFolderRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/_/buckets/test-bucket/managedFolders/a/b/");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_managed_folder_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .get_managed_folder()
            .set_name("projects/_/buckets/test-bucket/managedFolders/a/b/")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_managed_folders() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::ListManagedFoldersResponse {
            next_page_token: "test-next-page-token".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .list_managed_folders()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response.next_page_token, "test-next-page-token");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "ListManagedFolders");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::ListManagedFoldersRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.parent.as_str(), "projects/_/buckets/test-bucket");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_managed_folders_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .list_managed_folders()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_anywhere_cache() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(longrunning::Operation {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .create_anywhere_cache()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "CreateAnywhereCache");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::CreateAnywhereCacheRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.parent.as_str(), "projects/_/buckets/test-bucket");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_anywhere_cache_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .create_anywhere_cache()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_anywhere_cache() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(longrunning::Operation {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .update_anywhere_cache()
            .set_anywhere_cache(
                model::AnywhereCache::new()
                    .set_name("projects/_/buckets/test-bucket/anywhereCaches/us-central1-a")
            )
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "UpdateAnywhereCache");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::UpdateAnywhereCacheRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.anywhere_cache.as_ref().map(|v| v.name.as_str()).unwrap_or_default(), "projects/_/buckets/test-bucket/anywhereCaches/us-central1-a");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_anywhere_cache_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .update_anywhere_cache()
            .set_anywhere_cache(
                model::AnywhereCache::new()
                    .set_name("projects/_/buckets/test-bucket/anywhereCaches/us-central1-a")
            )
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn disable_anywhere_cache() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::AnywhereCache {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .disable_anywhere_cache()
            .set_name("projects/_/buckets/test-bucket/anywhereCaches/us-central1-a")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "DisableAnywhereCache");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::DisableAnywhereCacheRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/_/buckets/test-bucket/anywhereCaches/us-central1-a");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn disable_anywhere_cache_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .disable_anywhere_cache()
            .set_name("projects/_/buckets/test-bucket/anywhereCaches/us-central1-a")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn pause_anywhere_cache() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::AnywhereCache {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .pause_anywhere_cache()
            .set_name("projects/_/buckets/test-bucket/anywhereCaches/us-central1-a")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "PauseAnywhereCache");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::PauseAnywhereCacheRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/_/buckets/test-bucket/anywhereCaches/us-central1-a");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn pause_anywhere_cache_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .pause_anywhere_cache()
            .set_name("projects/_/buckets/test-bucket/anywhereCaches/us-central1-a")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn resume_anywhere_cache() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::AnywhereCache {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .resume_anywhere_cache()
            .set_name("projects/_/buckets/test-bucket/anywhereCaches/us-central1-a")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "ResumeAnywhereCache");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::ResumeAnywhereCacheRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/_/buckets/test-bucket/anywhereCaches/us-central1-a");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn resume_anywhere_cache_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .resume_anywhere_cache()
            .set_name("projects/_/buckets/test-bucket/anywhereCaches/us-central1-a")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_anywhere_cache() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::AnywhereCache {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .get_anywhere_cache()
            .set_name("projects/_/buckets/test-bucket/anywhereCaches/us-central1-a")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "GetAnywhereCache");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::GetAnywhereCacheRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/_/buckets/test-bucket/anywhereCaches/us-central1-a");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_anywhere_cache_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .get_anywhere_cache()
            .set_name("projects/_/buckets/test-bucket/anywhereCaches/us-central1-a")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_anywhere_caches() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::ListAnywhereCachesResponse {
            next_page_token: "test-next-page-token".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .list_anywhere_caches()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await?;
        assert_eq!(response.next_page_token, "test-next-page-token");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "ListAnywhereCaches");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<control::ListAnywhereCachesRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.parent.as_str(), "projects/_/buckets/test-bucket");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_anywhere_caches_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .list_anywhere_caches()
            .set_parent("projects/_/buckets/test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_project_intelligence_config() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::IntelligenceConfig {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .get_project_intelligence_config()
            .set_name("projects/test-project/locations/global/intelligenceConfig")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "GetProjectIntelligenceConfig");
        assert_eq!(routing_header(&received), Some("name=projects/test-project/locations/global/intelligenceConfig"));
        let request = received
            .message::<control::GetProjectIntelligenceConfigRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/test-project/locations/global/intelligenceConfig");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_project_intelligence_config_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .get_project_intelligence_config()
            .set_name("projects/test-project/locations/global/intelligenceConfig")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_project_intelligence_config() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::IntelligenceConfig {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .update_project_intelligence_config()
            .set_intelligence_config(
                model::IntelligenceConfig::new()
                    .set_name("projects/test-project/locations/global/intelligenceConfig")
            )
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "UpdateProjectIntelligenceConfig");
        assert_eq!(routing_header(&received), Some("intelligence_config.name=projects/test-project/locations/global/intelligenceConfig"));
        let request = received
            .message::<control::UpdateProjectIntelligenceConfigRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.intelligence_config.as_ref().map(|v| v.name.as_str()).unwrap_or_default(), "projects/test-project/locations/global/intelligenceConfig");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_project_intelligence_config_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .update_project_intelligence_config()
            .set_intelligence_config(
                model::IntelligenceConfig::new()
                    .set_name("projects/test-project/locations/global/intelligenceConfig")
            )
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_folder_intelligence_config() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::IntelligenceConfig {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .get_folder_intelligence_config()
            .set_name("folders/123/locations/global/intelligenceConfig")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "GetFolderIntelligenceConfig");
        assert_eq!(routing_header(&received), Some("name=folders/123/locations/global/intelligenceConfig"));
        let request = received
            .message::<control::GetFolderIntelligenceConfigRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "folders/123/locations/global/intelligenceConfig");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_folder_intelligence_config_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .get_folder_intelligence_config()
            .set_name("folders/123/locations/global/intelligenceConfig")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_folder_intelligence_config() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::IntelligenceConfig {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .update_folder_intelligence_config()
            .set_intelligence_config(
                model::IntelligenceConfig::new()
                    .set_name("folders/123/locations/global/intelligenceConfig")
            )
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "UpdateFolderIntelligenceConfig");
        assert_eq!(routing_header(&received), Some("intelligence_config.name=folders/123/locations/global/intelligenceConfig"));
        let request = received
            .message::<control::UpdateFolderIntelligenceConfigRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.intelligence_config.as_ref().map(|v| v.name.as_str()).unwrap_or_default(), "folders/123/locations/global/intelligenceConfig");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_folder_intelligence_config_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .update_folder_intelligence_config()
            .set_intelligence_config(
                model::IntelligenceConfig::new()
                    .set_name("folders/123/locations/global/intelligenceConfig")
            )
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_organization_intelligence_config() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::IntelligenceConfig {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .get_organization_intelligence_config()
            .set_name("organizations/456/locations/global/intelligenceConfig")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "GetOrganizationIntelligenceConfig");
        assert_eq!(routing_header(&received), Some("name=organizations/456/locations/global/intelligenceConfig"));
        let request = received
            .message::<control::GetOrganizationIntelligenceConfigRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "organizations/456/locations/global/intelligenceConfig");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_organization_intelligence_config_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .get_organization_intelligence_config()
            .set_name("organizations/456/locations/global/intelligenceConfig")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_organization_intelligence_config() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::IntelligenceConfig {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .update_organization_intelligence_config()
            .set_intelligence_config(
                model::IntelligenceConfig::new()
                    .set_name("organizations/456/locations/global/intelligenceConfig")
            )
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "UpdateOrganizationIntelligenceConfig");
        assert_eq!(routing_header(&received), Some("intelligence_config.name=organizations/456/locations/global/intelligenceConfig"));
        let request = received
            .message::<control::UpdateOrganizationIntelligenceConfigRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.intelligence_config.as_ref().map(|v| v.name.as_str()).unwrap_or_default(), "organizations/456/locations/global/intelligenceConfig");
        assert!(!request.request_id.is_empty(), "{request:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_organization_intelligence_config_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .update_organization_intelligence_config()
            .set_intelligence_config(
                model::IntelligenceConfig::new()
                    .set_name("organizations/456/locations/global/intelligenceConfig")
            )
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_iam_policy() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(iam::Policy::default());
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .get_iam_policy()
            .set_resource("projects/_/buckets/test-bucket/managedFolders/a/b/")
            .send()
            .await?;
        assert_eq!(response, model::Policy::default());

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "GetIamPolicy");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<iam::GetIamPolicyRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.resource.as_str(), "projects/_/buckets/test-bucket/managedFolders/a/b/");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_iam_policy_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .get_iam_policy()
            .set_resource("projects/_/buckets/test-bucket/managedFolders/a/b/")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn set_iam_policy() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(iam::Policy::default());
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .set_iam_policy()
            .set_resource("projects/_/buckets/test-bucket/managedFolders/a/b/")
            .send()
            .await?;
        assert_eq!(response, model::Policy::default());

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "SetIamPolicy");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<iam::SetIamPolicyRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.resource.as_str(), "projects/_/buckets/test-bucket/managedFolders/a/b/");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn set_iam_policy_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .set_iam_policy()
            .set_resource("projects/_/buckets/test-bucket/managedFolders/a/b/")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_iam_permissions() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(iam::TestIamPermissionsResponse::default());
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .test_iam_permissions()
            .set_resource("projects/_/buckets/test-bucket/managedFolders/a/b/")
            .send()
            .await?;
        assert_eq!(response, model::TestIamPermissionsResponse::default());

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "TestIamPermissions");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<iam::TestIamPermissionsRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.resource.as_str(), "projects/_/buckets/test-bucket/managedFolders/a/b/");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_iam_permissions_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .test_iam_permissions()
            .set_resource("projects/_/buckets/test-bucket/managedFolders/a/b/")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_operation() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(longrunning::Operation {
            name: "test-name".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .get_operation()
            .set_name("projects/_/buckets/test-bucket/operations/test-operation")
            .send()
            .await?;
        assert_eq!(response.name, "test-name");

        let received = single_request(&mock)?;
        assert_eq!(received.method(), "GetOperation");
        assert_eq!(routing_header(&received), Some("bucket=projects/_/buckets/test-bucket"));
        let request = received
            .message::<longrunning::GetOperationRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {received:?}"))?;
        assert_eq!(request.name.as_str(), "projects/_/buckets/test-bucket/operations/test-operation");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_operation_error() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::not_found("test-only"));
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .get_operation()
            .set_name("projects/_/buckets/test-bucket/operations/test-operation")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("test-only"), "{err:?}");
        Ok(())
    }
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn request_id_reused_on_retry() -> anyhow::Result<()> {
        use gax::exponential_backoff::ExponentialBackoffBuilder;
        use gax::options::RequestOptionsBuilder;
        use gax::retry_policy::{AlwaysRetry, RetryPolicyExt};
        use gax::retry_throttler::CircuitBreaker;
        use std::time::Duration;

        let mock = MockStorageControl::new();
        mock.add_error(tonic::Status::unavailable("try-again"));
        mock.add_response(control::Folder {
            name: "projects/_/buckets/test-bucket/folders/a/b/".into(),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let response = client
            .get_folder()
            .set_name("projects/_/buckets/test-bucket/folders/a/b/")
            .with_retry_policy(AlwaysRetry.with_attempt_limit(3))
            .with_backoff_policy(
                ExponentialBackoffBuilder::new()
                    .with_initial_delay(Duration::from_millis(1))
                    .with_maximum_delay(Duration::from_millis(1))
                    .clamp(),
            )
            .with_retry_throttler(CircuitBreaker::default())
            .send()
            .await?;
        assert_eq!(response.name, "projects/_/buckets/test-bucket/folders/a/b/");

        let ids = mock
            .requests()
            .iter()
            .map(|r| {
                r.message::<control::GetFolderRequest>()
                    .map(|m| m.request_id.clone())
                    .ok_or_else(|| anyhow::anyhow!("unexpected request type {r:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        assert_eq!(ids.len(), 2, "{ids:?}");
        assert!(!ids[0].is_empty(), "{ids:?}");
        assert_eq!(ids[0], ids[1]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn request_id_differs_across_calls() -> anyhow::Result<()> {
        let mock = MockStorageControl::new();
        mock.add_response(control::Folder::default());
        mock.add_response(control::Folder::default());
        let (client, _server) = new_client(&mock).await?;
        for _ in 0..2 {
            client
                .get_folder()
                .set_name("projects/_/buckets/test-bucket/folders/a/b/")
                .send()
                .await?;
        }
        let ids = mock
            .requests()
            .iter()
            .filter_map(|r| r.message::<control::GetFolderRequest>().map(|m| m.request_id.clone()))
            .collect::<Vec<_>>();
        assert_eq!(ids.len(), 2, "{ids:?}");
        assert_ne!(ids[0], ids[1]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_folder_recursive_poller() -> anyhow::Result<()> {
        use gax::options::RequestOptionsBuilder;
        use gax::polling_backoff_policy::PollingBackoffPolicy;
        use lro::Poller;

        #[derive(Debug)]
        struct NoDelay;
        impl PollingBackoffPolicy for NoDelay {
            fn wait_period(&self, _loop_start: std::time::Instant, _attempt_count: u32) -> std::time::Duration {
                std::time::Duration::ZERO
            }
        }

        let mock = MockStorageControl::new();
        let metadata = control::DeleteFolderRecursiveMetadata {
            folder_id: "a/b/".into(),
            ..Default::default()
        };
        mock.add_response(longrunning::Operation {
            name: "projects/_/buckets/test-bucket/operations/test-operation".into(),
            metadata: Some(prost_types::Any::from_msg(&metadata)?),
            ..Default::default()
        });
        mock.add_response(longrunning::Operation {
            name: "projects/_/buckets/test-bucket/operations/test-operation".into(),
            done: true,
            result: Some(longrunning::operation::Result::Response(prost_types::Any {
                type_url: "type.googleapis.com/google.protobuf.Empty".into(),
                value: vec![],
            })),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        client
            .delete_folder_recursive()
            .set_name("projects/_/buckets/test-bucket/folders/a/b/")
            .with_polling_backoff_policy(NoDelay)
            .poller()
            .until_done()
            .await?;

        let methods = mock
            .requests()
            .iter()
            .map(|r| r.method().to_string())
            .collect::<Vec<_>>();
        assert_eq!(methods, vec!["DeleteFolderRecursive", "GetOperation"]);
        let requests = mock.requests();
        let request = requests[1]
            .message::<longrunning::GetOperationRequest>()
            .ok_or_else(|| anyhow::anyhow!("unexpected request type {:?}", requests[1]))?;
        assert_eq!(request.name, "projects/_/buckets/test-bucket/operations/test-operation");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_folder_recursive_poller_error() -> anyhow::Result<()> {
        use lro::Poller;

        let mock = MockStorageControl::new();
        mock.add_response(longrunning::Operation {
            name: "projects/_/buckets/test-bucket/operations/test-operation".into(),
            done: true,
            result: Some(longrunning::operation::Result::Error(
                storage_grpc_mock::google::rpc::Status {
                    code: Code::FailedPrecondition as i32,
                    message: "folder is locked".into(),
                    details: vec![],
                },
            )),
            ..Default::default()
        });
        let (client, _server) = new_client(&mock).await?;
        let err = client
            .delete_folder_recursive()
            .set_name("projects/_/buckets/test-bucket/folders/a/b/")
            .poller()
            .until_done()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::FailedPrecondition), "{err:?}");
        assert_eq!(mock.requests().len(), 1);
        Ok(())
    }
}
