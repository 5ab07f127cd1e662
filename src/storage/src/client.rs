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

//! The clients for Cloud Storage.

/// Implements a client for the Cloud Storage API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use gcs_storage::client::Storage;
/// let client = Storage::builder().build().await?;
/// let bucket = client
///     .get_bucket()
///     .set_name("projects/_/buckets/my-bucket")
///     .send()
///     .await?;
/// println!("bucket={bucket:?}");
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// The Cloud Storage API allows applications to read and write data through
/// the abstractions of buckets and objects. For a description of these
/// abstractions please see <https://cloud.google.com/storage/docs>.
///
/// Resources are named as follows:
///
/// - Projects are referred to as they are defined by the Resource Manager API,
///   using strings like `projects/123456` or `projects/my-string-id`.
///
/// - Buckets are named using string names of the form:
///   `projects/{project}/buckets/{bucket}`.
///   For globally unique buckets, `_` may be substituted for the project.
///
/// - Objects are uniquely identified by their name along with the name of the
///   bucket they belong to, as separate strings in this API. For example:
///   ```no_rust
///   bucket = "projects/_/buckets/my-bucket"
///   object = "my-object/with/a/folder-like/name"
///   ```
///   Note that object names can contain `/` characters, which are treated as
///   any other character (no special directory semantics).
///
/// # Configuration
///
/// To configure `Storage` use the `with_*` methods in the type returned
/// by [builder()][Storage::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://storage.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// # Pooling and Cloning
///
/// `Storage` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Storage` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
///
/// [with_endpoint()]: super::builder::storage::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::storage::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
#[derive(Clone, Debug)]
pub struct Storage {
    inner: std::sync::Arc<dyn super::stub::dynamic::Storage>,
}

impl Storage {
    /// Returns a builder for [Storage].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use gcs_storage::client::Storage;
    /// let client = Storage::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::storage::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::storage::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Storage + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Storage>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Storage> {
        super::transport::Storage::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Storage> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Storage::new)
    }

    /// Permanently deletes an empty bucket.
    pub fn delete_bucket(&self) -> super::builder::storage::DeleteBucket {
        super::builder::storage::DeleteBucket::new(self.inner.clone())
    }

    /// Returns metadata for the specified bucket.
    pub fn get_bucket(&self) -> super::builder::storage::GetBucket {
        super::builder::storage::GetBucket::new(self.inner.clone())
    }

    /// Creates a new bucket.
    pub fn create_bucket(&self) -> super::builder::storage::CreateBucket {
        super::builder::storage::CreateBucket::new(self.inner.clone())
    }

    /// Retrieves a list of buckets for a given project.
    pub fn list_buckets(&self) -> super::builder::storage::ListBuckets {
        super::builder::storage::ListBuckets::new(self.inner.clone())
    }

    /// Locks retention policy on a bucket.
    pub fn lock_bucket_retention_policy(&self) -> super::builder::storage::LockBucketRetentionPolicy {
        super::builder::storage::LockBucketRetentionPolicy::new(self.inner.clone())
    }

    /// Gets the IAM policy for a specified bucket.
    ///
    /// The `resource` field in the request should be
    /// `projects/_/buckets/{bucket}` for a bucket, or
    /// `projects/_/buckets/{bucket}/managedFolders/{managedFolder}`
    /// for a managed folder.
    pub fn get_iam_policy(&self) -> super::builder::storage::GetIamPolicy {
        super::builder::storage::GetIamPolicy::new(self.inner.clone())
    }

    /// Updates an IAM policy for the specified bucket.
    ///
    /// The `resource` field in the request should be
    /// `projects/_/buckets/{bucket}` for a bucket, or
    /// `projects/_/buckets/{bucket}/managedFolders/{managedFolder}`
    /// for a managed folder.
    pub fn set_iam_policy(&self) -> super::builder::storage::SetIamPolicy {
        super::builder::storage::SetIamPolicy::new(self.inner.clone())
    }

    /// Tests a set of permissions on the given bucket, object, or managed
    /// folder to see which, if any, are held by the caller.
    pub fn test_iam_permissions(&self) -> super::builder::storage::TestIamPermissions {
        super::builder::storage::TestIamPermissions::new(self.inner.clone())
    }

    /// Updates a bucket. Equivalent to JSON API's storage.buckets.patch method.
    pub fn update_bucket(&self) -> super::builder::storage::UpdateBucket {
        super::builder::storage::UpdateBucket::new(self.inner.clone())
    }

    /// Permanently deletes a NotificationConfig.
    pub fn delete_notification_config(&self) -> super::builder::storage::DeleteNotificationConfig {
        super::builder::storage::DeleteNotificationConfig::new(self.inner.clone())
    }

    /// View a NotificationConfig.
    pub fn get_notification_config(&self) -> super::builder::storage::GetNotificationConfig {
        super::builder::storage::GetNotificationConfig::new(self.inner.clone())
    }

    /// Creates a NotificationConfig for a given bucket.
    ///
    /// These NotificationConfigs, when triggered, publish messages to the
    /// specified Pub/Sub topics.
    pub fn create_notification_config(&self) -> super::builder::storage::CreateNotificationConfig {
        super::builder::storage::CreateNotificationConfig::new(self.inner.clone())
    }

    /// Retrieves a list of NotificationConfigs for a given bucket.
    pub fn list_notification_configs(&self) -> super::builder::storage::ListNotificationConfigs {
        super::builder::storage::ListNotificationConfigs::new(self.inner.clone())
    }

    /// Concatenates a list of existing objects into a new object in the same
    /// bucket.
    pub fn compose_object(&self) -> super::builder::storage::ComposeObject {
        super::builder::storage::ComposeObject::new(self.inner.clone())
    }

    /// Deletes an object and its metadata.
    ///
    /// Deletions are permanent if versioning is not enabled for the bucket, or
    /// if the generation parameter is used.
    pub fn delete_object(&self) -> super::builder::storage::DeleteObject {
        super::builder::storage::DeleteObject::new(self.inner.clone())
    }

    /// Restores a soft-deleted object.
    pub fn restore_object(&self) -> super::builder::storage::RestoreObject {
        super::builder::storage::RestoreObject::new(self.inner.clone())
    }

    /// Cancels an in-progress resumable upload.
    pub fn cancel_resumable_write(&self) -> super::builder::storage::CancelResumableWrite {
        super::builder::storage::CancelResumableWrite::new(self.inner.clone())
    }

    /// Retrieves object metadata.
    pub fn get_object(&self) -> super::builder::storage::GetObject {
        super::builder::storage::GetObject::new(self.inner.clone())
    }

    /// Updates an object's metadata.
    ///
    /// Equivalent to JSON API's storage.objects.patch.
    pub fn update_object(&self) -> super::builder::storage::UpdateObject {
        super::builder::storage::UpdateObject::new(self.inner.clone())
    }

    /// Retrieves a list of objects matching the criteria.
    pub fn list_objects(&self) -> super::builder::storage::ListObjects {
        super::builder::storage::ListObjects::new(self.inner.clone())
    }

    /// Rewrites a source object to a destination object. Optionally overrides
    /// metadata.
    pub fn rewrite_object(&self) -> super::builder::storage::RewriteObject {
        super::builder::storage::RewriteObject::new(self.inner.clone())
    }

    /// Starts a resumable write operation.
    ///
    /// The returned `upload_id` identifies the upload session in subsequent
    /// `QueryWriteStatus` and `CancelResumableWrite` requests.
    pub fn start_resumable_write(&self) -> super::builder::storage::StartResumableWrite {
        super::builder::storage::StartResumableWrite::new(self.inner.clone())
    }

    /// Determines the `persisted_size` of an object that is being written.
    pub fn query_write_status(&self) -> super::builder::storage::QueryWriteStatus {
        super::builder::storage::QueryWriteStatus::new(self.inner.clone())
    }

    /// Moves the source object to the destination object in the same bucket.
    ///
    /// This operation moves a source object to a destination object in the same
    /// bucket by renaming the object. The move itself is an atomic transaction,
    /// ensuring all steps either complete successfully or no changes are made.
    pub fn move_object(&self) -> super::builder::storage::MoveObject {
        super::builder::storage::MoveObject::new(self.inner.clone())
    }

    /// Retrieves the name of a project's Google Cloud Storage service account.
    pub fn get_service_account(&self) -> super::builder::storage::GetServiceAccount {
        super::builder::storage::GetServiceAccount::new(self.inner.clone())
    }

    /// Creates a new HMAC key for the given service account.
    pub fn create_hmac_key(&self) -> super::builder::storage::CreateHmacKey {
        super::builder::storage::CreateHmacKey::new(self.inner.clone())
    }

    /// Deletes a given HMAC key. Key must be in an INACTIVE state.
    pub fn delete_hmac_key(&self) -> super::builder::storage::DeleteHmacKey {
        super::builder::storage::DeleteHmacKey::new(self.inner.clone())
    }

    /// Gets an existing HMAC key metadata for the given id.
    pub fn get_hmac_key(&self) -> super::builder::storage::GetHmacKey {
        super::builder::storage::GetHmacKey::new(self.inner.clone())
    }

    /// Lists HMAC keys under a given project with the additional filters
    /// provided.
    pub fn list_hmac_keys(&self) -> super::builder::storage::ListHmacKeys {
        super::builder::storage::ListHmacKeys::new(self.inner.clone())
    }

    /// Updates a given HMAC key state between ACTIVE and INACTIVE.
    pub fn update_hmac_key(&self) -> super::builder::storage::UpdateHmacKey {
        super::builder::storage::UpdateHmacKey::new(self.inner.clone())
    }
}

/// Implements a client for the Storage Control API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use gcs_storage::client::StorageControl;
/// let client = StorageControl::builder().build().await?;
/// let folder = client
///     .get_folder()
///     .set_name("projects/_/buckets/my-bucket/folders/a/b/")
///     .send()
///     .await?;
/// println!("folder={folder:?}");
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// The Storage Control API manages the control plane of Cloud Storage:
/// folders in buckets with hierarchical namespace enabled, managed folders,
/// Anywhere Caches, storage layouts, and the intelligence configuration of
/// projects, folders, and organizations.
///
/// # Transports
///
/// The client returned by [builder()][StorageControl::builder] uses gRPC
/// and supports all the RPCs. The client returned by
/// [http_builder()][StorageControl::http_builder] uses HTTP and JSON. It
/// only supports the intelligence config RPCs. All other RPCs return an
/// error without making a request.
///
/// # Configuration
///
/// To configure `StorageControl` use the `with_*` methods in the type
/// returned by [builder()][StorageControl::builder]. The default
/// configuration should work for most applications.
///
/// # Pooling and Cloning
///
/// `StorageControl` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `StorageControl` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct StorageControl {
    inner: std::sync::Arc<dyn super::stub::dynamic::StorageControl>,
}

impl StorageControl {
    /// Returns a builder for [StorageControl].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use gcs_storage::client::StorageControl;
    /// let client = StorageControl::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::storage_control::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::storage_control::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::StorageControl + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::StorageControl>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::StorageControl> {
        super::transport::StorageControl::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::StorageControl> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::StorageControl::new)
    }

    /// Returns a builder for a [StorageControl] using HTTP and JSON.
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use gcs_storage::client::StorageControl;
    /// let client = StorageControl::http_builder().build().await?;
    /// let config = client
    ///     .get_project_intelligence_config()
    ///     .set_name("projects/my-project/locations/global/intelligenceConfig")
    ///     .send()
    ///     .await?;
    /// println!("config={config:?}");
    /// # anyhow::Result::<()>::Ok(()) });
    /// ```
    pub fn http_builder() -> super::builder::storage_control::HttpClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::storage_control::client::HttpFactory)
    }

    pub(crate) async fn new_http(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner: std::sync::Arc<dyn super::stub::dynamic::StorageControl> =
            if gaxi::options::tracing_enabled(&config) {
                std::sync::Arc::new(super::tracing::StorageControl::new(
                    super::transport::http::StorageControl::new(config).await?,
                ))
            } else {
                std::sync::Arc::new(super::transport::http::StorageControl::new(config).await?)
            };
        Ok(Self { inner })
    }

    /// Creates a new folder.
    ///
    /// This operation is only applicable to a hierarchical namespace enabled
    /// bucket.
    pub fn create_folder(&self) -> super::builder::storage_control::CreateFolder {
        super::builder::storage_control::CreateFolder::new(self.inner.clone())
    }

    /// Permanently deletes an empty folder.
    ///
    /// This operation is only applicable to a hierarchical namespace enabled
    /// bucket.
    pub fn delete_folder(&self) -> super::builder::storage_control::DeleteFolder {
        super::builder::storage_control::DeleteFolder::new(self.inner.clone())
    }

    /// Deletes a folder recursively.
    ///
    /// This operation is only applicable to a hierarchical namespace enabled
    /// bucket.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn delete_folder_recursive(&self) -> super::builder::storage_control::DeleteFolderRecursive {
        super::builder::storage_control::DeleteFolderRecursive::new(self.inner.clone())
    }

    /// Returns metadata for the specified folder.
    ///
    /// This operation is only applicable to a hierarchical namespace enabled
    /// bucket.
    pub fn get_folder(&self) -> super::builder::storage_control::GetFolder {
        super::builder::storage_control::GetFolder::new(self.inner.clone())
    }

    /// Retrieves a list of folders.
    ///
    /// This operation is only applicable to a hierarchical namespace enabled
    /// bucket.
    pub fn list_folders(&self) -> super::builder::storage_control::ListFolders {
        super::builder::storage_control::ListFolders::new(self.inner.clone())
    }

    /// Renames a source folder to a destination folder.
    ///
    /// This operation is only applicable to a hierarchical namespace enabled
    /// bucket. During a rename, the source and destination folders are locked
    /// until the long running operation completes.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn rename_folder(&self) -> super::builder::storage_control::RenameFolder {
        super::builder::storage_control::RenameFolder::new(self.inner.clone())
    }

    /// Returns the storage layout configuration for a given bucket.
    pub fn get_storage_layout(&self) -> super::builder::storage_control::GetStorageLayout {
        super::builder::storage_control::GetStorageLayout::new(self.inner.clone())
    }

    /// Creates a new managed folder.
    pub fn create_managed_folder(&self) -> super::builder::storage_control::CreateManagedFolder {
        super::builder::storage_control::CreateManagedFolder::new(self.inner.clone())
    }

    /// Permanently deletes an empty managed folder.
    pub fn delete_managed_folder(&self) -> super::builder::storage_control::DeleteManagedFolder {
        super::builder::storage_control::DeleteManagedFolder::new(self.inner.clone())
    }

    /// Returns metadata for the specified managed folder.
    pub fn get_managed_folder(&self) -> super::builder::storage_control::GetManagedFolder {
        super::builder::storage_control::GetManagedFolder::new(self.inner.clone())
    }

    /// Retrieves a list of managed folders for a given bucket.
    pub fn list_managed_folders(&self) -> super::builder::storage_control::ListManagedFolders {
        super::builder::storage_control::ListManagedFolders::new(self.inner.clone())
    }

    /// Creates an Anywhere Cache instance.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn create_anywhere_cache(&self) -> super::builder::storage_control::CreateAnywhereCache {
        super::builder::storage_control::CreateAnywhereCache::new(self.inner.clone())
    }

    /// Updates an Anywhere Cache instance. Mutable fields include `ttl` and
    /// `admission_policy`.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn update_anywhere_cache(&self) -> super::builder::storage_control::UpdateAnywhereCache {
        super::builder::storage_control::UpdateAnywhereCache::new(self.inner.clone())
    }

    /// Disables an Anywhere Cache instance.
    ///
    /// A disabled instance is read-only. The disablement could be revoked by
    /// calling ResumeAnywhereCache. The cache instance will be deleted
    /// automatically if it remains in the disabled state for at least one hour.
    pub fn disable_anywhere_cache(&self) -> super::builder::storage_control::DisableAnywhereCache {
        super::builder::storage_control::DisableAnywhereCache::new(self.inner.clone())
    }

    /// Pauses an Anywhere Cache instance.
    pub fn pause_anywhere_cache(&self) -> super::builder::storage_control::PauseAnywhereCache {
        super::builder::storage_control::PauseAnywhereCache::new(self.inner.clone())
    }

    /// Resumes a disabled or paused Anywhere Cache instance.
    pub fn resume_anywhere_cache(&self) -> super::builder::storage_control::ResumeAnywhereCache {
        super::builder::storage_control::ResumeAnywhereCache::new(self.inner.clone())
    }

    /// Gets an Anywhere Cache instance.
    pub fn get_anywhere_cache(&self) -> super::builder::storage_control::GetAnywhereCache {
        super::builder::storage_control::GetAnywhereCache::new(self.inner.clone())
    }

    /// Lists Anywhere Cache instances for a given bucket.
    pub fn list_anywhere_caches(&self) -> super::builder::storage_control::ListAnywhereCaches {
        super::builder::storage_control::ListAnywhereCaches::new(self.inner.clone())
    }

    /// Returns the Project scoped singleton IntelligenceConfig resource.
    pub fn get_project_intelligence_config(&self) -> super::builder::storage_control::GetProjectIntelligenceConfig {
        super::builder::storage_control::GetProjectIntelligenceConfig::new(self.inner.clone())
    }

    /// Updates the Project scoped singleton IntelligenceConfig resource.
    pub fn update_project_intelligence_config(&self) -> super::builder::storage_control::UpdateProjectIntelligenceConfig {
        super::builder::storage_control::UpdateProjectIntelligenceConfig::new(self.inner.clone())
    }

    /// Returns the Folder scoped singleton IntelligenceConfig resource.
    pub fn get_folder_intelligence_config(&self) -> super::builder::storage_control::GetFolderIntelligenceConfig {
        super::builder::storage_control::GetFolderIntelligenceConfig::new(self.inner.clone())
    }

    /// Updates the Folder scoped singleton IntelligenceConfig resource.
    pub fn update_folder_intelligence_config(&self) -> super::builder::storage_control::UpdateFolderIntelligenceConfig {
        super::builder::storage_control::UpdateFolderIntelligenceConfig::new(self.inner.clone())
    }

    /// Returns the Organization scoped singleton IntelligenceConfig resource.
    pub fn get_organization_intelligence_config(&self) -> super::builder::storage_control::GetOrganizationIntelligenceConfig {
        super::builder::storage_control::GetOrganizationIntelligenceConfig::new(self.inner.clone())
    }

    /// Updates the Organization scoped singleton IntelligenceConfig resource.
    pub fn update_organization_intelligence_config(&self) -> super::builder::storage_control::UpdateOrganizationIntelligenceConfig {
        super::builder::storage_control::UpdateOrganizationIntelligenceConfig::new(self.inner.clone())
    }

    /// Gets the IAM policy for a specified bucket or managed folder.
    ///
    /// The `resource` field in the request should be
    /// `projects/_/buckets/{bucket}` for a bucket, or
    /// `projects/_/buckets/{bucket}/managedFolders/{managedFolder}`
    /// for a managed folder.
    pub fn get_iam_policy(&self) -> super::builder::storage_control::GetIamPolicy {
        super::builder::storage_control::GetIamPolicy::new(self.inner.clone())
    }

    /// Updates an IAM policy for the specified bucket or managed folder.
    ///
    /// The `resource` field in the request should be
    /// `projects/_/buckets/{bucket}` for a bucket, or
    /// `projects/_/buckets/{bucket}/managedFolders/{managedFolder}`
    /// for a managed folder.
    pub fn set_iam_policy(&self) -> super::builder::storage_control::SetIamPolicy {
        super::builder::storage_control::SetIamPolicy::new(self.inner.clone())
    }

    /// Tests a set of permissions on the given bucket, object, or managed
    /// folder to see which, if any, are held by the caller.
    pub fn test_iam_permissions(&self) -> super::builder::storage_control::TestIamPermissions {
        super::builder::storage_control::TestIamPermissions::new(self.inner.clone())
    }

    /// Gets the latest state of a long-running operation.
    ///
    /// Clients can use this method to poll the operation result at intervals as
    /// recommended by the API service.
    pub fn get_operation(&self) -> super::builder::storage_control::GetOperation {
        super::builder::storage_control::GetOperation::new(self.inner.clone())
    }
}
