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

//! Request builders for [Storage][crate::client::Storage].

use crate::Result;
use crate::stub::dynamic::Storage as Stub;
use std::sync::Arc;

/// A builder for [Storage][crate::client::Storage].
///
/// ```no_run
/// # tokio_test::block_on(async {
/// # use gcs_storage::*;
/// # use builder::storage::ClientBuilder;
/// # use client::Storage;
/// let builder : ClientBuilder = Storage::builder();
/// let client = builder
///     .with_endpoint("https://storage.googleapis.com")
///     .build().await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

pub(crate) mod client {
    use super::super::super::client::Storage;
    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = Storage;
        type Credentials = gaxi::options::Credentials;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}

/// Common implementation for [crate::client::Storage] request builders.
#[derive(Clone, Debug)]
pub(crate) struct RequestBuilder<R: std::default::Default> {
    stub: Arc<dyn Stub>,
    request: R,
    options: gax::options::RequestOptions,
}

impl<R> RequestBuilder<R>
where
    R: std::default::Default,
{
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self {
            stub,
            request: R::default(),
            options: gax::options::RequestOptions::default(),
        }
    }
}

/// The request builder for [Storage::delete_bucket][crate::client::Storage::delete_bucket] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::DeleteBucket;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> DeleteBucket {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct DeleteBucket(RequestBuilder<crate::model::DeleteBucketRequest>);

impl DeleteBucket {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::DeleteBucketRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<()> {
        (*self.0.stub)
            .delete_bucket(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of [name][crate::model::DeleteBucketRequest::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.name = v.into();
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::DeleteBucketRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::DeleteBucketRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::DeleteBucketRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::DeleteBucketRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for DeleteBucket {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::get_bucket][crate::client::Storage::get_bucket] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::GetBucket;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> GetBucket {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GetBucket(RequestBuilder<crate::model::GetBucketRequest>);

impl GetBucket {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::GetBucketRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::Bucket> {
        (*self.0.stub)
            .get_bucket(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of [name][crate::model::GetBucketRequest::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.name = v.into();
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::GetBucketRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::GetBucketRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::GetBucketRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::GetBucketRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [read_mask][crate::model::GetBucketRequest::read_mask].
    pub fn set_read_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.0.request.read_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [read_mask][crate::model::GetBucketRequest::read_mask].
    pub fn set_or_clear_read_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.0.request.read_mask = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for GetBucket {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::create_bucket][crate::client::Storage::create_bucket] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::CreateBucket;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> CreateBucket {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct CreateBucket(RequestBuilder<crate::model::CreateBucketRequest>);

impl CreateBucket {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::CreateBucketRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::Bucket> {
        (*self.0.stub)
            .create_bucket(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of [parent][crate::model::CreateBucketRequest::parent].
    pub fn set_parent<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.parent = v.into();
        self
    }

    /// Sets the value of [bucket][crate::model::CreateBucketRequest::bucket].
    pub fn set_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Bucket>,
    {
        self.0.request.bucket = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [bucket][crate::model::CreateBucketRequest::bucket].
    pub fn set_or_clear_bucket<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Bucket>,
    {
        self.0.request.bucket = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [bucket_id][crate::model::CreateBucketRequest::bucket_id].
    pub fn set_bucket_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.bucket_id = v.into();
        self
    }

    /// Sets the value of
    /// [predefined_acl][crate::model::CreateBucketRequest::predefined_acl].
    pub fn set_predefined_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.predefined_acl = v.into();
        self
    }

    /// Sets the value of
    /// [predefined_default_object_acl][crate::model::CreateBucketRequest::predefined_default_object_acl].
    pub fn set_predefined_default_object_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.predefined_default_object_acl = v.into();
        self
    }

    /// Sets the value of
    /// [enable_object_retention][crate::model::CreateBucketRequest::enable_object_retention].
    pub fn set_enable_object_retention<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.0.request.enable_object_retention = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for CreateBucket {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::list_buckets][crate::client::Storage::list_buckets] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::ListBuckets;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let mut items = builder.by_item();
/// while let Some(result) = items.next().await {
///   let item = result?;
/// }
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> ListBuckets {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ListBuckets(RequestBuilder<crate::model::ListBucketsRequest>);

impl ListBuckets {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::ListBucketsRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::ListBucketsResponse> {
        (*self.0.stub)
            .list_buckets(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Streams each page in the collection.
    pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListBucketsResponse, gax::error::Error> {
        let token = self.0.request.page_token.clone();
        let execute = move |token: String| {
            let mut builder = self.clone();
            builder.0.request = builder.0.request.set_page_token(token);
            builder.send()
        };
        gax::paginator::Paginator::new(token, execute)
    }

    /// Streams each item in the collection.
    pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::ListBucketsResponse, gax::error::Error> {
        self.by_page().items()
    }

    /// Sets the value of [parent][crate::model::ListBucketsRequest::parent].
    pub fn set_parent<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.parent = v.into();
        self
    }

    /// Sets the value of
    /// [page_size][crate::model::ListBucketsRequest::page_size].
    pub fn set_page_size<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.0.request.page_size = v.into();
        self
    }

    /// Sets the value of
    /// [page_token][crate::model::ListBucketsRequest::page_token].
    pub fn set_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.page_token = v.into();
        self
    }

    /// Sets the value of [prefix][crate::model::ListBucketsRequest::prefix].
    pub fn set_prefix<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.prefix = v.into();
        self
    }

    /// Sets the value of
    /// [read_mask][crate::model::ListBucketsRequest::read_mask].
    pub fn set_read_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.0.request.read_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [read_mask][crate::model::ListBucketsRequest::read_mask].
    pub fn set_or_clear_read_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.0.request.read_mask = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for ListBuckets {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::lock_bucket_retention_policy][crate::client::Storage::lock_bucket_retention_policy] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::LockBucketRetentionPolicy;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> LockBucketRetentionPolicy {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct LockBucketRetentionPolicy(RequestBuilder<crate::model::LockBucketRetentionPolicyRequest>);

impl LockBucketRetentionPolicy {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::LockBucketRetentionPolicyRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::Bucket> {
        (*self.0.stub)
            .lock_bucket_retention_policy(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [bucket][crate::model::LockBucketRetentionPolicyRequest::bucket].
    pub fn set_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.bucket = v.into();
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::LockBucketRetentionPolicyRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for LockBucketRetentionPolicy {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::get_iam_policy][crate::client::Storage::get_iam_policy] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::GetIamPolicy;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> GetIamPolicy {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GetIamPolicy(RequestBuilder<crate::model::GetIamPolicyRequest>);

impl GetIamPolicy {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::GetIamPolicyRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::Policy> {
        (*self.0.stub)
            .get_iam_policy(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [resource][crate::model::GetIamPolicyRequest::resource].
    pub fn set_resource<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.resource = v.into();
        self
    }

    /// Sets the value of [options][crate::model::GetIamPolicyRequest::options].
    pub fn set_options<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::GetPolicyOptions>,
    {
        self.0.request.options = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [options][crate::model::GetIamPolicyRequest::options].
    pub fn set_or_clear_options<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::GetPolicyOptions>,
    {
        self.0.request.options = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for GetIamPolicy {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::set_iam_policy][crate::client::Storage::set_iam_policy] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::SetIamPolicy;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> SetIamPolicy {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct SetIamPolicy(RequestBuilder<crate::model::SetIamPolicyRequest>);

impl SetIamPolicy {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::SetIamPolicyRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::Policy> {
        (*self.0.stub)
            .set_iam_policy(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [resource][crate::model::SetIamPolicyRequest::resource].
    pub fn set_resource<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.resource = v.into();
        self
    }

    /// Sets the value of [policy][crate::model::SetIamPolicyRequest::policy].
    pub fn set_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Policy>,
    {
        self.0.request.policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [policy][crate::model::SetIamPolicyRequest::policy].
    pub fn set_or_clear_policy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Policy>,
    {
        self.0.request.policy = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [update_mask][crate::model::SetIamPolicyRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.0.request.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [update_mask][crate::model::SetIamPolicyRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.0.request.update_mask = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for SetIamPolicy {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::test_iam_permissions][crate::client::Storage::test_iam_permissions] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::TestIamPermissions;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> TestIamPermissions {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct TestIamPermissions(RequestBuilder<crate::model::TestIamPermissionsRequest>);

impl TestIamPermissions {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::TestIamPermissionsRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::TestIamPermissionsResponse> {
        (*self.0.stub)
            .test_iam_permissions(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [resource][crate::model::TestIamPermissionsRequest::resource].
    pub fn set_resource<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.resource = v.into();
        self
    }

    /// Sets the value of
    /// [permissions][crate::model::TestIamPermissionsRequest::permissions].
    pub fn set_permissions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.0.request.permissions = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for TestIamPermissions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::update_bucket][crate::client::Storage::update_bucket] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::UpdateBucket;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> UpdateBucket {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct UpdateBucket(RequestBuilder<crate::model::UpdateBucketRequest>);

impl UpdateBucket {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::UpdateBucketRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::Bucket> {
        (*self.0.stub)
            .update_bucket(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of [bucket][crate::model::UpdateBucketRequest::bucket].
    pub fn set_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Bucket>,
    {
        self.0.request.bucket = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [bucket][crate::model::UpdateBucketRequest::bucket].
    pub fn set_or_clear_bucket<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Bucket>,
    {
        self.0.request.bucket = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::UpdateBucketRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::UpdateBucketRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::UpdateBucketRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::UpdateBucketRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [predefined_acl][crate::model::UpdateBucketRequest::predefined_acl].
    pub fn set_predefined_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.predefined_acl = v.into();
        self
    }

    /// Sets the value of
    /// [predefined_default_object_acl][crate::model::UpdateBucketRequest::predefined_default_object_acl].
    pub fn set_predefined_default_object_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.predefined_default_object_acl = v.into();
        self
    }

    /// Sets the value of
    /// [update_mask][crate::model::UpdateBucketRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.0.request.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [update_mask][crate::model::UpdateBucketRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.0.request.update_mask = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for UpdateBucket {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::delete_notification_config][crate::client::Storage::delete_notification_config] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::DeleteNotificationConfig;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> DeleteNotificationConfig {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct DeleteNotificationConfig(RequestBuilder<crate::model::DeleteNotificationConfigRequest>);

impl DeleteNotificationConfig {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::DeleteNotificationConfigRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<()> {
        (*self.0.stub)
            .delete_notification_config(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [name][crate::model::DeleteNotificationConfigRequest::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.name = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for DeleteNotificationConfig {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::get_notification_config][crate::client::Storage::get_notification_config] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::GetNotificationConfig;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> GetNotificationConfig {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GetNotificationConfig(RequestBuilder<crate::model::GetNotificationConfigRequest>);

impl GetNotificationConfig {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::GetNotificationConfigRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::NotificationConfig> {
        (*self.0.stub)
            .get_notification_config(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [name][crate::model::GetNotificationConfigRequest::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.name = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for GetNotificationConfig {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::create_notification_config][crate::client::Storage::create_notification_config] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::CreateNotificationConfig;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> CreateNotificationConfig {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct CreateNotificationConfig(RequestBuilder<crate::model::CreateNotificationConfigRequest>);

impl CreateNotificationConfig {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::CreateNotificationConfigRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::NotificationConfig> {
        (*self.0.stub)
            .create_notification_config(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [parent][crate::model::CreateNotificationConfigRequest::parent].
    pub fn set_parent<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.parent = v.into();
        self
    }

    /// Sets the value of
    /// [notification_config][crate::model::CreateNotificationConfigRequest::notification_config].
    pub fn set_notification_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::NotificationConfig>,
    {
        self.0.request.notification_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [notification_config][crate::model::CreateNotificationConfigRequest::notification_config].
    pub fn set_or_clear_notification_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::NotificationConfig>,
    {
        self.0.request.notification_config = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for CreateNotificationConfig {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::list_notification_configs][crate::client::Storage::list_notification_configs] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::ListNotificationConfigs;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let mut items = builder.by_item();
/// while let Some(result) = items.next().await {
///   let item = result?;
/// }
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> ListNotificationConfigs {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ListNotificationConfigs(RequestBuilder<crate::model::ListNotificationConfigsRequest>);

impl ListNotificationConfigs {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::ListNotificationConfigsRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::ListNotificationConfigsResponse> {
        (*self.0.stub)
            .list_notification_configs(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Streams each page in the collection.
    pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListNotificationConfigsResponse, gax::error::Error> {
        let token = self.0.request.page_token.clone();
        let execute = move |token: String| {
            let mut builder = self.clone();
            builder.0.request = builder.0.request.set_page_token(token);
            builder.send()
        };
        gax::paginator::Paginator::new(token, execute)
    }

    /// Streams each item in the collection.
    pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::ListNotificationConfigsResponse, gax::error::Error> {
        self.by_page().items()
    }

    /// Sets the value of
    /// [parent][crate::model::ListNotificationConfigsRequest::parent].
    pub fn set_parent<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.parent = v.into();
        self
    }

    /// Sets the value of
    /// [page_size][crate::model::ListNotificationConfigsRequest::page_size].
    pub fn set_page_size<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.0.request.page_size = v.into();
        self
    }

    /// Sets the value of
    /// [page_token][crate::model::ListNotificationConfigsRequest::page_token].
    pub fn set_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.page_token = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for ListNotificationConfigs {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::compose_object][crate::client::Storage::compose_object] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::ComposeObject;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> ComposeObject {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ComposeObject(RequestBuilder<crate::model::ComposeObjectRequest>);

impl ComposeObject {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::ComposeObjectRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::Object> {
        (*self.0.stub)
            .compose_object(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [destination][crate::model::ComposeObjectRequest::destination].
    pub fn set_destination<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Object>,
    {
        self.0.request.destination = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [destination][crate::model::ComposeObjectRequest::destination].
    pub fn set_or_clear_destination<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Object>,
    {
        self.0.request.destination = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [source_objects][crate::model::ComposeObjectRequest::source_objects].
    pub fn set_source_objects<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::compose_object_request::SourceObject>,
    {
        self.0.request.source_objects = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of
    /// [destination_predefined_acl][crate::model::ComposeObjectRequest::destination_predefined_acl].
    pub fn set_destination_predefined_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.destination_predefined_acl = v.into();
        self
    }

    /// Sets the value of
    /// [if_generation_match][crate::model::ComposeObjectRequest::if_generation_match].
    pub fn set_if_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_match][crate::model::ComposeObjectRequest::if_generation_match].
    pub fn set_or_clear_if_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::ComposeObjectRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::ComposeObjectRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [kms_key][crate::model::ComposeObjectRequest::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.kms_key = v.into();
        self
    }

    /// Sets the value of
    /// [common_object_request_params][crate::model::ComposeObjectRequest::common_object_request_params].
    pub fn set_common_object_request_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.0.request.common_object_request_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [common_object_request_params][crate::model::ComposeObjectRequest::common_object_request_params].
    pub fn set_or_clear_common_object_request_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.0.request.common_object_request_params = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [object_checksums][crate::model::ComposeObjectRequest::object_checksums].
    pub fn set_object_checksums<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectChecksums>,
    {
        self.0.request.object_checksums = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [object_checksums][crate::model::ComposeObjectRequest::object_checksums].
    pub fn set_or_clear_object_checksums<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ObjectChecksums>,
    {
        self.0.request.object_checksums = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for ComposeObject {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::delete_object][crate::client::Storage::delete_object] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::DeleteObject;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> DeleteObject {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct DeleteObject(RequestBuilder<crate::model::DeleteObjectRequest>);

impl DeleteObject {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::DeleteObjectRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<()> {
        (*self.0.stub)
            .delete_object(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of [bucket][crate::model::DeleteObjectRequest::bucket].
    pub fn set_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.bucket = v.into();
        self
    }

    /// Sets the value of [object][crate::model::DeleteObjectRequest::object].
    pub fn set_object<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.object = v.into();
        self
    }

    /// Sets the value of
    /// [generation][crate::model::DeleteObjectRequest::generation].
    pub fn set_generation<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.generation = v.into();
        self
    }

    /// Sets the value of
    /// [if_generation_match][crate::model::DeleteObjectRequest::if_generation_match].
    pub fn set_if_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_match][crate::model::DeleteObjectRequest::if_generation_match].
    pub fn set_or_clear_if_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_not_match][crate::model::DeleteObjectRequest::if_generation_not_match].
    pub fn set_if_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_not_match][crate::model::DeleteObjectRequest::if_generation_not_match].
    pub fn set_or_clear_if_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::DeleteObjectRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::DeleteObjectRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::DeleteObjectRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::DeleteObjectRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [common_object_request_params][crate::model::DeleteObjectRequest::common_object_request_params].
    pub fn set_common_object_request_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.0.request.common_object_request_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [common_object_request_params][crate::model::DeleteObjectRequest::common_object_request_params].
    pub fn set_or_clear_common_object_request_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.0.request.common_object_request_params = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for DeleteObject {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::restore_object][crate::client::Storage::restore_object] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::RestoreObject;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> RestoreObject {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct RestoreObject(RequestBuilder<crate::model::RestoreObjectRequest>);

impl RestoreObject {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::RestoreObjectRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::Object> {
        (*self.0.stub)
            .restore_object(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of [bucket][crate::model::RestoreObjectRequest::bucket].
    pub fn set_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.bucket = v.into();
        self
    }

    /// Sets the value of [object][crate::model::RestoreObjectRequest::object].
    pub fn set_object<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.object = v.into();
        self
    }

    /// Sets the value of
    /// [generation][crate::model::RestoreObjectRequest::generation].
    pub fn set_generation<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.generation = v.into();
        self
    }

    /// Sets the value of
    /// [restore_token][crate::model::RestoreObjectRequest::restore_token].
    pub fn set_restore_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.restore_token = v.into();
        self
    }

    /// Sets the value of
    /// [if_generation_match][crate::model::RestoreObjectRequest::if_generation_match].
    pub fn set_if_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_match][crate::model::RestoreObjectRequest::if_generation_match].
    pub fn set_or_clear_if_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_not_match][crate::model::RestoreObjectRequest::if_generation_not_match].
    pub fn set_if_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_not_match][crate::model::RestoreObjectRequest::if_generation_not_match].
    pub fn set_or_clear_if_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::RestoreObjectRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::RestoreObjectRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::RestoreObjectRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::RestoreObjectRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [copy_source_acl][crate::model::RestoreObjectRequest::copy_source_acl].
    pub fn set_copy_source_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.0.request.copy_source_acl = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [copy_source_acl][crate::model::RestoreObjectRequest::copy_source_acl].
    pub fn set_or_clear_copy_source_acl<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.0.request.copy_source_acl = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [common_object_request_params][crate::model::RestoreObjectRequest::common_object_request_params].
    pub fn set_common_object_request_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.0.request.common_object_request_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [common_object_request_params][crate::model::RestoreObjectRequest::common_object_request_params].
    pub fn set_or_clear_common_object_request_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.0.request.common_object_request_params = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for RestoreObject {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::cancel_resumable_write][crate::client::Storage::cancel_resumable_write] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::CancelResumableWrite;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> CancelResumableWrite {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct CancelResumableWrite(RequestBuilder<crate::model::CancelResumableWriteRequest>);

impl CancelResumableWrite {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::CancelResumableWriteRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::CancelResumableWriteResponse> {
        (*self.0.stub)
            .cancel_resumable_write(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [upload_id][crate::model::CancelResumableWriteRequest::upload_id].
    pub fn set_upload_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.upload_id = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for CancelResumableWrite {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::get_object][crate::client::Storage::get_object] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::GetObject;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> GetObject {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GetObject(RequestBuilder<crate::model::GetObjectRequest>);

impl GetObject {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::GetObjectRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::Object> {
        (*self.0.stub)
            .get_object(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of [bucket][crate::model::GetObjectRequest::bucket].
    pub fn set_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.bucket = v.into();
        self
    }

    /// Sets the value of [object][crate::model::GetObjectRequest::object].
    pub fn set_object<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.object = v.into();
        self
    }

    /// Sets the value of
    /// [generation][crate::model::GetObjectRequest::generation].
    pub fn set_generation<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.generation = v.into();
        self
    }

    /// Sets the value of
    /// [soft_deleted][crate::model::GetObjectRequest::soft_deleted].
    pub fn set_soft_deleted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.0.request.soft_deleted = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [soft_deleted][crate::model::GetObjectRequest::soft_deleted].
    pub fn set_or_clear_soft_deleted<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.0.request.soft_deleted = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_match][crate::model::GetObjectRequest::if_generation_match].
    pub fn set_if_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_match][crate::model::GetObjectRequest::if_generation_match].
    pub fn set_or_clear_if_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_not_match][crate::model::GetObjectRequest::if_generation_not_match].
    pub fn set_if_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_not_match][crate::model::GetObjectRequest::if_generation_not_match].
    pub fn set_or_clear_if_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::GetObjectRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::GetObjectRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::GetObjectRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::GetObjectRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [common_object_request_params][crate::model::GetObjectRequest::common_object_request_params].
    pub fn set_common_object_request_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.0.request.common_object_request_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [common_object_request_params][crate::model::GetObjectRequest::common_object_request_params].
    pub fn set_or_clear_common_object_request_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.0.request.common_object_request_params = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [read_mask][crate::model::GetObjectRequest::read_mask].
    pub fn set_read_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.0.request.read_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [read_mask][crate::model::GetObjectRequest::read_mask].
    pub fn set_or_clear_read_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.0.request.read_mask = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for GetObject {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::update_object][crate::client::Storage::update_object] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::UpdateObject;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> UpdateObject {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct UpdateObject(RequestBuilder<crate::model::UpdateObjectRequest>);

impl UpdateObject {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::UpdateObjectRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::Object> {
        (*self.0.stub)
            .update_object(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of [object][crate::model::UpdateObjectRequest::object].
    pub fn set_object<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Object>,
    {
        self.0.request.object = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [object][crate::model::UpdateObjectRequest::object].
    pub fn set_or_clear_object<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Object>,
    {
        self.0.request.object = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_match][crate::model::UpdateObjectRequest::if_generation_match].
    pub fn set_if_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_match][crate::model::UpdateObjectRequest::if_generation_match].
    pub fn set_or_clear_if_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_not_match][crate::model::UpdateObjectRequest::if_generation_not_match].
    pub fn set_if_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_not_match][crate::model::UpdateObjectRequest::if_generation_not_match].
    pub fn set_or_clear_if_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::UpdateObjectRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::UpdateObjectRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::UpdateObjectRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::UpdateObjectRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [predefined_acl][crate::model::UpdateObjectRequest::predefined_acl].
    pub fn set_predefined_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.predefined_acl = v.into();
        self
    }

    /// Sets the value of
    /// [update_mask][crate::model::UpdateObjectRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.0.request.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [update_mask][crate::model::UpdateObjectRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.0.request.update_mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [common_object_request_params][crate::model::UpdateObjectRequest::common_object_request_params].
    pub fn set_common_object_request_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.0.request.common_object_request_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [common_object_request_params][crate::model::UpdateObjectRequest::common_object_request_params].
    pub fn set_or_clear_common_object_request_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.0.request.common_object_request_params = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for UpdateObject {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::list_objects][crate::client::Storage::list_objects] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::ListObjects;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let mut items = builder.by_item();
/// while let Some(result) = items.next().await {
///   let item = result?;
/// }
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> ListObjects {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ListObjects(RequestBuilder<crate::model::ListObjectsRequest>);

impl ListObjects {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::ListObjectsRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::ListObjectsResponse> {
        (*self.0.stub)
            .list_objects(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Streams each page in the collection.
    pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListObjectsResponse, gax::error::Error> {
        let token = self.0.request.page_token.clone();
        let execute = move |token: String| {
            let mut builder = self.clone();
            builder.0.request = builder.0.request.set_page_token(token);
            builder.send()
        };
        gax::paginator::Paginator::new(token, execute)
    }

    /// Streams each item in the collection.
    pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::ListObjectsResponse, gax::error::Error> {
        self.by_page().items()
    }

    /// Sets the value of [parent][crate::model::ListObjectsRequest::parent].
    pub fn set_parent<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.parent = v.into();
        self
    }

    /// Sets the value of
    /// [page_size][crate::model::ListObjectsRequest::page_size].
    pub fn set_page_size<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.0.request.page_size = v.into();
        self
    }

    /// Sets the value of
    /// [page_token][crate::model::ListObjectsRequest::page_token].
    pub fn set_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.page_token = v.into();
        self
    }

    /// Sets the value of
    /// [delimiter][crate::model::ListObjectsRequest::delimiter].
    pub fn set_delimiter<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.delimiter = v.into();
        self
    }

    /// Sets the value of
    /// [include_trailing_delimiter][crate::model::ListObjectsRequest::include_trailing_delimiter].
    pub fn set_include_trailing_delimiter<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.0.request.include_trailing_delimiter = v.into();
        self
    }

    /// Sets the value of [prefix][crate::model::ListObjectsRequest::prefix].
    pub fn set_prefix<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.prefix = v.into();
        self
    }

    /// Sets the value of
    /// [versions][crate::model::ListObjectsRequest::versions].
    pub fn set_versions<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.0.request.versions = v.into();
        self
    }

    /// Sets the value of
    /// [read_mask][crate::model::ListObjectsRequest::read_mask].
    pub fn set_read_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.0.request.read_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [read_mask][crate::model::ListObjectsRequest::read_mask].
    pub fn set_or_clear_read_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.0.request.read_mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [lexicographic_start][crate::model::ListObjectsRequest::lexicographic_start].
    pub fn set_lexicographic_start<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.lexicographic_start = v.into();
        self
    }

    /// Sets the value of
    /// [lexicographic_end][crate::model::ListObjectsRequest::lexicographic_end].
    pub fn set_lexicographic_end<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.lexicographic_end = v.into();
        self
    }

    /// Sets the value of
    /// [soft_deleted][crate::model::ListObjectsRequest::soft_deleted].
    pub fn set_soft_deleted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.0.request.soft_deleted = v.into();
        self
    }

    /// Sets the value of
    /// [include_folders_as_prefixes][crate::model::ListObjectsRequest::include_folders_as_prefixes].
    pub fn set_include_folders_as_prefixes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.0.request.include_folders_as_prefixes = v.into();
        self
    }

    /// Sets the value of
    /// [match_glob][crate::model::ListObjectsRequest::match_glob].
    pub fn set_match_glob<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.match_glob = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for ListObjects {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::rewrite_object][crate::client::Storage::rewrite_object] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::RewriteObject;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> RewriteObject {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct RewriteObject(RequestBuilder<crate::model::RewriteObjectRequest>);

impl RewriteObject {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::RewriteObjectRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::RewriteResponse> {
        (*self.0.stub)
            .rewrite_object(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [destination_name][crate::model::RewriteObjectRequest::destination_name].
    pub fn set_destination_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.destination_name = v.into();
        self
    }

    /// Sets the value of
    /// [destination_bucket][crate::model::RewriteObjectRequest::destination_bucket].
    pub fn set_destination_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.destination_bucket = v.into();
        self
    }

    /// Sets the value of
    /// [destination_kms_key][crate::model::RewriteObjectRequest::destination_kms_key].
    pub fn set_destination_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.destination_kms_key = v.into();
        self
    }

    /// Sets the value of
    /// [destination][crate::model::RewriteObjectRequest::destination].
    pub fn set_destination<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Object>,
    {
        self.0.request.destination = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [destination][crate::model::RewriteObjectRequest::destination].
    pub fn set_or_clear_destination<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Object>,
    {
        self.0.request.destination = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [source_bucket][crate::model::RewriteObjectRequest::source_bucket].
    pub fn set_source_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.source_bucket = v.into();
        self
    }

    /// Sets the value of
    /// [source_object][crate::model::RewriteObjectRequest::source_object].
    pub fn set_source_object<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.source_object = v.into();
        self
    }

    /// Sets the value of
    /// [source_generation][crate::model::RewriteObjectRequest::source_generation].
    pub fn set_source_generation<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.source_generation = v.into();
        self
    }

    /// Sets the value of
    /// [rewrite_token][crate::model::RewriteObjectRequest::rewrite_token].
    pub fn set_rewrite_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.rewrite_token = v.into();
        self
    }

    /// Sets the value of
    /// [destination_predefined_acl][crate::model::RewriteObjectRequest::destination_predefined_acl].
    pub fn set_destination_predefined_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.destination_predefined_acl = v.into();
        self
    }

    /// Sets the value of
    /// [if_generation_match][crate::model::RewriteObjectRequest::if_generation_match].
    pub fn set_if_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_match][crate::model::RewriteObjectRequest::if_generation_match].
    pub fn set_or_clear_if_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_not_match][crate::model::RewriteObjectRequest::if_generation_not_match].
    pub fn set_if_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_not_match][crate::model::RewriteObjectRequest::if_generation_not_match].
    pub fn set_or_clear_if_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::RewriteObjectRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::RewriteObjectRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::RewriteObjectRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::RewriteObjectRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_source_generation_match][crate::model::RewriteObjectRequest::if_source_generation_match].
    pub fn set_if_source_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_source_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_source_generation_match][crate::model::RewriteObjectRequest::if_source_generation_match].
    pub fn set_or_clear_if_source_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_source_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_source_generation_not_match][crate::model::RewriteObjectRequest::if_source_generation_not_match].
    pub fn set_if_source_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_source_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_source_generation_not_match][crate::model::RewriteObjectRequest::if_source_generation_not_match].
    pub fn set_or_clear_if_source_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_source_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_source_metageneration_match][crate::model::RewriteObjectRequest::if_source_metageneration_match].
    pub fn set_if_source_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_source_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_source_metageneration_match][crate::model::RewriteObjectRequest::if_source_metageneration_match].
    pub fn set_or_clear_if_source_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_source_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_source_metageneration_not_match][crate::model::RewriteObjectRequest::if_source_metageneration_not_match].
    pub fn set_if_source_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_source_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_source_metageneration_not_match][crate::model::RewriteObjectRequest::if_source_metageneration_not_match].
    pub fn set_or_clear_if_source_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_source_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [max_bytes_rewritten_per_call][crate::model::RewriteObjectRequest::max_bytes_rewritten_per_call].
    pub fn set_max_bytes_rewritten_per_call<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.max_bytes_rewritten_per_call = v.into();
        self
    }

    /// Sets the value of
    /// [copy_source_encryption_algorithm][crate::model::RewriteObjectRequest::copy_source_encryption_algorithm].
    pub fn set_copy_source_encryption_algorithm<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.copy_source_encryption_algorithm = v.into();
        self
    }

    /// Sets the value of
    /// [copy_source_encryption_key_bytes][crate::model::RewriteObjectRequest::copy_source_encryption_key_bytes].
    pub fn set_copy_source_encryption_key_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<::bytes::Bytes>,
    {
        self.0.request.copy_source_encryption_key_bytes = v.into();
        self
    }

    /// Sets the value of
    /// [copy_source_encryption_key_sha256_bytes][crate::model::RewriteObjectRequest::copy_source_encryption_key_sha256_bytes].
    pub fn set_copy_source_encryption_key_sha256_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<::bytes::Bytes>,
    {
        self.0.request.copy_source_encryption_key_sha256_bytes = v.into();
        self
    }

    /// Sets the value of
    /// [common_object_request_params][crate::model::RewriteObjectRequest::common_object_request_params].
    pub fn set_common_object_request_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.0.request.common_object_request_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [common_object_request_params][crate::model::RewriteObjectRequest::common_object_request_params].
    pub fn set_or_clear_common_object_request_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.0.request.common_object_request_params = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [object_checksums][crate::model::RewriteObjectRequest::object_checksums].
    pub fn set_object_checksums<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectChecksums>,
    {
        self.0.request.object_checksums = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [object_checksums][crate::model::RewriteObjectRequest::object_checksums].
    pub fn set_or_clear_object_checksums<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ObjectChecksums>,
    {
        self.0.request.object_checksums = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for RewriteObject {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::start_resumable_write][crate::client::Storage::start_resumable_write] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::StartResumableWrite;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> StartResumableWrite {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct StartResumableWrite(RequestBuilder<crate::model::StartResumableWriteRequest>);

impl StartResumableWrite {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::StartResumableWriteRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::StartResumableWriteResponse> {
        (*self.0.stub)
            .start_resumable_write(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [write_object_spec][crate::model::StartResumableWriteRequest::write_object_spec].
    pub fn set_write_object_spec<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::WriteObjectSpec>,
    {
        self.0.request.write_object_spec = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [write_object_spec][crate::model::StartResumableWriteRequest::write_object_spec].
    pub fn set_or_clear_write_object_spec<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::WriteObjectSpec>,
    {
        self.0.request.write_object_spec = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [common_object_request_params][crate::model::StartResumableWriteRequest::common_object_request_params].
    pub fn set_common_object_request_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.0.request.common_object_request_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [common_object_request_params][crate::model::StartResumableWriteRequest::common_object_request_params].
    pub fn set_or_clear_common_object_request_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.0.request.common_object_request_params = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [object_checksums][crate::model::StartResumableWriteRequest::object_checksums].
    pub fn set_object_checksums<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectChecksums>,
    {
        self.0.request.object_checksums = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [object_checksums][crate::model::StartResumableWriteRequest::object_checksums].
    pub fn set_or_clear_object_checksums<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ObjectChecksums>,
    {
        self.0.request.object_checksums = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for StartResumableWrite {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::query_write_status][crate::client::Storage::query_write_status] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::QueryWriteStatus;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> QueryWriteStatus {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct QueryWriteStatus(RequestBuilder<crate::model::QueryWriteStatusRequest>);

impl QueryWriteStatus {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::QueryWriteStatusRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::QueryWriteStatusResponse> {
        (*self.0.stub)
            .query_write_status(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [upload_id][crate::model::QueryWriteStatusRequest::upload_id].
    pub fn set_upload_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.upload_id = v.into();
        self
    }

    /// Sets the value of
    /// [common_object_request_params][crate::model::QueryWriteStatusRequest::common_object_request_params].
    pub fn set_common_object_request_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.0.request.common_object_request_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [common_object_request_params][crate::model::QueryWriteStatusRequest::common_object_request_params].
    pub fn set_or_clear_common_object_request_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.0.request.common_object_request_params = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for QueryWriteStatus {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::move_object][crate::client::Storage::move_object] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::MoveObject;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> MoveObject {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct MoveObject(RequestBuilder<crate::model::MoveObjectRequest>);

impl MoveObject {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::MoveObjectRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::Object> {
        (*self.0.stub)
            .move_object(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of [bucket][crate::model::MoveObjectRequest::bucket].
    pub fn set_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.bucket = v.into();
        self
    }

    /// Sets the value of
    /// [source_object][crate::model::MoveObjectRequest::source_object].
    pub fn set_source_object<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.source_object = v.into();
        self
    }

    /// Sets the value of
    /// [destination_object][crate::model::MoveObjectRequest::destination_object].
    pub fn set_destination_object<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.destination_object = v.into();
        self
    }

    /// Sets the value of
    /// [if_source_generation_match][crate::model::MoveObjectRequest::if_source_generation_match].
    pub fn set_if_source_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_source_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_source_generation_match][crate::model::MoveObjectRequest::if_source_generation_match].
    pub fn set_or_clear_if_source_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_source_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_source_generation_not_match][crate::model::MoveObjectRequest::if_source_generation_not_match].
    pub fn set_if_source_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_source_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_source_generation_not_match][crate::model::MoveObjectRequest::if_source_generation_not_match].
    pub fn set_or_clear_if_source_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_source_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_source_metageneration_match][crate::model::MoveObjectRequest::if_source_metageneration_match].
    pub fn set_if_source_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_source_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_source_metageneration_match][crate::model::MoveObjectRequest::if_source_metageneration_match].
    pub fn set_or_clear_if_source_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_source_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_source_metageneration_not_match][crate::model::MoveObjectRequest::if_source_metageneration_not_match].
    pub fn set_if_source_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_source_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_source_metageneration_not_match][crate::model::MoveObjectRequest::if_source_metageneration_not_match].
    pub fn set_or_clear_if_source_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_source_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_match][crate::model::MoveObjectRequest::if_generation_match].
    pub fn set_if_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_match][crate::model::MoveObjectRequest::if_generation_match].
    pub fn set_or_clear_if_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_not_match][crate::model::MoveObjectRequest::if_generation_not_match].
    pub fn set_if_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_not_match][crate::model::MoveObjectRequest::if_generation_not_match].
    pub fn set_or_clear_if_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::MoveObjectRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::MoveObjectRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::MoveObjectRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::MoveObjectRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.0.request.if_metageneration_not_match = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for MoveObject {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::get_service_account][crate::client::Storage::get_service_account] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::GetServiceAccount;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> GetServiceAccount {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GetServiceAccount(RequestBuilder<crate::model::GetServiceAccountRequest>);

impl GetServiceAccount {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::GetServiceAccountRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::ServiceAccount> {
        (*self.0.stub)
            .get_service_account(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [project][crate::model::GetServiceAccountRequest::project].
    pub fn set_project<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.project = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for GetServiceAccount {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::create_hmac_key][crate::client::Storage::create_hmac_key] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::CreateHmacKey;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> CreateHmacKey {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct CreateHmacKey(RequestBuilder<crate::model::CreateHmacKeyRequest>);

impl CreateHmacKey {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::CreateHmacKeyRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::CreateHmacKeyResponse> {
        (*self.0.stub)
            .create_hmac_key(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [project][crate::model::CreateHmacKeyRequest::project].
    pub fn set_project<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.project = v.into();
        self
    }

    /// Sets the value of
    /// [service_account_email][crate::model::CreateHmacKeyRequest::service_account_email].
    pub fn set_service_account_email<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.service_account_email = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for CreateHmacKey {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::delete_hmac_key][crate::client::Storage::delete_hmac_key] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::DeleteHmacKey;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> DeleteHmacKey {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct DeleteHmacKey(RequestBuilder<crate::model::DeleteHmacKeyRequest>);

impl DeleteHmacKey {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::DeleteHmacKeyRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<()> {
        (*self.0.stub)
            .delete_hmac_key(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [access_id][crate::model::DeleteHmacKeyRequest::access_id].
    pub fn set_access_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.access_id = v.into();
        self
    }

    /// Sets the value of
    /// [project][crate::model::DeleteHmacKeyRequest::project].
    pub fn set_project<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.project = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for DeleteHmacKey {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::get_hmac_key][crate::client::Storage::get_hmac_key] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::GetHmacKey;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> GetHmacKey {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GetHmacKey(RequestBuilder<crate::model::GetHmacKeyRequest>);

impl GetHmacKey {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::GetHmacKeyRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::HmacKeyMetadata> {
        (*self.0.stub)
            .get_hmac_key(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [access_id][crate::model::GetHmacKeyRequest::access_id].
    pub fn set_access_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.access_id = v.into();
        self
    }

    /// Sets the value of [project][crate::model::GetHmacKeyRequest::project].
    pub fn set_project<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.project = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for GetHmacKey {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::list_hmac_keys][crate::client::Storage::list_hmac_keys] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::ListHmacKeys;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let mut items = builder.by_item();
/// while let Some(result) = items.next().await {
///   let item = result?;
/// }
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> ListHmacKeys {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ListHmacKeys(RequestBuilder<crate::model::ListHmacKeysRequest>);

impl ListHmacKeys {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::ListHmacKeysRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::ListHmacKeysResponse> {
        (*self.0.stub)
            .list_hmac_keys(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Streams each page in the collection.
    pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListHmacKeysResponse, gax::error::Error> {
        let token = self.0.request.page_token.clone();
        let execute = move |token: String| {
            let mut builder = self.clone();
            builder.0.request = builder.0.request.set_page_token(token);
            builder.send()
        };
        gax::paginator::Paginator::new(token, execute)
    }

    /// Streams each item in the collection.
    pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::ListHmacKeysResponse, gax::error::Error> {
        self.by_page().items()
    }

    /// Sets the value of [project][crate::model::ListHmacKeysRequest::project].
    pub fn set_project<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.project = v.into();
        self
    }

    /// Sets the value of
    /// [page_size][crate::model::ListHmacKeysRequest::page_size].
    pub fn set_page_size<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.0.request.page_size = v.into();
        self
    }

    /// Sets the value of
    /// [page_token][crate::model::ListHmacKeysRequest::page_token].
    pub fn set_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.page_token = v.into();
        self
    }

    /// Sets the value of
    /// [service_account_email][crate::model::ListHmacKeysRequest::service_account_email].
    pub fn set_service_account_email<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.0.request.service_account_email = v.into();
        self
    }

    /// Sets the value of
    /// [show_deleted_keys][crate::model::ListHmacKeysRequest::show_deleted_keys].
    pub fn set_show_deleted_keys<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.0.request.show_deleted_keys = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for ListHmacKeys {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [Storage::update_hmac_key][crate::client::Storage::update_hmac_key] calls.
///
/// # Example
/// ```no_run
/// # use gcs_storage::builder::storage::UpdateHmacKey;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> UpdateHmacKey {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct UpdateHmacKey(RequestBuilder<crate::model::UpdateHmacKeyRequest>);

impl UpdateHmacKey {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<crate::model::UpdateHmacKeyRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<crate::model::HmacKeyMetadata> {
        (*self.0.stub)
            .update_hmac_key(self.0.request, self.0.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Sets the value of
    /// [hmac_key][crate::model::UpdateHmacKeyRequest::hmac_key].
    pub fn set_hmac_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::HmacKeyMetadata>,
    {
        self.0.request.hmac_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [hmac_key][crate::model::UpdateHmacKeyRequest::hmac_key].
    pub fn set_or_clear_hmac_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::HmacKeyMetadata>,
    {
        self.0.request.hmac_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [update_mask][crate::model::UpdateHmacKeyRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.0.request.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [update_mask][crate::model::UpdateHmacKeyRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.0.request.update_mask = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for UpdateHmacKey {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.0.options
    }
}
