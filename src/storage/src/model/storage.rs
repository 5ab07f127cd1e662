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

//! The `google.storage.v2` messages.

/// Request message for DeleteBucket.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteBucketRequest {
    /// Name of a bucket to delete.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Makes the operation conditional on whether the current metageneration
    /// matches the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the current metageneration
    /// does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_not_match: std::option::Option<i64>,
}

impl DeleteBucketRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteBucketRequest::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.into();
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::DeleteBucketRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::DeleteBucketRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::DeleteBucketRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::DeleteBucketRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DeleteBucketRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.DeleteBucketRequest"
    }
}

/// Request message for GetBucket.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetBucketRequest {
    /// Name of a bucket.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Makes the operation conditional on whether the current metageneration
    /// matches the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the current metageneration
    /// does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_not_match: std::option::Option<i64>,

    /// Mask specifying which fields to read. A `*` field may be used to
    /// indicate all fields. If no mask is specified, will default to all
    /// fields.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_mask: std::option::Option<wkt::FieldMask>,
}

impl GetBucketRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetBucketRequest::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.into();
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::GetBucketRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::GetBucketRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::GetBucketRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::GetBucketRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [read_mask][crate::model::GetBucketRequest::read_mask].
    pub fn set_read_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.read_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [read_mask][crate::model::GetBucketRequest::read_mask].
    pub fn set_or_clear_read_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.read_mask = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for GetBucketRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.GetBucketRequest"
    }
}

/// Request message for CreateBucket.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateBucketRequest {
    /// The project to which this bucket will belong.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Properties of the new bucket being inserted. The project and name of the
    /// bucket are specified in the `parent` and `bucket_id` fields,
    /// respectively. Populating those fields in `bucket` will result in an
    /// error.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub bucket: std::option::Option<crate::model::Bucket>,

    /// The ID to use for this bucket, which will become the final component of
    /// the bucket's resource name.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub bucket_id: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub predefined_acl: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub predefined_default_object_acl: std::string::String,

    /// If true, enable object retention on the bucket.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub enable_object_retention: bool,
}

impl CreateBucketRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateBucketRequest::parent].
    pub fn set_parent<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parent = v.into();
        self
    }

    /// Sets the value of [bucket][crate::model::CreateBucketRequest::bucket].
    pub fn set_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Bucket>,
    {
        self.bucket = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [bucket][crate::model::CreateBucketRequest::bucket].
    pub fn set_or_clear_bucket<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Bucket>,
    {
        self.bucket = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [bucket_id][crate::model::CreateBucketRequest::bucket_id].
    pub fn set_bucket_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bucket_id = v.into();
        self
    }

    /// Sets the value of
    /// [predefined_acl][crate::model::CreateBucketRequest::predefined_acl].
    pub fn set_predefined_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.predefined_acl = v.into();
        self
    }

    /// Sets the value of
    /// [predefined_default_object_acl][crate::model::CreateBucketRequest::predefined_default_object_acl].
    pub fn set_predefined_default_object_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.predefined_default_object_acl = v.into();
        self
    }

    /// Sets the value of
    /// [enable_object_retention][crate::model::CreateBucketRequest::enable_object_retention].
    pub fn set_enable_object_retention<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enable_object_retention = v.into();
        self
    }
}

impl wkt::message::Message for CreateBucketRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.CreateBucketRequest"
    }
}

/// Request message for ListBuckets.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListBucketsRequest {
    /// The project whose buckets we are listing.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Maximum number of items to return in a single response.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub page_size: i32,

    /// A previously-returned page token representing part of the larger set of
    /// results to view.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// Filter results to buckets whose names begin with this prefix.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub prefix: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_mask: std::option::Option<wkt::FieldMask>,
}

impl ListBucketsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListBucketsRequest::parent].
    pub fn set_parent<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parent = v.into();
        self
    }

    /// Sets the value of
    /// [page_size][crate::model::ListBucketsRequest::page_size].
    pub fn set_page_size<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.page_size = v.into();
        self
    }

    /// Sets the value of
    /// [page_token][crate::model::ListBucketsRequest::page_token].
    pub fn set_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [prefix][crate::model::ListBucketsRequest::prefix].
    pub fn set_prefix<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.prefix = v.into();
        self
    }

    /// Sets the value of
    /// [read_mask][crate::model::ListBucketsRequest::read_mask].
    pub fn set_read_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.read_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [read_mask][crate::model::ListBucketsRequest::read_mask].
    pub fn set_or_clear_read_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.read_mask = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for ListBucketsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.ListBucketsRequest"
    }
}

/// The result of a call to Buckets.ListBuckets
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListBucketsResponse {
    /// The list of items.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub buckets: std::vec::Vec<crate::model::Bucket>,

    /// The continuation token, used to page through large result sets. Provide
    /// this value in a subsequent request to return the next page of results.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl ListBucketsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [buckets][crate::model::ListBucketsResponse::buckets].
    pub fn set_buckets<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Bucket>,
    {
        self.buckets = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of
    /// [next_page_token][crate::model::ListBucketsResponse::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListBucketsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.ListBucketsResponse"
    }
}

/// Request message for LockBucketRetentionPolicyRequest.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LockBucketRetentionPolicyRequest {
    /// Name of a bucket.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub bucket: std::string::String,

    /// Makes the operation conditional on whether bucket's current
    /// metageneration matches the given value. Must be positive.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub if_metageneration_match: i64,
}

impl LockBucketRetentionPolicyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [bucket][crate::model::LockBucketRetentionPolicyRequest::bucket].
    pub fn set_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bucket = v.into();
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::LockBucketRetentionPolicyRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = v.into();
        self
    }
}

impl wkt::message::Message for LockBucketRetentionPolicyRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.LockBucketRetentionPolicyRequest"
    }
}

/// Request for UpdateBucket method.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateBucketRequest {
    /// The bucket to update. The bucket's `name` field will be used to identify
    /// the bucket.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub bucket: std::option::Option<crate::model::Bucket>,

    /// Makes the operation conditional on whether the current metageneration
    /// matches the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the current metageneration
    /// does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_not_match: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub predefined_acl: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub predefined_default_object_acl: std::string::String,

    /// List of fields to be updated. To specify ALL fields, equivalent to the
    /// JSON API's "update" function, specify a single field with the value `*`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,
}

impl UpdateBucketRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bucket][crate::model::UpdateBucketRequest::bucket].
    pub fn set_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Bucket>,
    {
        self.bucket = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [bucket][crate::model::UpdateBucketRequest::bucket].
    pub fn set_or_clear_bucket<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Bucket>,
    {
        self.bucket = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::UpdateBucketRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::UpdateBucketRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::UpdateBucketRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::UpdateBucketRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [predefined_acl][crate::model::UpdateBucketRequest::predefined_acl].
    pub fn set_predefined_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.predefined_acl = v.into();
        self
    }

    /// Sets the value of
    /// [predefined_default_object_acl][crate::model::UpdateBucketRequest::predefined_default_object_acl].
    pub fn set_predefined_default_object_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.predefined_default_object_acl = v.into();
        self
    }

    /// Sets the value of
    /// [update_mask][crate::model::UpdateBucketRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [update_mask][crate::model::UpdateBucketRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for UpdateBucketRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.UpdateBucketRequest"
    }
}

/// Request message for DeleteNotificationConfig.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteNotificationConfigRequest {
    /// The parent bucket of the NotificationConfig.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl DeleteNotificationConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [name][crate::model::DeleteNotificationConfigRequest::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteNotificationConfigRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.DeleteNotificationConfigRequest"
    }
}

/// Request message for GetNotificationConfig.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetNotificationConfigRequest {
    /// The parent bucket of the NotificationConfig. Format:
    /// `projects/{project}/buckets/{bucket}/notificationConfigs/{notificationConfig}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl GetNotificationConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [name][crate::model::GetNotificationConfigRequest::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetNotificationConfigRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.GetNotificationConfigRequest"
    }
}

/// Request message for CreateNotificationConfig.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateNotificationConfigRequest {
    /// The bucket to which this NotificationConfig belongs.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Properties of the NotificationConfig to be inserted.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notification_config: std::option::Option<crate::model::NotificationConfig>,
}

impl CreateNotificationConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [parent][crate::model::CreateNotificationConfigRequest::parent].
    pub fn set_parent<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parent = v.into();
        self
    }

    /// Sets the value of
    /// [notification_config][crate::model::CreateNotificationConfigRequest::notification_config].
    pub fn set_notification_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::NotificationConfig>,
    {
        self.notification_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [notification_config][crate::model::CreateNotificationConfigRequest::notification_config].
    pub fn set_or_clear_notification_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::NotificationConfig>,
    {
        self.notification_config = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateNotificationConfigRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.CreateNotificationConfigRequest"
    }
}

/// Request message for ListNotifications.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListNotificationConfigsRequest {
    /// Name of a Google Cloud Storage bucket.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Maximum number of items to return in a single response.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub page_size: i32,

    /// A previously-returned page token representing part of the larger set of
    /// results to view.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,
}

impl ListNotificationConfigsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [parent][crate::model::ListNotificationConfigsRequest::parent].
    pub fn set_parent<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parent = v.into();
        self
    }

    /// Sets the value of
    /// [page_size][crate::model::ListNotificationConfigsRequest::page_size].
    pub fn set_page_size<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.page_size = v.into();
        self
    }

    /// Sets the value of
    /// [page_token][crate::model::ListNotificationConfigsRequest::page_token].
    pub fn set_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListNotificationConfigsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.ListNotificationConfigsRequest"
    }
}

/// The result of a call to ListNotificationConfigs
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListNotificationConfigsResponse {
    /// The list of items.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub notification_configs: std::vec::Vec<crate::model::NotificationConfig>,

    /// The continuation token, used to page through large result sets. Provide
    /// this value in a subsequent request to return the next page of results.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl ListNotificationConfigsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [notification_configs][crate::model::ListNotificationConfigsResponse::notification_configs].
    pub fn set_notification_configs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::NotificationConfig>,
    {
        self.notification_configs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of
    /// [next_page_token][crate::model::ListNotificationConfigsResponse::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListNotificationConfigsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.ListNotificationConfigsResponse"
    }
}

/// Request message for ComposeObject.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ComposeObjectRequest {
    /// Properties of the resulting object.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub destination: std::option::Option<crate::model::Object>,

    /// The list of source objects that will be concatenated into a single
    /// object.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub source_objects: std::vec::Vec<crate::model::compose_object_request::SourceObject>,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub destination_predefined_acl: std::string::String,

    /// Makes the operation conditional on whether the object's current
    /// generation matches the given value. Setting to 0 makes the operation
    /// succeed only if there are no live versions of the object.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_generation_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the current metageneration
    /// matches the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_match: std::option::Option<i64>,

    /// Resource name of the Cloud KMS key used to encrypt the object.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub kms_key: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub common_object_request_params: std::option::Option<crate::model::CommonObjectRequestParams>,

    /// The checksums of the complete object. This will be validated against the
    /// combined checksums of the component objects.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub object_checksums: std::option::Option<crate::model::ObjectChecksums>,
}

impl ComposeObjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [destination][crate::model::ComposeObjectRequest::destination].
    pub fn set_destination<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Object>,
    {
        self.destination = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [destination][crate::model::ComposeObjectRequest::destination].
    pub fn set_or_clear_destination<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Object>,
    {
        self.destination = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [source_objects][crate::model::ComposeObjectRequest::source_objects].
    pub fn set_source_objects<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::compose_object_request::SourceObject>,
    {
        self.source_objects = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of
    /// [destination_predefined_acl][crate::model::ComposeObjectRequest::destination_predefined_acl].
    pub fn set_destination_predefined_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.destination_predefined_acl = v.into();
        self
    }

    /// Sets the value of
    /// [if_generation_match][crate::model::ComposeObjectRequest::if_generation_match].
    pub fn set_if_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_match][crate::model::ComposeObjectRequest::if_generation_match].
    pub fn set_or_clear_if_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::ComposeObjectRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::ComposeObjectRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [kms_key][crate::model::ComposeObjectRequest::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = v.into();
        self
    }

    /// Sets the value of
    /// [common_object_request_params][crate::model::ComposeObjectRequest::common_object_request_params].
    pub fn set_common_object_request_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.common_object_request_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [common_object_request_params][crate::model::ComposeObjectRequest::common_object_request_params].
    pub fn set_or_clear_common_object_request_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.common_object_request_params = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [object_checksums][crate::model::ComposeObjectRequest::object_checksums].
    pub fn set_object_checksums<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectChecksums>,
    {
        self.object_checksums = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [object_checksums][crate::model::ComposeObjectRequest::object_checksums].
    pub fn set_or_clear_object_checksums<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ObjectChecksums>,
    {
        self.object_checksums = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for ComposeObjectRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.ComposeObjectRequest"
    }
}

/// Defines additional types related to [ComposeObjectRequest].
pub mod compose_object_request {
    #[allow(unused_imports)]
    use super::*;

    /// Description of a source object for a composition request.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct SourceObject {
        /// The source object's name. All source objects must reside in the same
        /// bucket.
        #[serde(skip_serializing_if = "std::string::String::is_empty")]
        pub name: std::string::String,

        /// The generation of this object to use as the source.
        #[serde_as(as = "serde_with::DisplayFromStr")]
        #[serde(skip_serializing_if = "crate::model::is_default")]
        pub generation: i64,

        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub object_preconditions: std::option::Option<crate::model::compose_object_request::source_object::ObjectPreconditions>,
    }

    impl SourceObject {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of
        /// [name][crate::model::compose_object_request::SourceObject::name].
        pub fn set_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.name = v.into();
            self
        }

        /// Sets the value of
        /// [generation][crate::model::compose_object_request::SourceObject::generation].
        pub fn set_generation<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.generation = v.into();
            self
        }

        /// Sets the value of
        /// [object_preconditions][crate::model::compose_object_request::SourceObject::object_preconditions].
        pub fn set_object_preconditions<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::compose_object_request::source_object::ObjectPreconditions>,
        {
            self.object_preconditions = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of
        /// [object_preconditions][crate::model::compose_object_request::SourceObject::object_preconditions].
        pub fn set_or_clear_object_preconditions<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::compose_object_request::source_object::ObjectPreconditions>,
        {
            self.object_preconditions = v.map(|x| x.into());
            self
        }
    }

    impl wkt::message::Message for SourceObject {
        fn typename() -> &'static str {
            "type.googleapis.com/google.storage.v2.ComposeObjectRequest.SourceObject"
        }
    }

    /// Defines additional types related to [SourceObject].
    pub mod source_object {
        #[allow(unused_imports)]
        use super::*;

        /// Preconditions for a source object of a composition request.
        #[serde_with::serde_as]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct ObjectPreconditions {
            /// Only perform the composition if the generation of the source
            /// object that would be used matches this value.
            #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
            #[serde(skip_serializing_if = "std::option::Option::is_none")]
            pub if_generation_match: std::option::Option<i64>,
        }

        impl ObjectPreconditions {
            pub fn new() -> Self {
                std::default::Default::default()
            }

            /// Sets the value of
            /// [if_generation_match][crate::model::compose_object_request::source_object::ObjectPreconditions::if_generation_match].
            pub fn set_if_generation_match<T>(mut self, v: T) -> Self
            where
                T: std::convert::Into<i64>,
            {
                self.if_generation_match = std::option::Option::Some(v.into());
                self
            }

            /// Sets or clears the value of
            /// [if_generation_match][crate::model::compose_object_request::source_object::ObjectPreconditions::if_generation_match].
            pub fn set_or_clear_if_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
            where
                T: std::convert::Into<i64>,
            {
                self.if_generation_match = v.map(|x| x.into());
                self
            }
        }

        impl wkt::message::Message for ObjectPreconditions {
            fn typename() -> &'static str {
                "type.googleapis.com/google.storage.v2.ComposeObjectRequest.SourceObject.ObjectPreconditions"
            }
        }
    }
}

/// Message for deleting an object.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteObjectRequest {
    /// Name of the bucket in which the object resides.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub bucket: std::string::String,

    /// The name of the finalized object to delete.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub object: std::string::String,

    /// If present, permanently deletes a specific revision of this object (as
    /// opposed to the latest version, the default).
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub generation: i64,

    /// Makes the operation conditional on whether the object's current
    /// generation matches the given value. Setting to 0 makes the operation
    /// succeed only if there are no live versions of the object.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_generation_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the object's live generation
    /// does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_generation_not_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the current metageneration
    /// matches the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the current metageneration
    /// does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_not_match: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub common_object_request_params: std::option::Option<crate::model::CommonObjectRequestParams>,
}

impl DeleteObjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bucket][crate::model::DeleteObjectRequest::bucket].
    pub fn set_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bucket = v.into();
        self
    }

    /// Sets the value of [object][crate::model::DeleteObjectRequest::object].
    pub fn set_object<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.object = v.into();
        self
    }

    /// Sets the value of
    /// [generation][crate::model::DeleteObjectRequest::generation].
    pub fn set_generation<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.generation = v.into();
        self
    }

    /// Sets the value of
    /// [if_generation_match][crate::model::DeleteObjectRequest::if_generation_match].
    pub fn set_if_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_match][crate::model::DeleteObjectRequest::if_generation_match].
    pub fn set_or_clear_if_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_not_match][crate::model::DeleteObjectRequest::if_generation_not_match].
    pub fn set_if_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_not_match][crate::model::DeleteObjectRequest::if_generation_not_match].
    pub fn set_or_clear_if_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::DeleteObjectRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::DeleteObjectRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::DeleteObjectRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::DeleteObjectRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [common_object_request_params][crate::model::DeleteObjectRequest::common_object_request_params].
    pub fn set_common_object_request_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.common_object_request_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [common_object_request_params][crate::model::DeleteObjectRequest::common_object_request_params].
    pub fn set_or_clear_common_object_request_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.common_object_request_params = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DeleteObjectRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.DeleteObjectRequest"
    }
}

/// Message for restoring an object. `bucket`, `object`, and `generation`
/// **must** be set.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RestoreObjectRequest {
    /// Name of the bucket in which the object resides.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub bucket: std::string::String,

    /// The name of the object to restore.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub object: std::string::String,

    /// The specific revision of the object to restore.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub generation: i64,

    /// Restore token used to differentiate soft-deleted objects with the same
    /// name and generation. Only applicable for hierarchical namespace buckets.
    /// This parameter is optional, and is only required in the rare case when
    /// there are multiple soft-deleted objects with the same name and
    /// generation.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub restore_token: std::string::String,

    /// Makes the operation conditional on whether the object's current
    /// generation matches the given value. Setting to 0 makes the operation
    /// succeed only if there are no live versions of the object.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_generation_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the object's live generation
    /// does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_generation_not_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the current metageneration
    /// matches the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the current metageneration
    /// does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_not_match: std::option::Option<i64>,

    /// If false or unset, the bucket's default object ACL will be used. If
    /// true, copy the source object's access controls. Return an error if
    /// bucket has UBLA enabled.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub copy_source_acl: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub common_object_request_params: std::option::Option<crate::model::CommonObjectRequestParams>,
}

impl RestoreObjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bucket][crate::model::RestoreObjectRequest::bucket].
    pub fn set_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bucket = v.into();
        self
    }

    /// Sets the value of [object][crate::model::RestoreObjectRequest::object].
    pub fn set_object<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.object = v.into();
        self
    }

    /// Sets the value of
    /// [generation][crate::model::RestoreObjectRequest::generation].
    pub fn set_generation<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.generation = v.into();
        self
    }

    /// Sets the value of
    /// [restore_token][crate::model::RestoreObjectRequest::restore_token].
    pub fn set_restore_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.restore_token = v.into();
        self
    }

    /// Sets the value of
    /// [if_generation_match][crate::model::RestoreObjectRequest::if_generation_match].
    pub fn set_if_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_match][crate::model::RestoreObjectRequest::if_generation_match].
    pub fn set_or_clear_if_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_not_match][crate::model::RestoreObjectRequest::if_generation_not_match].
    pub fn set_if_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_not_match][crate::model::RestoreObjectRequest::if_generation_not_match].
    pub fn set_or_clear_if_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::RestoreObjectRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::RestoreObjectRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::RestoreObjectRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::RestoreObjectRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [copy_source_acl][crate::model::RestoreObjectRequest::copy_source_acl].
    pub fn set_copy_source_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.copy_source_acl = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [copy_source_acl][crate::model::RestoreObjectRequest::copy_source_acl].
    pub fn set_or_clear_copy_source_acl<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.copy_source_acl = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [common_object_request_params][crate::model::RestoreObjectRequest::common_object_request_params].
    pub fn set_common_object_request_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.common_object_request_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [common_object_request_params][crate::model::RestoreObjectRequest::common_object_request_params].
    pub fn set_or_clear_common_object_request_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.common_object_request_params = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for RestoreObjectRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.RestoreObjectRequest"
    }
}

/// Message for canceling an in-progress resumable upload.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelResumableWriteRequest {
    /// The upload_id of the resumable upload to cancel.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub upload_id: std::string::String,
}

impl CancelResumableWriteRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [upload_id][crate::model::CancelResumableWriteRequest::upload_id].
    pub fn set_upload_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.upload_id = v.into();
        self
    }
}

impl wkt::message::Message for CancelResumableWriteRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.CancelResumableWriteRequest"
    }
}

/// Empty response message for canceling an in-progress resumable upload, will
/// be extended as needed.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelResumableWriteResponse {}

impl CancelResumableWriteResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl wkt::message::Message for CancelResumableWriteResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.CancelResumableWriteResponse"
    }
}

/// Request message for GetObject.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetObjectRequest {
    /// Name of the bucket in which the object resides.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub bucket: std::string::String,

    /// Name of the object.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub object: std::string::String,

    /// If present, selects a specific revision of this object (as opposed to
    /// the latest version, the default).
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub generation: i64,

    /// If true, return the soft-deleted version of this object.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub soft_deleted: std::option::Option<bool>,

    /// Makes the operation conditional on whether the object's current
    /// generation matches the given value. Setting to 0 makes the operation
    /// succeed only if there are no live versions of the object.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_generation_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the object's live generation
    /// does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_generation_not_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the current metageneration
    /// matches the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the current metageneration
    /// does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_not_match: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub common_object_request_params: std::option::Option<crate::model::CommonObjectRequestParams>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_mask: std::option::Option<wkt::FieldMask>,
}

impl GetObjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bucket][crate::model::GetObjectRequest::bucket].
    pub fn set_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bucket = v.into();
        self
    }

    /// Sets the value of [object][crate::model::GetObjectRequest::object].
    pub fn set_object<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.object = v.into();
        self
    }

    /// Sets the value of
    /// [generation][crate::model::GetObjectRequest::generation].
    pub fn set_generation<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.generation = v.into();
        self
    }

    /// Sets the value of
    /// [soft_deleted][crate::model::GetObjectRequest::soft_deleted].
    pub fn set_soft_deleted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.soft_deleted = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [soft_deleted][crate::model::GetObjectRequest::soft_deleted].
    pub fn set_or_clear_soft_deleted<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.soft_deleted = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_match][crate::model::GetObjectRequest::if_generation_match].
    pub fn set_if_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_match][crate::model::GetObjectRequest::if_generation_match].
    pub fn set_or_clear_if_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_not_match][crate::model::GetObjectRequest::if_generation_not_match].
    pub fn set_if_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_not_match][crate::model::GetObjectRequest::if_generation_not_match].
    pub fn set_or_clear_if_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::GetObjectRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::GetObjectRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::GetObjectRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::GetObjectRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [common_object_request_params][crate::model::GetObjectRequest::common_object_request_params].
    pub fn set_common_object_request_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.common_object_request_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [common_object_request_params][crate::model::GetObjectRequest::common_object_request_params].
    pub fn set_or_clear_common_object_request_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.common_object_request_params = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [read_mask][crate::model::GetObjectRequest::read_mask].
    pub fn set_read_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.read_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [read_mask][crate::model::GetObjectRequest::read_mask].
    pub fn set_or_clear_read_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.read_mask = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for GetObjectRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.GetObjectRequest"
    }
}

/// Request message for UpdateObject.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateObjectRequest {
    /// The object to update. The object's bucket and name fields are used to
    /// identify the object to update.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub object: std::option::Option<crate::model::Object>,

    /// Makes the operation conditional on whether the object's current
    /// generation matches the given value. Setting to 0 makes the operation
    /// succeed only if there are no live versions of the object.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_generation_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the object's live generation
    /// does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_generation_not_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the current metageneration
    /// matches the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the current metageneration
    /// does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_not_match: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub predefined_acl: std::string::String,

    /// List of fields to be updated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub common_object_request_params: std::option::Option<crate::model::CommonObjectRequestParams>,
}

impl UpdateObjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [object][crate::model::UpdateObjectRequest::object].
    pub fn set_object<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Object>,
    {
        self.object = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [object][crate::model::UpdateObjectRequest::object].
    pub fn set_or_clear_object<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Object>,
    {
        self.object = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_match][crate::model::UpdateObjectRequest::if_generation_match].
    pub fn set_if_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_match][crate::model::UpdateObjectRequest::if_generation_match].
    pub fn set_or_clear_if_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_not_match][crate::model::UpdateObjectRequest::if_generation_not_match].
    pub fn set_if_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_not_match][crate::model::UpdateObjectRequest::if_generation_not_match].
    pub fn set_or_clear_if_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::UpdateObjectRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::UpdateObjectRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::UpdateObjectRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::UpdateObjectRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [predefined_acl][crate::model::UpdateObjectRequest::predefined_acl].
    pub fn set_predefined_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.predefined_acl = v.into();
        self
    }

    /// Sets the value of
    /// [update_mask][crate::model::UpdateObjectRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [update_mask][crate::model::UpdateObjectRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [common_object_request_params][crate::model::UpdateObjectRequest::common_object_request_params].
    pub fn set_common_object_request_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.common_object_request_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [common_object_request_params][crate::model::UpdateObjectRequest::common_object_request_params].
    pub fn set_or_clear_common_object_request_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.common_object_request_params = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for UpdateObjectRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.UpdateObjectRequest"
    }
}

/// Request message for ListObjects.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListObjectsRequest {
    /// Name of the bucket in which to look for objects.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Maximum number of items to return in a single response.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub page_size: i32,

    /// A previously-returned page token representing part of the larger set of
    /// results to view.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// If set, returns results in a directory-like mode. `items` will contain
    /// only objects whose names, aside from the `prefix`, do not contain
    /// `delimiter`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub delimiter: std::string::String,

    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub include_trailing_delimiter: bool,

    /// Filter results to objects whose names begin with this prefix.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub prefix: std::string::String,

    /// If `true`, lists all versions of an object as distinct results.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub versions: bool,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_mask: std::option::Option<wkt::FieldMask>,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub lexicographic_start: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub lexicographic_end: std::string::String,

    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub soft_deleted: bool,

    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub include_folders_as_prefixes: bool,

    /// Filter results to objects and prefixes that match this glob pattern.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub match_glob: std::string::String,
}

impl ListObjectsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListObjectsRequest::parent].
    pub fn set_parent<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parent = v.into();
        self
    }

    /// Sets the value of
    /// [page_size][crate::model::ListObjectsRequest::page_size].
    pub fn set_page_size<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.page_size = v.into();
        self
    }

    /// Sets the value of
    /// [page_token][crate::model::ListObjectsRequest::page_token].
    pub fn set_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page_token = v.into();
        self
    }

    /// Sets the value of
    /// [delimiter][crate::model::ListObjectsRequest::delimiter].
    pub fn set_delimiter<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.delimiter = v.into();
        self
    }

    /// Sets the value of
    /// [include_trailing_delimiter][crate::model::ListObjectsRequest::include_trailing_delimiter].
    pub fn set_include_trailing_delimiter<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.include_trailing_delimiter = v.into();
        self
    }

    /// Sets the value of [prefix][crate::model::ListObjectsRequest::prefix].
    pub fn set_prefix<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.prefix = v.into();
        self
    }

    /// Sets the value of
    /// [versions][crate::model::ListObjectsRequest::versions].
    pub fn set_versions<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.versions = v.into();
        self
    }

    /// Sets the value of
    /// [read_mask][crate::model::ListObjectsRequest::read_mask].
    pub fn set_read_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.read_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [read_mask][crate::model::ListObjectsRequest::read_mask].
    pub fn set_or_clear_read_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.read_mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [lexicographic_start][crate::model::ListObjectsRequest::lexicographic_start].
    pub fn set_lexicographic_start<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.lexicographic_start = v.into();
        self
    }

    /// Sets the value of
    /// [lexicographic_end][crate::model::ListObjectsRequest::lexicographic_end].
    pub fn set_lexicographic_end<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.lexicographic_end = v.into();
        self
    }

    /// Sets the value of
    /// [soft_deleted][crate::model::ListObjectsRequest::soft_deleted].
    pub fn set_soft_deleted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.soft_deleted = v.into();
        self
    }

    /// Sets the value of
    /// [include_folders_as_prefixes][crate::model::ListObjectsRequest::include_folders_as_prefixes].
    pub fn set_include_folders_as_prefixes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.include_folders_as_prefixes = v.into();
        self
    }

    /// Sets the value of
    /// [match_glob][crate::model::ListObjectsRequest::match_glob].
    pub fn set_match_glob<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.match_glob = v.into();
        self
    }
}

impl wkt::message::Message for ListObjectsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.ListObjectsRequest"
    }
}

/// The result of a call to Objects.ListObjects
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListObjectsResponse {
    /// The list of items.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub objects: std::vec::Vec<crate::model::Object>,

    /// The list of prefixes of objects matching-but-not-listed up to and
    /// including the requested delimiter.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub prefixes: std::vec::Vec<std::string::String>,

    /// The continuation token, used to page through large result sets. Provide
    /// this value in a subsequent request to return the next page of results.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl ListObjectsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [objects][crate::model::ListObjectsResponse::objects].
    pub fn set_objects<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Object>,
    {
        self.objects = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of
    /// [prefixes][crate::model::ListObjectsResponse::prefixes].
    pub fn set_prefixes<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.prefixes = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of
    /// [next_page_token][crate::model::ListObjectsResponse::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListObjectsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.ListObjectsResponse"
    }
}

/// Request message for RewriteObject.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RewriteObjectRequest {
    /// The name of the destination object.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub destination_name: std::string::String,

    /// The name of the bucket containing the destination object.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub destination_bucket: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub destination_kms_key: std::string::String,

    /// Properties of the destination, post-rewrite object.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub destination: std::option::Option<crate::model::Object>,

    /// Name of the bucket in which to find the source object.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub source_bucket: std::string::String,

    /// Name of the source object.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub source_object: std::string::String,

    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub source_generation: i64,

    /// Include this field (from the previous rewrite response) on each rewrite
    /// request after the first one, until the rewrite response 'done' flag is
    /// true.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub rewrite_token: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub destination_predefined_acl: std::string::String,

    /// Makes the operation conditional on whether the object's current
    /// generation matches the given value. Setting to 0 makes the operation
    /// succeed only if there are no live versions of the object.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_generation_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the object's live generation
    /// does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_generation_not_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the current metageneration
    /// matches the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the current metageneration
    /// does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_not_match: std::option::Option<i64>,

    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_source_generation_match: std::option::Option<i64>,

    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_source_generation_not_match: std::option::Option<i64>,

    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_source_metageneration_match: std::option::Option<i64>,

    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_source_metageneration_not_match: std::option::Option<i64>,

    /// The maximum number of bytes that will be rewritten per rewrite request.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub max_bytes_rewritten_per_call: i64,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub copy_source_encryption_algorithm: std::string::String,

    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub copy_source_encryption_key_bytes: ::bytes::Bytes,

    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub copy_source_encryption_key_sha256_bytes: ::bytes::Bytes,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub common_object_request_params: std::option::Option<crate::model::CommonObjectRequestParams>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub object_checksums: std::option::Option<crate::model::ObjectChecksums>,
}

impl RewriteObjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [destination_name][crate::model::RewriteObjectRequest::destination_name].
    pub fn set_destination_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.destination_name = v.into();
        self
    }

    /// Sets the value of
    /// [destination_bucket][crate::model::RewriteObjectRequest::destination_bucket].
    pub fn set_destination_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.destination_bucket = v.into();
        self
    }

    /// Sets the value of
    /// [destination_kms_key][crate::model::RewriteObjectRequest::destination_kms_key].
    pub fn set_destination_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.destination_kms_key = v.into();
        self
    }

    /// Sets the value of
    /// [destination][crate::model::RewriteObjectRequest::destination].
    pub fn set_destination<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Object>,
    {
        self.destination = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [destination][crate::model::RewriteObjectRequest::destination].
    pub fn set_or_clear_destination<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Object>,
    {
        self.destination = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [source_bucket][crate::model::RewriteObjectRequest::source_bucket].
    pub fn set_source_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_bucket = v.into();
        self
    }

    /// Sets the value of
    /// [source_object][crate::model::RewriteObjectRequest::source_object].
    pub fn set_source_object<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_object = v.into();
        self
    }

    /// Sets the value of
    /// [source_generation][crate::model::RewriteObjectRequest::source_generation].
    pub fn set_source_generation<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.source_generation = v.into();
        self
    }

    /// Sets the value of
    /// [rewrite_token][crate::model::RewriteObjectRequest::rewrite_token].
    pub fn set_rewrite_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.rewrite_token = v.into();
        self
    }

    /// Sets the value of
    /// [destination_predefined_acl][crate::model::RewriteObjectRequest::destination_predefined_acl].
    pub fn set_destination_predefined_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.destination_predefined_acl = v.into();
        self
    }

    /// Sets the value of
    /// [if_generation_match][crate::model::RewriteObjectRequest::if_generation_match].
    pub fn set_if_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_match][crate::model::RewriteObjectRequest::if_generation_match].
    pub fn set_or_clear_if_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_not_match][crate::model::RewriteObjectRequest::if_generation_not_match].
    pub fn set_if_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_not_match][crate::model::RewriteObjectRequest::if_generation_not_match].
    pub fn set_or_clear_if_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::RewriteObjectRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::RewriteObjectRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::RewriteObjectRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::RewriteObjectRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_source_generation_match][crate::model::RewriteObjectRequest::if_source_generation_match].
    pub fn set_if_source_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_source_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_source_generation_match][crate::model::RewriteObjectRequest::if_source_generation_match].
    pub fn set_or_clear_if_source_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_source_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_source_generation_not_match][crate::model::RewriteObjectRequest::if_source_generation_not_match].
    pub fn set_if_source_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_source_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_source_generation_not_match][crate::model::RewriteObjectRequest::if_source_generation_not_match].
    pub fn set_or_clear_if_source_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_source_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_source_metageneration_match][crate::model::RewriteObjectRequest::if_source_metageneration_match].
    pub fn set_if_source_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_source_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_source_metageneration_match][crate::model::RewriteObjectRequest::if_source_metageneration_match].
    pub fn set_or_clear_if_source_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_source_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_source_metageneration_not_match][crate::model::RewriteObjectRequest::if_source_metageneration_not_match].
    pub fn set_if_source_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_source_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_source_metageneration_not_match][crate::model::RewriteObjectRequest::if_source_metageneration_not_match].
    pub fn set_or_clear_if_source_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_source_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [max_bytes_rewritten_per_call][crate::model::RewriteObjectRequest::max_bytes_rewritten_per_call].
    pub fn set_max_bytes_rewritten_per_call<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.max_bytes_rewritten_per_call = v.into();
        self
    }

    /// Sets the value of
    /// [copy_source_encryption_algorithm][crate::model::RewriteObjectRequest::copy_source_encryption_algorithm].
    pub fn set_copy_source_encryption_algorithm<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.copy_source_encryption_algorithm = v.into();
        self
    }

    /// Sets the value of
    /// [copy_source_encryption_key_bytes][crate::model::RewriteObjectRequest::copy_source_encryption_key_bytes].
    pub fn set_copy_source_encryption_key_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<::bytes::Bytes>,
    {
        self.copy_source_encryption_key_bytes = v.into();
        self
    }

    /// Sets the value of
    /// [copy_source_encryption_key_sha256_bytes][crate::model::RewriteObjectRequest::copy_source_encryption_key_sha256_bytes].
    pub fn set_copy_source_encryption_key_sha256_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<::bytes::Bytes>,
    {
        self.copy_source_encryption_key_sha256_bytes = v.into();
        self
    }

    /// Sets the value of
    /// [common_object_request_params][crate::model::RewriteObjectRequest::common_object_request_params].
    pub fn set_common_object_request_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.common_object_request_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [common_object_request_params][crate::model::RewriteObjectRequest::common_object_request_params].
    pub fn set_or_clear_common_object_request_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.common_object_request_params = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [object_checksums][crate::model::RewriteObjectRequest::object_checksums].
    pub fn set_object_checksums<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectChecksums>,
    {
        self.object_checksums = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [object_checksums][crate::model::RewriteObjectRequest::object_checksums].
    pub fn set_or_clear_object_checksums<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ObjectChecksums>,
    {
        self.object_checksums = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for RewriteObjectRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.RewriteObjectRequest"
    }
}

/// A rewrite response.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RewriteResponse {
    /// The total bytes written so far, which can be used to provide a waiting
    /// user with a progress indicator. This property is always present in the
    /// response.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub total_bytes_rewritten: i64,

    /// The total size of the object being copied in bytes. This property is
    /// always present in the response.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub object_size: i64,

    /// `true` if the copy is finished; otherwise, `false` if the copy is in progress.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub done: bool,

    /// A token to use in subsequent requests to continue copying data. This
    /// token is present in the response only when there is more data to copy.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub rewrite_token: std::string::String,

    /// A resource containing the metadata for the copied-to object. This
    /// property is present in the response only when copying completes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource: std::option::Option<crate::model::Object>,
}

impl RewriteResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [total_bytes_rewritten][crate::model::RewriteResponse::total_bytes_rewritten].
    pub fn set_total_bytes_rewritten<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.total_bytes_rewritten = v.into();
        self
    }

    /// Sets the value of
    /// [object_size][crate::model::RewriteResponse::object_size].
    pub fn set_object_size<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.object_size = v.into();
        self
    }

    /// Sets the value of [done][crate::model::RewriteResponse::done].
    pub fn set_done<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.done = v.into();
        self
    }

    /// Sets the value of
    /// [rewrite_token][crate::model::RewriteResponse::rewrite_token].
    pub fn set_rewrite_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.rewrite_token = v.into();
        self
    }

    /// Sets the value of [resource][crate::model::RewriteResponse::resource].
    pub fn set_resource<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Object>,
    {
        self.resource = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [resource][crate::model::RewriteResponse::resource].
    pub fn set_or_clear_resource<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Object>,
    {
        self.resource = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for RewriteResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.RewriteResponse"
    }
}

/// Request message StartResumableWrite.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StartResumableWriteRequest {
    /// The destination bucket, object, and metadata, as well as any
    /// preconditions.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub write_object_spec: std::option::Option<crate::model::WriteObjectSpec>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub common_object_request_params: std::option::Option<crate::model::CommonObjectRequestParams>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub object_checksums: std::option::Option<crate::model::ObjectChecksums>,
}

impl StartResumableWriteRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [write_object_spec][crate::model::StartResumableWriteRequest::write_object_spec].
    pub fn set_write_object_spec<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::WriteObjectSpec>,
    {
        self.write_object_spec = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [write_object_spec][crate::model::StartResumableWriteRequest::write_object_spec].
    pub fn set_or_clear_write_object_spec<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::WriteObjectSpec>,
    {
        self.write_object_spec = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [common_object_request_params][crate::model::StartResumableWriteRequest::common_object_request_params].
    pub fn set_common_object_request_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.common_object_request_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [common_object_request_params][crate::model::StartResumableWriteRequest::common_object_request_params].
    pub fn set_or_clear_common_object_request_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.common_object_request_params = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [object_checksums][crate::model::StartResumableWriteRequest::object_checksums].
    pub fn set_object_checksums<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectChecksums>,
    {
        self.object_checksums = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [object_checksums][crate::model::StartResumableWriteRequest::object_checksums].
    pub fn set_or_clear_object_checksums<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ObjectChecksums>,
    {
        self.object_checksums = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for StartResumableWriteRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.StartResumableWriteRequest"
    }
}

/// Response object for `StartResumableWrite`.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StartResumableWriteResponse {
    /// A unique identifier for the initiated resumable write operation.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub upload_id: std::string::String,
}

impl StartResumableWriteResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [upload_id][crate::model::StartResumableWriteResponse::upload_id].
    pub fn set_upload_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.upload_id = v.into();
        self
    }
}

impl wkt::message::Message for StartResumableWriteResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.StartResumableWriteResponse"
    }
}

/// Describes an attempt to insert an object, possibly over multiple requests.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WriteObjectSpec {
    /// Destination object, including its name and its metadata.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource: std::option::Option<crate::model::Object>,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub predefined_acl: std::string::String,

    /// Makes the operation conditional on whether the object's current
    /// generation matches the given value. Setting to 0 makes the operation
    /// succeed only if there are no live versions of the object.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_generation_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the object's live generation
    /// does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_generation_not_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the current metageneration
    /// matches the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the current metageneration
    /// does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_not_match: std::option::Option<i64>,

    /// The expected final object size being uploaded.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub object_size: std::option::Option<i64>,
}

impl WriteObjectSpec {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource][crate::model::WriteObjectSpec::resource].
    pub fn set_resource<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Object>,
    {
        self.resource = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [resource][crate::model::WriteObjectSpec::resource].
    pub fn set_or_clear_resource<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Object>,
    {
        self.resource = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [predefined_acl][crate::model::WriteObjectSpec::predefined_acl].
    pub fn set_predefined_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.predefined_acl = v.into();
        self
    }

    /// Sets the value of
    /// [if_generation_match][crate::model::WriteObjectSpec::if_generation_match].
    pub fn set_if_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_match][crate::model::WriteObjectSpec::if_generation_match].
    pub fn set_or_clear_if_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_not_match][crate::model::WriteObjectSpec::if_generation_not_match].
    pub fn set_if_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_not_match][crate::model::WriteObjectSpec::if_generation_not_match].
    pub fn set_or_clear_if_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::WriteObjectSpec::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::WriteObjectSpec::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::WriteObjectSpec::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::WriteObjectSpec::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [object_size][crate::model::WriteObjectSpec::object_size].
    pub fn set_object_size<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.object_size = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [object_size][crate::model::WriteObjectSpec::object_size].
    pub fn set_or_clear_object_size<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.object_size = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for WriteObjectSpec {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.WriteObjectSpec"
    }
}

/// Request message for MoveObject.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MoveObjectRequest {
    /// Name of the bucket in which the object resides.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub bucket: std::string::String,

    /// Name of the source object.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub source_object: std::string::String,

    /// Name of the destination object.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub destination_object: std::string::String,

    /// Makes the operation conditional on whether the source object's current
    /// generation matches the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_source_generation_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the source object's current
    /// generation does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_source_generation_not_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the source object's current
    /// metageneration matches the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_source_metageneration_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the source object's current
    /// metageneration does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_source_metageneration_not_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the destination object's
    /// current generation matches the given value. Setting to 0 makes the
    /// operation succeed only if there are no live versions of the object.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_generation_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the destination object's
    /// current generation does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_generation_not_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the destination object's
    /// current metageneration matches the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_match: std::option::Option<i64>,

    /// Makes the operation conditional on whether the destination object's
    /// current metageneration does not match the given value.
    #[serde_as(as = "std::option::Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub if_metageneration_not_match: std::option::Option<i64>,
}

impl MoveObjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bucket][crate::model::MoveObjectRequest::bucket].
    pub fn set_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bucket = v.into();
        self
    }

    /// Sets the value of
    /// [source_object][crate::model::MoveObjectRequest::source_object].
    pub fn set_source_object<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_object = v.into();
        self
    }

    /// Sets the value of
    /// [destination_object][crate::model::MoveObjectRequest::destination_object].
    pub fn set_destination_object<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.destination_object = v.into();
        self
    }

    /// Sets the value of
    /// [if_source_generation_match][crate::model::MoveObjectRequest::if_source_generation_match].
    pub fn set_if_source_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_source_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_source_generation_match][crate::model::MoveObjectRequest::if_source_generation_match].
    pub fn set_or_clear_if_source_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_source_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_source_generation_not_match][crate::model::MoveObjectRequest::if_source_generation_not_match].
    pub fn set_if_source_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_source_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_source_generation_not_match][crate::model::MoveObjectRequest::if_source_generation_not_match].
    pub fn set_or_clear_if_source_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_source_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_source_metageneration_match][crate::model::MoveObjectRequest::if_source_metageneration_match].
    pub fn set_if_source_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_source_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_source_metageneration_match][crate::model::MoveObjectRequest::if_source_metageneration_match].
    pub fn set_or_clear_if_source_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_source_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_source_metageneration_not_match][crate::model::MoveObjectRequest::if_source_metageneration_not_match].
    pub fn set_if_source_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_source_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_source_metageneration_not_match][crate::model::MoveObjectRequest::if_source_metageneration_not_match].
    pub fn set_or_clear_if_source_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_source_metageneration_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_match][crate::model::MoveObjectRequest::if_generation_match].
    pub fn set_if_generation_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_match][crate::model::MoveObjectRequest::if_generation_match].
    pub fn set_or_clear_if_generation_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_generation_not_match][crate::model::MoveObjectRequest::if_generation_not_match].
    pub fn set_if_generation_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_generation_not_match][crate::model::MoveObjectRequest::if_generation_not_match].
    pub fn set_or_clear_if_generation_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_generation_not_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_match][crate::model::MoveObjectRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_match][crate::model::MoveObjectRequest::if_metageneration_match].
    pub fn set_or_clear_if_metageneration_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [if_metageneration_not_match][crate::model::MoveObjectRequest::if_metageneration_not_match].
    pub fn set_if_metageneration_not_match<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [if_metageneration_not_match][crate::model::MoveObjectRequest::if_metageneration_not_match].
    pub fn set_or_clear_if_metageneration_not_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.if_metageneration_not_match = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for MoveObjectRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.MoveObjectRequest"
    }
}

/// Request object for `QueryWriteStatus`.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryWriteStatusRequest {
    /// The name of the resume token for the object whose write status is being
    /// requested.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub upload_id: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub common_object_request_params: std::option::Option<crate::model::CommonObjectRequestParams>,
}

impl QueryWriteStatusRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [upload_id][crate::model::QueryWriteStatusRequest::upload_id].
    pub fn set_upload_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.upload_id = v.into();
        self
    }

    /// Sets the value of
    /// [common_object_request_params][crate::model::QueryWriteStatusRequest::common_object_request_params].
    pub fn set_common_object_request_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.common_object_request_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [common_object_request_params][crate::model::QueryWriteStatusRequest::common_object_request_params].
    pub fn set_or_clear_common_object_request_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CommonObjectRequestParams>,
    {
        self.common_object_request_params = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for QueryWriteStatusRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.QueryWriteStatusRequest"
    }
}

/// Response object for `QueryWriteStatus`.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryWriteStatusResponse {
    /// The response will set one of the following.
    #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
    pub write_status: std::option::Option<crate::model::query_write_status_response::WriteStatus>,
}

impl QueryWriteStatusResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [write_status][crate::model::QueryWriteStatusResponse::write_status].
    ///
    /// Note that all the setters affecting `write_status` are mutually
    /// exclusive.
    pub fn set_write_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::option::Option<crate::model::query_write_status_response::WriteStatus>>,
    {
        self.write_status = v.into();
        self
    }

    /// Sets the value of
    /// [write_status][crate::model::QueryWriteStatusResponse::write_status] to
    /// hold a `PersistedSize`.
    ///
    /// Note that all the setters affecting `write_status` are mutually
    /// exclusive.
    pub fn set_persisted_size<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.write_status = std::option::Option::Some(crate::model::query_write_status_response::WriteStatus::PersistedSize(v.into()));
        self
    }

    /// Sets the value of
    /// [write_status][crate::model::QueryWriteStatusResponse::write_status] to
    /// hold a `Resource`.
    ///
    /// Note that all the setters affecting `write_status` are mutually
    /// exclusive.
    pub fn set_resource<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::boxed::Box<crate::model::Object>>,
    {
        self.write_status = std::option::Option::Some(crate::model::query_write_status_response::WriteStatus::Resource(v.into()));
        self
    }

    /// The value of [write_status][crate::model::QueryWriteStatusResponse::write_status]
    /// if it holds a `PersistedSize`, `None` if the field is not set or
    /// holds a different branch.
    pub fn persisted_size(&self) -> std::option::Option<&i64> {
        #[allow(unreachable_patterns)]
        self.write_status.as_ref().and_then(|v| match v {
            crate::model::query_write_status_response::WriteStatus::PersistedSize(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// The value of [write_status][crate::model::QueryWriteStatusResponse::write_status]
    /// if it holds a `Resource`, `None` if the field is not set or
    /// holds a different branch.
    pub fn resource(&self) -> std::option::Option<&crate::model::Object> {
        #[allow(unreachable_patterns)]
        self.write_status.as_ref().and_then(|v| match v {
            crate::model::query_write_status_response::WriteStatus::Resource(v) => std::option::Option::Some(&**v),
            _ => std::option::Option::None,
        })
    }
}

impl wkt::message::Message for QueryWriteStatusResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.QueryWriteStatusResponse"
    }
}

/// Defines additional types related to [QueryWriteStatusResponse].
pub mod query_write_status_response {
    #[allow(unused_imports)]
    use super::*;

    /// The response will set one of the following.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum WriteStatus {
        /// The total number of bytes that have been processed for the given
        /// object from all `WriteObject` calls.
        PersistedSize(#[serde_as(as = "serde_with::DisplayFromStr")] i64),
        /// A resource containing the metadata for the uploaded object. Only set
        /// if the upload has finalized.
        Resource(std::boxed::Box<crate::model::Object>),
    }
}

/// Request message for GetServiceAccount.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetServiceAccountRequest {
    /// Project ID, in the format of "projects/{projectIdentifier}".
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub project: std::string::String,
}

impl GetServiceAccountRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [project][crate::model::GetServiceAccountRequest::project].
    pub fn set_project<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.project = v.into();
        self
    }
}

impl wkt::message::Message for GetServiceAccountRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.GetServiceAccountRequest"
    }
}

/// A service account, owned by Cloud Storage, which may be used when taking
/// action on behalf of a given project.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServiceAccount {
    /// The ID of the notification.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub email_address: std::string::String,
}

impl ServiceAccount {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [email_address][crate::model::ServiceAccount::email_address].
    pub fn set_email_address<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.email_address = v.into();
        self
    }
}

impl wkt::message::Message for ServiceAccount {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.ServiceAccount"
    }
}

/// Request message for CreateHmacKey.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateHmacKeyRequest {
    /// The project that the HMAC-owning service account lives in, in the format
    /// of "projects/{projectIdentifier}".
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub project: std::string::String,

    /// The service account to create the HMAC for.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub service_account_email: std::string::String,
}

impl CreateHmacKeyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [project][crate::model::CreateHmacKeyRequest::project].
    pub fn set_project<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.project = v.into();
        self
    }

    /// Sets the value of
    /// [service_account_email][crate::model::CreateHmacKeyRequest::service_account_email].
    pub fn set_service_account_email<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.service_account_email = v.into();
        self
    }
}

impl wkt::message::Message for CreateHmacKeyRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.CreateHmacKeyRequest"
    }
}

/// Create hmac response. The only time the secret for an HMAC will be returned.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateHmacKeyResponse {
    /// Key metadata.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metadata: std::option::Option<crate::model::HmacKeyMetadata>,

    /// HMAC key secret material.
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub secret_key_bytes: ::bytes::Bytes,
}

impl CreateHmacKeyResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [metadata][crate::model::CreateHmacKeyResponse::metadata].
    pub fn set_metadata<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::HmacKeyMetadata>,
    {
        self.metadata = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [metadata][crate::model::CreateHmacKeyResponse::metadata].
    pub fn set_or_clear_metadata<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::HmacKeyMetadata>,
    {
        self.metadata = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [secret_key_bytes][crate::model::CreateHmacKeyResponse::secret_key_bytes].
    pub fn set_secret_key_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<::bytes::Bytes>,
    {
        self.secret_key_bytes = v.into();
        self
    }
}

impl wkt::message::Message for CreateHmacKeyResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.CreateHmacKeyResponse"
    }
}

/// Request object to delete a given HMAC key.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteHmacKeyRequest {
    /// The identifying key for the HMAC to delete.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub access_id: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub project: std::string::String,
}

impl DeleteHmacKeyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [access_id][crate::model::DeleteHmacKeyRequest::access_id].
    pub fn set_access_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.access_id = v.into();
        self
    }

    /// Sets the value of
    /// [project][crate::model::DeleteHmacKeyRequest::project].
    pub fn set_project<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.project = v.into();
        self
    }
}

impl wkt::message::Message for DeleteHmacKeyRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.DeleteHmacKeyRequest"
    }
}

/// Request object to get metadata on a given HMAC key.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetHmacKeyRequest {
    /// The identifying key for the HMAC to delete.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub access_id: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub project: std::string::String,
}

impl GetHmacKeyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [access_id][crate::model::GetHmacKeyRequest::access_id].
    pub fn set_access_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.access_id = v.into();
        self
    }

    /// Sets the value of [project][crate::model::GetHmacKeyRequest::project].
    pub fn set_project<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.project = v.into();
        self
    }
}

impl wkt::message::Message for GetHmacKeyRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.GetHmacKeyRequest"
    }
}

/// Request to fetch a list of HMAC keys under a given project.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListHmacKeysRequest {
    /// The project to list HMAC keys for.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub project: std::string::String,

    /// Maximum number of items to return in a single response.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub page_size: i32,

    /// A previously-returned page token representing part of the larger set of
    /// results to view.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// If set, filters to only return HMAC keys for specified service account.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub service_account_email: std::string::String,

    /// If set, return deleted keys that have not yet been wiped out.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub show_deleted_keys: bool,
}

impl ListHmacKeysRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project][crate::model::ListHmacKeysRequest::project].
    pub fn set_project<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.project = v.into();
        self
    }

    /// Sets the value of
    /// [page_size][crate::model::ListHmacKeysRequest::page_size].
    pub fn set_page_size<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.page_size = v.into();
        self
    }

    /// Sets the value of
    /// [page_token][crate::model::ListHmacKeysRequest::page_token].
    pub fn set_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page_token = v.into();
        self
    }

    /// Sets the value of
    /// [service_account_email][crate::model::ListHmacKeysRequest::service_account_email].
    pub fn set_service_account_email<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.service_account_email = v.into();
        self
    }

    /// Sets the value of
    /// [show_deleted_keys][crate::model::ListHmacKeysRequest::show_deleted_keys].
    pub fn set_show_deleted_keys<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.show_deleted_keys = v.into();
        self
    }
}

impl wkt::message::Message for ListHmacKeysRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.ListHmacKeysRequest"
    }
}

/// Hmac key list response with next page information.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListHmacKeysResponse {
    /// The list of items.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub hmac_keys: std::vec::Vec<crate::model::HmacKeyMetadata>,

    /// The continuation token, used to page through large result sets. Provide
    /// this value in a subsequent request to return the next page of results.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl ListHmacKeysResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [hmac_keys][crate::model::ListHmacKeysResponse::hmac_keys].
    pub fn set_hmac_keys<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::HmacKeyMetadata>,
    {
        self.hmac_keys = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of
    /// [next_page_token][crate::model::ListHmacKeysResponse::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListHmacKeysResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.ListHmacKeysResponse"
    }
}

/// Request object to update an HMAC key state.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateHmacKeyRequest {
    /// The HMAC key to update. If present, the hmac_key's `id` field will be
    /// used to identify the key.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hmac_key: std::option::Option<crate::model::HmacKeyMetadata>,

    /// Update mask for hmac_key. Not specifying any fields will mean only the
    /// `state` field is updated to the value specified in `hmac_key`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,
}

impl UpdateHmacKeyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [hmac_key][crate::model::UpdateHmacKeyRequest::hmac_key].
    pub fn set_hmac_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::HmacKeyMetadata>,
    {
        self.hmac_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [hmac_key][crate::model::UpdateHmacKeyRequest::hmac_key].
    pub fn set_or_clear_hmac_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::HmacKeyMetadata>,
    {
        self.hmac_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [update_mask][crate::model::UpdateHmacKeyRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [update_mask][crate::model::UpdateHmacKeyRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for UpdateHmacKeyRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.UpdateHmacKeyRequest"
    }
}

/// Hmac Key Metadata, which includes all information other than the secret.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HmacKeyMetadata {
    /// Resource name ID of the key in the format
    /// {projectIdentifier}/{accessId}.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub id: std::string::String,

    /// Globally unique id for keys.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub access_id: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub project: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub service_account_email: std::string::String,

    /// The state of the key. Values are `ACTIVE`, `INACTIVE`, or `DELETED`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub state: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<wkt::Timestamp>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<wkt::Timestamp>,

    /// The etag of the HMAC key.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub etag: std::string::String,
}

impl HmacKeyMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::HmacKeyMetadata::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.into();
        self
    }

    /// Sets the value of [access_id][crate::model::HmacKeyMetadata::access_id].
    pub fn set_access_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.access_id = v.into();
        self
    }

    /// Sets the value of [project][crate::model::HmacKeyMetadata::project].
    pub fn set_project<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.project = v.into();
        self
    }

    /// Sets the value of
    /// [service_account_email][crate::model::HmacKeyMetadata::service_account_email].
    pub fn set_service_account_email<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.service_account_email = v.into();
        self
    }

    /// Sets the value of [state][crate::model::HmacKeyMetadata::state].
    pub fn set_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.state = v.into();
        self
    }

    /// Sets the value of
    /// [create_time][crate::model::HmacKeyMetadata::create_time].
    pub fn set_create_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.create_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [create_time][crate::model::HmacKeyMetadata::create_time].
    pub fn set_or_clear_create_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.create_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [update_time][crate::model::HmacKeyMetadata::update_time].
    pub fn set_update_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [update_time][crate::model::HmacKeyMetadata::update_time].
    pub fn set_or_clear_update_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [etag][crate::model::HmacKeyMetadata::etag].
    pub fn set_etag<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.etag = v.into();
        self
    }
}

impl wkt::message::Message for HmacKeyMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.HmacKeyMetadata"
    }
}

/// Parameters that can be passed to any object request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CommonObjectRequestParams {
    /// Encryption algorithm used with the Customer-Supplied Encryption Keys
    /// feature.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub encryption_algorithm: std::string::String,

    /// Encryption key used with the Customer-Supplied Encryption Keys feature.
    /// In raw bytes format (not base64-encoded).
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub encryption_key_bytes: ::bytes::Bytes,

    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub encryption_key_sha256_bytes: ::bytes::Bytes,
}

impl CommonObjectRequestParams {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of
    /// [encryption_algorithm][crate::model::CommonObjectRequestParams::encryption_algorithm].
    pub fn set_encryption_algorithm<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.encryption_algorithm = v.into();
        self
    }

    /// Sets the value of
    /// [encryption_key_bytes][crate::model::CommonObjectRequestParams::encryption_key_bytes].
    pub fn set_encryption_key_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<::bytes::Bytes>,
    {
        self.encryption_key_bytes = v.into();
        self
    }

    /// Sets the value of
    /// [encryption_key_sha256_bytes][crate::model::CommonObjectRequestParams::encryption_key_sha256_bytes].
    pub fn set_encryption_key_sha256_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<::bytes::Bytes>,
    {
        self.encryption_key_sha256_bytes = v.into();
        self
    }
}

impl wkt::message::Message for CommonObjectRequestParams {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.CommonObjectRequestParams"
    }
}

/// A directive to publish Pub/Sub notifications upon changes to a bucket.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NotificationConfig {
    /// The resource name of this NotificationConfig.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// The Pub/Sub topic to which this subscription publishes.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub topic: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub etag: std::string::String,

    /// If present, only send notifications about listed event types. If empty,
    /// sent notifications for all event types.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub event_types: std::vec::Vec<std::string::String>,

    /// A list of additional attributes to attach to each Pub/Sub message
    /// published for this NotificationConfig.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub custom_attributes: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub object_name_prefix: std::string::String,

    /// The desired content of the Payload.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub payload_format: std::string::String,
}

impl NotificationConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::NotificationConfig::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.into();
        self
    }

    /// Sets the value of [topic][crate::model::NotificationConfig::topic].
    pub fn set_topic<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.topic = v.into();
        self
    }

    /// Sets the value of [etag][crate::model::NotificationConfig::etag].
    pub fn set_etag<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.etag = v.into();
        self
    }

    /// Sets the value of
    /// [event_types][crate::model::NotificationConfig::event_types].
    pub fn set_event_types<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.event_types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of
    /// [custom_attributes][crate::model::NotificationConfig::custom_attributes].
    pub fn set_custom_attributes<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.custom_attributes = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of
    /// [object_name_prefix][crate::model::NotificationConfig::object_name_prefix].
    pub fn set_object_name_prefix<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.object_name_prefix = v.into();
        self
    }

    /// Sets the value of
    /// [payload_format][crate::model::NotificationConfig::payload_format].
    pub fn set_payload_format<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.payload_format = v.into();
        self
    }
}

impl wkt::message::Message for NotificationConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.NotificationConfig"
    }
}

/// Message used for storing full (not subrange) object checksums.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ObjectChecksums {
    /// CRC32C digest of the object data.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub crc32c: std::option::Option<u32>,

    /// 128 bit MD5 hash of the object data.
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub md5_hash: ::bytes::Bytes,
}

impl ObjectChecksums {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crc32c][crate::model::ObjectChecksums::crc32c].
    pub fn set_crc32c<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u32>,
    {
        self.crc32c = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [crc32c][crate::model::ObjectChecksums::crc32c].
    pub fn set_or_clear_crc32c<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u32>,
    {
        self.crc32c = v.map(|x| x.into());
        self
    }

    /// Sets the value of [md5_hash][crate::model::ObjectChecksums::md5_hash].
    pub fn set_md5_hash<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<::bytes::Bytes>,
    {
        self.md5_hash = v.into();
        self
    }
}

impl wkt::message::Message for ObjectChecksums {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.ObjectChecksums"
    }
}

/// A bucket.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Bucket {
    /// The name of the bucket. Format: `projects/{project}/buckets/{bucket}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// The user-chosen part of the bucket name.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub bucket_id: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub etag: std::string::String,

    /// The project which owns this bucket, in the format of
    /// "projects/{projectIdentifier}".
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub project: std::string::String,

    /// The metadata generation of this bucket.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub metageneration: i64,

    /// The location of the bucket.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub location: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub location_type: std::string::String,

    /// The bucket's default storage class, used whenever no storageClass is
    /// specified for a newly-created object.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub storage_class: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub rpo: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<wkt::Timestamp>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<wkt::Timestamp>,

    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub default_event_based_hold: bool,

    /// User-provided labels, in key/value pairs.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub versioning: std::option::Option<crate::model::bucket::Versioning>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub retention_policy: std::option::Option<crate::model::bucket::RetentionPolicy>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub iam_config: std::option::Option<crate::model::bucket::IamConfig>,

    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub satisfies_pzs: bool,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub custom_placement_config: std::option::Option<crate::model::bucket::CustomPlacementConfig>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub autoclass: std::option::Option<crate::model::bucket::Autoclass>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hierarchical_namespace: std::option::Option<crate::model::bucket::HierarchicalNamespace>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub soft_delete_policy: std::option::Option<crate::model::bucket::SoftDeletePolicy>,
}

impl Bucket {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Bucket::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.into();
        self
    }

    /// Sets the value of [bucket_id][crate::model::Bucket::bucket_id].
    pub fn set_bucket_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bucket_id = v.into();
        self
    }

    /// Sets the value of [etag][crate::model::Bucket::etag].
    pub fn set_etag<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.etag = v.into();
        self
    }

    /// Sets the value of [project][crate::model::Bucket::project].
    pub fn set_project<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.project = v.into();
        self
    }

    /// Sets the value of
    /// [metageneration][crate::model::Bucket::metageneration].
    pub fn set_metageneration<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.metageneration = v.into();
        self
    }

    /// Sets the value of [location][crate::model::Bucket::location].
    pub fn set_location<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location = v.into();
        self
    }

    /// Sets the value of [location_type][crate::model::Bucket::location_type].
    pub fn set_location_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location_type = v.into();
        self
    }

    /// Sets the value of [storage_class][crate::model::Bucket::storage_class].
    pub fn set_storage_class<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.storage_class = v.into();
        self
    }

    /// Sets the value of [rpo][crate::model::Bucket::rpo].
    pub fn set_rpo<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.rpo = v.into();
        self
    }

    /// Sets the value of [create_time][crate::model::Bucket::create_time].
    pub fn set_create_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.create_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [create_time][crate::model::Bucket::create_time].
    pub fn set_or_clear_create_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.create_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_time][crate::model::Bucket::update_time].
    pub fn set_update_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [update_time][crate::model::Bucket::update_time].
    pub fn set_or_clear_update_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [default_event_based_hold][crate::model::Bucket::default_event_based_hold].
    pub fn set_default_event_based_hold<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.default_event_based_hold = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::Bucket::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [versioning][crate::model::Bucket::versioning].
    pub fn set_versioning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::bucket::Versioning>,
    {
        self.versioning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [versioning][crate::model::Bucket::versioning].
    pub fn set_or_clear_versioning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::bucket::Versioning>,
    {
        self.versioning = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [retention_policy][crate::model::Bucket::retention_policy].
    pub fn set_retention_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::bucket::RetentionPolicy>,
    {
        self.retention_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [retention_policy][crate::model::Bucket::retention_policy].
    pub fn set_or_clear_retention_policy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::bucket::RetentionPolicy>,
    {
        self.retention_policy = v.map(|x| x.into());
        self
    }

    /// Sets the value of [iam_config][crate::model::Bucket::iam_config].
    pub fn set_iam_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::bucket::IamConfig>,
    {
        self.iam_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [iam_config][crate::model::Bucket::iam_config].
    pub fn set_or_clear_iam_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::bucket::IamConfig>,
    {
        self.iam_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [satisfies_pzs][crate::model::Bucket::satisfies_pzs].
    pub fn set_satisfies_pzs<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.satisfies_pzs = v.into();
        self
    }

    /// Sets the value of
    /// [custom_placement_config][crate::model::Bucket::custom_placement_config].
    pub fn set_custom_placement_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::bucket::CustomPlacementConfig>,
    {
        self.custom_placement_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [custom_placement_config][crate::model::Bucket::custom_placement_config].
    pub fn set_or_clear_custom_placement_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::bucket::CustomPlacementConfig>,
    {
        self.custom_placement_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [autoclass][crate::model::Bucket::autoclass].
    pub fn set_autoclass<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::bucket::Autoclass>,
    {
        self.autoclass = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [autoclass][crate::model::Bucket::autoclass].
    pub fn set_or_clear_autoclass<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::bucket::Autoclass>,
    {
        self.autoclass = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [hierarchical_namespace][crate::model::Bucket::hierarchical_namespace].
    pub fn set_hierarchical_namespace<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::bucket::HierarchicalNamespace>,
    {
        self.hierarchical_namespace = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [hierarchical_namespace][crate::model::Bucket::hierarchical_namespace].
    pub fn set_or_clear_hierarchical_namespace<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::bucket::HierarchicalNamespace>,
    {
        self.hierarchical_namespace = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [soft_delete_policy][crate::model::Bucket::soft_delete_policy].
    pub fn set_soft_delete_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::bucket::SoftDeletePolicy>,
    {
        self.soft_delete_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [soft_delete_policy][crate::model::Bucket::soft_delete_policy].
    pub fn set_or_clear_soft_delete_policy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::bucket::SoftDeletePolicy>,
    {
        self.soft_delete_policy = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for Bucket {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.Bucket"
    }
}

/// Defines additional types related to [Bucket].
pub mod bucket {
    #[allow(unused_imports)]
    use super::*;

    /// Properties of a bucket related to versioning.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Versioning {
        /// While set to true, versioning is fully enabled for this bucket.
        #[serde(skip_serializing_if = "crate::model::is_default")]
        pub enabled: bool,
    }

    impl Versioning {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of
        /// [enabled][crate::model::bucket::Versioning::enabled].
        pub fn set_enabled<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.enabled = v.into();
            self
        }
    }

    impl wkt::message::Message for Versioning {
        fn typename() -> &'static str {
            "type.googleapis.com/google.storage.v2.Bucket.Versioning"
        }
    }

    /// Retention policy properties of a bucket.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct RetentionPolicy {
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub effective_time: std::option::Option<wkt::Timestamp>,

        /// Once locked, an object retention policy cannot be modified.
        #[serde(skip_serializing_if = "crate::model::is_default")]
        pub is_locked: bool,

        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub retention_duration: std::option::Option<wkt::Duration>,
    }

    impl RetentionPolicy {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of
        /// [effective_time][crate::model::bucket::RetentionPolicy::effective_time].
        pub fn set_effective_time<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<wkt::Timestamp>,
        {
            self.effective_time = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of
        /// [effective_time][crate::model::bucket::RetentionPolicy::effective_time].
        pub fn set_or_clear_effective_time<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<wkt::Timestamp>,
        {
            self.effective_time = v.map(|x| x.into());
            self
        }

        /// Sets the value of
        /// [is_locked][crate::model::bucket::RetentionPolicy::is_locked].
        pub fn set_is_locked<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.is_locked = v.into();
            self
        }

        /// Sets the value of
        /// [retention_duration][crate::model::bucket::RetentionPolicy::retention_duration].
        pub fn set_retention_duration<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<wkt::Duration>,
        {
            self.retention_duration = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of
        /// [retention_duration][crate::model::bucket::RetentionPolicy::retention_duration].
        pub fn set_or_clear_retention_duration<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<wkt::Duration>,
        {
            self.retention_duration = v.map(|x| x.into());
            self
        }
    }

    impl wkt::message::Message for RetentionPolicy {
        fn typename() -> &'static str {
            "type.googleapis.com/google.storage.v2.Bucket.RetentionPolicy"
        }
    }

    /// Soft delete policy properties of a bucket.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct SoftDeletePolicy {
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub retention_duration: std::option::Option<wkt::Duration>,

        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub effective_time: std::option::Option<wkt::Timestamp>,
    }

    impl SoftDeletePolicy {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of
        /// [retention_duration][crate::model::bucket::SoftDeletePolicy::retention_duration].
        pub fn set_retention_duration<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<wkt::Duration>,
        {
            self.retention_duration = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of
        /// [retention_duration][crate::model::bucket::SoftDeletePolicy::retention_duration].
        pub fn set_or_clear_retention_duration<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<wkt::Duration>,
        {
            self.retention_duration = v.map(|x| x.into());
            self
        }

        /// Sets the value of
        /// [effective_time][crate::model::bucket::SoftDeletePolicy::effective_time].
        pub fn set_effective_time<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<wkt::Timestamp>,
        {
            self.effective_time = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of
        /// [effective_time][crate::model::bucket::SoftDeletePolicy::effective_time].
        pub fn set_or_clear_effective_time<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<wkt::Timestamp>,
        {
            self.effective_time = v.map(|x| x.into());
            self
        }
    }

    impl wkt::message::Message for SoftDeletePolicy {
        fn typename() -> &'static str {
            "type.googleapis.com/google.storage.v2.Bucket.SoftDeletePolicy"
        }
    }

    /// Bucket restriction options.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct IamConfig {
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub uniform_bucket_level_access: std::option::Option<crate::model::bucket::iam_config::UniformBucketLevelAccess>,

        /// Whether IAM will enforce public access prevention. Valid values are
        /// "enforced" or "inherited".
        #[serde(skip_serializing_if = "std::string::String::is_empty")]
        pub public_access_prevention: std::string::String,
    }

    impl IamConfig {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of
        /// [uniform_bucket_level_access][crate::model::bucket::IamConfig::uniform_bucket_level_access].
        pub fn set_uniform_bucket_level_access<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::bucket::iam_config::UniformBucketLevelAccess>,
        {
            self.uniform_bucket_level_access = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of
        /// [uniform_bucket_level_access][crate::model::bucket::IamConfig::uniform_bucket_level_access].
        pub fn set_or_clear_uniform_bucket_level_access<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::bucket::iam_config::UniformBucketLevelAccess>,
        {
            self.uniform_bucket_level_access = v.map(|x| x.into());
            self
        }

        /// Sets the value of
        /// [public_access_prevention][crate::model::bucket::IamConfig::public_access_prevention].
        pub fn set_public_access_prevention<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.public_access_prevention = v.into();
            self
        }
    }

    impl wkt::message::Message for IamConfig {
        fn typename() -> &'static str {
            "type.googleapis.com/google.storage.v2.Bucket.IamConfig"
        }
    }

    /// Defines additional types related to [IamConfig].
    pub mod iam_config {
        #[allow(unused_imports)]
        use super::*;

        /// Settings for Uniform Bucket level access.
        #[serde_with::serde_as]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct UniformBucketLevelAccess {
            #[serde(skip_serializing_if = "crate::model::is_default")]
            pub enabled: bool,

            #[serde(skip_serializing_if = "std::option::Option::is_none")]
            pub lock_time: std::option::Option<wkt::Timestamp>,
        }

        impl UniformBucketLevelAccess {
            pub fn new() -> Self {
                std::default::Default::default()
            }

            /// Sets the value of
            /// [enabled][crate::model::bucket::iam_config::UniformBucketLevelAccess::enabled].
            pub fn set_enabled<T>(mut self, v: T) -> Self
            where
                T: std::convert::Into<bool>,
            {
                self.enabled = v.into();
                self
            }

            /// Sets the value of
            /// [lock_time][crate::model::bucket::iam_config::UniformBucketLevelAccess::lock_time].
            pub fn set_lock_time<T>(mut self, v: T) -> Self
            where
                T: std::convert::Into<wkt::Timestamp>,
            {
                self.lock_time = std::option::Option::Some(v.into());
                self
            }

            /// Sets or clears the value of
            /// [lock_time][crate::model::bucket::iam_config::UniformBucketLevelAccess::lock_time].
            pub fn set_or_clear_lock_time<T>(mut self, v: std::option::Option<T>) -> Self
            where
                T: std::convert::Into<wkt::Timestamp>,
            {
                self.lock_time = v.map(|x| x.into());
                self
            }
        }

        impl wkt::message::Message for UniformBucketLevelAccess {
            fn typename() -> &'static str {
                "type.googleapis.com/google.storage.v2.Bucket.IamConfig.UniformBucketLevelAccess"
            }
        }
    }

    /// Configuration for Custom Dual Regions.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct CustomPlacementConfig {
        /// List of locations to use for data placement.
        #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
        pub data_locations: std::vec::Vec<std::string::String>,
    }

    impl CustomPlacementConfig {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of
        /// [data_locations][crate::model::bucket::CustomPlacementConfig::data_locations].
        pub fn set_data_locations<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
        {
            self.data_locations = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    impl wkt::message::Message for CustomPlacementConfig {
        fn typename() -> &'static str {
            "type.googleapis.com/google.storage.v2.Bucket.CustomPlacementConfig"
        }
    }

    /// Configuration for a bucket's Autoclass feature.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Autoclass {
        #[serde(skip_serializing_if = "crate::model::is_default")]
        pub enabled: bool,

        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub toggle_time: std::option::Option<wkt::Timestamp>,

        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub terminal_storage_class: std::option::Option<std::string::String>,

        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub terminal_storage_class_update_time: std::option::Option<wkt::Timestamp>,
    }

    impl Autoclass {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of
        /// [enabled][crate::model::bucket::Autoclass::enabled].
        pub fn set_enabled<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.enabled = v.into();
            self
        }

        /// Sets the value of
        /// [toggle_time][crate::model::bucket::Autoclass::toggle_time].
        pub fn set_toggle_time<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<wkt::Timestamp>,
        {
            self.toggle_time = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of
        /// [toggle_time][crate::model::bucket::Autoclass::toggle_time].
        pub fn set_or_clear_toggle_time<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<wkt::Timestamp>,
        {
            self.toggle_time = v.map(|x| x.into());
            self
        }

        /// Sets the value of
        /// [terminal_storage_class][crate::model::bucket::Autoclass::terminal_storage_class].
        pub fn set_terminal_storage_class<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.terminal_storage_class = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of
        /// [terminal_storage_class][crate::model::bucket::Autoclass::terminal_storage_class].
        pub fn set_or_clear_terminal_storage_class<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.terminal_storage_class = v.map(|x| x.into());
            self
        }

        /// Sets the value of
        /// [terminal_storage_class_update_time][crate::model::bucket::Autoclass::terminal_storage_class_update_time].
        pub fn set_terminal_storage_class_update_time<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<wkt::Timestamp>,
        {
            self.terminal_storage_class_update_time = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of
        /// [terminal_storage_class_update_time][crate::model::bucket::Autoclass::terminal_storage_class_update_time].
        pub fn set_or_clear_terminal_storage_class_update_time<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<wkt::Timestamp>,
        {
            self.terminal_storage_class_update_time = v.map(|x| x.into());
            self
        }
    }

    impl wkt::message::Message for Autoclass {
        fn typename() -> &'static str {
            "type.googleapis.com/google.storage.v2.Bucket.Autoclass"
        }
    }

    /// Configuration for a bucket's hierarchical namespace feature.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct HierarchicalNamespace {
        #[serde(skip_serializing_if = "crate::model::is_default")]
        pub enabled: bool,
    }

    impl HierarchicalNamespace {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of
        /// [enabled][crate::model::bucket::HierarchicalNamespace::enabled].
        pub fn set_enabled<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.enabled = v.into();
            self
        }
    }

    impl wkt::message::Message for HierarchicalNamespace {
        fn typename() -> &'static str {
            "type.googleapis.com/google.storage.v2.Bucket.HierarchicalNamespace"
        }
    }
}

/// An object.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Object {
    /// The name of this object. Nearly any sequence of unicode characters is
    /// valid.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// The name of the bucket containing this object.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub bucket: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub etag: std::string::String,

    /// The content generation of this object. Used for object versioning.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub generation: i64,

    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub metageneration: i64,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub storage_class: std::string::String,

    /// Content-Length of the object data in bytes.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub size: i64,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub content_encoding: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub content_disposition: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub cache_control: std::string::String,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub content_language: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub delete_time: std::option::Option<wkt::Timestamp>,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub content_type: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<wkt::Timestamp>,

    /// Number of underlying components that make up this object. Components are
    /// accumulated by compose operations.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub component_count: i32,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub checksums: std::option::Option<crate::model::ObjectChecksums>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<wkt::Timestamp>,

    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub kms_key: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_storage_class_time: std::option::Option<wkt::Timestamp>,

    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub temporary_hold: bool,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub retention_expire_time: std::option::Option<wkt::Timestamp>,

    /// User-provided metadata, in key/value pairs.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub metadata: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_based_hold: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub custom_time: std::option::Option<wkt::Timestamp>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub soft_delete_time: std::option::Option<wkt::Timestamp>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hard_delete_time: std::option::Option<wkt::Timestamp>,
}

impl Object {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Object::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.into();
        self
    }

    /// Sets the value of [bucket][crate::model::Object::bucket].
    pub fn set_bucket<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bucket = v.into();
        self
    }

    /// Sets the value of [etag][crate::model::Object::etag].
    pub fn set_etag<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.etag = v.into();
        self
    }

    /// Sets the value of [generation][crate::model::Object::generation].
    pub fn set_generation<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.generation = v.into();
        self
    }

    /// Sets the value of
    /// [metageneration][crate::model::Object::metageneration].
    pub fn set_metageneration<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.metageneration = v.into();
        self
    }

    /// Sets the value of [storage_class][crate::model::Object::storage_class].
    pub fn set_storage_class<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.storage_class = v.into();
        self
    }

    /// Sets the value of [size][crate::model::Object::size].
    pub fn set_size<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.size = v.into();
        self
    }

    /// Sets the value of
    /// [content_encoding][crate::model::Object::content_encoding].
    pub fn set_content_encoding<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.content_encoding = v.into();
        self
    }

    /// Sets the value of
    /// [content_disposition][crate::model::Object::content_disposition].
    pub fn set_content_disposition<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.content_disposition = v.into();
        self
    }

    /// Sets the value of [cache_control][crate::model::Object::cache_control].
    pub fn set_cache_control<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cache_control = v.into();
        self
    }

    /// Sets the value of
    /// [content_language][crate::model::Object::content_language].
    pub fn set_content_language<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.content_language = v.into();
        self
    }

    /// Sets the value of [delete_time][crate::model::Object::delete_time].
    pub fn set_delete_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.delete_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [delete_time][crate::model::Object::delete_time].
    pub fn set_or_clear_delete_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.delete_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [content_type][crate::model::Object::content_type].
    pub fn set_content_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.content_type = v.into();
        self
    }

    /// Sets the value of [create_time][crate::model::Object::create_time].
    pub fn set_create_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.create_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [create_time][crate::model::Object::create_time].
    pub fn set_or_clear_create_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.create_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [component_count][crate::model::Object::component_count].
    pub fn set_component_count<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.component_count = v.into();
        self
    }

    /// Sets the value of [checksums][crate::model::Object::checksums].
    pub fn set_checksums<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectChecksums>,
    {
        self.checksums = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [checksums][crate::model::Object::checksums].
    pub fn set_or_clear_checksums<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ObjectChecksums>,
    {
        self.checksums = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_time][crate::model::Object::update_time].
    pub fn set_update_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [update_time][crate::model::Object::update_time].
    pub fn set_or_clear_update_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_key][crate::model::Object::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = v.into();
        self
    }

    /// Sets the value of
    /// [update_storage_class_time][crate::model::Object::update_storage_class_time].
    pub fn set_update_storage_class_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_storage_class_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [update_storage_class_time][crate::model::Object::update_storage_class_time].
    pub fn set_or_clear_update_storage_class_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_storage_class_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [temporary_hold][crate::model::Object::temporary_hold].
    pub fn set_temporary_hold<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.temporary_hold = v.into();
        self
    }

    /// Sets the value of
    /// [retention_expire_time][crate::model::Object::retention_expire_time].
    pub fn set_retention_expire_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.retention_expire_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [retention_expire_time][crate::model::Object::retention_expire_time].
    pub fn set_or_clear_retention_expire_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.retention_expire_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][crate::model::Object::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of
    /// [event_based_hold][crate::model::Object::event_based_hold].
    pub fn set_event_based_hold<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.event_based_hold = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [event_based_hold][crate::model::Object::event_based_hold].
    pub fn set_or_clear_event_based_hold<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.event_based_hold = v.map(|x| x.into());
        self
    }

    /// Sets the value of [custom_time][crate::model::Object::custom_time].
    pub fn set_custom_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.custom_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [custom_time][crate::model::Object::custom_time].
    pub fn set_or_clear_custom_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.custom_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [soft_delete_time][crate::model::Object::soft_delete_time].
    pub fn set_soft_delete_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.soft_delete_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [soft_delete_time][crate::model::Object::soft_delete_time].
    pub fn set_or_clear_soft_delete_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.soft_delete_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of
    /// [hard_delete_time][crate::model::Object::hard_delete_time].
    pub fn set_hard_delete_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.hard_delete_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [hard_delete_time][crate::model::Object::hard_delete_time].
    pub fn set_or_clear_hard_delete_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.hard_delete_time = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for Object {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.v2.Object"
    }
}

impl gax::paginator::PageableResponse for ListBucketsResponse {
    type PageItem = crate::model::Bucket;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.buckets
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

impl gax::paginator::PageableResponse for ListNotificationConfigsResponse {
    type PageItem = crate::model::NotificationConfig;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.notification_configs
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

impl gax::paginator::PageableResponse for ListObjectsResponse {
    type PageItem = crate::model::Object;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.objects
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

impl gax::paginator::PageableResponse for ListHmacKeysResponse {
    type PageItem = crate::model::HmacKeyMetadata;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.hmac_keys
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}
