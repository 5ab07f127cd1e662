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

/// Request message for DeleteBucket.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteBucketRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(int64, optional, tag = "2")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "3")]
    pub if_metageneration_not_match: ::core::option::Option<i64>,
}

/// Request message for GetBucket.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetBucketRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(int64, optional, tag = "2")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "3")]
    pub if_metageneration_not_match: ::core::option::Option<i64>,
    #[prost(message, optional, tag = "5")]
    pub read_mask: ::core::option::Option<::prost_types::FieldMask>,
}

/// Request message for CreateBucket.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateBucketRequest {
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub bucket: ::core::option::Option<Bucket>,
    #[prost(string, tag = "3")]
    pub bucket_id: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub predefined_acl: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub predefined_default_object_acl: ::prost::alloc::string::String,
    #[prost(bool, tag = "9")]
    pub enable_object_retention: bool,
}

/// Request message for ListBuckets.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListBucketsRequest {
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub page_size: i32,
    #[prost(string, tag = "3")]
    pub page_token: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub prefix: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "5")]
    pub read_mask: ::core::option::Option<::prost_types::FieldMask>,
}

/// The result of a call to Buckets.ListBuckets
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListBucketsResponse {
    #[prost(message, repeated, tag = "1")]
    pub buckets: ::prost::alloc::vec::Vec<Bucket>,
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
}

/// Request message for LockBucketRetentionPolicyRequest.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LockBucketRetentionPolicyRequest {
    #[prost(string, tag = "1")]
    pub bucket: ::prost::alloc::string::String,
    #[prost(int64, tag = "2")]
    pub if_metageneration_match: i64,
}

/// Request for UpdateBucket method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateBucketRequest {
    #[prost(message, optional, tag = "1")]
    pub bucket: ::core::option::Option<Bucket>,
    #[prost(int64, optional, tag = "2")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "3")]
    pub if_metageneration_not_match: ::core::option::Option<i64>,
    #[prost(string, tag = "8")]
    pub predefined_acl: ::prost::alloc::string::String,
    #[prost(string, tag = "9")]
    pub predefined_default_object_acl: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "6")]
    pub update_mask: ::core::option::Option<::prost_types::FieldMask>,
}

/// Request message for DeleteNotificationConfig.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteNotificationConfigRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// Request message for GetNotificationConfig.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetNotificationConfigRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// Request message for CreateNotificationConfig.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateNotificationConfigRequest {
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub notification_config: ::core::option::Option<NotificationConfig>,
}

/// Request message for ListNotifications.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListNotificationConfigsRequest {
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub page_size: i32,
    #[prost(string, tag = "3")]
    pub page_token: ::prost::alloc::string::String,
}

/// The result of a call to ListNotificationConfigs
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListNotificationConfigsResponse {
    #[prost(message, repeated, tag = "1")]
    pub notification_configs: ::prost::alloc::vec::Vec<NotificationConfig>,
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
}

/// Request message for ComposeObject.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ComposeObjectRequest {
    #[prost(message, optional, tag = "1")]
    pub destination: ::core::option::Option<Object>,
    #[prost(message, repeated, tag = "2")]
    pub source_objects: ::prost::alloc::vec::Vec<compose_object_request::SourceObject>,
    #[prost(string, tag = "9")]
    pub destination_predefined_acl: ::prost::alloc::string::String,
    #[prost(int64, optional, tag = "4")]
    pub if_generation_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "5")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(string, tag = "6")]
    pub kms_key: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "7")]
    pub common_object_request_params: ::core::option::Option<CommonObjectRequestParams>,
    #[prost(message, optional, tag = "10")]
    pub object_checksums: ::core::option::Option<ObjectChecksums>,
}
/// Nested message and enum types in `ComposeObjectRequest`.
pub mod compose_object_request {
    /// Description of a source object for a composition request.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SourceObject {
        #[prost(string, tag = "1")]
        pub name: ::prost::alloc::string::String,
        #[prost(int64, tag = "2")]
        pub generation: i64,
        #[prost(message, optional, tag = "3")]
        pub object_preconditions: ::core::option::Option<source_object::ObjectPreconditions>,
    }
    /// Nested message and enum types in `SourceObject`.
    pub mod source_object {
        /// Preconditions for a source object of a composition request.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ObjectPreconditions {
            #[prost(int64, optional, tag = "1")]
            pub if_generation_match: ::core::option::Option<i64>,
        }
    }
}

/// Message for deleting an object.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteObjectRequest {
    #[prost(string, tag = "1")]
    pub bucket: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub object: ::prost::alloc::string::String,
    #[prost(int64, tag = "4")]
    pub generation: i64,
    #[prost(int64, optional, tag = "5")]
    pub if_generation_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "6")]
    pub if_generation_not_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "7")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "8")]
    pub if_metageneration_not_match: ::core::option::Option<i64>,
    #[prost(message, optional, tag = "10")]
    pub common_object_request_params: ::core::option::Option<CommonObjectRequestParams>,
}

/// Message for restoring an object. `bucket`, `object`, and `generation`
/// **must** be set.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RestoreObjectRequest {
    #[prost(string, tag = "1")]
    pub bucket: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub object: ::prost::alloc::string::String,
    #[prost(int64, tag = "3")]
    pub generation: i64,
    #[prost(string, tag = "11")]
    pub restore_token: ::prost::alloc::string::String,
    #[prost(int64, optional, tag = "4")]
    pub if_generation_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "5")]
    pub if_generation_not_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "6")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "7")]
    pub if_metageneration_not_match: ::core::option::Option<i64>,
    #[prost(bool, optional, tag = "9")]
    pub copy_source_acl: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "8")]
    pub common_object_request_params: ::core::option::Option<CommonObjectRequestParams>,
}

/// Message for canceling an in-progress resumable upload.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CancelResumableWriteRequest {
    #[prost(string, tag = "1")]
    pub upload_id: ::prost::alloc::string::String,
}

/// Empty response message for canceling an in-progress resumable upload, will
/// be extended as needed.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CancelResumableWriteResponse {}

/// Request message for GetObject.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetObjectRequest {
    #[prost(string, tag = "1")]
    pub bucket: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub object: ::prost::alloc::string::String,
    #[prost(int64, tag = "3")]
    pub generation: i64,
    #[prost(bool, optional, tag = "11")]
    pub soft_deleted: ::core::option::Option<bool>,
    #[prost(int64, optional, tag = "4")]
    pub if_generation_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "5")]
    pub if_generation_not_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "6")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "7")]
    pub if_metageneration_not_match: ::core::option::Option<i64>,
    #[prost(message, optional, tag = "8")]
    pub common_object_request_params: ::core::option::Option<CommonObjectRequestParams>,
    #[prost(message, optional, tag = "10")]
    pub read_mask: ::core::option::Option<::prost_types::FieldMask>,
}

/// Request message for UpdateObject.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateObjectRequest {
    #[prost(message, optional, tag = "1")]
    pub object: ::core::option::Option<Object>,
    #[prost(int64, optional, tag = "2")]
    pub if_generation_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "3")]
    pub if_generation_not_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "4")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "5")]
    pub if_metageneration_not_match: ::core::option::Option<i64>,
    #[prost(string, tag = "10")]
    pub predefined_acl: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "7")]
    pub update_mask: ::core::option::Option<::prost_types::FieldMask>,
    #[prost(message, optional, tag = "8")]
    pub common_object_request_params: ::core::option::Option<CommonObjectRequestParams>,
}

/// Request message for ListObjects.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListObjectsRequest {
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub page_size: i32,
    #[prost(string, tag = "3")]
    pub page_token: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub delimiter: ::prost::alloc::string::String,
    #[prost(bool, tag = "5")]
    pub include_trailing_delimiter: bool,
    #[prost(string, tag = "6")]
    pub prefix: ::prost::alloc::string::String,
    #[prost(bool, tag = "7")]
    pub versions: bool,
    #[prost(message, optional, tag = "8")]
    pub read_mask: ::core::option::Option<::prost_types::FieldMask>,
    #[prost(string, tag = "10")]
    pub lexicographic_start: ::prost::alloc::string::String,
    #[prost(string, tag = "11")]
    pub lexicographic_end: ::prost::alloc::string::String,
    #[prost(bool, tag = "12")]
    pub soft_deleted: bool,
    #[prost(bool, tag = "13")]
    pub include_folders_as_prefixes: bool,
    #[prost(string, tag = "14")]
    pub match_glob: ::prost::alloc::string::String,
}

/// The result of a call to Objects.ListObjects
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListObjectsResponse {
    #[prost(message, repeated, tag = "1")]
    pub objects: ::prost::alloc::vec::Vec<Object>,
    #[prost(string, repeated, tag = "2")]
    pub prefixes: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, tag = "3")]
    pub next_page_token: ::prost::alloc::string::String,
}

/// Request message for RewriteObject.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RewriteObjectRequest {
    #[prost(string, tag = "24")]
    pub destination_name: ::prost::alloc::string::String,
    #[prost(string, tag = "25")]
    pub destination_bucket: ::prost::alloc::string::String,
    #[prost(string, tag = "27")]
    pub destination_kms_key: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "1")]
    pub destination: ::core::option::Option<Object>,
    #[prost(string, tag = "2")]
    pub source_bucket: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub source_object: ::prost::alloc::string::String,
    #[prost(int64, tag = "4")]
    pub source_generation: i64,
    #[prost(string, tag = "5")]
    pub rewrite_token: ::prost::alloc::string::String,
    #[prost(string, tag = "28")]
    pub destination_predefined_acl: ::prost::alloc::string::String,
    #[prost(int64, optional, tag = "7")]
    pub if_generation_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "8")]
    pub if_generation_not_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "9")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "10")]
    pub if_metageneration_not_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "11")]
    pub if_source_generation_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "12")]
    pub if_source_generation_not_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "13")]
    pub if_source_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "14")]
    pub if_source_metageneration_not_match: ::core::option::Option<i64>,
    #[prost(int64, tag = "15")]
    pub max_bytes_rewritten_per_call: i64,
    #[prost(string, tag = "16")]
    pub copy_source_encryption_algorithm: ::prost::alloc::string::String,
    #[prost(bytes = "bytes", tag = "21")]
    pub copy_source_encryption_key_bytes: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "22")]
    pub copy_source_encryption_key_sha256_bytes: ::prost::bytes::Bytes,
    #[prost(message, optional, tag = "19")]
    pub common_object_request_params: ::core::option::Option<CommonObjectRequestParams>,
    #[prost(message, optional, tag = "29")]
    pub object_checksums: ::core::option::Option<ObjectChecksums>,
}

/// A rewrite response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RewriteResponse {
    #[prost(int64, tag = "1")]
    pub total_bytes_rewritten: i64,
    #[prost(int64, tag = "2")]
    pub object_size: i64,
    #[prost(bool, tag = "3")]
    pub done: bool,
    #[prost(string, tag = "4")]
    pub rewrite_token: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "5")]
    pub resource: ::core::option::Option<Object>,
}

/// Request message StartResumableWrite.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StartResumableWriteRequest {
    #[prost(message, optional, tag = "1")]
    pub write_object_spec: ::core::option::Option<WriteObjectSpec>,
    #[prost(message, optional, tag = "3")]
    pub common_object_request_params: ::core::option::Option<CommonObjectRequestParams>,
    #[prost(message, optional, tag = "5")]
    pub object_checksums: ::core::option::Option<ObjectChecksums>,
}

/// Response object for `StartResumableWrite`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StartResumableWriteResponse {
    #[prost(string, tag = "1")]
    pub upload_id: ::prost::alloc::string::String,
}

/// Describes an attempt to insert an object, possibly over multiple requests.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WriteObjectSpec {
    #[prost(message, optional, tag = "1")]
    pub resource: ::core::option::Option<Object>,
    #[prost(string, tag = "7")]
    pub predefined_acl: ::prost::alloc::string::String,
    #[prost(int64, optional, tag = "3")]
    pub if_generation_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "4")]
    pub if_generation_not_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "5")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "6")]
    pub if_metageneration_not_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "8")]
    pub object_size: ::core::option::Option<i64>,
}

/// Request message for MoveObject.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MoveObjectRequest {
    #[prost(string, tag = "1")]
    pub bucket: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub source_object: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub destination_object: ::prost::alloc::string::String,
    #[prost(int64, optional, tag = "4")]
    pub if_source_generation_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "5")]
    pub if_source_generation_not_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "6")]
    pub if_source_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "7")]
    pub if_source_metageneration_not_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "8")]
    pub if_generation_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "9")]
    pub if_generation_not_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "10")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "11")]
    pub if_metageneration_not_match: ::core::option::Option<i64>,
}

/// Request object for `QueryWriteStatus`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryWriteStatusRequest {
    #[prost(string, tag = "1")]
    pub upload_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub common_object_request_params: ::core::option::Option<CommonObjectRequestParams>,
}

/// Response object for `QueryWriteStatus`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryWriteStatusResponse {
    /// The response will set one of the following.
    #[prost(oneof = "query_write_status_response::WriteStatus", tags = "1, 2")]
    pub write_status: ::core::option::Option<query_write_status_response::WriteStatus>,
}
/// Nested message and enum types in `QueryWriteStatusResponse`.
pub mod query_write_status_response {
    /// The response will set one of the following.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum WriteStatus {
        /// The total number of bytes that have been processed for the given
        /// object from all `WriteObject` calls.
        #[prost(int64, tag = "1")]
        PersistedSize(i64),
        /// A resource containing the metadata for the uploaded object. Only set
        /// if the upload has finalized.
        #[prost(message, tag = "2")]
        Resource(super::Object),
    }
}

/// Request message for GetServiceAccount.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetServiceAccountRequest {
    #[prost(string, tag = "1")]
    pub project: ::prost::alloc::string::String,
}

/// A service account, owned by Cloud Storage, which may be used when taking
/// action on behalf of a given project.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceAccount {
    #[prost(string, tag = "1")]
    pub email_address: ::prost::alloc::string::String,
}

/// Request message for CreateHmacKey.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateHmacKeyRequest {
    #[prost(string, tag = "1")]
    pub project: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub service_account_email: ::prost::alloc::string::String,
}

/// Create hmac response. The only time the secret for an HMAC will be returned.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateHmacKeyResponse {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<HmacKeyMetadata>,
    #[prost(bytes = "bytes", tag = "3")]
    pub secret_key_bytes: ::prost::bytes::Bytes,
}

/// Request object to delete a given HMAC key.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteHmacKeyRequest {
    #[prost(string, tag = "1")]
    pub access_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub project: ::prost::alloc::string::String,
}

/// Request object to get metadata on a given HMAC key.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetHmacKeyRequest {
    #[prost(string, tag = "1")]
    pub access_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub project: ::prost::alloc::string::String,
}

/// Request to fetch a list of HMAC keys under a given project.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListHmacKeysRequest {
    #[prost(string, tag = "1")]
    pub project: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub page_size: i32,
    #[prost(string, tag = "3")]
    pub page_token: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub service_account_email: ::prost::alloc::string::String,
    #[prost(bool, tag = "5")]
    pub show_deleted_keys: bool,
}

/// Hmac key list response with next page information.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListHmacKeysResponse {
    #[prost(message, repeated, tag = "1")]
    pub hmac_keys: ::prost::alloc::vec::Vec<HmacKeyMetadata>,
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
}

/// Request object to update an HMAC key state.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateHmacKeyRequest {
    #[prost(message, optional, tag = "1")]
    pub hmac_key: ::core::option::Option<HmacKeyMetadata>,
    #[prost(message, optional, tag = "3")]
    pub update_mask: ::core::option::Option<::prost_types::FieldMask>,
}

/// Hmac Key Metadata, which includes all information other than the secret.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HmacKeyMetadata {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub access_id: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub project: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub service_account_email: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub state: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "6")]
    pub create_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "7")]
    pub update_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag = "8")]
    pub etag: ::prost::alloc::string::String,
}

/// Parameters that can be passed to any object request.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommonObjectRequestParams {
    #[prost(string, tag = "1")]
    pub encryption_algorithm: ::prost::alloc::string::String,
    #[prost(bytes = "bytes", tag = "4")]
    pub encryption_key_bytes: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "5")]
    pub encryption_key_sha256_bytes: ::prost::bytes::Bytes,
}

/// A directive to publish Pub/Sub notifications upon changes to a bucket.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NotificationConfig {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub topic: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub etag: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "3")]
    pub event_types: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(map = "string, string", tag = "4")]
    pub custom_attributes: ::std::collections::HashMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
    #[prost(string, tag = "5")]
    pub object_name_prefix: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub payload_format: ::prost::alloc::string::String,
}

/// Message used for storing full (not subrange) object checksums.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ObjectChecksums {
    #[prost(fixed32, optional, tag = "1")]
    pub crc32c: ::core::option::Option<u32>,
    #[prost(bytes = "bytes", tag = "2")]
    pub md5_hash: ::prost::bytes::Bytes,
}

/// A bucket.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Bucket {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub bucket_id: ::prost::alloc::string::String,
    #[prost(string, tag = "29")]
    pub etag: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub project: ::prost::alloc::string::String,
    #[prost(int64, tag = "4")]
    pub metageneration: i64,
    #[prost(string, tag = "5")]
    pub location: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub location_type: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub storage_class: ::prost::alloc::string::String,
    #[prost(string, tag = "27")]
    pub rpo: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "11")]
    pub create_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "13")]
    pub update_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(bool, tag = "14")]
    pub default_event_based_hold: bool,
    #[prost(map = "string, string", tag = "15")]
    pub labels: ::std::collections::HashMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
    #[prost(message, optional, tag = "17")]
    pub versioning: ::core::option::Option<bucket::Versioning>,
    #[prost(message, optional, tag = "22")]
    pub retention_policy: ::core::option::Option<bucket::RetentionPolicy>,
    #[prost(message, optional, tag = "23")]
    pub iam_config: ::core::option::Option<bucket::IamConfig>,
    #[prost(bool, tag = "25")]
    pub satisfies_pzs: bool,
    #[prost(message, optional, tag = "26")]
    pub custom_placement_config: ::core::option::Option<bucket::CustomPlacementConfig>,
    #[prost(message, optional, tag = "28")]
    pub autoclass: ::core::option::Option<bucket::Autoclass>,
    #[prost(message, optional, tag = "32")]
    pub hierarchical_namespace: ::core::option::Option<bucket::HierarchicalNamespace>,
    #[prost(message, optional, tag = "31")]
    pub soft_delete_policy: ::core::option::Option<bucket::SoftDeletePolicy>,
}
/// Nested message and enum types in `Bucket`.
pub mod bucket {
    /// Properties of a bucket related to versioning.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Versioning {
        #[prost(bool, tag = "1")]
        pub enabled: bool,
    }

    /// Retention policy properties of a bucket.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct RetentionPolicy {
        #[prost(message, optional, tag = "1")]
        pub effective_time: ::core::option::Option<::prost_types::Timestamp>,
        #[prost(bool, tag = "2")]
        pub is_locked: bool,
        #[prost(message, optional, tag = "4")]
        pub retention_duration: ::core::option::Option<::prost_types::Duration>,
    }

    /// Soft delete policy properties of a bucket.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SoftDeletePolicy {
        #[prost(message, optional, tag = "1")]
        pub retention_duration: ::core::option::Option<::prost_types::Duration>,
        #[prost(message, optional, tag = "2")]
        pub effective_time: ::core::option::Option<::prost_types::Timestamp>,
    }

    /// Bucket restriction options.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct IamConfig {
        #[prost(message, optional, tag = "1")]
        pub uniform_bucket_level_access: ::core::option::Option<iam_config::UniformBucketLevelAccess>,
        #[prost(string, tag = "3")]
        pub public_access_prevention: ::prost::alloc::string::String,
    }
    /// Nested message and enum types in `IamConfig`.
    pub mod iam_config {
        /// Settings for Uniform Bucket level access.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct UniformBucketLevelAccess {
            #[prost(bool, tag = "1")]
            pub enabled: bool,
            #[prost(message, optional, tag = "2")]
            pub lock_time: ::core::option::Option<::prost_types::Timestamp>,
        }
    }

    /// Configuration for Custom Dual Regions.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CustomPlacementConfig {
        #[prost(string, repeated, tag = "1")]
        pub data_locations: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }

    /// Configuration for a bucket's Autoclass feature.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Autoclass {
        #[prost(bool, tag = "1")]
        pub enabled: bool,
        #[prost(message, optional, tag = "2")]
        pub toggle_time: ::core::option::Option<::prost_types::Timestamp>,
        #[prost(string, optional, tag = "3")]
        pub terminal_storage_class: ::core::option::Option<::prost::alloc::string::String>,
        #[prost(message, optional, tag = "4")]
        pub terminal_storage_class_update_time: ::core::option::Option<::prost_types::Timestamp>,
    }

    /// Configuration for a bucket's hierarchical namespace feature.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct HierarchicalNamespace {
        #[prost(bool, tag = "1")]
        pub enabled: bool,
    }
}

/// An object.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Object {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub bucket: ::prost::alloc::string::String,
    #[prost(string, tag = "27")]
    pub etag: ::prost::alloc::string::String,
    #[prost(int64, tag = "3")]
    pub generation: i64,
    #[prost(int64, tag = "4")]
    pub metageneration: i64,
    #[prost(string, tag = "5")]
    pub storage_class: ::prost::alloc::string::String,
    #[prost(int64, tag = "6")]
    pub size: i64,
    #[prost(string, tag = "7")]
    pub content_encoding: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub content_disposition: ::prost::alloc::string::String,
    #[prost(string, tag = "9")]
    pub cache_control: ::prost::alloc::string::String,
    #[prost(string, tag = "11")]
    pub content_language: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "12")]
    pub delete_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag = "13")]
    pub content_type: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "14")]
    pub create_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(int32, tag = "15")]
    pub component_count: i32,
    #[prost(message, optional, tag = "16")]
    pub checksums: ::core::option::Option<ObjectChecksums>,
    #[prost(message, optional, tag = "17")]
    pub update_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag = "18")]
    pub kms_key: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "19")]
    pub update_storage_class_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(bool, tag = "20")]
    pub temporary_hold: bool,
    #[prost(message, optional, tag = "21")]
    pub retention_expire_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(map = "string, string", tag = "22")]
    pub metadata: ::std::collections::HashMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
    #[prost(bool, optional, tag = "23")]
    pub event_based_hold: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "26")]
    pub custom_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "28")]
    pub soft_delete_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "29")]
    pub hard_delete_time: ::core::option::Option<::prost_types::Timestamp>,
}

impl ::prost::Name for DeleteBucketRequest {
    const NAME: &'static str = "DeleteBucketRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.DeleteBucketRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.DeleteBucketRequest".into()
    }
}

impl ::prost::Name for GetBucketRequest {
    const NAME: &'static str = "GetBucketRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.GetBucketRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.GetBucketRequest".into()
    }
}

impl ::prost::Name for CreateBucketRequest {
    const NAME: &'static str = "CreateBucketRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.CreateBucketRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.CreateBucketRequest".into()
    }
}

impl ::prost::Name for ListBucketsRequest {
    const NAME: &'static str = "ListBucketsRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.ListBucketsRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.ListBucketsRequest".into()
    }
}

impl ::prost::Name for ListBucketsResponse {
    const NAME: &'static str = "ListBucketsResponse";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.ListBucketsResponse".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.ListBucketsResponse".into()
    }
}

impl ::prost::Name for LockBucketRetentionPolicyRequest {
    const NAME: &'static str = "LockBucketRetentionPolicyRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.LockBucketRetentionPolicyRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.LockBucketRetentionPolicyRequest".into()
    }
}

impl ::prost::Name for UpdateBucketRequest {
    const NAME: &'static str = "UpdateBucketRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.UpdateBucketRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.UpdateBucketRequest".into()
    }
}

impl ::prost::Name for DeleteNotificationConfigRequest {
    const NAME: &'static str = "DeleteNotificationConfigRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.DeleteNotificationConfigRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.DeleteNotificationConfigRequest".into()
    }
}

impl ::prost::Name for GetNotificationConfigRequest {
    const NAME: &'static str = "GetNotificationConfigRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.GetNotificationConfigRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.GetNotificationConfigRequest".into()
    }
}

impl ::prost::Name for CreateNotificationConfigRequest {
    const NAME: &'static str = "CreateNotificationConfigRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.CreateNotificationConfigRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.CreateNotificationConfigRequest".into()
    }
}

impl ::prost::Name for ListNotificationConfigsRequest {
    const NAME: &'static str = "ListNotificationConfigsRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.ListNotificationConfigsRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.ListNotificationConfigsRequest".into()
    }
}

impl ::prost::Name for ListNotificationConfigsResponse {
    const NAME: &'static str = "ListNotificationConfigsResponse";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.ListNotificationConfigsResponse".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.ListNotificationConfigsResponse".into()
    }
}

impl ::prost::Name for ComposeObjectRequest {
    const NAME: &'static str = "ComposeObjectRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.ComposeObjectRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.ComposeObjectRequest".into()
    }
}

impl ::prost::Name for compose_object_request::SourceObject {
    const NAME: &'static str = "ComposeObjectRequest.SourceObject";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.ComposeObjectRequest.SourceObject".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.ComposeObjectRequest.SourceObject".into()
    }
}

impl ::prost::Name for compose_object_request::source_object::ObjectPreconditions {
    const NAME: &'static str = "ComposeObjectRequest.SourceObject.ObjectPreconditions";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.ComposeObjectRequest.SourceObject.ObjectPreconditions".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.ComposeObjectRequest.SourceObject.ObjectPreconditions".into()
    }
}

impl ::prost::Name for DeleteObjectRequest {
    const NAME: &'static str = "DeleteObjectRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.DeleteObjectRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.DeleteObjectRequest".into()
    }
}

impl ::prost::Name for RestoreObjectRequest {
    const NAME: &'static str = "RestoreObjectRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.RestoreObjectRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.RestoreObjectRequest".into()
    }
}

impl ::prost::Name for CancelResumableWriteRequest {
    const NAME: &'static str = "CancelResumableWriteRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.CancelResumableWriteRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.CancelResumableWriteRequest".into()
    }
}

impl ::prost::Name for CancelResumableWriteResponse {
    const NAME: &'static str = "CancelResumableWriteResponse";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.CancelResumableWriteResponse".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.CancelResumableWriteResponse".into()
    }
}

impl ::prost::Name for GetObjectRequest {
    const NAME: &'static str = "GetObjectRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.GetObjectRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.GetObjectRequest".into()
    }
}

impl ::prost::Name for UpdateObjectRequest {
    const NAME: &'static str = "UpdateObjectRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.UpdateObjectRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.UpdateObjectRequest".into()
    }
}

impl ::prost::Name for ListObjectsRequest {
    const NAME: &'static str = "ListObjectsRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.ListObjectsRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.ListObjectsRequest".into()
    }
}

impl ::prost::Name for ListObjectsResponse {
    const NAME: &'static str = "ListObjectsResponse";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.ListObjectsResponse".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.ListObjectsResponse".into()
    }
}

impl ::prost::Name for RewriteObjectRequest {
    const NAME: &'static str = "RewriteObjectRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.RewriteObjectRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.RewriteObjectRequest".into()
    }
}

impl ::prost::Name for RewriteResponse {
    const NAME: &'static str = "RewriteResponse";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.RewriteResponse".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.RewriteResponse".into()
    }
}

impl ::prost::Name for StartResumableWriteRequest {
    const NAME: &'static str = "StartResumableWriteRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.StartResumableWriteRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.StartResumableWriteRequest".into()
    }
}

impl ::prost::Name for StartResumableWriteResponse {
    const NAME: &'static str = "StartResumableWriteResponse";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.StartResumableWriteResponse".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.StartResumableWriteResponse".into()
    }
}

impl ::prost::Name for WriteObjectSpec {
    const NAME: &'static str = "WriteObjectSpec";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.WriteObjectSpec".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.WriteObjectSpec".into()
    }
}

impl ::prost::Name for MoveObjectRequest {
    const NAME: &'static str = "MoveObjectRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.MoveObjectRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.MoveObjectRequest".into()
    }
}

impl ::prost::Name for QueryWriteStatusRequest {
    const NAME: &'static str = "QueryWriteStatusRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.QueryWriteStatusRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.QueryWriteStatusRequest".into()
    }
}

impl ::prost::Name for QueryWriteStatusResponse {
    const NAME: &'static str = "QueryWriteStatusResponse";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.QueryWriteStatusResponse".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.QueryWriteStatusResponse".into()
    }
}

impl ::prost::Name for GetServiceAccountRequest {
    const NAME: &'static str = "GetServiceAccountRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.GetServiceAccountRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.GetServiceAccountRequest".into()
    }
}

impl ::prost::Name for ServiceAccount {
    const NAME: &'static str = "ServiceAccount";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.ServiceAccount".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.ServiceAccount".into()
    }
}

impl ::prost::Name for CreateHmacKeyRequest {
    const NAME: &'static str = "CreateHmacKeyRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.CreateHmacKeyRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.CreateHmacKeyRequest".into()
    }
}

impl ::prost::Name for CreateHmacKeyResponse {
    const NAME: &'static str = "CreateHmacKeyResponse";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.CreateHmacKeyResponse".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.CreateHmacKeyResponse".into()
    }
}

impl ::prost::Name for DeleteHmacKeyRequest {
    const NAME: &'static str = "DeleteHmacKeyRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.DeleteHmacKeyRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.DeleteHmacKeyRequest".into()
    }
}

impl ::prost::Name for GetHmacKeyRequest {
    const NAME: &'static str = "GetHmacKeyRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.GetHmacKeyRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.GetHmacKeyRequest".into()
    }
}

impl ::prost::Name for ListHmacKeysRequest {
    const NAME: &'static str = "ListHmacKeysRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.ListHmacKeysRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.ListHmacKeysRequest".into()
    }
}

impl ::prost::Name for ListHmacKeysResponse {
    const NAME: &'static str = "ListHmacKeysResponse";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.ListHmacKeysResponse".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.ListHmacKeysResponse".into()
    }
}

impl ::prost::Name for UpdateHmacKeyRequest {
    const NAME: &'static str = "UpdateHmacKeyRequest";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.UpdateHmacKeyRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.UpdateHmacKeyRequest".into()
    }
}

impl ::prost::Name for HmacKeyMetadata {
    const NAME: &'static str = "HmacKeyMetadata";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.HmacKeyMetadata".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.HmacKeyMetadata".into()
    }
}

impl ::prost::Name for CommonObjectRequestParams {
    const NAME: &'static str = "CommonObjectRequestParams";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.CommonObjectRequestParams".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.CommonObjectRequestParams".into()
    }
}

impl ::prost::Name for NotificationConfig {
    const NAME: &'static str = "NotificationConfig";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.NotificationConfig".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.NotificationConfig".into()
    }
}

impl ::prost::Name for ObjectChecksums {
    const NAME: &'static str = "ObjectChecksums";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.ObjectChecksums".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.ObjectChecksums".into()
    }
}

impl ::prost::Name for Bucket {
    const NAME: &'static str = "Bucket";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.Bucket".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.Bucket".into()
    }
}

impl ::prost::Name for bucket::Versioning {
    const NAME: &'static str = "Bucket.Versioning";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.Bucket.Versioning".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.Bucket.Versioning".into()
    }
}

impl ::prost::Name for bucket::RetentionPolicy {
    const NAME: &'static str = "Bucket.RetentionPolicy";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.Bucket.RetentionPolicy".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.Bucket.RetentionPolicy".into()
    }
}

impl ::prost::Name for bucket::SoftDeletePolicy {
    const NAME: &'static str = "Bucket.SoftDeletePolicy";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.Bucket.SoftDeletePolicy".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.Bucket.SoftDeletePolicy".into()
    }
}

impl ::prost::Name for bucket::IamConfig {
    const NAME: &'static str = "Bucket.IamConfig";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.Bucket.IamConfig".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.Bucket.IamConfig".into()
    }
}

impl ::prost::Name for bucket::iam_config::UniformBucketLevelAccess {
    const NAME: &'static str = "Bucket.IamConfig.UniformBucketLevelAccess";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.Bucket.IamConfig.UniformBucketLevelAccess".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.Bucket.IamConfig.UniformBucketLevelAccess".into()
    }
}

impl ::prost::Name for bucket::CustomPlacementConfig {
    const NAME: &'static str = "Bucket.CustomPlacementConfig";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.Bucket.CustomPlacementConfig".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.Bucket.CustomPlacementConfig".into()
    }
}

impl ::prost::Name for bucket::Autoclass {
    const NAME: &'static str = "Bucket.Autoclass";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.Bucket.Autoclass".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.Bucket.Autoclass".into()
    }
}

impl ::prost::Name for bucket::HierarchicalNamespace {
    const NAME: &'static str = "Bucket.HierarchicalNamespace";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.Bucket.HierarchicalNamespace".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.Bucket.HierarchicalNamespace".into()
    }
}

impl ::prost::Name for Object {
    const NAME: &'static str = "Object";
    const PACKAGE: &'static str = "google.storage.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.v2.Object".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.v2.Object".into()
    }
}

/// Generated server implementations.
pub mod storage_server {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    /// Generated trait containing gRPC methods that should be implemented for use with StorageServer.
    #[async_trait]
    pub trait Storage: std::marker::Send + std::marker::Sync + 'static {
        async fn delete_bucket(
            &self,
            request: tonic::Request<super::DeleteBucketRequest>,
        ) -> std::result::Result<
            tonic::Response<()>,
            tonic::Status,
        >;
        async fn get_bucket(
            &self,
            request: tonic::Request<super::GetBucketRequest>,
        ) -> std::result::Result<
            tonic::Response<super::Bucket>,
            tonic::Status,
        >;
        async fn create_bucket(
            &self,
            request: tonic::Request<super::CreateBucketRequest>,
        ) -> std::result::Result<
            tonic::Response<super::Bucket>,
            tonic::Status,
        >;
        async fn list_buckets(
            &self,
            request: tonic::Request<super::ListBucketsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListBucketsResponse>,
            tonic::Status,
        >;
        async fn lock_bucket_retention_policy(
            &self,
            request: tonic::Request<super::LockBucketRetentionPolicyRequest>,
        ) -> std::result::Result<
            tonic::Response<super::Bucket>,
            tonic::Status,
        >;
        async fn get_iam_policy(
            &self,
            request: tonic::Request<super::super::super::iam::v1::GetIamPolicyRequest>,
        ) -> std::result::Result<
            tonic::Response<super::super::super::iam::v1::Policy>,
            tonic::Status,
        >;
        async fn set_iam_policy(
            &self,
            request: tonic::Request<super::super::super::iam::v1::SetIamPolicyRequest>,
        ) -> std::result::Result<
            tonic::Response<super::super::super::iam::v1::Policy>,
            tonic::Status,
        >;
        async fn test_iam_permissions(
            &self,
            request: tonic::Request<super::super::super::iam::v1::TestIamPermissionsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::super::super::iam::v1::TestIamPermissionsResponse>,
            tonic::Status,
        >;
        async fn update_bucket(
            &self,
            request: tonic::Request<super::UpdateBucketRequest>,
        ) -> std::result::Result<
            tonic::Response<super::Bucket>,
            tonic::Status,
        >;
        async fn delete_notification_config(
            &self,
            request: tonic::Request<super::DeleteNotificationConfigRequest>,
        ) -> std::result::Result<
            tonic::Response<()>,
            tonic::Status,
        >;
        async fn get_notification_config(
            &self,
            request: tonic::Request<super::GetNotificationConfigRequest>,
        ) -> std::result::Result<
            tonic::Response<super::NotificationConfig>,
            tonic::Status,
        >;
        async fn create_notification_config(
            &self,
            request: tonic::Request<super::CreateNotificationConfigRequest>,
        ) -> std::result::Result<
            tonic::Response<super::NotificationConfig>,
            tonic::Status,
        >;
        async fn list_notification_configs(
            &self,
            request: tonic::Request<super::ListNotificationConfigsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListNotificationConfigsResponse>,
            tonic::Status,
        >;
        async fn compose_object(
            &self,
            request: tonic::Request<super::ComposeObjectRequest>,
        ) -> std::result::Result<
            tonic::Response<super::Object>,
            tonic::Status,
        >;
        async fn delete_object(
            &self,
            request: tonic::Request<super::DeleteObjectRequest>,
        ) -> std::result::Result<
            tonic::Response<()>,
            tonic::Status,
        >;
        async fn restore_object(
            &self,
            request: tonic::Request<super::RestoreObjectRequest>,
        ) -> std::result::Result<
            tonic::Response<super::Object>,
            tonic::Status,
        >;
        async fn cancel_resumable_write(
            &self,
            request: tonic::Request<super::CancelResumableWriteRequest>,
        ) -> std::result::Result<
            tonic::Response<super::CancelResumableWriteResponse>,
            tonic::Status,
        >;
        async fn get_object(
            &self,
            request: tonic::Request<super::GetObjectRequest>,
        ) -> std::result::Result<
            tonic::Response<super::Object>,
            tonic::Status,
        >;
        async fn update_object(
            &self,
            request: tonic::Request<super::UpdateObjectRequest>,
        ) -> std::result::Result<
            tonic::Response<super::Object>,
            tonic::Status,
        >;
        async fn list_objects(
            &self,
            request: tonic::Request<super::ListObjectsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListObjectsResponse>,
            tonic::Status,
        >;
        async fn rewrite_object(
            &self,
            request: tonic::Request<super::RewriteObjectRequest>,
        ) -> std::result::Result<
            tonic::Response<super::RewriteResponse>,
            tonic::Status,
        >;
        async fn start_resumable_write(
            &self,
            request: tonic::Request<super::StartResumableWriteRequest>,
        ) -> std::result::Result<
            tonic::Response<super::StartResumableWriteResponse>,
            tonic::Status,
        >;
        async fn query_write_status(
            &self,
            request: tonic::Request<super::QueryWriteStatusRequest>,
        ) -> std::result::Result<
            tonic::Response<super::QueryWriteStatusResponse>,
            tonic::Status,
        >;
        async fn move_object(
            &self,
            request: tonic::Request<super::MoveObjectRequest>,
        ) -> std::result::Result<
            tonic::Response<super::Object>,
            tonic::Status,
        >;
        async fn get_service_account(
            &self,
            request: tonic::Request<super::GetServiceAccountRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ServiceAccount>,
            tonic::Status,
        >;
        async fn create_hmac_key(
            &self,
            request: tonic::Request<super::CreateHmacKeyRequest>,
        ) -> std::result::Result<
            tonic::Response<super::CreateHmacKeyResponse>,
            tonic::Status,
        >;
        async fn delete_hmac_key(
            &self,
            request: tonic::Request<super::DeleteHmacKeyRequest>,
        ) -> std::result::Result<
            tonic::Response<()>,
            tonic::Status,
        >;
        async fn get_hmac_key(
            &self,
            request: tonic::Request<super::GetHmacKeyRequest>,
        ) -> std::result::Result<
            tonic::Response<super::HmacKeyMetadata>,
            tonic::Status,
        >;
        async fn list_hmac_keys(
            &self,
            request: tonic::Request<super::ListHmacKeysRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListHmacKeysResponse>,
            tonic::Status,
        >;
        async fn update_hmac_key(
            &self,
            request: tonic::Request<super::UpdateHmacKeyRequest>,
        ) -> std::result::Result<
            tonic::Response<super::HmacKeyMetadata>,
            tonic::Status,
        >;
    }
    #[derive(Debug)]
    pub struct StorageServer<T> {
        inner: Arc<T>,
        accept_compression_encodings: EnabledCompressionEncodings,
        send_compression_encodings: EnabledCompressionEncodings,
        max_decoding_message_size: Option<usize>,
        max_encoding_message_size: Option<usize>,
    }
    impl<T> StorageServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }
        pub fn from_arc(inner: Arc<T>) -> Self {
            Self {
                inner,
                accept_compression_encodings: Default::default(),
                send_compression_encodings: Default::default(),
                max_decoding_message_size: None,
                max_encoding_message_size: None,
            }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> InterceptedService<Self, F>
        where
            F: tonic::service::Interceptor,
        {
            InterceptedService::new(Self::new(inner), interceptor)
        }
        /// Enable decompressing requests with the given encoding.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.accept_compression_encodings.enable(encoding);
            self
        }
        /// Compress responses with the given encoding, if the client supports it.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.send_compression_encodings.enable(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.max_decoding_message_size = Some(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.max_encoding_message_size = Some(limit);
            self
        }
    }
    impl<T, B> tonic::codegen::Service<http::Request<B>> for StorageServer<T>
    where
        T: Storage,
        B: Body + std::marker::Send + 'static,
        B::Error: Into<StdError> + std::marker::Send + 'static,
    {
        type Response = http::Response<tonic::body::Body>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(
            &mut self,
            _cx: &mut Context<'_>,
        ) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            match req.uri().path() {
                "/google.storage.v2.Storage/DeleteBucket" => {
                    #[allow(non_camel_case_types)]
                    struct DeleteBucketSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::DeleteBucketRequest>
                    for DeleteBucketSvc<T> {
                        type Response = ();
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::DeleteBucketRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::delete_bucket(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = DeleteBucketSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/GetBucket" => {
                    #[allow(non_camel_case_types)]
                    struct GetBucketSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::GetBucketRequest>
                    for GetBucketSvc<T> {
                        type Response = super::Bucket;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetBucketRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::get_bucket(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetBucketSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/CreateBucket" => {
                    #[allow(non_camel_case_types)]
                    struct CreateBucketSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::CreateBucketRequest>
                    for CreateBucketSvc<T> {
                        type Response = super::Bucket;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::CreateBucketRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::create_bucket(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = CreateBucketSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/ListBuckets" => {
                    #[allow(non_camel_case_types)]
                    struct ListBucketsSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::ListBucketsRequest>
                    for ListBucketsSvc<T> {
                        type Response = super::ListBucketsResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ListBucketsRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::list_buckets(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = ListBucketsSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/LockBucketRetentionPolicy" => {
                    #[allow(non_camel_case_types)]
                    struct LockBucketRetentionPolicySvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::LockBucketRetentionPolicyRequest>
                    for LockBucketRetentionPolicySvc<T> {
                        type Response = super::Bucket;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::LockBucketRetentionPolicyRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::lock_bucket_retention_policy(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = LockBucketRetentionPolicySvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/GetIamPolicy" => {
                    #[allow(non_camel_case_types)]
                    struct GetIamPolicySvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::super::super::iam::v1::GetIamPolicyRequest>
                    for GetIamPolicySvc<T> {
                        type Response = super::super::super::iam::v1::Policy;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::iam::v1::GetIamPolicyRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::get_iam_policy(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetIamPolicySvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/SetIamPolicy" => {
                    #[allow(non_camel_case_types)]
                    struct SetIamPolicySvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::super::super::iam::v1::SetIamPolicyRequest>
                    for SetIamPolicySvc<T> {
                        type Response = super::super::super::iam::v1::Policy;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::iam::v1::SetIamPolicyRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::set_iam_policy(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SetIamPolicySvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/TestIamPermissions" => {
                    #[allow(non_camel_case_types)]
                    struct TestIamPermissionsSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::super::super::iam::v1::TestIamPermissionsRequest>
                    for TestIamPermissionsSvc<T> {
                        type Response = super::super::super::iam::v1::TestIamPermissionsResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::iam::v1::TestIamPermissionsRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::test_iam_permissions(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = TestIamPermissionsSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/UpdateBucket" => {
                    #[allow(non_camel_case_types)]
                    struct UpdateBucketSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::UpdateBucketRequest>
                    for UpdateBucketSvc<T> {
                        type Response = super::Bucket;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::UpdateBucketRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::update_bucket(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = UpdateBucketSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/DeleteNotificationConfig" => {
                    #[allow(non_camel_case_types)]
                    struct DeleteNotificationConfigSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::DeleteNotificationConfigRequest>
                    for DeleteNotificationConfigSvc<T> {
                        type Response = ();
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::DeleteNotificationConfigRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::delete_notification_config(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = DeleteNotificationConfigSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/GetNotificationConfig" => {
                    #[allow(non_camel_case_types)]
                    struct GetNotificationConfigSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::GetNotificationConfigRequest>
                    for GetNotificationConfigSvc<T> {
                        type Response = super::NotificationConfig;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetNotificationConfigRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::get_notification_config(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetNotificationConfigSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/CreateNotificationConfig" => {
                    #[allow(non_camel_case_types)]
                    struct CreateNotificationConfigSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::CreateNotificationConfigRequest>
                    for CreateNotificationConfigSvc<T> {
                        type Response = super::NotificationConfig;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::CreateNotificationConfigRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::create_notification_config(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = CreateNotificationConfigSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/ListNotificationConfigs" => {
                    #[allow(non_camel_case_types)]
                    struct ListNotificationConfigsSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::ListNotificationConfigsRequest>
                    for ListNotificationConfigsSvc<T> {
                        type Response = super::ListNotificationConfigsResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ListNotificationConfigsRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::list_notification_configs(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = ListNotificationConfigsSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/ComposeObject" => {
                    #[allow(non_camel_case_types)]
                    struct ComposeObjectSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::ComposeObjectRequest>
                    for ComposeObjectSvc<T> {
                        type Response = super::Object;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ComposeObjectRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::compose_object(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = ComposeObjectSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/DeleteObject" => {
                    #[allow(non_camel_case_types)]
                    struct DeleteObjectSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::DeleteObjectRequest>
                    for DeleteObjectSvc<T> {
                        type Response = ();
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::DeleteObjectRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::delete_object(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = DeleteObjectSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/RestoreObject" => {
                    #[allow(non_camel_case_types)]
                    struct RestoreObjectSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::RestoreObjectRequest>
                    for RestoreObjectSvc<T> {
                        type Response = super::Object;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RestoreObjectRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::restore_object(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = RestoreObjectSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/CancelResumableWrite" => {
                    #[allow(non_camel_case_types)]
                    struct CancelResumableWriteSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::CancelResumableWriteRequest>
                    for CancelResumableWriteSvc<T> {
                        type Response = super::CancelResumableWriteResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::CancelResumableWriteRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::cancel_resumable_write(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = CancelResumableWriteSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/GetObject" => {
                    #[allow(non_camel_case_types)]
                    struct GetObjectSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::GetObjectRequest>
                    for GetObjectSvc<T> {
                        type Response = super::Object;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetObjectRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::get_object(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetObjectSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/UpdateObject" => {
                    #[allow(non_camel_case_types)]
                    struct UpdateObjectSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::UpdateObjectRequest>
                    for UpdateObjectSvc<T> {
                        type Response = super::Object;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::UpdateObjectRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::update_object(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = UpdateObjectSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/ListObjects" => {
                    #[allow(non_camel_case_types)]
                    struct ListObjectsSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::ListObjectsRequest>
                    for ListObjectsSvc<T> {
                        type Response = super::ListObjectsResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ListObjectsRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::list_objects(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = ListObjectsSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/RewriteObject" => {
                    #[allow(non_camel_case_types)]
                    struct RewriteObjectSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::RewriteObjectRequest>
                    for RewriteObjectSvc<T> {
                        type Response = super::RewriteResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RewriteObjectRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::rewrite_object(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = RewriteObjectSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/StartResumableWrite" => {
                    #[allow(non_camel_case_types)]
                    struct StartResumableWriteSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::StartResumableWriteRequest>
                    for StartResumableWriteSvc<T> {
                        type Response = super::StartResumableWriteResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::StartResumableWriteRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::start_resumable_write(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = StartResumableWriteSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/QueryWriteStatus" => {
                    #[allow(non_camel_case_types)]
                    struct QueryWriteStatusSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::QueryWriteStatusRequest>
                    for QueryWriteStatusSvc<T> {
                        type Response = super::QueryWriteStatusResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::QueryWriteStatusRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::query_write_status(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = QueryWriteStatusSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/MoveObject" => {
                    #[allow(non_camel_case_types)]
                    struct MoveObjectSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::MoveObjectRequest>
                    for MoveObjectSvc<T> {
                        type Response = super::Object;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::MoveObjectRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::move_object(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = MoveObjectSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/GetServiceAccount" => {
                    #[allow(non_camel_case_types)]
                    struct GetServiceAccountSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::GetServiceAccountRequest>
                    for GetServiceAccountSvc<T> {
                        type Response = super::ServiceAccount;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetServiceAccountRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::get_service_account(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetServiceAccountSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/CreateHmacKey" => {
                    #[allow(non_camel_case_types)]
                    struct CreateHmacKeySvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::CreateHmacKeyRequest>
                    for CreateHmacKeySvc<T> {
                        type Response = super::CreateHmacKeyResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::CreateHmacKeyRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::create_hmac_key(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = CreateHmacKeySvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/DeleteHmacKey" => {
                    #[allow(non_camel_case_types)]
                    struct DeleteHmacKeySvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::DeleteHmacKeyRequest>
                    for DeleteHmacKeySvc<T> {
                        type Response = ();
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::DeleteHmacKeyRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::delete_hmac_key(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = DeleteHmacKeySvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/GetHmacKey" => {
                    #[allow(non_camel_case_types)]
                    struct GetHmacKeySvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::GetHmacKeyRequest>
                    for GetHmacKeySvc<T> {
                        type Response = super::HmacKeyMetadata;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetHmacKeyRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::get_hmac_key(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetHmacKeySvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/ListHmacKeys" => {
                    #[allow(non_camel_case_types)]
                    struct ListHmacKeysSvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::ListHmacKeysRequest>
                    for ListHmacKeysSvc<T> {
                        type Response = super::ListHmacKeysResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ListHmacKeysRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::list_hmac_keys(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = ListHmacKeysSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/google.storage.v2.Storage/UpdateHmacKey" => {
                    #[allow(non_camel_case_types)]
                    struct UpdateHmacKeySvc<T: Storage>(pub Arc<T>);
                    impl<
                        T: Storage,
                    > tonic::server::UnaryService<super::UpdateHmacKeyRequest>
                    for UpdateHmacKeySvc<T> {
                        type Response = super::HmacKeyMetadata;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::UpdateHmacKeyRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Storage>::update_hmac_key(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = UpdateHmacKeySvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => {
                    Box::pin(async move {
                        let mut response = http::Response::new(
                            tonic::body::Body::default(),
                        );
                        let headers = response.headers_mut();
                        headers
                            .insert(
                                tonic::Status::GRPC_STATUS,
                                (tonic::Code::Unimplemented as i32).into(),
                            );
                        headers
                            .insert(
                                http::header::CONTENT_TYPE,
                                tonic::metadata::GRPC_CONTENT_TYPE,
                            );
                        Ok(response)
                    })
                }
            }
        }
    }
    impl<T> Clone for StorageServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self {
                inner,
                accept_compression_encodings: self.accept_compression_encodings,
                send_compression_encodings: self.send_compression_encodings,
                max_decoding_message_size: self.max_decoding_message_size,
                max_encoding_message_size: self.max_encoding_message_size,
            }
        }
    }
    /// Generated gRPC service name
    pub const SERVICE_NAME: &str = "google.storage.v2.Storage";
    impl<T> tonic::server::NamedService for StorageServer<T> {
        const NAME: &'static str = SERVICE_NAME;
    }
}
