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
