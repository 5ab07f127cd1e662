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

/// Contains information about a pending rename operation.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PendingRenameInfo {
    #[prost(string, tag = "1")]
    pub operation: ::prost::alloc::string::String,
}

/// A folder resource. This resource can only exist in a hierarchical namespace
/// enabled bucket.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Folder {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(int64, tag = "3")]
    pub metageneration: i64,
    #[prost(message, optional, tag = "4")]
    pub create_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "5")]
    pub update_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "7")]
    pub pending_rename_info: ::core::option::Option<PendingRenameInfo>,
}

/// Request message for GetFolder. This operation is only applicable to a
/// hierarchical namespace enabled bucket.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFolderRequest {
    #[prost(string, tag = "6")]
    pub name: ::prost::alloc::string::String,
    #[prost(int64, optional, tag = "3")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "4")]
    pub if_metageneration_not_match: ::core::option::Option<i64>,
    #[prost(string, tag = "5")]
    pub request_id: ::prost::alloc::string::String,
}

/// Request message for CreateFolder. This operation is only applicable to a
/// hierarchical namespace enabled bucket.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateFolderRequest {
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub folder: ::core::option::Option<Folder>,
    #[prost(string, tag = "3")]
    pub folder_id: ::prost::alloc::string::String,
    #[prost(bool, tag = "4")]
    pub recursive: bool,
    #[prost(string, tag = "5")]
    pub request_id: ::prost::alloc::string::String,
}

/// Request message for DeleteFolder. This operation is only applicable to a
/// hierarchical namespace enabled bucket.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteFolderRequest {
    #[prost(string, tag = "6")]
    pub name: ::prost::alloc::string::String,
    #[prost(int64, optional, tag = "3")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "4")]
    pub if_metageneration_not_match: ::core::option::Option<i64>,
    #[prost(string, tag = "5")]
    pub request_id: ::prost::alloc::string::String,
}

/// Request message for DeleteFolderRecursive.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteFolderRecursiveRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(int64, optional, tag = "2")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "3")]
    pub if_metageneration_not_match: ::core::option::Option<i64>,
    #[prost(string, tag = "4")]
    pub request_id: ::prost::alloc::string::String,
}

/// Request message for ListFolders. This operation is only applicable to a
/// hierarchical namespace enabled bucket.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFoldersRequest {
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub page_size: i32,
    #[prost(string, tag = "3")]
    pub page_token: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub prefix: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub delimiter: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub lexicographic_start: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub lexicographic_end: ::prost::alloc::string::String,
    #[prost(string, tag = "9")]
    pub request_id: ::prost::alloc::string::String,
}

/// Response message for ListFolders.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFoldersResponse {
    #[prost(message, repeated, tag = "1")]
    pub folders: ::prost::alloc::vec::Vec<Folder>,
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
}

/// Request message for RenameFolder. This operation is only applicable to a
/// hierarchical namespace enabled bucket.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RenameFolderRequest {
    #[prost(string, tag = "7")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub destination_folder_id: ::prost::alloc::string::String,
    #[prost(int64, optional, tag = "4")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "5")]
    pub if_metageneration_not_match: ::core::option::Option<i64>,
    #[prost(string, tag = "6")]
    pub request_id: ::prost::alloc::string::String,
}

/// The message contains metadata that is common to all Storage Control
/// long-running operations, present in its `google.longrunning.Operation`
/// messages, and accessible via `metadata.common_metadata`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommonLongRunningOperationMetadata {
    #[prost(message, optional, tag = "1")]
    pub create_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "2")]
    pub end_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub update_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag = "4")]
    pub r#type: ::prost::alloc::string::String,
    #[prost(bool, tag = "5")]
    pub requested_cancellation: bool,
    #[prost(int32, tag = "6")]
    pub progress_percent: i32,
}

/// Message returned in the metadata field of the Operation resource for
/// RenameFolder operations.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RenameFolderMetadata {
    #[prost(message, optional, tag = "1")]
    pub common_metadata: ::core::option::Option<CommonLongRunningOperationMetadata>,
    #[prost(string, tag = "2")]
    pub source_folder_id: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub destination_folder_id: ::prost::alloc::string::String,
}

/// Message returned in the metadata field of the Operation resource for
/// DeleteFolderRecursive operations.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteFolderRecursiveMetadata {
    #[prost(message, optional, tag = "1")]
    pub common_metadata: ::core::option::Option<CommonLongRunningOperationMetadata>,
    #[prost(string, tag = "2")]
    pub folder_id: ::prost::alloc::string::String,
}

/// The storage layout configuration of a bucket.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StorageLayout {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub location: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub location_type: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub custom_placement_config: ::core::option::Option<storage_layout::CustomPlacementConfig>,
    #[prost(message, optional, tag = "5")]
    pub hierarchical_namespace: ::core::option::Option<storage_layout::HierarchicalNamespace>,
}
/// Nested message and enum types in `StorageLayout`.
pub mod storage_layout {
    /// Configuration for Custom Dual Regions.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CustomPlacementConfig {
        #[prost(string, repeated, tag = "1")]
        pub data_locations: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }

    /// Configuration for a bucket's hierarchical namespace feature.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct HierarchicalNamespace {
        #[prost(bool, tag = "1")]
        pub enabled: bool,
    }
}

/// Request message for GetStorageLayout.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetStorageLayoutRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub prefix: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub request_id: ::prost::alloc::string::String,
}

/// A managed folder.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ManagedFolder {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(int64, tag = "3")]
    pub metageneration: i64,
    #[prost(message, optional, tag = "4")]
    pub create_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "5")]
    pub update_time: ::core::option::Option<::prost_types::Timestamp>,
}

/// Request message for GetManagedFolder.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetManagedFolderRequest {
    #[prost(string, tag = "6")]
    pub name: ::prost::alloc::string::String,
    #[prost(int64, optional, tag = "3")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "4")]
    pub if_metageneration_not_match: ::core::option::Option<i64>,
    #[prost(string, tag = "5")]
    pub request_id: ::prost::alloc::string::String,
}

/// Request message for CreateManagedFolder.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateManagedFolderRequest {
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub managed_folder: ::core::option::Option<ManagedFolder>,
    #[prost(string, tag = "3")]
    pub managed_folder_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub request_id: ::prost::alloc::string::String,
}

/// DeleteManagedFolder RPC request message.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteManagedFolderRequest {
    #[prost(string, tag = "7")]
    pub name: ::prost::alloc::string::String,
    #[prost(int64, optional, tag = "3")]
    pub if_metageneration_match: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "4")]
    pub if_metageneration_not_match: ::core::option::Option<i64>,
    #[prost(bool, tag = "5")]
    pub allow_non_empty: bool,
    #[prost(string, tag = "6")]
    pub request_id: ::prost::alloc::string::String,
}

/// Request message for ListManagedFolders.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListManagedFoldersRequest {
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub page_size: i32,
    #[prost(string, tag = "3")]
    pub page_token: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub prefix: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub request_id: ::prost::alloc::string::String,
}

/// Response message for ListManagedFolders.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListManagedFoldersResponse {
    #[prost(message, repeated, tag = "1")]
    pub managed_folders: ::prost::alloc::vec::Vec<ManagedFolder>,
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
}

/// Message returned in the metadata field of the Operation resource for
/// CreateAnywhereCache operations.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateAnywhereCacheMetadata {
    #[prost(message, optional, tag = "1")]
    pub common_metadata: ::core::option::Option<CommonLongRunningOperationMetadata>,
    #[prost(string, optional, tag = "2")]
    pub anywhere_cache_id: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "6")]
    pub zone: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "3")]
    pub ttl: ::core::option::Option<::prost_types::Duration>,
    #[prost(string, optional, tag = "5")]
    pub admission_policy: ::core::option::Option<::prost::alloc::string::String>,
}

/// Message returned in the metadata field of the Operation resource for
/// UpdateAnywhereCache operation.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateAnywhereCacheMetadata {
    #[prost(message, optional, tag = "1")]
    pub common_metadata: ::core::option::Option<CommonLongRunningOperationMetadata>,
    #[prost(string, optional, tag = "2")]
    pub anywhere_cache_id: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "5")]
    pub zone: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "3")]
    pub ttl: ::core::option::Option<::prost_types::Duration>,
    #[prost(string, optional, tag = "4")]
    pub admission_policy: ::core::option::Option<::prost::alloc::string::String>,
}

/// An Anywhere Cache Instance.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AnywhereCache {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "10")]
    pub zone: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub ttl: ::core::option::Option<::prost_types::Duration>,
    #[prost(string, tag = "9")]
    pub admission_policy: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub state: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "6")]
    pub create_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "7")]
    pub update_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(bool, tag = "8")]
    pub pending_update: bool,
}

/// Request message for CreateAnywhereCache.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateAnywhereCacheRequest {
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub anywhere_cache: ::core::option::Option<AnywhereCache>,
    #[prost(string, tag = "4")]
    pub request_id: ::prost::alloc::string::String,
}

/// Request message for UpdateAnywhereCache.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateAnywhereCacheRequest {
    #[prost(message, optional, tag = "1")]
    pub anywhere_cache: ::core::option::Option<AnywhereCache>,
    #[prost(message, optional, tag = "2")]
    pub update_mask: ::core::option::Option<::prost_types::FieldMask>,
    #[prost(string, tag = "3")]
    pub request_id: ::prost::alloc::string::String,
}

/// Request message for DisableAnywhereCache.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DisableAnywhereCacheRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub request_id: ::prost::alloc::string::String,
}

/// Request message for PauseAnywhereCache.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PauseAnywhereCacheRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub request_id: ::prost::alloc::string::String,
}

/// Request message for ResumeAnywhereCache.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResumeAnywhereCacheRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub request_id: ::prost::alloc::string::String,
}

/// Request message for GetAnywhereCache.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAnywhereCacheRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub request_id: ::prost::alloc::string::String,
}

/// Request message for ListAnywhereCaches.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListAnywhereCachesRequest {
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub page_size: i32,
    #[prost(string, tag = "3")]
    pub page_token: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub request_id: ::prost::alloc::string::String,
}

/// Response message for ListAnywhereCaches.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListAnywhereCachesResponse {
    #[prost(message, repeated, tag = "1")]
    pub anywhere_caches: ::prost::alloc::vec::Vec<AnywhereCache>,
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
}

/// The `IntelligenceConfig` resource associated with your organization, folder,
/// or project.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntelligenceConfig {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(enumeration = "intelligence_config::EditionConfig", tag = "2")]
    pub edition_config: i32,
    #[prost(message, optional, tag = "3")]
    pub update_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "4")]
    pub filter: ::core::option::Option<intelligence_config::Filter>,
    #[prost(message, optional, tag = "5")]
    pub effective_intelligence_config: ::core::option::Option<intelligence_config::EffectiveIntelligenceConfig>,
    #[prost(message, optional, tag = "7")]
    pub trial_config: ::core::option::Option<intelligence_config::TrialConfig>,
}
/// Nested message and enum types in `IntelligenceConfig`.
pub mod intelligence_config {
    /// Filter over location and bucket using include or exclude semantics.
    /// Resources that match the include or exclude filter are exclusively
    /// included or excluded from the Storage Intelligence plan.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Filter {
        /// Bucket locations to include or exclude.
        #[prost(oneof = "filter::CloudStorageLocationsOneof", tags = "1, 2")]
        pub cloud_storage_locations: ::core::option::Option<filter::CloudStorageLocationsOneof>,
        /// Buckets to include or exclude.
        #[prost(oneof = "filter::CloudStorageBucketsOneof", tags = "3, 4")]
        pub cloud_storage_buckets: ::core::option::Option<filter::CloudStorageBucketsOneof>,
    }
    /// Nested message and enum types in `Filter`.
    pub mod filter {
        /// Collection of bucket locations.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct CloudStorageLocations {
            #[prost(string, repeated, tag = "1")]
            pub locations: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
        }

        /// Collection of buckets.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct CloudStorageBuckets {
            #[prost(string, repeated, tag = "1")]
            pub bucket_id_regexes: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
        }

        /// Bucket locations to include or exclude.
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum CloudStorageLocationsOneof {
            /// Bucket locations to include.
            #[prost(message, tag = "1")]
            IncludedCloudStorageLocations(CloudStorageLocations),
            /// Bucket locations to exclude.
            #[prost(message, tag = "2")]
            ExcludedCloudStorageLocations(CloudStorageLocations),
        }

        /// Buckets to include or exclude.
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum CloudStorageBucketsOneof {
            /// Buckets to include.
            #[prost(message, tag = "3")]
            IncludedCloudStorageBuckets(CloudStorageBuckets),
            /// Buckets to exclude.
            #[prost(message, tag = "4")]
            ExcludedCloudStorageBuckets(CloudStorageBuckets),
        }
    }

    /// The effective `IntelligenceConfig` for the resource.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct EffectiveIntelligenceConfig {
        #[prost(enumeration = "effective_intelligence_config::EffectiveEdition", tag = "1")]
        pub effective_edition: i32,
        #[prost(string, tag = "2")]
        pub intelligence_config: ::prost::alloc::string::String,
    }
    /// Nested message and enum types in `EffectiveIntelligenceConfig`.
    pub mod effective_intelligence_config {
        /// The effective edition of the `IntelligenceConfig` resource.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum EffectiveEdition {
            /// This is an unknown edition of the resource.
            Unspecified = 0,
            /// No edition.
            None = 1,
            /// The `IntelligenceConfig` resource is of STANDARD edition.
            Standard = 2,
        }
    }

    /// The trial configuration of the `IntelligenceConfig` resource.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TrialConfig {
        #[prost(message, optional, tag = "3")]
        pub expire_time: ::core::option::Option<::prost_types::Timestamp>,
    }

    /// The edition configuration of the `IntelligenceConfig` resource. This
    /// signifies the edition used for configuring the `IntelligenceConfig`
    /// resource and can only take the following values:
    /// `EDITION_CONFIG_UNSPECIFIED`, `INHERIT`, `DISABLED`, `STANDARD` and
    /// `TRIAL`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum EditionConfig {
        /// This is an unknown edition of the resource.
        Unspecified = 0,
        /// The inherited edition from the parent and filters. This is the
        /// default edition when there is no `IntelligenceConfig` setup for a
        /// GCP resource.
        Inherit = 1,
        /// The edition configuration is disabled for the `IntelligenceConfig`
        /// resource and its children. Filters are not applicable.
        Disabled = 2,
        /// The `IntelligenceConfig` resource is of STANDARD edition.
        Standard = 3,
        /// The `IntelligenceConfig` resource is available in `TRIAL` edition.
        /// During the trial period, Cloud Storage does not charge for Storage
        /// Intelligence usage.
        Trial = 5,
    }
}

/// Request message to update the `IntelligenceConfig` resource associated with
/// your organization.
///
/// **IAM Permissions**:
///
/// Requires `storage.intelligenceConfigs.update`
/// [IAM](https://cloud.google.com/iam/docs/overview#permissions) permission on
/// the organization.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateOrganizationIntelligenceConfigRequest {
    #[prost(message, optional, tag = "1")]
    pub intelligence_config: ::core::option::Option<IntelligenceConfig>,
    #[prost(message, optional, tag = "2")]
    pub update_mask: ::core::option::Option<::prost_types::FieldMask>,
    #[prost(string, tag = "3")]
    pub request_id: ::prost::alloc::string::String,
}

/// Request message to update the `IntelligenceConfig` resource associated with
/// your folder.
///
/// **IAM Permissions**:
///
/// Requires `storage.intelligenceConfigs.update`
/// [IAM](https://cloud.google.com/iam/docs/overview#permissions) permission on
/// the folder.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateFolderIntelligenceConfigRequest {
    #[prost(message, optional, tag = "1")]
    pub intelligence_config: ::core::option::Option<IntelligenceConfig>,
    #[prost(message, optional, tag = "2")]
    pub update_mask: ::core::option::Option<::prost_types::FieldMask>,
    #[prost(string, tag = "3")]
    pub request_id: ::prost::alloc::string::String,
}

/// Request message to update the `IntelligenceConfig` resource associated with
/// your project.
///
/// **IAM Permissions**:
///
/// Requires `storage.intelligenceConfigs.update`
/// [IAM](https://cloud.google.com/iam/docs/overview#permissions) permission on
/// the project.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateProjectIntelligenceConfigRequest {
    #[prost(message, optional, tag = "1")]
    pub intelligence_config: ::core::option::Option<IntelligenceConfig>,
    #[prost(message, optional, tag = "2")]
    pub update_mask: ::core::option::Option<::prost_types::FieldMask>,
    #[prost(string, tag = "3")]
    pub request_id: ::prost::alloc::string::String,
}

/// Request message to get the `IntelligenceConfig` resource associated with
/// your organization.
///
/// **IAM Permissions**
///
/// Requires `storage.intelligenceConfigs.get`
/// [IAM](https://cloud.google.com/iam/docs/overview#permissions) permission on
/// the organization.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOrganizationIntelligenceConfigRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// Request message to get the `IntelligenceConfig` resource associated with
/// your folder.
///
/// **IAM Permissions**
///
/// Requires `storage.intelligenceConfigs.get`
/// [IAM](https://cloud.google.com/iam/docs/overview#permissions) permission on
/// the folder.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFolderIntelligenceConfigRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// Request message to get the `IntelligenceConfig` resource associated with
/// your project.
///
/// **IAM Permissions**
///
/// Requires `storage.intelligenceConfigs.get`
/// [IAM](https://cloud.google.com/iam/docs/overview#permissions) permission on
/// the project.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProjectIntelligenceConfigRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

impl ::prost::Name for PendingRenameInfo {
    const NAME: &'static str = "PendingRenameInfo";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.PendingRenameInfo".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.PendingRenameInfo".into()
    }
}

impl ::prost::Name for Folder {
    const NAME: &'static str = "Folder";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.Folder".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.Folder".into()
    }
}

impl ::prost::Name for GetFolderRequest {
    const NAME: &'static str = "GetFolderRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.GetFolderRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.GetFolderRequest".into()
    }
}

impl ::prost::Name for CreateFolderRequest {
    const NAME: &'static str = "CreateFolderRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.CreateFolderRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.CreateFolderRequest".into()
    }
}

impl ::prost::Name for DeleteFolderRequest {
    const NAME: &'static str = "DeleteFolderRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.DeleteFolderRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.DeleteFolderRequest".into()
    }
}

impl ::prost::Name for DeleteFolderRecursiveRequest {
    const NAME: &'static str = "DeleteFolderRecursiveRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.DeleteFolderRecursiveRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.DeleteFolderRecursiveRequest".into()
    }
}

impl ::prost::Name for ListFoldersRequest {
    const NAME: &'static str = "ListFoldersRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.ListFoldersRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.ListFoldersRequest".into()
    }
}

impl ::prost::Name for ListFoldersResponse {
    const NAME: &'static str = "ListFoldersResponse";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.ListFoldersResponse".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.ListFoldersResponse".into()
    }
}

impl ::prost::Name for RenameFolderRequest {
    const NAME: &'static str = "RenameFolderRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.RenameFolderRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.RenameFolderRequest".into()
    }
}

impl ::prost::Name for CommonLongRunningOperationMetadata {
    const NAME: &'static str = "CommonLongRunningOperationMetadata";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.CommonLongRunningOperationMetadata".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.CommonLongRunningOperationMetadata".into()
    }
}

impl ::prost::Name for RenameFolderMetadata {
    const NAME: &'static str = "RenameFolderMetadata";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.RenameFolderMetadata".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.RenameFolderMetadata".into()
    }
}

impl ::prost::Name for DeleteFolderRecursiveMetadata {
    const NAME: &'static str = "DeleteFolderRecursiveMetadata";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.DeleteFolderRecursiveMetadata".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.DeleteFolderRecursiveMetadata".into()
    }
}

impl ::prost::Name for StorageLayout {
    const NAME: &'static str = "StorageLayout";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.StorageLayout".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.StorageLayout".into()
    }
}

impl ::prost::Name for storage_layout::CustomPlacementConfig {
    const NAME: &'static str = "StorageLayout.CustomPlacementConfig";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.StorageLayout.CustomPlacementConfig".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.StorageLayout.CustomPlacementConfig".into()
    }
}

impl ::prost::Name for storage_layout::HierarchicalNamespace {
    const NAME: &'static str = "StorageLayout.HierarchicalNamespace";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.StorageLayout.HierarchicalNamespace".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.StorageLayout.HierarchicalNamespace".into()
    }
}

impl ::prost::Name for GetStorageLayoutRequest {
    const NAME: &'static str = "GetStorageLayoutRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.GetStorageLayoutRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.GetStorageLayoutRequest".into()
    }
}

impl ::prost::Name for ManagedFolder {
    const NAME: &'static str = "ManagedFolder";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.ManagedFolder".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.ManagedFolder".into()
    }
}

impl ::prost::Name for GetManagedFolderRequest {
    const NAME: &'static str = "GetManagedFolderRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.GetManagedFolderRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.GetManagedFolderRequest".into()
    }
}

impl ::prost::Name for CreateManagedFolderRequest {
    const NAME: &'static str = "CreateManagedFolderRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.CreateManagedFolderRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.CreateManagedFolderRequest".into()
    }
}

impl ::prost::Name for DeleteManagedFolderRequest {
    const NAME: &'static str = "DeleteManagedFolderRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.DeleteManagedFolderRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.DeleteManagedFolderRequest".into()
    }
}

impl ::prost::Name for ListManagedFoldersRequest {
    const NAME: &'static str = "ListManagedFoldersRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.ListManagedFoldersRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.ListManagedFoldersRequest".into()
    }
}

impl ::prost::Name for ListManagedFoldersResponse {
    const NAME: &'static str = "ListManagedFoldersResponse";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.ListManagedFoldersResponse".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.ListManagedFoldersResponse".into()
    }
}

impl ::prost::Name for CreateAnywhereCacheMetadata {
    const NAME: &'static str = "CreateAnywhereCacheMetadata";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.CreateAnywhereCacheMetadata".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.CreateAnywhereCacheMetadata".into()
    }
}

impl ::prost::Name for UpdateAnywhereCacheMetadata {
    const NAME: &'static str = "UpdateAnywhereCacheMetadata";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.UpdateAnywhereCacheMetadata".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.UpdateAnywhereCacheMetadata".into()
    }
}

impl ::prost::Name for AnywhereCache {
    const NAME: &'static str = "AnywhereCache";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.AnywhereCache".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.AnywhereCache".into()
    }
}

impl ::prost::Name for CreateAnywhereCacheRequest {
    const NAME: &'static str = "CreateAnywhereCacheRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.CreateAnywhereCacheRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.CreateAnywhereCacheRequest".into()
    }
}

impl ::prost::Name for UpdateAnywhereCacheRequest {
    const NAME: &'static str = "UpdateAnywhereCacheRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.UpdateAnywhereCacheRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.UpdateAnywhereCacheRequest".into()
    }
}

impl ::prost::Name for DisableAnywhereCacheRequest {
    const NAME: &'static str = "DisableAnywhereCacheRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.DisableAnywhereCacheRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.DisableAnywhereCacheRequest".into()
    }
}

impl ::prost::Name for PauseAnywhereCacheRequest {
    const NAME: &'static str = "PauseAnywhereCacheRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.PauseAnywhereCacheRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.PauseAnywhereCacheRequest".into()
    }
}

impl ::prost::Name for ResumeAnywhereCacheRequest {
    const NAME: &'static str = "ResumeAnywhereCacheRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.ResumeAnywhereCacheRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.ResumeAnywhereCacheRequest".into()
    }
}

impl ::prost::Name for GetAnywhereCacheRequest {
    const NAME: &'static str = "GetAnywhereCacheRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.GetAnywhereCacheRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.GetAnywhereCacheRequest".into()
    }
}

impl ::prost::Name for ListAnywhereCachesRequest {
    const NAME: &'static str = "ListAnywhereCachesRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.ListAnywhereCachesRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.ListAnywhereCachesRequest".into()
    }
}

impl ::prost::Name for ListAnywhereCachesResponse {
    const NAME: &'static str = "ListAnywhereCachesResponse";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.ListAnywhereCachesResponse".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.ListAnywhereCachesResponse".into()
    }
}

impl ::prost::Name for IntelligenceConfig {
    const NAME: &'static str = "IntelligenceConfig";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.IntelligenceConfig".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.IntelligenceConfig".into()
    }
}

impl ::prost::Name for intelligence_config::Filter {
    const NAME: &'static str = "IntelligenceConfig.Filter";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.IntelligenceConfig.Filter".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.IntelligenceConfig.Filter".into()
    }
}

impl ::prost::Name for intelligence_config::filter::CloudStorageLocations {
    const NAME: &'static str = "IntelligenceConfig.Filter.CloudStorageLocations";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.IntelligenceConfig.Filter.CloudStorageLocations".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.IntelligenceConfig.Filter.CloudStorageLocations".into()
    }
}

impl ::prost::Name for intelligence_config::filter::CloudStorageBuckets {
    const NAME: &'static str = "IntelligenceConfig.Filter.CloudStorageBuckets";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.IntelligenceConfig.Filter.CloudStorageBuckets".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.IntelligenceConfig.Filter.CloudStorageBuckets".into()
    }
}

impl ::prost::Name for intelligence_config::EffectiveIntelligenceConfig {
    const NAME: &'static str = "IntelligenceConfig.EffectiveIntelligenceConfig";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.IntelligenceConfig.EffectiveIntelligenceConfig".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.IntelligenceConfig.EffectiveIntelligenceConfig".into()
    }
}

impl ::prost::Name for intelligence_config::TrialConfig {
    const NAME: &'static str = "IntelligenceConfig.TrialConfig";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.IntelligenceConfig.TrialConfig".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.IntelligenceConfig.TrialConfig".into()
    }
}

impl ::prost::Name for UpdateOrganizationIntelligenceConfigRequest {
    const NAME: &'static str = "UpdateOrganizationIntelligenceConfigRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.UpdateOrganizationIntelligenceConfigRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.UpdateOrganizationIntelligenceConfigRequest".into()
    }
}

impl ::prost::Name for UpdateFolderIntelligenceConfigRequest {
    const NAME: &'static str = "UpdateFolderIntelligenceConfigRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.UpdateFolderIntelligenceConfigRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.UpdateFolderIntelligenceConfigRequest".into()
    }
}

impl ::prost::Name for UpdateProjectIntelligenceConfigRequest {
    const NAME: &'static str = "UpdateProjectIntelligenceConfigRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.UpdateProjectIntelligenceConfigRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.UpdateProjectIntelligenceConfigRequest".into()
    }
}

impl ::prost::Name for GetOrganizationIntelligenceConfigRequest {
    const NAME: &'static str = "GetOrganizationIntelligenceConfigRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.GetOrganizationIntelligenceConfigRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.GetOrganizationIntelligenceConfigRequest".into()
    }
}

impl ::prost::Name for GetFolderIntelligenceConfigRequest {
    const NAME: &'static str = "GetFolderIntelligenceConfigRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.GetFolderIntelligenceConfigRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.GetFolderIntelligenceConfigRequest".into()
    }
}

impl ::prost::Name for GetProjectIntelligenceConfigRequest {
    const NAME: &'static str = "GetProjectIntelligenceConfigRequest";
    const PACKAGE: &'static str = "google.storage.control.v2";
    fn full_name() -> ::prost::alloc::string::String {
        "google.storage.control.v2.GetProjectIntelligenceConfigRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.storage.control.v2.GetProjectIntelligenceConfigRequest".into()
    }
}

/// Generated server implementations.
pub mod storage_control_server {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    /// Generated trait containing gRPC methods that should be implemented for use with StorageControlServer.
    #[async_trait]
    pub trait StorageControl: std::marker::Send + std::marker::Sync + 'static {
        async fn create_folder(
            &self,
            request: tonic::Request<super::CreateFolderRequest>,
        ) -> std::result::Result<
            tonic::Response<super::Folder>,
            tonic::Status,
        >;
        async fn delete_folder(
            &self,
            request: tonic::Request<super::DeleteFolderRequest>,
        ) -> std::result::Result<
            tonic::Response<()>,
            tonic::Status,
        >;
        async fn delete_folder_recursive(
            &self,
            request: tonic::Request<super::DeleteFolderRecursiveRequest>,
        ) -> std::result::Result<
            tonic::Response<super::super::super::super::longrunning::Operation>,
            tonic::Status,
        >;
        async fn get_folder(
            &self,
            request: tonic::Request<super::GetFolderRequest>,
        ) -> std::result::Result<
            tonic::Response<super::Folder>,
            tonic::Status,
        >;
        async fn list_folders(
            &self,
            request: tonic::Request<super::ListFoldersRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListFoldersResponse>,
            tonic::Status,
        >;
        async fn rename_folder(
            &self,
            request: tonic::Request<super::RenameFolderRequest>,
        ) -> std::result::Result<
            tonic::Response<super::super::super::super::longrunning::Operation>,
            tonic::Status,
        >;
        async fn get_storage_layout(
            &self,
            request: tonic::Request<super::GetStorageLayoutRequest>,
        ) -> std::result::Result<
            tonic::Response<super::StorageLayout>,
            tonic::Status,
        >;
        async fn create_managed_folder(
            &self,
            request: tonic::Request<super::CreateManagedFolderRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ManagedFolder>,
            tonic::Status,
        >;
        async fn delete_managed_folder(
            &self,
            request: tonic::Request<super::DeleteManagedFolderRequest>,
        ) -> std::result::Result<
            tonic::Response<()>,
            tonic::Status,
        >;
        async fn get_managed_folder(
            &self,
            request: tonic::Request<super::GetManagedFolderRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ManagedFolder>,
            tonic::Status,
        >;
        async fn list_managed_folders(
            &self,
            request: tonic::Request<super::ListManagedFoldersRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListManagedFoldersResponse>,
            tonic::Status,
        >;
        async fn create_anywhere_cache(
            &self,
            request: tonic::Request<super::CreateAnywhereCacheRequest>,
        ) -> std::result::Result<
            tonic::Response<super::super::super::super::longrunning::Operation>,
            tonic::Status,
        >;
        async fn update_anywhere_cache(
            &self,
            request: tonic::Request<super::UpdateAnywhereCacheRequest>,
        ) -> std::result::Result<
            tonic::Response<super::super::super::super::longrunning::Operation>,
            tonic::Status,
        >;
        async fn disable_anywhere_cache(
            &self,
            request: tonic::Request<super::DisableAnywhereCacheRequest>,
        ) -> std::result::Result<
            tonic::Response<super::AnywhereCache>,
            tonic::Status,
        >;
        async fn pause_anywhere_cache(
            &self,
            request: tonic::Request<super::PauseAnywhereCacheRequest>,
        ) -> std::result::Result<
            tonic::Response<super::AnywhereCache>,
            tonic::Status,
        >;
        async fn resume_anywhere_cache(
            &self,
            request: tonic::Request<super::ResumeAnywhereCacheRequest>,
        ) -> std::result::Result<
            tonic::Response<super::AnywhereCache>,
            tonic::Status,
        >;
        async fn get_anywhere_cache(
            &self,
            request: tonic::Request<super::GetAnywhereCacheRequest>,
        ) -> std::result::Result<
            tonic::Response<super::AnywhereCache>,
            tonic::Status,
        >;
        async fn list_anywhere_caches(
            &self,
            request: tonic::Request<super::ListAnywhereCachesRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListAnywhereCachesResponse>,
            tonic::Status,
        >;
        async fn get_project_intelligence_config(
            &self,
            request: tonic::Request<super::GetProjectIntelligenceConfigRequest>,
        ) -> std::result::Result<
            tonic::Response<super::IntelligenceConfig>,
            tonic::Status,
        >;
        async fn update_project_intelligence_config(
            &self,
            request: tonic::Request<super::UpdateProjectIntelligenceConfigRequest>,
        ) -> std::result::Result<
            tonic::Response<super::IntelligenceConfig>,
            tonic::Status,
        >;
        async fn get_folder_intelligence_config(
            &self,
            request: tonic::Request<super::GetFolderIntelligenceConfigRequest>,
        ) -> std::result::Result<
            tonic::Response<super::IntelligenceConfig>,
            tonic::Status,
        >;
        async fn update_folder_intelligence_config(
            &self,
            request: tonic::Request<super::UpdateFolderIntelligenceConfigRequest>,
        ) -> std::result::Result<
            tonic::Response<super::IntelligenceConfig>,
            tonic::Status,
        >;
        async fn get_organization_intelligence_config(
            &self,
            request: tonic::Request<super::GetOrganizationIntelligenceConfigRequest>,
        ) -> std::result::Result<
            tonic::Response<super::IntelligenceConfig>,
            tonic::Status,
        >;
        async fn update_organization_intelligence_config(
            &self,
            request: tonic::Request<super::UpdateOrganizationIntelligenceConfigRequest>,
        ) -> std::result::Result<
            tonic::Response<super::IntelligenceConfig>,
            tonic::Status,
        >;
        async fn get_iam_policy(
            &self,
            request: tonic::Request<super::super::super::super::iam::v1::GetIamPolicyRequest>,
        ) -> std::result::Result<
            tonic::Response<super::super::super::super::iam::v1::Policy>,
            tonic::Status,
        >;
        async fn set_iam_policy(
            &self,
            request: tonic::Request<super::super::super::super::iam::v1::SetIamPolicyRequest>,
        ) -> std::result::Result<
            tonic::Response<super::super::super::super::iam::v1::Policy>,
            tonic::Status,
        >;
        async fn test_iam_permissions(
            &self,
            request: tonic::Request<super::super::super::super::iam::v1::TestIamPermissionsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::super::super::super::iam::v1::TestIamPermissionsResponse>,
            tonic::Status,
        >;
    }
    #[derive(Debug)]
    pub struct StorageControlServer<T> {
        inner: Arc<T>,
        accept_compression_encodings: EnabledCompressionEncodings,
        send_compression_encodings: EnabledCompressionEncodings,
        max_decoding_message_size: Option<usize>,
        max_encoding_message_size: Option<usize>,
    }
    impl<T> StorageControlServer<T> {
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
    impl<T, B> tonic::codegen::Service<http::Request<B>> for StorageControlServer<T>
    where
        T: StorageControl,
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
                "/google.storage.control.v2.StorageControl/CreateFolder" => {
                    #[allow(non_camel_case_types)]
                    struct CreateFolderSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::CreateFolderRequest>
                    for CreateFolderSvc<T> {
                        type Response = super::Folder;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::CreateFolderRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::create_folder(&inner, request).await
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
                        let method = CreateFolderSvc(inner);
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
                "/google.storage.control.v2.StorageControl/DeleteFolder" => {
                    #[allow(non_camel_case_types)]
                    struct DeleteFolderSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::DeleteFolderRequest>
                    for DeleteFolderSvc<T> {
                        type Response = ();
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::DeleteFolderRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::delete_folder(&inner, request).await
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
                        let method = DeleteFolderSvc(inner);
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
                "/google.storage.control.v2.StorageControl/DeleteFolderRecursive" => {
                    #[allow(non_camel_case_types)]
                    struct DeleteFolderRecursiveSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::DeleteFolderRecursiveRequest>
                    for DeleteFolderRecursiveSvc<T> {
                        type Response = super::super::super::super::longrunning::Operation;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::DeleteFolderRecursiveRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::delete_folder_recursive(&inner, request).await
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
                        let method = DeleteFolderRecursiveSvc(inner);
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
                "/google.storage.control.v2.StorageControl/GetFolder" => {
                    #[allow(non_camel_case_types)]
                    struct GetFolderSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::GetFolderRequest>
                    for GetFolderSvc<T> {
                        type Response = super::Folder;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetFolderRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::get_folder(&inner, request).await
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
                        let method = GetFolderSvc(inner);
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
                "/google.storage.control.v2.StorageControl/ListFolders" => {
                    #[allow(non_camel_case_types)]
                    struct ListFoldersSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::ListFoldersRequest>
                    for ListFoldersSvc<T> {
                        type Response = super::ListFoldersResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ListFoldersRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::list_folders(&inner, request).await
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
                        let method = ListFoldersSvc(inner);
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
                "/google.storage.control.v2.StorageControl/RenameFolder" => {
                    #[allow(non_camel_case_types)]
                    struct RenameFolderSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::RenameFolderRequest>
                    for RenameFolderSvc<T> {
                        type Response = super::super::super::super::longrunning::Operation;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RenameFolderRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::rename_folder(&inner, request).await
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
                        let method = RenameFolderSvc(inner);
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
                "/google.storage.control.v2.StorageControl/GetStorageLayout" => {
                    #[allow(non_camel_case_types)]
                    struct GetStorageLayoutSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::GetStorageLayoutRequest>
                    for GetStorageLayoutSvc<T> {
                        type Response = super::StorageLayout;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetStorageLayoutRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::get_storage_layout(&inner, request).await
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
                        let method = GetStorageLayoutSvc(inner);
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
                "/google.storage.control.v2.StorageControl/CreateManagedFolder" => {
                    #[allow(non_camel_case_types)]
                    struct CreateManagedFolderSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::CreateManagedFolderRequest>
                    for CreateManagedFolderSvc<T> {
                        type Response = super::ManagedFolder;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::CreateManagedFolderRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::create_managed_folder(&inner, request).await
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
                        let method = CreateManagedFolderSvc(inner);
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
                "/google.storage.control.v2.StorageControl/DeleteManagedFolder" => {
                    #[allow(non_camel_case_types)]
                    struct DeleteManagedFolderSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::DeleteManagedFolderRequest>
                    for DeleteManagedFolderSvc<T> {
                        type Response = ();
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::DeleteManagedFolderRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::delete_managed_folder(&inner, request).await
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
                        let method = DeleteManagedFolderSvc(inner);
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
                "/google.storage.control.v2.StorageControl/GetManagedFolder" => {
                    #[allow(non_camel_case_types)]
                    struct GetManagedFolderSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::GetManagedFolderRequest>
                    for GetManagedFolderSvc<T> {
                        type Response = super::ManagedFolder;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetManagedFolderRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::get_managed_folder(&inner, request).await
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
                        let method = GetManagedFolderSvc(inner);
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
                "/google.storage.control.v2.StorageControl/ListManagedFolders" => {
                    #[allow(non_camel_case_types)]
                    struct ListManagedFoldersSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::ListManagedFoldersRequest>
                    for ListManagedFoldersSvc<T> {
                        type Response = super::ListManagedFoldersResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ListManagedFoldersRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::list_managed_folders(&inner, request).await
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
                        let method = ListManagedFoldersSvc(inner);
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
                "/google.storage.control.v2.StorageControl/CreateAnywhereCache" => {
                    #[allow(non_camel_case_types)]
                    struct CreateAnywhereCacheSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::CreateAnywhereCacheRequest>
                    for CreateAnywhereCacheSvc<T> {
                        type Response = super::super::super::super::longrunning::Operation;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::CreateAnywhereCacheRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::create_anywhere_cache(&inner, request).await
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
                        let method = CreateAnywhereCacheSvc(inner);
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
                "/google.storage.control.v2.StorageControl/UpdateAnywhereCache" => {
                    #[allow(non_camel_case_types)]
                    struct UpdateAnywhereCacheSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::UpdateAnywhereCacheRequest>
                    for UpdateAnywhereCacheSvc<T> {
                        type Response = super::super::super::super::longrunning::Operation;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::UpdateAnywhereCacheRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::update_anywhere_cache(&inner, request).await
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
                        let method = UpdateAnywhereCacheSvc(inner);
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
                "/google.storage.control.v2.StorageControl/DisableAnywhereCache" => {
                    #[allow(non_camel_case_types)]
                    struct DisableAnywhereCacheSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::DisableAnywhereCacheRequest>
                    for DisableAnywhereCacheSvc<T> {
                        type Response = super::AnywhereCache;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::DisableAnywhereCacheRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::disable_anywhere_cache(&inner, request).await
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
                        let method = DisableAnywhereCacheSvc(inner);
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
                "/google.storage.control.v2.StorageControl/PauseAnywhereCache" => {
                    #[allow(non_camel_case_types)]
                    struct PauseAnywhereCacheSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::PauseAnywhereCacheRequest>
                    for PauseAnywhereCacheSvc<T> {
                        type Response = super::AnywhereCache;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::PauseAnywhereCacheRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::pause_anywhere_cache(&inner, request).await
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
                        let method = PauseAnywhereCacheSvc(inner);
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
                "/google.storage.control.v2.StorageControl/ResumeAnywhereCache" => {
                    #[allow(non_camel_case_types)]
                    struct ResumeAnywhereCacheSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::ResumeAnywhereCacheRequest>
                    for ResumeAnywhereCacheSvc<T> {
                        type Response = super::AnywhereCache;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ResumeAnywhereCacheRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::resume_anywhere_cache(&inner, request).await
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
                        let method = ResumeAnywhereCacheSvc(inner);
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
                "/google.storage.control.v2.StorageControl/GetAnywhereCache" => {
                    #[allow(non_camel_case_types)]
                    struct GetAnywhereCacheSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::GetAnywhereCacheRequest>
                    for GetAnywhereCacheSvc<T> {
                        type Response = super::AnywhereCache;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetAnywhereCacheRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::get_anywhere_cache(&inner, request).await
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
                        let method = GetAnywhereCacheSvc(inner);
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
                "/google.storage.control.v2.StorageControl/ListAnywhereCaches" => {
                    #[allow(non_camel_case_types)]
                    struct ListAnywhereCachesSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::ListAnywhereCachesRequest>
                    for ListAnywhereCachesSvc<T> {
                        type Response = super::ListAnywhereCachesResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ListAnywhereCachesRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::list_anywhere_caches(&inner, request).await
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
                        let method = ListAnywhereCachesSvc(inner);
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
                "/google.storage.control.v2.StorageControl/GetProjectIntelligenceConfig" => {
                    #[allow(non_camel_case_types)]
                    struct GetProjectIntelligenceConfigSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::GetProjectIntelligenceConfigRequest>
                    for GetProjectIntelligenceConfigSvc<T> {
                        type Response = super::IntelligenceConfig;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetProjectIntelligenceConfigRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::get_project_intelligence_config(&inner, request).await
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
                        let method = GetProjectIntelligenceConfigSvc(inner);
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
                "/google.storage.control.v2.StorageControl/UpdateProjectIntelligenceConfig" => {
                    #[allow(non_camel_case_types)]
                    struct UpdateProjectIntelligenceConfigSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::UpdateProjectIntelligenceConfigRequest>
                    for UpdateProjectIntelligenceConfigSvc<T> {
                        type Response = super::IntelligenceConfig;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::UpdateProjectIntelligenceConfigRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::update_project_intelligence_config(&inner, request).await
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
                        let method = UpdateProjectIntelligenceConfigSvc(inner);
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
                "/google.storage.control.v2.StorageControl/GetFolderIntelligenceConfig" => {
                    #[allow(non_camel_case_types)]
                    struct GetFolderIntelligenceConfigSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::GetFolderIntelligenceConfigRequest>
                    for GetFolderIntelligenceConfigSvc<T> {
                        type Response = super::IntelligenceConfig;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetFolderIntelligenceConfigRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::get_folder_intelligence_config(&inner, request).await
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
                        let method = GetFolderIntelligenceConfigSvc(inner);
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
                "/google.storage.control.v2.StorageControl/UpdateFolderIntelligenceConfig" => {
                    #[allow(non_camel_case_types)]
                    struct UpdateFolderIntelligenceConfigSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::UpdateFolderIntelligenceConfigRequest>
                    for UpdateFolderIntelligenceConfigSvc<T> {
                        type Response = super::IntelligenceConfig;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::UpdateFolderIntelligenceConfigRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::update_folder_intelligence_config(&inner, request).await
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
                        let method = UpdateFolderIntelligenceConfigSvc(inner);
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
                "/google.storage.control.v2.StorageControl/GetOrganizationIntelligenceConfig" => {
                    #[allow(non_camel_case_types)]
                    struct GetOrganizationIntelligenceConfigSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::GetOrganizationIntelligenceConfigRequest>
                    for GetOrganizationIntelligenceConfigSvc<T> {
                        type Response = super::IntelligenceConfig;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetOrganizationIntelligenceConfigRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::get_organization_intelligence_config(&inner, request).await
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
                        let method = GetOrganizationIntelligenceConfigSvc(inner);
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
                "/google.storage.control.v2.StorageControl/UpdateOrganizationIntelligenceConfig" => {
                    #[allow(non_camel_case_types)]
                    struct UpdateOrganizationIntelligenceConfigSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::UpdateOrganizationIntelligenceConfigRequest>
                    for UpdateOrganizationIntelligenceConfigSvc<T> {
                        type Response = super::IntelligenceConfig;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::UpdateOrganizationIntelligenceConfigRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::update_organization_intelligence_config(&inner, request).await
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
                        let method = UpdateOrganizationIntelligenceConfigSvc(inner);
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
                "/google.storage.control.v2.StorageControl/GetIamPolicy" => {
                    #[allow(non_camel_case_types)]
                    struct GetIamPolicySvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::super::super::super::iam::v1::GetIamPolicyRequest>
                    for GetIamPolicySvc<T> {
                        type Response = super::super::super::super::iam::v1::Policy;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::super::iam::v1::GetIamPolicyRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::get_iam_policy(&inner, request).await
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
                "/google.storage.control.v2.StorageControl/SetIamPolicy" => {
                    #[allow(non_camel_case_types)]
                    struct SetIamPolicySvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::super::super::super::iam::v1::SetIamPolicyRequest>
                    for SetIamPolicySvc<T> {
                        type Response = super::super::super::super::iam::v1::Policy;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::super::iam::v1::SetIamPolicyRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::set_iam_policy(&inner, request).await
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
                "/google.storage.control.v2.StorageControl/TestIamPermissions" => {
                    #[allow(non_camel_case_types)]
                    struct TestIamPermissionsSvc<T: StorageControl>(pub Arc<T>);
                    impl<
                        T: StorageControl,
                    > tonic::server::UnaryService<super::super::super::super::iam::v1::TestIamPermissionsRequest>
                    for TestIamPermissionsSvc<T> {
                        type Response = super::super::super::super::iam::v1::TestIamPermissionsResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::super::iam::v1::TestIamPermissionsRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as StorageControl>::test_iam_permissions(&inner, request).await
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
    impl<T> Clone for StorageControlServer<T> {
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
    pub const SERVICE_NAME: &str = "google.storage.control.v2.StorageControl";
    impl<T> tonic::server::NamedService for StorageControlServer<T> {
        const NAME: &'static str = SERVICE_NAME;
    }
}
