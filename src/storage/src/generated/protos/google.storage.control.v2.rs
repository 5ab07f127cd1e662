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
