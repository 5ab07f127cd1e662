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

use gaxi::prost::{ConvertError, FromProto, ToProto};

impl ToProto<crate::google::storage::control::v2::PendingRenameInfo> for crate::model::PendingRenameInfo {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::PendingRenameInfo, ConvertError> {
        Ok(crate::google::storage::control::v2::PendingRenameInfo {
            operation: self.operation.to_proto()?,
        })
    }
}

impl FromProto<crate::model::PendingRenameInfo> for crate::google::storage::control::v2::PendingRenameInfo {
    fn cnv(self) -> std::result::Result<crate::model::PendingRenameInfo, ConvertError> {
        Ok(crate::model::PendingRenameInfo {
            operation: self.operation.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::Folder> for crate::model::Folder {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::Folder, ConvertError> {
        Ok(crate::google::storage::control::v2::Folder {
            name: self.name.to_proto()?,
            metageneration: self.metageneration.to_proto()?,
            create_time: self.create_time.to_proto()?,
            update_time: self.update_time.to_proto()?,
            pending_rename_info: self.pending_rename_info.to_proto()?,
        })
    }
}

impl FromProto<crate::model::Folder> for crate::google::storage::control::v2::Folder {
    fn cnv(self) -> std::result::Result<crate::model::Folder, ConvertError> {
        Ok(crate::model::Folder {
            name: self.name.cnv()?,
            metageneration: self.metageneration.cnv()?,
            create_time: self.create_time.cnv()?,
            update_time: self.update_time.cnv()?,
            pending_rename_info: self.pending_rename_info.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::GetFolderRequest> for crate::model::GetFolderRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::GetFolderRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::GetFolderRequest {
            name: self.name.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            if_metageneration_not_match: self.if_metageneration_not_match.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::GetFolderRequest> for crate::google::storage::control::v2::GetFolderRequest {
    fn cnv(self) -> std::result::Result<crate::model::GetFolderRequest, ConvertError> {
        Ok(crate::model::GetFolderRequest {
            name: self.name.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            if_metageneration_not_match: self.if_metageneration_not_match.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::CreateFolderRequest> for crate::model::CreateFolderRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::CreateFolderRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::CreateFolderRequest {
            parent: self.parent.to_proto()?,
            folder: self.folder.to_proto()?,
            folder_id: self.folder_id.to_proto()?,
            recursive: self.recursive.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::CreateFolderRequest> for crate::google::storage::control::v2::CreateFolderRequest {
    fn cnv(self) -> std::result::Result<crate::model::CreateFolderRequest, ConvertError> {
        Ok(crate::model::CreateFolderRequest {
            parent: self.parent.cnv()?,
            folder: self.folder.cnv()?,
            folder_id: self.folder_id.cnv()?,
            recursive: self.recursive.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::DeleteFolderRequest> for crate::model::DeleteFolderRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::DeleteFolderRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::DeleteFolderRequest {
            name: self.name.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            if_metageneration_not_match: self.if_metageneration_not_match.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::DeleteFolderRequest> for crate::google::storage::control::v2::DeleteFolderRequest {
    fn cnv(self) -> std::result::Result<crate::model::DeleteFolderRequest, ConvertError> {
        Ok(crate::model::DeleteFolderRequest {
            name: self.name.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            if_metageneration_not_match: self.if_metageneration_not_match.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::DeleteFolderRecursiveRequest> for crate::model::DeleteFolderRecursiveRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::DeleteFolderRecursiveRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::DeleteFolderRecursiveRequest {
            name: self.name.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            if_metageneration_not_match: self.if_metageneration_not_match.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::DeleteFolderRecursiveRequest> for crate::google::storage::control::v2::DeleteFolderRecursiveRequest {
    fn cnv(self) -> std::result::Result<crate::model::DeleteFolderRecursiveRequest, ConvertError> {
        Ok(crate::model::DeleteFolderRecursiveRequest {
            name: self.name.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            if_metageneration_not_match: self.if_metageneration_not_match.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::ListFoldersRequest> for crate::model::ListFoldersRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::ListFoldersRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::ListFoldersRequest {
            parent: self.parent.to_proto()?,
            page_size: self.page_size.to_proto()?,
            page_token: self.page_token.to_proto()?,
            prefix: self.prefix.to_proto()?,
            delimiter: self.delimiter.to_proto()?,
            lexicographic_start: self.lexicographic_start.to_proto()?,
            lexicographic_end: self.lexicographic_end.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ListFoldersRequest> for crate::google::storage::control::v2::ListFoldersRequest {
    fn cnv(self) -> std::result::Result<crate::model::ListFoldersRequest, ConvertError> {
        Ok(crate::model::ListFoldersRequest {
            parent: self.parent.cnv()?,
            page_size: self.page_size.cnv()?,
            page_token: self.page_token.cnv()?,
            prefix: self.prefix.cnv()?,
            delimiter: self.delimiter.cnv()?,
            lexicographic_start: self.lexicographic_start.cnv()?,
            lexicographic_end: self.lexicographic_end.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::ListFoldersResponse> for crate::model::ListFoldersResponse {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::ListFoldersResponse, ConvertError> {
        Ok(crate::google::storage::control::v2::ListFoldersResponse {
            folders: self.folders.to_proto()?,
            next_page_token: self.next_page_token.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ListFoldersResponse> for crate::google::storage::control::v2::ListFoldersResponse {
    fn cnv(self) -> std::result::Result<crate::model::ListFoldersResponse, ConvertError> {
        Ok(crate::model::ListFoldersResponse {
            folders: self.folders.cnv()?,
            next_page_token: self.next_page_token.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::RenameFolderRequest> for crate::model::RenameFolderRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::RenameFolderRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::RenameFolderRequest {
            name: self.name.to_proto()?,
            destination_folder_id: self.destination_folder_id.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            if_metageneration_not_match: self.if_metageneration_not_match.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::RenameFolderRequest> for crate::google::storage::control::v2::RenameFolderRequest {
    fn cnv(self) -> std::result::Result<crate::model::RenameFolderRequest, ConvertError> {
        Ok(crate::model::RenameFolderRequest {
            name: self.name.cnv()?,
            destination_folder_id: self.destination_folder_id.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            if_metageneration_not_match: self.if_metageneration_not_match.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::CommonLongRunningOperationMetadata> for crate::model::CommonLongRunningOperationMetadata {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::CommonLongRunningOperationMetadata, ConvertError> {
        Ok(crate::google::storage::control::v2::CommonLongRunningOperationMetadata {
            create_time: self.create_time.to_proto()?,
            end_time: self.end_time.to_proto()?,
            update_time: self.update_time.to_proto()?,
            r#type: self.r#type.to_proto()?,
            requested_cancellation: self.requested_cancellation.to_proto()?,
            progress_percent: self.progress_percent.to_proto()?,
        })
    }
}

impl FromProto<crate::model::CommonLongRunningOperationMetadata> for crate::google::storage::control::v2::CommonLongRunningOperationMetadata {
    fn cnv(self) -> std::result::Result<crate::model::CommonLongRunningOperationMetadata, ConvertError> {
        Ok(crate::model::CommonLongRunningOperationMetadata {
            create_time: self.create_time.cnv()?,
            end_time: self.end_time.cnv()?,
            update_time: self.update_time.cnv()?,
            r#type: self.r#type.cnv()?,
            requested_cancellation: self.requested_cancellation.cnv()?,
            progress_percent: self.progress_percent.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::RenameFolderMetadata> for crate::model::RenameFolderMetadata {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::RenameFolderMetadata, ConvertError> {
        Ok(crate::google::storage::control::v2::RenameFolderMetadata {
            common_metadata: self.common_metadata.to_proto()?,
            source_folder_id: self.source_folder_id.to_proto()?,
            destination_folder_id: self.destination_folder_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::RenameFolderMetadata> for crate::google::storage::control::v2::RenameFolderMetadata {
    fn cnv(self) -> std::result::Result<crate::model::RenameFolderMetadata, ConvertError> {
        Ok(crate::model::RenameFolderMetadata {
            common_metadata: self.common_metadata.cnv()?,
            source_folder_id: self.source_folder_id.cnv()?,
            destination_folder_id: self.destination_folder_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::DeleteFolderRecursiveMetadata> for crate::model::DeleteFolderRecursiveMetadata {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::DeleteFolderRecursiveMetadata, ConvertError> {
        Ok(crate::google::storage::control::v2::DeleteFolderRecursiveMetadata {
            common_metadata: self.common_metadata.to_proto()?,
            folder_id: self.folder_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::DeleteFolderRecursiveMetadata> for crate::google::storage::control::v2::DeleteFolderRecursiveMetadata {
    fn cnv(self) -> std::result::Result<crate::model::DeleteFolderRecursiveMetadata, ConvertError> {
        Ok(crate::model::DeleteFolderRecursiveMetadata {
            common_metadata: self.common_metadata.cnv()?,
            folder_id: self.folder_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::StorageLayout> for crate::model::StorageLayout {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::StorageLayout, ConvertError> {
        Ok(crate::google::storage::control::v2::StorageLayout {
            name: self.name.to_proto()?,
            location: self.location.to_proto()?,
            location_type: self.location_type.to_proto()?,
            custom_placement_config: self.custom_placement_config.to_proto()?,
            hierarchical_namespace: self.hierarchical_namespace.to_proto()?,
        })
    }
}

impl FromProto<crate::model::StorageLayout> for crate::google::storage::control::v2::StorageLayout {
    fn cnv(self) -> std::result::Result<crate::model::StorageLayout, ConvertError> {
        Ok(crate::model::StorageLayout {
            name: self.name.cnv()?,
            location: self.location.cnv()?,
            location_type: self.location_type.cnv()?,
            custom_placement_config: self.custom_placement_config.cnv()?,
            hierarchical_namespace: self.hierarchical_namespace.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::storage_layout::CustomPlacementConfig> for crate::model::storage_layout::CustomPlacementConfig {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::storage_layout::CustomPlacementConfig, ConvertError> {
        Ok(crate::google::storage::control::v2::storage_layout::CustomPlacementConfig {
            data_locations: self.data_locations.to_proto()?,
        })
    }
}

impl FromProto<crate::model::storage_layout::CustomPlacementConfig> for crate::google::storage::control::v2::storage_layout::CustomPlacementConfig {
    fn cnv(self) -> std::result::Result<crate::model::storage_layout::CustomPlacementConfig, ConvertError> {
        Ok(crate::model::storage_layout::CustomPlacementConfig {
            data_locations: self.data_locations.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::storage_layout::HierarchicalNamespace> for crate::model::storage_layout::HierarchicalNamespace {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::storage_layout::HierarchicalNamespace, ConvertError> {
        Ok(crate::google::storage::control::v2::storage_layout::HierarchicalNamespace {
            enabled: self.enabled.to_proto()?,
        })
    }
}

impl FromProto<crate::model::storage_layout::HierarchicalNamespace> for crate::google::storage::control::v2::storage_layout::HierarchicalNamespace {
    fn cnv(self) -> std::result::Result<crate::model::storage_layout::HierarchicalNamespace, ConvertError> {
        Ok(crate::model::storage_layout::HierarchicalNamespace {
            enabled: self.enabled.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::GetStorageLayoutRequest> for crate::model::GetStorageLayoutRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::GetStorageLayoutRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::GetStorageLayoutRequest {
            name: self.name.to_proto()?,
            prefix: self.prefix.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::GetStorageLayoutRequest> for crate::google::storage::control::v2::GetStorageLayoutRequest {
    fn cnv(self) -> std::result::Result<crate::model::GetStorageLayoutRequest, ConvertError> {
        Ok(crate::model::GetStorageLayoutRequest {
            name: self.name.cnv()?,
            prefix: self.prefix.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::ManagedFolder> for crate::model::ManagedFolder {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::ManagedFolder, ConvertError> {
        Ok(crate::google::storage::control::v2::ManagedFolder {
            name: self.name.to_proto()?,
            metageneration: self.metageneration.to_proto()?,
            create_time: self.create_time.to_proto()?,
            update_time: self.update_time.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ManagedFolder> for crate::google::storage::control::v2::ManagedFolder {
    fn cnv(self) -> std::result::Result<crate::model::ManagedFolder, ConvertError> {
        Ok(crate::model::ManagedFolder {
            name: self.name.cnv()?,
            metageneration: self.metageneration.cnv()?,
            create_time: self.create_time.cnv()?,
            update_time: self.update_time.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::GetManagedFolderRequest> for crate::model::GetManagedFolderRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::GetManagedFolderRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::GetManagedFolderRequest {
            name: self.name.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            if_metageneration_not_match: self.if_metageneration_not_match.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::GetManagedFolderRequest> for crate::google::storage::control::v2::GetManagedFolderRequest {
    fn cnv(self) -> std::result::Result<crate::model::GetManagedFolderRequest, ConvertError> {
        Ok(crate::model::GetManagedFolderRequest {
            name: self.name.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            if_metageneration_not_match: self.if_metageneration_not_match.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::CreateManagedFolderRequest> for crate::model::CreateManagedFolderRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::CreateManagedFolderRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::CreateManagedFolderRequest {
            parent: self.parent.to_proto()?,
            managed_folder: self.managed_folder.to_proto()?,
            managed_folder_id: self.managed_folder_id.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::CreateManagedFolderRequest> for crate::google::storage::control::v2::CreateManagedFolderRequest {
    fn cnv(self) -> std::result::Result<crate::model::CreateManagedFolderRequest, ConvertError> {
        Ok(crate::model::CreateManagedFolderRequest {
            parent: self.parent.cnv()?,
            managed_folder: self.managed_folder.cnv()?,
            managed_folder_id: self.managed_folder_id.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::DeleteManagedFolderRequest> for crate::model::DeleteManagedFolderRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::DeleteManagedFolderRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::DeleteManagedFolderRequest {
            name: self.name.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            if_metageneration_not_match: self.if_metageneration_not_match.to_proto()?,
            allow_non_empty: self.allow_non_empty.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::DeleteManagedFolderRequest> for crate::google::storage::control::v2::DeleteManagedFolderRequest {
    fn cnv(self) -> std::result::Result<crate::model::DeleteManagedFolderRequest, ConvertError> {
        Ok(crate::model::DeleteManagedFolderRequest {
            name: self.name.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            if_metageneration_not_match: self.if_metageneration_not_match.cnv()?,
            allow_non_empty: self.allow_non_empty.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::ListManagedFoldersRequest> for crate::model::ListManagedFoldersRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::ListManagedFoldersRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::ListManagedFoldersRequest {
            parent: self.parent.to_proto()?,
            page_size: self.page_size.to_proto()?,
            page_token: self.page_token.to_proto()?,
            prefix: self.prefix.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ListManagedFoldersRequest> for crate::google::storage::control::v2::ListManagedFoldersRequest {
    fn cnv(self) -> std::result::Result<crate::model::ListManagedFoldersRequest, ConvertError> {
        Ok(crate::model::ListManagedFoldersRequest {
            parent: self.parent.cnv()?,
            page_size: self.page_size.cnv()?,
            page_token: self.page_token.cnv()?,
            prefix: self.prefix.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::ListManagedFoldersResponse> for crate::model::ListManagedFoldersResponse {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::ListManagedFoldersResponse, ConvertError> {
        Ok(crate::google::storage::control::v2::ListManagedFoldersResponse {
            managed_folders: self.managed_folders.to_proto()?,
            next_page_token: self.next_page_token.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ListManagedFoldersResponse> for crate::google::storage::control::v2::ListManagedFoldersResponse {
    fn cnv(self) -> std::result::Result<crate::model::ListManagedFoldersResponse, ConvertError> {
        Ok(crate::model::ListManagedFoldersResponse {
            managed_folders: self.managed_folders.cnv()?,
            next_page_token: self.next_page_token.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::CreateAnywhereCacheMetadata> for crate::model::CreateAnywhereCacheMetadata {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::CreateAnywhereCacheMetadata, ConvertError> {
        Ok(crate::google::storage::control::v2::CreateAnywhereCacheMetadata {
            common_metadata: self.common_metadata.to_proto()?,
            anywhere_cache_id: self.anywhere_cache_id.to_proto()?,
            zone: self.zone.to_proto()?,
            ttl: self.ttl.to_proto()?,
            admission_policy: self.admission_policy.to_proto()?,
        })
    }
}

impl FromProto<crate::model::CreateAnywhereCacheMetadata> for crate::google::storage::control::v2::CreateAnywhereCacheMetadata {
    fn cnv(self) -> std::result::Result<crate::model::CreateAnywhereCacheMetadata, ConvertError> {
        Ok(crate::model::CreateAnywhereCacheMetadata {
            common_metadata: self.common_metadata.cnv()?,
            anywhere_cache_id: self.anywhere_cache_id.cnv()?,
            zone: self.zone.cnv()?,
            ttl: self.ttl.cnv()?,
            admission_policy: self.admission_policy.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::UpdateAnywhereCacheMetadata> for crate::model::UpdateAnywhereCacheMetadata {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::UpdateAnywhereCacheMetadata, ConvertError> {
        Ok(crate::google::storage::control::v2::UpdateAnywhereCacheMetadata {
            common_metadata: self.common_metadata.to_proto()?,
            anywhere_cache_id: self.anywhere_cache_id.to_proto()?,
            zone: self.zone.to_proto()?,
            ttl: self.ttl.to_proto()?,
            admission_policy: self.admission_policy.to_proto()?,
        })
    }
}

impl FromProto<crate::model::UpdateAnywhereCacheMetadata> for crate::google::storage::control::v2::UpdateAnywhereCacheMetadata {
    fn cnv(self) -> std::result::Result<crate::model::UpdateAnywhereCacheMetadata, ConvertError> {
        Ok(crate::model::UpdateAnywhereCacheMetadata {
            common_metadata: self.common_metadata.cnv()?,
            anywhere_cache_id: self.anywhere_cache_id.cnv()?,
            zone: self.zone.cnv()?,
            ttl: self.ttl.cnv()?,
            admission_policy: self.admission_policy.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::AnywhereCache> for crate::model::AnywhereCache {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::AnywhereCache, ConvertError> {
        Ok(crate::google::storage::control::v2::AnywhereCache {
            name: self.name.to_proto()?,
            zone: self.zone.to_proto()?,
            ttl: self.ttl.to_proto()?,
            admission_policy: self.admission_policy.to_proto()?,
            state: self.state.to_proto()?,
            create_time: self.create_time.to_proto()?,
            update_time: self.update_time.to_proto()?,
            pending_update: self.pending_update.to_proto()?,
        })
    }
}

impl FromProto<crate::model::AnywhereCache> for crate::google::storage::control::v2::AnywhereCache {
    fn cnv(self) -> std::result::Result<crate::model::AnywhereCache, ConvertError> {
        Ok(crate::model::AnywhereCache {
            name: self.name.cnv()?,
            zone: self.zone.cnv()?,
            ttl: self.ttl.cnv()?,
            admission_policy: self.admission_policy.cnv()?,
            state: self.state.cnv()?,
            create_time: self.create_time.cnv()?,
            update_time: self.update_time.cnv()?,
            pending_update: self.pending_update.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::CreateAnywhereCacheRequest> for crate::model::CreateAnywhereCacheRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::CreateAnywhereCacheRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::CreateAnywhereCacheRequest {
            parent: self.parent.to_proto()?,
            anywhere_cache: self.anywhere_cache.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::CreateAnywhereCacheRequest> for crate::google::storage::control::v2::CreateAnywhereCacheRequest {
    fn cnv(self) -> std::result::Result<crate::model::CreateAnywhereCacheRequest, ConvertError> {
        Ok(crate::model::CreateAnywhereCacheRequest {
            parent: self.parent.cnv()?,
            anywhere_cache: self.anywhere_cache.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::UpdateAnywhereCacheRequest> for crate::model::UpdateAnywhereCacheRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::UpdateAnywhereCacheRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::UpdateAnywhereCacheRequest {
            anywhere_cache: self.anywhere_cache.to_proto()?,
            update_mask: self.update_mask.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::UpdateAnywhereCacheRequest> for crate::google::storage::control::v2::UpdateAnywhereCacheRequest {
    fn cnv(self) -> std::result::Result<crate::model::UpdateAnywhereCacheRequest, ConvertError> {
        Ok(crate::model::UpdateAnywhereCacheRequest {
            anywhere_cache: self.anywhere_cache.cnv()?,
            update_mask: self.update_mask.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::DisableAnywhereCacheRequest> for crate::model::DisableAnywhereCacheRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::DisableAnywhereCacheRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::DisableAnywhereCacheRequest {
            name: self.name.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::DisableAnywhereCacheRequest> for crate::google::storage::control::v2::DisableAnywhereCacheRequest {
    fn cnv(self) -> std::result::Result<crate::model::DisableAnywhereCacheRequest, ConvertError> {
        Ok(crate::model::DisableAnywhereCacheRequest {
            name: self.name.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::PauseAnywhereCacheRequest> for crate::model::PauseAnywhereCacheRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::PauseAnywhereCacheRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::PauseAnywhereCacheRequest {
            name: self.name.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::PauseAnywhereCacheRequest> for crate::google::storage::control::v2::PauseAnywhereCacheRequest {
    fn cnv(self) -> std::result::Result<crate::model::PauseAnywhereCacheRequest, ConvertError> {
        Ok(crate::model::PauseAnywhereCacheRequest {
            name: self.name.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::ResumeAnywhereCacheRequest> for crate::model::ResumeAnywhereCacheRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::ResumeAnywhereCacheRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::ResumeAnywhereCacheRequest {
            name: self.name.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ResumeAnywhereCacheRequest> for crate::google::storage::control::v2::ResumeAnywhereCacheRequest {
    fn cnv(self) -> std::result::Result<crate::model::ResumeAnywhereCacheRequest, ConvertError> {
        Ok(crate::model::ResumeAnywhereCacheRequest {
            name: self.name.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::GetAnywhereCacheRequest> for crate::model::GetAnywhereCacheRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::GetAnywhereCacheRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::GetAnywhereCacheRequest {
            name: self.name.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::GetAnywhereCacheRequest> for crate::google::storage::control::v2::GetAnywhereCacheRequest {
    fn cnv(self) -> std::result::Result<crate::model::GetAnywhereCacheRequest, ConvertError> {
        Ok(crate::model::GetAnywhereCacheRequest {
            name: self.name.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::ListAnywhereCachesRequest> for crate::model::ListAnywhereCachesRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::ListAnywhereCachesRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::ListAnywhereCachesRequest {
            parent: self.parent.to_proto()?,
            page_size: self.page_size.to_proto()?,
            page_token: self.page_token.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ListAnywhereCachesRequest> for crate::google::storage::control::v2::ListAnywhereCachesRequest {
    fn cnv(self) -> std::result::Result<crate::model::ListAnywhereCachesRequest, ConvertError> {
        Ok(crate::model::ListAnywhereCachesRequest {
            parent: self.parent.cnv()?,
            page_size: self.page_size.cnv()?,
            page_token: self.page_token.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::ListAnywhereCachesResponse> for crate::model::ListAnywhereCachesResponse {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::ListAnywhereCachesResponse, ConvertError> {
        Ok(crate::google::storage::control::v2::ListAnywhereCachesResponse {
            anywhere_caches: self.anywhere_caches.to_proto()?,
            next_page_token: self.next_page_token.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ListAnywhereCachesResponse> for crate::google::storage::control::v2::ListAnywhereCachesResponse {
    fn cnv(self) -> std::result::Result<crate::model::ListAnywhereCachesResponse, ConvertError> {
        Ok(crate::model::ListAnywhereCachesResponse {
            anywhere_caches: self.anywhere_caches.cnv()?,
            next_page_token: self.next_page_token.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::IntelligenceConfig> for crate::model::IntelligenceConfig {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::IntelligenceConfig, ConvertError> {
        Ok(crate::google::storage::control::v2::IntelligenceConfig {
            name: self.name.to_proto()?,
            edition_config: self.edition_config.to_proto()?,
            update_time: self.update_time.to_proto()?,
            filter: self.filter.to_proto()?,
            effective_intelligence_config: self.effective_intelligence_config.to_proto()?,
            trial_config: self.trial_config.to_proto()?,
        })
    }
}

impl FromProto<crate::model::IntelligenceConfig> for crate::google::storage::control::v2::IntelligenceConfig {
    fn cnv(self) -> std::result::Result<crate::model::IntelligenceConfig, ConvertError> {
        Ok(crate::model::IntelligenceConfig {
            name: self.name.cnv()?,
            edition_config: self.edition_config.cnv()?,
            update_time: self.update_time.cnv()?,
            filter: self.filter.cnv()?,
            effective_intelligence_config: self.effective_intelligence_config.cnv()?,
            trial_config: self.trial_config.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::intelligence_config::Filter> for crate::model::intelligence_config::Filter {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::intelligence_config::Filter, ConvertError> {
        Ok(crate::google::storage::control::v2::intelligence_config::Filter {
            cloud_storage_locations: self.cloud_storage_locations.to_proto()?,
            cloud_storage_buckets: self.cloud_storage_buckets.to_proto()?,
        })
    }
}

impl FromProto<crate::model::intelligence_config::Filter> for crate::google::storage::control::v2::intelligence_config::Filter {
    fn cnv(self) -> std::result::Result<crate::model::intelligence_config::Filter, ConvertError> {
        Ok(crate::model::intelligence_config::Filter {
            cloud_storage_locations: self.cloud_storage_locations.cnv()?,
            cloud_storage_buckets: self.cloud_storage_buckets.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::intelligence_config::filter::CloudStorageLocationsOneof> for crate::model::intelligence_config::filter::CloudStorageLocationsOneOf {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::intelligence_config::filter::CloudStorageLocationsOneof, ConvertError> {
        Ok(match self {
            crate::model::intelligence_config::filter::CloudStorageLocationsOneOf::IncludedCloudStorageLocations(v) => crate::google::storage::control::v2::intelligence_config::filter::CloudStorageLocationsOneof::IncludedCloudStorageLocations((*v).to_proto()?),
            crate::model::intelligence_config::filter::CloudStorageLocationsOneOf::ExcludedCloudStorageLocations(v) => crate::google::storage::control::v2::intelligence_config::filter::CloudStorageLocationsOneof::ExcludedCloudStorageLocations((*v).to_proto()?),
        })
    }
}

impl FromProto<crate::model::intelligence_config::filter::CloudStorageLocationsOneOf> for crate::google::storage::control::v2::intelligence_config::filter::CloudStorageLocationsOneof {
    fn cnv(self) -> std::result::Result<crate::model::intelligence_config::filter::CloudStorageLocationsOneOf, ConvertError> {
        Ok(match self {
            crate::google::storage::control::v2::intelligence_config::filter::CloudStorageLocationsOneof::IncludedCloudStorageLocations(v) => crate::model::intelligence_config::filter::CloudStorageLocationsOneOf::IncludedCloudStorageLocations(std::boxed::Box::new(v.cnv()?)),
            crate::google::storage::control::v2::intelligence_config::filter::CloudStorageLocationsOneof::ExcludedCloudStorageLocations(v) => crate::model::intelligence_config::filter::CloudStorageLocationsOneOf::ExcludedCloudStorageLocations(std::boxed::Box::new(v.cnv()?)),
        })
    }
}

impl ToProto<crate::google::storage::control::v2::intelligence_config::filter::CloudStorageBucketsOneof> for crate::model::intelligence_config::filter::CloudStorageBucketsOneOf {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::intelligence_config::filter::CloudStorageBucketsOneof, ConvertError> {
        Ok(match self {
            crate::model::intelligence_config::filter::CloudStorageBucketsOneOf::IncludedCloudStorageBuckets(v) => crate::google::storage::control::v2::intelligence_config::filter::CloudStorageBucketsOneof::IncludedCloudStorageBuckets((*v).to_proto()?),
            crate::model::intelligence_config::filter::CloudStorageBucketsOneOf::ExcludedCloudStorageBuckets(v) => crate::google::storage::control::v2::intelligence_config::filter::CloudStorageBucketsOneof::ExcludedCloudStorageBuckets((*v).to_proto()?),
        })
    }
}

impl FromProto<crate::model::intelligence_config::filter::CloudStorageBucketsOneOf> for crate::google::storage::control::v2::intelligence_config::filter::CloudStorageBucketsOneof {
    fn cnv(self) -> std::result::Result<crate::model::intelligence_config::filter::CloudStorageBucketsOneOf, ConvertError> {
        Ok(match self {
            crate::google::storage::control::v2::intelligence_config::filter::CloudStorageBucketsOneof::IncludedCloudStorageBuckets(v) => crate::model::intelligence_config::filter::CloudStorageBucketsOneOf::IncludedCloudStorageBuckets(std::boxed::Box::new(v.cnv()?)),
            crate::google::storage::control::v2::intelligence_config::filter::CloudStorageBucketsOneof::ExcludedCloudStorageBuckets(v) => crate::model::intelligence_config::filter::CloudStorageBucketsOneOf::ExcludedCloudStorageBuckets(std::boxed::Box::new(v.cnv()?)),
        })
    }
}

impl ToProto<crate::google::storage::control::v2::intelligence_config::filter::CloudStorageLocations> for crate::model::intelligence_config::filter::CloudStorageLocations {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::intelligence_config::filter::CloudStorageLocations, ConvertError> {
        Ok(crate::google::storage::control::v2::intelligence_config::filter::CloudStorageLocations {
            locations: self.locations.to_proto()?,
        })
    }
}

impl FromProto<crate::model::intelligence_config::filter::CloudStorageLocations> for crate::google::storage::control::v2::intelligence_config::filter::CloudStorageLocations {
    fn cnv(self) -> std::result::Result<crate::model::intelligence_config::filter::CloudStorageLocations, ConvertError> {
        Ok(crate::model::intelligence_config::filter::CloudStorageLocations {
            locations: self.locations.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::intelligence_config::filter::CloudStorageBuckets> for crate::model::intelligence_config::filter::CloudStorageBuckets {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::intelligence_config::filter::CloudStorageBuckets, ConvertError> {
        Ok(crate::google::storage::control::v2::intelligence_config::filter::CloudStorageBuckets {
            bucket_id_regexes: self.bucket_id_regexes.to_proto()?,
        })
    }
}

impl FromProto<crate::model::intelligence_config::filter::CloudStorageBuckets> for crate::google::storage::control::v2::intelligence_config::filter::CloudStorageBuckets {
    fn cnv(self) -> std::result::Result<crate::model::intelligence_config::filter::CloudStorageBuckets, ConvertError> {
        Ok(crate::model::intelligence_config::filter::CloudStorageBuckets {
            bucket_id_regexes: self.bucket_id_regexes.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::intelligence_config::EffectiveIntelligenceConfig> for crate::model::intelligence_config::EffectiveIntelligenceConfig {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::intelligence_config::EffectiveIntelligenceConfig, ConvertError> {
        Ok(crate::google::storage::control::v2::intelligence_config::EffectiveIntelligenceConfig {
            effective_edition: self.effective_edition.to_proto()?,
            intelligence_config: self.intelligence_config.to_proto()?,
        })
    }
}

impl FromProto<crate::model::intelligence_config::EffectiveIntelligenceConfig> for crate::google::storage::control::v2::intelligence_config::EffectiveIntelligenceConfig {
    fn cnv(self) -> std::result::Result<crate::model::intelligence_config::EffectiveIntelligenceConfig, ConvertError> {
        Ok(crate::model::intelligence_config::EffectiveIntelligenceConfig {
            effective_edition: self.effective_edition.cnv()?,
            intelligence_config: self.intelligence_config.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::intelligence_config::TrialConfig> for crate::model::intelligence_config::TrialConfig {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::intelligence_config::TrialConfig, ConvertError> {
        Ok(crate::google::storage::control::v2::intelligence_config::TrialConfig {
            expire_time: self.expire_time.to_proto()?,
        })
    }
}

impl FromProto<crate::model::intelligence_config::TrialConfig> for crate::google::storage::control::v2::intelligence_config::TrialConfig {
    fn cnv(self) -> std::result::Result<crate::model::intelligence_config::TrialConfig, ConvertError> {
        Ok(crate::model::intelligence_config::TrialConfig {
            expire_time: self.expire_time.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::UpdateOrganizationIntelligenceConfigRequest> for crate::model::UpdateOrganizationIntelligenceConfigRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::UpdateOrganizationIntelligenceConfigRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::UpdateOrganizationIntelligenceConfigRequest {
            intelligence_config: self.intelligence_config.to_proto()?,
            update_mask: self.update_mask.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::UpdateOrganizationIntelligenceConfigRequest> for crate::google::storage::control::v2::UpdateOrganizationIntelligenceConfigRequest {
    fn cnv(self) -> std::result::Result<crate::model::UpdateOrganizationIntelligenceConfigRequest, ConvertError> {
        Ok(crate::model::UpdateOrganizationIntelligenceConfigRequest {
            intelligence_config: self.intelligence_config.cnv()?,
            update_mask: self.update_mask.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::UpdateFolderIntelligenceConfigRequest> for crate::model::UpdateFolderIntelligenceConfigRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::UpdateFolderIntelligenceConfigRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::UpdateFolderIntelligenceConfigRequest {
            intelligence_config: self.intelligence_config.to_proto()?,
            update_mask: self.update_mask.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::UpdateFolderIntelligenceConfigRequest> for crate::google::storage::control::v2::UpdateFolderIntelligenceConfigRequest {
    fn cnv(self) -> std::result::Result<crate::model::UpdateFolderIntelligenceConfigRequest, ConvertError> {
        Ok(crate::model::UpdateFolderIntelligenceConfigRequest {
            intelligence_config: self.intelligence_config.cnv()?,
            update_mask: self.update_mask.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::UpdateProjectIntelligenceConfigRequest> for crate::model::UpdateProjectIntelligenceConfigRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::UpdateProjectIntelligenceConfigRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::UpdateProjectIntelligenceConfigRequest {
            intelligence_config: self.intelligence_config.to_proto()?,
            update_mask: self.update_mask.to_proto()?,
            request_id: self.request_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::UpdateProjectIntelligenceConfigRequest> for crate::google::storage::control::v2::UpdateProjectIntelligenceConfigRequest {
    fn cnv(self) -> std::result::Result<crate::model::UpdateProjectIntelligenceConfigRequest, ConvertError> {
        Ok(crate::model::UpdateProjectIntelligenceConfigRequest {
            intelligence_config: self.intelligence_config.cnv()?,
            update_mask: self.update_mask.cnv()?,
            request_id: self.request_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::GetOrganizationIntelligenceConfigRequest> for crate::model::GetOrganizationIntelligenceConfigRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::GetOrganizationIntelligenceConfigRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::GetOrganizationIntelligenceConfigRequest {
            name: self.name.to_proto()?,
        })
    }
}

impl FromProto<crate::model::GetOrganizationIntelligenceConfigRequest> for crate::google::storage::control::v2::GetOrganizationIntelligenceConfigRequest {
    fn cnv(self) -> std::result::Result<crate::model::GetOrganizationIntelligenceConfigRequest, ConvertError> {
        Ok(crate::model::GetOrganizationIntelligenceConfigRequest {
            name: self.name.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::GetFolderIntelligenceConfigRequest> for crate::model::GetFolderIntelligenceConfigRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::GetFolderIntelligenceConfigRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::GetFolderIntelligenceConfigRequest {
            name: self.name.to_proto()?,
        })
    }
}

impl FromProto<crate::model::GetFolderIntelligenceConfigRequest> for crate::google::storage::control::v2::GetFolderIntelligenceConfigRequest {
    fn cnv(self) -> std::result::Result<crate::model::GetFolderIntelligenceConfigRequest, ConvertError> {
        Ok(crate::model::GetFolderIntelligenceConfigRequest {
            name: self.name.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::control::v2::GetProjectIntelligenceConfigRequest> for crate::model::GetProjectIntelligenceConfigRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::control::v2::GetProjectIntelligenceConfigRequest, ConvertError> {
        Ok(crate::google::storage::control::v2::GetProjectIntelligenceConfigRequest {
            name: self.name.to_proto()?,
        })
    }
}

impl FromProto<crate::model::GetProjectIntelligenceConfigRequest> for crate::google::storage::control::v2::GetProjectIntelligenceConfigRequest {
    fn cnv(self) -> std::result::Result<crate::model::GetProjectIntelligenceConfigRequest, ConvertError> {
        Ok(crate::model::GetProjectIntelligenceConfigRequest {
            name: self.name.cnv()?,
        })
    }
}

impl ToProto<i32> for crate::model::intelligence_config::EditionConfig {
    fn to_proto(self) -> std::result::Result<i32, ConvertError> {
        self.value()
            .ok_or(ConvertError::EnumNoIntegerValue("google.storage.control.v2.IntelligenceConfig.EditionConfig"))
    }
}

impl FromProto<crate::model::intelligence_config::EditionConfig> for i32 {
    fn cnv(self) -> std::result::Result<crate::model::intelligence_config::EditionConfig, ConvertError> {
        Ok(crate::model::intelligence_config::EditionConfig::from(self))
    }
}

impl ToProto<i32> for crate::model::intelligence_config::effective_intelligence_config::EffectiveEdition {
    fn to_proto(self) -> std::result::Result<i32, ConvertError> {
        self.value()
            .ok_or(ConvertError::EnumNoIntegerValue("google.storage.control.v2.IntelligenceConfig.EffectiveIntelligenceConfig.EffectiveEdition"))
    }
}

impl FromProto<crate::model::intelligence_config::effective_intelligence_config::EffectiveEdition> for i32 {
    fn cnv(self) -> std::result::Result<crate::model::intelligence_config::effective_intelligence_config::EffectiveEdition, ConvertError> {
        Ok(crate::model::intelligence_config::effective_intelligence_config::EffectiveEdition::from(self))
    }
}
