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

impl ToProto<crate::google::storage::v2::DeleteBucketRequest> for crate::model::DeleteBucketRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::DeleteBucketRequest, ConvertError> {
        Ok(crate::google::storage::v2::DeleteBucketRequest {
            name: self.name.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            if_metageneration_not_match: self.if_metageneration_not_match.to_proto()?,
        })
    }
}

impl FromProto<crate::model::DeleteBucketRequest> for crate::google::storage::v2::DeleteBucketRequest {
    fn cnv(self) -> std::result::Result<crate::model::DeleteBucketRequest, ConvertError> {
        Ok(crate::model::DeleteBucketRequest {
            name: self.name.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            if_metageneration_not_match: self.if_metageneration_not_match.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::GetBucketRequest> for crate::model::GetBucketRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::GetBucketRequest, ConvertError> {
        Ok(crate::google::storage::v2::GetBucketRequest {
            name: self.name.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            if_metageneration_not_match: self.if_metageneration_not_match.to_proto()?,
            read_mask: self.read_mask.to_proto()?,
        })
    }
}

impl FromProto<crate::model::GetBucketRequest> for crate::google::storage::v2::GetBucketRequest {
    fn cnv(self) -> std::result::Result<crate::model::GetBucketRequest, ConvertError> {
        Ok(crate::model::GetBucketRequest {
            name: self.name.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            if_metageneration_not_match: self.if_metageneration_not_match.cnv()?,
            read_mask: self.read_mask.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::CreateBucketRequest> for crate::model::CreateBucketRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::CreateBucketRequest, ConvertError> {
        Ok(crate::google::storage::v2::CreateBucketRequest {
            parent: self.parent.to_proto()?,
            bucket: self.bucket.to_proto()?,
            bucket_id: self.bucket_id.to_proto()?,
            predefined_acl: self.predefined_acl.to_proto()?,
            predefined_default_object_acl: self.predefined_default_object_acl.to_proto()?,
            enable_object_retention: self.enable_object_retention.to_proto()?,
        })
    }
}

impl FromProto<crate::model::CreateBucketRequest> for crate::google::storage::v2::CreateBucketRequest {
    fn cnv(self) -> std::result::Result<crate::model::CreateBucketRequest, ConvertError> {
        Ok(crate::model::CreateBucketRequest {
            parent: self.parent.cnv()?,
            bucket: self.bucket.cnv()?,
            bucket_id: self.bucket_id.cnv()?,
            predefined_acl: self.predefined_acl.cnv()?,
            predefined_default_object_acl: self.predefined_default_object_acl.cnv()?,
            enable_object_retention: self.enable_object_retention.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::ListBucketsRequest> for crate::model::ListBucketsRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::ListBucketsRequest, ConvertError> {
        Ok(crate::google::storage::v2::ListBucketsRequest {
            parent: self.parent.to_proto()?,
            page_size: self.page_size.to_proto()?,
            page_token: self.page_token.to_proto()?,
            prefix: self.prefix.to_proto()?,
            read_mask: self.read_mask.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ListBucketsRequest> for crate::google::storage::v2::ListBucketsRequest {
    fn cnv(self) -> std::result::Result<crate::model::ListBucketsRequest, ConvertError> {
        Ok(crate::model::ListBucketsRequest {
            parent: self.parent.cnv()?,
            page_size: self.page_size.cnv()?,
            page_token: self.page_token.cnv()?,
            prefix: self.prefix.cnv()?,
            read_mask: self.read_mask.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::ListBucketsResponse> for crate::model::ListBucketsResponse {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::ListBucketsResponse, ConvertError> {
        Ok(crate::google::storage::v2::ListBucketsResponse {
            buckets: self.buckets.to_proto()?,
            next_page_token: self.next_page_token.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ListBucketsResponse> for crate::google::storage::v2::ListBucketsResponse {
    fn cnv(self) -> std::result::Result<crate::model::ListBucketsResponse, ConvertError> {
        Ok(crate::model::ListBucketsResponse {
            buckets: self.buckets.cnv()?,
            next_page_token: self.next_page_token.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::LockBucketRetentionPolicyRequest> for crate::model::LockBucketRetentionPolicyRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::LockBucketRetentionPolicyRequest, ConvertError> {
        Ok(crate::google::storage::v2::LockBucketRetentionPolicyRequest {
            bucket: self.bucket.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
        })
    }
}

impl FromProto<crate::model::LockBucketRetentionPolicyRequest> for crate::google::storage::v2::LockBucketRetentionPolicyRequest {
    fn cnv(self) -> std::result::Result<crate::model::LockBucketRetentionPolicyRequest, ConvertError> {
        Ok(crate::model::LockBucketRetentionPolicyRequest {
            bucket: self.bucket.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::UpdateBucketRequest> for crate::model::UpdateBucketRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::UpdateBucketRequest, ConvertError> {
        Ok(crate::google::storage::v2::UpdateBucketRequest {
            bucket: self.bucket.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            if_metageneration_not_match: self.if_metageneration_not_match.to_proto()?,
            predefined_acl: self.predefined_acl.to_proto()?,
            predefined_default_object_acl: self.predefined_default_object_acl.to_proto()?,
            update_mask: self.update_mask.to_proto()?,
        })
    }
}

impl FromProto<crate::model::UpdateBucketRequest> for crate::google::storage::v2::UpdateBucketRequest {
    fn cnv(self) -> std::result::Result<crate::model::UpdateBucketRequest, ConvertError> {
        Ok(crate::model::UpdateBucketRequest {
            bucket: self.bucket.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            if_metageneration_not_match: self.if_metageneration_not_match.cnv()?,
            predefined_acl: self.predefined_acl.cnv()?,
            predefined_default_object_acl: self.predefined_default_object_acl.cnv()?,
            update_mask: self.update_mask.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::DeleteNotificationConfigRequest> for crate::model::DeleteNotificationConfigRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::DeleteNotificationConfigRequest, ConvertError> {
        Ok(crate::google::storage::v2::DeleteNotificationConfigRequest {
            name: self.name.to_proto()?,
        })
    }
}

impl FromProto<crate::model::DeleteNotificationConfigRequest> for crate::google::storage::v2::DeleteNotificationConfigRequest {
    fn cnv(self) -> std::result::Result<crate::model::DeleteNotificationConfigRequest, ConvertError> {
        Ok(crate::model::DeleteNotificationConfigRequest {
            name: self.name.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::GetNotificationConfigRequest> for crate::model::GetNotificationConfigRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::GetNotificationConfigRequest, ConvertError> {
        Ok(crate::google::storage::v2::GetNotificationConfigRequest {
            name: self.name.to_proto()?,
        })
    }
}

impl FromProto<crate::model::GetNotificationConfigRequest> for crate::google::storage::v2::GetNotificationConfigRequest {
    fn cnv(self) -> std::result::Result<crate::model::GetNotificationConfigRequest, ConvertError> {
        Ok(crate::model::GetNotificationConfigRequest {
            name: self.name.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::CreateNotificationConfigRequest> for crate::model::CreateNotificationConfigRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::CreateNotificationConfigRequest, ConvertError> {
        Ok(crate::google::storage::v2::CreateNotificationConfigRequest {
            parent: self.parent.to_proto()?,
            notification_config: self.notification_config.to_proto()?,
        })
    }
}

impl FromProto<crate::model::CreateNotificationConfigRequest> for crate::google::storage::v2::CreateNotificationConfigRequest {
    fn cnv(self) -> std::result::Result<crate::model::CreateNotificationConfigRequest, ConvertError> {
        Ok(crate::model::CreateNotificationConfigRequest {
            parent: self.parent.cnv()?,
            notification_config: self.notification_config.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::ListNotificationConfigsRequest> for crate::model::ListNotificationConfigsRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::ListNotificationConfigsRequest, ConvertError> {
        Ok(crate::google::storage::v2::ListNotificationConfigsRequest {
            parent: self.parent.to_proto()?,
            page_size: self.page_size.to_proto()?,
            page_token: self.page_token.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ListNotificationConfigsRequest> for crate::google::storage::v2::ListNotificationConfigsRequest {
    fn cnv(self) -> std::result::Result<crate::model::ListNotificationConfigsRequest, ConvertError> {
        Ok(crate::model::ListNotificationConfigsRequest {
            parent: self.parent.cnv()?,
            page_size: self.page_size.cnv()?,
            page_token: self.page_token.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::ListNotificationConfigsResponse> for crate::model::ListNotificationConfigsResponse {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::ListNotificationConfigsResponse, ConvertError> {
        Ok(crate::google::storage::v2::ListNotificationConfigsResponse {
            notification_configs: self.notification_configs.to_proto()?,
            next_page_token: self.next_page_token.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ListNotificationConfigsResponse> for crate::google::storage::v2::ListNotificationConfigsResponse {
    fn cnv(self) -> std::result::Result<crate::model::ListNotificationConfigsResponse, ConvertError> {
        Ok(crate::model::ListNotificationConfigsResponse {
            notification_configs: self.notification_configs.cnv()?,
            next_page_token: self.next_page_token.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::ComposeObjectRequest> for crate::model::ComposeObjectRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::ComposeObjectRequest, ConvertError> {
        Ok(crate::google::storage::v2::ComposeObjectRequest {
            destination: self.destination.to_proto()?,
            source_objects: self.source_objects.to_proto()?,
            destination_predefined_acl: self.destination_predefined_acl.to_proto()?,
            if_generation_match: self.if_generation_match.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            kms_key: self.kms_key.to_proto()?,
            common_object_request_params: self.common_object_request_params.to_proto()?,
            object_checksums: self.object_checksums.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ComposeObjectRequest> for crate::google::storage::v2::ComposeObjectRequest {
    fn cnv(self) -> std::result::Result<crate::model::ComposeObjectRequest, ConvertError> {
        Ok(crate::model::ComposeObjectRequest {
            destination: self.destination.cnv()?,
            source_objects: self.source_objects.cnv()?,
            destination_predefined_acl: self.destination_predefined_acl.cnv()?,
            if_generation_match: self.if_generation_match.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            kms_key: self.kms_key.cnv()?,
            common_object_request_params: self.common_object_request_params.cnv()?,
            object_checksums: self.object_checksums.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::compose_object_request::SourceObject> for crate::model::compose_object_request::SourceObject {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::compose_object_request::SourceObject, ConvertError> {
        Ok(crate::google::storage::v2::compose_object_request::SourceObject {
            name: self.name.to_proto()?,
            generation: self.generation.to_proto()?,
            object_preconditions: self.object_preconditions.to_proto()?,
        })
    }
}

impl FromProto<crate::model::compose_object_request::SourceObject> for crate::google::storage::v2::compose_object_request::SourceObject {
    fn cnv(self) -> std::result::Result<crate::model::compose_object_request::SourceObject, ConvertError> {
        Ok(crate::model::compose_object_request::SourceObject {
            name: self.name.cnv()?,
            generation: self.generation.cnv()?,
            object_preconditions: self.object_preconditions.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::compose_object_request::source_object::ObjectPreconditions> for crate::model::compose_object_request::source_object::ObjectPreconditions {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::compose_object_request::source_object::ObjectPreconditions, ConvertError> {
        Ok(crate::google::storage::v2::compose_object_request::source_object::ObjectPreconditions {
            if_generation_match: self.if_generation_match.to_proto()?,
        })
    }
}

impl FromProto<crate::model::compose_object_request::source_object::ObjectPreconditions> for crate::google::storage::v2::compose_object_request::source_object::ObjectPreconditions {
    fn cnv(self) -> std::result::Result<crate::model::compose_object_request::source_object::ObjectPreconditions, ConvertError> {
        Ok(crate::model::compose_object_request::source_object::ObjectPreconditions {
            if_generation_match: self.if_generation_match.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::DeleteObjectRequest> for crate::model::DeleteObjectRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::DeleteObjectRequest, ConvertError> {
        Ok(crate::google::storage::v2::DeleteObjectRequest {
            bucket: self.bucket.to_proto()?,
            object: self.object.to_proto()?,
            generation: self.generation.to_proto()?,
            if_generation_match: self.if_generation_match.to_proto()?,
            if_generation_not_match: self.if_generation_not_match.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            if_metageneration_not_match: self.if_metageneration_not_match.to_proto()?,
            common_object_request_params: self.common_object_request_params.to_proto()?,
        })
    }
}

impl FromProto<crate::model::DeleteObjectRequest> for crate::google::storage::v2::DeleteObjectRequest {
    fn cnv(self) -> std::result::Result<crate::model::DeleteObjectRequest, ConvertError> {
        Ok(crate::model::DeleteObjectRequest {
            bucket: self.bucket.cnv()?,
            object: self.object.cnv()?,
            generation: self.generation.cnv()?,
            if_generation_match: self.if_generation_match.cnv()?,
            if_generation_not_match: self.if_generation_not_match.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            if_metageneration_not_match: self.if_metageneration_not_match.cnv()?,
            common_object_request_params: self.common_object_request_params.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::RestoreObjectRequest> for crate::model::RestoreObjectRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::RestoreObjectRequest, ConvertError> {
        Ok(crate::google::storage::v2::RestoreObjectRequest {
            bucket: self.bucket.to_proto()?,
            object: self.object.to_proto()?,
            generation: self.generation.to_proto()?,
            restore_token: self.restore_token.to_proto()?,
            if_generation_match: self.if_generation_match.to_proto()?,
            if_generation_not_match: self.if_generation_not_match.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            if_metageneration_not_match: self.if_metageneration_not_match.to_proto()?,
            copy_source_acl: self.copy_source_acl.to_proto()?,
            common_object_request_params: self.common_object_request_params.to_proto()?,
        })
    }
}

impl FromProto<crate::model::RestoreObjectRequest> for crate::google::storage::v2::RestoreObjectRequest {
    fn cnv(self) -> std::result::Result<crate::model::RestoreObjectRequest, ConvertError> {
        Ok(crate::model::RestoreObjectRequest {
            bucket: self.bucket.cnv()?,
            object: self.object.cnv()?,
            generation: self.generation.cnv()?,
            restore_token: self.restore_token.cnv()?,
            if_generation_match: self.if_generation_match.cnv()?,
            if_generation_not_match: self.if_generation_not_match.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            if_metageneration_not_match: self.if_metageneration_not_match.cnv()?,
            copy_source_acl: self.copy_source_acl.cnv()?,
            common_object_request_params: self.common_object_request_params.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::CancelResumableWriteRequest> for crate::model::CancelResumableWriteRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::CancelResumableWriteRequest, ConvertError> {
        Ok(crate::google::storage::v2::CancelResumableWriteRequest {
            upload_id: self.upload_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::CancelResumableWriteRequest> for crate::google::storage::v2::CancelResumableWriteRequest {
    fn cnv(self) -> std::result::Result<crate::model::CancelResumableWriteRequest, ConvertError> {
        Ok(crate::model::CancelResumableWriteRequest {
            upload_id: self.upload_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::CancelResumableWriteResponse> for crate::model::CancelResumableWriteResponse {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::CancelResumableWriteResponse, ConvertError> {
        Ok(crate::google::storage::v2::CancelResumableWriteResponse {})
    }
}

impl FromProto<crate::model::CancelResumableWriteResponse> for crate::google::storage::v2::CancelResumableWriteResponse {
    fn cnv(self) -> std::result::Result<crate::model::CancelResumableWriteResponse, ConvertError> {
        Ok(crate::model::CancelResumableWriteResponse::new())
    }
}

impl ToProto<crate::google::storage::v2::GetObjectRequest> for crate::model::GetObjectRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::GetObjectRequest, ConvertError> {
        Ok(crate::google::storage::v2::GetObjectRequest {
            bucket: self.bucket.to_proto()?,
            object: self.object.to_proto()?,
            generation: self.generation.to_proto()?,
            soft_deleted: self.soft_deleted.to_proto()?,
            if_generation_match: self.if_generation_match.to_proto()?,
            if_generation_not_match: self.if_generation_not_match.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            if_metageneration_not_match: self.if_metageneration_not_match.to_proto()?,
            common_object_request_params: self.common_object_request_params.to_proto()?,
            read_mask: self.read_mask.to_proto()?,
        })
    }
}

impl FromProto<crate::model::GetObjectRequest> for crate::google::storage::v2::GetObjectRequest {
    fn cnv(self) -> std::result::Result<crate::model::GetObjectRequest, ConvertError> {
        Ok(crate::model::GetObjectRequest {
            bucket: self.bucket.cnv()?,
            object: self.object.cnv()?,
            generation: self.generation.cnv()?,
            soft_deleted: self.soft_deleted.cnv()?,
            if_generation_match: self.if_generation_match.cnv()?,
            if_generation_not_match: self.if_generation_not_match.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            if_metageneration_not_match: self.if_metageneration_not_match.cnv()?,
            common_object_request_params: self.common_object_request_params.cnv()?,
            read_mask: self.read_mask.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::UpdateObjectRequest> for crate::model::UpdateObjectRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::UpdateObjectRequest, ConvertError> {
        Ok(crate::google::storage::v2::UpdateObjectRequest {
            object: self.object.to_proto()?,
            if_generation_match: self.if_generation_match.to_proto()?,
            if_generation_not_match: self.if_generation_not_match.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            if_metageneration_not_match: self.if_metageneration_not_match.to_proto()?,
            predefined_acl: self.predefined_acl.to_proto()?,
            update_mask: self.update_mask.to_proto()?,
            common_object_request_params: self.common_object_request_params.to_proto()?,
        })
    }
}

impl FromProto<crate::model::UpdateObjectRequest> for crate::google::storage::v2::UpdateObjectRequest {
    fn cnv(self) -> std::result::Result<crate::model::UpdateObjectRequest, ConvertError> {
        Ok(crate::model::UpdateObjectRequest {
            object: self.object.cnv()?,
            if_generation_match: self.if_generation_match.cnv()?,
            if_generation_not_match: self.if_generation_not_match.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            if_metageneration_not_match: self.if_metageneration_not_match.cnv()?,
            predefined_acl: self.predefined_acl.cnv()?,
            update_mask: self.update_mask.cnv()?,
            common_object_request_params: self.common_object_request_params.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::ListObjectsRequest> for crate::model::ListObjectsRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::ListObjectsRequest, ConvertError> {
        Ok(crate::google::storage::v2::ListObjectsRequest {
            parent: self.parent.to_proto()?,
            page_size: self.page_size.to_proto()?,
            page_token: self.page_token.to_proto()?,
            delimiter: self.delimiter.to_proto()?,
            include_trailing_delimiter: self.include_trailing_delimiter.to_proto()?,
            prefix: self.prefix.to_proto()?,
            versions: self.versions.to_proto()?,
            read_mask: self.read_mask.to_proto()?,
            lexicographic_start: self.lexicographic_start.to_proto()?,
            lexicographic_end: self.lexicographic_end.to_proto()?,
            soft_deleted: self.soft_deleted.to_proto()?,
            include_folders_as_prefixes: self.include_folders_as_prefixes.to_proto()?,
            match_glob: self.match_glob.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ListObjectsRequest> for crate::google::storage::v2::ListObjectsRequest {
    fn cnv(self) -> std::result::Result<crate::model::ListObjectsRequest, ConvertError> {
        Ok(crate::model::ListObjectsRequest {
            parent: self.parent.cnv()?,
            page_size: self.page_size.cnv()?,
            page_token: self.page_token.cnv()?,
            delimiter: self.delimiter.cnv()?,
            include_trailing_delimiter: self.include_trailing_delimiter.cnv()?,
            prefix: self.prefix.cnv()?,
            versions: self.versions.cnv()?,
            read_mask: self.read_mask.cnv()?,
            lexicographic_start: self.lexicographic_start.cnv()?,
            lexicographic_end: self.lexicographic_end.cnv()?,
            soft_deleted: self.soft_deleted.cnv()?,
            include_folders_as_prefixes: self.include_folders_as_prefixes.cnv()?,
            match_glob: self.match_glob.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::ListObjectsResponse> for crate::model::ListObjectsResponse {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::ListObjectsResponse, ConvertError> {
        Ok(crate::google::storage::v2::ListObjectsResponse {
            objects: self.objects.to_proto()?,
            prefixes: self.prefixes.to_proto()?,
            next_page_token: self.next_page_token.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ListObjectsResponse> for crate::google::storage::v2::ListObjectsResponse {
    fn cnv(self) -> std::result::Result<crate::model::ListObjectsResponse, ConvertError> {
        Ok(crate::model::ListObjectsResponse {
            objects: self.objects.cnv()?,
            prefixes: self.prefixes.cnv()?,
            next_page_token: self.next_page_token.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::RewriteObjectRequest> for crate::model::RewriteObjectRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::RewriteObjectRequest, ConvertError> {
        Ok(crate::google::storage::v2::RewriteObjectRequest {
            destination_name: self.destination_name.to_proto()?,
            destination_bucket: self.destination_bucket.to_proto()?,
            destination_kms_key: self.destination_kms_key.to_proto()?,
            destination: self.destination.to_proto()?,
            source_bucket: self.source_bucket.to_proto()?,
            source_object: self.source_object.to_proto()?,
            source_generation: self.source_generation.to_proto()?,
            rewrite_token: self.rewrite_token.to_proto()?,
            destination_predefined_acl: self.destination_predefined_acl.to_proto()?,
            if_generation_match: self.if_generation_match.to_proto()?,
            if_generation_not_match: self.if_generation_not_match.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            if_metageneration_not_match: self.if_metageneration_not_match.to_proto()?,
            if_source_generation_match: self.if_source_generation_match.to_proto()?,
            if_source_generation_not_match: self.if_source_generation_not_match.to_proto()?,
            if_source_metageneration_match: self.if_source_metageneration_match.to_proto()?,
            if_source_metageneration_not_match: self.if_source_metageneration_not_match.to_proto()?,
            max_bytes_rewritten_per_call: self.max_bytes_rewritten_per_call.to_proto()?,
            copy_source_encryption_algorithm: self.copy_source_encryption_algorithm.to_proto()?,
            copy_source_encryption_key_bytes: self.copy_source_encryption_key_bytes.to_proto()?,
            copy_source_encryption_key_sha256_bytes: self.copy_source_encryption_key_sha256_bytes.to_proto()?,
            common_object_request_params: self.common_object_request_params.to_proto()?,
            object_checksums: self.object_checksums.to_proto()?,
        })
    }
}

impl FromProto<crate::model::RewriteObjectRequest> for crate::google::storage::v2::RewriteObjectRequest {
    fn cnv(self) -> std::result::Result<crate::model::RewriteObjectRequest, ConvertError> {
        Ok(crate::model::RewriteObjectRequest {
            destination_name: self.destination_name.cnv()?,
            destination_bucket: self.destination_bucket.cnv()?,
            destination_kms_key: self.destination_kms_key.cnv()?,
            destination: self.destination.cnv()?,
            source_bucket: self.source_bucket.cnv()?,
            source_object: self.source_object.cnv()?,
            source_generation: self.source_generation.cnv()?,
            rewrite_token: self.rewrite_token.cnv()?,
            destination_predefined_acl: self.destination_predefined_acl.cnv()?,
            if_generation_match: self.if_generation_match.cnv()?,
            if_generation_not_match: self.if_generation_not_match.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            if_metageneration_not_match: self.if_metageneration_not_match.cnv()?,
            if_source_generation_match: self.if_source_generation_match.cnv()?,
            if_source_generation_not_match: self.if_source_generation_not_match.cnv()?,
            if_source_metageneration_match: self.if_source_metageneration_match.cnv()?,
            if_source_metageneration_not_match: self.if_source_metageneration_not_match.cnv()?,
            max_bytes_rewritten_per_call: self.max_bytes_rewritten_per_call.cnv()?,
            copy_source_encryption_algorithm: self.copy_source_encryption_algorithm.cnv()?,
            copy_source_encryption_key_bytes: self.copy_source_encryption_key_bytes.cnv()?,
            copy_source_encryption_key_sha256_bytes: self.copy_source_encryption_key_sha256_bytes.cnv()?,
            common_object_request_params: self.common_object_request_params.cnv()?,
            object_checksums: self.object_checksums.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::RewriteResponse> for crate::model::RewriteResponse {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::RewriteResponse, ConvertError> {
        Ok(crate::google::storage::v2::RewriteResponse {
            total_bytes_rewritten: self.total_bytes_rewritten.to_proto()?,
            object_size: self.object_size.to_proto()?,
            done: self.done.to_proto()?,
            rewrite_token: self.rewrite_token.to_proto()?,
            resource: self.resource.to_proto()?,
        })
    }
}

impl FromProto<crate::model::RewriteResponse> for crate::google::storage::v2::RewriteResponse {
    fn cnv(self) -> std::result::Result<crate::model::RewriteResponse, ConvertError> {
        Ok(crate::model::RewriteResponse {
            total_bytes_rewritten: self.total_bytes_rewritten.cnv()?,
            object_size: self.object_size.cnv()?,
            done: self.done.cnv()?,
            rewrite_token: self.rewrite_token.cnv()?,
            resource: self.resource.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::StartResumableWriteRequest> for crate::model::StartResumableWriteRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::StartResumableWriteRequest, ConvertError> {
        Ok(crate::google::storage::v2::StartResumableWriteRequest {
            write_object_spec: self.write_object_spec.to_proto()?,
            common_object_request_params: self.common_object_request_params.to_proto()?,
            object_checksums: self.object_checksums.to_proto()?,
        })
    }
}

impl FromProto<crate::model::StartResumableWriteRequest> for crate::google::storage::v2::StartResumableWriteRequest {
    fn cnv(self) -> std::result::Result<crate::model::StartResumableWriteRequest, ConvertError> {
        Ok(crate::model::StartResumableWriteRequest {
            write_object_spec: self.write_object_spec.cnv()?,
            common_object_request_params: self.common_object_request_params.cnv()?,
            object_checksums: self.object_checksums.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::StartResumableWriteResponse> for crate::model::StartResumableWriteResponse {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::StartResumableWriteResponse, ConvertError> {
        Ok(crate::google::storage::v2::StartResumableWriteResponse {
            upload_id: self.upload_id.to_proto()?,
        })
    }
}

impl FromProto<crate::model::StartResumableWriteResponse> for crate::google::storage::v2::StartResumableWriteResponse {
    fn cnv(self) -> std::result::Result<crate::model::StartResumableWriteResponse, ConvertError> {
        Ok(crate::model::StartResumableWriteResponse {
            upload_id: self.upload_id.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::WriteObjectSpec> for crate::model::WriteObjectSpec {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::WriteObjectSpec, ConvertError> {
        Ok(crate::google::storage::v2::WriteObjectSpec {
            resource: self.resource.to_proto()?,
            predefined_acl: self.predefined_acl.to_proto()?,
            if_generation_match: self.if_generation_match.to_proto()?,
            if_generation_not_match: self.if_generation_not_match.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            if_metageneration_not_match: self.if_metageneration_not_match.to_proto()?,
            object_size: self.object_size.to_proto()?,
        })
    }
}

impl FromProto<crate::model::WriteObjectSpec> for crate::google::storage::v2::WriteObjectSpec {
    fn cnv(self) -> std::result::Result<crate::model::WriteObjectSpec, ConvertError> {
        Ok(crate::model::WriteObjectSpec {
            resource: self.resource.cnv()?,
            predefined_acl: self.predefined_acl.cnv()?,
            if_generation_match: self.if_generation_match.cnv()?,
            if_generation_not_match: self.if_generation_not_match.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            if_metageneration_not_match: self.if_metageneration_not_match.cnv()?,
            object_size: self.object_size.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::MoveObjectRequest> for crate::model::MoveObjectRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::MoveObjectRequest, ConvertError> {
        Ok(crate::google::storage::v2::MoveObjectRequest {
            bucket: self.bucket.to_proto()?,
            source_object: self.source_object.to_proto()?,
            destination_object: self.destination_object.to_proto()?,
            if_source_generation_match: self.if_source_generation_match.to_proto()?,
            if_source_generation_not_match: self.if_source_generation_not_match.to_proto()?,
            if_source_metageneration_match: self.if_source_metageneration_match.to_proto()?,
            if_source_metageneration_not_match: self.if_source_metageneration_not_match.to_proto()?,
            if_generation_match: self.if_generation_match.to_proto()?,
            if_generation_not_match: self.if_generation_not_match.to_proto()?,
            if_metageneration_match: self.if_metageneration_match.to_proto()?,
            if_metageneration_not_match: self.if_metageneration_not_match.to_proto()?,
        })
    }
}

impl FromProto<crate::model::MoveObjectRequest> for crate::google::storage::v2::MoveObjectRequest {
    fn cnv(self) -> std::result::Result<crate::model::MoveObjectRequest, ConvertError> {
        Ok(crate::model::MoveObjectRequest {
            bucket: self.bucket.cnv()?,
            source_object: self.source_object.cnv()?,
            destination_object: self.destination_object.cnv()?,
            if_source_generation_match: self.if_source_generation_match.cnv()?,
            if_source_generation_not_match: self.if_source_generation_not_match.cnv()?,
            if_source_metageneration_match: self.if_source_metageneration_match.cnv()?,
            if_source_metageneration_not_match: self.if_source_metageneration_not_match.cnv()?,
            if_generation_match: self.if_generation_match.cnv()?,
            if_generation_not_match: self.if_generation_not_match.cnv()?,
            if_metageneration_match: self.if_metageneration_match.cnv()?,
            if_metageneration_not_match: self.if_metageneration_not_match.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::QueryWriteStatusRequest> for crate::model::QueryWriteStatusRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::QueryWriteStatusRequest, ConvertError> {
        Ok(crate::google::storage::v2::QueryWriteStatusRequest {
            upload_id: self.upload_id.to_proto()?,
            common_object_request_params: self.common_object_request_params.to_proto()?,
        })
    }
}

impl FromProto<crate::model::QueryWriteStatusRequest> for crate::google::storage::v2::QueryWriteStatusRequest {
    fn cnv(self) -> std::result::Result<crate::model::QueryWriteStatusRequest, ConvertError> {
        Ok(crate::model::QueryWriteStatusRequest {
            upload_id: self.upload_id.cnv()?,
            common_object_request_params: self.common_object_request_params.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::QueryWriteStatusResponse> for crate::model::QueryWriteStatusResponse {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::QueryWriteStatusResponse, ConvertError> {
        Ok(crate::google::storage::v2::QueryWriteStatusResponse {
            write_status: self.write_status.to_proto()?,
        })
    }
}

impl FromProto<crate::model::QueryWriteStatusResponse> for crate::google::storage::v2::QueryWriteStatusResponse {
    fn cnv(self) -> std::result::Result<crate::model::QueryWriteStatusResponse, ConvertError> {
        Ok(crate::model::QueryWriteStatusResponse {
            write_status: self.write_status.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::query_write_status_response::WriteStatus> for crate::model::query_write_status_response::WriteStatus {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::query_write_status_response::WriteStatus, ConvertError> {
        Ok(match self {
            crate::model::query_write_status_response::WriteStatus::PersistedSize(v) => crate::google::storage::v2::query_write_status_response::WriteStatus::PersistedSize(v.to_proto()?),
            crate::model::query_write_status_response::WriteStatus::Resource(v) => crate::google::storage::v2::query_write_status_response::WriteStatus::Resource((*v).to_proto()?),
        })
    }
}

impl FromProto<crate::model::query_write_status_response::WriteStatus> for crate::google::storage::v2::query_write_status_response::WriteStatus {
    fn cnv(self) -> std::result::Result<crate::model::query_write_status_response::WriteStatus, ConvertError> {
        Ok(match self {
            crate::google::storage::v2::query_write_status_response::WriteStatus::PersistedSize(v) => crate::model::query_write_status_response::WriteStatus::PersistedSize(v.cnv()?),
            crate::google::storage::v2::query_write_status_response::WriteStatus::Resource(v) => crate::model::query_write_status_response::WriteStatus::Resource(std::boxed::Box::new(v.cnv()?)),
        })
    }
}

impl ToProto<crate::google::storage::v2::GetServiceAccountRequest> for crate::model::GetServiceAccountRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::GetServiceAccountRequest, ConvertError> {
        Ok(crate::google::storage::v2::GetServiceAccountRequest {
            project: self.project.to_proto()?,
        })
    }
}

impl FromProto<crate::model::GetServiceAccountRequest> for crate::google::storage::v2::GetServiceAccountRequest {
    fn cnv(self) -> std::result::Result<crate::model::GetServiceAccountRequest, ConvertError> {
        Ok(crate::model::GetServiceAccountRequest {
            project: self.project.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::ServiceAccount> for crate::model::ServiceAccount {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::ServiceAccount, ConvertError> {
        Ok(crate::google::storage::v2::ServiceAccount {
            email_address: self.email_address.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ServiceAccount> for crate::google::storage::v2::ServiceAccount {
    fn cnv(self) -> std::result::Result<crate::model::ServiceAccount, ConvertError> {
        Ok(crate::model::ServiceAccount {
            email_address: self.email_address.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::CreateHmacKeyRequest> for crate::model::CreateHmacKeyRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::CreateHmacKeyRequest, ConvertError> {
        Ok(crate::google::storage::v2::CreateHmacKeyRequest {
            project: self.project.to_proto()?,
            service_account_email: self.service_account_email.to_proto()?,
        })
    }
}

impl FromProto<crate::model::CreateHmacKeyRequest> for crate::google::storage::v2::CreateHmacKeyRequest {
    fn cnv(self) -> std::result::Result<crate::model::CreateHmacKeyRequest, ConvertError> {
        Ok(crate::model::CreateHmacKeyRequest {
            project: self.project.cnv()?,
            service_account_email: self.service_account_email.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::CreateHmacKeyResponse> for crate::model::CreateHmacKeyResponse {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::CreateHmacKeyResponse, ConvertError> {
        Ok(crate::google::storage::v2::CreateHmacKeyResponse {
            metadata: self.metadata.to_proto()?,
            secret_key_bytes: self.secret_key_bytes.to_proto()?,
        })
    }
}

impl FromProto<crate::model::CreateHmacKeyResponse> for crate::google::storage::v2::CreateHmacKeyResponse {
    fn cnv(self) -> std::result::Result<crate::model::CreateHmacKeyResponse, ConvertError> {
        Ok(crate::model::CreateHmacKeyResponse {
            metadata: self.metadata.cnv()?,
            secret_key_bytes: self.secret_key_bytes.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::DeleteHmacKeyRequest> for crate::model::DeleteHmacKeyRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::DeleteHmacKeyRequest, ConvertError> {
        Ok(crate::google::storage::v2::DeleteHmacKeyRequest {
            access_id: self.access_id.to_proto()?,
            project: self.project.to_proto()?,
        })
    }
}

impl FromProto<crate::model::DeleteHmacKeyRequest> for crate::google::storage::v2::DeleteHmacKeyRequest {
    fn cnv(self) -> std::result::Result<crate::model::DeleteHmacKeyRequest, ConvertError> {
        Ok(crate::model::DeleteHmacKeyRequest {
            access_id: self.access_id.cnv()?,
            project: self.project.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::GetHmacKeyRequest> for crate::model::GetHmacKeyRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::GetHmacKeyRequest, ConvertError> {
        Ok(crate::google::storage::v2::GetHmacKeyRequest {
            access_id: self.access_id.to_proto()?,
            project: self.project.to_proto()?,
        })
    }
}

impl FromProto<crate::model::GetHmacKeyRequest> for crate::google::storage::v2::GetHmacKeyRequest {
    fn cnv(self) -> std::result::Result<crate::model::GetHmacKeyRequest, ConvertError> {
        Ok(crate::model::GetHmacKeyRequest {
            access_id: self.access_id.cnv()?,
            project: self.project.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::ListHmacKeysRequest> for crate::model::ListHmacKeysRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::ListHmacKeysRequest, ConvertError> {
        Ok(crate::google::storage::v2::ListHmacKeysRequest {
            project: self.project.to_proto()?,
            page_size: self.page_size.to_proto()?,
            page_token: self.page_token.to_proto()?,
            service_account_email: self.service_account_email.to_proto()?,
            show_deleted_keys: self.show_deleted_keys.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ListHmacKeysRequest> for crate::google::storage::v2::ListHmacKeysRequest {
    fn cnv(self) -> std::result::Result<crate::model::ListHmacKeysRequest, ConvertError> {
        Ok(crate::model::ListHmacKeysRequest {
            project: self.project.cnv()?,
            page_size: self.page_size.cnv()?,
            page_token: self.page_token.cnv()?,
            service_account_email: self.service_account_email.cnv()?,
            show_deleted_keys: self.show_deleted_keys.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::ListHmacKeysResponse> for crate::model::ListHmacKeysResponse {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::ListHmacKeysResponse, ConvertError> {
        Ok(crate::google::storage::v2::ListHmacKeysResponse {
            hmac_keys: self.hmac_keys.to_proto()?,
            next_page_token: self.next_page_token.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ListHmacKeysResponse> for crate::google::storage::v2::ListHmacKeysResponse {
    fn cnv(self) -> std::result::Result<crate::model::ListHmacKeysResponse, ConvertError> {
        Ok(crate::model::ListHmacKeysResponse {
            hmac_keys: self.hmac_keys.cnv()?,
            next_page_token: self.next_page_token.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::UpdateHmacKeyRequest> for crate::model::UpdateHmacKeyRequest {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::UpdateHmacKeyRequest, ConvertError> {
        Ok(crate::google::storage::v2::UpdateHmacKeyRequest {
            hmac_key: self.hmac_key.to_proto()?,
            update_mask: self.update_mask.to_proto()?,
        })
    }
}

impl FromProto<crate::model::UpdateHmacKeyRequest> for crate::google::storage::v2::UpdateHmacKeyRequest {
    fn cnv(self) -> std::result::Result<crate::model::UpdateHmacKeyRequest, ConvertError> {
        Ok(crate::model::UpdateHmacKeyRequest {
            hmac_key: self.hmac_key.cnv()?,
            update_mask: self.update_mask.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::HmacKeyMetadata> for crate::model::HmacKeyMetadata {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::HmacKeyMetadata, ConvertError> {
        Ok(crate::google::storage::v2::HmacKeyMetadata {
            id: self.id.to_proto()?,
            access_id: self.access_id.to_proto()?,
            project: self.project.to_proto()?,
            service_account_email: self.service_account_email.to_proto()?,
            state: self.state.to_proto()?,
            create_time: self.create_time.to_proto()?,
            update_time: self.update_time.to_proto()?,
            etag: self.etag.to_proto()?,
        })
    }
}

impl FromProto<crate::model::HmacKeyMetadata> for crate::google::storage::v2::HmacKeyMetadata {
    fn cnv(self) -> std::result::Result<crate::model::HmacKeyMetadata, ConvertError> {
        Ok(crate::model::HmacKeyMetadata {
            id: self.id.cnv()?,
            access_id: self.access_id.cnv()?,
            project: self.project.cnv()?,
            service_account_email: self.service_account_email.cnv()?,
            state: self.state.cnv()?,
            create_time: self.create_time.cnv()?,
            update_time: self.update_time.cnv()?,
            etag: self.etag.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::CommonObjectRequestParams> for crate::model::CommonObjectRequestParams {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::CommonObjectRequestParams, ConvertError> {
        Ok(crate::google::storage::v2::CommonObjectRequestParams {
            encryption_algorithm: self.encryption_algorithm.to_proto()?,
            encryption_key_bytes: self.encryption_key_bytes.to_proto()?,
            encryption_key_sha256_bytes: self.encryption_key_sha256_bytes.to_proto()?,
        })
    }
}

impl FromProto<crate::model::CommonObjectRequestParams> for crate::google::storage::v2::CommonObjectRequestParams {
    fn cnv(self) -> std::result::Result<crate::model::CommonObjectRequestParams, ConvertError> {
        Ok(crate::model::CommonObjectRequestParams {
            encryption_algorithm: self.encryption_algorithm.cnv()?,
            encryption_key_bytes: self.encryption_key_bytes.cnv()?,
            encryption_key_sha256_bytes: self.encryption_key_sha256_bytes.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::NotificationConfig> for crate::model::NotificationConfig {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::NotificationConfig, ConvertError> {
        Ok(crate::google::storage::v2::NotificationConfig {
            name: self.name.to_proto()?,
            topic: self.topic.to_proto()?,
            etag: self.etag.to_proto()?,
            event_types: self.event_types.to_proto()?,
            custom_attributes: self.custom_attributes.to_proto()?,
            object_name_prefix: self.object_name_prefix.to_proto()?,
            payload_format: self.payload_format.to_proto()?,
        })
    }
}

impl FromProto<crate::model::NotificationConfig> for crate::google::storage::v2::NotificationConfig {
    fn cnv(self) -> std::result::Result<crate::model::NotificationConfig, ConvertError> {
        Ok(crate::model::NotificationConfig {
            name: self.name.cnv()?,
            topic: self.topic.cnv()?,
            etag: self.etag.cnv()?,
            event_types: self.event_types.cnv()?,
            custom_attributes: self.custom_attributes.cnv()?,
            object_name_prefix: self.object_name_prefix.cnv()?,
            payload_format: self.payload_format.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::ObjectChecksums> for crate::model::ObjectChecksums {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::ObjectChecksums, ConvertError> {
        Ok(crate::google::storage::v2::ObjectChecksums {
            crc32c: self.crc32c.to_proto()?,
            md5_hash: self.md5_hash.to_proto()?,
        })
    }
}

impl FromProto<crate::model::ObjectChecksums> for crate::google::storage::v2::ObjectChecksums {
    fn cnv(self) -> std::result::Result<crate::model::ObjectChecksums, ConvertError> {
        Ok(crate::model::ObjectChecksums {
            crc32c: self.crc32c.cnv()?,
            md5_hash: self.md5_hash.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::Bucket> for crate::model::Bucket {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::Bucket, ConvertError> {
        Ok(crate::google::storage::v2::Bucket {
            name: self.name.to_proto()?,
            bucket_id: self.bucket_id.to_proto()?,
            etag: self.etag.to_proto()?,
            project: self.project.to_proto()?,
            metageneration: self.metageneration.to_proto()?,
            location: self.location.to_proto()?,
            location_type: self.location_type.to_proto()?,
            storage_class: self.storage_class.to_proto()?,
            rpo: self.rpo.to_proto()?,
            create_time: self.create_time.to_proto()?,
            update_time: self.update_time.to_proto()?,
            default_event_based_hold: self.default_event_based_hold.to_proto()?,
            labels: self.labels.to_proto()?,
            versioning: self.versioning.to_proto()?,
            retention_policy: self.retention_policy.to_proto()?,
            iam_config: self.iam_config.to_proto()?,
            satisfies_pzs: self.satisfies_pzs.to_proto()?,
            custom_placement_config: self.custom_placement_config.to_proto()?,
            autoclass: self.autoclass.to_proto()?,
            hierarchical_namespace: self.hierarchical_namespace.to_proto()?,
            soft_delete_policy: self.soft_delete_policy.to_proto()?,
        })
    }
}

impl FromProto<crate::model::Bucket> for crate::google::storage::v2::Bucket {
    fn cnv(self) -> std::result::Result<crate::model::Bucket, ConvertError> {
        Ok(crate::model::Bucket {
            name: self.name.cnv()?,
            bucket_id: self.bucket_id.cnv()?,
            etag: self.etag.cnv()?,
            project: self.project.cnv()?,
            metageneration: self.metageneration.cnv()?,
            location: self.location.cnv()?,
            location_type: self.location_type.cnv()?,
            storage_class: self.storage_class.cnv()?,
            rpo: self.rpo.cnv()?,
            create_time: self.create_time.cnv()?,
            update_time: self.update_time.cnv()?,
            default_event_based_hold: self.default_event_based_hold.cnv()?,
            labels: self.labels.cnv()?,
            versioning: self.versioning.cnv()?,
            retention_policy: self.retention_policy.cnv()?,
            iam_config: self.iam_config.cnv()?,
            satisfies_pzs: self.satisfies_pzs.cnv()?,
            custom_placement_config: self.custom_placement_config.cnv()?,
            autoclass: self.autoclass.cnv()?,
            hierarchical_namespace: self.hierarchical_namespace.cnv()?,
            soft_delete_policy: self.soft_delete_policy.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::bucket::Versioning> for crate::model::bucket::Versioning {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::bucket::Versioning, ConvertError> {
        Ok(crate::google::storage::v2::bucket::Versioning {
            enabled: self.enabled.to_proto()?,
        })
    }
}

impl FromProto<crate::model::bucket::Versioning> for crate::google::storage::v2::bucket::Versioning {
    fn cnv(self) -> std::result::Result<crate::model::bucket::Versioning, ConvertError> {
        Ok(crate::model::bucket::Versioning {
            enabled: self.enabled.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::bucket::RetentionPolicy> for crate::model::bucket::RetentionPolicy {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::bucket::RetentionPolicy, ConvertError> {
        Ok(crate::google::storage::v2::bucket::RetentionPolicy {
            effective_time: self.effective_time.to_proto()?,
            is_locked: self.is_locked.to_proto()?,
            retention_duration: self.retention_duration.to_proto()?,
        })
    }
}

impl FromProto<crate::model::bucket::RetentionPolicy> for crate::google::storage::v2::bucket::RetentionPolicy {
    fn cnv(self) -> std::result::Result<crate::model::bucket::RetentionPolicy, ConvertError> {
        Ok(crate::model::bucket::RetentionPolicy {
            effective_time: self.effective_time.cnv()?,
            is_locked: self.is_locked.cnv()?,
            retention_duration: self.retention_duration.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::bucket::SoftDeletePolicy> for crate::model::bucket::SoftDeletePolicy {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::bucket::SoftDeletePolicy, ConvertError> {
        Ok(crate::google::storage::v2::bucket::SoftDeletePolicy {
            retention_duration: self.retention_duration.to_proto()?,
            effective_time: self.effective_time.to_proto()?,
        })
    }
}

impl FromProto<crate::model::bucket::SoftDeletePolicy> for crate::google::storage::v2::bucket::SoftDeletePolicy {
    fn cnv(self) -> std::result::Result<crate::model::bucket::SoftDeletePolicy, ConvertError> {
        Ok(crate::model::bucket::SoftDeletePolicy {
            retention_duration: self.retention_duration.cnv()?,
            effective_time: self.effective_time.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::bucket::IamConfig> for crate::model::bucket::IamConfig {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::bucket::IamConfig, ConvertError> {
        Ok(crate::google::storage::v2::bucket::IamConfig {
            uniform_bucket_level_access: self.uniform_bucket_level_access.to_proto()?,
            public_access_prevention: self.public_access_prevention.to_proto()?,
        })
    }
}

impl FromProto<crate::model::bucket::IamConfig> for crate::google::storage::v2::bucket::IamConfig {
    fn cnv(self) -> std::result::Result<crate::model::bucket::IamConfig, ConvertError> {
        Ok(crate::model::bucket::IamConfig {
            uniform_bucket_level_access: self.uniform_bucket_level_access.cnv()?,
            public_access_prevention: self.public_access_prevention.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::bucket::iam_config::UniformBucketLevelAccess> for crate::model::bucket::iam_config::UniformBucketLevelAccess {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::bucket::iam_config::UniformBucketLevelAccess, ConvertError> {
        Ok(crate::google::storage::v2::bucket::iam_config::UniformBucketLevelAccess {
            enabled: self.enabled.to_proto()?,
            lock_time: self.lock_time.to_proto()?,
        })
    }
}

impl FromProto<crate::model::bucket::iam_config::UniformBucketLevelAccess> for crate::google::storage::v2::bucket::iam_config::UniformBucketLevelAccess {
    fn cnv(self) -> std::result::Result<crate::model::bucket::iam_config::UniformBucketLevelAccess, ConvertError> {
        Ok(crate::model::bucket::iam_config::UniformBucketLevelAccess {
            enabled: self.enabled.cnv()?,
            lock_time: self.lock_time.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::bucket::CustomPlacementConfig> for crate::model::bucket::CustomPlacementConfig {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::bucket::CustomPlacementConfig, ConvertError> {
        Ok(crate::google::storage::v2::bucket::CustomPlacementConfig {
            data_locations: self.data_locations.to_proto()?,
        })
    }
}

impl FromProto<crate::model::bucket::CustomPlacementConfig> for crate::google::storage::v2::bucket::CustomPlacementConfig {
    fn cnv(self) -> std::result::Result<crate::model::bucket::CustomPlacementConfig, ConvertError> {
        Ok(crate::model::bucket::CustomPlacementConfig {
            data_locations: self.data_locations.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::bucket::Autoclass> for crate::model::bucket::Autoclass {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::bucket::Autoclass, ConvertError> {
        Ok(crate::google::storage::v2::bucket::Autoclass {
            enabled: self.enabled.to_proto()?,
            toggle_time: self.toggle_time.to_proto()?,
            terminal_storage_class: self.terminal_storage_class.to_proto()?,
            terminal_storage_class_update_time: self.terminal_storage_class_update_time.to_proto()?,
        })
    }
}

impl FromProto<crate::model::bucket::Autoclass> for crate::google::storage::v2::bucket::Autoclass {
    fn cnv(self) -> std::result::Result<crate::model::bucket::Autoclass, ConvertError> {
        Ok(crate::model::bucket::Autoclass {
            enabled: self.enabled.cnv()?,
            toggle_time: self.toggle_time.cnv()?,
            terminal_storage_class: self.terminal_storage_class.cnv()?,
            terminal_storage_class_update_time: self.terminal_storage_class_update_time.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::bucket::HierarchicalNamespace> for crate::model::bucket::HierarchicalNamespace {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::bucket::HierarchicalNamespace, ConvertError> {
        Ok(crate::google::storage::v2::bucket::HierarchicalNamespace {
            enabled: self.enabled.to_proto()?,
        })
    }
}

impl FromProto<crate::model::bucket::HierarchicalNamespace> for crate::google::storage::v2::bucket::HierarchicalNamespace {
    fn cnv(self) -> std::result::Result<crate::model::bucket::HierarchicalNamespace, ConvertError> {
        Ok(crate::model::bucket::HierarchicalNamespace {
            enabled: self.enabled.cnv()?,
        })
    }
}

impl ToProto<crate::google::storage::v2::Object> for crate::model::Object {
    fn to_proto(self) -> std::result::Result<crate::google::storage::v2::Object, ConvertError> {
        Ok(crate::google::storage::v2::Object {
            name: self.name.to_proto()?,
            bucket: self.bucket.to_proto()?,
            etag: self.etag.to_proto()?,
            generation: self.generation.to_proto()?,
            metageneration: self.metageneration.to_proto()?,
            storage_class: self.storage_class.to_proto()?,
            size: self.size.to_proto()?,
            content_encoding: self.content_encoding.to_proto()?,
            content_disposition: self.content_disposition.to_proto()?,
            cache_control: self.cache_control.to_proto()?,
            content_language: self.content_language.to_proto()?,
            delete_time: self.delete_time.to_proto()?,
            content_type: self.content_type.to_proto()?,
            create_time: self.create_time.to_proto()?,
            component_count: self.component_count.to_proto()?,
            checksums: self.checksums.to_proto()?,
            update_time: self.update_time.to_proto()?,
            kms_key: self.kms_key.to_proto()?,
            update_storage_class_time: self.update_storage_class_time.to_proto()?,
            temporary_hold: self.temporary_hold.to_proto()?,
            retention_expire_time: self.retention_expire_time.to_proto()?,
            metadata: self.metadata.to_proto()?,
            event_based_hold: self.event_based_hold.to_proto()?,
            custom_time: self.custom_time.to_proto()?,
            soft_delete_time: self.soft_delete_time.to_proto()?,
            hard_delete_time: self.hard_delete_time.to_proto()?,
        })
    }
}

impl FromProto<crate::model::Object> for crate::google::storage::v2::Object {
    fn cnv(self) -> std::result::Result<crate::model::Object, ConvertError> {
        Ok(crate::model::Object {
            name: self.name.cnv()?,
            bucket: self.bucket.cnv()?,
            etag: self.etag.cnv()?,
            generation: self.generation.cnv()?,
            metageneration: self.metageneration.cnv()?,
            storage_class: self.storage_class.cnv()?,
            size: self.size.cnv()?,
            content_encoding: self.content_encoding.cnv()?,
            content_disposition: self.content_disposition.cnv()?,
            cache_control: self.cache_control.cnv()?,
            content_language: self.content_language.cnv()?,
            delete_time: self.delete_time.cnv()?,
            content_type: self.content_type.cnv()?,
            create_time: self.create_time.cnv()?,
            component_count: self.component_count.cnv()?,
            checksums: self.checksums.cnv()?,
            update_time: self.update_time.cnv()?,
            kms_key: self.kms_key.cnv()?,
            update_storage_class_time: self.update_storage_class_time.cnv()?,
            temporary_hold: self.temporary_hold.cnv()?,
            retention_expire_time: self.retention_expire_time.cnv()?,
            metadata: self.metadata.cnv()?,
            event_based_hold: self.event_based_hold.cnv()?,
            custom_time: self.custom_time.cnv()?,
            soft_delete_time: self.soft_delete_time.cnv()?,
            hard_delete_time: self.hard_delete_time.cnv()?,
        })
    }
}
