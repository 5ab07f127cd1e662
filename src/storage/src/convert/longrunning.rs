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

use crate::google::longrunning as proto;
use crate::google::storage::control::v2 as control;
use gaxi::prost::{ConvertError, FromProto, ToProto};

/// Converts the payloads of the long-running operations in this crate.
///
/// The operations return a `Folder`, an `AnywhereCache`, or
/// `google.protobuf.Empty`, and report their progress using one of the
/// `*Metadata` messages.
fn any_from_prost(any: prost_types::Any) -> Result<wkt::Any, ConvertError> {
    use gaxi::prost::any_from_prost as cnv;
    let type_url = any.type_url.clone();
    match type_url.as_str() {
        "type.googleapis.com/google.storage.control.v2.Folder" => {
            cnv::<control::Folder, crate::model::Folder>(any)
        }
        "type.googleapis.com/google.storage.control.v2.RenameFolderMetadata" => {
            cnv::<control::RenameFolderMetadata, crate::model::RenameFolderMetadata>(any)
        }
        "type.googleapis.com/google.storage.control.v2.DeleteFolderRecursiveMetadata" => {
            cnv::<control::DeleteFolderRecursiveMetadata, crate::model::DeleteFolderRecursiveMetadata>(
                any,
            )
        }
        "type.googleapis.com/google.protobuf.Empty" => {
            wkt::Any::from_msg(&wkt::Empty::default()).map_err(ConvertError::other)
        }
        "type.googleapis.com/google.storage.control.v2.AnywhereCache" => {
            cnv::<control::AnywhereCache, crate::model::AnywhereCache>(any)
        }
        "type.googleapis.com/google.storage.control.v2.CreateAnywhereCacheMetadata" => {
            cnv::<control::CreateAnywhereCacheMetadata, crate::model::CreateAnywhereCacheMetadata>(
                any,
            )
        }
        "type.googleapis.com/google.storage.control.v2.UpdateAnywhereCacheMetadata" => {
            cnv::<control::UpdateAnywhereCacheMetadata, crate::model::UpdateAnywhereCacheMetadata>(
                any,
            )
        }
        _ => Err(ConvertError::UnexpectedTypeUrl(type_url)),
    }
}

impl FromProto<lro::model::Operation> for proto::Operation {
    fn cnv(self) -> Result<lro::model::Operation, ConvertError> {
        let result = match self.result {
            None => None,
            Some(proto::operation::Result::Error(status)) => {
                Some(lro::model::operation::Result::Error(status.cnv()?))
            }
            Some(proto::operation::Result::Response(any)) => {
                Some(lro::model::operation::Result::Response(any_from_prost(any)?))
            }
        };
        Ok(lro::model::Operation::default()
            .set_name(self.name)
            .set_or_clear_metadata(self.metadata.map(any_from_prost).transpose()?)
            .set_done(self.done)
            .set_result(result))
    }
}

impl ToProto<proto::GetOperationRequest> for lro::model::GetOperationRequest {
    fn to_proto(self) -> Result<proto::GetOperationRequest, ConvertError> {
        Ok(proto::GetOperationRequest {
            name: self.name.to_proto()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Code;
    use pretty_assertions::assert_eq;

    #[test]
    fn operation_with_response() -> anyhow::Result<()> {
        let folder = control::Folder {
            name: "projects/_/buckets/b/folders/f/".into(),
            metageneration: 7,
            ..Default::default()
        };
        let metadata = control::RenameFolderMetadata {
            source_folder_id: "a/".into(),
            destination_folder_id: "f/".into(),
            ..Default::default()
        };
        let input = proto::Operation {
            name: "projects/_/buckets/b/operations/op-001".into(),
            metadata: Some(prost_types::Any::from_msg(&metadata)?),
            done: true,
            result: Some(proto::operation::Result::Response(
                prost_types::Any::from_msg(&folder)?,
            )),
        };
        let got: lro::model::Operation = input.cnv()?;
        assert_eq!(got.name, "projects/_/buckets/b/operations/op-001");
        assert!(got.done);
        let response = got
            .response()
            .map(|a| a.to_msg::<crate::model::Folder>())
            .transpose()?;
        assert_eq!(
            response,
            Some(
                crate::model::Folder::new()
                    .set_name("projects/_/buckets/b/folders/f/")
                    .set_metageneration(7)
            )
        );
        let metadata = got
            .metadata
            .as_ref()
            .map(|a| a.to_msg::<crate::model::RenameFolderMetadata>())
            .transpose()?;
        assert_eq!(
            metadata,
            Some(
                crate::model::RenameFolderMetadata::new()
                    .set_source_folder_id("a/")
                    .set_destination_folder_id("f/")
            )
        );
        Ok(())
    }

    #[test]
    fn operation_with_empty_response() -> anyhow::Result<()> {
        let metadata = control::DeleteFolderRecursiveMetadata {
            folder_id: "a/b/".into(),
            ..Default::default()
        };
        let input = proto::Operation {
            name: "projects/_/buckets/b/operations/op-005".into(),
            metadata: Some(prost_types::Any::from_msg(&metadata)?),
            done: true,
            result: Some(proto::operation::Result::Response(prost_types::Any {
                type_url: "type.googleapis.com/google.protobuf.Empty".into(),
                value: vec![],
            })),
        };
        let got: lro::model::Operation = input.cnv()?;
        let response = got.response().map(|a| a.to_msg::<wkt::Empty>()).transpose()?;
        assert_eq!(response, Some(wkt::Empty::default()));
        let metadata = got
            .metadata
            .as_ref()
            .map(|a| a.to_msg::<crate::model::DeleteFolderRecursiveMetadata>())
            .transpose()?;
        assert_eq!(
            metadata,
            Some(crate::model::DeleteFolderRecursiveMetadata::new().set_folder_id("a/b/"))
        );
        Ok(())
    }

    #[test]
    fn operation_with_error() -> anyhow::Result<()> {
        let input = proto::Operation {
            name: "projects/_/buckets/b/operations/op-002".into(),
            done: true,
            result: Some(proto::operation::Result::Error(crate::google::rpc::Status {
                code: Code::NotFound as i32,
                message: "not found".into(),
                details: vec![],
            })),
            ..Default::default()
        };
        let got: lro::model::Operation = input.cnv()?;
        let status = got.error().cloned();
        assert_eq!(status.as_ref().map(|s| s.code), Some(Code::NotFound));
        assert_eq!(status.map(|s| s.message), Some("not found".to_string()));
        Ok(())
    }

    #[test]
    fn operation_in_progress() -> anyhow::Result<()> {
        let input = proto::Operation {
            name: "projects/_/buckets/b/operations/op-003".into(),
            ..Default::default()
        };
        let got: lro::model::Operation = input.cnv()?;
        assert!(!got.done);
        assert!(got.result.is_none());
        assert!(got.metadata.is_none());
        Ok(())
    }

    #[test]
    fn unexpected_type_url() {
        let input = proto::Operation {
            name: "projects/_/buckets/b/operations/op-004".into(),
            done: true,
            result: Some(proto::operation::Result::Response(prost_types::Any {
                type_url: "type.googleapis.com/google.storage.v2.Bucket".into(),
                value: vec![],
            })),
            ..Default::default()
        };
        let got: Result<lro::model::Operation, ConvertError> = input.cnv();
        assert!(
            matches!(got, Err(ConvertError::UnexpectedTypeUrl(ref u)) if u.ends_with("v2.Bucket")),
            "{got:?}"
        );
    }

    #[test]
    fn get_operation_request() -> anyhow::Result<()> {
        let input = lro::model::GetOperationRequest::default().set_name("op-name");
        let got: proto::GetOperationRequest = input.to_proto()?;
        assert_eq!(got.name, "op-name");
        Ok(())
    }
}
