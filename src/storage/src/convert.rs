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

//! Conversions between the types in [crate::model] and their Prost
//! counterparts in [crate::google].

mod control;
mod iam;
mod longrunning;
mod storage;

#[cfg(test)]
mod tests {
    use crate::google::iam::v1 as iam;
    use crate::google::storage::control::v2 as control;
    use crate::google::storage::v2 as storage;
    use gaxi::prost::{ConvertError, FromProto, ToProto};
    use pretty_assertions::assert_eq;

    #[test]
    fn bucket_roundtrip() -> anyhow::Result<()> {
        let input = crate::model::Bucket::new()
            .set_name("projects/_/buckets/my-bucket")
            .set_metageneration(3_i64)
            .set_labels([("env", "test")])
            .set_create_time(wkt::Timestamp::clamp(1_700_000_000, 0))
            .set_versioning(crate::model::bucket::Versioning::new().set_enabled(true));
        let proto: storage::Bucket = input.clone().to_proto()?;
        assert_eq!(proto.name, "projects/_/buckets/my-bucket");
        assert_eq!(proto.metageneration, 3);
        assert_eq!(proto.labels.get("env").map(String::as_str), Some("test"));
        assert_eq!(
            proto.create_time,
            Some(prost_types::Timestamp {
                seconds: 1_700_000_000,
                nanos: 0
            })
        );
        assert_eq!(proto.versioning.as_ref().map(|v| v.enabled), Some(true));
        let got: crate::model::Bucket = proto.cnv()?;
        assert_eq!(got, input);
        Ok(())
    }

    #[test]
    fn oneof_with_message() -> anyhow::Result<()> {
        let input = crate::model::QueryWriteStatusResponse::new()
            .set_resource(crate::model::Object::new().set_name("my-object"));
        let proto: storage::QueryWriteStatusResponse = input.clone().to_proto()?;
        assert!(
            matches!(
                &proto.write_status,
                Some(storage::query_write_status_response::WriteStatus::Resource(o)) if o.name == "my-object"
            ),
            "{proto:?}"
        );
        let got: crate::model::QueryWriteStatusResponse = proto.cnv()?;
        assert_eq!(got, input);
        Ok(())
    }

    #[test]
    fn optional_fields() -> anyhow::Result<()> {
        let input = crate::model::GetFolderRequest::new()
            .set_name("projects/_/buckets/b/folders/f/")
            .set_if_metageneration_match(0_i64);
        let proto: control::GetFolderRequest = input.to_proto()?;
        assert_eq!(proto.if_metageneration_match, Some(0));
        assert_eq!(proto.if_metageneration_not_match, None);
        Ok(())
    }

    #[test]
    fn open_enum() -> anyhow::Result<()> {
        use crate::model::intelligence_config::EditionConfig;
        let input = crate::model::IntelligenceConfig::new().set_edition_config(EditionConfig::Trial);
        let proto: control::IntelligenceConfig = input.to_proto()?;
        assert_eq!(proto.edition_config, 5);

        let proto = control::IntelligenceConfig {
            edition_config: 42,
            ..Default::default()
        };
        let got: crate::model::IntelligenceConfig = proto.cnv()?;
        assert_eq!(got.edition_config.value(), Some(42));
        Ok(())
    }

    #[test]
    fn enum_without_integer_value() {
        use crate::model::intelligence_config::EditionConfig;
        let input = crate::model::IntelligenceConfig::new()
            .set_edition_config(EditionConfig::from("NOT_A_REAL_EDITION"));
        let got: Result<control::IntelligenceConfig, ConvertError> = input.to_proto();
        assert!(
            matches!(got, Err(ConvertError::EnumNoIntegerValue(_))),
            "{got:?}"
        );
    }

    #[test]
    fn iam_policy() -> anyhow::Result<()> {
        let input = crate::model::Policy::new()
            .set_version(3)
            .set_etag(bytes::Bytes::from_static(b"etag"))
            .set_bindings([crate::model::Binding::new()
                .set_role("roles/storage.admin")
                .set_members(["user:test@example.com"])
                .set_condition(crate::model::Expr::new().set_expression("true"))]);
        let proto: iam::Policy = input.clone().to_proto()?;
        assert_eq!(proto.version, 3);
        assert_eq!(proto.bindings.len(), 1);
        assert_eq!(
            proto.bindings[0].condition.as_ref().map(|c| c.expression.as_str()),
            Some("true")
        );
        let got: crate::model::Policy = proto.cnv()?;
        assert_eq!(got, input);
        Ok(())
    }
}
