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

//! The messages and enums that are part of this client library.
//!
//! The types mirror the `google.storage.v2`, `google.storage.control.v2`, and
//! `google.iam.v1` protos. They serialize to the JSON representation of
//! those protos: field names use `camelCase`, 64-bit integers are strings,
//! and `bytes` fields are base64 strings.

mod control;
mod iam;
mod storage;

pub use control::*;
pub use iam::*;
pub use storage::*;

/// Used in `skip_serializing_if` for singular scalar fields.
pub(crate) fn is_default<T>(v: &T) -> bool
where
    T: std::default::Default + std::cmp::PartialEq,
{
    *v == T::default()
}

/// The representation of enum values unknown to this version of the library.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum UnknownEnumValue {
    Integer(i32),
    String(String),
}

impl UnknownEnumValue {
    pub(crate) fn value(&self) -> Option<i32> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::String(_) => None,
        }
    }

    pub(crate) fn name(&self) -> Option<&str> {
        match self {
            Self::Integer(_) => None,
            Self::String(s) => Some(s.as_str()),
        }
    }
}

pub(crate) fn display_enum(
    f: &mut std::fmt::Formatter<'_>,
    name: Option<&str>,
    value: Option<i32>,
) -> std::fmt::Result {
    match (name, value) {
        (Some(name), _) => write!(f, "{name}"),
        (None, Some(value)) => write!(f, "{value}"),
        (None, None) => write!(f, "UNKNOWN-ENUM-VALUE"),
    }
}

/// Deserializes open enums from either their integer or their string form.
pub(crate) struct EnumVisitor<T> {
    name: &'static str,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> EnumVisitor<T> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<'de, T> serde::de::Visitor<'de> for EnumVisitor<T>
where
    T: From<i32> + for<'a> From<&'a str>,
{
    type Value = T;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a valid {} value, as an integer or a string", self.name)
    }

    fn visit_i64<E>(self, value: i64) -> std::result::Result<T, E>
    where
        E: serde::de::Error,
    {
        let v = i32::try_from(value)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Signed(value), &self))?;
        Ok(T::from(v))
    }

    fn visit_u64<E>(self, value: u64) -> std::result::Result<T, E>
    where
        E: serde::de::Error,
    {
        let v = i32::try_from(value)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Unsigned(value), &self))?;
        Ok(T::from(v))
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<T, E>
    where
        E: serde::de::Error,
    {
        Ok(T::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intelligence_config::EditionConfig;
    use intelligence_config::effective_intelligence_config::EffectiveEdition;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(EditionConfig::Unspecified, 0, "EDITION_CONFIG_UNSPECIFIED")]
    #[test_case(EditionConfig::Inherit, 1, "INHERIT")]
    #[test_case(EditionConfig::Disabled, 2, "DISABLED")]
    #[test_case(EditionConfig::Standard, 3, "STANDARD")]
    #[test_case(EditionConfig::Trial, 5, "TRIAL")]
    fn edition_config(input: EditionConfig, value: i32, name: &str) {
        assert_eq!(input.value(), Some(value));
        assert_eq!(input.name(), Some(name));
        assert_eq!(EditionConfig::from(value), input);
        assert_eq!(EditionConfig::from(name), input);
        assert_eq!(input.to_string(), name);
    }

    #[test]
    fn unknown_integer_enum() -> anyhow::Result<()> {
        let input = EditionConfig::from(42);
        assert_eq!(input.value(), Some(42));
        assert_eq!(input.name(), None);
        assert_eq!(input.to_string(), "42");
        let got = serde_json::to_value(&input)?;
        assert_eq!(got, json!(42));
        let roundtrip = serde_json::from_value::<EditionConfig>(got)?;
        assert_eq!(roundtrip, input);
        Ok(())
    }

    #[test]
    fn unknown_string_enum() -> anyhow::Result<()> {
        let input = EffectiveEdition::from("PREMIUM");
        assert_eq!(input.value(), None);
        assert_eq!(input.name(), Some("PREMIUM"));
        let got = serde_json::to_value(&input)?;
        assert_eq!(got, json!("PREMIUM"));
        Ok(())
    }

    #[test]
    fn enum_from_string_and_integer() -> anyhow::Result<()> {
        let got = serde_json::from_value::<EffectiveEdition>(json!("STANDARD"))?;
        assert_eq!(got, EffectiveEdition::Standard);
        let got = serde_json::from_value::<EffectiveEdition>(json!(1))?;
        assert_eq!(got, EffectiveEdition::None);
        let got = serde_json::from_value::<EffectiveEdition>(json!(1_i64 << 40));
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[test]
    fn default_enum() {
        assert_eq!(EditionConfig::default(), EditionConfig::Unspecified);
        assert_eq!(EffectiveEdition::default(), EffectiveEdition::Unspecified);
    }

    #[test]
    fn serialize_object() -> anyhow::Result<()> {
        let input = Object::new()
            .set_name("my-object")
            .set_bucket("projects/_/buckets/my-bucket")
            .set_generation(123456_i64)
            .set_size(0_i64)
            .set_checksums(
                ObjectChecksums::new()
                    .set_crc32c(42_u32)
                    .set_md5_hash(bytes::Bytes::from_static(b"the quick brown fox")),
            );
        let got = serde_json::to_value(&input)?;
        let want = json!({
            "name": "my-object",
            "bucket": "projects/_/buckets/my-bucket",
            "generation": "123456",
            "checksums": {
                "crc32c": 42,
                "md5Hash": "dGhlIHF1aWNrIGJyb3duIGZveA==",
            },
        });
        assert_eq!(got, want);
        let roundtrip = serde_json::from_value::<Object>(got)?;
        assert_eq!(roundtrip, input);
        Ok(())
    }

    #[test]
    fn oneof_accessors() {
        let response = QueryWriteStatusResponse::new().set_persisted_size(1024_i64);
        assert_eq!(response.persisted_size(), Some(&1024));
        assert_eq!(response.resource(), None);

        let response = response.set_resource(Object::new().set_name("my-object"));
        assert_eq!(response.persisted_size(), None);
        assert_eq!(
            response.resource().map(|o| o.name.as_str()),
            Some("my-object")
        );
    }

    #[test]
    fn oneof_serialization() -> anyhow::Result<()> {
        let input = QueryWriteStatusResponse::new().set_persisted_size(1024_i64);
        let got = serde_json::to_value(&input)?;
        assert_eq!(got, json!({"persistedSize": "1024"}));
        let roundtrip = serde_json::from_value::<QueryWriteStatusResponse>(got)?;
        assert_eq!(roundtrip, input);

        let input = json!({"resource": {"name": "my-object", "size": "7"}});
        let got = serde_json::from_value::<QueryWriteStatusResponse>(input)?;
        let want = QueryWriteStatusResponse::new()
            .set_resource(Object::new().set_name("my-object").set_size(7_i64));
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn intelligence_config() -> anyhow::Result<()> {
        let input = IntelligenceConfig::new()
            .set_name("projects/p/locations/global/intelligenceConfig")
            .set_edition_config(EditionConfig::Standard)
            .set_filter(
                intelligence_config::Filter::new().set_included_cloud_storage_buckets(
                    intelligence_config::filter::CloudStorageBuckets::new()
                        .set_bucket_id_regexes(["bucket-.*"]),
                ),
            );
        let got = serde_json::to_value(&input)?;
        let want = json!({
            "name": "projects/p/locations/global/intelligenceConfig",
            "editionConfig": 3,
            "filter": {
                "includedCloudStorageBuckets": {"bucketIdRegexes": ["bucket-.*"]},
            },
        });
        assert_eq!(got, want);
        let roundtrip = serde_json::from_value::<IntelligenceConfig>(got)?;
        assert_eq!(roundtrip, input);
        Ok(())
    }

    #[test]
    fn typenames() {
        use wkt::message::Message;
        assert_eq!(
            Bucket::typename(),
            "type.googleapis.com/google.storage.v2.Bucket"
        );
        assert_eq!(
            Folder::typename(),
            "type.googleapis.com/google.storage.control.v2.Folder"
        );
        assert_eq!(Policy::typename(), "type.googleapis.com/google.iam.v1.Policy");
        assert_eq!(
            bucket::Versioning::typename(),
            "type.googleapis.com/google.storage.v2.Bucket.Versioning"
        );
    }

    #[test]
    fn pageable_responses() {
        use gax::paginator::PageableResponse;
        let page = ListFoldersResponse::new()
            .set_folders([Folder::new().set_name("a/"), Folder::new().set_name("b/")])
            .set_next_page_token("next");
        assert_eq!(page.next_page_token(), "next");
        let names = page
            .items()
            .into_iter()
            .map(|f| f.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a/", "b/"]);
    }
}
