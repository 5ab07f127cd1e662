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

use crate::message::Message;

type Map = serde_json::Map<String, serde_json::Value>;

/// `Any` contains an arbitrary message along with a URL that describes the
/// type of the message.
///
/// In JSON, an `Any` is represented by the regular representation of the
/// embedded message plus an `@type` field holding the type URL:
///
/// ```norust
///     {
///       "@type": "type.googleapis.com/google.storage.control.v2.RenameFolderMetadata",
///       "sourceFolderId": "a/b/",
///       "destinationFolderId": "c/d/"
///     }
/// ```
///
/// Messages with a custom JSON representation that is not an object, such
/// as `google.protobuf.Duration`, are embedded in a `value` field:
///
/// ```norust
///     {
///       "@type": "type.googleapis.com/google.protobuf.Duration",
///       "value": "1.212s"
///     }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Any(Map);

/// Indicates a problem trying to use an [Any].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AnyError {
    /// Problem serializing an object into an [Any].
    #[error("cannot serialize object into an Any, source={0}")]
    Serialization(#[source] BoxedError),

    /// Problem deserializing an object from an [Any].
    #[error("cannot deserialize from an Any, source={0}")]
    Deserialization(#[source] BoxedError),

    /// The [Any] does not contain the requested type.
    #[error("mismatched typenames extracting from Any, the any has {has}, the target type is {want}")]
    TypeMismatch {
        /// The type URL found in the `Any`.
        has: String,
        /// The type URL of the requested message.
        want: String,
    },
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = AnyError;

impl AnyError {
    pub(crate) fn ser<T: Into<BoxedError>>(v: T) -> Self {
        Self::Serialization(v.into())
    }

    pub(crate) fn deser<T: Into<BoxedError>>(v: T) -> Self {
        Self::Deserialization(v.into())
    }
}

impl Any {
    /// Returns the type URL stored in this `Any`, if any.
    ///
    /// # Examples
    /// ```
    /// # use gcs_wkt::{Any, Duration};
    /// let any = Any::from_msg(&Duration::clamp(30, 0))?;
    /// assert_eq!(any.type_url(), Some("type.googleapis.com/google.protobuf.Duration"));
    /// # Ok::<(), gcs_wkt::AnyError>(())
    /// ```
    pub fn type_url(&self) -> Option<&str> {
        self.0.get("@type").and_then(serde_json::Value::as_str)
    }

    /// Creates a new [Any] from a message.
    pub fn from_msg<T>(message: &T) -> Result<Self, Error>
    where
        T: Message,
    {
        let value = serde_json::to_value(message).map_err(Error::ser)?;
        let mut map = Map::new();
        map.insert("@type".to_string(), T::typename().into());
        match value {
            serde_json::Value::Object(fields) if !T::uses_value_field() => {
                map.extend(fields);
            }
            serde_json::Value::Object(_) => {
                return Err(Error::ser("value-encoded message serialized as an object"));
            }
            other if T::uses_value_field() => {
                map.insert("value".to_string(), other);
            }
            _ => {
                return Err(Error::ser(
                    "unexpected JSON type, only objects can be stored directly",
                ));
            }
        };
        Ok(Self(map))
    }

    /// Extracts (if possible) a `T` value from the [Any].
    ///
    /// # Examples
    /// ```
    /// # use gcs_wkt::{Any, AnyError, Duration, Timestamp};
    /// let any = Any::from_msg(&Duration::clamp(30, 0))?;
    /// assert_eq!(any.to_msg::<Duration>()?, Duration::clamp(30, 0));
    /// assert!(matches!(any.to_msg::<Timestamp>(), Err(AnyError::TypeMismatch { .. })));
    /// # Ok::<(), AnyError>(())
    /// ```
    pub fn to_msg<T>(&self) -> Result<T, Error>
    where
        T: Message,
    {
        let has = self
            .type_url()
            .ok_or_else(|| Error::deser("@type field is missing or is not a string"))?;
        if has != T::typename() {
            return Err(Error::TypeMismatch {
                has: has.to_string(),
                want: T::typename().to_string(),
            });
        }
        if T::uses_value_field() {
            let value = self
                .0
                .get("value")
                .cloned()
                .ok_or_else(|| Error::deser("value field is missing"))?;
            return serde_json::from_value::<T>(value).map_err(Error::deser);
        }
        let fields: Map = self
            .0
            .iter()
            .filter(|(k, _)| k.as_str() != "@type")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        serde_json::from_value::<T>(serde_json::Value::Object(fields)).map_err(Error::deser)
    }
}

impl serde::ser::Serialize for Any {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for Any {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Map::deserialize(deserializer)?;
        Ok(Any(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Duration, Empty, FieldMask, Timestamp};
    use serde_json::json;
    type Result = anyhow::Result<()>;

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Stored {
        #[serde(skip_serializing_if = "String::is_empty")]
        pub source_folder_id: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        pub destination_folder_id: String,
    }

    impl Message for Stored {
        fn typename() -> &'static str {
            "type.googleapis.com/test.Stored"
        }
    }

    #[test]
    fn serialize_object() -> Result {
        let input = Stored {
            source_folder_id: "a/b/".into(),
            destination_folder_id: "c/d/".into(),
        };
        let any = Any::from_msg(&input)?;
        let got = serde_json::to_value(&any)?;
        let want = json!({
            "@type": "type.googleapis.com/test.Stored",
            "sourceFolderId": "a/b/",
            "destinationFolderId": "c/d/",
        });
        assert_eq!(got, want);
        assert_eq!(any.to_msg::<Stored>()?, input);
        Ok(())
    }

    #[test]
    fn serialize_value_encoded() -> Result {
        let any = Any::from_msg(&Duration::clamp(60, 0))?;
        let got = serde_json::to_value(&any)?;
        let want = json!({"@type": "type.googleapis.com/google.protobuf.Duration", "value": "60s"});
        assert_eq!(got, want);

        let any = Any::from_msg(&FieldMask::default().set_paths(["a", "b"]))?;
        let got = serde_json::to_value(&any)?;
        let want = json!({"@type": "type.googleapis.com/google.protobuf.FieldMask", "value": "a,b"});
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn deserialize_value_encoded() -> Result {
        let input = json!({"@type": "type.googleapis.com/google.protobuf.Timestamp", "value": "2025-01-02T03:04:05Z"});
        let any = serde_json::from_value::<Any>(input)?;
        let got = any.to_msg::<Timestamp>()?;
        assert_eq!(got, Timestamp::clamp(1735787045, 0));
        Ok(())
    }

    #[test]
    fn empty_roundtrip() -> Result {
        let any = Any::from_msg(&Empty::default())?;
        let got = serde_json::to_value(&any)?;
        assert_eq!(got, json!({"@type": "type.googleapis.com/google.protobuf.Empty"}));
        assert_eq!(any.to_msg::<Empty>()?, Empty::default());
        Ok(())
    }

    #[test]
    fn type_mismatch() -> Result {
        let any = Any::from_msg(&Duration::clamp(60, 0))?;
        let got = any.to_msg::<Stored>();
        assert!(
            matches!(&got, Err(AnyError::TypeMismatch { has, want }) if has == Duration::typename() && want == Stored::typename()),
            "{got:?}"
        );
        Ok(())
    }

    #[test]
    fn deserialize_errors() -> Result {
        let any = serde_json::from_value::<Any>(json!({"@type-is-missing": ""}))?;
        let got = any.to_msg::<Stored>();
        assert!(matches!(got, Err(AnyError::Deserialization(_))), "{got:?}");

        let any = serde_json::from_value::<Any>(json!({"@type": [1, 2, 3]}))?;
        let got = any.to_msg::<Stored>();
        assert!(matches!(got, Err(AnyError::Deserialization(_))), "{got:?}");

        let any = serde_json::from_value::<Any>(json!({
            "@type": "type.googleapis.com/google.protobuf.Duration",
            "value-is-missing": "1.2s"
        }))?;
        let got = any.to_msg::<Duration>();
        assert!(matches!(got, Err(AnyError::Deserialization(_))), "{got:?}");

        let any = serde_json::from_value::<Any>(json!({
            "@type": "type.googleapis.com/test.Stored",
            "sourceFolderId": 42
        }))?;
        let got = any.to_msg::<Stored>();
        assert!(matches!(got, Err(AnyError::Deserialization(_))), "{got:?}");
        Ok(())
    }
}
