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

//! Conversions between the client library types and their Prost versions.
//!
//! The gRPC transports convert each request to its Prost message, and each
//! Prost response back to the client library type. The traits in this module
//! define those conversions. Implementations for the well-known types, the
//! collections, and `google.rpc.Status` live here. The service crates
//! implement the traits for their messages.

use crate::google::rpc::{ErrorInfo as ProtoErrorInfo, Status as ProtoStatus};
use gax::error::rpc::Status;
use std::collections::HashMap;
use std::hash::Hash;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("enum {0} does not contain an integer value")]
    EnumNoIntegerValue(&'static str),
    #[error("unexpected type URL: {0}")]
    UnexpectedTypeUrl(String),
    #[error("value out of range for {0}")]
    OutOfRange(&'static str, #[source] BoxError),
    #[error("gax/prost conversion error: {0}")]
    Other(#[source] BoxError),
}

impl ConvertError {
    pub fn other<T>(e: T) -> Self
    where
        T: Into<BoxError>,
    {
        ConvertError::Other(e.into())
    }
}

impl From<ConvertError> for gax::error::Error {
    fn from(value: ConvertError) -> Self {
        gax::error::Error::deser(value)
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Converts from `Self` into `T`, where `T` is a Prost message.
pub trait ToProto<T>: Sized {
    fn to_proto(self) -> Result<T>;
}

/// Converts from `Self` into `T`, where `Self` is a Prost message.
pub trait FromProto<T>: Sized {
    // `self` (instead of `from_proto(v: Self)`) lets the collection
    // implementations use method syntax.
    fn cnv(self) -> Result<T>;
}

macro_rules! impl_primitive {
    ($t: ty) => {
        impl ToProto<$t> for $t {
            fn to_proto(self) -> Result<$t> {
                Ok(self)
            }
        }

        impl FromProto<$t> for $t {
            fn cnv(self) -> Result<$t> {
                Ok(self)
            }
        }
    };
}

impl_primitive!(bool);
impl_primitive!(i32);
impl_primitive!(u32);
impl_primitive!(i64);
impl_primitive!(u64);
impl_primitive!(f32);
impl_primitive!(f64);
impl_primitive!(String);
impl_primitive!(bytes::Bytes);
impl_primitive!(());

impl<T, P> ToProto<Option<P>> for Option<T>
where
    T: ToProto<P>,
{
    fn to_proto(self) -> Result<Option<P>> {
        self.map(T::to_proto).transpose()
    }
}

impl<P, T> FromProto<Option<T>> for Option<P>
where
    P: FromProto<T>,
{
    fn cnv(self) -> Result<Option<T>> {
        self.map(P::cnv).transpose()
    }
}

impl<T, P> ToProto<Vec<P>> for Vec<T>
where
    T: ToProto<P>,
{
    fn to_proto(self) -> Result<Vec<P>> {
        self.into_iter().map(T::to_proto).collect()
    }
}

impl<P, T> FromProto<Vec<T>> for Vec<P>
where
    P: FromProto<T>,
{
    fn cnv(self) -> Result<Vec<T>> {
        self.into_iter().map(P::cnv).collect()
    }
}

impl<K, V, PK, PV> ToProto<HashMap<PK, PV>> for HashMap<K, V>
where
    K: ToProto<PK>,
    V: ToProto<PV>,
    PK: Eq + Hash,
{
    fn to_proto(self) -> Result<HashMap<PK, PV>> {
        self.into_iter()
            .map(|(k, v)| Ok((k.to_proto()?, v.to_proto()?)))
            .collect()
    }
}

impl<PK, PV, K, V> FromProto<HashMap<K, V>> for HashMap<PK, PV>
where
    PK: FromProto<K>,
    PV: FromProto<V>,
    K: Eq + Hash,
{
    fn cnv(self) -> Result<HashMap<K, V>> {
        self.into_iter()
            .map(|(k, v)| Ok((k.cnv()?, v.cnv()?)))
            .collect()
    }
}

impl FromProto<wkt::Duration> for prost_types::Duration {
    fn cnv(self) -> Result<wkt::Duration> {
        wkt::Duration::new(self.seconds, self.nanos)
            .map_err(|e| ConvertError::OutOfRange("google.protobuf.Duration", e.into()))
    }
}

impl ToProto<prost_types::Duration> for wkt::Duration {
    fn to_proto(self) -> Result<prost_types::Duration> {
        Ok(prost_types::Duration {
            seconds: self.seconds(),
            nanos: self.nanos(),
        })
    }
}

impl FromProto<wkt::Timestamp> for prost_types::Timestamp {
    fn cnv(self) -> Result<wkt::Timestamp> {
        wkt::Timestamp::new(self.seconds, self.nanos)
            .map_err(|e| ConvertError::OutOfRange("google.protobuf.Timestamp", e.into()))
    }
}

impl ToProto<prost_types::Timestamp> for wkt::Timestamp {
    fn to_proto(self) -> Result<prost_types::Timestamp> {
        Ok(prost_types::Timestamp {
            seconds: self.seconds(),
            nanos: self.nanos(),
        })
    }
}

impl FromProto<wkt::FieldMask> for prost_types::FieldMask {
    fn cnv(self) -> Result<wkt::FieldMask> {
        Ok(wkt::FieldMask::default().set_paths(self.paths))
    }
}

impl ToProto<prost_types::FieldMask> for wkt::FieldMask {
    fn to_proto(self) -> Result<prost_types::FieldMask> {
        Ok(prost_types::FieldMask { paths: self.paths })
    }
}

// Prost represents `google.protobuf.Empty` as `()`.
impl FromProto<wkt::Empty> for () {
    fn cnv(self) -> Result<wkt::Empty> {
        Ok(wkt::Empty::default())
    }
}

impl ToProto<()> for wkt::Empty {
    fn to_proto(self) -> Result<()> {
        Ok(())
    }
}

/// Decodes a Prost `Any` holding a `P` into a [wkt::Any] holding the
/// equivalent `T`.
pub fn any_from_prost<P, T>(any: prost_types::Any) -> Result<wkt::Any>
where
    P: prost::Message + prost::Name + Default + FromProto<T>,
    T: wkt::message::Message,
{
    if any.type_url != P::type_url() {
        return Err(ConvertError::UnexpectedTypeUrl(any.type_url));
    }
    let message = P::decode(any.value.as_slice()).map_err(ConvertError::other)?;
    let message = message.cnv()?;
    wkt::Any::from_msg(&message).map_err(ConvertError::other)
}

/// Encodes a [wkt::Any] holding a `T` into a Prost `Any` holding the
/// equivalent `P`.
pub fn any_to_prost<T, P>(any: &wkt::Any) -> Result<prost_types::Any>
where
    T: wkt::message::Message + ToProto<P>,
    P: prost::Message + prost::Name,
{
    let message = any.to_msg::<T>().map_err(|e| match e {
        wkt::AnyError::TypeMismatch { has, .. } => ConvertError::UnexpectedTypeUrl(has),
        e => ConvertError::other(e),
    })?;
    let message = message.to_proto()?;
    prost_types::Any::from_msg(&message).map_err(ConvertError::other)
}

/// The JSON representation of `google.rpc.ErrorInfo`, used in [Status] details.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
struct ErrorInfo {
    #[serde(skip_serializing_if = "String::is_empty")]
    reason: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    domain: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    metadata: HashMap<String, String>,
}

impl wkt::message::Message for ErrorInfo {
    fn typename() -> &'static str {
        "type.googleapis.com/google.rpc.ErrorInfo"
    }
}

impl FromProto<ErrorInfo> for ProtoErrorInfo {
    fn cnv(self) -> Result<ErrorInfo> {
        Ok(ErrorInfo {
            reason: self.reason,
            domain: self.domain,
            metadata: self.metadata,
        })
    }
}

impl ToProto<ProtoErrorInfo> for ErrorInfo {
    fn to_proto(self) -> Result<ProtoErrorInfo> {
        Ok(ProtoErrorInfo {
            reason: self.reason,
            domain: self.domain,
            metadata: self.metadata,
        })
    }
}

/// Converts the Prost `google.rpc.Status` to a [Status].
///
/// Only the `google.rpc.ErrorInfo` details are preserved, other details are
/// dropped.
impl FromProto<Status> for ProtoStatus {
    fn cnv(self) -> Result<Status> {
        let details = self
            .details
            .into_iter()
            .filter_map(|any| any_from_prost::<ProtoErrorInfo, ErrorInfo>(any).ok())
            .collect::<Vec<_>>();
        Ok(Status::default()
            .set_code(self.code)
            .set_message(self.message)
            .set_details(details))
    }
}

impl ToProto<ProtoStatus> for Status {
    fn to_proto(self) -> Result<ProtoStatus> {
        let details = self
            .details
            .iter()
            .filter_map(|any| any_to_prost::<ErrorInfo, ProtoErrorInfo>(any).ok())
            .collect();
        Ok(ProtoStatus {
            code: self.code as i32,
            message: self.message,
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Code;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn fmt_convert_error() {
        let e = ConvertError::EnumNoIntegerValue("name123");
        let fmt = format!("{e}");
        assert!(
            fmt.contains("name123") && fmt.contains("does not contain an integer"),
            "{fmt}"
        );
    }

    #[test]
    fn into_gax_error() {
        let e = gax::error::Error::from(ConvertError::other("bad"));
        assert!(e.is_deserialization(), "{e:?}");
    }

    #[test_case(0, 0)]
    #[test_case(12, 345_678_900)]
    #[test_case(-12, -345_678_900)]
    fn duration(seconds: i64, nanos: i32) -> anyhow::Result<()> {
        let input = prost_types::Duration { seconds, nanos };
        let got: wkt::Duration = input.clone().cnv()?;
        assert_eq!(got, wkt::Duration::clamp(seconds, nanos));
        assert_eq!(got.to_proto()?, input);
        Ok(())
    }

    #[test]
    fn duration_out_of_range() {
        let input = prost_types::Duration {
            seconds: 1,
            nanos: -1,
        };
        let got: Result<wkt::Duration> = input.cnv();
        assert!(matches!(got, Err(ConvertError::OutOfRange(_, _))), "{got:?}");
    }

    #[test_case(0, 0)]
    #[test_case(1_700_000_000, 123_000_000)]
    fn timestamp(seconds: i64, nanos: i32) -> anyhow::Result<()> {
        let input = prost_types::Timestamp { seconds, nanos };
        let got: wkt::Timestamp = input.clone().cnv()?;
        assert_eq!(got, wkt::Timestamp::clamp(seconds, nanos));
        assert_eq!(got.to_proto()?, input);
        Ok(())
    }

    #[test]
    fn timestamp_out_of_range() {
        let input = prost_types::Timestamp {
            seconds: i64::MAX,
            nanos: 0,
        };
        let got: Result<wkt::Timestamp> = input.cnv();
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn field_mask() -> anyhow::Result<()> {
        let input = prost_types::FieldMask {
            paths: vec!["a".into(), "b.c".into()],
        };
        let got: wkt::FieldMask = input.clone().cnv()?;
        assert_eq!(got, wkt::FieldMask::default().set_paths(["a", "b.c"]));
        assert_eq!(got.to_proto()?, input);
        Ok(())
    }

    #[test]
    fn collections() -> anyhow::Result<()> {
        let input = vec![prost_types::Duration {
            seconds: 1,
            nanos: 0,
        }];
        let got: Vec<wkt::Duration> = input.cnv()?;
        assert_eq!(got, vec![wkt::Duration::clamp(1, 0)]);

        let input: Option<prost_types::Duration> = None;
        let got: Option<wkt::Duration> = input.cnv()?;
        assert_eq!(got, None);

        let input = HashMap::from([("k".to_string(), "v".to_string())]);
        let got: HashMap<String, String> = input.clone().to_proto()?;
        assert_eq!(got, input);
        Ok(())
    }

    #[test]
    fn status_with_error_info() -> anyhow::Result<()> {
        let info = ProtoErrorInfo {
            reason: "REASON".into(),
            domain: "storage.googleapis.com".into(),
            metadata: HashMap::from([("bucket".to_string(), "b".to_string())]),
        };
        let input = ProtoStatus {
            code: Code::NotFound as i32,
            message: "not found".into(),
            details: vec![
                prost_types::Any::from_msg(&info)?,
                prost_types::Any {
                    type_url: "type.googleapis.com/unknown.Type".into(),
                    value: vec![],
                },
            ],
        };
        let got: Status = input.cnv()?;
        assert_eq!(got.code, Code::NotFound);
        assert_eq!(got.message, "not found");
        assert_eq!(got.details.len(), 1, "{got:?}");
        assert_eq!(
            got.details[0].type_url(),
            Some("type.googleapis.com/google.rpc.ErrorInfo")
        );

        let back: ProtoStatus = got.to_proto()?;
        assert_eq!(back.code, Code::NotFound as i32);
        assert_eq!(back.details.len(), 1);
        let decoded = back.details[0].to_msg::<ProtoErrorInfo>()?;
        assert_eq!(decoded, info);
        Ok(())
    }

    #[test]
    fn any_type_mismatch() -> anyhow::Result<()> {
        let any = wkt::Any::from_msg(&wkt::Duration::clamp(1, 0))?;
        let got = any_to_prost::<ErrorInfo, ProtoErrorInfo>(&any);
        assert!(
            matches!(got, Err(ConvertError::UnexpectedTypeUrl(ref u)) if u.ends_with("google.protobuf.Duration")),
            "{got:?}"
        );
        Ok(())
    }
}
