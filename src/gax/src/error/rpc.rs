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

//! The RPC status model shared by the gRPC and HTTP-JSON transports.

/// The error details returned by the service.
///
/// This mirrors the `google.rpc.Status` message. Over gRPC the status is
/// carried in the trailers, over HTTP-JSON it is the `error` field of the
/// response body.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The status code.
    pub code: Code,

    /// A developer-facing error message, in English.
    pub message: String,

    /// Additional error details, such as `google.rpc.ErrorInfo`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<wkt::Any>,
}

impl Status {
    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [details][Status::details].
    pub fn set_details<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<wkt::Any>,
    {
        self.details = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

// The HTTP-JSON representation wraps the status in an `error` field and uses
// the string representation of the code.
#[derive(serde::Deserialize)]
struct ErrorWrapper {
    error: WrappedStatus,
}

#[derive(serde::Deserialize)]
#[serde(default)]
struct WrappedStatus {
    code: i32,
    message: String,
    status: Option<String>,
    details: Vec<wkt::Any>,
}

impl Default for WrappedStatus {
    fn default() -> Self {
        Self {
            code: Code::Unknown as i32,
            message: String::new(),
            status: None,
            details: Vec::new(),
        }
    }
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = serde_json::Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let wrapper = serde_json::from_slice::<ErrorWrapper>(value)?;
        let code = match wrapper.error.status.as_deref() {
            Some(s) => Code::from(s),
            None => Code::from_http_status(wrapper.error.code),
        };
        Ok(Status {
            code,
            message: wrapper.error.message,
            details: wrapper.error.details,
        })
    }
}

/// The canonical error codes for Google APIs.
///
/// Unknown integer or string values map to [Code::Unknown].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Code {
    /// Not an error; returned on success.
    Ok = 0,
    /// The operation was cancelled, typically by the caller.
    Cancelled = 1,
    /// Unknown error.
    #[default]
    Unknown = 2,
    /// The client specified an invalid argument.
    InvalidArgument = 3,
    /// The deadline expired before the operation could complete.
    DeadlineExceeded = 4,
    /// Some requested entity (e.g., bucket or object) was not found.
    NotFound = 5,
    /// The entity that a client attempted to create already exists.
    AlreadyExists = 6,
    /// The caller does not have permission to execute the operation.
    PermissionDenied = 7,
    /// Some resource has been exhausted, e.g., a per-project quota.
    ResourceExhausted = 8,
    /// The system is not in a state required for the operation, e.g., a
    /// metageneration precondition failed.
    FailedPrecondition = 9,
    /// The operation was aborted, typically due to a concurrency issue.
    Aborted = 10,
    /// The operation was attempted past the valid range.
    OutOfRange = 11,
    /// The operation is not implemented or supported.
    Unimplemented = 12,
    /// Internal errors.
    Internal = 13,
    /// The service is currently unavailable. This is most likely a transient
    /// condition.
    Unavailable = 14,
    /// Unrecoverable data loss or corruption.
    DataLoss = 15,
    /// The request does not have valid authentication credentials.
    Unauthenticated = 16,
}

impl Code {
    /// The name of the code, as used in the HTTP-JSON representation.
    pub fn name(&self) -> &'static str {
        match self {
            Code::Ok => "OK",
            Code::Cancelled => "CANCELLED",
            Code::Unknown => "UNKNOWN",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::OutOfRange => "OUT_OF_RANGE",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::DataLoss => "DATA_LOSS",
            Code::Unauthenticated => "UNAUTHENTICATED",
        }
    }

    // Used when an HTTP error payload lacks the `status` field.
    fn from_http_status(code: i32) -> Self {
        match code {
            400 => Code::InvalidArgument,
            401 => Code::Unauthenticated,
            403 => Code::PermissionDenied,
            404 => Code::NotFound,
            409 => Code::Aborted,
            412 => Code::FailedPrecondition,
            416 => Code::OutOfRange,
            429 => Code::ResourceExhausted,
            499 => Code::Cancelled,
            501 => Code::Unimplemented,
            503 => Code::Unavailable,
            504 => Code::DeadlineExceeded,
            500..=599 => Code::Internal,
            _ => Code::Unknown,
        }
    }
}

impl From<i32> for Code {
    fn from(value: i32) -> Self {
        match value {
            0 => Code::Ok,
            1 => Code::Cancelled,
            2 => Code::Unknown,
            3 => Code::InvalidArgument,
            4 => Code::DeadlineExceeded,
            5 => Code::NotFound,
            6 => Code::AlreadyExists,
            7 => Code::PermissionDenied,
            8 => Code::ResourceExhausted,
            9 => Code::FailedPrecondition,
            10 => Code::Aborted,
            11 => Code::OutOfRange,
            12 => Code::Unimplemented,
            13 => Code::Internal,
            14 => Code::Unavailable,
            15 => Code::DataLoss,
            16 => Code::Unauthenticated,
            _ => Code::Unknown,
        }
    }
}

impl From<&str> for Code {
    fn from(value: &str) -> Self {
        match value {
            "OK" => Code::Ok,
            "CANCELLED" => Code::Cancelled,
            "UNKNOWN" => Code::Unknown,
            "INVALID_ARGUMENT" => Code::InvalidArgument,
            "DEADLINE_EXCEEDED" => Code::DeadlineExceeded,
            "NOT_FOUND" => Code::NotFound,
            "ALREADY_EXISTS" => Code::AlreadyExists,
            "PERMISSION_DENIED" => Code::PermissionDenied,
            "RESOURCE_EXHAUSTED" => Code::ResourceExhausted,
            "FAILED_PRECONDITION" => Code::FailedPrecondition,
            "ABORTED" => Code::Aborted,
            "OUT_OF_RANGE" => Code::OutOfRange,
            "UNIMPLEMENTED" => Code::Unimplemented,
            "INTERNAL" => Code::Internal,
            "UNAVAILABLE" => Code::Unavailable,
            "DATA_LOSS" => Code::DataLoss,
            "UNAUTHENTICATED" => Code::Unauthenticated,
            _ => Code::Unknown,
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl serde::ser::Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(*self as i32)
    }
}

impl<'de> serde::de::Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = Code;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("an integer or string with a status code")
            }
            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Code, E> {
                Ok(i32::try_from(v).map(Code::from).unwrap_or(Code::Unknown))
            }
            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Code, E> {
                Ok(i32::try_from(v).map(Code::from).unwrap_or(Code::Unknown))
            }
            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Code, E> {
                Ok(Code::from(v))
            }
        }
        deserializer.deserialize_any(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(0, Code::Ok, "OK")]
    #[test_case(1, Code::Cancelled, "CANCELLED")]
    #[test_case(2, Code::Unknown, "UNKNOWN")]
    #[test_case(3, Code::InvalidArgument, "INVALID_ARGUMENT")]
    #[test_case(4, Code::DeadlineExceeded, "DEADLINE_EXCEEDED")]
    #[test_case(5, Code::NotFound, "NOT_FOUND")]
    #[test_case(6, Code::AlreadyExists, "ALREADY_EXISTS")]
    #[test_case(7, Code::PermissionDenied, "PERMISSION_DENIED")]
    #[test_case(8, Code::ResourceExhausted, "RESOURCE_EXHAUSTED")]
    #[test_case(9, Code::FailedPrecondition, "FAILED_PRECONDITION")]
    #[test_case(10, Code::Aborted, "ABORTED")]
    #[test_case(11, Code::OutOfRange, "OUT_OF_RANGE")]
    #[test_case(12, Code::Unimplemented, "UNIMPLEMENTED")]
    #[test_case(13, Code::Internal, "INTERNAL")]
    #[test_case(14, Code::Unavailable, "UNAVAILABLE")]
    #[test_case(15, Code::DataLoss, "DATA_LOSS")]
    #[test_case(16, Code::Unauthenticated, "UNAUTHENTICATED")]
    fn code_conversions(value: i32, code: Code, name: &str) {
        assert_eq!(Code::from(value), code);
        assert_eq!(code as i32, value);
        assert_eq!(code.name(), name);
        assert_eq!(Code::from(name), code);
        assert_eq!(code.to_string(), name);
    }

    #[test_case(-1)]
    #[test_case(17)]
    fn code_unknown(value: i32) {
        assert_eq!(Code::from(value), Code::Unknown);
    }

    #[test]
    fn status_serde() -> anyhow::Result<()> {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("bucket not found");
        let got = serde_json::to_value(&status)?;
        assert_eq!(got, json!({"code": 5, "message": "bucket not found"}));
        let rt = serde_json::from_value::<Status>(got)?;
        assert_eq!(rt, status);

        let got = serde_json::from_value::<Status>(json!({"code": "ABORTED"}))?;
        assert_eq!(got.code, Code::Aborted);
        Ok(())
    }

    #[test]
    fn from_http_payload() -> anyhow::Result<()> {
        let payload = json!({
            "error": {
                "code": 412,
                "message": "precondition failed",
                "status": "FAILED_PRECONDITION",
                "details": [{"@type": "type.googleapis.com/google.rpc.ErrorInfo", "reason": "r"}],
            }
        });
        let bytes = bytes::Bytes::from(serde_json::to_vec(&payload)?);
        let got = Status::try_from(&bytes)?;
        assert_eq!(got.code, Code::FailedPrecondition);
        assert_eq!(got.message, "precondition failed");
        assert_eq!(got.details.len(), 1);
        assert_eq!(
            got.details[0].type_url(),
            Some("type.googleapis.com/google.rpc.ErrorInfo")
        );
        Ok(())
    }

    #[test_case(404, Code::NotFound)]
    #[test_case(429, Code::ResourceExhausted)]
    #[test_case(503, Code::Unavailable)]
    #[test_case(502, Code::Internal)]
    #[test_case(302, Code::Unknown)]
    fn from_http_payload_without_status(http: i32, want: Code) -> anyhow::Result<()> {
        let payload = json!({"error": {"code": http, "message": "m"}});
        let bytes = bytes::Bytes::from(serde_json::to_vec(&payload)?);
        let got = Status::try_from(&bytes)?;
        assert_eq!(got.code, want);
        Ok(())
    }

    #[test]
    fn from_http_payload_invalid() {
        let bytes = bytes::Bytes::from_static(b"<html>not found</html>");
        let got = Status::try_from(&bytes);
        assert!(got.is_err(), "{got:?}");
    }
}
