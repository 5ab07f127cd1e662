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

//! Errors returned by the client libraries.

pub mod rpc;

use http::HeaderMap;
use rpc::Status;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The clients report errors from multiple sources. The service may return an
/// error, the transport may be unable to create a connection, the request may
/// time out, the retry policy may be exhausted, or the library may be unable
/// to format the request.
///
/// Most applications just return or log the error. Applications that need the
/// details can use the predicates to determine the error kind, the accessors
/// for the most common details, and [source][std::error::Error::source] for
/// the underlying error.
///
/// # Example
/// ```
/// use gcs_gax::error::Error;
/// use gcs_gax::error::rpc::{Code, Status};
/// match example_function() {
///     Err(e) if e.status().is_some_and(|s| s.code == Code::NotFound) => {
///         println!("the bucket does not exist: {e}");
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     # Err(Error::service(Status::default().set_code(Code::NotFound).set_message("NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

#[derive(Debug)]
enum ErrorKind {
    Service(Box<ServiceDetails>),
    Http(Box<HttpDetails>),
    Timeout,
    Exhausted,
    Serialization,
    Deserialization,
    Binding,
    Authentication,
    Io,
    Transport(Box<HeaderMap>),
    Other,
}

#[derive(Debug)]
struct ServiceDetails {
    status: Status,
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
}

#[derive(Debug)]
struct HttpDetails {
    status_code: u16,
    headers: HeaderMap,
    payload: bytes::Bytes,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use gcs_gax::error::Error;
    /// use gcs_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::NotFound).set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        Self::service_full(status, None, None, None)
    }

    /// Creates a service error with the transport metadata and the original
    /// transport error.
    #[doc(hidden)]
    pub fn service_full(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
        source: Option<BoxError>,
    ) -> Self {
        let details = ServiceDetails {
            status,
            status_code,
            headers,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source,
        }
    }

    /// Creates an error for an HTTP response that does not contain a
    /// `google.rpc.Status`.
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = HttpDetails {
            status_code,
            headers,
            payload,
        };
        Self {
            kind: ErrorKind::Http(Box::new(details)),
            source: None,
        }
    }

    /// Creates an error representing a timeout.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Timeout, source)
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. The request may or may
    /// not have started, and it may or may not complete in the service.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing an exhausted policy.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use gcs_gax::error::Error;
    /// let error = Error::exhausted("too many retry attempts");
    /// assert!(error.is_exhausted());
    /// assert!(error.source().is_some());
    /// ```
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Exhausted, source)
    }

    /// The request could not complete before the retry policy expired.
    ///
    /// The source contains the last error returned by the service.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Creates an error representing a serialization problem.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Serialization, source)
    }

    /// The client library could not serialize the request.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error representing a deserialization problem.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Deserialization, source)
    }

    /// The response could not be deserialized.
    ///
    /// This may indicate a server response that does not match the schema
    /// known to the library, or a long-running operation containing a
    /// different response type than expected.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing a problem binding the request to an
    /// HTTP path.
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Binding, source)
    }

    /// The request is missing required fields, or its fields do not match
    /// any of the URL templates for the RPC.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    /// Creates an error representing a problem obtaining credentials.
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Authentication, source)
    }

    /// The client could not create the authentication headers.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Creates an error representing an I/O problem, such as a failed
    /// connection.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Io, source)
    }

    /// The request failed with an I/O error before reaching the service.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// Creates an error representing a transport problem after the
    /// connection was established.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(headers: HeaderMap, source: T) -> Self {
        Self::with_source(ErrorKind::Transport(Box::new(headers)), source)
    }

    /// The transport failed, or returned a response that is not a valid RPC
    /// response.
    ///
    /// This is a common problem when the endpoint is misconfigured.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    /// Creates an error not covered by any other kind.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Other, source)
    }

    /// The error details returned by the service, if any.
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.status),
            _ => None,
        }
    }

    /// The HTTP status code, for errors received over HTTP.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Service(d) => d.status_code,
            ErrorKind::Http(d) => Some(d.status_code),
            _ => None,
        }
    }

    /// The headers (or gRPC metadata) included with the error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Service(d) => d.headers.as_ref(),
            ErrorKind::Http(d) => Some(&d.headers),
            ErrorKind::Transport(h) => Some(h.as_ref()),
            _ => None,
        }
    }

    /// The payload of an HTTP error response that is not a `google.rpc.Status`.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Http(d) => Some(&d.payload),
            _ => None,
        }
    }

    fn with_source<T: Into<BoxError>>(kind: ErrorKind, source: T) -> Self {
        Self {
            kind,
            source: Some(source.into()),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Service(d), _) => write!(
                f,
                "the service reports an error with code {} described as: {}",
                d.status.code, d.status.message
            ),
            (ErrorKind::Http(d), _) => write!(
                f,
                "the HTTP transport reports a [{}] error: {}",
                d.status_code,
                String::from_utf8_lossy(&d.payload)
            ),
            (ErrorKind::Timeout, Some(e)) => write!(f, "the request exceeded the deadline: {e}"),
            (ErrorKind::Exhausted, Some(e)) => write!(
                f,
                "the retry policy is exhausted, the last attempt returned: {e}"
            ),
            (ErrorKind::Serialization, Some(e)) => {
                write!(f, "cannot serialize the request: {e}")
            }
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response: {e}")
            }
            (ErrorKind::Binding, Some(e)) => write!(
                f,
                "the request is missing required parameters or fields: {e}"
            ),
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers: {e}")
            }
            (ErrorKind::Io, Some(e)) => write!(f, "cannot send the request: {e}"),
            (ErrorKind::Transport(_), Some(e)) => {
                write!(f, "the transport reports an error: {e}")
            }
            (ErrorKind::Other, Some(e)) => write!(f, "an unclassified problem: {e}"),
            (_, None) => write!(f, "an unclassified problem without details"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpc::Code;

    #[test]
    fn service() {
        let status = Status::default()
            .set_code(Code::FailedPrecondition)
            .set_message("metageneration mismatch");
        let error = Error::service(status.clone());
        assert_eq!(error.status(), Some(&status));
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        let fmt = error.to_string();
        assert!(fmt.contains("FAILED_PRECONDITION"), "{fmt}");
        assert!(fmt.contains("metageneration mismatch"), "{fmt}");
    }

    #[test]
    fn service_full() {
        let mut headers = HeaderMap::new();
        headers.insert("x-test", http::HeaderValue::from_static("v"));
        let status = Status::default().set_code(Code::NotFound);
        let error = Error::service_full(
            status.clone(),
            Some(404),
            Some(headers.clone()),
            Some("source".into()),
        );
        assert_eq!(error.status(), Some(&status));
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        assert!(error.source().is_some(), "{error:?}");
    }

    #[test]
    fn http() {
        let error = Error::http(503, HeaderMap::new(), bytes::Bytes::from_static(b"oops"));
        assert!(error.status().is_none(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(503));
        assert_eq!(
            error.http_payload(),
            Some(&bytes::Bytes::from_static(b"oops"))
        );
        assert!(error.to_string().contains("oops"), "{error}");
    }

    #[test]
    fn predicates() {
        let error = Error::timeout("t");
        assert!(error.is_timeout(), "{error:?}");
        assert!(!error.is_exhausted(), "{error:?}");

        let error = Error::exhausted(Error::timeout("t"));
        assert!(error.is_exhausted(), "{error:?}");
        let source = error
            .source()
            .and_then(|e| e.downcast_ref::<Error>())
            .expect("source should be an Error");
        assert!(source.is_timeout(), "{source:?}");

        assert!(Error::ser("s").is_serialization());
        assert!(Error::deser("d").is_deserialization());
        assert!(Error::binding("b").is_binding());
        assert!(Error::authentication("a").is_authentication());
        assert!(Error::io("i").is_io());
        let error = Error::transport(HeaderMap::new(), "t");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.http_headers().is_some(), "{error:?}");
        let error = Error::other("o");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.to_string().contains("unclassified"), "{error}");
    }

    #[test]
    fn send_sync() {
        static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);
    }
}
