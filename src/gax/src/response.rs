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

//! The response type returned by the client stubs.
//!
//! Stubs return the response body together with the transport metadata,
//! such as the HTTP headers or the gRPC metadata. The client request builders
//! return only the body.
//!
//! # Example
//! ```
//! # use gcs_gax::response::{Parts, Response};
//! let mut headers = http::HeaderMap::new();
//! headers.insert("x-goog-generation", http::HeaderValue::from_static("123"));
//! let response = Response::from_parts(Parts::new().set_headers(headers), "body");
//! assert!(response.headers().contains_key("x-goog-generation"));
//! assert_eq!(response.into_body(), "body");
//! ```

/// A response body with its transport metadata.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response with empty metadata. Mostly useful in mocks.
    pub fn from(body: T) -> Self {
        Self {
            parts: Parts::default(),
            body,
        }
    }

    /// Creates a response from the metadata and body.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// The response headers, or gRPC metadata.
    pub fn headers(&self) -> &http::HeaderMap {
        &self.parts.headers
    }

    /// The response body.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Splits the response into its metadata and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response, returning the body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Converts the body, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            parts: self.parts,
            body: f(self.body),
        }
    }
}

/// The metadata of a [Response].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP headers or gRPC metadata.
    pub headers: http::HeaderMap,
}

impl Parts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the headers.
    pub fn set_headers<V: Into<http::HeaderMap>>(mut self, v: V) -> Self {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> http::HeaderMap {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/grpc"),
        );
        headers
    }

    #[test]
    fn from_body() {
        let response = Response::from(42_i64);
        assert!(response.headers().is_empty());
        assert_eq!(response.body(), &42);
        assert_eq!(response.into_body(), 42);
    }

    #[test]
    fn from_parts() {
        let response = Response::from_parts(Parts::new().set_headers(headers()), "abc");
        assert_eq!(response.headers(), &headers());
        let (parts, body) = response.into_parts();
        assert_eq!(parts.headers, headers());
        assert_eq!(body, "abc");
    }

    #[test]
    fn map() {
        let response =
            Response::from_parts(Parts::new().set_headers(headers()), 7_u32).map(|v| v * 2);
        assert_eq!(response.headers(), &headers());
        assert_eq!(response.body(), &14);
    }
}
