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

//! Builds the `x-goog-api-client` header.

/// Each client library creates one static instance of this struct and uses
/// it to lazily initialize the `x-goog-api-client` header value.
#[derive(Debug, PartialEq)]
pub struct XGoogApiClient {
    pub name: &'static str,
    pub library_type: &'static str,
    pub version: &'static str,
}

/// The library type for generated clients.
pub const GAPIC: &str = "gapic";
/// The library type for hand-crafted clients.
pub const GCCL: &str = "gccl";

mod build_info {
    // Written by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl XGoogApiClient {
    /// The header value for clients using HTTP and JSON.
    pub fn rest_header_value(&self) -> String {
        self.header_value("rest", "reqwest")
    }

    /// The header value for clients using gRPC.
    pub fn grpc_header_value(&self) -> String {
        self.header_value("grpc", "tonic")
    }

    fn header_value(&self, transport: &str, implementation: &str) -> String {
        // `RUSTC_VERSION` looks like `rustc 1.85.0 (...)`.
        let rustc_version = build_info::RUSTC_VERSION
            .strip_prefix("rustc ")
            .unwrap_or(build_info::RUSTC_VERSION);
        let rustc_version = rustc_version.split(' ').next().unwrap_or(rustc_version);
        let gax_version = build_info::PKG_VERSION;
        format!(
            "gl-rust/{rustc_version} gax/{gax_version} {transport}/{gax_version}-{implementation} {}/{}",
            self.library_type, self.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use test_case::test_case;

    fn breakdown(formatted: &str) -> HashMap<String, String> {
        formatted
            .split(' ')
            .filter_map(|v| v.split_once('/'))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    const HEADER: XGoogApiClient = XGoogApiClient {
        name: "unused",
        version: "1.2.3",
        library_type: GAPIC,
    };

    #[test_case(HEADER.rest_header_value(), "rest", "grpc"; "rest")]
    #[test_case(HEADER.grpc_header_value(), "grpc", "rest"; "grpc")]
    fn format(value: String, present: &str, absent: &str) {
        let fields = breakdown(&value);
        assert_eq!(fields.get(GAPIC).map(String::as_str), Some("1.2.3"));
        assert_eq!(
            fields.get("gax").map(String::as_str),
            Some(build_info::PKG_VERSION)
        );
        assert!(fields.contains_key(present), "{fields:?}");
        assert!(!fields.contains_key(absent), "{fields:?}");

        let got = fields.get("gl-rust");
        assert!(
            got.is_some_and(|s| !s.is_empty() && build_info::RUSTC_VERSION.contains(s.as_str())),
            "mismatched rustc version {} and {got:?}",
            build_info::RUSTC_VERSION
        );
    }

    #[test]
    fn transport_implementation() {
        let fields = breakdown(&HEADER.grpc_header_value());
        let want = format!("{}-tonic", build_info::PKG_VERSION);
        assert_eq!(fields.get("grpc"), Some(&want));
        let fields = breakdown(&HEADER.rest_header_value());
        let want = format!("{}-reqwest", build_info::PKG_VERSION);
        assert_eq!(fields.get("rest"), Some(&want));
    }
}
