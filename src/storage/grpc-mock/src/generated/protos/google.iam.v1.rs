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

/// Request message for `GetIamPolicy` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetIamPolicyRequest {
    #[prost(string, tag = "1")]
    pub resource: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub options: ::core::option::Option<GetPolicyOptions>,
}

/// Encapsulates settings provided to GetIamPolicy.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPolicyOptions {
    #[prost(int32, tag = "1")]
    pub requested_policy_version: i32,
}

/// Request message for `SetIamPolicy` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetIamPolicyRequest {
    #[prost(string, tag = "1")]
    pub resource: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub policy: ::core::option::Option<Policy>,
    #[prost(message, optional, tag = "3")]
    pub update_mask: ::core::option::Option<::prost_types::FieldMask>,
}

/// An Identity and Access Management (IAM) policy, which specifies access
/// controls for Google Cloud resources.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Policy {
    #[prost(int32, tag = "1")]
    pub version: i32,
    #[prost(message, repeated, tag = "4")]
    pub bindings: ::prost::alloc::vec::Vec<Binding>,
    #[prost(bytes = "bytes", tag = "3")]
    pub etag: ::prost::bytes::Bytes,
}

/// Associates `members`, or principals, with a `role`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Binding {
    #[prost(string, tag = "1")]
    pub role: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub members: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "3")]
    pub condition: ::core::option::Option<super::super::r#type::Expr>,
}

/// Request message for `TestIamPermissions` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TestIamPermissionsRequest {
    #[prost(string, tag = "1")]
    pub resource: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub permissions: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

/// Response message for `TestIamPermissions` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TestIamPermissionsResponse {
    #[prost(string, repeated, tag = "1")]
    pub permissions: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

impl ::prost::Name for GetIamPolicyRequest {
    const NAME: &'static str = "GetIamPolicyRequest";
    const PACKAGE: &'static str = "google.iam.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "google.iam.v1.GetIamPolicyRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.iam.v1.GetIamPolicyRequest".into()
    }
}

impl ::prost::Name for GetPolicyOptions {
    const NAME: &'static str = "GetPolicyOptions";
    const PACKAGE: &'static str = "google.iam.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "google.iam.v1.GetPolicyOptions".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.iam.v1.GetPolicyOptions".into()
    }
}

impl ::prost::Name for SetIamPolicyRequest {
    const NAME: &'static str = "SetIamPolicyRequest";
    const PACKAGE: &'static str = "google.iam.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "google.iam.v1.SetIamPolicyRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.iam.v1.SetIamPolicyRequest".into()
    }
}

impl ::prost::Name for Policy {
    const NAME: &'static str = "Policy";
    const PACKAGE: &'static str = "google.iam.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "google.iam.v1.Policy".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.iam.v1.Policy".into()
    }
}

impl ::prost::Name for Binding {
    const NAME: &'static str = "Binding";
    const PACKAGE: &'static str = "google.iam.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "google.iam.v1.Binding".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.iam.v1.Binding".into()
    }
}

impl ::prost::Name for TestIamPermissionsRequest {
    const NAME: &'static str = "TestIamPermissionsRequest";
    const PACKAGE: &'static str = "google.iam.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "google.iam.v1.TestIamPermissionsRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.iam.v1.TestIamPermissionsRequest".into()
    }
}

impl ::prost::Name for TestIamPermissionsResponse {
    const NAME: &'static str = "TestIamPermissionsResponse";
    const PACKAGE: &'static str = "google.iam.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "google.iam.v1.TestIamPermissionsResponse".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/google.iam.v1.TestIamPermissionsResponse".into()
    }
}
