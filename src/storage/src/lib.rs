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

//! Google Cloud Client Libraries for Rust - Storage
//!
//! This crate contains traits, types, and functions to interact with [Google
//! Cloud Storage]. Most applications will use the structs defined in the
//! [client] module. More specifically:
//!
//! * [Storage][client::Storage] manages buckets, objects, notification
//!   configurations, and HMAC keys.
//! * [StorageControl][client::StorageControl] manages folders, managed
//!   folders, Anywhere Caches, and intelligence configurations.
//!
//! The [name] module parses and formats the resource names used by these
//! services.
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! [Google Cloud Storage]: https://cloud.google.com/storage

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod builder_ext;
pub mod client;
pub mod model;
pub mod name;
pub mod stub;

mod convert;
pub(crate) mod tracing;
pub(crate) mod transport;

#[doc(hidden)]
pub mod google {
    pub mod storage {
        pub mod v2 {
            include!("generated/protos/google.storage.v2.rs");
        }
        pub mod control {
            pub mod v2 {
                include!("generated/protos/google.storage.control.v2.rs");
            }
        }
    }
    pub mod iam {
        pub mod v1 {
            include!("generated/protos/google.iam.v1.rs");
        }
    }
    pub mod r#type {
        include!("generated/protos/google.type.rs");
    }
    pub mod longrunning {
        include!("generated/protos/google.longrunning.rs");
    }
    pub mod rpc {
        pub use gaxi::google::rpc::*;
    }
}

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        pub(crate) static ref X_GOOG_API_CLIENT_HEADER: String = {
            let ac = gaxi::api_header::XGoogApiClient{
                name:          NAME,
                version:       VERSION,
                library_type:  gaxi::api_header::GAPIC,
            };
            ac.grpc_header_value()
        };

        pub(crate) static ref X_GOOG_API_CLIENT_REST_HEADER: String = {
            let ac = gaxi::api_header::XGoogApiClient{
                name:          NAME,
                version:       VERSION,
                library_type:  gaxi::api_header::GAPIC,
            };
            ac.rest_header_value()
        };
    }
}
