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

//! End-to-end mocks for the Cloud Storage gRPC services.
//!
//! Use this crate for end-to-end client library tests. Start a local server
//! implementing `google.storage.v2.Storage` or
//! `google.storage.control.v2.StorageControl`, with responses taken from a
//! queue of canned results. Then test the client library against this server.
//!
//! # Example
//! ```
//! use gcs_storage_grpc_mock::{MockStorage, google::storage::v2, start};
//! # tokio_test::block_on(async {
//! let mock = MockStorage::new();
//! mock.add_response(v2::Bucket {
//!     name: "projects/_/buckets/test-bucket".into(),
//!     ..Default::default()
//! });
//! mock.add_error(tonic::Status::not_found("test message"));
//! // Starts a service using `mock` and a random port.
//! let (endpoint, _server) = start("127.0.0.1:0", mock.clone()).await?;
//! // ... the test goes here, then inspect what the service received.
//! assert!(mock.requests().is_empty());
//! # anyhow::Ok(()) });
//! ```

mod mocks;
use google::longrunning::operations_server::OperationsServer;
use google::storage::control::v2::storage_control_server::StorageControlServer;
use google::storage::v2::storage_server::StorageServer;
pub use mocks::{Canned, Received};
use mocks::Queue;
use std::net::SocketAddr;
use tokio::task::JoinHandle;
use tonic::service::Routes;

macro_rules! mock_api {
    ($mock:ident) => {
        impl $mock {
            pub fn new() -> Self {
                Self::default()
            }

            /// Queues `response`, returned by the next call.
            pub fn add_response<T: std::any::Any + Send>(&self, response: T) {
                self.queue.push(Canned::response(response));
            }

            /// Queues `status`, returned as the error of the next call.
            pub fn add_error(&self, status: tonic::Status) {
                self.queue.push(Canned::error(status));
            }

            /// Replaces the queued results.
            pub fn set_responses(&self, canned: impl IntoIterator<Item = Canned>) {
                self.queue.set(canned);
            }

            /// Discards the queued results and the received requests.
            pub fn reset(&self) {
                self.queue.reset();
            }

            /// The requests received so far, in order.
            pub fn requests(&self) -> Vec<Received> {
                self.queue.received()
            }
        }
    };
}

/// A mock for the `google.storage.v2.Storage` gRPC service.
///
/// Clones share the same queue. Keep a clone to add responses or inspect the
/// requests after calling [start].
#[derive(Clone, Default)]
pub struct MockStorage {
    queue: Queue,
}
mock_api!(MockStorage);

/// A mock for the `google.storage.control.v2.StorageControl` gRPC service.
///
/// The mock also serves `google.longrunning.Operations`, see
/// [operations()][MockStorageControl::operations].
#[derive(Clone, Default)]
pub struct MockStorageControl {
    queue: Queue,
}
mock_api!(MockStorageControl);

impl MockStorageControl {
    /// A mock for `google.longrunning.Operations` sharing this mock's queue.
    pub fn operations(&self) -> MockOperations {
        MockOperations {
            queue: self.queue.clone(),
        }
    }
}

/// A mock for the `google.longrunning.Operations` gRPC service.
#[derive(Clone, Default)]
pub struct MockOperations {
    queue: Queue,
}
mock_api!(MockOperations);

impl From<MockStorage> for Routes {
    fn from(mock: MockStorage) -> Self {
        Routes::new(StorageServer::new(mock))
    }
}

impl From<MockStorageControl> for Routes {
    fn from(mock: MockStorageControl) -> Self {
        let operations = mock.operations();
        Routes::new(StorageControlServer::new(mock)).add_service(OperationsServer::new(operations))
    }
}

impl From<MockOperations> for Routes {
    fn from(mock: MockOperations) -> Self {
        Routes::new(OperationsServer::new(mock))
    }
}

/// Starts the mock services on `address`.
///
/// Returns the endpoint, as `http://host:port`, and the task running the
/// server. Use port `0` to pick a random port.
pub async fn start(
    address: &str,
    services: impl Into<Routes>,
) -> anyhow::Result<(String, JoinHandle<()>)> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    let addr = listener.local_addr()?;
    let routes = services.into();

    let server = tokio::spawn(async move {
        let stream = tokio_stream::wrappers::TcpListenerStream::new(listener);
        let _ = tonic::transport::Server::builder()
            .add_routes(routes)
            .serve_with_incoming(stream)
            .await;
    });

    Ok((to_uri(addr), server))
}

fn to_uri(addr: SocketAddr) -> String {
    if addr.is_ipv6() {
        format!("http://[{}]:{}", addr.ip(), addr.port())
    } else {
        format!("http://{}:{}", addr.ip(), addr.port())
    }
}

/// The message types and generated servers for the mocked services.
#[allow(clippy::large_enum_variant)]
pub mod google {
    pub mod iam {
        pub mod v1 {
            include!("generated/protos/google.iam.v1.rs");
        }
    }
    pub mod longrunning {
        include!("generated/protos/google.longrunning.rs");
    }
    pub mod rpc {
        include!("generated/protos/google.rpc.rs");
    }
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
    pub mod r#type {
        include!("generated/protos/google.r#type.rs");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use test_case::test_case;

    #[test_case("127.0.0.1:12345", "http://127.0.0.1:12345")]
    #[test_case("[::1]:12345", "http://[::1]:12345")]
    fn format(input: &str, want: &str) -> anyhow::Result<()> {
        let got = to_uri(SocketAddr::from_str(input)?);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn operations_share_queue() {
        use google::longrunning::{GetOperationRequest, Operation};
        let mock = MockStorageControl::new();
        mock.operations()
            .add_error(tonic::Status::internal("shared"));
        let got = mock.queue.serve::<_, Operation>(
            "GetOperation",
            tonic::Request::new(GetOperationRequest::default()),
        );
        assert_eq!(got.err().map(|s| s.code()), Some(tonic::Code::Internal));
        assert_eq!(mock.requests().len(), 1);
        mock.operations().reset();
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn dispatch_through_service_trait() -> anyhow::Result<()> {
        use google::storage::control::v2::storage_control_server::StorageControl;
        use google::storage::control::v2::{Folder, GetFolderRequest};
        let mock = MockStorageControl::new();
        mock.add_response(Folder {
            name: "test-folder".into(),
            ..Default::default()
        });
        let request = tonic::Request::new(GetFolderRequest {
            name: "test-folder".into(),
            ..Default::default()
        });
        let response = mock.get_folder(request).await?;
        assert_eq!(response.into_inner().name, "test-folder");
        let methods = mock
            .requests()
            .iter()
            .map(|r| r.method().to_string())
            .collect::<Vec<_>>();
        assert_eq!(methods, vec!["GetFolder"]);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_method() -> anyhow::Result<()> {
        use google::storage::v2::{Bucket, GetBucketRequest};
        let mock = MockStorage::new();
        let (endpoint, _server) = start("127.0.0.1:0", mock.clone()).await?;
        let channel = tonic::transport::Channel::from_shared(endpoint)?
            .connect()
            .await?;
        let mut grpc = tonic::client::Grpc::new(channel);
        grpc.ready().await?;
        let codec = tonic_prost::ProstCodec::<GetBucketRequest, Bucket>::default();
        let path = http::uri::PathAndQuery::from_static("/google.storage.v2.Storage/NotAMethod");
        let status = match grpc
            .unary(tonic::Request::new(GetBucketRequest::default()), path, codec)
            .await
        {
            Ok(r) => panic!("expected an error, got={r:?}"),
            Err(s) => s,
        };
        assert_eq!(status.code(), tonic::Code::Unimplemented);
        assert!(mock.requests().is_empty());
        Ok(())
    }
}
