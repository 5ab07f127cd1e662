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

#[cfg(all(test, feature = "_internal-grpc-client"))]
mod tests {
    use gax::options::RequestOptions;
    use gcs_gax_internal::grpc::Client;
    use gcs_gax_internal::options::ClientConfig;

    // Any message works, the server is never reached.
    type Message = gcs_gax_internal::google::rpc::ErrorInfo;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn connection_refused() -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);

        let mut config = ClientConfig::default();
        config.cred = google_cloud_auth::credentials::anonymous::Builder::new()
            .build()
            .into();
        config.endpoint = Some(format!("http://{addr}"));
        let client = Client::new(config, "https://storage.googleapis.com").await?;

        let got = client
            .execute::<Message, Message>(
                tonic::GrpcMethod::new("test.v1.Service", "Method"),
                http::uri::PathAndQuery::from_static("/test.v1.Service/Method"),
                Message::default(),
                RequestOptions::default(),
                "gl-rust/test",
                "",
            )
            .await;
        let err = got.expect_err("nothing listens on the endpoint");
        let unavailable = err
            .status()
            .is_some_and(|s| s.code == gax::error::rpc::Code::Unavailable);
        assert!(err.is_io() || err.is_transport() || unavailable, "{err:?}");
        Ok(())
    }
}
