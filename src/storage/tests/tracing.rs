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

//! Verify the clients emit spans when tracing is enabled.

#[cfg(test)]
mod tests {
    use gcs_storage::client::StorageControl;
    use google_cloud_auth::credentials::anonymous::Builder as Anonymous;
    use scoped_env::ScopedEnv;
    use serial_test::serial;
    use std::sync::{Arc, Mutex};
    use storage_grpc_mock::google::storage::control::v2 as control;
    use storage_grpc_mock::{MockStorageControl, start};
    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::fmt::format::FmtSpan;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            let buffer = self.0.lock().expect("test mutex");
            String::from_utf8_lossy(&buffer).into_owned()
        }
    }

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("test mutex").extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;
        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture() -> (Capture, tracing::subscriber::DefaultGuard) {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    async fn get_folder(client: &StorageControl) -> anyhow::Result<()> {
        let got = client
            .get_folder()
            .set_name("projects/_/buckets/test-bucket/folders/a/")
            .send()
            .await?;
        assert_eq!(got.name, "test-folder-name");
        Ok(())
    }

    fn folder() -> control::Folder {
        control::Folder {
            name: "test-folder-name".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    #[serial]
    async fn enabled_by_environment() -> anyhow::Result<()> {
        let _e = ScopedEnv::set("GOOGLE_CLOUD_RUST_LOGGING", "true");
        let (capture, _guard) = capture();
        let mock = MockStorageControl::new();
        mock.add_response(folder());
        let (endpoint, _server) = start("127.0.0.1:0", mock.clone()).await?;
        let client = StorageControl::builder()
            .with_endpoint(endpoint)
            .with_credentials(Anonymous::new().build())
            .build()
            .await?;
        get_folder(&client).await?;

        let contents = capture.contents();
        assert!(contents.contains("get_folder"), "{contents}");
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn enabled_by_builder() -> anyhow::Result<()> {
        let (capture, _guard) = capture();
        let mock = MockStorageControl::new();
        mock.add_response(folder());
        mock.add_error(tonic::Status::not_found("test-only"));
        let (endpoint, _server) = start("127.0.0.1:0", mock.clone()).await?;
        let client = StorageControl::builder()
            .with_endpoint(endpoint)
            .with_credentials(Anonymous::new().build())
            .with_tracing()
            .build()
            .await?;
        get_folder(&client).await?;
        let err = get_folder(&client).await.unwrap_err();
        assert!(format!("{err}").contains("test-only"), "{err}");

        let contents = capture.contents();
        assert!(contents.contains("get_folder"), "{contents}");
        assert!(contents.contains("test-only"), "{contents}");
        Ok(())
    }
}
