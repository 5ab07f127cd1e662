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

//! Verify the HTTP-JSON transport for the intelligence config RPCs.

#[cfg(test)]
mod tests {
    use gax::error::rpc::Code;
    use gcs_storage::client::StorageControl;
    use gcs_storage::model::{IntelligenceConfig, intelligence_config::EditionConfig};
    use google_cloud_auth::credentials::anonymous::Builder as Anonymous;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use test_case::test_case;

    const PROJECT: &str = "projects/test-project/locations/global/intelligenceConfig";
    const FOLDER: &str = "folders/123/locations/global/intelligenceConfig";
    const ORGANIZATION: &str = "organizations/456/locations/global/intelligenceConfig";

    async fn new_client(server: &Server) -> anyhow::Result<StorageControl> {
        let client = StorageControl::http_builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(Anonymous::new().build())
            .build()
            .await?;
        Ok(client)
    }

    fn expect_get(server: &Server, name: &str) {
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v2/{name}")),
                request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                request::headers(contains(("x-goog-api-client", any()))),
            ])
            .respond_with(json_encoded(json!({
                "name": name,
                "editionConfig": 3,
            }))),
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_project() -> anyhow::Result<()> {
        let server = Server::run();
        expect_get(&server, PROJECT);
        let client = new_client(&server).await?;
        let got = client
            .get_project_intelligence_config()
            .set_name(PROJECT)
            .send()
            .await?;
        let want = IntelligenceConfig::new()
            .set_name(PROJECT)
            .set_edition_config(EditionConfig::Standard);
        assert_eq!(got, want);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_folder() -> anyhow::Result<()> {
        let server = Server::run();
        expect_get(&server, FOLDER);
        let client = new_client(&server).await?;
        let got = client
            .get_folder_intelligence_config()
            .set_name(FOLDER)
            .send()
            .await?;
        assert_eq!(got.name, FOLDER);
        assert_eq!(got.edition_config, EditionConfig::Standard);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_organization() -> anyhow::Result<()> {
        let server = Server::run();
        expect_get(&server, ORGANIZATION);
        let client = new_client(&server).await?;
        let got = client
            .get_organization_intelligence_config()
            .set_name(ORGANIZATION)
            .send()
            .await?;
        assert_eq!(got.name, ORGANIZATION);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_folder() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", format!("/v2/{FOLDER}")),
                request::query(url_decoded(contains(("updateMask", "edition_config,filter")))),
                request::query(url_decoded(contains(("requestId", "test-request-id")))),
                request::body(json_decoded(eq(json!({
                    "name": FOLDER,
                    "editionConfig": 5,
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": FOLDER,
                "editionConfig": 5,
            }))),
        );
        let client = new_client(&server).await?;
        let got = client
            .update_folder_intelligence_config()
            .set_intelligence_config(
                IntelligenceConfig::new()
                    .set_name(FOLDER)
                    .set_edition_config(EditionConfig::Trial),
            )
            .set_update_mask(wkt::FieldMask::default().set_paths(["edition_config", "filter"]))
            .set_request_id("test-request-id")
            .send()
            .await?;
        assert_eq!(got.edition_config, EditionConfig::Trial);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_populates_request_id() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", format!("/v2/{PROJECT}")),
                request::query(url_decoded(contains(("requestId", any())))),
                request::query(url_decoded(not(contains(("updateMask", any()))))),
            ])
            .respond_with(json_encoded(json!({"name": PROJECT}))),
        );
        let client = new_client(&server).await?;
        let got = client
            .update_project_intelligence_config()
            .set_intelligence_config(IntelligenceConfig::new().set_name(PROJECT))
            .send()
            .await?;
        assert_eq!(got.name, PROJECT);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", format!("/v2/{PROJECT}")))
                .respond_with(status_code(404).body(
                    json!({"error": {"code": 404, "message": "not here", "status": "NOT_FOUND"}})
                        .to_string(),
                )),
        );
        let client = new_client(&server).await?;
        let err = client
            .get_project_intelligence_config()
            .set_name(PROJECT)
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("not here"), "{err:?}");
        Ok(())
    }

    #[test_case(FOLDER; "wrong parent")]
    #[test_case("projects/test-project/buckets/b"; "not a config")]
    #[test_case(""; "empty")]
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_binding_error(name: &str) -> anyhow::Result<()> {
        // No expectations, the request must not be sent.
        let server = Server::run();
        let client = new_client(&server).await?;
        let err = client
            .get_project_intelligence_config()
            .set_name(name)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_missing_config() -> anyhow::Result<()> {
        let server = Server::run();
        let client = new_client(&server).await?;
        let err = client
            .update_organization_intelligence_config()
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(format!("{err}").contains("intelligence_config"), "{err}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn other_rpcs_not_available() -> anyhow::Result<()> {
        let server = Server::run();
        let client = new_client(&server).await?;
        let err = client
            .get_folder()
            .set_name("projects/_/buckets/test-bucket/folders/a/")
            .send()
            .await
            .unwrap_err();
        assert!(format!("{err}").contains("GetFolder is not available over HTTP-JSON"), "{err}");
        assert!(err.status().is_none(), "{err:?}");
        Ok(())
    }
}
