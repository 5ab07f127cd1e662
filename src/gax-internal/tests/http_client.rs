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

//! Verify the HTTP client sends the expected requests, and drives the retry
//! loop with the responses from a test server.

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use gax::backoff_policy::BackoffPolicy;
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::options::RequestOptions;
    use gax::retry_policy::{Aip194Strict, RetryPolicyExt};
    use gcs_gax_internal::http::{NoBody, ReqwestClient};
    use gcs_gax_internal::options::ClientConfig;
    use http::StatusCode;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/projects/p/locations/global/intelligenceConfig"),
                request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
            ])
            .respond_with(json_encoded(json!({"name": "projects/p/locations/global/intelligenceConfig"}))),
        );
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(
            reqwest::Method::GET,
            "/v2/projects/p/locations/global/intelligenceConfig".into(),
        );
        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(
            response.into_body(),
            json!({"name": "projects/p/locations/global/intelligenceConfig"})
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn user_agent() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/agent"),
                request::headers(contains(("user-agent", "test-prefix/1.2.3"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/agent".into());
        let mut options = RequestOptions::default();
        options.set_user_agent("test-prefix/1.2.3");
        let _ = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn no_retry_immediate_failure() -> Result<()> {
        let server = start(vec![permanent()]);
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(
                builder,
                Some(json!({})),
                RequestOptions::default(),
            )
            .await
            .expect_err("the server returns an error");
        assert_eq!(err.http_status_code(), Some(StatusCode::BAD_REQUEST.as_u16()));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_success() -> Result<()> {
        let server = start(vec![transient(), transient(), success()]);
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(
                builder,
                Some(json!({})),
                retry_options(true),
            )
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_not_idempotent() -> Result<()> {
        let server = start(vec![transient()]);
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(
                builder,
                Some(json!({})),
                retry_options(false),
            )
            .await
            .expect_err("non-idempotent requests are not retried");
        assert_eq!(
            err.http_status_code(),
            Some(StatusCode::SERVICE_UNAVAILABLE.as_u16())
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_exhausted() -> Result<()> {
        let server = start(vec![transient(), transient(), transient()]);
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(
                builder,
                Some(json!({})),
                retry_options(true),
            )
            .await
            .expect_err("the retry policy is exhausted");
        assert_eq!(
            err.http_status_code(),
            Some(StatusCode::SERVICE_UNAVAILABLE.as_u16())
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn attempt_timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/slow"))
                .times(..)
                .respond_with(delay_and_then(
                    Duration::from_millis(500),
                    json_encoded(json!({})),
                )),
        );
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/slow".into());
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(20));
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await
            .expect_err("the request times out");
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    fn retry_options(idempotent: bool) -> RequestOptions {
        let mut options = RequestOptions::default();
        options.set_retry_policy(Aip194Strict.with_attempt_limit(3));
        options.set_backoff_policy(test_backoff());
        options.set_idempotency(idempotent);
        options
    }

    fn success() -> (StatusCode, String) {
        let response = json!({
            "status": "done"
        });
        (StatusCode::OK, response.to_string())
    }

    fn transient() -> (StatusCode, String) {
        let status = json!({"error": {
            "code": StatusCode::SERVICE_UNAVAILABLE.as_u16(),
            "status": "UNAVAILABLE",
            "message": "try-again",
        }});
        (StatusCode::SERVICE_UNAVAILABLE, status.to_string())
    }

    fn permanent() -> (StatusCode, String) {
        let status = json!({"error": {
            "code": StatusCode::BAD_REQUEST.as_u16(),
            "status": "INVALID_ARGUMENT",
            "message": "uh-oh",
        }});
        (StatusCode::BAD_REQUEST, status.to_string())
    }

    fn test_config() -> ClientConfig {
        use google_cloud_auth::credentials::anonymous::Builder as Anonymous;
        let mut config = ClientConfig::default();
        config.cred = Anonymous::new().build().into();
        config
    }

    fn test_backoff() -> impl BackoffPolicy {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .clamp()
    }

    fn start(responses: Vec<(StatusCode, String)>) -> Server {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/retry"))
                .times(responses.len())
                .respond_with(cycle(
                    responses
                        .into_iter()
                        .map(|(status, body)| to_responder(status, body))
                        .collect(),
                )),
        );
        server
    }

    fn to_responder(status: StatusCode, response: String) -> Box<dyn Responder> {
        Box::new(
            status_code(status.as_u16())
                .insert_header("Content-Type", "application/json")
                .body(response),
        )
    }
}
