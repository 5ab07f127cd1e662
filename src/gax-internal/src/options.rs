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

pub use google_cloud_auth::credentials::Credentials;

/// The client configuration for [crate::http::ReqwestClient] and [crate::grpc::Client].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

pub(crate) const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

/// Returns true if the environment or the client configuration enables tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Returns the credentials in the configuration, or the default credentials.
pub(crate) fn credentials(config: &ClientConfig) -> gax::client_builder::Result<Credentials> {
    if let Some(c) = config.cred.clone() {
        return Ok(c);
    }
    google_cloud_auth::credentials::Builder::default()
        .build()
        .map_err(gax::client_builder::Error::cred)
}

/// Fetches the authentication headers for one request attempt.
pub(crate) async fn auth_headers(credentials: &Credentials) -> gax::Result<http::HeaderMap> {
    use google_cloud_auth::credentials::CacheableResource;
    match credentials
        .headers(http::Extensions::new())
        .await
        .map_err(gax::error::Error::authentication)?
    {
        CacheableResource::New { data, .. } => Ok(data),
        CacheableResource::NotModified => Err(gax::error::Error::authentication(
            "credentials returned NotModified without an entity tag",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;

    #[test]
    #[serial_test::serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
        let mut config = ClientConfig::default();
        config.tracing = true;
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::default();
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
    }

    #[test]
    fn configured_credentials() -> anyhow::Result<()> {
        let mut config = ClientConfig::default();
        config.cred = Some(google_cloud_auth::credentials::anonymous::Builder::new().build());
        let _ = credentials(&config)?;
        Ok(())
    }

    #[tokio::test]
    async fn anonymous_headers() -> anyhow::Result<()> {
        let credentials = google_cloud_auth::credentials::anonymous::Builder::new().build();
        let headers = auth_headers(&credentials).await?;
        assert!(
            headers.get(http::header::AUTHORIZATION).is_none(),
            "{headers:?}"
        );
        Ok(())
    }
}
