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

//! Implements the common features of all gRPC-based clients.

mod from_status;

use crate::options::{ClientConfig, Credentials};
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::exponential_backoff::ExponentialBackoff;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::{Aip194Strict, PollingErrorPolicy};
use gax::response::{Parts, Response};
use gax::retry_policy::RetryPolicy;
use gax::retry_throttler::SharedRetryThrottler;
use http::HeaderMap;
use std::sync::Arc;
use std::time::Duration;

pub use from_status::to_gax_error;

#[doc(hidden)]
pub type InnerClient = tonic::client::Grpc<tonic::transport::Channel>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct Client {
    inner: InnerClient,
    credentials: Credentials,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    retry_throttler: SharedRetryThrottler,
    polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl Client {
    /// Create a new client.
    ///
    /// The connection is established lazily, on the first request.
    pub async fn new(
        config: ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let credentials = crate::options::credentials(&config)?;
        let inner = Self::make_inner(config.endpoint.clone(), default_endpoint)?;
        tracing::debug!(
            endpoint = config.endpoint.as_deref().unwrap_or(default_endpoint),
            "created gRPC client"
        );
        Ok(Self {
            inner,
            credentials,
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
            retry_throttler: config.retry_throttler,
            polling_error_policy: config.polling_error_policy,
            polling_backoff_policy: config.polling_backoff_policy,
        })
    }

    /// Sends a request.
    pub async fn execute<Request, Resp>(
        &self,
        method: tonic::GrpcMethod<'static>,
        path: http::uri::PathAndQuery,
        request: Request,
        options: gax::options::RequestOptions,
        api_client_header: &str,
        request_params: &str,
    ) -> Result<Response<Resp>>
    where
        Request: prost::Message + Clone + 'static,
        Resp: prost::Message + Default + 'static,
    {
        let headers = Self::make_headers(api_client_header, request_params, &options)?;
        match self.get_retry_policy(&options) {
            None => {
                let mut inner = self.inner.clone();
                Self::request_attempt::<Request, Resp>(
                    &mut inner,
                    &self.credentials,
                    method,
                    path,
                    request,
                    &options,
                    None,
                    headers,
                )
                .await
            }
            Some(policy) => {
                self.retry_loop::<Request, Resp>(policy, method, path, request, options, headers)
                    .await
            }
        }
    }

    async fn retry_loop<Request, Resp>(
        &self,
        retry_policy: Arc<dyn RetryPolicy>,
        method: tonic::GrpcMethod<'static>,
        path: http::uri::PathAndQuery,
        request: Request,
        options: gax::options::RequestOptions,
        headers: HeaderMap,
    ) -> Result<Response<Resp>>
    where
        Request: prost::Message + Clone + 'static,
        Resp: prost::Message + Default + 'static,
    {
        let idempotent = options.idempotent().unwrap_or(false);
        let retry_throttler = self.get_retry_throttler(&options);
        let backoff_policy = self.get_backoff_policy(&options);
        let options = &options;
        let credentials = &self.credentials;
        let inner = |remaining_time: Option<Duration>| {
            let mut inner = self.inner.clone();
            let method = method.clone();
            let path = path.clone();
            let request = request.clone();
            let headers = headers.clone();
            async move {
                Self::request_attempt::<Request, Resp>(
                    &mut inner,
                    credentials,
                    method,
                    path,
                    request,
                    options,
                    remaining_time,
                    headers,
                )
                .await
            }
        };
        let sleep = tokio::time::sleep;
        gax::retry_loop_internal::retry_loop(
            inner,
            sleep,
            idempotent,
            retry_throttler,
            retry_policy,
            backoff_policy,
        )
        .await
    }

    /// Makes a single request attempt.
    #[allow(clippy::too_many_arguments)]
    async fn request_attempt<Request, Resp>(
        inner: &mut InnerClient,
        credentials: &Credentials,
        method: tonic::GrpcMethod<'static>,
        path: http::uri::PathAndQuery,
        request: Request,
        options: &gax::options::RequestOptions,
        remaining_time: Option<Duration>,
        headers: HeaderMap,
    ) -> Result<Response<Resp>>
    where
        Request: prost::Message + 'static,
        Resp: prost::Message + Default + 'static,
    {
        let mut headers = headers;
        headers.extend(crate::options::auth_headers(credentials).await?);
        let mut extensions = tonic::Extensions::new();
        extensions.insert(method);
        let metadata = tonic::metadata::MetadataMap::from_headers(headers);
        let mut request = tonic::Request::from_parts(metadata, extensions, request);
        if let Some(timeout) = gax::retry_loop_internal::effective_timeout(options, remaining_time)
        {
            request.set_timeout(timeout);
        }
        let codec = tonic_prost::ProstCodec::<Request, Resp>::default();
        inner.ready().await.map_err(Error::io)?;
        let response = inner
            .unary(request, path, codec)
            .await
            .map_err(to_gax_error)?;
        let (metadata, body, _extensions) = response.into_parts();
        Ok(Response::from_parts(
            Parts::new().set_headers(metadata.into_headers()),
            body,
        ))
    }

    fn make_inner(
        endpoint: Option<String>,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<InnerClient> {
        use tonic::transport::{ClientTlsConfig, Endpoint};
        let endpoint = endpoint.unwrap_or_else(|| default_endpoint.to_string());
        let secure = endpoint.starts_with("https:");
        let mut endpoint = Endpoint::from_shared(endpoint).map_err(BuilderError::transport)?;
        if secure {
            endpoint = endpoint
                .tls_config(ClientTlsConfig::new().with_enabled_roots())
                .map_err(BuilderError::transport)?;
        }
        Ok(tonic::client::Grpc::new(endpoint.connect_lazy()))
    }

    fn make_headers(
        api_client_header: &str,
        request_params: &str,
        options: &gax::options::RequestOptions,
    ) -> Result<HeaderMap> {
        use http::header::{HeaderName, HeaderValue};
        let mut headers = HeaderMap::new();
        headers.append(
            HeaderName::from_static("x-goog-api-client"),
            HeaderValue::from_str(api_client_header).map_err(Error::ser)?,
        );
        if !request_params.is_empty() {
            headers.append(
                HeaderName::from_static("x-goog-request-params"),
                HeaderValue::from_str(request_params).map_err(Error::ser)?,
            );
        }
        if let Some(user_agent) = options.user_agent() {
            headers.append(
                http::header::USER_AGENT,
                HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        Ok(headers)
    }

    fn get_retry_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> Option<Arc<dyn RetryPolicy>> {
        options
            .retry_policy()
            .clone()
            .or_else(|| self.retry_policy.clone())
    }

    fn get_backoff_policy(&self, options: &gax::options::RequestOptions) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }

    fn get_retry_throttler(&self, options: &gax::options::RequestOptions) -> SharedRetryThrottler {
        options
            .retry_throttler()
            .clone()
            .unwrap_or_else(|| self.retry_throttler.clone())
    }

    /// The polling error policy for long-running operations.
    pub fn get_polling_error_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> Arc<dyn PollingErrorPolicy> {
        options
            .polling_error_policy()
            .clone()
            .or_else(|| self.polling_error_policy.clone())
            .unwrap_or_else(|| Arc::new(Aip194Strict))
    }

    /// The polling backoff policy for long-running operations.
    pub fn get_polling_backoff_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> Arc<dyn PollingBackoffPolicy> {
        options
            .polling_backoff_policy()
            .clone()
            .or_else(|| self.polling_backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::options::RequestOptions;
    use gax::polling_error_policy::AlwaysContinue;

    fn test_config() -> ClientConfig {
        let mut config = ClientConfig::default();
        config.cred = Some(google_cloud_auth::credentials::anonymous::Builder::new().build());
        config
    }

    #[tokio::test]
    async fn lazy_connect() -> anyhow::Result<()> {
        // Nothing listens on this port, the client connects on first use.
        let mut config = test_config();
        config.endpoint = Some("http://127.0.0.1:1".into());
        let _client = Client::new(config, "https://storage.googleapis.com").await?;
        Ok(())
    }

    #[tokio::test]
    async fn bad_endpoint() {
        let mut config = test_config();
        config.endpoint = Some("not a valid uri \n".into());
        let got = Client::new(config, "https://storage.googleapis.com").await;
        assert!(matches!(got, Err(ref e) if e.is_transport()), "{got:?}");
    }

    #[test]
    fn headers() -> anyhow::Result<()> {
        let mut options = RequestOptions::default();
        options.set_user_agent("test-agent/1.0");
        let got = Client::make_headers("gl-rust/1.0", "bucket=projects/_/buckets/b", &options)?;
        assert_eq!(
            got.get("x-goog-api-client").and_then(|v| v.to_str().ok()),
            Some("gl-rust/1.0")
        );
        assert_eq!(
            got.get("x-goog-request-params")
                .and_then(|v| v.to_str().ok()),
            Some("bucket=projects/_/buckets/b")
        );
        assert_eq!(
            got.get(http::header::USER_AGENT)
                .and_then(|v| v.to_str().ok()),
            Some("test-agent/1.0")
        );

        let got = Client::make_headers("gl-rust/1.0", "", &RequestOptions::default())?;
        assert!(got.get("x-goog-request-params").is_none(), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn polling_policies() -> anyhow::Result<()> {
        let mut config = test_config();
        config.endpoint = Some("http://127.0.0.1:1".into());
        config.polling_error_policy = Some(Arc::new(AlwaysContinue));
        let client = Client::new(config, "https://storage.googleapis.com").await?;
        let policy = client.get_polling_error_policy(&RequestOptions::default());
        assert!(format!("{policy:?}").contains("AlwaysContinue"), "{policy:?}");

        let mut options = RequestOptions::default();
        options.set_polling_error_policy(Aip194Strict);
        let policy = client.get_polling_error_policy(&options);
        assert!(format!("{policy:?}").contains("Aip194Strict"), "{policy:?}");
        Ok(())
    }
}
