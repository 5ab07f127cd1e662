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

//! Client construction.
//!
//! Each client type defines a `builder()` function returning a
//! [ClientBuilder]. The builder overrides the default endpoint, credentials,
//! and policies before creating the client:
//!
//! ```no_run
//! # use gcs_gax::client_builder::{ClientBuilder, Result};
//! # use gcs_gax::retry_policy::{Aip194Strict, RetryPolicyExt};
//! # async fn sample<F, Cr, C>(builder: ClientBuilder<F, Cr>) -> Result<C>
//! # where F: gcs_gax::client_builder::internal::ClientFactory<Client = C, Credentials = Cr> {
//! let client = builder
//!     .with_endpoint("https://storage.us-central1.rep.googleapis.com")
//!     .with_retry_policy(Aip194Strict.with_attempt_limit(5))
//!     .build()
//!     .await?;
//! # Ok(client) }
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling_error_policy::{PollingErrorPolicy, PollingErrorPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use crate::retry_throttler::{RetryThrottlerArg, SharedRetryThrottler};
use std::sync::Arc;

/// The result of building a client.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors creating a client.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// The default credentials could not be created.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// The transport could not be initialized, for example, because the
    /// endpoint is not a valid URI.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("cannot create the default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("cannot initialize the transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// `F` creates the client from the configuration, `Cr` is the credentials
/// type.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates the client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables logging of each RPC with `tracing`.
    ///
    /// Setting `GOOGLE_CLOUD_RUST_LOGGING=true` has the same effect.
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Sets the credentials. By default the clients use Application Default
    /// Credentials.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Sets the default retry policy for all requests.
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Sets the default backoff policy for all requests.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }

    /// Sets the retry throttler, shared by all the requests of the client.
    pub fn with_retry_throttler<V: Into<RetryThrottlerArg>>(mut self, v: V) -> Self {
        self.config.retry_throttler = v.into().into();
        self
    }

    /// Sets the default polling error policy for long-running operations.
    pub fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_error_policy = Some(v.into().0);
        self
    }

    /// Sets the default polling backoff policy for long-running operations.
    pub fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_backoff_policy = Some(v.into().0);
        self
    }
}

#[doc(hidden)]
pub mod internal {
    //! Used by the service clients, not part of the public API.
    use super::*;
    use std::future::Future;

    /// Creates a client from its configuration.
    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// The client configuration collected by [ClientBuilder].
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
        pub retry_throttler: SharedRetryThrottler,
        pub polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
        pub polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
    }

    impl<Cr> Default for ClientConfig<Cr> {
        fn default() -> Self {
            use crate::retry_throttler::AdaptiveThrottler;
            use std::sync::Mutex;
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
                retry_policy: None,
                backoff_policy: None,
                retry_throttler: Arc::new(Mutex::new(AdaptiveThrottler::default())),
                polling_error_policy: None,
                polling_backoff_policy: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use crate::exponential_backoff::ExponentialBackoff;
    use crate::polling_error_policy::{AlwaysContinue, PollingErrorPolicyExt};
    use crate::retry_policy::{AlwaysRetry, RetryPolicyExt};
    use crate::retry_throttler::CircuitBreaker;
    use std::error::Error as _;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct FakeCredentials(String);

    #[derive(Debug)]
    struct FakeClient(ClientConfig<FakeCredentials>);

    struct Factory;
    impl ClientFactory for Factory {
        type Client = FakeClient;
        type Credentials = FakeCredentials;
        async fn build(self, config: ClientConfig<FakeCredentials>) -> Result<FakeClient> {
            Ok(FakeClient(config))
        }
    }

    fn builder() -> ClientBuilder<Factory, FakeCredentials> {
        new_builder(Factory)
    }

    #[tokio::test]
    async fn defaults() -> anyhow::Result<()> {
        let config = builder().build().await?.0;
        assert_eq!(config.endpoint, None);
        assert_eq!(config.cred, None);
        assert!(!config.tracing);
        assert!(config.retry_policy.is_none(), "{config:?}");
        assert!(config.backoff_policy.is_none(), "{config:?}");
        assert!(config.polling_error_policy.is_none(), "{config:?}");
        assert!(config.polling_backoff_policy.is_none(), "{config:?}");
        assert!(
            format!("{config:?}").contains("AdaptiveThrottler"),
            "{config:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn overrides() -> anyhow::Result<()> {
        let config = builder()
            .with_endpoint("http://localhost:8080")
            .with_tracing()
            .with_credentials(FakeCredentials("test-only".into()))
            .with_retry_policy(AlwaysRetry.with_attempt_limit(3))
            .with_backoff_policy(ExponentialBackoff::default())
            .with_retry_throttler(CircuitBreaker::default())
            .with_polling_error_policy(AlwaysContinue.with_attempt_limit(3))
            .with_polling_backoff_policy(ExponentialBackoff::default())
            .build()
            .await?
            .0;
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:8080"));
        assert!(config.tracing);
        assert_eq!(config.cred, Some(FakeCredentials("test-only".into())));
        assert!(config.retry_policy.is_some(), "{config:?}");
        assert!(config.backoff_policy.is_some(), "{config:?}");
        assert!(config.polling_error_policy.is_some(), "{config:?}");
        assert!(config.polling_backoff_policy.is_some(), "{config:?}");
        assert!(
            format!("{config:?}").contains("CircuitBreaker"),
            "{config:?}"
        );
        Ok(())
    }

    #[test]
    fn errors() {
        let e = Error::cred("no credentials file");
        assert!(e.is_default_credentials(), "{e:?}");
        assert!(!e.is_transport(), "{e:?}");
        assert!(e.to_string().contains("credentials"), "{e}");
        assert!(e.source().is_some(), "{e:?}");

        let e = Error::transport("bad uri");
        assert!(e.is_transport(), "{e:?}");
        assert!(e.to_string().contains("transport"), "{e}");
    }
}
