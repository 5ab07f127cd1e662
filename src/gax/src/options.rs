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

//! Request options.
//!
//! Each client method returns a request builder. All request builders
//! implement [RequestOptionsBuilder], where applications can override the
//! client defaults for a single call: the idempotency, the attempt timeout,
//! and the retry and polling policies.

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling_error_policy::{PollingErrorPolicy, PollingErrorPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use crate::retry_throttler::{RetryThrottlerArg, SharedRetryThrottler};
use std::sync::Arc;
use std::time::Duration;

/// Options that apply to a single request.
///
/// Unset options fall back to the client configuration, and then to the
/// library defaults.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    retry_throttler: Option<SharedRetryThrottler>,
    polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl RequestOptions {
    /// Gets the idempotency, `None` means the RPC default applies.
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// Treats the RPC as idempotent, or not, regardless of its default.
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    pub(crate) fn set_default_idempotency(&mut self, default: bool) {
        self.idempotent.get_or_insert(default);
    }

    /// Appends `v` to the `user-agent` header.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the extra `user-agent` prefix.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for each attempt of the RPC.
    ///
    /// The retry loop may use a shorter timeout if the retry policy has less
    /// time remaining.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    /// Gets the retry policy override.
    pub fn retry_policy(&self) -> &Option<Arc<dyn RetryPolicy>> {
        &self.retry_policy
    }

    /// Sets the retry policy for this request.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Some(v.into().into());
    }

    /// Gets the backoff policy override.
    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    /// Sets the backoff policy for this request.
    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }

    /// Gets the retry throttler override.
    pub fn retry_throttler(&self) -> &Option<SharedRetryThrottler> {
        &self.retry_throttler
    }

    /// Sets the retry throttler for this request.
    pub fn set_retry_throttler<V: Into<RetryThrottlerArg>>(&mut self, v: V) {
        self.retry_throttler = Some(v.into().into());
    }

    /// Gets the polling error policy override.
    pub fn polling_error_policy(&self) -> &Option<Arc<dyn PollingErrorPolicy>> {
        &self.polling_error_policy
    }

    /// Sets the polling error policy for this request.
    pub fn set_polling_error_policy<V: Into<PollingErrorPolicyArg>>(&mut self, v: V) {
        self.polling_error_policy = Some(v.into().0);
    }

    /// Gets the polling backoff policy override.
    pub fn polling_backoff_policy(&self) -> &Option<Arc<dyn PollingBackoffPolicy>> {
        &self.polling_backoff_policy
    }

    /// Sets the polling backoff policy for this request.
    pub fn set_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(&mut self, v: V) {
        self.polling_backoff_policy = Some(v.into().0);
    }
}

/// Implemented by all request builders.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Overrides the default idempotency of the RPC.
    fn with_idempotency(self, v: bool) -> Self;

    /// Sets the `user-agent` prefix.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets the retry policy.
    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self;

    /// Sets the backoff policy.
    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self;

    /// Sets the retry throttler.
    fn with_retry_throttler<V: Into<RetryThrottlerArg>>(self, v: V) -> Self;

    /// Sets the polling error policy, only used by long-running operations.
    fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(self, v: V) -> Self;

    /// Sets the polling backoff policy, only used by long-running operations.
    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! Implementation details used by the generated clients. Not part of the
    //! public API.
    use super::RequestOptions;

    /// Request builders expose their options through this trait.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    /// Sets the idempotency unless the application already set it.
    pub fn set_default_idempotency(mut options: RequestOptions, default: bool) -> RequestOptions {
        options.set_default_idempotency(default);
        options
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }

    fn with_retry_throttler<V: Into<RetryThrottlerArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_throttler(v);
        self
    }

    fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_error_policy(v);
        self
    }

    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_backoff_policy(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use crate::exponential_backoff::ExponentialBackoff;
    use crate::polling_error_policy;
    use crate::retry_policy::LimitedAttemptCount;
    use crate::retry_throttler::CircuitBreaker;

    #[derive(Debug, Default)]
    struct Builder(RequestOptions);
    impl RequestBuilder for Builder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0
        }
    }

    #[test]
    fn setters() {
        let mut opts = RequestOptions::default();
        assert_eq!(opts.idempotent(), None);
        assert_eq!(opts.attempt_timeout(), &None);
        assert!(opts.retry_policy().is_none());

        opts.set_idempotency(false);
        assert_eq!(opts.idempotent(), Some(false));
        opts.set_user_agent("storage-sample/1.0");
        assert_eq!(opts.user_agent().as_deref(), Some("storage-sample/1.0"));
        opts.set_attempt_timeout(Duration::from_secs(30));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(30)));
        opts.set_retry_policy(LimitedAttemptCount::new(2));
        assert!(opts.retry_policy().is_some(), "{opts:?}");
        opts.set_backoff_policy(ExponentialBackoff::default());
        assert!(opts.backoff_policy().is_some(), "{opts:?}");
        opts.set_retry_throttler(CircuitBreaker::default());
        assert!(opts.retry_throttler().is_some(), "{opts:?}");
        opts.set_polling_error_policy(polling_error_policy::AlwaysContinue);
        assert!(opts.polling_error_policy().is_some(), "{opts:?}");
        opts.set_polling_backoff_policy(ExponentialBackoff::default());
        assert!(opts.polling_backoff_policy().is_some(), "{opts:?}");
    }

    #[test]
    fn default_idempotency_does_not_override() {
        let opts = set_default_idempotency(RequestOptions::default(), true);
        assert_eq!(opts.idempotent(), Some(true));
        let opts = set_default_idempotency(opts, false);
        assert_eq!(opts.idempotent(), Some(true));

        let mut opts = RequestOptions::default();
        opts.set_idempotency(false);
        let opts = set_default_idempotency(opts, true);
        assert_eq!(opts.idempotent(), Some(false));
    }

    #[test]
    fn builder() {
        let mut b = Builder::default()
            .with_idempotency(true)
            .with_user_agent("test-only")
            .with_attempt_timeout(Duration::from_millis(500))
            .with_retry_policy(LimitedAttemptCount::new(3))
            .with_backoff_policy(ExponentialBackoff::default())
            .with_retry_throttler(CircuitBreaker::default())
            .with_polling_error_policy(polling_error_policy::Aip194Strict)
            .with_polling_backoff_policy(ExponentialBackoff::default());
        let opts = b.request_options();
        assert_eq!(opts.idempotent(), Some(true));
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_millis(500)));
        assert!(opts.retry_policy().is_some());
        assert!(opts.backoff_policy().is_some());
        assert!(opts.retry_throttler().is_some());
        assert!(opts.polling_error_policy().is_some());
        assert!(opts.polling_backoff_policy().is_some());
    }
}
