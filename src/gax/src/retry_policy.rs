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

//! Retry policies.
//!
//! The clients retry RPCs that fail with transient errors when it is safe to
//! do so, that is, when the RPC is idempotent. Applications may change how
//! errors are classified and how long the loop runs by setting a retry policy
//! on the client or on a single request.
//!
//! # Example
//! ```
//! # use gcs_gax::retry_policy::*;
//! use std::time::Duration;
//! let policy = Aip194Strict
//!     .with_time_limit(Duration::from_secs(60))
//!     .with_attempt_limit(5);
//! ```

use crate::error::Error;
use crate::error::rpc::Code;
use crate::retry_result::RetryResult;
use crate::throttle_result::ThrottleResult;
use std::sync::Arc;
use std::time::Duration;

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts, including the one that
    ///   failed.
    /// * `idempotent` - if `true` assume the operation is idempotent.
    /// * `error` - the last error.
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult;

    /// Query the retry policy after the retry throttler skipped an attempt.
    ///
    /// The default implementation continues the loop.
    fn on_throttle(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        error: Error,
    ) -> ThrottleResult {
        ThrottleResult::Continue(error)
    }

    /// The remaining time in the retry policy.
    ///
    /// Time-based policies return the remaining time so the retry loop can
    /// adjust the timeout of the next attempt. Other policies return `None`.
    fn remaining_time(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
    ) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(pub(crate) Arc<dyn RetryPolicy>);

impl<T> From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Self {
        value.0
    }
}

/// Extension trait for [RetryPolicy] with the common decorators.
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Limits the total time spent in the retry loop.
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Limits the number of attempts in the retry loop.
    ///
    /// A value of `0` stops after the first attempt, same as `1`.
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// A retry policy that strictly follows [AIP-194].
///
/// The only retryable status code is `UNAVAILABLE`, and only for idempotent
/// operations. Errors that show the request never reached the service, such
/// as connection or authentication errors, are also retried for idempotent
/// operations. Serialization and binding errors are permanent.
///
/// This policy never stops on its own, decorate it with
/// [with_time_limit][RetryPolicyExt::with_time_limit] or
/// [with_attempt_limit][RetryPolicyExt::with_attempt_limit].
///
/// [AIP-194]: https://google.aip.dev/194
#[derive(Clone, Debug)]
pub struct Aip194Strict;

impl RetryPolicy for Aip194Strict {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if error.is_serialization() || error.is_binding() {
            return RetryResult::Permanent(error);
        }
        if !idempotent {
            return RetryResult::Permanent(error);
        }
        if error.is_io() || error.is_authentication() || error.is_timeout() {
            return RetryResult::Continue(error);
        }
        if let Some(status) = error.status() {
            return if status.code == Code::Unavailable {
                RetryResult::Continue(error)
            } else {
                RetryResult::Permanent(error)
            };
        }
        match error.http_status_code() {
            Some(503) => RetryResult::Continue(error),
            _ => RetryResult::Permanent(error),
        }
    }
}

/// A retry policy that retries all errors.
///
/// Use with care, only for operations the application knows are safe to
/// retry. Decorate it to limit the loop.
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy that never retries.
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Exhausted(error)
    }
}

/// A retry policy decorator that limits the duration of the retry loop.
///
/// Once the loop exceeds the limit this policy returns
/// [Exhausted][RetryResult::Exhausted] for retryable errors. Permanent
/// errors are reported as such.
#[derive(Debug)]
pub struct LimitedElapsedTime<P = Aip194Strict>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance wrapping [Aip194Strict].
    pub fn new(maximum_duration: Duration) -> Self {
        Self::custom(Aip194Strict, maximum_duration)
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance wrapping a custom policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn error_if_exhausted(&self, loop_start: std::time::Instant, error: Error) -> ThrottleResult {
        let deadline = loop_start + self.maximum_duration;
        if std::time::Instant::now() >= deadline {
            ThrottleResult::Exhausted(error)
        } else {
            ThrottleResult::Continue(error)
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Continue(e) => match self.error_if_exhausted(loop_start, e) {
                ThrottleResult::Continue(e) => RetryResult::Continue(e),
                ThrottleResult::Exhausted(e) => RetryResult::Exhausted(e),
            },
            r => r,
        }
    }

    fn on_throttle(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        error: Error,
    ) -> ThrottleResult {
        match self.inner.on_throttle(loop_start, attempt_count, error) {
            ThrottleResult::Continue(e) => self.error_if_exhausted(loop_start, e),
            r => r,
        }
    }

    fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration> {
        let deadline = loop_start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(std::time::Instant::now());
        match self.inner.remaining_time(loop_start, attempt_count) {
            Some(inner) => Some(std::cmp::min(remaining, inner)),
            None => Some(remaining),
        }
    }
}

/// A retry policy decorator that limits the number of attempts.
#[derive(Debug)]
pub struct LimitedAttemptCount<P = Aip194Strict>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance wrapping [Aip194Strict].
    pub fn new(maximum_attempts: u32) -> Self {
        Self::custom(Aip194Strict, maximum_attempts)
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance wrapping a custom policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Continue(e) if attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            r => r,
        }
    }

    fn on_throttle(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        error: Error,
    ) -> ThrottleResult {
        // Throttled attempts count against the limit too.
        if attempt_count >= self.maximum_attempts {
            return ThrottleResult::Exhausted(error);
        }
        self.inner.on_throttle(loop_start, attempt_count, error)
    }

    fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration> {
        self.inner.remaining_time(loop_start, attempt_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::Status;
    use http::HeaderMap;
    use std::time::Instant;
    use test_case::test_case;

    fn service_error(code: Code) -> Error {
        Error::service(Status::default().set_code(code).set_message("test-only"))
    }

    #[test_case(Code::Unavailable, true)]
    #[test_case(Code::NotFound, false)]
    #[test_case(Code::FailedPrecondition, false)]
    #[test_case(Code::Internal, false)]
    #[test_case(Code::ResourceExhausted, false)]
    fn aip194_service_errors(code: Code, want_continue: bool) {
        let p = Aip194Strict;
        let now = Instant::now();
        assert_eq!(
            p.on_error(now, 1, true, service_error(code)).is_continue(),
            want_continue
        );
        assert!(p.on_error(now, 1, false, service_error(code)).is_permanent());
    }

    #[test]
    fn aip194_client_errors() {
        let p = Aip194Strict;
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, Error::io("io")).is_continue());
        assert!(p.on_error(now, 1, false, Error::io("io")).is_permanent());
        assert!(
            p.on_error(now, 1, true, Error::authentication("auth"))
                .is_continue()
        );
        assert!(p.on_error(now, 1, true, Error::timeout("t")).is_continue());
        assert!(p.on_error(now, 1, true, Error::ser("s")).is_permanent());
        assert!(p.on_error(now, 1, true, Error::binding("b")).is_permanent());
        assert!(p.on_error(now, 1, true, Error::other("o")).is_permanent());
    }

    #[test]
    fn aip194_http_errors() {
        let p = Aip194Strict;
        let now = Instant::now();
        let e = Error::http(503, HeaderMap::new(), bytes::Bytes::new());
        assert!(p.on_error(now, 1, true, e).is_continue());
        let e = Error::http(404, HeaderMap::new(), bytes::Bytes::new());
        assert!(p.on_error(now, 1, true, e).is_permanent());
    }

    #[test]
    fn always_and_never() {
        let now = Instant::now();
        assert!(AlwaysRetry.on_error(now, 1, false, Error::other("o")).is_continue());
        assert!(NeverRetry.on_error(now, 1, true, Error::io("io")).is_exhausted());
    }

    #[test]
    fn attempt_limit() {
        let p = AlwaysRetry.with_attempt_limit(3);
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, Error::io("e")).is_continue());
        assert!(p.on_error(now, 2, true, Error::io("e")).is_continue());
        assert!(p.on_error(now, 3, true, Error::io("e")).is_exhausted());
        assert!(p.on_throttle(now, 2, Error::io("e")).is_continue());
        assert!(p.on_throttle(now, 3, Error::io("e")).is_exhausted());
        assert!(p.remaining_time(now, 1).is_none());
    }

    #[test]
    fn attempt_limit_keeps_permanent() {
        let p = LimitedAttemptCount::new(3);
        let now = Instant::now();
        let r = p.on_error(now, 5, true, service_error(Code::NotFound));
        assert!(r.is_permanent(), "{r:?}");
    }

    #[test]
    fn time_limit() {
        let p = AlwaysRetry.with_time_limit(Duration::from_secs(10));
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, Error::io("e")).is_continue());
        let remaining = p.remaining_time(now, 1).expect("time policies have a deadline");
        assert!(remaining <= Duration::from_secs(10), "{remaining:?}");

        let expired = now - Duration::from_secs(20);
        assert!(p.on_error(expired, 1, true, Error::io("e")).is_exhausted());
        assert!(p.on_throttle(expired, 1, Error::io("e")).is_exhausted());
        assert_eq!(p.remaining_time(expired, 1), Some(Duration::ZERO));
    }

    #[test]
    fn time_limit_nested() {
        let p = AlwaysRetry
            .with_time_limit(Duration::from_secs(5))
            .with_time_limit(Duration::from_secs(10));
        let now = Instant::now();
        let remaining = p.remaining_time(now, 1).expect("time policies have a deadline");
        assert!(remaining <= Duration::from_secs(5), "{remaining:?}");
    }

    #[test]
    fn arg() {
        let arg = RetryPolicyArg::from(Aip194Strict.with_attempt_limit(2));
        let policy: Arc<dyn RetryPolicy> = arg.into();
        let r = policy.on_error(Instant::now(), 2, true, service_error(Code::Unavailable));
        assert!(r.is_exhausted(), "{r:?}");
    }
}
