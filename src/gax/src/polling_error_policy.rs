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

//! Polling error policies.
//!
//! The clients poll long-running operations until they complete. A polling
//! error policy classifies the errors returned while polling, and limits how
//! long the polling loop runs.
//!
//! # Example
//! ```
//! # use gcs_gax::polling_error_policy::*;
//! use std::time::Duration;
//! let policy = Aip194Strict
//!     .with_time_limit(Duration::from_secs(15 * 60))
//!     .with_attempt_limit(50);
//! ```

use crate::error::Error;
use crate::error::rpc::Code;
use crate::retry_result::RetryResult;
use std::sync::Arc;
use std::time::Duration;

/// Determines how errors are handled in the polling loop.
pub trait PollingErrorPolicy: Send + Sync + std::fmt::Debug {
    /// Query the policy after an error while polling.
    ///
    /// `attempt_count` includes the poll that failed.
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        error: Error,
    ) -> RetryResult;

    /// Query the policy after a poll reports the operation is still running.
    ///
    /// Returning an error stops the polling loop. The default continues.
    fn on_in_progress(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _operation_name: &str,
    ) -> Option<Error> {
        None
    }
}

/// A helper type to use [PollingErrorPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct PollingErrorPolicyArg(pub(crate) Arc<dyn PollingErrorPolicy>);

impl<T: PollingErrorPolicy + 'static> From<T> for PollingErrorPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn PollingErrorPolicy>> for PollingErrorPolicyArg {
    fn from(value: Arc<dyn PollingErrorPolicy>) -> Self {
        Self(value)
    }
}

impl From<PollingErrorPolicyArg> for Arc<dyn PollingErrorPolicy> {
    fn from(value: PollingErrorPolicyArg) -> Self {
        value.0
    }
}

/// Extension trait for [PollingErrorPolicy].
pub trait PollingErrorPolicyExt: PollingErrorPolicy + Sized {
    /// Limits the total time spent polling.
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Limits the number of polls.
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: PollingErrorPolicy> PollingErrorPolicyExt for T {}

/// Continues polling only on `UNAVAILABLE` and on errors that show the poll
/// never reached the service.
///
/// Polls are always idempotent, so no idempotency check applies.
#[derive(Clone, Debug)]
pub struct Aip194Strict;

impl PollingErrorPolicy for Aip194Strict {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        error: Error,
    ) -> RetryResult {
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

/// Continues polling after any error.
#[derive(Clone, Debug)]
pub struct AlwaysContinue;

impl PollingErrorPolicy for AlwaysContinue {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        error: Error,
    ) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A decorator limiting the total time spent polling.
#[derive(Debug)]
pub struct LimitedElapsedTime<P = Aip194Strict>
where
    P: PollingErrorPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Wraps [Aip194Strict].
    pub fn new(maximum_duration: Duration) -> Self {
        Self::custom(Aip194Strict, maximum_duration)
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: PollingErrorPolicy,
{
    /// Wraps a custom policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn expired(&self, loop_start: std::time::Instant) -> bool {
        std::time::Instant::now() >= loop_start + self.maximum_duration
    }
}

impl<P> PollingErrorPolicy for LimitedElapsedTime<P>
where
    P: PollingErrorPolicy + 'static,
{
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        error: Error,
    ) -> RetryResult {
        match self.inner.on_error(loop_start, attempt_count, error) {
            RetryResult::Continue(e) if self.expired(loop_start) => RetryResult::Exhausted(e),
            r => r,
        }
    }

    fn on_in_progress(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        operation_name: &str,
    ) -> Option<Error> {
        self.inner
            .on_in_progress(loop_start, attempt_count, operation_name)
            .or_else(|| {
                self.expired(loop_start).then(|| {
                    Error::exhausted(Exhausted::new(
                        operation_name,
                        "elapsed time",
                        format!("{:?}", self.maximum_duration),
                    ))
                })
            })
    }
}

/// A decorator limiting the number of polls.
#[derive(Debug)]
pub struct LimitedAttemptCount<P = Aip194Strict>
where
    P: PollingErrorPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Wraps [Aip194Strict].
    pub fn new(maximum_attempts: u32) -> Self {
        Self::custom(Aip194Strict, maximum_attempts)
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: PollingErrorPolicy,
{
    /// Wraps a custom policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> PollingErrorPolicy for LimitedAttemptCount<P>
where
    P: PollingErrorPolicy + 'static,
{
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        error: Error,
    ) -> RetryResult {
        match self.inner.on_error(loop_start, attempt_count, error) {
            RetryResult::Continue(e) if attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            r => r,
        }
    }

    fn on_in_progress(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        operation_name: &str,
    ) -> Option<Error> {
        self.inner
            .on_in_progress(loop_start, attempt_count, operation_name)
            .or_else(|| {
                (attempt_count >= self.maximum_attempts).then(|| {
                    Error::exhausted(Exhausted::new(
                        operation_name,
                        "attempt count",
                        self.maximum_attempts.to_string(),
                    ))
                })
            })
    }
}

/// The source of errors when a polling limit stops the loop while the
/// operation is still in progress.
#[derive(Debug)]
pub struct Exhausted {
    operation_name: String,
    limit_name: &'static str,
    limit: String,
}

impl Exhausted {
    pub fn new(operation_name: &str, limit_name: &'static str, limit: String) -> Self {
        Self {
            operation_name: operation_name.to_string(),
            limit_name,
            limit,
        }
    }
}

impl std::fmt::Display for Exhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "polling loop for {} exhausted, {} limit ({}) reached",
            self.operation_name, self.limit_name, self.limit
        )
    }
}

impl std::error::Error for Exhausted {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::Status;
    use http::HeaderMap;
    use std::time::Instant;

    fn status(code: Code) -> Error {
        Error::service(Status::default().set_code(code))
    }

    #[test]
    fn aip194() {
        let p = Aip194Strict;
        let now = Instant::now();
        assert!(p.on_error(now, 1, status(Code::Unavailable)).is_continue());
        assert!(p.on_error(now, 1, status(Code::NotFound)).is_permanent());
        assert!(p.on_error(now, 1, Error::io("io")).is_continue());
        assert!(p.on_error(now, 1, Error::deser("bad")).is_permanent());
        let e = Error::http(503, HeaderMap::new(), bytes::Bytes::new());
        assert!(p.on_error(now, 1, e).is_continue());
        assert!(p.on_in_progress(now, 100, "op").is_none());
    }

    #[test]
    fn always_continue() {
        let p = AlwaysContinue;
        let now = Instant::now();
        assert!(p.on_error(now, 1, status(Code::NotFound)).is_continue());
    }

    #[test]
    fn attempt_limit() {
        let p = AlwaysContinue.with_attempt_limit(3);
        let now = Instant::now();
        assert!(p.on_error(now, 2, Error::io("e")).is_continue());
        assert!(p.on_error(now, 3, Error::io("e")).is_exhausted());
        assert!(p.on_in_progress(now, 2, "op").is_none());
        let err = p.on_in_progress(now, 3, "my-op").expect("limit reached");
        assert!(err.is_exhausted(), "{err:?}");
        assert!(err.to_string().contains("my-op"), "{err}");
    }

    #[test]
    fn time_limit() {
        let p = LimitedElapsedTime::new(Duration::from_secs(60));
        let now = Instant::now();
        assert!(p.on_error(now, 1, status(Code::Unavailable)).is_continue());
        assert!(p.on_in_progress(now, 1, "op").is_none());

        let start = now - Duration::from_secs(120);
        assert!(p.on_error(start, 1, status(Code::Unavailable)).is_exhausted());
        assert!(p.on_error(start, 1, status(Code::NotFound)).is_permanent());
        let err = p.on_in_progress(start, 1, "op").expect("limit reached");
        assert!(err.is_exhausted(), "{err:?}");
    }
}
