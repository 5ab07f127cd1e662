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

use crate::Result;
use crate::backoff_policy::BackoffPolicy;
use crate::error::Error;
use crate::retry_policy::RetryPolicy;
use crate::retry_result::RetryResult;
use crate::retry_throttler::{RetryThrottler, SharedRetryThrottler};
use crate::throttle_result::ThrottleResult;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Runs `inner` until it succeeds, the retry policy gives up, or the
/// throttler exhausts the policy.
///
/// `inner` receives the time remaining in the retry policy, if any. Between
/// attempts the loop waits as prescribed by the backoff policy, using `sleep`.
pub async fn retry_loop<F, Fut, S, SFut, Response>(
    mut inner: F,
    sleep: S,
    idempotent: bool,
    retry_throttler: SharedRetryThrottler,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<Response>
where
    F: FnMut(Option<Duration>) -> Fut + Send,
    Fut: Future<Output = Result<Response>> + Send,
    S: Fn(Duration) -> SFut + Send,
    SFut: Future<Output = ()> + Send,
{
    let loop_start = tokio::time::Instant::now().into_std();
    let mut attempt_count = 0_u32;
    // The error and backoff delay from the previous attempt.
    let mut previous: Option<(Error, Duration)> = None;
    loop {
        let remaining_time = retry_policy.remaining_time(loop_start, attempt_count);
        if let Some((prev_error, delay)) = previous.take() {
            if remaining_time.is_some_and(|remaining| remaining < delay) {
                return Err(Error::exhausted(prev_error));
            }
            sleep(delay).await;
            if lock(&retry_throttler).throttle_retry_attempt() {
                let error = match retry_policy.on_throttle(loop_start, attempt_count, prev_error) {
                    ThrottleResult::Exhausted(e) => return Err(e),
                    ThrottleResult::Continue(e) => e,
                };
                let delay = backoff_policy.on_failure(loop_start, attempt_count);
                previous = Some((error, delay));
                continue;
            }
        }
        attempt_count += 1;
        match inner(remaining_time).await {
            Ok(r) => {
                lock(&retry_throttler).on_success();
                return Ok(r);
            }
            Err(e) => {
                let flow = retry_policy.on_error(loop_start, attempt_count, idempotent, e);
                let delay = backoff_policy.on_failure(loop_start, attempt_count);
                lock(&retry_throttler).on_retry_failure(&flow);
                match flow {
                    RetryResult::Permanent(e) | RetryResult::Exhausted(e) => return Err(e),
                    RetryResult::Continue(e) => previous = Some((e, delay)),
                }
            }
        }
    }
}

// The throttler state remains usable if another thread panicked.
fn lock<'a>(
    throttler: &'a Mutex<dyn RetryThrottler + 'static>,
) -> MutexGuard<'a, dyn RetryThrottler + 'static> {
    throttler.lock().unwrap_or_else(|e| e.into_inner())
}

/// The timeout for the next attempt, given the attempt timeout in `options`
/// and the time remaining in the retry policy.
pub fn effective_timeout(
    options: &crate::options::RequestOptions,
    remaining_time: Option<Duration>,
) -> Option<Duration> {
    match (*options.attempt_timeout(), remaining_time) {
        (None, None) => None,
        (None, Some(r)) => Some(r),
        (Some(a), None) => Some(a),
        (Some(a), Some(r)) => Some(std::cmp::min(a, r)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::{Code, Status};
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case(None, None, None)]
    #[test_case(Some(Duration::from_secs(4)), Some(Duration::from_secs(4)), None)]
    #[test_case(Some(Duration::from_secs(4)), None, Some(Duration::from_secs(4)))]
    #[test_case(Some(Duration::from_secs(2)), Some(Duration::from_secs(2)), Some(Duration::from_secs(4)))]
    #[test_case(Some(Duration::from_secs(2)), Some(Duration::from_secs(4)), Some(Duration::from_secs(2)))]
    fn effective_timeouts(
        want: Option<Duration>,
        remaining: Option<Duration>,
        attempt: Option<Duration>,
    ) {
        let mut options = crate::options::RequestOptions::default();
        if let Some(t) = attempt {
            options.set_attempt_timeout(t);
        }
        assert_eq!(effective_timeout(&options, remaining), want);
    }

    fn transient_status() -> Status {
        Status::default()
            .set_code(Code::Unavailable)
            .set_message("try-again")
    }

    fn transient() -> Result<String> {
        Err(Error::service(transient_status()))
    }

    fn permanent() -> Result<String> {
        Err(Error::service(
            Status::default()
                .set_code(Code::PermissionDenied)
                .set_message("uh-oh"),
        ))
    }

    async fn no_sleep(_: Duration) {}

    fn throttler(mock: MockRetryThrottler) -> SharedRetryThrottler {
        Arc::new(Mutex::new(mock))
    }

    #[tokio::test]
    async fn immediate_success() -> anyhow::Result<()> {
        let mut t = MockRetryThrottler::new();
        t.expect_on_success().once().return_const(());
        let mut p = MockRetryPolicy::new();
        p.expect_remaining_time().once().return_const(None);
        let mut b = MockBackoffPolicy::new();
        b.expect_on_failure().never();

        let response = retry_loop(
            |_| async { Ok("success".to_string()) },
            no_sleep,
            true,
            throttler(t),
            Arc::new(p),
            Arc::new(b),
        )
        .await?;
        assert_eq!(response, "success");
        Ok(())
    }

    #[tokio::test]
    async fn immediate_permanent() -> anyhow::Result<()> {
        let mut t = MockRetryThrottler::new();
        t.expect_on_retry_failure().once().return_const(());
        let mut p = MockRetryPolicy::new();
        p.expect_remaining_time().once().return_const(None);
        p.expect_on_error()
            .once()
            .returning(|_, _, _, e| RetryResult::Permanent(e));
        let mut b = MockBackoffPolicy::new();
        b.expect_on_failure().return_const(Duration::ZERO);

        let err = retry_loop(
            |_| async { permanent() },
            no_sleep,
            true,
            throttler(t),
            Arc::new(p),
            Arc::new(b),
        )
        .await
        .expect_err("permanent errors stop the loop");
        assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
        Ok(())
    }

    #[test_case(true)]
    #[test_case(false)]
    #[tokio::test]
    async fn retry_then_success(idempotent: bool) -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut t = MockRetryThrottler::new();
        for _ in 0..2 {
            t.expect_on_retry_failure()
                .once()
                .in_sequence(&mut seq)
                .return_const(());
            t.expect_throttle_retry_attempt()
                .once()
                .in_sequence(&mut seq)
                .return_const(false);
        }
        t.expect_on_success()
            .once()
            .in_sequence(&mut seq)
            .return_const(());

        let mut p = MockRetryPolicy::new();
        p.expect_remaining_time()
            .times(3)
            .return_const(Some(Duration::from_secs(10)));
        p.expect_on_error()
            .times(2)
            .withf(move |_, _, got, _| *got == idempotent)
            .returning(|_, _, _, e| RetryResult::Continue(e));
        let mut b = MockBackoffPolicy::new();
        b.expect_on_failure()
            .times(2)
            .return_const(Duration::from_millis(1));

        let mut count = 0;
        let inner = move |remaining: Option<Duration>| {
            count += 1;
            let current = count;
            async move {
                assert_eq!(remaining, Some(Duration::from_secs(10)));
                if current < 3 {
                    transient()
                } else {
                    Ok(format!("success after {current}"))
                }
            }
        };
        let response = retry_loop(
            inner,
            no_sleep,
            idempotent,
            throttler(t),
            Arc::new(p),
            Arc::new(b),
        )
        .await?;
        assert_eq!(response, "success after 3");
        Ok(())
    }

    #[tokio::test]
    async fn exhausted_keeps_last_error() -> anyhow::Result<()> {
        let mut t = MockRetryThrottler::new();
        t.expect_on_retry_failure().return_const(());
        t.expect_throttle_retry_attempt().return_const(false);
        let mut p = MockRetryPolicy::new();
        p.expect_remaining_time().return_const(None);
        p.expect_on_error().returning(|_, count, _, e| {
            if count < 3 {
                RetryResult::Continue(e)
            } else {
                RetryResult::Exhausted(e)
            }
        });
        let mut b = MockBackoffPolicy::new();
        b.expect_on_failure().return_const(Duration::ZERO);

        let err = retry_loop(
            |_| async { transient() },
            no_sleep,
            true,
            throttler(t),
            Arc::new(p),
            Arc::new(b),
        )
        .await
        .expect_err("the policy is exhausted");
        assert_eq!(err.status(), Some(&transient_status()), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn no_sleep_past_deadline() -> anyhow::Result<()> {
        let mut t = MockRetryThrottler::new();
        t.expect_on_retry_failure().once().return_const(());
        t.expect_throttle_retry_attempt().never();
        let mut p = MockRetryPolicy::new();
        p.expect_remaining_time()
            .return_const(Some(Duration::from_millis(10)));
        p.expect_on_error()
            .once()
            .returning(|_, _, _, e| RetryResult::Continue(e));
        let mut b = MockBackoffPolicy::new();
        b.expect_on_failure()
            .once()
            .return_const(Duration::from_secs(1));

        let err = retry_loop(
            |_| async { transient() },
            no_sleep,
            true,
            throttler(t),
            Arc::new(p),
            Arc::new(b),
        )
        .await
        .expect_err("the deadline expires before the next attempt");
        assert!(err.is_exhausted(), "{err:?}");
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<Error>())
            .and_then(|e| e.status());
        assert_eq!(source, Some(&transient_status()), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn throttled_until_exhausted() -> anyhow::Result<()> {
        let mut t = MockRetryThrottler::new();
        t.expect_on_retry_failure().once().return_const(());
        t.expect_throttle_retry_attempt().times(2).return_const(true);
        let mut p = MockRetryPolicy::new();
        p.expect_remaining_time().return_const(None);
        p.expect_on_error()
            .once()
            .returning(|_, _, _, e| RetryResult::Continue(e));
        let mut seq = mockall::Sequence::new();
        p.expect_on_throttle()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _, e| ThrottleResult::Continue(e));
        p.expect_on_throttle()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _, e| ThrottleResult::Exhausted(e));
        let mut b = MockBackoffPolicy::new();
        b.expect_on_failure().return_const(Duration::ZERO);

        let mut calls = 0;
        let inner = |_| {
            calls += 1;
            async { transient() }
        };
        let err = retry_loop(
            inner,
            no_sleep,
            true,
            throttler(t),
            Arc::new(p),
            Arc::new(b),
        )
        .await
        .expect_err("throttling exhausts the policy");
        assert_eq!(calls, 1);
        assert_eq!(err.status(), Some(&transient_status()), "{err:?}");
        Ok(())
    }

    mockall::mock! {
        #[derive(Debug)]
        RetryPolicy {}
        impl RetryPolicy for RetryPolicy {
            fn on_error(&self, loop_start: std::time::Instant, attempt_count: u32, idempotent: bool, error: Error) -> RetryResult;
            fn on_throttle(&self, loop_start: std::time::Instant, attempt_count: u32, error: Error) -> ThrottleResult;
            fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        BackoffPolicy {}
        impl BackoffPolicy for BackoffPolicy {
            fn on_failure(&self, loop_start: std::time::Instant, attempt_count: u32) -> Duration;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        RetryThrottler {}
        impl RetryThrottler for RetryThrottler {
            fn throttle_retry_attempt(&self) -> bool;
            fn on_retry_failure(&mut self, flow: &RetryResult);
            fn on_success(&mut self);
        }
    }
}
