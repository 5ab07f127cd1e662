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

//! Retry throttlers.
//!
//! Retry loops that never throttle themselves can turn a partial outage into
//! a "retry storm", where retry attempts dominate the traffic to the service.
//! A retry throttler skips some retry attempts based on the recent history of
//! successes and failures. See [Handling Overload] for background.
//!
//! A throttler is shared across requests, and typically across clients, so it
//! is stored as a [SharedRetryThrottler].
//!
//! # Example
//! ```
//! # use gcs_gax::retry_throttler::*;
//! let adaptive = AdaptiveThrottler::new(2.0)?;
//! let breaker = CircuitBreaker::new(1000, 250, 10)?;
//! # Ok::<(), Error>(())
//! ```
//!
//! [Handling Overload]: https://sre.google/sre-book/handling-overload/

use crate::retry_result::RetryResult;
use std::sync::{Arc, Mutex};

/// The error returned when the throttler parameters are invalid.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("the scaling factor ({0}) must be >= 0.0")]
    ScalingOutOfRange(f64),
    #[error("the minimum tokens ({min}) must be <= the initial tokens ({initial})")]
    TooFewMinTokens { min: u64, initial: u64 },
}

/// The trait implemented by all retry throttlers.
///
/// The retry loop consults the throttler before each retry attempt (never
/// before the first attempt) and reports the outcome of every attempt.
pub trait RetryThrottler: Send + Sync + std::fmt::Debug {
    /// Returns `true` if the next retry attempt should be skipped.
    fn throttle_retry_attempt(&self) -> bool;

    /// Called after a failed attempt, with the retry policy decision.
    fn on_retry_failure(&mut self, flow: &RetryResult);

    /// Called after a successful attempt.
    fn on_success(&mut self);
}

/// Retry throttlers are shared by all the requests of a client.
pub type SharedRetryThrottler = Arc<Mutex<dyn RetryThrottler>>;

/// A helper type to use [RetryThrottler] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryThrottlerArg(pub(crate) SharedRetryThrottler);

impl<T: RetryThrottler + 'static> From<T> for RetryThrottlerArg {
    fn from(value: T) -> Self {
        Self(Arc::new(Mutex::new(value)))
    }
}

impl From<SharedRetryThrottler> for RetryThrottlerArg {
    fn from(value: SharedRetryThrottler) -> Self {
        Self(value)
    }
}

impl From<RetryThrottlerArg> for SharedRetryThrottler {
    fn from(value: RetryThrottlerArg) -> Self {
        value.0
    }
}

/// Implements client-side adaptive throttling.
///
/// Rejects retry attempts with probability
/// `max(0, (requests - factor * accepts) / (requests + 1))`, where `requests`
/// counts all attempts and `accepts` counts the attempts where the service
/// responded (successes and permanent errors). A larger `factor` throttles
/// less.
#[derive(Clone, Debug)]
pub struct AdaptiveThrottler {
    accept_count: f64,
    request_count: f64,
    factor: f64,
}

impl AdaptiveThrottler {
    /// Creates a throttler, returns an error if `factor` is negative.
    pub fn new(factor: f64) -> Result<Self, Error> {
        if factor < 0.0 || factor.is_nan() {
            return Err(Error::ScalingOutOfRange(factor));
        }
        Ok(Self::clamp(factor))
    }

    /// Creates a throttler, negative values of `factor` become `0.0`.
    pub fn clamp(factor: f64) -> Self {
        let factor = if factor > 0.0 { factor } else { 0.0 };
        Self {
            accept_count: 0.0,
            request_count: 0.0,
            factor,
        }
    }

    fn reject_probability(&self) -> f64 {
        let p = (self.request_count - self.factor * self.accept_count) / (self.request_count + 1.0);
        p.max(0.0)
    }

    fn throttle<R: rand::Rng>(&self, rng: &mut R) -> bool {
        let p = self.reject_probability();
        p > 0.0 && rng.random_range(0.0..=1.0) <= p
    }
}

impl Default for AdaptiveThrottler {
    fn default() -> Self {
        Self::clamp(2.0)
    }
}

impl RetryThrottler for AdaptiveThrottler {
    fn throttle_retry_attempt(&self) -> bool {
        self.throttle(&mut rand::rng())
    }

    fn on_retry_failure(&mut self, flow: &RetryResult) {
        self.request_count += 1.0;
        if flow.is_permanent() {
            self.accept_count += 1.0;
        }
    }

    fn on_success(&mut self) {
        self.request_count += 1.0;
        self.accept_count += 1.0;
    }
}

/// A token-bucket circuit breaker.
///
/// Starts with `tokens` tokens. Each retryable failure costs `error_cost`
/// tokens, each success (or permanent error) refunds one token. Retry
/// attempts are skipped while the bucket holds `min_tokens` or fewer.
#[derive(Clone, Debug)]
pub struct CircuitBreaker {
    max_tokens: u64,
    min_tokens: u64,
    cur_tokens: u64,
    error_cost: u64,
}

impl CircuitBreaker {
    /// Creates a circuit breaker, validating `min_tokens <= tokens`.
    pub fn new(tokens: u64, min_tokens: u64, error_cost: u64) -> Result<Self, Error> {
        if min_tokens > tokens {
            return Err(Error::TooFewMinTokens {
                min: min_tokens,
                initial: tokens,
            });
        }
        Ok(Self::clamp(tokens, min_tokens, error_cost))
    }

    /// Creates a circuit breaker, `min_tokens` is capped at `tokens`.
    pub fn clamp(tokens: u64, min_tokens: u64, error_cost: u64) -> Self {
        Self {
            max_tokens: tokens,
            min_tokens: std::cmp::min(min_tokens, tokens),
            cur_tokens: tokens,
            error_cost,
        }
    }
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::clamp(100, 50, 10)
    }
}

impl RetryThrottler for CircuitBreaker {
    fn throttle_retry_attempt(&self) -> bool {
        self.cur_tokens <= self.min_tokens
    }

    fn on_retry_failure(&mut self, flow: &RetryResult) {
        if flow.is_permanent() {
            self.on_success();
            return;
        }
        self.cur_tokens = self.cur_tokens.saturating_sub(self.error_cost);
    }

    fn on_success(&mut self) {
        self.cur_tokens = std::cmp::min(self.max_tokens, self.cur_tokens.saturating_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error as RpcError;
    use rand::SeedableRng;

    fn transient() -> RetryResult {
        RetryResult::Continue(RpcError::io("transient"))
    }

    fn permanent() -> RetryResult {
        RetryResult::Permanent(RpcError::other("permanent"))
    }

    #[test]
    fn arg() {
        let arg = RetryThrottlerArg::from(CircuitBreaker::default());
        let shared: SharedRetryThrottler = arg.into();
        let arg = RetryThrottlerArg::from(shared);
        let guard = arg.0.lock().expect("not poisoned");
        assert!(!guard.throttle_retry_attempt());
    }

    #[test]
    fn adaptive_construction() {
        assert!(matches!(
            AdaptiveThrottler::new(-1.0),
            Err(Error::ScalingOutOfRange(_))
        ));
        let t = AdaptiveThrottler::clamp(-1.0);
        assert_eq!(t.factor, 0.0);
        let t = AdaptiveThrottler::new(3.0).expect("valid factor");
        assert_eq!(t.factor, 3.0);
    }

    #[test]
    fn adaptive_probability() {
        let mut t = AdaptiveThrottler::new(2.0).expect("valid factor");
        assert_eq!(t.reject_probability(), 0.0);
        assert!(!t.throttle_retry_attempt());

        t.on_success();
        assert_eq!(t.reject_probability(), 0.0);

        // requests=5, accepts=1: (5 - 2) / 6
        for _ in 0..4 {
            t.on_retry_failure(&transient());
        }
        assert_eq!(t.reject_probability(), 0.5);

        // Permanent errors count as accepted.
        t.on_retry_failure(&permanent());
        assert!(t.reject_probability() < 0.5);
    }

    #[test]
    fn adaptive_throttle_with_rng() {
        let mut t = AdaptiveThrottler::new(0.0).expect("valid factor");
        for _ in 0..100 {
            t.on_retry_failure(&transient());
        }
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let throttled = (0..100).filter(|_| t.throttle(&mut rng)).count();
        assert!(throttled > 90, "{throttled}");
    }

    #[test]
    fn circuit_breaker_validation() {
        assert!(matches!(
            CircuitBreaker::new(10, 20, 1),
            Err(Error::TooFewMinTokens { min: 20, initial: 10 })
        ));
        let t = CircuitBreaker::clamp(10, 20, 1);
        assert_eq!(t.min_tokens, 10);
    }

    #[test]
    fn circuit_breaker() {
        let mut t = CircuitBreaker::new(100, 80, 10).expect("valid parameters");
        assert!(!t.throttle_retry_attempt());
        t.on_retry_failure(&transient());
        assert!(!t.throttle_retry_attempt());
        t.on_retry_failure(&transient());
        assert!(t.throttle_retry_attempt(), "{t:?}");

        t.on_success();
        assert!(!t.throttle_retry_attempt(), "{t:?}");
        t.on_retry_failure(&permanent());
        assert_eq!(t.cur_tokens, 82);

        for _ in 0..100 {
            t.on_success();
        }
        assert_eq!(t.cur_tokens, 100);
    }
}
