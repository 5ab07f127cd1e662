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

//! Truncated [exponential backoff] with full jitter.
//!
//! [ExponentialBackoff] implements both
//! [BackoffPolicy][crate::backoff_policy::BackoffPolicy], used between retry
//! attempts, and
//! [PollingBackoffPolicy][crate::polling_backoff_policy::PollingBackoffPolicy],
//! used between polls of a long-running operation. Polling does not use
//! jitter.
//!
//! [exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff

use std::time::Duration;

/// The error returned when the builder parameters are invalid.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("the scaling factor ({0}) must be >= 1.0")]
    InvalidScalingFactor(f64),
    #[error("the initial delay ({0:?}) must be greater than zero")]
    InvalidInitialDelay(Duration),
    #[error("the maximum delay ({maximum:?}) must be >= the initial delay ({initial:?})")]
    EmptyRange { maximum: Duration, initial: Duration },
}

/// Builds [ExponentialBackoff] policies.
///
/// # Example
/// ```
/// # use gcs_gax::exponential_backoff::*;
/// use std::time::Duration;
/// let backoff = ExponentialBackoffBuilder::new()
///     .with_initial_delay(Duration::from_millis(250))
///     .with_maximum_delay(Duration::from_secs(10))
///     .with_scaling(4.0)
///     .build()?;
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);
const DEFAULT_MAXIMUM_DELAY: Duration = Duration::from_secs(60);
const DEFAULT_SCALING: f64 = 2.0;

impl ExponentialBackoffBuilder {
    /// Creates a builder with the default parameters: one second initial
    /// delay, one minute maximum delay, and a scaling factor of 2.
    pub fn new() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            maximum_delay: DEFAULT_MAXIMUM_DELAY,
            scaling: DEFAULT_SCALING,
        }
    }

    /// Sets the delay after the first failure.
    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial_delay = v.into();
        self
    }

    /// Sets the upper bound for the delay.
    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.maximum_delay = v.into();
        self
    }

    /// Sets the growth factor between attempts.
    pub fn with_scaling<V: Into<f64>>(mut self, v: V) -> Self {
        self.scaling = v.into();
        self
    }

    /// Validates the parameters and creates the policy.
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        if self.scaling < 1.0 || self.scaling.is_nan() {
            return Err(Error::InvalidScalingFactor(self.scaling));
        }
        if self.initial_delay.is_zero() {
            return Err(Error::InvalidInitialDelay(self.initial_delay));
        }
        if self.maximum_delay < self.initial_delay {
            return Err(Error::EmptyRange {
                maximum: self.maximum_delay,
                initial: self.initial_delay,
            });
        }
        Ok(ExponentialBackoff {
            initial_delay: self.initial_delay,
            maximum_delay: self.maximum_delay,
            scaling: self.scaling,
        })
    }

    /// Creates the policy, clamping the parameters to usable ranges.
    ///
    /// The maximum delay is clamped to `[1s, 24h]`, then the initial delay to
    /// `[1ms, maximum]`, and the scaling factor to `[1.0, 32.0]`.
    pub fn clamp(self) -> ExponentialBackoff {
        let scaling = if self.scaling.is_nan() {
            DEFAULT_SCALING
        } else {
            self.scaling.clamp(1.0, 32.0)
        };
        let maximum_delay = self
            .maximum_delay
            .clamp(Duration::from_secs(1), Duration::from_secs(24 * 60 * 60));
        let initial_delay = self
            .initial_delay
            .clamp(Duration::from_millis(1), maximum_delay);
        ExponentialBackoff {
            initial_delay,
            maximum_delay,
            scaling,
        }
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncated exponential backoff.
///
/// The delay after attempt `n` is `initial_delay * scaling^(n-1)`, capped at
/// `maximum_delay`.
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoff {
    fn delay(&self, attempt_count: u32) -> Duration {
        let exp = attempt_count.saturating_sub(1).min(i32::MAX as u32) as i32;
        let factor = self.scaling.powi(exp);
        let limit = self.maximum_delay.as_secs_f64() / self.initial_delay.as_secs_f64();
        if factor >= limit {
            return self.maximum_delay;
        }
        // factor >= 1.0 and initial_delay * factor < maximum_delay.
        self.initial_delay.mul_f64(factor)
    }

    fn delay_with_jitter<R: rand::Rng>(&self, attempt_count: u32, rng: &mut R) -> Duration {
        let delay = self.delay(attempt_count);
        rng.random_range(Duration::ZERO..=delay)
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            maximum_delay: DEFAULT_MAXIMUM_DELAY,
            scaling: DEFAULT_SCALING,
        }
    }
}

impl crate::backoff_policy::BackoffPolicy for ExponentialBackoff {
    fn on_failure(&self, _loop_start: std::time::Instant, attempt_count: u32) -> Duration {
        self.delay_with_jitter(attempt_count, &mut rand::rng())
    }
}

impl crate::polling_backoff_policy::PollingBackoffPolicy for ExponentialBackoff {
    fn wait_period(&self, _loop_start: std::time::Instant, attempt_count: u32) -> Duration {
        self.delay(attempt_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backoff_policy::BackoffPolicy;
    use crate::polling_backoff_policy::PollingBackoffPolicy;
    use rand::SeedableRng;
    use std::time::Instant;
    use test_case::test_case;

    #[test]
    fn build_errors() {
        let b = ExponentialBackoffBuilder::new().with_scaling(0.5).build();
        assert!(matches!(b, Err(Error::InvalidScalingFactor(_))), "{b:?}");

        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::ZERO)
            .build();
        assert!(matches!(b, Err(Error::InvalidInitialDelay(_))), "{b:?}");

        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(10))
            .with_maximum_delay(Duration::from_secs(5))
            .build();
        assert!(matches!(b, Err(Error::EmptyRange { .. })), "{b:?}");
    }

    #[test]
    fn build_limits() {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(5))
            .with_maximum_delay(Duration::from_secs(5))
            .with_scaling(1.0)
            .build();
        assert!(b.is_ok(), "{b:?}");
    }

    #[test_case(Duration::ZERO, Duration::ZERO, 0.0)]
    #[test_case(Duration::from_secs(100), Duration::from_secs(10), 64.0)]
    #[test_case(Duration::from_secs(1), Duration::from_secs(48 * 3600), f64::NAN)]
    fn clamp(initial: Duration, maximum: Duration, scaling: f64) {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(initial)
            .with_maximum_delay(maximum)
            .with_scaling(scaling)
            .clamp();
        assert!(b.scaling >= 1.0 && b.scaling <= 32.0, "{b:?}");
        assert!(b.initial_delay >= Duration::from_millis(1), "{b:?}");
        assert!(b.initial_delay <= b.maximum_delay, "{b:?}");
        assert!(b.maximum_delay <= Duration::from_secs(24 * 3600), "{b:?}");
    }

    #[test]
    fn scaling() -> anyhow::Result<()> {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(1))
            .with_maximum_delay(Duration::from_secs(10))
            .with_scaling(2.0)
            .build()?;
        let now = Instant::now();
        assert_eq!(b.wait_period(now, 1), Duration::from_secs(1));
        assert_eq!(b.wait_period(now, 2), Duration::from_secs(2));
        assert_eq!(b.wait_period(now, 3), Duration::from_secs(4));
        assert_eq!(b.wait_period(now, 4), Duration::from_secs(8));
        assert_eq!(b.wait_period(now, 5), Duration::from_secs(10));
        assert_eq!(b.wait_period(now, u32::MAX), Duration::from_secs(10));
        Ok(())
    }

    #[test]
    fn jitter_in_range() -> anyhow::Result<()> {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(1))
            .with_maximum_delay(Duration::from_secs(8))
            .build()?;
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for attempt in 1..10 {
            let d = b.delay_with_jitter(attempt, &mut rng);
            assert!(d <= b.delay(attempt), "attempt={attempt} {d:?}");
        }
        let d = b.on_failure(Instant::now(), 3);
        assert!(d <= Duration::from_secs(4), "{d:?}");
        Ok(())
    }

    #[test]
    fn defaults() {
        let b = ExponentialBackoff::default();
        assert_eq!(b.initial_delay, DEFAULT_INITIAL_DELAY);
        assert_eq!(b.maximum_delay, DEFAULT_MAXIMUM_DELAY);
        assert_eq!(b.scaling, DEFAULT_SCALING);
        let b = ExponentialBackoffBuilder::default().clamp();
        assert_eq!(b.initial_delay, DEFAULT_INITIAL_DELAY);
    }
}
