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

//! Backoff policies for the retry loop.
//!
//! After a transient failure the retry loop waits before the next attempt,
//! the service may need some time to recover. A backoff policy computes that
//! delay. [ExponentialBackoff][crate::exponential_backoff::ExponentialBackoff]
//! is the default.

use std::sync::Arc;
use std::time::Duration;

/// The trait implemented by all backoff strategies.
pub trait BackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the delay before the next attempt.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts so far. Always at least `1`.
    fn on_failure(&self, loop_start: std::time::Instant, attempt_count: u32) -> Duration;
}

/// A helper type to use [BackoffPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct BackoffPolicyArg(pub(crate) Arc<dyn BackoffPolicy>);

impl<T: BackoffPolicy + 'static> From<T> for BackoffPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn BackoffPolicy>> for BackoffPolicyArg {
    fn from(value: Arc<dyn BackoffPolicy>) -> Self {
        Self(value)
    }
}

impl From<BackoffPolicyArg> for Arc<dyn BackoffPolicy> {
    fn from(value: BackoffPolicyArg) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential_backoff::ExponentialBackoff;

    #[derive(Debug)]
    struct Fixed;
    impl BackoffPolicy for Fixed {
        fn on_failure(&self, _loop_start: std::time::Instant, _attempt_count: u32) -> Duration {
            Duration::from_millis(7)
        }
    }

    #[test]
    fn arg_conversions() {
        let _ = BackoffPolicyArg::from(ExponentialBackoff::default());
        let shared: Arc<dyn BackoffPolicy> = Arc::new(Fixed);
        let arg = BackoffPolicyArg::from(shared);
        let policy: Arc<dyn BackoffPolicy> = arg.into();
        assert_eq!(
            policy.on_failure(std::time::Instant::now(), 1),
            Duration::from_millis(7)
        );
    }
}
