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

//! The result of a throttling decision.

use crate::error::Error;

/// The result of a retry policy decision about a throttled attempt.
///
/// The retry throttler may skip an attempt. The retry policy then decides if
/// the loop continues or if the policy is exhausted.
#[derive(Debug)]
pub enum ThrottleResult {
    /// The policy is exhausted, stop the loop with this error.
    Exhausted(Error),

    /// Continue the loop, the attempt is skipped.
    Continue(Error),
}

impl ThrottleResult {
    /// Returns true if the retry loop should stop.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }

    /// Returns true if the retry loop should continue.
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }
}
