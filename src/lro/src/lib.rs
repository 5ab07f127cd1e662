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

//! Types and functions to make LROs easier to use and to require less boilerplate.
//!
//! Some RPCs start a long-running operation (LRO), the service returns an
//! [Operation][model::Operation] right away, and the application polls the
//! operation until it completes. The client libraries return an
//! `impl Poller<R, M>` for these RPCs, where `R` is the response type and `M`
//! the metadata type.
//!
//! # Example
//! ```no_run
//! # use gcs_lro::{Poller, PollingResult};
//! # async fn sample<P: Poller<String, String>>(mut poller: P) {
//! while let Some(p) = poller.poll().await {
//!     match p {
//!         PollingResult::Completed(r) => {
//!             println!("LRO completed, response={r:?}");
//!         }
//!         PollingResult::InProgress(m) => {
//!             println!("LRO in progress, metadata={m:?}");
//!         }
//!         PollingResult::PollingError(e) => {
//!             println!("Transient error polling the LRO: {e}");
//!         }
//!     }
//!     tokio::time::sleep(std::time::Duration::from_millis(100)).await;
//! }
//! # }
//! ```

use gax::Result;
use gax::error::Error;
use std::future::Future;

pub mod model;

#[doc(hidden)]
pub mod internal;

mod details;

/// The result of polling a Long-Running Operation (LRO).
///
/// # Parameters
/// * `R` - the response type. This is the type returned when the LRO completes
///   successfully.
/// * `M` - the metadata type. While operations are in progress the LRO may
///   return values of this type.
#[derive(Debug)]
pub enum PollingResult<R, M> {
    /// The operation is still in progress.
    InProgress(Option<M>),
    /// The operation completed. This includes the result.
    Completed(Result<R>),
    /// An error trying to poll the LRO.
    ///
    /// Not all errors indicate that the operation failed. For example, this
    /// may fail because it was not possible to connect to the service. The
    /// polling error policy decided this error may go away in the next poll.
    PollingError(Error),
}

/// The trait implemented by LRO helpers.
///
/// # Parameters
/// * `R` - the response type, that is, the type of response included when the
///   long-running operation completes successfully.
/// * `M` - the metadata type, that is, the type returned by the service when
///   the long-running operation is still in progress.
pub trait Poller<R, M>: Send {
    /// Query the current status of the long-running operation.
    ///
    /// Returns `None` once the operation completed.
    fn poll(&mut self) -> impl Future<Output = Option<PollingResult<R, M>>> + Send;

    /// Poll the long-running operation until it completes.
    fn until_done(self) -> impl Future<Output = Result<R>> + Send;

    /// Convert a poller to a [Stream][futures::Stream].
    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R, M>> + Unpin;
}
