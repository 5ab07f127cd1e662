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

//! Implementation details used by the client libraries.
//!
//! Not part of the public API of this crate. Types and functions in this
//! module may be changed or removed without notice.

use crate::details::{self, PollingState};
use crate::{Poller, PollingResult};
use gax::Result;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::PollingErrorPolicy;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

/// A wrapper around [Operation][crate::model::Operation] with typed responses.
pub struct Operation<R, M> {
    inner: crate::model::Operation,
    response: PhantomData<R>,
    metadata: PhantomData<M>,
}

impl<R, M> Operation<R, M> {
    pub fn new(inner: crate::model::Operation) -> Self {
        Self {
            inner,
            response: PhantomData,
            metadata: PhantomData,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.inner.name
    }
    pub(crate) fn done(&self) -> bool {
        self.inner.done
    }
    pub(crate) fn metadata(&self) -> Option<&wkt::Any> {
        self.inner.metadata.as_ref()
    }
    pub(crate) fn response(&self) -> Option<&wkt::Any> {
        self.inner.response()
    }
    pub(crate) fn error(&self) -> Option<&gax::error::rpc::Status> {
        self.inner.error()
    }
}

/// Creates a new `impl Poller<R, M>` from two closures.
///
/// `start` starts the operation; it captures the request, the stub, and the
/// request options. `query` receives the operation name and fetches its
/// latest state.
pub fn new_poller<R, M, S, SF, Q, QF>(
    polling_error_policy: Arc<dyn PollingErrorPolicy>,
    polling_backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: S,
    query: Q,
) -> impl Poller<R, M>
where
    R: wkt::message::Message + Send,
    M: wkt::message::Message + Send,
    S: FnOnce() -> SF + Send + Sync,
    SF: Future<Output = Result<Operation<R, M>>> + Send + 'static,
    Q: Fn(String) -> QF + Send + Sync + Clone,
    QF: Future<Output = Result<Operation<R, M>>> + Send + 'static,
{
    PollerImpl {
        error_policy: polling_error_policy,
        backoff_policy: polling_backoff_policy,
        start: Some(start),
        query,
        operation: None,
        state: PollingState::default(),
        _types: PhantomData,
    }
}

struct PollerImpl<R, M, S, Q> {
    error_policy: Arc<dyn PollingErrorPolicy>,
    backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: Option<S>,
    query: Q,
    operation: Option<String>,
    state: PollingState,
    _types: PhantomData<fn() -> (R, M)>,
}

impl<R, M, S, SF, Q, QF> Poller<R, M> for PollerImpl<R, M, S, Q>
where
    R: wkt::message::Message + Send,
    M: wkt::message::Message + Send,
    S: FnOnce() -> SF + Send + Sync,
    SF: Future<Output = Result<Operation<R, M>>> + Send + 'static,
    Q: Fn(String) -> QF + Send + Sync + Clone,
    QF: Future<Output = Result<Operation<R, M>>> + Send + 'static,
{
    async fn poll(&mut self) -> Option<PollingResult<R, M>> {
        if let Some(start) = self.start.take() {
            let result = start().await;
            let (op, poll) = details::handle_start(result);
            self.operation = op;
            return Some(poll);
        }
        if let Some(name) = self.operation.take() {
            self.state.attempt_count += 1;
            let result = (self.query)(name.clone()).await;
            let (op, poll) =
                details::handle_poll(self.error_policy.as_ref(), &self.state, name, result);
            self.operation = op;
            return Some(poll);
        }
        None
    }

    async fn until_done(mut self) -> Result<R> {
        while let Some(p) = self.poll().await {
            match p {
                PollingResult::Completed(r) => return r,
                PollingResult::InProgress(_) => (),
                PollingResult::PollingError(e) => {
                    tracing::debug!("transient error polling {:?}: {e}", self.operation);
                }
            }
            let delay = self
                .backoff_policy
                .wait_period(self.state.loop_start, self.state.attempt_count.max(1));
            tokio::time::sleep(delay).await;
        }
        // `poll()` returns `None` only after `Completed`.
        Err(gax::error::Error::other(
            "the poller was already completed before until_done()",
        ))
    }

    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R, M>> + Unpin {
        use futures::stream::unfold;
        Box::pin(unfold(Some(self), move |state| async move {
            if let Some(mut poller) = state {
                if let Some(pr) = poller.poll().await {
                    return Some((pr, Some(poller)));
                }
            };
            None
        }))
    }
}

/// Creates a new `impl Poller<(), M>` for operations returning
/// `google.protobuf.Empty`.
pub fn new_unit_response_poller<M, S, SF, Q, QF>(
    polling_error_policy: Arc<dyn PollingErrorPolicy>,
    polling_backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: S,
    query: Q,
) -> impl Poller<(), M>
where
    M: wkt::message::Message + Send,
    S: FnOnce() -> SF + Send + Sync,
    SF: Future<Output = Result<Operation<wkt::Empty, M>>> + Send + 'static,
    Q: Fn(String) -> QF + Send + Sync + Clone,
    QF: Future<Output = Result<Operation<wkt::Empty, M>>> + Send + 'static,
{
    UnitResponsePoller {
        inner: new_poller(polling_error_policy, polling_backoff_policy, start, query),
        _metadata: PhantomData,
    }
}

struct UnitResponsePoller<P, M> {
    inner: P,
    _metadata: PhantomData<fn() -> M>,
}

fn discard_response<M>(result: PollingResult<wkt::Empty, M>) -> PollingResult<(), M> {
    match result {
        PollingResult::Completed(r) => PollingResult::Completed(r.map(|_| ())),
        PollingResult::InProgress(m) => PollingResult::InProgress(m),
        PollingResult::PollingError(e) => PollingResult::PollingError(e),
    }
}

impl<P, M> Poller<(), M> for UnitResponsePoller<P, M>
where
    P: Poller<wkt::Empty, M>,
    M: Send,
{
    async fn poll(&mut self) -> Option<PollingResult<(), M>> {
        self.inner.poll().await.map(discard_response)
    }

    async fn until_done(self) -> Result<()> {
        self.inner.until_done().await.map(|_| ())
    }

    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<(), M>> + Unpin {
        use futures::StreamExt;
        self.inner.into_stream().map(discard_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{self, operation};
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::exponential_backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
    use gax::polling_error_policy::{Aip194Strict, AlwaysContinue, PollingErrorPolicyExt};
    use std::sync::Mutex;
    use std::time::Duration;

    type ResponseType = wkt::Duration;
    type MetadataType = wkt::Timestamp;
    type TestOperation = Operation<ResponseType, MetadataType>;

    fn in_progress(seconds: i64) -> Result<TestOperation> {
        let any = wkt::Any::from_msg(&wkt::Timestamp::clamp(seconds, 0)).map_err(Error::ser)?;
        Ok(TestOperation::new(
            model::Operation::default()
                .set_name("test-only-name")
                .set_metadata(any),
        ))
    }

    fn done(seconds: i64) -> Result<TestOperation> {
        let any = wkt::Any::from_msg(&wkt::Duration::clamp(seconds, 0)).map_err(Error::ser)?;
        Ok(TestOperation::new(
            model::Operation::default()
                .set_name("test-only-name")
                .set_done(true)
                .set_result(operation::Result::Response(any)),
        ))
    }

    fn transient() -> Error {
        Error::service(Status::default().set_code(Code::Unavailable).set_message("try-again"))
    }

    fn test_backoff() -> ExponentialBackoff {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .clamp()
    }

    #[tokio::test]
    async fn poll_basic_flow() {
        let start = || async move { in_progress(123) };
        let query = |_: String| async move { done(234) };

        let mut poller = new_poller(
            Arc::new(Aip194Strict),
            Arc::new(test_backoff()),
            start,
            query,
        );
        let p0 = poller.poll().await;
        match p0 {
            Some(PollingResult::InProgress(m)) => {
                assert_eq!(m, Some(wkt::Timestamp::clamp(123, 0)));
            }
            r => panic!("{r:?}"),
        }

        let p1 = poller.poll().await;
        match p1 {
            Some(PollingResult::Completed(r)) => {
                assert_eq!(r.ok(), Some(wkt::Duration::clamp(234, 0)));
            }
            r => panic!("{r:?}"),
        }

        let p2 = poller.poll().await;
        assert!(p2.is_none(), "{p2:?}");
    }

    #[tokio::test]
    async fn until_done_with_transient() -> anyhow::Result<()> {
        let names = Arc::new(Mutex::new(Vec::new()));
        let start = || async move { in_progress(123) };
        let count = Arc::new(Mutex::new(0));
        let query = {
            let names = names.clone();
            move |name: String| {
                names.lock().expect("test mutex").push(name);
                let attempt = {
                    let mut c = count.lock().expect("test mutex");
                    *c += 1;
                    *c
                };
                async move {
                    match attempt {
                        1 => Err(transient()),
                        2 => in_progress(124),
                        _ => done(42),
                    }
                }
            }
        };
        let got = new_poller(
            Arc::new(Aip194Strict),
            Arc::new(test_backoff()),
            start,
            query,
        )
        .until_done()
        .await?;
        assert_eq!(got, wkt::Duration::clamp(42, 0));
        let names = names.lock().expect("test mutex").clone();
        assert_eq!(names, vec!["test-only-name"; 3]);
        Ok(())
    }

    #[tokio::test]
    async fn until_done_start_error() {
        let start = || async move { Err::<TestOperation, _>(transient()) };
        let query = |_: String| async move { done(42) };
        let got = new_poller(
            Arc::new(AlwaysContinue),
            Arc::new(test_backoff()),
            start,
            query,
        )
        .until_done()
        .await;
        let err = got.expect_err("start errors are not retried by the poller");
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable));
    }

    #[tokio::test]
    async fn until_done_operation_error() {
        let start = || async move { in_progress(123) };
        let query = |_: String| async move {
            let status = Status::default()
                .set_code(Code::FailedPrecondition)
                .set_message("cannot rename");
            Ok(TestOperation::new(
                model::Operation::default()
                    .set_name("test-only-name")
                    .set_done(true)
                    .set_result(operation::Result::Error(status)),
            ))
        };
        let got = new_poller(
            Arc::new(Aip194Strict),
            Arc::new(test_backoff()),
            start,
            query,
        )
        .until_done()
        .await;
        let err = got.expect_err("the operation completed with an error");
        let status = err.status().expect("operation errors are service errors");
        assert_eq!(status.code, Code::FailedPrecondition);
        assert_eq!(status.message, "cannot rename");
    }

    #[tokio::test]
    async fn until_done_policy_exhausted() {
        let start = || async move { in_progress(123) };
        let query = |_: String| async move { in_progress(124) };
        let got = new_poller(
            Arc::new(AlwaysContinue.with_attempt_limit(3)),
            Arc::new(test_backoff()),
            start,
            query,
        )
        .until_done()
        .await;
        let err = got.expect_err("the polling policy is exhausted");
        assert!(err.is_exhausted(), "{err:?}");
    }

    #[tokio::test]
    async fn into_stream() {
        use futures::StreamExt;
        let start = || async move { in_progress(123) };
        let query = |_: String| async move { done(234) };
        let mut stream = new_poller(
            Arc::new(Aip194Strict),
            Arc::new(test_backoff()),
            start,
            query,
        )
        .into_stream();
        assert!(
            matches!(stream.next().await, Some(PollingResult::InProgress(Some(_)))),
            "first poll"
        );
        assert!(
            matches!(stream.next().await, Some(PollingResult::Completed(Ok(_)))),
            "second poll"
        );
        assert!(stream.next().await.is_none());
    }

    type UnitOperation = Operation<wkt::Empty, MetadataType>;

    fn unit_done() -> Result<UnitOperation> {
        let any = wkt::Any::from_msg(&wkt::Empty::default()).map_err(Error::ser)?;
        Ok(UnitOperation::new(
            model::Operation::default()
                .set_name("test-only-name")
                .set_done(true)
                .set_result(operation::Result::Response(any)),
        ))
    }

    fn unit_in_progress(seconds: i64) -> Result<UnitOperation> {
        let any = wkt::Any::from_msg(&wkt::Timestamp::clamp(seconds, 0)).map_err(Error::ser)?;
        Ok(UnitOperation::new(
            model::Operation::default()
                .set_name("test-only-name")
                .set_metadata(any),
        ))
    }

    #[tokio::test]
    async fn unit_response_poll() {
        let start = || async move { unit_in_progress(123) };
        let query = |_: String| async move { unit_done() };
        let mut poller = new_unit_response_poller(
            Arc::new(Aip194Strict),
            Arc::new(test_backoff()),
            start,
            query,
        );
        match poller.poll().await {
            Some(PollingResult::InProgress(m)) => {
                assert_eq!(m, Some(wkt::Timestamp::clamp(123, 0)));
            }
            r => panic!("{r:?}"),
        }
        match poller.poll().await {
            Some(PollingResult::Completed(r)) => assert!(r.is_ok(), "{r:?}"),
            r => panic!("{r:?}"),
        }
        let p = poller.poll().await;
        assert!(p.is_none(), "{p:?}");
    }

    #[tokio::test]
    async fn unit_response_until_done() -> anyhow::Result<()> {
        let start = || async move { unit_in_progress(123) };
        let query = |_: String| async move { unit_done() };
        new_unit_response_poller(
            Arc::new(Aip194Strict),
            Arc::new(test_backoff()),
            start,
            query,
        )
        .until_done()
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn unit_response_error() {
        let start = || async move { unit_in_progress(123) };
        let query = |_: String| async move {
            let status = Status::default()
                .set_code(Code::PermissionDenied)
                .set_message("cannot delete");
            Ok(UnitOperation::new(
                model::Operation::default()
                    .set_name("test-only-name")
                    .set_done(true)
                    .set_result(operation::Result::Error(status)),
            ))
        };
        let got = new_unit_response_poller(
            Arc::new(Aip194Strict),
            Arc::new(test_backoff()),
            start,
            query,
        )
        .until_done()
        .await;
        let err = got.expect_err("the operation completed with an error");
        assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
    }
}
