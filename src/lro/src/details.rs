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

//! Simplifies the implementation of the pollers.

use crate::PollingResult;
use crate::internal::Operation;
use gax::Result;
use gax::error::Error;
use gax::polling_error_policy::PollingErrorPolicy;
use gax::retry_result::RetryResult;
use std::time::Instant;

/// The state of a polling loop, as seen by the polling policies.
#[derive(Debug)]
pub(crate) struct PollingState {
    pub loop_start: Instant,
    pub attempt_count: u32,
}

impl Default for PollingState {
    fn default() -> Self {
        Self {
            loop_start: tokio::time::Instant::now().into_std(),
            attempt_count: 0,
        }
    }
}

pub(crate) fn handle_start<R, M>(
    result: Result<Operation<R, M>>,
) -> (Option<String>, PollingResult<R, M>)
where
    R: wkt::message::Message,
    M: wkt::message::Message,
{
    match result {
        Err(e) => (None, PollingResult::Completed(Err(e))),
        Ok(op) => handle_common(op),
    }
}

pub(crate) fn handle_poll<R, M>(
    error_policy: &dyn PollingErrorPolicy,
    state: &PollingState,
    operation_name: String,
    result: Result<Operation<R, M>>,
) -> (Option<String>, PollingResult<R, M>)
where
    R: wkt::message::Message,
    M: wkt::message::Message,
{
    match result {
        Err(e) => {
            let flow = error_policy.on_error(state.loop_start, state.attempt_count, e);
            handle_polling_error(flow, operation_name)
        }
        Ok(op) => match handle_common(op) {
            (name, PollingResult::InProgress(m)) => {
                match error_policy.on_in_progress(
                    state.loop_start,
                    state.attempt_count,
                    &operation_name,
                ) {
                    None => (name, PollingResult::InProgress(m)),
                    Some(e) => (None, PollingResult::Completed(Err(e))),
                }
            }
            other => other,
        },
    }
}

fn handle_polling_error<R, M>(
    flow: RetryResult,
    operation_name: String,
) -> (Option<String>, PollingResult<R, M>) {
    match flow {
        RetryResult::Continue(e) => (Some(operation_name), PollingResult::PollingError(e)),
        RetryResult::Exhausted(e) | RetryResult::Permanent(e) => {
            (None, PollingResult::Completed(Err(e)))
        }
    }
}

fn handle_common<R, M>(op: Operation<R, M>) -> (Option<String>, PollingResult<R, M>)
where
    R: wkt::message::Message,
    M: wkt::message::Message,
{
    if op.done() {
        return (None, PollingResult::Completed(as_result(&op)));
    }
    let name = op.name().to_string();
    (Some(name), PollingResult::InProgress(as_metadata(&op)))
}

fn as_result<R, M>(op: &Operation<R, M>) -> Result<R>
where
    R: wkt::message::Message,
{
    // A done operation must set exactly one of `response` or `error`.
    match (op.response(), op.error()) {
        (Some(any), None) => any.to_msg::<R>().map_err(Error::deser),
        (None, Some(e)) => Err(Error::service(e.clone())),
        _ => Err(Error::deser("neither response nor error set in a done LRO")),
    }
}

fn as_metadata<R, M>(op: &Operation<R, M>) -> Option<M>
where
    M: wkt::message::Message,
{
    op.metadata().and_then(|a| a.to_msg::<M>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{self, operation};
    use gax::error::rpc::{Code, Status};
    use gax::polling_error_policy::{Aip194Strict, AlwaysContinue, PollingErrorPolicyExt};

    type ResponseType = wkt::Duration;
    type MetadataType = wkt::Timestamp;
    type TestOperation = Operation<ResponseType, MetadataType>;

    fn running() -> anyhow::Result<TestOperation> {
        let any = wkt::Any::from_msg(&wkt::Timestamp::clamp(123, 0))?;
        Ok(TestOperation::new(
            model::Operation::default()
                .set_name("test-only-name")
                .set_metadata(any),
        ))
    }

    fn state(attempt_count: u32) -> PollingState {
        PollingState {
            attempt_count,
            ..PollingState::default()
        }
    }

    #[test]
    fn start_error() {
        let (name, result) = handle_start::<ResponseType, MetadataType>(Err(Error::other("bad")));
        assert!(name.is_none());
        assert!(matches!(result, PollingResult::Completed(Err(_))), "{result:?}");
    }

    #[test]
    fn start_in_progress() -> anyhow::Result<()> {
        let (name, result) = handle_start(Ok(running()?));
        assert_eq!(name.as_deref(), Some("test-only-name"));
        match result {
            PollingResult::InProgress(m) => assert_eq!(m, Some(wkt::Timestamp::clamp(123, 0))),
            r => panic!("{r:?}"),
        }
        Ok(())
    }

    #[test]
    fn done_response() -> anyhow::Result<()> {
        let any = wkt::Any::from_msg(&wkt::Duration::clamp(23, 0))?;
        let op = TestOperation::new(
            model::Operation::default()
                .set_done(true)
                .set_result(operation::Result::Response(any)),
        );
        let (name, result) = handle_start(Ok(op));
        assert!(name.is_none());
        match result {
            PollingResult::Completed(Ok(r)) => assert_eq!(r, wkt::Duration::clamp(23, 0)),
            r => panic!("{r:?}"),
        }
        Ok(())
    }

    #[test]
    fn done_response_type_mismatch() -> anyhow::Result<()> {
        let any = wkt::Any::from_msg(&wkt::Timestamp::clamp(23, 0))?;
        let op = TestOperation::new(
            model::Operation::default()
                .set_done(true)
                .set_result(operation::Result::Response(any)),
        );
        let (_, result) = handle_start(Ok(op));
        assert!(
            matches!(result, PollingResult::Completed(Err(ref e)) if e.is_deserialization()),
            "{result:?}"
        );
        Ok(())
    }

    #[test]
    fn done_without_result() {
        let op = TestOperation::new(model::Operation::default().set_done(true));
        let (_, result) = handle_start(Ok(op));
        assert!(
            matches!(result, PollingResult::Completed(Err(ref e)) if e.is_deserialization()),
            "{result:?}"
        );
    }

    #[test]
    fn poll_transient_error() {
        let error = Error::service(Status::default().set_code(Code::Unavailable));
        let (name, result) = handle_poll::<ResponseType, MetadataType>(
            &Aip194Strict,
            &state(1),
            "test-only-name".into(),
            Err(error),
        );
        assert_eq!(name.as_deref(), Some("test-only-name"));
        assert!(matches!(result, PollingResult::PollingError(_)), "{result:?}");
    }

    #[test]
    fn poll_permanent_error() {
        let error = Error::service(Status::default().set_code(Code::PermissionDenied));
        let (name, result) = handle_poll::<ResponseType, MetadataType>(
            &Aip194Strict,
            &state(1),
            "test-only-name".into(),
            Err(error),
        );
        assert!(name.is_none());
        assert!(matches!(result, PollingResult::Completed(Err(_))), "{result:?}");
    }

    #[test]
    fn poll_in_progress_exhausted() -> anyhow::Result<()> {
        let policy = AlwaysContinue.with_attempt_limit(2);
        let (name, result) =
            handle_poll(&policy, &state(1), "test-only-name".into(), Ok(running()?));
        assert_eq!(name.as_deref(), Some("test-only-name"));
        assert!(matches!(result, PollingResult::InProgress(_)), "{result:?}");

        let (name, result) =
            handle_poll(&policy, &state(2), "test-only-name".into(), Ok(running()?));
        assert!(name.is_none());
        assert!(
            matches!(result, PollingResult::Completed(Err(ref e)) if e.is_exhausted()),
            "{result:?}"
        );
        Ok(())
    }
}
