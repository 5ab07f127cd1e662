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

//! The `google.longrunning` types used by the Cloud Storage services.

/// A long-running operation, the result of starting an LRO-returning RPC.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// The server-assigned name, unique within the service.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Service-specific metadata, such as the progress of the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<wkt::Any>,

    /// If `true`, the operation completed and `result` is set.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub done: bool,

    /// The operation result, an error or a response.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub result: Option<operation::Result>,
}

impl Operation {
    /// Sets the value of [name][Operation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [metadata][Operation::metadata].
    pub fn set_metadata<T: Into<wkt::Any>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets or clears the value of [metadata][Operation::metadata].
    pub fn set_or_clear_metadata<T: Into<wkt::Any>>(mut self, v: Option<T>) -> Self {
        self.metadata = v.map(Into::into);
        self
    }

    /// Sets the value of [done][Operation::done].
    pub fn set_done<T: Into<bool>>(mut self, v: T) -> Self {
        self.done = v.into();
        self
    }

    /// Sets the value of [result][Operation::result].
    pub fn set_result<T: Into<Option<operation::Result>>>(mut self, v: T) -> Self {
        self.result = v.into();
        self
    }

    /// The error, if the operation completed with an error.
    pub fn error(&self) -> Option<&gax::error::rpc::Status> {
        match &self.result {
            Some(operation::Result::Error(e)) => Some(e),
            _ => None,
        }
    }

    /// The response, if the operation completed successfully.
    pub fn response(&self) -> Option<&wkt::Any> {
        match &self.result {
            Some(operation::Result::Response(r)) => Some(r),
            _ => None,
        }
    }
}

impl wkt::message::Message for Operation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.longrunning.Operation"
    }
}

pub mod operation {
    /// The result of a completed operation.
    #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Result {
        /// The error result of the operation in case of failure or cancellation.
        Error(gax::error::rpc::Status),
        /// The normal response of the operation in case of success.
        Response(wkt::Any),
    }
}

/// The request message for `Operations.GetOperation`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetOperationRequest {
    /// The name of the operation resource.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl GetOperationRequest {
    /// Sets the value of [name][GetOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetOperationRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.longrunning.GetOperationRequest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::{Code, Status};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serialize_response() -> anyhow::Result<()> {
        let any = wkt::Any::from_msg(&wkt::Duration::clamp(5, 0))?;
        let op = Operation::default()
            .set_name("projects/_/buckets/b/operations/op1")
            .set_done(true)
            .set_result(operation::Result::Response(any));
        let got = serde_json::to_value(&op)?;
        let want = json!({
            "name": "projects/_/buckets/b/operations/op1",
            "done": true,
            "response": {
                "@type": "type.googleapis.com/google.protobuf.Duration",
                "value": "5s",
            }
        });
        assert_eq!(got, want);
        let roundtrip = serde_json::from_value::<Operation>(got)?;
        assert_eq!(roundtrip.response(), op.response());
        Ok(())
    }

    #[test]
    fn deserialize_error() -> anyhow::Result<()> {
        let input = json!({
            "name": "op1",
            "done": true,
            "error": {"code": 5, "message": "not found"},
        });
        let got = serde_json::from_value::<Operation>(input)?;
        assert!(got.done);
        assert_eq!(
            got.error(),
            Some(&Status::default().set_code(Code::NotFound).set_message("not found"))
        );
        assert!(got.response().is_none());
        Ok(())
    }

    #[test]
    fn deserialize_in_progress() -> anyhow::Result<()> {
        let got = serde_json::from_value::<Operation>(json!({"name": "op1"}))?;
        assert_eq!(got.name, "op1");
        assert!(!got.done);
        assert!(got.result.is_none(), "{got:?}");
        Ok(())
    }
}
