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

//! Extends [builder][crate::builder] with helpers for multi-request
//! operations.

/// An extension trait for `RewriteObject` to complete a rewrite that needs
/// more than one request.
#[async_trait::async_trait]
pub trait RewriteObjectExt {
    /// Sends the request until the rewrite is complete.
    ///
    /// Large rewrites, such as copies across locations or storage classes,
    /// may need multiple calls to
    /// [Storage::rewrite_object][crate::client::Storage::rewrite_object].
    /// Each response carries a
    /// [rewrite_token][crate::model::RewriteResponse::rewrite_token] to
    /// continue the rewrite. This helper sends that token in the next request
    /// until the service reports the rewrite as done.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcs_storage::client::Storage;
    /// # use gcs_storage::builder_ext::RewriteObjectExt;
    /// # async fn sample(client: &Storage) -> anyhow::Result<()> {
    /// let copied = client
    ///     .rewrite_object()
    ///     .set_source_bucket("projects/_/buckets/source-bucket")
    ///     .set_source_object("object-to-copy")
    ///     .set_destination_bucket("projects/_/buckets/dest-bucket")
    ///     .set_destination_name("copied-object")
    ///     .rewrite_until_done()
    ///     .await?;
    /// println!("copied object: {copied:?}");
    /// # Ok(())
    /// # }
    /// ```
    async fn rewrite_until_done(self) -> crate::Result<crate::model::Object>;
}

#[async_trait::async_trait]
impl RewriteObjectExt for crate::builder::storage::RewriteObject {
    async fn rewrite_until_done(mut self) -> crate::Result<crate::model::Object> {
        loop {
            let response = self.clone().send().await?;
            if response.done {
                return response.resource.ok_or_else(|| {
                    crate::Error::deser("the rewrite is done but the response has no object")
                });
            }
            tracing::debug!(
                total_bytes_rewritten = response.total_bytes_rewritten,
                object_size = response.object_size,
                "rewrite in progress"
            );
            self = self.set_rewrite_token(response.rewrite_token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Storage;
    use crate::model::{Object, RewriteObjectRequest, RewriteResponse};
    use gax::options::RequestOptions;
    use gax::response::Response;

    mockall::mock! {
        #[derive(Debug)]
        Storage {}
        impl crate::stub::Storage for Storage {
            async fn rewrite_object(&self, _req: RewriteObjectRequest, _options: RequestOptions) -> gax::Result<Response<RewriteResponse>>;
        }
    }

    #[tokio::test]
    async fn rewrite_until_done() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        let final_object = Object::new().set_name("final-object");

        let mut seq = mockall::Sequence::new();
        mock.expect_rewrite_object()
            .withf(|req: &RewriteObjectRequest, _| req.rewrite_token.is_empty())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(Response::from(
                    RewriteResponse::new()
                        .set_done(false)
                        .set_rewrite_token("token1"),
                ))
            });
        mock.expect_rewrite_object()
            .withf(|req: &RewriteObjectRequest, _| req.rewrite_token == "token1")
            .times(1)
            .in_sequence(&mut seq)
            .returning({
                let object = final_object.clone();
                move |_, _| {
                    Ok(Response::from(
                        RewriteResponse::new()
                            .set_done(true)
                            .set_resource(object.clone()),
                    ))
                }
            });

        let client = Storage::from_stub(mock);
        let got = client.rewrite_object().rewrite_until_done().await?;
        assert_eq!(got, final_object);
        Ok(())
    }

    #[tokio::test]
    async fn done_without_resource() {
        let mut mock = MockStorage::new();
        mock.expect_rewrite_object()
            .times(1)
            .returning(|_, _| Ok(Response::from(RewriteResponse::new().set_done(true))));

        let client = Storage::from_stub(mock);
        let got = client.rewrite_object().rewrite_until_done().await;
        assert!(
            got.as_ref().is_err_and(|e| e.is_deserialization()),
            "{got:?}"
        );
    }

    #[tokio::test]
    async fn error_stops_loop() {
        let mut mock = MockStorage::new();
        mock.expect_rewrite_object().times(1).returning(|_, _| {
            Err(gax::error::Error::service(
                gax::error::rpc::Status::default()
                    .set_code(gax::error::rpc::Code::PermissionDenied)
                    .set_message("uh-oh"),
            ))
        });

        let client = Storage::from_stub(mock);
        let got = client.rewrite_object().rewrite_until_done().await;
        let status = got.as_ref().err().and_then(|e| e.status());
        assert_eq!(
            status.map(|s| s.code),
            Some(gax::error::rpc::Code::PermissionDenied),
            "{got:?}"
        );
    }
}
