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

//! Verify the public types implement the expected traits.

#[cfg(test)]
mod traits {
    use gcs_storage::{builder, client, model, name};
    use static_assertions::assert_impl_all;

    #[test]
    fn clients() {
        assert_impl_all!(client::Storage: Clone, std::fmt::Debug, Send, Sync);
        assert_impl_all!(client::StorageControl: Clone, std::fmt::Debug, Send, Sync);
    }

    #[test]
    fn request_builders() {
        assert_impl_all!(builder::storage::GetBucket: Clone, std::fmt::Debug, Send, Sync);
        assert_impl_all!(builder::storage::RewriteObject: Clone, std::fmt::Debug, Send);
        assert_impl_all!(builder::storage_control::RenameFolder: Clone, std::fmt::Debug, Send);
        assert_impl_all!(
            builder::storage_control::UpdateProjectIntelligenceConfig: Clone,
            std::fmt::Debug,
            Send
        );
    }

    #[test]
    fn messages() {
        assert_impl_all!(
            model::Bucket: Clone,
            Default,
            PartialEq,
            std::fmt::Debug,
            serde::Serialize,
            serde::de::DeserializeOwned,
            Send,
            Sync
        );
        assert_impl_all!(model::Object: Clone, Default, serde::Serialize, Send, Sync);
        assert_impl_all!(model::IntelligenceConfig: Clone, Default, serde::Serialize, Send, Sync);
        assert_impl_all!(model::Policy: wkt::message::Message);
        assert_impl_all!(model::Folder: wkt::message::Message);
    }

    #[test]
    fn names() {
        assert_impl_all!(
            name::BucketName: Clone,
            PartialEq,
            std::fmt::Display,
            std::str::FromStr,
            Send,
            Sync
        );
        assert_impl_all!(name::IntelligenceConfigName: Clone, std::fmt::Display, std::str::FromStr);
        assert_impl_all!(name::ResourceNameError: std::error::Error, Send, Sync);
    }
}
