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

//! Define traits required of all messages.

/// A trait implemented by all messages that may be stored in an
/// [Any][crate::Any].
///
/// `Any` records the full type URL of the message in the `@type` field. That
/// field is validated when a message is extracted.
pub trait Message: serde::ser::Serialize + serde::de::DeserializeOwned {
    /// The type URL of this message, e.g.
    /// `type.googleapis.com/google.storage.control.v2.Folder`.
    fn typename() -> &'static str;

    /// Messages with a custom JSON representation that is not an object, such
    /// as [Duration][crate::Duration], are stored in a `value` field.
    #[doc(hidden)]
    fn uses_value_field() -> bool {
        false
    }
}
