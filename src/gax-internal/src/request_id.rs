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

//! Automatic population of request ids.
//!
//! Some requests carry a `request_id` field, which lets the service detect
//! duplicate requests. When the application leaves the field empty, the
//! client library fills it with a UUIDv4 before the first attempt, so all
//! retry attempts of the same call use the same id.

/// Sets `request_id` to a new UUIDv4 if it is empty.
pub fn populate(request_id: &mut String) {
    if request_id.is_empty() {
        *request_id = uuid::Uuid::new_v4().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let mut id = String::new();
        populate(&mut id);
        let got = uuid::Uuid::parse_str(&id);
        assert!(got.is_ok(), "{id} should be a UUID");
        assert_eq!(got.map(|u| u.get_version_num()).ok(), Some(4));
    }

    #[test]
    fn preserved() {
        let mut id = "application-provided".to_string();
        populate(&mut id);
        assert_eq!(id, "application-provided");
    }

    #[test]
    fn unique() {
        let mut a = String::new();
        let mut b = String::new();
        populate(&mut a);
        populate(&mut b);
        assert_ne!(a, b);
    }
}
