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

//! Helpers to compute the `x-goog-request-params` header.
//!
//! Cloud Storage routes requests using the bucket they refer to. The bucket
//! is found in a request field, either directly or as the prefix of a longer
//! resource name, such as `projects/_/buckets/my-bucket/folders/a/b/`.

/// Finds the `projects/*/buckets/*` prefix of `name`.
///
/// # Example
/// ```
/// # use gcs_gax_internal::routing::find_bucket;
/// assert_eq!(
///     find_bucket("projects/_/buckets/my-bucket/managedFolders/a/b/"),
///     Some("projects/_/buckets/my-bucket"));
/// assert_eq!(find_bucket("projects/_/buckets/"), None);
/// ```
pub fn find_bucket(name: &str) -> Option<&str> {
    let rest = name.strip_prefix("projects/")?;
    let project = consume_segment(rest)?;
    let rest = rest[project..].strip_prefix("/buckets/")?;
    let bucket = consume_segment(rest)?;
    let end = name.len() - rest.len() + bucket;
    Some(&name[..end])
}

/// Formats the `bucket` routing parameter for `name`.
///
/// Returns an empty string when `name` does not refer to a bucket.
pub fn bucket_routing(name: &str) -> String {
    find_bucket(name)
        .map(|b| format(&[("bucket", b)]))
        .unwrap_or_default()
}

/// Formats a list of key value pairs, skipping empty values.
pub fn format(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn consume_segment(remains: &str) -> Option<usize> {
    let i = remains.find('/').unwrap_or(remains.len());
    (i != 0).then_some(i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("projects/_/buckets/b", Some("projects/_/buckets/b"))]
    #[test_case("projects/p/buckets/b/folders/a/b/", Some("projects/p/buckets/b"))]
    #[test_case("projects/p/buckets/b/anywhereCaches/us-central1-a", Some("projects/p/buckets/b"))]
    #[test_case("projects/p/buckets/b/storageLayout", Some("projects/p/buckets/b"))]
    #[test_case("projects//buckets/b", None)]
    #[test_case("projects/p/buckets/", None)]
    #[test_case("projects/p/buckets", None)]
    #[test_case("projects/p/locations/global/intelligenceConfig", None)]
    #[test_case("buckets/b", None)]
    #[test_case("", None)]
    fn find(input: &str, want: Option<&str>) {
        assert_eq!(find_bucket(input), want);
    }

    #[test]
    fn routing() {
        assert_eq!(
            bucket_routing("projects/_/buckets/b/folders/f/"),
            "bucket=projects/_/buckets/b"
        );
        assert_eq!(bucket_routing("not-a-bucket"), "");
    }

    #[test_case(&[], ""; "empty")]
    #[test_case(&[("bucket", "projects/_/buckets/b")], "bucket=projects/_/buckets/b"; "single")]
    #[test_case(&[("bucket", "b"), ("name", "")], "bucket=b"; "skip empty")]
    #[test_case(&[("project", "p"), ("bucket", "b")], "project=p&bucket=b"; "multiple")]
    fn format_params(input: &[(&str, &str)], want: &str) {
        assert_eq!(format(input), want);
    }
}
