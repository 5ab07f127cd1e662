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

/// `FieldMask` represents a set of symbolic field paths.
///
/// Update RPCs such as `UpdateBucket` and `UpdateAnywhereCache` use a field
/// mask to name the fields of the resource that should change. The service
/// ignores the values of all fields not covered by the mask. Read RPCs use a
/// field mask (e.g. `read_mask`) to select the fields returned.
///
/// # JSON Mapping
///
/// In JSON a field mask is a single string with the paths separated by
/// commas, e.g. `"labels,retentionPolicy"`.
///
/// # Examples
/// ```
/// # use gcs_wkt::FieldMask;
/// let mask = FieldMask::default().set_paths(["ttl", "admission_policy"]);
/// assert_eq!(mask.paths, vec!["ttl", "admission_policy"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct FieldMask {
    /// The set of field mask paths.
    pub paths: Vec<String>,
}

impl FieldMask {
    /// Sets the value of [paths][FieldMask::paths].
    pub fn set_paths<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.paths = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl crate::message::Message for FieldMask {
    fn typename() -> &'static str {
        "type.googleapis.com/google.protobuf.FieldMask"
    }

    fn uses_value_field() -> bool {
        true
    }
}

impl serde::ser::Serialize for FieldMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        self.paths.join(",").serialize(serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for FieldMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let paths = String::deserialize(deserializer)?;
        if paths.is_empty() {
            return Ok(FieldMask::default());
        }
        Ok(FieldMask::default().set_paths(paths.split(',')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(vec![], "")]
    #[test_case(vec!["labels"], "labels")]
    #[test_case(vec!["labels", "retentionPolicy", "softDeletePolicy.retentionDuration"], "labels,retentionPolicy,softDeletePolicy.retentionDuration")]
    fn roundtrip(paths: Vec<&str>, want: &str) -> anyhow::Result<()> {
        let mask = FieldMask::default().set_paths(paths.clone());
        let got = serde_json::to_value(&mask)?;
        assert_eq!(got, json!(want));
        let rt = serde_json::from_value::<FieldMask>(got)?;
        assert_eq!(rt.paths, paths);
        Ok(())
    }

    #[test]
    fn deserialize_unexpected_type() {
        let got = serde_json::from_value::<FieldMask>(json!({"paths": ["a"]}));
        assert!(got.is_err(), "{got:?}");
    }
}
