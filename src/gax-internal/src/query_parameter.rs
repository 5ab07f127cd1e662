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

//! Adds query parameters to HTTP requests.
//!
//! Query parameters in the HTTP-JSON RPCs may be strings, numbers, booleans,
//! or messages. Well-known types like `google.protobuf.FieldMask` serialize to
//! a single string. Converting the value to [serde_json::Value] first lets the
//! transports treat all of them the same way.

/// A value that can be added to a request as one or more query parameters.
pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl QueryParameter for serde_json::Value {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            // Nested fields use `outer.inner` names.
            Self::Object(object) => object.into_iter().fold(builder, |builder, (k, v)| {
                v.add(builder, format!("{name}.{k}").as_str())
            }),
            // Repeated fields repeat the parameter.
            Self::Array(array) => array
                .into_iter()
                .fold(builder, |builder, v| v.add(builder, name)),
            Self::Null => builder,
            Self::String(s) if s.is_empty() => builder,
            Self::String(s) => builder.query(&[(name, s)]),
            Self::Number(n) => builder.query(&[(name, format!("{n}"))]),
            Self::Bool(b) => builder.query(&[(name, b)]),
        }
    }
}

impl QueryParameter for Option<wkt::FieldMask> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            None => builder,
            Some(mask) => serde_json::Value::String(mask.paths.join(",")).add(builder, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn query(value: impl QueryParameter) -> anyhow::Result<Vec<String>> {
        let builder = reqwest::Client::builder()
            .build()?
            .get("https://storage.googleapis.com/v2/unused");
        let request = value.add(builder, "name").build()?;
        Ok(request
            .url()
            .query_pairs()
            .map(|(k, v)| format!("{k}={v}"))
            .collect())
    }

    #[test_case(json!("abc123"), vec!["name=abc123"]; "string")]
    #[test_case(json!(""), Vec::<&str>::new(); "empty string")]
    #[test_case(json!(7.5), vec!["name=7.5"]; "number")]
    #[test_case(json!(true), vec!["name=true"]; "boolean")]
    #[test_case(json!(null), Vec::<&str>::new(); "null")]
    #[test_case(json!([1, 3]), vec!["name=1", "name=3"]; "array")]
    #[test_case(json!({"a": 1, "b": {"c": "x"}}), vec!["name.a=1", "name.b.c=x"]; "object")]
    fn json_values(value: serde_json::Value, want: Vec<&str>) -> anyhow::Result<()> {
        assert_eq!(query(value)?, want);
        Ok(())
    }

    #[test]
    fn field_mask() -> anyhow::Result<()> {
        let mask = wkt::FieldMask::default().set_paths(["edition_config", "filter"]);
        assert_eq!(query(Some(mask))?, vec!["name=edition_config,filter"]);
        assert_eq!(query(None::<wkt::FieldMask>)?, Vec::<String>::new());
        Ok(())
    }
}
