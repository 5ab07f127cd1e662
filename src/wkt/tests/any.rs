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

extern crate gcs_wkt as wkt;

use serde_json::json;
use wkt::{Any, AnyError, Duration, Timestamp};

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
struct CacheMetadata {
    #[serde(skip_serializing_if = "String::is_empty")]
    anywhere_cache_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    create_time: Option<Timestamp>,
}

impl wkt::message::Message for CacheMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.storage.control.v2.CreateAnywhereCacheMetadata"
    }
}

#[test]
fn nested_well_known_types() -> anyhow::Result<()> {
    let input = CacheMetadata {
        anywhere_cache_id: "us-central1-a".into(),
        ttl: Some(Duration::clamp(86400, 0)),
        create_time: Some(Timestamp::clamp(1747388772, 0)),
    };
    let any = Any::from_msg(&input)?;
    let got = serde_json::to_value(&any)?;
    let want = json!({
        "@type": "type.googleapis.com/google.storage.control.v2.CreateAnywhereCacheMetadata",
        "anywhereCacheId": "us-central1-a",
        "ttl": "86400s",
        "createTime": "2025-05-16T09:46:12Z",
    });
    assert_eq!(got, want);

    let rt = serde_json::from_value::<Any>(got)?;
    assert_eq!(rt.to_msg::<CacheMetadata>()?, input);
    Ok(())
}

#[test]
fn mismatched_type() -> anyhow::Result<()> {
    let any = Any::from_msg(&CacheMetadata::default())?;
    let got = any.to_msg::<Duration>();
    assert!(matches!(got, Err(AnyError::TypeMismatch { .. })), "{got:?}");
    Ok(())
}
