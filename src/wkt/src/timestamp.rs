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

/// Well-known point in time representation for Google APIs.
///
/// A Timestamp represents a point in time independent of any time zone or
/// local calendar, encoded as a count of seconds and fractions of seconds at
/// nanosecond resolution, relative to the Unix epoch.
///
/// The range is from 0001-01-01T00:00:00Z to 9999-12-31T23:59:59.999999999Z,
/// which guarantees the value can be converted to and from an
/// [RFC 3339](https://www.ietf.org/rfc/rfc3339.txt) string.
///
/// # Examples
/// ```
/// # use gcs_wkt::{Timestamp, TimestampError};
/// let ts = Timestamp::try_from("2025-05-16T09:46:12.500Z")?;
/// assert_eq!(ts.seconds(), 1747388772);
/// assert_eq!(ts.nanos(), 500_000_000);
/// assert_eq!(String::from(ts), "2025-05-16T09:46:12.500Z");
/// # Ok::<(), TimestampError>(())
/// ```
///
/// # JSON Mapping
///
/// Timestamps are encoded as RFC 3339 strings, always in UTC (the `Z`
/// suffix), with 0, 3, 6, or 9 fractional digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

/// Represent failures in converting or creating [Timestamp] instances.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TimestampError {
    /// One of the components (seconds and/or nanoseconds) was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// There was a problem parsing a timestamp.
    #[error("cannot deserialize timestamp, source={0}")]
    Deserialize(#[source] BoxedError),
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = TimestampError;

impl Timestamp {
    const NS: i32 = 1_000_000_000;

    /// The minimum value for the `seconds` component. Corresponds to '0001-01-01T00:00:00Z'.
    pub const MIN_SECONDS: i64 = -62135596800;

    /// The maximum value for the `seconds` component. Corresponds to '9999-12-31T23:59:59Z'.
    pub const MAX_SECONDS: i64 = 253402300799;

    /// The minimum value for the `nanos` component.
    pub const MIN_NANOS: i32 = 0;

    /// The maximum value for the `nanos` component.
    pub const MAX_NANOS: i32 = Self::NS - 1;

    /// Creates a new [Timestamp] from the seconds and nanoseconds.
    ///
    /// Returns an error if either component is out of range.
    ///
    /// # Examples
    /// ```
    /// # use gcs_wkt::{Timestamp, TimestampError};
    /// let ts = Timestamp::new(1747388772, 0)?;
    /// assert_eq!(String::from(ts), "2025-05-16T09:46:12Z");
    ///
    /// let ts = Timestamp::new(1747388772, 2_000_000_000);
    /// assert!(matches!(ts, Err(TimestampError::OutOfRange)));
    /// # Ok::<(), TimestampError>(())
    /// ```
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(Self::MIN_NANOS..=Self::MAX_NANOS).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        Ok(Self { seconds, nanos })
    }

    /// Creates a normalized, clamped [Timestamp].
    ///
    /// Nanoseconds outside `[0, 999_999_999]` carry into the seconds, and the
    /// result saturates at the minimum and maximum timestamps.
    ///
    /// # Examples
    /// ```
    /// # use gcs_wkt::Timestamp;
    /// let ts = Timestamp::clamp(1747388772, 2_000_000_000);
    /// assert_eq!(String::from(ts), "2025-05-16T09:46:14Z");
    /// ```
    pub fn clamp(seconds: i64, nanos: i32) -> Self {
        let carry = nanos.div_euclid(Self::NS) as i64;
        let nanos = nanos.rem_euclid(Self::NS);
        let seconds = seconds.saturating_add(carry);
        if seconds < Self::MIN_SECONDS {
            return Self {
                seconds: Self::MIN_SECONDS,
                nanos: 0,
            };
        }
        if seconds > Self::MAX_SECONDS {
            return Self {
                seconds: Self::MAX_SECONDS,
                nanos: 0,
            };
        }
        Self { seconds, nanos }
    }

    /// Seconds of UTC time since the Unix epoch.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Non-negative fractions of a second at nanosecond resolution.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

impl crate::message::Message for Timestamp {
    fn typename() -> &'static str {
        "type.googleapis.com/google.protobuf.Timestamp"
    }

    fn uses_value_field() -> bool {
        true
    }
}

/// Formats the timestamp as an RFC 3339 string.
impl From<Timestamp> for String {
    fn from(timestamp: Timestamp) -> Self {
        let Ok(dt) = time::OffsetDateTime::try_from(timestamp) else {
            // The range of `Timestamp` is a subset of the range of `OffsetDateTime`.
            return String::new();
        };
        let seconds = format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            dt.year(),
            u8::from(dt.month()),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second()
        );
        let nanos = timestamp.nanos;
        match nanos {
            0 => format!("{seconds}Z"),
            n if n % 1_000_000 == 0 => format!("{seconds}.{:03}Z", n / 1_000_000),
            n if n % 1_000 == 0 => format!("{seconds}.{:06}Z", n / 1_000),
            n => format!("{seconds}.{n:09}Z"),
        }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from(*self))
    }
}

/// Parses an RFC 3339 string.
impl TryFrom<&str> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let dt = time::OffsetDateTime::parse(value, &time::format_description::well_known::Rfc3339)
            .map_err(|e| Error::Deserialize(e.into()))?;
        Timestamp::try_from(dt)
    }
}

impl TryFrom<&String> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Timestamp::try_from(value.as_str())
    }
}

/// Converts from [time::OffsetDateTime], which may be out of range.
impl TryFrom<time::OffsetDateTime> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: time::OffsetDateTime) -> Result<Self, Self::Error> {
        let seconds = value.unix_timestamp();
        let nanos = (value.unix_timestamp_nanos() - seconds as i128 * Self::NS as i128) as i32;
        Self::new(seconds, nanos)
    }
}

/// Converts to [time::OffsetDateTime].
impl TryFrom<Timestamp> for time::OffsetDateTime {
    type Error = time::error::ComponentRange;

    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        let dt = time::OffsetDateTime::from_unix_timestamp(value.seconds())?;
        Ok(dt + time::Duration::nanoseconds(value.nanos() as i64))
    }
}

/// Converts from [std::time::SystemTime], saturating at the range limits.
impl From<std::time::SystemTime> for Timestamp {
    fn from(value: std::time::SystemTime) -> Self {
        match value.duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => Timestamp::clamp(
                i64::try_from(d.as_secs()).unwrap_or(Self::MAX_SECONDS),
                d.subsec_nanos() as i32,
            ),
            Err(e) => {
                let d = e.duration();
                Timestamp::clamp(
                    i64::try_from(d.as_secs())
                        .map(|s| -s)
                        .unwrap_or(Self::MIN_SECONDS),
                    -(d.subsec_nanos() as i32),
                )
            }
        }
    }
}

impl serde::ser::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        String::from(*self).serialize(serializer)
    }
}

struct TimestampVisitor;

impl serde::de::Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with a timestamp in RFC 3339 format")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Timestamp::try_from(value).map_err(E::custom)
    }
}

impl<'de> serde::de::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test_case(Timestamp::MIN_SECONDS, 0; "min")]
    #[test_case(Timestamp::MAX_SECONDS, Timestamp::MAX_NANOS; "max")]
    #[test_case(0, 0; "epoch")]
    fn edge_of_range(seconds: i64, nanos: i32) -> Result {
        let ts = Timestamp::new(seconds, nanos)?;
        assert_eq!(ts.seconds(), seconds);
        assert_eq!(ts.nanos(), nanos);
        Ok(())
    }

    #[test_case(Timestamp::MIN_SECONDS - 1, 0; "below min")]
    #[test_case(Timestamp::MAX_SECONDS + 1, 0; "above max")]
    #[test_case(0, -1; "negative nanos")]
    #[test_case(0, 1_000_000_000; "nanos overflow")]
    fn out_of_range(seconds: i64, nanos: i32) {
        let got = Timestamp::new(seconds, nanos);
        assert!(matches!(got, Err(TimestampError::OutOfRange)), "{got:?}");
    }

    #[test_case(0, 1_500_000_000, 1, 500_000_000; "carry positive")]
    #[test_case(10, -1, 9, 999_999_999; "carry negative")]
    #[test_case(Timestamp::MAX_SECONDS, 1_000_000_000, Timestamp::MAX_SECONDS, 0; "saturate max")]
    #[test_case(Timestamp::MIN_SECONDS, -1, Timestamp::MIN_SECONDS, 0; "saturate min")]
    fn clamp(seconds: i64, nanos: i32, want_seconds: i64, want_nanos: i32) {
        let got = Timestamp::clamp(seconds, nanos);
        assert_eq!(got.seconds(), want_seconds);
        assert_eq!(got.nanos(), want_nanos);
    }

    #[test_case(0, 0, "1970-01-01T00:00:00Z")]
    #[test_case(0, 10_000_000, "1970-01-01T00:00:00.010Z")]
    #[test_case(0, 10_000, "1970-01-01T00:00:00.000010Z")]
    #[test_case(0, 1, "1970-01-01T00:00:00.000000001Z")]
    #[test_case(Timestamp::MIN_SECONDS, 0, "0001-01-01T00:00:00Z")]
    #[test_case(Timestamp::MAX_SECONDS, Timestamp::MAX_NANOS, "9999-12-31T23:59:59.999999999Z")]
    fn roundtrip(seconds: i64, nanos: i32, want: &str) -> Result {
        let ts = Timestamp::new(seconds, nanos)?;
        let got = serde_json::to_value(ts)?;
        assert_eq!(got, json!(want));
        let rt = serde_json::from_value::<Timestamp>(got)?;
        assert_eq!(rt, ts);
        Ok(())
    }

    #[test]
    fn parse_with_offset() -> Result {
        let got = Timestamp::try_from("2025-05-16T11:46:12+02:00")?;
        assert_eq!(got, Timestamp::new(1747388772, 0)?);
        Ok(())
    }

    #[test_case("not-a-timestamp")]
    #[test_case("2025-13-01T00:00:00Z")]
    #[test_case("")]
    fn parse_errors(input: &str) {
        let got = Timestamp::try_from(input);
        assert!(matches!(got, Err(TimestampError::Deserialize(_))), "{got:?}");
    }

    #[test]
    fn deserialize_unexpected_type() {
        let got = serde_json::from_value::<Timestamp>(json!({"seconds": 1}));
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn from_system_time() {
        let epoch = std::time::UNIX_EPOCH;
        let got = Timestamp::from(epoch + std::time::Duration::new(123, 456));
        assert_eq!(got, Timestamp::clamp(123, 456));
        let got = Timestamp::from(epoch - std::time::Duration::new(1, 500_000_000));
        assert_eq!(got, Timestamp::clamp(-2, 500_000_000));
    }

    #[test]
    fn to_offset_date_time() -> Result {
        use time::macros::datetime;
        let ts = Timestamp::try_from("2025-05-16T09:46:12Z")?;
        let dt = time::OffsetDateTime::try_from(ts)?;
        assert_eq!(dt, datetime!(2025-05-16 09:46:12 UTC));
        Ok(())
    }
}
