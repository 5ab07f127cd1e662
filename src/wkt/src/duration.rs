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

/// Well-known duration representation for Google APIs.
///
/// A Duration represents a signed, fixed-length span of time as a count of
/// seconds and fractions of seconds at nanosecond resolution. The range is
/// approximately +-10,000 years.
///
/// # Examples
/// ```
/// # use gcs_wkt::{Duration, DurationError};
/// let d = Duration::try_from("86400s")?;
/// assert_eq!(d.seconds(), 86400);
/// assert_eq!(d, Duration::new(86400, 0)?);
/// assert_eq!(String::from(Duration::clamp(1, 500_000_000)), "1.5s");
/// # Ok::<(), DurationError>(())
/// ```
///
/// # JSON Mapping
///
/// Durations are encoded as a string with the number of seconds, an optional
/// fraction, and the `s` suffix, e.g. `"3s"` or `"3.000001s"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct Duration {
    seconds: i64,
    nanos: i32,
}

/// Represent failures in converting or creating [Duration] instances.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DurationError {
    /// One of the components (seconds and/or nanoseconds) was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// The sign of the seconds component does not match the sign of the nanoseconds component.
    #[error("if seconds and nanoseconds are not zero, they must have the same sign")]
    MismatchedSigns,

    /// Cannot parse the duration.
    #[error("cannot deserialize the duration: {0}")]
    Deserialize(#[source] BoxedError),
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = DurationError;

impl Duration {
    const NS: i32 = 1_000_000_000;

    /// The maximum value for the `seconds` component, approximately 10,000 years.
    pub const MAX_SECONDS: i64 = 315_576_000_000;

    /// The minimum value for the `seconds` component, approximately -10,000 years.
    pub const MIN_SECONDS: i64 = -Self::MAX_SECONDS;

    /// The maximum value for the `nanos` component.
    pub const MAX_NANOS: i32 = Self::NS - 1;

    /// The minimum value for the `nanos` component.
    pub const MIN_NANOS: i32 = -Self::MAX_NANOS;

    /// Creates a [Duration] from the seconds and nanoseconds components.
    ///
    /// Returns an error if either component is out of range, or if the
    /// components have different signs.
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(Self::MIN_NANOS..=Self::MAX_NANOS).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        if (seconds > 0 && nanos < 0) || (seconds < 0 && nanos > 0) {
            return Err(Error::MismatchedSigns);
        }
        Ok(Self { seconds, nanos })
    }

    /// Creates a normalized, clamped [Duration].
    ///
    /// Excess nanoseconds carry into the seconds, the signs are made
    /// consistent, and the result saturates at the range limits.
    pub fn clamp(seconds: i64, nanos: i32) -> Self {
        let mut seconds = seconds.saturating_add((nanos / Self::NS) as i64);
        let mut nanos = nanos % Self::NS;
        if seconds > 0 && nanos < 0 {
            seconds -= 1;
            nanos += Self::NS;
        } else if seconds < 0 && nanos > 0 {
            seconds += 1;
            nanos -= Self::NS;
        }
        if seconds > Self::MAX_SECONDS {
            return Self {
                seconds: Self::MAX_SECONDS,
                nanos: 0,
            };
        }
        if seconds < Self::MIN_SECONDS {
            return Self {
                seconds: Self::MIN_SECONDS,
                nanos: 0,
            };
        }
        Self { seconds, nanos }
    }

    /// Signed seconds of the span of time.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Signed fractions of a second at nanosecond resolution.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

impl crate::message::Message for Duration {
    fn typename() -> &'static str {
        "type.googleapis.com/google.protobuf.Duration"
    }

    fn uses_value_field() -> bool {
        true
    }
}

impl From<Duration> for String {
    fn from(duration: Duration) -> String {
        let sign = if duration.seconds < 0 || duration.nanos < 0 {
            "-"
        } else {
            ""
        };
        let seconds = duration.seconds.unsigned_abs();
        let nanos = duration.nanos.unsigned_abs();
        match nanos {
            0 => format!("{sign}{seconds}s"),
            n if n % 1_000_000 == 0 => format!("{sign}{seconds}.{:03}s", n / 1_000_000),
            n if n % 1_000 == 0 => format!("{sign}{seconds}.{:06}s", n / 1_000),
            n => format!("{sign}{seconds}.{n:09}s"),
        }
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from(*self))
    }
}

impl TryFrom<&str> for Duration {
    type Error = DurationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let digits = value
            .strip_suffix('s')
            .ok_or_else(|| Error::Deserialize("missing trailing 's'".into()))?;
        let (negative, digits) = match digits.strip_prefix('-') {
            Some(d) => (true, d),
            None => (false, digits),
        };
        let (whole, fraction) = match digits.split_once('.') {
            None => (digits, ""),
            Some((w, f)) => (w, f),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Deserialize(
                format!("invalid seconds in {value}").into(),
            ));
        }
        if fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Deserialize(
                format!("invalid fractional seconds in {value}").into(),
            ));
        }
        let seconds = whole
            .parse::<i64>()
            .map_err(|e| Error::Deserialize(e.into()))?;
        let nanos = if fraction.is_empty() {
            0
        } else {
            format!("{fraction:0<9}")
                .parse::<i32>()
                .map_err(|e| Error::Deserialize(e.into()))?
        };
        if negative {
            Duration::new(-seconds, -nanos)
        } else {
            Duration::new(seconds, nanos)
        }
    }
}

impl TryFrom<&String> for Duration {
    type Error = DurationError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Duration::try_from(value.as_str())
    }
}

/// Converts from [std::time::Duration], which may exceed the range.
impl TryFrom<std::time::Duration> for Duration {
    type Error = DurationError;

    fn try_from(value: std::time::Duration) -> Result<Self, Self::Error> {
        let seconds = i64::try_from(value.as_secs()).map_err(|_| Error::OutOfRange)?;
        Duration::new(seconds, value.subsec_nanos() as i32)
    }
}

/// Converts to [std::time::Duration], which cannot represent negative spans.
impl TryFrom<Duration> for std::time::Duration {
    type Error = DurationError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        if value.seconds < 0 || value.nanos < 0 {
            return Err(Error::OutOfRange);
        }
        Ok(std::time::Duration::new(
            value.seconds as u64,
            value.nanos as u32,
        ))
    }
}

impl serde::ser::Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        String::from(*self).serialize(serializer)
    }
}

struct DurationVisitor;

impl serde::de::Visitor<'_> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with a duration in Google format ([sign]{seconds}.{nanos}s)")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Duration::try_from(value).map_err(E::custom)
    }
}

impl<'de> serde::de::Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(DurationVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test_case(Duration::MAX_SECONDS + 1, 0; "seconds above max")]
    #[test_case(Duration::MIN_SECONDS - 1, 0; "seconds below min")]
    #[test_case(0, Duration::MAX_NANOS + 1; "nanos above max")]
    #[test_case(0, Duration::MIN_NANOS - 1; "nanos below min")]
    fn out_of_range(seconds: i64, nanos: i32) {
        let got = Duration::new(seconds, nanos);
        assert!(matches!(got, Err(DurationError::OutOfRange)), "{got:?}");
    }

    #[test_case(1, -1)]
    #[test_case(-1, 1)]
    fn mismatched_sign(seconds: i64, nanos: i32) {
        let got = Duration::new(seconds, nanos);
        assert!(matches!(got, Err(DurationError::MismatchedSigns)), "{got:?}");
    }

    #[test_case(0, 2_000_000_001, 2, 1; "carry")]
    #[test_case(1, -1, 0, 999_999_999; "borrow positive")]
    #[test_case(-1, 1, 0, -999_999_999; "borrow negative")]
    #[test_case(Duration::MAX_SECONDS, 1_000_000_000, Duration::MAX_SECONDS, 0; "saturate max")]
    #[test_case(Duration::MIN_SECONDS, -1_000_000_000, Duration::MIN_SECONDS, 0; "saturate min")]
    fn clamp(seconds: i64, nanos: i32, want_seconds: i64, want_nanos: i32) {
        let got = Duration::clamp(seconds, nanos);
        assert_eq!((got.seconds(), got.nanos()), (want_seconds, want_nanos));
    }

    #[test_case(0, 0, "0s")]
    #[test_case(3, 0, "3s")]
    #[test_case(3, 1, "3.000000001s")]
    #[test_case(3, 1_000, "3.000001s")]
    #[test_case(3, 10_000_000, "3.010s")]
    #[test_case(-3, -500_000_000, "-3.500s")]
    #[test_case(0, -500_000_000, "-0.500s")]
    #[test_case(Duration::MAX_SECONDS, Duration::MAX_NANOS, "315576000000.999999999s")]
    fn roundtrip(seconds: i64, nanos: i32, want: &str) -> Result {
        let d = Duration::new(seconds, nanos)?;
        let got = serde_json::to_value(d)?;
        assert_eq!(got, json!(want));
        let rt = serde_json::from_value::<Duration>(got)?;
        assert_eq!(rt, d);
        Ok(())
    }

    #[test_case("1.5s", 1, 500_000_000)]
    #[test_case("0.1s", 0, 100_000_000)]
    #[test_case("-0.1s", 0, -100_000_000)]
    fn parse(input: &str, seconds: i64, nanos: i32) -> Result {
        let got = Duration::try_from(input)?;
        assert_eq!(got, Duration::new(seconds, nanos)?);
        Ok(())
    }

    #[test_case("1"; "missing suffix")]
    #[test_case("s"; "missing seconds")]
    #[test_case("1.s2"; "bad fraction")]
    #[test_case("1.0000000001s"; "too many fractional digits")]
    #[test_case("+1s"; "plus sign")]
    #[test_case("--1s"; "double sign")]
    #[test_case("315576000001s"; "out of range")]
    fn parse_errors(input: &str) {
        let got = Duration::try_from(input);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn std_conversions() -> Result {
        let d = Duration::try_from(std::time::Duration::from_millis(2500))?;
        assert_eq!(d, Duration::new(2, 500_000_000)?);
        let std = std::time::Duration::try_from(d)?;
        assert_eq!(std, std::time::Duration::from_millis(2500));

        let got = std::time::Duration::try_from(Duration::clamp(-1, 0));
        assert!(matches!(got, Err(DurationError::OutOfRange)), "{got:?}");
        let got = Duration::try_from(std::time::Duration::from_secs(u64::MAX));
        assert!(matches!(got, Err(DurationError::OutOfRange)), "{got:?}");
        Ok(())
    }
}
