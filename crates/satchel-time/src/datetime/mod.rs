//! Construction of timezone-aware date/times.
//!
//! Every constructor takes an optional IANA timezone name and falls back
//! to UTC when none is given.

use crate::clock::{Clock, SystemClock};
use chrono::{DateTime, LocalResult, TimeZone, Utc};
use chrono_tz::Tz;
use satchel_core::{SatchelError, SatchelResult};
use tracing::debug;

/// Resolve an IANA timezone name such as `"America/New_York"`
pub fn parse_timezone(name: &str) -> SatchelResult<Tz> {
    name.parse::<Tz>().map_err(|_| SatchelError::InvalidTimezone {
        name: name.to_string(),
    })
}

fn zone(timezone: Option<&str>) -> SatchelResult<Tz> {
    timezone.map_or(Ok(chrono_tz::UTC), parse_timezone)
}

/// Current time in `timezone` (UTC when `None`)
pub fn now(timezone: Option<&str>) -> SatchelResult<DateTime<Tz>> {
    now_at(&SystemClock, timezone)
}

/// Current time according to `clock`, in `timezone`
pub fn now_at(clock: &impl Clock, timezone: Option<&str>) -> SatchelResult<DateTime<Tz>> {
    let tz = zone(timezone)?;
    Ok(clock.now().with_timezone(&tz))
}

/// Instant `timestamp` seconds after the Unix epoch, seen in `timezone`
pub fn from_timestamp(timestamp: i64, timezone: Option<&str>) -> SatchelResult<DateTime<Tz>> {
    let tz = zone(timezone)?;
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|utc| utc.with_timezone(&tz))
        .ok_or(SatchelError::InvalidTimestamp { timestamp })
}

/// Local wall-clock time in `timezone`.
///
/// Fails for impossible dates and for local times skipped by a DST
/// transition. A local time that occurs twice resolves to the earlier
/// instant.
pub fn create(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    timezone: Option<&str>,
) -> SatchelResult<DateTime<Tz>> {
    let tz = zone(timezone)?;
    let input = || {
        format!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} {}",
            year,
            month,
            day,
            hour,
            minute,
            second,
            tz.name()
        )
    };

    match tz.with_ymd_and_hms(year, month, day, hour, minute, second) {
        LocalResult::Single(datetime) => Ok(datetime),
        LocalResult::Ambiguous(earliest, _) => {
            debug!("Ambiguous local time {}, using the earlier offset", input());
            Ok(earliest)
        },
        LocalResult::None => Err(SatchelError::InvalidDateTime { input: input() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_from_timestamp() {
        let datetime = from_timestamp(1_609_459_200, Some("UTC")).unwrap();
        assert_eq!(datetime.timestamp(), 1_609_459_200);
        assert_eq!((datetime.year(), datetime.month(), datetime.day()), (2021, 1, 1));
        assert_eq!(datetime.hour(), 0);
    }

    #[test]
    fn test_from_timestamp_in_zone() {
        let datetime = from_timestamp(1_609_459_200, Some("Asia/Bangkok")).unwrap();
        assert_eq!(datetime.timestamp(), 1_609_459_200);
        assert_eq!(datetime.hour(), 7);
    }

    #[test]
    fn test_from_timestamp_out_of_range() {
        let err = from_timestamp(i64::MAX, None).unwrap_err();
        assert!(matches!(err, SatchelError::InvalidTimestamp { timestamp } if timestamp == i64::MAX));
    }

    #[test]
    fn test_unknown_timezone() {
        let err = now(Some("Mars/Olympus_Mons")).unwrap_err();
        assert!(matches!(err, SatchelError::InvalidTimezone { ref name } if name == "Mars/Olympus_Mons"));
        assert!(create(2024, 1, 1, 0, 0, 0, Some("nope")).is_err());
    }

    #[test]
    fn test_now_defaults_to_utc() {
        let datetime = now(None).unwrap();
        assert_eq!(datetime.timezone(), chrono_tz::UTC);
    }

    #[test]
    fn test_now_at_fixed_clock() {
        let at = Utc.with_ymd_and_hms(2024, 3, 18, 12, 0, 0).unwrap();
        let clock = FixedClock::new(at);
        let datetime = now_at(&clock, Some("America/New_York")).unwrap();
        assert_eq!(datetime.timestamp(), at.timestamp());
        assert_eq!(datetime.hour(), 8);
    }

    #[test]
    fn test_create_timezones_differ() {
        let utc = create(2024, 3, 18, 12, 0, 0, Some("UTC")).unwrap();
        let new_york = create(2024, 3, 18, 12, 0, 0, Some("America/New_York")).unwrap();
        assert_ne!(utc.timestamp(), new_york.timestamp());
        assert_eq!(new_york.timestamp() - utc.timestamp(), 4 * 3600);
    }

    #[test]
    fn test_create_invalid_date() {
        let err = create(2024, 2, 30, 0, 0, 0, None).unwrap_err();
        assert!(matches!(err, SatchelError::InvalidDateTime { .. }));
        assert!(create(2024, 1, 1, 24, 0, 0, None).is_err());
    }

    #[test]
    fn test_create_skipped_local_time() {
        // Clocks jump from 02:00 to 03:00 on 2024-03-10 in New York
        let err = create(2024, 3, 10, 2, 30, 0, Some("America/New_York")).unwrap_err();
        assert!(matches!(err, SatchelError::InvalidDateTime { ref input } if input.contains("America/New_York")));
    }

    #[test]
    fn test_create_repeated_local_time_uses_earliest() {
        // 01:30 happens twice on 2024-11-03 in New York (EDT then EST)
        let datetime = create(2024, 11, 3, 1, 30, 0, Some("America/New_York")).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap();
        assert_eq!(datetime.timestamp(), expected.timestamp());
    }
}
