//! Calendar predicates on `chrono::DateTime`.
//!
//! Every predicate that depends on "now" has an `*_at` form that reads the
//! current instant from a `Clock`; the plain form uses the system clock.

use crate::clock::{Clock, SystemClock};
use chrono::{DateTime, TimeZone, Utc};

/// Convenience predicates for any timezone-aware date/time
pub trait DateTimeExt {
    /// Same calendar day as now, judged in this value's own timezone
    fn is_today(&self) -> bool {
        self.is_today_at(&SystemClock)
    }

    fn is_today_at(&self, clock: &impl Clock) -> bool;

    /// Strictly before now
    fn is_past(&self) -> bool {
        self.is_past_at(&SystemClock)
    }

    fn is_past_at(&self, clock: &impl Clock) -> bool;

    /// Strictly after now
    fn is_future(&self) -> bool {
        self.is_future_at(&SystemClock)
    }

    fn is_future_at(&self, clock: &impl Clock) -> bool;

    /// Whether this instant lies between `start` and `end`, both inclusive.
    /// The bounds may be given in either order.
    fn is_between_dates<A: TimeZone, B: TimeZone>(
        &self,
        start: &DateTime<A>,
        end: &DateTime<B>,
    ) -> bool;

    /// Whole days between this instant and `other` (now when `None`),
    /// ignoring direction
    fn diff_in_days_absolute(&self, other: Option<DateTime<Utc>>) -> i64 {
        self.diff_in_days_absolute_at(other, &SystemClock)
    }

    fn diff_in_days_absolute_at(&self, other: Option<DateTime<Utc>>, clock: &impl Clock) -> i64;
}

impl<Tz: TimeZone> DateTimeExt for DateTime<Tz> {
    fn is_today_at(&self, clock: &impl Clock) -> bool {
        clock.now().with_timezone(&self.timezone()).date_naive() == self.date_naive()
    }

    fn is_past_at(&self, clock: &impl Clock) -> bool {
        self.naive_utc() < clock.now().naive_utc()
    }

    fn is_future_at(&self, clock: &impl Clock) -> bool {
        self.naive_utc() > clock.now().naive_utc()
    }

    fn is_between_dates<A: TimeZone, B: TimeZone>(
        &self,
        start: &DateTime<A>,
        end: &DateTime<B>,
    ) -> bool {
        let (start, end) = (start.naive_utc(), end.naive_utc());
        let (low, high) = if start <= end { (start, end) } else { (end, start) };
        let instant = self.naive_utc();
        low <= instant && instant <= high
    }

    fn diff_in_days_absolute_at(&self, other: Option<DateTime<Utc>>, clock: &impl Clock) -> i64 {
        let other = other.unwrap_or_else(|| clock.now());
        self.naive_utc()
            .signed_duration_since(other.naive_utc())
            .num_days()
            .abs()
    }
}
