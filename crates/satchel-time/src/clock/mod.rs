//! Source of the current instant.

use chrono::{DateTime, Duration, Utc};
use std::sync::RwLock;

/// Provides the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// System clock - uses real time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant until moved explicitly
#[derive(Debug)]
pub struct FixedClock {
    frozen: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            frozen: RwLock::new(at),
        }
    }

    /// Move the frozen time forward (or back, for a negative duration)
    pub fn advance(&self, by: Duration) {
        let mut frozen = self.frozen.write().unwrap_or_else(|e| e.into_inner());
        *frozen += by;
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.frozen.write().unwrap_or_else(|e| e.into_inner()) = at;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.frozen.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_is_frozen() {
        let at = Utc.with_ymd_and_hms(2024, 3, 18, 12, 0, 0).unwrap();
        let clock = FixedClock::new(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), at);
    }

    #[test]
    fn test_fixed_clock_moves() {
        let at = Utc.with_ymd_and_hms(2024, 3, 18, 12, 0, 0).unwrap();
        let clock = FixedClock::new(at);

        clock.advance(Duration::hours(36));
        assert_eq!(clock.now(), Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap());

        clock.set(at);
        assert_eq!(clock.now(), at);
    }

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock::new();
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}
