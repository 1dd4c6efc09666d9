//! # satchel-time
//!
//! Timezone-aware date/time helpers built on `chrono` and `chrono-tz`.
//!
//! This crate provides:
//! - `now`, `from_timestamp` and `create` in any IANA timezone
//! - `DateTimeExt` with calendar predicates (`is_today`, `is_past`, ...)
//! - The `Clock` port so "now" can be fixed in tests

pub mod clock;
pub mod datetime;
pub mod ext;

// Re-export main operations
pub use clock::{Clock, FixedClock, SystemClock};
pub use datetime::{create, from_timestamp, now, now_at, parse_timezone};
pub use ext::DateTimeExt;

pub use chrono_tz::Tz;
