// File: crates/fuelband-core/src/coords.rs
// Summary: Shared coordinate space; day-to-x and price-to-y transform pair.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::sample::CalendarDay;

/// The shared (day-offset, cents) coordinate space.
///
/// X is whole days elapsed since `epoch`; Y is cents with one-decimal
/// resolution. Both transforms are pure and linear, so band and trend
/// geometry built from the same `ChartSpace` overlay exactly. The time zone
/// and epoch are explicit configuration, not process-global state, so tests
/// can substitute any zone deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartSpace {
    pub tz: FixedOffset,
    pub epoch: NaiveDate,
}

impl ChartSpace {
    pub const fn new(tz: FixedOffset, epoch: NaiveDate) -> Self {
        Self { tz, epoch }
    }

    /// Normalize an instant to the calendar day it falls on in `tz`.
    pub fn day_of(&self, instant: DateTime<Utc>) -> CalendarDay {
        CalendarDay(instant.with_timezone(&self.tz).date_naive())
    }

    /// Days elapsed since the reference epoch.
    #[inline]
    pub fn x_value(&self, day: CalendarDay) -> f64 {
        (day.0 - self.epoch).num_days() as f64
    }

    /// Inverse of `x_value` for whole-day offsets.
    pub fn day_from_x(&self, x: f64) -> Option<CalendarDay> {
        self.epoch
            .checked_add_signed(chrono::Duration::days(x.round() as i64))
            .map(CalendarDay)
    }

    /// Tenths of a cent to cents.
    #[inline]
    pub fn y_value(&self, price_tenths: i16) -> f64 {
        f64::from(price_tenths) / 10.0
    }

    /// Inverse of `y_value`, rounding to the nearest tenth of a cent.
    #[inline]
    pub fn price_from_y(&self, y: f64) -> i16 {
        (y * 10.0).round() as i16
    }
}

impl Default for ChartSpace {
    fn default() -> Self {
        // UTC, days counted from 2001-01-01.
        Self {
            tz: FixedOffset::east_opt(0).unwrap(),
            epoch: NaiveDate::from_ymd_opt(2001, 1, 1).unwrap(),
        }
    }
}
