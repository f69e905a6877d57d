// File: crates/fuelband-core/src/sample.rs
// Summary: Per-day price samples and the day-keyed index both generators consume.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::GeometryError;

/// A date normalized to midnight of the charting time zone.
/// Equality is exact-day equality; ordering follows the calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(pub NaiveDate);

impl CalendarDay {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Following calendar day, `None` only at the end of the date range.
    pub fn next(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Day shifted by a signed number of days.
    pub fn offset(self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(chrono::Duration::days(days)).map(Self)
    }
}

impl std::fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One percentile band's observation for one day.
/// Prices are tenths of a cent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandSample {
    pub day: CalendarDay,
    pub high: i16,
    pub low: i16,
}

impl BandSample {
    /// Try to construct a sample enforcing the band invariant: low <= high.
    pub fn try_new(day: CalendarDay, high: i16, low: i16) -> Result<Self, &'static str> {
        if low > high {
            return Err("low above high");
        }
        Ok(Self { day, high, low })
    }
}

/// One trend observation for one day, in tenths of a cent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrendSample {
    pub day: CalendarDay,
    pub value: i16,
}

impl TrendSample {
    pub const fn new(day: CalendarDay, value: i16) -> Self {
        Self { day, value }
    }
}

/// Index raw `(day, value)` records by calendar day.
///
/// Records may arrive unsorted and may repeat a day with an identical value;
/// a repeated day with a *different* value is a data-integrity error and is
/// surfaced instead of silently overwritten. An empty sequence is rejected
/// so callers can show an empty-chart state.
pub(crate) fn index_by_day<V: PartialEq>(
    records: impl IntoIterator<Item = (CalendarDay, V)>,
) -> Result<BTreeMap<CalendarDay, V>, GeometryError> {
    let mut by_day = BTreeMap::new();
    for (day, value) in records {
        match by_day.entry(day) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(slot) => {
                if *slot.get() != value {
                    return Err(GeometryError::ConflictingDay { day });
                }
            }
        }
    }
    if by_day.is_empty() {
        return Err(GeometryError::NoData);
    }
    Ok(by_day)
}
