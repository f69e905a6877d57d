// File: crates/fuelband-core/src/error.rs
// Summary: Error type surfaced by geometry construction.

use crate::sample::CalendarDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// Empty input sequence; the caller should show an empty chart state.
    #[error("no samples to chart")]
    NoData,

    /// Two input records normalized to the same day with differing values.
    #[error("conflicting samples for {day}")]
    ConflictingDay { day: CalendarDay },
}
