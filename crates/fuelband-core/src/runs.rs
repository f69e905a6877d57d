// File: crates/fuelband-core/src/runs.rs
// Summary: Gap detection; partitions a day-keyed series into contiguous runs.

use std::collections::BTreeMap;

use crate::sample::CalendarDay;

/// A maximal span of consecutive calendar days that each carry a sample.
/// Never empty; `values[i]` belongs to `start + i` days.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run<T> {
    pub start: CalendarDay,
    pub values: Vec<T>,
}

impl<T> Run<T> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Last day of the run. Days are contiguous by construction, so the
    /// offset stays inside the range the building walk already visited.
    pub fn end(&self) -> CalendarDay {
        self.start
            .offset(self.values.len() as i64 - 1)
            .unwrap_or(self.start)
    }
}

/// Partition a day-keyed series into maximal contiguous runs.
///
/// Walks every calendar day from the earliest to the latest key inclusive.
/// A day with a sample extends the open run; a day without one closes it.
/// The tail run is closed after the walk. Runs come out ordered by start
/// day, non-overlapping, separated by at least one sample-less day.
pub fn detect_runs<T: Copy>(by_day: &BTreeMap<CalendarDay, T>) -> Vec<Run<T>> {
    let (Some((&first, _)), Some((&last, _))) = (by_day.first_key_value(), by_day.last_key_value())
    else {
        return Vec::new();
    };

    let mut runs = Vec::new();
    let mut open: Option<Run<T>> = None;
    let mut day = first;
    loop {
        match by_day.get(&day) {
            Some(&value) => match open.as_mut() {
                Some(run) => run.values.push(value),
                None => {
                    open = Some(Run { start: day, values: vec![value] });
                }
            },
            None => {
                if let Some(run) = open.take() {
                    runs.push(run);
                }
            }
        }
        if day >= last {
            break;
        }
        let Some(next) = day.next() else { break };
        day = next;
    }
    if let Some(run) = open {
        runs.push(run);
    }
    runs
}
