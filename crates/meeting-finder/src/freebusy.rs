//! Per-minute busy mask for a single day.
//!
//! Marks every minute covered by a relevant event as busy, then scans the day
//! left to right to recover maximal free runs.

use std::collections::BTreeSet;

use tracing::trace;

use crate::event::Event;
use crate::time_range::{TimeRange, MINUTES_PER_DAY};

/// One flag per minute of the day; `true` means busy.
#[derive(Debug, Clone)]
pub struct BusyMinutes {
    minutes: [bool; MINUTES_PER_DAY as usize],
}

impl Default for BusyMinutes {
    fn default() -> Self {
        Self {
            minutes: [false; MINUTES_PER_DAY as usize],
        }
    }
}

impl BusyMinutes {
    /// Build a mask from every event that shares an attendee with `required`.
    ///
    /// Events with no attendee in common never mark anything, whatever their
    /// time range.
    pub fn mark<'a, I>(events: I, required: &BTreeSet<String>) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let mut mask = Self::default();
        for event in events {
            if event.shares_attendee_with(required) {
                mask.mark_range(event.when);
            }
        }
        mask
    }

    /// Mark `[start, end)` busy. Ranges reaching past the end of the day are
    /// ignored in full.
    pub fn mark_range(&mut self, range: TimeRange) {
        if !range.is_within_day() {
            trace!(%range, "skipping range outside the day");
            return;
        }
        self.minutes[range.start() as usize..range.end() as usize].fill(true);
    }

    pub fn is_busy(&self, minute: u32) -> bool {
        self.minutes
            .get(minute as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Number of minutes not covered by any marked range.
    pub fn free_minutes(&self) -> u32 {
        self.minutes.iter().filter(|busy| !**busy).count() as u32
    }

    /// Maximal free runs at least `min_len` minutes long, ascending.
    pub fn free_runs(&self, min_len: u32) -> Vec<TimeRange> {
        self.runs(false, min_len)
    }

    /// Merged busy intervals, ascending.
    pub fn busy_ranges(&self) -> Vec<TimeRange> {
        self.runs(true, 1)
    }

    fn runs(&self, busy: bool, min_len: u32) -> Vec<TimeRange> {
        let mut runs = Vec::new();
        let mut run_start: Option<u32> = None;

        for (minute, &flag) in (0..MINUTES_PER_DAY).zip(self.minutes.iter()) {
            match (flag == busy, run_start) {
                (true, None) => run_start = Some(minute),
                (false, Some(start)) => {
                    push_run(&mut runs, start, minute, min_len);
                    run_start = None;
                }
                _ => {}
            }
        }

        // A run still open at the end of the day closes at 24:00.
        if let Some(start) = run_start {
            push_run(&mut runs, start, MINUTES_PER_DAY, min_len);
        }

        runs
    }
}

fn push_run(runs: &mut Vec<TimeRange>, start: u32, end: u32, min_len: u32) {
    let run = TimeRange::from_start_duration(start, end - start);
    if run.duration() >= min_len {
        runs.push(run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u32, end: u32) -> TimeRange {
        TimeRange::new(start, end).unwrap()
    }

    #[test]
    fn empty_mask_is_one_free_run() {
        let mask = BusyMinutes::default();
        assert_eq!(mask.free_runs(0), vec![TimeRange::WHOLE_DAY]);
        assert_eq!(mask.free_minutes(), MINUTES_PER_DAY);
        assert!(mask.busy_ranges().is_empty());
    }

    #[test]
    fn single_free_minute_is_a_run() {
        let mut mask = BusyMinutes::default();
        mask.mark_range(range(0, 100));
        mask.mark_range(range(101, 1440));
        assert_eq!(mask.free_runs(1), vec![range(100, 101)]);
        assert!(mask.free_runs(2).is_empty());
    }

    #[test]
    fn trailing_run_respects_min_len() {
        let mut mask = BusyMinutes::default();
        mask.mark_range(range(0, 1430));
        assert_eq!(mask.free_runs(10), vec![range(1430, 1440)]);
        assert!(mask.free_runs(11).is_empty());
    }

    #[test]
    fn out_of_day_range_is_ignored() {
        let mut mask = BusyMinutes::default();
        mask.mark_range(range(1400, 1500));
        assert_eq!(mask.free_minutes(), MINUTES_PER_DAY);
        assert!(!mask.is_busy(1400));
    }

    #[test]
    fn overlapping_ranges_merge_into_one_busy_block() {
        let mut mask = BusyMinutes::default();
        mask.mark_range(range(600, 690));
        mask.mark_range(range(660, 720));
        assert_eq!(mask.busy_ranges(), vec![range(600, 720)]);
        assert!(mask.is_busy(600));
        assert!(!mask.is_busy(720));
    }
}
