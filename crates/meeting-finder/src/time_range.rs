//! Half-open minute ranges within a single day.
//!
//! A [`TimeRange`] is `[start, end)` measured in whole minutes since midnight.
//! Values past the end of the day are representable; the query treats them as
//! out of domain and ignores them rather than failing.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Exclusive end of the day.
pub const END_OF_DAY: u32 = MINUTES_PER_DAY;

/// A half-open interval of minutes, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

#[derive(Deserialize)]
struct RawTimeRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = MeetingError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        TimeRange::new(raw.start, raw.end)
    }
}

impl TimeRange {
    /// The whole day, `[00:00, 24:00)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: END_OF_DAY,
    };

    /// Create a range from a start and an exclusive end.
    ///
    /// Fails with [`MeetingError::InvalidRange`] when `end < start`. An empty
    /// range (`start == end`) is allowed.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if end < start {
            return Err(MeetingError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create a range from a start and an end that is either inclusive or
    /// exclusive. An inclusive end of minute `m` stores an exclusive end of
    /// `m + 1`.
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        let end = if inclusive { end.saturating_add(1) } else { end };
        Self::new(start, end)
    }

    /// Create a range starting at `start` and lasting `duration` minutes.
    pub fn from_start_duration(start: u32, duration: u32) -> Self {
        Self {
            start,
            end: start.saturating_add(duration),
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the range covers no minutes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `minute` falls in `[start, end)`.
    pub fn contains_minute(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Whether `other` lies entirely inside this range.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the two ranges share at least one minute.
    ///
    /// Ranges that only touch (`a.end == b.start`) do not overlap, and an
    /// empty range overlaps nothing.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start < other.end
            && other.start < self.end
    }

    /// Whether the range fits inside `[0, 1440)`.
    pub fn is_within_day(&self) -> bool {
        self.end <= END_OF_DAY
    }
}

/// Order ranges by start, breaking ties by end.
pub fn cmp_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.start.cmp(&b.start).then(a.end.cmp(&b.end))
}

/// Order ranges by end, breaking ties by start.
pub fn cmp_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.end.cmp(&b.end).then(a.start.cmp(&b.start))
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
