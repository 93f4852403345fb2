//! Calendar events and meeting requests.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// A fixed commitment already on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Display name. Not used when computing availability.
    pub title: String,
    /// When the event takes place.
    pub when: TimeRange,
    /// People attending the event.
    pub attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether any of this event's attendees is also in `required`.
    ///
    /// Walks the smaller set and probes the larger one.
    pub fn shares_attendee_with(&self, required: &BTreeSet<String>) -> bool {
        let (small, large) = if self.attendees.len() <= required.len() {
            (&self.attendees, required)
        } else {
            (required, &self.attendees)
        };
        small.iter().any(|name| large.contains(name))
    }
}

/// A meeting to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// People who must attend. Duplicates collapse.
    pub attendees: BTreeSet<String>,
    /// Minimum length of the meeting in minutes.
    pub duration: u32,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attendees: attendees.into_iter().map(Into::into).collect(),
            duration,
        }
    }
}
