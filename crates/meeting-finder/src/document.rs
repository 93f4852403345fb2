//! Serialisable bundle of a day's events and a meeting request.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::{Event, MeetingRequest};
use crate::freebusy::BusyMinutes;
use crate::query::find_meeting_slots;
use crate::time_range::TimeRange;

/// Input document: `{ "events": [...], "request": {...} }`.
///
/// `events` may be omitted and defaults to an empty calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingDocument {
    #[serde(default)]
    pub events: Vec<Event>,
    pub request: MeetingRequest,
}

impl MeetingDocument {
    /// Parse a document, validating every event range.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Run the meeting query over this document.
    pub fn slots(&self) -> Vec<TimeRange> {
        find_meeting_slots(&self.events, &self.request)
    }

    /// Merged busy ranges for the request's attendees.
    pub fn busy(&self) -> Vec<TimeRange> {
        BusyMinutes::mark(&self.events, &self.request.attendees).busy_ranges()
    }
}
