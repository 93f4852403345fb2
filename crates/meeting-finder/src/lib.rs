//! # meeting-finder
//!
//! Find the free time slots in a day where a meeting with a given set of
//! required attendees and a minimum duration can be held.
//!
//! The day is modelled as 1440 whole minutes. The computation is pure and
//! synchronous; each call allocates its own per-minute scratch mask.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_finder::{find_meeting_slots, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new("sync", TimeRange::new(60, 120).unwrap(), ["A"])];
//! let request = MeetingRequest::new(["A"], 30);
//!
//! let slots = find_meeting_slots(&events, &request);
//! assert_eq!(
//!     slots,
//!     vec![TimeRange::new(0, 60).unwrap(), TimeRange::new(120, 1440).unwrap()]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — `[start, end)` minute ranges and day constants
//! - [`event`] — calendar events and meeting requests
//! - [`freebusy`] — per-minute busy mask and free-run scan
//! - [`query`] — the meeting slot query
//! - [`document`] — JSON bundle of events plus a request
//! - [`error`] — Error types

pub mod document;
pub mod error;
pub mod event;
pub mod freebusy;
pub mod query;
pub mod time_range;

pub use document::MeetingDocument;
pub use error::MeetingError;
pub use event::{Event, MeetingRequest};
pub use freebusy::BusyMinutes;
pub use query::{find_first_meeting_slot, find_meeting_slots, relevant_events, FindMeetingQuery};
pub use time_range::{TimeRange, END_OF_DAY, MINUTES_PER_DAY, START_OF_DAY};
