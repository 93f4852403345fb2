//! Find every time range in a day where a meeting can be held.
//!
//! The day is modelled as 1440 minutes. Events attended by at least one
//! required attendee mark their minutes busy; every maximal free run at least
//! as long as the requested duration is a candidate slot.
//!
//! Cost is `O(E * A)` to mark (`E` events, `A` attendees per set, with ordered
//! set probes) plus a fixed `O(1440)` scan. Each call owns its scratch mask,
//! so calls are independent and may run concurrently.

use tracing::debug;

use crate::event::{Event, MeetingRequest};
use crate::freebusy::BusyMinutes;
use crate::time_range::{TimeRange, MINUTES_PER_DAY};

/// Entry point mirroring a query object; stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct FindMeetingQuery;

impl FindMeetingQuery {
    pub fn query<'a, I>(&self, events: I, request: &MeetingRequest) -> Vec<TimeRange>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        find_meeting_slots(events, request)
    }
}

/// Return all maximal free ranges of at least `request.duration` minutes
/// during which no required attendee is busy.
///
/// The result is sorted by start, and no two ranges overlap or touch.
/// Requests longer than a day return no slots. Events that reach past the end
/// of the day are ignored.
pub fn find_meeting_slots<'a, I>(events: I, request: &MeetingRequest) -> Vec<TimeRange>
where
    I: IntoIterator<Item = &'a Event>,
{
    if request.duration > MINUTES_PER_DAY {
        debug!(
            duration = request.duration,
            "requested duration exceeds one day"
        );
        return Vec::new();
    }

    let mask = BusyMinutes::mark(events, &request.attendees);
    let slots = mask.free_runs(request.duration);

    debug!(
        attendees = request.attendees.len(),
        duration = request.duration,
        free_minutes = mask.free_minutes(),
        slots = slots.len(),
        "computed meeting slots"
    );

    slots
}

/// The earliest slot that fits the request, if any.
pub fn find_first_meeting_slot<'a, I>(events: I, request: &MeetingRequest) -> Option<TimeRange>
where
    I: IntoIterator<Item = &'a Event>,
{
    find_meeting_slots(events, request).into_iter().next()
}

/// Events that constrain the request: those sharing an attendee with it.
pub fn relevant_events<'a, I>(
    events: I,
    request: &'a MeetingRequest,
) -> impl Iterator<Item = &'a Event> + 'a
where
    I: IntoIterator<Item = &'a Event>,
    I::IntoIter: 'a,
{
    events
        .into_iter()
        .filter(move |event| event.shares_attendee_with(&request.attendees))
}
