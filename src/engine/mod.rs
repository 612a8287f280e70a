mod availability;
mod error;
mod mutations;
mod queries;

pub use availability::{find_next_available, is_available};
pub use error::ScheduleError;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::{Appointment, Timeline};

/// What a booking request produced.
///
/// A blocked consultation never auto-commits: the caller gets a
/// `Suggestion` and must re-request to accept it. Everything else lands in
/// the timeline before being returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// Inserted into the timeline.
    Committed(Appointment),
    /// The requested slot was taken; this is the engine's uncommitted
    /// proposal for the next free slot.
    Suggestion(Appointment),
}

impl BookingOutcome {
    pub fn appointment(&self) -> &Appointment {
        match self {
            BookingOutcome::Committed(a) | BookingOutcome::Suggestion(a) => a,
        }
    }

    pub fn into_appointment(self) -> Appointment {
        match self {
            BookingOutcome::Committed(a) | BookingOutcome::Suggestion(a) => a,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, BookingOutcome::Committed(_))
    }
}

/// Front door to the booking engine.
///
/// Owns the clinic's timeline behind one serializing lock. Mutating
/// operations hold the write lock across their whole read-then-decide-
/// then-write span, so two concurrent requests for the same staff member
/// and date can never both observe "available".
#[derive(Debug, Default)]
pub struct Scheduler {
    timeline: RwLock<Timeline>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-loaded bookings. The timeline is re-sorted here:
    /// deserialized input may arrive in any order, and the slot search
    /// assumes ascending dates.
    pub fn with_timeline(mut timeline: Timeline) -> Self {
        timeline.sort();
        Self {
            timeline: RwLock::new(timeline),
        }
    }

    fn read_timeline(&self) -> RwLockReadGuard<'_, Timeline> {
        self.timeline.read().expect("timeline lock poisoned")
    }

    fn write_timeline(&self) -> RwLockWriteGuard<'_, Timeline> {
        self.timeline.write().expect("timeline lock poisoned")
    }
}
