use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::model::*;
use crate::observability;

use super::availability::{find_next_available, is_available};
use super::{BookingOutcome, Scheduler};

impl Scheduler {
    /// Make a booking. `date` defaults to today.
    ///
    /// Consultation: commit at `date` when free; otherwise return the
    /// next-available slot as an uncommitted suggestion.
    /// Emergency: always search from `date` and commit the result; an
    /// emergency is never told "taken".
    pub fn book(
        &self,
        kind: AppointmentKind,
        staff: StaffId,
        patient: PatientId,
        date: Option<NaiveDate>,
    ) -> BookingOutcome {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let mut timeline = self.write_timeline();

        match kind {
            AppointmentKind::Consultation => {
                let candidate = Appointment::new(kind, staff, patient, date);
                if is_available(&candidate, &timeline) {
                    let committed = timeline.insert(candidate);
                    info!(staff = %committed.staff, date = %committed.date, "consultation booked");
                    metrics::counter!(
                        observability::BOOKINGS_COMMITTED_TOTAL,
                        "kind" => kind.as_str()
                    )
                    .increment(1);
                    BookingOutcome::Committed(committed)
                } else {
                    metrics::counter!(observability::SLOT_SEARCHES_TOTAL).increment(1);
                    let suggestion =
                        find_next_available(kind, candidate.staff, candidate.patient, date, &timeline);
                    debug!(
                        staff = %suggestion.staff,
                        requested = %date,
                        suggested = %suggestion.date,
                        "slot taken, suggesting next available"
                    );
                    metrics::counter!(observability::BOOKING_SUGGESTIONS_TOTAL).increment(1);
                    BookingOutcome::Suggestion(suggestion)
                }
            }
            AppointmentKind::Emergency => {
                metrics::counter!(observability::SLOT_SEARCHES_TOTAL).increment(1);
                let found = find_next_available(kind, staff, patient, date, &timeline);
                let committed = timeline.insert(found);
                info!(staff = %committed.staff, date = %committed.date, "emergency booked");
                metrics::counter!(
                    observability::BOOKINGS_COMMITTED_TOTAL,
                    "kind" => kind.as_str()
                )
                .increment(1);
                BookingOutcome::Committed(committed)
            }
        }
    }

    /// Cancel the appointment matching all four fields exactly.
    ///
    /// Returns the removed appointment, or `None` when no such appointment
    /// occupies a slot: a defined no-op, not an error.
    pub fn cancel(
        &self,
        kind: AppointmentKind,
        staff: StaffId,
        patient: PatientId,
        date: NaiveDate,
    ) -> Option<Appointment> {
        let to_cancel = Appointment::new(kind, staff, patient, date);
        let mut timeline = self.write_timeline();

        if is_available(&to_cancel, &timeline) {
            // The slot is free, so nothing matching is stored.
            debug!(staff = %to_cancel.staff, date = %to_cancel.date, "cancellation miss");
            metrics::counter!(observability::CANCELLATION_MISSES_TOTAL).increment(1);
            return None;
        }

        let removed = timeline.remove(&to_cancel);
        match &removed {
            Some(a) => {
                info!(staff = %a.staff, date = %a.date, "appointment cancelled");
                metrics::counter!(observability::CANCELLATIONS_TOTAL).increment(1);
            }
            // The date is occupied, but by a booking differing in kind or
            // patient. Still a miss.
            None => {
                debug!(staff = %to_cancel.staff, date = %to_cancel.date, "cancellation miss");
                metrics::counter!(observability::CANCELLATION_MISSES_TOTAL).increment(1);
            }
        }
        removed
    }
}
