use chrono::NaiveDate;

use crate::model::*;

// ── Availability check ────────────────────────────────────────────

/// True iff `candidate`'s staff member has no booking on `candidate.date`.
///
/// Pure function of its inputs: filters the shared timeline down to the
/// staff member's entries and looks for an exact date collision. An empty
/// timeline is always available. O(n) over the timeline; fine at clinic
/// scale (indexing by staff id would be the optimization if it ever isn't).
pub fn is_available(candidate: &Appointment, timeline: &Timeline) -> bool {
    !timeline
        .for_staff(&candidate.staff)
        .iter()
        .any(|a| a.date == candidate.date)
}

// ── Next-available-slot search ────────────────────────────────────

/// Earliest bookable date on/after `starting_date` for one staff member,
/// returned as a ready-to-commit candidate appointment.
///
/// The insertion date follows a fixed policy over the staff member's
/// bookings in ascending date order:
/// - no bookings → `starting_date`;
/// - exactly one booking → `starting_date + 1 day` when that booking is
///   dated exactly `starting_date`, otherwise `starting_date` (a lone
///   booking on any other date is ignored, even a later one);
/// - two or more bookings and none dated exactly `starting_date` →
///   `starting_date` (only exact collisions matter on this branch, not
///   occupied runs around the date);
/// - otherwise the entries from `starting_date` onwards are walked as
///   consecutive pairs: the first pair more than one day apart yields the
///   day after the pair's earlier date, and an unbroken run yields the day
///   after its last occupied day.
///
/// Never mutates the timeline; committing the candidate is the caller's
/// business. Always terminates with a date: the timeline is unbounded
/// into the future, so there is no "schedule full".
pub fn find_next_available(
    kind: AppointmentKind,
    staff: StaffId,
    patient: PatientId,
    starting_date: NaiveDate,
    timeline: &Timeline,
) -> Appointment {
    let sublist = timeline.for_staff(&staff);
    let candidate =
        |date: NaiveDate| Appointment::new(kind, staff.clone(), patient.clone(), date);

    if sublist.is_empty() {
        return candidate(starting_date);
    }
    if let [only] = sublist.as_slice() {
        if only.date == starting_date {
            return candidate(next_day(starting_date));
        }
        return candidate(starting_date);
    }
    if !sublist.iter().any(|a| a.date == starting_date) {
        return candidate(starting_date);
    }

    // starting_date itself is occupied and heads the remaining run; the
    // search never goes backwards, so entries before it play no part.
    let run = sublist
        .iter()
        .map(|a| a.date)
        .filter(|d| *d > starting_date);

    let mut last = starting_date;
    for next in run {
        if days_between(last, next) != 1 {
            // First gap wins: the day after the pair's earlier side.
            return candidate(next_day(last));
        }
        last = next;
    }
    // Unbroken run of occupied days (or starting_date alone remaining):
    // append after the last one.
    candidate(next_day(last))
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().expect("date out of calendar range")
}

fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}
