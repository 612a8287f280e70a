// ── Booking flow (request-driven) ───────────────────────────────

/// Counter: bookings committed to the timeline. Labels: kind.
pub const BOOKINGS_COMMITTED_TOTAL: &str = "rota_bookings_committed_total";

/// Counter: blocked consultations answered with an uncommitted suggestion.
pub const BOOKING_SUGGESTIONS_TOTAL: &str = "rota_booking_suggestions_total";

/// Counter: next-available-slot searches run.
pub const SLOT_SEARCHES_TOTAL: &str = "rota_slot_searches_total";

/// Counter: appointments removed by cancellation.
pub const CANCELLATIONS_TOTAL: &str = "rota_cancellations_total";

/// Counter: cancellations that matched nothing (defined no-op).
pub const CANCELLATION_MISSES_TOTAL: &str = "rota_cancellation_misses_total";

// ── Registry ────────────────────────────────────────────────────

/// Gauge: staff members registered in the directory.
pub const STAFF_REGISTERED: &str = "rota_staff_registered";

/// Gauge: patients registered in the directory.
pub const PATIENTS_REGISTERED: &str = "rota_patients_registered";

/// Register metric descriptions with whatever recorder the embedding
/// application installed. Emitting works without this; descriptions are
/// cosmetic.
pub fn describe() {
    metrics::describe_counter!(
        BOOKINGS_COMMITTED_TOTAL,
        "Bookings committed to the timeline"
    );
    metrics::describe_counter!(
        BOOKING_SUGGESTIONS_TOTAL,
        "Blocked consultations answered with an uncommitted suggestion"
    );
    metrics::describe_counter!(SLOT_SEARCHES_TOTAL, "Next-available-slot searches run");
    metrics::describe_counter!(CANCELLATIONS_TOTAL, "Appointments removed by cancellation");
    metrics::describe_counter!(
        CANCELLATION_MISSES_TOTAL,
        "Cancellations that matched nothing"
    );
    metrics::describe_gauge!(STAFF_REGISTERED, "Staff members in the directory");
    metrics::describe_gauge!(PATIENTS_REGISTERED, "Patients in the directory");
}
