use chrono::NaiveDate;

use crate::model::*;

use super::availability::{find_next_available, is_available};
use super::Scheduler;

impl Scheduler {
    pub fn len(&self) -> usize {
        self.read_timeline().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_timeline().is_empty()
    }

    /// Whole timeline, ascending by date, as owned copies.
    pub fn snapshot(&self) -> Vec<Appointment> {
        self.read_timeline().iter().cloned().collect()
    }

    /// One staff member's bookings, ascending by date.
    pub fn appointments_for(&self, staff: &StaffId) -> Vec<Appointment> {
        self.read_timeline()
            .for_staff(staff)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn contains(&self, appointment: &Appointment) -> bool {
        self.read_timeline().contains(appointment)
    }

    /// Availability probe: would this exact booking be accepted at `date`?
    pub fn is_free(
        &self,
        kind: AppointmentKind,
        staff: StaffId,
        patient: PatientId,
        date: NaiveDate,
    ) -> bool {
        let candidate = Appointment::new(kind, staff, patient, date);
        is_available(&candidate, &self.read_timeline())
    }

    /// Run the slot search without committing anything.
    pub fn next_available(
        &self,
        kind: AppointmentKind,
        staff: StaffId,
        patient: PatientId,
        from: NaiveDate,
    ) -> Appointment {
        metrics::counter!(crate::observability::SLOT_SEARCHES_TOTAL).increment(1);
        find_next_available(kind, staff, patient, from, &self.read_timeline())
    }
}
