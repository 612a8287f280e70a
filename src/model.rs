use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::ScheduleError;

/// What an appointment is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentKind {
    /// Non-urgent visit. If the slot is taken, the caller gets a
    /// suggestion and nothing is committed.
    Consultation,
    /// Priority visit. Always committed at the earliest free slot.
    Emergency,
}

impl AppointmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentKind::Consultation => "consultation",
            AppointmentKind::Emergency => "emergency",
        }
    }
}

impl FromStr for AppointmentKind {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "consultation" => Ok(AppointmentKind::Consultation),
            "emergency" => Ok(AppointmentKind::Emergency),
            other => Err(ScheduleError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for AppointmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role tag for clinic staff. The engine only ever needs identity and
/// equality, never dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Doctor,
    Nurse,
    /// Front-desk staff. Receptionists take bookings but never hold a slot
    /// themselves, so the engine never sees this role.
    Receptionist,
}

impl FromStr for StaffRole {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "doctor" => Ok(StaffRole::Doctor),
            "nurse" => Ok(StaffRole::Nurse),
            "receptionist" => Ok(StaffRole::Receptionist),
            other => Err(ScheduleError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaffRole::Doctor => f.write_str("doctor"),
            StaffRole::Nurse => f.write_str("nurse"),
            StaffRole::Receptionist => f.write_str("receptionist"),
        }
    }
}

/// Opaque staff identifier (employee number, e.g. "d001").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(pub String);

impl StaffId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque patient identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(pub String);

impl PatientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single day-granularity booking of one staff member for one patient.
///
/// Immutable once created. Two appointments are equal iff all four fields
/// are equal; there is no surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Appointment {
    pub kind: AppointmentKind,
    pub staff: StaffId,
    pub patient: PatientId,
    pub date: NaiveDate,
}

impl Appointment {
    pub fn new(kind: AppointmentKind, staff: StaffId, patient: PatientId, date: NaiveDate) -> Self {
        Self {
            kind,
            staff,
            patient,
            date,
        }
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of patient {} with {} on {}",
            self.kind, self.patient, self.staff, self.date
        )
    }
}

/// The clinic's single chronological list of appointments across all staff.
///
/// Kept non-decreasing by `date` after every mutation. Entries sharing a
/// date keep their insertion order. Per-staff views are computed on demand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    appointments: Vec<Appointment>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter()
    }

    pub fn contains(&self, appointment: &Appointment) -> bool {
        self.appointments.contains(appointment)
    }

    /// Insert keeping date order. New entries land after any existing
    /// entries of the same date. Returns a copy of the stored value.
    pub fn insert(&mut self, appointment: Appointment) -> Appointment {
        let pos = self
            .appointments
            .partition_point(|a| a.date <= appointment.date);
        self.appointments.insert(pos, appointment.clone());
        appointment
    }

    /// Remove the first entry equal (full value equality) to the argument.
    /// Absent entries are not an error: returns `None`, timeline untouched.
    pub fn remove(&mut self, appointment: &Appointment) -> Option<Appointment> {
        let pos = self.appointments.iter().position(|a| a == appointment)?;
        Some(self.appointments.remove(pos))
    }

    /// Stable re-sort by date. Mutations keep the order themselves; this
    /// exists for the rebuild-after-bulk-load case.
    pub fn sort(&mut self) {
        self.appointments.sort_by_key(|a| a.date);
    }

    /// Ascending per-staff view, computed by filtering the shared list.
    pub fn for_staff(&self, staff: &StaffId) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| &a.staff == staff)
            .collect()
    }

    /// Replace the whole contents, e.g. from a bulk load. The list is
    /// re-sorted so the ordering invariant holds afterwards.
    pub fn load(&mut self, appointments: Vec<Appointment>) {
        self.appointments = appointments;
        self.sort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn appt(staff: &str, patient: &str, day: &str) -> Appointment {
        Appointment::new(
            AppointmentKind::Consultation,
            StaffId::new(staff),
            PatientId::new(patient),
            date(day),
        )
    }

    #[test]
    fn kind_parses_known_values() {
        assert_eq!(
            "consultation".parse::<AppointmentKind>().unwrap(),
            AppointmentKind::Consultation
        );
        assert_eq!(
            "emergency".parse::<AppointmentKind>().unwrap(),
            AppointmentKind::Emergency
        );
    }

    #[test]
    fn kind_rejects_unknown_value() {
        let err = "normal".parse::<AppointmentKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown appointment kind: normal");
    }

    #[test]
    fn role_parses_known_values() {
        assert_eq!("nurse".parse::<StaffRole>().unwrap(), StaffRole::Nurse);
        assert_eq!(
            "receptionist".parse::<StaffRole>().unwrap(),
            StaffRole::Receptionist
        );
    }

    #[test]
    fn role_rejects_unknown_value() {
        assert!("janitor".parse::<StaffRole>().is_err());
    }

    #[test]
    fn appointment_equality_is_by_value() {
        let a = appt("d001", "p7", "2022-06-17");
        let b = appt("d001", "p7", "2022-06-17");
        let c = appt("d001", "p8", "2022-06-17");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn insert_keeps_date_order() {
        let mut tl = Timeline::new();
        tl.insert(appt("d001", "p3", "2022-06-16"));
        tl.insert(appt("d001", "p1", "2022-06-14"));
        tl.insert(appt("d001", "p2", "2022-06-15"));

        let dates: Vec<NaiveDate> = tl.iter().map(|a| a.date).collect();
        assert_eq!(
            dates,
            vec![date("2022-06-14"), date("2022-06-15"), date("2022-06-16")]
        );
    }

    #[test]
    fn equal_dates_keep_insertion_order() {
        let mut tl = Timeline::new();
        tl.insert(appt("d001", "p1", "2022-06-14"));
        tl.insert(appt("d002", "p2", "2022-06-14"));
        tl.insert(appt("d003", "p3", "2022-06-14"));

        let patients: Vec<&str> = tl.iter().map(|a| a.patient.0.as_str()).collect();
        assert_eq!(patients, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn remove_returns_the_removed_value() {
        let mut tl = Timeline::new();
        let a = tl.insert(appt("d001", "p1", "2022-06-14"));
        tl.insert(appt("d001", "p2", "2022-06-15"));

        let removed = tl.remove(&a).unwrap();
        assert_eq!(removed, a);
        assert_eq!(tl.len(), 1);
    }

    #[test]
    fn remove_absent_is_a_noop() {
        let mut tl = Timeline::new();
        tl.insert(appt("d001", "p1", "2022-06-14"));

        assert!(tl.remove(&appt("d001", "p1", "2022-06-15")).is_none());
        assert_eq!(tl.len(), 1);
    }

    #[test]
    fn remove_middle_preserves_order() {
        let mut tl = Timeline::new();
        tl.insert(appt("d001", "p1", "2022-06-14"));
        let mid = tl.insert(appt("d001", "p2", "2022-06-15"));
        tl.insert(appt("d001", "p3", "2022-06-16"));

        tl.remove(&mid);
        let dates: Vec<NaiveDate> = tl.iter().map(|a| a.date).collect();
        assert_eq!(dates, vec![date("2022-06-14"), date("2022-06-16")]);
    }

    #[test]
    fn for_staff_filters_the_shared_list() {
        let mut tl = Timeline::new();
        tl.insert(appt("d001", "p1", "2022-06-14"));
        tl.insert(appt("d002", "p4", "2022-06-17"));
        tl.insert(appt("d001", "p2", "2022-06-15"));

        let d1 = tl.for_staff(&StaffId::new("d001"));
        assert_eq!(d1.len(), 2);
        assert!(d1.iter().all(|a| a.staff == StaffId::new("d001")));
        assert!(d1[0].date < d1[1].date);
    }

    #[test]
    fn load_restores_order() {
        let mut tl = Timeline::new();
        tl.load(vec![
            appt("d001", "p3", "2022-06-16"),
            appt("d001", "p1", "2022-06-14"),
            appt("d001", "p2", "2022-06-15"),
        ]);
        let dates: Vec<NaiveDate> = tl.iter().map(|a| a.date).collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn appointment_serde_uses_lowercase_kind_words() {
        let a = appt("d001", "p7", "2022-06-17");
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.contains("\"consultation\""));
        let back: Appointment = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}
