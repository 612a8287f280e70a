use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::model::{PatientId, StaffId, StaffRole};
use crate::observability;

/// A doctor, nurse or receptionist on the clinic's books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub role: StaffRole,
}

impl StaffMember {
    pub fn doctor(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: StaffId::new(id),
            name: name.into(),
            role: StaffRole::Doctor,
        }
    }

    pub fn nurse(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: StaffId::new(id),
            name: name.into(),
            role: StaffRole::Nurse,
        }
    }

    pub fn receptionist(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: StaffId::new(id),
            name: name.into(),
            role: StaffRole::Receptionist,
        }
    }
}

/// A patient registered with the clinic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Patient {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: PatientId::new(id),
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }
}

/// Who's who at the clinic.
///
/// The engine works on opaque ids only; names and contact details live
/// here, off the booking path. Registration is last-write-wins on id.
#[derive(Debug, Default)]
pub struct Directory {
    staff: DashMap<StaffId, StaffMember>,
    patients: DashMap<PatientId, Patient>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_staff(&self, member: StaffMember) -> StaffId {
        let id = member.id.clone();
        self.staff.insert(id.clone(), member);
        metrics::gauge!(observability::STAFF_REGISTERED).set(self.staff.len() as f64);
        id
    }

    pub fn register_patient(&self, patient: Patient) -> PatientId {
        let id = patient.id.clone();
        self.patients.insert(id.clone(), patient);
        metrics::gauge!(observability::PATIENTS_REGISTERED).set(self.patients.len() as f64);
        id
    }

    pub fn staff(&self, id: &StaffId) -> Option<StaffMember> {
        self.staff.get(id).map(|e| e.value().clone())
    }

    pub fn patient(&self, id: &PatientId) -> Option<Patient> {
        self.patients.get(id).map(|e| e.value().clone())
    }

    pub fn staff_count(&self) -> usize {
        self.staff.len()
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_look_up_staff() {
        let dir = Directory::new();
        let id = dir.register_staff(StaffMember::doctor("d001", "James Brown"));

        let member = dir.staff(&id).unwrap();
        assert_eq!(member.name, "James Brown");
        assert_eq!(member.role, StaffRole::Doctor);
        assert_eq!(dir.staff_count(), 1);
    }

    #[test]
    fn register_same_id_overwrites() {
        let dir = Directory::new();
        dir.register_staff(StaffMember::nurse("n001", "Christopher Bay"));
        dir.register_staff(StaffMember::nurse("n001", "Sarah Fish"));

        assert_eq!(dir.staff_count(), 1);
        assert_eq!(dir.staff(&StaffId::new("n001")).unwrap().name, "Sarah Fish");
    }

    #[test]
    fn receptionists_are_staff_too() {
        let dir = Directory::new();
        let id = dir.register_staff(StaffMember::receptionist("r001", "Suzan Bow"));

        assert_eq!(dir.staff(&id).unwrap().role, StaffRole::Receptionist);
    }

    #[test]
    fn unknown_ids_return_none() {
        let dir = Directory::new();
        assert!(dir.staff(&StaffId::new("d999")).is_none());
        assert!(dir.patient(&PatientId::new("p999")).is_none());
    }

    #[test]
    fn register_and_look_up_patient() {
        let dir = Directory::new();
        let id = dir.register_patient(Patient::new(
            "p1",
            "Josh Stevens",
            "12 Brown Street X17 9XY London",
            "07246123985",
        ));

        let patient = dir.patient(&id).unwrap();
        assert_eq!(patient.name, "Josh Stevens");
        assert_eq!(dir.patient_count(), 1);
    }
}
