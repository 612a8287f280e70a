use chrono::NaiveDate;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rota::directory::{Directory, Patient, StaffMember};
use rota::{AppointmentKind, PatientId, Scheduler, StaffId};

/// Walkthrough of the booking engine on a small seeded clinic: two
/// doctors, two nurses, two receptionists, nine patients, six pre-booked
/// consultations, then the interesting cases one by one.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    rota::observability::describe();

    let directory = Directory::new();
    let d1 = directory.register_staff(StaffMember::doctor("d001", "James Brown"));
    let d2 = directory.register_staff(StaffMember::doctor("d002", "Emily Smith"));
    directory.register_staff(StaffMember::nurse("n001", "Christopher Bay"));
    directory.register_staff(StaffMember::nurse("n002", "Sarah Fish"));
    // Front desk. Bookings below go through the scheduler directly; these
    // two just belong in the directory.
    directory.register_staff(StaffMember::receptionist("r001", "Suzan Bow"));
    directory.register_staff(StaffMember::receptionist("r002", "Michael Duck"));

    let patients = [
        ("p1", "Josh Stevens", "12 Brown Street X17 9XY London", "07246123985"),
        ("p2", "Madge Eland", "3 Yellow Street X13 8XY London", "07926213854"),
        ("p3", "Sacha Simmonds", "32 Red Street X19 7XY London", "07254692138"),
        ("p4", "Mia Osborne", "113 Red Street X18 6XY London", "07254692138"),
        ("p5", "Charlie Richards", "7 Red Street X9 5XY London", "07695123428"),
        ("p6", "Paul Blench", "55 Pink Street E9 4ES London", "07456741980"),
        ("p7", "Iris Webb", "1 Green Lane N4 2AB London", "07312456789"),
        ("p8", "Tom Hardwick", "2 Green Lane N4 2AB London", "07312456790"),
        ("p9", "Ada Lovell", "3 Green Lane N4 2AB London", "07312456791"),
    ];
    for (id, name, address, phone) in patients {
        directory.register_patient(Patient::new(id, name, address, phone));
    }
    info!(
        staff = directory.staff_count(),
        patients = directory.patient_count(),
        "directory seeded"
    );

    let scheduler = Scheduler::new();

    // Pre-booked consultations: d001 on the 14th-16th, d002 on the 17th-19th.
    let seed: [(&StaffId, &str, &str); 6] = [
        (&d1, "p1", "2022-06-14"),
        (&d1, "p2", "2022-06-15"),
        (&d1, "p3", "2022-06-16"),
        (&d2, "p4", "2022-06-17"),
        (&d2, "p5", "2022-06-18"),
        (&d2, "p6", "2022-06-19"),
    ];
    for (staff, patient, date) in seed {
        let date: NaiveDate = date.parse()?;
        scheduler.book(
            AppointmentKind::Consultation,
            staff.clone(),
            PatientId::new(patient),
            Some(date),
        );
    }
    info!(bookings = scheduler.len(), "timeline seeded");

    // 1. Consultation on a free slot: commits.
    let outcome = scheduler.book(
        AppointmentKind::Consultation,
        d1.clone(),
        PatientId::new("p7"),
        Some("2022-06-17".parse()?),
    );
    info!(committed = outcome.is_committed(), appointment = %outcome.appointment(), "step 1: free slot");

    // 2. Consultation on the now-taken slot: suggestion only, no commit.
    let outcome = scheduler.book(
        AppointmentKind::Consultation,
        d1.clone(),
        PatientId::new("p8"),
        Some("2022-06-17".parse()?),
    );
    info!(committed = outcome.is_committed(), appointment = %outcome.appointment(), "step 2: taken slot");

    // 3. Emergency as soon as possible (today).
    let outcome = scheduler.book(AppointmentKind::Emergency, d1.clone(), PatientId::new("p7"), None);
    info!(appointment = %outcome.appointment(), "step 3: emergency today");

    // 4. Emergency on a chosen free day.
    let outcome = scheduler.book(
        AppointmentKind::Emergency,
        d1.clone(),
        PatientId::new("p8"),
        Some("2022-06-01".parse()?),
    );
    info!(appointment = %outcome.appointment(), "step 4: emergency on chosen day");

    // 5. Emergency on that same day, now taken: silently lands on the next
    //    free one.
    let outcome = scheduler.book(
        AppointmentKind::Emergency,
        d1.clone(),
        PatientId::new("p9"),
        Some("2022-06-01".parse()?),
    );
    info!(appointment = %outcome.appointment(), "step 5: emergency on taken day");

    // 6. Consultation on a taken day: suggestion only.
    let outcome = scheduler.book(
        AppointmentKind::Consultation,
        d1.clone(),
        PatientId::new("p1"),
        Some("2022-06-02".parse()?),
    );
    info!(committed = outcome.is_committed(), appointment = %outcome.appointment(), "step 6: blocked consultation");

    // 7. Consultation with the date left to default (today is taken by the
    //    step-3 emergency, so this suggests tomorrow).
    let outcome = scheduler.book(AppointmentKind::Consultation, d1.clone(), PatientId::new("p2"), None);
    info!(committed = outcome.is_committed(), appointment = %outcome.appointment(), "step 7: defaulted date");

    println!("{}", serde_json::to_string_pretty(&scheduler.snapshot())?);
    Ok(())
}
