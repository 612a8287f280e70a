pub mod directory;
pub mod engine;
pub mod model;
pub mod observability;

pub use engine::{BookingOutcome, ScheduleError, Scheduler, find_next_available, is_available};
pub use model::{Appointment, AppointmentKind, PatientId, StaffId, StaffRole, Timeline};
