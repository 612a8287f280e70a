#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    UnknownKind(String),
    UnknownRole(String),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::UnknownKind(kind) => write!(f, "unknown appointment kind: {kind}"),
            ScheduleError::UnknownRole(role) => write!(f, "unknown staff role: {role}"),
        }
    }
}

impl std::error::Error for ScheduleError {}
