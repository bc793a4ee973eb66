use std::fmt;

#[derive(Debug)]
pub enum ServiceError {
    Custom(String),
    Validation {
        field: &'static str,
        message: String,
    },
    Io(std::io::Error),
    SerializationError(serde_json::Error),
    LockPoisoned(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Custom(msg) => write!(f, "Service error: {}", msg),
            ServiceError::Validation { field, message } => {
                write!(f, "Validation error on field '{}': {}", field, message)
            }
            ServiceError::Io(e) => write!(f, "IO error: {}", e),
            ServiceError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            ServiceError::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        ServiceError::Io(err)
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::SerializationError(err)
    }
}
