use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Corrupted(serde_json::Error),
    NotFound(String),
    IdSpaceExhausted,
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Corrupted(err)
    }
}

impl From<tempfile::PersistError> for AppError {
    fn from(err: tempfile::PersistError) -> Self {
        AppError::Io(err.error)
    }
}

impl AppError {
    /// Missing and corrupted documents are recovered by starting empty.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            AppError::Corrupted(_) => true,
            _ => false,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing the contact file: {}", e)
            }
            AppError::Corrupted(e) => {
                write!(f, "Contact file is not a valid contact list: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::IdSpaceExhausted => {
                write!(f, "No free contact id left in the random id range")
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Corrupted(e) => Some(e),
            _ => None,
        }
    }
}
