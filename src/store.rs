pub mod json;
pub mod memory;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

pub use json::JsonStorage;
pub use memory::MemStorage;

pub const STORAGE_PATH: &str = "./.instance/contacts.json";

/// Durable home of the contact list. Every call moves the whole list.
pub trait Storage {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write a sibling temp file, then rename it over the document.
    #[default]
    Atomic,
    /// Truncate the document and write in place.
    Truncate,
}

impl WriteMode {
    pub fn from(str: &str) -> Result<Self, AppError> {
        match str {
            "atomic" => Ok(WriteMode::Atomic),
            "truncate" => Ok(WriteMode::Truncate),
            _ => Err(AppError::Validation(
                "Not a recognized write mode".to_string(),
            )),
        }
    }

    pub fn is_which(&self) -> &str {
        match self {
            WriteMode::Atomic => "atomic",
            WriteMode::Truncate => "truncate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMediums {
    #[default]
    Json,
    Mem,
}

impl StorageMediums {
    pub fn from(str: &str) -> Result<Self, AppError> {
        match str {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }

    pub fn is_which(&self) -> &str {
        match self {
            StorageMediums::Json => "json",
            StorageMediums::Mem => "mem",
        }
    }
}

/// Directory holding `path`, `.` for a bare file name.
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    let parent = parent_dir(path);

    if !parent.exists() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
