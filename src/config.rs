use crate::prelude::{AppError, IdStrategy};
use crate::store::{JsonStorage, MemStorage, STORAGE_PATH, Storage, StorageMediums, WriteMode};
use clap::Args;
use std::path::PathBuf;

/// Settings shared by every subcommand. Each flag falls back to an
/// environment variable, which `.env` may provide.
#[derive(Args, Debug, Clone)]
pub struct Config {
    /// Location of the contacts document
    #[arg(long, env = "CONTACTS_PATH", default_value = STORAGE_PATH)]
    pub contacts_path: PathBuf,

    /// Storage choice (json, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    /// How the document is rewritten (atomic, truncate)
    #[arg(long, env = "WRITE_MODE", default_value_t = String::from("atomic"))]
    pub write_mode: String,

    /// How new contacts get their id (sequential, random)
    #[arg(long, env = "ID_STRATEGY", default_value_t = String::from("sequential"))]
    pub id_strategy: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contacts_path: PathBuf::from(STORAGE_PATH),
            storage_choice: "json".to_string(),
            write_mode: "atomic".to_string(),
            id_strategy: "sequential".to_string(),
        }
    }
}

impl Config {
    pub fn storage(&self) -> Result<Box<dyn Storage>, AppError> {
        match StorageMediums::from(&self.storage_choice)? {
            StorageMediums::Json => {
                let write_mode = WriteMode::from(&self.write_mode)?;
                Ok(Box::new(
                    JsonStorage::new(&self.contacts_path).with_write_mode(write_mode),
                ))
            }
            StorageMediums::Mem => Ok(Box::new(MemStorage::new())),
        }
    }

    pub fn id_strategy(&self) -> Result<IdStrategy, AppError> {
        IdStrategy::from(&self.id_strategy)
    }
}
