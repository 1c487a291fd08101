use super::*;
use log::debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

pub struct JsonStorage {
    pub path: PathBuf,
    pub write_mode: WriteMode,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_mode: WriteMode::default(),
        }
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    fn write_in_place(&self, data: &[u8]) -> Result<(), AppError> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(data)?;
        Ok(())
    }

    fn write_atomically(&self, data: &[u8]) -> Result<(), AppError> {
        // The temp file must share a filesystem with the target for rename to work
        let mut file = NamedTempFile::new_in(parent_dir(&self.path))?;

        file.write_all(data)?;
        file.as_file().sync_all()?;
        file.persist(&self.path)?;
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(&self.path)? {
            debug!("{} does not exist yet", self.path.display());
            return Ok(Vec::new());
        }

        let data = fs::read(&self.path)?;

        // serde_json will give an error if data is empty
        if data.is_empty() {
            debug!("{} is empty", self.path.display());
            return Ok(Vec::new());
        }

        Ok(serde_json::from_slice(&data)?)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let json_contacts = serde_json::to_vec(contacts)?;

        match self.write_mode {
            WriteMode::Atomic => self.write_atomically(&json_contacts)?,
            WriteMode::Truncate => self.write_in_place(&json_contacts)?,
        }

        debug!(
            "Saved {} contacts to {}",
            contacts.len(),
            self.path.display()
        );
        Ok(())
    }

    fn medium(&self) -> &str {
        "json"
    }
}
