use super::*;
use std::cell::RefCell;

/// Keeps the "persisted" list in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemStorage {
    data: RefCell<Vec<Contact>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(contacts),
        }
    }
}

impl Storage for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        Ok(())
    }

    fn medium(&self) -> &str {
        "mem"
    }
}
