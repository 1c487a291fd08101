use super::*;
use crate::domain::contact::{ContactDraft, IdStrategy};
use crate::store::Storage;
use log::{debug, error, warn};
use std::io;

type Observer = Box<dyn FnMut(&[Contact])>;

/// Ordered contact list mirrored to a [`Storage`] after every mutation.
///
/// Mutations are applied in memory first and then the whole list is saved.
/// A failed save is logged and returned, but the in-memory change stays, so
/// memory and disk disagree until the next successful save.
///
/// If the document exists but cannot be read, the store opens empty and
/// refuses every save until a [`ContactStore::reload`] succeeds, so the
/// unreadable document is never replaced.
///
/// Every save rewrites the full list, which is fine for a personal contact
/// book and nothing larger.
pub struct ContactStore {
    contacts: Vec<Contact>,
    storage: Box<dyn Storage>,
    id_strategy: IdStrategy,
    highest_id: Option<i32>,
    unreadable: Option<io::ErrorKind>,
    observers: Vec<Observer>,
}

impl ContactStore {
    /// Loads the backing document. Any load failure leaves the list empty.
    /// A corrupted document stays on disk until the next save overwrites it;
    /// an unreadable one blocks saving instead.
    pub fn open(storage: Box<dyn Storage>) -> Self {
        let mut store = Self::empty(storage);
        store.reload_lenient();
        store
    }

    /// Like [`ContactStore::open`] but corrupted documents and I/O failures
    /// are returned instead of recovered.
    pub fn open_strict(storage: Box<dyn Storage>) -> Result<Self, AppError> {
        let mut store = Self::empty(storage);
        store.contacts = store.storage.load()?;
        store.track_highest_id();
        debug!("Loaded {} contacts", store.contacts.len());
        Ok(store)
    }

    fn empty(storage: Box<dyn Storage>) -> Self {
        Self {
            contacts: Vec::new(),
            storage,
            id_strategy: IdStrategy::default(),
            highest_id: None,
            unreadable: None,
            observers: Vec::new(),
        }
    }

    pub fn with_id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    pub fn medium(&self) -> &str {
        self.storage.medium()
    }

    /// Current list in display order.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn snapshot(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn find(&self, id: i32) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// True while the document failed to load with an I/O error and saves
    /// are refused.
    pub fn is_read_only(&self) -> bool {
        self.unreadable.is_some()
    }

    /// Registers a callback run with the new list after every mutation.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&[Contact]) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Appends `contact` as is. Ids are not checked for duplicates.
    pub fn add(&mut self, contact: Contact) -> Result<(), AppError> {
        self.highest_id = self.highest_id.max(Some(contact.id));
        self.contacts.push(contact);
        self.commit()
    }

    /// Assigns a fresh id to `draft`, appends and persists it.
    pub fn add_new(&mut self, draft: ContactDraft) -> Result<Contact, AppError> {
        let id = self.id_strategy.next_id(&self.contacts, self.highest_id)?;
        let contact = draft.into_contact(id);

        self.add(contact.clone())?;
        Ok(contact)
    }

    /// Replaces the first contact sharing `updated.id`, keeping its position.
    /// Returns `Ok(false)` without saving when no contact has that id.
    pub fn edit(&mut self, updated: Contact) -> Result<bool, AppError> {
        let Some(slot) = self.contacts.iter_mut().find(|c| c.id == updated.id) else {
            return Ok(false);
        };

        *slot = updated;
        self.commit()?;
        Ok(true)
    }

    /// Removes the first contact equal to `contact` in every field.
    /// Returns `Ok(false)` without saving when nothing matches.
    pub fn delete(&mut self, contact: &Contact) -> Result<bool, AppError> {
        let Some(index) = self.contacts.iter().position(|c| c == contact) else {
            return Ok(false);
        };

        self.contacts.remove(index);
        self.commit()?;
        Ok(true)
    }

    /// Writes the current list to storage.
    pub fn save(&self) -> Result<(), AppError> {
        if let Some(kind) = self.unreadable {
            let err = AppError::Io(io::Error::new(
                kind,
                "contact document could not be read, refusing to overwrite it",
            ));
            error!("Not saving to {} storage: {}", self.storage.medium(), err);
            return Err(err);
        }

        self.storage.save(&self.contacts).inspect_err(|e| {
            error!(
                "Could not save contacts to {} storage: {}",
                self.storage.medium(),
                e
            )
        })
    }

    /// Re-reads the backing document using the recovery rules of
    /// [`ContactStore::open`].
    pub fn reload(&mut self) {
        self.reload_lenient();
        self.notify();
    }

    fn reload_lenient(&mut self) {
        match self.storage.load() {
            Ok(contacts) => {
                debug!("Loaded {} contacts", contacts.len());
                self.contacts = contacts;
                self.unreadable = None;
                self.track_highest_id();
            }
            Err(e) if e.is_recoverable() => {
                warn!("Starting with an empty contact list: {}", e);
                self.contacts.clear();
                self.unreadable = None;
            }
            Err(e) => {
                error!("Starting with an empty, read-only contact list: {}", e);
                self.contacts.clear();
                self.unreadable = Some(match &e {
                    AppError::Io(io_err) => io_err.kind(),
                    _ => io::ErrorKind::Other,
                });
            }
        }
    }

    fn track_highest_id(&mut self) {
        let loaded = self.contacts.iter().map(|c| c.id).max();
        self.highest_id = self.highest_id.max(loaded);
    }

    fn commit(&mut self) -> Result<(), AppError> {
        let saved = self.save();
        self.notify();
        saved
    }

    fn notify(&mut self) {
        for observer in self.observers.iter_mut() {
            observer(&self.contacts);
        }
    }
}
