use super::*;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Upper bound (inclusive) of the id range drawn by [`IdStrategy::Random`].
pub const RANDOM_ID_MAX: i32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i32,
    pub name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub company: String,
}

impl Contact {
    pub fn new(id: i32, name: String, phone_number: String, company: String) -> Self {
        Contact {
            id,
            name,
            phone_number,
            company,
        }
    }

    /// Same contact under a different id.
    pub fn with_id(self, id: i32) -> Self {
        Contact { id, ..self }
    }
}

/// A contact the user filled in but which has no id yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDraft {
    pub name: String,
    pub phone_number: String,
    pub company: String,
}

impl ContactDraft {
    pub fn new(name: String, phone_number: String, company: String) -> Self {
        Self {
            name,
            phone_number,
            company,
        }
    }

    pub fn into_contact(self, id: i32) -> Contact {
        Contact::new(id, self.name, self.phone_number, self.company)
    }
}

/// How [`ContactStore::add_new`](crate::domain::manager::ContactStore::add_new)
/// picks ids.
///
/// `Sequential` never goes below the highest id the store has seen, so ids
/// of deleted contacts are not handed out again while the store is alive.
/// The document does not record that mark: after a restart the next id is
/// one past the highest id still on disk. `Random` draws any unused id in
/// `0..=RANDOM_ID_MAX`, so freed ids may come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Sequential,
    Random,
}

impl IdStrategy {
    pub fn from(str: &str) -> Result<Self, AppError> {
        match str {
            "sequential" => Ok(IdStrategy::Sequential),
            "random" => Ok(IdStrategy::Random),
            _ => Err(AppError::Validation(
                "Not a recognized id strategy".to_string(),
            )),
        }
    }

    pub fn is_which(&self) -> &str {
        match self {
            IdStrategy::Sequential => "sequential",
            IdStrategy::Random => "random",
        }
    }

    /// Picks an id not used by any contact in `contacts`. `highest` is the
    /// largest id ever seen by the caller, deleted contacts included.
    pub fn next_id(&self, contacts: &[Contact], highest: Option<i32>) -> Result<i32, AppError> {
        match self {
            IdStrategy::Sequential => {
                let top = contacts.iter().map(|c| c.id).chain(highest).max();
                match top {
                    Some(max) => max
                        .checked_add(1)
                        .map(|id| id.max(0))
                        .ok_or(AppError::IdSpaceExhausted),
                    None => Ok(0),
                }
            }
            IdStrategy::Random => {
                let used: HashSet<i32> = contacts.iter().map(|c| c.id).collect();
                let free: Vec<i32> = (0..=RANDOM_ID_MAX).filter(|id| !used.contains(id)).collect();

                free.choose(&mut rand::thread_rng())
                    .copied()
                    .ok_or(AppError::IdSpaceExhausted)
            }
        }
    }
}
