pub use crate::cli::{command, run_app};
pub use crate::config::Config;
pub use crate::domain::{
    contact::{self, Contact, ContactDraft, IdStrategy},
    manager::ContactStore,
};
pub use crate::errors::AppError;
pub use crate::store::{self, JsonStorage, MemStorage, Storage, WriteMode};
