use crate::config::Config;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Personal contact book")]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Company the contact works for
        #[arg(long)]
        company: Option<String>,
    },
    /// List contacts in the order they were added
    List,
    /// Edit an existing contact
    /// Provide the contact id followed by the fields you wish to update
    Edit {
        /// Id of the contact to edit
        #[arg(long)]
        id: i32,

        /// Update name
        #[arg(long)]
        name: Option<String>,

        /// Update phone number
        #[arg(long)]
        phone: Option<String>,

        /// Update company
        #[arg(long)]
        company: Option<String>,
    },
    /// Delete a contact by id
    Delete {
        /// Id of the contact to delete
        #[arg(long)]
        id: i32,
    },
}
