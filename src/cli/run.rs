use crate::prelude::{
    AppError, Contact, ContactDraft, ContactStore,
    command::{Cli, Commands},
};
use clap::Parser;
use log::info;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut store = ContactStore::open(cli.config.storage()?)
        .with_id_strategy(cli.config.id_strategy()?);

    info!(
        "Using {} storage with {} ids",
        store.medium(),
        store.id_strategy().is_which()
    );

    match cli.command {
        Commands::Add {
            name,
            phone,
            company,
        } => {
            let draft = ContactDraft::new(name, phone, company.unwrap_or_default());
            let contact = store.add_new(draft)?;

            println!("Contact added successfully (id {})", contact.id);
            Ok(())
        }

        Commands::List => {
            if store.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for contact in store.list() {
                println!("{}", display_contact(contact));
            }
            Ok(())
        }

        Commands::Edit {
            id,
            name,
            phone,
            company,
        } => {
            let Some(current) = store.find(id) else {
                return Err(AppError::NotFound(format!("Contact with id {}", id)));
            };

            let updated = Contact {
                id,
                name: name.unwrap_or_else(|| current.name.clone()),
                phone_number: phone.unwrap_or_else(|| current.phone_number.clone()),
                company: company.unwrap_or_else(|| current.company.clone()),
            };
            store.edit(updated)?;

            println!("Contact updated successfully");
            Ok(())
        }

        Commands::Delete { id } => {
            let Some(contact) = store.find(id).cloned() else {
                return Err(AppError::NotFound(format!("Contact with id {}", id)));
            };

            store.delete(&contact)?;

            println!("Contact deleted successfully");
            Ok(())
        }
    }
}

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "{:>4}. {:<20} {:15} {:<20}",
        contact.id, contact.name, contact.phone_number, contact.company
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_lines_are_aligned() {
        let contact = Contact::new(
            7,
            "Ann".to_string(),
            "555-1212".to_string(),
            "Acme".to_string(),
        );

        assert_eq!(
            display_contact(&contact),
            format!("   7. {:<20} {:15} {:<20}", "Ann", "555-1212", "Acme")
        );
    }
}
