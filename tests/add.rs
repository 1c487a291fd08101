use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn contact_book(path: &Path) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME"))?;
    cmd.env("CONTACTS_PATH", path)
        .env_remove("STORAGE_CHOICE")
        .env_remove("WRITE_MODE")
        .env_remove("ID_STRATEGY");
    Ok(cmd)
}

#[test]
fn add_contact() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.json");

    contact_book(&path)?
        .args(["add", "--name", "Ann", "--phone", "555-1212", "--company", "Acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully (id 0)"));

    // Company is optional
    contact_book(&path)?
        .args(["add", "--name", "Bob", "--phone", "555-3434"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(id 1)"));

    let document = fs::read_to_string(&path)?;
    assert_eq!(
        document,
        r#"[{"id":0,"name":"Ann","phoneNumber":"555-1212","company":"Acme"},{"id":1,"name":"Bob","phoneNumber":"555-3434","company":""}]"#
    );
    Ok(())
}

#[test]
fn add_to_corrupted_document_starts_over() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.json");
    fs::write(&path, "not valid json")?;

    contact_book(&path)?
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact yet"));

    contact_book(&path)?
        .args(["add", "--name", "Ann", "--phone", "555-1212"])
        .assert()
        .success();

    let document = fs::read_to_string(&path)?;
    assert!(document.starts_with(r#"[{"id":0,"name":"Ann""#));
    Ok(())
}

#[test]
fn invalid_inputs() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.json");

    contact_book(&path)?
        .args(["and", "--name", "Ann"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand 'and'"));

    contact_book(&path)?
        .env("STORAGE_CHOICE", "txt")
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Validation failed: Not a recognized storage medium",
        ));

    contact_book(&path)?
        .args(["add", "--name", "Ann"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--phone"));

    assert!(!path.exists());
    Ok(())
}
