//! Scripted sessions against the interactive shell.
//!
//! Each test feeds a canned sequence of input lines and inspects both the
//! printed output and the resulting store.

mod mocks;

use contact_book::{ContactBook, NewContact, Shell};
use mocks::MockContactRepository;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

struct Session {
    output: String,
    book: ContactBook,
    repo: MockContactRepository,
}

fn run_session(repo: MockContactRepository, export_path: PathBuf, script: &str) -> Session {
    let book = ContactBook::open(Box::new(repo.clone())).unwrap();
    let mut shell = Shell::new(book, Cursor::new(script.to_string()), Vec::new(), export_path);
    shell.run().unwrap();

    let (book, output) = shell.into_parts();
    Session {
        output: String::from_utf8(output).unwrap(),
        book,
        repo,
    }
}

fn run(script: &str) -> Session {
    run_session(
        MockContactRepository::new(),
        PathBuf::from("unused.csv"),
        script,
    )
}

fn seeded_repo() -> MockContactRepository {
    let repo = MockContactRepository::new();
    let mut book = ContactBook::open(Box::new(repo.clone())).unwrap();
    book.add(NewContact {
        name: "Ada Lovelace".to_string(),
        phone: "1234567".to_string(),
        email: "ada@example.com".to_string(),
        address: "12 Elm Road".to_string(),
        group: "Work".to_string(),
    })
    .unwrap();
    book.add(NewContact {
        name: "Alan Turing".to_string(),
        phone: "7654321".to_string(),
        email: "alan@example.org".to_string(),
        address: String::new(),
        group: "Friends".to_string(),
    })
    .unwrap();
    repo.reset_call_counts();
    repo
}

#[test]
fn test_exit_immediately() {
    let session = run("0\n");
    assert!(session.output.contains("📇 CONTACT MANAGEMENT SYSTEM"));
    assert!(session.output.ends_with("👋 Goodbye!\n"));
}

#[test]
fn test_end_of_input_ends_loop() {
    let session = run("");
    assert!(session.output.contains("👋 Goodbye!"));
}

#[test]
fn test_invalid_choice_keeps_running() {
    let session = run("9\nhello\n0\n");
    assert_eq!(session.output.matches("❌ Invalid choice.").count(), 2);
    assert_eq!(session.output.matches("📇 CONTACT MANAGEMENT SYSTEM").count(), 3);
}

#[test]
fn test_add_contact_session() {
    let session = run(
        "1\n  grace hopper \n+15550001111\ngrace@navy.mil\n 1 Navy Yard \nwork\n0\n",
    );

    assert!(session.output.contains("✅ Contact added successfully!"));
    let contact = session.book.get("Grace Hopper").unwrap();
    assert_eq!(contact.phone.as_str(), "+15550001111");
    assert_eq!(contact.address, "1 Navy Yard");
    assert_eq!(contact.group, "Work");
    assert_eq!(session.repo.get_call_count("save"), 1);
}

#[test]
fn test_add_rejects_invalid_name_before_asking_for_phone() {
    let session = run("1\nJ1\n0\n");

    assert!(session.output.contains("❌ Invalid name: J1"));
    assert!(!session.output.contains("Enter phone number: "));
    assert!(session.book.is_empty());
}

#[test]
fn test_add_rejects_duplicate_name() {
    let session = run_session(
        seeded_repo(),
        PathBuf::from("unused.csv"),
        "1\nada lovelace\n0\n",
    );

    assert!(session
        .output
        .contains("❌ Contact already exists: Ada Lovelace"));
    assert_eq!(session.book.len(), 2);
}

#[test]
fn test_add_rejects_invalid_phone_before_asking_for_email() {
    let session = run("1\nJane Roe\n123-abc\n0\n");

    assert!(session.output.contains("❌ Invalid phone number: 123-abc"));
    assert!(!session.output.contains("Enter email: "));
    assert!(session.book.is_empty());
}

#[test]
fn test_search_session() {
    let session = run_session(seeded_repo(), PathBuf::from("unused.csv"), "2\nturing\n2\nxyz\n0\n");

    assert!(session.output.contains("Name    : Alan Turing"));
    assert!(!session.output.contains("Name    : Ada Lovelace"));
    assert!(session.output.contains("❌ No matching contacts found."));
}

#[test]
fn test_update_session() {
    let session = run_session(
        seeded_repo(),
        PathBuf::from("unused.csv"),
        "3\nada lovelace\n\nada@analytical.engine\n\nfamily\n0\n",
    );

    assert!(session.output.contains("✅ Contact updated successfully!"));
    let contact = session.book.get("Ada Lovelace").unwrap();
    assert_eq!(contact.phone.as_str(), "1234567");
    assert_eq!(contact.email.as_str(), "ada@analytical.engine");
    assert_eq!(contact.address, "12 Elm Road");
    assert_eq!(contact.group, "Family");
    assert_eq!(session.repo.get_call_count("save"), 1);
}

#[test]
fn test_update_with_blank_answers_changes_nothing() {
    let session = run_session(seeded_repo(), PathBuf::from("unused.csv"), "3\nAda Lovelace\n\n\n\n\n0\n");

    assert!(session.output.contains("No changes made."));
    assert_eq!(session.repo.get_call_count("save"), 0);
}

#[test]
fn test_update_unknown_contact() {
    let session = run("3\nNobody\n0\n");

    assert!(session.output.contains("❌ Contact not found: Nobody"));
    assert!(!session.output.contains("New phone"));
}

#[test]
fn test_delete_cancelled_then_confirmed() {
    let session = run_session(
        seeded_repo(),
        PathBuf::from("unused.csv"),
        "4\nada lovelace\nn\n4\nAda Lovelace\nY\n0\n",
    );

    assert!(session
        .output
        .contains("Are you sure you want to delete Ada Lovelace? (y/n): "));
    assert!(session.output.contains("❌ Deletion canceled."));
    assert!(session.output.contains("✅ Contact deleted."));
    assert!(session.book.get("Ada Lovelace").is_none());
    assert_eq!(session.repo.get_call_count("save"), 1);
}

#[test]
fn test_display_all_is_sorted() {
    let repo = MockContactRepository::new();
    let mut book = ContactBook::open(Box::new(repo.clone())).unwrap();
    for (name, phone) in [("Zed", "1111111"), ("Amy", "2222222")] {
        book.add(NewContact {
            name: name.to_string(),
            phone: phone.to_string(),
            email: "x@example.com".to_string(),
            ..Default::default()
        })
        .unwrap();
    }

    let session = run_session(repo, PathBuf::from("unused.csv"), "5\n0\n");
    let amy = session.output.find("Name    : Amy").unwrap();
    let zed = session.output.find("Name    : Zed").unwrap();
    assert!(amy < zed);
}

#[test]
fn test_display_all_empty() {
    let session = run("5\n0\n");
    assert!(session.output.contains("📭 No contacts available."));
}

#[test]
fn test_export_session_writes_csv() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");

    let session = run_session(seeded_repo(), path.clone(), "6\n0\n");

    assert!(session
        .output
        .contains(&format!("📤 Contacts exported to {}", path.display())));
    let csv = std::fs::read_to_string(&path).unwrap();
    assert!(csv.starts_with("Name,Phone,Email,Address,Group\r\n"));
    assert!(csv.contains("Ada Lovelace,1234567,ada@example.com,12 Elm Road,Work"));
}

#[test]
fn test_export_failure_is_reported_and_loop_continues() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.csv");

    let session = run_session(seeded_repo(), path, "6\n7\n0\n");

    assert!(session.output.contains("⚠️ Error: I/O error on"));
    assert!(session.output.contains("📊 Total contacts: 2"));
}

#[test]
fn test_statistics_session() {
    let session = run_session(seeded_repo(), PathBuf::from("unused.csv"), "7\n0\n");

    assert!(session.output.contains("📊 Total contacts: 2"));
    assert!(session.output.contains("  Work: 1\n"));
    assert!(session.output.contains("  Friends: 1\n"));
}

#[test]
fn test_save_failure_is_reported_as_warning() {
    let repo = MockContactRepository::new();
    repo.fail_saves(true);

    let session = run_session(
        repo,
        PathBuf::from("unused.csv"),
        "1\nAda Lovelace\n1234567\nada@example.com\n\n\n0\n",
    );

    assert!(session.output.contains("⚠️ Error: I/O error on mock://contacts.json"));
    assert!(!session.output.contains("✅ Contact added successfully!"));
    assert!(session.output.ends_with("👋 Goodbye!\n"));
    assert!(session.book.is_empty());
}
