//! Application service layer.
//!
//! Services contain the contact book's business logic. They return
//! structured results and never print or prompt; presentation belongs to
//! the shell.

mod contact_service;
pub mod report_service;

pub use contact_service::{ContactBook, ContactUpdate, DeleteOutcome, NewContact, UpdateOutcome};
pub use report_service::{export_csv, statistics, write_csv, Statistics};
