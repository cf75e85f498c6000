//! Contact Book - a single-user contact manager with JSON persistence.
//!
//! Contacts (name, phone, email, address, group) live in an in-memory map
//! keyed by title-cased name. The map is loaded from a JSON file at startup
//! and written back, together with a backup copy, after every change.
//!
//! # Architecture
//!
//! - **domain**: Field validators and value objects (name, phone, email)
//! - **models**: The contact record and the store map type
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Persistence behind the `ContactRepository` trait
//! - **services**: CRUD over the store, CSV export and statistics
//! - **shell**: Interactive menu front end

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod shell;

pub use config::Config;
pub use domain::{validate_email, validate_name, validate_phone, ValidationError};
pub use error::{ConfigError, ContactBookError, ContactBookResult};
pub use models::{Contact, ContactMap};
pub use repositories::{ContactRepository, JsonFileRepository};
pub use services::{
    export_csv, statistics, write_csv, ContactBook, ContactUpdate, DeleteOutcome, NewContact,
    Statistics, UpdateOutcome,
};
pub use shell::{Command, Shell};
