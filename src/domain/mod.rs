//! Domain value objects and validators.
//!
//! This module contains the pattern checks for contact fields and the
//! type-safe wrappers built on them. A `ContactName`, `EmailAddress` or
//! `PhoneNumber` can only be constructed from input that passes its check,
//! so invalid data never reaches the store.

pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use email::{validate_email, EmailAddress};
pub use errors::ValidationError;
pub use name::{normalize_name, title_case, validate_name, ContactName};
pub use phone::{validate_phone, PhoneNumber};
