//! Data models for the contact book.

pub mod contact;

pub use contact::Contact;

use indexmap::IndexMap;

/// The whole store: normalized contact name to record, in insertion order.
pub type ContactMap = IndexMap<String, Contact>;
