//! Contact store service.
//!
//! `ContactBook` owns the in-memory store and the repository it is persisted
//! through. Every successful mutation is saved before the call returns; if
//! the save fails the mutation is rolled back so memory matches disk.

use crate::domain::{normalize_name, title_case, ContactName, EmailAddress, PhoneNumber};
use crate::error::{ContactBookError, ContactBookResult};
use crate::models::{Contact, ContactMap};
use crate::repositories::ContactRepository;
use tracing::{debug, info, warn};

/// Fields for a new contact, as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub group: String,
}

/// Replacement values for an existing contact.
///
/// `None` and blank (whitespace-only) values leave the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub group: Option<String>,
}

impl ContactUpdate {
    fn is_empty(&self) -> bool {
        [&self.phone, &self.email, &self.address, &self.group]
            .iter()
            .all(|field| supplied(field).is_none())
    }
}

/// Outcome of [`ContactBook::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// At least one field was supplied; the record was saved.
    Updated(Contact),
    /// Every field was blank; nothing changed and nothing was saved.
    Unchanged(Contact),
}

/// Outcome of [`ContactBook::delete`].
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The record was removed and the store saved.
    Deleted(Contact),
    /// The caller did not confirm; the store is untouched.
    Cancelled,
}

/// Returns the value if it holds something other than whitespace.
fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.trim().is_empty())
}

/// The contact store: name-keyed records plus the repository behind them.
pub struct ContactBook {
    contacts: ContactMap,
    repository: Box<dyn ContactRepository>,
}

impl ContactBook {
    /// Load the store from `repository`.
    ///
    /// # Errors
    ///
    /// Propagates `Io` and `Parse` errors from the repository unchanged.
    pub fn open(repository: Box<dyn ContactRepository>) -> ContactBookResult<Self> {
        let contacts = repository.load()?;
        info!("Contact book opened with {} contacts", contacts.len());
        Ok(Self {
            contacts,
            repository,
        })
    }

    /// Number of contacts in the store.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the store holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Look up a contact by name. The name is normalized first.
    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(&normalize_name(name))
    }

    /// Iterate over all contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Contact)> + '_ {
        self.contacts
            .iter()
            .map(|(name, contact)| (name.as_str(), contact))
    }

    /// Check that `raw` would be accepted as the name of a new contact.
    ///
    /// Returns the normalized name. Lets an interactive caller reject a bad
    /// or taken name before asking for the remaining fields.
    pub fn check_new_name(&self, raw: &str) -> ContactBookResult<String> {
        let name = ContactName::parse(raw)?.into_inner();
        if self.contacts.contains_key(&name) {
            return Err(ContactBookError::Duplicate(name));
        }
        Ok(name)
    }

    /// Add a contact and persist the store.
    ///
    /// Checks run in order: name format, name uniqueness, phone, email.
    /// Returns the normalized name the contact was stored under.
    pub fn add(&mut self, new: NewContact) -> ContactBookResult<String> {
        let name = self.check_new_name(&new.name)?;
        let phone = PhoneNumber::new(new.phone)?;
        let email = EmailAddress::new(new.email)?;

        let contact = Contact::new(phone, email, new.address.trim(), title_case(new.group.trim()));
        self.contacts.insert(name.clone(), contact);

        if let Err(e) = self.persist() {
            warn!("Rolling back add of {}: {}", name, e);
            self.contacts.shift_remove(&name);
            return Err(e);
        }

        info!("Added contact {}", name);
        Ok(name)
    }

    /// Find contacts whose name (case-insensitive) or phone contains `query`.
    ///
    /// The query is trimmed and lowercased; results keep insertion order. An
    /// empty query matches every contact.
    pub fn search(&self, query: &str) -> Vec<(&str, &Contact)> {
        let query = query.trim().to_lowercase();

        let matches: Vec<(&str, &Contact)> = self
            .iter()
            .filter(|(name, contact)| {
                name.to_lowercase().contains(&query) || contact.phone.as_str().contains(&query)
            })
            .collect();

        debug!("Search {:?} matched {} contacts", query, matches.len());
        matches
    }

    /// Overwrite the supplied fields of an existing contact.
    ///
    /// Phone and email are validated before anything changes, so a rejected
    /// update leaves the record as it was.
    pub fn update(&mut self, name: &str, update: ContactUpdate) -> ContactBookResult<UpdateOutcome> {
        let name = normalize_name(name);
        let current = self
            .contacts
            .get(&name)
            .ok_or_else(|| ContactBookError::NotFound(name.clone()))?;

        if update.is_empty() {
            return Ok(UpdateOutcome::Unchanged(current.clone()));
        }

        let phone = supplied(&update.phone).map(PhoneNumber::new).transpose()?;
        let email = supplied(&update.email).map(EmailAddress::new).transpose()?;

        let previous = current.clone();
        let mut updated = previous.clone();
        if let Some(phone) = phone {
            updated.phone = phone;
        }
        if let Some(email) = email {
            updated.email = email;
        }
        if let Some(address) = supplied(&update.address) {
            updated.address = address.trim().to_string();
        }
        if let Some(group) = supplied(&update.group) {
            updated.group = title_case(group.trim());
        }

        self.contacts.insert(name.clone(), updated.clone());

        if let Err(e) = self.persist() {
            warn!("Rolling back update of {}: {}", name, e);
            self.contacts.insert(name, previous);
            return Err(e);
        }

        info!("Updated contact {}", name);
        Ok(UpdateOutcome::Updated(updated))
    }

    /// Remove a contact once the caller has confirmed.
    ///
    /// The name must exist even when `confirmed` is false.
    pub fn delete(&mut self, name: &str, confirmed: bool) -> ContactBookResult<DeleteOutcome> {
        let name = normalize_name(name);
        if !self.contacts.contains_key(&name) {
            return Err(ContactBookError::NotFound(name));
        }

        if !confirmed {
            debug!("Deletion of {} cancelled", name);
            return Ok(DeleteOutcome::Cancelled);
        }

        let Some((index, key, contact)) = self.contacts.shift_remove_full(&name) else {
            return Err(ContactBookError::NotFound(name));
        };

        if let Err(e) = self.persist() {
            warn!("Rolling back delete of {}: {}", key, e);
            self.contacts.shift_insert(index, key, contact);
            return Err(e);
        }

        info!("Deleted contact {}", key);
        Ok(DeleteOutcome::Deleted(contact))
    }

    /// All contacts ordered by name.
    ///
    /// Each call returns a fresh iterator over the current store.
    pub fn list_all(&self) -> impl Iterator<Item = (&str, &Contact)> + '_ {
        let mut entries: Vec<(&str, &Contact)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    fn persist(&self) -> ContactBookResult<()> {
        self.repository.save(&self.contacts)
    }
}
