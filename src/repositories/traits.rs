use crate::error::ContactBookResult;
use crate::models::ContactMap;

/// Repository for persisting the contact store.
///
/// Provides abstraction over where the store lives, enabling different
/// implementations (JSON file, in-memory mock).
pub trait ContactRepository: Send + Sync {
    /// Load the whole store. A store that was never saved loads as empty.
    fn load(&self) -> ContactBookResult<ContactMap>;

    /// Replace the persisted store with `contacts`.
    fn save(&self, contacts: &ContactMap) -> ContactBookResult<()>;
}
