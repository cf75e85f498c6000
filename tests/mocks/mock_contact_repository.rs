use contact_book::error::{ContactBookError, ContactBookResult};
use contact_book::models::ContactMap;
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// seeded with data, tracks method calls for verification, and can be told
/// to fail on load or save.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    stored: Arc<Mutex<ContactMap>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
    fail_loads: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            stored: Arc::new(Mutex::new(ContactMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_saves: Arc::new(Mutex::new(false)),
            fail_loads: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a repository whose next load returns `contacts`.
    pub fn with_contacts(contacts: ContactMap) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = contacts;
        repo
    }

    /// The map most recently saved (or seeded).
    pub fn stored(&self) -> ContactMap {
        self.stored.lock().unwrap().clone()
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Make every following load fail with an I/O error.
    pub fn fail_loads(&self, fail: bool) {
        *self.fail_loads.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for MockContactRepository {
    fn load(&self) -> ContactBookResult<ContactMap> {
        self.track_call("load");

        if *self.fail_loads.lock().unwrap() {
            return Err(ContactBookError::io(
                "mock://contacts.json",
                io::Error::new(io::ErrorKind::PermissionDenied, "load refused"),
            ));
        }

        Ok(self.stored.lock().unwrap().clone())
    }

    fn save(&self, contacts: &ContactMap) -> ContactBookResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(ContactBookError::io(
                "mock://contacts.json",
                io::Error::new(io::ErrorKind::Other, "disk full"),
            ));
        }

        *self.stored.lock().unwrap() = contacts.clone();
        Ok(())
    }
}
