use crate::config::Config;
use crate::domain::ContactName;
use crate::error::{ContactBookError, ContactBookResult};
use crate::models::ContactMap;
use crate::repositories::traits::ContactRepository;
use serde::de::Error as _;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Contact repository backed by a JSON file plus a backup copy.
///
/// Every save writes the primary file and then an identical backup. The two
/// writes are not atomic: a failure between them leaves the backup stale,
/// and a crash mid-write can truncate the primary file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
    backup_path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for `path`, mirroring every save to `backup_path`.
    pub fn new(path: impl Into<PathBuf>, backup_path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup_path: backup_path.into(),
        }
    }

    /// Create a repository using the configured store and backup files.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.contacts_file.clone(), config.backup_file.clone())
    }

    /// Path of the primary store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the backup copy.
    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    fn serialize(contacts: &ContactMap) -> ContactBookResult<Vec<u8>> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        contacts.serialize(&mut serializer)?;
        Ok(buf)
    }
}

/// Whether `name` is a valid name already in normalized form.
fn is_stored_name(name: &str) -> bool {
    ContactName::parse(name).is_ok_and(|parsed| parsed.as_str() == name)
}

impl ContactRepository for JsonFileRepository {
    fn load(&self) -> ContactBookResult<ContactMap> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No store file at {}, starting empty", self.path.display());
                return Ok(ContactMap::new());
            }
            Err(e) => return Err(ContactBookError::io(&self.path, e)),
        };

        let contacts: ContactMap =
            serde_json::from_str(&data).map_err(|source| ContactBookError::Parse {
                path: self.path.clone(),
                source,
            })?;

        // Keys must already be in the form `add` stores them in.
        if let Some(name) = contacts.keys().find(|name| !is_stored_name(name)) {
            return Err(ContactBookError::Parse {
                path: self.path.clone(),
                source: serde_json::Error::custom(format!("invalid contact name {:?}", name)),
            });
        }

        debug!(
            "Loaded {} contacts from {}",
            contacts.len(),
            self.path.display()
        );
        Ok(contacts)
    }

    fn save(&self, contacts: &ContactMap) -> ContactBookResult<()> {
        let json = Self::serialize(contacts)?;

        fs::write(&self.path, &json).map_err(|e| ContactBookError::io(&self.path, e))?;
        fs::write(&self.backup_path, &json)
            .map_err(|e| ContactBookError::io(&self.backup_path, e))?;

        debug!(
            "Saved {} contacts to {} (backup: {})",
            contacts.len(),
            self.path.display(),
            self.backup_path.display()
        );
        Ok(())
    }
}
