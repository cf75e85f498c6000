//! Contact record stored in the contact book.

use crate::domain::{EmailAddress, PhoneNumber};
use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

/// `created` timestamps: always written with six fractional digits, read
/// with any precision (or none).
mod created_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

    pub fn serialize<S>(created: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&created.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<NaiveDateTime>().map_err(serde::de::Error::custom)
    }
}

/// A contact's stored attributes.
///
/// The contact's name is not part of the record; it is the key the record
/// is stored under (see [`ContactMap`](super::ContactMap)).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Phone number, validated on construction and on load
    pub phone: PhoneNumber,

    /// Email address, validated on construction and on load
    pub email: EmailAddress,

    /// Postal address (free text, may be empty)
    #[serde(default)]
    pub address: String,

    /// Group label such as "Family" or "Work" (title-cased, may be empty)
    #[serde(default)]
    pub group: String,

    /// When the contact was created (ISO 8601 local time, never changes)
    #[serde(with = "created_format")]
    created: NaiveDateTime,
}

impl Contact {
    /// Create a new contact stamped with the current local time.
    ///
    /// The stamp is truncated to microseconds, the precision it is stored at.
    pub fn new(
        phone: PhoneNumber,
        email: EmailAddress,
        address: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            phone,
            email,
            address: address.into(),
            group: group.into(),
            created: Local::now().naive_local().trunc_subsecs(6),
        }
    }

    /// When the contact was created.
    pub fn created(&self) -> NaiveDateTime {
        self.created
    }
}
