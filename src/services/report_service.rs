//! Reports derived from the contact store: CSV export and group statistics.

use crate::error::{ContactBookError, ContactBookResult};
use crate::services::ContactBook;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Header row of the CSV export.
pub const CSV_HEADER: [&str; 5] = ["Name", "Phone", "Email", "Address", "Group"];

/// Contact totals, overall and per group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Statistics {
    /// Number of contacts in the store
    pub total: usize,

    /// Contacts per group value (case-sensitive), in first-seen order
    pub groups: IndexMap<String, usize>,
}

/// Count contacts overall and per group.
pub fn statistics(book: &ContactBook) -> Statistics {
    let mut groups: IndexMap<String, usize> = IndexMap::new();
    for (_, contact) in book.iter() {
        *groups.entry(contact.group.clone()).or_insert(0) += 1;
    }

    Statistics {
        total: book.len(),
        groups,
    }
}

/// Write the store to `path` as CSV.
///
/// Rows follow insertion order, not the sorted display order. Returns the
/// number of data rows written.
pub fn export_csv(book: &ContactBook, path: impl AsRef<Path>) -> ContactBookResult<usize> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ContactBookError::io(path, e))?;

    let mut writer = BufWriter::new(file);
    let rows = write_csv(book, &mut writer).map_err(|e| ContactBookError::io(path, e))?;
    writer.flush().map_err(|e| ContactBookError::io(path, e))?;

    info!("Exported {} contacts to {}", rows, path.display());
    Ok(rows)
}

/// Write the store as CSV to any writer. Returns the number of data rows.
pub fn write_csv<W: Write>(book: &ContactBook, writer: &mut W) -> io::Result<usize> {
    write_row(writer, &CSV_HEADER)?;

    let mut rows = 0;
    for (name, contact) in book.iter() {
        write_row(
            writer,
            &[
                name,
                contact.phone.as_str(),
                contact.email.as_str(),
                contact.address.as_str(),
                contact.group.as_str(),
            ],
        )?;
        rows += 1;
    }

    Ok(rows)
}

fn write_row<W: Write>(writer: &mut W, fields: &[&str]) -> io::Result<()> {
    let line: Vec<Cow<'_, str>> = fields.iter().map(|field| escape_field(field)).collect();
    write!(writer, "{}\r\n", line.join(","))
}

/// Quote a field if it contains a delimiter, quote or line break.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
