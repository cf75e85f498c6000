//! Per-command handlers for the interactive shell.

use super::{Command, Shell};
use crate::domain::{normalize_name, EmailAddress, PhoneNumber};
use crate::error::ContactBookError;
use crate::models::Contact;
use crate::services::{
    export_csv, statistics, ContactUpdate, DeleteOutcome, NewContact, UpdateOutcome,
};
use anyhow::Result;
use std::io::{self, BufRead, Write};

const RULE_WIDTH: usize = 40;

/// Print one contact as a framed block.
fn write_contact<W: Write>(out: &mut W, name: &str, contact: &Contact) -> io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out, "{}", rule)?;
    writeln!(out, "Name    : {}", name)?;
    writeln!(out, "Phone   : {}", contact.phone)?;
    writeln!(out, "Email   : {}", contact.email)?;
    writeln!(out, "Address : {}", contact.address)?;
    writeln!(out, "Group   : {}", contact.group)?;
    writeln!(out, "{}", rule)
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub(super) fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Add => self.add_contact(),
            Command::Search => self.search_contacts(),
            Command::Update => self.update_contact(),
            Command::Delete => self.delete_contact(),
            Command::DisplayAll => self.display_all(),
            Command::Export => self.export(),
            Command::Statistics => self.show_statistics(),
            Command::Exit => Ok(()),
        }
    }

    fn add_contact(&mut self) -> Result<()> {
        // Reject each field as soon as it is entered
        let raw_name = self.ask("Enter name: ")?;
        let name = self.book.check_new_name(&raw_name)?;

        let phone = self.ask("Enter phone number: ")?;
        PhoneNumber::new(phone.as_str()).map_err(ContactBookError::from)?;

        let email = self.ask("Enter email: ")?;
        EmailAddress::new(email.as_str()).map_err(ContactBookError::from)?;

        let address = self.ask("Enter address: ")?;
        let group = self.ask("Enter group (Family, Work, Friends): ")?;

        self.book.add(NewContact {
            name,
            phone,
            email,
            address,
            group,
        })?;
        writeln!(self.output, "✅ Contact added successfully!")?;
        Ok(())
    }

    fn search_contacts(&mut self) -> Result<()> {
        let query = self.ask("Search by name or phone: ")?;

        let matches = self.book.search(&query);
        if matches.is_empty() {
            writeln!(self.output, "❌ No matching contacts found.")?;
            return Ok(());
        }

        for (name, contact) in matches {
            write_contact(&mut self.output, name, contact)?;
        }
        Ok(())
    }

    fn update_contact(&mut self) -> Result<()> {
        let raw_name = self.ask("Enter contact name to update: ")?;
        let name = normalize_name(&raw_name);
        if self.book.get(&name).is_none() {
            return Err(ContactBookError::NotFound(name).into());
        }

        let update = ContactUpdate {
            phone: Some(self.ask("New phone (leave blank to keep current): ")?),
            email: Some(self.ask("New email (leave blank to keep current): ")?),
            address: Some(self.ask("New address (leave blank to keep current): ")?),
            group: Some(self.ask("New group (leave blank to keep current): ")?),
        };

        match self.book.update(&name, update)? {
            UpdateOutcome::Updated(_) => writeln!(self.output, "✅ Contact updated successfully!")?,
            UpdateOutcome::Unchanged(_) => writeln!(self.output, "No changes made.")?,
        }
        Ok(())
    }

    fn delete_contact(&mut self) -> Result<()> {
        let raw_name = self.ask("Enter contact name to delete: ")?;
        let name = normalize_name(&raw_name);
        if self.book.get(&name).is_none() {
            return Err(ContactBookError::NotFound(name).into());
        }

        let answer = self.ask(&format!("Are you sure you want to delete {}? (y/n): ", name))?;
        let confirmed = answer.trim().eq_ignore_ascii_case("y");

        match self.book.delete(&name, confirmed)? {
            DeleteOutcome::Deleted(_) => writeln!(self.output, "✅ Contact deleted.")?,
            DeleteOutcome::Cancelled => writeln!(self.output, "❌ Deletion canceled.")?,
        }
        Ok(())
    }

    fn display_all(&mut self) -> Result<()> {
        if self.book.is_empty() {
            writeln!(self.output, "📭 No contacts available.")?;
            return Ok(());
        }

        for (name, contact) in self.book.list_all() {
            write_contact(&mut self.output, name, contact)?;
        }
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        export_csv(&self.book, &self.export_path)?;
        writeln!(
            self.output,
            "📤 Contacts exported to {}",
            self.export_path.display()
        )?;
        Ok(())
    }

    fn show_statistics(&mut self) -> Result<()> {
        let stats = statistics(&self.book);

        writeln!(self.output, "📊 Total contacts: {}", stats.total)?;
        for (group, count) in &stats.groups {
            writeln!(self.output, "  {}: {}", group, count)?;
        }
        Ok(())
    }
}
