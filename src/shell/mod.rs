//! Interactive menu shell for the contact book.
//!
//! The shell owns presentation: it prints the menu, reads one command per
//! iteration, prompts for fields and confirmations, and turns errors into
//! messages. Expected outcomes (validation, not found, duplicate) are shown
//! as `❌` lines; any other failure is shown as a warning and the loop
//! carries on.

mod handlers;

use crate::error::ContactBookError;
use crate::services::ContactBook;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

/// The main menu, printed before every command prompt.
pub const MENU: &str = "
📇 CONTACT MANAGEMENT SYSTEM
1. Add Contact
2. Search Contact
3. Update Contact
4. Delete Contact
5. Display All Contacts
6. Export to CSV
7. Statistics
0. Exit
";

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Search,
    Update,
    Delete,
    DisplayAll,
    Export,
    Statistics,
    Exit,
}

impl Command {
    /// Parse a menu token (`"0"`–`"7"`).
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::Add),
            "2" => Some(Self::Search),
            "3" => Some(Self::Update),
            "4" => Some(Self::Delete),
            "5" => Some(Self::DisplayAll),
            "6" => Some(Self::Export),
            "7" => Some(Self::Statistics),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Menu-driven front end over a [`ContactBook`].
pub struct Shell<R, W> {
    book: ContactBook,
    input: R,
    output: W,
    export_path: PathBuf,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell reading commands from `input` and writing to `output`.
    /// "Export to CSV" writes to `export_path`.
    pub fn new(book: ContactBook, input: R, output: W, export_path: impl Into<PathBuf>) -> Self {
        Self {
            book,
            input,
            output,
            export_path: export_path.into(),
        }
    }

    /// Take back the contact book and the output sink.
    pub fn into_parts(self) -> (ContactBook, W) {
        (self.book, self.output)
    }

    /// Run the menu loop until `0` is chosen or input ends.
    ///
    /// # Errors
    ///
    /// Only failures to read input or write output end the loop early.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;

            let Some(choice) = self.prompt("Enter choice: ")? else {
                break;
            };

            let Some(command) = Command::parse(choice.trim()) else {
                writeln!(self.output, "❌ Invalid choice.")?;
                continue;
            };

            if command == Command::Exit {
                break;
            }

            if let Err(err) = self.dispatch(command) {
                self.report(err)?;
            }
        }

        writeln!(self.output, "👋 Goodbye!")?;
        self.output.flush()
    }

    fn report(&mut self, err: anyhow::Error) -> io::Result<()> {
        match err.downcast_ref::<ContactBookError>() {
            Some(e) if e.is_user_error() => writeln!(self.output, "❌ {}", e),
            _ => {
                warn!("Command failed: {:#}", err);
                writeln!(self.output, "⚠️ Error: {}", err)
            }
        }
    }

    /// Print `label` and read one line without its line terminator.
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Like [`prompt`](Self::prompt), treating end of input as a blank answer.
    fn ask(&mut self, label: &str) -> io::Result<String> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }
}
