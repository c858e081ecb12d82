//! Interactive shell
//!
//! Reads commands line by line, runs them against the contact service and
//! writes one reply per command. Command errors become messages and the loop
//! carries on; only terminal I/O failures and a failed save end the session.
//! The address book is saved when the user exits or input runs out.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::error::ContactResult;
use crate::models::{AddressBook, PhoneNumber};
use crate::services::{
    AddContactOutcome, BirthdayLookup, BirthdayOutcome, ContactService, PhoneOutcome,
};
use crate::storage::SnapshotStore;

use super::command::{parse_input, Command, CommandError};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const GOODBYE: &str = "Good bye!";

const HELP: &str = "\
Commands:
  hello                            greet the bot
  add <name> <phone>               add a contact or a phone to a contact
  change <name> <old> <new>        replace a phone number
  phone <name>                     show a contact's phones
  all                              show every contact
  add-birthday <name> <DD.MM.YYYY> set a contact's birthday
  show-birthday <name>             show a contact's birthday
  birthdays                        upcoming birthdays
  remove-phone <name> <phone>      remove a phone number
  delete <name>                    delete a contact
  history [count]                  recent changes
  close | exit                     save and quit";

/// What the shell should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next command
    Continue(String),
    /// Save, print the farewell and stop
    Exit,
}

/// An interactive session over one address book
pub struct Shell<'a> {
    service: ContactService<'a>,
    store: &'a SnapshotStore,
    window_days: u32,
    reference_date: Option<NaiveDate>,
}

impl<'a> Shell<'a> {
    pub fn new(
        book: &'a mut AddressBook,
        store: &'a SnapshotStore,
        settings: &Settings,
        audit: Option<&'a AuditLogger>,
    ) -> Self {
        let service = match audit {
            Some(logger) => ContactService::with_audit(book, logger),
            None => ContactService::new(book),
        };

        Self {
            service,
            store,
            window_days: settings.upcoming_window_days,
            reference_date: None,
        }
    }

    /// Compute birthdays from a fixed date instead of today
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Run one line of input
    ///
    /// User mistakes come back as messages. Errors are reserved for failures
    /// writing the audit log.
    pub fn execute(&mut self, line: &str) -> ContactResult<Reply> {
        let command = match parse_input(line) {
            Ok(command) => command,
            Err(e) => return Ok(Reply::Continue(e.to_string())),
        };
        debug!(?command, "executing command");

        match self.run_command(command) {
            Ok(reply) => Ok(reply),
            Err(e) if e.is_validation() => Ok(Reply::Continue(e.to_string())),
            Err(e) => Err(e),
        }
    }

    /// Read and execute commands until `exit`, `close` or end of input
    ///
    /// The address book is saved however the session ends, including when
    /// the terminal itself fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> ContactResult<()> {
        let session = self.session(input, &mut output);
        self.store.save(self.service.book())?;
        session?;

        writeln!(output, "{}", GOODBYE)?;
        Ok(())
    }

    fn session<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> ContactResult<()> {
        writeln!(output, "{}", WELCOME)?;

        let mut buffer = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                writeln!(output)?;
                return Ok(());
            }

            let result = match std::str::from_utf8(&buffer) {
                Ok(line) => self.execute(line.trim_end_matches(&['\r', '\n'][..])),
                Err(_) => {
                    debug!("ignoring line that is not valid UTF-8");
                    Ok(Reply::Continue(CommandError::Empty.to_string()))
                }
            };

            match result {
                Ok(Reply::Continue(message)) => writeln!(output, "{}", message)?,
                Ok(Reply::Exit) => return Ok(()),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(output, "Error: {}", e)?;
                }
            }
        }
    }

    fn run_command(&mut self, command: Command) -> ContactResult<Reply> {
        let message = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => match self.service.add_contact(&name, &phone)? {
                AddContactOutcome::Created => "Contact added.".to_string(),
                AddContactOutcome::Updated => "Contact updated.".to_string(),
                AddContactOutcome::DuplicatePhone => format!(
                    "The phone number \"{}\" is already associated with this contact.",
                    phone
                ),
            },
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => match self.service.change_phone(&name, &old_phone, &new_phone)? {
                PhoneOutcome::Updated => "Contact updated.".to_string(),
                PhoneOutcome::ContactNotFound => contact_not_found(&name),
                PhoneOutcome::PhoneNotFound => phone_not_found(&old_phone, &name),
            },
            Command::Phone { name } => match self.service.phones(&name) {
                None => format!("\"{}\" is not found in address book.", name),
                Some([]) => format!("Contact \"{}\" has no phone numbers.", name),
                Some(phones) => phones
                    .iter()
                    .map(PhoneNumber::as_str)
                    .collect::<Vec<_>>()
                    .join("\n"),
            },
            Command::All => {
                let book = self.service.book();
                if book.is_empty() {
                    "The address book is empty.".to_string()
                } else {
                    book.records()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Command::AddBirthday { name, birthday } => {
                match self.service.add_birthday(&name, &birthday)? {
                    BirthdayOutcome::Set => "Birthday is set.".to_string(),
                    BirthdayOutcome::AlreadySet => "The birthday has already been set.".to_string(),
                    BirthdayOutcome::ContactNotFound => contact_not_found(&name),
                }
            }
            Command::ShowBirthday { name } => match self.service.birthday(&name) {
                BirthdayLookup::Found(birthday) => birthday.to_string(),
                BirthdayLookup::NotSet => format!("Birthday is not set for contact \"{}\"", name),
                BirthdayLookup::ContactNotFound => contact_not_found(&name),
            },
            Command::Birthdays => self.upcoming_birthdays(),
            Command::RemovePhone { name, phone } => {
                match self.service.remove_phone(&name, &phone)? {
                    PhoneOutcome::Updated => "Phone removed.".to_string(),
                    PhoneOutcome::ContactNotFound => contact_not_found(&name),
                    PhoneOutcome::PhoneNotFound => phone_not_found(&phone, &name),
                }
            }
            Command::Delete { name } => {
                if self.service.delete_contact(&name)? {
                    "Contact deleted.".to_string()
                } else {
                    contact_not_found(&name)
                }
            }
            Command::History { count } => self.history(count)?,
            Command::Help => HELP.to_string(),
            Command::Exit => return Ok(Reply::Exit),
        };

        Ok(Reply::Continue(message))
    }

    fn upcoming_birthdays(&self) -> String {
        let reference = self
            .reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        format_upcoming(&self.service, reference, self.window_days)
    }

    fn history(&self, count: usize) -> ContactResult<String> {
        let entries = self.service.recent_changes(count)?;
        if entries.is_empty() {
            return Ok("No changes recorded.".to_string());
        }

        Ok(entries
            .iter()
            .map(|entry| entry.format_human_readable())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// The `birthdays` reply for `reference` and a window of `days`
pub fn format_upcoming(service: &ContactService<'_>, reference: NaiveDate, days: u32) -> String {
    let upcoming = service.upcoming_birthdays(reference, days);
    if upcoming.is_empty() {
        return format!("No upcoming birthdays in the next {} days.", days);
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    lines.extend(upcoming.iter().map(ToString::to_string));
    lines.join("\n")
}

fn contact_not_found(name: &str) -> String {
    format!("Contact \"{}\" not found in address book.", name)
}

fn phone_not_found(phone: &str, name: &str) -> String {
    format!("Phone number \"{}\" not found for contact \"{}\".", phone, name)
}
