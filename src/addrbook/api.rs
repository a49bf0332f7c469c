//! # API Facade
//!
//! [`AddressBookApi`] is the single entry point the interactive loop talks
//! to. It owns the [`AddressBook`] for the lifetime of the process and
//! forwards each operation to its command module.
//!
//! The facade does not format output and does not print. It supplies the
//! two pieces of context commands should not look up themselves: the default
//! page size and today's date.

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use chrono::{Local, NaiveDate};
use tracing::debug;

pub struct AddressBookApi {
    book: AddressBook,
    page_size: usize,
}

impl AddressBookApi {
    pub fn new(book: AddressBook, page_size: usize) -> Self {
        Self { book, page_size }
    }

    pub fn greet(&self) -> commands::CmdResult {
        commands::greet::run()
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        debug!(contact = %name, "add_contact");
        commands::add::run(&mut self.book, name, phone)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        debug!(contact = %name, "add_phone");
        commands::phones::add(&mut self.book, name, phone)
    }

    pub fn change_phone(
        &mut self,
        name: &str,
        old: &str,
        new: &str,
    ) -> Result<commands::CmdResult> {
        debug!(contact = %name, "change_phone");
        commands::phones::change(&mut self.book, name, old, new)
    }

    pub fn delete_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        debug!(contact = %name, "delete_phone");
        commands::phones::delete(&mut self.book, name, phone)
    }

    pub fn show_phones(&self, name: &str) -> Result<commands::CmdResult> {
        commands::phones::show(&self.book, name)
    }

    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<commands::CmdResult> {
        debug!(contact = %name, "add_birthday");
        commands::birthday::add(&mut self.book, name, birthday)
    }

    pub fn days_to_birthday(&self, name: &str) -> Result<commands::CmdResult> {
        self.days_to_birthday_on(name, Local::now().date_naive())
    }

    pub fn days_to_birthday_on(&self, name: &str, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::birthday::countdown(&self.book, name, today)
    }

    pub fn show_all(&self) -> Result<commands::CmdResult> {
        commands::list::all(&self.book)
    }

    /// The first `page_size` contacts, or the configured default.
    pub fn show_page(&self, page_size: Option<usize>) -> Result<commands::CmdResult> {
        commands::list::page(&self.book, page_size.unwrap_or(self.page_size))
    }

    pub fn remove_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        debug!(contact = %name, "remove_contact");
        commands::remove::run(&mut self.book, name)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
