//! # Command Layer
//!
//! One module per user-facing operation. Every command takes the
//! [`AddressBook`](crate::book::AddressBook) plus plain Rust arguments and
//! returns a [`CmdResult`]: the records it wants shown and a list of
//! [`CmdMessage`]s. Nothing here prints.
//!
//! Hard failures (invalid phone, invalid birthday, unknown contact) come
//! back as `Err`. Routine outcomes such as "phone not found" or "already has
//! a birthday" are `Ok` results carrying a warning message.

use crate::model::Record;

pub mod add;
pub mod birthday;
pub mod greet;
pub mod helpers;
pub mod list;
pub mod phones;
pub mod remove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<Record>,
    pub phone_numbers: Vec<String>,
    pub days_to_birthday: Option<i64>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_phone_numbers(mut self, phones: Vec<String>) -> Self {
        self.phone_numbers = phones;
        self
    }

    pub fn with_days_to_birthday(mut self, days: i64) -> Self {
        self.days_to_birthday = Some(days);
        self
    }

    /// True when the command reported a routine rejection.
    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
