//! # Addrbook Architecture
//!
//! Addrbook is an interactive address book: contacts with phone numbers and
//! birthdays, kept in memory for the duration of one session.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (binary: cli/)                                   │
//! │  - Reads command lines, prints messages                     │
//! │  - Turns every error into a message, never exits on one     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the AddressBook                                     │
//! │  - Supplies defaults (page size, today's date)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation                                 │
//! │  - Returns CmdResult values, no I/O                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Model (book.rs, model.rs)                             │
//! │  - AddressBook: name → Record in insertion order            │
//! │  - Record, Phone, Birthday: validated at construction       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation vs. Routine Outcomes
//!
//! A malformed phone or birthday is an error ([`error::BookError`]) raised
//! where the value is constructed, so an invalid field never exists. Asking
//! to change a phone the contact does not have, or to set a second birthday,
//! is a normal outcome reported as `false` by the model and as a warning
//! message by the commands.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade used by the CLI
//! - [`commands`]: Business logic for each command
//! - [`book`]: The address book and its page iterator
//! - [`model`]: `Record`, `Phone`, `Birthday`
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
