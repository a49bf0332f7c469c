use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use chrono::NaiveDate;
use tracing::{info, warn};

use super::helpers::{find_record, find_record_mut};

pub fn add(book: &mut AddressBook, name: &str, raw: &str) -> Result<CmdResult> {
    let record = find_record_mut(book, name)?;

    if !record.add_birthday(raw)? {
        warn!(contact = %name, "birthday already set");
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Contact with name {} already contains field Birthday",
            name
        ))));
    }
    info!(contact = %name, "birthday added");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Field Birthday with value {} was added to contact with name {}",
        raw, name
    ))))
}

/// Days from `today` until the contact's next birthday.
pub fn countdown(book: &AddressBook, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let record = find_record(book, name)?;
    let days = record.days_to_birthday_from(today)?;

    let text = match days {
        0 => format!("Today is the birthday of {}!", name),
        1 => format!("1 day until the birthday of {}", name),
        n => format!("{} days until the birthday of {}", n, name),
    };
    Ok(CmdResult::default()
        .with_days_to_birthday(days)
        .with_message(CmdMessage::info(text)))
}
