use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use tracing::{debug, info};

use super::helpers::{find_record, find_record_mut};

pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = find_record_mut(book, name)?;
    record.add_phone(phone)?;
    info!(contact = %name, "phone added");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Phone number {} was added to contact with name {}",
        phone, name
    ))))
}

pub fn change(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = find_record_mut(book, name)?;

    if !record.change_phone(old, new)? {
        debug!(contact = %name, old, "phone to change not found");
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning("Phone number does not exist")));
    }
    info!(contact = %name, "phone changed");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Phone number for contact with name {} was changed to {}",
        name, new
    ))))
}

pub fn delete(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = find_record_mut(book, name)?;

    if !record.delete_phone(phone) {
        debug!(contact = %name, phone, "phone to delete not found");
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning("Phone number does not exist")));
    }
    info!(contact = %name, "phone deleted");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "The phone {} of contact with name {} was deleted",
        phone, name
    ))))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = find_record(book, name)?;
    let result = CmdResult::default().with_phone_numbers(record.phone_values());

    if record.phones.is_empty() {
        return Ok(result.with_message(CmdMessage::info(format!(
            "Contact with name {} has no phone numbers",
            name
        ))));
    }
    Ok(result)
}
