use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use tracing::info;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .remove(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    info!(contact = %name, "contact removed");

    Ok(CmdResult::default()
        .with_listed_records(vec![record])
        .with_message(CmdMessage::success(format!(
            "The contact with name {} was removed",
            name
        ))))
}
